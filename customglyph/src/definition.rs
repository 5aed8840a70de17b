//! How to paint one character.
use crate::error::Result;
use crate::generators::{expand_template, segmented_digit, sextant};
use crate::SizeF;
use std::borrow::Cow;

/// The parts that make up a glyph. Parts are painted in order, later parts
/// on top of earlier ones, and never depend on one another.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum GlyphDefinition {
    Single(DefinitionPart),
    Layered(&'static [DefinitionPart]),
}

impl GlyphDefinition {
    pub fn parts(&self) -> &[DefinitionPart] {
        match self {
            Self::Single(part) => std::slice::from_ref(part),
            Self::Layered(parts) => parts,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ScaleMode {
    /// Stretch to the whole cell
    #[default]
    Cell,
    /// Centered in the cell, sized from the font's character metrics
    Char,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VectorStyle {
    Fill,
    Stroke,
}

/// An axis aligned rectangle on the 8x8 grid of a cell, in eighths.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct OctantRect(pub u8, pub u8, pub u8, pub u8);

impl OctantRect {
    pub fn x(&self) -> u8 {
        self.0
    }
    pub fn y(&self) -> u8 {
        self.1
    }
    pub fn width(&self) -> u8 {
        self.2
    }
    pub fn height(&self) -> u8 {
        self.3
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum DefinitionPart {
    /// Path text, either literal or computed when painted.
    /// `stroke_width` is in multiples of the line width; `None` fills.
    PathFunction {
        path: PathSource,
        stroke_width: Option<f32>,
        scale: ScaleMode,
    },
    /// A base64 encoded path program produced by the glyph compiler
    PathBinary {
        program: &'static str,
        stroke_width: Option<f32>,
        scale: ScaleMode,
    },
    /// Ink everywhere except the path
    PathNegative {
        path: PathSource,
        style: VectorStyle,
        scale: ScaleMode,
    },
    /// A path that may extend into the neighboring cells; the padding
    /// is how far, in half line widths, it is allowed to bleed on each side.
    VectorShape {
        path: PathSource,
        style: VectorStyle,
        left_padding: f32,
        right_padding: f32,
        scale: ScaleMode,
    },
    SolidOctants(&'static [OctantRect]),
    /// A 0/1 matrix repeated across the cell, one entry per pixel,
    /// optionally limited to the inside of `clip`.
    TilePattern {
        pattern: &'static [&'static [u8]],
        clip: Option<&'static str>,
    },
    /// Braille dots; bit N is dot N + 1
    DotGrid(u8),
}

impl DefinitionPart {
    pub fn scale(&self) -> ScaleMode {
        match self {
            Self::PathFunction { scale, .. }
            | Self::PathBinary { scale, .. }
            | Self::PathNegative { scale, .. }
            | Self::VectorShape { scale, .. } => *scale,
            Self::SolidOctants(_) | Self::TilePattern { .. } | Self::DotGrid(_) => ScaleMode::Cell,
        }
    }
}

/// Where the text of a path comes from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PathSource {
    Literal(&'static str),
    /// Path text with placeholders that depend on the cell's aspect ratio;
    /// see [`expand_template`].
    Scaled(&'static str),
    Generated(PathGenerator),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PathGenerator {
    Sextant(u8),
    SegmentedDigit(u8),
}

impl PathSource {
    pub fn resolve(&self, params: ScaleParams) -> Result<Cow<'static, str>> {
        Ok(match self {
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Scaled(template) => Cow::Owned(expand_template(template, params)?),
            Self::Generated(PathGenerator::Sextant(pattern)) => Cow::Owned(sextant(*pattern)),
            Self::Generated(PathGenerator::SegmentedDigit(pattern)) => {
                Cow::Owned(segmented_digit(*pattern))
            }
        })
    }
}

/// Offsets of the rails of a double line from the center of the cell.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScaleParams {
    pub xp: f32,
    pub yp: f32,
}

impl ScaleParams {
    pub const DOUBLE_LINE_OFFSET: f32 = 0.15;

    /// The vertical offset is corrected for the aspect ratio so that both
    /// rail pairs are the same distance apart on screen.
    pub fn for_cell(cell_size: SizeF) -> Self {
        let yp = if cell_size.height > 0. {
            Self::DOUBLE_LINE_OFFSET * (cell_size.width / cell_size.height)
        } else {
            Self::DOUBLE_LINE_OFFSET
        };
        Self {
            xp: Self::DOUBLE_LINE_OFFSET,
            yp,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn parts_in_order() {
        const LAYERS: &[DefinitionPart] = &[
            DefinitionPart::DotGrid(1),
            DefinitionPart::SolidOctants(&[OctantRect(0, 0, 8, 4)]),
        ];
        let layered = GlyphDefinition::Layered(LAYERS);
        assert_eq!(layered.parts().len(), 2);
        assert_eq!(layered.parts()[0], DefinitionPart::DotGrid(1));

        let single = GlyphDefinition::Single(DefinitionPart::DotGrid(3));
        assert_eq!(single.parts(), &[DefinitionPart::DotGrid(3)][..]);
    }

    #[test]
    fn scale_params() {
        let params = ScaleParams::for_cell(SizeF::new(8., 16.));
        assert_eq!(params.xp, 0.15);
        assert!((params.yp - 0.075).abs() < 1e-6);

        let square = ScaleParams::for_cell(SizeF::new(10., 10.));
        assert_eq!(square.yp, square.xp);
    }

    #[test]
    fn resolve_sources() {
        let params = ScaleParams::for_cell(SizeF::new(8., 16.));
        assert_eq!(
            PathSource::Literal("M0,0 L1,1").resolve(params).unwrap(),
            "M0,0 L1,1"
        );
        assert_eq!(
            PathSource::Generated(PathGenerator::Sextant(0b11))
                .resolve(params)
                .unwrap(),
            "M0,0 L1,0 L1,0.375 L0,0.375 Z"
        );
        assert!(PathSource::Scaled("M{nope},0").resolve(params).is_err());
    }
}
