//! Turns glyph definitions into drawing calls.
use crate::definition::{
    DefinitionPart, GlyphDefinition, OctantRect, PathSource, ScaleMode, ScaleParams, VectorStyle,
};
use crate::error::Result;
use crate::interpret::{execute, execute_text, PathSink};
use crate::table::lookup;
use crate::transport::from_text;
use crate::{PointF, RectF, SizeF};
use euclid::{point2, size2};

/// How a fill or stroke combines with what is already on the surface.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Ink {
    /// Add coverage
    Normal,
    /// Remove coverage, punching a hole
    Knockout,
}

/// A drawing surface: a path sink plus painting and clipping.
///
/// The current path is started with `begin_path`, built through the
/// [`PathSink`] methods, then consumed by `fill`, `stroke` or
/// `clip_to_path`.
pub trait GlyphCanvas: PathSink {
    fn begin_path(&mut self);
    fn fill(&mut self, ink: Ink);
    fn stroke(&mut self, width: f32, ink: Ink);
    fn fill_rect(&mut self, rect: RectF, ink: Ink);
    /// Restrict painting to the inside of the current path
    fn clip_to_path(&mut self);
    fn clip_to_rect(&mut self, rect: RectF);
    fn reset_clip(&mut self);
}

/// Where and how large a glyph is on the surface.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CellMetrics {
    /// Top left corner of the cell
    pub origin: PointF,
    pub cell_size: SizeF,
    /// Size of a typical character of the font, used by parts that
    /// scale with the character rather than the cell
    pub char_size: SizeF,
    /// Width of a single light line, in device pixels
    pub line_width: f32,
}

impl CellMetrics {
    pub fn new(cell_size: SizeF) -> Self {
        Self {
            origin: PointF::zero(),
            cell_size,
            char_size: cell_size,
            line_width: 1.,
        }
    }

    pub fn cell_rect(&self) -> RectF {
        RectF::new(self.origin, self.cell_size)
    }

    /// The rectangle a part's normalized coordinates map onto
    pub fn part_rect(&self, scale: ScaleMode) -> RectF {
        match scale {
            ScaleMode::Cell => self.cell_rect(),
            ScaleMode::Char => {
                let x = self.origin.x + (self.cell_size.width - self.char_size.width) / 2.;
                let y = self.origin.y + (self.cell_size.height - self.char_size.height) / 2.;
                RectF::new(point2(x, y), self.char_size)
            }
        }
    }
}

/// Paint every part of `definition` in order.
///
/// An error means the glyph is only partially drawn; the caller should
/// throw away the surface contents for this cell and fall back to the font.
pub fn paint(
    definition: &GlyphDefinition,
    canvas: &mut impl GlyphCanvas,
    metrics: &CellMetrics,
) -> Result<()> {
    let params = ScaleParams::for_cell(metrics.cell_size);
    for part in definition.parts() {
        paint_part(part, canvas, metrics, params)?;
    }
    Ok(())
}

/// Look up `c` and paint it.
/// Returns `false` when `c` has no custom glyph.
pub fn paint_char(c: char, canvas: &mut impl GlyphCanvas, metrics: &CellMetrics) -> Result<bool> {
    match lookup(c) {
        Some(definition) => {
            paint(&definition, canvas, metrics)?;
            Ok(true)
        }
        None => {
            log::debug!("no custom glyph for U+{:04X}", c as u32);
            Ok(false)
        }
    }
}

fn paint_part(
    part: &DefinitionPart,
    canvas: &mut impl GlyphCanvas,
    metrics: &CellMetrics,
    params: ScaleParams,
) -> Result<()> {
    let frame = metrics.part_rect(part.scale());
    match *part {
        DefinitionPart::PathFunction { path, stroke_width, .. } => {
            trace_path(path, canvas, frame, params)?;
            finish_path(canvas, stroke_width, metrics);
        }
        DefinitionPart::PathBinary {
            program,
            stroke_width,
            ..
        } => {
            let program = from_text(program)?;
            canvas.begin_path();
            execute(&program, canvas, frame.origin, frame.size)?;
            finish_path(canvas, stroke_width, metrics);
        }
        DefinitionPart::PathNegative { path, style, .. } => {
            canvas.fill_rect(frame, Ink::Normal);
            trace_path(path, canvas, frame, params)?;
            match style {
                VectorStyle::Fill => canvas.fill(Ink::Knockout),
                VectorStyle::Stroke => canvas.stroke(metrics.line_width, Ink::Knockout),
            }
        }
        DefinitionPart::VectorShape {
            path,
            style,
            left_padding,
            right_padding,
            ..
        } => {
            // Build the path before clipping; an error must not leave a clip set.
            trace_path(path, canvas, frame, params)?;
            let unit = metrics.line_width / 2.;
            let left = left_padding * unit;
            let right = right_padding * unit;
            canvas.clip_to_rect(RectF::new(
                point2(frame.min_x() - left, frame.min_y()),
                size2(frame.width() + left + right, frame.height()),
            ));
            match style {
                VectorStyle::Fill => canvas.fill(Ink::Normal),
                VectorStyle::Stroke => canvas.stroke(metrics.line_width, Ink::Normal),
            }
            canvas.reset_clip();
        }
        DefinitionPart::SolidOctants(rects) => {
            for rect in rects {
                canvas.fill_rect(octant_rect(frame, rect), Ink::Normal);
            }
        }
        DefinitionPart::TilePattern { pattern, clip } => {
            if let Some(clip) = clip {
                canvas.begin_path();
                execute_text(clip, canvas, frame.origin, frame.size)?;
                canvas.clip_to_path();
            }
            fill_pattern(canvas, frame, pattern);
            if clip.is_some() {
                canvas.reset_clip();
            }
        }
        DefinitionPart::DotGrid(dots) => fill_dots(canvas, frame, dots),
    }
    Ok(())
}

fn trace_path(
    path: PathSource,
    canvas: &mut impl GlyphCanvas,
    frame: RectF,
    params: ScaleParams,
) -> Result<()> {
    let text = path.resolve(params)?;
    canvas.begin_path();
    execute_text(&text, canvas, frame.origin, frame.size)
}

fn finish_path(canvas: &mut impl GlyphCanvas, stroke_width: Option<f32>, metrics: &CellMetrics) {
    match stroke_width {
        Some(width) => canvas.stroke(width * metrics.line_width, Ink::Normal),
        None => canvas.fill(Ink::Normal),
    }
}

fn octant_rect(frame: RectF, rect: &OctantRect) -> RectF {
    let x_eighth = frame.width() / 8.;
    let y_eighth = frame.height() / 8.;
    RectF::new(
        point2(
            frame.min_x() + rect.x() as f32 * x_eighth,
            frame.min_y() + rect.y() as f32 * y_eighth,
        ),
        size2(
            rect.width() as f32 * x_eighth,
            rect.height() as f32 * y_eighth,
        ),
    )
}

/// Repeat `pattern` with one entry per device pixel, merging horizontal
/// runs of set pixels into a single rectangle.
fn fill_pattern(canvas: &mut impl GlyphCanvas, frame: RectF, pattern: &[&[u8]]) {
    if pattern.is_empty() {
        return;
    }
    let columns = frame.width().ceil() as usize;
    let rows = frame.height().ceil() as usize;
    for y in 0..rows {
        let row = pattern[y % pattern.len()];
        if row.is_empty() {
            continue;
        }
        let top = frame.min_y() + y as f32;
        let height = (frame.max_y() - top).min(1.);
        let mut run_start = None;
        for x in 0..=columns {
            let on = x < columns && row[x % row.len()] != 0;
            match (on, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    let left = frame.min_x() + start as f32;
                    let right = (frame.min_x() + x as f32).min(frame.max_x());
                    canvas.fill_rect(
                        RectF::new(point2(left, top), size2(right - left, height)),
                        Ink::Normal,
                    );
                    run_start = None;
                }
                _ => {}
            }
        }
    }
}

/// Paint braille dots.
///
/// `dots` is a byte whose bits correspond to dots on a 2 by 4 grid.
/// The position of a dot for a bit position (1-indexed) is:
///
/// ```text
/// 1 4
/// 2 5
/// 3 6
/// 7 8
/// ```
///
/// Dots are squares rather than circles so that they stay crisp at
/// small sizes.
fn fill_dots(canvas: &mut impl GlyphCanvas, frame: RectF, dots: u8) {
    const BIT_MASK_AND_DOT_POSITION: [(u8, f32, f32); 8] = [
        (1 << 0, 0., 0.),
        (1 << 1, 0., 1.),
        (1 << 2, 0., 2.),
        (1 << 3, 1., 0.),
        (1 << 4, 1., 1.),
        (1 << 5, 1., 2.),
        (1 << 6, 0., 3.),
        (1 << 7, 1., 3.),
    ];

    let dot_area_width = frame.width() / 2.;
    let dot_area_height = frame.height() / 4.;
    let square_length = dot_area_width / 2.;
    let offset_x = dot_area_width / 2. - square_length / 2.;
    let offset_y = dot_area_height / 2. - square_length / 2.;

    for (bit_mask, column, row) in &BIT_MASK_AND_DOT_POSITION {
        if dots & bit_mask == 0 {
            continue;
        }
        canvas.fill_rect(
            RectF::new(
                point2(
                    frame.min_x() + column * dot_area_width + offset_x,
                    frame.min_y() + row * dot_area_height + offset_y,
                ),
                size2(square_length, square_length),
            ),
            Ink::Normal,
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::definition::PathGenerator;
    use crate::error::Error;
    use crate::recording::{DrawCall, RecordingCanvas};
    use k9::assert_equal as assert_eq;

    fn metrics() -> CellMetrics {
        CellMetrics::new(size2(8., 16.))
    }

    fn record(definition: GlyphDefinition, metrics: &CellMetrics) -> Vec<DrawCall> {
        let mut canvas = RecordingCanvas::default();
        paint(&definition, &mut canvas, metrics).unwrap();
        canvas.into_calls()
    }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> RectF {
        RectF::new(point2(x, y), size2(w, h))
    }

    const CROSS: DefinitionPart = DefinitionPart::PathFunction {
        path: PathSource::Literal("M0,.5 L1,.5 M.5,0 L.5,1"),
        stroke_width: Some(1.0),
        scale: ScaleMode::Cell,
    };
    const HALF: DefinitionPart = DefinitionPart::SolidOctants(&[OctantRect(0, 0, 8, 4)]);

    #[test]
    fn layers_are_independent() {
        let m = metrics();
        let both = record(GlyphDefinition::Layered(&[CROSS, HALF]), &m);
        let cross = record(GlyphDefinition::Single(CROSS), &m);
        let half = record(GlyphDefinition::Single(HALF), &m);

        let mut expected = cross.clone();
        expected.extend(half.clone());
        assert_eq!(both, expected);

        let reversed = record(GlyphDefinition::Layered(&[HALF, CROSS]), &m);
        let mut expected = half;
        expected.extend(cross);
        assert_eq!(reversed, expected);
    }

    #[test]
    fn stroke_width_scales_with_line_width() {
        let mut m = metrics();
        m.line_width = 2.;
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::PathFunction {
                path: PathSource::Literal("M0,0 L1,1"),
                stroke_width: Some(3.0),
                scale: ScaleMode::Cell,
            }),
            &m,
        );
        assert_eq!(
            calls.last(),
            Some(&DrawCall::Stroke {
                width: 6.,
                ink: Ink::Normal
            })
        );

        let calls = record(
            GlyphDefinition::Single(DefinitionPart::PathFunction {
                path: PathSource::Generated(PathGenerator::Sextant(1)),
                stroke_width: None,
                scale: ScaleMode::Cell,
            }),
            &m,
        );
        assert_eq!(calls.first(), Some(&DrawCall::BeginPath));
        assert_eq!(calls.last(), Some(&DrawCall::Fill(Ink::Normal)));
    }

    #[test]
    fn binary_matches_text() {
        let m = metrics();
        let text = record(
            GlyphDefinition::Single(DefinitionPart::PathFunction {
                path: PathSource::Literal("M1,.5 L.85,.5"),
                stroke_width: Some(1.0),
                scale: ScaleMode::Cell,
            }),
            &m,
        );
        let binary = record(
            GlyphDefinition::Single(DefinitionPart::PathBinary {
                program: "AP+AAdmA",
                stroke_width: Some(1.0),
                scale: ScaleMode::Cell,
            }),
            &m,
        );
        assert_eq!(text, binary);
    }

    #[test]
    fn octants() {
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::SolidOctants(&[
                OctantRect(0, 4, 8, 4),
                OctantRect(7, 0, 1, 8),
            ])),
            &metrics(),
        );
        assert_eq!(
            calls,
            vec![
                DrawCall::FillRect {
                    rect: rect(0., 8., 8., 8.),
                    ink: Ink::Normal
                },
                DrawCall::FillRect {
                    rect: rect(7., 0., 1., 16.),
                    ink: Ink::Normal
                },
            ]
        );
    }

    #[test]
    fn negative_knocks_out() {
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::PathNegative {
                path: PathSource::Literal("M0,0 L1,0 L1,1 Z"),
                style: VectorStyle::Fill,
                scale: ScaleMode::Cell,
            }),
            &metrics(),
        );
        assert_eq!(
            calls.first(),
            Some(&DrawCall::FillRect {
                rect: rect(0., 0., 8., 16.),
                ink: Ink::Normal
            })
        );
        assert_eq!(calls.last(), Some(&DrawCall::Fill(Ink::Knockout)));
    }

    #[test]
    fn char_scale_is_centered() {
        let mut m = metrics();
        m.origin = point2(100., 200.);
        m.cell_size = size2(8., 20.);
        m.char_size = size2(8., 16.);
        assert_eq!(m.part_rect(ScaleMode::Char), rect(100., 202., 8., 16.));
        assert_eq!(m.part_rect(ScaleMode::Cell), rect(100., 200., 8., 20.));

        let calls = record(
            GlyphDefinition::Single(DefinitionPart::PathNegative {
                path: PathSource::Literal("M0,0 L1,1"),
                style: VectorStyle::Stroke,
                scale: ScaleMode::Char,
            }),
            &m,
        );
        assert_eq!(calls[2], DrawCall::MoveTo(point2(100., 202.)));
        assert_eq!(calls[3], DrawCall::LineTo(point2(108., 218.)));
    }

    #[test]
    fn char_scaled_program() {
        let mut m = metrics();
        m.origin = point2(100., 200.);
        m.cell_size = size2(8., 20.);
        m.char_size = size2(8., 16.);
        let part = DefinitionPart::PathBinary {
            // M0,0 L1,1
            program: "AAAAAf//",
            stroke_width: None,
            scale: ScaleMode::Char,
        };
        assert_eq!(part.scale(), ScaleMode::Char);
        assert_eq!(
            record(GlyphDefinition::Single(part), &m),
            vec![
                DrawCall::BeginPath,
                DrawCall::MoveTo(point2(100., 202.)),
                DrawCall::LineTo(point2(108., 218.)),
                DrawCall::Fill(Ink::Normal),
            ]
        );
    }

    #[test]
    fn vector_shape_padding() {
        let mut m = metrics();
        m.line_width = 2.;
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::VectorShape {
                path: PathSource::Literal("M0,0 L1,.5 L0,1"),
                style: VectorStyle::Fill,
                left_padding: 1.,
                right_padding: 2.,
                scale: ScaleMode::Cell,
            }),
            &m,
        );
        assert_eq!(calls[0], DrawCall::BeginPath);
        assert!(calls.contains(&DrawCall::ClipToRect(rect(-1., 0., 11., 16.))));
        assert_eq!(calls.last(), Some(&DrawCall::ResetClip));
    }

    #[test]
    fn no_clip_left_behind_on_error() {
        for part in [
            DefinitionPart::VectorShape {
                path: PathSource::Literal("M0,0 L1"),
                style: VectorStyle::Fill,
                left_padding: 1.,
                right_padding: 1.,
                scale: ScaleMode::Cell,
            },
            DefinitionPart::TilePattern {
                pattern: &[&[1]],
                clip: Some("M0,0 L1"),
            },
        ] {
            let mut canvas = RecordingCanvas::default();
            assert!(paint(&GlyphDefinition::Single(part), &mut canvas, &metrics()).is_err());
            let clips = canvas
                .calls()
                .iter()
                .filter(|call| matches!(call, DrawCall::ClipToRect(_) | DrawCall::ClipToPath))
                .count();
            let resets = canvas
                .calls()
                .iter()
                .filter(|call| **call == DrawCall::ResetClip)
                .count();
            assert_eq!(clips, resets, "{:?}", part);
        }
    }

    #[test]
    fn tile_pattern_runs() {
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::TilePattern {
                pattern: &[&[1, 1], &[1, 0]],
                clip: None,
            }),
            &CellMetrics::new(size2(4., 2.)),
        );
        assert_eq!(
            calls,
            vec![
                DrawCall::FillRect {
                    rect: rect(0., 0., 4., 1.),
                    ink: Ink::Normal
                },
                DrawCall::FillRect {
                    rect: rect(0., 1., 1., 1.),
                    ink: Ink::Normal
                },
                DrawCall::FillRect {
                    rect: rect(2., 1., 1., 1.),
                    ink: Ink::Normal
                },
            ]
        );
    }

    #[test]
    fn tile_pattern_clip() {
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::TilePattern {
                pattern: &[&[1]],
                clip: Some("M0,0 L.5,0 L.5,1 L0,1 Z"),
            }),
            &CellMetrics::new(size2(2., 1.)),
        );
        assert_eq!(calls[0], DrawCall::BeginPath);
        assert!(calls.contains(&DrawCall::ClipToPath));
        assert_eq!(calls.last(), Some(&DrawCall::ResetClip));
    }

    #[test]
    fn braille_dots() {
        // dots 1 and 8
        let calls = record(
            GlyphDefinition::Single(DefinitionPart::DotGrid(0b1000_0001)),
            &CellMetrics::new(size2(8., 16.)),
        );
        assert_eq!(
            calls,
            vec![
                DrawCall::FillRect {
                    rect: rect(1., 1., 2., 2.),
                    ink: Ink::Normal
                },
                DrawCall::FillRect {
                    rect: rect(5., 13., 2., 2.),
                    ink: Ink::Normal
                },
            ]
        );
    }

    #[test]
    fn errors_propagate() {
        let mut canvas = RecordingCanvas::default();
        let err = paint(
            &GlyphDefinition::Layered(&[
                HALF,
                DefinitionPart::PathBinary {
                    program: "not base64!",
                    stroke_width: None,
                    scale: ScaleMode::Cell,
                },
            ]),
            &mut canvas,
            &metrics(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TransportDecode(_)));
    }

    #[test]
    fn unknown_chars_fall_back() {
        let mut canvas = RecordingCanvas::default();
        assert_eq!(paint_char('a', &mut canvas, &metrics()).unwrap(), false);
        assert!(canvas.calls().is_empty());
        assert_eq!(paint_char('\u{2500}', &mut canvas, &metrics()).unwrap(), true);
        assert!(!canvas.calls().is_empty());
    }
}
