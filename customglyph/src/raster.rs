//! Rasterize glyphs into alpha masks with tiny-skia.
use crate::arc::EllipseArc;
use crate::config::GlyphConfig;
use crate::interpret::PathSink;
use crate::render::{paint, CellMetrics, GlyphCanvas, Ink};
use crate::table::lookup;
use crate::{PointF, RectF};
use anyhow::{anyhow, Context};
use tiny_skia::{
    BlendMode, Color, FillRule, Mask, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

/// A [`GlyphCanvas`] that paints white coverage into a pixmap.
pub struct SkiaCanvas {
    pixmap: Pixmap,
    path: PathBuilder,
    has_current_point: bool,
    clip: Option<Mask>,
    anti_alias: bool,
    stroke_scale: f32,
}

impl SkiaCanvas {
    pub fn new(width: u32, height: u32, config: &GlyphConfig) -> anyhow::Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("cannot make a {width}x{height} pixmap"))?;
        Ok(Self {
            pixmap,
            path: PathBuilder::new(),
            has_current_point: false,
            clip: None,
            anti_alias: config.anti_alias_custom_block_glyphs,
            stroke_scale: config.stroke_scale,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn paint(&self, ink: Ink, anti_alias: bool) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(Color::WHITE);
        paint.anti_alias = anti_alias;
        paint.force_hq_pipeline = true;
        if ink == Ink::Knockout {
            paint.blend_mode = BlendMode::DestinationOut;
        }
        paint
    }

    /// The current path. Painting doesn't consume it.
    fn current_path(&self) -> Option<Path> {
        self.path.clone().finish()
    }

    fn set_clip(&mut self, path: Option<Path>) {
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height());
        if let (Some(mask), Some(path)) = (mask.as_mut(), path) {
            mask.fill_path(&path, FillRule::Winding, self.anti_alias, Transform::identity());
        }
        self.clip = mask;
    }
}

impl PathSink for SkiaCanvas {
    fn move_to(&mut self, to: PointF) {
        self.path.move_to(to.x, to.y);
        self.has_current_point = true;
    }

    fn line_to(&mut self, to: PointF) {
        if self.has_current_point {
            self.path.line_to(to.x, to.y);
        } else {
            self.move_to(to);
        }
    }

    fn bezier_curve_to(&mut self, ctrl1: PointF, ctrl2: PointF, to: PointF) {
        if !self.has_current_point {
            self.move_to(ctrl1);
        }
        self.path
            .cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
    }

    fn quadratic_curve_to(&mut self, ctrl: PointF, to: PointF) {
        if !self.has_current_point {
            self.move_to(ctrl);
        }
        self.path.quad_to(ctrl.x, ctrl.y, to.x, to.y);
    }

    fn ellipse_arc(&mut self, arc: EllipseArc) {
        self.line_to(arc.start_point());
        for segment in arc.to_cubics() {
            self.path.cubic_to(
                segment.ctrl1.x,
                segment.ctrl1.y,
                segment.ctrl2.x,
                segment.ctrl2.y,
                segment.to.x,
                segment.to.y,
            );
        }
    }

    fn close_path(&mut self) {
        self.path.close();
    }
}

impl GlyphCanvas for SkiaCanvas {
    fn begin_path(&mut self) {
        self.path.clear();
        self.has_current_point = false;
    }

    fn fill(&mut self, ink: Ink) {
        if let Some(path) = self.current_path() {
            let paint = self.paint(ink, self.anti_alias);
            self.pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                self.clip.as_ref(),
            );
        }
    }

    fn stroke(&mut self, width: f32, ink: Ink) {
        if let Some(path) = self.current_path() {
            let paint = self.paint(ink, self.anti_alias);
            let stroke = Stroke {
                width: width * self.stroke_scale,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint,
                &stroke,
                Transform::identity(),
                self.clip.as_ref(),
            );
        }
    }

    fn fill_rect(&mut self, rect: RectF, ink: Ink) {
        // Never anti-aliased
        if let Some(rect) =
            tiny_skia::Rect::from_xywh(rect.min_x(), rect.min_y(), rect.width(), rect.height())
        {
            let paint = self.paint(ink, false);
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), self.clip.as_ref());
        }
    }

    fn clip_to_path(&mut self) {
        let path = self.current_path();
        self.set_clip(path);
    }

    fn clip_to_rect(&mut self, rect: RectF) {
        let path =
            tiny_skia::Rect::from_xywh(rect.min_x(), rect.min_y(), rect.width(), rect.height())
                .map(PathBuilder::from_rect);
        self.set_clip(path);
    }

    fn reset_clip(&mut self) {
        self.clip = None;
    }
}

/// Render `c` into a new pixmap the size of one cell.
///
/// Returns `Ok(None)` when custom glyphs are turned off or `c` doesn't
/// have one; the caller should then use the font.
pub fn rasterize(
    c: char,
    metrics: &CellMetrics,
    config: &GlyphConfig,
) -> anyhow::Result<Option<Pixmap>> {
    if !config.custom_block_glyphs {
        return Ok(None);
    }
    let definition = match lookup(c) {
        Some(definition) => definition,
        None => return Ok(None),
    };

    let metrics = CellMetrics {
        origin: PointF::zero(),
        ..*metrics
    };
    let width = metrics.cell_size.width.ceil() as u32;
    let height = metrics.cell_size.height.ceil() as u32;
    log::trace!(
        "rasterize U+{:04X} into {}x{} with line width {}",
        c as u32,
        width,
        height,
        metrics.line_width
    );

    let mut canvas = SkiaCanvas::new(width, height, config)?;
    if let Err(err) = paint(&definition, &mut canvas, &metrics) {
        log::error!("custom glyph U+{:04X} failed: {:#}", c as u32, err);
        return Err(err).with_context(|| format!("painting custom glyph U+{:04X}", c as u32));
    }
    Ok(Some(canvas.into_pixmap()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::definition::{DefinitionPart, GlyphDefinition, PathSource, ScaleMode, VectorStyle};
    use euclid::size2;
    use k9::assert_equal as assert_eq;

    fn init() {
        let _ = env_logger::Builder::new().is_test(true).try_init();
    }

    fn alpha(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    fn cell() -> CellMetrics {
        CellMetrics::new(size2(8., 16.))
    }

    #[test]
    fn full_block() {
        init();
        let pixmap = rasterize('█', &cell(), &GlyphConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (8, 16));
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }

    #[test]
    fn upper_half_block() {
        init();
        let pixmap = rasterize('▀', &cell(), &GlyphConfig::default())
            .unwrap()
            .unwrap();
        for y in 0..16 {
            let expected = if y < 8 { 255 } else { 0 };
            assert_eq!(alpha(&pixmap, 3, y), expected, "row {}", y);
        }
    }

    #[test]
    fn horizontal_line() {
        init();
        let mut metrics = cell();
        metrics.line_width = 2.;
        let pixmap = rasterize('─', &metrics, &GlyphConfig::default())
            .unwrap()
            .unwrap();
        assert!(alpha(&pixmap, 4, 8) > 200);
        assert!(alpha(&pixmap, 4, 7) > 200);
        assert_eq!(alpha(&pixmap, 4, 2), 0);
        assert_eq!(alpha(&pixmap, 4, 13), 0);
    }

    #[test]
    fn stroke_scale_thickens_lines() {
        init();
        let config = GlyphConfig {
            stroke_scale: 4.,
            ..GlyphConfig::default()
        };
        let thin = rasterize('│', &cell(), &GlyphConfig::default())
            .unwrap()
            .unwrap();
        let thick = rasterize('│', &cell(), &config).unwrap().unwrap();
        assert_eq!(alpha(&thin, 1, 8), 0);
        assert!(alpha(&thick, 3, 8) > 200);
    }

    #[test]
    fn knockout_removes_ink() {
        init();
        let definition = GlyphDefinition::Single(DefinitionPart::PathNegative {
            path: PathSource::Literal("M0,0 L.5,0 L.5,1 L0,1 Z"),
            style: VectorStyle::Fill,
            scale: ScaleMode::Cell,
        });
        let mut canvas = SkiaCanvas::new(8, 16, &GlyphConfig::default()).unwrap();
        paint(&definition, &mut canvas, &cell()).unwrap();
        let pixmap = canvas.into_pixmap();
        assert_eq!(alpha(&pixmap, 1, 8), 0);
        assert_eq!(alpha(&pixmap, 6, 8), 255);
    }

    #[test]
    fn clipped_shade() {
        init();
        // LEFT HALF MEDIUM SHADE
        let pixmap = rasterize('\u{1fb8c}', &cell(), &GlyphConfig::default())
            .unwrap()
            .unwrap();
        assert!(alpha(&pixmap, 0, 0) > 200);
        assert_eq!(alpha(&pixmap, 1, 0), 0);
        assert!(alpha(&pixmap, 1, 1) > 200);
        for x in 5..8 {
            for y in 0..16 {
                assert_eq!(alpha(&pixmap, x, y), 0);
            }
        }
    }

    #[test]
    fn not_drawn() {
        init();
        assert!(rasterize('a', &cell(), &GlyphConfig::default())
            .unwrap()
            .is_none());
        let disabled = GlyphConfig {
            custom_block_glyphs: false,
            ..GlyphConfig::default()
        };
        assert!(rasterize('█', &cell(), &disabled).unwrap().is_none());
    }

    #[test]
    fn empty_cell_is_an_error() {
        init();
        let metrics = CellMetrics::new(size2(0., 0.));
        assert!(rasterize('█', &metrics, &GlyphConfig::default()).is_err());
    }
}
