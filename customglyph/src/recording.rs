//! A drawing surface that just remembers what it was asked to do.
use crate::arc::EllipseArc;
use crate::interpret::PathSink;
use crate::render::{GlyphCanvas, Ink};
use crate::{PointF, RectF};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    MoveTo(PointF),
    LineTo(PointF),
    BezierCurveTo {
        ctrl1: PointF,
        ctrl2: PointF,
        to: PointF,
    },
    QuadraticCurveTo {
        ctrl: PointF,
        to: PointF,
    },
    EllipseArc(EllipseArc),
    ClosePath,
    BeginPath,
    Fill(Ink),
    Stroke {
        width: f32,
        ink: Ink,
    },
    FillRect {
        rect: RectF,
        ink: Ink,
    },
    ClipToPath,
    ClipToRect(RectF),
    ResetClip,
}

/// Records every call so that it can be inspected, or replayed into
/// another surface with [`RecordingCanvas::replay`].
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn replay(&self, target: &mut impl GlyphCanvas) {
        for call in &self.calls {
            match *call {
                DrawCall::MoveTo(to) => target.move_to(to),
                DrawCall::LineTo(to) => target.line_to(to),
                DrawCall::BezierCurveTo { ctrl1, ctrl2, to } => {
                    target.bezier_curve_to(ctrl1, ctrl2, to)
                }
                DrawCall::QuadraticCurveTo { ctrl, to } => target.quadratic_curve_to(ctrl, to),
                DrawCall::EllipseArc(arc) => target.ellipse_arc(arc),
                DrawCall::ClosePath => target.close_path(),
                DrawCall::BeginPath => target.begin_path(),
                DrawCall::Fill(ink) => target.fill(ink),
                DrawCall::Stroke { width, ink } => target.stroke(width, ink),
                DrawCall::FillRect { rect, ink } => target.fill_rect(rect, ink),
                DrawCall::ClipToPath => target.clip_to_path(),
                DrawCall::ClipToRect(rect) => target.clip_to_rect(rect),
                DrawCall::ResetClip => target.reset_clip(),
            }
        }
    }
}

impl PathSink for RecordingCanvas {
    fn move_to(&mut self, to: PointF) {
        self.calls.push(DrawCall::MoveTo(to));
    }

    fn line_to(&mut self, to: PointF) {
        self.calls.push(DrawCall::LineTo(to));
    }

    fn bezier_curve_to(&mut self, ctrl1: PointF, ctrl2: PointF, to: PointF) {
        self.calls.push(DrawCall::BezierCurveTo { ctrl1, ctrl2, to });
    }

    fn quadratic_curve_to(&mut self, ctrl: PointF, to: PointF) {
        self.calls.push(DrawCall::QuadraticCurveTo { ctrl, to });
    }

    fn ellipse_arc(&mut self, arc: EllipseArc) {
        self.calls.push(DrawCall::EllipseArc(arc));
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }
}

impl GlyphCanvas for RecordingCanvas {
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn fill(&mut self, ink: Ink) {
        self.calls.push(DrawCall::Fill(ink));
    }

    fn stroke(&mut self, width: f32, ink: Ink) {
        self.calls.push(DrawCall::Stroke { width, ink });
    }

    fn fill_rect(&mut self, rect: RectF, ink: Ink) {
        self.calls.push(DrawCall::FillRect { rect, ink });
    }

    fn clip_to_path(&mut self) {
        self.calls.push(DrawCall::ClipToPath);
    }

    fn clip_to_rect(&mut self, rect: RectF) {
        self.calls.push(DrawCall::ClipToRect(rect));
    }

    fn reset_clip(&mut self) {
        self.calls.push(DrawCall::ResetClip);
    }
}
