//! Replays binary path programs against a drawing surface.
use crate::arc::{ArcSegment, EllipseArc};
use crate::codec::{encode_path, instructions, Opcode};
use crate::error::Result;
use crate::quantize::decode_byte;
use crate::{PointF, SizeF};

/// The path building half of a drawing surface.
/// All coordinates are in device space.
pub trait PathSink {
    fn move_to(&mut self, to: PointF);
    fn line_to(&mut self, to: PointF);
    fn bezier_curve_to(&mut self, ctrl1: PointF, ctrl2: PointF, to: PointF);
    fn quadratic_curve_to(&mut self, ctrl: PointF, to: PointF);
    fn ellipse_arc(&mut self, arc: EllipseArc);
    fn close_path(&mut self);
}

/// Pen state for a single execution. It never outlives the call to
/// [`execute`] so nothing leaks from one glyph into the next.
struct Cursor {
    last: PointF,
    /// Last control point of a C, Q or T; reflected by T
    last_control: Option<PointF>,
}

struct Frame {
    origin: PointF,
    size: SizeF,
}

impl Frame {
    fn x(&self, byte: u8) -> f32 {
        self.origin.x + decode_byte(byte) * self.size.width
    }

    fn y(&self, byte: u8) -> f32 {
        self.origin.y + decode_byte(byte) * self.size.height
    }

    fn point(&self, x: u8, y: u8) -> PointF {
        PointF::new(self.x(x), self.y(y))
    }
}

/// Execute `program`, mapping normalized coordinates into the rectangle at
/// `origin` with dimensions `cell_size`.
///
/// On error the sink may already have received part of the path; callers
/// should discard it.
pub fn execute(
    program: &[u8],
    sink: &mut impl PathSink,
    origin: PointF,
    cell_size: SizeF,
) -> Result<()> {
    let frame = Frame {
        origin,
        size: cell_size,
    };
    let mut cursor = Cursor {
        last: origin,
        last_control: None,
    };

    for instruction in instructions(program) {
        let instruction = instruction?;
        let c = instruction.coords();
        match instruction.opcode() {
            Opcode::MoveTo => {
                let to = frame.point(c[0], c[1]);
                sink.move_to(to);
                cursor.last = to;
            }
            Opcode::LineTo => {
                let to = frame.point(c[0], c[1]);
                sink.line_to(to);
                cursor.last = to;
            }
            Opcode::HorizontalTo => {
                cursor.last.x = frame.x(c[0]);
                sink.line_to(cursor.last);
            }
            Opcode::VerticalTo => {
                cursor.last.y = frame.y(c[0]);
                sink.line_to(cursor.last);
            }
            Opcode::CubicTo => {
                let ctrl1 = frame.point(c[0], c[1]);
                let ctrl2 = frame.point(c[2], c[3]);
                let to = frame.point(c[4], c[5]);
                sink.bezier_curve_to(ctrl1, ctrl2, to);
                cursor.last_control = Some(ctrl2);
                cursor.last = to;
            }
            Opcode::QuadTo => {
                let ctrl = frame.point(c[0], c[1]);
                let to = frame.point(c[2], c[3]);
                sink.quadratic_curve_to(ctrl, to);
                cursor.last_control = Some(ctrl);
                cursor.last = to;
            }
            Opcode::SmoothQuadTo => {
                let ctrl = match cursor.last_control {
                    Some(prior) => cursor.last + (cursor.last - prior),
                    None => cursor.last,
                };
                let to = frame.point(c[0], c[1]);
                sink.quadratic_curve_to(ctrl, to);
                cursor.last_control = Some(ctrl);
                cursor.last = to;
            }
            Opcode::ArcTo => {
                let radius_x = decode_byte(c[0]) * cell_size.width;
                let radius_y = decode_byte(c[1]) * cell_size.height;
                // c[2] is the x-axis rotation, which is not applied.
                // The flags are compared as raw bytes, so a flag written as
                // `1` in path text (quantized to 255) reads as false.
                let large_arc = c[3] == 1;
                let sweep = c[4] == 1;
                let to = frame.point(c[5], c[6]);
                match ArcSegment::resolve(cursor.last, to, radius_x, radius_y, large_arc, sweep) {
                    ArcSegment::Line(to) => sink.line_to(to),
                    ArcSegment::Ellipse(arc) => sink.ellipse_arc(arc),
                }
                cursor.last = to;
            }
            Opcode::Close => sink.close_path(),
            Opcode::SetFill | Opcode::SetStroke => {}
        }
    }

    Ok(())
}

/// Encode path text on the fly and execute it.
pub fn execute_text(
    text: &str,
    sink: &mut impl PathSink,
    origin: PointF,
    cell_size: SizeF,
) -> Result<()> {
    let program = encode_path(text)?;
    execute(&program, sink, origin, cell_size)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::{encode_program, Instruction};
    use crate::error::Error;
    use crate::recording::{DrawCall, RecordingCanvas};
    use k9::assert_equal as assert_eq;

    fn run(text: &str) -> Vec<DrawCall> {
        let mut canvas = RecordingCanvas::default();
        execute_text(
            text,
            &mut canvas,
            PointF::new(0., 0.),
            SizeF::new(255., 510.),
        )
        .unwrap();
        canvas.into_calls()
    }

    fn pt(x: f32, y: f32) -> PointF {
        PointF::new(x, y)
    }

    #[test]
    fn lines() {
        assert_eq!(
            run("M0,0 L1,1 H0 V0 Z"),
            vec![
                DrawCall::MoveTo(pt(0., 0.)),
                DrawCall::LineTo(pt(255., 510.)),
                DrawCall::LineTo(pt(0., 510.)),
                DrawCall::LineTo(pt(0., 0.)),
                DrawCall::ClosePath,
            ]
        );
    }

    #[test]
    fn origin_offset() {
        let mut canvas = RecordingCanvas::default();
        execute_text(
            "M0,0 L1,1",
            &mut canvas,
            pt(10., 20.),
            SizeF::new(255., 255.),
        )
        .unwrap();
        assert_eq!(
            canvas.into_calls(),
            vec![
                DrawCall::MoveTo(pt(10., 20.)),
                DrawCall::LineTo(pt(265., 275.)),
            ]
        );
    }

    #[test]
    fn curves() {
        assert_eq!(
            run("M0,0 C0,1,1,1,1,0 T0,0"),
            vec![
                DrawCall::MoveTo(pt(0., 0.)),
                DrawCall::BezierCurveTo {
                    ctrl1: pt(0., 510.),
                    ctrl2: pt(255., 510.),
                    to: pt(255., 0.),
                },
                // reflection of the second control point through (255, 0)
                DrawCall::QuadraticCurveTo {
                    ctrl: pt(255., -510.),
                    to: pt(0., 0.),
                },
            ]
        );
    }

    #[test]
    fn smooth_without_prior_curve() {
        assert_eq!(
            run("M0,1 T1,1"),
            vec![
                DrawCall::MoveTo(pt(0., 510.)),
                DrawCall::QuadraticCurveTo {
                    ctrl: pt(0., 510.),
                    to: pt(255., 510.),
                },
            ]
        );
    }

    #[test]
    fn degenerate_arc() {
        // a zero radius on either axis draws a straight line
        for path in ["M0,0 A0,.5,0,0,0,1,1", "M0,0 A.5,0,0,0,0,1,1"] {
            assert_eq!(
                run(path),
                vec![
                    DrawCall::MoveTo(pt(0., 0.)),
                    DrawCall::LineTo(pt(255., 510.)),
                ],
                "{}",
                path
            );
        }
    }

    #[test]
    fn arc_flags_compare_raw_bytes() {
        let from = Instruction::new(Opcode::MoveTo, &[0, 128]).unwrap();
        let text_flags = Instruction::new(Opcode::ArcTo, &[128, 64, 0, 255, 255, 255, 128]).unwrap();
        let raw_flags = Instruction::new(Opcode::ArcTo, &[128, 64, 0, 1, 1, 255, 128]).unwrap();

        let arc_of = |arc: Instruction| {
            let mut canvas = RecordingCanvas::default();
            execute(
                &encode_program(&[from, arc]),
                &mut canvas,
                pt(0., 0.),
                SizeF::new(255., 255.),
            )
            .unwrap();
            match canvas.into_calls().pop() {
                Some(DrawCall::EllipseArc(arc)) => arc,
                other => panic!("unexpected {other:?}"),
            }
        };

        // 255 is not 1: no sweep, drawn anticlockwise
        assert!(arc_of(text_flags).anticlockwise);
        assert!(!arc_of(raw_flags).anticlockwise);
    }

    #[test]
    fn paint_mode_opcodes_are_inert() {
        let program = encode_program(&[
            Instruction::set_stroke(),
            Instruction::new(Opcode::MoveTo, &[0, 0]).unwrap(),
            Instruction::set_fill(),
        ]);
        let mut canvas = RecordingCanvas::default();
        execute(&program, &mut canvas, pt(0., 0.), SizeF::new(1., 1.)).unwrap();
        assert_eq!(canvas.into_calls(), vec![DrawCall::MoveTo(pt(0., 0.))]);
    }

    #[test]
    fn truncated_program_stops() {
        let mut canvas = RecordingCanvas::default();
        let err = execute(
            &[0, 0, 0, 1, 255],
            &mut canvas,
            pt(0., 0.),
            SizeF::new(1., 1.),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Truncated { offset: 3, .. }));
        assert_eq!(canvas.into_calls(), vec![DrawCall::MoveTo(pt(0., 0.))]);
    }
}
