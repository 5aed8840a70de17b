//! SVG style elliptical arcs.
//!
//! Path programs describe arcs by their endpoints (`A rx,ry,rot,large,sweep,x,y`)
//! while drawing surfaces want a center and a pair of angles. This module does
//! the conversion, and for surfaces that lack an ellipse primitive, the
//! approximation of the resulting arc by cubic Bézier segments.
use crate::PointF;
use euclid::vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// An arc of an axis-aligned ellipse in center parameterization, with the
/// same meaning as the arguments of the canvas `ellipse()` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EllipseArc {
    pub center: PointF,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Always zero for arcs produced by the interpreter
    pub rotation: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anticlockwise: bool,
}

/// One cubic Bézier segment; the start point is implied by the previous
/// segment or by [`EllipseArc::start_point`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: PointF,
    pub ctrl2: PointF,
    pub to: PointF,
}

/// What an endpoint arc resolves to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArcSegment {
    /// Zero radius, or coincident endpoints: a straight line
    Line(PointF),
    Ellipse(EllipseArc),
}

impl ArcSegment {
    /// Convert an endpoint arc from `from` to `to` into center form.
    /// The x-axis rotation is not part of the conversion; arcs are always
    /// axis aligned.
    pub fn resolve(
        from: PointF,
        to: PointF,
        radius_x: f32,
        radius_y: f32,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        let mut rx = radius_x.abs();
        let mut ry = radius_y.abs();
        if rx == 0. || ry == 0. || from == to {
            return Self::Line(to);
        }

        let dx = (from.x - to.x) / 2.;
        let dy = (from.y - to.y) / 2.;

        // Grow radii that are too small to span the chord
        let d = (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry);
        if d > 1. {
            let scale = d.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let numerator = rx2 * ry2 - rx2 * dy * dy - ry2 * dx * dx;
        let denominator = rx2 * dy * dy + ry2 * dx * dx;
        let sq = (numerator / denominator).max(0.);
        let sign = if large_arc != sweep { 1. } else { -1. };
        let coef = sign * sq.sqrt();

        let cx1 = coef * (rx * dy / ry);
        let cy1 = coef * -(ry * dx / rx);
        let center = PointF::new(cx1 + (from.x + to.x) / 2., cy1 + (from.y + to.y) / 2.);

        let ux = (dx - cx1) / rx;
        let uy = (dy - cy1) / ry;
        let vx = (-dx - cx1) / rx;
        let vy = (-dy - cy1) / ry;

        let start_angle = uy.atan2(ux);
        let mut extent = vy.atan2(vx) - start_angle;
        if !sweep && extent > 0. {
            extent -= TAU;
        } else if sweep && extent < 0. {
            extent += TAU;
        }

        Self::Ellipse(EllipseArc {
            center,
            radius_x: rx,
            radius_y: ry,
            rotation: 0.,
            start_angle,
            end_angle: start_angle + extent,
            anticlockwise: !sweep,
        })
    }
}

impl EllipseArc {
    /// The signed angle actually swept, normalized the way canvas
    /// `ellipse()` treats its start/end/anticlockwise arguments.
    pub fn sweep_angle(&self) -> f32 {
        let delta = self.end_angle - self.start_angle;
        if self.anticlockwise {
            if delta <= -TAU {
                -TAU
            } else if delta > 0. {
                delta - TAU * (delta / TAU).ceil()
            } else {
                delta
            }
        } else if delta >= TAU {
            TAU
        } else if delta < 0. {
            delta.rem_euclid(TAU)
        } else {
            delta
        }
    }

    pub fn point_at(&self, angle: f32) -> PointF {
        let local = vec2(self.radius_x * angle.cos(), self.radius_y * angle.sin());
        self.center + self.rotate(local)
    }

    pub fn start_point(&self) -> PointF {
        self.point_at(self.start_angle)
    }

    fn tangent_at(&self, angle: f32) -> euclid::default::Vector2D<f32> {
        self.rotate(vec2(
            -self.radius_x * angle.sin(),
            self.radius_y * angle.cos(),
        ))
    }

    fn rotate(&self, v: euclid::default::Vector2D<f32>) -> euclid::default::Vector2D<f32> {
        if self.rotation == 0. {
            return v;
        }
        let (sin, cos) = self.rotation.sin_cos();
        vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    /// Approximate the arc with cubic Béziers, one per started quarter turn.
    pub fn to_cubics(&self) -> Vec<CubicSegment> {
        let sweep = self.sweep_angle();
        if sweep == 0. {
            return vec![];
        }
        // tolerate rounding so that an exact quarter turn is one segment
        let count = (sweep.abs() / FRAC_PI_2 - 1e-4).ceil().max(1.) as usize;
        let step = sweep / count as f32;
        let k = 4. / 3. * (step / 4.).tan();

        let mut segments = Vec::with_capacity(count);
        let mut angle = self.start_angle;
        for idx in 0..count {
            let next = if idx + 1 == count {
                self.start_angle + sweep
            } else {
                angle + step
            };
            let from = self.point_at(angle);
            let to = self.point_at(next);
            segments.push(CubicSegment {
                ctrl1: from + self.tangent_at(angle) * k,
                ctrl2: to - self.tangent_at(next) * k,
                to,
            });
            angle = next;
        }
        segments
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;
    use std::f32::consts::PI;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn close_pt(a: PointF, b: PointF) -> bool {
        close(a.x, b.x) && close(a.y, b.y)
    }

    #[test]
    fn degenerate() {
        let from = PointF::new(0., 0.);
        let to = PointF::new(10., 10.);
        assert_eq!(
            ArcSegment::resolve(from, to, 0., 5., false, true),
            ArcSegment::Line(to)
        );
        assert_eq!(
            ArcSegment::resolve(from, to, 5., 0., true, true),
            ArcSegment::Line(to)
        );
        assert_eq!(
            ArcSegment::resolve(to, to, 5., 5., true, true),
            ArcSegment::Line(to)
        );
    }

    #[test]
    fn half_circle() {
        // from the left to the right of a circle centered on (10, 10)
        let from = PointF::new(0., 10.);
        let to = PointF::new(20., 10.);
        let arc = match ArcSegment::resolve(from, to, 10., 10., false, true) {
            ArcSegment::Ellipse(arc) => arc,
            other => panic!("unexpected {other:?}"),
        };
        assert!(close_pt(arc.center, PointF::new(10., 10.)), "{arc:?}");
        assert!(close(arc.radius_x, 10.));
        assert!(close(arc.sweep_angle().abs(), PI));
        assert!(!arc.anticlockwise);
        assert!(close_pt(arc.start_point(), from));
        assert!(close_pt(arc.point_at(arc.end_angle), to));
    }

    #[test]
    fn radii_grow_to_fit() {
        let from = PointF::new(0., 0.);
        let to = PointF::new(40., 0.);
        let arc = match ArcSegment::resolve(from, to, 5., 5., false, false) {
            ArcSegment::Ellipse(arc) => arc,
            other => panic!("unexpected {other:?}"),
        };
        assert!(close(arc.radius_x, 20.));
        assert!(close(arc.radius_y, 20.));
        assert!(close_pt(arc.center, PointF::new(20., 0.)));
        assert!(arc.anticlockwise);
        assert!(arc.end_angle - arc.start_angle <= 0.);
    }

    #[test]
    fn sweep_follows_flag() {
        let from = PointF::new(10., 0.);
        let to = PointF::new(0., 10.);
        for &large in &[false, true] {
            for &sweep in &[false, true] {
                let arc = match ArcSegment::resolve(from, to, 10., 10., large, sweep) {
                    ArcSegment::Ellipse(arc) => arc,
                    other => panic!("unexpected {other:?}"),
                };
                let extent = arc.end_angle - arc.start_angle;
                if sweep {
                    assert!(extent >= 0.);
                } else {
                    assert!(extent <= 0.);
                }
                let expected = if large { 1.5 * PI } else { 0.5 * PI };
                assert!(close(extent.abs(), expected), "{large} {sweep} {extent}");
                assert!(close_pt(arc.point_at(arc.end_angle), to));
            }
        }
    }

    #[test]
    fn cubic_quarter() {
        let arc = EllipseArc {
            center: PointF::new(0., 0.),
            radius_x: 1.,
            radius_y: 1.,
            rotation: 0.,
            start_angle: 0.,
            end_angle: FRAC_PI_2,
            anticlockwise: false,
        };
        let cubics = arc.to_cubics();
        assert_eq!(cubics.len(), 1);
        let k = 0.5522848;
        assert!(close_pt(cubics[0].ctrl1, PointF::new(1., k)));
        assert!(close_pt(cubics[0].ctrl2, PointF::new(k, 1.)));
        assert!(close_pt(cubics[0].to, PointF::new(0., 1.)));
    }

    #[test]
    fn canvas_angle_rules() {
        let mut arc = EllipseArc {
            center: PointF::new(0., 0.),
            radius_x: 2.,
            radius_y: 1.,
            rotation: 0.,
            start_angle: 0.,
            end_angle: -FRAC_PI_2,
            anticlockwise: false,
        };
        // clockwise towards a smaller end angle goes the long way round
        assert!(close(arc.sweep_angle(), 1.5 * PI));
        assert_eq!(arc.to_cubics().len(), 3);

        arc.anticlockwise = true;
        assert!(close(arc.sweep_angle(), -FRAC_PI_2));

        arc.end_angle = FRAC_PI_2;
        assert!(close(arc.sweep_angle(), -1.5 * PI));

        arc.end_angle = 3. * TAU;
        arc.anticlockwise = false;
        assert!(close(arc.sweep_angle(), TAU));
        let cubics = arc.to_cubics();
        assert_eq!(cubics.len(), 4);
        assert!(close_pt(cubics[3].to, arc.start_point()));
    }
}
