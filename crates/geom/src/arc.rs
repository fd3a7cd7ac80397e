//! Elliptic arc related maths and tools.

use crate::scalar::{Float, Scalar};
use crate::segment::{for_each_line, Flattened, Segment};
use crate::{point, vector, Angle, LineSegment, Point, Vector};

/// An elliptic arc curve segment using the SVG's end-point notation.
///
/// See section F.6 of the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// An elliptic arc curve segment in center notation.
///
/// The radii are the ones actually used to draw the arc, which may be larger
/// than the radii of the [`SvgArc`] it was created from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radii: Vector<S>,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
    pub x_rotation: Angle<S>,
}

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

impl<S: Scalar> Arc<S> {
    /// Converts from the SVG end-point notation to the center notation.
    ///
    /// Radii that are too small to connect the endpoints are scaled up uniformly,
    /// negative radii are replaced by their absolute value.
    ///
    /// Arcs that `SvgArc::is_straight_line` considers straight have no center form:
    /// they produce an empty arc centered on `from` with null radii, which samples
    /// to `from` everywhere.
    pub fn from_svg_arc(arc: &SvgArc<S>) -> Arc<S> {
        debug_assert!(!arc.from.x.is_nan());
        debug_assert!(!arc.from.y.is_nan());
        debug_assert!(!arc.to.x.is_nan());
        debug_assert!(!arc.to.y.is_nan());
        debug_assert!(!arc.radii.x.is_nan());
        debug_assert!(!arc.radii.y.is_nan());
        debug_assert!(!arc.x_rotation.get().is_nan());

        if arc.is_straight_line() {
            return Arc {
                center: arc.from,
                radii: vector(S::ZERO, S::ZERO),
                start_angle: Angle::radians(S::ZERO),
                sweep_angle: Angle::radians(S::ZERO),
                x_rotation: arc.x_rotation,
            };
        }

        let mut rx = Float::abs(arc.radii.x);
        let mut ry = Float::abs(arc.radii.y);

        let xr = arc.x_rotation.get() % (S::TWO * S::PI());
        let cos_phi = Float::cos(xr);
        let sin_phi = Float::sin(xr);
        let hs_x = (arc.from.x + arc.to.x) / S::TWO;
        let hs_y = (arc.from.y + arc.to.y) / S::TWO;

        // F6.5.1, in units of the radii.
        let mut p = arc.normalized_half_delta();

        // F6.6.2
        let mut lambda = p.square_length();
        if lambda > S::ONE {
            let scale = Float::sqrt(lambda);
            rx *= scale;
            ry *= scale;
            p = p / scale;
            lambda = S::ONE;
        }

        // F6.5.2
        let sign_coe = if arc.flags.large_arc == arc.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        let coe = sign_coe * Float::sqrt(Float::abs((S::ONE - lambda) / lambda));

        let transformed_cx = coe * rx * p.y;
        let transformed_cy = -coe * ry * p.x;

        // F6.5.3
        let center = point(
            cos_phi * transformed_cx - sin_phi * transformed_cy + hs_x,
            sin_phi * transformed_cx + cos_phi * transformed_cy + hs_y,
        );

        // F6.5.5 and F6.5.6
        let a = vector(p.x - transformed_cx / rx, p.y - transformed_cy / ry);
        let b = vector(-p.x - transformed_cx / rx, -p.y - transformed_cy / ry);

        let start_angle = Float::atan2(a.y, a.x);
        let mut sweep_angle = Float::atan2(a.cross(b), a.dot(b));

        if arc.flags.sweep && sweep_angle < S::ZERO {
            sweep_angle += S::TWO * S::PI();
        } else if !arc.flags.sweep && sweep_angle > S::ZERO {
            sweep_angle -= S::TWO * S::PI();
        }

        Arc {
            center,
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(xr),
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let angle = self.get_angle(t);
        self.center + sample_ellipse(self.radii, self.x_rotation, angle).to_vector()
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    pub fn get_angle(&self, t: S) -> Angle<S> {
        self.start_angle + Angle::radians(self.sweep_angle.get() * t)
    }

    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }
}

impl<S: Scalar> SvgArc<S> {
    /// Converts this arc to the center notation.
    pub fn to_arc(&self) -> Arc<S> {
        Arc::from_svg_arc(self)
    }

    /// Per SVG spec, if either radius is zero the arc is a straight line segment
    /// between its endpoints, and if the endpoints coincide it is omitted.
    ///
    /// Arcs whose endpoints are too close to each other compared to the radii to
    /// have a usable center are straight lines too.
    pub fn is_straight_line(&self) -> bool {
        if Float::abs(self.radii.x) <= S::EPSILON
            || Float::abs(self.radii.y) <= S::EPSILON
            || self.from == self.to
        {
            return true;
        }

        let lambda = self.normalized_half_delta().square_length();

        lambda <= S::EPSILON * S::EPSILON || !Float::is_finite(lambda)
    }

    // Half of `from - to` in the frame of the ellipse, divided by the radii.
    fn normalized_half_delta(&self) -> Vector<S> {
        let xr = self.x_rotation.get() % (S::TWO * S::PI());
        let cos_phi = Float::cos(xr);
        let sin_phi = Float::sin(xr);
        let hd_x = (self.from.x - self.to.x) / S::TWO;
        let hd_y = (self.from.y - self.to.y) / S::TWO;

        vector(
            (cos_phi * hd_x + sin_phi * hd_y) / Float::abs(self.radii.x),
            (-sin_phi * hd_x + cos_phi * hd_y) / Float::abs(self.radii.y),
        )
    }

    /// The straight line between the arc's endpoints.
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Returns the arc translated by a vector.
    pub fn translate(&self, by: Vector<S>) -> Self {
        SvgArc {
            from: self.from + by,
            to: self.to + by,
            ..*self
        }
    }

    /// Returns `sample_count` points of the arc at uniformly spaced angles.
    ///
    /// The first and last points are exactly `from` and `to`.
    pub fn flattened(&self, sample_count: usize) -> Flattened<S, Arc<S>> {
        Flattened::with_endpoints(self.to_arc(), sample_count, self.from, self.to)
    }

    /// Approximates the arc with `sample_count - 1` line segments, invoking a
    /// callback for each of them.
    pub fn for_each_flattened<F>(&self, sample_count: usize, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        for_each_line(self.flattened(sample_count), &mut |s| callback(s));
    }
}

fn sample_ellipse<S: Scalar>(radii: Vector<S>, x_rotation: Angle<S>, angle: Angle<S>) -> Point<S> {
    let (sin_phi, cos_phi) = (Float::sin(x_rotation.get()), Float::cos(x_rotation.get()));
    let x = radii.x * Float::cos(angle.get());
    let y = radii.y * Float::sin(angle.get());

    point(cos_phi * x - sin_phi * y, sin_phi * x + cos_phi * y)
}

impl<S: Scalar> Segment for Arc<S> {
    type Scalar = S;
    fn from(&self) -> Point<S> {
        self.from()
    }
    fn to(&self) -> Point<S> {
        self.to()
    }
    fn sample(&self, t: S) -> Point<S> {
        self.sample(t)
    }
}

#[cfg(test)]
use std::vec::Vec;

#[cfg(test)]
fn approx_eq(a: Point<f64>, b: Point<f64>) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn quarter_circle() {
    let svg_arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(10.0, 10.0),
        radii: vector(10.0, 10.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let arc = svg_arc.to_arc();
    assert!(approx_eq(arc.center, point(0.0, 10.0)));
    assert!((arc.sweep_angle.get() - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
    assert!(approx_eq(arc.from(), svg_arc.from));
    assert!(approx_eq(arc.to(), svg_arc.to));

    let points: Vec<Point<f64>> = svg_arc.flattened(5).collect();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], svg_arc.from);
    assert_eq!(points[4], svg_arc.to);
    for p in &points {
        assert!(((*p - arc.center).length() - 10.0).abs() < 1e-9);
    }
}

#[test]
fn flags_select_the_center() {
    let arc = |large_arc, sweep| {
        SvgArc {
            from: point(0.0f64, 0.0),
            to: point(10.0, 10.0),
            radii: vector(10.0, 10.0),
            x_rotation: Angle::radians(0.0),
            flags: ArcFlags { large_arc, sweep },
        }
        .to_arc()
    };

    assert!(approx_eq(arc(false, true).center, point(0.0, 10.0)));
    assert!(approx_eq(arc(true, false).center, point(0.0, 10.0)));
    assert!(approx_eq(arc(false, false).center, point(10.0, 0.0)));
    assert!(approx_eq(arc(true, true).center, point(10.0, 0.0)));

    let small = arc(false, true).sweep_angle.get();
    let large = arc(true, true).sweep_angle.get();
    assert!(small > 0.0 && small < core::f64::consts::PI);
    assert!(large > core::f64::consts::PI);
    assert!(arc(false, false).sweep_angle.get() < 0.0);
}

#[test]
fn radii_too_small_are_scaled_up() {
    let svg_arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(3.0, 0.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let arc = svg_arc.to_arc();
    assert!(approx_eq(arc.center, point(1.5, 0.0)));
    assert!((arc.radii.x - 1.5).abs() < 1e-9);
    assert!((arc.radii.y - 1.5).abs() < 1e-9);
    assert!((arc.sweep_angle.get().abs() - core::f64::consts::PI).abs() < 1e-9);

    let mut count = 0;
    svg_arc.for_each_flattened(20, &mut |segment| {
        assert!(!segment.from.x.is_nan() && !segment.from.y.is_nan());
        assert!(!segment.to.x.is_nan() && !segment.to.y.is_nan());
        assert!(((segment.to - arc.center).length() - 1.5).abs() < 1e-9);
        count += 1;
    });
    assert_eq!(count, 19);
}

#[test]
fn rotated_ellipse() {
    let svg_arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(20.0, 5.0),
        radii: vector(30.0, 10.0),
        x_rotation: Angle::degrees(30.0),
        flags: ArcFlags {
            large_arc: true,
            sweep: false,
        },
    };

    let arc = svg_arc.to_arc();
    assert!(approx_eq(arc.from(), svg_arc.from));
    assert!(approx_eq(arc.to(), svg_arc.to));
    assert!(arc.sweep_angle.get() < -core::f64::consts::PI);
}

#[test]
fn negative_radii() {
    let positive = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
        radii: vector(8.0, 6.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };
    let negative = SvgArc {
        radii: vector(-8.0, -6.0),
        ..positive
    };

    assert_eq!(positive.to_arc(), negative.to_arc());
}

#[test]
fn degenerate_arcs() {
    let p = point(4.0f64, 2.0);
    let same_endpoints = SvgArc {
        from: p,
        to: p,
        radii: vector(5.0, 5.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };
    assert!(same_endpoints.is_straight_line());

    let arc = same_endpoints.to_arc();
    assert_eq!(arc.center, p);
    assert_eq!(arc.sample(0.5), p);

    let zero_radius = SvgArc {
        to: point(8.0, 2.0),
        radii: vector(0.0, 5.0),
        ..same_endpoints
    };
    assert!(zero_radius.is_straight_line());
    assert_eq!(zero_radius.baseline().to, point(8.0, 2.0));
}

#[test]
fn endpoints_close_to_each_other() {
    let arc = |to: Point<f64>, radius: f64| SvgArc {
        from: point(0.0f64, 0.0),
        to,
        radii: vector(radius, radius),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    // Too close for the center to be computed: straight lines.
    assert!(arc(point(1e-200, 0.0), 1.0).is_straight_line());
    assert!(arc(point(10.0, 0.0), 1e200).is_straight_line());

    let null_arc = arc(point(1e-200, 0.0), 1.0).to_arc();
    assert_eq!(null_arc.radii, vector(0.0, 0.0));

    // Close but still a proper arc.
    let small = arc(point(1e-6, 0.0), 1.0);
    assert!(!small.is_straight_line());

    let center = small.to_arc().center;
    assert!(approx_eq(center, point(5e-7, 1.0)));

    let mut count = 0;
    small.for_each_flattened(8, &mut |segment| {
        assert!(segment.to.x.is_finite() && segment.to.y.is_finite());
        assert!(((segment.to - center).length() - 1.0).abs() < 1e-9);
        count += 1;
    });
    assert_eq!(count, 7);
}
