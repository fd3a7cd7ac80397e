use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{LineSegment, Point, Vector};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Returns the curve translated by a vector.
    pub fn translate(&self, by: Vector<S>) -> Self {
        QuadraticBezierSegment {
            from: self.from + by,
            ctrl: self.ctrl + by,
            to: self.to + by,
        }
    }

    /// Approximates the curve with `sample_count - 1` line segments, invoking a
    /// callback for each of them.
    pub fn for_each_flattened<F>(&self, sample_count: usize, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        Segment::for_each_flattened(self, sample_count, &mut |s| callback(s));
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    type Scalar = S;
    fn from(&self) -> Point<S> {
        self.from
    }
    fn to(&self) -> Point<S> {
        self.to
    }
    fn sample(&self, t: S) -> Point<S> {
        self.sample(t)
    }
}

#[cfg(test)]
use std::vec::Vec;

#[test]
fn quadratic_sample_midpoint() {
    let curve = QuadraticBezierSegment {
        from: Point::new(0.0f64, 0.0),
        ctrl: Point::new(5.0, 10.0),
        to: Point::new(10.0, 0.0),
    };

    assert_eq!(curve.sample(0.5), Point::new(5.0, 5.0));

    let points: Vec<Point<f64>> = curve.flattened(3).collect();
    assert_eq!(
        points,
        &[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)][..]
    );
}

#[test]
fn quadratic_two_samples_is_the_chord() {
    let curve = QuadraticBezierSegment {
        from: Point::new(1.0f64, 2.0),
        ctrl: Point::new(30.0, -7.0),
        to: Point::new(4.0, 8.0),
    };

    let mut segments = Vec::new();
    curve.for_each_flattened(2, &mut |s| segments.push(*s));

    assert_eq!(
        segments,
        &[LineSegment {
            from: curve.from,
            to: curve.to,
        }][..]
    );
}

#[test]
fn quadratic_last_sample_is_exact() {
    let curve = QuadraticBezierSegment {
        from: Point::new(0.1f64, 0.7),
        ctrl: Point::new(3.3, 9.1),
        to: Point::new(0.3, 0.9),
    };

    for n in 2..50 {
        let points: Vec<Point<f64>> = curve.flattened(n).collect();
        assert_eq!(points.len(), n);
        assert_eq!(points[0], curve.from);
        assert_eq!(points[n - 1], curve.to);
    }
}

#[test]
fn degenerate_quadratic_collapses() {
    let p = Point::new(3.0f64, 3.0);
    let curve = QuadraticBezierSegment {
        from: p,
        ctrl: p,
        to: p,
    };

    let mut count = 0;
    curve.for_each_flattened(8, &mut |s| {
        assert!((s.from - p).length() < 1e-12);
        assert!((s.to - p).length() < 1e-12);
        count += 1;
    });
    assert_eq!(count, 7);
}
