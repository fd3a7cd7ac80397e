use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{LineSegment, Point, Vector};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Returns the curve translated by a vector.
    pub fn translate(&self, by: Vector<S>) -> Self {
        CubicBezierSegment {
            from: self.from + by,
            ctrl1: self.ctrl1 + by,
            ctrl2: self.ctrl2 + by,
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

impl<S: Scalar> Segment for CubicBezierSegment<S> {
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
fn cubic_sample() {
    let curve = CubicBezierSegment {
        from: Point::new(0.0f64, 0.0),
        ctrl1: Point::new(0.0, 8.0),
        ctrl2: Point::new(8.0, 8.0),
        to: Point::new(8.0, 0.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(0.5), Point::new(4.0, 6.0));
}

#[test]
fn cubic_flattened_sample_count() {
    let curve = CubicBezierSegment {
        from: Point::new(0.0f64, 0.0),
        ctrl1: Point::new(0.0, 8.0),
        ctrl2: Point::new(8.0, 8.0),
        to: Point::new(8.0, 0.0),
    };

    for n in 2..40 {
        let mut segments = Vec::new();
        curve.for_each_flattened(n, &mut |s| segments.push(*s));

        assert_eq!(segments.len(), n - 1);
        assert_eq!(segments[0].from, curve.from);
        assert_eq!(segments[n - 2].to, curve.to);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}

#[test]
fn cubic_two_samples_is_the_chord() {
    let curve = CubicBezierSegment {
        from: Point::new(-1.0f64, 2.5),
        ctrl1: Point::new(40.0, 1.0),
        ctrl2: Point::new(-33.0, 7.0),
        to: Point::new(0.7, 0.3),
    };

    let points: Vec<Point<f64>> = curve.flattened(2).collect();
    assert_eq!(points, &[curve.from, curve.to][..]);
}

#[test]
fn cubic_last_sample_is_exact() {
    let curve = CubicBezierSegment {
        from: Point::new(0.1f64, 0.2),
        ctrl1: Point::new(0.3, 10.7),
        ctrl2: Point::new(-5.1, 0.33),
        to: Point::new(0.7, 0.9),
    };

    let last = curve.flattened(17).last();
    assert_eq!(last, Some(curve.to));
}

