use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::Point;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// The segment as an `(x1, y1, x2, y2)` tuple.
    #[inline]
    pub fn to_tuple(&self) -> (S, S, S, S) {
        (self.from.x, self.from.y, self.to.x, self.to.y)
    }
}

impl<S: Scalar> Segment for LineSegment<S> {
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

#[test]
fn line_segment_sample() {
    let segment = LineSegment {
        from: Point::new(1.0f64, 1.0),
        to: Point::new(4.0, 5.0),
    };

    assert_eq!(segment.to_tuple(), (1.0, 1.0, 4.0, 5.0));
    assert_eq!(segment.sample(0.5), Point::new(2.5, 3.0));
}

#[test]
fn flattened_line_segment() {
    let segment = LineSegment {
        from: Point::new(0.0f64, 0.0),
        to: Point::new(4.0, 0.0),
    };

    let mut count = 0;
    segment.for_each_flattened(5, &mut |s| {
        assert_eq!((s.to - s.from).length(), 1.0);
        count += 1;
    });

    assert_eq!(count, 4);
}
