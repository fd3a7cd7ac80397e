use crate::scalar::Scalar;
use crate::{LineSegment, Point};

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn to(&self) -> Point<Self::Scalar>;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Returns `sample_count` points evenly spaced in the curve's parameter space.
    ///
    /// The first and last points are exactly `from()` and `to()`.
    fn flattened(&self, sample_count: usize) -> Flattened<Self::Scalar, Self> {
        Flattened::new(*self, sample_count)
    }

    /// Approximates the curve with `sample_count - 1` line segments.
    fn for_each_flattened(
        &self,
        sample_count: usize,
        callback: &mut dyn FnMut(&LineSegment<Self::Scalar>),
    ) {
        for_each_line(self.flattened(sample_count), callback);
    }
}

/// An iterator over uniformly spaced samples of a curve.
///
/// Intermediate points are evaluated with the curve equation, the first and last
/// ones are the exact endpoints the iterator was created with.
#[derive(Clone, Debug)]
pub struct Flattened<S, T> {
    curve: T,
    from: Point<S>,
    to: Point<S>,
    sample_count: usize,
    current: usize,
}

impl<S: Scalar, T: Segment<Scalar = S>> Flattened<S, T> {
    pub fn new(curve: T, sample_count: usize) -> Self {
        let from = curve.from();
        let to = curve.to();
        Flattened::with_endpoints(curve, sample_count, from, to)
    }

    /// Overrides the endpoints, for curves that don't store their exact endpoints.
    pub fn with_endpoints(curve: T, sample_count: usize, from: Point<S>, to: Point<S>) -> Self {
        Flattened {
            curve,
            from,
            to,
            sample_count,
            current: 0,
        }
    }
}

impl<S: Scalar, T: Segment<Scalar = S>> Iterator for Flattened<S, T> {
    type Item = Point<S>;

    fn next(&mut self) -> Option<Point<S>> {
        if self.current >= self.sample_count {
            return None;
        }

        let i = self.current;
        self.current += 1;

        if i + 1 == self.sample_count {
            return Some(self.to);
        }

        if i == 0 {
            return Some(self.from);
        }

        let t = S::from_count(i) / S::from_count(self.sample_count - 1);

        Some(self.curve.sample(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.sample_count - self.current.min(self.sample_count);
        (n, Some(n))
    }
}

impl<S: Scalar, T: Segment<Scalar = S>> ExactSizeIterator for Flattened<S, T> {}

/// Connects consecutive points with line segments.
pub(crate) fn for_each_line<S: Scalar>(
    mut points: impl Iterator<Item = Point<S>>,
    callback: &mut dyn FnMut(&LineSegment<S>),
) {
    let mut from = match points.next() {
        Some(p) => p,
        None => return,
    };

    for to in points {
        callback(&LineSegment { from, to });
        from = to;
    }
}
