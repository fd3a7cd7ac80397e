//! Drawing operations with absolute coordinates.

use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc};
use crate::math::{Point, Vector};

/// One resolved drawing operation of a path.
///
/// Every coordinate is absolute: relative commands and implicit repetitions
/// have already been resolved against the cursor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// Moves the cursor and starts a new subpath. Draws nothing.
    MoveTo { to: Point },
    Line { from: Point, to: Point },
    HorizontalLine { from: Point, to: Point },
    VerticalLine { from: Point, to: Point },
    Arc(SvgArc<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
    /// Goes back to the start of the subpath.
    Close { from: Point, to: Point },
}

impl Primitive {
    /// Where the cursor is before the primitive, or `None` for a move.
    pub fn from(&self) -> Option<Point> {
        match *self {
            Primitive::MoveTo { .. } => None,
            Primitive::Line { from, .. }
            | Primitive::HorizontalLine { from, .. }
            | Primitive::VerticalLine { from, .. }
            | Primitive::Close { from, .. } => Some(from),
            Primitive::Arc(ref arc) => Some(arc.from),
            Primitive::Quadratic(ref curve) => Some(curve.from),
            Primitive::Cubic(ref curve) => Some(curve.from),
        }
    }

    /// Where the cursor is after the primitive.
    pub fn to(&self) -> Point {
        match *self {
            Primitive::MoveTo { to }
            | Primitive::Line { to, .. }
            | Primitive::HorizontalLine { to, .. }
            | Primitive::VerticalLine { to, .. }
            | Primitive::Close { to, .. } => to,
            Primitive::Arc(ref arc) => arc.to,
            Primitive::Quadratic(ref curve) => curve.to,
            Primitive::Cubic(ref curve) => curve.to,
        }
    }

    /// Whether the primitive is approximated with several segments.
    pub fn is_curve(&self) -> bool {
        match self {
            Primitive::Arc(arc) => !arc.is_straight_line(),
            Primitive::Quadratic(..) | Primitive::Cubic(..) => true,
            _ => false,
        }
    }

    /// Returns the primitive moved by a vector.
    pub fn translate(&self, by: Vector) -> Self {
        match *self {
            Primitive::MoveTo { to } => Primitive::MoveTo { to: to + by },
            Primitive::Line { from, to } => Primitive::Line {
                from: from + by,
                to: to + by,
            },
            Primitive::HorizontalLine { from, to } => Primitive::HorizontalLine {
                from: from + by,
                to: to + by,
            },
            Primitive::VerticalLine { from, to } => Primitive::VerticalLine {
                from: from + by,
                to: to + by,
            },
            Primitive::Arc(ref arc) => Primitive::Arc(arc.translate(by)),
            Primitive::Quadratic(ref curve) => Primitive::Quadratic(curve.translate(by)),
            Primitive::Cubic(ref curve) => Primitive::Cubic(curve.translate(by)),
            Primitive::Close { from, to } => Primitive::Close {
                from: from + by,
                to: to + by,
            },
        }
    }

    /// Number of line segments `for_each_segment` produces.
    pub fn segment_count(&self, sample_count: usize) -> usize {
        match self {
            Primitive::MoveTo { .. } => 0,
            _ if self.is_curve() => sample_count.saturating_sub(1),
            _ => 1,
        }
    }

    /// Approximates the primitive with line segments.
    ///
    /// Straight primitives (including straight arcs) produce a single segment,
    /// curves produce `sample_count - 1` of them and moves produce nothing.
    pub fn for_each_segment<F>(&self, sample_count: usize, callback: &mut F)
    where
        F: FnMut(&LineSegment<f64>),
    {
        match *self {
            Primitive::MoveTo { .. } => {}
            Primitive::Line { from, to }
            | Primitive::HorizontalLine { from, to }
            | Primitive::VerticalLine { from, to }
            | Primitive::Close { from, to } => {
                callback(&LineSegment { from, to });
            }
            Primitive::Arc(ref arc) => {
                if arc.is_straight_line() {
                    callback(&arc.baseline());
                } else {
                    arc.for_each_flattened(sample_count, callback);
                }
            }
            Primitive::Quadratic(ref curve) => {
                curve.for_each_flattened(sample_count, callback);
            }
            Primitive::Cubic(ref curve) => {
                curve.for_each_flattened(sample_count, callback);
            }
        }
    }
}

#[cfg(test)]
use crate::geom::{ArcFlags, Angle};
#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn segment_counts() {
    let line = Primitive::Line {
        from: point(0.0, 0.0),
        to: point(1.0, 1.0),
    };
    let curve = Primitive::Quadratic(QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    });
    let straight_arc = Primitive::Arc(SvgArc {
        from: point(1.0, 1.0),
        to: point(1.0, 1.0),
        radii: vector(4.0, 4.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    });

    for &n in &[2, 3, 20] {
        for primitive in &[line, curve, straight_arc] {
            let mut count = 0;
            primitive.for_each_segment(n, &mut |_| count += 1);
            assert_eq!(count, primitive.segment_count(n));
        }
    }

    assert_eq!(line.segment_count(20), 1);
    assert_eq!(curve.segment_count(20), 19);
    assert_eq!(straight_arc.segment_count(20), 1);
    assert_eq!(Primitive::MoveTo { to: point(1.0, 2.0) }.segment_count(20), 0);
}

#[test]
fn translated_primitives() {
    let by = vector(10.0, -5.0);
    let close = Primitive::Close {
        from: point(1.0, 1.0),
        to: point(0.0, 0.0),
    };
    assert_eq!(
        close.translate(by),
        Primitive::Close {
            from: point(11.0, -4.0),
            to: point(10.0, -5.0),
        }
    );

    let cubic = Primitive::Cubic(CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 8.0),
        ctrl2: point(8.0, 8.0),
        to: point(8.0, 0.0),
    });
    let moved = cubic.translate(by);
    assert_eq!(moved.from(), Some(point(10.0, -5.0)));
    assert_eq!(moved.to(), point(18.0, -5.0));
}
