#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D curve primitives on top of euclid, flattened by uniform sampling.
//!
//! This crate is reexported in [pathflat](https://docs.rs/pathflat/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to turn the curves of SVG path data
//! into line segments:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs, both in SVG endpoint form ([`SvgArc`]) and center form ([`Arc`]).
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! The curves of this crate are flattened with a fixed number of samples, evenly
//! spaced in the curve's parameter space. A sample count of `N` produces `N` points
//! and `N - 1` line segments. The first and last points are always exactly the
//! endpoints of the curve, even when evaluating the curve equation at `t = 1` would
//! drift because of floating point error.
//!
//! ```
//! use pathflat_geom::{point, QuadraticBezierSegment, Segment};
//!
//! let curve = QuadraticBezierSegment {
//!     from: point(0.0, 0.0),
//!     ctrl: point(5.0, 10.0),
//!     to: point(10.0, 0.0),
//! };
//!
//! let points: Vec<_> = curve.flattened(3).collect();
//! assert_eq!(points, vec![point(0.0, 0.0), point(5.0, 5.0), point(10.0, 0.0)]);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
mod line;
pub mod quadratic_bezier;
mod segment;

#[doc(inline)]
pub use crate::arc::{Arc, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::{Flattened, Segment};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;

        const EPSILON: Self;

        /// Converts a sample index or count into a scalar.
        fn from_count(n: usize) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn from_count(n: usize) -> Self {
            n as f32
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn from_count(n: usize) -> Self {
            n as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
