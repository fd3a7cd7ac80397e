#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Reading SVG path data and resolving it into drawing primitives.
//!
//! This crate is reexported in [pathflat](https://docs.rs/pathflat/).
//!
//! Path data goes through two stages:
//!
//! - the [tokenizer](tokenizer/index.html) splits the text into
//!   [`PathCommand`]s, each a command letter and its raw arguments,
//! - the [interpreter](interpreter/index.html) walks the commands with a cursor,
//!   resolving relative coordinates and implicit repetitions into
//!   [`Primitive`]s with absolute coordinates.
//!
//! # Examples
//!
//! ```
//! use pathflat_path::{Path, Primitive};
//! use pathflat_path::math::point;
//!
//! let path = Path::parse("m10,10 l5,0 l0,5");
//!
//! let primitives = path.interpret().primitives;
//! assert_eq!(primitives[0], Primitive::MoveTo { to: point(10.0, 10.0) });
//! assert_eq!(
//!     primitives[2],
//!     Primitive::Line { from: point(15.0, 10.0), to: point(15.0, 15.0) },
//! );
//! ```

pub use pathflat_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod error;
pub mod interpreter;
pub mod path;
pub mod primitive;
pub mod tokenizer;

#[doc(inline)]
pub use crate::commands::{PathCommand, Verb};
pub use crate::error::ParseError;
#[doc(inline)]
pub use crate::interpreter::{step, CursorState, Interpretation, Step};
#[doc(inline)]
pub use crate::path::Path;
#[doc(inline)]
pub use crate::primitive::Primitive;
#[doc(inline)]
pub use crate::tokenizer::{ParserOptions, Tokenizer};

pub mod math {
    //! f64 version of the pathflat_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}
