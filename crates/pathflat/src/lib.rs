#![deny(bare_trait_objects)]

//! Turns SVG path data into sequences of line segments.
//!
//! # Crates
//!
//! This meta-crate (`pathflat`) reexports the following sub-crates for convenience:
//!
//! * **pathflat_path** - Reading path data and resolving it into drawing primitives.
//! * **pathflat_geom** - Curve primitives and their uniform flattening.
//!
//! Each `pathflat_<name>` crate is reexported as a `<name>` module in `pathflat`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use pathflat::math::point;
//! use pathflat::path::Path;
//! use pathflat::geom::LineSegment;
//!
//! let paths = [Path::parse("M0,0 Q5,10 10,0")];
//!
//! let mut segments: Vec<LineSegment<f64>> = Vec::new();
//! let report = pathflat::drive(&paths, 3, &mut segments).unwrap();
//!
//! assert_eq!(report.segments, 2);
//! assert_eq!(segments[0].to, point(5.0, 5.0));
//! assert_eq!(segments[1].to, point(10.0, 0.0));
//! ```

pub extern crate pathflat_geom;
pub extern crate pathflat_path;

pub use pathflat_geom as geom;
pub use pathflat_path::math;

pub mod path {
    //! Reading path data, see the [pathflat_path](https://docs.rs/pathflat_path/) crate.
    pub use pathflat_path::*;
}

pub mod driver;

#[cfg(test)]
mod driver_tests;

#[doc(inline)]
pub use crate::driver::{
    drive, drive_path, drive_with_options, DriveError, DriveReport, FlattenOptions,
    PathDiagnostic, SegmentSink,
};
