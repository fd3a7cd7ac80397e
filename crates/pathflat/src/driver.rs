//! Flattening whole paths into line segments.
//!
//! The driver walks each path with a fresh cursor and hands every line segment
//! to a [`SegmentSink`] as soon as it is produced, in path order, then command
//! order, then sample order. Straight primitives produce one segment and curves
//! produce `sample_count - 1` segments.
//!
//! Problems found in the path data never stop the flattening. They are
//! collected in the [`DriveReport`], tagged with the index of their path.

use crate::geom::LineSegment;
use crate::path::{ParseError, Path};

use thiserror::Error;

/// Receives the line segments produced by the driver.
pub trait SegmentSink {
    fn add_segment(&mut self, segment: LineSegment<f64>);
}

impl<F> SegmentSink for F
where
    F: FnMut(LineSegment<f64>),
{
    fn add_segment(&mut self, segment: LineSegment<f64>) {
        self(segment)
    }
}

impl SegmentSink for Vec<LineSegment<f64>> {
    fn add_segment(&mut self, segment: LineSegment<f64>) {
        self.push(segment);
    }
}

/// Parameters for the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct FlattenOptions {
    /// Number of points sampled along each curve, endpoints included.
    ///
    /// Default value: `FlattenOptions::DEFAULT_SAMPLE_COUNT`.
    pub sample_count: usize,
}

impl FlattenOptions {
    pub const DEFAULT_SAMPLE_COUNT: usize = 20;
    /// A curve needs at least its two endpoints.
    pub const MIN_SAMPLE_COUNT: usize = 2;

    pub const DEFAULT: Self = FlattenOptions {
        sample_count: Self::DEFAULT_SAMPLE_COUNT,
    };

    #[inline]
    pub fn sample_count(sample_count: usize) -> Self {
        Self::DEFAULT.with_sample_count(sample_count)
    }

    #[inline]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn validate(&self) -> Result<(), DriveError> {
        if self.sample_count < Self::MIN_SAMPLE_COUNT {
            return Err(DriveError::SampleCount(self.sample_count));
        }

        Ok(())
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors that prevent the driver from running at all.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum DriveError {
    #[error("Expected a sample count of at least {min}, got {0}.", min = FlattenOptions::MIN_SAMPLE_COUNT)]
    SampleCount(usize),
}

/// A problem found in one of the paths.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDiagnostic {
    /// Index of the path in the driver's input.
    pub path: usize,
    pub error: ParseError,
}

/// What the driver did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriveReport {
    pub paths: usize,
    pub segments: usize,
    pub diagnostics: Vec<PathDiagnostic>,
}

impl DriveReport {
    /// Whether all paths were read without any problem.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Accumulates the report of another batch of paths into this one.
    pub fn merge(&mut self, other: DriveReport) {
        self.paths += other.paths;
        self.segments += other.segments;
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Flattens paths with `sample_count` samples per curve.
pub fn drive(
    paths: &[Path],
    sample_count: usize,
    sink: &mut dyn SegmentSink,
) -> Result<DriveReport, DriveError> {
    drive_with_options(paths, &FlattenOptions::sample_count(sample_count), sink)
}

/// Flattens paths.
///
/// The options are checked before any path is processed.
pub fn drive_with_options(
    paths: &[Path],
    options: &FlattenOptions,
    sink: &mut dyn SegmentSink,
) -> Result<DriveReport, DriveError> {
    options.validate()?;

    let mut report = DriveReport::default();
    for (index, path) in paths.iter().enumerate() {
        report.merge(flatten_path(path, index, options.sample_count, sink));
    }

    Ok(report)
}

/// Flattens a single path.
///
/// `index` is the path's position in the caller's input, used to tag its
/// diagnostics. Paths are independent, so batches of paths can be flattened on
/// separate threads and their reports merged.
pub fn drive_path(
    path: &Path,
    index: usize,
    options: &FlattenOptions,
    sink: &mut dyn SegmentSink,
) -> Result<DriveReport, DriveError> {
    options.validate()?;

    Ok(flatten_path(path, index, options.sample_count, sink))
}

fn flatten_path(
    path: &Path,
    index: usize,
    sample_count: usize,
    sink: &mut dyn SegmentSink,
) -> DriveReport {
    log::trace!(
        "Flattening path {} ({} commands).",
        index,
        path.commands().len()
    );

    let mut segments = 0;
    let errors = path.for_each_primitive(&mut |primitive| {
        primitive.for_each_segment(sample_count, &mut |segment| {
            sink.add_segment(*segment);
            segments += 1;
        });
    });

    let diagnostics: Vec<PathDiagnostic> = path
        .errors()
        .iter()
        .cloned()
        .chain(errors)
        .map(|error| PathDiagnostic { path: index, error })
        .collect();

    for diagnostic in &diagnostics {
        log::warn!("Path {}: {}", index, diagnostic.error);
    }

    DriveReport {
        paths: 1,
        segments,
        diagnostics,
    }
}
