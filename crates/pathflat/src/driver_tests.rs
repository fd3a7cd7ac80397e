use crate::driver::*;
use crate::geom::LineSegment;
use crate::math::{point, vector, Point};
use crate::path::{ParseError, Path};

fn flatten(src: &str, sample_count: usize) -> Vec<LineSegment<f64>> {
    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    let report = drive(&[Path::parse(src)], sample_count, &mut segments).unwrap();
    assert_eq!(report.segments, segments.len());

    segments
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment<f64> {
    LineSegment {
        from: point(x1, y1),
        to: point(x2, y2),
    }
}

fn is_connected(segments: &[LineSegment<f64>]) -> bool {
    segments.windows(2).all(|pair| pair[0].to == pair[1].from)
}

#[test]
fn closed_square() {
    assert_eq!(
        flatten("M0,0 L10,0 L10,10 Z", 20),
        vec![
            seg(0.0, 0.0, 10.0, 0.0),
            seg(10.0, 0.0, 10.0, 10.0),
            seg(10.0, 10.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn quadratic_with_three_samples() {
    assert_eq!(
        flatten("M0,0 Q5,10 10,0", 3),
        vec![seg(0.0, 0.0, 5.0, 5.0), seg(5.0, 5.0, 10.0, 0.0)]
    );
}

#[test]
fn relative_lines() {
    assert_eq!(
        flatten("m10,10 l5,0 l0,5", 20),
        vec![seg(10.0, 10.0, 15.0, 10.0), seg(15.0, 10.0, 15.0, 15.0)]
    );
}

#[test]
fn segment_counts() {
    let src = "M0 0 L1 1 H2 V3 Q4 4 5 3 C6 6 7 0 8 3 A2 1 10 0 1 12 3 Z";
    for &n in &[2, 3, 5, 20, 64] {
        let segments = flatten(src, n);
        // L, H, V and Z produce one segment each, Q, C and A produce n - 1.
        assert_eq!(segments.len(), 4 + 3 * (n - 1));
        assert!(is_connected(&segments));
        assert_eq!(segments.last().map(|s| s.to), Some(point(0.0, 0.0)));
    }
}

#[test]
fn curves_end_exactly_on_their_endpoint() {
    let curves = [
        ("M0.1 0.2 Q0.3 10.7 0.7 0.9", point(0.7, 0.9)),
        ("M0.1 0.2 C0.3 10.7 -5.1 0.33 0.7 0.9", point(0.7, 0.9)),
        ("M0.1 0.2 A3.3 1.7 17 1 0 0.7 0.9", point(0.7, 0.9)),
        ("M0.1 0.2 a3.3 1.7 17 0 1 0.6 0.7", point(0.1, 0.2) + vector(0.6, 0.7)),
    ];

    for &(src, end) in &curves {
        for n in 2..30 {
            let segments = flatten(src, n);
            assert_eq!(segments.len(), n - 1);
            assert_eq!(segments[n - 2].to, end, "{} with {} samples", src, n);
        }
    }
}

#[test]
fn two_samples_produce_the_chord() {
    assert_eq!(
        flatten("M-1 2.5 C40 1 -33 7 0.7 0.3", 2),
        vec![seg(-1.0, 2.5, 0.7, 0.3)]
    );
    assert_eq!(
        flatten("M1 1 Q50 -20 4 4", 2),
        vec![seg(1.0, 1.0, 4.0, 4.0)]
    );
}

#[test]
fn close_after_curves_and_several_subpaths() {
    let segments = flatten(
        "M1 1 C2 2 3 3 4 1 Q5 5 6 1 A2 2 0 0 1 8 1 Z M20 20 l1 0 c1 1 2 1 3 0 z",
        8,
    );

    let first_subpath = &segments[..3 * 7 + 1];
    assert_eq!(first_subpath.last(), Some(&seg(8.0, 1.0, 1.0, 1.0)));
    assert!(is_connected(first_subpath));

    let second_subpath = &segments[3 * 7 + 1..];
    assert_eq!(second_subpath[0], seg(20.0, 20.0, 21.0, 20.0));
    assert_eq!(second_subpath.last(), Some(&seg(24.0, 20.0, 20.0, 20.0)));
    assert!(is_connected(second_subpath));
}

#[test]
fn arc_radii_are_scaled_up() {
    let segments = flatten("M0 0 A1 1 0 0 1 3 0", 20);
    assert_eq!(segments.len(), 19);
    for segment in &segments {
        assert!(segment.to.x.is_finite() && segment.to.y.is_finite());
        assert!(((segment.to - point(1.5, 0.0)).length() - 1.5).abs() < 1e-9);
    }
    assert_eq!(segments[18].to, point(3.0, 0.0));
}

#[test]
fn degenerate_arcs_are_lines() {
    // Same endpoints.
    assert_eq!(
        flatten("M2 3 A5 5 0 0 1 2 3", 20),
        vec![seg(2.0, 3.0, 2.0, 3.0)]
    );
    // Null radius.
    assert_eq!(
        flatten("M2 3 a0 5 0 0 1 4 0", 20),
        vec![seg(2.0, 3.0, 6.0, 3.0)]
    );
}

#[test]
fn arcs_with_extreme_proportions_are_lines() {
    // Endpoints nearly coincident compared to the radii.
    let segments = flatten("M0 0 A1 1 0 0 1 1e-200 0", 5);
    assert_eq!(segments, vec![seg(0.0, 0.0, 1e-200, 0.0)]);

    // Huge radii.
    let segments = flatten("M0 0 A1e200 1e200 0 0 1 10 0", 5);
    assert_eq!(segments, vec![seg(0.0, 0.0, 10.0, 0.0)]);

    for segment in &segments {
        assert!(segment.to.x.is_finite() && segment.to.y.is_finite());
    }
}

#[test]
fn translation_offset() {
    let path = Path::parse("M0,0 L10,0 L10,10 Z").with_offset(vector(100.0, -50.0));

    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    drive(&[path], 20, &mut segments).unwrap();

    assert_eq!(
        segments,
        vec![
            seg(100.0, -50.0, 110.0, -50.0),
            seg(110.0, -50.0, 110.0, -40.0),
            seg(110.0, -40.0, 100.0, -50.0),
        ]
    );
}

#[test]
fn empty_and_absent_paths() {
    let paths = [
        Path::from_attribute(None),
        Path::parse(""),
        Path::parse("12 34"),
        Path::parse("M5 5"),
    ];

    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    let report = drive(&paths, 20, &mut segments).unwrap();

    assert!(segments.is_empty());
    assert_eq!(report.paths, 4);
    assert_eq!(report.segments, 0);
    assert!(report.is_clean());
}

#[test]
fn cursor_is_reset_for_each_path() {
    let paths = [Path::parse("M5 5 l1 1"), Path::parse("l1 1")];

    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    drive(&paths, 20, &mut segments).unwrap();

    assert_eq!(
        segments,
        vec![seg(5.0, 5.0, 6.0, 6.0), seg(0.0, 0.0, 1.0, 1.0)]
    );
}

#[test]
fn diagnostics_do_not_stop_other_paths() {
    let paths = [
        Path::parse("M0 0 L1 1 2"),
        Path::parse("M0 0 S1 1 2 2 L3 3"),
        Path::parse("M0 0 L1 1"),
    ];

    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    let report = drive(&paths, 20, &mut segments).unwrap();

    assert_eq!(segments.len(), 3);
    assert_eq!(report.segments, 3);
    assert_eq!(
        report.diagnostics,
        vec![
            PathDiagnostic {
                path: 0,
                error: ParseError::MissingArguments {
                    command: 'L',
                    index: 1,
                    arity: 2,
                    got: 3
                },
            },
            PathDiagnostic {
                path: 1,
                error: ParseError::Command {
                    command: 'S',
                    column: 5
                },
            },
        ]
    );
    assert!(!report.is_clean());
}

#[test]
fn invalid_sample_count() {
    let paths = [Path::parse("M0 0 L1 1 Q2 2 3 3")];

    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    for &n in &[0, 1] {
        assert_eq!(
            drive(&paths, n, &mut segments),
            Err(DriveError::SampleCount(n))
        );
        assert_eq!(
            drive_path(&paths[0], 0, &FlattenOptions::sample_count(n), &mut segments),
            Err(DriveError::SampleCount(n))
        );
    }
    assert!(segments.is_empty());

    assert!(FlattenOptions::DEFAULT.validate().is_ok());
    assert_eq!(FlattenOptions::default().sample_count, 20);
}

#[test]
fn closure_sink() {
    let paths = [Path::parse("M0 0 L1 0 L1 1")];

    let mut points: Vec<Point> = Vec::new();
    let report = drive_with_options(
        &paths,
        &FlattenOptions::DEFAULT,
        &mut |segment: LineSegment<f64>| points.push(segment.to),
    )
    .unwrap();

    assert_eq!(report.segments, 2);
    assert_eq!(points, vec![point(1.0, 0.0), point(1.0, 1.0)]);
}

#[test]
fn paths_on_separate_threads() {
    let paths: Vec<Path> = (0..8)
        .map(|i| {
            Path::parse("M0 0 q5 10 10 0 a5 5 0 0 1 5 5 z").with_offset(vector(i as f64, 0.0))
        })
        .collect();
    let options = FlattenOptions::sample_count(10);

    let mut expected: Vec<LineSegment<f64>> = Vec::new();
    let expected_report = drive_with_options(&paths, &options, &mut expected).unwrap();

    let results: Vec<(DriveReport, Vec<LineSegment<f64>>)> = std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                scope.spawn(move || {
                    let mut segments: Vec<LineSegment<f64>> = Vec::new();
                    let report = drive_path(path, index, &options, &mut segments).unwrap();
                    (report, segments)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let mut report = DriveReport::default();
    let mut segments: Vec<LineSegment<f64>> = Vec::new();
    for (path_report, path_segments) in results {
        report.merge(path_report);
        segments.extend(path_segments);
    }

    assert_eq!(report, expected_report);
    assert_eq!(segments, expected);
}
