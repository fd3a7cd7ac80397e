#[macro_use]
extern crate criterion;
extern crate pathflat;

use criterion::{BenchmarkId, Criterion};
use pathflat::geom::LineSegment;
use pathflat::path::Path;
use pathflat::FlattenOptions;

const SAMPLE_COUNTS: [usize; 3] = [2, 20, 100];

const PATH_DATA: &str = "M10 80 Q52.5 10 95 80 T180 80 \
    M10 315 L110 215 A30 50 0 0 1 162.55 162.45 L172.55 152.45 A30 50 -45 0 1 215.1 109.9 L315 10 \
    M100 200 C100 100 250 100 250 200 S400 300 400 200 \
    m-50 10 h20 v20 h-20 z \
    M3.5-2.1.5.5a1 1 0 0110 10c1.2-3.4 5.6.7 8 9";

fn parse(bench: &mut Criterion) {
    bench.bench_function("parse", |b| {
        b.iter(|| {
            let path = Path::parse(PATH_DATA);
            std::hint::black_box(path);
        })
    });
}

fn flatten(c: &mut Criterion) {
    let paths: Vec<Path> = (0..100).map(|_| Path::parse(PATH_DATA)).collect();

    let mut g = c.benchmark_group("flatten");
    for sample_count in &SAMPLE_COUNTS {
        let options = FlattenOptions::sample_count(*sample_count);
        g.bench_with_input(
            BenchmarkId::new("drive", sample_count),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut sum = 0.0;
                    pathflat::drive_with_options(
                        &paths,
                        options,
                        &mut |segment: LineSegment<f64>| sum += segment.to.x,
                    )
                    .unwrap();
                    std::hint::black_box(sum);
                })
            },
        );
    }
}

criterion_group!(driver, parse, flatten);
criterion_main!(driver);
