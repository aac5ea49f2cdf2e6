use crate::common::samples::POLYLINES;
use chaikin::subdivide;
use criterion::{black_box, Criterion};

pub fn open(c: &mut Criterion) {
    c.bench_function("subdivide_open", |b| {
        for points in POLYLINES.iter() {
            b.iter(|| black_box(subdivide(points, false, 0.25, 0.25)))
        }
    });
}

pub fn closed(c: &mut Criterion) {
    c.bench_function("subdivide_closed", |b| {
        for points in POLYLINES.iter() {
            b.iter(|| black_box(subdivide(points, true, 0.25, 0.25)))
        }
    });
}

pub fn refine(c: &mut Criterion) {
    c.bench_function("refine_5_generations", |b| {
        for points in POLYLINES.iter() {
            b.iter(|| {
                let mut points = points.clone();
                for _ in 0..5 {
                    points = subdivide(&points, true, 0.25, 0.25);
                }
                black_box(points)
            })
        }
    });
}

pub fn all(c: &mut Criterion) {
    open(c);
    closed(c);
    refine(c);
}
