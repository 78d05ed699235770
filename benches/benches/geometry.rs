// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `espalier_compass` + `espalier_sightline`.

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Line, Point};

use espalier_compass::{ScanDirection, approx, directions};
use espalier_sightline::{intervals_overlap, point_on_segment, segments_cross};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A half-unit grid coordinate, well clear of the comparator tolerance.
    fn gen_coord(&mut self) -> f64 {
        f64::from(self.next_u32() % 512) * 0.5 - 128.0
    }

    fn gen_point(&mut self) -> Point {
        Point::new(self.gen_coord(), self.gen_coord())
    }

    /// A nonempty ascending span on one axis.
    fn gen_span(&mut self) -> (f64, f64) {
        let start = self.gen_coord();
        let extent = f64::from(1 + self.next_u32() % 32) * 0.5;
        (start, start + extent)
    }
}

fn bench_compass(c: &mut Criterion) {
    let mut group = c.benchmark_group("compass");

    for len in [1_024usize, 16_384] {
        let mut rng = Lcg::new(0xC0_0000_0000_0001);
        let pairs: Vec<(Point, Point)> = (0..len)
            .map(|_| (rng.gen_point(), rng.gen_point()))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("directions", len), &pairs, |b, pairs| {
            b.iter(|| {
                let mut acc = 0_u32;
                for &(from, to) in pairs {
                    acc += u32::from(directions(from, to).bits());
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("cmp_points", len), &pairs, |b, pairs| {
            b.iter(|| {
                let mut less = 0_usize;
                for &(lhs, rhs) in pairs {
                    if approx::cmp_points(lhs, rhs).is_lt() {
                        less += 1;
                    }
                }
                black_box(less)
            });
        });
    }

    // Slope needs extent along the scan axis, so spans are generated per axis.
    for len in [1_024usize, 16_384] {
        let mut rng = Lcg::new(0xC0_0000_0000_0002);
        let pairs: Vec<(Point, Point)> = (0..len)
            .map(|_| {
                let (x0, x1) = rng.gen_span();
                (
                    Point::new(x0, rng.gen_coord()),
                    Point::new(x1, rng.gen_coord()),
                )
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("slope", len), &pairs, |b, pairs| {
            let scan = ScanDirection::horizontal();
            b.iter(|| {
                let mut acc = 0.0_f64;
                for &(start, end) in pairs {
                    acc += scan.slope(start, end);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_sightline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline");

    for len in [1_024usize, 16_384] {
        // Horizontal intervals spread over a few scan lines, so some pairs are
        // collinear and some are not.
        let mut rng = Lcg::new(0x5E6_0000_0000_0001);
        let interval_pairs: Vec<(Line, Line)> = (0..len)
            .map(|_| {
                let y0 = f64::from(rng.next_u32() % 4);
                let y1 = f64::from(rng.next_u32() % 4);
                let (a0, a1) = rng.gen_span();
                let (b0, b1) = rng.gen_span();
                (Line::new((a0, y0), (a1, y0)), Line::new((b1, y1), (b0, y1)))
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("intervals_overlap", len),
            &interval_pairs,
            |b, pairs| {
                b.iter(|| {
                    let mut overlaps = 0_usize;
                    for &(first, second) in pairs {
                        if intervals_overlap(first, second) {
                            overlaps += 1;
                        }
                    }
                    black_box(overlaps)
                });
            },
        );

        let mut rng = Lcg::new(0x5E6_0000_0000_0002);
        let cross_pairs: Vec<(Line, Line)> = (0..len)
            .map(|_| {
                let x = rng.gen_coord();
                let y = rng.gen_coord();
                let (v0, v1) = rng.gen_span();
                let (h0, h1) = rng.gen_span();
                (Line::new((x, v0), (x, v1)), Line::new((h0, y), (h1, y)))
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("segments_cross", len),
            &cross_pairs,
            |b, pairs| {
                b.iter(|| {
                    let mut crossings = 0_usize;
                    for &(vertical, horizontal) in pairs {
                        if segments_cross(vertical, horizontal).is_some() {
                            crossings += 1;
                        }
                    }
                    black_box(crossings)
                });
            },
        );

        let mut rng = Lcg::new(0x5E6_0000_0000_0003);
        let on_segment_probes: Vec<(Line, Point)> = (0..len)
            .map(|_| {
                let y = rng.gen_coord();
                let (x0, x1) = rng.gen_span();
                (Line::new((x0, y), (x1, y)), Point::new(rng.gen_coord(), y))
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("point_on_segment", len),
            &on_segment_probes,
            |b, probes| {
                b.iter(|| {
                    let mut hits = 0_usize;
                    for &(seg, test) in probes {
                        if point_on_segment(seg, test) {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compass, bench_sightline);
criterion_main!(benches);
