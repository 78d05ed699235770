// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `espalier_visibility` graph construction and traversal.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use espalier_compass::Direction;
use espalier_visibility::{VertexId, VisibilityGraph, Weight};

/// The rook edges of a `side` by `side` lattice on unit spacing.
fn lattice_edges(side: usize) -> Vec<(Point, Point)> {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let here = Point::new(col as f64, row as f64);
            if col + 1 < side {
                edges.push((here, Point::new((col + 1) as f64, row as f64)));
            }
            if row + 1 < side {
                edges.push((here, Point::new(col as f64, (row + 1) as f64)));
            }
        }
    }
    edges
}

fn build_lattice(side: usize) -> VisibilityGraph {
    let mut graph = VisibilityGraph::new();
    for (source, target) in lattice_edges(side) {
        let _ = graph.add_edge_between(source, target, Weight::Normal);
    }
    graph
}

/// A west-to-east corridor with alternating stored edge orientation.
fn build_corridor(len: usize) -> (VisibilityGraph, VertexId) {
    let mut graph = VisibilityGraph::new();
    let start = graph.add_vertex(Point::new(0.0, 0.0));
    for i in 1..len {
        let prev = Point::new((i - 1) as f64, 0.0);
        let here = Point::new(i as f64, 0.0);
        if i % 2 == 0 {
            let _ = graph.add_edge_between(prev, here, Weight::Normal);
        } else {
            let _ = graph.add_edge_between(here, prev, Weight::Normal);
        }
    }
    (graph, start)
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    group.sample_size(50);

    for &side in &[16_usize, 64] {
        group.bench_function(format!("build_lattice(side={side})"), |b| {
            b.iter(|| black_box(build_lattice(side)));
        });

        // Re-adding every edge takes the dedupe path through `edge_between`.
        group.bench_function(format!("readd_lattice_edges(side={side})"), |b| {
            let edges = lattice_edges(side);
            b.iter_batched(
                || build_lattice(side),
                |mut graph| {
                    for &(source, target) in &edges {
                        let _ = graph.add_edge_between(source, target, Weight::Normal);
                    }
                    black_box(graph);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("find_vertex(side={side})"), |b| {
            let graph = build_lattice(side);
            // Alternate hits with probes that fall between lattice points.
            let probes: Vec<Point> = (0..side * side)
                .map(|i| {
                    let p = Point::new((i % side) as f64, (i / side) as f64);
                    if i % 2 == 0 {
                        p
                    } else {
                        Point::new(p.x + 0.25, p.y)
                    }
                })
                .collect();
            b.iter(|| {
                let mut hits = 0_usize;
                for &probe in &probes {
                    if graph.find_vertex(probe).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    for &len in &[256_usize, 4_096] {
        group.bench_function(format!("walk_corridor(len={len})"), |b| {
            let (graph, start) = build_corridor(len);
            b.iter(|| {
                let mut steps = 0_usize;
                let mut at = start;
                while let Some(next) = graph.neighbor_toward(at, Direction::EAST) {
                    at = next;
                    steps += 1;
                }
                black_box(steps)
            });
        });

        group.bench_function(format!("walk_corridor_edges(len={len})"), |b| {
            let (graph, start) = build_corridor(len);
            b.iter(|| {
                let mut at = start;
                let mut weight = 0.0_f64;
                while let Some(edge) = graph.edge_toward(at, Direction::EAST) {
                    weight += graph.edge(edge).weight().multiplier();
                    at = graph.endpoint_toward(edge, Direction::EAST);
                }
                black_box(weight)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_graph);
criterion_main!(benches);
