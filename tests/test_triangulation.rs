// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::BTreeSet;

use delaunay2d::geometry::{Aabb2, Point2};
use delaunay2d::operations::triangulation::{
    DelaunayError, DelaunayTriangulator, enclosing_super_triangle, verify_delaunay,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sorted_triple(t: [usize; 3]) -> [usize; 3] {
    let mut t = t;
    t.sort_unstable();
    t
}

fn triple_set(tris: &[[usize; 3]]) -> BTreeSet<[usize; 3]> {
    tris.iter().map(|&t| sorted_triple(t)).collect()
}

fn points_of(coords: &[f64]) -> Vec<Point2<f64>> {
    coords
        .chunks_exact(2)
        .map(|c| Point2::new(c[0], c[1]))
        .collect()
}

#[test]
fn test_fewer_than_three_points() {
    let mut t = DelaunayTriangulator::<f64>::new();
    assert!(t.triangulate(&[], false).is_empty());
    assert!(t.triangulate(&[1.0, 1.0], false).is_empty());
    assert!(t.triangulate(&[0.0, 0.0, 1.0, 1.0], false).is_empty());
}

#[test]
fn test_basic_triangle() {
    let coords = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let mut t = DelaunayTriangulator::<f64>::new();
    let tris = t.triangulate(&coords, false);
    assert_eq!(tris.len(), 1);
    assert_eq!(sorted_triple(tris[0]), [0, 1, 2]);
}

#[test]
fn test_square_splits_into_two_triangles() {
    // 0=(0,0) 1=(1,0) 2=(1,1) 3=(0,1)
    let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    let mut t = DelaunayTriangulator::<f64>::new();
    let tris = t.triangulate(&coords, false);
    assert_eq!(tris.len(), 2);

    let points = points_of(&coords);
    assert!(verify_delaunay(t.epsilon(), &points, &tris));

    // Exactly one undirected edge is shared, and it is a diagonal. The four
    // points are cocircular, so either diagonal is a valid split.
    let mut edge_counts: std::collections::BTreeMap<[usize; 2], usize> =
        std::collections::BTreeMap::new();
    for tri in &tris {
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let mut e = [tri[i], tri[j]];
            e.sort_unstable();
            *edge_counts.entry(e).or_default() += 1;
        }
    }
    let shared: Vec<[usize; 2]> = edge_counts
        .into_iter()
        .filter(|&(_, n)| n == 2)
        .map(|(e, _)| e)
        .collect();
    assert_eq!(shared.len(), 1);
    assert!(shared[0] == [0, 2] || shared[0] == [1, 3]);
}

#[test]
fn test_no_synthetic_vertices_in_output() {
    let coords = [0.0, 0.0, 4.0, 1.0, 2.0, 3.0, 1.0, 4.0, 3.0, 0.5];
    let mut t = DelaunayTriangulator::<f64>::new();
    let tris = t.triangulate(&coords, false);
    let n = coords.len() / 2;
    assert!(!tris.is_empty());
    for tri in &tris {
        assert!(tri.iter().all(|&i| i < n));
    }
}

#[test]
fn test_sort_independence() {
    let coords = [
        3.0, 1.0, 0.5, 2.0, 2.0, 3.0, 1.0, 0.0, 2.5, 0.5, 0.0, 1.5, 1.5, 2.5, 3.5, 2.0,
    ];
    let mut t = DelaunayTriangulator::<f64>::new();
    let unsorted_set = triple_set(&t.triangulate(&coords, false));

    // Pre-sort the pairs by x externally and remember where each point went.
    let points = points_of(&coords);
    let mut perm: Vec<usize> = (0..points.len()).collect();
    perm.sort_unstable_by(|&i, &j| points[i].x.partial_cmp(&points[j].x).unwrap());
    let mut sorted_coords = Vec::with_capacity(coords.len());
    for &i in &perm {
        sorted_coords.push(points[i].x);
        sorted_coords.push(points[i].y);
    }

    let sorted_tris = t.triangulate(&sorted_coords, true);
    let mapped: Vec<[usize; 3]> = sorted_tris
        .iter()
        .map(|tri| [perm[tri[0]], perm[tri[1]], perm[tri[2]]])
        .collect();
    assert_eq!(unsorted_set, triple_set(&mapped));
}

#[test]
fn test_scale_invariance() {
    let coords = [
        0.1, 0.2, 0.5, 0.5, 0.8, 0.3, 0.2, 0.7, 0.7, 0.8, 0.4, 0.1, 0.9, 0.6,
    ];
    let scaled: Vec<f64> = coords.iter().map(|v| v * 350.0).collect();

    let mut t = DelaunayTriangulator::<f64>::new();
    let base = triple_set(&t.triangulate(&coords, false));
    let scaled_tris = triple_set(&t.triangulate(&scaled, false));
    assert_eq!(base, scaled_tris);
}

#[test]
fn test_random_cloud_is_delaunay() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 40;
    let mut coords = Vec::with_capacity(n * 2);
    for _ in 0..n {
        coords.push(rng.random_range(0.0..100.0f64));
        coords.push(rng.random_range(0.0..100.0f64));
    }

    let mut t = DelaunayTriangulator::<f64>::new();
    let tris = t.triangulate(&coords, false);
    assert!(!tris.is_empty());
    for tri in &tris {
        assert!(tri.iter().all(|&i| i < n));
    }
    assert!(verify_delaunay(t.epsilon(), &points_of(&coords), &tris));

    let stats = t.stats();
    assert_eq!(stats.points_inserted, n);
    assert!(stats.triangles_removed > 0);
}

#[test]
fn test_duplicate_point_detected() {
    let coords = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    let mut t = DelaunayTriangulator::<f64>::new();
    assert_eq!(
        t.try_triangulate(&coords, false),
        Err(DelaunayError::DuplicatePoint {
            first: 0,
            second: 2
        })
    );

    let clean = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let tris = t.try_triangulate(&clean, false).unwrap();
    assert_eq!(tris.len(), 1);
}

#[test]
fn test_stride_3_projects_to_xy() {
    let coords_3d = [
        0.0, 0.0, 9.0, 1.0, 0.0, -4.5, 0.0, 1.0, 2.0, 1.0, 1.0, 0.25,
    ];
    let coords_2d = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

    let mut t = DelaunayTriangulator::<f64>::new();
    let from_3d = triple_set(&t.triangulate_3d(&coords_3d, false));
    let from_2d = triple_set(&t.triangulate(&coords_2d, false));
    assert_eq!(from_3d, from_2d);
}

#[test]
fn test_range_selection() {
    // Square framed by junk values on both sides of the buffer.
    let buffer = [9.0, 9.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 7.0, 7.0];
    let mut t = DelaunayTriangulator::<f64>::new();
    let tris = t.triangulate_range(&buffer, 2, 8, false);
    assert_eq!(tris.len(), 2);
    for tri in &tris {
        assert!(tri.iter().all(|&i| i < 4));
    }

    // A range too small to triangulate yields nothing.
    assert!(t.triangulate_range(&buffer, 2, 4, false).is_empty());
}

#[test]
fn test_super_triangle_contains_all_points() {
    let points = points_of(&[0.0, 0.0, 10.0, 2.0, 5.0, 8.0, -3.0, 4.0]);
    let bounds = Aabb2::of_points(&points).unwrap();
    let tri = enclosing_super_triangle(&bounds);

    let orient = |a: Point2<f64>, b: Point2<f64>, c: Point2<f64>| {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    };
    for p in &points {
        let d0 = orient(tri[0], tri[1], *p);
        let d1 = orient(tri[1], tri[2], *p);
        let d2 = orient(tri[2], tri[0], *p);
        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        assert!(!(has_neg && has_pos), "point {p:?} outside super triangle");
    }
}

#[test]
fn test_triangulator_reuse_across_runs() {
    let mut t = DelaunayTriangulator::<f64>::new();
    let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    assert_eq!(t.triangulate(&square, false).len(), 2);

    let triangle = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let tris = t.triangulate(&triangle, false);
    assert_eq!(tris.len(), 1);
    assert_eq!(sorted_triple(tris[0]), [0, 1, 2]);
}

#[test]
fn test_edge_graph_has_three_edges_per_triangle() {
    let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    let mut t = DelaunayTriangulator::<f64>::new();
    let triangulation = t.triangulation(&coords, false);
    assert_eq!(triangulation.points.len(), 4);
    assert_eq!(triangulation.triangles.len(), 2);

    let graph = triangulation.edge_graph();
    assert_eq!(graph.edges.len(), 6);
    // The shared diagonal is emitted once per triangle; no dedup.
    let mut normalized: Vec<[usize; 2]> = graph
        .edges
        .iter()
        .map(|e| {
            let mut e = *e;
            e.sort_unstable();
            e
        })
        .collect();
    normalized.sort_unstable();
    let unique: BTreeSet<[usize; 2]> = normalized.iter().copied().collect();
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_f32_triangulator() {
    let coords = [0.0f32, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    let mut t = DelaunayTriangulator::<f32>::new();
    let tris = t.triangulate(&coords, false);
    assert_eq!(tris.len(), 2);
}

#[test]
fn test_custom_epsilon() {
    let mut t = DelaunayTriangulator::with_epsilon(1.0e-9f64);
    assert_eq!(t.epsilon(), 1.0e-9);
    let tris = t.triangulate(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], false);
    assert_eq!(tris.len(), 1);
}
