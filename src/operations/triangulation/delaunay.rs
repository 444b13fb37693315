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

use std::cmp::Ordering;

use log::debug;

use crate::geometry::aabb::Aabb2;
use crate::geometry::point_2::Point2;
use crate::kernel::circumcircle::{CircumcircleClass, classify_circumcircle};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{DelaunayError, Triangulation};

/// Margin factor for the synthetic bounding triangle: the bounding box is
/// expanded by this multiple of its larger dimension. A heuristic, not a
/// tight bound; any sufficiently large enclosing triangle works.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// Reference to a triangulation vertex: either a position in the input point
/// sequence, or one of the three synthetic super-triangle vertices that exist
/// only while a run is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexRef {
    Real(usize),
    Super(usize),
}

/// An active triangle plus its completeness flag. A complete triangle's
/// circumcircle lies entirely left of every point still to be inserted, so
/// the scan never needs to classify it again.
#[derive(Clone, Copy, Debug)]
struct TriangleSlot {
    verts: [VertexRef; 3],
    complete: bool,
}

impl TriangleSlot {
    #[inline]
    fn incomplete(verts: [VertexRef; 3]) -> Self {
        Self {
            verts,
            complete: false,
        }
    }
}

/// Counters accumulated over one triangulation run, reported once via
/// `log::debug!` when the run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub points_inserted: usize,
    pub triangles_scanned: usize,
    pub triangles_completed: usize,
    pub triangles_removed: usize,
    pub edges_cancelled: usize,
}

/// Builds the synthetic triangle enclosing every point of `bounds`.
pub fn enclosing_super_triangle<T>(bounds: &Aabb2<T>) -> [Point2<T>; 3]
where
    T: Scalar,
{
    let d = bounds.width().max(bounds.height()) * T::from_f64(SUPER_TRIANGLE_SCALE);
    let mid = bounds.center();
    [
        Point2::new(mid.x - d, mid.y - d),
        Point2::new(mid.x, mid.y + d),
        Point2::new(mid.x + d, mid.y - d),
    ]
}

/// Incremental Delaunay triangulator over planar point sets.
///
/// Points are inserted in ascending-x order into a mesh seeded with one large
/// synthetic triangle. For each point, every active triangle whose
/// circumcircle contains the point is removed; the boundary of the removed
/// region is re-triangulated against the point. Triangles proven unreachable
/// by all remaining points are flagged complete and skipped. O(n²) worst
/// case; no spatial index.
///
/// One instance owns all run state. Scratch buffers are reused across runs
/// but always start a run empty; nothing is shared between runs.
pub struct DelaunayTriangulator<T>
where
    T: Scalar,
{
    epsilon: T,
    triangles: Vec<TriangleSlot>,
    edges: Vec<(VertexRef, VertexRef)>,
    cancelled: Vec<bool>,
    order: Vec<usize>,
    super_points: [Point2<T>; 3],
    stats: RunStats,
}

impl<T> Default for DelaunayTriangulator<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DelaunayTriangulator<T>
where
    T: Scalar,
{
    pub fn new() -> Self {
        Self::with_epsilon(T::default_epsilon())
    }

    /// Triangulator with a caller-chosen tolerance for the circumcircle
    /// predicate's degeneracy and boundary tests.
    pub fn with_epsilon(epsilon: T) -> Self {
        Self {
            epsilon,
            triangles: Vec::new(),
            edges: Vec::new(),
            cancelled: Vec::new(),
            order: Vec::new(),
            super_points: [Point2::default(); 3],
            stats: RunStats::default(),
        }
    }

    #[inline]
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Counters from the most recent run.
    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Triangulates interleaved `(x, y)` coordinates to index triples.
    ///
    /// Each returned triple indexes points by their position in `coords`
    /// (point i is `coords[2 * i], coords[2 * i + 1]`), in clockwise order.
    /// Duplicate points result in undefined behavior; see
    /// [`try_triangulate`](Self::try_triangulate) for a checked variant.
    ///
    /// Pass `sorted = true` only if the pairs are already ordered by
    /// non-decreasing x; the engine then skips its own ordering pass.
    /// Fewer than 3 points yield an empty result.
    pub fn triangulate(&mut self, coords: &[T], sorted: bool) -> Vec<[usize; 3]> {
        self.triangulate_range(coords, 0, coords.len(), sorted)
    }

    /// Triangulates a sub-range of a larger coordinate buffer.
    ///
    /// `offset` and `count` are in scalar units over the flat buffer and
    /// `count` must be even. Returned triples index points by their position
    /// within the selected range, starting at 0.
    pub fn triangulate_range(
        &mut self,
        coords: &[T],
        offset: usize,
        count: usize,
        sorted: bool,
    ) -> Vec<[usize; 3]> {
        let points = collect_pairs(&coords[offset..offset + count]);
        self.triangulate_points(&points, sorted)
    }

    /// Triangulates interleaved `(x, y, z)` coordinates, projecting to the
    /// xy plane first. The z values take no part in the triangulation.
    pub fn triangulate_3d(&mut self, coords: &[T], sorted: bool) -> Vec<[usize; 3]> {
        let points: Vec<Point2<T>> = coords
            .chunks_exact(3)
            .map(|c| Point2::new(c[0], c[1]))
            .collect();
        self.triangulate_points(&points, sorted)
    }

    /// Checked variant of [`triangulate`](Self::triangulate): rejects input
    /// containing two points with exactly equal coordinates instead of
    /// producing an undefined triangulation.
    pub fn try_triangulate(
        &mut self,
        coords: &[T],
        sorted: bool,
    ) -> Result<Vec<[usize; 3]>, DelaunayError> {
        let points = collect_pairs(coords);
        check_duplicates(&points)?;
        Ok(self.triangulate_points(&points, sorted))
    }

    /// Triangulates and pairs the result with the input points.
    pub fn triangulation(&mut self, coords: &[T], sorted: bool) -> Triangulation<T> {
        let points = collect_pairs(coords);
        let triangles = self.triangulate_points(&points, sorted);
        Triangulation { points, triangles }
    }

    /// Core entry point over already-assembled points.
    pub fn triangulate_points(&mut self, points: &[Point2<T>], sorted: bool) -> Vec<[usize; 3]> {
        self.stats = RunStats::default();
        if points.len() < 3 {
            return Vec::new();
        }

        // Insertion order: ascending x. Only the index permutation is
        // sorted, so output triples always reference original positions.
        self.order.clear();
        self.order.extend(0..points.len());
        if !sorted {
            self.order.sort_unstable_by(|&i, &j| {
                points[i]
                    .x
                    .partial_cmp(&points[j].x)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let bounds = match Aabb2::of_points(points) {
            Some(b) => b,
            None => return Vec::new(),
        };
        self.super_points = enclosing_super_triangle(&bounds);

        self.triangles.clear();
        self.triangles.push(TriangleSlot::incomplete([
            VertexRef::Super(0),
            VertexRef::Super(1),
            VertexRef::Super(2),
        ]));

        for k in 0..self.order.len() {
            let point_index = self.order[k];
            self.insert(points, point_index);
        }

        // Purge everything still attached to the synthetic vertices.
        let mut out = Vec::with_capacity(self.triangles.len());
        for slot in self.triangles.drain(..) {
            if let [VertexRef::Real(a), VertexRef::Real(b), VertexRef::Real(c)] = slot.verts {
                out.push([a, b, c]);
            }
        }

        debug!(
            "triangulated {} points into {} triangles: {:?}",
            points.len(),
            out.len(),
            self.stats
        );
        out
    }

    /// Inserts one point: removes every triangle whose circumcircle contains
    /// it, cancels the interior edges of the removed region, and fans new
    /// triangles from the point to the surviving boundary edges.
    fn insert(&mut self, points: &[Point2<T>], point_index: usize) {
        let p = points[point_index];

        // Reverse scan so swap_remove only ever moves a slot this pass has
        // already visited.
        let mut ti = self.triangles.len();
        while ti > 0 {
            ti -= 1;
            if self.triangles[ti].complete {
                continue;
            }
            self.stats.triangles_scanned += 1;
            let verts = self.triangles[ti].verts;
            let a = self.resolve(points, verts[0]);
            let b = self.resolve(points, verts[1]);
            let c = self.resolve(points, verts[2]);
            match classify_circumcircle(self.epsilon, p, a, b, c) {
                CircumcircleClass::Complete => {
                    self.triangles[ti].complete = true;
                    self.stats.triangles_completed += 1;
                }
                CircumcircleClass::Inside => {
                    let removed = self.triangles.swap_remove(ti);
                    self.edges.push((removed.verts[0], removed.verts[1]));
                    self.edges.push((removed.verts[1], removed.verts[2]));
                    self.edges.push((removed.verts[2], removed.verts[0]));
                    self.stats.triangles_removed += 1;
                }
                CircumcircleClass::Incomplete => {}
            }
        }

        // All triangles share one winding, so an edge interior to the removed
        // region appears once per direction; cancelling reversed pairs leaves
        // exactly the boundary polygon around p.
        self.cancelled.clear();
        self.cancelled.resize(self.edges.len(), false);
        for i in 0..self.edges.len() {
            if self.cancelled[i] {
                continue;
            }
            let (a, b) = self.edges[i];
            for j in (i + 1)..self.edges.len() {
                if self.cancelled[j] {
                    continue;
                }
                let (c, d) = self.edges[j];
                if a == d && b == c {
                    self.cancelled[i] = true;
                    self.cancelled[j] = true;
                    self.stats.edges_cancelled += 2;
                }
            }
        }

        for i in 0..self.edges.len() {
            if self.cancelled[i] {
                continue;
            }
            let (a, b) = self.edges[i];
            self.triangles
                .push(TriangleSlot::incomplete([a, b, VertexRef::Real(point_index)]));
        }
        self.edges.clear();
        self.stats.points_inserted += 1;
    }

    #[inline]
    fn resolve(&self, points: &[Point2<T>], v: VertexRef) -> Point2<T> {
        match v {
            VertexRef::Real(i) => points[i],
            VertexRef::Super(i) => self.super_points[i],
        }
    }
}

fn collect_pairs<T: Scalar>(coords: &[T]) -> Vec<Point2<T>> {
    coords
        .chunks_exact(2)
        .map(|c| Point2::new(c[0], c[1]))
        .collect()
}

fn check_duplicates<T: Scalar>(points: &[Point2<T>]) -> Result<(), DelaunayError> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_unstable_by(|&i, &j| {
        let x = points[i]
            .x
            .partial_cmp(&points[j].x)
            .unwrap_or(Ordering::Equal);
        x.then(
            points[i]
                .y
                .partial_cmp(&points[j].y)
                .unwrap_or(Ordering::Equal),
        )
    });
    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            return Err(DelaunayError::DuplicatePoint {
                first: w[0].min(w[1]),
                second: w[0].max(w[1]),
            });
        }
    }
    Ok(())
}
