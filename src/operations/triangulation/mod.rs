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

use thiserror::Error;

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

pub mod delaunay;
pub mod verify;

pub use delaunay::{DelaunayTriangulator, RunStats, enclosing_super_triangle};
pub use verify::verify_delaunay;

/// Errors reported by the checked triangulation entry points.
///
/// The unchecked entry points never fail; they keep the original contract
/// that duplicate points are undefined behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelaunayError {
    /// Two input points have exactly equal coordinates.
    #[error("duplicate point: positions {first} and {second} coincide")]
    DuplicatePoint {
        /// Position of the earlier occurrence.
        first: usize,
        /// Position of the later occurrence.
        second: usize,
    },
}

/// A triangulated point set: the input points and one `[usize; 3]` index
/// triple per triangle, in clockwise order.
#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar> Triangulation<T> {
    /// Expands the triangles into a point + edge mesh.
    pub fn edge_graph(&self) -> EdgeGraph<T> {
        let mut edges = Vec::with_capacity(self.triangles.len() * 3);
        for t in &self.triangles {
            edges.push([t[0], t[1]]);
            edges.push([t[0], t[2]]);
            edges.push([t[1], t[2]]);
        }
        EdgeGraph {
            points: self.points.clone(),
            edges,
        }
    }
}

/// Undirected edge mesh over the triangulated points.
///
/// Edges are emitted three per triangle, grouped in the order triangles
/// survive filtering. There is no cross-triangle dedup: an edge shared by two
/// adjacent triangles appears twice, once per triangle.
#[derive(Clone, Debug)]
pub struct EdgeGraph<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub edges: Vec<[usize; 2]>,
}
