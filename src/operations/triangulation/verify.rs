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

use crate::geometry::point_2::Point2;
use crate::kernel::circumcircle::circumcircle;
use crate::numeric::scalar::Scalar;

/// Checks the empty-circumcircle property of a finished triangulation: no
/// input point may lie strictly inside (beyond `eps`) the circumcircle of a
/// triangle it is not a vertex of. A point exactly on a circumcircle is
/// acceptable; cocircular configurations (e.g. a square) admit more than one
/// valid triangulation. Degenerate triangles and out-of-range indices fail.
///
/// O(triangles × points); intended for tests and debugging, not hot paths.
pub fn verify_delaunay<T>(eps: T, points: &[Point2<T>], triangles: &[[usize; 3]]) -> bool
where
    T: Scalar,
{
    for tri in triangles {
        if tri.iter().any(|&i| i >= points.len()) {
            return false;
        }
        let a = points[tri[0]];
        let b = points[tri[1]];
        let c = points[tri[2]];
        let Some((center, r_squared)) = circumcircle(eps, a, b, c) else {
            return false;
        };
        for (i, p) in points.iter().enumerate() {
            if tri.contains(&i) {
                continue;
            }
            if p.distance_squared_to(&center) < r_squared - eps {
                return false;
            }
        }
    }
    true
}
