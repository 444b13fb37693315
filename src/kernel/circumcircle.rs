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
use crate::numeric::scalar::Scalar;

/// Position of a query point relative to a triangle's circumcircle, seen from
/// an insertion sweep moving in ascending x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircumcircleClass {
    /// Inside the circumcircle. A point on the circle counts as inside.
    Inside,
    /// Strictly right of the entire circumcircle along x. No later point of
    /// an x-sorted sweep can re-enter this circle.
    Complete,
    /// Outside the circumcircle but not provably clear of future points.
    Incomplete,
}

/// Circumcenter and squared circumradius of triangle `(a, b, c)`.
///
/// The center is the intersection of the perpendicular bisectors of edges
/// a–b and b–c. A bisector of a near-horizontal edge (`|dy| < eps`) has
/// unbounded slope, so the computation switches to the other edge; `None` if
/// both edges are near-horizontal, i.e. the triangle is degenerate.
pub fn circumcircle<T>(eps: T, a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Option<(Point2<T>, T)>
where
    T: Scalar,
{
    let half = T::from_f64(0.5);

    let xc;
    let yc;
    let ab_dy = (a.y - b.y).abs();
    let bc_dy = (b.y - c.y).abs();
    if ab_dy < eps {
        if bc_dy < eps {
            return None;
        }
        // a-b is horizontal: its bisector is the vertical line through the
        // edge midpoint, intersected with the b-c bisector.
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx2 = (b.x + c.x) * half;
        let my2 = (b.y + c.y) * half;
        xc = (b.x + a.x) * half;
        yc = m2 * (xc - mx2) + my2;
    } else {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let mx1 = (a.x + b.x) * half;
        let my1 = (a.y + b.y) * half;
        if bc_dy < eps {
            xc = (c.x + b.x) * half;
        } else {
            let m2 = -(c.x - b.x) / (c.y - b.y);
            let mx2 = (b.x + c.x) * half;
            let my2 = (b.y + c.y) * half;
            xc = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        }
        yc = m1 * (xc - mx1) + my1;
    }

    // Squared circumradius, measured from b (any vertex works).
    let dx = b.x - xc;
    let dy = b.y - yc;
    Some((Point2::new(xc, yc), dx * dx + dy * dy))
}

/// Classifies `p` against the circumcircle of triangle `(a, b, c)`.
///
/// `eps` is a single fixed tolerance covering both the degeneracy test and
/// the inside/outside boundary; this is plain floating point, not robust
/// arithmetic, and near-cocircular input may classify either way. A
/// degenerate triangle classifies as [`CircumcircleClass::Incomplete`]
/// without further computation.
pub fn classify_circumcircle<T>(
    eps: T,
    p: Point2<T>,
    a: Point2<T>,
    b: Point2<T>,
    c: Point2<T>,
) -> CircumcircleClass
where
    T: Scalar,
{
    let Some((center, r_squared)) = circumcircle(eps, a, b, c) else {
        return CircumcircleClass::Incomplete;
    };

    let dx = p.x - center.x;
    let dx_squared = dx * dx;
    let dy = p.y - center.y;
    if dx_squared + dy * dy - r_squared <= eps {
        return CircumcircleClass::Inside;
    }
    if p.x > center.x && dx_squared > r_squared {
        CircumcircleClass::Complete
    } else {
        CircumcircleClass::Incomplete
    }
}
