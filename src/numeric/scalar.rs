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

use std::fmt::Debug;

use num_traits::Float;

/// Working floating-point type of the triangulation hot path.
///
/// The original engine fixed this to single precision; making it a type
/// parameter lets callers pick `f32` for speed or `f64` for headroom without
/// touching the algorithms. Predicates stay tolerance-based either way: this
/// is deliberately not an exact-arithmetic kernel.
pub trait Scalar: Float + Debug + Default + 'static {
    /// Lossy conversion from `f64`, used for constants and interface-boundary
    /// coordinates.
    fn from_f64(v: f64) -> Self;

    /// Default tolerance for circumcircle and degeneracy tests.
    ///
    /// Matches the original engine's fixed constant. Not adaptive; callers
    /// with unusually scaled coordinates should pass their own.
    fn default_epsilon() -> Self {
        Self::from_f64(1.0e-6)
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
