/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A Library for fixed-size Vector and Matrix operations.
//!
//! Sizes are part of the type (i.e., `Vector<T, D>` and `Matrix<T, R, C>`),
//! so multiplying matrices of the wrong shape is a compile error and nothing
//! is ever allocated on the heap. The elements can be any primitive integer
//! or floating point number (see [`Scalar`]).
//!
//! Small sizes (2, 3 and 4) are computed with explicit, unrolled expressions;
//! bigger ones with plain loops. Both give the same results.
//!
//! ```
//! use matrix::{Matrix2, Matrix2x3, Matrix3x2, Vector2};
//!
//! let a = Matrix2x3::new(1, 2, 3, 4, 5, 6);
//! let b = Matrix3x2::new(7, 8, 9, 10, 11, 12);
//! assert_eq!(a * b, Matrix2::new(58, 64, 139, 154));
//! assert_eq!(Matrix2::identity() * Vector2::new(5, 7), Vector2::new(5, 7));
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
type Float = f64;

mod kernel;
mod product;

/// The type-level distinction between scalars and vectors/matrices
pub mod dispatch;

/// The [`Matrix`] type
pub mod matrix;

/// Basic numeric traits
pub mod traits;

/// The [`Vector`] type
pub mod vector;

/// Named shapes
pub mod aliases;

mod serde_impl;

pub use crate::aliases::*;
pub use crate::dispatch::{is_linear_algebra, LinearAlgebra, Operand};
pub use crate::matrix::Matrix;
pub use crate::traits::{OneZero, Scalar};
pub use crate::vector::{dot, ByLength, Vector};

#[cfg(test)]
mod test;
