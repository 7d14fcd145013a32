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

//! Tells scalars apart from vectors and matrices.
//!
//! Multiplying by a scalar scales every element, while multiplying by a
//! [`Vector`] or a [`Matrix`] is a linear-algebra product. Both are spelled
//! `*`, so the two sets of implementations must never overlap: the scalar
//! ones are written for each concrete [`Scalar`] type, and the product ones
//! only accept [`Vector`] and [`Matrix`] on the right-hand side.

use crate::matrix::Matrix;
use crate::traits::{for_each_scalar, sealed::Sealed, Scalar};
use crate::vector::Vector;

/// Implemented by [`Vector`] and [`Matrix`], and by nothing else.
pub trait LinearAlgebra: Sealed + Copy {
    /// The type of the elements
    type Scalar: Scalar;

    /// The number of rows. A [`Vector`] counts as a single row.
    const ROWS: usize;

    /// The number of columns
    const COLS: usize;

    /// Multiplies every element by `s`
    fn scale(self, s: Self::Scalar) -> Self;

    /// Divides every element by `s`
    fn unscale(self, s: Self::Scalar) -> Self;
}

/// Anything that can appear on either side of a `*`.
pub trait Operand: Sealed {
    /// `true` for [`Vector`] and [`Matrix`], `false` for scalars.
    const IS_LINEAR_ALGEBRA: bool;
}

/// Checks, at compile time, whether `T` is a [`Vector`] or a [`Matrix`].
///
/// ```
/// use matrix::{is_linear_algebra, Matrix4, Vector3};
/// assert!(is_linear_algebra::<Vector3<f32>>());
/// assert!(is_linear_algebra::<Matrix4<u8>>());
/// assert!(!is_linear_algebra::<f64>());
/// ```
pub const fn is_linear_algebra<T: Operand>() -> bool {
    T::IS_LINEAR_ALGEBRA
}

impl<T, const D: usize> Sealed for Vector<T, D> {}
impl<T, const R: usize, const C: usize> Sealed for Matrix<T, R, C> {}

impl<T: Scalar, const D: usize> LinearAlgebra for Vector<T, D> {
    type Scalar = T;
    const ROWS: usize = 1;
    const COLS: usize = D;

    fn scale(self, s: T) -> Self {
        self.map(|x| x * s)
    }

    fn unscale(self, s: T) -> Self {
        self.map(|x| x / s)
    }
}

impl<T: Scalar, const R: usize, const C: usize> LinearAlgebra for Matrix<T, R, C> {
    type Scalar = T;
    const ROWS: usize = R;
    const COLS: usize = C;

    fn scale(self, s: T) -> Self {
        self.map(|x| x * s)
    }

    fn unscale(self, s: T) -> Self {
        self.map(|x| x / s)
    }
}

impl<T, const D: usize> Operand for Vector<T, D> {
    const IS_LINEAR_ALGEBRA: bool = true;
}

impl<T, const R: usize, const C: usize> Operand for Matrix<T, R, C> {
    const IS_LINEAR_ALGEBRA: bool = true;
}

/// Scales a [`Vector`] or a [`Matrix`] by a scalar
///
/// ```
/// use matrix::{dispatch, Vector2};
/// let v = dispatch::scale(Vector2::new(1, -2), 3);
/// assert_eq!(v, Vector2::new(3, -6));
/// ```
pub fn scale<A: LinearAlgebra>(value: A, s: A::Scalar) -> A {
    value.scale(s)
}

/// The linear-algebra product `lhs * rhs`. Only conformant shapes compile.
///
/// ```
/// use matrix::{dispatch, Matrix2, Vector2};
/// let m = Matrix2::new(0, 1, 1, 0);
/// assert_eq!(dispatch::matmul(m, Vector2::new(3, 4)), Vector2::new(4, 3));
/// assert_eq!(dispatch::matmul(m, m), Matrix2::identity());
/// ```
pub fn matmul<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: LinearAlgebra + std::ops::Mul<R>,
    R: LinearAlgebra<Scalar = L::Scalar>,
{
    lhs * rhs
}

macro_rules! scalar_ops {
    ( $t:ty ) => {
        impl Operand for $t {
            const IS_LINEAR_ALGEBRA: bool = false;
        }

        impl<const D: usize> std::ops::Mul<$t> for Vector<$t, D> {
            type Output = Self;
            fn mul(self, s: $t) -> Self {
                LinearAlgebra::scale(self, s)
            }
        }

        impl<const D: usize> std::ops::Mul<Vector<$t, D>> for $t {
            type Output = Vector<$t, D>;
            fn mul(self, v: Vector<$t, D>) -> Vector<$t, D> {
                LinearAlgebra::scale(v, self)
            }
        }

        impl<const D: usize> std::ops::MulAssign<$t> for Vector<$t, D> {
            fn mul_assign(&mut self, s: $t) {
                *self = LinearAlgebra::scale(*self, s);
            }
        }

        impl<const D: usize> std::ops::Div<$t> for Vector<$t, D> {
            type Output = Self;
            fn div(self, s: $t) -> Self {
                LinearAlgebra::unscale(self, s)
            }
        }

        impl<const D: usize> std::ops::DivAssign<$t> for Vector<$t, D> {
            fn div_assign(&mut self, s: $t) {
                *self = LinearAlgebra::unscale(*self, s);
            }
        }

        impl<const R: usize, const C: usize> std::ops::Mul<$t> for Matrix<$t, R, C> {
            type Output = Self;
            fn mul(self, s: $t) -> Self {
                LinearAlgebra::scale(self, s)
            }
        }

        impl<const R: usize, const C: usize> std::ops::Mul<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;
            fn mul(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                LinearAlgebra::scale(m, self)
            }
        }

        impl<const R: usize, const C: usize> std::ops::MulAssign<$t> for Matrix<$t, R, C> {
            fn mul_assign(&mut self, s: $t) {
                *self = LinearAlgebra::scale(*self, s);
            }
        }

        impl<const R: usize, const C: usize> std::ops::Div<$t> for Matrix<$t, R, C> {
            type Output = Self;
            fn div(self, s: $t) -> Self {
                LinearAlgebra::unscale(self, s)
            }
        }

        impl<const R: usize, const C: usize> std::ops::DivAssign<$t> for Matrix<$t, R, C> {
            fn div_assign(&mut self, s: $t) {
                *self = LinearAlgebra::unscale(*self, s);
            }
        }
    };
}

for_each_scalar!(scalar_ops);

/***********/
/* TESTING */
/***********/
