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

//! Componentwise kernels over `[T; D]`.
//!
//! Every operation comes in two flavours: `unrolled` (one explicit
//! expression per component, for `D` in `2..=4`) and `looped` (a uniform
//! loop, for any `D`). The dispatching functions at the bottom pick one by
//! looking at [`Dim::UNROLLED`], which is an associated constant and thus
//! resolved when the function is monomorphized.

use crate::traits::Scalar;

/// Largest extent that gets hand-unrolled kernels.
pub(crate) const UNROLL_LIMIT: usize = 4;

/// A type-level dimension.
pub(crate) struct Dim<const N: usize>;

impl<const N: usize> Dim<N> {
    /// Whether kernels over this dimension are unrolled.
    pub(crate) const UNROLLED: bool = N >= 2 && N <= UNROLL_LIMIT;
}

pub(crate) mod unrolled {
    use crate::traits::Scalar;

    pub(crate) fn map<T: Copy, F: Fn(T) -> T, const D: usize>(a: &[T; D], f: F) -> [T; D] {
        let mut out = *a;
        match D {
            2 => {
                out[0] = f(a[0]);
                out[1] = f(a[1]);
            }
            3 => {
                out[0] = f(a[0]);
                out[1] = f(a[1]);
                out[2] = f(a[2]);
            }
            4 => {
                out[0] = f(a[0]);
                out[1] = f(a[1]);
                out[2] = f(a[2]);
                out[3] = f(a[3]);
            }
            _ => return super::looped::map(a, f),
        }
        out
    }

    pub(crate) fn zip_with<T: Copy, F: Fn(T, T) -> T, const D: usize>(
        a: &[T; D],
        b: &[T; D],
        f: F,
    ) -> [T; D] {
        let mut out = *a;
        match D {
            2 => {
                out[0] = f(a[0], b[0]);
                out[1] = f(a[1], b[1]);
            }
            3 => {
                out[0] = f(a[0], b[0]);
                out[1] = f(a[1], b[1]);
                out[2] = f(a[2], b[2]);
            }
            4 => {
                out[0] = f(a[0], b[0]);
                out[1] = f(a[1], b[1]);
                out[2] = f(a[2], b[2]);
                out[3] = f(a[3], b[3]);
            }
            _ => return super::looped::zip_with(a, b, f),
        }
        out
    }

    pub(crate) fn eq<T: PartialEq, const D: usize>(a: &[T; D], b: &[T; D]) -> bool {
        match D {
            2 => a[0] == b[0] && a[1] == b[1],
            3 => a[0] == b[0] && a[1] == b[1] && a[2] == b[2],
            4 => a[0] == b[0] && a[1] == b[1] && a[2] == b[2] && a[3] == b[3],
            _ => super::looped::eq(a, b),
        }
    }

    pub(crate) fn dot<T: Scalar, const D: usize>(a: &[T; D], b: &[T; D]) -> T {
        match D {
            2 => a[0] * b[0] + a[1] * b[1],
            3 => a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
            4 => a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
            _ => super::looped::dot(a, b),
        }
    }
}

pub(crate) mod looped {
    use crate::traits::Scalar;

    pub(crate) fn map<T: Copy, F: Fn(T) -> T, const D: usize>(a: &[T; D], f: F) -> [T; D] {
        core::array::from_fn(|i| f(a[i]))
    }

    pub(crate) fn zip_with<T: Copy, F: Fn(T, T) -> T, const D: usize>(
        a: &[T; D],
        b: &[T; D],
        f: F,
    ) -> [T; D] {
        core::array::from_fn(|i| f(a[i], b[i]))
    }

    pub(crate) fn eq<T: PartialEq, const D: usize>(a: &[T; D], b: &[T; D]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| x == y)
    }

    /// The accumulator starts at the first product (not at zero) so
    /// the rounding sequence is the same as the unrolled sum.
    pub(crate) fn dot<T: Scalar, const D: usize>(a: &[T; D], b: &[T; D]) -> T {
        a.iter()
            .zip(b.iter())
            .skip(1)
            .fold(a[0] * b[0], |acc, (x, y)| acc + *x * *y)
    }
}

pub(crate) fn map<T: Copy, F: Fn(T) -> T, const D: usize>(a: &[T; D], f: F) -> [T; D] {
    if Dim::<D>::UNROLLED {
        unrolled::map(a, f)
    } else {
        looped::map(a, f)
    }
}

pub(crate) fn zip_with<T: Copy, F: Fn(T, T) -> T, const D: usize>(
    a: &[T; D],
    b: &[T; D],
    f: F,
) -> [T; D] {
    if Dim::<D>::UNROLLED {
        unrolled::zip_with(a, b, f)
    } else {
        looped::zip_with(a, b, f)
    }
}

pub(crate) fn eq<T: PartialEq, const D: usize>(a: &[T; D], b: &[T; D]) -> bool {
    if Dim::<D>::UNROLLED {
        unrolled::eq(a, b)
    } else {
        looped::eq(a, b)
    }
}

pub(crate) fn dot<T: Scalar, const D: usize>(a: &[T; D], b: &[T; D]) -> T {
    if Dim::<D>::UNROLLED {
        unrolled::dot(a, b)
    } else {
        looped::dot(a, b)
    }
}

/***********/
/* TESTING */
/***********/
