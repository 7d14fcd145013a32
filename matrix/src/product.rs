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

//! Matrix-Matrix, Matrix-Vector and Vector-Matrix products.
//!
//! When every extent involved is 4 or less, each output element is
//! written as an explicit sum of products. Otherwise a plain triple loop
//! is used.

use crate::kernel::{self, Dim};
use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;

pub(crate) mod unrolled {
    use super::*;

    /// Element `(i, j)` of `l * r`
    pub(crate) fn entry<T: Scalar, const R: usize, const C: usize, const K: usize>(
        l: &Matrix<T, R, C>,
        r: &Matrix<T, C, K>,
        i: usize,
        j: usize,
    ) -> T {
        let a = &l.rows[i].data;
        let b = &r.rows;
        match C {
            2 => a[0] * b[0].data[j] + a[1] * b[1].data[j],
            3 => a[0] * b[0].data[j] + a[1] * b[1].data[j] + a[2] * b[2].data[j],
            4 => {
                a[0] * b[0].data[j]
                    + a[1] * b[1].data[j]
                    + a[2] * b[2].data[j]
                    + a[3] * b[3].data[j]
            }
            _ => super::looped::entry(l, r, i, j),
        }
    }

    pub(crate) fn mat_mat<T: Scalar, const R: usize, const C: usize, const K: usize>(
        l: &Matrix<T, R, C>,
        r: &Matrix<T, C, K>,
    ) -> Matrix<T, R, K> {
        Matrix::from_fn(|i, j| entry(l, r, i, j))
    }

    pub(crate) fn mat_vec<T: Scalar, const R: usize, const C: usize>(
        m: &Matrix<T, R, C>,
        v: &Vector<T, C>,
    ) -> Vector<T, R> {
        Vector::from_fn(|i| kernel::unrolled::dot(&m.rows[i].data, &v.data))
    }

    pub(crate) fn vec_mat<T: Scalar, const R: usize, const C: usize>(
        v: &Vector<T, R>,
        m: &Matrix<T, R, C>,
    ) -> Vector<T, C> {
        let a = &v.data;
        let b = &m.rows;
        Vector::from_fn(|j| match R {
            2 => a[0] * b[0].data[j] + a[1] * b[1].data[j],
            3 => a[0] * b[0].data[j] + a[1] * b[1].data[j] + a[2] * b[2].data[j],
            4 => {
                a[0] * b[0].data[j]
                    + a[1] * b[1].data[j]
                    + a[2] * b[2].data[j]
                    + a[3] * b[3].data[j]
            }
            _ => super::looped::vec_mat_entry(v, m, j),
        })
    }
}

pub(crate) mod looped {
    use super::*;

    /// Element `(i, j)` of `l * r`. The sum starts from the `k = 0` term,
    /// matching the order in which the unrolled expression is evaluated.
    pub(crate) fn entry<T: Scalar, const R: usize, const C: usize, const K: usize>(
        l: &Matrix<T, R, C>,
        r: &Matrix<T, C, K>,
        i: usize,
        j: usize,
    ) -> T {
        let row = &l.rows[i].data;
        let mut acc = row[0] * r.rows[0].data[j];
        for k in 1..C {
            acc += row[k] * r.rows[k].data[j];
        }
        acc
    }

    pub(crate) fn mat_mat<T: Scalar, const R: usize, const C: usize, const K: usize>(
        l: &Matrix<T, R, C>,
        r: &Matrix<T, C, K>,
    ) -> Matrix<T, R, K> {
        let mut ret = Matrix::<T, R, K>::zero();
        for i in 0..R {
            for j in 0..K {
                ret.rows[i].data[j] = entry(l, r, i, j);
            }
        }
        ret
    }

    pub(crate) fn mat_vec<T: Scalar, const R: usize, const C: usize>(
        m: &Matrix<T, R, C>,
        v: &Vector<T, C>,
    ) -> Vector<T, R> {
        Vector::from_fn(|i| kernel::looped::dot(&m.rows[i].data, &v.data))
    }

    pub(crate) fn vec_mat_entry<T: Scalar, const R: usize, const C: usize>(
        v: &Vector<T, R>,
        m: &Matrix<T, R, C>,
        j: usize,
    ) -> T {
        let mut acc = v.data[0] * m.rows[0].data[j];
        for k in 1..R {
            acc += v.data[k] * m.rows[k].data[j];
        }
        acc
    }

    pub(crate) fn vec_mat<T: Scalar, const R: usize, const C: usize>(
        v: &Vector<T, R>,
        m: &Matrix<T, R, C>,
    ) -> Vector<T, C> {
        Vector::from_fn(|j| vec_mat_entry(v, m, j))
    }
}

/// `l * r`
pub(crate) fn mat_mat<T: Scalar, const R: usize, const C: usize, const K: usize>(
    l: &Matrix<T, R, C>,
    r: &Matrix<T, C, K>,
) -> Matrix<T, R, K> {
    if Dim::<R>::UNROLLED && Dim::<C>::UNROLLED && Dim::<K>::UNROLLED {
        unrolled::mat_mat(l, r)
    } else {
        looped::mat_mat(l, r)
    }
}

/// `m * v`, with `v` as a column
pub(crate) fn mat_vec<T: Scalar, const R: usize, const C: usize>(
    m: &Matrix<T, R, C>,
    v: &Vector<T, C>,
) -> Vector<T, R> {
    if Dim::<R>::UNROLLED && Dim::<C>::UNROLLED {
        unrolled::mat_vec(m, v)
    } else {
        looped::mat_vec(m, v)
    }
}

/// `v * m`, with `v` as a row
pub(crate) fn vec_mat<T: Scalar, const R: usize, const C: usize>(
    v: &Vector<T, R>,
    m: &Matrix<T, R, C>,
) -> Vector<T, C> {
    if Dim::<R>::UNROLLED && Dim::<C>::UNROLLED {
        unrolled::vec_mat(v, m)
    } else {
        looped::vec_mat(v, m)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const K: usize> std::ops::Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    fn mul(self, other: Matrix<T, C, K>) -> Matrix<T, R, K> {
        mat_mat(&self, &other)
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::MulAssign<Matrix<T, C, C>>
    for Matrix<T, R, C>
{
    fn mul_assign(&mut self, other: Matrix<T, C, C>) {
        *self = mat_mat(self, &other);
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        mat_vec(&self, &v)
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, m: Matrix<T, R, C>) -> Vector<T, C> {
        vec_mat(&self, &m)
    }
}

impl<T: Scalar, const D: usize> std::ops::MulAssign<Matrix<T, D, D>> for Vector<T, D> {
    fn mul_assign(&mut self, m: Matrix<T, D, D>) {
        *self = vec_mat(self, &m);
    }
}

/***********/
/* TESTING */
/***********/
