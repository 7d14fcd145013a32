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

use crate::traits::Scalar;
use crate::vector::Vector;
use num_traits::AsPrimitive;
use std::hash::{Hash, Hasher};

/// The main Structure in this library: a matrix of `R` rows and `C`
/// columns, stored as `R` row-[`Vector`]s of `C` components each.
///
/// Both sizes are part of the type, so multiplying non-conformant
/// matrices does not compile:
///
/// ```compile_fail
/// use matrix::{Matrix2x3, Matrix2};
/// let a = Matrix2x3::<f64>::zero();
/// let b = Matrix2::<f64>::zero();
/// let _ = a * b; // 2x3 times 2x2
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T, const R: usize, const C: usize> {
    // Ordered by row, going left to right, and up and down.
    pub(crate) rows: [Vector<T, C>; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    const VALID_SHAPE: () = assert!(
        R >= 2 && C >= 2,
        "a Matrix needs at least 2 rows and 2 columns"
    );

    /// The number of rows
    pub const NROWS: usize = R;

    /// The number of columns
    pub const NCOLS: usize = C;
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from its rows
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SHAPE;
        Self { rows }
    }

    /// Creates a [`Matrix`] from an array of rows
    ///
    /// ```
    /// use matrix::Matrix2x3;
    /// let m = Matrix2x3::from_array([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_array(data: [[T; C]; R]) -> Self {
        Self::from_rows(data.map(Vector::from_array))
    }

    /// Creates a [`Matrix`] by calling `f(row, column)` for each element
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_rows(core::array::from_fn(|i| Vector::from_fn(|j| f(i, j))))
    }

    /// Creates a `Matrix` full of zeroes
    pub fn zero() -> Self {
        Self::from_rows([Vector::zero(); R])
    }

    /// Creates a `Matrix` full of values `v`
    pub fn splat(v: T) -> Self {
        Self::from_rows([Vector::splat(v); R])
    }

    /// Creates a `Matrix` from its elements, ordered by row. The elements
    /// are cast into `T` with `as` semantics.
    ///
    /// Returns an error if `data` does not contain exactly `R * C` elements.
    pub fn from_data<U: AsPrimitive<T>>(data: &[U]) -> Result<Self, String> {
        if data.len() != R * C {
            return Err(format!("When creating Matrix: Number of rows (nrows = {}) and cols (ncols = {}) does not match length of data (data.len() = {})... (nrows * ncols = {})", R, C, data.len(), R * C));
        }
        Ok(Self::from_fn(|i, j| data[i * C + j].as_()))
    }

    /// Casts every element into another numeric type, with `as` semantics
    pub fn cast<U: Scalar>(self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
    {
        Matrix::from_rows(self.rows.map(|r| r.cast()))
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (R, C)
    }

    /// Borrows a row
    ///
    /// # Panics
    /// Panics if `nrow >= R`
    pub fn row(&self, nrow: usize) -> &Vector<T, C> {
        &self.rows[nrow]
    }

    /// Borrows a row mutably
    ///
    /// # Panics
    /// Panics if `nrow >= R`
    pub fn row_mut(&mut self, nrow: usize) -> &mut Vector<T, C> {
        &mut self.rows[nrow]
    }

    /// Borrows all the rows
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.rows
    }

    /// Copies a column into a [`Vector`]
    ///
    /// # Panics
    /// Panics if `ncol >= C`
    pub fn column(&self, ncol: usize) -> Vector<T, R> {
        Vector::from_fn(|i| self.rows[i].data[ncol])
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<T, String> {
        if nrow < R && ncol < C {
            Ok(self.rows[nrow].data[ncol])
        } else {
            Err(format!(
                "Row or Column out of bounds: ({}, {}) in a {} by {} Matrix",
                nrow, ncol, R, C
            ))
        }
    }

    /// Sets an element into the matrix
    pub fn set(&mut self, nrow: usize, ncol: usize, v: T) -> Result<T, String> {
        if nrow < R && ncol < C {
            self.rows[nrow].data[ncol] = v;
            Ok(v)
        } else {
            Err(format!(
                "Row or Column out of bounds: ({}, {}) in a {} by {} Matrix",
                nrow, ncol, R, C
            ))
        }
    }

    /// Adds `v` to the element in position `nrow,ncol`.
    pub fn add_to_element(&mut self, nrow: usize, ncol: usize, v: T) -> Result<(), String> {
        let old = self.get(nrow, ncol)?;
        self.set(nrow, ncol, old + v)?;
        Ok(())
    }

    /// Multiplies the element in position `nrow,ncol` by `v`.
    pub fn scale_element(&mut self, nrow: usize, ncol: usize, v: T) -> Result<(), String> {
        let old = self.get(nrow, ncol)?;
        self.set(nrow, ncol, old * v)?;
        Ok(())
    }

    /// Swaps rows and columns
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.rows[j].data[i])
    }

    /// Applies `f` to every element
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::from_rows(self.rows.map(|r| r.map(&f)))
    }

    /// Multiplies every element by `s`
    pub fn scale(self, s: T) -> Self {
        Self::from_rows(self.rows.map(|r| r.scale(s)))
    }

    /// Divides every element by `s`
    pub fn unscale(self, s: T) -> Self {
        Self::from_rows(self.rows.map(|r| r.unscale(s)))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Creates an Identity matrix of size NxN
    ///
    /// ```
    /// use matrix::{Matrix3, Vector3};
    /// let v = Vector3::new(1, 2, 3);
    /// assert_eq!(Matrix3::identity() * v, v);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    pub fn diag(data: Vector<T, N>) -> Self {
        Self::from_fn(|i, j| if i == j { data.data[i] } else { T::zero() })
    }
}

/// Writes `new(...)`, taking the elements one by one ordered by row,
/// for a concrete shape.
macro_rules! flat_constructor {
    ($r:literal, $c:literal, $( [ $( $e:ident ),+ ] ),+ ) => {
        impl<T: Scalar> Matrix<T, $r, $c> {
            #[doc = concat!("Creates a ", stringify!($r), " by ", stringify!($c), " [`Matrix`] from its elements, ordered by row")]
            #[allow(clippy::too_many_arguments)]
            pub fn new( $( $( $e: T ),+ ),+ ) -> Self {
                Self::from_array([ $( [ $( $e ),+ ] ),+ ])
            }
        }
    };
}

flat_constructor!(2, 2, [m00, m01], [m10, m11]);
flat_constructor!(2, 3, [m00, m01, m02], [m10, m11, m12]);
flat_constructor!(2, 4, [m00, m01, m02, m03], [m10, m11, m12, m13]);
flat_constructor!(3, 2, [m00, m01], [m10, m11], [m20, m21]);
flat_constructor!(3, 3, [m00, m01, m02], [m10, m11, m12], [m20, m21, m22]);
flat_constructor!(
    3,
    4,
    [m00, m01, m02, m03],
    [m10, m11, m12, m13],
    [m20, m21, m22, m23]
);
flat_constructor!(4, 2, [m00, m01], [m10, m11], [m20, m21], [m30, m31]);
flat_constructor!(
    4,
    3,
    [m00, m01, m02],
    [m10, m11, m12],
    [m20, m21, m22],
    [m30, m31, m32]
);
flat_constructor!(
    4,
    4,
    [m00, m01, m02, m03],
    [m10, m11, m12, m13],
    [m20, m21, m22, m23],
    [m30, m31, m32, m33]
);

/* TRAITS */

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rows.iter().zip(other.rows.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Scalar + Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: Scalar + Hash, const R: usize, const C: usize> Hash for Matrix<T, R, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state)
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows.iter() {
            write!(f, "\n\t")?;
            for v in row.iter() {
                write!(f, "{}, ", v)?;
            }
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    fn index(&self, nrow: usize) -> &Vector<T, C> {
        &self.rows[nrow]
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::IndexMut<usize> for Matrix<T, R, C> {
    fn index_mut(&mut self, nrow: usize) -> &mut Vector<T, C> {
        &mut self.rows[nrow]
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Index<(usize, usize)>
    for Matrix<T, R, C>
{
    type Output = T;

    fn index(&self, (nrow, ncol): (usize, usize)) -> &T {
        &self.rows[nrow].data[ncol]
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::IndexMut<(usize, usize)>
    for Matrix<T, R, C>
{
    fn index_mut(&mut self, (nrow, ncol): (usize, usize)) -> &mut T {
        &mut self.rows[nrow].data[ncol]
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_rows(core::array::from_fn(|i| self.rows[i] + other.rows[i]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_rows(core::array::from_fn(|i| self.rows[i] - other.rows[i]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, other: Self) {
        self.rows
            .iter_mut()
            .zip(other.rows.iter())
            .for_each(|(a, b)| *a += *b);
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::ops::SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, other: Self) {
        self.rows
            .iter_mut()
            .zip(other.rows.iter())
            .for_each(|(a, b)| *a -= *b);
    }
}

impl<T, const R: usize, const C: usize> std::ops::Neg for Matrix<T, R, C>
where
    T: Scalar + std::ops::Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_rows(self.rows.map(|r| -r))
    }
}

/* CONVERSIONS */

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(data: [[T; C]; R]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[Vector<T, C>; R]> for Matrix<T, R, C> {
    fn from(rows: [Vector<T, C>; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    fn from(m: Matrix<T, R, C>) -> Self {
        m.rows.map(|r| r.data)
    }
}
