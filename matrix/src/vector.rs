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

use crate::kernel;
use crate::traits::Scalar;
use num_traits::AsPrimitive;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A fixed-size vector of `D` components of type `T`.
///
/// The components live in a single `[T; D]`; the named accessors
/// (`x()`, `y()`, `z()`, `w()`) just index into it.
///
/// Comparisons with `<`, `>` and friends are **not** lexicographic: see
/// [`Vector::cmp_length`] and [`ByLength`], which order vectors by their
/// (squared) length.
#[derive(Debug, Clone, Copy)]
pub struct Vector<T, const D: usize> {
    pub(crate) data: [T; D],
}

impl<T, const D: usize> Vector<T, D> {
    /// Evaluated (and thus checked) when a constructor is monomorphized.
    const VALID_DIMENSION: () = assert!(D >= 2, "a Vector needs at least 2 components");

    /// The number of components
    pub const DIM: usize = D;
}

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Creates a [`Vector`] from an array with its components.
    pub fn from_array(data: [T; D]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_DIMENSION;
        Self { data }
    }

    /// Creates a [`Vector`] by calling `f` with the index of each component.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(core::array::from_fn(f))
    }

    /// Creates a [`Vector`] full of zeroes
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a [`Vector`] whose components are all `v`
    pub fn splat(v: T) -> Self {
        Self::from_array([v; D])
    }

    /// Creates a [`Vector`] from components of another numeric type,
    /// casting each of them with `as`.
    ///
    /// ```
    /// use matrix::Vector;
    /// let v = Vector::<f32, 3>::from_components([1, 2, 3]);
    /// assert_eq!(v, Vector::from_array([1., 2., 3.]));
    /// ```
    pub fn from_components<U: AsPrimitive<T>>(values: [U; D]) -> Self {
        Self::from_fn(|i| values[i].as_())
    }

    /// Casts every component into another numeric type, with `as` semantics
    /// (i.e., floats are truncated into integers, integers may wrap)
    pub fn cast<U: Scalar>(self) -> Vector<U, D>
    where
        T: AsPrimitive<U>,
    {
        Vector::from_components(self.data)
    }

    /// Borrows the components
    pub fn as_array(&self) -> &[T; D] {
        &self.data
    }

    /// Returns the components
    pub fn into_array(self) -> [T; D] {
        self.data
    }

    /// Borrows the components as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the components
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The number of components (i.e., `D`)
    pub fn len(&self) -> usize {
        D
    }

    /// Always `false`, as vectors have at least two components.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gets a component
    pub fn get(&self, i: usize) -> Result<T, String> {
        match self.data.get(i) {
            Some(v) => Ok(*v),
            None => Err(format!(
                "Component {} out of bounds for a Vector of {} components",
                i, D
            )),
        }
    }

    /// Sets a component
    pub fn set(&mut self, i: usize, v: T) -> Result<T, String> {
        match self.data.get_mut(i) {
            Some(c) => {
                *c = v;
                Ok(v)
            }
            None => Err(format!(
                "Component {} out of bounds for a Vector of {} components",
                i, D
            )),
        }
    }

    /// Applies `f` to every component
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::from_array(kernel::map(&self.data, f))
    }

    /// Multiplies every component by `s`
    pub fn scale(self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Divides every component by `s`
    pub fn unscale(self, s: T) -> Self {
        self.map(|x| x / s)
    }

    /// The dot product between two vectors
    ///
    /// ```
    /// use matrix::Vector3;
    /// let a = Vector3::new(1., 2., 3.);
    /// let b = Vector3::new(4., -5., 6.);
    /// assert_eq!(a.dot(&b), 12.);
    /// ```
    pub fn dot(&self, other: &Self) -> T {
        kernel::dot(&self.data, &other.data)
    }

    /// The squared length of the vector; i.e., `self.dot(self)`
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// The length of the vector.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Compares the lengths of `self` and `other`.
    ///
    /// Returns `None` if one of them is not comparable (e.g., `NaN`).
    pub fn cmp_length(&self, other: &Self) -> Option<Ordering> {
        self.length_squared().partial_cmp(&other.length_squared())
    }

    /// Checks whether `self` is shorter than `other`
    pub fn length_lt(&self, other: &Self) -> bool {
        self.length_squared() < other.length_squared()
    }

    /// Checks whether `self` is longer than `other`
    pub fn length_gt(&self, other: &Self) -> bool {
        self.length_squared() > other.length_squared()
    }

    /// Checks whether `self` is shorter than or as long as `other`
    pub fn length_le(&self, other: &Self) -> bool {
        self.length_squared() <= other.length_squared()
    }

    /// Checks whether `self` is longer than or as long as `other`
    pub fn length_ge(&self, other: &Self) -> bool {
        self.length_squared() >= other.length_squared()
    }
}

/// The dot product between two vectors. Same as `a.dot(&b)`
pub fn dot<T: Scalar, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    a.dot(b)
}

macro_rules! named_component {
    ($get:ident, $get_mut:ident, $i:literal) => {
        #[doc = concat!("Gets component number ", stringify!($i))]
        pub fn $get(&self) -> T {
            self.data[$i]
        }

        #[doc = concat!("Borrows component number ", stringify!($i), " mutably")]
        pub fn $get_mut(&mut self) -> &mut T {
            &mut self.data[$i]
        }
    };
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a new 2D [`Vector`]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    named_component!(x, x_mut, 0);
    named_component!(y, y_mut, 1);

    /// Appends a third component
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a new 3D [`Vector`]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    named_component!(x, x_mut, 0);
    named_component!(y, y_mut, 1);
    named_component!(z, z_mut, 2);

    /// The cross product between `self` and `other`, following the
    /// right-hand rule.
    ///
    /// ```
    /// use matrix::Vector3;
    /// let x = Vector3::new(1., 0., 0.);
    /// let y = Vector3::new(0., 1., 0.);
    /// assert_eq!(x.cross(&y), Vector3::new(0., 0., 1.));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drops the last component
    pub fn truncate(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.data[0], self.data[1])
    }

    /// Appends a fourth component
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a new 4D [`Vector`]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    named_component!(x, x_mut, 0);
    named_component!(y, y_mut, 1);
    named_component!(z, z_mut, 2);
    named_component!(w, w_mut, 3);

    /// Drops the last component
    pub fn truncate(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl Vector<i32, 3> {
    /// Interleaves the bits of the three components (`x` in bit 0,
    /// `y` in bit 1, `z` in bit 2, and so on), producing a Morton code.
    ///
    /// Only the lowest bits of each component survive, so this is meant for
    /// hashing and for spatial sorting of small grids.
    pub fn morton_code(&self) -> u64 {
        fn spread(v: i32) -> u64 {
            let mut x = (v as u64) & 0xFFFF_0000_0000_FFFF;
            x = (x | (x << 16)) & 0x00FF_0000_FF00_00FF;
            x = (x | (x << 8)) & 0xF00F_00F0_0F00_F00F;
            x = (x | (x << 4)) & 0x30C3_0C30_C30C_30C3;
            (x | (x << 2)) & 0x9249_2492_4924_9249
        }
        let [x, y, z] = self.data;
        spread(x) | (spread(y) << 1) | (spread(z) << 2)
    }
}

/// Wraps a [`Vector`] so that it compares (`==`, `<`, `>=`, etc.) by its
/// squared length instead of by its components.
///
/// ```
/// use matrix::{ByLength, Vector2};
/// let a = Vector2::new(3., 4.);
/// let b = Vector2::new(0., 6.);
/// assert!(ByLength(a) < ByLength(b));
/// assert!(ByLength(a) == ByLength(Vector2::new(5., 0.)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByLength<T, const D: usize>(pub Vector<T, D>);

impl<T: Scalar, const D: usize> PartialEq for ByLength<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.0.length_squared() == other.0.length_squared()
    }
}

impl<T: Scalar, const D: usize> PartialOrd for ByLength<T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.cmp_length(&other.0)
    }
}

/* TRAITS */

impl<T: Scalar, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const D: usize> PartialEq for Vector<T, D> {
    fn eq(&self, other: &Self) -> bool {
        kernel::eq(&self.data, &other.data)
    }
}

impl<T: Scalar + Eq, const D: usize> Eq for Vector<T, D> {}

impl<T: Scalar + Hash, const D: usize> Hash for Vector<T, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<T: Scalar, const D: usize> std::fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

impl<T: Scalar, const D: usize> std::ops::Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar, const D: usize> std::ops::IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar, const D: usize> std::ops::Add for Vector<T, D> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_array(kernel::zip_with(&self.data, &other.data, |a, b| a + b))
    }
}

impl<T: Scalar, const D: usize> std::ops::Sub for Vector<T, D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_array(kernel::zip_with(&self.data, &other.data, |a, b| a - b))
    }
}

impl<T: Scalar, const D: usize> std::ops::AddAssign for Vector<T, D> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar, const D: usize> std::ops::SubAssign for Vector<T, D> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Scalar + std::ops::Neg<Output = T>, const D: usize> std::ops::Neg for Vector<T, D> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

/* CONVERSIONS */

impl<T: Scalar, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(data: [T; D]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const D: usize> From<&[T; D]> for Vector<T, D> {
    fn from(data: &[T; D]) -> Self {
        Self::from_array(*data)
    }
}

impl<T: Scalar, const D: usize> From<Vector<T, D>> for [T; D] {
    fn from(v: Vector<T, D>) -> Self {
        v.data
    }
}

impl<T: Scalar, const D: usize> TryFrom<&[T]> for Vector<T, D> {
    type Error = String;

    fn try_from(values: &[T]) -> Result<Self, String> {
        if values.len() != D {
            return Err(format!(
                "Cannot build a Vector of {} components from {} values",
                D,
                values.len()
            ));
        }
        Ok(Self::from_fn(|i| values[i]))
    }
}

impl<T: Scalar> From<(T, T)> for Vector<T, 2> {
    fn from(t: (T, T)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl<T: Scalar> From<Vector<T, 2>> for (T, T) {
    fn from(v: Vector<T, 2>) -> Self {
        (v.data[0], v.data[1])
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector<T, 3> {
    fn from(t: (T, T, T)) -> Self {
        Self::new(t.0, t.1, t.2)
    }
}

impl<T: Scalar> From<Vector<T, 3>> for (T, T, T) {
    fn from(v: Vector<T, 3>) -> Self {
        (v.data[0], v.data[1], v.data[2])
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vector<T, 4> {
    fn from(t: (T, T, T, T)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }
}

impl<T: Scalar> From<Vector<T, 4>> for (T, T, T, T) {
    fn from(v: Vector<T, 4>) -> Self {
        (v.data[0], v.data[1], v.data[2], v.data[3])
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{Float, Vector2, Vector3, Vector4};

    #[test]
    fn test_new_and_named_components() {
        let v = Vector2::new(1, 2);
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);

        let mut v = Vector4::new(1., 2., 3., 4.);
        *v.w_mut() = 7.;
        assert_eq!(v[3], 7.);
        v[0] = -1.;
        assert_eq!(v.x(), -1.);
        assert_eq!(v.as_array(), &[-1., 2., 3., 7.]);
    }

    #[test]
    fn test_zero_default() {
        let z = Vector3::<Float>::zero();
        assert_eq!(z, Vector3::new(0., 0., 0.));
        assert_eq!(Vector::<i64, 7>::default(), Vector::splat(0));
    }

    #[test]
    fn test_from_components() {
        let v = Vector::<i32, 3>::from_components([1.9f64, -2.7, 3.0]);
        assert_eq!(v, Vector3::new(1, -2, 3));

        let w: Vector<f32, 5> = Vector::<u8, 5>::from_array([1, 2, 3, 4, 5]).cast();
        assert_eq!(w.as_slice(), &[1., 2., 3., 4., 5.]);
    }

    #[test]
    fn test_get_set() -> Result<(), String> {
        let mut v = Vector::<i32, 5>::zero();
        v.set(4, 12)?;
        assert_eq!(v.get(4)?, 12);
        assert!(v.get(5).is_err());
        assert!(v.set(5, 1).is_err());
        assert_eq!(v.len(), 5);
        assert!(!v.is_empty());
        assert_eq!(Vector::<i32, 5>::DIM, 5);
        Ok(())
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Vector2::new(1, 2) + Vector2::new(3, 4), Vector2::new(4, 6));

        // every component is subtracted, including the last one
        let a = Vector4::new(5, 6, 7, 8);
        let b = Vector4::new(1, 1, 1, 1);
        assert_eq!(a - b, Vector4::new(4, 5, 6, 7));
        assert_eq!(
            Vector3::new(1, 2, 3) - Vector3::new(3, 2, 1),
            Vector3::new(-2, 0, 2)
        );

        let mut c = a;
        c -= b;
        c += b;
        c += b;
        assert_eq!(c, Vector4::new(6, 7, 8, 9));
    }

    #[test]
    fn test_neg() {
        let v = Vector::<i32, 6>::from_array([1, -2, 3, -4, 5, -6]);
        assert_eq!(-v, Vector::from_array([-1, 2, -3, 4, -5, 6]));
        assert_eq!(-Vector3::new(1., 0., -2.), Vector3::new(-1., 0., 2.));
    }

    #[test]
    fn test_equality_matching_components() {
        // Each component has to match its counterpart, not just the last one.
        let a = Vector4::new(4, 4, 4, 4);
        let b = Vector4::new(1, 2, 3, 4);
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(b, Vector4::new(1, 2, 3, 4));

        let a = Vector::<u8, 6>::from_array([1, 2, 3, 4, 5, 6]);
        let mut b = a;
        assert_eq!(a, b);
        b[5] = 0;
        assert_ne!(a, b);
    }

    #[test]
    fn test_dot_length() {
        let v = Vector2::new(3., 4.);
        assert_eq!(v.length_squared(), 25.);
        assert_eq!(v.length(), 5.);

        let v = Vector2::new(3, 4);
        assert_eq!(v.length_squared(), 25);
        assert_eq!(v.length(), 5);

        let a = Vector::<i32, 5>::from_array([1, 2, 3, 4, 5]);
        let b = Vector::<i32, 5>::from_array([5, 4, 3, 2, 1]);
        assert_eq!(a.dot(&b), 35);
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn test_cross() {
        let x = Vector3::new(1, 0, 0);
        let y = Vector3::new(0, 1, 0);
        let z = Vector3::new(0, 0, 1);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), -z);

        let a = Vector3::new(1.5, -2., 3.);
        assert_eq!(a.cross(&a), Vector3::zero());
    }

    #[test]
    fn test_ordering_by_length() {
        let short = Vector3::new(1., 0., 0.);
        let long = Vector3::new(0., -3., 0.);

        // left operand against right operand
        assert!(short.length_lt(&long));
        assert!(!long.length_lt(&short));
        assert!(long.length_gt(&short));
        assert!(!short.length_gt(&long));
        assert!(short.length_le(&short));
        assert!(long.length_ge(&short));
        assert_eq!(short.cmp_length(&long), Some(Ordering::Less));
        assert_eq!(long.cmp_length(&short), Some(Ordering::Greater));

        // Not lexicographic
        let a = Vector2::new(10, 0);
        let b = Vector2::new(0, 11);
        assert!(ByLength(a) < ByLength(b));
        assert!(ByLength(b) >= ByLength(a));
        assert!(ByLength(Vector2::new(0, 10)) == ByLength(a));

        let nan = Vector2::new(Float::NAN, 0.);
        assert_eq!(nan.cmp_length(&Vector2::new(1., 1.)), None);
    }

    #[test]
    fn test_truncate_extend() {
        let v = Vector2::new(1, 2).extend(3).extend(4);
        assert_eq!(v, Vector4::new(1, 2, 3, 4));
        assert_eq!(v.truncate(), Vector3::new(1, 2, 3));
        assert_eq!(v.truncate().truncate(), Vector2::new(1, 2));
    }

    #[test]
    fn test_morton_code() {
        assert_eq!(Vector3::<i32>::new(0, 0, 0).morton_code(), 0);
        assert_eq!(Vector3::<i32>::new(1, 0, 0).morton_code(), 1);
        assert_eq!(Vector3::<i32>::new(0, 1, 0).morton_code(), 2);
        assert_eq!(Vector3::<i32>::new(0, 0, 1).morton_code(), 4);
        assert_eq!(Vector3::<i32>::new(1, 1, 1).morton_code(), 7);
        assert_eq!(Vector3::<i32>::new(2, 0, 0).morton_code(), 8);
        assert_eq!(Vector3::<i32>::new(3, 0, 1).morton_code(), 13);
    }

    #[test]
    fn test_conversions() -> Result<(), String> {
        let v: Vector3<i32> = (1, 2, 3).into();
        let t: (i32, i32, i32) = v.into();
        assert_eq!(t, (1, 2, 3));

        let v = Vector::from([1u16, 2, 3, 4, 5]);
        let a: [u16; 5] = v.into();
        assert_eq!(a, [1, 2, 3, 4, 5]);

        let slice: &[f32] = &[1., 2.];
        let v = Vector2::<f32>::try_from(slice)?;
        assert_eq!(v, Vector2::new(1., 2.));
        assert!(Vector3::<f32>::try_from(slice).is_err());

        let v: Vector4<u8> = (1, 2, 3, 4).into();
        let t: (u8, u8, u8, u8) = v.into();
        assert_eq!(t, (1, 2, 3, 4));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vector3::new(1, -2, 3)), "(1, -2, 3)");
        assert_eq!(format!("{}", Vector2::new(0.5, 2.)), "(0.5, 2)");
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Vector3::new(1, 2, 3));
        set.insert(Vector3::new(1, 2, 3));
        set.insert(Vector3::new(3, 2, 1));
        assert_eq!(set.len(), 2);
    }
}
