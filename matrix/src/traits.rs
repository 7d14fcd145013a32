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

pub(crate) mod sealed {
    /// Keeps the set of scalars (and of vector/matrix types) closed, so
    /// scalar-multiplication and product impls can never overlap.
    pub trait Sealed {}
}

/// A simple trait required for initializing some values (e.g., the
/// zero vector or the identity matrix)
pub trait OneZero {
    /// Returns an element considered to be 0.
    fn zero() -> Self;

    /// Returns an element considered to be 1.
    fn one() -> Self;
}

/// Define the basic algebraic requirements for the components of
/// a [`Vector`](crate::Vector) or a [`Matrix`](crate::Matrix).
///
/// This is implemented for the primitive integer and floating point
/// types only. Arithmetic is whatever the primitive does natively: overflow,
/// division by zero and `NaN` are not intercepted.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Clone
    + OneZero
    + Default
    + PartialEq
    + PartialOrd
    + Sized
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + Sync
    + Send
    + 'static
{
    /// The square root of the number. For integers this is the floor of the
    /// exact root; negative integers give zero.
    fn sqrt(self) -> Self;
}

macro_rules! impl_float_scalar {
    ( $( $t:ty ),* ) => {
        $(
            impl sealed::Sealed for $t {}

            impl OneZero for $t {
                fn zero() -> Self {
                    0.
                }
                fn one() -> Self {
                    1.
                }
            }

            impl Scalar for $t {
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ( $( $t:ty ),* ) => {
        $(
            impl sealed::Sealed for $t {}

            impl OneZero for $t {
                fn zero() -> Self {
                    0
                }
                fn one() -> Self {
                    1
                }
            }

            impl Scalar for $t {
                fn sqrt(self) -> Self {
                    // the f64 guess is inexact past 2^53
                    let mut r = (self as f64).sqrt() as $t;
                    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > self) {
                        r -= 1;
                    }
                    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= self) {
                        r += 1;
                    }
                    r
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Calls `$m!(type)` once for every type implementing [`Scalar`].
///
/// Used to write the scalar-multiplication operators, which have to
/// name the concrete scalar type so that `2.0 * v` is possible.
macro_rules! for_each_scalar {
    ( $m:ident ) => {
        $m!(f32);
        $m!(f64);
        $m!(i8);
        $m!(i16);
        $m!(i32);
        $m!(i64);
        $m!(i128);
        $m!(isize);
        $m!(u8);
        $m!(u16);
        $m!(u32);
        $m!(u64);
        $m!(u128);
        $m!(usize);
    };
}
pub(crate) use for_each_scalar;

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_one_zero() {
        assert_eq!(<f64 as OneZero>::zero(), 0.0);
        assert_eq!(<f32 as OneZero>::one(), 1.0);
        assert_eq!(<i8 as OneZero>::zero(), 0);
        assert_eq!(<u64 as OneZero>::one(), 1);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Scalar::sqrt(25.0f64), 5.0);
        assert_eq!(Scalar::sqrt(16.0f32), 4.0);
        assert_eq!(Scalar::sqrt(25i32), 5);
        // rounds towards zero
        assert_eq!(Scalar::sqrt(26i32), 5);
        assert_eq!(Scalar::sqrt(35u8), 5);
        assert!(Scalar::sqrt(-1.0f64).is_nan());
        assert_eq!(Scalar::sqrt(-4i32), 0);
        assert_eq!(Scalar::sqrt(255u8), 15);
    }

    #[test]
    fn test_sqrt_large_integers() {
        let r = 3037000499u64;
        assert_eq!(Scalar::sqrt(r * r), r);
        assert_eq!(Scalar::sqrt(r * r - 1), r - 1);
        assert_eq!(Scalar::sqrt(u64::MAX), 4294967295);
        assert_eq!(Scalar::sqrt(i64::MAX), 3037000499);

        let r = 18446744073709551557u128;
        assert_eq!(Scalar::sqrt(r * r - 1), r - 1);
        assert_eq!(Scalar::sqrt(u128::MAX), u64::MAX as u128);
    }
}
