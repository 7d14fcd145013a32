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

//! Shorthands for the common shapes.
//!
//! Every shape has a generic alias (e.g., `Matrix2x3<T>`) and one alias per
//! scalar, named after a suffix: `I` and `L` for `i32`, `B` for `i8`, `S`
//! for `i16`, `LL` for `i64`, `F` for `f32` and `D` for `f64`.
//! `Vec2`, `Mat4` and friends use the crate's `Float`.

use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::Float;

macro_rules! shape_aliases {
    ( $name:ident, $desc:literal, $ty:ident < $( $n:literal ),+ >,
      [ $( $suffixed:ident : $t:ty ),* ] ) => {
        #[doc = concat!("A ", $desc, " [`", stringify!($ty), "`]")]
        pub type $name<T> = $ty<T, $( $n ),+>;

        $(
            #[doc = concat!("A ", $desc, " [`", stringify!($ty), "`] of `", stringify!($t), "`")]
            pub type $suffixed = $name<$t>;
        )*
    };
}

shape_aliases!(Vector2, "2D", Vector<2>, [
    Vector2I: i32, Vector2B: i8, Vector2S: i16, Vector2L: i32,
    Vector2LL: i64, Vector2F: f32, Vector2D: f64
]);
shape_aliases!(Vector3, "3D", Vector<3>, [
    Vector3I: i32, Vector3B: i8, Vector3S: i16, Vector3L: i32,
    Vector3LL: i64, Vector3F: f32, Vector3D: f64
]);
shape_aliases!(Vector4, "4D", Vector<4>, [
    Vector4I: i32, Vector4B: i8, Vector4S: i16, Vector4L: i32,
    Vector4LL: i64, Vector4F: f32, Vector4D: f64
]);

shape_aliases!(Matrix2, "2x2", Matrix<2, 2>, [
    Matrix2I: i32, Matrix2B: i8, Matrix2S: i16, Matrix2L: i32,
    Matrix2LL: i64, Matrix2F: f32, Matrix2D: f64
]);
shape_aliases!(Matrix3, "3x3", Matrix<3, 3>, [
    Matrix3I: i32, Matrix3B: i8, Matrix3S: i16, Matrix3L: i32,
    Matrix3LL: i64, Matrix3F: f32, Matrix3D: f64
]);
shape_aliases!(Matrix4, "4x4", Matrix<4, 4>, [
    Matrix4I: i32, Matrix4B: i8, Matrix4S: i16, Matrix4L: i32,
    Matrix4LL: i64, Matrix4F: f32, Matrix4D: f64
]);

shape_aliases!(Matrix2x3, "2x3", Matrix<2, 3>, [
    Matrix2x3I: i32, Matrix2x3B: i8, Matrix2x3S: i16, Matrix2x3L: i32,
    Matrix2x3LL: i64, Matrix2x3F: f32, Matrix2x3D: f64
]);
shape_aliases!(Matrix2x4, "2x4", Matrix<2, 4>, [
    Matrix2x4I: i32, Matrix2x4B: i8, Matrix2x4S: i16, Matrix2x4L: i32,
    Matrix2x4LL: i64, Matrix2x4F: f32, Matrix2x4D: f64
]);
shape_aliases!(Matrix3x2, "3x2", Matrix<3, 2>, [
    Matrix3x2I: i32, Matrix3x2B: i8, Matrix3x2S: i16, Matrix3x2L: i32,
    Matrix3x2LL: i64, Matrix3x2F: f32, Matrix3x2D: f64
]);
shape_aliases!(Matrix3x4, "3x4", Matrix<3, 4>, [
    Matrix3x4I: i32, Matrix3x4B: i8, Matrix3x4S: i16, Matrix3x4L: i32,
    Matrix3x4LL: i64, Matrix3x4F: f32, Matrix3x4D: f64
]);
shape_aliases!(Matrix4x2, "4x2", Matrix<4, 2>, [
    Matrix4x2I: i32, Matrix4x2B: i8, Matrix4x2S: i16, Matrix4x2L: i32,
    Matrix4x2LL: i64, Matrix4x2F: f32, Matrix4x2D: f64
]);
shape_aliases!(Matrix4x3, "4x3", Matrix<4, 3>, [
    Matrix4x3I: i32, Matrix4x3B: i8, Matrix4x3S: i16, Matrix4x3L: i32,
    Matrix4x3LL: i64, Matrix4x3F: f32, Matrix4x3D: f64
]);

/// A 2D [`Vector`] of `Float`
pub type Vec2 = Vector<Float, 2>;
/// A 3D [`Vector`] of `Float`
pub type Vec3 = Vector<Float, 3>;
/// A 4D [`Vector`] of `Float`
pub type Vec4 = Vector<Float, 4>;
/// A 2x2 [`Matrix`] of `Float`
pub type Mat2 = Matrix<Float, 2, 2>;
/// A 3x3 [`Matrix`] of `Float`
pub type Mat3 = Matrix<Float, 3, 3>;
/// A 4x4 [`Matrix`] of `Float`
pub type Mat4 = Matrix<Float, 4, 4>;
