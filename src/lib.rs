/*
MIT License
Copyright (c)  Germán Molina
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

//! Fixed-size vectors and matrices, plus a few shapes built on them.
//!
//! This crate puts the workspace members together. The `float` feature
//! makes the default floating point type `f32` (it is `f64` otherwise).
//!
//! ```
//! use linmath::{Matrix3, Rect, Vector2I, Vector3};
//!
//! let x = Vector3::new(1, 0, 0);
//! let y = Vector3::new(0, 1, 0);
//! assert_eq!(x.cross(&y), Vector3::new(0, 0, 1));
//! assert_eq!(Matrix3::identity() * x, x);
//!
//! let mut r = Rect::new(2, 2);
//! r.include(Vector2I::new(5, 1));
//! assert_eq!(r.size(), Vector2I::new(5, 2));
//! ```

pub use ::geometry;
pub use ::matrix;

pub use ::geometry::Rect;
pub use ::matrix::*;
