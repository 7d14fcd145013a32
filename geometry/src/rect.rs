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

use matrix::Vector2I;

/// An axis-aligned rectangle on an integer grid, described by its
/// top-left corner (the origin) and its size.
///
/// `top` grows downwards, as in screen coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The horizontal position of the origin
    pub left: i32,
    /// The vertical position of the origin
    pub top: i32,
    /// The horizontal extent
    pub width: i32,
    /// The vertical extent
    pub height: i32,
}

impl Rect {
    /// Creates a new [`Rect`] of a certain size, with its origin at `(0, 0)`
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_origin(0, 0, width, height)
    }

    /// Creates a new [`Rect`] from its origin and size
    pub fn with_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a new [`Rect`] of size `size`, with its origin at `(0, 0)`
    pub fn from_size(size: Vector2I) -> Self {
        Self::new(size.x(), size.y())
    }

    /// Creates a new [`Rect`] from its origin and size
    pub fn from_origin_size(origin: Vector2I, size: Vector2I) -> Self {
        Self::with_origin(origin.x(), origin.y(), size.x(), size.y())
    }

    /// The top-left corner
    pub fn origin(&self) -> Vector2I {
        Vector2I::new(self.left, self.top)
    }

    /// The width and height
    pub fn size(&self) -> Vector2I {
        Vector2I::new(self.width, self.height)
    }

    /// The corner opposite to the origin
    pub fn far_corner(&self) -> Vector2I {
        self.origin() + self.size()
    }

    /// Grows the width and height by `delta`, keeping the origin.
    pub fn expand(&mut self, delta: Vector2I) -> &mut Self {
        self.width += delta.x();
        self.height += delta.y();
        self
    }

    /// Grows the [`Rect`] just enough to reach `point`.
    ///
    /// When the point lies left of (or above) the origin, the origin moves
    /// to it and the width (or height) grows by the same amount, so the far
    /// edge stays where it was. Only moving the origin would shrink the
    /// covered area on the opposite side.
    ///
    /// ```
    /// use geometry::Rect;
    /// use matrix::Vector2I;
    ///
    /// let mut r = Rect::with_origin(10, 10, 5, 5);
    /// r.include(Vector2I::new(8, 20));
    /// assert_eq!(r, Rect::with_origin(8, 10, 7, 10));
    /// ```
    pub fn include(&mut self, point: Vector2I) -> &mut Self {
        let dt = point - self.origin();

        if dt.x() < 0 {
            self.left = point.x();
            self.width -= dt.x();
        } else if dt.x() > self.width {
            self.width = dt.x();
        }

        if dt.y() < 0 {
            self.top = point.y();
            self.height -= dt.y();
        } else if dt.y() > self.height {
            self.height = dt.y();
        }

        self
    }

    /// Same as [`Rect::include`], with the coordinates given separately
    pub fn include_xy(&mut self, x: i32, y: i32) -> &mut Self {
        self.include(Vector2I::new(x, y))
    }

    /// Grows the [`Rect`] so that it covers `other` as well
    pub fn merge(&mut self, other: &Rect) -> &mut Self {
        self.include(other.origin()).include(other.far_corner())
    }

    /// Moves the origin by `delta`, keeping the size
    pub fn translate(&mut self, delta: Vector2I) -> &mut Self {
        self.left += delta.x();
        self.top += delta.y();
        self
    }
}
