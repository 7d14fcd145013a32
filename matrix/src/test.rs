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

use crate::Float;

use super::*;

#[test]
fn test_default() {
    let m = Matrix3::<Float>::default();
    assert_eq!(m.size(), (3, 3));
    for row in m.rows().iter() {
        for v in row.iter() {
            assert_eq!(*v, 0.0);
        }
    }
    assert_eq!(Matrix::<i32, 6, 9>::default(), Matrix::zero());
}

#[test]
fn test_display() {
    let t = Matrix2::<i32>::identity();
    assert_eq!(format!("{}", t), "\n\t1, 0, \n\t0, 1, ");

    let t = Matrix::<Float, 5, 5>::identity();
    println!("I = {}", t);
}

#[test]
fn test_new() {
    let m = Matrix2x3::new(1, 2, 3, 4, 5, 6);
    assert_eq!(m.size(), (2, 3));
    assert_eq!(Matrix2x3::<i32>::NROWS, 2);
    assert_eq!(Matrix2x3::<i32>::NCOLS, 3);
    assert_eq!(*m.row(0), Vector3::new(1, 2, 3));
    assert_eq!(m[1], Vector3::new(4, 5, 6));
    assert_eq!(m.column(2), Vector2::new(3, 6));

    let m = Matrix4x2::new(1, 2, 3, 4, 5, 6, 7, 8);
    assert_eq!(m[(3, 1)], 8);
    assert_eq!(m[(2, 0)], 5);

    let m = Matrix3x4::new(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(m[(i, j)], i * 4 + j);
        }
    }
}

#[test]
fn test_from_rows() {
    let rows = [Vector2::new(1., 2.), Vector2::new(3., 4.), Vector2::new(5., 6.)];
    let m = Matrix3x2::from_rows(rows);
    assert_eq!(m.rows(), &rows);
    assert_eq!(Matrix3x2::from(rows), m);
    assert_eq!(Matrix::from([[1., 2.], [3., 4.], [5., 6.]]), m);

    let back: [[f64; 2]; 3] = m.into();
    assert_eq!(back, [[1., 2.], [3., 4.], [5., 6.]]);
}

#[test]
fn test_from_data() {
    let data: Vec<f64> = vec![1.9, 2.1, -3.5, 4., 5., 6.];

    let m = Matrix::<Float, 3, 2>::from_data(&data).unwrap();
    assert_eq!(m[(0, 0)], 1.9);
    assert_eq!(m[(1, 0)], -3.5);
    assert_eq!(m[(2, 1)], 6.);

    // Elements are cast
    let m = Matrix2x3::<i32>::from_data(&data).unwrap();
    assert_eq!(m, Matrix2x3::new(1, 2, -3, 4, 5, 6));

    // Wrong number of elements
    assert!(Matrix2::<Float>::from_data(&data).is_err());
    assert!(Matrix4::<Float>::from_data(&data).is_err());
}

#[test]
fn test_get_set() {
    let mut m = Matrix::<i64, 5, 6>::zero();
    for r in 0..5 {
        for c in 0..6 {
            let v = (r * 6 + c) as i64;
            assert_eq!(m.set(r, c, v).unwrap(), v);
        }
    }
    for r in 0..5 {
        for c in 0..6 {
            assert_eq!(m.get(r, c).unwrap(), (r * 6 + c) as i64);
            assert_eq!(m[(r, c)], (r * 6 + c) as i64);
        }
    }

    // Out of bounds
    assert!(m.get(5, 0).is_err());
    assert!(m.get(0, 6).is_err());
    assert!(m.set(5, 5, 1).is_err());
    assert!(m.set(4, 6, 1).is_err());
}

#[test]
fn test_add_to_scale_element() {
    let mut m = Matrix2::new(1., 2., 3., 4.);
    m.add_to_element(0, 1, 10.).unwrap();
    assert_eq!(m[(0, 1)], 12.);
    m.scale_element(1, 1, -2.).unwrap();
    assert_eq!(m[(1, 1)], -8.);

    assert!(m.add_to_element(2, 0, 1.).is_err());
    assert!(m.scale_element(0, 2, 1.).is_err());
    assert_eq!(m, Matrix2::new(1., 12., 3., -8.));
}

#[test]
fn test_row_mut_index_mut() {
    let mut m = Matrix3::<u8>::zero();
    *m.row_mut(1) = Vector3::new(1, 2, 3);
    m[2][0] = 9;
    m[(0, 2)] = 7;
    assert_eq!(m, Matrix3::new(0, 0, 7, 1, 2, 3, 9, 0, 0));
}

#[test]
fn test_identity() {
    let i = Matrix4::<Float>::identity();
    for r in 0..4 {
        for c in 0..4 {
            let exp = if r == c { 1.0 } else { 0.0 };
            assert_eq!(i[(r, c)], exp);
        }
    }

    let a = Matrix4x3::new(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
    assert_eq!(Matrix4::identity() * a, a);
    assert_eq!(a * Matrix3::identity(), a);

    let big = Matrix::<i32, 7, 7>::identity();
    let b = Matrix::<i32, 7, 7>::from_fn(|r, c| (r * 7 + c) as i32);
    assert_eq!(big * b, b);
    assert_eq!(b * big, b);
}

#[test]
fn test_diag() {
    let d = Matrix3::diag(Vector3::new(1, 2, 3));
    assert_eq!(d, Matrix3::new(1, 0, 0, 0, 2, 0, 0, 0, 3));
    assert_eq!(d * Vector3::new(1, 1, 1), Vector3::new(1, 2, 3));
}

#[test]
fn test_transpose() {
    let m = Matrix2x3::new(1, 2, 3, 4, 5, 6);
    let t = m.transpose();
    assert_eq!(t, Matrix3x2::new(1, 4, 2, 5, 3, 6));
    assert_eq!(t.transpose(), m);

    // (AB)^T = B^T A^T
    let b = Matrix3x2::new(7, 8, 9, 10, 11, 12);
    assert_eq!((m * b).transpose(), b.transpose() * m.transpose());
}

#[test]
fn test_add_sub() {
    let a = Matrix2::new(5, 6, 7, 8);
    let b = Matrix2::new(1, 2, 3, 4);
    assert_eq!(a + b, Matrix2::new(6, 8, 10, 12));

    // a - b, not b - a
    assert_eq!(a - b, Matrix2::new(4, 4, 4, 4));
    assert_eq!(b - a, Matrix2::new(-4, -4, -4, -4));
    assert_eq!(-(a - b), b - a);

    let mut c = a;
    c -= b;
    assert_eq!(c, Matrix2::new(4, 4, 4, 4));
    c += b;
    assert_eq!(c, a);

    let a = Matrix::<f32, 5, 2>::splat(1.5);
    let b = Matrix::<f32, 5, 2>::splat(0.5);
    assert_eq!(a - b, Matrix::splat(1.));
}

#[test]
fn test_map_cast() {
    let m = Matrix2::<f64>::new(1.2, -3.7, 4.5, 0.);
    let i: Matrix2<i32> = m.cast();
    assert_eq!(i, Matrix2::new(1, -3, 4, 0));
    assert_eq!(i.map(|x| x * x), Matrix2::new(1, 9, 16, 0));
}

#[test]
fn test_prod() {
    let a = Matrix2x3::new(1, 2, 3, 4, 5, 6);
    let b = Matrix3x2::new(7, 8, 9, 10, 11, 12);
    assert_eq!(a * b, Matrix2::new(58, 64, 139, 154));

    let a = Matrix2x3::<Float>::from_data(&[1., 2., 3., 4., 5., 6.]).unwrap();
    let b = Matrix3x2::<Float>::from_data(&[7., 8., 9., 10., 11., 12.]).unwrap();
    let c = a * b;
    assert_eq!(c[(0, 0)], 58.);
    assert_eq!(c[(0, 1)], 64.);
    assert_eq!(c[(1, 0)], 139.);
    assert_eq!(c[(1, 1)], 154.);

    let mut a = a;
    a *= Matrix3::diag(Vector3::new(2., 2., 2.));
    assert_eq!(a, Matrix2x3::new(2., 4., 6., 8., 10., 12.));
}

#[test]
fn test_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Matrix2::<i32>::identity());
    set.insert(Matrix2::new(1, 0, 0, 1));
    set.insert(Matrix2::zero());
    assert_eq!(set.len(), 2);
}
