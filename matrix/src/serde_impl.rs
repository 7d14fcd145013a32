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

//! Vectors are written as a sequence of `D` elements, and matrices as a
//! sequence of `R` rows.

use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Scalar + Serialize, const D: usize> Serialize for Vector<T, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(D)?;
        for v in self.iter() {
            tup.serialize_element(v)?;
        }
        tup.end()
    }
}

impl<T: Scalar + Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(R)?;
        for row in self.rows.iter() {
            tup.serialize_element(row)?;
        }
        tup.end()
    }
}

/// Reads exactly `N` elements of type `E` into an array.
fn read_array<'de, A, E, const N: usize>(mut seq: A, what: &str) -> Result<[E; N], A::Error>
where
    A: SeqAccess<'de>,
    E: Deserialize<'de> + Copy + Default,
{
    let mut data = [E::default(); N];
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(i, &what))?;
    }
    if seq.next_element::<de::IgnoredAny>()?.is_some() {
        return Err(de::Error::invalid_length(N + 1, &what));
    }
    Ok(data)
}

struct VectorVisitor<T, const D: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const D: usize> Visitor<'de> for VectorVisitor<T, D> {
    type Value = Vector<T, D>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} numbers", D)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        let expected = format!("{} components", D);
        let data = read_array::<A, T, D>(seq, &expected)?;
        Ok(Vector::from_array(data))
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const D: usize> Deserialize<'de> for Vector<T, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_tuple(D, VectorVisitor::<T, D>(PhantomData))
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Visitor<'de>
    for MatrixVisitor<T, R, C>
{
    type Value = Matrix<T, R, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} rows of {} numbers", R, C)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        let expected = format!("{} rows", R);
        let rows = read_array::<A, Vector<T, C>, R>(seq, &expected)?;
        Ok(Matrix::from_rows(rows))
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_tuple(R, MatrixVisitor::<T, R, C>(PhantomData))
    }
}
