//! Column-major matrices of two to four columns and rows.

use crate::{
    scalar::{Numeric, Scalar},
    traits::VectorLike,
    vector::Vector,
};
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Compile-time check of a matrix shape.
struct Shape<const C: usize, const R: usize>;

impl<const C: usize, const R: usize> Shape<C, R> {
    const VALID: () = assert!(
        C >= 2 && C <= 4 && R >= 2 && R <= 4,
        "matrices have 2 to 4 columns and 2 to 4 rows"
    );
}

/// A matrix of `C` columns, each a [`Vector`] of `R` rows.
///
/// Indexing yields a column: `m[1][0]` is the first row of the second
/// column.
#[repr(transparent)]
#[derive(Clone, Copy, Hash, Debug)]
pub struct Matrix<T, const C: usize, const R: usize> {
    cols: [Vector<T, R>; C],
}

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a matrix from its columns.
    #[inline]
    pub const fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        let () = Shape::<C, R>::VALID;
        Self { cols }
    }

    /// Creates a matrix whose element at column `c` and row `r` is
    /// `f(c, r)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_cols(core::array::from_fn(|c| Vector::from_fn(|r| f(c, r))))
    }

    /// Creates a matrix with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self::from_cols([Vector::splat(value); C]) }

    /// Creates a matrix with `value` on the diagonal and zero elsewhere.
    #[inline]
    pub fn diagonal(value: T) -> Self { Self::from_fn(|c, r| if c == r { value } else { T::default() }) }

    /// Returns the columns.
    #[inline]
    pub const fn cols(&self) -> &[Vector<T, R>; C] { &self.cols }

    /// Returns the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector<T, R> { self.cols[index] }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, C> { Vector::from_fn(|c| self.cols[c][index]) }

    /// Returns the matrix with columns and rows swapped.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, R, C> { Matrix::from_fn(|c, r| self.cols[r][c]) }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U: Scalar>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, C, R> {
        Matrix::from_cols(self.cols.map(|col| col.map(&mut f)))
    }

    fn zip_with(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|c, r| f(self.cols[c][r], rhs.cols[c][r]))
    }
}

impl<T: Numeric, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a matrix with ones on the diagonal and zero elsewhere.
    #[inline]
    pub fn identity() -> Self { Self::diagonal(T::one()) }

    /// Multiplies the two matrices element by element.
    #[inline]
    pub fn comp_mul(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a * b) }

    /// Returns the matrix `c * transpose(r)`, of `C` columns and `R` rows.
    pub fn outer_product<A, B>(c: A, r: B) -> Self
    where
        A: VectorLike<R, Elem = T>,
        B: VectorLike<C, Elem = T>,
    {
        Self::from_fn(|i, j| c.get(j) * r.get(i))
    }
}

impl<T: Numeric, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self { Self::identity() }
}

impl<T: Scalar, const C: usize, const R: usize> PartialEq for Matrix<T, C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.as_array() == b.as_array())
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, index: usize) -> &Vector<T, R> { &self.cols[index] }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector<T, R> { &mut self.cols[index] }
}

impl<T: Numeric, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|r| (0..C).fold(T::zero(), |acc, c| acc + self.cols[c][r] * v[c]))
    }
}

impl<T: Numeric, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, m: Matrix<T, C, R>) -> Vector<T, C> {
        Vector::from_fn(|c| (0..R).fold(T::zero(), |acc, r| acc + self[r] * m.cols[c][r]))
    }
}

impl<T: Numeric, const K: usize, const C: usize, const R: usize> Mul<Matrix<T, K, C>> for Matrix<T, C, R> {
    type Output = Matrix<T, K, R>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, K, R> { Matrix::from_cols(rhs.cols.map(|col| self * col)) }
}

impl<T: Numeric, const C: usize, const R: usize> Add for Matrix<T, C, R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a + b) }
}

impl<T: Numeric, const C: usize, const R: usize> Sub for Matrix<T, C, R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a - b) }
}

impl<T: Numeric + Neg<Output = T>, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Self;

    fn neg(self) -> Self { self.map(|a| -a) }
}

macro_rules! scalar_matrix_ops {
    ($($t:ty),*) => {
        $(
            impl<const C: usize, const R: usize> Mul<$t> for Matrix<$t, C, R> {
                type Output = Self;

                fn mul(self, s: $t) -> Self { self.map(|a| a * s) }
            }

            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn mul(self, m: Matrix<$t, C, R>) -> Matrix<$t, C, R> { m.map(|a| self * a) }
            }

            impl<const C: usize, const R: usize> Div<$t> for Matrix<$t, C, R> {
                type Output = Self;

                fn div(self, s: $t) -> Self { self.map(|a| a / s) }
            }
        )*
    };
}

scalar_matrix_ops!(i32, u32, f32, f64);

macro_rules! matrix_aliases {
    ($($prefix:ident $alias:ident: $t:ty => $what:literal;)*) => {
        paste::paste! {
            $(
                #[doc = "A 2x2 matrix of " $what "."]
                pub type [<$alias 2>] = Matrix<$t, 2, 2>;
                #[doc = "A 3x3 matrix of " $what "."]
                pub type [<$alias 3>] = Matrix<$t, 3, 3>;
                #[doc = "A 4x4 matrix of " $what "."]
                pub type [<$alias 4>] = Matrix<$t, 4, 4>;
                #[doc = "A matrix of " $what " with 2 columns and 3 rows."]
                pub type [<$alias 2 x3>] = Matrix<$t, 2, 3>;
                #[doc = "A matrix of " $what " with 2 columns and 4 rows."]
                pub type [<$alias 2 x4>] = Matrix<$t, 2, 4>;
                #[doc = "A matrix of " $what " with 3 columns and 2 rows."]
                pub type [<$alias 3 x2>] = Matrix<$t, 3, 2>;
                #[doc = "A matrix of " $what " with 3 columns and 4 rows."]
                pub type [<$alias 3 x4>] = Matrix<$t, 3, 4>;
                #[doc = "A matrix of " $what " with 4 columns and 2 rows."]
                pub type [<$alias 4 x2>] = Matrix<$t, 4, 2>;
                #[doc = "A matrix of " $what " with 4 columns and 3 rows."]
                pub type [<$alias 4 x3>] = Matrix<$t, 4, 3>;

                #[doc = "Creates a [`" [<$alias 2>] "`] from its columns."]
                #[inline]
                pub const fn [<$prefix 2>](x: Vector<$t, 2>, y: Vector<$t, 2>) -> [<$alias 2>] {
                    Matrix::from_cols([x, y])
                }

                #[doc = "Creates a [`" [<$alias 3>] "`] from its columns."]
                #[inline]
                pub const fn [<$prefix 3>](x: Vector<$t, 3>, y: Vector<$t, 3>, z: Vector<$t, 3>) -> [<$alias 3>] {
                    Matrix::from_cols([x, y, z])
                }

                #[doc = "Creates a [`" [<$alias 4>] "`] from its columns."]
                #[inline]
                pub const fn [<$prefix 4>](
                    x: Vector<$t, 4>,
                    y: Vector<$t, 4>,
                    z: Vector<$t, 4>,
                    w: Vector<$t, 4>,
                ) -> [<$alias 4>] {
                    Matrix::from_cols([x, y, z, w])
                }
            )*
        }
    };
}

matrix_aliases! {
    mat Mat: f32 => "single-precision floats";
    dmat DMat: f64 => "double-precision floats";
}

static_assertions::assert_eq_size!(Mat3, [f32; 9]);
static_assertions::assert_eq_size!(DMat4x2, [f64; 8]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn construction() {
        let m = mat2(vec2(1.0, 2.0), vec2(3.0, 4.0));
        assert_eq!(m[1], vec2(3.0, 4.0));
        assert_eq!(m.row(0), vec2(1.0, 3.0));
        assert_eq!(m.col(0), vec2(1.0, 2.0));
        assert_eq!(Mat3::identity(), Mat3::diagonal(1.0));
        assert_eq!(Mat3::default()[2], vec3(0.0, 0.0, 1.0));
        assert_eq!(Mat2x3::splat(2.0).cols(), &[vec3(2.0, 2.0, 2.0); 2]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Mat2x3::from_fn(|c, r| (c * 10 + r) as f32);
        let t: Mat3x2 = m.transpose();
        assert_eq!(t.row(1), m.col(1));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn products() {
        let m = mat2(vec2(1.0, 2.0), vec2(3.0, 4.0));
        assert_eq!(m * vec2(1.0, 1.0), vec2(4.0, 6.0));
        assert_eq!(vec2(1.0, 1.0) * m, vec2(3.0, 7.0));
        assert_eq!(m * Mat2::identity(), m);
        assert_eq!(m * m, mat2(vec2(7.0, 10.0), vec2(15.0, 22.0)));

        let a = Mat3x2::from_fn(|c, r| (c + r) as f32);
        let b = Mat2x3::from_fn(|c, r| (c * r) as f32);
        let p: Mat2 = a * b;
        assert_eq!(p, mat2(vec2(0.0, 0.0), vec2(5.0, 8.0)));
    }

    #[test]
    fn elementwise() {
        let m = DMat2::from_fn(|c, r| (c * 2 + r + 1) as f64);
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, DMat2::splat(0.0));
        assert_eq!(-m, m * -1.0);
        assert_eq!(m / 2.0, 0.5f64 * m);
        assert_eq!(m.comp_mul(m), DMat2::from_fn(|c, r| ((c * 2 + r + 1) as f64).powi(2)));
    }

    #[test]
    fn outer_product() {
        let m = Mat3x2::outer_product(vec2(1.0, 2.0), vec3(3.0, 4.0, 5.0));
        assert_eq!(m[0], vec2(3.0, 6.0));
        assert_eq!(m[2], vec2(5.0, 10.0));
        assert_eq!(m.row(1), vec3(6.0, 8.0, 10.0));
    }

    #[test]
    fn columns_are_writable() {
        let mut m = Mat2::identity();
        m[1] = vec2(5.0, 6.0);
        m[0][1] = 7.0;
        assert_eq!(m, mat2(vec2(1.0, 7.0), vec2(5.0, 6.0)));
    }
}
