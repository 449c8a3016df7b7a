//! Componentwise comparisons and boolean reductions.
//!
//! Comparing two vectors with `==` yields a single `bool`; these functions
//! return one `bool` per component instead.

use crate::{
    func::{map1, map2},
    scalar::{Numeric, Scalar},
    traits::VectorLike,
    vector::Vector,
};

macro_rules! compare_fns {
    ($($(#[$meta:meta])* $name:ident($bound:path) => $op:tt;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<A, B, const N: usize>(x: A, y: B) -> Vector<bool, N>
            where
                A: VectorLike<N>,
                B: VectorLike<N, Elem = A::Elem>,
                A::Elem: $bound,
            {
                map2(&x, &y, |x, y| x $op y)
            }
        )*
    };
}

compare_fns! {
    /// `x < y`, componentwise.
    less_than(Numeric) => <;
    /// `x <= y`, componentwise.
    less_than_equal(Numeric) => <=;
    /// `x > y`, componentwise.
    greater_than(Numeric) => >;
    /// `x >= y`, componentwise.
    greater_than_equal(Numeric) => >=;
    /// `x == y`, componentwise.
    equal(Scalar) => ==;
    /// `x != y`, componentwise.
    not_equal(Scalar) => !=;
}

/// `true` if any component of `x` is `true`.
#[inline]
pub fn any<V, const N: usize>(x: V) -> bool
where
    V: VectorLike<N, Elem = bool>,
{
    (0..N).any(|i| x.get(i))
}

/// `true` if every component of `x` is `true`.
#[inline]
pub fn all<V, const N: usize>(x: V) -> bool
where
    V: VectorLike<N, Elem = bool>,
{
    (0..N).all(|i| x.get(i))
}

/// The componentwise logical complement of `x`.
#[inline]
pub fn not<V, const N: usize>(x: V) -> Vector<bool, N>
where
    V: VectorLike<N, Elem = bool>,
{
    map1(&x, |b| !b)
}
