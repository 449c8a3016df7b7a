//! The shading-language function library, lifted over [`VectorLike`] values.
//!
//! Every function takes vectors, swizzle views, or raw scalars (as vectors
//! of one component) by value or by reference, and returns a fresh
//! [`Vector`] (or a scalar for reductions such as [`dot`]). Where the shading
//! language accepts a scalar in place of a vector argument, any count-one
//! value is broadcast.
//!
//! Float literals passed as broadcast arguments need a suffix (`0.5f32`),
//! since the element types of both arguments must agree.

mod common;
mod exponential;
mod geometric;
mod relational;
mod trig;

pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use relational::*;
pub use trig::*;

use crate::{scalar::Scalar, traits::VectorLike, vector::Vector};

/// Compile-time check that an argument of count `M` can be combined with
/// one of count `N`.
pub(crate) struct Broadcast<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> Broadcast<N, M> {
    pub(crate) const OK: () = assert!(M == N || M == 1, "argument must have the same size or a single component");
}

#[inline(always)]
const fn lane<const C: usize>(i: usize) -> usize {
    if C == 1 {
        0
    } else {
        i
    }
}

/// Applies `f` to every component of `x`.
#[inline]
pub(crate) fn map1<V, U, const N: usize>(x: &V, mut f: impl FnMut(V::Elem) -> U) -> Vector<U, N>
where
    V: VectorLike<N>,
    U: Scalar,
{
    Vector::from_fn(|i| f(x.get(i)))
}

/// Applies `f` componentwise, broadcasting `y` if it has one component.
#[inline]
pub(crate) fn map2<A, B, U, const N: usize, const M: usize>(
    x: &A,
    y: &B,
    mut f: impl FnMut(A::Elem, B::Elem) -> U,
) -> Vector<U, N>
where
    A: VectorLike<N>,
    B: VectorLike<M>,
    U: Scalar,
{
    let () = Broadcast::<N, M>::OK;
    Vector::from_fn(|i| f(x.get(i), y.get(lane::<M>(i))))
}

/// Applies `f` componentwise, broadcasting `y` and `z` if they have one
/// component.
#[inline]
pub(crate) fn map3<A, B, C, U, const N: usize, const M: usize, const K: usize>(
    x: &A,
    y: &B,
    z: &C,
    mut f: impl FnMut(A::Elem, B::Elem, C::Elem) -> U,
) -> Vector<U, N>
where
    A: VectorLike<N>,
    B: VectorLike<M>,
    C: VectorLike<K>,
    U: Scalar,
{
    let () = Broadcast::<N, M>::OK;
    let () = Broadcast::<N, K>::OK;
    Vector::from_fn(|i| f(x.get(i), y.get(lane::<M>(i)), z.get(lane::<K>(i))))
}
