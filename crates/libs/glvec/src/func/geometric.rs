//! Geometric functions.

use crate::{scalar::Floating, traits::VectorLike, vector::Vector};
use num_traits::{Float, One, Zero};

/// The sum of the componentwise products of `x` and `y`.
#[inline]
pub fn dot<A, B, const N: usize>(x: A, y: B) -> A::Elem
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    (0..N).fold(A::Elem::zero(), |acc, i| acc + x.get(i) * y.get(i))
}

/// The Euclidean length of `x`.
#[inline]
pub fn length<V, const N: usize>(x: V) -> V::Elem
where
    V: VectorLike<N>,
    V::Elem: Floating,
{
    dot(&x, &x).sqrt()
}

/// The distance between `p0` and `p1`.
#[inline]
pub fn distance<A, B, const N: usize>(p0: A, p1: B) -> A::Elem
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    let d = Vector::<A::Elem, N>::from_fn(|i| p0.get(i) - p1.get(i));
    length(d)
}

/// The cross product of `x` and `y`.
#[inline]
pub fn cross<A, B>(x: A, y: B) -> Vector<A::Elem, 3>
where
    A: VectorLike<3>,
    B: VectorLike<3, Elem = A::Elem>,
    A::Elem: Floating,
{
    let [x0, x1, x2] = x.to_array();
    let [y0, y1, y2] = y.to_array();
    Vector::new([x1 * y2 - y1 * x2, x2 * y0 - y2 * x0, x0 * y1 - y0 * x1])
}

/// `x` scaled to a length of one.
#[inline]
pub fn normalize<V, const N: usize>(x: V) -> Vector<V::Elem, N>
where
    V: VectorLike<N>,
    V::Elem: Floating,
{
    let len = length(&x);
    Vector::from_fn(|i| x.get(i) / len)
}

/// `n` if `dot(nref, i) < 0`, `-n` otherwise.
#[inline]
pub fn faceforward<A, B, C, const N: usize>(n: A, i: B, nref: C) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    C: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    if dot(&nref, &i) < A::Elem::zero() {
        n.to_vector()
    } else {
        Vector::from_fn(|k| -n.get(k))
    }
}

/// The reflection of the incident vector `i` on the surface of normal `n`.
///
/// `n` should be normalized.
#[inline]
pub fn reflect<A, B, const N: usize>(i: A, n: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    let d = dot(&n, &i);
    let two = A::Elem::one() + A::Elem::one();
    Vector::from_fn(|k| i.get(k) - two * d * n.get(k))
}

/// The refraction of the incident vector `i` through the surface of normal
/// `n`, for the ratio of indices of refraction `eta`.
///
/// Returns the zero vector on total internal reflection. `i` and `n` should
/// be normalized.
#[inline]
pub fn refract<A, B, const N: usize>(i: A, n: B, eta: A::Elem) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    let one = A::Elem::one();
    let d = dot(&n, &i);
    let k = one - eta * eta * (one - d * d);
    if k < A::Elem::zero() {
        return Vector::splat(A::Elem::zero());
    }
    let s = eta * d + k.sqrt();
    Vector::from_fn(|c| eta * i.get(c) - s * n.get(c))
}
