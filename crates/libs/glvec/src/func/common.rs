//! Common functions.

use crate::{
    func::{map1, map2, map3, trig::unary_float_fns},
    scalar::{Floating, Numeric},
    traits::VectorLike,
    vector::Vector,
};
use num_traits::{Float, One, Signed, Zero};

/// The absolute value.
#[inline]
pub fn abs<V, const N: usize>(x: V) -> Vector<V::Elem, N>
where
    V: VectorLike<N>,
    V::Elem: Numeric + Signed,
{
    map1(&x, |x| x.abs())
}

/// `1` if `x > 0`, `0` if `x == 0`, `-1` if `x < 0`.
#[inline]
pub fn sign<V, const N: usize>(x: V) -> Vector<V::Elem, N>
where
    V: VectorLike<N>,
    V::Elem: Numeric + Signed,
{
    map1(&x, |x| {
        if x > V::Elem::zero() {
            V::Elem::one()
        } else if x < V::Elem::zero() {
            -V::Elem::one()
        } else {
            x
        }
    })
}

/// Rounds half-way values to the nearest even integer.
fn round_half_even<T: Float>(x: T) -> T {
    let two = T::one() + T::one();
    let half = T::one() / two;
    if (x - x.trunc()).abs() == half {
        (x / two).round() * two
    } else {
        x.round()
    }
}

unary_float_fns! {
    /// The nearest integer less than or equal to `x`.
    floor => Float::floor;
    /// The nearest integer whose absolute value is not larger than `x`'s.
    trunc => Float::trunc;
    /// The nearest integer, half-way values away from zero.
    round => Float::round;
    /// The nearest integer, half-way values to the even one.
    round_even => round_half_even;
    /// The nearest integer greater than or equal to `x`.
    ceil => Float::ceil;
    /// `x - floor(x)`.
    fract => |x: V::Elem| x - x.floor();
}

/// The modulus `x - y * floor(x / y)`.
///
/// Unlike `%`, the result has the sign of `y`.
#[inline]
pub fn modulo<A, B, const N: usize, const M: usize>(x: A, y: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    A::Elem: Floating,
{
    map2(&x, &y, |x, y| x - y * (x / y).floor())
}

/// `y` if `y < x`, otherwise `x`.
#[inline]
pub fn min<A, B, const N: usize, const M: usize>(x: A, y: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    A::Elem: Numeric,
{
    map2(&x, &y, |x, y| if y < x { y } else { x })
}

/// `y` if `x < y`, otherwise `x`.
#[inline]
pub fn max<A, B, const N: usize, const M: usize>(x: A, y: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    A::Elem: Numeric,
{
    map2(&x, &y, |x, y| if x < y { y } else { x })
}

/// `min(max(x, lo), hi)`.
#[inline]
pub fn clamp<A, B, C, const N: usize, const M: usize, const K: usize>(x: A, lo: B, hi: C) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    C: VectorLike<K, Elem = A::Elem>,
    A::Elem: Numeric,
{
    map3(&x, &lo, &hi, |x, lo, hi| {
        let x = if x < lo { lo } else { x };
        if hi < x {
            hi
        } else {
            x
        }
    })
}

/// The linear blend `x * (1 - a) + y * a`.
#[inline]
pub fn mix<A, B, C, const N: usize, const M: usize, const K: usize>(x: A, y: B, a: C) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    C: VectorLike<K, Elem = A::Elem>,
    A::Elem: Floating,
{
    map3(&x, &y, &a, |x, y, a| x * (A::Elem::one() - a) + y * a)
}

/// Picks `y` where `a` is `true` and `x` elsewhere.
#[inline]
pub fn mix_select<A, B, C, const N: usize>(x: A, y: B, a: C) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    C: VectorLike<N, Elem = bool>,
{
    map3(&x, &y, &a, |x, y, a| if a { y } else { x })
}

/// `0` where `x < edge`, `1` elsewhere.
#[inline]
pub fn step<E, V, const M: usize, const N: usize>(edge: E, x: V) -> Vector<V::Elem, N>
where
    E: VectorLike<M, Elem = V::Elem>,
    V: VectorLike<N>,
    V::Elem: Floating,
{
    map2(&x, &edge, |x, edge| if x < edge { V::Elem::zero() } else { V::Elem::one() })
}

/// Hermite interpolation between `0` and `1` as `x` goes from `edge0` to
/// `edge1`.
#[inline]
pub fn smoothstep<E0, E1, V, const M: usize, const K: usize, const N: usize>(
    edge0: E0,
    edge1: E1,
    x: V,
) -> Vector<V::Elem, N>
where
    E0: VectorLike<M, Elem = V::Elem>,
    E1: VectorLike<K, Elem = V::Elem>,
    V: VectorLike<N>,
    V::Elem: Floating,
{
    map3(&x, &edge0, &edge1, |x, e0, e1| {
        let zero = V::Elem::zero();
        let one = V::Elem::one();
        let t = (x - e0) / (e1 - e0);
        let t = if t < zero {
            zero
        } else if t > one {
            one
        } else {
            t
        };
        let two = one + one;
        t * t * (two + one - two * t)
    })
}

/// `true` where `x` is a NaN.
#[inline]
pub fn is_nan<V, const N: usize>(x: V) -> Vector<bool, N>
where
    V: VectorLike<N>,
    V::Elem: Floating,
{
    map1(&x, Float::is_nan)
}

/// `true` where `x` is an infinity of either sign.
#[inline]
pub fn is_inf<V, const N: usize>(x: V) -> Vector<bool, N>
where
    V: VectorLike<N>,
    V::Elem: Floating,
{
    map1(&x, Float::is_infinite)
}

/// `a * b + c`, computed with a single rounding.
#[inline]
pub fn fma<A, B, C, const N: usize>(a: A, b: B, c: C) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<N, Elem = A::Elem>,
    C: VectorLike<N, Elem = A::Elem>,
    A::Elem: Floating,
{
    map3(&a, &b, &c, Float::mul_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn signs() {
        assert_eq!(abs(ivec3(-1, 0, 5)), ivec3(1, 0, 5));
        assert_eq!(abs(vec2(-0.5, 2.0)), vec2(0.5, 2.0));
        assert_eq!(sign(vec4(-3.0, 0.0, 2.0, -0.0)), vec4(-1.0, 0.0, 1.0, 0.0));
        assert_eq!(sign(ivec2(-7, 9)), ivec2(-1, 1));
    }

    #[test]
    fn rounding() {
        let v = vec4(1.5, 2.5, -2.5, -1.2);
        assert_eq!(floor(v), vec4(1.0, 2.0, -3.0, -2.0));
        assert_eq!(ceil(v), vec4(2.0, 3.0, -2.0, -1.0));
        assert_eq!(trunc(v), vec4(1.0, 2.0, -2.0, -1.0));
        assert_eq!(round(v), vec4(2.0, 3.0, -3.0, -1.0));
        assert_eq!(round_even(v), vec4(2.0, 2.0, -2.0, -1.0));
        assert_eq!(round_even(dvec2(3.5, 0.4)), dvec2(4.0, 0.0));
        assert_eq!(fract(vec2(1.25, -1.25)), vec2(0.25, 0.75));
    }

    #[test]
    fn modulo_follows_the_divisor_sign() {
        assert_eq!(modulo(vec3(5.5, -5.5, 5.5), vec3(2.0, 2.0, -2.0)), vec3(1.5, 0.5, -0.5));
        assert_eq!(modulo(vec2(7.0, -1.0), 4.0f32), vec2(3.0, 3.0));
    }

    #[test]
    fn min_max_clamp() {
        let v = ivec4(-5, 0, 5, 10);
        assert_eq!(min(v, 3), ivec4(-5, 0, 3, 3));
        assert_eq!(max(v, ivec4(0, -1, 6, 9)), ivec4(0, 0, 6, 10));
        assert_eq!(clamp(v, 0, 6), ivec4(0, 0, 5, 6));
        assert_eq!(clamp(vec2(-1.0, 2.0), vec2(0.0, 0.0), 1.0f32), vec2(0.0, 1.0));
        assert_eq!(min(uvec2(1, 2).yx(), uvec2(1, 2)), uvec2(1, 1));
    }

    #[test]
    fn blending() {
        assert_eq!(mix(vec2(0.0, 10.0), vec2(10.0, 20.0), 0.5f32), vec2(5.0, 15.0));
        assert_eq!(mix(0.0f32, 8.0f32, 0.25f32).value(), 2.0);
        assert_eq!(mix_select(ivec3(1, 2, 3), ivec3(4, 5, 6), bvec3(true, false, true)), ivec3(4, 2, 6));
        assert_eq!(step(0.5f32, vec3(0.0, 0.5, 1.0)), vec3(0.0, 1.0, 1.0));
        assert_eq!(step(vec2(1.0, 0.0), vec2(0.5, 0.5)), vec2(0.0, 1.0));
        assert_eq!(smoothstep(0.0f32, 1.0f32, vec3(-1.0, 0.5, 2.0)), vec3(0.0, 0.5, 1.0));
    }

    #[test]
    fn classification_and_fma() {
        let v = vec3(f32::NAN, f32::INFINITY, 1.0);
        assert_eq!(is_nan(v), bvec3(true, false, false));
        assert_eq!(is_inf(v), bvec3(false, true, false));
        assert_eq!(fma(vec2(2.0, 3.0), vec2(4.0, 5.0), vec2(1.0, 1.0)), vec2(9.0, 16.0));
    }
}
