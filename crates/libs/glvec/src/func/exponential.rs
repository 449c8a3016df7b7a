//! Exponential functions.

use crate::{
    func::{map1, map2, trig::unary_float_fns},
    scalar::Floating,
    traits::VectorLike,
    vector::Vector,
};
use num_traits::Float;

unary_float_fns! {
    /// `e` raised to the power `x`.
    exp => Float::exp;
    /// The natural logarithm.
    log => Float::ln;
    /// 2 raised to the power `x`.
    exp2 => Float::exp2;
    /// The base 2 logarithm.
    log2 => Float::log2;
    /// The square root.
    sqrt => Float::sqrt;
    /// The reciprocal of the square root.
    inverse_sqrt => |x: V::Elem| x.sqrt().recip();
}

/// `x` raised to the power `y`.
#[inline]
pub fn pow<A, B, const N: usize, const M: usize>(x: A, y: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    A::Elem: Floating,
{
    map2(&x, &y, Float::powf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn exponentials() {
        assert_eq!(pow(vec3(2.0, 3.0, 4.0), vec3(2.0, 2.0, 0.5)), vec3(4.0, 9.0, 2.0));
        assert_eq!(pow(dvec2(2.0, 10.0), 3.0f64), dvec2(8.0, 1000.0));
        assert_eq!(exp2(vec2(3.0, -1.0)), vec2(8.0, 0.5));
        assert_eq!(log2(uvec2(8, 1).cast::<f32>()), vec2(3.0, 0.0));
        assert_eq!(sqrt(vec3(4.0, 9.0, 0.0)), vec3(2.0, 3.0, 0.0));
        assert_eq!(inverse_sqrt(vec2(4.0, 0.25)), vec2(0.5, 2.0));
        assert_relative_eq!(log(exp(1.5f64)).value(), 1.5);
    }

    #[test]
    fn exponentials_of_views() {
        let v = dvec4(1.0, 4.0, 16.0, 64.0);
        assert_eq!(sqrt(v.wzyx()), dvec4(8.0, 4.0, 2.0, 1.0));
        assert!(sqrt(-1.0f32).value().is_nan());
    }
}
