//! Angle and trigonometry functions.

use crate::{
    func::{map1, map2},
    scalar::Floating,
    traits::VectorLike,
    vector::Vector,
};
use num_traits::Float;

macro_rules! unary_float_fns {
    ($($(#[$meta:meta])* $name:ident => $f:expr;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<V, const N: usize>(x: V) -> Vector<V::Elem, N>
            where
                V: VectorLike<N>,
                V::Elem: Floating,
            {
                map1(&x, $f)
            }
        )*
    };
}

pub(crate) use unary_float_fns;

unary_float_fns! {
    /// Converts degrees to radians.
    radians => |d: V::Elem| d.to_radians();
    /// Converts radians to degrees.
    degrees => |r: V::Elem| r.to_degrees();
    /// The sine.
    sin => Float::sin;
    /// The cosine.
    cos => Float::cos;
    /// The tangent.
    tan => Float::tan;
    /// The arc sine, in `[-pi/2, pi/2]`.
    asin => Float::asin;
    /// The arc cosine, in `[0, pi]`.
    acos => Float::acos;
    /// The arc tangent of `y_over_x`, in `[-pi/2, pi/2]`.
    atan => Float::atan;
    /// The hyperbolic sine.
    sinh => Float::sinh;
    /// The hyperbolic cosine.
    cosh => Float::cosh;
    /// The hyperbolic tangent.
    tanh => Float::tanh;
    /// The inverse hyperbolic sine.
    asinh => Float::asinh;
    /// The inverse hyperbolic cosine.
    acosh => Float::acosh;
    /// The inverse hyperbolic tangent.
    atanh => Float::atanh;
}

/// The arc tangent of `y / x`, using the signs of both to pick the quadrant.
/// The result is in `[-pi, pi]`.
#[inline]
pub fn atan2<A, B, const N: usize, const M: usize>(y: A, x: B) -> Vector<A::Elem, N>
where
    A: VectorLike<N>,
    B: VectorLike<M, Elem = A::Elem>,
    A::Elem: Floating,
{
    map2(&y, &x, Float::atan2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use approx::assert_relative_eq;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn angle_conversion() {
        let r = radians(vec3(0.0, 90.0, 180.0));
        assert_relative_eq!(r.as_array()[..], [0.0, FRAC_PI_2, PI][..]);
        let d = degrees(&r);
        assert_relative_eq!(d.as_array()[..], [0.0, 90.0, 180.0][..], epsilon = 1.0e-4);
    }

    #[test]
    fn trig_over_views_and_scalars() {
        let v = vec4(0.0, FRAC_PI_2, PI, 0.5);
        let s = sin(v.xyz());
        assert_relative_eq!(s.as_array()[..], [0.0, 1.0, 0.0][..], epsilon = 1.0e-6);
        assert_relative_eq!(cos(0.0f64).value(), 1.0);
        assert_relative_eq!(tan(FRAC_PI_4).value(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(asin(v.w()).value(), 0.5f32.asin());
        assert_relative_eq!(acosh(dvec2(1.0, 1.0)).as_array()[..], [0.0, 0.0][..]);
    }

    #[test]
    fn atan2_quadrants() {
        let a = atan2(vec4(1.0, 1.0, -1.0, -1.0), vec4(1.0, -1.0, -1.0, 1.0));
        assert_relative_eq!(a.as_array()[..], [FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, -FRAC_PI_4][..]);
        let b = atan2(vec2(1.0, -1.0), 0.0f32);
        assert_relative_eq!(b.as_array()[..], [FRAC_PI_2, -FRAC_PI_2][..]);
    }
}
