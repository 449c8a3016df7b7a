//! Integrations with other crates, each behind the cargo feature of the same
//! name.

#[cfg(feature = "serde")]
mod serde_impls {
    use crate::{scalar::Scalar, vector::Vector};
    use core::{fmt, marker::PhantomData};
    use serde::{
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialized as a sequence of exactly `N` components.
    impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for c in self.iter() {
                tuple.serialize_element(c)?;
            }
            tuple.end()
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

            impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for ComponentsVisitor<T, N> {
                type Value = Vector<T, N>;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a sequence of {} {} components", N, T::NAME)
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                    let mut components = [T::default(); N];
                    for (i, c) in components.iter_mut().enumerate() {
                        *c = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    }
                    Ok(Vector::new(components))
                }
            }

            deserializer.deserialize_tuple(N, ComponentsVisitor::<T, N>(PhantomData))
        }
    }

}

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use crate::{matrix::Matrix, vector::Vector};
    use bytemuck::{Pod, Zeroable};

    // SAFETY: `Vector` is a transparent wrapper around `[T; N]`.
    unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
    // SAFETY: as above; arrays of `Pod` have no padding.
    unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

    // SAFETY: `Matrix` is a transparent wrapper around `[Vector<T, R>; C]`.
    unsafe impl<T: Zeroable, const C: usize, const R: usize> Zeroable for Matrix<T, C, R> {}
    // SAFETY: as above.
    unsafe impl<T: Pod, const C: usize, const R: usize> Pod for Matrix<T, C, R> {}

    #[cfg(test)]
    mod tests {
        use crate::prelude::*;

        #[test]
        fn casts() {
            let v = vec4(1.0, 2.0, 3.0, 4.0);
            assert_eq!(bytemuck::cast::<Vec4, [f32; 4]>(v), [1.0, 2.0, 3.0, 4.0]);
            let vs = [uvec2(1, 2), uvec2(3, 4)];
            assert_eq!(bytemuck::cast_slice::<UVec2, u32>(&vs), &[1, 2, 3, 4]);
            let m: Mat2 = bytemuck::cast([1.0f32, 2.0, 3.0, 4.0]);
            assert_eq!(m[1], vec2(3.0, 4.0));
            assert_eq!(<IVec3 as bytemuck::Zeroable>::zeroed(), ivec3(0, 0, 0));
        }
    }
}

#[cfg(feature = "glam")]
mod glam_impls {
    use crate::{matrix::Matrix, vector::Vector};

    macro_rules! glam_vectors {
        ($($t:ty: $g2:ident, $g3:ident, $g4:ident;)*) => {
            $(
                glam_vectors!(@one $t, $g2, 2, x y);
                glam_vectors!(@one $t, $g3, 3, x y z);
                glam_vectors!(@one $t, $g4, 4, x y z w);
            )*
        };
        (@one $t:ty, $g:ident, $n:literal, $($c:ident)+) => {
            impl From<glam::$g> for Vector<$t, $n> {
                #[inline]
                fn from(v: glam::$g) -> Self { Self::new([$(v.$c),+]) }
            }

            impl From<Vector<$t, $n>> for glam::$g {
                #[inline]
                fn from(v: Vector<$t, $n>) -> Self {
                    let [$($c),+] = v.to_array();
                    glam::$g::new($($c),+)
                }
            }
        };
    }

    glam_vectors! {
        f32: Vec2, Vec3, Vec4;
        f64: DVec2, DVec3, DVec4;
        i32: IVec2, IVec3, IVec4;
        u32: UVec2, UVec3, UVec4;
        bool: BVec2, BVec3, BVec4;
    }

    macro_rules! glam_matrices {
        ($($t:ty: $($g:ident $n:literal),+;)*) => {
            $($(
                impl From<glam::$g> for Matrix<$t, $n, $n> {
                    #[inline]
                    fn from(m: glam::$g) -> Self { Self::from_fn(|c, r| m.col(c)[r]) }
                }

                impl From<Matrix<$t, $n, $n>> for glam::$g {
                    #[inline]
                    fn from(m: Matrix<$t, $n, $n>) -> Self {
                        glam::$g::from_cols_array(&core::array::from_fn(|i| m[i / $n][i % $n]))
                    }
                }
            )+)*
        };
    }

    glam_matrices! {
        f32: Mat2 2, Mat3 3, Mat4 4;
        f64: DMat2 2, DMat3 3, DMat4 4;
    }

}

#[cfg(feature = "approx")]
mod approx_impls {
    use crate::{
        scalar::{Promote, Scalar},
        vector::Vector,
    };
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    impl<T: Scalar + Promote<T> + AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
    where
        T::Epsilon: Copy,
    {
        type Epsilon = T::Epsilon;

        fn default_epsilon() -> T::Epsilon { T::default_epsilon() }

        fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
            self.iter().zip(other.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
        }
    }

    impl<T: Scalar + Promote<T> + RelativeEq, const N: usize> RelativeEq for Vector<T, N>
    where
        T::Epsilon: Copy,
    {
        fn default_max_relative() -> T::Epsilon { T::default_max_relative() }

        fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
            self.iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
        }
    }

    impl<T: Scalar + Promote<T> + UlpsEq, const N: usize> UlpsEq for Vector<T, N>
    where
        T::Epsilon: Copy,
    {
        fn default_max_ulps() -> u32 { T::default_max_ulps() }

        fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
            self.iter().zip(other.iter()).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::prelude::*;
        use approx::{assert_relative_eq, assert_ulps_eq};

        #[test]
        fn approximate_comparisons() {
            let a = vec3(0.1, 0.2, 0.3);
            let b = vec3(0.1 + 1.0e-7, 0.2, 0.3);
            assert_ne!(a, b);
            assert_relative_eq!(a, b);
            assert_ulps_eq!(dvec2(0.1 + 0.2, 1.0), dvec2(0.3, 1.0));
            assert!(!approx::abs_diff_eq!(a, vec3(0.1, 0.2, 0.4)));
        }
    }
}
