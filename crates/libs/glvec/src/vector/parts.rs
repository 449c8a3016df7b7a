//! Building a vector out of scalars and smaller vectors.

use crate::{
    pattern::Pattern,
    scalar::{SafeCast, Scalar, ScalarCast},
    storage::{CellStorage, Slots, Storage},
    swizzle::Swizzle,
    vector::Vector,
};
use core::marker::PhantomData;

/// One argument of a mixed constructor: a scalar or a vector-like value.
pub trait Part {
    /// The component type.
    type Elem: Scalar;

    /// Number of components contributed.
    const COUNT: usize;

    /// Returns the component at `index`.
    fn component(&self, index: usize) -> Self::Elem;
}

macro_rules! impl_part_for_scalar {
    ($($t:ty),*) => {
        $(
            impl Part for $t {
                type Elem = $t;
                const COUNT: usize = 1;

                #[inline(always)]
                fn component(&self, _index: usize) -> $t { *self }
            }
        )*
    };
}

impl_part_for_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Scalar, const N: usize> Part for Vector<T, N> {
    type Elem = T;
    const COUNT: usize = N;

    #[inline(always)]
    fn component(&self, index: usize) -> T { self.storage.0[index] }
}

impl<T: Scalar, const N: usize> Part for Storage<T, N> {
    type Elem = T;
    const COUNT: usize = N;

    #[inline(always)]
    fn component(&self, index: usize) -> T { self.0[index] }
}

impl<T: Scalar, const N: usize> Part for CellStorage<T, N> {
    type Elem = T;
    const COUNT: usize = N;

    #[inline(always)]
    fn component(&self, index: usize) -> T { self.get(index) }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> Part for Swizzle<'a, S, C, P> {
    type Elem = S::Elem;
    const COUNT: usize = C;

    #[inline(always)]
    fn component(&self, index: usize) -> S::Elem { self.get(index) }
}

impl<P: Part + ?Sized> Part for &P {
    type Elem = P::Elem;
    const COUNT: usize = P::COUNT;

    #[inline(always)]
    fn component(&self, index: usize) -> P::Elem { (**self).component(index) }
}

/// A tuple of [`Part`]s, consumed left to right.
pub trait Parts<T: Scalar> {
    /// Total number of components.
    const COUNT: usize;

    /// Writes every component, converted explicitly, into `out`.
    fn write_cast(&self, out: &mut [T]);
}

/// A tuple of [`Part`]s whose components all convert implicitly to `T`.
pub trait SafeParts<T: Scalar>: Parts<T> {
    /// Writes every component, converted implicitly, into `out`.
    fn write_safe(&self, out: &mut [T]);
}

macro_rules! impl_parts {
    ($($p:ident),+) => {
        paste::paste! {
            impl<T: Scalar, $($p: Part),+> Parts<T> for ($($p,)+)
            where
                $($p::Elem: ScalarCast<T>,)+
            {
                const COUNT: usize = 0 $(+ $p::COUNT)+;

                fn write_cast(&self, out: &mut [T]) {
                    let ($([<$p:lower>],)+) = self;
                    let mut offset = 0;
                    $(
                        for i in 0..$p::COUNT {
                            out[offset + i] = [<$p:lower>].component(i).cast();
                        }
                        offset += $p::COUNT;
                    )+
                    debug_assert_eq!(offset, out.len());
                }
            }

            impl<T: Scalar, $($p: Part),+> SafeParts<T> for ($($p,)+)
            where
                $($p::Elem: ScalarCast<T> + SafeCast<T>,)+
            {
                fn write_safe(&self, out: &mut [T]) {
                    let ($([<$p:lower>],)+) = self;
                    let mut offset = 0;
                    $(
                        for i in 0..$p::COUNT {
                            out[offset + i] = [<$p:lower>].component(i).safe_cast();
                        }
                        offset += $p::COUNT;
                    )+
                    debug_assert_eq!(offset, out.len());
                }
            }

            impl<T: Scalar, const N: usize, $($p: Part),+> From<($($p,)+)> for Vector<T, N>
            where
                $($p::Elem: ScalarCast<T> + SafeCast<T>,)+
            {
                #[inline]
                fn from(parts: ($($p,)+)) -> Self {
                    let () = Arity::<($($p,)+), T, N>::EXACT;
                    let mut components = [T::default(); N];
                    parts.write_safe(&mut components);
                    Vector::new(components)
                }
            }
        }
    };
}

impl_parts!(A);
impl_parts!(A, B);
impl_parts!(A, B, C);
impl_parts!(A, B, C, D);

/// Compile-time check that the parts fill exactly `N` components.
pub(crate) struct Arity<P, T, const N: usize>(PhantomData<fn() -> (P, T)>);

impl<P: Parts<T>, T: Scalar, const N: usize> Arity<P, T, N> {
    pub(crate) const EXACT: () = assert!(P::COUNT == N, "constructor arguments do not sum to the vector size");
}

/// Compile-time check that a source of `M` components can fill `N`.
pub(crate) struct Prefix<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> Prefix<M, N> {
    pub(crate) const FITS: () = assert!(M >= N, "source vector is smaller than the target");
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, storage::Storage};

    #[test]
    fn mixed_construction() {
        let v = IVec4::from_parts((vec2(7.0, 8.0), -3, -5));
        assert_eq!(v, ivec4(7, 8, -3, -5));

        let v = Vec4::from_parts((1u8, ivec2(2, 3), 4.0f64));
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));

        let b = BVec3::from_parts((0.0f32, vec2(0.5, 0.0)));
        assert_eq!(b, bvec3(false, true, false));
    }

    #[test]
    fn mixed_construction_from_views() {
        let src = ivec4(1, 2, 3, 4);
        let v = IVec4::from_parts((src.wz(), src.x(), 9));
        assert_eq!(v, ivec4(4, 3, 1, 9));
        let v = IVec3::from_parts((&src.y(), &src.zw()));
        assert_eq!(v, ivec3(2, 3, 4));
    }

    #[test]
    fn mixed_construction_from_storages() {
        let storage = Storage::new([1, 2]);
        let v = IVec3::from_parts((storage, 3));
        assert_eq!(v, ivec3(1, 2, 3));

        let mut src = vec2(0.5, 1.5);
        let cells = src.alias();
        let v = DVec4::from_parts((cells, &storage));
        assert_eq!(v, dvec4(0.5, 1.5, 1.0, 2.0));
        cells.set(0, 4.0);
        let w: Vec3 = (2.0f32, cells).into();
        assert_eq!(w, vec3(2.0, 4.0, 1.5));
    }

    #[test]
    fn implicit_construction() {
        let v: DVec3 = (1.0f32, ivec2(2, 3)).into();
        assert_eq!(v, dvec3(1.0, 2.0, 3.0));
        let v: Vec4 = (vec2(1.0, 2.0), vec2(3.0, 4.0)).into();
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
        let v: UVec2 = (7u8, 9u16).into();
        assert_eq!(v, uvec2(7, 9));
    }
}
