//! The vector value type.

mod parts;

pub use parts::{Part, Parts, SafeParts};

use crate::{
    pattern::Pattern,
    scalar::{Promote, SafeCast, Scalar, ScalarCast},
    storage::{CellStorage, Storage},
    swizzle::Swizzle,
    traits::{VectorLike, VectorLikeMut},
};
use core::{
    fmt::{Debug, Formatter},
    ops::{Index, IndexMut},
};
use parts::{Arity, Prefix};

/// A vector of `N` components of type `T`, `N` in `[1, 4]`.
///
/// Components are read through swizzles (`v.x()`, `v.zyx()`) and indexing,
/// and written through indexing or through the aliased cells returned by
/// [`Vector::alias`].
#[repr(transparent)]
#[derive(Clone, Copy, Hash)]
pub struct Vector<T, const N: usize> {
    pub(crate) storage: Storage<T, N>,
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self {
            storage: Storage::new(components),
        }
    }

    /// Returns the number of components.
    #[inline(always)]
    pub const fn size(&self) -> usize { N }

    /// Returns the components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.storage.0 }

    /// Returns the components as a mutable array reference.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] { &mut self.storage.0 }

    /// Returns the storage block.
    #[inline]
    pub const fn storage(&self) -> &Storage<T, N> { &self.storage }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.storage.iter() }

    /// Returns an iterator over mutable references to the components.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.storage.iter_mut() }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector with all components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Creates a vector with all components set to the single component of
    /// `value`.
    #[inline]
    pub fn broadcast<V>(value: &V) -> Self
    where
        V: VectorLike<1> + ?Sized,
        V::Elem: SafeCast<T>,
    {
        Self::splat(value.get(0).safe_cast())
    }

    /// Creates a vector whose component `i` is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self { Self::new(core::array::from_fn(f)) }

    /// Creates a vector from scalars and vector-like values whose component
    /// counts sum to `N`, converting every component explicitly.
    ///
    /// ```
    /// use glvec::prelude::*;
    ///
    /// let v = IVec4::from_parts((vec2(7.0, 8.0), -3, -5));
    /// assert_eq!(v, ivec4(7, 8, -3, -5));
    /// ```
    ///
    /// Too few or too many components fail to compile:
    ///
    /// ```compile_fail,E0080
    /// use glvec::prelude::*;
    ///
    /// let v = IVec4::from_parts((ivec2(1, 2), 3));
    /// ```
    #[inline]
    pub fn from_parts<P: Parts<T>>(parts: P) -> Self {
        let () = Arity::<P, T, N>::EXACT;
        let mut components = [T::default(); N];
        parts.write_cast(&mut components);
        Self::new(components)
    }

    /// Creates a vector from the first `N` components of `src`.
    #[inline]
    pub fn from_prefix<V, const M: usize>(src: &V) -> Self
    where
        V: VectorLike<M> + ?Sized,
        V::Elem: SafeCast<T>,
    {
        let () = Prefix::<M, N>::FITS;
        Self::from_fn(|i| src.get(i).safe_cast())
    }

    /// Creates a vector from the first `N` components of `src`, converting
    /// them explicitly.
    #[inline]
    pub fn cast_prefix<V, const M: usize>(src: &V) -> Self
    where
        V: VectorLike<M> + ?Sized,
        V::Elem: ScalarCast<T>,
    {
        let () = Prefix::<M, N>::FITS;
        Self::from_fn(|i| src.get(i).cast())
    }

    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> T { self.storage.0[index] }

    /// Writes the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) { self.storage.0[index] = value; }

    /// Copies the components out into an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] { self.storage.0 }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, N> { Vector::new(self.storage.0.map(f)) }

    /// Explicitly converts every component to `U`.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N>
    where
        T: ScalarCast<U>,
    {
        self.map(ScalarCast::cast)
    }

    /// Implicitly converts every component to `U`.
    #[inline]
    pub fn convert<U: Scalar>(self) -> Vector<U, N>
    where
        T: SafeCast<U>,
    {
        self.map(SafeCast::safe_cast)
    }

    /// Borrows the vector as aliased cells.
    ///
    /// Any number of swizzle views can be taken from the returned cells and
    /// written at the same time; the vector sees every write once the borrow
    /// ends.
    ///
    /// ```
    /// use glvec::prelude::*;
    ///
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// let c = v.alias();
    /// c.xy().assign(&c.zz());
    /// assert_eq!(v, vec3(3.0, 3.0, 3.0));
    /// ```
    #[inline]
    pub fn alias(&mut self) -> &CellStorage<T, N> { self.storage.as_cells() }

    /// Returns the view selected by the pattern `P`.
    #[inline]
    pub fn swizzle<P: Pattern<K>, const K: usize>(&self, _selector: P) -> Swizzle<'_, Storage<T, N>, K, P> {
        Swizzle::new(&self.storage)
    }
}

impl<T: Scalar> Vector<T, 1> {
    /// Returns the single component.
    #[inline]
    pub fn value(&self) -> T { self.storage.0[0] }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::splat(T::default()) }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result { f.debug_tuple("Vector").field(&self.storage.0).finish() }
}

impl<T: Scalar + Promote<U>, U: Scalar, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.storage
            .iter()
            .zip(other.storage.iter())
            .all(|(&a, &b)| a.promote() == T::promote_rhs(b))
    }
}

impl<T: Scalar + Eq + Promote<T>, const N: usize> Eq for Vector<T, N> {}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T { &self.storage.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.storage.0[index] }
}

impl<T: Scalar, const N: usize> VectorLike<N> for Vector<T, N> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, index: usize) -> T { self.storage.0[index] }

    #[inline(always)]
    fn to_vector(&self) -> Vector<T, N> { *self }
}

impl<T: Scalar, const N: usize> VectorLikeMut<N> for Vector<T, N> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) { self.storage.0[index] = value; }

    #[inline(always)]
    fn set_components(&mut self, values: [T; N]) { self.storage.0 = values; }
}

impl<T: Scalar, const N: usize> From<T> for Vector<T, N> {
    #[inline]
    fn from(value: T) -> Self { Self::splat(value) }
}

impl<'a, S, const C: usize, P, T> From<Swizzle<'a, S, C, P>> for Vector<T, C>
where
    S: crate::storage::Slots,
    S::Elem: SafeCast<T>,
    P: Pattern<C>,
    T: Scalar,
{
    #[inline]
    fn from(view: Swizzle<'a, S, C, P>) -> Self { Self::from_fn(|i| view.get(i).safe_cast()) }
}

macro_rules! impl_from_vector {
    ($($to:ty: $($from:ty),*;)*) => {
        $($(
            impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
                #[inline]
                fn from(v: Vector<$from, N>) -> Self { v.convert() }
            }
        )*)*
    };
}

impl_from_vector! {
    i32: i8, i16, u8, u16;
    i64: i8, i16, i32, u8, u16, u32;
    u32: i8, i16, i32, u8, u16;
    u64: i8, i16, i32, i64, u8, u16, u32;
    f32: i8, i16, i32, i64, u8, u16, u32, u64;
    f64: i8, i16, i32, i64, u8, u16, u32, u64, f32;
}

macro_rules! impl_from_single {
    ($($t:ty),*) => {
        $(
            impl<T: Scalar + SafeCast<$t>> From<Vector<T, 1>> for $t {
                #[inline]
                fn from(v: Vector<T, 1>) -> $t { v.value().safe_cast() }
            }
        )*
    };
}

impl_from_single!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Declares the vector aliases and constructor functions of one element
/// type.
macro_rules! vector_aliases {
    ($($prefix:ident $alias:ident: $t:ty => $what:literal;)*) => {
        paste::paste! {
            $(
                #[doc = "A two-component vector of " $what "."]
                pub type [<$alias 2>] = Vector<$t, 2>;
                #[doc = "A three-component vector of " $what "."]
                pub type [<$alias 3>] = Vector<$t, 3>;
                #[doc = "A four-component vector of " $what "."]
                pub type [<$alias 4>] = Vector<$t, 4>;

                #[doc = "Creates a [`" [<$alias 2>] "`]."]
                #[inline]
                pub const fn [<$prefix 2>](x: $t, y: $t) -> [<$alias 2>] { Vector::new([x, y]) }

                #[doc = "Creates a [`" [<$alias 3>] "`]."]
                #[inline]
                pub const fn [<$prefix 3>](x: $t, y: $t, z: $t) -> [<$alias 3>] { Vector::new([x, y, z]) }

                #[doc = "Creates a [`" [<$alias 4>] "`]."]
                #[inline]
                pub const fn [<$prefix 4>](x: $t, y: $t, z: $t, w: $t) -> [<$alias 4>] { Vector::new([x, y, z, w]) }
            )*
        }
    };
}

vector_aliases! {
    vec Vec: f32 => "single-precision floats";
    dvec DVec: f64 => "double-precision floats";
    ivec IVec: i32 => "signed integers";
    uvec UVec: u32 => "unsigned integers";
    bvec BVec: bool => "booleans";
}

static_assertions::assert_eq_size!(Vec3, [f32; 3]);
static_assertions::assert_eq_align!(DVec4, f64);
static_assertions::assert_impl_all!(Vec4: Copy, Send, Sync, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn construction() {
        assert_eq!(Vec3::splat(2.0), vec3(2.0, 2.0, 2.0));
        assert_eq!(IVec2::from(5i32), ivec2(5, 5));
        assert_eq!(UVec4::from_fn(|i| i as u32 * 2), uvec4(0, 2, 4, 6));
        assert_eq!(Vec2::default(), vec2(0.0, 0.0));
        assert_eq!(BVec3::default(), bvec3(false, false, false));
        assert_eq!(DVec3::broadcast(&ivec4(1, 2, 3, 4).z()), dvec3(3.0, 3.0, 3.0));
        assert_eq!(Vec4::broadcast(&7u8), vec4(7.0, 7.0, 7.0, 7.0));
    }

    #[test]
    fn prefix_construction() {
        let src = ivec4(1, 2, 3, 4);
        assert_eq!(IVec2::from_prefix(&src), ivec2(1, 2));
        assert_eq!(DVec3::from_prefix(&src.wzyx()), dvec3(4.0, 3.0, 2.0));
        assert_eq!(Vector::<u8, 3>::cast_prefix(&src), Vector::new([1u8, 2, 3]));
        assert_eq!(IVec4::from_prefix(&src), src);
    }

    #[test]
    fn conversions() {
        let i = ivec3(1, -2, 3);
        let d: DVec3 = i.into();
        assert_eq!(d, dvec3(1.0, -2.0, 3.0));
        assert_eq!(d.cast::<i32>(), i);
        assert_eq!(vec2(1.7, -1.7).cast::<i32>(), ivec2(1, -1));
        assert_eq!(ivec3(0, 2, -1).cast::<bool>(), bvec3(false, true, true));
        assert_eq!(bvec2(true, false).cast::<f32>(), vec2(1.0, 0.0));
        let from_view: DVec2 = vec4(1.0, 2.0, 3.0, 4.0).wy().into();
        assert_eq!(from_view, dvec2(4.0, 2.0));
    }

    #[test]
    fn single_component_vectors_stand_in_for_scalars() {
        let one = Vector::new([3i16]);
        let x: i32 = one.into();
        let y: f64 = one.into();
        assert_eq!(x, 3);
        assert_eq!(y, 3.0);
        assert_eq!(IVec3::broadcast(&one), ivec3(3, 3, 3));
        assert_eq!(IVec3::from_parts((one, one, 3)), IVec3::from_parts((3, 3, 3)));
    }

    #[test]
    fn equality_promotes() {
        assert_eq!(ivec3(1, 2, 3), vec3(1.0, 2.0, 3.0));
        assert_ne!(ivec2(1, 2), vec2(1.0, 2.5));
        assert_eq!(Vector::new([255u8]), Vector::new([255i64]));
        assert_ne!(dvec2(0.1 + 0.2, 0.0), dvec2(0.3, 0.0));
    }

    #[test]
    fn indexing_and_alias() {
        let mut v = ivec4(1, 2, 3, 4);
        v[0] = 10;
        v.set(3, 40);
        assert_eq!(v.get(0), 10);
        assert_eq!(v[3], 40);
        {
            let c = v.alias();
            c.y().set_value(20);
            c.zw().assign(&c.yx());
        }
        assert_eq!(v, ivec4(10, 20, 20, 10));
        assert_eq!(format!("{:?}", v), "Vector([10, 20, 20, 10])");
    }

    #[test]
    fn generic_swizzle() {
        let v = uvec3(5, 6, 7);
        assert_eq!(v.swizzle(Sel3::<2, 2, 0>).to_array(), [7, 7, 5]);
        assert_eq!(v.swizzle(Sel1::<1>).value(), 6);
    }

    proptest::proptest! {
        #[test]
        fn int_double_round_trip(a: i32, b: i32, c: i32) {
            let v = ivec3(a, b, c);
            let d: DVec3 = v.into();
            proptest::prop_assert_eq!(d.cast::<i32>(), v);
        }

        #[test]
        fn float_equality_is_exact(x in -1.0e3f32..1.0e3, eps in 1.0e-3f32..1.0) {
            let v = vec2(x, x);
            proptest::prop_assert_eq!(v, vec2(x, x));
            proptest::prop_assert_ne!(v, vec2(x + eps, x));
        }
    }
}
