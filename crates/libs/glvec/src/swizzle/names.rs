//! Named swizzles (`v.xy()`, `c.bgra()`, `v.st()`, ...).
//!
//! For a vector of size `N`, [`Swizzle1`]..[`Swizzle4`] (the one matching
//! `N`) provide a method for every ordered tuple of 1 to 4 indices below `N`,
//! in the `xyzw`, `rgba` and `stpq` name sets. On a `&Vector` the views are
//! read-only; on the `&CellStorage` returned by [`Vector::alias`] they can be
//! written as long as no component is repeated.
//!
//! [`Vector::alias`]: crate::Vector::alias

use crate::{
    pattern::{Sel1, Sel2, Sel3, Sel4},
    scalar::Scalar,
    storage::{CellStorage, Slots, Storage},
    swizzle::Swizzle,
    vector::Vector,
};

/// A borrowed value named swizzles can be taken from.
pub trait SwizzleSource<'a>: Copy {
    /// The storage the views read from.
    type Slots: Slots + 'a;

    /// Returns the storage.
    fn slots(self) -> &'a Self::Slots;
}

impl<'a, T: Scalar, const N: usize> SwizzleSource<'a> for &'a Vector<T, N> {
    type Slots = Storage<T, N>;

    #[inline(always)]
    fn slots(self) -> &'a Storage<T, N> { &self.storage }
}

impl<'a, T: Scalar, const N: usize> SwizzleSource<'a> for &'a CellStorage<T, N> {
    type Slots = CellStorage<T, N>;

    #[inline(always)]
    fn slots(self) -> &'a CellStorage<T, N> { self }
}

/// Generates one method per ordered tuple of up to four names.
///
/// `@level` walks the depth list `[_ _ ...]`, `@each` iterates over the name
/// set and `@push` emits the method for the extended prefix before
/// descending.
macro_rules! swizzle_tree {
    (@level $lt:lifetime [] $prefix:tt $all:tt) => {};
    (@level $lt:lifetime [_ $($depth:tt)*] $prefix:tt $all:tt) => {
        swizzle_tree!(@each $lt [$($depth)*] $prefix $all $all);
    };
    (@each $lt:lifetime $depth:tt $prefix:tt $all:tt [$($n:ident $i:tt),*]) => {
        $(swizzle_tree!(@push $lt $depth $prefix $all $n $i);)*
    };
    (@push $lt:lifetime $depth:tt [$($pn:ident $pi:tt)*] $all:tt $n:ident $i:tt) => {
        swizzle_tree!(@method $lt [$($pn)* $n] [$($pi)* $i]);
        swizzle_tree!(@level $lt $depth [$($pn $pi)* $n $i] $all);
    };
    (@method $lt:lifetime [$($name:ident)+] [$a:tt]) => {
        swizzle_tree!(@emit $lt [$($name)+] 1, Sel1<$a>);
    };
    (@method $lt:lifetime [$($name:ident)+] [$a:tt $b:tt]) => {
        swizzle_tree!(@emit $lt [$($name)+] 2, Sel2<$a, $b>);
    };
    (@method $lt:lifetime [$($name:ident)+] [$a:tt $b:tt $c:tt]) => {
        swizzle_tree!(@emit $lt [$($name)+] 3, Sel3<$a, $b, $c>);
    };
    (@method $lt:lifetime [$($name:ident)+] [$a:tt $b:tt $c:tt $d:tt]) => {
        swizzle_tree!(@emit $lt [$($name)+] 4, Sel4<$a, $b, $c, $d>);
    };
    (@emit $lt:lifetime [$($name:ident)+] $count:literal, $sel:ty) => {
        paste::paste! {
            #[doc = "Returns the `" $($name)+ "` view."]
            #[inline(always)]
            fn [<$($name)+>](self) -> Swizzle<$lt, Self::Slots, $count, $sel> { Swizzle::new(self.slots()) }
        }
    };
    ($lt:lifetime; $($set:tt)*) => {
        $(swizzle_tree!(@level $lt [_ _ _ _] [] $set);)*
    };
}

/// Named swizzles of one-component vectors.
pub trait Swizzle1<'a>: SwizzleSource<'a> {
    swizzle_tree!('a; [x 0] [r 0] [s 0]);
}

/// Named swizzles of two-component vectors.
pub trait Swizzle2<'a>: SwizzleSource<'a> {
    swizzle_tree!('a; [x 0, y 1] [r 0, g 1] [s 0, t 1]);
}

/// Named swizzles of three-component vectors.
pub trait Swizzle3<'a>: SwizzleSource<'a> {
    swizzle_tree!('a; [x 0, y 1, z 2] [r 0, g 1, b 2] [s 0, t 1, p 2]);
}

/// Named swizzles of four-component vectors.
pub trait Swizzle4<'a>: SwizzleSource<'a> {
    swizzle_tree!('a; [x 0, y 1, z 2, w 3] [r 0, g 1, b 2, a 3] [s 0, t 1, p 2, q 3]);
}

macro_rules! impl_named_swizzles {
    ($($trait:ident => $n:literal),*) => {
        $(
            impl<'a, T: Scalar> $trait<'a> for &'a Vector<T, $n> {}
            impl<'a, T: Scalar> $trait<'a> for &'a CellStorage<T, $n> {}
        )*
    };
}

impl_named_swizzles!(Swizzle1 => 1, Swizzle2 => 2, Swizzle3 => 3, Swizzle4 => 4);
