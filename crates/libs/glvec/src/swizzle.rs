//! Swizzle views: reordered, possibly repeated, sub-vectors of a storage.
//!
//! A [`Swizzle`] borrows a storage and reads (and, over a [`CellStorage`],
//! writes) the physical slots listed by its [`Pattern`]. Views never own or
//! copy data; any number of them may coexist over the same storage.
//!
//! ```
//! use glvec::prelude::*;
//!
//! let mut v = ivec4(1, 2, 3, 4);
//! let c = v.alias();
//! c.wzyx().assign(&c.xyzw());
//! assert_eq!(v, ivec4(4, 3, 2, 1));
//! ```
//!
//! Writing through a view that repeats a component is rejected when the
//! program is compiled, whether by assignment or by a compound operator:
//!
//! ```compile_fail,E0080
//! use glvec::prelude::*;
//!
//! let mut v = ivec3(1, 2, 3);
//! let c = v.alias();
//! c.xxy().assign(&ivec3(4, 5, 6));
//! ```
//!
//! ```compile_fail,E0080
//! use core::ops::AddAssign;
//! use glvec::prelude::*;
//!
//! let mut v = ivec3(1, 2, 3);
//! let c = v.alias();
//! c.xx().add_assign(1);
//! ```
//!
//! So is selecting a component the storage does not have:
//!
//! ```compile_fail,E0080
//! use glvec::{prelude::*, Sel2};
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! let _ = v.swizzle(Sel2::<0, 3>).to_vector();
//! ```
//!
//! [`CellStorage`]: crate::CellStorage

mod names;

pub use names::*;

use crate::{
    pattern::{Checked, Compose, Pattern},
    scalar::{SafeCast, Scalar, ScalarCast},
    storage::{Slots, SlotsMut},
    traits::{VectorLike, VectorLikeMut},
    vector::Vector,
};
use core::{
    cell::Cell,
    fmt::{Debug, Formatter},
    marker::PhantomData,
};

/// A view of `C` components of the storage `S`, selected by `P`.
pub struct Swizzle<'a, S, const C: usize, P> {
    slots: &'a S,
    pattern: PhantomData<P>,
}

impl<'a, S, const C: usize, P> Clone for Swizzle<'a, S, C, P> {
    fn clone(&self) -> Self { *self }
}

impl<'a, S, const C: usize, P> Copy for Swizzle<'a, S, C, P> {}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> Swizzle<'a, S, C, P> {
    /// Creates a view over `slots`.
    ///
    /// Fails to compile if an index of `P` is not a slot of `S`.
    #[inline]
    pub fn new(slots: &'a S) -> Self {
        let () = Checked::<S, P, C>::IN_RANGE;
        Self {
            slots,
            pattern: PhantomData,
        }
    }

    /// The physical index of each logical component.
    pub const INDICES: [usize; C] = P::INDICES;

    /// Whether the view can be assigned to.
    pub const WRITABLE: bool = P::WRITABLE;

    /// Returns the number of components.
    #[inline(always)]
    pub const fn size(&self) -> usize { C }

    /// Returns the storage the view reads from.
    #[inline]
    pub fn slots(&self) -> &'a S { self.slots }

    /// Returns the component at logical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    #[inline]
    pub fn get(&self, index: usize) -> S::Elem { self.slots.load(P::INDICES[index]) }

    /// Returns an iterator over the components in logical order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, S, C, P> {
        Iter {
            view: *self,
            front: 0,
            back: C,
        }
    }

    /// Copies the components out into a fresh vector.
    #[inline]
    pub fn to_vector(&self) -> Vector<S::Elem, C> { Vector::from_fn(|i| self.get(i)) }

    /// Copies the components out into an array.
    #[inline]
    pub fn to_array(&self) -> [S::Elem; C] { core::array::from_fn(|i| self.get(i)) }

    /// Explicitly converts the components to `U`.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Vector<U, C>
    where
        S::Elem: ScalarCast<U>,
    {
        Vector::from_fn(|i| self.get(i).cast())
    }

    /// Selects components of this view, producing a view of the same
    /// storage.
    ///
    /// ```
    /// use glvec::{prelude::*, Sel2};
    ///
    /// let v = ivec4(1, 2, 3, 4);
    /// let zw = v.wzyx().swizzle(Sel2::<1, 0>);
    /// assert_eq!(zw.to_vector(), ivec2(3, 4));
    /// ```
    #[inline]
    pub fn swizzle<Q: Pattern<K>, const K: usize>(self, _selector: Q) -> Swizzle<'a, S, K, Compose<P, Q, C>> {
        Swizzle::new(self.slots)
    }
}

impl<'a, S: SlotsMut, const C: usize, P: Pattern<C>> Swizzle<'a, S, C, P> {
    /// Writes the component at logical position `index`.
    ///
    /// Fails to compile if the view repeats a component.
    #[inline]
    pub fn set(&self, index: usize, value: S::Elem) {
        let () = Checked::<S, P, C>::WRITABLE;
        self.slots.store(P::INDICES[index], value);
    }

    /// Writes all components, in logical order.
    #[inline]
    pub fn set_components(&self, values: [S::Elem; C]) {
        let () = Checked::<S, P, C>::WRITABLE;
        for (&index, value) in P::INDICES.iter().zip(values) {
            self.slots.store(index, value);
        }
    }

    /// Assigns the components of `src`.
    ///
    /// Every value of `src` is read before the first write, so `src` may be
    /// another view of the same storage.
    #[inline]
    pub fn assign<V>(&self, src: &V)
    where
        V: VectorLike<C> + ?Sized,
        V::Elem: SafeCast<S::Elem>,
    {
        let values = core::array::from_fn(|i| src.get(i).safe_cast());
        self.set_components(values);
    }

    /// Returns the cells of the view in logical order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &'a Cell<S::Elem>> + 'a {
        let () = Checked::<S, P, C>::WRITABLE;
        let slots = self.slots;
        P::INDICES.into_iter().map(move |index| slots.cell(index))
    }
}

impl<'a, S: Slots, P: Pattern<1>> Swizzle<'a, S, 1, P> {
    /// Returns the single component.
    #[inline]
    pub fn value(&self) -> S::Elem { self.get(0) }
}

impl<'a, S: SlotsMut, P: Pattern<1>> Swizzle<'a, S, 1, P> {
    /// Writes the single component.
    #[inline]
    pub fn set_value<U: SafeCast<S::Elem>>(&self, value: U) { self.set(0, value.safe_cast()) }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> VectorLike<C> for Swizzle<'a, S, C, P> {
    type Elem = S::Elem;

    #[inline(always)]
    fn get(&self, index: usize) -> S::Elem { Swizzle::get(self, index) }
}

impl<'a, S: SlotsMut, const C: usize, P: Pattern<C>> VectorLikeMut<C> for Swizzle<'a, S, C, P> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: S::Elem) { Swizzle::set(self, index, value) }

    #[inline(always)]
    fn set_components(&mut self, values: [S::Elem; C]) { Swizzle::set_components(self, values) }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> Debug for Swizzle<'a, S, C, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Swizzle")
            .field("indices", &P::INDICES)
            .field("values", &self.to_array())
            .finish()
    }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> IntoIterator for Swizzle<'a, S, C, P> {
    type Item = S::Elem;
    type IntoIter = Iter<'a, S, C, P>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Iterator over the components of a [`Swizzle`], in logical order.
pub struct Iter<'a, S, const C: usize, P> {
    view: Swizzle<'a, S, C, P>,
    front: usize,
    back: usize,
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> Iterator for Iter<'a, S, C, P> {
    type Item = S::Elem;

    fn next(&mut self) -> Option<S::Elem> {
        if self.front == self.back {
            return None;
        }
        let value = self.view.get(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> DoubleEndedIterator for Iter<'a, S, C, P> {
    fn next_back(&mut self) -> Option<S::Elem> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.get(self.back))
    }
}

impl<'a, S: Slots, const C: usize, P: Pattern<C>> ExactSizeIterator for Iter<'a, S, C, P> {}

macro_rules! impl_from_single {
    ($($t:ty),*) => {
        $(
            impl<'a, S: Slots, P: Pattern<1>> From<Swizzle<'a, S, 1, P>> for $t
            where
                S::Elem: SafeCast<$t>,
            {
                #[inline]
                fn from(view: Swizzle<'a, S, 1, P>) -> $t { view.value().safe_cast() }
            }
        )*
    };
}

impl_from_single!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
