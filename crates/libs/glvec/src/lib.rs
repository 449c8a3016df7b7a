//! # glvec
//! Shading-language style vectors and matrices.
//!
//! [`Vector<T, N>`] holds one to four components of a primitive scalar type.
//! Components are reached through swizzle views (`v.zyx()`, `c.rg()`), which
//! borrow the vector's storage instead of copying it. Views over the cells
//! returned by [`Vector::alias`] can be written, several at a time, as long
//! as they don't repeat a component; a view like `xx` is read-only, and
//! trying to write it fails to compile.
//!
//! ```
//! use glvec::prelude::*;
//!
//! let mut v = vec4(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.zy() * 2.0f32, vec2(6.0, 4.0));
//!
//! let c = v.alias();
//! c.xy().assign(&c.yx());
//! c.w().set_value(0.0f32);
//! assert_eq!(v, vec4(2.0, 1.0, 3.0, 0.0));
//!
//! let p = IVec4::from_parts((vec2(7.0, 8.0), -3, -5));
//! assert_eq!(p, ivec4(7, 8, -3, -5));
//! ```
//!
//! Operators mix vectors, views and scalars freely and convert both sides
//! to their common type first (see [`Promote`]). The function library lives
//! in [`func`].

#![warn(missing_docs)]

pub mod error;
pub mod func;
pub mod matrix;
pub mod ops;
pub mod pattern;
pub mod prelude;
pub mod scalar;
pub mod storage;
pub mod swizzle;
pub mod traits;
pub mod vector;

mod compat;
mod interop;

pub use error::{Error, Result};
pub use matrix::*;
pub use pattern::{Compose, Pattern, Sel1, Sel2, Sel3, Sel4};
pub use scalar::{Floating, Integral, Logical, Numeric, Promote, SafeCast, Scalar, ScalarCast, ScalarKind};
pub use storage::{CellStorage, Slots, SlotsMut, Storage};
pub use swizzle::{Swizzle, Swizzle1, Swizzle2, Swizzle3, Swizzle4, SwizzleSource};
pub use traits::{VectorLike, VectorLikeMut};
pub use vector::*;

// Only exercised by the `serde` integration tests.
#[cfg(all(test, not(feature = "serde")))]
use serde_yaml as _;
