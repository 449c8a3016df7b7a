//! Glob-import this module to get the value types, their constructors and
//! the traits providing swizzle names.
//!
//! The function library is not included; import [`crate::func`] for it.

pub use crate::{
    matrix::*,
    pattern::{Sel1, Sel2, Sel3, Sel4},
    swizzle::{Swizzle, Swizzle1, Swizzle2, Swizzle3, Swizzle4},
    traits::{VectorLike, VectorLikeMut},
    vector::{
        bvec2, bvec3, bvec4, dvec2, dvec3, dvec4, ivec2, ivec3, ivec4, uvec2, uvec3, uvec4, vec2, vec3, vec4,
        BVec2, BVec3, BVec4, DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4,
        Vector,
    },
};
