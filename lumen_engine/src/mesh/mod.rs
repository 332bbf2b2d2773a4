//! # Module [crate::mesh]
//!
//! This module contains the submodules for the different mesh (see [Mesh]) types that a scene can contain.
//!
//! ## Related
//! - [Mesh]
//! - [sphere]
//! - [plane]
//! - [triangle]
//! - [triangle_mesh]
//! - [obj], for loading triangle meshes from files
//!
//! # DEV: Code Structure
//!
//! Meshes (and their corresponding types) are placed into named submodules, and those submodules are publicly
//! exported. Each mesh stores its own material index, which is copied into every [HitRecord] it produces.
//!
//! Meshes that can be freely edited (spheres, planes) expose their fields publicly, meshes with invariants that
//! have to be checked on construction ([triangle_mesh::TriangleMesh]) keep them private and expose getters

use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use crate::shared::ComponentRequirements;

pub mod obj;
pub mod plane;
pub mod sphere;
pub mod triangle;
pub mod triangle_mesh;

/// Common trait for every mesh that rays can be intersected against
pub trait Mesh: ComponentRequirements {
    /// Attempts to perform an intersection between the given ray and the target mesh
    ///
    /// # Return Value
    /// This should return the *closest* intersection that is within the ray's interval, else [None]
    fn intersect(&self, ray: &Ray) -> Option<HitRecord>;

    /// Checks whether the ray intersects the mesh at all, within the ray's interval.
    ///
    /// Used for occlusion (shadow) checks, where the intersection details are not needed.
    /// This must always agree with [Mesh::intersect], but implementations may return as soon as any hit is found
    fn intersects(&self, ray: &Ray) -> bool { self.intersect(ray).is_some() }
}
