//! # Module [crate::scene]
//!
//! Scenes own all the meshes, lights and materials that make up a world, and answer ray queries against them.
//!
//! A scene is created in two phases:
//! 1. A [SceneBuilder] is filled with everything in the scene. Each `add_*` method returns a token, which can be
//!    used to look up and modify the item while still building.
//! 2. [SceneBuilder::build] freezes the builder into an immutable [Scene], which can be shared between threads
//!    for querying.
//!
//! ## Related
//! - [SceneBuilder]
//! - [Scene]
//! - [stored], for some premade scenes

use crate::core::types::MaterialIndex;
use crate::light::directional::LightError;
use crate::light::LightInstance;
use crate::material::MaterialInstance;
use crate::mesh::plane::PlaneMesh;
use crate::mesh::sphere::SphereMesh;
use crate::mesh::triangle_mesh::{MeshError, TriangleMesh};
use crate::mesh::Mesh;
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use crate::shared::token::generate_component_token;
use static_assertions::assert_impl_all;
use thiserror::Error;
use valuable::Valuable;

pub use self::{builder::SceneBuilder, opts::SceneOpts};

pub mod builder;
pub mod opts;
pub mod stored;

/// The most materials a scene can hold, since materials are referenced by a [MaterialIndex]
pub const MAX_MATERIALS: usize = MaterialIndex::MAX as usize + 1;

generate_component_token!(SphereToken for SphereMesh);
generate_component_token!(PlaneToken for PlaneMesh);
generate_component_token!(TriangleMeshToken for TriangleMesh);
generate_component_token!(LightToken for LightInstance);

#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum SceneError {
    /// Every material slot is already taken
    #[error("cannot add another material, scenes hold at most {max} materials")]
    TooManyMaterials { max: usize },
    #[error("the triangle mesh was invalid")]
    InvalidMesh(#[from] MeshError),
    #[error("the light was invalid")]
    InvalidLight(#[from] LightError),
}

/// An immutable scene, ready to be queried.
///
/// Created with [SceneBuilder::build]
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<SphereMesh>,
    planes: Vec<PlaneMesh>,
    triangle_meshes: Vec<TriangleMesh>,
    lights: Vec<LightInstance>,
    materials: Vec<MaterialInstance>,
}

// Scenes are shared between threads when rendering
assert_impl_all!(Scene: Send, Sync);

// region Queries

impl Scene {
    /// Finds the closest intersection along the ray, out of every mesh in the scene.
    ///
    /// Spheres are tested first, then planes, then triangle meshes. If two hits are at exactly the same distance,
    /// the one that was found first is kept
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let spheres = self.spheres.iter().map(|sphere| sphere.intersect(ray));
        let planes = self.planes.iter().map(|plane| plane.intersect(ray));
        let meshes = self.triangle_meshes.iter().map(|mesh| mesh.intersect(ray));

        spheres.chain(planes).chain(meshes).fold(None, HitRecord::closest)
    }

    /// Checks if the ray hits anything in the scene, returning as soon as any hit is found.
    ///
    /// Always agrees with `closest_hit(ray).is_some()`, but is faster. Used for occlusion (shadow) checks
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|sphere| sphere.intersects(ray))
            || self.planes.iter().any(|plane| plane.intersects(ray))
            || self.triangle_meshes.iter().any(|mesh| mesh.intersects(ray))
    }
}

// endregion Queries

// region Accessors

impl Scene {
    pub fn spheres(&self) -> &[SphereMesh] { &self.spheres }
    pub fn planes(&self) -> &[PlaneMesh] { &self.planes }
    pub fn triangle_meshes(&self) -> &[TriangleMesh] { &self.triangle_meshes }
    pub fn lights(&self) -> &[LightInstance] { &self.lights }
    /// All materials in the scene. Index `0` is always the default material
    pub fn materials(&self) -> &[MaterialInstance] { &self.materials }

    /// Looks up a material by index, such as [HitRecord::material]
    pub fn material(&self, index: MaterialIndex) -> Option<&MaterialInstance> { self.materials.get(index as usize) }
}

// endregion Accessors
