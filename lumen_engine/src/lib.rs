//! # Lumen Engine
//!
//! The geometric core of an offline ray tracer: ray-mesh intersection, scene queries, light radiance and affine
//! transforms.
//!
//! ## Related
//! - [scene::SceneBuilder], the starting point for creating a scene
//! - [scene::Scene::closest_hit] and [scene::Scene::does_hit], for querying one
//! - [light::Light], for shading hits
//! - [transform::Matrix]

pub mod core;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod shared;
pub mod transform;
