//! # Module [crate::light]
//!
//! Lights, and the radiance model used to shade surfaces with them.
//!
//! For each light, shading a hit point takes three steps:
//! 1. [Light::direction_to_light] gives the (possibly unnormalised) direction from the point to the light
//! 2. [Light::radiance] gives how much light arrives at the point
//! 3. [Light::observed_area] gives the cosine term for how directly the surface faces the light
//!
//! ## Related
//! - [Light]
//! - [LightInstance]

use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{directional::DirectionalLight, point::PointLight};

pub mod directional;
pub mod point;

/// The smallest squared distance used for the inverse-square falloff of [PointLight].
///
/// Points closer to the light than this receive the radiance they would at this distance, instead of an
/// infinite (or NaN) amount
pub const MIN_LIGHT_DISTANCE_SQR: Number = 1e-6;

/// The trait that defines how a light illuminates a point
#[enum_dispatch]
pub trait Light: ComponentRequirements {
    /// Direction from the `target` point towards the light.
    ///
    /// This is not necessarily normalised, callers should normalise it themselves if required
    fn direction_to_light(&self, target: Point3) -> Vector3;

    /// The radiance (incoming light) that arrives at the `target` point, ignoring any occlusion
    fn radiance(&self, target: Point3) -> Colour;

    /// The cosine term between the surface `normal` and the direction to the light.
    ///
    /// This is not clamped, so surfaces facing away from the light have a negative observed area.
    /// For the result to be a true cosine, `dir_to_light` has to be normalised by the caller
    fn observed_area(&self, dir_to_light: Vector3, normal: Vector3) -> Number;
}

/// An optimised implementation of [Light], using static dispatch.
///
/// See [crate::material::MaterialInstance] for an explanation of the [macro@enum_dispatch] macro usage
#[enum_dispatch(Light)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LightInstance {
    PointLight,
    DirectionalLight,
}
