//! # Module [crate::material]
//!
//! Materials decide what colour a surface is, given how it is lit and viewed.
//!
//! Materials are stored in the scene and referenced by [crate::core::types::MaterialIndex]. Every mesh stores the
//! index of its material, which is copied into each [HitRecord] it produces.
//!
//! ## Related
//! - [Material]
//! - [MaterialInstance]

use crate::core::types::{Colour, Vector3};
use crate::shared::hit::HitRecord;
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{dynamic::DynamicMaterial, solid::SolidColourMaterial};

pub mod dynamic;
pub mod solid;

/// The trait that defines how a material is shaded
#[enum_dispatch]
pub trait Material: ComponentRequirements {
    /// Calculates the colour of the surface for a single light
    ///
    /// # Arguments
    ///
    /// * `hit`: The intersection being shaded, with the surface position and normal
    /// * `dir_to_light`: Normalised direction from the hit towards the light
    /// * `dir_to_view`: Normalised direction from the hit back towards the viewer (the negated ray direction)
    ///
    /// # Return Value
    /// The fraction of the light's radiance that is reflected towards the viewer, for each channel
    fn shade(&self, hit: &HitRecord, dir_to_light: Vector3, dir_to_view: Vector3) -> Colour;
}

/// An optimised implementation of [Material].
///
/// By using an enum, we can replace dynamic-dispatch with static dispatch.
/// Just in case we do require dynamic dispatch for some reason, there is a
/// [MaterialInstance::DynamicMaterial] variant, which wraps a generic material in an [std::sync::Arc]
#[enum_dispatch(Material)]
#[derive(Clone, Debug)]
pub enum MaterialInstance {
    SolidColourMaterial,
    DynamicMaterial,
}

impl From<Colour> for MaterialInstance {
    fn from(colour: Colour) -> Self { SolidColourMaterial::from(colour).into() }
}
