use crate::core::types::Colour;
use serde::{Deserialize, Serialize};
use valuable::Valuable;

/// Options that control how a [crate::scene::SceneBuilder] sets up a new scene
#[derive(Copy, Clone, Debug, PartialEq, Valuable, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOpts {
    /// How many items of each kind (spheres, planes, meshes, lights, materials) to reserve space for up front.
    ///
    /// This is a hint: capacities that can't be allocated are skipped, and materials never reserve past the material limit
    pub reserve_capacity: usize,
    /// Colour of the solid colour material that is always present at material index `0`
    pub default_material_colour: Colour,
}

impl Default for SceneOpts {
    fn default() -> Self {
        Self {
            reserve_capacity: 32,
            default_material_colour: Colour::RED,
        }
    }
}
