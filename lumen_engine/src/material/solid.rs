use crate::core::types::{Colour, Vector3};
use crate::material::Material;
use crate::shared::hit::HitRecord;
use serde::{Deserialize, Serialize};

/// A material that is the same colour everywhere, regardless of lighting
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolidColourMaterial {
    pub colour: Colour,
}

impl From<Colour> for SolidColourMaterial {
    fn from(colour: Colour) -> Self { Self { colour } }
}

impl Material for SolidColourMaterial {
    fn shade(&self, _hit: &HitRecord, _dir_to_light: Vector3, _dir_to_view: Vector3) -> Colour { self.colour }
}
