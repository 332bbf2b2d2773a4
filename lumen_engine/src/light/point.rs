use crate::core::types::{Channel, Colour, Number, Point3, Vector3};
use crate::light::{Light, MIN_LIGHT_DISTANCE_SQR};
use serde::{Deserialize, Serialize};

/// A light that shines equally in all directions from a single point, with inverse-square falloff
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub pos: Point3,
    pub intensity: Number,
    pub colour: Colour,
}

impl PointLight {
    pub fn new(pos: impl Into<Point3>, intensity: Number, colour: impl Into<Colour>) -> Self {
        Self {
            pos: pos.into(),
            intensity,
            colour: colour.into(),
        }
    }
}

impl Light for PointLight {
    fn direction_to_light(&self, target: Point3) -> Vector3 { self.pos - target }

    fn radiance(&self, target: Point3) -> Colour {
        let dist_sqr = (self.pos - target).length_squared().max(MIN_LIGHT_DISTANCE_SQR);
        self.colour * (self.intensity / dist_sqr) as Channel
    }

    fn observed_area(&self, dir_to_light: Vector3, normal: Vector3) -> Number { Vector3::dot(dir_to_light, normal) }
}
