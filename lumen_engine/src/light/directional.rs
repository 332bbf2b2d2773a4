use crate::core::types::{Channel, Colour, Number, Point3, Vector3};
use crate::light::Light;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use valuable::Valuable;

/// A light infinitely far away, so it reaches every point from the same direction with the same strength
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, CopyGetters)]
#[get_copy = "pub"]
pub struct DirectionalLight {
    /// The direction the light travels in (from the light towards the scene).
    ///
    /// # Invariants
    /// Always normalised
    direction: Vector3,
    intensity: Number,
    colour: Colour,
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum LightError {
    /// The provided direction was too close to zero (or not finite), and so vector normalisation failed
    #[error("the provided light direction couldn't be normalised")]
    DirectionInvalid,
}

impl DirectionalLight {
    /// Creates a new light, shining along `direction`. The direction does not have to be normalised
    pub fn new(direction: impl Into<Vector3>, intensity: Number, colour: impl Into<Colour>) -> Result<Self, LightError> {
        Ok(Self {
            direction: direction.into().try_normalize().ok_or(LightError::DirectionInvalid)?,
            intensity,
            colour: colour.into(),
        })
    }

    pub fn set_direction(&mut self, direction: impl Into<Vector3>) -> Result<(), LightError> {
        self.direction = direction.into().try_normalize().ok_or(LightError::DirectionInvalid)?;
        Ok(())
    }
    pub fn set_intensity(&mut self, intensity: Number) { self.intensity = intensity; }
    pub fn set_colour(&mut self, colour: impl Into<Colour>) { self.colour = colour.into(); }
}

impl Light for DirectionalLight {
    fn direction_to_light(&self, _target: Point3) -> Vector3 { -self.direction }

    fn radiance(&self, _target: Point3) -> Colour { self.colour * self.intensity as Channel }

    fn observed_area(&self, _dir_to_light: Vector3, normal: Vector3) -> Number { Vector3::dot(normal, -self.direction) }
}
