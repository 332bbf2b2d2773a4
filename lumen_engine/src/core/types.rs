use crate::core::colour::ColourRgb;

/// Numeric type used for graphics calculations in the engine
pub type Channel = f32;
pub type Colour = ColourRgb;

/// Numeric type used for most calculations in the engine
pub type Number = f64;
pub type Vector3 = glam::DVec3;
pub type Vector4 = glam::DVec4;
/// Points and vectors share the same representation, the distinction only matters
/// once they are extended to homogeneous coordinates (see [crate::transform::Matrix])
pub type Point3 = glam::DVec3;
/// Numeric identifier used to reference entities stored inside a scene builder
pub type IdToken = usize;
/// Position of a material inside a scene's material list
pub type MaterialIndex = u8;
