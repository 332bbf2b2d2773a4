//! This module is a repository of all builtin scenes in the engine
//!
//! There is no significance to them, apart from not having to manually create scenes by hand.
//! All of them only use solid colour materials.

use crate::core::types::Colour;
use crate::scene::{Scene, SceneBuilder, SceneError};

/// Two large overlapping spheres (red and blue), inside a box made of five planes.
///
/// Designed to be viewed from the origin, looking down `+Z`
pub fn week_1() -> Result<Scene, SceneError> {
    let mut builder = SceneBuilder::new();
    // Default material is solid red
    let red = 0;
    let blue = builder.add_material(Colour::BLUE)?;
    let yellow = builder.add_material(Colour::YELLOW)?;
    let green = builder.add_material(Colour::GREEN)?;
    let magenta = builder.add_material(Colour::MAGENTA)?;

    // Spheres
    builder.add_sphere((-25., 0., 100.), 50., red);
    builder.add_sphere((25., 0., 100.), 50., blue);

    // Planes
    builder.add_plane((-75., 0., 0.), (1., 0., 0.), green);
    builder.add_plane((75., 0., 0.), (-1., 0., 0.), green);
    builder.add_plane((0., -75., 0.), (0., 1., 0.), yellow);
    builder.add_plane((0., 75., 0.), (0., -1., 0.), yellow);
    builder.add_plane((0., 0., 125.), (0., 0., -1.), magenta);

    Ok(builder.build())
}

/// Two rows of three small spheres standing on a floor, inside a box made of five planes, lit by a single point light.
///
/// Designed to be viewed from `(0, 3, -9)`, looking down `+Z`
pub fn week_2() -> Result<Scene, SceneError> {
    let mut builder = SceneBuilder::new();
    let red = 0;
    let blue = builder.add_material(Colour::BLUE)?;
    let yellow = builder.add_material(Colour::YELLOW)?;
    let green = builder.add_material(Colour::GREEN)?;
    let magenta = builder.add_material(Colour::MAGENTA)?;

    // Planes
    builder.add_plane((-5., 0., 0.), (1., 0., 0.), green);
    builder.add_plane((5., 0., 0.), (-1., 0., 0.), green);
    builder.add_plane((0., 0., 0.), (0., 1., 0.), yellow);
    builder.add_plane((0., 10., 0.), (0., -1., 0.), yellow);
    builder.add_plane((0., 0., 10.), (0., 0., -1.), magenta);

    // Spheres, alternating colours
    for (i, (x, y)) in [(-1.75, 1.), (0., 1.), (1.75, 1.), (-1.75, 3.), (0., 3.), (1.75, 3.)]
        .into_iter()
        .enumerate()
    {
        let material = if i % 2 == 0 { red } else { blue };
        builder.add_sphere((x, y, 0.), 0.75, material);
    }

    // Light
    builder.add_point_light((0., 5., -5.), 70., Colour::WHITE);

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Point3, Vector3};
    use crate::shared::ray::Ray;
    use approx::assert_relative_eq;

    #[test]
    fn week_1_contents() {
        let scene = week_1().expect("scene is valid");
        assert_eq!(scene.spheres().len(), 2);
        assert_eq!(scene.planes().len(), 5);
        assert_eq!(scene.materials().len(), 5);
        assert!(scene.lights().is_empty());

        // Straight ahead hits where the two spheres overlap, which is the red one first
        let hit = scene
            .closest_hit(&Ray::new(Point3::ZERO, Vector3::Z))
            .expect("spheres are in front of the origin");
        assert_eq!(hit.material, 0);

        // Every direction is enclosed by the box, apart from behind
        assert!(scene.does_hit(&Ray::new(Point3::ZERO, (1., 1., 1.))));
        assert!(!scene.does_hit(&Ray::new(Point3::ZERO, Vector3::NEG_Z)));
    }

    #[test]
    fn week_2_contents() {
        let scene = week_2().expect("scene is valid");
        assert_eq!(scene.spheres().len(), 6);
        assert_eq!(scene.planes().len(), 5);
        assert_eq!(scene.lights().len(), 1);

        // Looking down onto the top middle sphere (red)
        let hit = scene
            .closest_hit(&Ray::new((0., 9., 0.), Vector3::NEG_Y))
            .expect("sphere is below");
        assert_eq!(hit.material, 0);
        assert_relative_eq!(hit.dist, 5.25);
        assert_relative_eq!(hit.normal, Vector3::Y);
    }
}
