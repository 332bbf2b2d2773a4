//! Walks through building a scene, casting rays into it and shading the hits, printing the result as ASCII art.
//!
//! Run with `RUST_LOG=trace` to see what the engine is doing.

pub fn main() {
    // Print the engine's logs, filtered by `RUST_LOG`
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Type aliases used everywhere in the engine
    use lumen_engine::core::types::*;

    // region CREATING THE SCENE

    use lumen_engine::mesh::triangle::CullMode;
    use lumen_engine::scene::{stored, SceneBuilder};

    // Start from one of the builtin scenes...
    let week_2 = stored::week_2().expect("builtin scene is valid");
    // ...or make one by hand. Every `add_xxx` returns a token, which can be used to modify the object later on
    let mut builder = SceneBuilder::new();
    // Materials are referenced by index. Index 0 always exists, and is solid red
    let white = builder.add_material(Colour::WHITE).expect("too many materials");
    let cyan = builder.add_material(Colour::CYAN).expect("too many materials");

    builder.add_plane((0., 0., 0.), (0., 1., 0.), white);
    let sphere = builder.add_sphere((0., 1., 0.), 1., cyan);
    // A small pyramid, winding order decides which way the faces point
    builder
        .add_triangle_mesh_from_positions(
            [
                Point3::new(2., 0., -1.),
                Point3::new(3., 0., -1.),
                Point3::new(2.5, 0., 0.),
                Point3::new(2.5, 1.5, -0.5),
            ],
            [0usize, 3, 1, 1, 3, 2, 2, 3, 0],
            CullMode::BackFace,
            0,
        )
        .expect("pyramid is a valid mesh");
    builder.add_point_light((-3., 5., -3.), 40., Colour::WHITE);
    builder
        .add_directional_light((1., -1., 1.), 0.2, Colour::WHITE)
        .expect("direction is not zero");

    // Tokens stay valid no matter how much else is added
    builder.sphere_mut(sphere).radius = 0.9;

    // Freezing the builder gives a scene that can only be queried
    let custom = builder.build();

    // endregion CREATING THE SCENE

    // region RENDERING

    for (name, scene, eye, target) in [
        ("week 2", &week_2, Point3::new(0., 3., -9.), Point3::new(0., 2., 0.)),
        ("custom", &custom, Point3::new(0., 2., -6.), Point3::new(0.5, 0.5, 0.)),
    ] {
        println!("{name}:");
        print!("{}", render(scene, eye, target, 72, 32));
    }

    // endregion RENDERING
}

/// Renders the scene with a pinhole camera, looking from `eye` towards `target`.
///
/// Each character shows the brightness of the pixel
fn render(
    scene: &lumen_engine::scene::Scene,
    eye: lumen_engine::core::types::Point3,
    target: lumen_engine::core::types::Point3,
    width: usize,
    height: usize,
) -> String {
    use lumen_engine::core::types::*;
    use lumen_engine::light::{Light, LightInstance};
    use lumen_engine::material::Material;
    use lumen_engine::shared::ray::Ray;

    const RAMP: &[u8] = b" .:-=+*#%@";
    // Terminal characters are roughly twice as tall as they are wide
    const CHAR_ASPECT: Number = 0.5;

    // Build the camera basis with the transform module
    use lumen_engine::transform::Matrix;
    let fwd = (target - eye).normalize();
    let right = Vector3::cross(Vector3::Y, fwd).normalize();
    let up = Vector3::cross(fwd, right);
    let camera = Matrix::new(right, up, fwd, eye);

    let aspect = width as Number / height as Number * CHAR_ASPECT;
    let mut out = String::with_capacity((width + 1) * height);
    for row in 0..height {
        for col in 0..width {
            let u = ((col as Number + 0.5) / width as Number * 2. - 1.) * aspect;
            let v = 1. - (row as Number + 0.5) / height as Number * 2.;
            // Directions are not normalised, the engine doesn't care
            let ray = Ray::new(eye, camera.transform_vector(Vector3::new(u, v, 1.5)));

            let Some(hit) = scene.closest_hit(&ray) else {
                out.push(' ');
                continue;
            };
            let Some(material) = scene.material(hit.material) else {
                out.push('?');
                continue;
            };

            let mut colour = Colour::BLACK;
            for light in scene.lights() {
                let to_light = light.direction_to_light(hit.pos);
                let start = hit.pos + hit.normal * 1e-6;
                let shadow = match light {
                    LightInstance::PointLight(_) => Ray::new_bounded(start, to_light, 0.0..=1.0),
                    LightInstance::DirectionalLight(_) => Ray::new(start, to_light),
                };
                if scene.does_hit(&shadow) {
                    continue;
                }
                let dir_to_light = to_light.normalize();
                let area = light.observed_area(dir_to_light, hit.normal).max(0.);
                colour += light.radiance(hit.pos)
                    * material.shade(&hit, dir_to_light, -ray.dir().normalize())
                    * area as Channel;
            }

            let brightness = (colour.sum() / 3.).clamp(0., 1.);
            let idx = (brightness * (RAMP.len() - 1) as Channel).round() as usize;
            out.push(RAMP[idx] as char);
        }
        out.push('\n');
    }
    out
}
