#![allow(dead_code)]

use lumen_engine::core::types::{Colour, MaterialIndex, Number, Point3, Vector3};
use lumen_engine::mesh::triangle::CullMode;
use lumen_engine::scene::{Scene, SceneBuilder};
use lumen_engine::shared::ray::Ray;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Once;

pub type TestRng = SmallRng;

/// Seeded so that failures can be reproduced
pub fn rng() -> TestRng { SmallRng::seed_from_u64(0x5EED) }

/// Installs a subscriber that prints engine logs, filtered with `RUST_LOG`. Safe to call from every test
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

pub fn random_point(rng: &mut impl Rng, extent: Number) -> Point3 {
    Point3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

/// Random direction, that is not normalised (but never zero)
pub fn random_direction(rng: &mut impl Rng) -> Vector3 {
    loop {
        let v = random_point(rng, 1.);
        if v.length_squared() > 1e-3 {
            return v * rng.gen_range(0.1..10.);
        }
    }
}

pub fn random_ray(rng: &mut impl Rng) -> Ray {
    let pos = random_point(rng, 20.);
    let dir = random_direction(rng);
    match rng.gen_range(0..3) {
        0 => Ray::new(pos, dir),
        1 => Ray::new_bounded(pos, dir, ..),
        _ => {
            let start = rng.gen_range(-5.0..5.0);
            Ray::new_bounded(pos, dir, start..=start + rng.gen_range(0.0..20.0))
        }
    }
}

/// A scene with a mix of every kind of mesh, scattered randomly
pub fn random_scene(rng: &mut impl Rng) -> Scene {
    let mut builder = SceneBuilder::new();
    let materials: Vec<MaterialIndex> = (0..4)
        .map(|_| {
            let colour = Colour::new([rng.gen(), rng.gen(), rng.gen()]);
            builder.add_material(colour).expect("material slots available")
        })
        .collect();

    for _ in 0..8 {
        let pos = random_point(rng, 15.);
        let radius = rng.gen_range(0.5..4.);
        builder.add_sphere(pos, radius, pick(rng, &materials));
    }
    for _ in 0..3 {
        let pos = random_point(rng, 30.);
        let normal = random_direction(rng).normalize();
        builder.add_plane(pos, normal, pick(rng, &materials));
    }
    for cull_mode in [CullMode::FrontFace, CullMode::BackFace, CullMode::None] {
        let centre = random_point(rng, 10.);
        let positions: Vec<Point3> = (0..6).map(|_| centre + random_point(rng, 5.)).collect();
        builder
            .add_triangle_mesh_from_positions(positions, vec![0, 1, 2, 3, 4, 5, 0, 2, 4], cull_mode, pick(rng, &materials))
            .expect("random mesh should not be degenerate");
    }

    builder.build()
}

fn pick(rng: &mut impl Rng, materials: &[MaterialIndex]) -> MaterialIndex { materials[rng.gen_range(0..materials.len())] }
