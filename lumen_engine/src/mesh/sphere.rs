use crate::core::types::{MaterialIndex, Number, Point3, Vector3};
use crate::mesh::Mesh;
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use crate::shared::validate;

/// Relative tolerance (in world space, scaled by the size of the coordinates involved) for roots that land just
/// before the start of a ray's interval.
///
/// A ray starting on the surface of a sphere has a root at `t = 0`, but the rounding in `|o - c|² - r²` can move it
/// slightly negative. Roots inside this tolerance are treated as lying on the start of the interval.
pub const SURFACE_EPSILON: Number = 1e-9;

/// A sphere, defined by its centre and radius
///
/// # Requirements
/// The radius must be positive
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereMesh {
    pub pos: Point3,
    pub radius: Number,
    pub material: MaterialIndex,
}

impl SphereMesh {
    pub fn new(pos: impl Into<Point3>, radius: Number, material: MaterialIndex) -> Self {
        let pos = pos.into();
        validate::point3(pos);
        debug_assert!(radius > 0., "sphere radius must be positive; radius: {radius}");
        Self { pos, radius, material }
    }

    /// Solves the ray-sphere quadratic, returning the nearest root inside the ray's interval
    fn solve(&self, ray: &Ray) -> Option<Number> {
        let ray_dir = ray.dir();
        let ray_rel_pos = ray.pos() - self.pos;

        // Quadratic formula variables
        let a = ray_dir.length_squared();
        let b = 2. * Vector3::dot(ray_dir, ray_rel_pos);
        let c = ray_rel_pos.length_squared() - (self.radius * self.radius);
        let discriminant = (b * b) - (4. * a * c);

        // Tangent rays (a single touching root) count as a miss, as do degenerate (NaN) solves
        if !(discriminant > 0.) {
            return None;
        }

        let sqrt_d = discriminant.sqrt();

        // Rays starting on the surface have a root at zero, which rounding can push slightly below it.
        // Converted from a world-space distance into multiples of the ray direction
        let scale = self.radius.max(self.pos.abs().max_element()).max(ray.pos().abs().max_element());
        let tolerance = SURFACE_EPSILON * scale / a.sqrt();

        // Prioritise the less-positive root, as it's closer
        let near = (-b - sqrt_d) / (2. * a);
        let far = (-b + sqrt_d) / (2. * a);
        [near, far].into_iter().find_map(|t| Self::accept_root(ray, t, tolerance))
    }

    /// Checks a root against the ray's interval. Roots just before the start of the interval (within `tolerance`)
    /// are clamped to the start
    fn accept_root(ray: &Ray, t: Number, tolerance: Number) -> Option<Number> {
        let interval = ray.interval();
        if interval.contains_dist(t) {
            return Some(t);
        }
        match interval.start {
            Some(start) if t < start && start - t <= tolerance && interval.contains_dist(start) => Some(start),
            _ => None,
        }
    }
}

impl Mesh for SphereMesh {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let dist = self.solve(ray)?;
        let pos = ray.at(dist);
        let hit = HitRecord {
            pos,
            normal: (pos - self.pos).normalize(),
            dist,
            material: self.material,
        };

        validate::hit(ray, &hit);
        Some(hit)
    }

    fn intersects(&self, ray: &Ray) -> bool { self.solve(ray).is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn ray_hits_near_side() {
        let sphere = SphereMesh::new((0., 0., 100.), 50., 3);
        let ray = Ray::new(Point3::ZERO, Vector3::Z);

        let hit = sphere.intersect(&ray).expect("ray should hit sphere");
        assert_relative_eq!(hit.dist, 50.);
        assert_relative_eq!(hit.pos, Point3::new(0., 0., 50.));
        assert_relative_eq!(hit.normal, Vector3::new(0., 0., -1.));
        assert_eq!(hit.material, 3);
        assert!(sphere.intersects(&ray));
    }

    #[test]
    fn distance_scales_with_direction_length() {
        let sphere = SphereMesh::new((0., 0., 100.), 50., 0);
        let hit = sphere
            .intersect(&Ray::new(Point3::ZERO, (0., 0., 2.)))
            .expect("ray should hit sphere");
        assert_relative_eq!(hit.dist, 25.);
        assert_relative_eq!(hit.pos, Point3::new(0., 0., 50.));
    }

    #[test]
    fn origin_on_surface_pointing_outwards() {
        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

        for _ in 0..10_000 {
            let centre = Point3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            let radius = rng.gen_range(0.01..50.0);
            let sphere = SphereMesh::new(centre, radius, 0);

            let normal = loop {
                let v = Vector3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
                if let Some(n) = v.try_normalize() {
                    break n;
                }
            };
            let origin = centre + normal * radius;
            // Anywhere in the outward hemisphere, apart from grazing the surface
            let dir = (normal + Vector3::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)))
                * rng.gen_range(0.1..10.0);
            assert!(Vector3::dot(dir, normal) > 0.);

            let ray = Ray::new(origin, dir);
            let hit = sphere
                .intersect(&ray)
                .unwrap_or_else(|| panic!("ray from {origin} along {dir} should hit {sphere:?} at its origin"));
            assert!(hit.dist >= 0.);
            assert!(hit.dist * dir.length() < 1e-9 * radius.max(centre.abs().max_element()), "{hit:?}");
            assert_relative_eq!(hit.normal, normal, epsilon = 1e-6);
        }
    }

    #[test]
    fn roots_far_before_the_interval_are_not_clamped() {
        let sphere = SphereMesh::new(Point3::ZERO, 1., 0);
        // Starting just outside the surface and moving away, so the only roots are behind the ray
        let ray = Ray::new((1. + 1e-6, 0., 0.), Vector3::X);
        assert_eq!(sphere.intersect(&ray), None);

        // Interval starts well after the sphere is exited
        let ray = Ray::new_bounded((-5., 0., 0.), Vector3::X, 6.0 + 1e-6..);
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn ray_inside_sphere_hits_far_side() {
        let sphere = SphereMesh::new(Point3::ZERO, 2., 0);
        let hit = sphere
            .intersect(&Ray::new(Point3::ZERO, Vector3::X))
            .expect("ray from inside should hit");
        assert_relative_eq!(hit.dist, 2.);
        // Normal stays outward facing
        assert_relative_eq!(hit.normal, Vector3::X);
    }

    #[test]
    fn tangent_ray_misses() {
        let sphere = SphereMesh::new(Point3::ZERO, 1., 0);
        let ray = Ray::new((-5., 1., 0.), Vector3::X);
        assert_eq!(sphere.intersect(&ray), None);
        assert!(!sphere.intersects(&ray));
    }

    #[test]
    fn interval_clips_hits() {
        let sphere = SphereMesh::new((0., 0., 10.), 1., 0);

        // Both roots (9 and 11) are past the end of the interval
        assert_eq!(sphere.intersect(&Ray::new_bounded(Point3::ZERO, Vector3::Z, 0.0..=5.0)), None);

        // Near root is clipped, far root is kept
        let hit = sphere
            .intersect(&Ray::new_bounded(Point3::ZERO, Vector3::Z, 10.0..=20.0))
            .expect("far side should be hit");
        assert_relative_eq!(hit.dist, 11.);

        // Sphere is entirely behind the ray
        assert!(!sphere.intersects(&Ray::new(Point3::ZERO, Vector3::NEG_Z)));
    }

    #[test]
    fn zero_direction_misses() {
        let sphere = SphereMesh::new(Point3::ZERO, 1., 0);
        assert!(!sphere.intersects(&Ray::new((0., 0., -5.), Vector3::ZERO)));
    }
}
