use crate::core::types::{MaterialIndex, Number, Point3, Vector3};
use crate::mesh::Mesh;
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use crate::shared::validate;

/// An infinite plane, passing through `pos` and facing along `normal`
///
/// # Requirements
/// The normal must be normalised
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMesh {
    pub pos: Point3,
    pub normal: Vector3,
    pub material: MaterialIndex,
}

impl PlaneMesh {
    pub fn new(pos: impl Into<Point3>, normal: impl Into<Vector3>, material: MaterialIndex) -> Self {
        let (pos, normal) = (pos.into(), normal.into());
        validate::point3(pos);
        validate::normal3(normal);
        Self { pos, normal, material }
    }

    /// Distance along the ray to the plane, if it lies inside the ray's interval.
    ///
    /// A ray parallel to the plane divides by zero, giving a non-finite distance that is rejected by the interval
    fn solve(&self, ray: &Ray) -> Option<Number> {
        let t = Vector3::dot(self.pos - ray.pos(), self.normal) / Vector3::dot(ray.dir(), self.normal);
        ray.interval().contains_dist(t).then_some(t)
    }
}

impl Mesh for PlaneMesh {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let dist = self.solve(ray)?;
        let hit = HitRecord {
            pos: ray.at(dist),
            normal: self.normal,
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

    #[test]
    fn ray_hits_facing_plane() {
        let plane = PlaneMesh::new((0., 0., 125.), (0., 0., -1.), 4);
        let hit = plane
            .intersect(&Ray::new(Point3::ZERO, Vector3::Z))
            .expect("ray should hit plane");

        assert_relative_eq!(hit.dist, 125.);
        assert_relative_eq!(hit.pos, Point3::new(0., 0., 125.));
        assert_eq!(hit.normal, Vector3::NEG_Z);
        assert_eq!(hit.material, 4);
    }

    #[test]
    fn back_side_is_hit_too() {
        let plane = PlaneMesh::new(Point3::ZERO, Vector3::Y, 0);
        let hit = plane
            .intersect(&Ray::new((3., -2., 1.), (0., 1., 0.)))
            .expect("planes are double sided");
        assert_relative_eq!(hit.dist, 2.);
        assert_eq!(hit.normal, Vector3::Y);
    }

    #[test]
    fn parallel_ray_never_hits() {
        let planes = [
            PlaneMesh::new(Point3::ZERO, Vector3::Y, 0),
            PlaneMesh::new((0., 5., 0.), Vector3::Y, 0),
            PlaneMesh::new((0., -5., 0.), Vector3::Y, 0),
        ];
        let ray = Ray::new(Point3::ZERO, (1., 0., 3.));

        for plane in planes {
            assert_eq!(plane.intersect(&ray), None, "plane: {plane:?}");
            assert!(!plane.intersects(&ray));
        }

        // Same for a fully open interval
        let open = Ray::new_bounded(Point3::ZERO, Vector3::X, ..);
        assert!(!PlaneMesh::new((0., 1., 0.), Vector3::Y, 0).intersects(&open));
    }

    #[test]
    fn plane_behind_ray_misses() {
        let plane = PlaneMesh::new((0., 0., -10.), Vector3::Z, 0);
        assert!(!plane.intersects(&Ray::new(Point3::ZERO, Vector3::Z)));
        assert!(plane.intersects(&Ray::new_bounded(Point3::ZERO, Vector3::Z, -20.0..=0.0)));
    }
}
