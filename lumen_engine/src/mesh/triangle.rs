use crate::core::types::{MaterialIndex, Number, Point3, Vector3};
use crate::mesh::Mesh;
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use crate::shared::validate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use valuable::Valuable;

/// Rays are treated as running parallel to the triangle when the determinant is smaller than this, relative to the
/// lengths of the vectors it is calculated from. Being relative keeps the test independent of the triangle's scale
const PARALLEL_EPSILON: Number = 1e-12;

/// Which side of a triangle (if any) is ignored when intersecting.
///
/// The front face is the side the face normal points out of. A ray travelling against the normal
/// (`dir · normal < 0`) hits the front face, and a ray travelling along it (`dir · normal > 0`) hits the back face
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Valuable, Display, EnumIter)]
pub enum CullMode {
    /// Rays hitting the front face are rejected
    FrontFace,
    /// Rays hitting the back face are rejected
    #[default]
    BackFace,
    /// Both sides can be hit
    None,
}

impl CullMode {
    /// Whether a hit should be discarded, given the dot product of the ray direction and the face normal
    #[inline(always)]
    pub fn culls(self, dir_dot_normal: Number) -> bool {
        match self {
            Self::FrontFace => dir_dot_normal < 0.,
            Self::BackFace => dir_dot_normal > 0.,
            Self::None => false,
        }
    }
}

/// Calculates the normal for a face with the given vertices, using the winding order `v0 -> v1 -> v2`.
///
/// Returns [None] for degenerate (zero-area) faces
pub fn face_normal(v0: Point3, v1: Point3, v2: Point3) -> Option<Vector3> {
    Vector3::cross(v1 - v0, v2 - v0).try_normalize()
}

/// A single triangle
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
    /// Normal of the face, used for culling and shading
    ///
    /// # Requirements
    /// Must be normalised
    pub normal: Vector3,
    pub cull_mode: CullMode,
    pub material: MaterialIndex,
}

impl Triangle {
    /// Creates a triangle, using [face_normal] for the normal.
    ///
    /// Returns [None] for degenerate triangles, which have no well defined normal
    pub fn new(
        v0: impl Into<Point3>,
        v1: impl Into<Point3>,
        v2: impl Into<Point3>,
        cull_mode: CullMode,
        material: MaterialIndex,
    ) -> Option<Self> {
        let (v0, v1, v2) = (v0.into(), v1.into(), v2.into());
        Some(Self {
            v0,
            v1,
            v2,
            normal: face_normal(v0, v1, v2)?,
            cull_mode,
            material,
        })
    }

    /// Möller–Trumbore intersection, returning the distance to the hit if there is a valid one
    fn solve(&self, ray: &Ray) -> Option<Number> {
        let dir = ray.dir();
        if self.cull_mode.culls(Vector3::dot(dir, self.normal)) {
            return None;
        }

        let edge_1 = self.v1 - self.v0;
        let edge_2 = self.v2 - self.v0;
        let p = Vector3::cross(dir, edge_2);
        let det = Vector3::dot(edge_1, p);
        if det.abs() <= PARALLEL_EPSILON * edge_1.length() * p.length() {
            return None;
        }
        let inv_det = 1. / det;

        // Barycentric coords of the hit point
        let s = ray.pos() - self.v0;
        let u = Vector3::dot(s, p) * inv_det;
        if !(0. ..=1.).contains(&u) {
            return None;
        }
        let q = Vector3::cross(s, edge_1);
        let v = Vector3::dot(dir, q) * inv_det;
        if v < 0. || u + v > 1. {
            return None;
        }

        let t = Vector3::dot(edge_2, q) * inv_det;
        ray.interval().contains_dist(t).then_some(t)
    }
}

impl Mesh for Triangle {
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
