use crate::core::types::{Number, Point3, Vector3};
use crate::shared::interval::Interval;

/// A ray, with the interval of distances along it at which an intersection is considered valid
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
    interval: Interval<Number>,
}

impl Ray {
    /// Creates a new ray that accepts intersections at any non-negative distance (`0..`)
    pub fn new(pos: impl Into<Point3>, dir: impl Into<Vector3>) -> Self {
        Self::new_bounded(pos, dir, 0.0..)
    }

    pub fn new_bounded(pos: impl Into<Point3>, dir: impl Into<Vector3>, interval: impl Into<Interval<Number>>) -> Self {
        Self {
            pos: pos.into(),
            dir: dir.into(),
            interval: interval.into(),
        }
    }

    /// World-space coordinate of the ray
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray.
    ///
    /// This is *not* normalised by the ray, so distances along the ray are measured in multiples of this vector
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// The range of distances at which intersections are valid (near/far clipping)
    #[inline(always)]
    pub fn interval(&self) -> &Interval<Number> { &self.interval }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    #[inline(always)]
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}

impl From<Ray> for (Point3, Vector3) {
    fn from(ray: Ray) -> Self { (ray.pos, ray.dir) }
}
