use crate::core::types::{MaterialIndex, Number, Point3, Vector3};

/// A struct representing a ray-mesh intersection
///
/// An intersection query that missed returns [None] instead of a record, so every [HitRecord] describes a real hit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    /// The position in world coordinates of the intersection
    pub pos: Point3,
    /// Surface normal at intersection.
    ///
    /// # Invariants
    ///  - Must be normalised
    ///  - Cannot be zero/nan
    pub normal: Vector3,
    /// Distance along the ray that the intersection occurred, in multiples of the ray's direction vector.
    ///
    /// # Invariants
    /// - Lies inside the interval of the ray that produced it
    pub dist: Number,
    /// Index into the scene's material list, of the material for the surface that was hit
    pub material: MaterialIndex,
}

impl HitRecord {
    /// Keeps whichever of the two records is closer. On a tie, `current` is kept.
    #[inline(always)]
    pub fn closest(current: Option<Self>, candidate: Option<Self>) -> Option<Self> {
        match (current, candidate) {
            (Some(cur), Some(cand)) if cand.dist < cur.dist => Some(cand),
            (None, cand) => cand,
            (cur, _) => cur,
        }
    }
}
