use crate::core::types::{Colour, Vector3};
use crate::material::Material;
use crate::shared::hit::HitRecord;
use std::sync::Arc;

/// Wraps any [Material] implementation behind a shared pointer, for materials that aren't part of
/// [crate::material::MaterialInstance]
#[derive(Clone, Debug)]
pub struct DynamicMaterial {
    pub inner: Arc<dyn Material>,
}

impl DynamicMaterial {
    pub fn new(material: impl Material + 'static) -> Self { Self { inner: Arc::new(material) } }
}

impl Material for DynamicMaterial {
    fn shade(&self, hit: &HitRecord, dir_to_light: Vector3, dir_to_view: Vector3) -> Colour {
        self.inner.shade(hit, dir_to_light, dir_to_view)
    }
}
