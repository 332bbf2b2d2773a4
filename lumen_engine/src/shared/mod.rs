use dyn_clone::DynClone;
use std::fmt::Debug;

pub mod hit;
pub mod interval;
pub mod ray;
pub mod token;
pub mod validate;

// NOTE: We have to use [`DynClone`] instead of plain old [`Clone`],
// Since we will be using `Arc<dyn Material>` and similar, and need to clone those
dyn_clone::clone_trait_object!(ComponentRequirements);
/// A simple marker trait that enforces a few other traits we need for scene components
///
/// Scenes are shared between threads while rendering, so every component must be [Send] and [Sync]
pub trait ComponentRequirements: DynClone + Debug + Send + Sync {}
impl<T: DynClone + Debug + Send + Sync> ComponentRequirements for T {}
