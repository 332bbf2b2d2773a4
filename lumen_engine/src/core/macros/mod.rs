pub mod impl_utils;
pub mod targets;
