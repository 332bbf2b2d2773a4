//! # Module [crate::transform]
//!
//! Affine transforms in homogeneous coordinates, used to place and orient things in the world.
//!
//! See [Matrix]

pub use self::matrix::Matrix;

pub mod matrix;
