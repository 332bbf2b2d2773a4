pub mod colour;
pub mod macros;
pub mod targets;
pub mod types;
