pub use character::*;
pub use irrep::*;
pub use point_group::*;
pub use registry::*;
pub use render::Render;


pub mod character;
pub mod irrep;
pub mod point_group;
pub mod registry;
mod render;
pub mod tables;
