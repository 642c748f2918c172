pub mod material;
pub mod section;
