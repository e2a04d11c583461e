pub mod free;
pub mod scene;
