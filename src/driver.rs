pub mod render;
pub mod scheduler;
pub mod sink;
