pub mod engine;
pub mod polyline;

pub use engine::*;
pub use polyline::*;
