pub mod grid;
pub mod ground;

pub use grid::*;
pub use ground::*;
