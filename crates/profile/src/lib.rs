pub mod chart;
pub mod extract;
pub mod series;
pub mod tool;

pub use chart::*;
pub use extract::*;
pub use series::*;
pub use tool::*;
