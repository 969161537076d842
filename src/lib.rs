pub mod cartesian;
pub mod point;
pub mod polar;

pub use cartesian::*;
pub use point::*;
pub use polar::*;
