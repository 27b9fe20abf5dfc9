pub mod catalog;
pub use catalog::*;
pub mod selection;
pub use selection::*;

pub use basket_utils::Price;
