mod json;
pub use json::*;
mod price;
pub use price::*;
