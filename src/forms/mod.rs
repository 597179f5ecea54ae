mod payload;
pub mod product;

pub use payload::JsonOrForm;
pub use product::*;
