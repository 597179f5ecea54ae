mod comment;
mod product;

pub use comment::*;
pub use product::*;
