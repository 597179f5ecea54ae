pub mod docs;
pub mod health_checks;
pub mod product;

pub use docs::*;
pub use health_checks::*;
