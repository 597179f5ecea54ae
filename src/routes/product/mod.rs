pub mod add;
pub mod get;

pub use add::*;
pub use get::*;

pub(crate) const DUPLICATE_NAME: &str = "Produto de mesmo nome já salvo na base :/";
pub(crate) const NOT_SAVED: &str = "Não foi possível salvar novo item :/";
pub(crate) const NOT_FOUND: &str = "Produto não encontrado na base :/";
pub(crate) const NOT_LISTED: &str = "Não foi possível buscar os produtos :/";
