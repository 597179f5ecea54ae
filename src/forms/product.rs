use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Shorter fragments list the whole catalog instead of filtering.
pub const MIN_SEARCH_LENGTH: usize = 3;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AddProduct {
    #[serde(rename = "nome")]
    #[validate(min_length = 1)]
    #[validate(max_length = 140)]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64, // expected to be >= 0, not enforced
    #[serde(rename = "valor")]
    pub value: f64,
}

impl Into<models::Product> for AddProduct {
    fn into(self) -> models::Product {
        models::Product::new(self.name, self.quantity, self.value)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchByName {
    #[serde(rename = "nome")]
    pub name: String,
}

impl SearchByName {
    /// The fragment to filter on, or `None` when it is too short and the
    /// full listing is returned instead.
    pub fn fragment(&self) -> Option<&str> {
        if self.name.chars().count() < MIN_SEARCH_LENGTH {
            None
        } else {
            Some(self.name.as_str())
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FindById {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(name: &str) -> SearchByName {
        SearchByName {
            name: name.to_string(),
        }
    }

    #[test]
    fn add_product_reads_wire_names() {
        let form: AddProduct =
            serde_json::from_str(r#"{"nome": "Banana", "quantidade": 12, "valor": 3.5}"#).unwrap();

        assert!(form.validate().is_ok());
        let product: models::Product = form.into();
        assert_eq!("Banana", product.name);
        assert_eq!(12, product.quantity);
        assert_eq!(3.5, product.unit_value);
        assert!(product.comments.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let form = AddProduct {
            name: String::new(),
            quantity: 1,
            value: 1.0,
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn long_name_is_rejected() {
        let form = AddProduct {
            name: "x".repeat(141),
            quantity: 1,
            value: 1.0,
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn negative_quantity_passes_validation() {
        let form = AddProduct {
            name: "Banana".to_string(),
            quantity: -4,
            value: 1.0,
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_fragment_means_full_listing() {
        assert_eq!(None, search("").fragment());
        assert_eq!(None, search("ab").fragment());
        // two characters, four bytes
        assert_eq!(None, search("çã").fragment());
        assert_eq!(Some("abc"), search("abc").fragment());
    }
}
