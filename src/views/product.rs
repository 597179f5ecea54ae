use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "texto")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "comentarios")]
    pub comments: Vec<Comment>,
}

/// Listing envelope, `{"produtos": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Listing {
    #[serde(rename = "produtos")]
    pub products: Vec<Product>,
}

impl From<&models::Comment> for Comment {
    fn from(comment: &models::Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text.clone(),
        }
    }
}

impl From<&models::Product> for Product {
    fn from(product: &models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            value: product.unit_value,
            comments: product.comments.iter().map(Into::into).collect(),
        }
    }
}

impl From<&[models::Product]> for Listing {
    fn from(products: &[models::Product]) -> Self {
        Self {
            products: products.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn banana() -> models::Product {
        let mut product = models::Product::new("Banana".to_string(), 12, 3.5);
        product.id = 1;
        let mut ripe = models::Comment::new("ripe".to_string());
        ripe.id = 10;
        product.add_comment(ripe);
        let mut cheap = models::Comment::new("cheap".to_string());
        cheap.id = 11;
        product.add_comment(cheap);
        product
    }

    #[test]
    fn product_wire_shape() {
        let view = Product::from(&banana());

        assert_eq!(
            json!({
                "id": 1,
                "nome": "Banana",
                "quantidade": 12,
                "valor": 3.5,
                "comentarios": [
                    {"id": 10, "texto": "ripe"},
                    {"id": 11, "texto": "cheap"}
                ]
            }),
            serde_json::to_value(&view).unwrap()
        );
    }

    #[test]
    fn listing_embeds_each_products_comments() {
        let mut apple = models::Product::new("Apple".to_string(), 0, 1.0);
        apple.id = 2;
        let products = vec![banana(), apple];

        let listing = Listing::from(products.as_slice());

        assert_eq!(2, listing.products.len());
        assert_eq!(2, listing.products[0].comments.len());
        assert!(listing.products[1].comments.is_empty());
    }

    #[test]
    fn empty_listing() {
        let products: Vec<models::Product> = vec![];
        let listing = Listing::from(products.as_slice());

        assert_eq!(json!({"produtos": []}), serde_json::to_value(&listing).unwrap());
    }

    #[test]
    fn mapping_is_pure() {
        let product = banana();
        let before = product.clone();

        let first = Product::from(&product);
        let second = Product::from(&product);

        assert_eq!(first, second);
        assert_eq!(before, product);
    }
}
