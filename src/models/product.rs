use crate::models::Comment;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String, // unique, at most 140 chars
    pub quantity: i64,
    pub unit_value: f64,
    pub created_at: DateTime<Utc>,
    // assembled by db::product, never read from the product row
    #[sqlx(skip)]
    pub comments: Vec<Comment>,
}

impl Product {
    pub fn new(name: String, quantity: i64, unit_value: f64) -> Self {
        Self {
            id: 0,
            name,
            quantity,
            unit_value,
            created_at: Utc::now(),
            comments: vec![],
        }
    }

    /// Attaches `comment` to this product, taking over the owner reference.
    pub fn add_comment(&mut self, mut comment: Comment) {
        comment.product_id = self.id;
        self.comments.push(comment);
    }
}
