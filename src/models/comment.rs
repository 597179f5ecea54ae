use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub text: String, // at most 4000 chars
    pub created_at: DateTime<Utc>,
    pub product_id: i64,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self {
            id: 0,
            text,
            created_at: Utc::now(),
            product_id: 0,
        }
    }
}
