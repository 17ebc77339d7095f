//! Expense entity - a single spending record belonging to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One expense line as shown on the home summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub description: Option<String>,
    pub category: String,
    /// Owning user's identifier.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with default values
    pub fn new(title: String, amount: f64, category: String, user_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            amount,
            description: None,
            category,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
