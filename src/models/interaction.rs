use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One entry of a user's interaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InteractionRecord {
    pub user_id: String,
    pub item_id: String,
    pub weight: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl InteractionRecord {
    pub fn new(user_id: &str, item_id: &str, weight: Option<f64>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            item_id: item_id.to_string(),
            weight,
            created_at,
        }
    }

    /// The explicit weight, or 1 when it is missing or not a finite number
    pub fn effective_weight(&self) -> f64 {
        self.weight.filter(|w| w.is_finite()).unwrap_or(1.0)
    }
}

/// Item identifier as sent by clients, which post either strings or numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    Text(String),
    Number(i64),
}

impl Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemRef::Text(id) => write!(f, "{}", id.trim()),
            ItemRef::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Body of a request to record an interaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInteraction {
    #[serde(default = "default_item_type")]
    pub item_type: String,
    #[serde(default)]
    pub item_id: Option<ItemRef>,
    #[serde(default)]
    pub event_type: Option<String>,
    /// Absent or `null` counts as 1
    #[serde(default)]
    pub weight: Option<f64>,
}

fn default_item_type() -> String {
    "player".to_string()
}

/// A validated interaction ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    pub user_id: String,
    pub item_type: String,
    pub item_id: String,
    pub event_type: String,
    pub weight: f64,
}
