use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment marker anchored to a time instant on the ruler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    /// Unique identifier
    pub id: String,
    /// Time position in ruler time units
    pub timestamp: f64,
    /// Optional label
    #[serde(default)]
    pub label: Option<String>,
    /// Optional color (hex string, e.g., "#6a58a5")
    #[serde(default)]
    pub color: Option<String>,
}

impl Marker {
    /// Create a new marker with a random id at the given time
    pub fn new(timestamp: f64) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), timestamp)
    }

    /// Create a marker with a host-supplied id
    pub fn with_id(id: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            label: None,
            color: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
