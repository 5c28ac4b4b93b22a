//! API record representation shared by every resource type.
//!
//! DESIGN
//! ======
//! Records are open-ended JSON object maps keyed by the descriptor's field
//! names, so one type covers announcements, events, and forums. The server
//! owns `id`, `createdAt`, and `updatedAt`; the client never writes them.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(pub Map<String, Value>);

impl ResourceRecord {
    /// Server-assigned record id.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// A field's value as a string slice, when present and textual.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.text("createdAt")
    }
}

/// Date portion of a server timestamp for table display.
///
/// Timestamps arrive as ISO-8601 strings; the list view only shows the date.
pub fn display_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}
