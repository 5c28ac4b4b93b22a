//! List state for one resource screen.
//!
//! The server response is the source of truth: `items` is only ever replaced
//! wholesale by a successful fetch, never edited in place. A failed fetch
//! keeps the previous items so the table stays populated.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use super::record::ResourceRecord;

/// The collection shown in the table plus its in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub items: Vec<ResourceRecord>,
    pub loading: bool,
}

impl ListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the collection with the server's response.
    pub fn finish_load(&mut self, items: Vec<ResourceRecord>) {
        self.items = items;
        self.loading = false;
    }

    /// Clear the in-flight flag, keeping the stale items.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }
}
