//! Delete confirmation flow as an explicit state machine.
//!
//! STATES
//! ======
//! `Idle -> Confirming -> { Idle | Deleting -> Idle }`. Cancelling from the
//! confirmation dialog makes no network call; only a confirm transition
//! yields the record id to delete. Settling any outcome returns to `Idle`,
//! so an abandoned request can never leave the deleting flag set.

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

use super::descriptor::ResourceDescriptor;
use super::request::{Method, RequestSpec};

/// Progress of the per-record delete confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// The warning dialog is up for this record.
    Confirming { id: i64 },
    /// The delete request is in flight.
    Deleting { id: i64 },
}

impl DeleteFlow {
    /// Open the confirmation dialog for a record.
    pub fn request(&mut self, id: i64) {
        *self = Self::Confirming { id };
    }

    /// Dismiss the dialog without any side effect.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Confirm the pending delete, returning the id to send.
    ///
    /// Only a `Confirming` flow can be confirmed; anything else stays put
    /// and yields `None`, so double-clicks cannot issue two requests.
    pub fn confirm(&mut self) -> Option<i64> {
        match *self {
            Self::Confirming { id } => {
                *self = Self::Deleting { id };
                Some(id)
            }
            Self::Idle | Self::Deleting { .. } => None,
        }
    }

    /// Return to idle once the response arrives, in either outcome.
    pub fn settle(&mut self) {
        *self = Self::Idle;
    }

    /// Record id awaiting confirmation, if the dialog is up.
    pub fn confirming_id(&self) -> Option<i64> {
        match *self {
            Self::Confirming { id } => Some(id),
            Self::Idle | Self::Deleting { .. } => None,
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting { .. })
    }
}

/// The delete request for one record.
pub fn delete_request(descriptor: &ResourceDescriptor, id: i64) -> RequestSpec {
    RequestSpec {
        method: Method::Delete,
        path: format!("{}/{id}", descriptor.endpoint),
        body: None,
    }
}
