//! Deletion flow state machine.
//!
//! ```text
//! Idle ──request──▶ ConfirmPending ──cancel──▶ Cancelled
//!                         │
//!                      confirm
//!                         ▼
//!                      InFlight ──ok──▶ Deleted
//!                         │
//!                         └──err──▶ Failed
//! ```
//!
//! Settled states (`Idle`, `Cancelled`, `Deleted`, `Failed`) accept a new
//! request. The machine performs no I/O; the screen drives it, showing the
//! confirmation between `request` and `resolve` and issuing the delete call
//! between `resolve` and `complete`.

use crate::dialog::{Alert, ConfirmRequest, Confirmation, Icon};
use crate::types::is_addressable_id;

pub const DELETE_CONFIRM: ConfirmRequest = ConfirmRequest {
    title: "Are you sure?",
    text: "You want to delete this Restaurant?",
    icon: Icon::Warning,
    confirm_label: "Yes, delete it!",
    cancel_label: "Cancel",
};

pub const DELETED_ALERT: Alert = Alert::success("Deleted!", "The Restaurant has been deleted.");
pub const DELETE_FAILED_ALERT: Alert = Alert::error("Error!", "Failed to delete the Restaurant.");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletionState {
    #[default]
    Idle,
    ConfirmPending { id: String },
    InFlight { id: String },
    Deleted { id: String },
    Cancelled { id: String },
    Failed { id: String },
}

impl DeletionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ConfirmPending { .. } => "confirm_pending",
            Self::InFlight { .. } => "in_flight",
            Self::Deleted { .. } => "deleted",
            Self::Cancelled { .. } => "cancelled",
            Self::Failed { .. } => "failed",
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::ConfirmPending { .. } | Self::InFlight { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletionError {
    #[error("cannot {action} while deletion is {state}")]
    InvalidTransition { action: &'static str, state: &'static str },
    #[error("restaurant id {0:?} cannot be deleted")]
    InvalidId(String),
}

/// Drives one record's deletion at a time.
#[derive(Debug, Clone, Default)]
pub struct DeletionFlow {
    state: DeletionState,
}

impl DeletionFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    /// Start deleting `id`. Returns the confirmation to show.
    ///
    /// # Errors
    ///
    /// Fails if another deletion is still awaiting confirmation or in flight,
    /// or if `id` is blank or a dot segment.
    pub fn request(&mut self, id: impl Into<String>) -> Result<&'static ConfirmRequest, DeletionError> {
        let id = id.into();
        if !is_addressable_id(&id) {
            return Err(DeletionError::InvalidId(id));
        }
        self.guard("request", DeletionState::is_settled)?;
        self.state = DeletionState::ConfirmPending { id };
        Ok(&DELETE_CONFIRM)
    }

    /// Feed the user's answer. Returns the id to delete when confirmed.
    ///
    /// # Errors
    ///
    /// Fails unless a confirmation is pending.
    pub fn resolve(&mut self, answer: Confirmation) -> Result<Option<String>, DeletionError> {
        let id = match std::mem::take(&mut self.state) {
            DeletionState::ConfirmPending { id } => id,
            other => return Err(self.restore("resolve", other)),
        };
        match answer {
            Confirmation::Confirmed => {
                self.state = DeletionState::InFlight { id: id.clone() };
                Ok(Some(id))
            }
            Confirmation::Cancelled => {
                self.state = DeletionState::Cancelled { id };
                Ok(None)
            }
        }
    }

    /// Record the delete call's result. Returns the alert to show.
    ///
    /// # Errors
    ///
    /// Fails unless a delete call is in flight.
    pub fn complete(&mut self, succeeded: bool) -> Result<&'static Alert, DeletionError> {
        let id = match std::mem::take(&mut self.state) {
            DeletionState::InFlight { id } => id,
            other => return Err(self.restore("complete", other)),
        };
        if succeeded {
            self.state = DeletionState::Deleted { id };
            Ok(&DELETED_ALERT)
        } else {
            self.state = DeletionState::Failed { id };
            Ok(&DELETE_FAILED_ALERT)
        }
    }

    /// Abandon whatever is in progress.
    pub fn reset(&mut self) {
        self.state = DeletionState::Idle;
    }

    fn guard(&self, action: &'static str, allowed: impl Fn(&DeletionState) -> bool) -> Result<(), DeletionError> {
        if allowed(&self.state) {
            Ok(())
        } else {
            Err(DeletionError::InvalidTransition { action, state: self.state.name() })
        }
    }

    fn restore(&mut self, action: &'static str, previous: DeletionState) -> DeletionError {
        let state = previous.name();
        self.state = previous;
        DeletionError::InvalidTransition { action, state }
    }
}

#[cfg(test)]
#[path = "deletion_test.rs"]
mod tests;
