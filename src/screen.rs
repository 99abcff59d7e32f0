//! Restaurant management screen.
//!
//! DESIGN
//! ======
//! `RestaurantScreen` owns everything the view shows: the collection, the
//! create and edit forms, and the deletion flow. It talks to the backend
//! through `RestaurantApi` and to the user through `Dialog`.
//!
//! Server state is never patched locally. A successful create, update or
//! delete triggers `reload`, which discards all client state (forms,
//! deletion flow) and re-fetches the full list. Failed writes leave the
//! collection and forms exactly as they were so the user can retry.
//!
//! ERROR HANDLING
//! ==============
//! Failures are contained to the interaction that caused them and reported
//! as outcomes, not errors:
//! - no credential: logged, nothing sent, no dialog (`Skipped`)
//! - list failure: logged, previous collection kept
//! - write failure: error dialog, form kept (`Failed`)
//! - cancelled confirmation: no-op (`Cancelled`)
//!
//! Only caller mistakes (editing with nothing selected, overlapping
//! deletions) surface as `Err`.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api::{ApiError, RestaurantApi};
use crate::deletion::{DeletionError, DeletionFlow, DeletionState};
use crate::dialog::{Alert, Dialog};
use crate::forms::{CreateForm, EditForm, FormError};
use crate::session::Session;
use crate::types::{Restaurant, is_addressable_id};

pub const CREATE_SAVED_ALERT: Alert = Alert::success("Success!", "Data Saved Successfully!");
pub const CREATE_FAILED_ALERT: Alert =
    Alert::error("Error", "An error occurred while saving the data. Please try again.");
pub const UPDATE_SAVED_ALERT: Alert = Alert::success("Success!", "Updated Successfully!");
pub const UPDATE_FAILED_ALERT: Alert =
    Alert::error("Error", "An error occurred while updating the data. Please try again.");

// =============================================================================
// OUTCOMES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection now holds this many rows.
    Loaded(usize),
    /// The request failed; the previous collection is still shown.
    Failed,
    /// No credential, nothing was sent.
    Skipped,
    /// `mount` already ran for this screen.
    AlreadyMounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Saved,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
    Skipped,
}

// =============================================================================
// SCREEN
// =============================================================================

pub struct RestaurantScreen<A, D> {
    session: Session,
    api: A,
    dialog: D,
    restaurants: Vec<Restaurant>,
    create_form: CreateForm,
    edit_form: EditForm,
    deletion: DeletionFlow,
    mounted: bool,
    reloads: u64,
}

impl<A: RestaurantApi, D: Dialog> RestaurantScreen<A, D> {
    pub fn new(session: Session, api: A, dialog: D) -> Self {
        Self {
            session,
            api,
            dialog,
            restaurants: Vec::new(),
            create_form: CreateForm::new(),
            edit_form: EditForm::new(),
            deletion: DeletionFlow::new(),
            mounted: false,
            reloads: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Login and logout go through here.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut CreateForm {
        &mut self.create_form
    }

    #[must_use]
    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut EditForm {
        &mut self.edit_form
    }

    #[must_use]
    pub fn deletion_state(&self) -> &DeletionState {
        self.deletion.state()
    }

    /// Number of full reloads performed since construction.
    #[must_use]
    pub fn reload_count(&self) -> u64 {
        self.reloads
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Initial load. Runs once per screen; later calls do nothing.
    pub async fn mount(&mut self) -> LoadOutcome {
        if self.mounted {
            return LoadOutcome::AlreadyMounted;
        }
        self.mounted = true;
        self.load_restaurants().await
    }

    /// Fetch the list and replace the collection with it.
    pub async fn load_restaurants(&mut self) -> LoadOutcome {
        let Some(token) = self.session.credential() else {
            warn!("not authenticated; skipping restaurant list");
            return LoadOutcome::Skipped;
        };

        match self.api.list(token).await {
            Ok(rows) => {
                info!(count = rows.len(), "restaurants loaded");
                self.restaurants = rows;
                LoadOutcome::Loaded(self.restaurants.len())
            }
            Err(e) => {
                error!(error = %e, "restaurant list failed");
                LoadOutcome::Failed
            }
        }
    }

    /// Discard all client state and fetch a fresh snapshot.
    pub async fn reload(&mut self) -> LoadOutcome {
        self.reloads += 1;
        self.create_form = CreateForm::new();
        self.edit_form = EditForm::new();
        self.deletion.reset();
        self.load_restaurants().await
    }

    // -------------------------------------------------------------------------
    // Create / edit
    // -------------------------------------------------------------------------

    /// Send the create form. Reloads on success, keeps the form on failure.
    pub async fn submit_create(&mut self) -> WriteOutcome {
        let Some(token) = self.session.credential() else {
            warn!("not authenticated; skipping restaurant create");
            return WriteOutcome::Skipped;
        };

        let result = self.api.create(token, self.create_form.fields()).await;
        self.finish_write("create", result, &CREATE_SAVED_ALERT, &CREATE_FAILED_ALERT)
            .await
    }

    /// Point the edit form at `restaurant`.
    pub fn select_for_edit(&mut self, restaurant: &Restaurant) {
        self.edit_form.select(restaurant);
    }

    /// Point the edit form at the listed restaurant with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotFound`] if the current collection has no such
    /// record; the edit form is left unchanged.
    pub fn select_for_edit_by_id(&mut self, id: &str) -> Result<(), FormError> {
        let restaurant = self
            .restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| FormError::NotFound(id.to_owned()))?;
        self.edit_form.select(restaurant);
        Ok(())
    }

    /// Send the edit form for its selected record.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoSelection`] if no record was selected. Nothing
    /// is sent and no dialog is shown in that case.
    pub async fn submit_edit(&mut self) -> Result<WriteOutcome, FormError> {
        let (id, fields) = self.edit_form.submission()?;
        let Some(token) = self.session.credential() else {
            warn!("not authenticated; skipping restaurant update");
            return Ok(WriteOutcome::Skipped);
        };

        let result = self.api.update(token, id, fields).await;
        Ok(self
            .finish_write("update", result, &UPDATE_SAVED_ALERT, &UPDATE_FAILED_ALERT)
            .await)
    }

    async fn finish_write(
        &mut self,
        action: &'static str,
        result: Result<Value, ApiError>,
        saved: &Alert,
        failed: &Alert,
    ) -> WriteOutcome {
        match result {
            Ok(body) => {
                info!(action, response = %body, "restaurant write succeeded");
                self.dialog.alert(saved).await;
                self.reload().await;
                WriteOutcome::Saved
            }
            Err(e) => {
                error!(action, error = %e, "restaurant write failed");
                self.dialog.alert(failed).await;
                WriteOutcome::Failed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Confirm, then delete the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeletionError`] if another deletion is still pending, or
    /// [`DeletionError::InvalidId`] if `id` cannot name a record. Nothing is
    /// sent and no dialog is shown in that case.
    pub async fn delete(&mut self, id: &str) -> Result<DeleteOutcome, DeletionError> {
        if !is_addressable_id(id) {
            return Err(DeletionError::InvalidId(id.to_owned()));
        }
        let Some(token) = self.session.credential().map(str::to_owned) else {
            warn!("not authenticated; skipping restaurant delete");
            return Ok(DeleteOutcome::Skipped);
        };

        let confirm = self.deletion.request(id)?;
        let answer = self.dialog.confirm(confirm).await;
        let Some(id) = self.deletion.resolve(answer)? else {
            info!(%id, "restaurant delete cancelled");
            self.deletion.reset();
            return Ok(DeleteOutcome::Cancelled);
        };

        let result = self.api.delete(&token, &id).await;
        if let Err(e) = &result {
            error!(%id, error = %e, "restaurant delete failed");
        } else {
            info!(%id, "restaurant deleted");
        }

        let alert = self.deletion.complete(result.is_ok())?;
        self.dialog.alert(alert).await;
        if result.is_ok() {
            self.reload().await;
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::Failed)
        }
    }
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;
