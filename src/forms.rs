//! Create and edit form models.
//!
//! Both forms hold the three editable fields and accept per-field changes,
//! either typed (`Field`) or by wire name as an input widget would send
//! them. The edit form additionally tracks which record it targets; it can
//! only be submitted once a record has been selected.

use crate::types::{Field, Restaurant, RestaurantFields, UnknownField, is_addressable_id};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("no restaurant selected for editing")]
    NoSelection,

    #[error("no restaurant with id `{0}` in the current list")]
    NotFound(String),
}

fn apply_named(fields: &mut RestaurantFields, name: &str, value: impl Into<String>) -> Result<(), FormError> {
    let field = name.parse::<Field>()?;
    fields.set(field, value);
    Ok(())
}

// =============================================================================
// CREATE FORM
// =============================================================================

/// Fields for a new restaurant. Starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    fields: RestaurantFields,
}

impl CreateForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Apply a change event addressed by field name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] and leaves the form unchanged if
    /// `name` is not an editable field.
    pub fn apply_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        apply_named(&mut self.fields, name, value)
    }

    #[must_use]
    pub fn fields(&self) -> &RestaurantFields {
        &self.fields
    }
}

// =============================================================================
// EDIT FORM
// =============================================================================

/// Fields for an existing restaurant plus the identifier being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    fields: RestaurantFields,
    target: Option<String>,
}

impl EditForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every field and the target identifier from `restaurant`.
    pub fn select(&mut self, restaurant: &Restaurant) {
        self.fields = restaurant.fields();
        self.target = Some(restaurant.id.clone());
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Apply a change event addressed by field name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] and leaves the form unchanged if
    /// `name` is not an editable field.
    pub fn apply_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        apply_named(&mut self.fields, name, value)
    }

    #[must_use]
    pub fn fields(&self) -> &RestaurantFields {
        &self.fields
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The identifier and body an update request would carry.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoSelection`] if no record has been selected, or
    /// the selected record's id is blank or a dot segment.
    pub fn submission(&self) -> Result<(&str, &RestaurantFields), FormError> {
        match self.target.as_deref() {
            Some(id) if is_addressable_id(id) => Ok((id, &self.fields)),
            _ => Err(FormError::NoSelection),
        }
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
