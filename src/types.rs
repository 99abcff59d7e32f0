//! Restaurant records and the field vocabulary shared by forms and the API.
//!
//! Wire names follow the backend's casing (`_id`, `Name`, `Address`,
//! `Telephone`); Rust-side names are snake case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// RECORDS
// =============================================================================

/// A restaurant as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Server-assigned opaque identifier.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Telephone", default)]
    pub telephone: String,
}

impl Restaurant {
    /// The editable portion of this record.
    #[must_use]
    pub fn fields(&self) -> RestaurantFields {
        RestaurantFields {
            name: self.name.clone(),
            address: self.address.clone(),
            telephone: self.telephone.clone(),
        }
    }
}

/// The three editable fields. Serialized as the create/update request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantFields {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Telephone")]
    pub telephone: String,
}

impl RestaurantFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Telephone => &self.telephone,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Telephone => &mut self.telephone,
        };
        *slot = value.into();
    }
}

/// Body of `GET /api/restaurant/`. Anything other than an array under
/// `restaurant` (missing, `null`, `false`, a string) means "no rows".
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantListResponse {
    #[serde(default, deserialize_with = "rows_if_array")]
    pub restaurant: Option<Vec<Restaurant>>,
}

fn rows_if_array<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<Restaurant>>, D::Error> {
    match Value::deserialize(deserializer)? {
        rows @ Value::Array(_) => serde_json::from_value(rows).map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl RestaurantListResponse {
    #[must_use]
    pub fn into_restaurants(self) -> Vec<Restaurant> {
        self.restaurant.unwrap_or_default()
    }
}

/// Whether `id` can name a single record in a resource path. Blank ids and
/// the `.`/`..` dot segments would resolve to some other route.
#[must_use]
pub fn is_addressable_id(id: &str) -> bool {
    !id.trim().is_empty() && id != "." && id != ".."
}

// =============================================================================
// FIELD
// =============================================================================

/// One editable form field, addressable by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Address,
    Telephone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Address, Field::Telephone];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Telephone => "Telephone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not match any editable field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
