//! # dinehub
//!
//! Client for managing restaurant records over the Dine Hub REST API:
//! list, create, edit and delete, with bearer-token access and
//! dialog-confirmed deletes.
//!
//! The `screen` module holds the view state and the synchronization flow;
//! `api` and `dialog` are the two seams it talks through. The `dinehub`
//! binary wires them to reqwest and the terminal.

pub mod api;
pub mod config;
pub mod deletion;
pub mod dialog;
pub mod forms;
pub mod render;
pub mod screen;
pub mod session;
pub mod types;

pub use api::{ApiError, HttpRestaurantApi, RestaurantApi};
pub use config::ClientConfig;
pub use screen::{DeleteOutcome, LoadOutcome, RestaurantScreen, WriteOutcome};
pub use session::Session;
pub use types::{Field, Restaurant, RestaurantFields};
