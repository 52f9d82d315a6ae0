//! Web layer for the advising buddy.
//!
//! A stateless JSON API over the validator. Each request carries its own
//! schedule snapshot; the only shared state is the read-only catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
