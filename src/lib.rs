//! Client core for a role-gated internal bulletin board.
//!
//! Two cooperating pieces of logic, both stateless aside from the current
//! session:
//!
//! - the **session authority** ([`Session`]): owns the one current-user slot
//!   for this client instance and is the only place it changes (login,
//!   registration, logout), delegating durable state to the collaborator
//!   backend behind the [`BoardApi`] trait;
//! - the **visibility filter** ([`visibility`]): pure functions deciding which
//!   navigation items and posts the current user sees.

// --- Module Structure ---

// Collaborator boundary: the BoardApi trait and its HTTP implementation.
pub mod api;
// Environment-driven configuration with production fail-fast.
pub mod config;
// The four-variant error taxonomy shared across the crate.
pub mod error;
// Wire-compatible data model: roles, departments, users, posts, payloads.
pub mod models;
// The session authority owning the current-user state.
pub mod session;
// Pure role/department visibility decisions.
pub mod visibility;

// --- Public Re-exports ---

// Makes the core types easily accessible to the binary entry point and tests.
pub use api::{ApiState, BoardApi, HttpBoardApi};
pub use config::AppConfig;
pub use error::Error;
pub use session::Session;
