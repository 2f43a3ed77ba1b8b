//! Application state management for CentreGuide
//!
//! This crate owns the shared application state slices and the stores that
//! drive them. State changes flow through explicit transitions applied under
//! a write lock, and every committed state is broadcast to subscribers over a
//! watch channel, so readers always observe a consistent snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod settings;

pub use app_auth::{AuthConfig, AuthError, AuthProvider, AuthUser};
pub use auth::{AuthState, AuthStore, AuthTransition};
pub use settings::{SettingsState, SettingsStore, SettingsToggle};
