//! Core application logic for CentreGuide
//!
//! This crate contains the domain data and business logic shared by every
//! screen: the store directory and its search, offers, the trip planner, and
//! notifications. It knows nothing about presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directory;
pub mod notifications;
pub mod offers;
pub mod planner;

/// Application display name
pub const APP_NAME: &str = "CentreGuide";

/// Application version string
pub const APP_VERSION: &str = "1.0.0";

/// Keys under which persisted values are stored on device
pub mod storage_keys {
    /// Session token
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Serialized user record
    pub const USER_DATA: &str = "user_data";
    /// Serialized preference toggles
    pub const PREFERENCES: &str = "preferences";
}
