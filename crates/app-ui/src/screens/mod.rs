//! Application screens
//!
//! Each screen is a struct owning its local view state. Screens read shared
//! state through snapshots passed in by the caller and express navigation as
//! [`Route`](crate::navigation::Route) values; they never mutate the stores
//! themselves.

pub mod directory;
pub mod home;
pub mod map;
pub mod notifications;
pub mod offers;
pub mod planner;
pub mod settings;
pub mod store_details;

pub use directory::DirectoryScreen;
pub use home::HomeScreen;
pub use map::MapScreen;
pub use notifications::NotificationsScreen;
pub use offers::OffersScreen;
pub use planner::PlannerScreen;
pub use settings::SettingsScreen;
pub use store_details::StoreDetailsScreen;
