//! User interface for CentreGuide
//!
//! This crate provides the UI layer, including components, screens,
//! navigation, theming, and design system primitives.
//!
//! # Design System
//!
//! The design system is built around the centre's wayfinding palette:
//! - Primary: Teal (#0F766E)
//! - Accent: Amber (#F59E0B)
//!
//! Two themes are supported:
//! - [`theme::ThemeName::Light`] - Bright theme with white surfaces
//! - [`theme::ThemeName::Dark`] - Dark theme for evening visits
//!
//! # Modules
//!
//! - [`theme`] - Theme provider and color palettes
//! - [`tokens`] - Design tokens (spacing, sizing, radii)
//! - [`typography`] - Typography system and text styles
//! - [`components`] - UI component library
//! - [`validators`] - Input validation rules
//! - [`screens`] - Application screens
//! - [`navigation`] - Navigation framework
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//! use app_ui::tokens::spacing;
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//!
//! let padding = spacing::SPACE_MD;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;
pub mod validators;

// Re-export commonly used types
pub use theme::{dark_theme, get_theme, light_theme, Theme, ThemeColors, ThemeName};

pub use tokens::{radius, sizing, spacing};

pub use typography::{TextStyle, Typography, TypographyVariant};

pub use navigation::{
    NavigationState, NavigationTab, Route, RouteParams, Router, StackEntry, StoreDetailsParams,
};

pub use validators::Validator;
