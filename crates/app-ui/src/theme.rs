//! Design system and theme provider for CentreGuide
//!
//! Two themes share one shape: a light theme for daytime browsing and a dark
//! theme for evening visits. Components never hard-code colors; they resolve
//! everything through the [`Theme`] they are rendered with.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Light);
//! assert_eq!(theme.colors.primary, "#0F766E");
//! ```

use serde::{Deserialize, Serialize};

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// CentreGuide brand colors
pub mod brand {
    /// Primary brand color (wayfinding teal)
    pub const PRIMARY: &str = "#0F766E";

    /// Accent amber used for offers and highlights
    pub const ACCENT_AMBER: &str = "#F59E0B";

    /// Error red
    pub const ERROR: &str = "#DC2626";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

/// Available theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Bright theme with white surfaces
    #[default]
    Light,
    /// Dark theme for evening visits
    Dark,
}

/// The semantic color roles every component draws from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary actions and the active tab
    pub primary: Color,
    /// Text and icons on primary surfaces
    pub on_primary: Color,
    /// Accent for offers and highlights
    pub accent: Color,
    /// Screen background
    pub background: Color,
    /// Cards and sheets
    pub surface: Color,
    /// Inset surfaces such as input fields and chips
    pub surface_variant: Color,
    /// Primary text
    pub on_surface: Color,
    /// Secondary text
    pub on_surface_variant: Color,
    /// Hairlines and input borders
    pub outline: Color,
    /// Validation errors and destructive actions
    pub error: Color,
    /// Text and icons on error surfaces
    pub on_error: Color,
}

/// A complete theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which variant this is
    pub name: ThemeName,
    /// Semantic color roles
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

/// Build the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            primary: brand::PRIMARY.to_string(),
            on_primary: brand::WHITE.to_string(),
            accent: brand::ACCENT_AMBER.to_string(),
            background: "#F8FAFC".to_string(),
            surface: brand::WHITE.to_string(),
            surface_variant: "#E2E8F0".to_string(),
            on_surface: "#0F172A".to_string(),
            on_surface_variant: "#475569".to_string(),
            outline: "#CBD5E1".to_string(),
            error: brand::ERROR.to_string(),
            on_error: brand::WHITE.to_string(),
        },
    }
}

/// Build the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            primary: "#2DD4BF".to_string(),
            on_primary: "#042F2E".to_string(),
            accent: "#FBBF24".to_string(),
            background: "#0F172A".to_string(),
            surface: "#1E293B".to_string(),
            surface_variant: "#334155".to_string(),
            on_surface: "#F1F5F9".to_string(),
            on_surface_variant: "#94A3B8".to_string(),
            outline: "#475569".to_string(),
            error: "#F87171".to_string(),
            on_error: "#450A0A".to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0F766E"), Some((0x0F, 0x76, 0x6E)));
        assert_eq!(parse_hex_color("0F766E"), Some((0x0F, 0x76, 0x6E)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("€€"), None);
        assert_eq!(parse_hex_color("#€€0F76"), None);
    }

    #[test]
    fn test_rgb_round_trip() {
        let (r, g, b) = parse_hex_color(brand::PRIMARY).unwrap();
        assert_eq!(rgb_to_hex(r, g, b), brand::PRIMARY);
    }

    #[test]
    fn test_theme_variants() {
        assert!(!light_theme().is_dark());
        assert!(dark_theme().is_dark());
        assert_eq!(get_theme(ThemeName::Light).colors.primary, brand::PRIMARY);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, parsed);
    }
}
