//! Typography system for CentreGuide
//!
//! Material-style text variants used by the component library and screens.

use serde::{Deserialize, Serialize};

/// Font size scale in pixels
pub mod font_size {
    /// Small (12px)
    pub const SM: f32 = 12.0;
    /// Medium (14px)
    pub const MD: f32 = 14.0;
    /// Large (16px)
    pub const LG: f32 = 16.0;
    /// Title (22px)
    pub const TITLE: f32 = 22.0;
    /// Headline (28px)
    pub const HEADLINE: f32 = 28.0;
}

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self { font_size, font_weight, line_height: 1.4, letter_spacing: 0.0 }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Calculate the actual line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Screen headline
    HeadlineMedium,
    /// Section title
    TitleLarge,
    /// Card title
    TitleMedium,
    /// Emphasised body text
    BodyLarge,
    /// Default body text
    #[default]
    BodyMedium,
    /// Captions and helper text
    BodySmall,
    /// Buttons and chips
    LabelLarge,
}

/// Typography lookup
#[derive(Debug, Clone, Default)]
pub struct Typography;

impl Typography {
    /// Resolve a variant to its text style
    pub fn get(&self, variant: TypographyVariant) -> TextStyle {
        match variant {
            TypographyVariant::HeadlineMedium => {
                TextStyle::new(font_size::HEADLINE, 700).with_line_height(1.25)
            }
            TypographyVariant::TitleLarge => {
                TextStyle::new(font_size::TITLE, 600).with_line_height(1.3)
            }
            TypographyVariant::TitleMedium => TextStyle::new(font_size::LG, 600),
            TypographyVariant::BodyLarge => TextStyle::new(font_size::LG, 400),
            TypographyVariant::BodyMedium => TextStyle::new(font_size::MD, 400),
            TypographyVariant::BodySmall => TextStyle::new(font_size::SM, 400),
            TypographyVariant::LabelLarge => {
                TextStyle::new(font_size::MD, 500).with_letter_spacing(0.1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_lookup() {
        let typo = Typography;
        let headline = typo.get(TypographyVariant::HeadlineMedium);
        assert_eq!(headline.font_size, font_size::HEADLINE);
        assert_eq!(headline.font_weight, 700);
    }

    #[test]
    fn test_line_height_px() {
        let style = TextStyle::new(20.0, 400).with_line_height(1.5);
        assert_eq!(style.line_height_px(), 30.0);
    }

    #[test]
    fn test_default_variant_is_body() {
        assert_eq!(TypographyVariant::default(), TypographyVariant::BodyMedium);
    }
}
