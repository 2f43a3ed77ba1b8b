//! Design tokens for CentreGuide
//!
//! Spacing, sizing, and radius primitives shared by the component library.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - Extra large
    pub const SPACE_XL: f32 = 24.0;
    /// 32px - 2x large
    pub const SPACE_2XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (20px)
        pub const MD: f32 = 20.0;
        /// Large icon (24px)
        pub const LG: f32 = 24.0;
        /// Extra large icon (32px)
        pub const XL: f32 = 32.0;
    }

    /// Avatar sizes
    pub mod avatar {
        /// Small avatar (32px)
        pub const SM: f32 = 32.0;
        /// Medium avatar (48px)
        pub const MD: f32 = 48.0;
        /// Large avatar (64px)
        pub const LG: f32 = 64.0;
        /// Account screen avatar (96px)
        pub const PROFILE: f32 = 96.0;
    }

    /// Button sizes
    pub mod button {
        /// Small button height (32px)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Medium button height (40px)
        pub const MD_HEIGHT: f32 = 40.0;
        /// Large button height (48px)
        pub const LG_HEIGHT: f32 = 48.0;
        /// Medium button padding x (16px)
        pub const MD_PADDING_X: f32 = 16.0;
        /// Large button padding x (24px)
        pub const LG_PADDING_X: f32 = 24.0;
    }

    /// Input field sizes
    pub mod input {
        /// Small input height (36px)
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium input height (44px)
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large input height (52px)
        pub const LG_HEIGHT: f32 = 52.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Corner radii in pixels
pub mod radius {
    /// Chips and small controls (8px)
    pub const SM: f32 = 8.0;
    /// Buttons and inputs (12px)
    pub const MD: f32 = 12.0;
    /// Cards and modals (16px)
    pub const LG: f32 = 16.0;
    /// Fully rounded (pill / circular)
    pub const FULL: f32 = 9999.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(spacing::get("md"), Some(spacing::SPACE_MD));
        assert_eq!(spacing::get("nope"), None);
    }

    #[test]
    fn test_scales_are_ordered() {
        assert!(spacing::SPACE_XS < spacing::SPACE_2XL);
        assert!(sizing::avatar::SM < sizing::avatar::PROFILE);
        assert!(radius::SM < radius::LG);
    }
}
