//! UI component library for CentreGuide
//!
//! Components are defined as Rust structs with serializable properties that
//! can be rendered by the frontend webview. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware styling through the theme system
//! - Event handling hooks
//!
//! # Available Components
//!
//! - [`Avatar`] - Initials or photo avatar with an optional status badge
//! - [`Badge`] - Count and status badges
//! - [`Button`] - Interactive button with material modes
//! - [`Card`] - Elevated content card
//! - [`Chip`] - Selectable filter chip
//! - [`Input`] - Text input with validation support
//! - [`List`] - Sections, items, and accordion groups
//! - [`Modal`] - Dismissable overlay dialog

use crate::theme::{Color, Theme};
use crate::tokens::{radius, sizing};
use crate::validators::Validator;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

// =============================================================================
// Avatar Component
// =============================================================================

/// Avatar sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// Small avatar (32px)
    Small,
    /// Medium avatar (48px)
    #[default]
    Medium,
    /// Large avatar (64px)
    Large,
    /// Account screen avatar (96px)
    Profile,
}

impl AvatarSize {
    /// Diameter in pixels
    pub fn px(&self) -> f32 {
        match self {
            AvatarSize::Small => sizing::avatar::SM,
            AvatarSize::Medium => sizing::avatar::MD,
            AvatarSize::Large => sizing::avatar::LG,
            AvatarSize::Profile => sizing::avatar::PROFILE,
        }
    }
}

/// Avatar component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Name used to derive initials when no photo is set
    pub name: String,
    /// Photo URL; takes precedence over initials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Avatar size
    #[serde(default)]
    pub size: AvatarSize,
    /// Optional status badge rendered in the corner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl Avatar {
    /// Create an avatar for a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), photo_url: None, size: AvatarSize::default(), badge: None }
    }

    /// Set the photo URL
    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Attach a status badge
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Initials shown when no photo is available
    ///
    /// First letter of the first and last words, uppercased. An empty name
    /// yields "?".
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        match (first, last) {
            (Some(f), Some(l)) => format!("{}{}", f.to_uppercase(), l.to_uppercase()),
            (Some(f), None) => f.to_uppercase().to_string(),
            _ => "?".to_string(),
        }
    }

    /// Get the computed styles for this avatar based on theme
    pub fn computed_styles(&self, theme: &Theme) -> AvatarStyles {
        AvatarStyles {
            diameter: self.size.px(),
            background: theme.colors.primary.clone(),
            text_color: theme.colors.on_primary.clone(),
            border_radius: radius::FULL,
        }
    }
}

/// Computed avatar styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarStyles {
    /// Diameter in pixels
    pub diameter: f32,
    /// Background behind the initials
    pub background: Color,
    /// Initials color
    pub text_color: Color,
    /// Corner radius
    pub border_radius: f32,
}

// =============================================================================
// Badge Component
// =============================================================================

/// Badge color variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Primary brand color
    #[default]
    Primary,
    /// Accent amber, used for offers
    Accent,
    /// Error red, used for alerts
    Error,
}

/// Badge component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Count to display; clamped to `max`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Largest count shown before switching to "{max}+"
    #[serde(default = "default_badge_max")]
    pub max: u32,
    /// Render as a plain dot without a count
    #[serde(default)]
    pub dot: bool,
    /// Color variant
    #[serde(default)]
    pub variant: BadgeVariant,
}

fn default_badge_max() -> u32 {
    99
}

impl Badge {
    /// Create a counting badge
    pub fn count(count: u32) -> Self {
        Self { count: Some(count), max: default_badge_max(), dot: false, variant: BadgeVariant::default() }
    }

    /// Create a dot badge
    pub fn dot() -> Self {
        Self { count: None, max: default_badge_max(), dot: true, variant: BadgeVariant::default() }
    }

    /// Badge for the notification bell
    pub fn notifications(unread: usize) -> Option<Self> {
        if unread == 0 {
            None
        } else {
            Some(Self::count(unread as u32).with_variant(BadgeVariant::Error))
        }
    }

    /// Set the color variant
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the clamp ceiling
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Text shown in the badge, if any
    pub fn label(&self) -> Option<String> {
        if self.dot {
            return None;
        }
        self.count.map(|c| {
            if c > self.max {
                format!("{}+", self.max)
            } else {
                c.to_string()
            }
        })
    }

    /// Whether the badge renders at all
    pub fn visible(&self) -> bool {
        self.dot || self.count.is_some_and(|c| c > 0)
    }

    /// Get the computed styles for this badge based on theme
    pub fn computed_styles(&self, theme: &Theme) -> BadgeStyles {
        let (background, text_color) = match self.variant {
            BadgeVariant::Primary => (theme.colors.primary.clone(), theme.colors.on_primary.clone()),
            BadgeVariant::Accent => (theme.colors.accent.clone(), theme.colors.on_surface.clone()),
            BadgeVariant::Error => (theme.colors.error.clone(), theme.colors.on_error.clone()),
        };
        BadgeStyles { background, text_color, border_radius: radius::FULL }
    }
}

/// Computed badge styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeStyles {
    /// Fill color
    pub background: Color,
    /// Count color
    pub text_color: Color,
    /// Corner radius
    pub border_radius: f32,
}

// =============================================================================
// Button Component
// =============================================================================

/// Button display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonMode {
    /// Text-only button with no container
    Text,
    /// Outlined button with a border
    Outlined,
    /// Solid primary button
    #[default]
    Contained,
    /// Solid button with a drop shadow
    Elevated,
    /// Tinted container button
    ContainedTonal,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button label
    pub label: String,
    /// Display mode
    #[serde(default)]
    pub mode: ButtonMode,
    /// Icon name to display before the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button shows a spinner instead of its icon
    #[serde(default)]
    pub loading: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            mode: ButtonMode::default(),
            icon: None,
            disabled: false,
            loading: false,
            on_press: None,
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display mode
    pub fn with_mode(mut self, mode: ButtonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Whether presses are delivered
    pub fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let colors = &theme.colors;
        let (background, text_color, border_color, elevation) = match self.mode {
            ButtonMode::Text => {
                ("transparent".to_string(), colors.primary.clone(), None, 0.0)
            }
            ButtonMode::Outlined => (
                "transparent".to_string(),
                colors.primary.clone(),
                Some(colors.outline.clone()),
                0.0,
            ),
            ButtonMode::Contained => {
                (colors.primary.clone(), colors.on_primary.clone(), None, 0.0)
            }
            ButtonMode::Elevated => (colors.surface.clone(), colors.primary.clone(), None, 2.0),
            ButtonMode::ContainedTonal => {
                (colors.surface_variant.clone(), colors.on_surface.clone(), None, 0.0)
            }
        };

        ButtonStyles {
            background,
            text_color,
            border_color,
            elevation,
            height: sizing::button::MD_HEIGHT,
            padding_x: sizing::button::MD_PADDING_X,
            border_radius: radius::FULL,
            opacity: if self.disabled { 0.38 } else { 1.0 },
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Fill color
    pub background: Color,
    /// Label color
    pub text_color: Color,
    /// Border color when outlined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Drop shadow depth
    pub elevation: f32,
    /// Height in pixels
    pub height: f32,
    /// Horizontal padding in pixels
    pub padding_x: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Overall opacity
    pub opacity: f32,
}

// =============================================================================
// Card Component
// =============================================================================

/// Card display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMode {
    /// Shadowed card
    #[default]
    Elevated,
    /// Bordered card
    Outlined,
    /// Tinted card with no border or shadow
    Contained,
}

/// Card component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Title line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subtitle line under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display mode
    #[serde(default)]
    pub mode: CardMode,
    /// On press event handler; cards without one are static
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Card {
    /// Create an empty card
    pub fn new() -> Self {
        Self { title: None, subtitle: None, icon: None, mode: CardMode::default(), on_press: None }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the display mode
    pub fn with_mode(mut self, mode: CardMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Get the computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        let colors = &theme.colors;
        let (background, border_color, elevation) = match self.mode {
            CardMode::Elevated => (colors.surface.clone(), None, 1.0),
            CardMode::Outlined => (colors.surface.clone(), Some(colors.outline.clone()), 0.0),
            CardMode::Contained => (colors.surface_variant.clone(), None, 0.0),
        };
        CardStyles { background, border_color, elevation, border_radius: radius::LG }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Fill color
    pub background: Color,
    /// Border color when outlined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Drop shadow depth
    pub elevation: f32,
    /// Corner radius
    pub border_radius: f32,
}

// =============================================================================
// Chip Component
// =============================================================================

/// Chip component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chip {
    /// Chip label
    pub label: String,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the chip is selected
    #[serde(default)]
    pub selected: bool,
    /// Render with a border instead of a fill
    #[serde(default)]
    pub outlined: bool,
    /// Smaller height for dense rows
    #[serde(default)]
    pub compact: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Chip {
    /// Create a chip with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            selected: false,
            outlined: false,
            compact: false,
            on_press: None,
        }
    }

    /// Set the leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Render outlined
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    /// Render compact
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Get the computed styles for this chip based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ChipStyles {
        let colors = &theme.colors;
        let (background, text_color, border_color) = if self.selected {
            (colors.primary.clone(), colors.on_primary.clone(), None)
        } else if self.outlined {
            ("transparent".to_string(), colors.on_surface.clone(), Some(colors.outline.clone()))
        } else {
            (colors.surface_variant.clone(), colors.on_surface.clone(), None)
        };
        ChipStyles {
            background,
            text_color,
            border_color,
            height: if self.compact { 24.0 } else { 32.0 },
            border_radius: radius::SM,
        }
    }
}

/// Computed chip styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipStyles {
    /// Fill color
    pub background: Color,
    /// Label color
    pub text_color: Color,
    /// Border color when outlined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Height in pixels
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
}

// =============================================================================
// Input Component
// =============================================================================

/// Input content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Email address keyboard
    Email,
    /// Obscured password entry
    Password,
    /// Numeric keyboard
    Number,
    /// Phone keyboard
    Phone,
    /// Search field
    Search,
}

/// Input component properties and field state
///
/// Validation runs when focus leaves the field, not on every keystroke;
/// typing clears any previous error so the user is not corrected mid-word.
#[derive(Serialize, Deserialize)]
pub struct Input {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Floating label
    pub label: String,
    /// Current text
    #[serde(default)]
    pub value: String,
    /// Placeholder shown when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Content type
    #[serde(default)]
    pub input_type: InputType,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<String>,
    /// Trailing icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<String>,
    /// Helper text shown under the field when there is no error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Current validation error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Maximum length; enables the character counter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Whether the field accepts input
    #[serde(default)]
    pub disabled: bool,
    /// Validation rule applied on blur
    #[serde(skip)]
    pub validator: Option<Validator>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("input_type", &self.input_type)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Input {
    /// Create an input with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            value: String::new(),
            placeholder: None,
            input_type: InputType::default(),
            leading_icon: None,
            trailing_icon: None,
            helper_text: None,
            error: None,
            max_length: None,
            disabled: false,
            validator: None,
        }
    }

    /// Set the content type
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the leading icon
    pub fn with_leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    /// Set the trailing icon
    pub fn with_trailing_icon(mut self, icon: impl Into<String>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    /// Set the helper text
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Enable the character counter
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the validation rule applied on blur
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Accept a keystroke; clears any standing error
    pub fn handle_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    /// Focus left the field; run the validator
    pub fn handle_blur(&mut self) {
        if let Some(validator) = &self.validator {
            self.error = validator(&self.value);
        }
    }

    /// Whether the current value passes validation
    pub fn is_valid(&self) -> bool {
        match &self.validator {
            Some(validator) => validator(&self.value).is_none(),
            None => true,
        }
    }

    /// Counter text, e.g. "12/80", when a max length is set
    pub fn counter(&self) -> Option<String> {
        self.max_length.map(|max| format!("{}/{}", self.value.chars().count(), max))
    }

    /// Get the computed styles for this input based on theme
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        let colors = &theme.colors;
        InputStyles {
            background: colors.surface_variant.clone(),
            text_color: colors.on_surface.clone(),
            border_color: if self.error.is_some() {
                colors.error.clone()
            } else {
                colors.outline.clone()
            },
            helper_color: if self.error.is_some() {
                colors.error.clone()
            } else {
                colors.on_surface_variant.clone()
            },
            height: sizing::input::MD_HEIGHT,
            border_radius: radius::MD,
            opacity: if self.disabled { 0.38 } else { 1.0 },
        }
    }
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStyles {
    /// Fill color
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Border color; error red while invalid
    pub border_color: Color,
    /// Helper or error text color
    pub helper_color: Color,
    /// Height in pixels
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Overall opacity
    pub opacity: f32,
}

// =============================================================================
// List Component
// =============================================================================

/// One row in a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Row title
    pub title: String,
    /// Secondary line under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<String>,
    /// Trailing icon name, e.g. "chevron-right"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<String>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl ListItem {
    /// Create a row with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            leading_icon: None,
            trailing_icon: None,
            on_press: None,
        }
    }

    /// Set the secondary line
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the leading icon
    pub fn with_leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    /// Set the trailing icon
    pub fn with_trailing_icon(mut self, icon: impl Into<String>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    /// Section header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rows in the section
    pub items: Vec<ListItem>,
}

impl ListSection {
    /// Create a section with a header
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), items: Vec::new() }
    }

    /// Create a headerless section
    pub fn untitled() -> Self {
        Self { title: None, items: Vec::new() }
    }

    /// Append a row
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }
}

/// An expandable group of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accordion {
    /// Header row title
    pub title: String,
    /// Rows revealed when expanded
    pub items: Vec<ListItem>,
    /// Whether the group is expanded
    #[serde(default)]
    pub expanded: bool,
}

impl Accordion {
    /// Create a collapsed accordion
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), items: Vec::new(), expanded: false }
    }

    /// Append a row
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    /// Flip the expanded state
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Rows currently visible
    pub fn visible_items(&self) -> &[ListItem] {
        if self.expanded {
            &self.items
        } else {
            &[]
        }
    }
}

/// Non-content states a list can be in
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "message")]
pub enum ListState {
    /// Rows are available
    #[default]
    Ready,
    /// A fetch is in flight
    Loading,
    /// There is nothing to show
    Empty(String),
    /// The fetch failed
    Error(String),
}

/// List component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Sections in display order
    pub sections: Vec<ListSection>,
    /// Content state
    #[serde(default)]
    pub state: ListState,
}

impl List {
    /// Create an empty, ready list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    pub fn with_section(mut self, section: ListSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Set the content state
    pub fn with_state(mut self, state: ListState) -> Self {
        self.state = state;
        self
    }

    /// Total row count across sections
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether the list has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Modal Component
// =============================================================================

/// Modal component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modal {
    /// Title bar text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the modal is on screen
    #[serde(default)]
    pub visible: bool,
    /// Show a close button in the title bar
    #[serde(default = "default_true")]
    pub show_close_button: bool,
    /// Whether tapping the scrim dismisses the modal
    #[serde(default = "default_true")]
    pub dismissable: bool,
}

fn default_true() -> bool {
    true
}

impl Modal {
    /// Create a hidden modal
    pub fn new() -> Self {
        Self { title: None, visible: false, show_close_button: true, dismissable: true }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Disable scrim dismissal
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    /// Hide the close button
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Put the modal on screen
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Take the modal off screen
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// A scrim tap; only dismisses when allowed
    pub fn handle_scrim_press(&mut self) {
        if self.dismissable {
            self.visible = false;
        }
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}
