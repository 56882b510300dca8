//! Theme settings: colors, font, and the closed-choice appearance options.
//!
//! Choice fields (`mode`, `layout`, `cursor`, `buttonStyle`) are enums that
//! also carry an `Other` variant. A value written by an editor that is not in
//! the known set is stored verbatim and survives a save/load cycle; rendering
//! goes through `resolved()`, which maps it to the default case.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! theme_choice {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the known set, kept as written.
            Other(String),
        }

        impl $name {
            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Whether this is one of the known values.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// The value rendering should use; unknown values map to the default.
            #[must_use]
            pub fn resolved(&self) -> Self {
                match self {
                    Self::Other(_) => Self::$default,
                    known => known.clone(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

theme_choice! {
    /// Light or dark color scheme.
    ThemeMode {
        Light => "light",
        Dark => "dark",
    }
    default = Light
}

theme_choice! {
    /// Width of the page container.
    LayoutWidth {
        Boxed => "boxed",
        Wide => "wide",
        Full => "full",
    }
    default = Wide
}

theme_choice! {
    /// Pointer style on public pages.
    CursorStyle {
        Default => "default",
        Circle => "circle",
        Dot => "dot",
    }
    default = Default
}

theme_choice! {
    /// Corner shape of buttons and cards.
    ButtonStyle {
        Rounded => "rounded",
        Sharp => "sharp",
        Pill => "pill",
    }
    default = Rounded
}

impl LayoutWidth {
    /// Maximum container width as a CSS length.
    pub fn max_width(&self) -> &'static str {
        match self.resolved() {
            Self::Boxed => "64rem",
            Self::Full => "100%",
            _ => "80rem",
        }
    }
}

impl CursorStyle {
    /// Body class applied for this cursor, empty for the default cursor.
    pub fn body_class(&self) -> &'static str {
        match self.resolved() {
            Self::Circle => "cursor-circle",
            Self::Dot => "cursor-dot",
            _ => "",
        }
    }
}

impl ButtonStyle {
    /// Border radius for buttons.
    pub fn button_radius(&self) -> &'static str {
        match self.resolved() {
            Self::Pill => "9999px",
            Self::Sharp => "0px",
            _ => "0.375rem",
        }
    }

    /// Border radius for cards. Only `sharp` squares them off.
    pub fn card_radius(&self) -> &'static str {
        match self.resolved() {
            Self::Sharp => "0",
            _ => "0.75rem",
        }
    }
}

/// The theme slice of the site state.
///
/// Missing fields deserialize to their defaults, so a theme saved by an older
/// build still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font: String,
    pub layout: LayoutWidth,
    pub cursor: CursorStyle,
    pub button_style: ButtonStyle,
    pub animations_enabled: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        crate::defaults::default_theme()
    }
}

impl ThemeSettings {
    /// Whether the dark-mode flag should be set.
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

/// A partial theme: only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations_enabled: Option<bool>,
}

impl ThemePatch {
    /// Shallow-merge this patch over `theme`, returning the merged theme.
    #[must_use]
    pub fn apply_to(&self, theme: &ThemeSettings) -> ThemeSettings {
        let mut merged = theme.clone();
        if let Some(mode) = &self.mode {
            merged.mode = mode.clone();
        }
        if let Some(color) = &self.primary_color {
            merged.primary_color.clone_from(color);
        }
        if let Some(color) = &self.secondary_color {
            merged.secondary_color.clone_from(color);
        }
        if let Some(color) = &self.accent_color {
            merged.accent_color.clone_from(color);
        }
        if let Some(font) = &self.font {
            merged.font.clone_from(font);
        }
        if let Some(layout) = &self.layout {
            merged.layout = layout.clone();
        }
        if let Some(cursor) = &self.cursor {
            merged.cursor = cursor.clone();
        }
        if let Some(style) = &self.button_style {
            merged.button_style = style.clone();
        }
        if let Some(enabled) = self.animations_enabled {
            merged.animations_enabled = enabled;
        }
        merged
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
