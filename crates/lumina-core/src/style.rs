//! The presentation hook: style variables published from the theme.
//!
//! The store pushes [`StyleVariables`] to a [`StylePublisher`] whenever the
//! theme changes. [`DocumentStyle`] is the publisher the server uses; pages
//! read its current value and emit it as a `:root` block plus a `dark` class.

use std::fmt::Write as _;

use tokio::sync::watch;

use crate::theme::ThemeSettings;

/// The variables presentation consumes, derived from the theme slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVariables {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font: String,
    pub dark: bool,
}

impl From<&ThemeSettings> for StyleVariables {
    fn from(theme: &ThemeSettings) -> Self {
        Self {
            primary_color: theme.primary_color.clone(),
            secondary_color: theme.secondary_color.clone(),
            accent_color: theme.accent_color.clone(),
            font: theme.font.clone(),
            dark: theme.is_dark(),
        }
    }
}

impl StyleVariables {
    /// Render as a CSS `:root` rule.
    ///
    /// Values are emitted as given. Characters that could close the rule or
    /// the surrounding `<style>` element are dropped.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root{");
        for (name, value) in [
            ("--color-primary", &self.primary_color),
            ("--color-secondary", &self.secondary_color),
            ("--color-accent", &self.accent_color),
        ] {
            let _ = write!(css, "{name}:{};", css_value(value));
        }
        let _ = write!(css, "--font-primary:'{}';", css_value(&self.font).replace('\'', ""));
        css.push('}');
        css
    }

    /// Class for the document root: `dark` or empty.
    pub fn root_class(&self) -> &'static str {
        if self.dark { "dark" } else { "" }
    }
}

fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '\n' | '\r'))
        .collect()
}

/// Receives style variables whenever the theme slice changes.
pub trait StylePublisher: Send + Sync + 'static {
    fn publish(&self, vars: &StyleVariables);
}

/// The global document style scope.
///
/// Holds the most recently published variables. Cloning shares the scope.
#[derive(Debug, Clone)]
pub struct DocumentStyle {
    current: std::sync::Arc<watch::Sender<StyleVariables>>,
}

impl DocumentStyle {
    /// Create a scope seeded with `initial`.
    #[must_use]
    pub fn new(initial: StyleVariables) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            current: std::sync::Arc::new(tx),
        }
    }

    /// The variables currently in effect.
    pub fn current(&self) -> StyleVariables {
        self.current.borrow().clone()
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::new(StyleVariables::from(&ThemeSettings::default()))
    }
}

impl StylePublisher for DocumentStyle {
    fn publish(&self, vars: &StyleVariables) {
        self.current.send_replace(vars.clone());
    }
}
