//! Icon registry: icon names used in content mapped to inline SVG.
//!
//! Services store an icon *name*; pages resolve it here. Unknown names
//! render the `HelpCircle` fallback instead of failing.

use std::collections::BTreeMap;

/// Name of the icon rendered for unknown names.
pub const FALLBACK_ICON: &str = "HelpCircle";

const BUILTIN: &[(&str, &str)] = &[
    ("Search", r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#),
    (
        "Share2",
        r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><path d="m8.6 13.5 6.8 4"/><path d="m15.4 6.5-6.8 4"/>"#,
    ),
    (
        "FileText",
        r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/><path d="M16 13H8"/><path d="M16 17H8"/><path d="M10 9H8"/>"#,
    ),
    ("MousePointer", r#"<path d="m3 3 7.07 16.97 2.51-7.39 7.39-2.51z"/><path d="m13 13 6 6"/>"#),
    ("Mail", r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-10 5L2 7"/>"#),
    ("BarChart", r#"<path d="M12 20V10"/><path d="M18 20V4"/><path d="M6 20v-4"/>"#),
    (
        "Star",
        r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#,
    ),
    ("MapPin", r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#),
    (
        "Phone",
        r#"<path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z"/>"#,
    ),
    ("Clock", r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#),
    ("Check", r#"<path d="M20 6 9 17l-5-5"/>"#),
    ("Users", r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.9"/><path d="M16 3.1a4 4 0 0 1 0 7.8"/>"#),
    ("TrendingUp", r#"<path d="m22 7-8.5 8.5-5-5L2 17"/><path d="M16 7h6v6"/>"#),
    ("Globe", r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20z"/>"#),
    ("Lock", r#"<rect width="18" height="11" x="3" y="11" rx="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#),
    (
        "HelpCircle",
        r#"<circle cx="12" cy="12" r="10"/><path d="M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#,
    ),
];

/// Maps icon names to SVG bodies, with a defined fallback.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: BTreeMap<String, String>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self {
            icons: BUILTIN
                .iter()
                .map(|(name, body)| ((*name).to_owned(), (*body).to_owned()))
                .collect(),
        }
    }
}

impl IconRegistry {
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Registered names in sorted order. The services editor offers these
    /// as its icon choices.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// The inner SVG markup for `name`, or the fallback's.
    pub fn body(&self, name: &str) -> &str {
        self.icons
            .get(name)
            .or_else(|| self.icons.get(FALLBACK_ICON))
            .map_or("", String::as_str)
    }

    /// A complete `<svg>` element for `name` at the given pixel size.
    pub fn render(&self, name: &str, size: u32) -> String {
        format!(
            r#"<svg class="icon" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
            self.body(name)
        )
    }
}
