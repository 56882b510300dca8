//! HTML for the admin panel: the login card and the tabbed editors.
//!
//! Every editor is a plain form that posts to an `/admin/*` endpoint, which
//! dispatches one action and redirects back to the same tab.

use std::fmt::Write as _;

use lumina_core::AppState;
use lumina_core::icons::IconRegistry;
use lumina_core::style::StyleVariables;
use lumina_core::theme::ThemeSettings;

use super::layout::escape_html;

/// Admin panel tabs, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Theme,
    General,
    Home,
    Services,
    Team,
    Blog,
}

impl AdminTab {
    pub const ALL: [Self; 6] = [
        Self::Theme,
        Self::General,
        Self::Home,
        Self::Services,
        Self::Team,
        Self::Blog,
    ];

    /// Parse a `?tab=` value. Unknown or missing values select the theme tab.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| Some(tab.slug()) == raw)
            .unwrap_or_default()
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::General => "general",
            Self::Home => "home",
            Self::Services => "services",
            Self::Team => "team",
            Self::Blog => "blog",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme & Style",
            Self::General => "General Info",
            Self::Home => "Home Content",
            Self::Services => "Services",
            Self::Team => "Team",
            Self::Blog => "Blog",
        }
    }

    /// URL of the admin page showing this tab.
    pub fn url(self) -> String {
        format!("/admin?tab={}", self.slug())
    }
}

const FONT_OPTIONS: &[&str] = &["Inter", "Roboto", "Open Sans", "Playfair Display", "Montserrat"];

fn admin_head(title: &str, style: &StyleVariables) -> String {
    let mut html = String::with_capacity(8192);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en" class="{}"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{} | Admin</title>
<style>{}</style>
"#,
        style.root_class(),
        escape_html(title),
        style.to_css(),
    );
    html.push_str(ADMIN_CSS);
    html.push_str("</head>\n");
    html
}

/// The login card shown to signed-out visitors of `/admin`.
pub fn login_page(error: Option<&str>, style: &StyleVariables) -> String {
    let mut html = admin_head("Admin Access", style);
    html.push_str(r#"<body class="login"><div class="panel login-card"><h2>Admin Access</h2><p class="muted">Enter password to continue</p><form method="post" action="/admin/login" class="stack"><input type="password" name="password" placeholder="Password" autofocus/>"#);
    if let Some(error) = error {
        let _ = write!(html, r#"<p class="error">{}</p>"#, escape_html(error));
    }
    html.push_str(r#"<button class="btn btn-primary">Login</button></form><p><a href="/" class="muted">&larr; Back to site</a></p></div></body></html>"#);
    html
}

/// The signed-in admin panel with `tab` selected.
pub fn dashboard_page(
    tab: AdminTab,
    state: &AppState,
    icons: &IconRegistry,
    style: &StyleVariables,
) -> String {
    let mut html = admin_head(tab.label(), style);
    html.push_str(r#"<body><div class="admin"><aside class="sidebar"><h1>Admin Panel</h1><nav>"#);
    for item in AdminTab::ALL {
        let class = if item == tab { "tab active" } else { "tab" };
        let _ = write!(html, r#"<a href="{}" class="{class}">{}</a>"#, item.url(), item.label());
    }
    html.push_str(r#"</nav><form method="post" action="/admin/reset" onsubmit="return confirm('Restore default theme and content?')"><button class="tab">Reset to defaults</button></form><form method="post" action="/admin/logout"><button class="tab danger">Logout</button></form></aside><main class="main">"#);
    let _ = write!(
        html,
        r#"<header><h2>{}</h2><a href="/" target="_blank" class="btn btn-outline">View Site</a></header>"#,
        tab.label()
    );

    let editor = match tab {
        AdminTab::Theme => theme_editor(&state.theme),
        AdminTab::General => general_editor(state),
        AdminTab::Home => home_editor(state),
        AdminTab::Services => services_editor(state, icons),
        AdminTab::Team => team_editor(state),
        AdminTab::Blog => blog_editor(state),
    };
    html.push_str(&editor);
    html.push_str("</main></div></body></html>");
    html
}

// ── Form widgets ─────────────────────────────────────────────────────

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<input type="text" name="{name}" value="{}"/></label>"#,
        escape_html(value)
    )
}

fn text_area(label: &str, name: &str, value: &str, rows: u8) -> String {
    format!(
        r#"<label>{label}<textarea name="{name}" rows="{rows}">{}</textarea></label>"#,
        escape_html(value)
    )
}

fn color_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<input type="text" name="{name}" value="{}" class="color" style="border-left:2.5rem solid {}"/></label>"#,
        escape_html(value),
        escape_html(value),
    )
}

/// A select over `options` (value, label). A current value outside the
/// options is kept as an extra selected entry so saving does not drop it.
fn select(label: &str, name: &str, options: &[(&str, &str)], current: &str) -> String {
    let mut html = format!(r#"<label>{label}<select name="{name}">"#);
    let mut found = false;
    for (value, text) in options {
        let selected = if *value == current {
            found = true;
            " selected"
        } else {
            ""
        };
        let _ = write!(html, r#"<option value="{value}"{selected}>{text}</option>"#);
    }
    if !found {
        let current = escape_html(current);
        let _ = write!(html, r#"<option value="{current}" selected>{current}</option>"#);
    }
    html.push_str("</select></label>");
    html
}

fn editor_section(title: &str, body: &str) -> String {
    format!(r#"<section class="panel"><h3>{title}</h3>{body}</section>"#)
}

fn delete_button(action: &str) -> String {
    format!(r#"<form method="post" action="{action}" class="delete"><button class="btn-delete" title="Delete">&times;</button></form>"#)
}

fn add_button(action: &str, label: &str) -> String {
    format!(r#"<form method="post" action="{action}" class="toolbar"><button class="btn btn-primary">+ {label}</button></form>"#)
}

// ── Editors ──────────────────────────────────────────────────────────

fn theme_editor(theme: &ThemeSettings) -> String {
    let colors = format!(
        r#"<div class="row-3">{}{}{}</div>"#,
        color_input("Primary Color", "primary_color", &theme.primary_color),
        color_input("Secondary Color", "secondary_color", &theme.secondary_color),
        color_input("Accent Color", "accent_color", &theme.accent_color),
    );
    let fonts: Vec<(&str, &str)> = FONT_OPTIONS.iter().map(|f| (*f, *f)).collect();
    let appearance = format!(
        r#"<div class="row-2">{}{}{}{}{}<label class="check"><input type="checkbox" name="animations_enabled" value="on"{}/> Enable Animations</label></div>"#,
        select("Theme Mode", "mode", &[("light", "Light"), ("dark", "Dark")], theme.mode.as_str()),
        select(
            "Layout Width",
            "layout",
            &[("boxed", "Boxed"), ("wide", "Wide"), ("full", "Full Width")],
            theme.layout.as_str()
        ),
        select(
            "Button Style",
            "button_style",
            &[("rounded", "Rounded"), ("sharp", "Sharp"), ("pill", "Pill")],
            theme.button_style.as_str()
        ),
        select(
            "Cursor Style",
            "cursor",
            &[("default", "Default"), ("circle", "Circle"), ("dot", "Dot")],
            theme.cursor.as_str()
        ),
        select("Font Family", "font", &fonts, &theme.font),
        if theme.animations_enabled { " checked" } else { "" },
    );
    format!(
        r#"<form method="post" action="/admin/theme">{}{}<button class="btn btn-primary">Save Theme</button></form>"#,
        editor_section("Colors", &colors),
        editor_section("Appearance", &appearance),
    )
}

fn general_editor(state: &AppState) -> String {
    let company = &state.content.company;
    let info = format!(
        r#"<div class="row-2">{}{}{}</div>{}"#,
        text_input("Company Name", "name", &company.name),
        text_input("Logo Text", "logo_text", &company.logo_text),
        text_input("Tagline", "tagline", &company.tagline),
        text_area("Description", "description", &company.description, 4),
    );
    let contact = format!(
        r#"<div class="row-2">{}{}{}</div>"#,
        text_input("Address", "address", &company.address),
        text_input("Phone", "phone", &company.phone),
        text_input("Email", "email", &company.email),
    );
    let social = format!(
        r#"<div class="row-2">{}{}{}{}</div>"#,
        text_input("Facebook", "facebook", &company.facebook),
        text_input("Twitter", "twitter", &company.twitter),
        text_input("LinkedIn", "linkedin", &company.linkedin),
        text_input("Instagram", "instagram", &company.instagram),
    );
    format!(
        r#"<form method="post" action="/admin/company">{}{}{}<button class="btn btn-primary">Save</button></form>"#,
        editor_section("Company Information", &info),
        editor_section("Contact Details", &contact),
        editor_section("Social Links", &social),
    )
}

fn home_editor(state: &AppState) -> String {
    let home = &state.content.home;
    let about = &state.content.about;

    let hero = format!(
        "{}{}{}",
        text_input("Hero Title", "hero_title", &home.hero_title),
        text_area("Hero Subtitle", "hero_subtitle", &home.hero_subtitle, 3),
        text_input("Hero Image URL", "hero_image", &home.hero_image),
    );
    let mut stats = String::from(r#"<div class="row-2">"#);
    for (i, stat) in home.stats.iter().enumerate() {
        let _ = write!(
            stats,
            r#"<div class="sub">{}{}</div>"#,
            text_input(&format!("Stat {} Label", i + 1), &format!("stat_label_{i}"), &stat.label),
            text_input(&format!("Stat {} Value", i + 1), &format!("stat_value_{i}"), &stat.value),
        );
    }
    stats.push_str("</div>");

    let mut html = format!(
        r#"<form method="post" action="/admin/home">{}{}<button class="btn btn-primary">Save Home</button></form>"#,
        editor_section("Hero Section", &hero),
        editor_section("Statistics", &stats),
    );

    let about_fields = format!(
        "{}{}{}",
        text_area("Our Story", "story", &about.story, 4),
        text_area("Mission", "mission", &about.mission, 3),
        text_area("Values (one per line)", "values", &about.values.join("\n"), 4),
    );
    let _ = write!(
        html,
        r#"<form method="post" action="/admin/about">{}<button class="btn btn-primary">Save About</button></form>"#,
        editor_section("About Page", &about_fields),
    );

    let mut quotes = add_button("/admin/testimonials/add", "Add Testimonial");
    for (i, t) in state.content.testimonials.iter().enumerate() {
        let _ = write!(
            quotes,
            r#"<div class="sub entry">{}<form method="post" action="/admin/testimonials/{i}"><div class="row-2">{}{}</div>{}<label>Rating<input type="number" name="rating" min="1" max="5" value="{}"/></label><button class="btn btn-primary">Save</button></form></div>"#,
            delete_button(&format!("/admin/testimonials/{i}/delete")),
            text_input("Name", "name", &t.name),
            text_input("Company", "company", &t.company),
            text_area("Testimonial", "content", &t.content, 2),
            t.rating,
        );
    }
    html.push_str(&editor_section("Testimonials", &quotes));
    html
}

fn services_editor(state: &AppState, icons: &IconRegistry) -> String {
    let icon_choices: Vec<(&str, &str)> = icons.names().map(|name| (name, name)).collect();
    let mut html = add_button("/admin/services/add", "Add Service");
    for (i, service) in state.content.services.iter().enumerate() {
        let fields = format!(
            r#"<div class="row-2">{}{}</div>{}{}"#,
            text_input("Title", "title", &service.title),
            select("Icon", "icon", &icon_choices, &service.icon),
            text_area("Description", "description", &service.description, 2),
            text_input("Price", "price", service.price.as_deref().unwrap_or_default()),
        );
        let _ = write!(
            html,
            r#"<div class="panel entry">{}<form method="post" action="/admin/services/{i}">{fields}<button class="btn btn-primary">Save</button></form></div>"#,
            delete_button(&format!("/admin/services/{i}/delete")),
        );
    }
    html
}

fn team_editor(state: &AppState) -> String {
    let mut html = add_button("/admin/team/add", "Add Member");
    html.push_str(r#"<div class="row-2">"#);
    for (i, member) in state.content.team.iter().enumerate() {
        let fields = format!(
            "{}{}{}{}",
            text_input("Name", "name", &member.name),
            text_input("Role", "role", &member.role),
            text_area("Bio", "bio", &member.bio, 2),
            text_input("Image URL", "image", &member.image),
        );
        let _ = write!(
            html,
            r#"<div class="panel entry">{}<form method="post" action="/admin/team/{i}">{fields}<button class="btn btn-primary">Save</button></form></div>"#,
            delete_button(&format!("/admin/team/{i}/delete")),
        );
    }
    html.push_str("</div>");
    html
}

fn blog_editor(state: &AppState) -> String {
    let mut html = add_button("/admin/blog/add", "Add Post");
    for (i, post) in state.content.blog.iter().enumerate() {
        let fields = format!(
            r#"{}<div class="row-2">{}<label>Date<input type="date" name="date" value="{}"/></label></div>{}{}{}{}"#,
            text_input("Title", "title", &post.title),
            text_input("Category", "category", &post.category),
            escape_html(&post.date),
            text_area("Excerpt", "excerpt", &post.excerpt, 2),
            text_area("Content", "content", &post.content, 4),
            text_input("Author", "author", &post.author),
            text_input("Image URL", "image", &post.image),
        );
        let _ = write!(
            html,
            r#"<div class="panel entry">{}<form method="post" action="/admin/blog/{i}">{fields}<button class="btn btn-primary">Save</button></form></div>"#,
            delete_button(&format!("/admin/blog/{i}/delete")),
        );
    }
    html
}

const ADMIN_CSS: &str = r##"<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:var(--font-primary),-apple-system,sans-serif;background:#f1f5f9;color:#0f172a;line-height:1.5}
html.dark body{background:#020617;color:#f1f5f9}
a{color:inherit;text-decoration:none}
.muted{color:#64748b}
.error{color:#ef4444;font-size:14px}
.btn{display:inline-block;padding:10px 20px;border-radius:.375rem;font-weight:500;border:none;cursor:pointer;font:inherit}
.btn-primary{background:var(--color-primary);color:#fff}
.btn-outline{border:2px solid var(--color-primary);color:var(--color-primary);background:transparent}
.login{display:flex;align-items:center;justify-content:center;min-height:100vh}
.login-card{width:100%;max-width:420px;text-align:center}
.login-card h2{margin-bottom:4px}
.login-card form{margin:24px 0 16px}
.admin{display:flex;min-height:100vh}
.sidebar{width:256px;background:#fff;border-right:1px solid #e2e8f0;padding:24px 16px;display:flex;flex-direction:column;gap:8px}
html.dark .sidebar{background:#0f172a;border-color:#1e293b}
.sidebar h1{font-size:20px;color:var(--color-primary);margin-bottom:16px;padding:0 16px}
.sidebar nav{display:flex;flex-direction:column;gap:4px;flex-grow:1}
.tab{display:block;width:100%;text-align:left;padding:12px 16px;border-radius:8px;color:#475569;background:none;border:none;font:inherit;cursor:pointer}
.tab:hover{background:#f8fafc}
.tab.active{background:#eff6ff;color:#2563eb}
.tab.danger{color:#ef4444}
.main{flex-grow:1;padding:32px;max-width:1000px}
.main header{display:flex;justify-content:space-between;align-items:center;margin-bottom:32px}
.panel{background:#fff;padding:24px;border-radius:12px;box-shadow:0 1px 3px rgba(0,0,0,.06);margin-bottom:24px;position:relative}
html.dark .panel{background:#0f172a}
.panel h3{font-size:18px;margin-bottom:16px;padding-bottom:8px;border-bottom:1px solid #f1f5f9}
.sub{padding:16px;border:1px solid #e2e8f0;border-radius:8px;margin-bottom:12px;position:relative}
.row-2{display:grid;grid-template-columns:repeat(2,1fr);gap:16px}
.row-3{display:grid;grid-template-columns:repeat(3,1fr);gap:16px}
label{display:block;font-size:14px;font-weight:500;margin-bottom:16px}
label.check{display:flex;align-items:center;gap:8px;margin-top:24px}
input[type=text],input[type=password],input[type=number],input[type=date],textarea,select{display:block;width:100%;margin-top:4px;padding:8px 12px;border:1px solid #cbd5e1;border-radius:6px;font:inherit;background:#fff;color:inherit}
html.dark input,html.dark textarea,html.dark select{background:#1e293b;border-color:#334155}
.stack{display:flex;flex-direction:column;gap:12px}
.toolbar{display:flex;justify-content:flex-end;margin-bottom:24px}
.entry{padding-right:56px}
.delete{position:absolute;top:16px;right:16px}
.btn-delete{background:none;border:none;color:#ef4444;font-size:24px;cursor:pointer;line-height:1}
@media(max-width:768px){.admin{flex-direction:column}.sidebar{width:100%}.row-2,.row-3{grid-template-columns:1fr}}
</style>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::theme::ButtonStyle;

    #[test]
    fn tab_parsing_defaults_to_theme() {
        assert_eq!(AdminTab::parse(None), AdminTab::Theme);
        assert_eq!(AdminTab::parse(Some("blog")), AdminTab::Blog);
        assert_eq!(AdminTab::parse(Some("Blog")), AdminTab::Theme);
        assert_eq!(AdminTab::parse(Some("testimonials")), AdminTab::Theme);
    }

    #[test]
    fn login_page_shows_error() {
        let style = StyleVariables::from(&ThemeSettings::default());
        assert!(!login_page(None, &style).contains(r#"class="error""#));
        assert!(login_page(Some("Invalid password"), &style).contains("Invalid password"));
    }

    #[test]
    fn select_keeps_unknown_current_value() {
        let html = select("Button Style", "button_style", &[("rounded", "Rounded")], "blob");
        assert!(html.contains(r#"<option value="blob" selected>blob</option>"#));
        assert!(html.contains(r#"<option value="rounded">Rounded</option>"#));
    }

    #[test]
    fn service_icon_is_picked_from_the_registry() {
        let mut state = AppState::default();
        state.content.services[0].icon = "Rocket".to_owned();
        let html = services_editor(&state, &IconRegistry::default());
        assert!(html.contains(r#"<select name="icon">"#));
        assert!(html.contains(r#"<option value="HelpCircle">HelpCircle</option>"#));
        assert!(html.contains(r#"<option value="Rocket" selected>Rocket</option>"#));
        assert!(!html.contains(r#"name="icon" value="#));
    }

    #[test]
    fn theme_editor_reflects_current_values() {
        let mut theme = ThemeSettings::default();
        theme.button_style = ButtonStyle::Pill;
        theme.animations_enabled = false;
        let html = theme_editor(&theme);
        assert!(html.contains(r#"<option value="pill" selected>Pill</option>"#));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn each_tab_renders_its_editor() {
        let state = AppState::default();
        let style = StyleVariables::from(&state.theme);
        let cases = [
            (AdminTab::Theme, "/admin/theme"),
            (AdminTab::General, "/admin/company"),
            (AdminTab::Home, "/admin/testimonials/add"),
            (AdminTab::Services, "/admin/services/5/delete"),
            (AdminTab::Team, "/admin/team/add"),
            (AdminTab::Blog, "/admin/blog/0"),
        ];
        for (tab, action) in cases {
            let html = dashboard_page(tab, &state, &IconRegistry::default(), &style);
            assert!(html.contains(action), "{} editor lacks {action}", tab.slug());
            assert!(html.contains(&format!(r#"href="{}" class="tab active""#, tab.url())));
        }
    }
}
