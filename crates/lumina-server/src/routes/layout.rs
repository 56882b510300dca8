//! Shared page shell for the public site.
//!
//! Every public page goes through [`site_shell`]: head with the published
//! style variables, navigation, the page body, and the footer. Theme choices
//! that only affect presentation (layout width, button and card radius,
//! cursor) are resolved here, so unknown stored values render as defaults.

use std::fmt::Write as _;

use lumina_core::AppState;
use lumina_core::style::StyleVariables;

/// Public navigation entries: path and label.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/services", "Services"),
    ("/about", "About"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page-specific rules derived from the theme's closed choices.
pub fn theme_rules(state: &AppState) -> String {
    let theme = &state.theme;
    format!(
        ".container{{max-width:{}}}.btn{{border-radius:{}}}.card{{border-radius:{}}}",
        theme.layout.max_width(),
        theme.button_style.button_radius(),
        theme.button_style.card_radius(),
    )
}

/// Full HTML document for a public page.
///
/// `active` is the nav path to highlight; `content` is trusted markup.
pub fn site_shell(
    title: &str,
    active: &str,
    state: &AppState,
    style: &StyleVariables,
    content: &str,
) -> String {
    let company = &state.content.company;
    let mut html = String::with_capacity(16384 + content.len());

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en" class="{root}"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{title} | {name}</title>
<style>{vars}</style>
"#,
        root = style.root_class(),
        title = escape_html(title),
        name = escape_html(&company.name),
        vars = style.to_css(),
    );
    html.push_str(SITE_CSS);
    let _ = writeln!(html, "<style>{}</style>\n</head>", theme_rules(state));

    let cursor = state.theme.cursor.body_class();
    let _ = writeln!(html, "<body class=\"{cursor}\">");

    // ── Navigation ───────────────────────────────────────────────────
    html.push_str(r#"<nav class="nav"><div class="container nav-inner">"#);
    let _ = write!(
        html,
        r#"<a href="/" class="nav-logo">{}</a><div class="nav-links">"#,
        escape_html(&company.logo_text)
    );
    for (path, label) in NAV_LINKS {
        let class = if *path == active { "nav-link active" } else { "nav-link" };
        let _ = write!(html, r#"<a href="{path}" class="{class}">{label}</a>"#);
    }
    let (admin_label, admin_href) = if state.is_authenticated {
        ("Dashboard", "/admin")
    } else {
        ("Admin", "/admin/login")
    };
    let _ = write!(
        html,
        r#"<a href="{admin_href}" class="btn btn-primary btn-sm">{admin_label}</a></div></div></nav>"#
    );

    html.push_str("\n<main>\n");
    html.push_str(content);
    html.push_str("\n</main>\n");

    // ── Footer ───────────────────────────────────────────────────────
    html.push_str(r#"<footer class="footer"><div class="container footer-grid"><div>"#);
    let _ = write!(
        html,
        r#"<span class="footer-logo">{}</span><p class="muted">{}</p><div class="social">"#,
        escape_html(&company.logo_text),
        escape_html(&company.description),
    );
    for (label, href) in [
        ("Facebook", &company.facebook),
        ("Twitter", &company.twitter),
        ("LinkedIn", &company.linkedin),
        ("Instagram", &company.instagram),
    ] {
        let _ = write!(html, r#"<a href="{}">{label}</a>"#, escape_html(href));
    }
    html.push_str(
        r#"</div></div><div><h3>Quick Links</h3><ul><li><a href="/about">About Us</a></li><li><a href="/services">Services</a></li><li><a href="/blog">Blog</a></li><li><a href="/contact">Contact</a></li></ul></div>"#,
    );
    let _ = write!(
        html,
        r#"<div><h3>Contact Info</h3><ul class="muted"><li>{}</li><li>{}</li><li>{}</li></ul></div>"#,
        escape_html(&company.address),
        escape_html(&company.phone),
        escape_html(&company.email),
    );
    html.push_str(
        r#"<div><h3>Newsletter</h3><p class="muted">Subscribe to our newsletter for the latest updates.</p><form class="stack" onsubmit="return false"><input type="email" placeholder="Enter your email"/><button class="btn btn-primary">Subscribe</button></form></div></div>"#,
    );
    let _ = write!(
        html,
        r#"<div class="container footer-bottom">&copy; {}. All rights reserved.</div></footer>"#,
        escape_html(&company.name),
    );
    html.push_str("\n</body></html>\n");
    html
}

/// Opening markup for a page section; pair with [`SECTION_END`].
pub fn section_start(class: &str) -> String {
    format!(r#"<section class="section {class}"><div class="container">"#)
}

pub const SECTION_END: &str = "</div></section>";

/// A colored page banner with heading and lead text.
pub fn page_banner(heading: &str, lead: &str) -> String {
    format!(
        r#"<div class="banner"><h1>{}</h1><p>{}</p></div>"#,
        escape_html(heading),
        escape_html(lead)
    )
}

/// Static stylesheet for public pages. Colors come from the `:root`
/// variables published by the store.
const SITE_CSS: &str = r##"<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:var(--font-primary),-apple-system,sans-serif;background:#fff;color:#0f172a;line-height:1.6}
html.dark body{background:#0f172a;color:#f1f5f9}
a{color:inherit;text-decoration:none}
img{max-width:100%;display:block}
.container{margin:0 auto;padding:0 24px}
.muted{color:#64748b}
html.dark .muted{color:#94a3b8}
.nav{position:sticky;top:0;z-index:50;background:rgba(255,255,255,.9);backdrop-filter:blur(8px);border-bottom:1px solid #e2e8f0}
html.dark .nav{background:rgba(15,23,42,.9);border-color:#1e293b}
.nav-inner{display:flex;align-items:center;justify-content:space-between;height:64px}
.nav-logo{font-size:24px;font-weight:700;color:var(--color-primary)}
.nav-links{display:flex;align-items:center;gap:28px}
.nav-link{font-size:14px;font-weight:500;color:#475569}
html.dark .nav-link{color:#cbd5e1}
.nav-link.active,.nav-link:hover{color:var(--color-primary)}
.btn{display:inline-block;padding:12px 24px;font-weight:500;border:none;cursor:pointer;font-family:inherit;font-size:15px;transition:opacity .2s}
.btn:hover{opacity:.9}
.btn-sm{padding:8px 16px;font-size:14px}
.btn-primary{background:var(--color-primary);color:#fff}
.btn-secondary{background:var(--color-secondary);color:#fff}
.btn-outline{background:transparent;border:2px solid var(--color-primary);color:var(--color-primary)}
.btn-light{background:#fff;color:#000}
.section{padding:80px 0}
.section.gray{background:#f8fafc}
html.dark .section.gray{background:#020617}
.section h2{font-size:30px;font-weight:700;margin-bottom:16px}
.center{text-align:center}
.grid{display:grid;gap:32px}
.grid-2{grid-template-columns:repeat(2,1fr)}
.grid-3{grid-template-columns:repeat(3,1fr)}
.grid-4{grid-template-columns:repeat(4,1fr)}
.card{background:#fff;box-shadow:0 10px 25px rgba(15,23,42,.08);padding:24px;transition:transform .2s}
.card:hover{transform:translateY(-4px)}
html.dark .card{background:#1e293b}
.icon-box{width:48px;height:48px;border-radius:8px;display:flex;align-items:center;justify-content:center;margin-bottom:24px;color:#fff;background:var(--color-primary)}
.hero{position:relative;overflow:hidden;background:#f8fafc;padding:64px 0 128px}
html.dark .hero{background:#0f172a}
.hero-inner{display:flex;align-items:center;gap:48px}
.hero-inner>div{flex:1}
.hero h1{font-size:56px;font-weight:800;line-height:1.1;margin-bottom:24px}
.hero p{font-size:20px;margin-bottom:32px}
.hero img{border-radius:16px;box-shadow:0 25px 50px rgba(0,0,0,.25);height:400px;width:100%;object-fit:cover}
.actions{display:flex;gap:16px;flex-wrap:wrap}
.stats{background:var(--color-secondary);color:#fff;padding:48px 0}
.stat-value{font-size:36px;font-weight:700}
.stat-label{text-transform:uppercase;font-size:13px;letter-spacing:.08em;opacity:.8}
.stars{color:#facc15;letter-spacing:2px;margin-bottom:16px}
.stars .off{color:#d1d5db}
.quote{font-style:italic;margin-bottom:24px}
.cta{max-width:900px;margin:0 auto;background:#0f172a;color:#fff;border-radius:24px;padding:48px;text-align:center}
.banner{background:var(--color-secondary);color:#fff;padding:96px 24px;text-align:center}
.banner h1{font-size:36px;font-weight:700;margin-bottom:16px}
.banner p{opacity:.8;max-width:640px;margin:0 auto}
.values{display:grid;grid-template-columns:repeat(2,1fr);gap:16px;margin-top:16px;list-style:none}
.check{color:#16a34a;margin-right:8px}
.member img{height:256px;width:100%;object-fit:cover}
.member .role{color:var(--color-primary);font-weight:500;font-size:14px}
.service-row{display:flex;gap:32px;align-items:center;margin-bottom:48px}
.service-row.reverse{flex-direction:row-reverse}
.service-row>div{flex:1}
.service-art{background:#f1f5f9;border-radius:24px;min-height:300px;display:flex;align-items:center;justify-content:center;opacity:.6}
html.dark .service-art{background:#1e293b}
.price{font-size:24px;font-weight:700;color:var(--color-secondary)}
.tier.popular{border:2px solid var(--color-primary);transform:scale(1.05)}
.tier .dim{opacity:.5}
.search{display:flex;justify-content:center;margin-bottom:48px}
.search input{width:100%;max-width:448px;padding:12px 24px;border-radius:9999px;border:1px solid #cbd5e1;font:inherit}
.post img{height:256px;width:100%;object-fit:cover;border-radius:12px;margin-bottom:16px}
.post .meta{font-size:14px;color:#64748b;margin-bottom:8px}
.post .category{color:var(--color-primary);font-weight:600;margin-right:16px}
.stack{display:flex;flex-direction:column;gap:12px}
.stack input,.stack select,.stack textarea{padding:12px 16px;border-radius:8px;border:1px solid #cbd5e1;background:transparent;font:inherit;color:inherit}
.contact-item{display:flex;gap:16px;margin-bottom:32px}
.contact-item .icon-box{margin-bottom:0;background:#dbeafe;color:#2563eb}
.footer{background:#f8fafc;border-top:1px solid #e2e8f0;padding:64px 0 32px}
html.dark .footer{background:#020617;border-color:#1e293b}
.footer-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:32px;margin-bottom:48px}
.footer h3{font-size:18px;margin-bottom:16px}
.footer ul{list-style:none;display:flex;flex-direction:column;gap:12px}
.footer-logo{font-size:24px;font-weight:700;color:var(--color-primary);display:block;margin-bottom:16px}
.social{display:flex;gap:16px;margin-top:24px;font-size:14px;color:#94a3b8}
.footer-bottom{border-top:1px solid #e2e8f0;padding-top:32px;font-size:14px;color:#64748b}
.fade-in{animation:fade-in .8s ease-out both}
.animate-float{animation:float 6s ease-in-out infinite}
@keyframes fade-in{from{opacity:0;transform:translateY(16px)}to{opacity:1;transform:none}}
@keyframes float{0%,100%{transform:translateY(0)}50%{transform:translateY(-12px)}}
body.cursor-circle{cursor:url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='24' height='24'%3E%3Ccircle cx='12' cy='12' r='10' fill='none' stroke='black' stroke-width='2'/%3E%3C/svg%3E") 12 12,auto}
body.cursor-dot{cursor:url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='12' height='12'%3E%3Ccircle cx='6' cy='6' r='5' fill='black'/%3E%3C/svg%3E") 6 6,auto}
@media(max-width:768px){.grid-2,.grid-3,.grid-4,.footer-grid{grid-template-columns:1fr}.hero-inner,.service-row,.service-row.reverse{flex-direction:column}.hero h1{font-size:36px}.nav-link{display:none}}
</style>
"##;
