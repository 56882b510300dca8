//! Public site pages: `/`, `/about`, `/services`, `/blog`, `/contact`.
//!
//! Each handler takes one store snapshot and the current style variables,
//! renders the page body, and wraps it in the shared shell.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;

use lumina_core::AppState;
use lumina_core::icons::IconRegistry;

use super::layout::{SECTION_END, escape_html, page_banner, section_start, site_shell};
use crate::state::ServerState;

/// Number of services previewed on the home page.
const HOME_SERVICE_PREVIEW: usize = 6;

/// Build the public pages router.
pub fn router() -> Router<Arc<ServerState>> {
    Router::new()
        .route("/", get(home_page))
        .route("/about", get(about_page))
        .route("/services", get(services_page))
        .route("/blog", get(blog_page))
        .route("/contact", get(contact_page))
}

async fn home_page(State(state): State<Arc<ServerState>>) -> Html<String> {
    let snapshot = state.store.snapshot();
    let body = render_home(&snapshot, &state.icons);
    Html(site_shell("Home", "/", &snapshot, &state.style.current(), &body))
}

async fn about_page(State(state): State<Arc<ServerState>>) -> Html<String> {
    let snapshot = state.store.snapshot();
    let body = render_about(&snapshot, &state.icons);
    Html(site_shell("About", "/about", &snapshot, &state.style.current(), &body))
}

async fn services_page(State(state): State<Arc<ServerState>>) -> Html<String> {
    let snapshot = state.store.snapshot();
    let body = render_services(&snapshot, &state.icons);
    Html(site_shell("Services", "/services", &snapshot, &state.style.current(), &body))
}

#[derive(Debug, Default, Deserialize)]
struct BlogQuery {
    #[serde(default)]
    q: String,
}

async fn blog_page(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<BlogQuery>,
) -> Html<String> {
    let snapshot = state.store.snapshot();
    let body = render_blog(&snapshot, &query.q);
    Html(site_shell("Blog", "/blog", &snapshot, &state.style.current(), &body))
}

async fn contact_page(State(state): State<Arc<ServerState>>) -> Html<String> {
    let snapshot = state.store.snapshot();
    let body = render_contact(&snapshot, &state.icons);
    Html(site_shell("Contact", "/contact", &snapshot, &state.style.current(), &body))
}

// ── Home ─────────────────────────────────────────────────────────────

/// Render the home page body.
pub fn render_home(state: &AppState, icons: &IconRegistry) -> String {
    let home = &state.content.home;
    let animated = state.theme.animations_enabled;
    let mut html = String::with_capacity(8192);

    let _ = write!(
        html,
        r#"<div class="hero"><div class="container hero-inner"><div><h1 class="{fade}">{title}</h1><p class="muted">{subtitle}</p><div class="actions"><a href="/contact" class="btn btn-primary">Get Started</a><a href="/services" class="btn btn-outline">Learn More</a></div></div><div class="{float}"><img src="{image}" alt="Digital Marketing"/></div></div></div>"#,
        fade = if animated { "fade-in" } else { "" },
        float = if animated { "animate-float" } else { "" },
        title = escape_html(&home.hero_title),
        subtitle = escape_html(&home.hero_subtitle),
        image = escape_html(&home.hero_image),
    );

    html.push_str(r#"<div class="stats"><div class="container grid grid-4 center">"#);
    for stat in &home.stats {
        let _ = write!(
            html,
            r#"<div><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
            escape_html(&stat.value),
            escape_html(&stat.label),
        );
    }
    html.push_str("</div></div>");

    html.push_str(&section_start(""));
    html.push_str(r#"<div class="center"><h2>Our Services</h2><p class="muted">Comprehensive solutions for your business growth.</p></div><div class="grid grid-3">"#);
    for service in state.content.services.iter().take(HOME_SERVICE_PREVIEW) {
        let _ = write!(
            html,
            r#"<div class="card"><div class="icon-box">{icon}</div><h3>{title}</h3><p class="muted">{description}</p><a href="/services" class="nav-link active">Learn more &rarr;</a></div>"#,
            icon = icons.render(&service.icon, 24),
            title = escape_html(&service.title),
            description = escape_html(&service.description),
        );
    }
    html.push_str("</div>");
    html.push_str(SECTION_END);

    html.push_str(&section_start("gray"));
    html.push_str(r#"<div class="center"><h2>Client Success Stories</h2></div><div class="grid grid-3">"#);
    for testimonial in &state.content.testimonials {
        let _ = write!(
            html,
            r#"<div class="card">{stars}<p class="quote">&quot;{content}&quot;</p><div><strong>{name}</strong></div><div class="muted">{company}</div></div>"#,
            stars = star_row(testimonial.rating),
            content = escape_html(&testimonial.content),
            name = escape_html(&testimonial.name),
            company = escape_html(&testimonial.company),
        );
    }
    html.push_str("</div>");
    html.push_str(SECTION_END);

    html.push_str(&section_start("center"));
    html.push_str(r#"<div class="cta"><h2>Ready to Grow Your Business?</h2><p>Join hundreds of successful companies who have transformed their digital presence with us.</p><br/><a href="/contact" class="btn btn-light">Start Your Project</a></div>"#);
    html.push_str(SECTION_END);
    html
}

/// Five stars, the first `rating` of them lit.
fn star_row(rating: u8) -> String {
    let mut row = String::from(r#"<div class="stars">"#);
    for i in 0..5u8 {
        row.push_str(if i < rating { "&#9733;" } else { r#"<span class="off">&#9733;</span>"# });
    }
    row.push_str("</div>");
    row
}

// ── About ────────────────────────────────────────────────────────────

/// Render the about page body.
pub fn render_about(state: &AppState, icons: &IconRegistry) -> String {
    let about = &state.content.about;
    let mut html = page_banner("About Us", "Illuminating brands since 2020.");

    html.push_str(&section_start(""));
    let _ = write!(
        html,
        r#"<div class="grid grid-2"><div><h2>Our Story</h2><p>{}</p><br/><h3>Mission</h3><p class="muted">{}</p><ul class="values">"#,
        escape_html(&about.story),
        escape_html(&about.mission),
    );
    for value in &about.values {
        let _ = write!(
            html,
            r#"<li><span class="check">{}</span>{}</li>"#,
            icons.render("Check", 14),
            escape_html(value)
        );
    }
    html.push_str(r#"</ul></div><div class="grid grid-2"><img src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&amp;fit=crop&amp;q=80&amp;w=800" alt="Office"/><img src="https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&amp;fit=crop&amp;q=80&amp;w=800" alt="Meeting"/></div></div>"#);
    html.push_str(SECTION_END);

    html.push_str(&section_start("gray"));
    html.push_str(r#"<h2 class="center">Meet The Team</h2><div class="grid grid-4">"#);
    for member in &state.content.team {
        let _ = write!(
            html,
            r#"<div class="card member center"><img src="{image}" alt="{name}"/><h3>{name}</h3><div class="role">{role}</div><p class="muted">{bio}</p></div>"#,
            image = escape_html(&member.image),
            name = escape_html(&member.name),
            role = escape_html(&member.role),
            bio = escape_html(&member.bio),
        );
    }
    html.push_str("</div>");
    html.push_str(SECTION_END);
    html
}

// ── Services ─────────────────────────────────────────────────────────

const PRICING_TIERS: [&str; 3] = ["Basic", "Professional", "Enterprise"];

/// Render the services page body.
pub fn render_services(state: &AppState, icons: &IconRegistry) -> String {
    let mut html = page_banner("Our Services", "Strategic solutions designed for ROI.");

    html.push_str(&section_start(""));
    for (index, service) in state.content.services.iter().enumerate() {
        let reverse = if index % 2 == 1 { " reverse" } else { "" };
        let _ = write!(
            html,
            r#"<div class="service-row{reverse}"><div><div class="icon-box">{icon}</div><h2>{title}</h2><p class="muted">{description}</p>"#,
            icon = icons.render(&service.icon, 32),
            title = escape_html(&service.title),
            description = escape_html(&service.description),
        );
        if let Some(price) = &service.price {
            let _ = write!(
                html,
                r#"<p><span class="price">{}</span> <span class="muted">/ starting price</span></p>"#,
                escape_html(price)
            );
        }
        let _ = write!(
            html,
            r#"<ul class="values"><li><span class="check">{check}</span>Dedicated Support</li><li><span class="check">{check}</span>Monthly Reports</li></ul></div><div class="service-art">{art}</div></div>"#,
            check = icons.render("Check", 16),
            art = icons.render(&service.icon, 120),
        );
    }
    html.push_str(SECTION_END);

    html.push_str(&section_start("gray"));
    html.push_str(r#"<h2 class="center">Pricing Plans</h2><div class="grid grid-3">"#);
    for (i, tier) in PRICING_TIERS.iter().enumerate() {
        let popular = i == 1;
        let _ = write!(
            html,
            r#"<div class="card tier{}"><h3>{tier}</h3><h2>${}<span class="muted">/mo</span></h2><ul class="stack">"#,
            if popular { " popular" } else { "" },
            i * 1000 + 999,
        );
        for n in 1..=5 {
            let dim = if n > 3 + i { r#" class="dim""# } else { "" };
            let _ = write!(
                html,
                r#"<li{dim}><span class="check">{}</span>Feature Number {n}</li>"#,
                icons.render("Check", 16)
            );
        }
        let _ = write!(
            html,
            r#"</ul><br/><a href="/contact" class="btn {}">Choose {tier}</a></div>"#,
            if popular { "btn-primary" } else { "btn-outline" },
        );
    }
    html.push_str("</div>");
    html.push_str(SECTION_END);
    html
}

// ── Blog ─────────────────────────────────────────────────────────────

/// Render the blog page body, listing posts that match `term`.
pub fn render_blog(state: &AppState, term: &str) -> String {
    let mut html = page_banner("Latest Insights", "Trends, tips, and strategies for the digital age.");

    html.push_str(&section_start(""));
    let _ = write!(
        html,
        r#"<form class="search" method="get" action="/blog"><input type="text" name="q" placeholder="Search articles..." value="{}"/></form><div class="grid grid-3">"#,
        escape_html(term)
    );
    let posts = state.content.search_blog(term);
    for post in &posts {
        let _ = write!(
            html,
            r#"<article class="post"><img src="{image}" alt="{title}"/><div class="meta"><span class="category">{category}</span><span>{date}</span></div><h3>{title}</h3><p class="muted">{excerpt}</p><div>By {author}</div></article>"#,
            image = escape_html(&post.image),
            title = escape_html(&post.title),
            category = escape_html(&post.category),
            date = escape_html(&post.date),
            excerpt = escape_html(&post.excerpt),
            author = escape_html(&post.author),
        );
    }
    html.push_str("</div>");
    if posts.is_empty() {
        html.push_str(r#"<p class="center muted">No articles match your search.</p>"#);
    }
    html.push_str(SECTION_END);
    html
}

// ── Contact ──────────────────────────────────────────────────────────

/// Render the contact page body. The form has no submission target.
pub fn render_contact(state: &AppState, icons: &IconRegistry) -> String {
    let company = &state.content.company;
    let mut html = page_banner("Get In Touch", "We'd love to hear about your project.");

    html.push_str(&section_start(""));
    html.push_str(r#"<div class="grid grid-2"><div><h2>Send us a message</h2><form class="stack" onsubmit="return false"><input type="text" placeholder="John Doe" aria-label="Name"/><input type="email" placeholder="john@example.com" aria-label="Email"/><select aria-label="Service Interest"><option>SEO</option><option>Social Media</option><option>Content Strategy</option></select><textarea rows="4" placeholder="Tell us about your project..." aria-label="Message"></textarea><button class="btn btn-primary">Send Message</button></form></div><div><h2>Contact Information</h2><br/>"#);
    for (icon, heading, detail) in [
        ("MapPin", "Our Office", company.address.as_str()),
        ("Phone", "Phone", company.phone.as_str()),
        ("Mail", "Email", company.email.as_str()),
        ("Clock", "Business Hours", "Mon - Fri: 9:00 AM - 6:00 PM"),
    ] {
        let _ = write!(
            html,
            r#"<div class="contact-item"><div class="icon-box">{}</div><div><h3>{heading}</h3><p class="muted">{}</p></div></div>"#,
            icons.render(icon, 24),
            escape_html(detail),
        );
    }
    html.push_str(r#"<div class="card center"><h3>Need immediate assistance?</h3><p class="muted">Start a live chat with our support team.</p><br/><button class="btn btn-outline">Start Live Chat</button></div></div></div>"#);
    html.push_str(SECTION_END);
    html
}
