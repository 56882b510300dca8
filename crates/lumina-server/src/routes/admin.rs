//! Admin panel routes: `/admin` and its form endpoints.
//!
//! `/admin` shows the login card or the tabbed editors depending on the
//! store's signed-in flag. Form posts under `/admin/*` (other than login and
//! logout) sit behind [`require_admin_form`], build one action through the
//! editor helpers from the state current under the store's lock, apply it,
//! and redirect back to the editor's tab.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::middleware as axum_mw;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use lumina_core::Action;
use lumina_core::content::{
    AboutContent, BlogPost, CompanyInfo, HomeContent, Service, TeamMember, Testimonial,
};
use lumina_core::editor::{self, CollectionEntry};
use lumina_core::theme::{ThemePatch, ThemeSettings};

use super::admin_views::{AdminTab, dashboard_page, login_page};
use crate::middleware::require_admin_form;
use crate::state::ServerState;

/// Build the admin router.
pub fn router(state: Arc<ServerState>) -> Router<Arc<ServerState>> {
    let editors = Router::new()
        .route("/admin/reset", post(reset))
        .route("/admin/theme", post(save_theme))
        .route("/admin/company", post(save_company))
        .route("/admin/home", post(save_home))
        .route("/admin/about", post(save_about))
        .merge(collection_routes::<Service>())
        .merge(collection_routes::<TeamMember>())
        .merge(collection_routes::<BlogPost>())
        .merge(collection_routes::<Testimonial>())
        .route_layer(axum_mw::from_fn_with_state(state, require_admin_form));

    Router::new()
        .route("/admin", get(admin_page))
        .route("/admin/login", get(login_redirect).post(login))
        .route("/admin/logout", post(logout))
        .merge(editors)
}

// ── Panel and session ────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct AdminQuery {
    tab: Option<String>,
    error: Option<String>,
}

async fn admin_page(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<AdminQuery>,
) -> Html<String> {
    let snapshot = state.store.snapshot();
    let style = state.style.current();
    if snapshot.is_authenticated {
        let tab = AdminTab::parse(query.tab.as_deref());
        Html(dashboard_page(tab, &snapshot, &state.icons, &style))
    } else {
        Html(login_page(query.error.as_deref(), &style))
    }
}

async fn login_redirect() -> Redirect {
    Redirect::to("/admin")
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    password: String,
}

async fn login(State(state): State<Arc<ServerState>>, Form(form): Form<LoginForm>) -> Redirect {
    match state.gate.check(&form.password) {
        Ok(()) => {
            state.store.dispatch(Action::Login).await;
            info!("admin signed in");
            Redirect::to("/admin")
        }
        Err(e) => {
            warn!("admin sign-in rejected");
            Redirect::to(&format!("/admin?error={}", urlencoding::encode(&e.to_string())))
        }
    }
}

async fn logout(State(state): State<Arc<ServerState>>) -> Redirect {
    state.store.dispatch(Action::Logout).await;
    info!("admin signed out");
    Redirect::to("/")
}

async fn reset(State(state): State<Arc<ServerState>>) -> Redirect {
    state.store.dispatch(Action::ResetDefaults).await;
    info!("site reset to defaults");
    Redirect::to(&AdminTab::Theme.url())
}

// ── Theme ────────────────────────────────────────────────────────────

/// The theme editor form. Every field is posted on save; the checkbox is
/// absent when unchecked.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    pub mode: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub font: Option<String>,
    pub layout: Option<String>,
    pub cursor: Option<String>,
    pub button_style: Option<String>,
    pub animations_enabled: Option<String>,
}

impl ThemeForm {
    /// A patch carrying only the keys whose posted value differs from `current`.
    pub fn changes_from(self, current: &ThemeSettings) -> ThemePatch {
        fn changed<T: PartialEq>(posted: Option<T>, current: &T) -> Option<T> {
            posted.filter(|value| value != current)
        }

        ThemePatch {
            mode: changed(self.mode.map(Into::into), &current.mode),
            primary_color: changed(self.primary_color, &current.primary_color),
            secondary_color: changed(self.secondary_color, &current.secondary_color),
            accent_color: changed(self.accent_color, &current.accent_color),
            font: changed(self.font, &current.font),
            layout: changed(self.layout.map(Into::into), &current.layout),
            cursor: changed(self.cursor.map(Into::into), &current.cursor),
            button_style: changed(self.button_style.map(Into::into), &current.button_style),
            animations_enabled: changed(
                Some(self.animations_enabled.is_some()),
                &current.animations_enabled,
            ),
        }
    }
}

async fn save_theme(State(state): State<Arc<ServerState>>, Form(form): Form<ThemeForm>) -> Redirect {
    state
        .store
        .update(|current| {
            let patch = form.changes_from(&current.theme);
            (!patch.is_empty()).then(|| editor::set_theme(patch))
        })
        .await;
    Redirect::to(&AdminTab::Theme.url())
}

// ── Company, home, about ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CompanyForm {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo_text: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl CompanyForm {
    /// `current` with every posted field replaced.
    pub fn apply_to(self, current: &CompanyInfo) -> CompanyInfo {
        let mut company = current.clone();
        for (slot, posted) in [
            (&mut company.name, self.name),
            (&mut company.tagline, self.tagline),
            (&mut company.description, self.description),
            (&mut company.address, self.address),
            (&mut company.phone, self.phone),
            (&mut company.email, self.email),
            (&mut company.logo_text, self.logo_text),
            (&mut company.facebook, self.facebook),
            (&mut company.twitter, self.twitter),
            (&mut company.linkedin, self.linkedin),
            (&mut company.instagram, self.instagram),
        ] {
            if let Some(value) = posted {
                *slot = value;
            }
        }
        company
    }
}

async fn save_company(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<CompanyForm>,
) -> Redirect {
    state
        .store
        .update(|current| {
            Some(editor::replace_company(form.apply_to(&current.content.company)))
        })
        .await;
    Redirect::to(&AdminTab::General.url())
}

/// `current` with the posted hero fields and `stat_label_N` / `stat_value_N`
/// entries applied. Stats are edited in place; none are added or removed.
pub fn apply_home_form(fields: &HashMap<String, String>, current: &HomeContent) -> HomeContent {
    let mut home = current.clone();
    if let Some(v) = fields.get("hero_title") {
        home.hero_title.clone_from(v);
    }
    if let Some(v) = fields.get("hero_subtitle") {
        home.hero_subtitle.clone_from(v);
    }
    if let Some(v) = fields.get("hero_image") {
        home.hero_image.clone_from(v);
    }
    for (i, stat) in home.stats.iter_mut().enumerate() {
        if let Some(v) = fields.get(&format!("stat_label_{i}")) {
            stat.label.clone_from(v);
        }
        if let Some(v) = fields.get(&format!("stat_value_{i}")) {
            stat.value.clone_from(v);
        }
    }
    home
}

async fn save_home(
    State(state): State<Arc<ServerState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    state
        .store
        .update(|current| {
            Some(editor::replace_home(apply_home_form(&fields, &current.content.home)))
        })
        .await;
    Redirect::to(&AdminTab::Home.url())
}

#[derive(Debug, Default, Deserialize)]
pub struct AboutForm {
    pub story: Option<String>,
    pub mission: Option<String>,
    /// One value per line; blank lines are dropped.
    pub values: Option<String>,
}

impl AboutForm {
    pub fn apply_to(self, current: &AboutContent) -> AboutContent {
        let mut about = current.clone();
        if let Some(story) = self.story {
            about.story = story;
        }
        if let Some(mission) = self.mission {
            about.mission = mission;
        }
        if let Some(values) = self.values {
            about.values = values
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect();
        }
        about
    }
}

async fn save_about(State(state): State<Arc<ServerState>>, Form(form): Form<AboutForm>) -> Redirect {
    state
        .store
        .update(|current| Some(editor::replace_about(form.apply_to(&current.content.about))))
        .await;
    Redirect::to(&AdminTab::Home.url())
}

// ── Collections ──────────────────────────────────────────────────────

/// A collection editable from the admin panel.
pub trait AdminCollection: CollectionEntry + Send + Sync + 'static {
    /// Path segment under `/admin/`.
    const SLUG: &'static str;
    /// Tab the collection's editor lives on.
    const TAB: AdminTab;
    /// Fields posted by the entry's edit form.
    type Form: DeserializeOwned + Send + 'static;

    /// Write the posted fields into `entry`. Absent fields are left alone.
    fn apply(form: Self::Form, entry: &mut Self);
}

fn set_if_some(slot: &mut String, posted: Option<String>) {
    if let Some(value) = posted {
        *slot = value;
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Empty clears the price.
    pub price: Option<String>,
}

impl AdminCollection for Service {
    const SLUG: &'static str = "services";
    const TAB: AdminTab = AdminTab::Services;
    type Form = ServiceForm;

    fn apply(form: ServiceForm, entry: &mut Self) {
        set_if_some(&mut entry.title, form.title);
        set_if_some(&mut entry.description, form.description);
        set_if_some(&mut entry.icon, form.icon);
        if let Some(price) = form.price {
            entry.price = (!price.is_empty()).then_some(price);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamMemberForm {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl AdminCollection for TeamMember {
    const SLUG: &'static str = "team";
    const TAB: AdminTab = AdminTab::Team;
    type Form = TeamMemberForm;

    fn apply(form: TeamMemberForm, entry: &mut Self) {
        set_if_some(&mut entry.name, form.name);
        set_if_some(&mut entry.role, form.role);
        set_if_some(&mut entry.bio, form.bio);
        set_if_some(&mut entry.image, form.image);
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogPostForm {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
}

impl AdminCollection for BlogPost {
    const SLUG: &'static str = "blog";
    const TAB: AdminTab = AdminTab::Blog;
    type Form = BlogPostForm;

    fn apply(form: BlogPostForm, entry: &mut Self) {
        set_if_some(&mut entry.title, form.title);
        set_if_some(&mut entry.excerpt, form.excerpt);
        set_if_some(&mut entry.content, form.content);
        set_if_some(&mut entry.category, form.category);
        set_if_some(&mut entry.image, form.image);
        set_if_some(&mut entry.date, form.date);
        set_if_some(&mut entry.author, form.author);
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TestimonialForm {
    pub name: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    /// Kept as text so a bad number leaves the rating unchanged instead of
    /// rejecting the whole form.
    pub rating: Option<String>,
}

impl AdminCollection for Testimonial {
    const SLUG: &'static str = "testimonials";
    const TAB: AdminTab = AdminTab::Home;
    type Form = TestimonialForm;

    fn apply(form: TestimonialForm, entry: &mut Self) {
        set_if_some(&mut entry.name, form.name);
        set_if_some(&mut entry.company, form.company);
        set_if_some(&mut entry.content, form.content);
        if let Some(rating) = form.rating.and_then(|r| r.trim().parse::<u8>().ok()) {
            entry.rating = rating.clamp(1, 5);
        }
    }
}

fn collection_routes<T: AdminCollection>() -> Router<Arc<ServerState>> {
    Router::new()
        .route(&format!("/admin/{}/add", T::SLUG), post(add_entry::<T>))
        .route(&format!("/admin/{}/{{index}}", T::SLUG), post(edit_entry::<T>))
        .route(
            &format!("/admin/{}/{{index}}/delete", T::SLUG),
            post(remove_entry::<T>),
        )
}

async fn add_entry<T: AdminCollection>(State(state): State<Arc<ServerState>>) -> Redirect {
    let entry: T = state.ids.placeholder();
    state
        .store
        .update(|current| Some(editor::appended(&current.content, entry)))
        .await;
    Redirect::to(&T::TAB.url())
}

async fn edit_entry<T: AdminCollection>(
    State(state): State<Arc<ServerState>>,
    Path(index): Path<usize>,
    Form(form): Form<T::Form>,
) -> Redirect {
    state
        .store
        .update(|current| {
            Some(editor::edited_at(&current.content, index, |entry: &mut T| {
                T::apply(form, entry);
            }))
        })
        .await;
    Redirect::to(&T::TAB.url())
}

async fn remove_entry<T: AdminCollection>(
    State(state): State<Arc<ServerState>>,
    Path(index): Path<usize>,
) -> Redirect {
    state
        .store
        .update(|current| Some(editor::removed_at::<T>(&current.content, index)))
        .await;
    Redirect::to(&T::TAB.url())
}
