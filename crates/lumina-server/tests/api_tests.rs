#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the Lumina router: public pages, the admin panel
//! forms, and the JSON API, driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use lumina_core::gate::AccessGate;
use lumina_storage::{FileBackend, MemoryBackend, StorageBackend};
use lumina_server::build_router;
use lumina_server::state::ServerState;

async fn server_with(storage: Arc<dyn StorageBackend>) -> (Router, Arc<ServerState>) {
    let state = Arc::new(ServerState::new(storage, AccessGate::default()).await);
    (build_router(Arc::clone(&state)), state)
}

async fn server() -> (Router, Arc<ServerState>) {
    server_with(Arc::new(MemoryBackend::new())).await
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .unwrap()
}

async fn sign_in(app: &Router) {
    let response = post_form(app, "/admin/login", "password=admin123").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ── Public pages ─────────────────────────────────────────────────────

#[tokio::test]
async fn public_pages_render() {
    let (app, _) = server().await;
    for uri in ["/", "/about", "/services", "/blog", "/contact"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );
        let html = text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"), "{uri}");
    }
}

#[tokio::test]
async fn unknown_path_redirects_home() {
    let (app, _) = server().await;
    let response = get(&app, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn blog_search_with_no_hits() {
    let (app, _) = server().await;
    let html = text(get(&app, "/blog?q=zzzz-nothing").await).await;
    assert!(html.contains("No articles match your search."));
}

// ── Admin panel ──────────────────────────────────────────────────────

#[tokio::test]
async fn admin_shows_login_until_signed_in() {
    let (app, state) = server().await;
    let html = text(get(&app, "/admin").await).await;
    assert!(html.contains(r#"action="/admin/login""#));

    sign_in(&app).await;
    assert!(state.store.snapshot().is_authenticated);

    let html = text(get(&app, "/admin").await).await;
    assert!(html.contains(r#"action="/admin/logout""#));
}

#[tokio::test]
async fn wrong_password_redirects_with_message() {
    let (app, state) = server().await;
    let response = post_form(&app, "/admin/login", "password=letmein").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?error=Invalid%20password");
    assert!(!state.store.snapshot().is_authenticated);

    let html = text(get(&app, "/admin?error=Invalid%20password").await).await;
    assert!(html.contains("Invalid password"));
}

#[tokio::test]
async fn admin_forms_require_login() {
    let (app, state) = server().await;
    let before = state.store.snapshot();
    let response = post_form(&app, "/admin/theme", "mode=dark").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    assert_eq!(state.store.snapshot(), before);
}

#[tokio::test]
async fn theme_form_updates_stylesheet() {
    let (app, state) = server().await;
    sign_in(&app).await;

    let response = post_form(&app, "/admin/theme", "primary_color=%23ff0000&mode=dark").await;
    assert_eq!(location(&response), "/admin?tab=theme");

    let snapshot = state.store.snapshot();
    assert_eq!(snapshot.theme.primary_color, "#ff0000");
    assert!(snapshot.theme.is_dark());
    assert!(!snapshot.theme.animations_enabled);

    let css = text(get(&app, "/api/theme.css").await).await;
    assert!(css.contains("#ff0000"));
}

#[tokio::test]
async fn service_collection_editing() {
    let (app, state) = server().await;
    sign_in(&app).await;
    let count = state.store.snapshot().content.services.len();

    let response = post_form(&app, "/admin/services/add", "").await;
    assert_eq!(location(&response), "/admin?tab=services");
    let services = state.store.snapshot().content.services.clone();
    assert_eq!(services.len(), count + 1);
    assert_eq!(services[count].title, "New Service");

    post_form(
        &app,
        &format!("/admin/services/{count}"),
        "title=Audits&price=%24500",
    )
    .await;
    let snapshot = state.store.snapshot();
    let edited = &snapshot.content.services[count];
    assert_eq!(edited.title, "Audits");
    assert_eq!(edited.price.as_deref(), Some("$500"));

    post_form(&app, &format!("/admin/services/{count}/delete"), "").await;
    assert_eq!(state.store.snapshot().content.services.len(), count);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_all_kept() {
    let (app, state) = server().await;
    sign_in(&app).await;
    let before = state.store.snapshot().content.services.len();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            post_form(&app, "/admin/services/add", "").await.status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::SEE_OTHER);
    }

    let services = state.store.snapshot().content.services.clone();
    assert_eq!(services.len(), before + 50);
    let mut ids: Vec<_> = services.iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), services.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_edits_to_different_slices_are_all_kept() {
    let (app, state) = server().await;
    sign_in(&app).await;

    let company = {
        let app = app.clone();
        tokio::spawn(async move { post_form(&app, "/admin/company", "phone=555-0100").await })
    };
    let about = {
        let app = app.clone();
        tokio::spawn(async move { post_form(&app, "/admin/about", "mission=Ship+it").await })
    };
    let quote = {
        let app = app.clone();
        tokio::spawn(async move { post_form(&app, "/admin/testimonials/0", "rating=3").await })
    };
    company.await.unwrap();
    about.await.unwrap();
    quote.await.unwrap();

    let snapshot = state.store.snapshot();
    assert_eq!(snapshot.content.company.phone, "555-0100");
    assert_eq!(snapshot.content.about.mission, "Ship it");
    assert_eq!(snapshot.content.testimonials[0].rating, 3);
}

#[tokio::test]
async fn logout_clears_flag() {
    let (app, state) = server().await;
    sign_in(&app).await;
    let response = post_form(&app, "/admin/logout", "").await;
    assert_eq!(location(&response), "/");
    assert!(!state.store.snapshot().is_authenticated);
}

// ── JSON API ─────────────────────────────────────────────────────────

#[tokio::test]
async fn api_login_checks_password() {
    let (app, state) = server().await;

    let response = post_json(&app, "/api/login", serde_json::json!({"password": "nope"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json(response).await["message"], "Invalid password");

    let response = post_json(&app, "/api/login", serde_json::json!({"password": "admin123"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["authenticated"], true);
    assert!(state.store.snapshot().is_authenticated);
}

#[tokio::test]
async fn dispatch_requires_login() {
    let (app, _) = server().await;
    let response = post_json(&app, "/api/dispatch", serde_json::json!({"type": "LOGOUT"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dispatch_refuses_login_action() {
    let (app, _) = server().await;
    sign_in(&app).await;
    let response = post_json(&app, "/api/dispatch", serde_json::json!({"type": "LOGIN"})).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dispatch_set_theme_returns_new_state() {
    let (app, _) = server().await;
    sign_in(&app).await;

    let response = post_json(
        &app,
        "/api/dispatch",
        serde_json::json!({"type": "SET_THEME", "payload": {"accentColor": "#00ff00"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["theme"]["accentColor"], "#00ff00");
    assert_eq!(body["isAuthenticated"], true);

    let css = text(get(&app, "/api/theme.css").await).await;
    assert!(css.contains("#00ff00"));
}

#[tokio::test]
async fn dispatch_unknown_tag_changes_nothing() {
    let (app, state) = server().await;
    sign_in(&app).await;
    let before = state.store.snapshot();

    let response = post_json(&app, "/api/dispatch", serde_json::json!({"type": "FLY_TO_MOON", "payload": {"speed": 9}})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.store.snapshot(), before);
}

#[tokio::test]
async fn dispatch_tolerates_odd_action_shapes() {
    let (app, state) = server().await;
    sign_in(&app).await;
    let before = state.store.snapshot();

    for body in [serde_json::json!({}), serde_json::json!({"type": 5})] {
        let response = post_json(&app, "/api/dispatch", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.snapshot(), before);
    }

    let response = post_json(
        &app,
        "/api/dispatch",
        serde_json::json!({"type": "LOGOUT", "payload": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["isAuthenticated"], false);
}

#[tokio::test]
async fn malformed_dispatch_is_bad_request() {
    let (app, _) = server().await;
    sign_in(&app).await;
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/dispatch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edits_survive_restart_on_file_storage() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = Arc::new(FileBackend::open(dir.path()).unwrap());
        let (app, _) = server_with(storage).await;
        sign_in(&app).await;
        post_form(&app, "/admin/company", "name=Northwind").await;
    }

    let storage = Arc::new(FileBackend::open(dir.path()).unwrap());
    let (app, state) = server_with(storage).await;
    assert_eq!(state.store.snapshot().content.company.name, "Northwind");
    assert!(state.store.snapshot().is_authenticated);

    let body = json(get(&app, "/api/state").await).await;
    assert_eq!(body["content"]["company"]["name"], "Northwind");
}
