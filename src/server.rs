use axum::{
    Json, Router,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::ui::app::{
    CHECKOUT_STEPS, CheckoutPage, GalleryPage, NotFoundPage, validate_checkout,
    validate_checkout_step,
};
use crate::ui::form::FieldValue;

/// Build the application router.
pub fn build_router(config: Arc<AppConfig>) -> Router {
    let static_dir = config.ui.static_dir.clone();
    let state = AppState { config };

    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        .route("/checkout", get(checkout_handler).post(checkout_submit_handler))
        // API routes
        .route("/api/checkout/validate", post(api_validate_checkout))
        .route("/healthz", get(healthz))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.server.address();
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Renders a page inside its own reactive owner, which is dropped afterwards.
fn render_page<F, V>(page: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| page().to_html())
}

/// Generate the HTML shell for the application.
fn html_shell(title: &str, app_title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Reusable Leptos UI components">
    <title>{title} - {app_title}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen antialiased">
    <header class="w-full shadow-sm">
        <nav class="container mx-auto flex h-14 items-center gap-4 px-4 max-w-5xl">
            <a href="/" class="font-semibold">{app_title}</a>
            <a href="/" class="text-sm">Gallery</a>
            <a href="/checkout" class="text-sm">Checkout</a>
        </nav>
    </header>
    <main id="app">
        {content}
    </main>
</body>
</html>"#
    )
}

/// Gallery page handler.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let content = render_page(|| view! { <GalleryPage /> });
    Html(html_shell("Gallery", &state.config.ui.title, &content))
}

#[derive(Debug, Deserialize)]
struct CheckoutQuery {
    /// Zero-based step index, kept as text so a malformed value falls back
    /// to the first step instead of failing the request.
    step: Option<String>,
}

impl CheckoutQuery {
    fn step(&self) -> usize {
        self.step
            .as_deref()
            .and_then(|step| step.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Checkout page handler.
async fn checkout_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
) -> impl IntoResponse {
    let step = query.step();
    let content = render_page(move || view! { <CheckoutPage step=step /> });
    Html(html_shell("Checkout", &state.config.ui.title, &content))
}

/// Checkout step submission: moves on to the next step when the step's
/// fields pass, otherwise renders the step again with its errors.
async fn checkout_submit_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Response {
    let step = query.step().min(CHECKOUT_STEPS.len() - 1);
    let values: BTreeMap<String, FieldValue> = fields
        .into_iter()
        .map(|(name, value)| (name, FieldValue::from(value)))
        .collect();
    let result = validate_checkout_step(step, &values);

    info!(
        name: "checkout.step_submitted",
        step,
        valid = result.valid,
        failing_fields = result.errors.len(),
        "Checkout step submitted"
    );

    if result.valid {
        let next = (step + 1).min(CHECKOUT_STEPS.len() - 1);
        return Redirect::to(&format!("/checkout?step={next}")).into_response();
    }

    let content = render_page(move || view! { <CheckoutPage step=step submitted=Some(values) /> });
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(html_shell("Checkout", &state.config.ui.title, &content)),
    )
        .into_response()
}

/// Fallback for unknown paths.
async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    let content = render_page(|| view! { <NotFoundPage /> });
    (
        StatusCode::NOT_FOUND,
        Html(html_shell("Not found", &state.config.ui.title, &content)),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /healthz - Liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

/// POST /api/checkout/validate - Validate checkout values with the same
/// rules as the checkout form.
async fn api_validate_checkout(
    Json(values): Json<BTreeMap<String, FieldValue>>,
) -> impl IntoResponse {
    let result = validate_checkout(&values);

    info!(
        name: "checkout.validated",
        valid = result.valid,
        failing_fields = result.errors.len(),
        "Checkout values validated"
    );

    Json(result)
}
