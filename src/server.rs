//!
//! mediport HTTP server
//! --------------------
//! Axum-based JSON API consumed by the browser shell.
//!
//! Responsibilities:
//! - Login/logout endpoints driving the credential gate rules and the
//!   directory-backed authentication client.
//! - The single active session, restored from the durable mirror at startup.
//! - Role routing and role-shaped dashboard payloads with search endpoints.
//! - Static landing content for the marketing pages.
//! - First-run demo directory seeding and startup configuration logs.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::content;
use crate::dashboard::{samples, DashboardData};
use crate::directory::{HttpDirectory, MemoryDirectory, UserDirectory, UserRecord};
use crate::error::AppError;
use crate::identity::{
    route, sign_out, AuthProvider, DirectoryAuthProvider, SessionMirror, SessionStore, UserType,
};

/// Shared server state injected into all handlers.
///
/// Holds the session store (exactly one active session per process, mirrored
/// to disk), the directory-backed authentication client, and the flag that
/// keeps at most one login in flight at a time.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
    pub provider: Arc<DirectoryAuthProvider>,
    login_busy: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(store: Arc<SessionStore>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            provider: Arc::new(DirectoryAuthProvider::new(directory)),
            login_busy: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Configuration resolved from the environment by `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub data_root: String,
    /// Base URL of the hosted directory; empty selects the seeded demo
    /// directory.
    pub directory_url: String,
    pub directory_key: String,
}

pub async fn run(cfg: ServerConfig) -> anyhow::Result<()> {
    let mirror = SessionMirror::new(&cfg.data_root);
    let store = Arc::new(SessionStore::new(mirror));
    // Best-effort restore of the previous session; a corrupt mirror is
    // discarded silently and the router lands on the credential gate.
    store.restore();

    let directory: Arc<dyn UserDirectory> = if cfg.directory_url.is_empty() {
        let mem = MemoryDirectory::new();
        seed_demo_users(&mem);
        info!("no directory configured; seeded demo directory with {} users", mem.len());
        Arc::new(mem)
    } else {
        info!("using hosted directory at {}", cfg.directory_url);
        Arc::new(HttpDirectory::new(&cfg.directory_url, &cfg.directory_key)?)
    };

    let state = AppState::new(store, directory);
    let app = router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", cfg.http_port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "mediport ok" }))
        .route("/content/landing", get(landing))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(current_session))
        .route("/route", get(current_route))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/search", get(dashboard_search))
        .with_state(state)
}

/// One demo user per role, carrying the bundled dataset as its payload.
pub fn seed_demo_users(directory: &MemoryDirectory) {
    let seeds = [
        ("5551234567", "1234", UserType::Patient),
        ("drchen", "heartbeat", UserType::Doctor),
        ("admin@stvincent.org", "stvincent", UserType::Hospital),
        ("ops@blueshieldplus.com", "coverage", UserType::Insurance),
    ];
    for (i, (field1, field2, user_type)) in seeds.into_iter().enumerate() {
        // Bare payload, the way the hosted directory stores it.
        let data = match user_type {
            UserType::Patient => serde_json::to_value(samples::patient()),
            UserType::Doctor => serde_json::to_value(samples::doctor()),
            UserType::Hospital => serde_json::to_value(samples::hospital()),
            UserType::Insurance => serde_json::to_value(samples::insurance()),
        }
        .unwrap_or(serde_json::Value::Null);
        directory.insert(UserRecord {
            id: (i + 1) as i64,
            field1: field1.to_string(),
            field2: field2.to_string(),
            data,
            role: user_type.role_index(),
            created_at: String::new(),
        });
    }
}

fn err_response(e: AppError) -> (StatusCode, Json<serde_json::Value>) {
    let status = StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"status": "error", "error": e})))
}

async fn landing() -> impl IntoResponse {
    Json(content::landing())
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    field1: String,
    field2: String,
    user_type: String,
}

async fn login(State(state): State<AppState>, Json(payload): Json<LoginPayload>) -> impl IntoResponse {
    let Some(user_type) = UserType::parse(&payload.user_type) else {
        return err_response(AppError::user("unknown_user_type", "unknown user type"));
    };
    // The browser form never submits ill-formed credentials; the API
    // refuses them the same way the disabled control would.
    if !user_type.credentials_valid(&payload.field1, &payload.field2) {
        return err_response(AppError::user(
            "malformed_credentials",
            "credentials are not well-formed for this user type",
        ));
    }
    if state.login_busy.swap(true, Ordering::SeqCst) {
        return err_response(AppError::conflict("login_in_flight", "a login attempt is already in flight"));
    }
    let outcome = state
        .provider
        .authenticate(&payload.field1, &payload.field2, user_type)
        .await;
    state.login_busy.store(false, Ordering::SeqCst);
    match outcome {
        Ok(session) => {
            state.store.set_session(Some(session.clone()));
            (StatusCode::OK, Json(json!({"status": "ok", "session": session})))
        }
        Err(e) => {
            error!("login failed: {e}");
            err_response(e)
        }
    }
}

async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let next = sign_out(&state.store);
    (StatusCode::OK, Json(json!({"status": "ok", "route": next})))
}

async fn current_session(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.current() {
        Some(session) => (StatusCode::OK, Json(json!({"status": "ok", "session": session}))),
        None => (StatusCode::UNAUTHORIZED, Json(json!({"status": "unauthorized"}))),
    }
}

async fn current_route(State(state): State<AppState>) -> impl IntoResponse {
    Json(route(&state.store))
}

async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let Some(session) = state.store.current() else {
        return (StatusCode::UNAUTHORIZED, Json(json!({"status": "unauthorized"})));
    };
    let data = session
        .data
        .clone()
        .unwrap_or_else(|| DashboardData::fallback(session.user_type));
    (StatusCode::OK, Json(json!({"status": "ok", "dashboard": data})))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    section: String,
    #[serde(default)]
    q: String,
}

async fn dashboard_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let Some(session) = state.store.current() else {
        return (StatusCode::UNAUTHORIZED, Json(json!({"status": "unauthorized"})));
    };
    let data = session
        .data
        .clone()
        .unwrap_or_else(|| DashboardData::fallback(session.user_type));
    let term = params.q.as_str();
    let results = match (&data, params.section.as_str()) {
        (DashboardData::Hospital(h), "patients") => json!(h.filter_patients(term)),
        (DashboardData::Hospital(h), "doctors") => json!(h.filter_doctors(term)),
        (DashboardData::Hospital(h), "appointments") => json!(h.filter_appointments(term)),
        (DashboardData::Hospital(h), "prescriptions") => json!(h.filter_prescriptions(term)),
        (DashboardData::Hospital(h), "performance") => json!(h.filter_performance(term)),
        (DashboardData::Insurance(i), "members") => json!(i.filter_members(term)),
        (DashboardData::Insurance(i), "hospitals") => json!(i.filter_hospitals(term)),
        _ => {
            return err_response(AppError::not_found(
                "unknown_section",
                "no such searchable section for this dashboard",
            ));
        }
    };
    (StatusCode::OK, Json(json!({"status": "ok", "section": params.section, "results": results})))
}
