// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! HTTP server for the Horas review system.
//!
//! Exposes the Spanish wire contract over Axum: session login, day
//! views, per-element review mutations, the audit trail and the
//! supervisor year report.

mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use horas_api::{ApiError, calendar, handlers};
use horas_api::request_response::{
    AuditEntryInfo, CreateUserRequest, CreateUserResponse, LoginRequest, LoginResponse,
    OkResponse, SetObservationsRequest, SetStatusRequest, UserInfo, YearReportResponse,
};
use horas_persistence::Persistence;
use session::SessionUser;

/// Horas Server - HTTP server for the Liturgy of the Hours review system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a calendar JSON file to seed days from at startup
    #[arg(short, long)]
    calendar: Option<String>,

    /// Username of a supervisor account to create at startup if absent
    #[arg(long)]
    bootstrap_supervisor: Option<String>,

    /// Password for the bootstrap supervisor account
    #[arg(long)]
    bootstrap_password: Option<String>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind one mutex. Mutation handlers hold
/// the lock across the whole read-apply-persist sequence so concurrent
/// writes to the same element serialize instead of losing updates.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::AuditWriteFailed { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(usuario = %req.usuario, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::login(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    parts: axum::http::request::Parts,
) -> Result<Json<OkResponse>, HttpError> {
    let token = parts
        .headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing Authorization header"),
        })?;

    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::logout(&mut persistence, token)?;
    Ok(Json(response))
}

/// Handler for POST `/usuarios`. Supervisors only.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, HttpError> {
    info!(actor = %actor.username, nuevo = %req.usuario, "Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::create_user(&mut persistence, &actor, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/usuarios`. Supervisors only.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<Vec<UserInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::list_users(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/dia/{fecha}`.
async fn handle_get_day(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_actor, _user): SessionUser,
    Path(fecha): Path<String>,
) -> Result<Json<serde_json::Value>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let view = handlers::get_day_view(&mut persistence, &fecha)?;
    Ok(Json(view))
}

/// Handler for PUT `/dia/{fecha}/hora/{hora}/index/{indice}/estado`.
///
/// The lock is held from day load through transition persistence so a
/// concurrent write to the same element cannot interleave.
async fn handle_set_status(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, user): SessionUser,
    Path((fecha, hora, indice)): Path<(String, String, u32)>,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<OkResponse>, HttpError> {
    info!(
        actor = %actor.username,
        fecha = %fecha,
        hora = %hora,
        indice,
        estado = %req.estado,
        "Handling set_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response =
        handlers::set_status(&mut persistence, &actor, &user, &fecha, &hora, indice, &req)?;
    Ok(Json(response))
}

/// Handler for PUT `/dia/{fecha}/hora/{hora}/index/{indice}/observaciones`.
async fn handle_set_observations(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, user): SessionUser,
    Path((fecha, hora, indice)): Path<(String, String, u32)>,
    Json(req): Json<SetObservationsRequest>,
) -> Result<Json<OkResponse>, HttpError> {
    info!(
        actor = %actor.username,
        fecha = %fecha,
        hora = %hora,
        indice,
        "Handling set_observations request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::set_observations(
        &mut persistence,
        &actor,
        &user,
        &fecha,
        &hora,
        indice,
        &req,
    )?;
    Ok(Json(response))
}

/// Handler for GET `/auditoria`. Supervisors only.
async fn handle_get_audit_log(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<Vec<AuditEntryInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::get_audit_log(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/years`. Supervisors only.
async fn handle_list_years(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<Vec<String>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let years = handlers::list_years(&mut persistence, &actor)?;
    Ok(Json(years))
}

/// Handler for GET `/supervisor/{year}/informe`. Supervisors only.
async fn handle_year_report(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(year): Path<i32>,
) -> Result<Json<YearReportResponse>, HttpError> {
    info!(actor = %actor.username, year, "Handling year_report request");

    let mut persistence = app_state.persistence.lock().await;
    let response = handlers::year_report(&mut persistence, &actor, year)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/usuarios", post(handle_create_user))
        .route("/usuarios", get(handle_list_users))
        .route("/dia/{fecha}", get(handle_get_day))
        .route(
            "/dia/{fecha}/hora/{hora}/index/{indice}/estado",
            put(handle_set_status),
        )
        .route(
            "/dia/{fecha}/hora/{hora}/index/{indice}/observaciones",
            put(handle_set_observations),
        )
        .route("/auditoria", get(handle_get_audit_log))
        .route("/years", get(handle_list_years))
        .route("/supervisor/{year}/informe", get(handle_year_report))
        .with_state(app_state)
}

/// Seeds days from a calendar file, skipping already-seeded dates.
fn seed_calendar(persistence: &mut Persistence, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let days = calendar::load_calendar(path)?;
    let total = days.len();
    let mut created = 0usize;
    for structure in &days {
        if persistence.seed_day(structure)? {
            created += 1;
        }
    }
    info!("Calendar seeded: {} new of {} days", created, total);
    Ok(())
}

/// Creates the bootstrap supervisor account if it does not exist yet.
fn bootstrap_supervisor(
    persistence: &mut Persistence,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if persistence.get_user_by_username(username)?.is_some() {
        info!("Bootstrap supervisor '{}' already exists", username);
        return Ok(());
    }
    persistence.create_user(username, username, password, "supervisor")?;
    info!("Created bootstrap supervisor '{}'", username);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Horas Server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(calendar_path) = &args.calendar {
        seed_calendar(&mut persistence, calendar_path)?;
    }

    if let (Some(username), Some(password)) =
        (&args.bootstrap_supervisor, &args.bootstrap_password)
    {
        bootstrap_supervisor(&mut persistence, username, password)?;
    }

    // Opportunistic sweep so stale sessions don't pile up.
    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)?;
    let swept = persistence.delete_expired_sessions(&now)?;
    if swept > 0 {
        info!("Removed {} expired sessions", swept);
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use horas_domain::{CalendarDate, DayStructure, ElementType, HourName, HourStructure};
    use tower::ServiceExt;

    /// Helper to create test app state with a seeded day and two
    /// accounts.
    fn create_test_app_state() -> AppState {
        let mut persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");

        let structure = DayStructure {
            date: CalendarDate::parse("2025-01-06").unwrap(),
            liturgical_id: "epifania".to_string(),
            hours: vec![
                HourStructure {
                    name: HourName::Lauds,
                    element_types: vec![
                        ElementType::Hymn,
                        ElementType::PsalmAntiphon1,
                        ElementType::Psalm1,
                    ],
                },
                HourStructure {
                    name: HourName::Vespers,
                    element_types: vec![ElementType::Hymn, ElementType::Prayer],
                },
            ],
        };
        persistence.seed_day(&structure).unwrap();

        persistence
            .create_user("jefa", "Jefa Suprema", "secreta", "supervisor")
            .unwrap();
        persistence
            .create_user("ana", "Ana García", "secreta", "usuario")
            .unwrap();

        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    async fn login(app: &Router, usuario: &str, password: &str) -> String {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(format!(
                        r#"{{"usuario":"{usuario}","password":"{password}"}}"#
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let login: LoginResponse = serde_json::from_slice(&body).unwrap();
        login.token
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"usuario":"ana","password":"incorrecta"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_day_view_requires_session() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dia/2025-01-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_day_view_returns_hours_and_elements() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dia/2025-01-06")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let view = body_json(response).await;
        assert_eq!(view["idLiturgico"], "epifania");
        assert_eq!(view["laudes"].as_array().unwrap().len(), 3);
        assert_eq!(view["laudes"][0]["estado"], "");
    }

    #[tokio::test]
    async fn test_unknown_day_is_not_found() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dia/1999-01-01")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_status_persists_and_audits() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;
        let supervisor_token = login(&app, "jefa", "secreta").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/dia/2025-01-06/hora/laudes/index/0/estado")
                    .header("Authorization", format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"estado":"verde"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let view_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/dia/2025-01-06")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let view = body_json(view_response).await;
        assert_eq!(view["laudes"][0]["estado"], "verde");

        let audit_response = app
            .oneshot(
                Request::builder()
                    .uri("/auditoria")
                    .header("Authorization", format!("Bearer {supervisor_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let audit = body_json(audit_response).await;
        let entries = audit.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["campo"], "estado");
        assert_eq!(entries[0]["valor_despues"], "verde");
        assert_eq!(entries[0]["usuario"], "Ana García");
    }

    #[tokio::test]
    async fn test_concurrent_writes_chain_audit_before_values() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;
        let supervisor_token = login(&app, "jefa", "secreta").await;

        let put_status = |estado: &'static str| {
            let app = app.clone();
            let token = token.clone();
            async move {
                let response = app
                    .oneshot(
                        Request::builder()
                            .method("PUT")
                            .uri("/dia/2025-01-06/hora/laudes/index/0/estado")
                            .header("Authorization", format!("Bearer {token}"))
                            .header("content-type", "application/json")
                            .body(Body::from(format!(r#"{{"estado":"{estado}"}}"#)))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                assert_eq!(response.status(), HttpStatusCode::OK);
            }
        };
        tokio::join!(
            put_status("verde"),
            put_status("amarillo"),
            put_status("rojo")
        );

        let audit_response = app
            .oneshot(
                Request::builder()
                    .uri("/auditoria")
                    .header("Authorization", format!("Bearer {supervisor_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let audit = body_json(audit_response).await;
        let entries = audit.as_array().unwrap();
        assert_eq!(entries.len(), 3);

        // The log arrives newest first; replayed oldest first, every
        // entry's before value must be the previous entry's after
        // value, whatever order the writes won the lock in.
        let chronological: Vec<&serde_json::Value> = entries.iter().rev().collect();
        assert_eq!(chronological[0]["valor_antes"], "");
        for pair in chronological.windows(2) {
            assert_eq!(pair[1]["valor_antes"], pair[0]["valor_despues"]);
        }
    }

    #[tokio::test]
    async fn test_set_status_rejects_invalid_value() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/dia/2025-01-06/hora/laudes/index/0/estado")
                    .header("Authorization", format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"estado":"azul"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_set_observations_round_trip() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "jefa", "secreta").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/dia/2025-01-06/hora/visperas/index/1/observaciones")
                    .header("Authorization", format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"observaciones":"falta la cita"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let view_response = app
            .oneshot(
                Request::builder()
                    .uri("/dia/2025-01-06")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let view = body_json(view_response).await;
        assert_eq!(view["visperas"][1]["observaciones"], "falta la cita");
    }

    #[tokio::test]
    async fn test_reviewer_cannot_create_users_or_read_report() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/usuarios")
                    .header("Authorization", format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"usuario":"x","nombre":"X","password":"x","rol":"usuario"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(create_response.status(), HttpStatusCode::FORBIDDEN);

        let report_response = app
            .oneshot(
                Request::builder()
                    .uri("/supervisor/2025/informe")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(report_response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_reviewer_cannot_read_audit_or_years() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        for uri in ["/auditoria", "/years"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(uri)
                        .header("Authorization", format!("Bearer {token}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), HttpStatusCode::FORBIDDEN, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_supervisor_year_report() {
        let app: Router = build_router(create_test_app_state());
        let supervisor_token = login(&app, "jefa", "secreta").await;
        let reviewer_token = login(&app, "ana", "secreta").await;

        app.clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/dia/2025-01-06/hora/laudes/index/2/estado")
                    .header("Authorization", format!("Bearer {reviewer_token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"estado":"rojo"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/supervisor/2025/informe")
                    .header("Authorization", format!("Bearer {supervisor_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let report = body_json(response).await;
        assert_eq!(report["totales"]["rojo"], 1);
        assert_eq!(report["totales"]["pendiente"], 4);
        assert_eq!(report["diasConFallos"][0]["fecha"], "2025-01-06");
        assert_eq!(report["diasCompletos"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_years_endpoint_lists_seeded_years() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "jefa", "secreta").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/years")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(["2025"]));
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app: Router = build_router(create_test_app_state());
        let token = login(&app, "ana", "secreta").await;

        let logout_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(logout_response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dia/2025-01-06")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }
}
