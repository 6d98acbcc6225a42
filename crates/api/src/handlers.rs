// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use horas::{Command, TransitionResult, apply, build_year_report};
use horas_audit::{Actor, AuditEntry};
use horas_domain::{CalendarDate, Day, HourName, ReviewStatus, StatusSummary};
use horas_persistence::{Persistence, PersistenceError, UserData};
use time::OffsetDateTime;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AuditEntryInfo, CreateUserRequest, CreateUserResponse, ElementView, LoginRequest,
    LoginResponse, OkResponse, ReportDayInfo, ReportTotals, SetObservationsRequest,
    SetStatusRequest, UserInfo, YearReportResponse,
};

/// Authenticates a user and opens a session.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` for bad credentials.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (token, actor, user) =
        AuthenticationService::login(persistence, &request.usuario, &request.password)?;

    info!("User '{}' logged in", actor.username);
    Ok(LoginResponse {
        ok: true,
        token,
        rol: actor.role.as_str().to_string(),
        nombre: user.display_name,
    })
}

/// Closes a session.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<OkResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(OkResponse { ok: true })
}

/// Creates a user account. Supervisors only.
///
/// # Errors
///
/// Returns an error if the actor is not a supervisor, the input is
/// invalid, or the username is taken.
pub fn create_user(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &CreateUserRequest,
) -> Result<CreateUserResponse, ApiError> {
    AuthorizationService::authorize_create_user(actor)?;

    if request.usuario.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("usuario"),
            message: String::from("Username must not be empty"),
        });
    }
    if request.password.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Password must not be empty"),
        });
    }
    if Role::parse_str(&request.rol).is_none() {
        return Err(ApiError::InvalidInput {
            field: String::from("rol"),
            message: format!("'{}' is not a valid role", request.rol),
        });
    }

    if persistence
        .get_user_by_username(&request.usuario)
        .map_err(internal)?
        .is_some()
    {
        return Err(ApiError::InvalidInput {
            field: String::from("usuario"),
            message: format!("Username '{}' already exists", request.usuario),
        });
    }

    let id = persistence
        .create_user(
            &request.usuario,
            &request.nombre,
            &request.password,
            &request.rol,
        )
        .map_err(internal)?;

    Ok(CreateUserResponse { ok: true, id })
}

/// Lists user accounts. Supervisors only.
///
/// # Errors
///
/// Returns an error if the actor is not a supervisor.
pub fn list_users(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<UserInfo>, ApiError> {
    AuthorizationService::authorize_list_users(actor)?;

    let users = persistence.list_users().map_err(internal)?;
    Ok(users
        .into_iter()
        .map(|u| UserInfo {
            id: u.user_id,
            usuario: u.username,
            nombre: u.display_name,
            rol: u.role,
        })
        .collect())
}

/// Builds the day view: the liturgical identifier followed by each
/// hour in celebration order with its elements' review state.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed date and
/// `ApiError::ResourceNotFound` for an unseeded one.
pub fn get_day_view(
    persistence: &mut Persistence,
    date_str: &str,
) -> Result<serde_json::Value, ApiError> {
    let date = CalendarDate::parse(date_str).map_err(translate_domain_error)?;
    let day = persistence
        .get_day(date)
        .map_err(crate::error::translate_persistence_error)?;

    Ok(day_view_json(&day))
}

/// Serializes a day as its wire view.
///
/// Hour keys follow the day's stored order, which the
/// `preserve_order` map keeps on the way out.
#[must_use]
pub fn day_view_json(day: &Day) -> serde_json::Value {
    let mut view = serde_json::Map::new();
    view.insert(
        String::from("idLiturgico"),
        serde_json::Value::String(day.liturgical_id.clone()),
    );

    for hour in &day.hours {
        let elements: Vec<serde_json::Value> = hour
            .elements
            .iter()
            .map(|e| {
                serde_json::json!(ElementView {
                    tipo: e.element_type.as_str().to_string(),
                    estado: e.status.as_str().to_string(),
                    observaciones: e.observations.clone(),
                })
            })
            .collect();
        view.insert(
            hour.name.as_str().to_string(),
            serde_json::Value::Array(elements),
        );
    }

    serde_json::Value::Object(view)
}

/// Records a review verdict for one element.
///
/// Only the three set statuses are accepted on the wire; an element
/// cannot be moved back to unset.
///
/// # Errors
///
/// Returns an error if the status is invalid, the coordinates don't
/// resolve, or persistence fails.
pub fn set_status(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user: &UserData,
    date_str: &str,
    hour_str: &str,
    index: u32,
    request: &SetStatusRequest,
) -> Result<OkResponse, ApiError> {
    AuthorizationService::authorize_record_review(actor)?;

    let status = ReviewStatus::parse_str(&request.estado).map_err(translate_domain_error)?;
    if !status.is_set() {
        return Err(ApiError::InvalidInput {
            field: String::from("estado"),
            message: String::from("Status must be verde, amarillo or rojo"),
        });
    }

    let (date, hour) = parse_coordinates(date_str, hour_str)?;
    let command = Command::SetStatus {
        hour,
        index,
        status,
    };
    record_change(persistence, actor, user, date, &command)
}

/// Replaces the observations of one element.
///
/// # Errors
///
/// Returns an error if the coordinates don't resolve or persistence
/// fails.
pub fn set_observations(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user: &UserData,
    date_str: &str,
    hour_str: &str,
    index: u32,
    request: &SetObservationsRequest,
) -> Result<OkResponse, ApiError> {
    AuthorizationService::authorize_record_review(actor)?;

    let (date, hour) = parse_coordinates(date_str, hour_str)?;
    let command = Command::SetObservations {
        hour,
        index,
        observations: request.observaciones.clone(),
    };
    record_change(persistence, actor, user, date, &command)
}

/// Retrieves the audit trail, newest first. Supervisors only.
///
/// # Errors
///
/// Returns an error if the actor is not a supervisor or the query
/// fails.
pub fn get_audit_log(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<AuditEntryInfo>, ApiError> {
    AuthorizationService::authorize_view_audit(actor)?;

    let entries = persistence.get_audit_log().map_err(internal)?;
    Ok(entries.into_iter().map(audit_entry_info).collect())
}

/// Lists every year with seeded days, ascending. Supervisors only.
///
/// Years travel as strings on the wire.
///
/// # Errors
///
/// Returns an error if the actor is not a supervisor or the query
/// fails.
pub fn list_years(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<String>, ApiError> {
    AuthorizationService::authorize_list_years(actor)?;

    let years = persistence.list_years().map_err(internal)?;
    Ok(years.iter().map(ToString::to_string).collect())
}

/// Generates the year report. Supervisors only.
///
/// # Errors
///
/// Returns an error if the actor is not a supervisor or the query
/// fails.
pub fn year_report(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    year: i32,
) -> Result<YearReportResponse, ApiError> {
    AuthorizationService::authorize_year_report(actor)?;

    let days = persistence.get_days_for_year(year).map_err(internal)?;
    let report = build_year_report(&days);

    Ok(YearReportResponse {
        totales: report_totals(report.totals),
        dias_con_fallos: report
            .days_with_failures
            .into_iter()
            .map(report_day_info)
            .collect(),
        dias_completos: report
            .days_complete
            .into_iter()
            .map(report_day_info)
            .collect(),
    })
}

fn parse_coordinates(
    date_str: &str,
    hour_str: &str,
) -> Result<(CalendarDate, HourName), ApiError> {
    let date = CalendarDate::parse(date_str).map_err(translate_domain_error)?;
    let hour = HourName::parse_str(hour_str).map_err(translate_domain_error)?;
    Ok((date, hour))
}

/// Applies a command against the stored day and persists the result
/// with its audit entry.
fn record_change(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user: &UserData,
    date: CalendarDate,
    command: &Command,
) -> Result<OkResponse, ApiError> {
    let day = persistence
        .get_day(date)
        .map_err(crate::error::translate_persistence_error)?;

    let audit_actor: Actor = actor.to_audit_actor(user);
    let result: TransitionResult = apply(&day, command, &audit_actor, OffsetDateTime::now_utc())
        .map_err(translate_core_error)?;

    persistence.apply_transition(&result).map_err(|e| match e {
        PersistenceError::DayNotFound(_) | PersistenceError::NotFound(_) => {
            crate::error::translate_persistence_error(e)
        }
        _ => ApiError::AuditWriteFailed {
            message: e.to_string(),
        },
    })?;

    Ok(OkResponse { ok: true })
}

fn audit_entry_info(entry: AuditEntry) -> AuditEntryInfo {
    AuditEntryInfo {
        id: entry.entry_id.unwrap_or_default(),
        fecha_cambio: entry.date_of_change,
        hora_cambio: entry.time_of_change,
        usuario: entry.actor_name,
        fecha: entry.date.to_string(),
        hora: entry.hour.as_str().to_string(),
        indice: entry.index,
        tipo: entry.element_type.as_str().to_string(),
        campo: entry.field.as_str().to_string(),
        valor_antes: entry.value_before,
        valor_despues: entry.value_after,
    }
}

const fn report_totals(summary: StatusSummary) -> ReportTotals {
    ReportTotals {
        verde: summary.green,
        amarillo: summary.yellow,
        rojo: summary.red,
        pendiente: summary.pending,
    }
}

fn report_day_info(line: horas::DayReportLine) -> ReportDayInfo {
    ReportDayInfo {
        fecha: line.date.to_string(),
        id_liturgico: line.liturgical_id,
        verde: line.summary.green,
        amarillo: line.summary.yellow,
        rojo: line.summary.red,
        pendiente: line.summary.pending,
    }
}

fn internal(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Persistence failure: {err}"),
    }
}
