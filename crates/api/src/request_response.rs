// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! The wire contract is Spanish: field names and enum values match
//! what clients already exchange (`estado`, `observaciones`,
//! `idLiturgico`, `diasConFallos`, ...).

use serde::{Deserialize, Serialize};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
    pub rol: String,
    pub nombre: String,
}

/// API request to create a user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    pub usuario: String,
    pub nombre: String,
    pub password: String,
    pub rol: String,
}

/// API response for a successful account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub ok: bool,
    pub id: i64,
}

/// One user account in the account listing.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub usuario: String,
    pub nombre: String,
    pub rol: String,
}

/// API request to set an element's review status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetStatusRequest {
    pub estado: String,
}

/// API request to set an element's observations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetObservationsRequest {
    pub observaciones: String,
}

/// Generic acknowledgement for mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// One element inside a day view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementView {
    pub tipo: String,
    pub estado: String,
    pub observaciones: String,
}

/// One audit trail entry on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntryInfo {
    pub id: i64,
    pub fecha_cambio: String,
    pub hora_cambio: String,
    pub usuario: String,
    pub fecha: String,
    pub hora: String,
    pub indice: u32,
    pub tipo: String,
    pub campo: String,
    pub valor_antes: String,
    pub valor_despues: String,
}

/// Bucket totals in a year report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub verde: u32,
    pub amarillo: u32,
    pub rojo: u32,
    pub pendiente: u32,
}

/// One day line in a year report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDayInfo {
    pub fecha: String,
    #[serde(rename = "idLiturgico")]
    pub id_liturgico: String,
    pub verde: u32,
    pub amarillo: u32,
    pub rojo: u32,
    pub pendiente: u32,
}

/// API response for a year report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearReportResponse {
    pub totales: ReportTotals,
    #[serde(rename = "diasConFallos")]
    pub dias_con_fallos: Vec<ReportDayInfo>,
    #[serde(rename = "diasCompletos")]
    pub dias_completos: Vec<ReportDayInfo>,
}
