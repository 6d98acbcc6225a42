// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and session queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{SessionData, UserData};
use crate::diesel_schema::{sessions, users};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    username: String,
    display_name: String,
    password_hash: String,
    role: String,
    created_at: Option<String>,
    last_login_at: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    user_id: i64,
    created_at: Option<String>,
    expires_at: String,
}

impl From<UserRow> for UserData {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            display_name: row.display_name,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

/// Looks up a user by username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by username: {}", username);

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::username.eq(username))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Looks up a user by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserData>, PersistenceError> {
    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every user, ascending by username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<UserData>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .order(users::username.asc())
        .select(UserRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Verifies a plain-text password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if verification itself fails; a wrong password is
/// `Ok(false)`.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}

/// Looks up a session by its token.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let result: Result<SessionRow, diesel::result::Error> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(SessionData {
            session_id: row.session_id,
            session_token: row.session_token,
            user_id: row.user_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
