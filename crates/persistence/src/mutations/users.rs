// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and session mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{sessions, users};
use crate::error::PersistenceError;

/// Creates a new user.
///
/// The password is hashed with bcrypt before storage.
///
/// # Errors
///
/// Returns an error if hashing fails or if the username already
/// exists.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    display_name: &str,
    password: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating user with username: {}, display_name: {}, role: {}",
        username, display_name, role
    );

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::display_name.eq(display_name),
            users::password_hash.eq(&password_hash),
            users::role.eq(role),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, "User created successfully");
    Ok(user_id)
}

/// Updates the last login timestamp for a user.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for user ID: {}", user_id);

    diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set(users::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Creates a session for a user.
///
/// # Arguments
///
/// * `session_token` - The opaque token handed to the client
/// * `user_id` - The user the session belongs to
/// * `expires_at` - Expiry as an ISO-8601 timestamp
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    user_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(
        "Creating session for user ID: {} with expiration: {}",
        user_id, expires_at
    );

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;
    debug!(session_id, user_id, "Session created");
    Ok(session_id)
}

/// Deletes a session by token, logging the user out.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
        .execute(conn)?;
    Ok(())
}

/// Deletes every session that expired before `now`.
///
/// # Arguments
///
/// * `now` - The current time as an ISO-8601 timestamp
///
/// # Returns
///
/// The number of sessions removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let deleted = diesel::delete(sessions::table.filter(sessions::expires_at.lt(now)))
        .execute(conn)?;
    if deleted > 0 {
        debug!("Deleted {} expired sessions", deleted);
    }
    Ok(deleted)
}
