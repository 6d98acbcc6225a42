// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Horas review system.
//!
//! This crate stores the liturgical calendar, per-element review state,
//! the append-only audit trail and user accounts. It is built on
//! Diesel over `SQLite`.
//!
//! ## Atomicity
//!
//! A review change and its audit entry are written in a single
//! transaction via [`Persistence::apply_transition`]. There is no code
//! path that updates an element without appending to the trail, and a
//! failed audit write rolls the element change back.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases so they can be
//! executed in parallel without interference.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use horas::TransitionResult;
use horas_audit::AuditEntry;
use horas_domain::{CalendarDate, Day, DayStructure};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod backend;
mod data_models;
mod diesel_schema;
mod error;
pub mod mutations;
pub mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{SessionData, UserData};
pub use error::PersistenceError;
pub use queries::users::verify_password;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so
/// tests are isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the review state, audit trail and users.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique shared in-memory database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Calendar & days
    // ========================================================================

    /// Seeds a day from its calendar structure.
    ///
    /// Existing days are left untouched.
    ///
    /// # Returns
    ///
    /// `true` if the day was created, `false` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn seed_day(&mut self, structure: &DayStructure) -> Result<bool, PersistenceError> {
        mutations::calendar::seed_day(&mut self.conn, structure)
    }

    /// Retrieves a day with its full review state.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DayNotFound` if the date has not
    /// been seeded.
    pub fn get_day(&mut self, date: CalendarDate) -> Result<Day, PersistenceError> {
        queries::day::get_day(&mut self.conn, date)
    }

    /// Lists every year with at least one seeded day, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_years(&mut self) -> Result<Vec<i32>, PersistenceError> {
        queries::day::list_years(&mut self.conn)
    }

    /// Retrieves every day of a year, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error if any day fails to load.
    pub fn get_days_for_year(&mut self, year: i32) -> Result<Vec<Day>, PersistenceError> {
        queries::day::get_days_for_year(&mut self.conn, year)
    }

    // ========================================================================
    // Transitions & audit trail
    // ========================================================================

    /// Persists a transition result atomically.
    ///
    /// The element write and the audit append land in one transaction.
    ///
    /// # Returns
    ///
    /// The entry ID assigned to the persisted audit entry.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is written in
    /// that case.
    pub fn apply_transition(&mut self, result: &TransitionResult) -> Result<i64, PersistenceError> {
        mutations::transition::apply_transition(&mut self.conn, result)
    }

    /// Retrieves the full audit trail, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_audit_log(&mut self) -> Result<Vec<AuditEntry>, PersistenceError> {
        queries::audit::get_audit_log(&mut self.conn)
    }

    /// Retrieves the audit trail for one liturgical day, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_audit_log_for_day(
        &mut self,
        date: CalendarDate,
    ) -> Result<Vec<AuditEntry>, PersistenceError> {
        queries::audit::get_audit_log_for_day(&mut self.conn, date)
    }

    // ========================================================================
    // Users & sessions
    // ========================================================================

    /// Creates a new user with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the username exists.
    pub fn create_user(
        &mut self,
        username: &str,
        display_name: &str,
        password: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_user(&mut self.conn, username, display_name, password, role)
    }

    /// Looks up a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// Looks up a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// Lists every user, ascending by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<UserData>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }

    /// Updates the last login timestamp for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// Creates a session for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// Looks up a session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::users::get_session_by_token(&mut self.conn, session_token)
    }

    /// Deletes a session by token, logging the user out.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::users::delete_session(&mut self.conn, session_token)
    }

    /// Deletes every session that expired before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::users::delete_expired_sessions(&mut self.conn, now)
    }
}
