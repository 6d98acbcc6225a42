// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A stored user account.
///
/// `password_hash` is the bcrypt hash; callers verify credentials via
/// [`crate::queries::users::verify_password`] and must never expose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: Option<String>,
    pub expires_at: String,
}
