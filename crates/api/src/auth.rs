// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use horas_audit::Actor;
use horas_persistence::{Persistence, SessionData, UserData, verify_password};
use time::{Duration, OffsetDateTime};

use crate::error::AuthError;

/// Roles for authorization.
///
/// Roles determine what actions an authenticated user may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Supervisor: manages accounts and reads the year reports.
    ///
    /// Supervisors may:
    /// - create user accounts
    /// - list existing accounts
    /// - generate year reports
    /// - everything a reviewer may do
    Supervisor,
    /// Reviewer: records review verdicts and observations.
    User,
}

impl Role {
    /// Returns the wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supervisor => "supervisor",
            Self::User => "usuario",
        }
    }

    /// Parses a role from its wire representation.
    pub(crate) fn parse_str(s: &str) -> Option<Self> {
        match s {
            "supervisor" => Some(Self::Supervisor),
            "usuario" => Some(Self::User),
            _ => None,
        }
    }
}

/// An authenticated user with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The stored account identifier.
    pub user_id: i64,
    /// The login username.
    pub username: String,
    /// The role assigned to this user.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(user_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }

    /// Converts this authenticated actor into an audit actor.
    ///
    /// Audit entries record the display name so the trail stays
    /// readable even if usernames change.
    #[must_use]
    pub fn to_audit_actor(&self, user: &UserData) -> Actor {
        Actor::new(self.user_id, user.display_name.clone())
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to create user accounts.
    ///
    /// Only supervisors may create accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the supervisor role.
    pub fn authorize_create_user(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Supervisor => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: String::from("create_user"),
                required_role: String::from("supervisor"),
            }),
        }
    }

    /// Checks if an actor is authorized to list user accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the supervisor role.
    pub fn authorize_list_users(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Supervisor => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: String::from("list_users"),
                required_role: String::from("supervisor"),
            }),
        }
    }

    /// Checks if an actor is authorized to read the audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the supervisor role.
    pub fn authorize_view_audit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Supervisor => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: String::from("view_audit"),
                required_role: String::from("supervisor"),
            }),
        }
    }

    /// Checks if an actor is authorized to list years with data.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the supervisor role.
    pub fn authorize_list_years(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Supervisor => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: String::from("list_years"),
                required_role: String::from("supervisor"),
            }),
        }
    }

    /// Checks if an actor is authorized to generate a year report.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the supervisor role.
    pub fn authorize_year_report(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Supervisor => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: String::from("year_report"),
                required_role: String::from("supervisor"),
            }),
        }
    }

    /// Checks if an actor is authorized to record review changes.
    ///
    /// Every authenticated role may review.
    ///
    /// # Errors
    ///
    /// Never fails today; kept fallible so the call sites read like
    /// the other authorization checks.
    pub const fn authorize_record_review(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Authentication service for session-based login.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration time.
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates a user by username and password and opens a
    /// session.
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `user_data`).
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong or the session
    /// cannot be created. Unknown usernames and wrong passwords get
    /// the same reason so login failures don't enumerate accounts.
    pub fn login(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, UserData), AuthError> {
        let user: UserData = persistence
            .get_user_by_username(username)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid credentials"),
            })?;

        let password_ok = verify_password(password, &user.password_hash).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Password verification error: {e}"),
            }
        })?;
        if !password_ok {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid credentials"),
            });
        }

        let role: Role =
            Role::parse_str(&user.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", user.role),
            })?;

        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, user.user_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(user.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let actor = AuthenticatedActor::new(user.user_id, user.username.clone(), role);
        Ok((session_token, actor, user))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, UserData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Rfc3339,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: UserData = persistence
            .get_user_by_id(session.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;

        let role: Role =
            Role::parse_str(&user.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", user.role),
            })?;

        let actor = AuthenticatedActor::new(user.user_id, user.username.clone(), role);
        Ok((actor, user))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;
        Ok(())
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }
}
