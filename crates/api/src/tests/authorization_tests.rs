// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{make_user, seeded_persistence};
use crate::auth::{AuthorizationService, Role};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{CreateUserRequest, SetStatusRequest};

#[test]
fn test_reviewer_cannot_create_users() {
    let mut persistence = seeded_persistence();
    let (reviewer, _) = make_user(&mut persistence, "ana", Role::User);

    let err = handlers::create_user(
        &mut persistence,
        &reviewer,
        &CreateUserRequest {
            usuario: "nuevo".to_string(),
            nombre: "Nuevo".to_string(),
            password: "secreta".to_string(),
            rol: "usuario".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_reviewer_cannot_read_year_report() {
    let mut persistence = seeded_persistence();
    let (reviewer, _) = make_user(&mut persistence, "ana", Role::User);

    let err = handlers::year_report(&mut persistence, &reviewer, 2025).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_reviewer_cannot_list_users() {
    let mut persistence = seeded_persistence();
    let (reviewer, _) = make_user(&mut persistence, "ana", Role::User);

    let err = handlers::list_users(&mut persistence, &reviewer).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_reviewer_cannot_read_audit_or_years() {
    let mut persistence = seeded_persistence();
    let (reviewer, _) = make_user(&mut persistence, "ana", Role::User);

    let err = handlers::get_audit_log(&mut persistence, &reviewer).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));

    let err = handlers::list_years(&mut persistence, &reviewer).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_both_roles_may_record_reviews() {
    let mut persistence = seeded_persistence();
    let (reviewer, reviewer_data) = make_user(&mut persistence, "ana", Role::User);
    let (supervisor, supervisor_data) = make_user(&mut persistence, "jefa", Role::Supervisor);

    assert!(AuthorizationService::authorize_record_review(&reviewer).is_ok());
    assert!(AuthorizationService::authorize_record_review(&supervisor).is_ok());

    handlers::set_status(
        &mut persistence,
        &reviewer,
        &reviewer_data,
        "2025-01-06",
        "laudes",
        0,
        &SetStatusRequest {
            estado: "verde".to_string(),
        },
    )
    .unwrap();

    handlers::set_status(
        &mut persistence,
        &supervisor,
        &supervisor_data,
        "2025-01-06",
        "laudes",
        1,
        &SetStatusRequest {
            estado: "amarillo".to_string(),
        },
    )
    .unwrap();

    assert_eq!(
        handlers::get_audit_log(&mut persistence, &supervisor)
            .unwrap()
            .len(),
        2
    );
}
