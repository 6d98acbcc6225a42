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

//! API boundary layer for the Horas review system.
//!
//! Handlers in this crate take validated wire requests, run the core
//! transition or report logic, and persist the result. Transport
//! concerns (HTTP, sessions as headers) live in the server crate.

pub mod auth;
pub mod calendar;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
