//! Auth DTOs for the client/server boundary.
//!
//! Brewery and envelope types live in `saves::wire` and are shared with the
//! server directly; only the auth endpoints have client-specific shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User returned by `/api/auth/me` and `/api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Body of `POST /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub username: String,
}

/// Response of `POST /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}
