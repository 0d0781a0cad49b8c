//! User stub endpoints. Real authentication is out of scope; these return
//! canned identities so the rest of the flow has a user to work with.

use axum::Json;
use common::User;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// POST /users/login — stub login; accepts anything and returns a canned
/// user with a fresh token.
#[tracing::instrument(skip(req))]
pub async fn login(Json(req): Json<LoginRequest>) -> Json<LoginResponse> {
    let mut user = User::guest();
    if !req.email.is_empty() {
        user.email = req.email;
    }

    Json(LoginResponse {
        user,
        token: format!("token_{}", uuid::Uuid::new_v4().simple()),
    })
}

/// GET /users/current — stub current-user lookup; always the guest identity.
pub async fn current() -> Json<User> {
    Json(User::guest())
}
