use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SharedState;
use crate::auth::verify_password;
use crate::db::user_repo;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignedInUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct SigninResponse {
    pub ok: bool,
    pub user: SignedInUser,
}

// POST /api/signin
pub async fn signin(
    Extension(state): Extension<SharedState>,
    body: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<Json<SigninResponse>, AppError> {
    let Json(req) = body?;
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request("email is required"));
    }

    let user = user_repo::find_by_email(&state.db, req.email.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&user.password_hash, &req.password)? {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(SigninResponse {
        ok: true,
        user: SignedInUser {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}
