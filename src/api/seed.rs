use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::SharedState;

// GET /seed
pub async fn seed(Extension(state): Extension<SharedState>) -> (StatusCode, Json<Value>) {
    match crate::seed::run(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Database seeded successfully" })),
        ),
        Err(err) => {
            error!(error = %format!("{err:#}"), "Seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("{err:#}") })),
            )
        }
    }
}
