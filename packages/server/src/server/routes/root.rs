use axum::Json;
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the Pick A Childcare API";

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness banner
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
