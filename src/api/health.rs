use axum::response::Json;
use serde_json::{Value, json};

/// Health probe for the callback server. Handy for checking that the
/// configured redirect URI actually reaches this process.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
