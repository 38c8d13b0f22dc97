use axum::response::Json;
use serde_json::{Value, json};

/// Lets the user check the login server is up before opening the browser.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
