use actix_web::{HttpResponse, Result};
use serde_json::json;

/// Liveness probe; does not touch the database
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
