use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
