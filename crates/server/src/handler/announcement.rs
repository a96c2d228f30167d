use crate::middleware::validate::SimpleValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use shared::domain::{
    request::CreateAnnouncementRequest,
    response::{ApiResponse, ErrorResponse, announcement::AnnouncementResponse},
};
use shared::state::AppState;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = "Announcement",
    responses(
        (status = 200, description = "List of announcements", body = ApiResponse<Vec<AnnouncementResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn get_announcements(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .announcement_service
        .get_announcements()
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = "Announcement",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement created successfully", body = ApiResponse<AnnouncementResponse>),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn create_announcement(
    State(data): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .announcement_service
        .create_announcement(&body)
        .await
    {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = "Announcement",
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 204, description = "Announcement deleted successfully"),
        (status = 404, description = "Announcement not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn delete_announcement(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .announcement_service
        .delete_announcement(id)
        .await
    {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

pub fn announcement_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/announcements", get(get_announcements))
        .route("/api/announcements", post(create_announcement))
        .route("/api/announcements/{id}", delete(delete_announcement))
        .with_state(app_state)
}
