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
    request::CreateTopupRequest,
    response::{ApiResponse, ErrorResponse, topup::TopupResponse},
};
use shared::model::topup::TopupStatus;
use shared::state::AppState;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/topups",
    tag = "Topup",
    responses(
        (status = 200, description = "List of topup requests", body = ApiResponse<Vec<TopupResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn get_topups(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.get_topups().await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    get,
    path = "/api/topups/approved",
    tag = "Topup",
    responses(
        (status = 200, description = "List of approved topup requests", body = ApiResponse<Vec<TopupResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn get_approved_topups(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .topup_service
        .get_topups_by_status(TopupStatus::Approved)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    get,
    path = "/api/topups/declined",
    tag = "Topup",
    responses(
        (status = 200, description = "List of declined topup requests", body = ApiResponse<Vec<TopupResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn get_declined_topups(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .topup_service
        .get_topups_by_status(TopupStatus::Declined)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    get,
    path = "/api/topups/{id}",
    tag = "Topup",
    params(
        ("id" = i32, Path, description = "Topup ID")
    ),
    responses(
        (status = 200, description = "Topup details retrieved successfully", body = ApiResponse<TopupResponse>),
        (status = 404, description = "Topup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn get_topup(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.get_topup(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/topups",
    tag = "Topup",
    request_body = CreateTopupRequest,
    responses(
        (status = 201, description = "Topup request created in pending state", body = ApiResponse<TopupResponse>),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Referenced user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn create_topup(
    State(data): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTopupRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.create_topup(&body).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/topups/{id}/approve",
    tag = "Topup",
    params(
        ("id" = i32, Path, description = "Topup ID")
    ),
    responses(
        (status = 200, description = "Topup approved and wallet credited", body = ApiResponse<TopupResponse>),
        (status = 404, description = "Topup not found", body = ErrorResponse),
        (status = 409, description = "Topup already settled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn approve_topup(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.approve_topup(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/topups/{id}/decline",
    tag = "Topup",
    params(
        ("id" = i32, Path, description = "Topup ID")
    ),
    responses(
        (status = 200, description = "Topup declined", body = ApiResponse<TopupResponse>),
        (status = 404, description = "Topup not found", body = ErrorResponse),
        (status = 409, description = "Topup already settled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn decline_topup(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.decline_topup(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/topups/{id}",
    tag = "Topup",
    params(
        ("id" = i32, Path, description = "Topup ID")
    ),
    responses(
        (status = 204, description = "Topup deleted successfully"),
        (status = 404, description = "Topup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn delete_topup(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.topup_service.delete_topup(id).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err((e.status_code(), Json(json!(e)))),
    }
}

pub fn topup_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/topups", get(get_topups))
        .route("/api/topups", post(create_topup))
        .route("/api/topups/approved", get(get_approved_topups))
        .route("/api/topups/declined", get(get_declined_topups))
        .route("/api/topups/{id}", get(get_topup))
        .route("/api/topups/{id}", delete(delete_topup))
        .route("/api/topups/{id}/approve", post(approve_topup))
        .route("/api/topups/{id}/decline", post(decline_topup))
        .with_state(app_state)
}
