//! Back-office access to single inquiries.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;

use models::ContactInquiry;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = "inquiries",
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry", body = crate::openapi::ContactInquiryDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_inquiry(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ContactInquiry>, JsonApiError> {
    let Path(id) = id?;
    state
        .inquiries
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("inquiry not found"))
}

#[utoipa::path(
    patch,
    path = "/api/inquiries/{id}/status",
    tag = "inquiries",
    params(("id" = i32, Path, description = "Inquiry id")),
    request_body = crate::openapi::StatusUpdateDoc,
    responses(
        (status = 200, description = "Updated inquiry", body = crate::openapi::ContactInquiryDoc),
        (status = 400, description = "Missing or blank status, or a body that is not JSON", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<StatusInput>, JsonRejection>,
) -> Result<Json<ContactInquiry>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let updated = state.inquiries.update_status(id, &input.status).await?;
    metrics::INQUIRY_STATUS_UPDATES_TOTAL.inc();
    Ok(Json(updated))
}
