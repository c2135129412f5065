//! The inquiry intake endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, MethodRouter},
    Json,
};

use models::ContactInquiry;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::AppState;

/// `GET` lists, `POST` creates, `OPTIONS` answers preflight, anything else is 405.
pub fn method_router() -> MethodRouter<AppState> {
    get(list_inquiries)
        .post(create_inquiry)
        .options(preflight)
        .fallback(method_not_allowed)
}

/// Preflight answer: 200 with an empty body. The route layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(get, path = "/api/contact", tag = "contact", responses((status = 200, description = "All stored inquiries", body = [crate::openapi::ContactInquiryDoc])))]
pub async fn list_inquiries(State(state): State<AppState>) -> Result<Json<Vec<ContactInquiry>>, JsonApiError> {
    Ok(Json(state.inquiries.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = crate::openapi::NewContactInquiryDoc,
    responses(
        (status = 201, description = "Inquiry stored", body = crate::openapi::ContactInquiryDoc),
        (status = 400, description = "Missing body or invalid input", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_inquiry(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, JsonApiError> {
    match state.inquiries.submit_raw(&body).await {
        Ok(created) => {
            metrics::INQUIRIES_CREATED_TOTAL.inc();
            Ok((StatusCode::CREATED, Json(created)))
        }
        Err(e) => {
            if e.validation_issues().is_some() {
                metrics::INQUIRY_REJECTIONS_TOTAL.inc();
            }
            Err(e.into())
        }
    }
}

pub async fn method_not_allowed() -> JsonApiError {
    JsonApiError::method_not_allowed()
}
