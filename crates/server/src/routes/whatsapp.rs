use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use service::whatsapp::{emergency_message, service_quote_message, whatsapp_url, QuoteRequest};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatLink {
    pub message: String,
    pub url: String,
}

impl ChatLink {
    fn new(phone: &str, message: String) -> Self {
        let url = whatsapp_url(phone, &message);
        Self { message, url }
    }
}

/// Quote request text built from whatever form fields are filled in.
#[utoipa::path(
    post,
    path = "/api/whatsapp/quote",
    tag = "whatsapp",
    request_body = crate::openapi::QuoteRequestDoc,
    responses(
        (status = 200, description = "Message and deep link", body = crate::openapi::ChatLinkDoc),
        (status = 400, description = "Body is not a JSON object", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn quote_link(
    State(state): State<AppState>,
    req: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ChatLink>, JsonApiError> {
    let Json(req) = req?;
    let message = service_quote_message(&state.business.name, &req);
    Ok(Json(ChatLink::new(&state.business.whatsapp_phone, message)))
}

#[utoipa::path(get, path = "/api/whatsapp/emergency", tag = "whatsapp", responses((status = 200, description = "Message and deep link", body = crate::openapi::ChatLinkDoc)))]
pub async fn emergency_link(State(state): State<AppState>) -> Json<ChatLink> {
    Json(ChatLink::new(&state.business.whatsapp_phone, emergency_message()))
}
