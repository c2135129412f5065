use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use models::Service;
use service::whatsapp::whatsapp_url;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LinkOutput {
    pub url: String,
}

async fn find(state: &AppState, id: i32) -> Result<Service, JsonApiError> {
    state
        .store
        .get_service(id)
        .await
        .map_err(JsonApiError::from)?
        .ok_or_else(|| JsonApiError::not_found("service not found"))
}

#[utoipa::path(get, path = "/api/services", tag = "services", responses((status = 200, description = "Service catalog", body = [crate::openapi::ServiceDoc])))]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, JsonApiError> {
    Ok(Json(state.store.get_services().await?))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Id is not a number", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Service>, JsonApiError> {
    let Path(id) = id?;
    find(&state, id).await.map(Json)
}

/// Chat link pre-filled with the service's own message.
#[utoipa::path(
    get,
    path = "/api/services/{id}/whatsapp",
    tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deep link", body = crate::openapi::LinkDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn service_whatsapp_link(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<LinkOutput>, JsonApiError> {
    let Path(id) = id?;
    let svc = find(&state, id).await?;
    let url = whatsapp_url(&state.business.whatsapp_phone, &svc.whatsapp_message);
    Ok(Json(LinkOutput { url }))
}
