use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub price_from: i32,
    pub duration: String,
    pub category: String,
    pub whatsapp_message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactInquiryDoc {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service_type: String,
    /// At least 10 characters.
    pub description: String,
    pub preferred_date: Option<String>,
    /// Defaults to `Regular Service`.
    pub urgency: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiryDoc {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service_type: String,
    pub description: String,
    pub preferred_date: Option<String>,
    pub urgency: String,
    pub status: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct ValidationIssueDoc { pub code: String, pub path: Vec<String>, pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub message: String, pub errors: Option<Vec<ValidationIssueDoc>> }

#[derive(ToSchema)]
pub struct StatusUpdateDoc { pub status: String }

#[derive(ToSchema)]
pub struct LinkDoc { pub url: String }

#[derive(ToSchema)]
pub struct ChatLinkDoc { pub message: String, pub url: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestDoc {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub preferred_date: Option<String>,
    pub urgency: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contact::list_inquiries,
        crate::routes::contact::create_inquiry,
        crate::routes::services::list_services,
        crate::routes::services::get_service,
        crate::routes::services::service_whatsapp_link,
        crate::routes::inquiries::get_inquiry,
        crate::routes::inquiries::update_status,
        crate::routes::whatsapp::quote_link,
        crate::routes::whatsapp::emergency_link,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            NewContactInquiryDoc,
            ContactInquiryDoc,
            ValidationIssueDoc,
            ErrorDoc,
            StatusUpdateDoc,
            LinkDoc,
            ChatLinkDoc,
            QuoteRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contact"),
        (name = "services"),
        (name = "inquiries"),
        (name = "whatsapp")
    )
)]
pub struct ApiDoc;
