//! WhatsApp click-to-chat links and the text pre-filled into them.
//!
//! Everything here is pure string building; no request is ever sent.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters JavaScript's `encodeURIComponent` leaves alone, removed from the
/// escape set so links match what the browser side produces.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CHAT_BASE: &str = "https://wa.me/";

/// Build `https://wa.me/{phone}?text={message}` with the message percent-encoded.
///
/// # Examples
/// ```
/// let url = service::whatsapp::whatsapp_url("26772123456", "Hi there & welcome");
/// assert_eq!(url, "https://wa.me/26772123456?text=Hi%20there%20%26%20welcome");
/// ```
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("{CHAT_BASE}{phone}?text={}", utf8_percent_encode(message, COMPONENT))
}

/// Contact-form fields a visitor may have filled in before choosing to chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub preferred_date: Option<String>,
    pub urgency: Option<String>,
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Multi-line quote request addressed to the business.
pub fn service_quote_message(business_name: &str, req: &QuoteRequest) -> String {
    format!(
        "Hi {business_name}!\n\n\
         I'd like to request a service quote:\n\n\
         Name: {}\n\
         Phone: {}\n\
         Service Type: {}\n\
         Description: {}\n\
         Preferred Date: {}\n\
         Urgency: {}\n\n\
         Please provide a quote for this service. Thank you!",
        or_fallback(&req.name, "Not provided"),
        or_fallback(&req.phone, "Not provided"),
        or_fallback(&req.service_type, "Not specified"),
        or_fallback(&req.description, "Not provided"),
        or_fallback(&req.preferred_date, "Flexible"),
        or_fallback(&req.urgency, models::DEFAULT_URGENCY),
    )
}

pub fn simple_service_message(service_type: &str) -> String {
    format!("Hi, I need {service_type} service. Can you help?")
}

pub fn emergency_message() -> String {
    "Hi, I have an emergency appliance repair situation. Please help!".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        let url = whatsapp_url("267", "a-b_c.d!e~f*g'h(i)j k/l?m=n#o\np");
        assert_eq!(url, "https://wa.me/267?text=a-b_c.d!e~f*g'h(i)j%20k%2Fl%3Fm%3Dn%23o%0Ap");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(whatsapp_url("1", "café"), "https://wa.me/1?text=caf%C3%A9");
    }

    #[test]
    fn quote_message_uses_fallbacks() {
        let msg = service_quote_message("Aaron Cool Appliance Services", &QuoteRequest::default());
        assert!(msg.starts_with("Hi Aaron Cool Appliance Services!\n\n"));
        assert!(msg.contains("\nName: Not provided\n"));
        assert!(msg.contains("\nService Type: Not specified\n"));
        assert!(msg.contains("\nPreferred Date: Flexible\n"));
        assert!(msg.contains("\nUrgency: Regular Service\n"));
        assert!(msg.ends_with("Thank you!"));
    }

    #[test]
    fn quote_message_uses_supplied_fields() {
        let req = QuoteRequest {
            name: Some("Neo".into()),
            service_type: Some("gas".into()),
            urgency: Some("Emergency".into()),
            description: Some("  ".into()),
            ..Default::default()
        };
        let msg = service_quote_message("Shop", &req);
        assert!(msg.contains("\nName: Neo\n"));
        assert!(msg.contains("\nService Type: gas\n"));
        assert!(msg.contains("\nUrgency: Emergency\n"));
        assert!(msg.contains("\nDescription: Not provided\n"));
    }

    #[test]
    fn short_messages() {
        assert_eq!(simple_service_message("appliance repair"), "Hi, I need appliance repair service. Can you help?");
        assert!(emergency_message().contains("emergency"));
    }
}
