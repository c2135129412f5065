use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static INQUIRIES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("site_inquiries_created_total", "Contact inquiries accepted and stored")
        .expect("register inquiries_created_total")
});

pub static INQUIRY_REJECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("site_inquiry_rejections_total", "Contact submissions rejected by validation")
        .expect("register inquiry_rejections_total")
});

pub static INQUIRY_STATUS_UPDATES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("site_inquiry_status_updates_total", "Inquiry status transitions applied")
        .expect("register inquiry_status_updates_total")
});

/// Touch every counter so they are exported at zero before first use.
pub fn init() {
    Lazy::force(&INQUIRIES_CREATED_TOTAL);
    Lazy::force(&INQUIRY_REJECTIONS_TOTAL);
    Lazy::force(&INQUIRY_STATUS_UPDATES_TOTAL);
}

/// Prometheus text exposition of the default registry.
pub fn render() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let families = prometheus::gather();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&families, &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("encode metrics: {e}"));
    }
    match String::from_utf8(buf) {
        Ok(s) => (StatusCode::OK, s),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics not utf-8: {e}")),
    }
}
