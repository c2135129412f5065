//! Shared plumbing for the site backend: logging setup, startup checks,
//! small response types and the admin listener.

pub mod admin_http;
pub mod env;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }
}
