//! Service layer for the site backend.
//! - `storage`: the record store capability and its in-memory variant.
//! - `catalog`: the fixed service catalog seeded at startup.
//! - `inquiry`: contact-form intake and status handling, independent of HTTP.
//! - `whatsapp`: chat deep links and pre-filled message text.

pub mod catalog;
pub mod errors;
pub mod inquiry;
pub mod storage;
pub mod whatsapp;
