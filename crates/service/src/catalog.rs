//! The fixed service catalog.
//!
//! These six entries are what the page lists under "Our Services". They are
//! loaded into every new [`MemStorage`](crate::storage::MemStorage) in this
//! order, so their ids are 1 through 6.

use models::NewService;

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    price_from: i32,
    duration: &'static str,
    category: &'static str,
    whatsapp_message: &'static str,
}

const CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        name: "AC Installation & Repair",
        description: "Complete air conditioning services including installation, repair, maintenance, and emergency fixes for all brands.",
        icon: "fas fa-snowflake",
        price_from: 800,
        duration: "2-4 hours typical",
        category: "cooling",
        whatsapp_message: "Hi, I need AC installation/repair service. Can you provide a quote?",
    },
    CatalogEntry {
        name: "Refrigeration Services",
        description: "Expert repair for refrigerators, freezers, commercial cooling systems, and walk-in coolers.",
        icon: "fas fa-thermometer-half",
        price_from: 600,
        duration: "1-3 hours typical",
        category: "refrigeration",
        whatsapp_message: "Hi, I need refrigeration repair service. Can you help?",
    },
    CatalogEntry {
        name: "Compressor Replacement",
        description: "Professional compressor replacement and repair for AC units, refrigerators, and commercial systems.",
        icon: "fas fa-cogs",
        price_from: 1500,
        duration: "4-6 hours typical",
        category: "compressor",
        whatsapp_message: "Hi, I need compressor replacement service. Can you provide a quote?",
    },
    CatalogEntry {
        name: "Gas Refills (R134a, R410a)",
        description: "Professional refrigerant gas refills for all AC and refrigeration systems using quality R134a and R410a.",
        icon: "fas fa-wind",
        price_from: 400,
        duration: "1-2 hours typical",
        category: "gas",
        whatsapp_message: "Hi, I need gas refill service (R134a/R410a). Can you help?",
    },
    CatalogEntry {
        name: "Government & Public Services",
        description: "Specialized HVAC services for government buildings, schools, hospitals, and public facilities.",
        icon: "fas fa-building",
        price_from: 0,
        duration: "Project-based",
        category: "government",
        whatsapp_message: "Hi, I need government/public facility HVAC service. Can we discuss requirements?",
    },
    CatalogEntry {
        name: "24/7 Emergency Service",
        description: "Urgent repairs available 24/7 for critical cooling systems, commercial refrigeration, and emergency breakdowns.",
        icon: "fas fa-exclamation-triangle",
        price_from: 0,
        duration: "Available 24/7",
        category: "emergency",
        whatsapp_message: "Hi, I have an emergency appliance repair situation. Please help!",
    },
];

/// Creation inputs for the catalog, in seeding order.
///
/// # Examples
/// ```
/// let services = service::catalog::default_services();
/// assert_eq!(services.len(), 6);
/// assert_eq!(services[0].category, "cooling");
/// ```
pub fn default_services() -> Vec<NewService> {
    CATALOG
        .iter()
        .map(|e| NewService {
            name: e.name.to_string(),
            description: e.description.to_string(),
            icon: e.icon.to_string(),
            price_from: e.price_from,
            duration: e.duration.to_string(),
            category: e.category.to_string(),
            whatsapp_message: e.whatsapp_message.to_string(),
        })
        .collect()
}
