use serde::{Deserialize, Serialize};

/// One entry of the service catalog shown on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Icon class name rendered by the frontend, e.g. `fas fa-snowflake`.
    pub icon: String,
    /// Starting price in whole currency units; `0` means "quote on request".
    pub price_from: i32,
    pub duration: String,
    pub category: String,
    /// Pre-filled chat text for this service's "Chat on WhatsApp" button.
    pub whatsapp_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub price_from: i32,
    pub duration: String,
    pub category: String,
    pub whatsapp_message: String,
}

impl NewService {
    pub fn with_id(self, id: i32) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            price_from: self.price_from,
            duration: self.duration,
            category: self.category,
            whatsapp_message: self.whatsapp_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let svc = NewService {
            name: "Gas Refills".into(),
            description: "d".into(),
            icon: "fas fa-wind".into(),
            price_from: 400,
            duration: "1-2 hours typical".into(),
            category: "gas".into(),
            whatsapp_message: "Hi".into(),
        }
        .with_id(4);
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["priceFrom"], 400);
        assert_eq!(json["whatsappMessage"], "Hi");
        assert!(json.get("price_from").is_none());
    }
}
