use serde::{Deserialize, Deserializer, Serialize};

/// Shown when a property comes back without an image.
pub const DEFAULT_PROPERTY_IMAGE: &str = "/assets/Home/heroSection.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub address: Address,
    /// Nightly price in dollars.
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Property {
    pub fn image_or_default(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_PROPERTY_IMAGE,
        }
    }

    /// Path of this property's detail page.
    pub fn detail_path(&self) -> String {
        format!("/property/{}", self.id)
    }
}

/// Accepts `"42"` as well as `42` for identifiers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lake_house() -> Property {
        Property {
            id: "1".into(),
            name: "Lake House".into(),
            address: Address {
                city: "Austin".into(),
                country: "US".into(),
            },
            price: 120.0,
            rating: 4.0,
            image: None,
            description: None,
        }
    }

    #[test]
    fn deserialize_minimal_property() {
        let json = r#"{"id":"1","name":"Lake House","price":120,"rating":4,"address":{"city":"Austin","country":"US"}}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property, lake_house());
    }

    #[test]
    fn deserialize_numeric_id() {
        let json = r#"{"id":7,"name":"Loft","price":80.5,"rating":4.5,"address":{"city":"Lyon","country":"FR"}}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, "7");
        assert!((property.price - 80.5).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let json = r#"{"id":"1","name":"Lake House","price":120,"rating":4,"address":{"city":"Austin","country":"US"},"offers":{"bed":"3"}}"#;
        assert!(serde_json::from_str::<Property>(json).is_ok());
    }

    #[test]
    fn deserialize_missing_address_fails() {
        let json = r#"{"id":"1","name":"Lake House","price":120,"rating":4}"#;
        assert!(serde_json::from_str::<Property>(json).is_err());
    }

    #[test]
    fn image_falls_back_to_default() {
        let mut property = lake_house();
        assert_eq!(property.image_or_default(), DEFAULT_PROPERTY_IMAGE);
        property.image = Some(String::new());
        assert_eq!(property.image_or_default(), DEFAULT_PROPERTY_IMAGE);
        property.image = Some("https://img.example.com/lake.jpg".into());
        assert_eq!(
            property.image_or_default(),
            "https://img.example.com/lake.jpg"
        );
    }

    #[test]
    fn address_display() {
        assert_eq!(lake_house().address.to_string(), "Austin, US");
    }

    #[test]
    fn detail_path_uses_id() {
        assert_eq!(lake_house().detail_path(), "/property/1");
    }
}
