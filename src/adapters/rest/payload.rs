//! Decoding of REST response bodies.
//!
//! Bodies are stored verbatim; the only leniency is that an empty or `null`
//! single-property body decodes to `None`.

use serde::de::DeserializeOwned;

use crate::domain::property::Property;
use crate::domain::review::Review;
use crate::error::{RentalError, Result};

pub fn parse_properties(body: &str) -> Result<Vec<Property>> {
    decode(body, "property list")
}

pub fn parse_property(body: &str) -> Result<Option<Property>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body, "property")
}

pub fn parse_reviews(body: &str) -> Result<Vec<Review>> {
    decode(body, "review list")
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| RentalError::Parse {
        reason: format!("{what}: {e}"),
    })
}
