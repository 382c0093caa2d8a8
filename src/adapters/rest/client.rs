use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::adapters::rest::payload;
use crate::config::types::ApiConfig;
use crate::domain::booking::{BookingAccepted, BookingFormData};
use crate::domain::property::Property;
use crate::domain::review::Review;
use crate::error::{RentalError, Result};
use crate::ports::rental_api::RentalApi;

/// `RentalApi` over the backend's JSON REST endpoints.
pub struct HttpRentalApi {
    http: Client,
    base_url: Url,
}

impl HttpRentalApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(RentalError::Config(format!(
                "api.base_url is not a base URL: {}",
                config.base_url
            )));
        }

        Ok(Self { http, base_url })
    }

    /// Appends percent-encoded path segments to the configured base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RentalError::Config(format!("api.base_url is not a base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        debug!(url = %url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RentalError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        trace!(url = %url, body = %body, "response body");
        Ok(body)
    }
}

#[async_trait]
impl RentalApi for HttpRentalApi {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        let url = self.endpoint(&["api", "properties"])?;
        let body = self.get_text(url).await?;
        payload::parse_properties(&body)
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        let url = self.endpoint(&["api", "properties", id])?;
        let body = self.get_text(url).await?;
        payload::parse_property(&body)
    }

    async fn get_reviews(&self, property_id: &str) -> Result<Vec<Review>> {
        let url = self.endpoint(&["api", "properties", property_id, "reviews"])?;
        let body = self.get_text(url).await?;
        payload::parse_reviews(&body)
    }

    async fn submit_booking(&self, booking: &BookingFormData) -> Result<BookingAccepted> {
        let url = self.endpoint(&["api", "bookings"])?;
        debug!(url = %url, "POST booking");

        let response = self.http.post(url.clone()).json(booking).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RentalError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(BookingAccepted {
            status: status.as_u16(),
        })
    }
}
