use async_trait::async_trait;

use crate::domain::booking::{BookingAccepted, BookingFormData};
use crate::domain::property::Property;
use crate::domain::review::Review;
use crate::error::Result;

/// The rental backend as seen by the views.
///
/// Any transport error or non-2xx status surfaces as `Err`; views make no
/// distinction between failure kinds.
#[async_trait]
pub trait RentalApi: Send + Sync {
    /// `GET /api/properties`
    async fn list_properties(&self) -> Result<Vec<Property>>;

    /// `GET /api/properties/{id}`. `Ok(None)` when the backend answers with an
    /// empty or `null` body.
    async fn get_property(&self, id: &str) -> Result<Option<Property>>;

    /// `GET /api/properties/{id}/reviews`
    async fn get_reviews(&self, property_id: &str) -> Result<Vec<Review>>;

    /// `POST /api/bookings`
    async fn submit_booking(&self, booking: &BookingFormData) -> Result<BookingAccepted>;
}
