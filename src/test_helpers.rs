use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::booking::{BookingAccepted, BookingFormData};
use crate::domain::property::{Address, Property};
use crate::domain::review::{Review, ReviewUser};
use crate::error::Result;
use crate::ports::rental_api::RentalApi;

type PropertiesFn = Box<dyn Fn() -> Result<Vec<Property>> + Send + Sync>;
type PropertyFn = Box<dyn Fn(&str) -> Result<Option<Property>> + Send + Sync>;
type ReviewsFn = Box<dyn Fn(&str) -> Result<Vec<Review>> + Send + Sync>;
type BookingFn = Box<dyn Fn(&BookingFormData) -> Result<BookingAccepted> + Send + Sync>;

/// How often each endpoint was hit.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub properties: AtomicUsize,
    pub property: AtomicUsize,
    pub reviews: AtomicUsize,
    pub bookings: AtomicUsize,
}

#[allow(clippy::struct_field_names)]
pub struct MockRentalApi {
    properties_fn: Mutex<PropertiesFn>,
    property_fn: Mutex<PropertyFn>,
    reviews_fn: Mutex<ReviewsFn>,
    booking_fn: Mutex<BookingFn>,
    calls: Arc<CallCounts>,
}

impl Default for MockRentalApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRentalApi {
    pub fn new() -> Self {
        Self {
            properties_fn: Mutex::new(Box::new(|| Ok(vec![]))),
            property_fn: Mutex::new(Box::new(|id| {
                Ok(Some(make_property(id, &format!("Test Property {id}"), 100.0)))
            })),
            reviews_fn: Mutex::new(Box::new(|_| Ok(vec![]))),
            booking_fn: Mutex::new(Box::new(|_| Ok(BookingAccepted { status: 201 }))),
            calls: Arc::new(CallCounts::default()),
        }
    }

    pub fn calls(&self) -> Arc<CallCounts> {
        Arc::clone(&self.calls)
    }

    #[must_use]
    pub fn with_properties(
        self,
        f: impl Fn() -> Result<Vec<Property>> + Send + Sync + 'static,
    ) -> Self {
        *self.properties_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_property(
        self,
        f: impl Fn(&str) -> Result<Option<Property>> + Send + Sync + 'static,
    ) -> Self {
        *self.property_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_reviews(
        self,
        f: impl Fn(&str) -> Result<Vec<Review>> + Send + Sync + 'static,
    ) -> Self {
        *self.reviews_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_booking(
        self,
        f: impl Fn(&BookingFormData) -> Result<BookingAccepted> + Send + Sync + 'static,
    ) -> Self {
        *self.booking_fn.lock().unwrap() = Box::new(f);
        self
    }
}

#[async_trait]
impl RentalApi for MockRentalApi {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        self.calls.properties.fetch_add(1, Ordering::SeqCst);
        let f = self.properties_fn.lock().unwrap();
        f()
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        self.calls.property.fetch_add(1, Ordering::SeqCst);
        let f = self.property_fn.lock().unwrap();
        f(id)
    }

    async fn get_reviews(&self, property_id: &str) -> Result<Vec<Review>> {
        self.calls.reviews.fetch_add(1, Ordering::SeqCst);
        let f = self.reviews_fn.lock().unwrap();
        f(property_id)
    }

    async fn submit_booking(&self, booking: &BookingFormData) -> Result<BookingAccepted> {
        self.calls.bookings.fetch_add(1, Ordering::SeqCst);
        let f = self.booking_fn.lock().unwrap();
        f(booking)
    }
}

pub fn make_property(id: &str, name: &str, price: f64) -> Property {
    Property {
        id: id.into(),
        name: name.into(),
        address: Address {
            city: "Austin".into(),
            country: "US".into(),
        },
        price,
        rating: 4.5,
        image: None,
        description: None,
    }
}

pub fn make_review(id: &str, author: &str, rating: f64) -> Review {
    Review {
        id: id.into(),
        user: ReviewUser {
            name: author.into(),
            avatar: None,
        },
        rating,
        comment: "Lovely stay".into(),
        date: "2025-01-15T10:00:00Z".into(),
    }
}
