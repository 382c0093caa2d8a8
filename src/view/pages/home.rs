use std::sync::Arc;

use crate::domain::property::Property;
use crate::ports::rental_api::RentalApi;
use crate::view::components::property_card::PropertyCard;
use crate::view::state::{LoadState, Loader};

pub const PROPERTIES_LOADING: &str = "Loading properties...";
pub const PROPERTIES_FAILED: &str = "Failed to load properties. Please try again later.";

/// Listing page: every property as a card, in the order the API returned them.
pub struct HomePage {
    properties: Loader<Vec<Property>>,
}

impl HomePage {
    pub fn mount(api: Arc<dyn RentalApi>) -> Self {
        let properties = Loader::new("home");
        properties.load(async move { api.list_properties().await }, PROPERTIES_FAILED);
        Self { properties }
    }

    pub fn state(&self) -> LoadState<Vec<Property>> {
        self.properties.state()
    }

    pub async fn settled(&self) {
        self.properties.settled().await;
    }

    pub fn teardown(&self) {
        self.properties.teardown();
    }

    pub fn render(&self) -> String {
        self.properties.with_state(|state| {
            if state.is_loading() {
                return format!("{PROPERTIES_LOADING}\n");
            }
            if let Some(error) = state.error() {
                return format!("{error}\n");
            }
            render_listing(state.data().map_or(&[][..], Vec::as_slice))
        })
    }
}

/// The loaded listing. An empty collection renders the heading alone.
pub fn render_listing(properties: &[Property]) -> String {
    let mut text = String::from("# Explore Listings\n");
    for property in properties {
        text.push('\n');
        text.push_str(&PropertyCard::new(property).to_string());
    }
    text
}
