use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::property::Property;
use crate::ports::rental_api::RentalApi;
use crate::view::components::property_detail::PropertyDetail;
use crate::view::components::review_section::ReviewSection;
use crate::view::router::{Navigator, Route};
use crate::view::state::{LoadState, Loader};

pub const PROPERTY_LOADING: &str = "Loading property details...";
pub const PROPERTY_FAILED: &str = "Could not find property details.";
pub const PROPERTY_MISSING: &str = "Property not found";
pub const RETURN_TO_LISTINGS: &str = "Return to listings";

/// Detail page: one property plus its reviews, both keyed by the route id.
/// Reviews are requested only once the property itself has resolved.
pub struct PropertyPage {
    api: Arc<dyn RentalApi>,
    navigator: Navigator,
    id: watch::Sender<Option<String>>,
    property: Loader<Option<Property>>,
    reviews: Arc<ReviewSection>,
}

impl PropertyPage {
    /// `id` is `None` while the route has not resolved it yet.
    pub fn mount(api: Arc<dyn RentalApi>, navigator: Navigator, id: Option<String>) -> Self {
        let (tx, _) = watch::channel(None);
        let page = Self {
            reviews: Arc::new(ReviewSection::mount(Arc::clone(&api), None)),
            api,
            navigator,
            id: tx,
            property: Loader::new("property"),
        };
        page.property.hold();
        page.set_id(id);
        page
    }

    /// Re-runs the property fetch when the id changes; the reviews follow
    /// once the new property is found.
    pub fn set_id(&self, id: Option<String>) {
        let changed = self.id.send_if_modified(|current| {
            if *current == id {
                return false;
            }
            current.clone_from(&id);
            true
        });
        if !changed {
            return;
        }

        self.reviews.set_property_id(None);
        match id {
            Some(id) => {
                let api = Arc::clone(&self.api);
                let reviews = Arc::clone(&self.reviews);
                self.property.load(
                    async move {
                        let property = api.get_property(&id).await?;
                        if property.is_some() {
                            reviews.set_property_id(Some(id));
                        }
                        Ok(property)
                    },
                    PROPERTY_FAILED,
                );
            }
            None => self.property.hold(),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.id.borrow().clone()
    }

    pub fn state(&self) -> LoadState<Option<Property>> {
        self.property.state()
    }

    pub fn reviews(&self) -> &ReviewSection {
        &self.reviews
    }

    pub fn is_not_found(&self) -> bool {
        self.property
            .with_state(|state| !state.is_loading() && resolved(state).is_none())
    }

    /// The not-found view's button. Returns `false` when the button is not shown.
    pub fn return_to_listings(&self) -> bool {
        if !self.is_not_found() {
            return false;
        }
        self.navigator.push(Route::Home);
        true
    }

    /// The review fetch is started by the property fetch, so it is awaited second.
    pub async fn settled(&self) {
        self.property.settled().await;
        self.reviews.settled().await;
    }

    pub fn teardown(&self) {
        self.property.teardown();
        self.reviews.teardown();
    }

    pub fn render(&self) -> String {
        self.property.with_state(|state| {
            if state.is_loading() {
                return format!("{PROPERTY_LOADING}\n");
            }
            match resolved(state) {
                Some(property) => format!(
                    "{}\n{}",
                    PropertyDetail::new(property),
                    self.reviews.render()
                ),
                None => format!(
                    "**{}**\n\n[{RETURN_TO_LISTINGS}](/)\n",
                    state.error().unwrap_or(PROPERTY_MISSING)
                ),
            }
        })
    }
}

/// The property to show, if the last attempt produced one and did not fail.
fn resolved(state: &LoadState<Option<Property>>) -> Option<&Property> {
    if state.error().is_some() {
        return None;
    }
    state.data().and_then(Option::as_ref)
}
