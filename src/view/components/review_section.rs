use std::fmt::Write as _;
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::review::Review;
use crate::ports::rental_api::RentalApi;
use crate::view::state::{LoadState, Loader};

pub const REVIEWS_LOADING: &str = "Loading guest reviews...";
pub const REVIEWS_FAILED: &str = "Unable to load reviews at this time.";
pub const NO_REVIEWS: &str = "No reviews yet for this property.";

/// Guest reviews for one property, with a fetch lifecycle of its own.
pub struct ReviewSection {
    api: Arc<dyn RentalApi>,
    property_id: watch::Sender<Option<String>>,
    reviews: Loader<Vec<Review>>,
}

impl ReviewSection {
    /// Mounts the section; fetches right away if the id is known.
    pub fn mount(api: Arc<dyn RentalApi>, property_id: Option<String>) -> Self {
        let (tx, _) = watch::channel(None);
        let section = Self {
            api,
            property_id: tx,
            reviews: Loader::new("reviews"),
        };
        section.reviews.hold();
        section.set_property_id(property_id);
        section
    }

    /// Refetches when the id actually changes.
    pub fn set_property_id(&self, property_id: Option<String>) {
        let changed = self.property_id.send_if_modified(|current| {
            if *current == property_id {
                return false;
            }
            *current = property_id;
            true
        });
        if changed {
            self.refresh();
        }
    }

    pub fn property_id(&self) -> Option<String> {
        self.property_id.borrow().clone()
    }

    fn refresh(&self) {
        let Some(id) = self.property_id() else {
            self.reviews.hold();
            return;
        };
        let api = Arc::clone(&self.api);
        self.reviews
            .load(async move { api.get_reviews(&id).await }, REVIEWS_FAILED);
    }

    pub fn state(&self) -> LoadState<Vec<Review>> {
        self.reviews.state()
    }

    pub async fn settled(&self) {
        self.reviews.settled().await;
    }

    pub fn teardown(&self) {
        self.reviews.teardown();
    }

    pub fn render(&self) -> String {
        self.reviews.with_state(render_reviews)
    }
}

fn render_reviews(state: &LoadState<Vec<Review>>) -> String {
    if state.is_loading() {
        return format!("{REVIEWS_LOADING}\n");
    }
    if let Some(error) = state.error() {
        return format!("{error}\n");
    }

    let mut text = String::from("## Guest Reviews\n\n");
    let reviews = state.data().map_or(&[][..], Vec::as_slice);
    if reviews.is_empty() {
        let _ = writeln!(text, "_{NO_REVIEWS}_");
        return text;
    }
    for review in reviews {
        let _ = writeln!(
            text,
            "![{name}]({avatar}) **{name}** · {date}\n{stars}\n{comment}\n",
            name = review.user.name,
            avatar = review.avatar_or_default(),
            date = review.display_date(),
            stars = review.stars(),
            comment = review.comment,
        );
    }
    text
}
