use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::types::BookingConfig;
use crate::ports::rental_api::RentalApi;
use crate::view::pages::booking::BookingPage;
use crate::view::pages::home::HomePage;
use crate::view::pages::not_found::NotFoundPage;
use crate::view::pages::property::PropertyPage;
use crate::view::router::{Navigator, Route};

pub enum CurrentPage {
    Home(HomePage),
    Property(PropertyPage),
    Booking(BookingPage),
    NotFound(NotFoundPage),
}

impl CurrentPage {
    pub fn render(&self) -> String {
        match self {
            Self::Home(page) => page.render(),
            Self::Property(page) => page.render(),
            Self::Booking(page) => page.render(),
            Self::NotFound(page) => page.render(),
        }
    }

    pub async fn settled(&self) {
        match self {
            Self::Home(page) => page.settled().await,
            Self::Property(page) => page.settled().await,
            Self::Booking(_) | Self::NotFound(_) => {}
        }
    }

    pub fn teardown(&self) {
        match self {
            Self::Home(page) => page.teardown(),
            Self::Property(page) => page.teardown(),
            Self::Booking(page) => page.teardown(),
            Self::NotFound(_) => {}
        }
    }
}

/// Application shell: owns the mounted page and applies navigation requests.
pub struct App {
    api: Arc<dyn RentalApi>,
    navigator: Navigator,
    requests: mpsc::UnboundedReceiver<Route>,
    redirect_delay: Duration,
    current: Option<(Route, CurrentPage)>,
}

impl App {
    pub fn new(api: Arc<dyn RentalApi>, booking: &BookingConfig) -> Self {
        let (navigator, requests) = Navigator::channel();
        Self {
            api,
            navigator,
            requests,
            redirect_delay: booking.redirect_delay(),
            current: None,
        }
    }

    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn route(&self) -> Option<&Route> {
        self.current.as_ref().map(|(route, _)| route)
    }

    pub fn page(&self) -> Option<&CurrentPage> {
        self.current.as_ref().map(|(_, page)| page)
    }

    pub fn booking(&self) -> Option<&BookingPage> {
        match self.page() {
            Some(CurrentPage::Booking(page)) => Some(page),
            _ => None,
        }
    }

    /// Mounts the page for `route`, tearing down the previous one. Moving
    /// between two detail routes keeps the page and only swaps its id.
    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "navigate");

        if let Route::Property { id } = &route
            && let Some((current, CurrentPage::Property(page))) = self.current.as_mut()
        {
            page.set_id(Some(id.clone()));
            *current = route.clone();
            return;
        }

        if let Some((_, page)) = self.current.take() {
            page.teardown();
        }

        let page = match &route {
            Route::Home => CurrentPage::Home(HomePage::mount(Arc::clone(&self.api))),
            Route::Property { id } => CurrentPage::Property(PropertyPage::mount(
                Arc::clone(&self.api),
                self.navigator.clone(),
                Some(id.clone()),
            )),
            Route::Booking => CurrentPage::Booking(BookingPage::mount(
                Arc::clone(&self.api),
                self.navigator.clone(),
                self.redirect_delay,
            )),
            Route::NotFound { path } => CurrentPage::NotFound(NotFoundPage::mount(path.clone())),
        };
        self.current = Some((route, page));
    }

    /// Mounts the listing page if nothing is mounted yet. Returns whether it did.
    pub fn ensure_mounted(&mut self) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.navigate(Route::Home);
        true
    }

    /// Applies queued navigation requests in order; returns how many were applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(route) = self.requests.try_recv() {
            self.navigate(route);
            applied += 1;
        }
        applied
    }

    /// Waits for the mounted page's outstanding fetches.
    pub async fn settled(&self) {
        if let Some(page) = self.page() {
            page.settled().await;
        }
    }

    /// The "Return to listings" button of the not-found views.
    pub fn return_to_listings(&self) -> bool {
        match self.page() {
            Some(CurrentPage::Property(page)) => page.return_to_listings(),
            Some(CurrentPage::NotFound(_)) => {
                self.navigator.push(Route::Home);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self) -> String {
        self.page()
            .map_or_else(|| "Nothing mounted yet.\n".into(), CurrentPage::render)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some((_, page)) = self.current.take() {
            page.teardown();
        }
    }
}
