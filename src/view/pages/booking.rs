use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::domain::booking::{BookingField, BookingFormData};
use crate::ports::rental_api::RentalApi;
use crate::view::router::{Navigator, Route};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const BOOKING_FAILED: &str = "Failed to submit booking. Please check your payment details.";
pub const CONFIRMED_TITLE: &str = "Booking Confirmed!";
pub const REDIRECT_NOTICE: &str = "Redirecting you to the home page...";

#[derive(Debug, Clone, Default)]
pub struct BookingView {
    pub form: BookingFormData,
    pub submitting: bool,
    pub error: Option<&'static str>,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    InvalidEmail,
    Failed,
    /// A submission is already running or the booking is already confirmed.
    Ignored,
}

pub struct BookingPage {
    api: Arc<dyn RentalApi>,
    navigator: Navigator,
    redirect_delay: Duration,
    view: watch::Sender<BookingView>,
    redirect: Mutex<Option<JoinHandle<()>>>,
    torn_down: AtomicBool,
}

impl BookingPage {
    pub fn mount(api: Arc<dyn RentalApi>, navigator: Navigator, redirect_delay: Duration) -> Self {
        let (view, _) = watch::channel(BookingView::default());
        Self {
            api,
            navigator,
            redirect_delay,
            view,
            redirect: Mutex::new(None),
            torn_down: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> BookingView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BookingView> {
        self.view.subscribe()
    }

    /// Keystroke into one field. Ignored once the form has been replaced by
    /// the confirmation view.
    pub fn input(&self, field: BookingField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.view.send_if_modified(|view| {
            if view.confirmed {
                return false;
            }
            view.form.set(field, value);
            true
        })
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let mut outcome = None;
        let mut snapshot = None;
        self.view.send_if_modified(|view| {
            if view.submitting || view.confirmed {
                outcome = Some(SubmitOutcome::Ignored);
                return false;
            }
            if !view.form.has_valid_email() {
                view.error = Some(INVALID_EMAIL);
                outcome = Some(SubmitOutcome::InvalidEmail);
                return true;
            }
            view.submitting = true;
            view.error = None;
            snapshot = Some(view.form.clone());
            true
        });
        if let Some(outcome) = outcome {
            return outcome;
        }
        let Some(form) = snapshot else {
            return SubmitOutcome::Ignored;
        };

        let confirmed = match self.api.submit_booking(&form).await {
            Ok(accepted) if accepted.is_confirmed() => true,
            Ok(accepted) => {
                warn!(status = accepted.status, "booking endpoint answered without confirming");
                false
            }
            Err(e) => {
                error!(error = %e, "booking submission failed");
                false
            }
        };

        self.view.send_modify(|view| {
            view.submitting = false;
            if confirmed {
                view.confirmed = true;
            } else {
                view.error = Some(BOOKING_FAILED);
            }
        });

        if confirmed {
            info!("booking confirmed");
            self.schedule_redirect();
            SubmitOutcome::Confirmed
        } else {
            SubmitOutcome::Failed
        }
    }

    fn schedule_redirect(&self) {
        if self.torn_down.load(Ordering::Acquire) {
            return;
        }
        let navigator = self.navigator.clone();
        let delay = self.redirect_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.push(Route::Home);
        });
        self.replace_redirect(Some(handle));
    }

    /// Cancels a pending redirect.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::Release);
        self.replace_redirect(None);
    }

    fn replace_redirect(&self, next: Option<JoinHandle<()>>) {
        match self.redirect.lock() {
            Ok(mut slot) => {
                if let Some(previous) = std::mem::replace(&mut *slot, next) {
                    previous.abort();
                }
            }
            Err(_) => {
                if let Some(handle) = next {
                    handle.abort();
                }
                error!("booking redirect lock poisoned, redirect cancelled");
            }
        }
    }

    pub fn render(&self) -> String {
        render_booking(&self.view.borrow())
    }
}

impl Drop for BookingPage {
    fn drop(&mut self) {
        if let Ok(slot) = self.redirect.get_mut()
            && let Some(handle) = slot.take()
        {
            handle.abort();
        }
    }
}

fn render_booking(view: &BookingView) -> String {
    if view.confirmed {
        return format!("## {CONFIRMED_TITLE}\n{REDIRECT_NOTICE}\n");
    }

    let mut text = String::from("# Complete Your Booking\n\n");
    for field in BookingField::IDENTITY {
        render_field(&mut text, &view.form, field);
    }
    text.push_str("\n## Payment Information\n\n");
    for field in BookingField::PAYMENT {
        render_field(&mut text, &view.form, field);
    }
    if let Some(error) = view.error {
        let _ = write!(text, "\n**{error}**\n");
    }
    if view.submitting {
        text.push_str("\n[ Processing... ] (disabled)\n");
    } else {
        text.push_str("\n[ Confirm & Pay ]\n");
    }
    text
}

fn render_field(text: &mut String, form: &BookingFormData, field: BookingField) {
    let _ = writeln!(
        text,
        "- {} (`{}`): {}",
        field.placeholder(),
        field.name(),
        form.get(field)
    );
}
