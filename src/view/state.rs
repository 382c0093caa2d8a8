//! Load/success/error lifecycle shared by every data-fetching view.
//!
//! A [`Loader`] owns one [`LoadState`] and at most one in-flight fetch. Every
//! call to [`Loader::load`] starts a new generation: the previous task is
//! aborted and, should it still complete, its result is discarded because its
//! generation no longer matches. Tearing the loader down works the same way,
//! so a view that is gone is never written to.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Snapshot of a view's data. Data and error from the previous attempt are
/// kept while a new attempt is loading.
#[derive(Debug, Clone)]
pub struct LoadState<T> {
    phase: Phase,
    data: Option<T>,
    error: Option<&'static str>,
    in_flight: bool,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            in_flight: false,
        }
    }
}

impl<T> LoadState<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Idle counts as loading: nothing has been shown yet.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether a request is outstanding for the current generation.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

pub struct Loader<T> {
    view: &'static str,
    state: Arc<watch::Sender<LoadState<T>>>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
    torn_down: AtomicBool,
}

impl<T> Loader<T>
where
    T: Send + Sync + 'static,
{
    /// `view` labels log lines.
    pub fn new(view: &'static str) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self {
            view,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
            torn_down: AtomicBool::new(false),
        }
    }

    /// Starts a new attempt, superseding any attempt still in flight.
    ///
    /// On failure the state records `failure` and the underlying error is
    /// logged. Must be called from within a Tokio runtime.
    pub fn load<F>(&self, fetch: F, failure: &'static str)
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        if self.torn_down.load(Ordering::Acquire) {
            debug!(view = self.view, "load ignored after teardown");
            return;
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            state.phase = Phase::Loading;
            state.in_flight = true;
        });
        debug!(view = self.view, generation, "loading");

        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let view = self.view;
        let handle = tokio::spawn(async move {
            let outcome = fetch.await;
            if let Err(ref e) = outcome {
                error!(view, generation, error = %e, "fetch failed");
            }
            state.send_if_modified(|state| {
                if current.load(Ordering::Acquire) != generation {
                    debug!(view, generation, "discarding stale response");
                    return false;
                }
                state.in_flight = false;
                match outcome {
                    Ok(value) => {
                        state.phase = Phase::Success;
                        state.data = Some(value);
                        state.error = None;
                    }
                    Err(_) => {
                        state.phase = Phase::Failure;
                        state.error = Some(failure);
                    }
                }
                true
            });
        });

        self.replace_task(Some(handle));
    }

    /// Enters `Loading` without issuing a request, e.g. while the identifier
    /// driving the fetch is not known yet.
    pub fn hold(&self) {
        self.invalidate(Some(Phase::Loading));
        self.replace_task(None);
    }

    /// Cancels the in-flight attempt and rejects any later one.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::Release);
        self.invalidate(None);
        self.replace_task(None);
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&LoadState<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.subscribe()
    }

    /// Waits until no request of the current generation is outstanding.
    pub async fn settled(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|state| !state.in_flight).await;
    }

    fn invalidate(&self, phase: Option<Phase>) {
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::AcqRel);
            state.in_flight = false;
            if let Some(phase) = phase {
                state.phase = phase;
            }
        });
    }

    fn replace_task(&self, next: Option<JoinHandle<()>>) {
        match self.task.lock() {
            Ok(mut slot) => {
                if let Some(previous) = std::mem::replace(&mut *slot, next) {
                    previous.abort();
                }
            }
            Err(_) => {
                // Stale results are still rejected by the generation check.
                error!(view = self.view, "loader task lock poisoned, cannot abort");
            }
        }
    }
}

impl<T: Clone> Loader<T> {
    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        if let Ok(slot) = self.task.get_mut()
            && let Some(task) = slot.take()
        {
            task.abort();
        }
    }
}
