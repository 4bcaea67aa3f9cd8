// SPDX-License-Identifier: MPL-2.0
//! Load controller for the gallery screen.
//!
//! The controller owns the [`ViewState`] and decides when a page fetch may be
//! issued. It performs no I/O: starting a load returns an [`Effect`] that the
//! component turns into an async task, and the task's result is handed back
//! through [`LoadController::resolve`].
//!
//! # State transitions
//!
//! ```text
//! Loading --(Ok(items))--> Loaded(items)
//! Loading --(Err(e))-----> Failed(message)
//! Failed  --(retry)------> Loading
//! Loaded  --(retry)------> Loading
//! ```
//!
//! Each fetch is tagged with a [`Generation`]. Only the result carrying the
//! generation of the fetch currently in flight is applied; anything else, or
//! any result arriving after [`LoadController::detach`], is dropped.

use crate::application::port::PageResult;
use crate::domain::gallery::{GalleryItem, PageRequest, PageSize};
use crate::error::FetchError;

/// What the gallery screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is pending (or about to be issued on mount).
    Loading,
    /// The last fetch failed with this user-facing message.
    Failed(String),
    /// The last fetch succeeded with these items, in server order.
    Loaded(Vec<GalleryItem>),
}

impl ViewState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Identifies one fetch request issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch `request` and report the result back with `generation`.
    Fetch {
        generation: Generation,
        request: PageRequest,
    },
}

/// Outcome of feeding a fetch result back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result replaced the view state.
    Applied,
    /// The result was dropped without touching the view state.
    Discarded,
}

#[derive(Debug)]
pub struct LoadController {
    state: ViewState,
    /// Typed cause of the current `Failed` state, kept for localized rendering.
    failure: Option<FetchError>,
    request: PageRequest,
    issued: u64,
    in_flight: Option<Generation>,
    attached: bool,
}

impl LoadController {
    /// Creates a controller showing `Loading` with nothing fetched yet.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            state: ViewState::Loading,
            failure: None,
            request: PageRequest::first(page_size),
            issued: 0,
            in_flight: None,
            attached: true,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Typed error behind a `Failed` state.
    #[must_use]
    pub fn failure(&self) -> Option<&FetchError> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Generation of the fetch currently awaited, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Issues the first fetch when the screen appears.
    ///
    /// Does nothing while a fetch is already in flight.
    pub fn start(&mut self) -> Effect {
        self.begin()
    }

    /// Re-issues the fetch after a failure (or to refresh a loaded list).
    ///
    /// Does nothing while a fetch is already in flight.
    pub fn retry(&mut self) -> Effect {
        self.begin()
    }

    fn begin(&mut self) -> Effect {
        if !self.attached {
            tracing::debug!("gallery detached; ignoring load request");
            return Effect::None;
        }
        if let Some(generation) = self.in_flight {
            tracing::debug!(
                generation = generation.value(),
                "gallery fetch already in flight"
            );
            return Effect::None;
        }

        self.issued += 1;
        let generation = Generation(self.issued);
        self.in_flight = Some(generation);
        self.state = ViewState::Loading;
        self.failure = None;

        Effect::Fetch {
            generation,
            request: self.request,
        }
    }

    /// Applies the result of the fetch identified by `generation`.
    pub fn resolve(&mut self, generation: Generation, result: PageResult) -> Resolution {
        if !self.attached {
            tracing::debug!(
                generation = generation.value(),
                "dropping gallery result after detach"
            );
            return Resolution::Discarded;
        }
        if self.in_flight != Some(generation) {
            tracing::debug!(
                generation = generation.value(),
                "dropping stale gallery result"
            );
            return Resolution::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "gallery page loaded");
                self.failure = None;
                self.state = ViewState::Loaded(items);
            }
            Err(error) => {
                tracing::warn!(%error, "gallery page failed");
                self.state = ViewState::Failed(error.user_message());
                self.failure = Some(error);
            }
        }
        Resolution::Applied
    }

    /// Stops accepting results. Called when the screen goes away.
    pub fn detach(&mut self) {
        self.attached = false;
        self.in_flight = None;
    }
}

impl Default for LoadController {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
