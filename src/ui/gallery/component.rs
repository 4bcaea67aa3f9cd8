// SPDX-License-Identifier: MPL-2.0
//! Gallery screen component: wires the load controller and image slots to
//! async tasks running against a [`GallerySource`](crate::application::port::GallerySource).

use super::state::{Effect, Generation, LoadController, Resolution, ViewState};
use super::thumbnails::{ImageRequest, Thumbnails};
use super::view::{self, ViewContext};
use crate::application::port::{PageResult, SharedGallerySource};
use crate::domain::gallery::PageSize;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::widgets::animated_spinner;
use iced::widget::image;
use iced::{Element, Task};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Retry button in the error panel, or refresh in the header.
    RetryPressed,
    ToggleErrorDetails,
    PageLoaded {
        generation: Generation,
        result: PageResult,
    },
    ImageLoaded {
        generation: Generation,
        content_id: String,
        result: Result<image::Handle, FetchError>,
    },
    /// Animation frame for the spinner and image fades.
    Tick(Instant),
}

pub struct State {
    controller: LoadController,
    thumbnails: Thumbnails,
    source: SharedGallerySource,
    spinner_rotation: f32,
    show_error_details: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("controller", &self.controller)
            .field("thumbnails", &self.thumbnails)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(source: SharedGallerySource, page_size: PageSize) -> Self {
        Self {
            controller: LoadController::new(page_size),
            thumbnails: Thumbnails::new(),
            source,
            spinner_rotation: 0.0,
            show_error_details: false,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &LoadController {
        &self.controller
    }

    #[must_use]
    pub fn thumbnails(&self) -> &Thumbnails {
        &self.thumbnails
    }

    /// Issues the initial page fetch. Call once when the screen is mounted.
    pub fn start(&mut self) -> Task<Message> {
        let effect = self.controller.start();
        self.perform(effect)
    }

    /// Stops applying results; in-flight tasks are left to finish and dropped.
    pub fn detach(&mut self) {
        self.controller.detach();
        self.thumbnails.clear();
    }

    /// Whether the tick subscription is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.state().is_loading() || self.thumbnails.is_animating()
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RetryPressed => {
                let effect = self.controller.retry();
                self.perform(effect)
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Task::none()
            }
            Message::PageLoaded { generation, result } => {
                if self.controller.resolve(generation, result) == Resolution::Discarded {
                    return Task::none();
                }
                self.show_error_details = false;
                match self.controller.state() {
                    ViewState::Loaded(items) => {
                        let requests = self.thumbnails.reset(generation, items);
                        self.fetch_images(generation, requests)
                    }
                    _ => {
                        self.thumbnails.clear();
                        Task::none()
                    }
                }
            }
            Message::ImageLoaded {
                generation,
                content_id,
                result,
            } => {
                self.thumbnails
                    .resolve(generation, &content_id, result, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                if self.controller.state().is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                self.thumbnails.tick(now);
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(ViewContext {
            i18n,
            controller: &self.controller,
            thumbnails: &self.thumbnails,
            spinner_rotation: self.spinner_rotation,
            show_error_details: self.show_error_details,
        })
    }

    fn perform(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Fetch {
                generation,
                request,
            } => {
                tracing::info!(
                    generation = generation.value(),
                    page = request.page.value(),
                    rows = request.size.value(),
                    "fetching gallery page"
                );
                Task::perform(self.source.fetch_page(request), move |result| {
                    Message::PageLoaded { generation, result }
                })
            }
        }
    }

    fn fetch_images(&self, generation: Generation, requests: Vec<ImageRequest>) -> Task<Message> {
        Task::batch(requests.into_iter().map(|request| {
            let content_id = request.content_id;
            Task::perform(self.source.fetch_image(&request.url), move |result| {
                Message::ImageLoaded {
                    generation,
                    content_id: content_id.clone(),
                    result: result.map(image::Handle::from_bytes),
                }
            })
        }))
    }
}
