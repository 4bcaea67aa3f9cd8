// SPDX-License-Identifier: MPL-2.0
//! Per-row image slots with a fade-in once the bytes arrive.
//!
//! Slots are keyed by content id and tagged with the page [`Generation`]
//! they were created for, so images requested for an earlier page are
//! ignored when they land.

use super::state::Generation;
use crate::config::defaults::CROSSFADE_MS;
use crate::domain::gallery::GalleryItem;
use crate::error::FetchError;
use iced::widget::image;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Load state of one row's image.
#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready {
        handle: image::Handle,
        shown_at: Instant,
        /// Fade progress in `0.0..=1.0`.
        opacity: f32,
    },
    Failed,
}

impl Slot {
    #[must_use]
    pub fn is_fading(&self) -> bool {
        matches!(self, Slot::Ready { opacity, .. } if *opacity < 1.0)
    }
}

/// Image to fetch for a freshly loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub content_id: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct Thumbnails {
    generation: Option<Generation>,
    slots: HashMap<String, Slot>,
}

impl Thumbnails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every slot and opens one per item of the new page.
    ///
    /// Returns the images that need fetching, one per distinct content id.
    pub fn reset(&mut self, generation: Generation, items: &[GalleryItem]) -> Vec<ImageRequest> {
        self.generation = Some(generation);
        self.slots.clear();

        let mut requests = Vec::with_capacity(items.len());
        for item in items {
            if self.slots.contains_key(item.content_id()) {
                continue;
            }
            self.slots
                .insert(item.content_id().to_string(), Slot::Loading);
            requests.push(ImageRequest {
                content_id: item.content_id().to_string(),
                url: item.image_url().to_string(),
            });
        }
        requests
    }

    pub fn clear(&mut self) {
        self.generation = None;
        self.slots.clear();
    }

    /// Stores a finished image fetch. Returns `false` when it was dropped.
    pub fn resolve(
        &mut self,
        generation: Generation,
        content_id: &str,
        result: Result<image::Handle, FetchError>,
        now: Instant,
    ) -> bool {
        if self.generation != Some(generation) {
            return false;
        }
        let Some(slot) = self.slots.get_mut(content_id) else {
            return false;
        };

        *slot = match result {
            Ok(handle) => Slot::Ready {
                handle,
                shown_at: now,
                opacity: 0.0,
            },
            Err(error) => {
                tracing::debug!(content_id, %error, "gallery image failed");
                Slot::Failed
            }
        };
        true
    }

    /// Advances every running fade to `now`.
    pub fn tick(&mut self, now: Instant) {
        let duration = Duration::from_millis(CROSSFADE_MS);
        for slot in self.slots.values_mut() {
            if let Slot::Ready {
                shown_at, opacity, ..
            } = slot
            {
                if *opacity < 1.0 {
                    *opacity = fade_progress(now.saturating_duration_since(*shown_at), duration);
                }
            }
        }
    }

    #[must_use]
    pub fn slot(&self, content_id: &str) -> Option<&Slot> {
        self.slots.get(content_id)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slots.values().any(Slot::is_fading)
    }
}

fn fade_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
