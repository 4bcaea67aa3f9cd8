// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use crate::ui::gallery;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards window close requests so the gallery can detach first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Animation tick, active only while the spinner or an image fade is visible.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|now| Message::Gallery(gallery::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
