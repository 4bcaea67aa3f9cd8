// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::ui::gallery;
use iced::{window, Task};

/// Mutable state the handlers may touch.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub window_id: &'a mut Option<window::Id>,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    ctx.gallery.handle_message(message).map(Message::Gallery)
}

/// Detaches the gallery so late results are dropped, then closes the window.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    *ctx.window_id = Some(id);
    ctx.gallery.detach();
    tracing::debug!("window close requested");
    window::close(id)
}
