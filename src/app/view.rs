// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::{widget::Container, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Container::new(ctx.gallery.view(ctx.i18n).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
