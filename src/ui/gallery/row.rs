// SPDX-License-Identifier: MPL-2.0
//! One gallery row: the cropped image box, the title, and a caption line.

use super::component::Message;
use super::thumbnails::Slot;
use crate::domain::gallery::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use chrono::{NaiveDate, NaiveDateTime};
use iced::widget::{container, text, Column, Container, Image, Text};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

/// Separator between caption parts.
const CAPTION_SEPARATOR: &str = " · ";

/// Formats `galCreatedtime` (`YYYYMMDDhhmmss`) as a calendar date.
#[must_use]
pub fn format_created(raw: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y%m%d%H%M%S")
        .ok()
        .map(|created| created.format("%Y-%m-%d").to_string())
}

/// Formats `galPhotographyMonth` (`YYYYMM`) as `YYYY-MM`.
#[must_use]
pub fn format_month(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.len() != 6 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{raw}01"), "%Y%m%d")
        .ok()
        .map(|month| month.format("%Y-%m").to_string())
}

/// Caption parts for a row, in display order. Blank fields are skipped.
#[must_use]
pub fn caption_parts(item: &GalleryItem, i18n: &I18n) -> Vec<String> {
    let details = item.details();
    let present = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let mut parts = Vec::new();
    if let Some(name) = present(&details.photographer) {
        parts.push(i18n.tr_with_args("gallery-photographer", &[("name", name.into())]));
    }
    if let Some(location) = present(&details.photography_location) {
        parts.push(i18n.tr_with_args("gallery-location", &[("location", location.into())]));
    }
    if let Some(month) = present(&details.photography_month) {
        let month = format_month(&month).unwrap_or(month);
        parts.push(i18n.tr_with_args("gallery-taken", &[("month", month.into())]));
    }
    if let Some(created) = present(&details.created_time) {
        let date = format_created(&created).unwrap_or(created);
        parts.push(i18n.tr_with_args("gallery-created", &[("date", date.into())]));
    }
    parts
}

pub fn view<'a>(item: &'a GalleryItem, slot: Option<&'a Slot>, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(image_box(slot, i18n))
        .push(Text::new(item.title()).size(typography::BODY_LG));

    let parts = caption_parts(item, i18n);
    if !parts.is_empty() {
        column = column.push(
            Text::new(parts.join(CAPTION_SEPARATOR))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );
    }

    column.into()
}

fn image_box<'a>(slot: Option<&'a Slot>, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        Some(Slot::Ready {
            handle, opacity, ..
        }) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .opacity(*opacity)
            .into(),
        Some(Slot::Failed) => placeholder(i18n.tr("gallery-image-failed")),
        Some(Slot::Loading) | None => placeholder(i18n.tr("gallery-image-loading")),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .clip(true)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
