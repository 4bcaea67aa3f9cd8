// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery screen from the controller's view state.

use super::component::Message;
use super::row;
use super::state::{LoadController, ViewState};
use super::thumbnails::Thumbnails;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, rule, scrollable, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Which of the screen's presentations a view state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Spinner,
    ErrorPanel,
    NoItems,
    List { rows: usize },
}

impl Presentation {
    #[must_use]
    pub fn of(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => Presentation::Spinner,
            ViewState::Failed(_) => Presentation::ErrorPanel,
            ViewState::Loaded(items) if items.is_empty() => Presentation::NoItems,
            ViewState::Loaded(items) => Presentation::List { rows: items.len() },
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a LoadController,
    pub thumbnails: &'a Thumbnails,
    pub spinner_rotation: f32,
    pub show_error_details: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.controller.state() {
        ViewState::Loading => loading(ctx.i18n, ctx.spinner_rotation),
        ViewState::Failed(message) => failed(
            ctx.i18n,
            message,
            ctx.controller.failure(),
            ctx.show_error_details,
        ),
        ViewState::Loaded(items) if items.is_empty() => centered(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .into(),
        ),
        ViewState::Loaded(items) => {
            let rows = items.iter().fold(
                Column::new()
                    .spacing(spacing::LG)
                    .padding(sizing::LIST_GUTTER)
                    .max_width(sizing::LIST_MAX_WIDTH),
                |column, item| {
                    column.push(row::view(
                        item,
                        ctx.thumbnails.slot(item.content_id()),
                        ctx.i18n,
                    ))
                },
            );

            let list = scrollable(
                Container::new(rows)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill);

            Column::new()
                .push(header(ctx.i18n, items.len()))
                .push(rule::horizontal(1))
                .push(list)
                .into()
        }
    }
}

/// Localized text for a failure, falling back to the controller's message.
#[must_use]
pub fn failure_text(i18n: &I18n, message: &str, failure: Option<&FetchError>) -> String {
    match failure {
        Some(error @ FetchError::Network(detail)) if !detail.trim().is_empty() => {
            i18n.tr_with_args(error.i18n_key(), &[("detail", detail.clone().into())])
        }
        Some(error @ FetchError::Server(status)) => {
            i18n.tr_with_args(error.i18n_key(), &[("status", (*status).into())])
        }
        Some(error @ (FetchError::Empty | FetchError::Decode(_))) => i18n.tr(error.i18n_key()),
        _ => message.to_string(),
    }
}

fn loading(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    centered(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(rotation).into_element())
            .push(Text::new(i18n.tr("gallery-loading")).size(typography::BODY))
            .into(),
    )
}

fn failed<'a>(
    i18n: &I18n,
    message: &str,
    failure: Option<&FetchError>,
    show_details: bool,
) -> Element<'a, Message> {
    let mut display = ErrorDisplay::new()
        .title(i18n.tr("gallery-error-title"))
        .message(failure_text(i18n, message, failure))
        .action(i18n.tr("gallery-retry-button"), Message::RetryPressed);

    if let Some(error) = failure {
        display = display
            .details(error.to_string())
            .details_visible(show_details)
            .details_labels(
                i18n.tr("gallery-error-show-details"),
                i18n.tr("gallery-error-hide-details"),
            )
            .on_toggle_details(Message::ToggleErrorDetails);
    }

    centered_error_view(display)
}

fn header(i18n: &I18n, count: usize) -> Element<'_, Message> {
    let count_label = i18n.tr_with_args("gallery-item-count", &[("count", count.into())]);

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("gallery-header")).size(typography::TITLE_SM))
        .push(
            Text::new(count_label)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    let refresh = button(Text::new(i18n.tr("gallery-refresh-button")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::primary)
        .on_press(Message::RetryPressed);

    Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(titles)
            .push(Space::new().width(Length::Fill))
            .push(refresh),
    )
    .padding([spacing::SM, sizing::LIST_GUTTER])
    .width(Length::Fill)
    .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
