// SPDX-License-Identifier: MPL-2.0
//! Error panel shown in place of content when a load fails.
//!
//! The panel stacks, top to bottom:
//! - a round badge in the error accent color
//! - a title
//! - the user-facing message
//! - an optional action button (the gallery uses it for "retry")
//! - optional collapsible technical details
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
//!
//! centered_error_view(
//!     ErrorDisplay::new()
//!         .title("Something went wrong")
//!         .message("server error: 500")
//!         .details("Server error: HTTP 500")
//!         .action("Try again", Message::RetryPressed),
//! )
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Border, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details shown behind the toggle.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Adds the action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    /// Localized labels for the details toggle.
    #[must_use]
    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(badge());

        if let Some(title_text) = self.title {
            content = content.push(
                Text::new(title_text)
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(Container::new(action_btn).padding(spacing::XS));
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_label = if self.show_details {
                    self.hide_details_label
                } else {
                    self.show_details_label
                };
                content = content.push(
                    button(Text::new(toggle_label).size(typography::CAPTION))
                        .style(button::text)
                        .on_press(toggle_msg),
                );
            }

            if self.show_details {
                let details_body = Text::new(details_text)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_body),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(palette.background.weak.color)),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

fn badge<Message: 'static>() -> Element<'static, Message> {
    Container::new(
        Text::new("!")
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            }),
    )
    .width(Length::Fixed(sizing::ICON_XL))
    .height(Length::Fixed(sizing::ICON_XL))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::ERROR_500)),
        border: Border {
            radius: (sizing::ICON_XL / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    })
    .into()
}

/// Centers the panel in all available space.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        ToggleDetails,
    }

    #[test]
    fn builder_records_every_part() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("Something went wrong")
            .message("server error: 500")
            .details("Server error: HTTP 500")
            .details_visible(true)
            .action("Try again", TestMessage::Retry)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("Something went wrong"));
        assert_eq!(display.message.as_deref(), Some("server error: 500"));
        assert_eq!(display.details.as_deref(), Some("Server error: HTTP 500"));
        assert!(display.show_details);
        assert_eq!(display.action_label.as_deref(), Some("Try again"));
        assert_eq!(display.action_message, Some(TestMessage::Retry));
    }

    #[test]
    fn details_are_hidden_by_default() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new();
        assert!(!display.show_details);
        assert!(display.action_message.is_none());
    }

    #[test]
    fn details_labels_can_be_localized() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::new().details_labels("자세히 보기", "숨기기");

        assert_eq!(display.show_details_label, "자세히 보기");
        assert_eq!(display.hide_details_label, "숨기기");
    }
}
