// SPDX-License-Identifier: MPL-2.0
//! Busy indicator drawn on a canvas: a faint ring with a rotating half arc.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const STROKE_WIDTH: f32 = 3.0;

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = 0.12;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    size: f32,
}

impl AnimatedSpinner {
    /// Spinner with its arc starting at `rotation` radians past twelve o'clock.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            rotation,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;
        let color = theme.extended_palette().primary.base.color;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.25, ..color }),
        );

        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
