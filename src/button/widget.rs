// SPDX-License-Identifier: GPL-3.0-only

//! Canvas renderer for the shutter button
//!
//! The canvas program is a thin translation layer: it turns raw mouse and
//! touch events into [`PointerEvent`]s for the host to route back into
//! [`ShutterButton::handle_pointer`], and paints the current session state.
//! All drawing goes through the control's cache, which the state machine
//! invalidates whenever something visible changed.

use super::{ButtonMode, PointerEvent, ShutterButton};
use cosmic::iced::alignment;
use cosmic::iced::{Length, Pixels, Point, Radians, Rectangle, Size, Vector, mouse, touch};
use cosmic::widget::canvas::{
    self, Canvas, Frame, LineCap, Path, Stroke, Text, event, path, stroke,
};
use std::f32::consts::FRAC_PI_2;

impl ShutterButton {
    /// Build the canvas element for this control.
    ///
    /// The returned element produces raw [`PointerEvent`]s; the host maps
    /// them into its own message type and feeds them back through
    /// [`ShutterButton::handle_pointer`].
    pub fn view(&self) -> cosmic::Element<'_, PointerEvent> {
        let size = self.preferred_size();

        Canvas::new(ShutterCanvas { button: self })
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }
}

/// Canvas program borrowing the control for one frame
struct ShutterCanvas<'a> {
    button: &'a ShutterButton,
}

impl ShutterCanvas<'_> {
    /// Paint back-to-front: the translucent outer disc first, then the
    /// opaque shapes on top of it.
    fn paint(&self, frame: &mut Frame<cosmic::Renderer>, size: Size) {
        let style = self.button.style();
        let session = self.button.session();
        let geo = self.button.geometry(size);
        let (inner_radius, outer_radius) = self.button.radii(size);
        let (cx, cy) = geo.center();
        let center = Point::new(cx, cy);

        let (inner_color, outer_color) = match self.button.mode() {
            ButtonMode::Photo => (style.inner_color_photo, style.outer_color_photo),
            ButtonMode::Video => (style.inner_color_video, style.outer_color_video),
        };

        frame.fill(&Path::circle(center, outer_radius), outer_color);

        if inner_radius > 0.0 {
            frame.fill(&Path::circle(center, inner_radius), inner_color);
        }

        if self.button.mode() == ButtonMode::Video {
            // The stop cue square shares the inner circle's color, so at
            // rest it hides underneath the circle and only shows once the
            // press-scale animation shrinks the circle away.
            let side = geo.inner_square_size;
            let square = Path::rounded_rectangle(
                Point::new(cx - side / 2.0, cy - side / 2.0),
                Size::new(side, side),
                (side / 4.0).into(),
            );
            frame.fill(&square, inner_color);
        }

        if session.is_recording {
            self.paint_progress(frame, center, outer_radius, &geo);
            self.paint_timer(frame, center, outer_radius);
        }
    }

    fn paint_progress(
        &self,
        frame: &mut Frame<cosmic::Renderer>,
        center: Point,
        outer_radius: f32,
        geo: &super::geometry::Geometry,
    ) {
        let sweep = self.button.session().progress_degrees;
        if sweep <= 0.0 {
            return;
        }

        // The arc rides the middle of the band between the circles, starting
        // at twelve o'clock and sweeping clockwise.
        let start = -FRAC_PI_2;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius: outer_radius - geo.progress_bar_width / 2.0,
                start_angle: Radians(start),
                end_angle: Radians(start + sweep.to_radians()),
            });
        });

        frame.stroke(
            &arc,
            Stroke {
                style: stroke::Style::Solid(self.button.style().progress_color),
                width: geo.progress_bar_width,
                line_cap: LineCap::Round,
                ..Stroke::default()
            },
        );
    }

    fn paint_timer(&self, frame: &mut Frame<cosmic::Renderer>, center: Point, outer_radius: f32) {
        let style = self.button.style();

        frame.fill_text(Text {
            content: self.button.session().timer_label.clone(),
            position: Point::new(center.x, center.y - (outer_radius + style.timer_text_size)),
            color: style.timer_text_color,
            size: Pixels(style.timer_text_size),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

impl canvas::Program<PointerEvent, cosmic::Theme, cosmic::Renderer> for ShutterCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<PointerEvent>) {
        let size = bounds.size();

        let pointer = match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|position| PointerEvent::pressed(position, size)),
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Releases outside the bounds still reach the state machine
                // so an armed press can disarm.
                cursor
                    .position()
                    .map(|position| {
                        PointerEvent::released(
                            position - Vector::new(bounds.x, bounds.y),
                            size,
                        )
                    })
                    .or(Some(PointerEvent::cancelled(size)))
            }
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(
                PointerEvent::pressed(position - Vector::new(bounds.x, bounds.y), size),
            ),
            canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(
                PointerEvent::released(position - Vector::new(bounds.x, bounds.y), size),
            ),
            canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                Some(PointerEvent::cancelled(size))
            }
            _ => None,
        };

        match pointer {
            Some(pointer) => (event::Status::Captured, Some(pointer)),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<cosmic::Renderer>> {
        let geometry = self
            .button
            .cache()
            .draw(renderer, bounds.size(), |frame| {
                self.paint(frame, bounds.size());
            });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_button = cursor
            .position_in(bounds)
            .is_some_and(|position| self.button.geometry(bounds.size()).hits_button(position.x, position.y));

        if over_button {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
