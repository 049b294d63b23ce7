use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Cache, Frame, Program, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::dataset::Label;
use crate::mosaic::{ReviewPage, ReviewUnit};
use crate::Message;

const BADGE_TEXT_SIZE: f32 = 14.0;
const BADGE_HEIGHT: f32 = 18.0;
const BADGE_PADDING: f32 = 4.0;
/// Rough advance of one badge glyph, for sizing the badge background
const BADGE_CHAR_WIDTH: f32 = BADGE_TEXT_SIZE * 0.62;

const CLEAR_COLOR: Color = Color::from_rgb(0.0, 155.0 / 255.0, 0.0);
const CLOUDS_COLOR: Color = Color::from_rgb(0.0, 0.0, 155.0 / 255.0);
const CORRECTED_TEXT: Color = Color::from_rgb(1.0, 0.0, 0.0);

pub fn label_color(label: Label) -> Color {
    match label {
        Label::Clear => CLEAR_COLOR,
        Label::Clouds => CLOUDS_COLOR,
    }
}

/// Transparent layer over the thumbnails: draws the label badges and turns
/// left-button presses into `Message::Pressed`
pub struct BadgeOverlay<'a> {
    pub page: &'a ReviewPage,
    /// Cleared by the application whenever the session needs a redraw
    pub cache: &'a Cache,
}

impl Program<Message> for BadgeOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let badges = self.cache.draw(renderer, bounds.size(), |frame| {
            for unit in self.page.units() {
                draw_badges(frame, unit);
            }
        });

        vec![badges]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                return (canvas::event::Status::Captured, Some(Message::Pressed(position)));
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        let reviewable = cursor
            .position_in(bounds)
            .and_then(|p| self.page.unit_at(p.x, p.y))
            .is_some_and(|i| !self.page.units()[i].is_placeholder());

        if reviewable {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }
}

/// Label badge at the slot's top-left, plus "Corrected" at its bottom-left
fn draw_badges(frame: &mut Frame, unit: &ReviewUnit) {
    let slot = unit.slot();
    let left = slot.left as f32;

    if let Some(label) = unit.label() {
        let top_left = Point::new(left, slot.top as f32);
        badge(frame, top_left, label.as_str(), Color::WHITE, label_color(label));
    }

    if unit.is_corrected() {
        let top_left = Point::new(left, slot.bottom() as f32 - BADGE_HEIGHT);
        badge(frame, top_left, "Corrected", CORRECTED_TEXT, Color::BLACK);
    }
}

fn badge(frame: &mut Frame, top_left: Point, content: &str, text: Color, background: Color) {
    let width = content.chars().count() as f32 * BADGE_CHAR_WIDTH + 2.0 * BADGE_PADDING;
    frame.fill_rectangle(top_left, Size::new(width, BADGE_HEIGHT), background);
    frame.fill_text(Text {
        content: content.to_string(),
        position: Point::new(top_left.x + BADGE_PADDING, top_left.y + 2.0),
        color: text,
        size: Pixels(BADGE_TEXT_SIZE),
        ..Text::default()
    });
}
