/// Widget tree for one review page and the status bar
use iced::widget::canvas::{Cache, Canvas};
use iced::widget::{container, horizontal_space, image, row, text, Space, Stack};
use iced::{Color, ContentFit, Element, Length, Padding};

use super::canvas::BadgeOverlay;
use crate::mosaic::{ReviewPage, ReviewUnit};
use crate::state::ReviewSession;
use crate::Message;

const BAR_BACKGROUND: Color = Color::from_rgb(20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0);
const BAR_TEXT: Color = Color::from_rgb(1.0, 1.0, 0.0);

impl ReviewPage {
    /// Thumbnails at their slot positions with the badge overlay on top
    pub fn view<'a>(&'a self, overlay: &'a Cache, width: u32, height: u32) -> Element<'a, Message> {
        let backdrop = container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| filled(Color::BLACK));

        let mut layers: Vec<Element<'a, Message>> = vec![backdrop.into()];
        layers.extend(self.units().iter().map(thumbnail));

        let badges = Canvas::new(BadgeOverlay { page: self, cache: overlay })
            .width(Length::Fill)
            .height(Length::Fill);

        Stack::with_children(layers)
            .push(badges)
            .width(Length::Fixed(width as f32))
            .height(Length::Fixed(height as f32))
            .into()
    }
}

/// A unit's scaled thumbnail, offset into its slot; blank for placeholders
fn thumbnail(unit: &ReviewUnit) -> Element<'_, Message> {
    let slot = unit.slot();
    let (w, h) = (Length::Fixed(slot.width as f32), Length::Fixed(slot.height as f32));

    let content: Element<'_, Message> = match unit.thumbnail() {
        Some(handle) => image::<image::Handle>(handle.clone())
            .width(w)
            .height(h)
            .content_fit(ContentFit::Fill)
            .into(),
        None => Space::new(w, h).into(),
    };

    container(content)
        .padding(Padding {
            top: slot.top as f32,
            right: 0.0,
            bottom: 0.0,
            left: slot.left as f32,
        })
        .into()
}

/// Page number, correction count and key hints
pub fn status_bar(session: &ReviewSession, width: u32, height: u32) -> Element<'_, Message> {
    let page = text(format!(
        "Mosaic {} of {}",
        session.current_index() + 1,
        session.page_count()
    ))
    .size(14)
    .color(BAR_TEXT);

    let corrected = text(format!("Corrected: {}", session.corrected_count()))
        .size(14)
        .color(BAR_TEXT);

    let hints = text("Q / ← previous   E / → next   click to flip   Esc quit")
        .size(12)
        .color(BAR_TEXT);

    container(row![page, horizontal_space(), corrected, horizontal_space(), hints])
        .width(Length::Fixed(width as f32))
        .padding(Padding {
            top: 0.0,
            right: 8.0,
            bottom: 0.0,
            left: 8.0,
        })
        .center_y(Length::Fixed(height as f32))
        .style(|_theme| filled(BAR_BACKGROUND))
        .into()
}

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(color.into()),
        ..container::Style::default()
    }
}
