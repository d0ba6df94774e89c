use crate::message::Message;
use crate::style::text_color;
use iced::font::{self, Font};
use iced::widget::{Column, container, text};
use iced::{Element, Length, Padding, Pixels};
use scroller_application::AppState;
use scroller_core::{FontDescriptor, FontFamily, FontStyle, FontWeight, Viewport};

/// Renders only the display lines inside the viewport; the rest of the text
/// never reaches the widget tree.
pub fn render_text_view(state: &AppState, padding: f32) -> Element<'_, Message> {
    let display = state.display();
    let descriptor = display.font();
    let font = iced_font(descriptor);
    let color = text_color(display.color());
    let size = f32::from(descriptor.size);
    let line_height = text::LineHeight::Absolute(Pixels(Viewport::line_height(size)));

    let lines = display.visible_lines().iter().map(|line| {
        Element::from(
            text(line.as_str())
                .font(font)
                .size(size)
                .line_height(line_height)
                .color(color),
        )
    });

    container(Column::with_children(lines).width(Length::Fill))
        .padding(Padding::new(padding).top(padding * 0.5))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

pub fn iced_font(descriptor: FontDescriptor) -> Font {
    Font {
        family: match descriptor.family {
            FontFamily::SansSerif => font::Family::SansSerif,
            FontFamily::Serif => font::Family::Serif,
            FontFamily::Monospace => font::Family::Monospace,
        },
        weight: match descriptor.weight {
            FontWeight::Normal => font::Weight::Normal,
            FontWeight::Bold => font::Weight::Bold,
        },
        style: match descriptor.style {
            FontStyle::Normal => font::Style::Normal,
            FontStyle::Italic => font::Style::Italic,
        },
        ..Font::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_maps_onto_iced_font() {
        let font = iced_font(FontDescriptor {
            family: FontFamily::Serif,
            size: 20,
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
        });
        assert_eq!(font.family, font::Family::Serif);
        assert_eq!(font.weight, font::Weight::Bold);
        assert_eq!(font.style, font::Style::Italic);
    }
}
