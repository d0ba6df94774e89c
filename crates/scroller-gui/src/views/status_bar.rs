use crate::message::Message;
use crate::style::{TEXT_ERROR, progress_slider, status_container};
use iced::widget::{Space, container, row, slider, text};
use iced::{Alignment, Color, Element, Length};
use scroller_application::AppState;

pub fn position_label(position: usize, max: usize, progress: f32) -> String {
    format!(
        "Line {position} / {max} ({:.0}%)",
        (progress * 100.0).clamp(0.0, 100.0)
    )
}

pub fn render_status_bar(state: &AppState, spacing_small: f32) -> Element<'_, Message> {
    let display = state.display();
    let position = display.scroll_position();
    let max = display.scroll_max();
    let progress = state.controller().progress();

    let seek: Element<'_, Message> = if max > 0 {
        slider(
            0..=clamp_u32(max),
            clamp_u32(position),
            Message::SeekChanged,
        )
        .style(progress_slider())
        .width(Length::Fixed(220.0))
        .into()
    } else {
        Space::new().width(Length::Fixed(220.0)).into()
    };

    let message: Element<'_, Message> = match (state.error(), state.notice()) {
        (Some(err), _) => text(format!("Error: {err}"))
            .size(13)
            .color(TEXT_ERROR)
            .into(),
        (None, Some(notice)) => text(notice)
            .size(13)
            .color(Color::from_rgb8(38, 139, 210))
            .into(),
        _ => text("").size(13).into(),
    };

    container(
        row![
            text(display.source().to_string()).size(13),
            seek,
            text(position_label(position, max, progress)).size(13),
            text(format!("{} ms", display.speed_ms())).size(13),
            text(state.auto_advance().to_string()).size(13),
            text(display.font().to_string()).size(13),
            Space::new().width(Length::Fill),
            message,
        ]
        .spacing(spacing_small * 2.0)
        .align_y(Alignment::Center),
    )
    .padding(spacing_small)
    .width(Length::Fill)
    .style(status_container())
    .into()
}

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
