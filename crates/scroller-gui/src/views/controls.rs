use crate::message::Message;
use crate::style::{ribbon_button, ribbon_container};
use iced::widget::{Space, button, container, row, slider, text};
use iced::{Alignment, Element, Length};
use scroller_application::AppState;
use scroller_core::{MAX_SPEED_MS, MIN_SPEED_MS};

pub fn pause_label(auto_advancing: bool) -> &'static str {
    if auto_advancing { "Pause" } else { "Resume" }
}

pub fn speed_label(speed_ms: u8) -> String {
    format!("Scroll Speed: {speed_ms} ms")
}

pub fn render_controls(
    state: &AppState,
    spacing_medium: f32,
    spacing_small: f32,
) -> Element<'_, Message> {
    let display = state.display();
    let speed_ms = display.speed_ms();

    let upload = button(text("Upload Text File").size(14))
        .style(ribbon_button())
        .on_press(Message::OpenFileRequested);

    let pause = button(text(pause_label(state.is_auto_advancing())).size(14))
        .style(ribbon_button())
        .width(Length::Fixed(80.0))
        .on_press(Message::TogglePause);

    let speed = row![
        text(speed_label(speed_ms)).size(14),
        slider(MIN_SPEED_MS..=MAX_SPEED_MS, speed_ms, Message::SpeedChanged)
            .step(1u8)
            .width(Length::Fixed(180.0)),
    ]
    .spacing(spacing_small)
    .align_y(Alignment::Center);

    let settings = button(text("Settings").size(14))
        .style(ribbon_button())
        .on_press(if state.settings().is_open() {
            Message::SettingsClosed
        } else {
            Message::SettingsOpened
        });

    let reset = button(text("Reset").size(14))
        .style(ribbon_button())
        .on_press(Message::ResetRequested);

    container(
        row![
            upload,
            pause,
            speed,
            Space::new().width(Length::Fill),
            settings,
            reset
        ]
        .spacing(spacing_medium)
        .align_y(Alignment::Center),
    )
    .padding(spacing_small)
    .width(Length::Fill)
    .style(ribbon_container())
    .into()
}
