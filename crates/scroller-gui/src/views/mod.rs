pub mod controls;
pub mod notifications;
pub mod settings;
pub mod status_bar;
pub mod text_view;

use crate::app::ScrollerApp;
use crate::message::Message;
use crate::style::root_container;
use crate::views::{
    controls::render_controls, notifications::render_notifications, settings::render_settings,
    status_bar::render_status_bar, text_view::render_text_view,
};
use iced::widget::{column, container, stack};
use iced::{Element, Length};

const SPACING_LARGE: f32 = 16.0;
const SPACING_MEDIUM: f32 = 12.0;
const SPACING_SMALL: f32 = 8.0;

pub fn view(app: &ScrollerApp) -> Element<'_, Message> {
    let state = app.state();
    let controls = render_controls(state, SPACING_MEDIUM, SPACING_SMALL);

    let body = if state.settings().is_open() {
        render_settings(app, SPACING_LARGE, SPACING_MEDIUM, SPACING_SMALL)
    } else {
        render_text_view(state, SPACING_LARGE)
    };

    let main_content = container(
        column![controls, body, render_status_bar(state, SPACING_SMALL)]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(root_container());

    let mut layers: Vec<Element<'_, Message>> = vec![main_content.into()];

    if app.notifications().has_active() {
        layers.push(render_notifications(
            app.notifications(),
            SPACING_LARGE,
            SPACING_MEDIUM,
        ));
    }

    stack(layers).into()
}
