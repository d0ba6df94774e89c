use crate::message::Message;
use crate::notifications::{Notification, NotificationCenter, NotificationKind};
use crate::style::{NotificationTone, notification_container};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length, Padding};

pub fn render_notifications(
    center: &NotificationCenter,
    spacing_large: f32,
    spacing_medium: f32,
) -> Element<'_, Message> {
    let bubble_spacing = (spacing_medium * 0.6).max(6.0);
    let mut stack = column![].spacing(bubble_spacing).align_x(Alignment::End);

    for notification in center.notifications() {
        stack = stack.push(render_notification_card(notification));
    }

    let overlay = row![Space::new().width(Length::Fill), stack]
        .spacing(bubble_spacing)
        .align_y(Alignment::End);

    container(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(
            Padding::new(0.0)
                .right(spacing_large)
                .bottom(spacing_large * 3.0)
                .left(spacing_large),
        )
        .align_y(iced::alignment::Vertical::Bottom)
        .into()
}

fn render_notification_card(notification: &Notification) -> Element<'_, Message> {
    let tone = match notification.kind {
        NotificationKind::Info => NotificationTone::Info,
        NotificationKind::Error => NotificationTone::Error,
    };

    let icon = text("●").size(14).color(tone.accent());

    let title = text(&notification.title)
        .size(15)
        .color(Color::from_rgb8(240, 240, 240));

    let close_button = button(text("✕").size(14))
        .style(iced::widget::button::text)
        .on_press(Message::NotificationDismissed(notification.id));

    let content = row![icon, container(title).width(Length::Fill), close_button]
        .spacing(10)
        .align_y(Alignment::Center);

    container(content)
        .padding(Padding::new(12.0))
        .max_width(320.0)
        .style(notification_container(tone))
        .into()
}
