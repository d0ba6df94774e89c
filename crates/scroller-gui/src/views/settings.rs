use crate::app::ScrollerApp;
use crate::message::Message;
use crate::style::{TEXT_ERROR, TEXT_MUTED, category_button, panel_container, text_color};
use crate::views::text_view::iced_font;
use iced::widget::{
    Space, button, column, container, pick_list, row, slider, text, text_editor, text_input,
};
use iced::{Alignment, Background, Element, Length, Padding};
use scroller_application::{AppState, ColorChannel, SETTINGS_CATEGORIES, SettingsCategory};
use scroller_config::{FONT_FAMILIES, FONT_STYLES, FONT_WEIGHTS, MAX_FONT_SIZE, MIN_FONT_SIZE};

const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";

pub fn render_settings(
    app: &ScrollerApp,
    spacing_large: f32,
    spacing_medium: f32,
    spacing_small: f32,
) -> Element<'_, Message> {
    let state = app.state();
    let selected = state.settings().selected_category();

    let mut categories_list = column![text("Settings").size(16)].spacing(spacing_small);
    for category in SETTINGS_CATEGORIES.iter().copied() {
        categories_list = categories_list.push(
            button(text(category.label()).size(14))
                .style(category_button(category == selected))
                .width(Length::Fill)
                .on_press(Message::SettingsCategorySelected(category)),
        );
    }
    categories_list = categories_list
        .push(Space::new().height(Length::Fill))
        .push(
            button(text("Close").size(14))
                .width(Length::Fill)
                .on_press(Message::SettingsClosed),
        );

    let categories_panel = container(categories_list)
        .padding(spacing_large)
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(panel_container());

    let detail = match selected {
        SettingsCategory::Font => render_font_settings(state, spacing_medium, spacing_small),
        SettingsCategory::Color => render_color_settings(state, spacing_medium, spacing_small),
        SettingsCategory::Paste => render_paste_settings(app, spacing_medium, spacing_small),
        SettingsCategory::Shortcuts => render_shortcuts(state, spacing_small),
    };

    row![
        categories_panel,
        container(detail)
            .padding(spacing_large)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(panel_container()),
    ]
    .spacing(spacing_large)
    .padding(spacing_large)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn render_font_settings(
    state: &AppState,
    spacing_medium: f32,
    spacing_small: f32,
) -> Element<'_, Message> {
    let settings = state.settings();
    let draft = settings.font_draft();

    let pickers = row![
        labelled(
            "Family",
            pick_list(FONT_FAMILIES, Some(draft.family), Message::FontFamilySelected).into(),
            spacing_small,
        ),
        labelled(
            "Weight",
            pick_list(FONT_WEIGHTS, Some(draft.weight), Message::FontWeightSelected).into(),
            spacing_small,
        ),
        labelled(
            "Style",
            pick_list(FONT_STYLES, Some(draft.style), Message::FontStyleSelected).into(),
            spacing_small,
        ),
    ]
    .spacing(spacing_medium);

    let size = row![
        text(format!("Size: {} pt", draft.size)).size(14),
        slider(MIN_FONT_SIZE..=MAX_FONT_SIZE, draft.size, Message::FontSizeChanged)
            .width(Length::Fixed(240.0)),
    ]
    .spacing(spacing_small)
    .align_y(Alignment::Center);

    let preview = container(
        text(PREVIEW_TEXT)
            .font(iced_font(draft))
            .size(f32::from(draft.size))
            .color(text_color(state.display().color())),
    )
    .padding(Padding::new(spacing_medium))
    .height(Length::Fill);

    column![
        text("Change Font").size(16),
        pickers,
        size,
        preview,
        apply_cancel(
            settings.font_dirty(),
            Message::FontApplied,
            Message::FontCancelled,
            spacing_small,
        ),
    ]
    .spacing(spacing_medium)
    .into()
}

fn render_color_settings(
    state: &AppState,
    spacing_medium: f32,
    spacing_small: f32,
) -> Element<'_, Message> {
    let settings = state.settings();
    let draft = settings.color_draft();

    let channel = |label: &'static str, channel: ColorChannel, value: u8| {
        row![
            text(format!("{label}: {value:>3}"))
                .size(14)
                .width(Length::Fixed(80.0)),
            slider(0..=u8::MAX, value, move |value| {
                Message::ColorChannelChanged(channel, value)
            })
            .width(Length::Fixed(240.0)),
        ]
        .spacing(spacing_small)
        .align_y(Alignment::Center)
    };

    let swatch_color = text_color(draft);
    let swatch = container(Space::new().width(Length::Fixed(64.0)).height(Length::Fixed(32.0)))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(swatch_color)),
            ..Default::default()
        });

    let mut hex = column![
        row![
            text("Hex").size(14).width(Length::Fixed(80.0)),
            text_input("#RRGGBB", settings.hex_input())
                .on_input(Message::ColorHexChanged)
                .width(Length::Fixed(120.0)),
            swatch,
        ]
        .spacing(spacing_small)
        .align_y(Alignment::Center),
    ]
    .spacing(spacing_small);

    if let Some(err) = settings.hex_error() {
        hex = hex.push(text(err).size(13).color(TEXT_ERROR));
    }

    column![
        text("Change Font Color").size(16),
        channel("Red", ColorChannel::Red, draft.r),
        channel("Green", ColorChannel::Green, draft.g),
        channel("Blue", ColorChannel::Blue, draft.b),
        hex,
        Space::new().height(Length::Fill),
        apply_cancel(
            settings.color_dirty(),
            Message::ColorApplied,
            Message::ColorCancelled,
            spacing_small,
        ),
    ]
    .spacing(spacing_medium)
    .into()
}

fn render_paste_settings(
    app: &ScrollerApp,
    spacing_medium: f32,
    spacing_small: f32,
) -> Element<'_, Message> {
    let editor = text_editor(app.paste_content())
        .placeholder("Paste or type the text to scroll…")
        .on_action(Message::PasteAction)
        .height(Length::Fill)
        .padding(12);

    column![
        text("Paste in Own Text").size(16),
        text("Replaces the current text and starts again from the top.")
            .size(13)
            .color(TEXT_MUTED),
        editor,
        row![
            Space::new().width(Length::Fill),
            button(text("Clear").size(14)).on_press(Message::PasteCleared),
            button(text("Apply Text").size(14))
                .style(button::primary)
                .on_press(Message::PasteApplied),
        ]
        .spacing(spacing_small),
    ]
    .spacing(spacing_medium)
    .into()
}

fn render_shortcuts(state: &AppState, spacing_small: f32) -> Element<'_, Message> {
    let mut list = column![text("Keyboard Shortcuts").size(16)].spacing(spacing_small);

    for shortcut in state.shortcuts() {
        list = list.push(
            row![
                text(shortcut.keys).size(14).width(Length::Fixed(90.0)),
                column![
                    text(shortcut.title).size(14),
                    text(shortcut.description).size(12).color(TEXT_MUTED),
                ]
                .spacing(2),
            ]
            .spacing(spacing_small)
            .align_y(Alignment::Center),
        );
    }

    list.into()
}

fn labelled<'a>(
    label: &'static str,
    control: Element<'a, Message>,
    spacing_small: f32,
) -> Element<'a, Message> {
    column![text(label).size(13).color(TEXT_MUTED), control]
        .spacing(spacing_small * 0.5)
        .into()
}

fn apply_cancel(
    dirty: bool,
    apply: Message,
    cancel: Message,
    spacing_small: f32,
) -> Element<'static, Message> {
    let apply_button = button(text("Apply").size(14)).style(button::primary);
    let cancel_button = button(text("Cancel").size(14));

    row![
        Space::new().width(Length::Fill),
        if dirty { cancel_button.on_press(cancel) } else { cancel_button },
        if dirty { apply_button.on_press(apply) } else { apply_button },
    ]
    .spacing(spacing_small)
    .into()
}
