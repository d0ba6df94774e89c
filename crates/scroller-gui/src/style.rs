use iced::widget::{button, container, slider};
use iced::{Background, Border, Color, Shadow, Theme, Vector};
use scroller_core::Rgb;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

const BG_PRIMARY: Color = rgb(30, 30, 30);
const BG_PANEL: Color = rgb(45, 45, 48);
const BG_BUTTON_HOVER: Color = rgb(62, 62, 66);
const BG_STATUS: Color = rgb(40, 40, 43);
const BG_RIBBON: Color = rgb(37, 37, 38);
const ACCENT: Color = rgb(0, 120, 215);
pub const TEXT_PRIMARY: Color = rgb(231, 231, 231);
pub const TEXT_MUTED: Color = rgb(180, 180, 180);
pub const TEXT_ERROR: Color = rgb(220, 50, 47);
const NOTIFY_INFO: Color = rgb(52, 152, 219);
const NOTIFY_ERROR: Color = rgb(231, 76, 60);
const NOTIFY_SURFACE: Color = rgb(36, 36, 39);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTone {
    Info,
    Error,
}

impl NotificationTone {
    pub fn accent(self) -> Color {
        match self {
            NotificationTone::Info => NOTIFY_INFO,
            NotificationTone::Error => NOTIFY_ERROR,
        }
    }
}

pub fn text_color(color: Rgb) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

pub fn root_container() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        background: Some(Background::Color(BG_PRIMARY)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn panel_container() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        background: Some(Background::Color(BG_PANEL)),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: rgb(60, 60, 63),
        },
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn ribbon_container() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        background: Some(Background::Color(BG_RIBBON)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn status_container() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        background: Some(Background::Color(BG_STATUS)),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: rgb(55, 55, 58),
        },
        text_color: Some(TEXT_MUTED),
        ..Default::default()
    }
}

pub fn notification_container(tone: NotificationTone) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let accent = tone.accent();
        container::Style {
            background: Some(Background::Color(NOTIFY_SURFACE)),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: Color::from_rgba(accent.r, accent.g, accent.b, 0.75),
            },
            text_color: Some(TEXT_PRIMARY),
            shadow: Shadow {
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            },
            ..Default::default()
        }
    }
}

pub fn ribbon_button() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => BG_BUTTON_HOVER,
            button::Status::Active | button::Status::Disabled => BG_RIBBON,
        };
        let text_color = match status {
            button::Status::Disabled => TEXT_MUTED,
            _ => TEXT_PRIMARY,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: rgb(60, 60, 63),
            },
            ..Default::default()
        }
    }
}

pub fn category_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            ACCENT
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => BG_BUTTON_HOVER,
                _ => BG_PANEL,
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: TEXT_PRIMARY,
            border: Border {
                radius: 4.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    }
}

pub fn progress_slider() -> impl Fn(&Theme, slider::Status) -> slider::Style {
    |theme, status| {
        let palette = theme.extended_palette();
        let base = slider::Style {
            rail: slider::Rail {
                backgrounds: (ACCENT.into(), palette.background.strong.color.into()),
                width: 4.0,
                border: Border {
                    radius: 2.0.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 5.0 },
                background: palette.primary.weak.color.into(),
                border_color: palette.primary.strong.color,
                border_width: 1.0,
            },
        };

        match status {
            slider::Status::Active => base,
            slider::Status::Hovered | slider::Status::Dragged => slider::Style {
                handle: slider::Handle {
                    background: palette.primary.base.color.into(),
                    ..base.handle
                },
                ..base
            },
        }
    }
}
