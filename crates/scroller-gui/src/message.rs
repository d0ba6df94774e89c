use iced::widget::text_editor;
use iced::Size;
use scroller_application::{ColorChannel, SettingsCategory, ShortcutId};
use scroller_core::{FileReadError, FontFamily, FontStyle, FontWeight, LoadedText};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Frame(Instant),
    WindowResized(Size),
    Shortcut(ShortcutId),
    TogglePause,
    SpeedChanged(u8),
    SeekChanged(u32),
    OpenFileRequested,
    FileLoaded(Result<Option<LoadedText>, FileReadError>),
    ResetRequested,
    SettingsOpened,
    SettingsClosed,
    SettingsCategorySelected(SettingsCategory),
    FontFamilySelected(FontFamily),
    FontSizeChanged(u16),
    FontWeightSelected(FontWeight),
    FontStyleSelected(FontStyle),
    FontApplied,
    FontCancelled,
    ColorChannelChanged(ColorChannel, u8),
    ColorHexChanged(String),
    ColorApplied,
    ColorCancelled,
    PasteAction(text_editor::Action),
    PasteApplied,
    PasteCleared,
    NotificationDismissed(u64),
}
