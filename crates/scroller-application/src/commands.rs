use scroller_core::{FontDescriptor, LoadedText, Rgb};
use std::path::PathBuf;

/// Every request the UI can make of the scroll controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollCommand {
    /// Read a file on the calling thread and show it.
    LoadText(PathBuf),
    /// Show a file that was read elsewhere.
    ShowLoaded(LoadedText),
    PasteText(String),
    TogglePause,
    SetSpeed(u8),
    SetFont(FontDescriptor),
    SetColor(Rgb),
    Reset,
    Seek(usize),
    /// The text area was resized to `width` x `height` logical pixels.
    Resize { width: f32, height: f32 },
    /// Run the ticks that have come due.
    Pump,
}

impl ScrollCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ScrollCommand::LoadText(_) => "load_text",
            ScrollCommand::ShowLoaded(_) => "show_loaded",
            ScrollCommand::PasteText(_) => "paste_text",
            ScrollCommand::TogglePause => "toggle_pause",
            ScrollCommand::SetSpeed(_) => "set_speed",
            ScrollCommand::SetFont(_) => "set_font",
            ScrollCommand::SetColor(_) => "set_color",
            ScrollCommand::Reset => "reset",
            ScrollCommand::Seek(_) => "seek",
            ScrollCommand::Resize { .. } => "resize",
            ScrollCommand::Pump => "pump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message for the user produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of dispatching one command: the message to show the user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
        }
    }
}
