mod app_state;
mod commands;
mod settings;
mod shortcuts;

pub use app_state::AppState;
pub use commands::{Notice, NoticeLevel, Outcome, ScrollCommand};
pub use settings::{ColorChannel, SETTINGS_CATEGORIES, SettingsCategory, SettingsState};
pub use shortcuts::{Shortcut, ShortcutId, list as shortcuts};
