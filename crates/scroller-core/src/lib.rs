pub mod controller;
pub mod display;
pub mod layout;
pub mod source;
pub mod ticker;

pub use controller::{ScrollController, TickOutcome};
pub use display::{AutoAdvance, DefaultSettings, DisplayState};
pub use layout::{LineAnchor, RenderedText, Viewport};
pub use source::{FileReadError, FileReadErrorKind, LoadedText, TextSource, read_text};
pub use ticker::{Clock, ManualClock, SystemClock, Ticker};

pub use scroller_config::{
    FontDescriptor, FontFamily, FontStyle, FontWeight, MAX_SPEED_MS, MIN_SPEED_MS, Rgb,
};
