use crate::layout::{RenderedText, Viewport};
use crate::source::TextSource;
use scroller_config::{FontDescriptor, MAX_SPEED_MS, MIN_SPEED_MS, Rgb, StartupConfig};
use std::fmt;

/// Font, color and speed captured at startup, used by reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSettings {
    font: FontDescriptor,
    color: Rgb,
    speed_ms: u8,
}

impl DefaultSettings {
    pub fn new(font: FontDescriptor, color: Rgb, speed_ms: u8) -> Self {
        Self {
            font: font.clamped(),
            color,
            speed_ms: clamp_speed(speed_ms),
        }
    }

    pub fn from_config(config: &StartupConfig) -> Self {
        Self::new(config.font, config.color, config.speed_ms)
    }

    pub fn font(&self) -> FontDescriptor {
        self.font
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn speed_ms(&self) -> u8 {
        self.speed_ms
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self::from_config(&StartupConfig::default())
    }
}

pub fn clamp_speed(speed_ms: u8) -> u8 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

/// Whether the content is currently being scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvance {
    Paused,
    Running,
    /// Not paused, but there is nothing left to scroll.
    AtEnd,
}

impl fmt::Display for AutoAdvance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoAdvance::Paused => f.write_str("Paused"),
            AutoAdvance::Running => f.write_str("Scrolling"),
            AutoAdvance::AtEnd => f.write_str("End of text"),
        }
    }
}

/// Everything shown on screen for one session.
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub(crate) text: String,
    pub(crate) source: TextSource,
    pub(crate) rendered: RenderedText,
    pub(crate) viewport: Viewport,
    pub(crate) font: FontDescriptor,
    pub(crate) color: Rgb,
    pub(crate) scroll_position: usize,
    pub(crate) scroll_max: usize,
    pub(crate) speed_ms: u8,
    pub(crate) paused: bool,
}

impl DisplayState {
    pub(crate) fn new(defaults: &DefaultSettings, viewport: Viewport) -> Self {
        let rendered = RenderedText::layout("", viewport);
        let scroll_max = rendered.scroll_max(viewport);
        Self {
            text: String::new(),
            source: TextSource::Empty,
            rendered,
            viewport,
            font: defaults.font(),
            color: defaults.color(),
            scroll_position: 0,
            scroll_max,
            speed_ms: defaults.speed_ms(),
            paused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &TextSource {
        &self.source
    }

    pub fn rendered(&self) -> &RenderedText {
        &self.rendered
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn font(&self) -> FontDescriptor {
        self.font
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn scroll_max(&self) -> usize {
        self.scroll_max
    }

    pub fn speed_ms(&self) -> u8 {
        self.speed_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn at_end(&self) -> bool {
        self.scroll_position >= self.scroll_max
    }

    /// Display lines currently in view.
    pub fn visible_lines(&self) -> &[String] {
        self.rendered.window(self.scroll_position, self.viewport)
    }

    pub(crate) fn replace_text(&mut self, text: String, source: TextSource) {
        self.rendered = RenderedText::layout(&text, self.viewport);
        self.text = text;
        self.source = source;
        self.scroll_position = 0;
        self.scroll_max = self.rendered.scroll_max(self.viewport);
    }

    /// Re-wraps the text for `viewport`, keeping the text that was at the top
    /// of the view on top unless that would scroll past the end.
    pub(crate) fn relayout(&mut self, viewport: Viewport) {
        let top = self.rendered.anchor(self.scroll_position);
        self.viewport = viewport;
        self.rendered = RenderedText::layout(&self.text, viewport);
        self.scroll_max = self.rendered.scroll_max(viewport);
        let position = top.map_or(0, |anchor| self.rendered.locate(anchor));
        self.scroll_position = position.min(self.scroll_max);
    }
}
