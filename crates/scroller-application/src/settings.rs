use scroller_core::{FontDescriptor, FontFamily, FontStyle, FontWeight, Rgb};
use scroller_config::{MAX_FONT_SIZE, MIN_FONT_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsCategory {
    Font,
    Color,
    Paste,
    Shortcuts,
}

pub const SETTINGS_CATEGORIES: &[SettingsCategory] = &[
    SettingsCategory::Font,
    SettingsCategory::Color,
    SettingsCategory::Paste,
    SettingsCategory::Shortcuts,
];

impl SettingsCategory {
    pub fn label(self) -> &'static str {
        match self {
            SettingsCategory::Font => "Change Font",
            SettingsCategory::Color => "Change Font Color",
            SettingsCategory::Paste => "Paste in Own Text",
            SettingsCategory::Shortcuts => "Keyboard Shortcuts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

/// State of the settings panel and the pickers inside it.
///
/// The font and color pickers edit a draft copy; nothing reaches the display
/// until the draft is taken with [`SettingsState::take_font`] or
/// [`SettingsState::take_color`]. Cancelling restores the draft from the
/// value that was current when the picker was opened.
#[derive(Debug)]
pub struct SettingsState {
    is_open: bool,
    selected: SettingsCategory,
    font_origin: FontDescriptor,
    font_draft: FontDescriptor,
    color_origin: Rgb,
    color_draft: Rgb,
    hex_input: String,
    hex_error: Option<String>,
}

impl SettingsState {
    pub fn new(font: FontDescriptor, color: Rgb) -> Self {
        Self {
            is_open: false,
            selected: SettingsCategory::Font,
            font_origin: font,
            font_draft: font,
            color_origin: color,
            color_draft: color,
            hex_input: color.to_string(),
            hex_error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the panel with fresh drafts taken from the current values.
    pub fn open(&mut self, font: FontDescriptor, color: Rgb) {
        self.is_open = true;
        self.sync(font, color);
    }

    /// Closes the panel, discarding any unapplied edits.
    pub fn close(&mut self) {
        self.is_open = false;
        self.font_draft = self.font_origin;
        self.set_color_draft(self.color_origin);
    }

    pub fn selected_category(&self) -> SettingsCategory {
        self.selected
    }

    pub fn select_category(&mut self, category: SettingsCategory) {
        self.selected = category;
    }

    /// Re-bases both drafts on values that changed outside the panel.
    pub fn sync(&mut self, font: FontDescriptor, color: Rgb) {
        self.sync_font(font);
        self.sync_color(color);
    }

    pub fn sync_font(&mut self, font: FontDescriptor) {
        self.font_origin = font;
        self.font_draft = font;
    }

    pub fn sync_color(&mut self, color: Rgb) {
        self.color_origin = color;
        self.set_color_draft(color);
    }

    pub fn font_draft(&self) -> FontDescriptor {
        self.font_draft
    }

    pub fn font_dirty(&self) -> bool {
        self.font_draft != self.font_origin
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_draft.family = family;
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_draft.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_draft.weight = weight;
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_draft.style = style;
    }

    /// Accepts the font draft. Returns `None` when it equals the current font.
    pub fn take_font(&mut self) -> Option<FontDescriptor> {
        if !self.font_dirty() {
            return None;
        }
        self.font_origin = self.font_draft;
        Some(self.font_draft)
    }

    pub fn cancel_font(&mut self) {
        self.font_draft = self.font_origin;
    }

    pub fn color_draft(&self) -> Rgb {
        self.color_draft
    }

    pub fn color_dirty(&self) -> bool {
        self.color_draft != self.color_origin
    }

    pub fn set_color_channel(&mut self, channel: ColorChannel, value: u8) {
        let mut color = self.color_draft;
        match channel {
            ColorChannel::Red => color.r = value,
            ColorChannel::Green => color.g = value,
            ColorChannel::Blue => color.b = value,
        }
        self.set_color_draft(color);
    }

    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    pub fn hex_error(&self) -> Option<&str> {
        self.hex_error.as_deref()
    }

    /// Updates the `#RRGGBB` field; the draft follows once the text parses.
    pub fn set_hex_input(&mut self, value: String) {
        match value.parse::<Rgb>() {
            Ok(color) => {
                self.color_draft = color;
                self.hex_error = None;
            }
            Err(err) => self.hex_error = Some(err.to_string()),
        }
        self.hex_input = value;
    }

    /// Accepts the color draft. Returns `None` when it equals the current color.
    pub fn take_color(&mut self) -> Option<Rgb> {
        if !self.color_dirty() {
            return None;
        }
        self.color_origin = self.color_draft;
        Some(self.color_draft)
    }

    pub fn cancel_color(&mut self) {
        self.set_color_draft(self.color_origin);
    }

    fn set_color_draft(&mut self, color: Rgb) {
        self.color_draft = color;
        self.hex_input = color.to_string();
        self.hex_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_draft_is_only_taken_when_changed() {
        let mut settings = SettingsState::new(FontDescriptor::default(), Rgb::default());
        assert_eq!(settings.take_font(), None);

        settings.set_font_family(FontFamily::Monospace);
        settings.set_font_size(200);
        let taken = settings.take_font().unwrap();
        assert_eq!(taken.family, FontFamily::Monospace);
        assert_eq!(taken.size, MAX_FONT_SIZE);
        assert_eq!(settings.take_font(), None);
    }

    #[test]
    fn cancel_restores_the_opened_value() {
        let mut settings = SettingsState::new(FontDescriptor::default(), Rgb::new(1, 2, 3));
        settings.set_font_style(FontStyle::Italic);
        settings.set_color_channel(ColorChannel::Green, 200);
        assert!(settings.font_dirty());
        assert!(settings.color_dirty());

        settings.cancel_font();
        settings.cancel_color();
        assert!(!settings.font_dirty());
        assert_eq!(settings.color_draft(), Rgb::new(1, 2, 3));
        assert_eq!(settings.hex_input(), "#010203");
    }

    #[test]
    fn hex_input_drives_the_draft_once_valid() {
        let mut settings = SettingsState::new(FontDescriptor::default(), Rgb::new(0, 0, 0));

        settings.set_hex_input("#12".into());
        assert!(settings.hex_error().is_some());
        assert_eq!(settings.color_draft(), Rgb::new(0, 0, 0));

        settings.set_hex_input("#123456".into());
        assert!(settings.hex_error().is_none());
        assert_eq!(settings.take_color(), Some(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn closing_discards_unapplied_edits() {
        let mut settings = SettingsState::new(FontDescriptor::default(), Rgb::default());
        settings.open(FontDescriptor::default(), Rgb::default());
        settings.set_font_weight(FontWeight::Bold);
        settings.close();

        assert!(!settings.is_open());
        assert_eq!(settings.font_draft(), FontDescriptor::default());
    }
}
