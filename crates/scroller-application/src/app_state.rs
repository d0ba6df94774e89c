use crate::commands::{Notice, Outcome, ScrollCommand};
use crate::settings::SettingsState;
use crate::shortcuts::{list as shortcuts_list, Shortcut};
use scroller_config::StartupConfig;
use scroller_core::{
    AutoAdvance, Clock, DefaultSettings, DisplayState, FileReadError, ScrollController, SystemClock,
    Viewport,
};
use tracing::{debug, warn};

/// Session state behind the window: the scroll controller, the settings
/// panel and the last message shown to the user.
#[derive(Debug)]
pub struct AppState<C = SystemClock> {
    controller: ScrollController<C>,
    settings: SettingsState,
    shortcuts: &'static [Shortcut],
    text_area: Option<(f32, f32)>,
    error: Option<String>,
    notice: Option<String>,
}

impl AppState<SystemClock> {
    pub fn new(config: &StartupConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> AppState<C> {
    pub fn with_clock(config: &StartupConfig, clock: C) -> Self {
        let defaults = DefaultSettings::from_config(config);
        let controller = ScrollController::with_clock(defaults, Viewport::default(), clock);
        let settings = SettingsState::new(defaults.font(), defaults.color());

        Self {
            controller,
            settings,
            shortcuts: shortcuts_list(),
            text_area: None,
            error: None,
            notice: None,
        }
    }

    pub fn controller(&self) -> &ScrollController<C> {
        &self.controller
    }

    pub fn display(&self) -> &DisplayState {
        self.controller.state()
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.controller.auto_advance()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.controller.is_auto_advancing()
    }

    pub fn shortcuts(&self) -> &'static [Shortcut] {
        self.shortcuts
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    pub fn open_settings(&mut self) {
        let state = self.controller.state();
        let (font, color) = (state.font(), state.color());
        self.settings.open(font, color);
    }

    pub fn close_settings(&mut self) {
        self.settings.close();
    }

    /// Applies the font picker's draft, if it differs from the current font.
    pub fn apply_font_draft(&mut self) -> Outcome {
        match self.settings.take_font() {
            Some(font) => self.dispatch(ScrollCommand::SetFont(font)),
            None => Outcome::none(),
        }
    }

    /// Applies the color picker's draft, if it differs from the current color.
    pub fn apply_color_draft(&mut self) -> Outcome {
        match self.settings.take_color() {
            Some(color) => self.dispatch(ScrollCommand::SetColor(color)),
            None => Outcome::none(),
        }
    }

    /// Nudges the speed by `delta` milliseconds within the slider bounds.
    pub fn step_speed(&mut self, delta: i16) -> Outcome {
        let current = i16::from(self.controller.state().speed_ms());
        let next = (current + delta).clamp(0, i16::from(u8::MAX)) as u8;
        self.dispatch(ScrollCommand::SetSpeed(next))
    }

    /// Reports a file that was read outside [`AppState::dispatch`] and failed.
    pub fn report_load_failure(&mut self, err: &FileReadError) -> Outcome {
        warn!(path = %err.path.display(), kind = %err.kind, "text file not loaded");
        self.fail(err.to_string())
    }

    pub fn dispatch(&mut self, command: ScrollCommand) -> Outcome {
        if !matches!(command, ScrollCommand::Pump) {
            debug!(command = command.name(), "dispatch");
        }

        match command {
            ScrollCommand::LoadText(path) => match self.controller.load_text(&path) {
                Ok(()) => {
                    let message = format!("Loaded {}", self.controller.state().source());
                    self.succeed(message)
                }
                Err(err) => self.fail(err.to_string()),
            },
            ScrollCommand::ShowLoaded(loaded) => {
                let message = format!("Loaded {}", loaded.display_name());
                self.controller.show_loaded(loaded);
                self.succeed(message)
            }
            ScrollCommand::PasteText(content) => {
                self.controller.paste_text(content);
                let lines = self.controller.state().rendered().line_count();
                self.succeed(format!("Showing pasted text ({lines} lines)"))
            }
            ScrollCommand::TogglePause => {
                self.controller.toggle_pause();
                Outcome::none()
            }
            ScrollCommand::SetSpeed(speed_ms) => {
                self.controller.set_speed(speed_ms);
                Outcome::none()
            }
            ScrollCommand::SetFont(font) => {
                self.controller.set_font(font);
                self.settings.sync_font(self.controller.state().font());
                self.refresh_viewport();
                Outcome::none()
            }
            ScrollCommand::SetColor(color) => {
                self.controller.set_color(color);
                self.settings.sync_color(color);
                Outcome::none()
            }
            ScrollCommand::Reset => {
                self.controller.reset_to_defaults();
                let state = self.controller.state();
                let (font, color) = (state.font(), state.color());
                self.settings.sync(font, color);
                self.refresh_viewport();
                self.succeed("Font, color and speed restored".to_string())
            }
            ScrollCommand::Seek(line) => {
                self.controller.seek(line);
                Outcome::none()
            }
            ScrollCommand::Resize { width, height } => {
                self.text_area = Some((width, height));
                self.refresh_viewport();
                Outcome::none()
            }
            ScrollCommand::Pump => {
                if self.controller.pump() && self.controller.state().at_end() {
                    return self.succeed("Reached the end of the text".to_string());
                }
                Outcome::none()
            }
        }
    }

    fn refresh_viewport(&mut self) {
        let Some((width, height)) = self.text_area else {
            return;
        };
        let size = f32::from(self.controller.state().font().size);
        self.controller
            .set_viewport(Viewport::from_pixels(width, height, size));
    }

    fn succeed(&mut self, message: String) -> Outcome {
        self.error = None;
        self.notice = Some(message.clone());
        Outcome::notice(Notice::info(message))
    }

    fn fail(&mut self, message: String) -> Outcome {
        warn!(%message, "command failed");
        self.error = Some(message.clone());
        self.notice = None;
        Outcome::notice(Notice::error(message))
    }
}
