use crate::display::{AutoAdvance, DefaultSettings, DisplayState, clamp_speed};
use crate::layout::Viewport;
use crate::source::{self, FileReadError, LoadedText, TextSource};
use crate::ticker::{Clock, SystemClock, Ticker};
use scroller_config::{FontDescriptor, Rgb};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The view moved down one line.
    Advanced,
    /// Already at the end; nothing moved.
    Idle,
}

/// Owns the display state and the periodic task that scrolls it.
///
/// The timer only runs while the user has not paused and there is content
/// left to scroll; every operation that can change either condition ends in
/// [`ScrollController::sync_timer`].
#[derive(Debug)]
pub struct ScrollController<C = SystemClock> {
    state: DisplayState,
    defaults: DefaultSettings,
    ticker: Ticker<C>,
}

impl ScrollController<SystemClock> {
    pub fn new(defaults: DefaultSettings, viewport: Viewport) -> Self {
        Self::with_clock(defaults, viewport, SystemClock)
    }
}

impl<C: Clock> ScrollController<C> {
    pub fn with_clock(defaults: DefaultSettings, viewport: Viewport, clock: C) -> Self {
        let state = DisplayState::new(&defaults, viewport);
        let ticker = Ticker::new(clock, period(state.speed_ms));
        Self {
            state,
            defaults,
            ticker,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn ticker(&self) -> &Ticker<C> {
        &self.ticker
    }

    /// True only while the timer is actually scheduled.
    pub fn is_auto_advancing(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        if self.ticker.is_running() {
            AutoAdvance::Running
        } else if self.state.paused {
            AutoAdvance::Paused
        } else {
            AutoAdvance::AtEnd
        }
    }

    /// Fraction of the scrollable range already passed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.state.scroll_max == 0 {
            return 0.0;
        }
        self.state.scroll_position as f32 / self.state.scroll_max as f32
    }

    /// Advances one display line, stopping the timer once the end is reached.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.scroll_position < self.state.scroll_max {
            self.state.scroll_position += 1;
            if self.state.at_end() {
                self.ticker.stop();
                debug!(position = self.state.scroll_position, "reached end of text");
            }
            return TickOutcome::Advanced;
        }
        TickOutcome::Idle
    }

    /// Runs every tick that has come due. Returns whether anything changed.
    pub fn pump(&mut self) -> bool {
        let due = self.ticker.poll();
        let mut changed = false;
        for _ in 0..due {
            match self.tick() {
                TickOutcome::Advanced => changed = true,
                TickOutcome::Idle => break,
            }
            if !self.ticker.is_running() {
                break;
            }
        }
        changed
    }

    pub fn set_speed(&mut self, speed_ms: u8) {
        let speed_ms = clamp_speed(speed_ms);
        if speed_ms == self.state.speed_ms {
            return;
        }
        self.state.speed_ms = speed_ms;
        self.ticker.set_period(period(speed_ms));
        debug!(speed_ms, "scroll speed changed");
    }

    pub fn toggle_pause(&mut self) -> AutoAdvance {
        self.state.paused = !self.state.paused;
        self.sync_timer();
        let now = self.auto_advance();
        debug!(state = %now, "pause toggled");
        now
    }

    /// Replaces the text with the contents of `path`. On failure nothing changes.
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<(), FileReadError> {
        match source::read_text(path) {
            Ok(loaded) => {
                self.show_loaded(loaded);
                Ok(())
            }
            Err(err) => {
                warn!(path = %err.path.display(), error = %err.kind, "keeping current text");
                Err(err)
            }
        }
    }

    /// Shows text that was already read from disk.
    pub fn show_loaded(&mut self, loaded: LoadedText) {
        info!(
            path = %loaded.path.display(),
            bytes = loaded.text.len(),
            "loaded text file"
        );
        self.state
            .replace_text(loaded.text, TextSource::File(loaded.path));
        self.sync_timer();
    }

    pub fn paste_text(&mut self, content: impl Into<String>) {
        let content = content.into();
        info!(bytes = content.len(), "pasted text");
        self.state.replace_text(content, TextSource::Pasted);
        self.sync_timer();
    }

    pub fn set_font(&mut self, font: FontDescriptor) {
        self.state.font = font.clamped();
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.state.color = color;
    }

    pub fn reset_to_defaults(&mut self) {
        self.state.font = self.defaults.font();
        self.state.color = self.defaults.color();
        self.set_speed(self.defaults.speed_ms());
        debug!("display settings reset to defaults");
    }

    /// Lays the text out again for a new visible area.
    ///
    /// The position is kept unless it lies past the new end.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.state.viewport {
            return;
        }
        self.state.relayout(viewport);
        self.sync_timer();
    }

    /// Jumps to a display line without touching the pause state.
    pub fn seek(&mut self, line: usize) {
        self.state.scroll_position = line.min(self.state.scroll_max);
        self.sync_timer();
    }

    fn sync_timer(&mut self) {
        if self.state.paused || self.state.at_end() {
            self.ticker.stop();
        } else {
            self.ticker.start();
        }
    }
}

fn period(speed_ms: u8) -> Duration {
    Duration::from_millis(u64::from(speed_ms))
}
