use crate::commands;
use crate::keyboard;
use crate::message::Message;
use crate::notifications::NotificationCenter;
use crate::views;
use iced::widget::text_editor;
use iced::{Element, Size, Subscription, Task, Theme, event, time, window};
use scroller_application::{AppState, Outcome, ScrollCommand, ShortcutId};
use scroller_config::StartupConfig;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(250);

/// Space taken by the ribbon, the status bar and the text padding.
const CHROME_WIDTH: f32 = 48.0;
const CHROME_HEIGHT: f32 = 136.0;

pub fn run(config: StartupConfig, initial_file: Option<PathBuf>) -> iced::Result {
    let window = config.window;
    info!(
        width = window.width,
        height = window.height,
        speed_ms = config.speed_ms,
        "starting scroller"
    );

    iced::application(
        move || ScrollerApp::boot(&config, initial_file.clone()),
        ScrollerApp::update,
        ScrollerApp::view,
    )
    .title(ScrollerApp::title)
    .theme(ScrollerApp::theme)
    .subscription(ScrollerApp::subscription)
    .window_size(Size::new(window.width, window.height))
    .run()
}

pub struct ScrollerApp {
    state: AppState,
    paste: text_editor::Content,
    notifications: NotificationCenter,
    last_frame: Instant,
}

impl ScrollerApp {
    fn boot(config: &StartupConfig, initial_file: Option<PathBuf>) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(config),
            paste: text_editor::Content::new(),
            notifications: NotificationCenter::new(),
            last_frame: Instant::now(),
        };
        app.resize(Size::new(config.window.width, config.window.height));

        let task = match initial_file {
            Some(path) => {
                info!(path = %path.display(), "loading startup file");
                Task::perform(commands::load_text_from_path(path), Message::FileLoaded)
            }
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        format!("Scroller - {}", self.state.display().source())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn paste_content(&self) -> &text_editor::Content {
        &self.paste
    }

    pub(crate) fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => {
                let delta = now.saturating_duration_since(self.last_frame);
                self.last_frame = now;
                self.notifications.tick(delta);
                self.clear_messages_when_quiet();
                self.dispatch(ScrollCommand::Pump);
            }
            Message::WindowResized(size) => self.resize(size),
            Message::Shortcut(id) => return self.run_shortcut(id),
            Message::TogglePause => self.dispatch(ScrollCommand::TogglePause),
            Message::SpeedChanged(speed_ms) => self.dispatch(ScrollCommand::SetSpeed(speed_ms)),
            Message::SeekChanged(line) => self.dispatch(ScrollCommand::Seek(line as usize)),
            Message::OpenFileRequested => return open_file(),
            Message::FileLoaded(result) => match result {
                Ok(Some(loaded)) => self.dispatch(ScrollCommand::ShowLoaded(loaded)),
                Ok(None) => debug!("file dialog cancelled"),
                Err(err) => {
                    let outcome = self.state.report_load_failure(&err);
                    self.apply(outcome);
                }
            },
            Message::ResetRequested => self.dispatch(ScrollCommand::Reset),
            Message::SettingsOpened => self.state.open_settings(),
            Message::SettingsClosed => self.state.close_settings(),
            Message::SettingsCategorySelected(category) => {
                self.state.settings_mut().select_category(category);
            }
            Message::FontFamilySelected(family) => {
                self.state.settings_mut().set_font_family(family);
            }
            Message::FontSizeChanged(size) => self.state.settings_mut().set_font_size(size),
            Message::FontWeightSelected(weight) => {
                self.state.settings_mut().set_font_weight(weight);
            }
            Message::FontStyleSelected(style) => self.state.settings_mut().set_font_style(style),
            Message::FontApplied => {
                let outcome = self.state.apply_font_draft();
                self.apply(outcome);
            }
            Message::FontCancelled => self.state.settings_mut().cancel_font(),
            Message::ColorChannelChanged(channel, value) => {
                self.state.settings_mut().set_color_channel(channel, value);
            }
            Message::ColorHexChanged(value) => self.state.settings_mut().set_hex_input(value),
            Message::ColorApplied => {
                let outcome = self.state.apply_color_draft();
                self.apply(outcome);
            }
            Message::ColorCancelled => self.state.settings_mut().cancel_color(),
            Message::PasteAction(action) => self.paste.perform(action),
            Message::PasteApplied => {
                let text = self.paste.text();
                self.dispatch(ScrollCommand::PasteText(text));
            }
            Message::PasteCleared => self.paste = text_editor::Content::new(),
            Message::NotificationDismissed(id) => {
                self.notifications.dismiss(id);
                self.clear_messages_when_quiet();
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        views::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(listen);

        let interval = if self.state.is_auto_advancing() {
            Some(FRAME_INTERVAL)
        } else if self.notifications.has_active() {
            Some(NOTIFICATION_INTERVAL)
        } else {
            None
        };

        match interval {
            Some(interval) => Subscription::batch([events, time::every(interval).map(Message::Frame)]),
            None => events,
        }
    }

    fn run_shortcut(&mut self, id: ShortcutId) -> Task<Message> {
        match id {
            ShortcutId::TogglePause => self.dispatch(ScrollCommand::TogglePause),
            ShortcutId::SlowDown => {
                let outcome = self.state.step_speed(1);
                self.apply(outcome);
            }
            ShortcutId::SpeedUp => {
                let outcome = self.state.step_speed(-1);
                self.apply(outcome);
            }
            ShortcutId::OpenFile => return open_file(),
            ShortcutId::OpenSettings => self.state.open_settings(),
            ShortcutId::Reset => self.dispatch(ScrollCommand::Reset),
            ShortcutId::CloseSettings => {
                if self.state.settings().is_open() {
                    self.state.close_settings();
                }
            }
        }
        Task::none()
    }

    /// The status bar repeats the latest toast; both go away together.
    fn clear_messages_when_quiet(&mut self) {
        if !self.notifications.has_active() {
            self.state.clear_messages();
        }
    }

    fn resize(&mut self, size: Size) {
        let width = (size.width - CHROME_WIDTH).max(0.0);
        let height = (size.height - CHROME_HEIGHT).max(0.0);
        self.dispatch(ScrollCommand::Resize { width, height });
    }

    fn dispatch(&mut self, command: ScrollCommand) {
        let outcome = self.state.dispatch(command);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        if let Some(notice) = outcome.notice {
            if !self.notifications.has_active() {
                self.last_frame = Instant::now();
            }
            self.notifications.push(notice);
        }
    }
}

fn open_file() -> Task<Message> {
    Task::perform(commands::pick_text_file(), Message::FileLoaded)
}

fn listen(event: iced::Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        iced::Event::Keyboard(key_event) if matches!(status, event::Status::Ignored) => {
            keyboard::shortcut_from_iced(&key_event).map(Message::Shortcut)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroller_core::read_text;
    use tempfile::tempdir;

    fn app() -> ScrollerApp {
        let (app, _) = ScrollerApp::boot(&StartupConfig::default(), None);
        app
    }

    #[test]
    fn status_message_expires_with_its_notification() {
        let mut app = app();
        let dir = tempdir().unwrap();
        let err = read_text(dir.path().join("gone.txt")).unwrap_err();

        let _ = app.update(Message::FileLoaded(Err(err)));
        assert!(app.state().error().is_some());
        assert!(app.notifications().has_active());

        let _ = app.update(Message::Frame(Instant::now() + Duration::from_secs(1)));
        assert!(app.state().error().is_some());

        let _ = app.update(Message::Frame(Instant::now() + Duration::from_secs(10)));
        assert!(!app.notifications().has_active());
        assert!(app.state().error().is_none());
    }

    #[test]
    fn dismissing_the_last_notification_clears_the_status_message() {
        let mut app = app();
        let _ = app.update(Message::ResetRequested);
        assert_eq!(app.state().notice(), Some("Font, color and speed restored"));

        let id = app.notifications().notifications()[0].id;
        let _ = app.update(Message::NotificationDismissed(id));
        assert!(app.state().notice().is_none());
    }
}
