use iced::keyboard::{key, Event, Key, Modifiers};
use scroller_application::ShortcutId;

/// Maps a raw key press to the shortcut it triggers, if any.
pub fn shortcut_from_iced(event: &Event) -> Option<ShortcutId> {
    match event {
        Event::KeyPressed { key, modifiers, .. } => map_key(key, *modifiers),
        _ => None,
    }
}

fn map_key(key: &Key, modifiers: Modifiers) -> Option<ShortcutId> {
    match key {
        Key::Named(named) if modifiers.is_empty() => match named {
            key::Named::Space => Some(ShortcutId::TogglePause),
            key::Named::ArrowDown => Some(ShortcutId::SlowDown),
            key::Named::ArrowUp => Some(ShortcutId::SpeedUp),
            key::Named::Escape => Some(ShortcutId::CloseSettings),
            _ => None,
        },
        Key::Character(value) if modifiers.command() => {
            match value.chars().next().map(|ch| ch.to_ascii_lowercase()) {
                Some('o') => Some(ShortcutId::OpenFile),
                Some(',') => Some(ShortcutId::OpenSettings),
                Some('r') => Some(ShortcutId::Reset),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(named: key::Named) -> Key {
        Key::Named(named)
    }

    fn character(value: &str) -> Key {
        Key::Character(value.into())
    }

    #[test]
    fn bare_named_keys_map_to_playback_shortcuts() {
        assert_eq!(
            map_key(&named(key::Named::Space), Modifiers::empty()),
            Some(ShortcutId::TogglePause)
        );
        assert_eq!(
            map_key(&named(key::Named::ArrowUp), Modifiers::empty()),
            Some(ShortcutId::SpeedUp)
        );
        assert_eq!(
            map_key(&named(key::Named::Escape), Modifiers::empty()),
            Some(ShortcutId::CloseSettings)
        );
    }

    #[test]
    fn modified_space_is_ignored() {
        assert_eq!(map_key(&named(key::Named::Space), Modifiers::SHIFT), None);
    }

    #[test]
    fn command_letters_need_the_command_modifier() {
        assert_eq!(
            map_key(&character("O"), Modifiers::COMMAND),
            Some(ShortcutId::OpenFile)
        );
        assert_eq!(map_key(&character("o"), Modifiers::empty()), None);
        assert_eq!(
            map_key(&character(","), Modifiers::COMMAND),
            Some(ShortcutId::OpenSettings)
        );
    }
}
