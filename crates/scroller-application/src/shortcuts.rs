#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShortcutId {
    TogglePause,
    SlowDown,
    SpeedUp,
    OpenFile,
    OpenSettings,
    Reset,
    CloseSettings,
}

#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub id: ShortcutId,
    pub title: &'static str,
    pub description: &'static str,
    pub keys: &'static str,
}

static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        id: ShortcutId::TogglePause,
        title: "Pause / Resume",
        description: "Start or stop automatic scrolling",
        keys: "Space",
    },
    Shortcut {
        id: ShortcutId::SlowDown,
        title: "Slower",
        description: "Wait one more millisecond between lines",
        keys: "Down",
    },
    Shortcut {
        id: ShortcutId::SpeedUp,
        title: "Faster",
        description: "Wait one millisecond less between lines",
        keys: "Up",
    },
    Shortcut {
        id: ShortcutId::OpenFile,
        title: "Upload Text File…",
        description: "Pick a text file to scroll",
        keys: "Ctrl+O",
    },
    Shortcut {
        id: ShortcutId::OpenSettings,
        title: "Settings",
        description: "Change font, color or paste text",
        keys: "Ctrl+,",
    },
    Shortcut {
        id: ShortcutId::Reset,
        title: "Reset",
        description: "Restore the startup font, color and speed",
        keys: "Ctrl+R",
    },
    Shortcut {
        id: ShortcutId::CloseSettings,
        title: "Close Settings",
        description: "Leave the settings panel without applying drafts",
        keys: "Escape",
    },
];

pub fn list() -> &'static [Shortcut] {
    SHORTCUTS
}
