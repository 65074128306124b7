//! Glyphs for task rows, controls and notices.
//!
//! Three sets are available: emoji, plain Unicode and ASCII for terminals
//! without good font coverage. The set is picked once from `display.icon_theme`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    Emoji,
    #[default]
    Unicode,
    Ascii,
}

/// Per-row task controls
#[derive(Debug, Clone, Copy)]
pub struct ControlIcons {
    pub move_up: &'static str,
    pub move_down: &'static str,
    pub complete: &'static str,
    pub delete: &'static str,
}

/// Every glyph of one theme
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub pending: &'static str,
    pub completed: &'static str,
    pub controls: ControlIcons,
    pub error: &'static str,
    pub info: &'static str,
    pub user: &'static str,
}

const EMOJI: IconSet = IconSet {
    pending: "🔳",
    completed: "✅",
    controls: ControlIcons {
        move_up: "⬆",
        move_down: "⬇",
        complete: "✅",
        delete: "❌",
    },
    error: "❌",
    info: "ℹ️",
    user: "👤",
};

const UNICODE: IconSet = IconSet {
    pending: "□",
    completed: "✓",
    controls: ControlIcons {
        move_up: "↑",
        move_down: "↓",
        complete: "✓",
        delete: "✗",
    },
    error: "✗",
    info: "ℹ",
    user: "●",
};

const ASCII: IconSet = IconSet {
    pending: "[ ]",
    completed: "[x]",
    controls: ControlIcons {
        move_up: "^",
        move_down: "v",
        complete: "+",
        delete: "x",
    },
    error: "!",
    info: "i",
    user: "@",
};

#[derive(Debug, Clone, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    #[must_use]
    pub fn icons(&self) -> &'static IconSet {
        match self.theme {
            IconTheme::Emoji => &EMOJI,
            IconTheme::Unicode => &UNICODE,
            IconTheme::Ascii => &ASCII,
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().completed
    }

    #[must_use]
    pub fn controls(&self) -> ControlIcons {
        self.icons().controls
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().info
    }

    #[must_use]
    pub fn user(&self) -> &'static str {
        self.icons().user
    }
}
