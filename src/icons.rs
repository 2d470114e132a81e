//! Named glyphs for inputs, toggles and social buttons.
//!
//! Two sets are available: Unicode (default) and plain ASCII for terminals
//! without good symbol coverage.

use serde::{Deserialize, Serialize};

use crate::models::{SocialProvider, Theme};

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Unicode,
    Ascii,
}

/// Glyph identifiers used by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Envelope,
    Lock,
    User,
    Eye,
    EyeSlash,
    CheckboxChecked,
    CheckboxEmpty,
    Moon,
    Sun,
    Brand(SocialProvider),
}

impl Icon {
    /// Visibility toggle glyph for the given state
    pub fn visibility(visible: bool) -> Icon {
        if visible {
            Icon::EyeSlash
        } else {
            Icon::Eye
        }
    }

    pub fn checkbox(checked: bool) -> Icon {
        if checked {
            Icon::CheckboxChecked
        } else {
            Icon::CheckboxEmpty
        }
    }

    /// The toggle shows the theme it would switch to
    pub fn theme_toggle(theme: Theme) -> Icon {
        match theme {
            Theme::Light => Icon::Moon,
            Theme::Dark => Icon::Sun,
        }
    }
}

/// Icon provider that returns glyphs for the selected set
#[derive(Debug, Clone, Copy, Default)]
pub struct Icons {
    icon_set: IconSet,
}

impl Icons {
    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self.icon_set {
            IconSet::Unicode => match icon {
                Icon::Envelope => "✉",
                Icon::Lock => "🔒",
                Icon::User => "👤",
                Icon::Eye => "👁",
                Icon::EyeSlash => "◌",
                Icon::CheckboxChecked => "☑",
                Icon::CheckboxEmpty => "☐",
                Icon::Moon => "☾",
                Icon::Sun => "☀",
                Icon::Brand(SocialProvider::GitHub) => "🐙",
                Icon::Brand(SocialProvider::Google) => "G",
                Icon::Brand(SocialProvider::Facebook) => "f",
            },
            IconSet::Ascii => match icon {
                Icon::Envelope => "@",
                Icon::Lock => "*",
                Icon::User => "&",
                Icon::Eye => "o",
                Icon::EyeSlash => "-",
                Icon::CheckboxChecked => "[x]",
                Icon::CheckboxEmpty => "[ ]",
                Icon::Moon => "(",
                Icon::Sun => "O",
                Icon::Brand(SocialProvider::GitHub) => "GH",
                Icon::Brand(SocialProvider::Google) => "G",
                Icon::Brand(SocialProvider::Facebook) => "f",
            },
        }
    }
}
