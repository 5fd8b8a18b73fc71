use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANG_TAG, FRENCH_LANG_TAG};

/// Narration language. Only English and French templates exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Resolve a BCP-47 style tag. Anything not starting with `fr` is English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("fr") {
            Self::French
        } else {
            Self::English
        }
    }

    /// Canonical speech tag for this language.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => DEFAULT_LANG_TAG,
            Self::French => FRENCH_LANG_TAG,
        }
    }

    /// Short UI locale code.
    #[must_use]
    pub const fn ui_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English (UK)",
            Self::French => "Français",
        }
    }

    pub const ALL: [Self; 2] = [Self::English, Self::French];
}
