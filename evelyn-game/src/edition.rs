use serde::{Deserialize, Serialize};

/// Product variant compiled into the app.
///
/// `Badges` rolls rarity badges and can gate missions behind the AR scan;
/// `Photos` has a single commander and records captured photos instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    #[default]
    Badges,
    Photos,
}

impl Edition {
    #[must_use]
    pub const fn supports_ar(self) -> bool {
        matches!(self, Self::Badges)
    }

    #[must_use]
    pub const fn includes_hazard(self) -> bool {
        matches!(self, Self::Badges)
    }

    #[must_use]
    pub const fn captures_photos(self) -> bool {
        matches!(self, Self::Photos)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Badges => "badges",
            Self::Photos => "photos",
        }
    }
}
