use serde::{Deserialize, Serialize};
use std::fmt;

/// Named screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Home,
    Lore,
    Compose,
    Approve,
    Alert,
    Briefing,
    Ar,
    Active,
    Success,
    Trophies,
    Settings,
}

impl Phase {
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Lore,
        Self::Compose,
        Self::Approve,
        Self::Alert,
        Self::Briefing,
        Self::Ar,
        Self::Active,
        Self::Success,
        Self::Trophies,
        Self::Settings,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lore => "lore",
            Self::Compose => "compose",
            Self::Approve => "approve",
            Self::Alert => "alert",
            Self::Briefing => "briefing",
            Self::Ar => "ar",
            Self::Active => "active",
            Self::Success => "success",
            Self::Trophies => "trophies",
            Self::Settings => "settings",
        }
    }

    /// Phases that require a mission draft to render.
    #[must_use]
    pub const fn needs_mission(self) -> bool {
        matches!(
            self,
            Self::Approve | Self::Alert | Self::Briefing | Self::Ar | Self::Active | Self::Success
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User intent fed into the mission controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Start,
    ShowStory,
    OpenTrophies,
    OpenSettings,
    Back,
    Generate { task: String },
    Cancel,
    Approve,
    Edit,
    Shuffle,
    Answer,
    Dismiss,
    Begin,
    OpenScanner,
    Tag { target: u8 },
    ScanDone,
    CloseScanner,
    CapturePhotos { photos: Vec<String> },
    MarkComplete { date: String },
    ViewRewards,
    GoHome,
    Close,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ShowStory => "show_story",
            Self::OpenTrophies => "open_trophies",
            Self::OpenSettings => "open_settings",
            Self::Back => "back",
            Self::Generate { .. } => "generate",
            Self::Cancel => "cancel",
            Self::Approve => "approve",
            Self::Edit => "edit",
            Self::Shuffle => "shuffle",
            Self::Answer => "answer",
            Self::Dismiss => "dismiss",
            Self::Begin => "begin",
            Self::OpenScanner => "open_scanner",
            Self::Tag { .. } => "tag",
            Self::ScanDone => "scan_done",
            Self::CloseScanner => "close_scanner",
            Self::CapturePhotos { .. } => "capture_photos",
            Self::MarkComplete { .. } => "mark_complete",
            Self::ViewRewards => "view_rewards",
            Self::GoHome => "go_home",
            Self::Close => "close",
        }
    }
}
