//! Parent settings: narration voice, style presets and the PIN gate.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_VOICE_PITCH, DEFAULT_VOICE_RATE, PIN_MIN_LEN, VOICE_PITCH_MAX, VOICE_PITCH_MIN,
    VOICE_RATE_MAX, VOICE_RATE_MIN,
};
use crate::language::Language;

/// Speech parameters handed to the narrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    pub language: Language,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            rate: DEFAULT_VOICE_RATE,
            pitch: DEFAULT_VOICE_PITCH,
        }
    }
}

impl VoiceConfig {
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Merge the slider values through a style preset.
    #[must_use]
    pub fn styled(self, rate: f32, pitch: f32, style: VoiceStyle) -> Self {
        let (rate, pitch) = style.apply(clamp_rate(rate), clamp_pitch(pitch));
        Self {
            language: self.language,
            rate,
            pitch,
        }
    }
}

/// Values edited on the settings screen before they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsDraft {
    pub language: Language,
    pub rate: f32,
    pub pitch: f32,
    pub style: VoiceStyle,
}

impl SettingsDraft {
    #[must_use]
    pub fn from_voice(voice: &VoiceConfig) -> Self {
        Self {
            language: voice.language,
            rate: voice.rate,
            pitch: voice.pitch,
            style: VoiceStyle::Serious,
        }
    }

    /// Voice configuration this draft resolves to.
    #[must_use]
    pub fn resolve(&self) -> VoiceConfig {
        VoiceConfig::default()
            .with_language(self.language)
            .styled(self.rate, self.pitch, self.style)
    }
}

#[must_use]
pub fn clamp_rate(rate: f32) -> f32 {
    if rate.is_finite() {
        rate.clamp(VOICE_RATE_MIN, VOICE_RATE_MAX)
    } else {
        DEFAULT_VOICE_RATE
    }
}

#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    if pitch.is_finite() {
        pitch.clamp(VOICE_PITCH_MIN, VOICE_PITCH_MAX)
    } else {
        DEFAULT_VOICE_PITCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceStyle {
    #[default]
    Serious,
    Playful,
    Robot,
    Alien,
}

impl VoiceStyle {
    pub const ALL: [Self; 4] = [Self::Serious, Self::Playful, Self::Robot, Self::Alien];

    /// Resulting `(rate, pitch)` for the chosen base values.
    #[must_use]
    pub fn apply(self, rate: f32, pitch: f32) -> (f32, f32) {
        match self {
            Self::Serious => (rate, pitch),
            Self::Playful => (rate + 0.1, pitch + 0.2),
            Self::Robot => (rate - 0.05, 0.9),
            Self::Alien => (rate + 0.05, 1.3),
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Serious => "serious",
            Self::Playful => "playful",
            Self::Robot => "robot",
            Self::Alien => "alien",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.key() == key)
    }
}

/// Session-only unlock for the parent settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinGate {
    unlocked: bool,
}

impl PinGate {
    /// Any trimmed PIN of at least four characters unlocks. Shorter input relocks.
    pub fn try_unlock(&mut self, pin: &str) -> bool {
        self.unlocked = pin.trim().chars().count() >= PIN_MIN_LEN;
        self.unlocked
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// Neon light animation on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightPattern {
    #[default]
    Wave,
    Spiral,
    Shift,
}

impl LightPattern {
    pub const ALL: [Self; 3] = [Self::Wave, Self::Spiral, Self::Shift];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Spiral => "spiral",
            Self::Shift => "shift",
        }
    }
}
