//! Agent Evelyn mission engine
//!
//! Platform-agnostic core for the Agent Evelyn mission app: backstory
//! generation, badge rolls, the mission log, and the phase state machine.
//! No UI or platform-specific dependencies live here.

pub mod alert;
pub mod ar;
pub mod backstory;
pub mod badge;
pub mod commanders;
pub mod constants;
pub mod edition;
pub mod effects;
pub mod language;
pub mod log_store;
pub mod machine;
pub mod mission;
pub mod phase;
pub mod progress;
pub mod settings;

// Re-export commonly used types
pub use alert::{AlertCue, AlertPulse};
pub use ar::{ArScan, ArTarget};
pub use backstory::{BackstoryRequest, generate as generate_backstory, global_lore};
pub use badge::{Badge, RARITY_TABLE, RarityTier, roll_rarity, tier_for_draw};
pub use commanders::{Commander, CommanderRoster};
pub use edition::Edition;
pub use effects::{
    Camera, Capabilities, Effect, Effects, InstallOffer, InstallPrompter, Narrator, Tone,
    ToneEmitter, play_effects,
};
pub use language::Language;
pub use log_store::{
    LogEntry, LogStorage, MemoryLogStorage, MemoryStorageError, MissionLogStore, Reward, read_log,
};
pub use machine::{MissionControl, PhaseError};
pub use mission::{ComposeOptions, Mission};
pub use phase::{Event, Phase};
pub use progress::{Progress, xp_for_missions, xp_to_level};
pub use settings::{LightPattern, PinGate, SettingsDraft, VoiceConfig, VoiceStyle};
