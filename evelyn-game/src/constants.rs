//! Centralized tuning constants for Agent Evelyn mission logic.
//!
//! Values that shape progression, narration defaults and the AR minigame live
//! here so they can only change through reviewed code.

// Persistence --------------------------------------------------------------
pub const LOG_STORAGE_KEY: &str = "agent-evelyn-log-v1";

// Progression --------------------------------------------------------------
pub const XP_PER_MISSION: u32 = 25;
pub const LEVEL_THRESHOLDS: [u32; 6] = [0, 50, 125, 250, 400, 600];

// Compose defaults ---------------------------------------------------------
pub const DEFAULT_RIVAL_NAME: &str = "Agent Shadow";
pub const FALLBACK_RIVAL_NAME: &str = "a rival agent";

// Narration ----------------------------------------------------------------
pub const DEFAULT_LANG_TAG: &str = "en-GB";
pub const FRENCH_LANG_TAG: &str = "fr-FR";
pub const DEFAULT_VOICE_RATE: f32 = 1.0;
pub const DEFAULT_VOICE_PITCH: f32 = 1.03;
pub const VOICE_RATE_MIN: f32 = 0.7;
pub const VOICE_RATE_MAX: f32 = 1.4;
pub const VOICE_PITCH_MIN: f32 = 0.6;
pub const VOICE_PITCH_MAX: f32 = 1.6;
pub const LORE_PITCH: f32 = 1.03;
pub const INCOMING_CALL_PHRASE: &str = "INCOMING MISSION";

// Alert pulse --------------------------------------------------------------
pub const ALERT_METER_STEP: u8 = 25;
pub const ALERT_METER_MAX: u8 = 100;
pub const ALERT_BASE_INTERVAL_MS: u32 = 900;
pub const ALERT_INTERVAL_STEP_MS: u32 = 150;
pub const ALERT_MIN_INTERVAL_MS: u32 = 450;

// AR minigame --------------------------------------------------------------
pub const AR_TARGET_COUNT: usize = 3;
pub const AR_X_MIN_PCT: f32 = 10.0;
pub const AR_X_SPAN_PCT: f32 = 70.0;
pub const AR_Y_MIN_PCT: f32 = 10.0;
pub const AR_Y_SPAN_PCT: f32 = 55.0;
pub const AR_DRIFT_MIN_SECS: f32 = 6.0;
pub const AR_DRIFT_SPAN_SECS: f32 = 6.0;

// Parent settings ----------------------------------------------------------
pub const PIN_MIN_LEN: usize = 4;
