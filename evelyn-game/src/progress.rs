use serde::{Deserialize, Serialize};

use crate::constants::{LEVEL_THRESHOLDS, XP_PER_MISSION};

/// XP earned for a number of completed missions.
#[must_use]
pub fn xp_for_missions(missions: usize) -> u32 {
    u32::try_from(missions)
        .unwrap_or(u32::MAX)
        .saturating_mul(XP_PER_MISSION)
}

/// Highest level whose threshold the XP total has reached.
#[must_use]
pub fn xp_to_level(xp: u32) -> u8 {
    let mut level = 0_u8;
    for (idx, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if xp >= *threshold {
            level = u8::try_from(idx).unwrap_or(u8::MAX);
        }
    }
    level
}

/// Snapshot shown on the home screen and in the trophy room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub xp: u32,
    pub level: u8,
    /// XP needed for the next level, `None` at max level.
    pub next_threshold: Option<u32>,
}

impl Progress {
    #[must_use]
    pub fn from_missions(missions: usize) -> Self {
        Self::from_xp(xp_for_missions(missions))
    }

    #[must_use]
    pub fn from_xp(xp: u32) -> Self {
        let level = xp_to_level(xp);
        Self {
            xp,
            level,
            next_threshold: LEVEL_THRESHOLDS.get(usize::from(level) + 1).copied(),
        }
    }

    #[must_use]
    pub const fn is_max_level(&self) -> bool {
        self.next_threshold.is_none()
    }
}
