//! Drone-tagging scan that gates a mission start.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AR_DRIFT_MIN_SECS, AR_DRIFT_SPAN_SECS, AR_TARGET_COUNT, AR_X_MIN_PCT, AR_X_SPAN_PCT,
    AR_Y_MIN_PCT, AR_Y_SPAN_PCT,
};

const DRIFT_OFFSET_MIN_PX: f32 = 20.0;
const DRIFT_OFFSET_SPAN_PX: f32 = 20.0;

/// A drone overlay. Position is a percentage of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArTarget {
    pub id: u8,
    pub x: f32,
    pub y: f32,
    /// Drift animation period in seconds.
    pub speed: f32,
    pub drift_dx: f32,
    pub drift_dy: f32,
    pub tagged: bool,
}

impl ArTarget {
    fn spawn<R: Rng + ?Sized>(id: u8, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.r#gen::<f32>().mul_add(AR_X_SPAN_PCT, AR_X_MIN_PCT),
            y: rng.r#gen::<f32>().mul_add(AR_Y_SPAN_PCT, AR_Y_MIN_PCT),
            speed: rng.r#gen::<f32>().mul_add(AR_DRIFT_SPAN_SECS, AR_DRIFT_MIN_SECS),
            drift_dx: rng
                .r#gen::<f32>()
                .mul_add(DRIFT_OFFSET_SPAN_PX, DRIFT_OFFSET_MIN_PX)
                .floor(),
            drift_dy: rng
                .r#gen::<f32>()
                .mul_add(DRIFT_OFFSET_SPAN_PX, DRIFT_OFFSET_MIN_PX)
                .floor(),
            tagged: false,
        }
    }
}

/// One scanner session. No timer and no failure state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArScan {
    targets: Vec<ArTarget>,
}

impl ArScan {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let targets = (1..=AR_TARGET_COUNT)
            .map(|id| ArTarget::spawn(u8::try_from(id).unwrap_or(u8::MAX), rng))
            .collect();
        Self { targets }
    }

    /// Tag a pending target. Returns `false` for unknown or already tagged ids.
    pub fn tag(&mut self, id: u8) -> bool {
        match self.targets.iter_mut().find(|t| t.id == id) {
            Some(target) if !target.tagged => {
                target.tagged = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn found(&self) -> usize {
        self.targets.iter().filter(|t| t.tagged).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(|t| t.tagged)
    }

    #[must_use]
    pub fn targets(&self) -> &[ArTarget] {
        &self.targets
    }
}
