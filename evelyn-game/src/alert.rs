//! Incoming-call pulse played on the alert screen.
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALERT_BASE_INTERVAL_MS, ALERT_INTERVAL_STEP_MS, ALERT_METER_MAX, ALERT_METER_STEP,
    ALERT_MIN_INTERVAL_MS, INCOMING_CALL_PHRASE,
};

/// What a single pulse tick plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertCue {
    Siren { intensity: u8 },
    Call { phrase: &'static str, rate: f32, pitch: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPulse {
    intensity: u8,
    tick: u32,
    meter: u8,
}

impl AlertPulse {
    #[must_use]
    pub const fn new(intensity: u8) -> Self {
        Self {
            intensity,
            tick: 0,
            meter: 0,
        }
    }

    /// Milliseconds between ticks for this intensity.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        ALERT_BASE_INTERVAL_MS
            .saturating_sub(ALERT_INTERVAL_STEP_MS.saturating_mul(u32::from(self.intensity)))
            .clamp(ALERT_MIN_INTERVAL_MS, ALERT_BASE_INTERVAL_MS)
    }

    /// Advance one tick. Even ticks sound the siren, odd ticks speak the call.
    pub fn tick(&mut self) -> AlertCue {
        let cue = if self.tick % 2 == 0 {
            AlertCue::Siren {
                intensity: self.intensity,
            }
        } else {
            let level = f32::from(self.intensity);
            AlertCue::Call {
                phrase: INCOMING_CALL_PHRASE,
                rate: 0.05_f32.mul_add(level, 0.95),
                pitch: 0.05_f32.mul_add(level, 1.0),
            }
        };
        self.tick = self.tick.wrapping_add(1);
        self.meter = if self.meter >= ALERT_METER_MAX {
            0
        } else {
            self.meter + ALERT_METER_STEP
        };
        cue
    }

    /// Urgency meter in percent.
    #[must_use]
    pub const fn meter(&self) -> u8 {
        self.meter
    }

    #[must_use]
    pub const fn ticks(&self) -> u32 {
        self.tick
    }
}

impl Default for AlertPulse {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_alternate_starting_with_siren() {
        let mut pulse = AlertPulse::default();
        assert!(matches!(pulse.tick(), AlertCue::Siren { intensity: 1 }));
        match pulse.tick() {
            AlertCue::Call { phrase, rate, pitch } => {
                assert_eq!(phrase, "INCOMING MISSION");
                assert!((rate - 1.0).abs() < 1e-6);
                assert!((pitch - 1.05).abs() < 1e-6);
            }
            AlertCue::Siren { .. } => panic!("odd tick should speak"),
        }
        assert!(matches!(pulse.tick(), AlertCue::Siren { .. }));
    }

    #[test]
    fn meter_climbs_then_wraps() {
        let mut pulse = AlertPulse::default();
        let readings: Vec<u8> = (0..6)
            .map(|_| {
                pulse.tick();
                pulse.meter()
            })
            .collect();
        assert_eq!(readings, [25, 50, 75, 100, 0, 25]);
    }

    #[test]
    fn interval_is_clamped() {
        assert_eq!(AlertPulse::new(0).interval_ms(), 900);
        assert_eq!(AlertPulse::new(1).interval_ms(), 750);
        assert_eq!(AlertPulse::new(3).interval_ms(), 450);
        assert_eq!(AlertPulse::new(10).interval_ms(), 450);
    }
}
