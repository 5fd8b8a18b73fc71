//! Synthesized siren, radio beep and tag blip.
use evelyn_game::{Tone, ToneEmitter};

/// Oscillator envelope for one tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneShape {
    pub wave: Wave,
    pub start_hz: f32,
    /// Frequency sweep as `(hz, seconds from start)`.
    pub sweep: &'static [(f32, f64)],
    pub peak_gain: f32,
    pub attack_secs: f64,
    pub duration_secs: f64,
    /// Vibration pattern in milliseconds, alternating on and off.
    pub vibrate_ms: &'static [u32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
}

const SIREN_SWEEP_UP: f32 = 1.6;
const SILENT_GAIN: f32 = 0.0001;

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shape_for(tone: Tone) -> ToneShape {
    match tone {
        Tone::Siren { intensity } => {
            let level = f32::from(intensity);
            ToneShape {
                wave: Wave::Square,
                start_hz: 60.0_f32.mul_add(level, 480.0),
                sweep: &[(SIREN_SWEEP_UP, 0.12), (1.0, 0.28)],
                peak_gain: 0.28 * level.max(0.1),
                attack_secs: 0.03,
                duration_secs: 0.34,
                vibrate_ms: &[120, 60, 120],
            }
        }
        Tone::RadioBeep => ToneShape {
            wave: Wave::Sine,
            start_hz: 800.0,
            sweep: &[],
            peak_gain: 0.1,
            attack_secs: 0.02,
            duration_secs: 0.2,
            vibrate_ms: &[],
        },
        Tone::TagBlip => ToneShape {
            wave: Wave::Triangle,
            start_hz: 900.0,
            sweep: &[],
            peak_gain: 0.15,
            attack_secs: 0.02,
            duration_secs: 0.18,
            vibrate_ms: &[60],
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebTones;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{SILENT_GAIN, ToneShape, Wave};
    use std::cell::RefCell;
    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, OscillatorType};

    thread_local! {
        static CONTEXT: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
    }

    fn context() -> Result<AudioContext, JsValue> {
        CONTEXT.with(|slot| {
            if let Some(ctx) = slot.borrow().as_ref() {
                return Ok(ctx.clone());
            }
            let ctx = AudioContext::new()?;
            *slot.borrow_mut() = Some(ctx.clone());
            Ok(ctx)
        })
    }

    pub(super) fn play(shape: &ToneShape) -> Result<(), JsValue> {
        let ctx = context()?;
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(match shape.wave {
            Wave::Sine => OscillatorType::Sine,
            Wave::Square => OscillatorType::Square,
            Wave::Triangle => OscillatorType::Triangle,
        });
        osc.frequency().set_value_at_time(shape.start_hz, now)?;
        for (factor, at) in shape.sweep {
            osc.frequency()
                .exponential_ramp_to_value_at_time(shape.start_hz * factor, now + at)?;
        }
        gain.gain().set_value_at_time(SILENT_GAIN, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(shape.peak_gain, now + shape.attack_secs)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(SILENT_GAIN, now + shape.duration_secs)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start()?;
        osc.stop_with_when(now + shape.duration_secs)?;

        if !shape.vibrate_ms.is_empty() {
            if let Some(win) = crate::dom::window() {
                let pattern: js_sys::Array = shape
                    .vibrate_ms
                    .iter()
                    .map(|ms| JsValue::from(*ms))
                    .collect();
                let _ = win.navigator().vibrate_with_pattern(&pattern);
            }
        }
        Ok(())
    }
}

impl ToneEmitter for WebTones {
    fn play(&self, tone: Tone) {
        let shape = shape_for(tone);
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = web::play(&shape) {
                log::debug!("tone {tone:?} failed: {}", crate::dom::js_error_message(&err));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        log::debug!("tone {tone:?} at {} Hz", shape.start_hz);
    }
}
