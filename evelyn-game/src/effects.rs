//! Side effects requested by transitions and the host capabilities that play them.
//!
//! The core never touches audio, speech or the camera directly. A transition
//! returns [`Effects`]; the shell hands them to [`play_effects`] together with
//! its platform implementations of the capability traits.
use smallvec::SmallVec;

use crate::settings::VoiceConfig;

/// Short synthesized sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Siren { intensity: u8 },
    RadioBeep,
    TagBlip,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Speak `text`, cancelling any narration in flight.
    Narrate { text: String, voice: VoiceConfig },
    CancelNarration,
    Tone(Tone),
    AcquireCamera,
    ReleaseCamera,
}

/// Most transitions emit at most a couple of effects.
pub type Effects = SmallVec<[Effect; 4]>;

/// Speech output. Implementations swallow host failures.
pub trait Narrator {
    fn speak(&self, text: &str, voice: &VoiceConfig);
    fn cancel(&self);
}

pub trait ToneEmitter {
    fn play(&self, tone: Tone);
}

/// Rear camera feed used by the scanner and photo capture.
pub trait Camera {
    fn acquire(&self);
    fn release(&self);
}

/// Host-provided "add to home screen" prompt.
pub trait InstallPrompter {
    /// Whether the host has signalled that installation is possible.
    fn is_eligible(&self) -> bool;
    /// Show the prompt. Eligibility is cleared whether or not the user accepts.
    fn prompt(&self);
}

/// Borrowed set of capabilities used to play a batch of effects.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub narrator: &'a dyn Narrator,
    pub tones: &'a dyn ToneEmitter,
    pub camera: &'a dyn Camera,
}

/// Play effects in order.
pub fn play_effects(effects: &[Effect], caps: Capabilities<'_>) {
    for effect in effects {
        match effect {
            Effect::Narrate { text, voice } => {
                caps.narrator.cancel();
                caps.narrator.speak(text, voice);
            }
            Effect::CancelNarration => caps.narrator.cancel(),
            Effect::Tone(tone) => caps.tones.play(*tone),
            Effect::AcquireCamera => caps.camera.acquire(),
            Effect::ReleaseCamera => caps.camera.release(),
        }
    }
}

/// Eligibility latch for the install affordance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOffer {
    eligible: bool,
}

impl InstallOffer {
    /// Host signalled that the app can be installed.
    pub fn signal(&mut self) {
        self.eligible = true;
    }

    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Consume the offer. Returns `true` only the first time after a signal.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.eligible)
    }
}
