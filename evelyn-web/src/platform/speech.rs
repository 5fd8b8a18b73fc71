//! Speech synthesis narrator.
use evelyn_game::{Narrator, VoiceConfig};

#[derive(Debug, Clone, Copy, Default)]
pub struct WebNarrator;

#[cfg(target_arch = "wasm32")]
fn synth() -> Option<web_sys::SpeechSynthesis> {
    crate::dom::window().and_then(|win| win.speech_synthesis().ok())
}

impl Narrator for WebNarrator {
    fn speak(&self, text: &str, voice: &VoiceConfig) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(synth) = synth() else {
                log::debug!("speech synthesis unavailable");
                return;
            };
            match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
                Ok(utterance) => {
                    utterance.set_lang(voice.language.tag());
                    utterance.set_rate(voice.rate);
                    utterance.set_pitch(voice.pitch);
                    synth.cancel();
                    synth.speak(&utterance);
                }
                Err(err) => log::debug!("utterance rejected: {}", crate::dom::js_error_message(&err)),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        log::debug!("narrate [{}]: {text}", voice.language.tag());
    }

    fn cancel(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(synth) = synth() {
                synth.cancel();
            }
        }
    }
}
