//! Browser implementations of the mission engine's capability traits.
pub mod audio;
pub mod camera;
pub mod install;
pub mod photos;
pub mod speech;
pub mod storage;

pub use audio::WebTones;
pub use camera::WebCamera;
pub use install::WebInstallPrompter;
pub use speech::WebNarrator;
pub use storage::{WebLogStorage, WebStorageError};

use evelyn_game::{Capabilities, Effect, play_effects};

static NARRATOR: WebNarrator = WebNarrator;
static TONES: WebTones = WebTones;
static CAMERA: WebCamera = WebCamera;

/// Capabilities backed by the browser.
#[must_use]
pub fn capabilities() -> Capabilities<'static> {
    Capabilities {
        narrator: &NARRATOR,
        tones: &TONES,
        camera: &CAMERA,
    }
}

/// Play a batch of transition effects in the browser.
pub fn play(effects: &[Effect]) {
    play_effects(effects, capabilities());
}
