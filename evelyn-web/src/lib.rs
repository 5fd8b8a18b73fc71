#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod platform;
pub mod router;

use evelyn_game::Edition;

/// Edition selected by the `photo-log` feature.
#[must_use]
pub const fn edition() -> Edition {
    if cfg!(feature = "photo-log") {
        Edition::Photos
    } else {
        Edition::Badges
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Sync <html lang> with the saved UI locale before first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
