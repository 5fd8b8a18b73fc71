use crate::platform::WebLogStorage;
use evelyn_game::{InstallOffer, Language, LightPattern, MissionControl};
use yew::prelude::*;

pub type Control = MissionControl<WebLogStorage>;

#[derive(Clone)]
pub struct AppState {
    pub control: UseStateHandle<Control>,
    pub pattern: UseStateHandle<LightPattern>,
    pub install_offer: UseStateHandle<InstallOffer>,
    pub current_language: UseStateHandle<String>,
    /// Bumped on each completion to reseed the confetti burst.
    pub celebration: UseStateHandle<u64>,
}

fn initial_control() -> Control {
    let mut control = MissionControl::new(crate::edition(), WebLogStorage, crate::dom::random_seed());
    control.set_language(Language::from_tag(&crate::i18n::current_lang()));
    control
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        control: use_state(initial_control),
        pattern: use_state(LightPattern::default),
        install_offer: use_state(InstallOffer::default),
        current_language: use_state(crate::i18n::current_lang),
        celebration: use_state(|| 0_u64),
    }
}
