use crate::app::state::{AppState, Control};
use crate::platform::WebInstallPrompter;
use crate::router::Route;
use evelyn_game::{Event, InstallPrompter, LightPattern, PhaseError, SettingsDraft};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub dispatch: Callback<Event>,
    pub mark_complete: Callback<()>,
    pub capture_photos: Callback<Vec<String>>,
    pub rival_change: Callback<String>,
    pub require_ar_change: Callback<bool>,
    pub unlock: Callback<String>,
    pub apply_settings: Callback<SettingsDraft>,
    pub pattern_change: Callback<LightPattern>,
    pub install: Callback<()>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        let dispatch = build_dispatch(state);
        Self {
            mark_complete: build_mark_complete(state, dispatch.clone()),
            capture_photos: build_capture_photos(dispatch.clone()),
            rival_change: build_rival_change(state),
            require_ar_change: build_require_ar_change(state),
            unlock: build_unlock(state),
            apply_settings: build_apply_settings(state),
            pattern_change: build_pattern_change(state),
            install: build_install(state),
            go_home: build_go_home(navigator),
            dispatch,
        }
    }

    /// Callback that fires a fixed event.
    #[must_use]
    pub fn on(&self, event: Event) -> Callback<()> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |()| dispatch.emit(event.clone()))
    }
}

fn report_rejection(err: &PhaseError) {
    log::debug!("event ignored: {err}");
    crate::a11y::set_status(&err.to_string());
}

/// Run `event` on a copy of the controller, commit it and play the effects.
fn dispatch_on(control: &UseStateHandle<Control>, event: Event) {
    let mut next = (**control).clone();
    match next.dispatch(event) {
        Ok(effects) => {
            control.set(next);
            crate::platform::play(&effects);
        }
        Err(err) => report_rejection(&err),
    }
}

fn build_dispatch(state: &AppState) -> Callback<Event> {
    let control = state.control.clone();
    Callback::from(move |event: Event| dispatch_on(&control, event))
}

fn build_mark_complete(state: &AppState, dispatch: Callback<Event>) -> Callback<()> {
    let control = state.control.clone();
    let celebration = state.celebration.clone();
    Callback::from(move |()| {
        let date = crate::dom::today_label(control.voice().language.tag());
        celebration.set(crate::dom::random_seed());
        dispatch.emit(Event::MarkComplete { date });
    })
}

fn build_capture_photos(dispatch: Callback<Event>) -> Callback<Vec<String>> {
    Callback::from(move |urls: Vec<String>| {
        let photos = crate::platform::photos::accept_photos(urls);
        if !photos.is_empty() {
            dispatch.emit(Event::CapturePhotos { photos });
        }
    })
}

fn build_rival_change(state: &AppState) -> Callback<String> {
    let control = state.control.clone();
    Callback::from(move |name: String| {
        let mut next = (*control).clone();
        next.set_rival_name(name);
        control.set(next);
    })
}

fn build_require_ar_change(state: &AppState) -> Callback<bool> {
    let control = state.control.clone();
    Callback::from(move |require: bool| {
        let mut next = (*control).clone();
        next.set_require_ar(require);
        control.set(next);
    })
}

fn build_unlock(state: &AppState) -> Callback<String> {
    let control = state.control.clone();
    Callback::from(move |pin: String| {
        let mut next = (*control).clone();
        if next.unlock_settings(&pin) {
            crate::a11y::focus_element("voice-lang");
        }
        control.set(next);
    })
}

fn build_apply_settings(state: &AppState) -> Callback<SettingsDraft> {
    let control = state.control.clone();
    let current_language = state.current_language.clone();
    Callback::from(move |draft: SettingsDraft| {
        let mut next = (*control).clone();
        match next.apply_settings(&draft) {
            Ok(()) => {
                let ui_code = next.voice().language.ui_code();
                crate::i18n::set_lang(ui_code);
                current_language.set(ui_code.to_string());
                control.set(next);
            }
            Err(err) => report_rejection(&err),
        }
    })
}

fn build_pattern_change(state: &AppState) -> Callback<LightPattern> {
    let pattern = state.pattern.clone();
    Callback::from(move |next: LightPattern| pattern.set(next))
}

fn build_install(state: &AppState) -> Callback<()> {
    let offer = state.install_offer.clone();
    Callback::from(move |()| {
        let mut next = *offer;
        if next.take() {
            let prompter = WebInstallPrompter;
            if prompter.is_eligible() {
                prompter.prompt();
            }
        }
        offer.set(next);
    })
}

fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}
