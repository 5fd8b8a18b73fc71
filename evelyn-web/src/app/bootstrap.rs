use crate::app::state::AppState;
use yew::prelude::*;

/// One-time startup wiring: the install prompt listener.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let offer = app_state.install_offer.clone();
    use_effect_with((), move |_| {
        crate::platform::install::listen_for_install(move || {
            let mut next = *offer;
            next.signal();
            offer.set(next);
            log::debug!("install prompt available");
        });
        || ()
    });
}
