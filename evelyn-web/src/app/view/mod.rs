mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::neon_frame::NeonFrame;
use crate::components::top_bar::TopBar;
use crate::router::Route;
use evelyn_game::{Event, Phase};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = phases::render_main_view(state, &handlers, route);
    let on_home = state.control.phase() == Phase::Home && !matches!(route, Some(Route::NotFound));

    html! {
        <>
            <a href="#main" class="sr-only">{ crate::i18n::t("app.skip") }</a>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <NeonFrame pattern={*state.pattern}>
                if on_home {
                    <TopBar
                        on_trophies={handlers.on(Event::OpenTrophies)}
                        on_settings={handlers.on(Event::OpenSettings)}
                    />
                }
                <main id="main" role="main" lang={(*state.current_language).clone()}>
                    { main_view }
                </main>
                <div id="live-status" class="sr-only" role="status" aria-live="polite"></div>
            </NeonFrame>
        </>
    }
}
