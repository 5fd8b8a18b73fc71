use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// App shell. Outside a router (server rendering) the home route is assumed.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    #[cfg(target_arch = "wasm32")]
    let (route, navigator) = (use_route::<Route>(), use_navigator());
    #[cfg(not(target_arch = "wasm32"))]
    let (route, navigator): (Option<Route>, Option<Navigator>) = (None, None);

    view::render_app(&app_state, route.as_ref(), navigator)
}

#[cfg(test)]
mod tests {
    use super::AppInner;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn shell_renders_home_with_navigation() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<AppInner>::new().render());
        assert!(html.contains("Start Mission"));
        assert!(html.contains("Level 0 • XP 0"));
        assert!(html.contains("Trophies"));
        assert!(html.contains("live-status"));
        assert!(html.contains("bulb wave"));
    }
}
