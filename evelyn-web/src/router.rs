use yew_router::prelude::*;

/// Screens are driven by the mission phase, not the URL. The router only
/// separates the app shell from unknown paths.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}
