use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_trophies: Callback<()>,
    pub on_settings: Callback<()>,
}

#[function_component(TopBar)]
pub fn top_bar(p: &Props) -> Html {
    let trophies = {
        let cb = p.on_trophies.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings = {
        let cb = p.on_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <nav class="top-bar" aria-label={t("nav.label")}>
            <button type="button" class="btn btn-outline" onclick={trophies}>{ t("nav.trophies") }</button>
            <button type="button" class="btn btn-outline" onclick={settings}>{ t("nav.settings") }</button>
        </nav>
    }
}
