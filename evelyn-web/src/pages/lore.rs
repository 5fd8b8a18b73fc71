use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LorePageProps {
    pub lore: AttrValue,
    pub on_back: Callback<()>,
}

#[function_component(LorePage)]
pub fn lore_page(props: &LorePageProps) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="screen" data-testid="lore-screen">
            <div class="eyebrow">{ t("lore.eyebrow") }</div>
            <h2>{ t("lore.title") }</h2>
            <div class="story-box">{ props.lore.clone() }</div>
            <p class="muted">{ t("lore.outro") }</p>
            <button type="button" class="btn btn-primary push-bottom" onclick={back}>{ t("common.back") }</button>
        </section>
    }
}
