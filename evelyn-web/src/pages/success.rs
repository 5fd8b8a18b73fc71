use crate::components::confetti::Confetti;
use crate::i18n::t;
use evelyn_game::Reward;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SuccessPageProps {
    #[prop_or_default]
    pub reward: Option<Reward>,
    #[prop_or_default]
    pub confetti_seed: u64,
    pub on_view_rewards: Callback<()>,
    pub on_home: Callback<()>,
}

#[function_component(SuccessPage)]
pub fn success_page(props: &SuccessPageProps) -> Html {
    let view = {
        let cb = props.on_view_rewards.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let home = {
        let cb = props.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (icon, message) = match &props.reward {
        Some(Reward::Badge { badge }) => (badge.icon.clone(), t("success.badge")),
        Some(Reward::Photos { .. }) => ("📸".to_string(), t("success.photos")),
        None => ("🏅".to_string(), t("success.badge")),
    };

    html! {
        <section class="screen screen-center celebrate" data-testid="success-screen">
            <Confetti seed={props.confetti_seed} />
            <div class="medal">{ icon }</div>
            <h2>{ t("success.title") }</h2>
            <div class="story-box">{ message }</div>
            if let Some(Reward::Badge { badge }) = &props.reward {
                <div class="badge-title" style={format!("color:{}", badge.color)}>{ badge.title.clone() }</div>
            }
            <button type="button" class="btn btn-primary" onclick={view}>{ t("success.view") }</button>
            <button type="button" class="btn btn-outline" onclick={home}>{ t("success.home") }</button>
        </section>
    }
}
