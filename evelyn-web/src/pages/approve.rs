use crate::i18n::{t, tr};
use evelyn_game::Mission;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ApprovePageProps {
    pub mission: Mission,
    pub on_edit: Callback<()>,
    pub on_shuffle: Callback<()>,
    pub on_approve: Callback<()>,
}

#[function_component(ApprovePage)]
pub fn approve_page(props: &ApprovePageProps) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let mission = &props.mission;
    let mut args = BTreeMap::new();
    args.insert("task", mission.task.as_str());

    html! {
        <section class="screen" data-testid="approve-screen">
            <div class="eyebrow">{ t("approve.eyebrow") }</div>
            <div class="commander-row">
                <div class="emblem" title={t("approve.emblem")}>{ mission.commander.emblem.clone() }</div>
                <div>
                    <h2>{ mission.commander.name.clone() }</h2>
                    <div class="muted">{ tr("approve.mission", Some(&args)) }</div>
                </div>
            </div>
            <div class="muted">{ t("approve.story_label") }</div>
            <div class="story-box radar">{ mission.backstory.clone() }</div>
            if mission.require_ar {
                <div class="notice">{ t("approve.ar_notice") }</div>
            }
            <div class="button-row push-bottom">
                <button type="button" class="btn btn-outline" onclick={emit(&props.on_edit)}>{ t("approve.edit") }</button>
                <button type="button" class="btn btn-outline" onclick={emit(&props.on_shuffle)}>{ t("approve.shuffle") }</button>
                <button type="button" class="btn btn-accent" onclick={emit(&props.on_approve)}>{ t("approve.approve") }</button>
            </div>
        </section>
    }
}
