use crate::i18n::{t, tr};
use evelyn_game::Mission;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BriefingPageProps {
    pub mission: Mission,
    #[prop_or_default]
    pub ar_cleared: bool,
    pub on_begin: Callback<()>,
    pub on_open_scanner: Callback<()>,
}

#[function_component(BriefingPage)]
pub fn briefing_page(props: &BriefingPageProps) -> Html {
    let begin = {
        let cb = props.on_begin.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_scanner = {
        let cb = props.on_open_scanner.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mission = &props.mission;
    let gated = mission.require_ar && !props.ar_cleared;
    let mut args = BTreeMap::new();
    args.insert("task", mission.task.as_str());

    html! {
        <section class="screen" data-testid="briefing-screen">
            <div class="eyebrow">{ t("briefing.eyebrow") }</div>
            <div class="commander-row">
                <div class="emblem">{ mission.commander.emblem.clone() }</div>
                <div>
                    <div class="muted">{ mission.commander.name.clone() }</div>
                    <h2>{ tr("approve.mission", Some(&args)) }</h2>
                </div>
            </div>
            <div class="story-box radar">{ mission.backstory.clone() }</div>
            if gated {
                <div class="notice">{ t("briefing.ar_notice") }</div>
                <button type="button" class="btn btn-accent push-bottom" onclick={open_scanner}>
                    { t("briefing.open_scanner") }
                </button>
            } else {
                if mission.require_ar {
                    <div class="notice success">{ t("briefing.cleared") }</div>
                }
                <button type="button" class="btn btn-primary push-bottom" onclick={begin}>
                    { t("briefing.begin") }
                </button>
            }
        </section>
    }
}
