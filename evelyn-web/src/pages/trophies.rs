use crate::components::badge_card::LogEntryCard;
use crate::i18n::{t, tr};
use evelyn_game::{LogEntry, Progress};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TrophiesPageProps {
    /// Log entries, newest first.
    pub entries: Vec<LogEntry>,
    pub progress: Progress,
    pub on_back: Callback<()>,
}

#[function_component(TrophiesPage)]
pub fn trophies_page(props: &TrophiesPageProps) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let level = props.progress.level.to_string();
    let xp = props.progress.xp.to_string();
    let count = props.entries.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("level", level.as_str());
    args.insert("xp", xp.as_str());
    args.insert("count", count.as_str());

    html! {
        <section class="screen" data-testid="trophies-screen">
            <div class="eyebrow">{ t("trophies.eyebrow") }</div>
            <div class="muted">{ tr("home.progress", Some(&args)) }</div>
            <div class="muted">{ tr("trophies.count", Some(&args)) }</div>
            <div class="trophy-list">
                { for props.entries.iter().enumerate().map(|(idx, entry)| html! {
                    <LogEntryCard key={idx} entry={entry.clone()} />
                }) }
                if props.entries.is_empty() {
                    <div class="muted">{ t("trophies.empty") }</div>
                }
            </div>
            <button type="button" class="btn btn-outline push-bottom" onclick={back}>{ t("common.back") }</button>
        </section>
    }
}
