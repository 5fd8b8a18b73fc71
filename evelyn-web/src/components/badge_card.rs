//! One row of the trophy room.
use evelyn_game::{LogEntry, Reward};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entry: LogEntry,
}

#[function_component(LogEntryCard)]
pub fn log_entry_card(props: &Props) -> Html {
    let entry = &props.entry;
    let meta = format!("{} • {}", entry.date, entry.task);
    match &entry.reward {
        Reward::Badge { badge } => {
            let mut args = BTreeMap::new();
            args.insert("rarity", badge.rarity.as_str());
            html! {
                <article class="trophy-card">
                    <div class="trophy-icon" style={format!("filter:drop-shadow(0 0 10px {})", badge.color)}>
                        { badge.icon.clone() }
                    </div>
                    <div>
                        <div class="trophy-title" style={format!("color:{}", badge.color)}>{ badge.title.clone() }</div>
                        <div class="trophy-meta">{ meta }</div>
                        <div class="trophy-rarity">{ crate::i18n::tr("trophies.rarity", Some(&args)) }</div>
                    </div>
                </article>
            }
        }
        Reward::Photos { photos } => {
            let alt = crate::i18n::t("trophies.photo_alt");
            html! {
                <article class="trophy-card">
                    <div>
                        <div class="trophy-meta">{ meta }</div>
                        <div class="trophy-photos">
                            { for photos.iter().map(|src| html! {
                                <img src={src.clone()} alt={alt.clone()} loading="lazy" />
                            }) }
                        </div>
                    </div>
                </article>
            }
        }
    }
}
