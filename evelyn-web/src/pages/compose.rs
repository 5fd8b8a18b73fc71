use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ComposePageProps {
    pub date: AttrValue,
    #[prop_or_default]
    pub rival_name: AttrValue,
    #[prop_or_default]
    pub require_ar: bool,
    /// Whether this edition offers the AR gate at all.
    #[prop_or_default]
    pub show_ar_toggle: bool,
    pub on_rival_change: Callback<String>,
    pub on_require_ar_change: Callback<bool>,
    pub on_cancel: Callback<()>,
    /// Receives the trimmed task.
    pub on_generate: Callback<String>,
}

#[function_component(ComposePage)]
pub fn compose_page(props: &ComposePageProps) -> Html {
    let task = use_state(String::new);
    let trimmed = task.trim().to_string();

    let on_task = {
        let task = task.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            task.set(area.value());
        })
    };
    let on_rival = {
        let cb = props.on_rival_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let on_ar = {
        let cb = props.on_require_ar_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let generate = {
        let cb = props.on_generate.clone();
        let trimmed = trimmed.clone();
        Callback::from(move |_| {
            if !trimmed.is_empty() {
                cb.emit(trimmed.clone());
            }
        })
    };

    let mut args = BTreeMap::new();
    args.insert("date", props.date.as_str());

    html! {
        <section class="screen" data-testid="compose-screen">
            <div class="eyebrow">{ tr("compose.console", Some(&args)) }</div>
            <h2>{ t("compose.title") }</h2>
            <label for="task-input">{ t("compose.task_label") }</label>
            <textarea
                id="task-input"
                rows="4"
                value={(*task).clone()}
                placeholder={t("compose.task_placeholder")}
                oninput={on_task}
            />
            <label for="rival-input">{ t("compose.rival_label") }</label>
            <input
                id="rival-input"
                type="text"
                value={props.rival_name.clone()}
                placeholder={t("compose.rival_placeholder")}
                oninput={on_rival}
            />
            if props.show_ar_toggle {
                <label class="checkbox-row">
                    <input type="checkbox" checked={props.require_ar} onchange={on_ar} />
                    { t("compose.require_ar") }
                </label>
            }
            <div class="button-row push-bottom">
                <button type="button" class="btn btn-outline" onclick={cancel}>{ t("common.back") }</button>
                <button type="button" class="btn btn-primary" disabled={trimmed.is_empty()} onclick={generate}>
                    { t("compose.generate") }
                </button>
            </div>
        </section>
    }
}
