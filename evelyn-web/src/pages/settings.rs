//! Parent settings behind the PIN gate.
use crate::i18n::{t, tr};
use evelyn_game::constants::{VOICE_PITCH_MAX, VOICE_PITCH_MIN, VOICE_RATE_MAX, VOICE_RATE_MIN};
use evelyn_game::{Language, SettingsDraft, VoiceConfig, VoiceStyle};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsPageProps {
    #[prop_or_default]
    pub unlocked: bool,
    pub voice: VoiceConfig,
    pub on_unlock: Callback<String>,
    pub on_apply: Callback<SettingsDraft>,
    pub on_close: Callback<()>,
}

fn slider_label(key: &str, value: f32) -> String {
    let value = format!("{value:.2}");
    let mut args = BTreeMap::new();
    args.insert("value", value.as_str());
    tr(key, Some(&args))
}

fn pin_form(props: &SettingsPageProps, pin: &UseStateHandle<String>, attempted: &UseStateHandle<bool>) -> Html {
    let on_pin = {
        let pin = pin.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pin.set(input.value());
        })
    };
    let unlock = {
        let cb = props.on_unlock.clone();
        let pin = pin.clone();
        let attempted = attempted.clone();
        Callback::from(move |_| {
            attempted.set(true);
            cb.emit((*pin).clone());
        })
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="pin-form">
            <label for="pin-input">{ t("settings.pin_prompt") }</label>
            <input
                id="pin-input"
                type="password"
                inputmode="numeric"
                value={(**pin).clone()}
                placeholder={t("settings.pin_placeholder")}
                oninput={on_pin}
            />
            if **attempted {
                <div class="error" role="alert">{ t("settings.pin_error") }</div>
            }
            <button type="button" class="btn btn-primary" onclick={unlock}>{ t("settings.unlock") }</button>
            <button type="button" class="btn btn-outline" onclick={close}>{ t("common.back") }</button>
        </div>
    }
}

fn voice_form(props: &SettingsPageProps, draft: &UseStateHandle<SettingsDraft>) -> Html {
    let on_language = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(SettingsDraft {
                language: Language::from_tag(&select.value()),
                ..*draft
            });
        })
    };
    let on_rate = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(rate) = input.value().parse::<f32>() {
                draft.set(SettingsDraft { rate, ..*draft });
            }
        })
    };
    let on_pitch = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(pitch) = input.value().parse::<f32>() {
                draft.set(SettingsDraft { pitch, ..*draft });
            }
        })
    };
    let on_style = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(style) = VoiceStyle::from_key(&select.value()) {
                draft.set(SettingsDraft { style, ..*draft });
            }
        })
    };
    let apply = {
        let cb = props.on_apply.clone();
        let draft = draft.clone();
        Callback::from(move |_| cb.emit(*draft))
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let current = **draft;

    html! {
        <>
            <div class="settings-grid">
                <label for="voice-lang">{ t("settings.language") }</label>
                <select id="voice-lang" onchange={on_language}>
                    { for Language::ALL.into_iter().map(|lang| html! {
                        <option value={lang.tag()} selected={lang == current.language}>{ lang.native_name() }</option>
                    }) }
                </select>
                <label for="voice-rate">{ slider_label("settings.rate", current.rate) }</label>
                <input
                    id="voice-rate"
                    type="range"
                    min={VOICE_RATE_MIN.to_string()}
                    max={VOICE_RATE_MAX.to_string()}
                    step="0.01"
                    value={current.rate.to_string()}
                    oninput={on_rate}
                />
                <label for="voice-pitch">{ slider_label("settings.pitch", current.pitch) }</label>
                <input
                    id="voice-pitch"
                    type="range"
                    min={VOICE_PITCH_MIN.to_string()}
                    max={VOICE_PITCH_MAX.to_string()}
                    step="0.01"
                    value={current.pitch.to_string()}
                    oninput={on_pitch}
                />
                <label for="voice-style">{ t("settings.style") }</label>
                <select id="voice-style" onchange={on_style}>
                    { for VoiceStyle::ALL.into_iter().map(|style| html! {
                        <option value={style.key()} selected={style == current.style}>{ t(&format!("style.{}", style.key())) }</option>
                    }) }
                </select>
            </div>
            <div class="button-row push-bottom">
                <button type="button" class="btn btn-primary" onclick={apply}>{ t("settings.apply") }</button>
                <button type="button" class="btn btn-outline" onclick={close}>{ t("common.close") }</button>
            </div>
        </>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let pin = use_state(String::new);
    let attempted = use_state(|| false);
    let voice = props.voice;
    let draft = use_state(move || SettingsDraft::from_voice(&voice));

    html! {
        <section class="screen" data-testid="settings-screen">
            <div class="eyebrow">{ t("settings.eyebrow") }</div>
            if props.unlocked {
                { voice_form(props, &draft) }
            } else {
                { pin_form(props, &pin, &attempted) }
            }
        </section>
    }
}
