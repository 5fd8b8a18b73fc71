//! Incoming-call screen with the siren and spoken call alternating.
use crate::components::urgency_meter::UrgencyMeter;
use crate::i18n::t;
use evelyn_game::{AlertCue, AlertPulse, Commander, Effect, Effects, Tone, VoiceConfig};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AlertPageProps {
    pub commander: Commander,
    #[prop_or(1)]
    pub intensity: u8,
    pub voice: VoiceConfig,
    pub on_answer: Callback<()>,
    pub on_dismiss: Callback<()>,
}

/// Effects for one pulse cue. The call keeps the narration language.
#[must_use]
pub fn cue_effects(cue: AlertCue, voice: VoiceConfig) -> Effects {
    let mut effects = Effects::new();
    match cue {
        AlertCue::Siren { intensity } => effects.push(Effect::Tone(Tone::Siren { intensity })),
        AlertCue::Call {
            phrase,
            rate,
            pitch,
        } => effects.push(Effect::Narrate {
            text: phrase.to_string(),
            voice: VoiceConfig {
                language: voice.language,
                rate,
                pitch,
            },
        }),
    }
    effects
}

#[function_component(AlertPage)]
pub fn alert_page(props: &AlertPageProps) -> Html {
    let meter = use_state(|| 0_u8);

    {
        let meter = meter.clone();
        let voice = props.voice;
        use_effect_with(props.intensity, move |intensity| {
            let pulse = Rc::new(RefCell::new(AlertPulse::new(*intensity)));
            let period = i32::try_from(pulse.borrow().interval_ms()).unwrap_or(i32::MAX);
            let tick = move || {
                let cue = pulse.borrow_mut().tick();
                meter.set(pulse.borrow().meter());
                crate::platform::play(&cue_effects(cue, voice));
            };
            tick();
            let timer = match crate::dom::set_interval(period, tick) {
                Ok(timer) => Some(timer),
                Err(err) => {
                    log::debug!("alert pulse not scheduled: {}", crate::dom::js_error_message(&err));
                    None
                }
            };
            move || {
                if let Some((id, closure)) = timer {
                    crate::dom::clear_interval(id);
                    drop(closure);
                }
            }
        });
    }

    let answer = {
        let cb = props.on_answer.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="screen screen-center" data-testid="alert-screen" aria-live="assertive">
            <div class="siren-icon" aria-hidden="true">{ "🚨" }</div>
            <div class="alert-title">{ t("alert.title") }</div>
            <div class="muted">{ format!("{} {}", props.commander.emblem, props.commander.name) }</div>
            <UrgencyMeter percent={*meter} />
            <p class="muted">{ t("alert.hint") }</p>
            <button type="button" class="btn btn-accent wide" onclick={answer}>{ t("alert.answer") }</button>
            <button type="button" class="btn btn-outline wide" onclick={dismiss}>{ t("alert.dismiss") }</button>
        </section>
    }
}
