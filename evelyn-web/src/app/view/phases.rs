use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::{
    active::ActivePage, alert::AlertPage, approve::ApprovePage, ar_scan::ArScanPage,
    briefing::BriefingPage, compose::ComposePage, home::HomePage, lore::LorePage,
    not_found::NotFound, settings::SettingsPage, success::SuccessPage, trophies::TrophiesPage,
};
use crate::router::Route;
use evelyn_game::{Event, Phase, global_lore};
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    let control = &*state.control;
    let phase = control.phase();
    if phase.needs_mission() && control.mission().is_none() {
        // Mission screens are unreachable without a mission; fall back to home.
        log::warn!("{phase} rendered without a mission");
        return render_home(state, handlers);
    }

    match phase {
        Phase::Home => render_home(state, handlers),
        Phase::Lore => html! {
            <LorePage
                lore={AttrValue::from(global_lore(control.voice().language))}
                on_back={handlers.on(Event::Back)}
            />
        },
        Phase::Compose => render_compose(state, handlers),
        Phase::Approve => render_approve(state, handlers),
        Phase::Alert => render_alert(state, handlers),
        Phase::Briefing => render_briefing(state, handlers),
        Phase::Ar => render_ar(state, handlers),
        Phase::Active => html! {
            <ActivePage
                captures_photos={control.edition().captures_photos()}
                photo_count={control.pending_photos().len()}
                on_photos={handlers.capture_photos.clone()}
                on_complete={handlers.mark_complete.clone()}
            />
        },
        Phase::Success => html! {
            <SuccessPage
                reward={control.last_reward().cloned()}
                confetti_seed={*state.celebration}
                on_view_rewards={handlers.on(Event::ViewRewards)}
                on_home={handlers.on(Event::GoHome)}
            />
        },
        Phase::Trophies => html! {
            <TrophiesPage
                entries={control.log().newest_first().cloned().collect::<Vec<_>>()}
                progress={control.progress()}
                on_back={handlers.on(Event::Back)}
            />
        },
        Phase::Settings => html! {
            <SettingsPage
                unlocked={control.settings_unlocked()}
                voice={*control.voice()}
                on_unlock={handlers.unlock.clone()}
                on_apply={handlers.apply_settings.clone()}
                on_close={handlers.on(Event::Close)}
            />
        },
    }
}

fn render_home(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <HomePage
            progress={state.control.progress()}
            pattern={*state.pattern}
            can_install={state.install_offer.is_eligible()}
            on_start={handlers.on(Event::Start)}
            on_story={handlers.on(Event::ShowStory)}
            on_install={handlers.install.clone()}
            on_pattern={handlers.pattern_change.clone()}
        />
    }
}

fn render_compose(state: &AppState, handlers: &AppHandlers) -> Html {
    let control = &*state.control;
    let on_generate = {
        let dispatch = handlers.dispatch.clone();
        Callback::from(move |task: String| dispatch.emit(Event::Generate { task }))
    };
    html! {
        <ComposePage
            date={crate::dom::today_label(control.voice().language.tag())}
            rival_name={control.options().rival_name.clone()}
            require_ar={control.options().require_ar}
            show_ar_toggle={control.edition().supports_ar()}
            on_rival_change={handlers.rival_change.clone()}
            on_require_ar_change={handlers.require_ar_change.clone()}
            on_cancel={handlers.on(Event::Cancel)}
            {on_generate}
        />
    }
}

fn render_approve(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(mission) = state.control.mission().cloned() else {
        return Html::default();
    };
    html! {
        <ApprovePage
            {mission}
            on_edit={handlers.on(Event::Edit)}
            on_shuffle={handlers.on(Event::Shuffle)}
            on_approve={handlers.on(Event::Approve)}
        />
    }
}

fn render_alert(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(mission) = state.control.mission() else {
        return Html::default();
    };
    html! {
        <AlertPage
            commander={mission.commander.clone()}
            voice={*state.control.voice()}
            on_answer={handlers.on(Event::Answer)}
            on_dismiss={handlers.on(Event::Dismiss)}
        />
    }
}

fn render_briefing(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(mission) = state.control.mission().cloned() else {
        return Html::default();
    };
    html! {
        <BriefingPage
            {mission}
            ar_cleared={state.control.ar_cleared()}
            on_begin={handlers.on(Event::Begin)}
            on_open_scanner={handlers.on(Event::OpenScanner)}
        />
    }
}

fn render_ar(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(scan) = state.control.scan().cloned() else {
        return Html::default();
    };
    let on_tag = {
        let dispatch = handlers.dispatch.clone();
        Callback::from(move |target: u8| dispatch.emit(Event::Tag { target }))
    };
    html! {
        <ArScanPage
            {scan}
            {on_tag}
            on_done={handlers.on(Event::ScanDone)}
            on_close={handlers.on(Event::CloseScanner)}
        />
    }
}
