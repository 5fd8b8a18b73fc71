use crate::i18n::{t, tr};
use evelyn_game::{LightPattern, Progress};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub progress: Progress,
    #[prop_or_default]
    pub pattern: LightPattern,
    #[prop_or_default]
    pub can_install: bool,
    pub on_start: Callback<()>,
    pub on_story: Callback<()>,
    pub on_install: Callback<()>,
    pub on_pattern: Callback<LightPattern>,
}

fn progress_line(progress: Progress) -> String {
    let level = progress.level.to_string();
    let xp = progress.xp.to_string();
    let mut args = BTreeMap::new();
    args.insert("level", level.as_str());
    args.insert("xp", xp.as_str());
    tr("home.progress", Some(&args))
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let start = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let story = {
        let cb = props.on_story.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let install = {
        let cb = props.on_install.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let pattern_buttons = LightPattern::ALL.into_iter().map(|pattern| {
        let cb = props.on_pattern.clone();
        let onclick = Callback::from(move |_| cb.emit(pattern));
        let selected = props.pattern == pattern;
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-outline", selected.then_some("selected"), pattern.key())}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                { t(&format!("pattern.{}", pattern.key())) }
            </button>
        }
    });

    html! {
        <section class="screen screen-center" data-testid="home-screen">
            <h1 class="title-block">{ t("home.title") }</h1>
            <div class="subtitle">{ t("home.subtitle") }</div>
            <div class="progress-line">{ progress_line(props.progress) }</div>
            <div class="stack">
                <button type="button" class="btn btn-primary" onclick={start}>{ t("home.start") }</button>
                <button type="button" class="btn btn-outline" onclick={story}>{ t("home.story") }</button>
                if props.can_install {
                    <button type="button" class="btn btn-accent" onclick={install}>{ t("home.install") }</button>
                }
                <div class="pattern-row">{ for pattern_buttons }</div>
                <div class="hint">{ t("home.pattern_hint") }</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(progress: Progress, can_install: bool) -> HomePageProps {
        HomePageProps {
            progress,
            pattern: LightPattern::Spiral,
            can_install,
            on_start: Callback::noop(),
            on_story: Callback::noop(),
            on_install: Callback::noop(),
            on_pattern: Callback::noop(),
        }
    }

    #[test]
    fn shows_level_and_xp() {
        crate::i18n::set_lang("en");
        assert_eq!(progress_line(Progress::from_missions(5)), "Level 2 • XP 125");
    }

    #[test]
    fn install_button_only_when_eligible() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<HomePage>::with_props(props(Progress::from_missions(0), false))
                .render(),
        );
        assert!(html.contains("Start Mission"));
        assert!(!html.contains("Install App"));

        let html = block_on(
            LocalServerRenderer::<HomePage>::with_props(props(Progress::from_missions(0), true))
                .render(),
        );
        assert!(html.contains("Install App"));
    }
}
