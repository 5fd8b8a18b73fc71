//! Drone-tagging scanner over the rear camera feed.
use crate::i18n::{t, tr};
use crate::platform::camera::{FEED_ELEMENT_ID, attach_feed};
use evelyn_game::{ArScan, ArTarget};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ArScanPageProps {
    pub scan: ArScan,
    pub on_tag: Callback<u8>,
    pub on_done: Callback<()>,
    pub on_close: Callback<()>,
}

fn drone_style(target: &ArTarget) -> String {
    format!(
        "left:{:.1}%;top:{:.1}%;--dx:{}px;--dy:{}px;--t:{:.1}s;",
        target.x, target.y, target.drift_dx, target.drift_dy, target.speed
    )
}

#[function_component(ArScanPage)]
pub fn ar_scan_page(props: &ArScanPageProps) -> Html {
    use_effect_with((), |()| {
        attach_feed();
        || ()
    });

    let done = {
        let cb = props.on_done.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let found = props.scan.found().to_string();
    let total = props.scan.total().to_string();
    let mut args = BTreeMap::new();
    args.insert("found", found.as_str());
    args.insert("total", total.as_str());
    let complete = props.scan.is_complete();

    let drones = props.scan.targets().iter().map(|target| {
        let onclick = {
            let cb = props.on_tag.clone();
            let id = target.id;
            let tagged = target.tagged;
            Callback::from(move |_| {
                if !tagged {
                    cb.emit(id);
                }
            })
        };
        html! {
            <button
                key={target.id}
                type="button"
                class={classes!("drone", "drift", target.tagged.then_some("tagged"))}
                style={drone_style(target)}
                aria-pressed={target.tagged.to_string()}
                {onclick}
            >
                { if target.tagged { t("ar.tagged") } else { t("ar.drone") } }
            </button>
        }
    });

    html! {
        <section class="screen scanner" data-testid="ar-screen">
            <video id={FEED_ELEMENT_ID} class="camera-feed" muted={true} playsinline={true} autoplay={true} />
            <div class="reticle" aria-hidden="true" />
            { for drones }
            <div class="scanner-bar">
                <div class="scanner-progress" aria-live="polite">{ tr("ar.progress", Some(&args)) }</div>
                <div class="button-row">
                    if complete {
                        <button type="button" class="btn btn-success" onclick={done}>{ t("ar.confirm") }</button>
                    }
                    <button type="button" class="btn btn-outline" onclick={close}>{ t("common.close") }</button>
                </div>
            </div>
            if complete {
                <div class="scanner-complete">
                    <div class="complete-title">{ t("ar.complete_title") }</div>
                    <div class="muted">{ t("ar.complete_hint") }</div>
                </div>
            }
        </section>
    }
}
