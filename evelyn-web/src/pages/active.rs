use crate::i18n::{t, tr};
use crate::platform::camera::{FEED_ELEMENT_ID, attach_feed};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ActivePageProps {
    /// Photo edition: show the camera feed and photo picker.
    #[prop_or_default]
    pub captures_photos: bool,
    #[prop_or_default]
    pub photo_count: usize,
    pub on_photos: Callback<Vec<String>>,
    pub on_complete: Callback<()>,
}

fn photo_picker(on_photos: &Callback<Vec<String>>) -> Callback<Event> {
    #[cfg(target_arch = "wasm32")]
    {
        let cb = on_photos.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let cb = cb.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let urls = crate::platform::photos::read_files(files).await;
                if !urls.is_empty() {
                    cb.emit(urls);
                }
            });
            input.set_value("");
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_photos;
        Callback::noop()
    }
}

#[function_component(ActivePage)]
pub fn active_page(props: &ActivePageProps) -> Html {
    let captures = props.captures_photos;
    use_effect_with(captures, |captures| {
        if *captures {
            attach_feed();
        }
        || ()
    });

    let complete = {
        let cb = props.on_complete.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let count = props.photo_count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());

    html! {
        <section class="screen screen-center" data-testid="active-screen">
            <div class="active-title">{ t("active.title") }</div>
            <p class="muted">{ t("active.hint") }</p>
            if captures {
                <video id={FEED_ELEMENT_ID} class="camera-preview" muted={true} playsinline={true} autoplay={true} />
                <label class="btn btn-outline wide" for="photo-input">{ t("active.photos_label") }</label>
                <input
                    id="photo-input"
                    class="sr-only"
                    type="file"
                    accept="image/*"
                    capture="environment"
                    multiple={true}
                    onchange={photo_picker(&props.on_photos)}
                />
                <div class="muted" aria-live="polite">{ tr("active.photo_count", Some(&args)) }</div>
            }
            <button type="button" class="btn btn-success wide" onclick={complete}>{ t("active.complete") }</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(captures_photos: bool, photo_count: usize) -> ActivePageProps {
        ActivePageProps {
            captures_photos,
            photo_count,
            on_photos: Callback::noop(),
            on_complete: Callback::noop(),
        }
    }

    #[test]
    fn badge_edition_has_no_picker() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<ActivePage>::with_props(props(false, 0)).render());
        assert!(html.contains("Parent: Mark Complete"));
        assert!(!html.contains("photo-input"));
    }

    #[test]
    fn photo_edition_counts_pending_photos() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<ActivePage>::with_props(props(true, 0)).render());
        assert!(html.contains("No photos yet"));
        let html = block_on(LocalServerRenderer::<ActivePage>::with_props(props(true, 2)).render());
        assert!(html.contains("2 photos ready"));
    }
}
