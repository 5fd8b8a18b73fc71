//! Rear camera feed shared by the scanner and photo capture screens.
use evelyn_game::Camera;

/// Id of the `<video>` element the feed is attached to.
pub const FEED_ELEMENT_ID: &str = "camera-feed";

#[derive(Debug, Clone, Copy, Default)]
pub struct WebCamera;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::FEED_ELEMENT_ID;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

    thread_local! {
        static STREAM: RefCell<Option<MediaStream>> = const { RefCell::new(None) };
        static WANTED: Cell<bool> = const { Cell::new(false) };
    }

    fn stop_tracks(stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }

    pub(super) fn attach() {
        let Some(video) = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(FEED_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        else {
            return;
        };
        STREAM.with(|slot| {
            if let Some(stream) = slot.borrow().as_ref() {
                video.set_src_object(Some(stream));
                let _ = video.play();
            }
        });
    }

    async fn open() -> Result<MediaStream, JsValue> {
        let devices = crate::dom::window()
            .ok_or_else(|| JsValue::from_str("window unavailable"))?
            .navigator()
            .media_devices()?;
        let video = js_sys::Object::new();
        js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into())?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);
        let promise = devices.get_user_media_with_constraints(&constraints)?;
        JsFuture::from(promise).await?.dyn_into::<MediaStream>()
    }

    pub(super) fn acquire() {
        WANTED.with(|w| w.set(true));
        if STREAM.with(|slot| slot.borrow().is_some()) {
            attach();
            return;
        }
        wasm_bindgen_futures::spawn_local(async {
            match open().await {
                Ok(stream) => {
                    // Released while the permission prompt was open.
                    if !WANTED.with(Cell::get) {
                        stop_tracks(&stream);
                        return;
                    }
                    STREAM.with(|slot| *slot.borrow_mut() = Some(stream));
                    attach();
                }
                Err(err) => {
                    let message = crate::dom::js_error_message(&err);
                    log::warn!("camera unavailable: {message}");
                    crate::dom::console_error(&format!("camera unavailable: {message}"));
                }
            }
        });
    }

    pub(super) fn release() {
        WANTED.with(|w| w.set(false));
        if let Some(stream) = STREAM.with(|slot| slot.borrow_mut().take()) {
            stop_tracks(&stream);
        }
    }
}

/// Re-attach a running stream after the feed element mounts.
pub fn attach_feed() {
    #[cfg(target_arch = "wasm32")]
    web::attach();
}

impl Camera for WebCamera {
    fn acquire(&self) {
        #[cfg(target_arch = "wasm32")]
        web::acquire();
        #[cfg(not(target_arch = "wasm32"))]
        log::debug!("camera acquire ignored outside the browser");
    }

    fn release(&self) {
        #[cfg(target_arch = "wasm32")]
        web::release();
    }
}
