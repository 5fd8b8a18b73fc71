//! Deferred `beforeinstallprompt` handling.
use evelyn_game::InstallPrompter;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebInstallPrompter;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    thread_local! {
        static DEFERRED: RefCell<Option<web_sys::Event>> = const { RefCell::new(None) };
    }

    pub(super) fn listen(on_eligible: impl Fn() + 'static) -> Result<(), JsValue> {
        let window = crate::dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            DEFERRED.with(|slot| *slot.borrow_mut() = Some(event));
            on_eligible();
        });
        window.add_event_listener_with_callback(
            "beforeinstallprompt",
            handler.as_ref().unchecked_ref(),
        )?;
        // Listener lives for the page lifetime.
        handler.forget();
        Ok(())
    }

    pub(super) fn has_deferred() -> bool {
        DEFERRED.with(|slot| slot.borrow().is_some())
    }

    pub(super) fn prompt() {
        let Some(event) = DEFERRED.with(|slot| slot.borrow_mut().take()) else {
            return;
        };
        let prompt = js_sys::Reflect::get(&event, &"prompt".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(prompt) = prompt {
            if let Err(err) = prompt.call0(&event) {
                log::debug!("install prompt failed: {}", crate::dom::js_error_message(&err));
            }
        }
    }
}

/// Capture the host's install signal and report it through `on_eligible`.
pub fn listen_for_install(on_eligible: impl Fn() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = web::listen(on_eligible) {
            log::debug!("install listener not registered: {}", crate::dom::js_error_message(&err));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    drop(on_eligible);
}

impl InstallPrompter for WebInstallPrompter {
    fn is_eligible(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web::has_deferred()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn prompt(&self) {
        #[cfg(target_arch = "wasm32")]
        web::prompt();
    }
}
