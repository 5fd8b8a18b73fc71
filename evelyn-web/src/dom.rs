use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// Browser `window`, if running in one.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Resolve a promise created from a one-shot callback registration.
///
/// `register` receives the promise's `resolve` function and must arrange for
/// it to be called exactly once.
///
/// # Errors
/// Returns an error if registration fails or the promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn await_callback(
    register: impl FnOnce(Function) -> Result<(), JsValue>,
) -> Result<JsValue, JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    register(resolve)?;
    JsFuture::from(promise).await
}

/// Start a repeating timer. Returns the interval id and the closure that must
/// stay alive until [`clear_interval`] is called.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be scheduled.
pub fn set_interval(
    period_ms: i32,
    tick: impl FnMut() + 'static,
) -> Result<(i32, Closure<dyn FnMut()>), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(tick);
    let id = window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
    Ok((id, closure))
}

pub fn clear_interval(id: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(id);
    }
}

/// Entropy for seeding the mission RNG.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        let lo = js_sys::Date::now().to_bits();
        (hi << 32) ^ lo
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x00C0_FFEE
    }
}

/// Today's date in the browser's locale format.
#[must_use]
pub fn today_label(lang_tag: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0()
            .to_locale_date_string(lang_tag, &JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang_tag;
        String::from("01/01/2026")
    }
}
