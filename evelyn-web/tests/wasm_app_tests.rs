#![cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use evelyn_web::app::App;
use evelyn_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn settle() {
    // Let Yew flush scheduled renders.
    let _ = dom::await_callback(|resolve| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .map(|_| ())
    })
    .await;
}

fn click_button(label: &str) {
    let doc = dom::document().expect("document");
    let buttons = doc.query_selector_all("button").expect("query buttons");
    for idx in 0..buttons.length() {
        let Some(node) = buttons.get(idx) else { continue };
        let Ok(button) = node.dyn_into::<HtmlElement>() else { continue };
        if button.text_content().is_some_and(|text| text.trim() == label) {
            button.click();
            return;
        }
    }
    panic!("button {label:?} not found");
}

#[wasm_bindgen_test]
async fn home_screen_renders_with_live_region() {
    evelyn_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("live-status").is_some());
    assert!(doc.body().expect("body").inner_html().contains("Start Mission"));
}

#[wasm_bindgen_test]
async fn story_button_opens_lore() {
    evelyn_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    click_button("Story");
    settle().await;
    let html = dom::document().expect("document").body().expect("body").inner_html();
    assert!(html.contains("Why Agent Evelyn is Needed"));
}
