// Client enhancements for the uploads pages, built with trunk.

mod lazy_images;
mod uploads;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    on_document_ready(|| {
        uploads::enhance();
        lazy_images::enhance();
        web_sys::console::log_1(&JsValue::from_str("site: enhancements ready"));
    });
}

/// Runs `f` once the DOM is parsed: immediately if the document is already
/// past `loading`, otherwise from a one-shot `DOMContentLoaded` listener.
fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        f();
    }
}
