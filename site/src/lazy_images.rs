//! Deferred image loading.
//!
//! Every `img[data-lazy-url]` gets its own `IntersectionObserver`; on first
//! intersection the real URL is copied into `src` and the observer
//! disconnects. Images above the fold load immediately, the rest as the
//! reader scrolls to them.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

/// Observes every lazy image on the page.
pub fn enhance() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(images) = document.query_selector_all("img[data-lazy-url]") else {
        return;
    };
    for index in 0..images.length() {
        if let Some(image) = images
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        {
            observe(image);
        }
    }
}

fn load(image: &HtmlImageElement) {
    if let Some(url) = image.get_attribute("data-lazy-url") {
        image.set_src(&url);
    }
}

fn observe(image: HtmlImageElement) {
    let target = image.clone();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                load(&target);
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&image);
            // Keep the closure alive for the lifetime of the page
            on_intersect.forget();
        }
        // No observer support: load eagerly.
        Err(_) => load(&image),
    }
}
