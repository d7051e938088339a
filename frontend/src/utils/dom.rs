use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Blocking browser alert, the page's only error surface.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Smoothly scrolls the element with `id` into view; missing elements are ignored.
pub fn scroll_into_view(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = window() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("requestAnimationFrame was rejected");
        }
    }
}

/// Value of `attribute` on the nearest ancestor-or-self of the event target that
/// carries it. Used for click delegation on injected markup.
pub fn closest_attribute(target: Option<web_sys::EventTarget>, attribute: &str) -> Option<(Element, String)> {
    let element = target?.dyn_into::<Element>().ok()?;
    let holder = element.closest(&format!("[{}]", attribute)).ok()??;
    let value = holder.get_attribute(attribute)?;
    Some((holder, value))
}
