use anyhow::anyhow;
use shared::viewport::{HorizontalBounds, CarouselLayout, ScrollMetrics, VisibilityObserver};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};

/// Live DOM geometry for the carousel container and its cards.
///
/// Nothing is cached: each call reads the layout as it is right now.
pub struct DomLayout {
    container: Option<Element>,
}

impl DomLayout {
    pub fn new(container: Option<Element>) -> Self {
        Self { container }
    }
}

/// Numeric property read straight off the JS object. web-sys types
/// `scrollLeft` as `i32` although browsers report fractional offsets on
/// zoomed or high-DPI layouts.
fn f64_property(target: &JsValue, name: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

fn bounds_of(element: &Element) -> HorizontalBounds {
    let rect = element.get_bounding_client_rect();
    HorizontalBounds::new(rect.left(), rect.right())
}

impl CarouselLayout for DomLayout {
    type Handle = Element;

    fn container_bounds(&self) -> Option<HorizontalBounds> {
        self.container
            .as_ref()
            .filter(|container| container.is_connected())
            .map(bounds_of)
    }

    fn card_bounds(&self, card: &Element) -> Option<HorizontalBounds> {
        card.is_connected().then(|| bounds_of(card))
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        match &self.container {
            Some(container) => ScrollMetrics {
                scroll_left: f64_property(container, "scrollLeft")
                    .unwrap_or_else(|| container.scroll_left() as f64),
                client_width: container.client_width() as f64,
                scroll_width: container.scroll_width() as f64,
            },
            None => ScrollMetrics::default(),
        }
    }

    fn card_width(&self, card: &Element) -> f64 {
        card.dyn_ref::<HtmlElement>()
            .map(|card| card.offset_width() as f64)
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, left: f64) {
        if let Some(container) = &self.container {
            let options = ScrollToOptions::new();
            options.set_left(left);
            options.set_behavior(ScrollBehavior::Smooth);
            container.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// IntersectionObserver firing whenever a card crosses full visibility.
///
/// Disconnects on drop. A detached observer (no IntersectionObserver
/// available) accepts registrations and does nothing.
pub struct DomObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl DomObserver {
    pub fn new(on_change: impl Fn() + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(move |_entries: js_sys::Array, _observer: IntersectionObserver| {
            on_change();
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        // Fire only at 100% visibility
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(1.0));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("failed to create IntersectionObserver: {:?}", e))?;

        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }

    pub fn detached() -> Self {
        Self {
            observer: None,
            _callback: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }
}

impl VisibilityObserver<Element> for DomObserver {
    fn observe(&self, card: &Element) {
        if let Some(observer) = &self.observer {
            observer.observe(card);
        }
    }

    fn unobserve(&self, card: &Element) {
        if let Some(observer) = &self.observer {
            observer.unobserve(card);
        }
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}
