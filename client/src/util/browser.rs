//! Window, scroll and element measurements.
//!
//! Every function is best-effort: without a window (server rendering, or a
//! failed DOM call) reads return neutral values and writes do nothing.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use motion::timeline::{TriggerGeometry, Viewport};

/// Viewport assumed before the browser can be measured.
pub const FALLBACK_VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };

/// Attribute naming an animated element inside a section.
pub const ANIM_ATTR: &str = "data-anim";

/// Milliseconds on the page's monotonic clock.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn viewport() -> Viewport {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(width), Some(height)) => Viewport::new(width, height),
            _ => FALLBACK_VIEWPORT,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_VIEWPORT
    }
}

/// Largest reachable scroll offset of the document.
pub fn max_scroll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let height = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map_or(0, |el| el.scroll_height());
        (f64::from(height) - viewport().height).max(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Jump to a document offset without smooth scrolling. Used by the snap
/// animation, which supplies its own easing.
pub fn scroll_to(y: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(y);
            options.set_behavior(web_sys::ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = y;
    }
}

pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Smooth-scroll the element with `id` into view. Returns whether it exists.
pub fn scroll_to_id(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Trigger geometry of `element` at the current scroll position.
#[cfg(feature = "hydrate")]
pub fn element_geometry(element: &web_sys::Element) -> TriggerGeometry {
    let rect = element.get_bounding_client_rect();
    geometry_at(rect.top(), rect.height(), scroll_y(), viewport())
}

/// Trigger geometry from a viewport-relative top, for callers that already
/// measured the element.
#[must_use]
pub fn geometry_at(rect_top: f64, rect_height: f64, scroll_y: f64, viewport: Viewport) -> TriggerGeometry {
    TriggerGeometry { element_top: rect_top + scroll_y, element_height: rect_height, viewport_height: viewport.height }
}

/// CSS selector matching every element animated under `name`.
#[must_use]
pub fn anim_selector(name: &str) -> String {
    format!("[{ANIM_ATTR}=\"{name}\"]")
}

/// Number of elements under `root` animated as `name`.
#[cfg(feature = "hydrate")]
pub fn count_targets(root: &web_sys::Element, name: &str) -> usize {
    root.query_selector_all(&anim_selector(name))
        .map_or(0, |list| usize::try_from(list.length()).unwrap_or(0))
}

/// Replace the inline style of `element`. Failures are logged and dropped.
#[cfg(feature = "hydrate")]
pub fn set_inline_style(element: &web_sys::Element, css: &str) {
    if let Err(e) = element.set_attribute("style", css) {
        log::debug!("inline style not applied: {e:?}");
    }
}

/// Write each frame as the inline style of its element. Animated elements
/// carry no other inline style.
#[cfg(feature = "hydrate")]
pub fn apply_frames(root: &web_sys::Element, frames: &[motion::timeline::TargetFrame]) {
    for frame in frames {
        let Ok(list) = root.query_selector_all(&anim_selector(&frame.target)) else {
            continue;
        };
        let Some(node) = u32::try_from(frame.child).ok().and_then(|index| list.item(index)) else {
            continue;
        };
        if let Some(el) = wasm_bindgen::JsCast::dyn_ref::<web_sys::Element>(&node) {
            set_inline_style(el, &frame.to_css());
        }
    }
}
