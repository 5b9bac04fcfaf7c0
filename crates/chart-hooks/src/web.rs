// File: crates/chart-hooks/src/web.rs
// Summary: DOM binding for hooks (wasm only, behind the `web` feature).

use chart_core::CanvasContext;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::element::HookElement;

/// A DOM element a hook is bound to. Only `<canvas>` elements yield a drawing context.
pub struct CanvasElement {
    element: HtmlElement,
    id: String,
}

impl CanvasElement {
    pub fn new(element: HtmlElement) -> Self {
        let id = element.id();
        Self { element, id }
    }

    /// Wrap a generic DOM element; `None` when it is not an HTML element.
    pub fn from_element(element: web_sys::Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self::new)
    }
}

impl HookElement for CanvasElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn data_attribute(&self, key: &str) -> Option<String> {
        self.element.dataset().get(key)
    }

    fn canvas_context(&self) -> Option<CanvasContext> {
        let canvas = self.element.dyn_ref::<HtmlCanvasElement>()?;
        Some(CanvasContext::new(self.id.clone(), canvas.width(), canvas.height()))
    }
}
