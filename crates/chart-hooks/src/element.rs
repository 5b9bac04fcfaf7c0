// File: crates/chart-hooks/src/element.rs
// Summary: Element abstraction a hook is bound to, plus an in-memory implementation.

use std::collections::HashMap;

use chart_core::CanvasContext;

/// Data attribute (`data-points`) carrying the serialized series.
pub const POINTS_ATTR: &str = "points";

/// What a hook needs from the element it is bound to.
pub trait HookElement {
    /// Stable element id; hosts key live hooks by it.
    fn id(&self) -> &str;

    /// Value of `data-<key>`, if present.
    fn data_attribute(&self, key: &str) -> Option<String>;

    /// 2d drawing context, or `None` when the element cannot be drawn on.
    fn canvas_context(&self) -> Option<CanvasContext>;
}

/// Element held entirely in memory. Used by the replay tool and by tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    id: String,
    data: HashMap<String, String>,
    canvas: Option<(u32, u32)>,
}

impl MemoryElement {
    /// A drawable canvas of `width` x `height` pixels.
    pub fn canvas(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { id: id.into(), data: HashMap::new(), canvas: Some((width, height)) }
    }

    /// A plain element with no drawing context.
    pub fn plain(id: impl Into<String>) -> Self {
        Self { id: id.into(), data: HashMap::new(), canvas: None }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_data(key, value);
        self
    }

    /// Builder shortcut for `data-points`.
    pub fn with_points(self, raw: impl Into<String>) -> Self {
        self.with_data(POINTS_ATTR, raw)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn set_points(&mut self, raw: impl Into<String>) {
        self.set_data(POINTS_ATTR, raw);
    }

    pub fn remove_data(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }
}

impl HookElement for MemoryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn data_attribute(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn canvas_context(&self) -> Option<CanvasContext> {
        self.canvas.map(|(w, h)| CanvasContext::new(self.id.clone(), w, h))
    }
}
