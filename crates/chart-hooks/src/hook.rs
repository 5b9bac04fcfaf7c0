// File: crates/chart-hooks/src/hook.rs
// Summary: Chart lifecycle controller (attach/update/detach) and the host-facing Hook trait.
// Notes:
// - Nothing in here returns an error to the host. Decode faults fall back to the
//   presentation default, construction faults leave the hook detached, and redraw
//   faults keep the previous frame.

use std::rc::Rc;

use chart_core::{decode, ChartFactory, ChartHandle, PresentationConfig, RenderError, SeriesData};
use tracing::{debug, error, warn};

use crate::element::{HookElement, POINTS_ATTR};

/// Lifecycle entry points a host runtime calls on a bound hook.
pub trait Hook {
    /// Element was inserted. `None` when the host lost track of it.
    fn mounted(&mut self, element: Option<&dyn HookElement>);
    /// Element's attributes changed.
    fn updated(&mut self, element: &dyn HookElement);
    /// Element was removed.
    fn destroyed(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookState {
    Detached,
    Attached,
}

/// Controller owning at most one live chart for one element.
pub struct ChartHook {
    name: String,
    config: Rc<PresentationConfig>,
    factory: Rc<dyn ChartFactory>,
    handle: Option<Box<dyn ChartHandle>>,
    element_id: Option<String>,
}

impl ChartHook {
    pub fn new(
        name: impl Into<String>,
        config: Rc<PresentationConfig>,
        factory: Rc<dyn ChartFactory>,
    ) -> Self {
        Self { name: name.into(), config, factory, handle: None, element_id: None }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn config(&self) -> &PresentationConfig { &self.config }
    pub fn is_attached(&self) -> bool { self.handle.is_some() }
    /// Id of the element the live chart is bound to.
    pub fn element_id(&self) -> Option<&str> { self.element_id.as_deref() }

    pub fn state(&self) -> HookState {
        if self.is_attached() { HookState::Attached } else { HookState::Detached }
    }

    /// Series of the live chart, if attached.
    pub fn series(&self) -> Option<&SeriesData> {
        self.handle.as_deref().map(|h| h.data())
    }

    /// Create a chart for `element` from its `data-points` payload, replacing any live chart.
    pub fn attach(&mut self, element: Option<&dyn HookElement>) {
        let Some(element) = element else {
            error!(hook = %self.name, "chart element not found");
            return;
        };

        let raw = element.data_attribute(POINTS_ATTR);
        let points = decode(raw.as_deref(), self.config.fallback());

        self.release();

        match self.build(element, &points) {
            Ok(handle) => {
                debug!(hook = %self.name, element = element.id(), backend = self.factory.id(), "chart attached");
                self.handle = Some(handle);
                self.element_id = Some(element.id().to_string());
            }
            Err(err) => {
                error!(hook = %self.name, element = element.id(), error = %err, "error creating {} chart", self.config.type_tag());
            }
        }
    }

    /// Push the element's current payload into the live chart and redraw. No-op when detached.
    pub fn update(&mut self, element: &dyn HookElement) {
        let Some(handle) = self.handle.as_mut() else {
            debug!(hook = %self.name, element = element.id(), "update ignored, no live chart");
            return;
        };

        let raw = element.data_attribute(POINTS_ATTR);
        handle.set_data(decode(raw.as_deref(), self.config.fallback()));
        if let Err(err) = handle.redraw() {
            error!(hook = %self.name, element = element.id(), error = %err, "redraw failed, keeping previous frame");
        }
    }

    /// Release the live chart, if any. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.release();
    }

    fn build(&self, element: &dyn HookElement, points: &SeriesData) -> Result<Box<dyn ChartHandle>, RenderError> {
        let ctx = element
            .canvas_context()
            .ok_or_else(|| RenderError::NoContext { element: element.id().to_string() })?;
        self.factory.create(ctx, &self.config, points)
    }

    fn release(&mut self) {
        let element = self.element_id.take();
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.destroy() {
                warn!(hook = %self.name, element = element.as_deref(), error = %err, "chart destroy failed");
            }
        }
    }
}

impl Hook for ChartHook {
    fn mounted(&mut self, element: Option<&dyn HookElement>) {
        self.attach(element);
    }

    fn updated(&mut self, element: &dyn HookElement) {
        self.update(element);
    }

    fn destroyed(&mut self) {
        self.detach();
    }
}

impl Drop for ChartHook {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ChartHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartHook")
            .field("name", &self.name)
            .field("kind", &self.config.kind())
            .field("state", &self.state())
            .field("element_id", &self.element_id)
            .finish()
    }
}
