// File: crates/chart-core/src/render.rs
// Summary: Renderer-agnostic factory/handle traits that chart backends implement.

use crate::error::RenderError;
use crate::presentation::PresentationConfig;
use crate::series::SeriesData;

/// 2d drawing context obtained from a bound element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasContext {
    pub element_id: String,
    pub width: u32,
    pub height: u32,
}

impl CanvasContext {
    pub fn new(element_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { element_id: element_id.into(), width, height }
    }
}

/// Creates live charts. One factory is shared by every controller.
pub trait ChartFactory {
    /// Backend name, used in diagnostics.
    fn id(&self) -> &'static str;

    /// Build a chart on `ctx` for `config`, with `data` as its single series.
    fn create(
        &self,
        ctx: CanvasContext,
        config: &PresentationConfig,
        data: &SeriesData,
    ) -> Result<Box<dyn ChartHandle>, RenderError>;
}

/// A live chart bound to one canvas.
pub trait ChartHandle {
    /// Replace the chart's series in place. Takes effect on the next redraw.
    fn set_data(&mut self, data: SeriesData);

    /// Current series.
    fn data(&self) -> &SeriesData;

    /// Redraw with the current series.
    fn redraw(&mut self) -> Result<(), RenderError>;

    /// Release the chart's resources. Must tolerate a partially drawn chart.
    fn destroy(self: Box<Self>) -> Result<(), RenderError>;
}
