// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia-backed chart factory. Charts render to CPU raster surfaces and optionally to PNG files.

pub mod chart;
pub mod options;

pub use chart::SkiaChart;
pub use options::{Insets, RenderOptions};

use chart_core::{CanvasContext, ChartFactory, ChartHandle, PresentationConfig, RenderError, SeriesData};

#[derive(Clone, Debug, Default)]
pub struct SkiaChartFactory {
    opts: RenderOptions,
}

impl SkiaChartFactory {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }
}

impl ChartFactory for SkiaChartFactory {
    fn id(&self) -> &'static str {
        "skia-raster"
    }

    fn create(
        &self,
        ctx: CanvasContext,
        config: &PresentationConfig,
        data: &SeriesData,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        let mut chart = SkiaChart::new(ctx, config.clone(), data.clone(), self.opts.clone())?;
        chart.render()?;
        Ok(Box::new(chart))
    }
}
