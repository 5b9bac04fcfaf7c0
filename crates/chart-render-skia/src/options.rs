// File: crates/chart-render-skia/src/options.rs
// Summary: Render options (margins, colors, label drawing, frame output).

use std::path::PathBuf;

use chart_core::Rgba;

/// Space around the bar plot area, in pixels. Axis labels are drawn inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 16, 40)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    /// Track drawn when a proportional chart has nothing to show.
    pub empty_track: Rgba,
    pub draw_labels: bool,
    /// When set, every redraw writes `<element_id>.png` into this directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            background: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            empty_track: Rgba::rgb(220, 220, 225),
            draw_labels: true,
            output_dir: None,
        }
    }
}

impl RenderOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}
