// File: crates/chart-render-skia/src/chart.rs
// Summary: Live chart on a Skia CPU raster surface; doughnut and bar drawing.

use std::path::PathBuf;

use chart_core::grid::step_ticks;
use chart_core::{
    AxisPolicy, CanvasContext, ChartHandle, PresentationConfig, PresentationKind, RenderError, Rgba, SeriesData,
};
use skia_safe as skia;
use tracing::debug;

use crate::options::RenderOptions;

/// Inner radius of the doughnut as a fraction of the outer radius.
const CUTOUT: f32 = 0.5;
/// Share of a category slot used by bars.
const CATEGORY_PCT: f32 = 0.8;
const BAR_PCT: f32 = 0.9;
const LEGEND_HEIGHT: f32 = 28.0;
const PADDING: f32 = 8.0;
const LABEL_SIZE: f32 = 12.0;

/// Chart bound to one canvas. Redrawn on demand, released on destroy.
pub struct SkiaChart {
    ctx: CanvasContext,
    config: PresentationConfig,
    data: SeriesData,
    opts: RenderOptions,
    surface: Option<skia::Surface>,
    frames: u64,
}

impl SkiaChart {
    /// Allocate the raster surface. Nothing is drawn until [`SkiaChart::render`].
    pub fn new(
        ctx: CanvasContext,
        config: PresentationConfig,
        data: SeriesData,
        opts: RenderOptions,
    ) -> Result<Self, RenderError> {
        let (w, h) = surface_size(&ctx)?;
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| RenderError::Surface(format!("raster surface {w}x{h} for `{}`", ctx.element_id)))?;
        Ok(Self { ctx, config, data, opts, surface: Some(surface), frames: 0 })
    }

    pub fn context(&self) -> &CanvasContext { &self.ctx }
    pub fn config(&self) -> &PresentationConfig { &self.config }
    /// Number of completed redraws.
    pub fn frames(&self) -> u64 { self.frames }

    /// Draw the current series and, when configured, write the frame to disk.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let w = self.ctx.width as f32;
        let h = self.ctx.height as f32;
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| RenderError::Backend("chart already released".into()))?;
        let canvas = surface.canvas();
        canvas.clear(color(self.opts.background));
        match self.config.kind() {
            PresentationKind::Segmented => draw_doughnut(canvas, w, h, &self.config, &self.data, &self.opts),
            PresentationKind::Bucketed => draw_bars(canvas, w, h, &self.config, &self.data, &self.opts),
        }
        self.frames += 1;

        if let Some(dir) = self.opts.output_dir.clone() {
            self.write_frame(dir)?;
        }
        Ok(())
    }

    /// Last frame as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, RenderError> {
        let surface = self.surface_mut()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| RenderError::Encode("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Last frame as unpremultiplied RGBA8: (pixels, width, height, row stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let (w, h) = (self.ctx.width, self.ctx.height);
        let surface = self.surface_mut()?;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Encode("read_pixels failed".into()));
        }
        Ok((pixels, w, h, stride))
    }

    fn surface_mut(&mut self) -> Result<&mut skia::Surface, RenderError> {
        self.surface
            .as_mut()
            .ok_or_else(|| RenderError::Backend("chart already released".into()))
    }

    fn write_frame(&mut self, dir: PathBuf) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.png", file_stem(&self.ctx.element_id)));
        std::fs::write(&path, bytes)?;
        debug!(element = %self.ctx.element_id, path = %path.display(), "frame written");
        Ok(())
    }
}

impl ChartHandle for SkiaChart {
    fn set_data(&mut self, data: SeriesData) {
        self.data = data;
    }

    fn data(&self) -> &SeriesData {
        &self.data
    }

    fn redraw(&mut self) -> Result<(), RenderError> {
        self.render()
    }

    fn destroy(mut self: Box<Self>) -> Result<(), RenderError> {
        self.surface = None;
        debug!(element = %self.ctx.element_id, frames = self.frames, "skia chart released");
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn surface_size(ctx: &CanvasContext) -> Result<(i32, i32), RenderError> {
    let invalid = || RenderError::InvalidSize { width: ctx.width, height: ctx.height };
    if ctx.width == 0 || ctx.height == 0 {
        return Err(invalid());
    }
    let w = i32::try_from(ctx.width).map_err(|_| invalid())?;
    let h = i32::try_from(ctx.height).map_err(|_| invalid())?;
    Ok((w, h))
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Element ids are not trusted as file names.
fn file_stem(id: &str) -> String {
    let stem = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect::<String>();
    if stem.is_empty() { "chart".to_string() } else { stem }
}

fn format_tick(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e15 {
        format!("{v:e}")
    } else if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

fn label_font() -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(LABEL_SIZE);
    font
}

fn draw_legend(canvas: &skia::Canvas, w: f32, config: &PresentationConfig, opts: &RenderOptions) {
    let font = label_font();
    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(color(opts.axis_label));
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);

    let labels = config.labels();
    let slot = w / labels.len().max(1) as f32;
    for (i, label) in labels.iter().enumerate() {
        let x = slot * i as f32 + PADDING;
        swatch.set_color(color(config.fill_for(i)));
        canvas.draw_rect(skia::Rect::from_xywh(x, PADDING, 12.0, 12.0), &swatch);
        canvas.draw_str(label, (x + 16.0, PADDING + 11.0), &font, &text);
    }
}

fn draw_doughnut(
    canvas: &skia::Canvas,
    w: f32,
    h: f32,
    config: &PresentationConfig,
    data: &SeriesData,
    opts: &RenderOptions,
) {
    let values = data
        .aligned(config.labels().len())
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite() && *x > 0.0).unwrap_or(0.0))
        .collect::<Vec<_>>();
    // Shares relative to the largest value, so the sum cannot overflow.
    let peak = values.iter().copied().fold(0.0f64, f64::max);
    let shares = values.iter().map(|v| if peak > 0.0 { v / peak } else { 0.0 }).collect::<Vec<_>>();
    let total: f64 = shares.iter().sum();

    let legend = if opts.draw_labels { LEGEND_HEIGHT } else { 0.0 };
    let offset = config.hover_offset().unwrap_or(0.0);
    let cx = w * 0.5;
    let cy = (h + legend) * 0.5;
    let outer = (w.min(h - legend) * 0.5 - offset - PADDING).max(1.0);
    let inner = outer * CUTOUT;
    let thickness = outer - inner;
    let mid = inner + thickness * 0.5;
    let oval = skia::Rect::from_ltrb(cx - mid, cy - mid, cx + mid, cy + mid);

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(thickness);

    if total <= 0.0 {
        ring.set_color(color(opts.empty_track));
        canvas.draw_circle((cx, cy), mid, &ring);
    } else {
        // Segments run clockwise from twelve o'clock.
        let mut start = -90.0f32;
        for (i, &v) in shares.iter().enumerate() {
            if v <= 0.0 {
                continue;
            }
            let sweep = (v / total * 360.0) as f32;
            ring.set_color(color(config.fill_for(i)));
            canvas.draw_arc(oval, start, sweep, false, &ring);
            start += sweep;
        }
    }

    if opts.draw_labels {
        draw_legend(canvas, w, config, opts);
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    w: f32,
    h: f32,
    config: &PresentationConfig,
    data: &SeriesData,
    opts: &RenderOptions,
) {
    let ins = opts.insets;
    let (l, t) = (ins.left as f32, ins.top as f32);
    let (r, b) = (w - ins.right as f32, h - ins.bottom as f32);
    if r <= l || b <= t {
        return;
    }

    let n = config.labels().len().max(1);
    let points = data.aligned(n);
    let finite = points.iter().flatten().copied().filter(|v| v.is_finite()).collect::<Vec<_>>();
    let axis = config.axis();
    let (vmin, vmax) = axis.range_for(&finite).unwrap_or((0.0, 1.0));
    let span = (vmax - vmin).max(1e-12);
    let sy = |v: f64| -> f32 { b - ((v - vmin) / span) as f32 * (b - t) };

    let font = label_font();
    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(color(opts.axis_label));

    // Grid & ticks
    if let AxisPolicy::Linear { step, .. } = axis {
        let mut grid = skia::Paint::default();
        grid.set_color(color(opts.grid));
        grid.set_stroke_width(1.0);
        for tick in step_ticks(vmin, vmax, step) {
            let y = sy(tick);
            canvas.draw_line((l, y), (r, y), &grid);
            if opts.draw_labels {
                let label = format_tick(tick);
                let (tw, _) = font.measure_str(&label, None);
                canvas.draw_str(&label, (l - tw - 6.0, y + LABEL_SIZE * 0.35), &font, &text);
            }
        }
    }

    // Bars
    let slot = (r - l) / n as f32;
    let bar_w = slot * CATEGORY_PCT * BAR_PCT;
    let base = sy(0.0f64.clamp(vmin, vmax));
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);

    for (i, point) in points.iter().enumerate() {
        let Some(v) = point.filter(|v| v.is_finite()) else {
            continue;
        };
        let x0 = l + slot * i as f32 + (slot - bar_w) * 0.5;
        let y = sy(v.clamp(vmin, vmax));
        let rect = skia::Rect::from_ltrb(x0, y.min(base), x0 + bar_w, y.max(base));
        fill.set_color(color(config.fill_for(i)));
        canvas.draw_rect(rect, &fill);
        if let Some(border) = config.border() {
            outline.set_color(color(border.color));
            outline.set_stroke_width(border.width);
            canvas.draw_rect(rect, &outline);
        }
    }

    // Axes
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(color(opts.axis_line));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if opts.draw_labels {
        for (i, label) in config.labels().iter().enumerate() {
            let (tw, _) = font.measure_str(label, None);
            let x = l + slot * (i as f32 + 0.5) - tw * 0.5;
            canvas.draw_str(label, (x, b + LABEL_SIZE + 6.0), &font, &text);
        }
        if let Some(title) = config.dataset_label() {
            let (tw, _) = font.measure_str(title, None);
            canvas.draw_str(title, ((l + r - tw) * 0.5, t.max(LABEL_SIZE)), &font, &text);
        }
    }
}
