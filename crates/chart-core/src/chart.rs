// File: crates/chart-core/src/chart.rs
// Summary: Long-lived chart engine: option state with merge updates, container-driven
//          layout, and headless Skia raster rendering (PNG / RGBA8).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{format_tick, ticks};
use crate::color::Rgba;
use crate::container::Container;
use crate::geometry::{RectI32, Size};
use crate::option::{AreaOrigin, AxisKind, ChartOption, Fill, LinearGradient, SeriesOption, TooltipTrigger};
use crate::scale::LinearScale;
use crate::text::{HAlign, TextShaper};
use crate::view::ViewState;

const AXIS_COLOR: Rgba = Rgba::rgb(0x6e, 0x70, 0x79);
const SPLIT_COLOR: Rgba = Rgba::rgba(0x6e, 0x70, 0x79, 0.18);
const SERIES_COLOR: Rgba = Rgba::rgb(0x54, 0x70, 0xc6);
const LABEL_SIZE: f32 = 11.0;
const ANNOTATION_SIZE: f32 = 11.0;
const ANNOTATION_PAD: f32 = 8.0;
const ANNOTATION_LINE: f32 = 17.0;
const DEFAULT_AREA_OPACITY: f32 = 0.7;

/// Per-frame rendering inputs that are not part of the chart configuration.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub background: Rgba,
    pub draw_labels: bool,
    /// Pointer position in surface pixels; drives the tooltip.
    pub crosshair: Option<(f32, f32)>,
    pub annotations: Vec<Annotation>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(250, 250, 252),
            draw_labels: true,
            crosshair: None,
            annotations: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A line of text pinned to a surface corner. Top rows count downwards from
/// the top edge, bottom rows count upwards from the bottom edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub corner: Corner,
    pub row: usize,
    pub color: Rgba,
    pub background: Option<Rgba>,
}

pub struct Chart {
    option: ChartOption,
    container: Container,
    size: Size,
    plot: RectI32,
    disposed: bool,
    revision: u64,
}

impl Chart {
    /// Create an engine instance laid out against the container's current size.
    pub fn init(container: Container, option: ChartOption) -> Self {
        let size = container.size();
        let mut chart = Self {
            option,
            container,
            size,
            plot: RectI32::from_size(size),
            disposed: false,
            revision: 0,
        };
        chart.relayout();
        chart
    }

    /// Instance with a private container, for offline rendering.
    pub fn headless(size: Size, option: ChartOption) -> Self {
        Self::init(Container::new(size), option)
    }

    pub fn option(&self) -> &ChartOption { &self.option }
    pub fn size(&self) -> Size { self.size }
    pub fn plot_rect(&self) -> RectI32 { self.plot }
    pub fn is_disposed(&self) -> bool { self.disposed }

    /// Number of `set_option` calls applied so far.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn view(&self) -> ViewState {
        ViewState::from_option(&self.option)
    }

    /// Apply a configuration. With `merge` the option is merged into the live
    /// one (see `ChartOption::merge`); without it the live option is replaced.
    pub fn set_option(&mut self, option: ChartOption, merge: bool) {
        if self.disposed {
            tracing::warn!("set_option on a disposed chart ignored");
            return;
        }
        if merge {
            self.option.merge(option);
        } else {
            self.option = option;
        }
        self.revision += 1;
        self.relayout();
        tracing::trace!(revision = self.revision, merge, "chart option applied");
    }

    /// Re-read the container size and lay the chart out again.
    pub fn resize(&mut self) {
        if self.disposed {
            tracing::warn!("resize on a disposed chart ignored");
            return;
        }
        let size = self.container.size();
        if size != self.size {
            tracing::debug!(from = ?self.size, to = ?size, "chart resized");
        }
        self.size = size;
        self.relayout();
    }

    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.option = ChartOption::default();
            tracing::debug!("chart disposed");
        }
    }

    fn relayout(&mut self) {
        let insets = self.option.grid.map(|g| g.insets()).unwrap_or_default();
        self.plot = RectI32::from_size(self.size).inset(insets);
    }

    /// Render to an RGBA8 (unpremultiplied) buffer: (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let image = self.raster(opts)?;
        let (w, h) = (image.width(), image.height());
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        if !image.read_pixels(&info, pixels.as_mut_slice(), row_bytes, (0, 0), skia::image::CachingHint::Allow) {
            anyhow::bail!("reading back rendered pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let image = self.raster(opts)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG file at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Image> {
        if self.disposed {
            anyhow::bail!("cannot render a disposed chart");
        }
        let size = self.size.non_empty();
        let mut surface = skia::surfaces::raster_n32_premul((size.width as i32, size.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface.image_snapshot())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.background.to_skia());

        let view = self.view();
        let plot = self.plot;
        let sx = LinearScale::new((view.x_min, view.x_max), (plot.left as f32, plot.right as f32));
        let sy = LinearScale::new((view.y_min, view.y_max), (plot.bottom as f32, plot.top as f32));

        let needs_text = opts.draw_labels || opts.crosshair.is_some() || !opts.annotations.is_empty();
        let shaper = needs_text.then(TextShaper::new);

        self.draw_axes(canvas, shaper.as_ref().filter(|_| opts.draw_labels), &view, &sx, &sy);
        for series in &self.option.series {
            draw_series(canvas, plot, &view, &sx, &sy, series);
        }
        if let (Some(shaper), Some(cursor)) = (shaper.as_ref(), opts.crosshair) {
            self.draw_tooltip(canvas, shaper, &sx, &sy, cursor);
        }
        if let Some(shaper) = shaper.as_ref() {
            draw_annotations(canvas, shaper, self.size, &opts.annotations);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, shaper: Option<&TextShaper>, view: &ViewState, sx: &LinearScale, sy: &LinearScale) {
        let plot = self.plot;
        let x_axis = self.option.x_axis.clone().unwrap_or_default();
        let y_axis = self.option.y_axis.clone().unwrap_or_default();

        let mut split = skia::Paint::default();
        split.set_anti_alias(true);
        split.set_stroke_width(1.0);
        split.set_color(SPLIT_COLOR.to_skia());

        let y_ticks = ticks(y_axis.kind(), view.y_min, view.y_max, 4);
        let x_target = (plot.width() / 110).max(2) as usize;
        let x_ticks = ticks(x_axis.kind(), view.x_min, view.x_max, x_target);

        if y_axis.split_line.unwrap_or(true) {
            for &v in &y_ticks.values {
                let y = sy.to_px(v);
                canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &split);
            }
        }
        if x_axis.split_line.unwrap_or(false) {
            for &v in &x_ticks.values {
                let x = sx.to_px(v);
                canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &split);
            }
        }

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        axis_paint.set_color(AXIS_COLOR.to_skia());
        canvas.draw_line((plot.left as f32, plot.bottom as f32), (plot.right as f32, plot.bottom as f32), &axis_paint);

        let Some(shaper) = shaper else { return };
        if x_axis.show_labels.unwrap_or(true) {
            for &v in &x_ticks.values {
                let label = format_tick(x_axis.kind(), v, x_ticks.step);
                shaper.draw(canvas, &label, sx.to_px(v), plot.bottom as f32 + 16.0, LABEL_SIZE, AXIS_COLOR, HAlign::Center, true);
            }
        }
        if y_axis.show_labels.unwrap_or(true) {
            for &v in &y_ticks.values {
                let label = format_tick(y_axis.kind(), v, y_ticks.step);
                shaper.draw(canvas, &label, plot.left as f32 - 6.0, sy.to_px(v) + 4.0, LABEL_SIZE, AXIS_COLOR, HAlign::Right, true);
            }
        }
        if let Some(name) = &y_axis.name {
            shaper.draw(canvas, name, plot.left as f32, plot.top as f32 - 8.0, LABEL_SIZE, AXIS_COLOR, HAlign::Left, false);
        }
        if let Some(name) = &x_axis.name {
            shaper.draw(canvas, name, plot.right as f32, plot.bottom as f32 + 28.0, LABEL_SIZE, AXIS_COLOR, HAlign::Right, false);
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, shaper: &TextShaper, sx: &LinearScale, sy: &LinearScale, (cx, cy): (f32, f32)) {
        let tip = self.option.tooltip.unwrap_or_default();
        if !tip.show.unwrap_or(true) || !self.plot.contains(cx, cy) {
            return;
        }
        let Some(series) = self.option.series.iter().find(|s| s.data.as_ref().is_some_and(|d| !d.is_empty())) else {
            return;
        };
        let data = series.data.as_deref().unwrap_or_default();
        let Some(&(x, y)) = data
            .iter()
            .min_by(|a, b| (sx.to_px(a.0) - cx).abs().total_cmp(&(sx.to_px(b.0) - cx).abs()))
        else {
            return;
        };
        let (px, py) = (sx.to_px(x), sy.to_px(y));
        if tip.trigger.unwrap_or_default() == TooltipTrigger::Item && ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() > 8.0 {
            return;
        }

        let mut pointer = skia::Paint::default();
        pointer.set_anti_alias(true);
        pointer.set_stroke_width(1.0);
        pointer.set_color(AXIS_COLOR.fade(0.6).to_skia());
        canvas.draw_line((px, self.plot.top as f32), (px, self.plot.bottom as f32), &pointer);

        let color = series.color.unwrap_or(SERIES_COLOR);
        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_color(color.to_skia());
        canvas.draw_circle((px, py), 3.5, &marker);

        let x_kind = self.option.x_axis.as_ref().map(|a| a.kind()).unwrap_or_default();
        let view = self.view();
        let head = format_tick(x_kind, x, (view.x_max - view.x_min) / 4.0);
        let body = format!("{:.2}", y);
        let text_w = shaper.measure_width(&head, LABEL_SIZE, true).max(shaper.measure_width(&body, LABEL_SIZE, true));
        let (w, h) = (text_w + 20.0, 2.0 * ANNOTATION_LINE + 8.0);
        let surface_w = self.size.width as f32;
        let left = if px + 12.0 + w <= surface_w { px + 12.0 } else { (px - 12.0 - w).max(0.0) };
        let top = (cy - h * 0.5).clamp(0.0, (self.size.height as f32 - h).max(0.0));

        let background = tip.background.unwrap_or(Rgba::rgba(255, 255, 255, 0.95));
        let text_color = tip.text_color.unwrap_or_else(|| readable_on(background));
        let radius = tip.border_radius.unwrap_or(4.0);
        let mut boxp = skia::Paint::default();
        boxp.set_anti_alias(true);
        boxp.set_color(background.to_skia());
        canvas.draw_round_rect(skia::Rect::from_xywh(left, top, w, h), radius, radius, &boxp);

        shaper.draw(canvas, &head, left + 10.0, top + 4.0 + ANNOTATION_LINE - 4.0, LABEL_SIZE, text_color, HAlign::Left, true);
        shaper.draw(canvas, &body, left + 10.0, top + 4.0 + 2.0 * ANNOTATION_LINE - 4.0, LABEL_SIZE, text_color, HAlign::Left, true);
    }
}

fn draw_series(canvas: &skia::Canvas, plot: RectI32, view: &ViewState, sx: &LinearScale, sy: &LinearScale, series: &SeriesOption) {
    let Some(data) = series.data.as_deref() else { return };
    let pts: Vec<(f32, f32)> = data
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)))
        .collect();
    let (Some(&first), Some(&last)) = (pts.first(), pts.last()) else { return };
    let color = series.color.unwrap_or(SERIES_COLOR);

    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
        skia::ClipOp::Intersect,
        true,
    );

    if let Some(area) = series.area_style.as_ref().filter(|_| pts.len() >= 2) {
        let base_y = match area.origin.unwrap_or_default() {
            AreaOrigin::Start => sy.to_px(view.y_min),
            AreaOrigin::End => sy.to_px(view.y_max),
            AreaOrigin::Auto => sy.to_px(0.0f64.clamp(view.y_min, view.y_max)),
        };
        let mut path = skia::Path::new();
        path.move_to((first.0, base_y));
        for &(x, y) in &pts {
            path.line_to((x, y));
        }
        path.line_to((last.0, base_y));
        path.close();

        let opacity = area.opacity.unwrap_or(DEFAULT_AREA_OPACITY);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        match &area.fill {
            Some(Fill::Linear(gradient)) => match gradient_shader(gradient, path.bounds(), opacity) {
                Some(shader) => {
                    fill.set_shader(shader);
                }
                None => {
                    fill.set_color(color.fade(opacity).to_skia());
                }
            },
            Some(Fill::Solid(c)) => {
                fill.set_color(c.fade(opacity).to_skia());
            }
            None => {
                fill.set_color(color.fade(opacity).to_skia());
            }
        }
        canvas.draw_path(&path, &fill);
    }

    if pts.len() >= 2 {
        let mut line = skia::Path::new();
        line.move_to(first);
        for &p in pts.iter().skip(1) {
            line.line_to(p);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(series.line_width.unwrap_or(2.0));
        stroke.set_color(color.to_skia());
        canvas.draw_path(&line, &stroke);
    }

    if series.show_symbol.unwrap_or(false) || pts.len() == 1 {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(color.to_skia());
        for &p in &pts {
            canvas.draw_circle(p, 2.5, &dot);
        }
    }

    canvas.restore();
}

fn gradient_shader(gradient: &LinearGradient, bounds: &skia::Rect, opacity: f32) -> Option<skia::Shader> {
    if gradient.stops.is_empty() {
        return None;
    }
    let at = |fx: f32, fy: f32| skia::Point::new(bounds.left + fx * bounds.width(), bounds.top + fy * bounds.height());
    let colors: Vec<skia::Color> = gradient.stops.iter().map(|s| s.color.fade(opacity).to_skia()).collect();
    let positions: Vec<f32> = gradient.stops.iter().map(|s| s.offset.clamp(0.0, 1.0)).collect();
    skia::Shader::linear_gradient(
        (at(gradient.x, gradient.y), at(gradient.x2, gradient.y2)),
        colors.as_slice(),
        Some(positions.as_slice()),
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn draw_annotations(canvas: &skia::Canvas, shaper: &TextShaper, size: Size, annotations: &[Annotation]) {
    let (w, h) = (size.width as f32, size.height as f32);
    for a in annotations {
        let (x, align) = match a.corner {
            Corner::TopLeft | Corner::BottomLeft => (ANNOTATION_PAD, HAlign::Left),
            Corner::TopRight | Corner::BottomRight => (w - ANNOTATION_PAD, HAlign::Right),
        };
        let y = match a.corner {
            Corner::TopLeft | Corner::TopRight => ANNOTATION_PAD + ANNOTATION_SIZE + a.row as f32 * ANNOTATION_LINE,
            Corner::BottomLeft | Corner::BottomRight => h - ANNOTATION_PAD - a.row as f32 * ANNOTATION_LINE,
        };
        match a.background {
            Some(bg) => shaper.draw_badge(canvas, &a.text, x, y, ANNOTATION_SIZE, a.color, bg, align, 3.0),
            None => {
                shaper.draw(canvas, &a.text, x, y, ANNOTATION_SIZE, a.color, align, true);
            }
        }
    }
}

/// Dark text on light backgrounds, light text on dark ones.
fn readable_on(background: Rgba) -> Rgba {
    let luma = 0.299 * background.r as f32 + 0.587 * background.g as f32 + 0.114 * background.b as f32;
    if luma > 140.0 { Rgba::rgb(0x33, 0x33, 0x33) } else { Rgba::rgb(0xee, 0xee, 0xee) }
}
