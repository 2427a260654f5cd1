// File: crates/chart-core/src/text.rs
// Summary: Text shaping for axis labels, tooltips and tile annotations (Skia textlayout).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::color::Rgba;

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: Rgba, mono: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color.to_skia());
        if mono {
            // tabular digits keep tick labels and readings aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: Rgba, mono: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono: bool) -> f32 {
        self.layout(text, size, Rgba::TRANSPARENT, mono).longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    /// Returns the drawn bounds as (left, top, right, bottom).
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
        align: HAlign,
        mono: bool,
    ) -> (f32, f32, f32, f32) {
        let mut p = self.layout(text, size, color, mono);
        let w = p.longest_line();
        let left = match align {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        // paragraphs paint from their top-left corner
        let top = y - size * 0.8;
        p.paint(canvas, (left, top));
        (left, top, left + w, top + p.height())
    }

    /// Like `draw`, with a filled box behind the text.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_badge(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
        background: Rgba,
        align: HAlign,
        pad: f32,
    ) {
        let w = self.measure_width(text, size, true);
        let left = match align {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(background.to_skia());
        let rect = skia::Rect::from_ltrb(left - pad, y - size - pad * 0.5, left + w + pad, y + size * 0.3 + pad * 0.5);
        canvas.draw_rect(rect, &fill);
        self.draw(canvas, text, left, y, size, color, HAlign::Left, true);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
