// File: crates/chartkit-render-skia/src/text.rs
// Summary: Text shaping with Skia textlayout; also serves as the chart's text measurer.

use chartkit_core::TextMeasure;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Tabular digits keep y-axis labels aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric).longest_line()
    }

    /// Paint `text` with its top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let paragraph = self.layout(text, size, color, is_numeric(text));
        paragraph.paint(canvas, (x, y));
    }
}

impl TextMeasure for TextShaper {
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width(text, font_size, is_numeric(text))
    }
}

/// Axis values such as `-120`, `12.5k` or `2M`.
pub(crate) fn is_numeric(text: &str) -> bool {
    let digits = text.trim_start_matches('-').trim_end_matches(['k', 'M']);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::is_numeric;

    #[test]
    fn numeric_labels() {
        assert!(is_numeric("120"));
        assert!(is_numeric("-12.5k"));
        assert!(is_numeric("2M"));
        assert!(!is_numeric("Mon"));
        assert!(!is_numeric("Today"));
        assert!(!is_numeric(""));
    }
}
