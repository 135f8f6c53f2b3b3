// File: crates/chartkit-render-skia/src/render.rs
// Summary: Headless rendering of a chart to PNG bytes/files or raw RGBA8 pixels via CPU raster surfaces.

use std::path::Path;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use chartkit_core::{Canvas, Chart, Rgba};
use skia_safe as skia;

use crate::canvas::SkiaCanvas;
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Fill color; the chart theme's background when `None`.
    pub background: Option<Rgba>,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: None, draw_labels: true }
    }
}

/// Draw `chart` as presented at `now` onto a fresh raster surface of the chart's size.
pub fn render_to_surface(chart: &Chart, opts: &RenderOptions, now: Instant) -> Result<skia::Surface> {
    let size = chart.size();
    let (w, h) = (size.width.round() as i32, size.height.round() as i32);
    ensure!(w > 0 && h > 0, "chart size {}x{} has no pixels", size.width, size.height);

    let mut surface = skia::surfaces::raster_n32_premul((w, h)).context("failed to create raster surface")?;
    let shaper = TextShaper::new();
    {
        let mut canvas = SkiaCanvas::new(surface.canvas(), &shaper);
        canvas.draw_labels = opts.draw_labels;
        canvas.clear(opts.background.unwrap_or(chart.theme().background));
        chart.render(&mut canvas, &shaper, now);
    }
    log::debug!("rendered {}x{} chart ({} bars)", w, h, chart.bars().len());
    Ok(surface)
}

/// Render to an in-memory PNG.
pub fn render_to_png_bytes(chart: &Chart, opts: &RenderOptions, now: Instant) -> Result<Vec<u8>> {
    let mut surface = render_to_surface(chart, opts, now)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).context("encode PNG failed")?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(chart: &Chart, opts: &RenderOptions, output_png_path: impl AsRef<Path>, now: Instant) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts, now)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(chart: &Chart, opts: &RenderOptions, now: Instant) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_to_surface(chart, opts, now)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    ensure!(surface.read_pixels(&info, &mut pixels, stride, (0, 0)), "failed to read surface pixels");
    Ok((pixels, w as u32, h as u32, stride))
}
