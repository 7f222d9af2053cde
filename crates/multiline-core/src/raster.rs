// File: crates/multiline-core/src/raster.rs
// Summary: Headless Skia CPU raster output for a scene: PNG file, PNG bytes, RGBA8 buffer.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, Orient};
use crate::scene::{Element, LineElement, Marker, Scene};
use crate::text::{Anchor, TextShaper};

const AXIS_COLOR: skia::Color = skia::Color::new(0xff_00_00_00);
const TOOLTIP_FILL: skia::Color = skia::Color::new(0xcc_00_00_00);
const TOOLTIP_TEXT: skia::Color = skia::Color::new(0xff_ff_ff_ff);
const FONT_SIZE: f32 = 10.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 6.0;

pub struct RenderOptions {
    pub background: skia::Color,
    /// Text is skipped when false (keeps pixel snapshots font-independent).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: skia::Color::WHITE, draw_labels: true }
    }
}

impl Scene {
    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = surface_dims(self);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels back from the raster surface failed");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = surface_dims(self);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let text = opts.draw_labels.then(TextShaper::new);
        paint_scene(surface.canvas(), self, opts, text.as_ref());
        Ok(surface)
    }
}

fn surface_dims(scene: &Scene) -> (i32, i32) {
    (
        (scene.size.width.round() as i32).max(1),
        (scene.size.height.round() as i32).max(1),
    )
}

fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions, text: Option<&TextShaper>) {
    canvas.clear(opts.background);

    for element in scene.elements() {
        match element {
            Element::Axis(axis) => draw_axis(canvas, axis, text),
            Element::Line(line) => {
                canvas.save();
                canvas.translate(scene.plot_origin.to_skia());
                draw_line(canvas, line);
                canvas.restore();
            }
            Element::Marker(marker) => {
                canvas.save();
                canvas.translate(scene.plot_origin.to_skia());
                draw_marker(canvas, marker);
                canvas.restore();
            }
        }
    }

    if let (Some(content), Some(text)) = (scene.tooltip.content(), text) {
        draw_tooltip(canvas, &content.text, content.anchor.to_skia(), text);
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, text: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(AXIS_COLOR);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    let (a, b) = axis.domain_line();
    canvas.draw_line(a.to_skia(), b.to_skia(), &paint);

    for tick in &axis.ticks {
        let start = match axis.orient {
            Orient::Bottom => axis.origin.offset(tick.offset, 0.0),
            Orient::Left => axis.origin.offset(0.0, tick.offset),
        };
        canvas.draw_line(start.to_skia(), axis.tick_end(tick).to_skia(), &paint);

        if let Some(shaper) = text {
            let at = axis.label_anchor(tick);
            match axis.orient {
                // label hangs below the tick
                Orient::Bottom => shaper.draw(canvas, &tick.label, at.x as f32, at.y as f32 + FONT_SIZE, FONT_SIZE, AXIS_COLOR, Anchor::Middle),
                Orient::Left => shaper.draw(canvas, &tick.label, at.x as f32, at.y as f32 + FONT_SIZE * 0.35, FONT_SIZE, AXIS_COLOR, Anchor::End),
            }
        }
    }

    if let (Some(title), Some(shaper)) = (&axis.title, text) {
        // rotated -90° around the axis origin: x' = -y, y' = x
        canvas.save();
        canvas.translate(axis.origin.to_skia());
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, title, 0.0, 5.0 + FONT_SIZE * 0.71 + FONT_SIZE * 0.8, FONT_SIZE, AXIS_COLOR, Anchor::End);
        canvas.restore();
    }
}

fn draw_line(canvas: &skia::Canvas, line: &LineElement) {
    if line.path.is_empty() {
        return;
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.stroke_width as f32);
    stroke.set_color(line.stroke);
    canvas.draw_path(&line.path.to_skia(), &stroke);
}

fn draw_marker(canvas: &skia::Canvas, marker: &Marker) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(marker.fill);
    canvas.draw_circle(marker.center().to_skia(), marker.radius as f32, &fill);
}

/// Box centered horizontally on `anchor`, bottom edge at `anchor.y`.
fn draw_tooltip(canvas: &skia::Canvas, label: &str, anchor: skia::Point, shaper: &TextShaper) {
    let w = shaper.measure_width(label, TOOLTIP_FONT_SIZE) + TOOLTIP_PADDING * 2.0;
    let h = TOOLTIP_FONT_SIZE + TOOLTIP_PADDING * 2.0;
    let rect = skia::Rect::from_xywh(anchor.x - w / 2.0, anchor.y - h, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(TOOLTIP_FILL);
    canvas.draw_round_rect(rect, 3.0, 3.0, &bg);

    let baseline = rect.bottom - TOOLTIP_PADDING - TOOLTIP_FONT_SIZE * 0.2;
    shaper.draw(canvas, label, anchor.x, baseline, TOOLTIP_FONT_SIZE, TOOLTIP_TEXT, Anchor::Middle);
}
