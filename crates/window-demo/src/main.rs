// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: window resizes feed the resize notifier, pointer events drive tooltips, frames blit via softbuffer.

use anyhow::{Context, Result};
use multiline_core::geometry::clamp;
use multiline_core::{ChartConfig, ChartDataset, MultiLineChart, RenderOptions, ResizeNotifier, Size};
use std::cell::{Cell, RefCell};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const SAMPLE: &str = include_str!("../../demo/data/scores.json");
const MAX_SIDE: u32 = 8192;

/// Usage: `multiline-window-demo [DATASET_JSON] [CONFIG_JSON]`
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let dataset = match args.next().map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            ChartDataset::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartDataset::from_json_str(SAMPLE)?,
    };
    let config = match args.next().map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            ChartConfig::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Multi-line Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 400.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // the chart measures this cell on every redraw
    let container = Rc::new(Cell::new(to_size(window.inner_size())));
    let sizer = {
        let container = container.clone();
        move || container.get()
    };
    let chart = Rc::new(RefCell::new(MultiLineChart::new(config, sizer)?));
    let report = chart.borrow_mut().set_data(dataset)?;
    tracing::info!(?report, "initial draw");

    let notifier = ResizeNotifier::new();
    MultiLineChart::watch_resize(&chart, &notifier);

    let opts = RenderOptions::default();
    let mut present = move |chart: &MultiLineChart| -> Result<()> {
        let (rgba, w, h, _) = chart.scene().render_to_rgba8(&opts)?;
        let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
        surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
        // softbuffer pixels are 0RGB
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    chart.borrow_mut().teardown();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    container.set(to_size(new_size));
                    if let Err(e) = notifier.notify() {
                        tracing::warn!(error = %e, "redraw after resize failed");
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if chart.borrow_mut().pointer_move(position.x, position.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if chart.borrow_mut().pointer_leave() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&chart.borrow()) {
                    tracing::error!(error = %e, "present failed");
                }
            }
            _ => {}
        }
    })
}

fn to_size(s: winit::dpi::PhysicalSize<u32>) -> Size {
    Size::new(clamp(s.width, 1, MAX_SIDE) as f64, clamp(s.height, 1, MAX_SIDE) as f64)
}
