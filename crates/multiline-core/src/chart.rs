// File: crates/multiline-core/src/chart.rs
// Summary: Chart instance and redraw controller: measure → layout → normalize → render, plus hover routing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::color::ColorCycle;
use crate::config::ChartConfig;
use crate::dataset::ChartDataset;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::{Layout, RenderContext};
use crate::normalize::normalize;
use crate::render::render;
use crate::resize::{ResizeNotifier, Subscription};
use crate::scene::Scene;
use crate::series::LineSeries;
use crate::tooltip::LabelFormatter;
use crate::types::Size;

/// Supplies the current container size. Measured afresh on every redraw.
pub trait ContainerSize {
    fn measure(&self) -> Size;
}

impl ContainerSize for Size {
    fn measure(&self) -> Size {
        *self
    }
}

impl<F> ContainerSize for F
where
    F: Fn() -> Size,
{
    fn measure(&self) -> Size {
        self()
    }
}

/// Summary of a completed redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedrawReport {
    pub size: Size,
    pub categories: usize,
    pub series: usize,
}

/// One chart bound to one drawing surface.
pub struct MultiLineChart {
    config: ChartConfig,
    colors: ColorCycle,
    sizer: Box<dyn ContainerSize>,
    formatter: Option<Box<dyn LabelFormatter>>,
    dataset: Option<ChartDataset>,
    size: Option<Size>,
    scene: Scene,
    series: Vec<LineSeries>,
    layout: Option<Layout>,
    resize: Option<Subscription>,
}

impl MultiLineChart {
    /// Fails when `line_colors` contains an unparseable color.
    pub fn new(config: ChartConfig, sizer: impl ContainerSize + 'static) -> Result<Self> {
        let colors = config.color_cycle()?;
        Ok(Self {
            config,
            colors,
            sizer: Box::new(sizer),
            formatter: None,
            dataset: None,
            size: None,
            scene: Scene::default(),
            series: Vec::new(),
            layout: None,
            resize: None,
        })
    }

    pub fn with_label_formatter(mut self, formatter: impl LabelFormatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn set_label_formatter(&mut self, formatter: Option<Box<dyn LabelFormatter>>) {
        self.formatter = formatter;
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&ChartDataset> {
        self.dataset.as_ref()
    }

    /// Surface as left by the last redraw.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Derived series of the last successful redraw.
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Size measured by the last redraw.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Replace the dataset wholesale and redraw.
    pub fn set_data(&mut self, dataset: ChartDataset) -> Result<RedrawReport> {
        self.dataset = Some(dataset);
        self.redraw()
    }

    /// Full recompute and redraw. Without a dataset this only re-measures.
    ///
    /// The surface is cleared first; a fatal error leaves it empty rather
    /// than half drawn.
    pub fn redraw(&mut self) -> Result<RedrawReport> {
        self.size = None;
        let size = self.sizer.measure();
        self.size = Some(size);

        self.scene.clear();
        self.series.clear();
        self.layout = None;
        self.colors.reset();

        let Some(dataset) = self.dataset.as_ref() else {
            tracing::debug!("redraw skipped: no dataset");
            return Ok(RedrawReport { size, categories: 0, series: 0 });
        };

        let ctx = RenderContext::new(size, dataset, &self.config);
        let layout = Layout::compute(&ctx).inspect_err(|e| tracing::warn!(error = %e, "redraw aborted"))?;
        let series = match normalize(dataset, &layout.y, layout.width) {
            Ok(series) => series,
            Err(e) if !e.is_fatal() => {
                tracing::debug!(reason = %e, "nothing to draw");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "redraw aborted");
                return Err(e);
            }
        };

        self.scene = render(&ctx, &layout, &series, &mut self.colors);
        let report = RedrawReport { size, categories: dataset.categories.len(), series: series.len() };
        self.series = series;
        self.layout = Some(layout);
        tracing::debug!(?report, "redraw complete");
        Ok(report)
    }

    /// Route a pointer position (surface coordinates) to marker hover handling.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.scene.hover(Point::new(x, y), self.formatter.as_deref())
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) -> bool {
        self.scene.hover_end()
    }

    /// Redraw on every resize notification until torn down. The subscription
    /// lives inside the chart, so dropping the chart also unsubscribes.
    pub fn watch_resize(chart: &Rc<RefCell<Self>>, notifier: &ResizeNotifier) {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(chart);
        let subscription = notifier.subscribe(move || {
            let Some(chart) = weak.upgrade() else { return Ok(()) };
            let mut chart = chart.borrow_mut();
            chart.redraw().map(|_| ())
        });
        chart.borrow_mut().resize = Some(subscription);
    }

    pub fn is_watching_resize(&self) -> bool {
        self.resize.as_ref().is_some_and(Subscription::is_active)
    }

    /// Release the resize subscription and clear the surface.
    pub fn teardown(&mut self) {
        if let Some(sub) = self.resize.take() {
            sub.release();
        }
        self.scene.clear();
        self.series.clear();
        self.layout = None;
    }
}

impl std::fmt::Debug for MultiLineChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiLineChart")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("series", &self.series.len())
            .field("watching_resize", &self.resize.is_some())
            .finish()
    }
}
