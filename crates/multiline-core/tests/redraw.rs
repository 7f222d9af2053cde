// File: crates/multiline-core/tests/redraw.rs
// Purpose: End-to-end redraw behavior: derived series, scene contents, hover, resize wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use multiline_core::color::to_hex;
use multiline_core::{
    Category, ChartConfig, ChartDataset, ChartError, MultiLineChart, PlottedPoint, ResizeNotifier, SeriesGroup, Size,
};

fn round1() -> ChartDataset {
    ChartDataset::new(vec![Category::new("Round1", SeriesGroup::new(["Locke", "Reyes"], vec![4.0, 8.0]))])
}

fn chart() -> MultiLineChart {
    MultiLineChart::new(ChartConfig::default(), Size::new(200.0, 100.0)).unwrap()
}

#[test]
fn round1_scenario() {
    let mut chart = chart();
    let report = chart.set_data(round1()).unwrap();
    assert_eq!(report.size, Size::new(200.0, 100.0));
    assert_eq!(report.categories, 1);
    assert_eq!(report.series, 2);

    let series = chart.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].points.len(), 1);
    assert_eq!(series[0].points[0].raw_value, 4.0);
    assert_eq!(series[0].points[0].label.as_deref(), Some("Locke"));
    assert_eq!(series[1].points[0].raw_value, 8.0);
    assert_eq!(series[1].points[0].label.as_deref(), Some("Reyes"));
    assert_eq!(chart.layout().unwrap().y.domain, (0.0, 8.0));

    let scene = chart.scene();
    assert_eq!(scene.axes().count(), 1);
    assert_eq!(scene.axes().next().unwrap().class(), "x axis");
    assert_eq!(scene.lines().count(), 2);
    assert_eq!(scene.markers().count(), 2);
    let strokes: Vec<String> = scene.lines().map(|l| to_hex(l.stroke)).collect();
    assert_eq!(strokes, ["#1f77b4", "#ff7f0e"]);
    assert!(scene.markers().all(|m| m.radius == 3.0));
}

#[test]
fn y_title_adds_left_axis() {
    let mut chart = chart();
    chart.set_data(round1().with_y_axis_title("Score")).unwrap();
    let classes: Vec<&str> = chart.scene().axes().map(|a| a.class()).collect();
    assert_eq!(classes, ["x axis", "y axis"]);
    let y_axis = chart.scene().axes().nth(1).unwrap();
    assert_eq!(y_axis.title.as_deref(), Some("Score"));
    assert_eq!(y_axis.ticks.len(), 5);
}

#[test]
fn redraw_is_idempotent() {
    let mut chart = chart();
    chart.set_data(round1()).unwrap();
    let first = chart.scene().clone();
    chart.redraw().unwrap();
    assert_eq!(chart.scene(), &first);
}

#[test]
fn configured_colors_cycle() {
    let config = ChartConfig { line_colors: Some(vec!["red".into()]), ..ChartConfig::default() };
    let mut chart = MultiLineChart::new(config, Size::new(200.0, 100.0)).unwrap();
    chart.set_data(round1()).unwrap();
    assert!(chart.scene().lines().all(|l| to_hex(l.stroke) == "#ff0000"));

    let bad = ChartConfig { line_colors: Some(vec!["not-a-color".into()]), ..ChartConfig::default() };
    let err = MultiLineChart::new(bad, Size::new(200.0, 100.0)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidColor(_)));
}

#[test]
fn redraw_without_data_only_measures() {
    let mut chart = chart();
    let report = chart.redraw().unwrap();
    assert_eq!(report.series, 0);
    assert_eq!(chart.size(), Some(Size::new(200.0, 100.0)));
    assert!(chart.scene().is_empty());
}

#[test]
fn zero_categories_draw_nothing() {
    let mut chart = chart();
    let report = chart.set_data(ChartDataset::default().with_y_axis_title("Score")).unwrap();
    assert_eq!(report.series, 0);
    assert!(chart.scene().is_empty());
    assert!(chart.series().is_empty());
}

#[test]
fn mismatched_data_leaves_surface_cleared() {
    let mut chart = chart();
    chart.set_data(round1()).unwrap();
    assert!(!chart.scene().is_empty());

    let broken = ChartDataset::new(vec![
        Category::new("R1", SeriesGroup::unlabeled(vec![1.0, 2.0])),
        Category::new("R2", SeriesGroup::unlabeled(vec![1.0])),
    ]);
    let err = chart.set_data(broken).unwrap_err();
    assert!(matches!(err, ChartError::MismatchedSeriesLength { category: 1, .. }));
    assert!(chart.scene().is_empty());
    assert!(chart.series().is_empty());
    assert!(chart.layout().is_none());
}

#[test]
fn hover_shows_and_hides_tooltip() {
    let mut chart = chart();
    chart.set_data(round1()).unwrap();
    // series 0 marker: plot (99.5, 35), plot origin (0, 10)
    assert!(chart.pointer_move(99.5, 45.0));
    assert_eq!(chart.scene().tooltip.text(), Some("Locke: 4"));
    assert!(!chart.pointer_move(100.0, 46.0));

    assert!(chart.pointer_move(99.5, 10.0));
    assert_eq!(chart.scene().tooltip.text(), Some("Reyes: 8"));

    assert!(chart.pointer_move(5.0, 90.0));
    assert!(!chart.scene().tooltip.is_visible());
    assert!(!chart.pointer_leave());
}

#[test]
fn formatter_drives_tooltip_text() {
    let mut chart = chart().with_label_formatter(|p: &PlottedPoint| Some(format!("{} pts", p.raw_value)));
    chart.set_data(round1()).unwrap();
    chart.pointer_move(99.5, 45.0);
    assert_eq!(chart.scene().tooltip.text(), Some("4 pts"));
    assert!(chart.pointer_leave());
}

#[test]
fn redraw_hides_open_tooltip() {
    let mut chart = chart();
    chart.set_data(round1()).unwrap();
    chart.pointer_move(99.5, 45.0);
    chart.redraw().unwrap();
    assert!(!chart.scene().tooltip.is_visible());
}

#[test]
fn resize_notification_redraws_at_new_size() {
    let size = Rc::new(Cell::new(Size::new(200.0, 100.0)));
    let sizer = {
        let size = size.clone();
        move || size.get()
    };
    let chart = Rc::new(RefCell::new(MultiLineChart::new(ChartConfig::default(), sizer).unwrap()));
    chart.borrow_mut().set_data(round1()).unwrap();

    let notifier = ResizeNotifier::new();
    MultiLineChart::watch_resize(&chart, &notifier);
    assert!(chart.borrow().is_watching_resize());
    assert_eq!(notifier.listener_count(), 1);

    size.set(Size::new(400.0, 200.0));
    notifier.notify().unwrap();
    assert_eq!(chart.borrow().size(), Some(Size::new(400.0, 200.0)));
    assert_eq!(chart.borrow().layout().unwrap().width, 399.0);

    drop(chart);
    assert_eq!(notifier.listener_count(), 0);
    notifier.notify().unwrap();
}

#[test]
fn teardown_unsubscribes() {
    let chart = Rc::new(RefCell::new(chart()));
    chart.borrow_mut().set_data(round1()).unwrap();
    let notifier = ResizeNotifier::new();
    MultiLineChart::watch_resize(&chart, &notifier);

    chart.borrow_mut().teardown();
    assert!(!chart.borrow().is_watching_resize());
    assert_eq!(notifier.listener_count(), 0);
    assert!(chart.borrow().scene().is_empty());
}

#[test]
fn notify_reports_failed_redraw() {
    let chart = Rc::new(RefCell::new(chart()));
    let notifier = ResizeNotifier::new();
    MultiLineChart::watch_resize(&chart, &notifier);
    let broken = ChartDataset::new(vec![
        Category::new("R1", SeriesGroup::unlabeled(vec![1.0, 2.0])),
        Category::new("R2", SeriesGroup::unlabeled(vec![1.0])),
    ]);
    assert!(chart.borrow_mut().set_data(broken).is_err());
    assert!(notifier.notify().is_err());
    // still subscribed after a failure
    assert_eq!(notifier.listener_count(), 1);
}

#[test]
fn notifier_runs_each_listener_and_honours_release() {
    let notifier = ResizeNotifier::new();
    let hits = Rc::new(Cell::new(0));
    let a = {
        let hits = hits.clone();
        notifier.subscribe(move || {
            hits.set(hits.get() + 1);
            Ok(())
        })
    };
    let b = {
        let hits = hits.clone();
        notifier.subscribe(move || {
            hits.set(hits.get() + 10);
            Ok(())
        })
    };
    notifier.notify().unwrap();
    assert_eq!(hits.get(), 11);

    a.release();
    notifier.notify().unwrap();
    assert_eq!(hits.get(), 21);
    assert!(b.is_active());
    drop(b);
    assert_eq!(notifier.listener_count(), 0);
}
