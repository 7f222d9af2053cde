// File: crates/multiline-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use multiline_core::{Category, ChartConfig, ChartDataset, MultiLineChart, RenderOptions, SeriesGroup, Size};

#[test]
fn render_rgba8_buffer() {
    let mut chart = MultiLineChart::new(ChartConfig::default(), Size::new(200.0, 100.0)).unwrap();
    chart
        .set_data(ChartDataset::new(vec![Category::new("Round1", SeriesGroup::new(["Locke", "Reyes"], vec![4.0, 8.0]))]))
        .unwrap();

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.scene().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (200, 100));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // first marker sits at (99.5, 45) filled with the first palette color
    let i = 44 * stride + 99 * 4;
    let want = [0x1f, 0x77, 0xb4];
    for (got, want) in px[i..i + 3].iter().zip(want) {
        assert!(got.abs_diff(want) <= 2, "marker pixel {:?}", &px[i..i + 4]);
    }
}

#[test]
fn empty_scene_is_all_background() {
    let mut chart = MultiLineChart::new(ChartConfig::default(), Size::new(40.0, 20.0)).unwrap();
    chart.redraw().unwrap();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, _, _, _) = chart.scene().render_to_rgba8(&opts).expect("rgba render");
    assert!(px.iter().all(|&b| b == 255));
}
