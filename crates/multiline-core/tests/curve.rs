// File: crates/multiline-core/tests/curve.rs
// Purpose: Interpolation names and the shape of generated paths.

use multiline_core::curve::PathCommand;
use multiline_core::{ChartError, Interpolation, Point};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn names_round_trip_through_from_str() {
    for mode in Interpolation::ALL {
        assert_eq!(mode.name().parse::<Interpolation>().unwrap(), mode);
    }
    assert_eq!(Interpolation::ALL.len(), 13);
    assert_eq!("basis-closed".parse::<Interpolation>().unwrap(), Interpolation::BasisClosed);
    assert_eq!("cardinal-closed".parse::<Interpolation>().unwrap(), Interpolation::CardinalClosed);
    assert_eq!(Interpolation::default(), Interpolation::Basis);
    let err = "wobbly".parse::<Interpolation>().unwrap_err();
    assert!(matches!(err, ChartError::UnsupportedInterpolation(ref n) if n == "wobbly"));
}

#[test]
fn linear_connects_points_in_order() {
    let path = Interpolation::Linear.path(&pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)]));
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 5.0)),
            PathCommand::LineTo(Point::new(20.0, 0.0)),
        ]
    );
    assert_eq!(path.to_svg(), "M0,0L10,5L20,0");

    let closed = Interpolation::LinearClosed.path(&pts(&[(0.0, 0.0), (10.0, 5.0)]));
    assert_eq!(closed.to_svg(), "M0,0L10,5Z");
}

#[test]
fn step_variants() {
    let p = pts(&[(0.0, 0.0), (10.0, 10.0)]);
    assert_eq!(Interpolation::Step.path(&p).to_svg(), "M0,0L5,0L5,10L10,10");
    assert_eq!(Interpolation::StepBefore.path(&p).to_svg(), "M0,0L0,10L10,10");
    assert_eq!(Interpolation::StepAfter.path(&p).to_svg(), "M0,0L10,0L10,10");
}

#[test]
fn degenerate_inputs() {
    for mode in Interpolation::ALL {
        assert!(mode.path(&[]).is_empty(), "{mode}");
        let single = mode.path(&pts(&[(3.0, 4.0)]));
        assert_eq!(single.commands, vec![PathCommand::MoveTo(Point::new(3.0, 4.0))], "{mode}");
    }
}

#[test]
fn clamped_curves_touch_both_ends() {
    let p = pts(&[(0.0, 0.0), (10.0, 8.0), (20.0, 2.0), (30.0, 6.0)]);
    for mode in [Interpolation::Basis, Interpolation::Bundle, Interpolation::Cardinal, Interpolation::Monotone] {
        let path = mode.path(&p);
        assert_eq!(path.start(), Some(p[0]), "{mode}");
        let end = path.end().unwrap();
        assert!((end.x - 30.0).abs() < 1e-9 && (end.y - 6.0).abs() < 1e-9, "{mode}");
    }
}

#[test]
fn open_curves_skip_the_ends() {
    let p = pts(&[(0.0, 0.0), (10.0, 8.0), (20.0, 2.0), (30.0, 6.0)]);
    let cardinal = Interpolation::CardinalOpen.path(&p);
    assert_eq!(cardinal.start(), Some(p[1]));
    assert_eq!(cardinal.end(), Some(p[2]));

    assert_eq!(cardinal.to_svg(), "M10,8C13,8.3,17,2.3,20,2");

    let basis = Interpolation::BasisOpen.path(&p);
    let start = basis.start().unwrap();
    assert!((start.x - 10.0).abs() < 1e-9);
    assert!((start.y - (0.0 + 32.0 + 2.0) / 6.0).abs() < 1e-9);
}

#[test]
fn open_curves_fall_back_to_lines_when_short() {
    let two = pts(&[(0.0, 0.0), (10.0, 8.0)]);
    let three = pts(&[(0.0, 0.0), (10.0, 8.0), (20.0, 2.0)]);
    for mode in [Interpolation::BasisOpen, Interpolation::CardinalOpen] {
        assert_eq!(mode.path(&two).to_svg(), "M0,0L10,8", "{mode}");
        assert_eq!(mode.path(&three).to_svg(), "M0,0L10,8L20,2", "{mode}");
    }
}

#[test]
fn closed_curves_end_where_they_start() {
    let p = pts(&[(0.0, 0.0), (10.0, 8.0), (20.0, 2.0), (30.0, 6.0)]);
    for mode in [Interpolation::BasisClosed, Interpolation::CardinalClosed] {
        let path = mode.path(&p);
        assert_eq!(path.commands.last(), Some(&PathCommand::Close), "{mode}");
        let (start, end) = (path.start().unwrap(), path.end().unwrap());
        assert!(start.distance(end) < 1e-9, "{mode}: {start:?} vs {end:?}");
    }

    // one cubic per ring edge
    let cardinal = Interpolation::CardinalClosed.path(&p);
    let cubics = cardinal.commands.iter().filter(|c| matches!(c, PathCommand::CubicTo(..))).count();
    assert_eq!(cubics, 4);
    assert_eq!(cardinal.start(), Some(p[0]));

    let basis = Interpolation::BasisClosed.path(&p);
    let start = basis.start().unwrap();
    assert!((start.x - 20.0).abs() < 1e-9);
    assert!((start.y - (8.0 + 8.0 + 6.0) / 6.0).abs() < 1e-9);

    let short = Interpolation::CardinalClosed.path(&pts(&[(0.0, 0.0), (10.0, 8.0)]));
    assert_eq!(short.to_svg(), "M0,0L10,8Z");
}

#[test]
fn cardinal_ends_with_quadratics() {
    let p = pts(&[(0.0, 0.0), (10.0, 8.0), (20.0, 2.0)]);
    let path = Interpolation::Cardinal.path(&p);
    assert!(matches!(path.commands[1], PathCommand::QuadTo(..)));
    assert_eq!(path.to_svg(), "M0,0Q8,7.8,10,8Q12,8.2,20,2");
}

#[test]
fn bundle_straightens_with_line_tension() {
    let p = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
    let pulled = pts(&[(0.0, 0.0), (10.0, 7.0), (20.0, 0.0)]);
    assert_eq!(Interpolation::Bundle.path(&p).to_svg(), Interpolation::Basis.path(&pulled).to_svg());
}

#[test]
fn monotone_does_not_overshoot() {
    let p = pts(&[(0.0, 0.0), (1.0, 10.0), (2.0, 10.0), (3.0, 20.0)]);
    let path = Interpolation::Monotone.path(&p);
    let mut current = p[0];
    for cmd in &path.commands {
        if let PathCommand::CubicTo(c1, c2, end) = *cmd {
            let (lo, hi) = (current.y.min(end.y), current.y.max(end.y));
            for c in [c1, c2] {
                assert!(c.y >= lo - 1e-9 && c.y <= hi + 1e-9, "control {c:?} outside [{lo}, {hi}]");
            }
            current = end;
        }
    }
    assert_eq!(current, p[3]);
}

#[test]
fn monotone_tolerates_repeated_points() {
    let p = pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]);
    let path = Interpolation::Monotone.path(&p);
    assert_eq!(path.to_svg(), "M0,0L5,5");
}
