// File: crates/multiline-core/src/curve.rs
// Summary: Interpolation modes and the curve generators that turn points into path commands.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;
use crate::geometry::Point;

/// Curve-smoothing algorithm used to connect a series' points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    Linear,
    LinearClosed,
    /// Horizontal to the midpoint between two points, vertical, then horizontal.
    Step,
    StepBefore,
    StepAfter,
    #[default]
    Basis,
    BasisOpen,
    /// Periodic B-spline over the points taken as a ring.
    BasisClosed,
    /// Basis spline over points pulled towards the straight chord.
    Bundle,
    Cardinal,
    CardinalOpen,
    CardinalClosed,
    /// Cubic Hermite that preserves monotonicity in y.
    Monotone,
}

/// Line tension; bundle reuses it as its straightening factor.
const TENSION: f64 = 0.7;

impl Interpolation {
    pub const ALL: [Interpolation; 13] = [
        Interpolation::Linear,
        Interpolation::LinearClosed,
        Interpolation::Step,
        Interpolation::StepBefore,
        Interpolation::StepAfter,
        Interpolation::Basis,
        Interpolation::BasisOpen,
        Interpolation::BasisClosed,
        Interpolation::Bundle,
        Interpolation::Cardinal,
        Interpolation::CardinalOpen,
        Interpolation::CardinalClosed,
        Interpolation::Monotone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::LinearClosed => "linear-closed",
            Interpolation::Step => "step",
            Interpolation::StepBefore => "step-before",
            Interpolation::StepAfter => "step-after",
            Interpolation::Basis => "basis",
            Interpolation::BasisOpen => "basis-open",
            Interpolation::BasisClosed => "basis-closed",
            Interpolation::Bundle => "bundle",
            Interpolation::Cardinal => "cardinal",
            Interpolation::CardinalOpen => "cardinal-open",
            Interpolation::CardinalClosed => "cardinal-closed",
            Interpolation::Monotone => "monotone",
        }
    }

    /// Build the path through `points`, in order.
    pub fn path(self, points: &[Point]) -> PathData {
        let mut path = PathData::default();
        match points {
            [] => return path,
            [only] => {
                path.move_to(*only);
                return path;
            }
            _ => {}
        }
        match self {
            Interpolation::Linear => linear(&mut path, points),
            Interpolation::LinearClosed => {
                linear(&mut path, points);
                path.close();
            }
            Interpolation::Step => step_mid(&mut path, points),
            Interpolation::StepBefore => step_before(&mut path, points),
            Interpolation::StepAfter => step_after(&mut path, points),
            Interpolation::Basis => basis(&mut path, points),
            Interpolation::BasisOpen => basis_open(&mut path, points),
            Interpolation::BasisClosed => basis_closed(&mut path, points),
            Interpolation::Bundle => basis(&mut path, &straighten(points, TENSION)),
            Interpolation::Cardinal => cardinal(&mut path, points, TENSION),
            Interpolation::CardinalOpen => cardinal_open(&mut path, points, TENSION),
            Interpolation::CardinalClosed => cardinal_closed(&mut path, points, TENSION),
            Interpolation::Monotone => monotone(&mut path, points),
        }
        path
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interpolation::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| ChartError::UnsupportedInterpolation(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Backend-neutral path, replayed onto Skia or serialized as SVG `d`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }
    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }
    pub fn quad_to(&mut self, c: Point, p: Point) {
        self.commands.push(PathCommand::QuadTo(c, p));
    }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
    }
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path.
    pub fn start(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Current point after the last command.
    pub fn end(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match c {
            PathCommand::MoveTo(p)
            | PathCommand::LineTo(p)
            | PathCommand::QuadTo(_, p)
            | PathCommand::CubicTo(_, _, p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// SVG path data string.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for c in &self.commands {
            match c {
                PathCommand::MoveTo(p) => d.push_str(&format!("M{},{}", fmt_num(p.x), fmt_num(p.y))),
                PathCommand::LineTo(p) => d.push_str(&format!("L{},{}", fmt_num(p.x), fmt_num(p.y))),
                PathCommand::QuadTo(c, p) => d.push_str(&format!(
                    "Q{},{},{},{}",
                    fmt_num(c.x),
                    fmt_num(c.y),
                    fmt_num(p.x),
                    fmt_num(p.y)
                )),
                PathCommand::CubicTo(a, b, p) => d.push_str(&format!(
                    "C{},{},{},{},{},{}",
                    fmt_num(a.x),
                    fmt_num(a.y),
                    fmt_num(b.x),
                    fmt_num(b.y),
                    fmt_num(p.x),
                    fmt_num(p.y)
                )),
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }

    pub(crate) fn to_skia(&self) -> skia_safe::Path {
        let mut path = skia_safe::Path::new();
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(p) => {
                    path.move_to(p.to_skia());
                }
                PathCommand::LineTo(p) => {
                    path.line_to(p.to_skia());
                }
                PathCommand::QuadTo(c, p) => {
                    path.quad_to(c.to_skia(), p.to_skia());
                }
                PathCommand::CubicTo(a, b, p) => {
                    path.cubic_to(a.to_skia(), b.to_skia(), p.to_skia());
                }
                PathCommand::Close => {
                    path.close();
                }
            }
        }
        path
    }
}

/// Compact number text for path data: at most three decimals, no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// ---- generators --------------------------------------------------------------

fn linear(path: &mut PathData, pts: &[Point]) {
    path.move_to(pts[0]);
    for &p in &pts[1..] {
        path.line_to(p);
    }
}

fn step_mid(path: &mut PathData, pts: &[Point]) {
    path.move_to(pts[0]);
    let mut prev = pts[0];
    for &p in &pts[1..] {
        let mid = (prev.x + p.x) / 2.0;
        path.line_to(Point::new(mid, prev.y));
        path.line_to(Point::new(mid, p.y));
        prev = p;
    }
    path.line_to(prev);
}

fn step_before(path: &mut PathData, pts: &[Point]) {
    path.move_to(pts[0]);
    let mut prev = pts[0];
    for &p in &pts[1..] {
        path.line_to(Point::new(prev.x, p.y));
        path.line_to(p);
        prev = p;
    }
}

fn step_after(path: &mut PathData, pts: &[Point]) {
    path.move_to(pts[0]);
    let mut prev = pts[0];
    for &p in &pts[1..] {
        path.line_to(Point::new(p.x, prev.y));
        path.line_to(p);
        prev = p;
    }
}

/// B-spline knot at `b`, weighted by its neighbours.
fn knot(a: Point, b: Point, c: Point) -> Point {
    Point::new((a.x + 4.0 * b.x + c.x) / 6.0, (a.y + 4.0 * b.y + c.y) / 6.0)
}

/// Uniform cubic B-spline segment between `p1` and `p2` (with neighbours), as a Bézier.
fn basis_segment(path: &mut PathData, p0: Point, p1: Point, p2: Point) {
    let c1 = Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0);
    let c2 = Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0);
    path.cubic_to(c1, c2, knot(p0, p1, p2));
}

fn basis(path: &mut PathData, pts: &[Point]) {
    let n = pts.len();
    if n < 3 {
        linear(path, pts);
        return;
    }
    path.move_to(pts[0]);
    // first point is clamped: the curve starts exactly on it
    let (a, b) = (pts[0], pts[1]);
    path.line_to(Point::new((5.0 * a.x + b.x) / 6.0, (5.0 * a.y + b.y) / 6.0));
    for w in pts.windows(3) {
        basis_segment(path, w[0], w[1], w[2]);
    }
    // and so is the last one
    let (y, z) = (pts[n - 2], pts[n - 1]);
    basis_segment(path, y, z, z);
    path.line_to(z);
}

fn basis_open(path: &mut PathData, pts: &[Point]) {
    if pts.len() < 4 {
        linear(path, pts);
        return;
    }
    path.move_to(knot(pts[0], pts[1], pts[2]));
    for w in pts.windows(4) {
        basis_segment(path, w[1], w[2], w[3]);
    }
}

fn basis_closed(path: &mut PathData, pts: &[Point]) {
    let n = pts.len();
    let at = |i: usize| pts[i % n];
    path.move_to(knot(at(1), at(2), at(3)));
    for i in 4..n + 4 {
        basis_segment(path, at(i - 2), at(i - 1), at(i));
    }
    path.close();
}

fn straighten(pts: &[Point], beta: f64) -> Vec<Point> {
    let n = pts.len();
    let (first, last) = (pts[0], pts[n - 1]);
    pts.iter()
        .enumerate()
        .map(|(i, &p)| {
            let t = i as f64 / (n - 1) as f64;
            let chord = first.lerp(last, t);
            Point::new(beta * p.x + (1.0 - beta) * chord.x, beta * p.y + (1.0 - beta) * chord.y)
        })
        .collect()
}

/// Control-point offsets at every interior point of `pts`.
fn cardinal_tangents(pts: &[Point], tension: f64) -> Vec<(f64, f64)> {
    let a = (1.0 - tension) / 2.0;
    pts.windows(3)
        .map(|w| (a * (w[2].x - w[0].x), a * (w[2].y - w[0].y)))
        .collect()
}

/// Hermite pieces through `pts`, continuing from the current point `pts[0]`.
/// Either every point has a tangent, or only the interior ones do and the
/// first and last pieces become quadratics.
fn hermite(path: &mut PathData, pts: &[Point], tangents: &[(f64, f64)]) {
    let n = pts.len();
    let quad = n == tangents.len() + 2;
    let first = usize::from(quad);
    if quad {
        let (p, t) = (pts[1], tangents[0]);
        path.quad_to(p.offset(-t.0 * 2.0 / 3.0, -t.1 * 2.0 / 3.0), p);
    }
    for i in 1..tangents.len() {
        let (p, tp) = (pts[first + i - 1], tangents[i - 1]);
        let (q, tq) = (pts[first + i], tangents[i]);
        path.cubic_to(p.offset(tp.0, tp.1), q.offset(-tq.0, -tq.1), q);
    }
    if quad {
        let (p, t) = (pts[n - 2], tangents[tangents.len() - 1]);
        path.quad_to(p.offset(t.0 * 2.0 / 3.0, t.1 * 2.0 / 3.0), pts[n - 1]);
    }
}

fn cardinal(path: &mut PathData, pts: &[Point], tension: f64) {
    if pts.len() < 3 {
        linear(path, pts);
        return;
    }
    path.move_to(pts[0]);
    hermite(path, pts, &cardinal_tangents(pts, tension));
}

/// Cardinal spline that uses the first and last points only as tangent guides.
fn cardinal_open(path: &mut PathData, pts: &[Point], tension: f64) {
    let n = pts.len();
    if n < 4 {
        linear(path, pts);
        return;
    }
    path.move_to(pts[1]);
    hermite(path, &pts[1..n - 1], &cardinal_tangents(pts, tension));
}

fn cardinal_closed(path: &mut PathData, pts: &[Point], tension: f64) {
    let n = pts.len();
    if n < 3 {
        linear(path, pts);
        path.close();
        return;
    }
    let mut ring = pts.to_vec();
    ring.push(pts[0]);
    // wrap the neighbours around so every ring point gets a tangent
    let mut guides = Vec::with_capacity(n + 3);
    guides.push(pts[n - 1]);
    guides.extend_from_slice(pts);
    guides.extend_from_slice(&[pts[0], pts[1]]);
    path.move_to(pts[0]);
    hermite(path, &ring, &cardinal_tangents(&guides, tension));
    path.close();
}

fn monotone(path: &mut PathData, pts: &[Point]) {
    // coincident neighbours would produce zero-width intervals
    let mut xs: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts {
        if xs.last() != Some(&p) {
            xs.push(p);
        }
    }
    let n = xs.len();
    path.move_to(xs[0]);
    if n < 2 {
        return;
    }
    if n == 2 {
        path.line_to(xs[1]);
        return;
    }

    let mut tangents = vec![0.0f64; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(xs[i - 1], xs[i], xs[i + 1]);
    }
    tangents[0] = end_slope(xs[0], xs[1], tangents[1]);
    tangents[n - 1] = end_slope(xs[n - 2], xs[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (p, q) = (xs[i], xs[i + 1]);
        let dx = (q.x - p.x) / 3.0;
        path.cubic_to(
            Point::new(p.x + dx, p.y + dx * tangents[i]),
            Point::new(q.x - dx, q.y - dx * tangents[i + 1]),
            q,
        );
    }
}

/// Steffen's slope at `b`: limited so the curve never overshoots its neighbours.
fn interior_slope(a: Point, b: Point, c: Point) -> f64 {
    let h0 = b.x - a.x;
    let h1 = c.x - b.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (b.y - a.y) / h0;
    let s1 = (c.y - b.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// One-sided slope for an end point, from the neighbouring interior tangent.
fn end_slope(a: Point, b: Point, neighbour: f64) -> f64 {
    let h = b.x - a.x;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (b.y - a.y) / h - neighbour) / 2.0
}
