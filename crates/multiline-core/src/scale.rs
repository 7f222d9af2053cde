// File: crates/multiline-core/src/scale.rs
// Summary: Categorical band scale and zero-based linear value scale, with tick generation.

use num_format::{Locale, ToFormattedString};

/// Maps discrete keys to non-overlapping, pixel-rounded bands.
///
/// Follows the classic "round bands" layout: the available range is split
/// into `n - padding + 2 * outer_padding` steps, bands are `step * (1 - padding)`
/// wide, and the leftover from flooring the step is split evenly on both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq> BandScale<K> {
    pub fn round_bands<I>(keys: I, range: (f64, f64), padding: f64, outer_padding: f64) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        // duplicate keys share the band of their first occurrence
        let mut domain: Vec<K> = Vec::new();
        for k in keys {
            if !domain.contains(&k) {
                domain.push(k);
            }
        }

        let (lo, hi) = (range.0.min(range.1), range.0.max(range.1));
        let n = domain.len() as f64;
        if domain.is_empty() {
            return Self { domain, range, start: lo, step: 0.0, bandwidth: 0.0 };
        }

        let step = ((hi - lo) / (n - padding + 2.0 * outer_padding)).floor().max(0.0);
        let error = hi - lo - (n - padding) * step;
        let start = lo + (error / 2.0).round();
        let bandwidth = (step * (1.0 - padding)).round();
        Self { domain, range, start, step, bandwidth }
    }

    /// Left edge of the band for `key`, if the key is in the domain.
    pub fn position(&self, key: &K) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Center of the band for `key`.
    pub fn center(&self, key: &K) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range_extent(&self) -> (f64, f64) {
        (self.range.0.min(self.range.1), self.range.0.max(self.range.1))
    }
}

/// Continuous value → pixel mapping. With the usual `[height, 0]` range, larger
/// values land closer to the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a value to pixels. A zero-width domain maps everything to the range start.
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 || !span.is_finite() {
            return self.range.0;
        }
        self.range.0 + (v - self.domain.0) / span * (self.range.1 - self.range.0)
    }

    /// Inverse of [`to_px`](Self::to_px).
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / span * (self.domain.1 - self.domain.0)
    }

    /// Roughly `count` evenly spaced "nice" values (multiples of 1, 2 or 5 × 10^k)
    /// covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.ordered_domain();
        let span = hi - lo;
        if count == 0 || !span.is_finite() {
            return Vec::new();
        }
        if span == 0.0 {
            return vec![lo];
        }
        let step = tick_step(span, count);
        let decimals = tick_precision(step);
        let factor = 10f64.powi(decimals as i32);
        // tolerate float noise at the domain ends
        let first = (lo / step - 1e-9).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first..=last)
            .map(|k| (k as f64 * step * factor).round() / factor)
            .collect()
    }

    /// Tick label text: as many decimals as the tick step needs, with the
    /// integer part grouped in thousands.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let (lo, hi) = self.ordered_domain();
        let span = hi - lo;
        let decimals = if span > 0.0 && span.is_finite() && count > 0 {
            tick_precision(tick_step(span, count))
        } else {
            0
        };
        move |v| group_thousands(&format!("{:.*}", decimals, v))
    }

    fn ordered_domain(&self) -> (f64, f64) {
        (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1))
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let mut step = 10f64.powf((span / count as f64).log10().floor());
    let err = count as f64 / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    step
}

fn group_thousands(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let Ok(int) = int.parse::<u64>() else {
        return text.to_string();
    };
    let mut out = format!("{sign}{}", int.to_formatted_string(&Locale::en));
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn tick_precision(step: f64) -> usize {
    (-(step.log10() + 0.01).floor()).max(0.0) as usize
}
