// File: crates/multiline-core/src/color.rs
// Summary: Cyclic color-assignment service and CSS-style color parsing.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// The ten-color categorical palette used when no `lineColors` are configured.
pub const CATEGORY10: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
];

pub fn default_palette() -> Vec<skia::Color> {
    CATEGORY10.iter().map(|&rgb| opaque(rgb)).collect()
}

fn opaque(rgb: u32) -> skia::Color {
    skia::Color::from_argb(255, (rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Hands out palette colors in order, wrapping around. The cursor is shared
/// across redraws and must be `reset` at the start of each one.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    palette: Vec<skia::Color>,
    cursor: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self { palette: default_palette(), cursor: 0 }
    }
}

impl ColorCycle {
    pub fn new(palette: Vec<skia::Color>) -> Self {
        let mut cycle = Self::default();
        cycle.set_palette(palette);
        cycle
    }

    /// Build from configured color strings.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let palette = names.iter().map(|n| parse_color(n.as_ref())).collect::<Result<Vec<_>>>()?;
        Ok(Self::new(palette))
    }

    /// Replace the palette and rewind. An empty palette keeps the current one.
    pub fn set_palette(&mut self, palette: Vec<skia::Color>) {
        if palette.is_empty() {
            tracing::warn!("ignoring empty line color palette");
        } else {
            self.palette = palette;
        }
        self.cursor = 0;
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn next_color(&mut self) -> skia::Color {
        let color = self.palette[self.cursor % self.palette.len()];
        self.cursor = (self.cursor + 1) % self.palette.len();
        color
    }

    pub fn palette(&self) -> &[skia::Color] {
        &self.palette
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or a basic CSS color name.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let t = s.trim();
    let invalid = || ChartError::InvalidColor(s.to_string());

    if let Some(hex) = t.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            3 => {
                // #abc expands to #aabbcc
                let nib = |shift: u32| ((v >> shift) & 0xf) as u8 * 17;
                Ok(skia::Color::from_argb(255, nib(8), nib(4), nib(0)))
            }
            6 => Ok(opaque(v)),
            8 => Ok(skia::Color::from_argb(v as u8, (v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8)),
            _ => Err(invalid()),
        };
    }

    if let Some(body) = t.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts = body
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        return match parts.as_slice() {
            [r, g, b] => Ok(skia::Color::from_argb(255, *r, *g, *b)),
            _ => Err(invalid()),
        };
    }

    let rgb = match t.to_ascii_lowercase().as_str() {
        "black" => 0x000000,
        "white" => 0xffffff,
        "red" => 0xff0000,
        "green" => 0x008000,
        "blue" => 0x0000ff,
        "orange" => 0xffa500,
        "purple" => 0x800080,
        "gray" | "grey" => 0x808080,
        "steelblue" => 0x4682b4,
        "teal" => 0x008080,
        _ => return Err(invalid()),
    };
    Ok(opaque(rgb))
}

/// `#rrggbb` text for a color (alpha dropped; see [`opacity`]).
pub fn to_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Alpha in `[0, 1]`.
pub fn opacity(c: skia::Color) -> f64 {
    c.a() as f64 / 255.0
}
