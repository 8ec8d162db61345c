use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rgba {
    /// Red (0 to 255)
    pub r: u8,
    /// Green (0 to 255)
    pub g: u8,
    /// Blue (0 to 255)
    pub b: u8,
    /// Alpha (0.0 to 1.0), default is 1.0 (fully opaque)
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

static RGB_FN: Lazy<Regex> = Lazy::new(|| Regex::new(r"rgba?\((.*?)\)").expect("valid regex"));

impl Rgba {
    /// Opaque black, the fallback for unparseable input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// A fully opaque color from the three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Return the same channels with the given alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0., 1.),
            ..self
        }
    }

    /// Lenient extraction from a textual `rgb(...)` or `rgba(...)` form.
    ///
    /// Malformed numeric fields default to 0 and a missing alpha defaults
    /// to 1, so this never fails; input without an `rgb(...)` form yields
    /// opaque black.
    pub fn from_rgb_str(s: &str) -> Self {
        let inner = RGB_FN
            .captures(s)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("0,0,0,1");

        let mut fields = inner
            .split(',')
            .map(|field| field.trim().parse::<f32>().unwrap_or(0.));

        let r = fields.next().unwrap_or(0.).clamp(0., 255.).round() as u8;
        let g = fields.next().unwrap_or(0.).clamp(0., 255.).round() as u8;
        let b = fields.next().unwrap_or(0.).clamp(0., 255.).round() as u8;
        let a = fields.next().unwrap_or(1.).clamp(0., 1.);

        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    /// Formats as the CSS literal `rgba(r,g,b,a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
