use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{hex_to_rgba, rgb_to_hsv, ColorResolver, Hsv, NamedColors, Rgba};

/// The canonical internal color representation: RGBA channels plus the
/// derived HSV components, kept together so consumers never recompute one
/// from the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorValue {
    pub rgba: Rgba,
    pub hsv: Hsv,
}

impl ColorValue {
    /// Parse any supported color string, resolving keywords through the
    /// built-in CSS table.
    pub fn parse(color: &str) -> Self {
        Self::parse_with(color, &NamedColors)
    }

    /// Parse any supported color string with a caller-supplied resolver
    /// for color keywords.
    ///
    /// Detection order: hex (`#` anywhere), `rgb(a)` textual form, bare
    /// numeric triplet/quad (`"255, 0, 0"`), then keyword resolution.
    /// Unresolvable input degrades to opaque black rather than failing.
    pub fn parse_with(color: &str, resolver: &dyn ColorResolver) -> Self {
        let rgba = if color.contains('#') {
            hex_to_rgba(color).unwrap_or(Rgba::BLACK)
        } else if color.contains("rgb") {
            Rgba::from_rgb_str(color)
        } else if color.chars().any(|c| c.is_ascii_digit()) {
            Rgba::from_rgb_str(&format!("rgba({color})"))
        } else {
            resolver.resolve(color).unwrap_or_else(|| {
                debug!(color, "unresolved color keyword, falling back to black");
                Rgba::BLACK
            })
        };
        rgba.into()
    }
}

impl From<Rgba> for ColorValue {
    fn from(rgba: Rgba) -> Self {
        Self {
            rgba,
            hsv: rgb_to_hsv(&rgba),
        }
    }
}
