//! Headless color-picker logic.
//!
//! The rendering-independent half of a color picker: RGBA/HSV types,
//! hex and `rgb()/rgba()` string conversions, named-color resolution
//! behind a stubbable [`ColorResolver`] seam, CSS value formatting for
//! theme-aware selections, and the alpha checkerboard tile drawn behind
//! partially transparent colors.
//!
//! Parsing follows a deliberate leniency policy: strict entry points
//! (`hex_to_rgba`, `normalize_hex`) reject invalid input with `None`,
//! while the unified [`ColorValue::parse`] degrades unparseable input to
//! opaque black instead of failing.

mod alpha;
mod css;
mod hex;
mod hsv;
mod named;
mod parse;
mod rgba;

pub use alpha::{create_alpha_square, AlphaSquare};
pub use css::{to_css_value, PickerColor};
pub use hex::{hex_to_rgba, normalize_hex, rgb_to_hex};
pub use hsv::{rgb_to_hsv, Hsv};
pub use named::{ColorResolver, NamedColors};
pub use parse::ColorValue;
pub use rgba::Rgba;
