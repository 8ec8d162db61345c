use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Rgba;

/// An HSV color derived from [`Rgba`], never independently stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Hsv {
    /// Hue in whole degrees (0.0 to 360.0, exclusive)
    pub h: f32,
    /// Saturation (0.0 to 1.0), rounded to 2 decimal digits
    pub s: f32,
    /// Value (0.0 to 1.0), rounded to 2 decimal digits
    pub v: f32,
}

/// Convert RGB channels to HSV.
///
/// Hue is computed piecewise by whichever channel is maximal; the red-max
/// case splits on green vs blue to keep hue in `[0, 360)`.
pub fn rgb_to_hsv(rgba: &Rgba) -> Hsv {
    let r = rgba.r as f32 / 255.;
    let g = rgba.g as f32 / 255.;
    let b = rgba.b as f32 / 255.;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0. {
        0.
    } else if max == r {
        if g >= b {
            60. * (g - b) / delta
        } else {
            60. * (g - b) / delta + 360.
        }
    } else if max == g {
        60. * (b - r) / delta + 120.
    } else {
        60. * (r - g) / delta + 240.
    };

    let s = if max == 0. { 0. } else { 1. - min / max };

    Hsv {
        h: h.floor(),
        s: round2(s),
        v: round2(max),
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.).round() / 100.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(&Rgba::new(255, 0, 0)).h, 0.);
        assert_eq!(rgb_to_hsv(&Rgba::new(0, 255, 0)).h, 120.);
        assert_eq!(rgb_to_hsv(&Rgba::new(0, 0, 255)).h, 240.);
    }

    #[test]
    fn test_red_max_branch_keeps_hue_in_range() {
        // Magenta-ish: red is maximal and blue exceeds green, so the hue
        // wraps up into the 300s instead of going negative.
        let hsv = rgb_to_hsv(&Rgba::new(255, 0, 255));
        assert_eq!(hsv.h, 300.);

        let hsv = rgb_to_hsv(&Rgba::new(255, 0, 128));
        assert!(hsv.h > 300. && hsv.h < 360.);
    }

    #[test]
    fn test_orange() {
        let hsv = rgb_to_hsv(&Rgba::new(255, 128, 0));
        assert_eq!(hsv.h, 30.);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_achromatic() {
        let white = rgb_to_hsv(&Rgba::new(255, 255, 255));
        assert_eq!((white.h, white.s, white.v), (0., 0., 1.));

        let black = rgb_to_hsv(&Rgba::new(0, 0, 0));
        assert_eq!((black.h, black.s, black.v), (0., 0., 0.));

        let gray = rgb_to_hsv(&Rgba::new(128, 128, 128));
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
        assert_eq!(gray.v, 0.5);
    }

    #[test]
    fn test_saturation_and_value_rounded_to_two_digits() {
        // 100/255 = 0.392..., 55/100 leaves s = 0.45.
        let hsv = rgb_to_hsv(&Rgba::new(100, 55, 55));
        assert_eq!(hsv.s, 0.45);
        assert_eq!(hsv.v, 0.39);
    }
}
