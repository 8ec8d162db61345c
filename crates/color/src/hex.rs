use once_cell::sync::Lazy;
use regex::Regex;

use crate::Rgba;

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^#?[0-9A-Fa-f]{3,8}$").expect("valid regex"));

/// Normalize a hex color string to its canonical `#`-prefixed form.
///
/// 3/4-digit forms are expanded by digit duplication (`abc` → `#aabbcc`);
/// 6/8-digit forms pass through. The leading `#` is optional. Any other
/// length, or any non-hex character, yields `None`.
pub fn normalize_hex(hex: &str) -> Option<String> {
    if !HEX_RE.is_match(hex) {
        return None;
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    match digits.len() {
        3 | 4 => {
            let mut out = String::with_capacity(1 + digits.len() * 2);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            Some(out)
        }
        6 | 8 => Some(format!("#{digits}")),
        _ => None,
    }
}

/// Parse a 3, 4, 6, or 8 hex-digit color string (leading `#` optional).
///
/// 8-digit forms carry alpha as the trailing pair. Invalid input yields
/// `None`, never a panic.
pub fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let norm = normalize_hex(hex)?;
    let digits = &norm[1..];
    // Charset is pre-validated, so the slices always parse.
    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

    let mut rgba = Rgba::new(pair(0), pair(2), pair(4));
    if digits.len() == 8 {
        rgba.a = pair(6) as f32 / 255.;
    }
    Some(rgba)
}

/// Format the RGB channels as `#rrggbb` (alpha is not encoded).
pub fn rgb_to_hex(rgba: &Rgba, upper: bool) -> String {
    let color = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    if upper {
        color.to_uppercase()
    } else {
        color
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize_hex_expands_short_forms() {
        assert_eq!(normalize_hex("abc").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("#abc").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("#1234").as_deref(), Some("#11223344"));
    }

    #[test]
    fn test_normalize_hex_passes_long_forms_through() {
        assert_eq!(normalize_hex("aabbcc").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("#AABBCCDD").as_deref(), Some("#AABBCCDD"));
    }

    #[test]
    fn test_normalize_hex_rejects_invalid_input() {
        assert_eq!(normalize_hex("xyz"), None);
        assert_eq!(normalize_hex(""), None);
        assert_eq!(normalize_hex("#"), None);
        assert_eq!(normalize_hex("ab"), None);
        // Valid charset, unsupported lengths.
        assert_eq!(normalize_hex("12345"), None);
        assert_eq!(normalize_hex("1234567"), None);
        assert_eq!(normalize_hex("#aabbccdd00"), None);
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#ff0000"), Some(Rgba::new(255, 0, 0)));
        assert_eq!(hex_to_rgba("f00"), Some(Rgba::new(255, 0, 0)));
        assert_eq!(hex_to_rgba("#ABCDEF"), Some(Rgba::new(0xab, 0xcd, 0xef)));
        assert_eq!(hex_to_rgba("zzz"), None);
    }

    #[test]
    fn test_hex_to_rgba_with_alpha() {
        let rgba = hex_to_rgba("#ff000080").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
        assert!((rgba.a - 128. / 255.).abs() < 1e-6);

        // 4-digit form expands to 8 digits and carries alpha too.
        let rgba = hex_to_rgba("f008").unwrap();
        assert!((rgba.a - 136. / 255.).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(&Rgba::new(255, 0, 0), false), "#ff0000");
        assert_eq!(rgb_to_hex(&Rgba::new(0xab, 0xcd, 0xef), true), "#ABCDEF");
        assert_eq!(rgb_to_hex(&Rgba::new(0, 1, 2), false), "#000102");
    }

    proptest! {
        #[test]
        fn hex_round_trips_to_canonical_six_digit_form(s in "[0-9a-fA-F]{6}") {
            let rgba = hex_to_rgba(&s).unwrap();
            prop_assert_eq!(rgb_to_hex(&rgba, false), format!("#{}", s.to_lowercase()));
        }

        #[test]
        fn short_hex_round_trips_via_digit_duplication(s in "[0-9a-fA-F]{3}") {
            let rgba = hex_to_rgba(&s).unwrap();
            let expanded: String = s.chars().flat_map(|c| [c, c]).collect();
            prop_assert_eq!(rgb_to_hex(&rgba, false), format!("#{}", expanded.to_lowercase()));
        }

        #[test]
        fn eight_digit_hex_keeps_rgb_channels(s in "[0-9a-f]{8}") {
            let rgba = hex_to_rgba(&s).unwrap();
            prop_assert_eq!(rgb_to_hex(&rgba, false), format!("#{}", &s[..6]));
        }
    }
}
