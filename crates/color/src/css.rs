use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Rgba;

/// A color selection that may reference a theme variable instead of a
/// literal RGBA value. A set `theme_var` takes precedence over `rgba`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PickerColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_var: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<Rgba>,
}

impl PickerColor {
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self {
            theme_var: None,
            rgba: Some(rgba),
        }
    }

    pub fn from_theme_var(name: impl Into<String>) -> Self {
        Self {
            theme_var: Some(name.into()),
            rgba: None,
        }
    }
}

/// Render a color selection as a CSS value.
///
/// A theme variable renders as a `var(--name)` custom-property reference
/// when `use_css_var` is set, otherwise as the `${name}` template form
/// consumed by stylesheet preprocessors. A literal color renders as
/// `rgba(r,g,b,a)`. An absent selection, or a selection with neither
/// field, renders as `None`.
pub fn to_css_value(color: Option<&PickerColor>, use_css_var: bool) -> Option<String> {
    let color = color?;
    if let Some(var) = &color.theme_var {
        if use_css_var {
            Some(format!("var(--{var})"))
        } else {
            Some(format!("${{{var}}}"))
        }
    } else {
        color.rgba.map(|rgba| rgba.to_string())
    }
}
