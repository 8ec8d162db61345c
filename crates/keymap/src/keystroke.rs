use std::fmt;

use anyhow::{anyhow, Result};

/// Modifier keys held as part of a [`Keystroke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// The platform key: Cmd on macOS, Win elsewhere.
    pub platform: bool,
}

/// A parsed key combination such as `ctrl-shift-a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    pub modifiers: Modifiers,
    pub key: String,
}

impl Keystroke {
    /// Parse a `-`-separated keystroke, e.g. `"ctrl-shift-a"`.
    ///
    /// Modifier tokens are `ctrl`, `alt`, `shift`, and `cmd`/`win`; the
    /// remaining token is the key itself. A keystroke with no key, an
    /// empty key, or more than one key is an error.
    pub fn parse(source: &str) -> Result<Self> {
        let mut modifiers = Modifiers::default();
        let mut key: Option<String> = None;

        for token in source.split('-') {
            match token {
                "ctrl" => modifiers.control = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "cmd" | "win" => modifiers.platform = true,
                _ => {
                    if token.is_empty() || key.replace(token.to_string()).is_some() {
                        return Err(anyhow!("invalid keystroke `{source}`"));
                    }
                }
            }
        }

        let key = key.ok_or_else(|| anyhow!("missing key in keystroke `{source}`"))?;
        Ok(Self { modifiers, key })
    }

    /// Display string in the `Ctrl+Alt+Win+Shift+Key` convention, with
    /// the key's first letter capitalized.
    pub fn format(&self) -> String {
        let mut parts = vec![];
        if self.modifiers.control {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.platform {
            parts.push("Win");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        let key = match self.key.chars().next() {
            Some(first_c) => format!(
                "{}{}",
                first_c.to_uppercase(),
                &self.key[first_c.len_utf8()..]
            ),
            None => self.key.clone(),
        };

        parts.push(&key);
        parts.join("+")
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
