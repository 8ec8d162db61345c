//! Umbrella crate bundling the headless UI component libraries under one
//! dependency.

pub use headless_color as color;
pub use headless_keymap as keymap;
pub use headless_progress as progress;
