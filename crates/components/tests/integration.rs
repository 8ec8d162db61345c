//! Cross-crate smoke test: a color-picker alpha slider wired the way a
//! component would use these pieces together.

use std::cell::RefCell;
use std::rc::Rc;

use headless_components::color::{to_css_value, ColorValue, PickerColor, Rgba};
use headless_components::keymap::{KeyDispatcher, KeyEvent};
use headless_components::progress::{Bounds, DragMap, ProgressOptions};

#[test]
fn alpha_slider_drives_the_rendered_color() {
    let picked = ColorValue::parse("#3c82f6");
    assert_eq!(picked.rgba, Rgba::new(0x3c, 0x82, 0xf6));

    let alpha = Rc::new(RefCell::new(1.0_f64));
    let sink = alpha.clone();
    let mut sliders = DragMap::new(move |value, id| {
        assert_eq!(id, "alpha");
        *sink.borrow_mut() = value;
    });

    // Alpha runs 0..1 in hundredths; the bar is 200px wide at x=40.
    let opts = ProgressOptions::new(0.0, 1.0, 0.01);
    let bounds = Bounds {
        left: 40.0,
        width: 200.0,
    };

    // Click at 3/4 of the bar, then fine-tune by dragging.
    sliders.click_bar("alpha", opts, 1.0, 190.0, bounds);
    assert_eq!(*alpha.borrow(), 0.75);

    sliders.drag("alpha", 140.0);
    assert_eq!(*alpha.borrow(), 0.5);
    sliders.stop_drag("alpha");

    let selection = PickerColor::from_rgba(picked.rgba.with_alpha(*alpha.borrow() as f32));
    assert_eq!(
        to_css_value(Some(&selection), false).as_deref(),
        Some("rgba(60,130,246,0.5)")
    );
}

#[test]
fn escape_resets_the_selection() {
    let dispatcher = KeyDispatcher::new();
    let selection = Rc::new(RefCell::new(Some(PickerColor::from_theme_var("accent"))));

    let cleared = selection.clone();
    let sub = dispatcher.on_key_up("Escape", move |_, _| {
        cleared.borrow_mut().take();
    });

    dispatcher.dispatch(&KeyEvent::key_up("Escape"));
    assert!(selection.borrow().is_none());
    drop(sub);
}
