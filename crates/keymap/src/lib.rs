//! Headless keyboard-shortcut handling.
//!
//! A [`KeyDispatcher`] routes keyboard events to listeners registered
//! against key names. Listeners are held by RAII [`Subscription`] guards:
//! dropping the guard detaches the listener, so teardown is guaranteed on
//! scope exit without any framework lifecycle hooks. [`Keystroke`] covers
//! parsing and display of key combinations like `ctrl-shift-a`.

mod keystroke;

pub use keystroke::{Keystroke, Modifiers};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use tracing::trace;

/// Which keyboard transition a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    KeyDown,
    /// The default: shortcuts fire on release.
    #[default]
    KeyUp,
}

/// A single keyboard event fed into [`KeyDispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key name, e.g. `"a"`, `"Enter"`, `"Escape"`.
    pub key: String,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub fn key_up(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: KeyEventKind::KeyUp,
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: KeyEventKind::KeyDown,
        }
    }
}

type Keys = SmallVec<[String; 2]>;
type KeyCallback = Rc<RefCell<dyn FnMut(&KeyEvent, &[String])>>;

struct Listener {
    kind: KeyEventKind,
    keys: Keys,
    callback: KeyCallback,
}

#[derive(Default)]
struct Registry {
    next_id: usize,
    listeners: BTreeMap<usize, Listener>,
}

/// Routes keyboard events to registered listeners.
///
/// Single-threaded by design: events are dispatched synchronously on the
/// calling thread, and listeners may register or remove other listeners
/// from inside a callback. Clones share the same registry.
#[derive(Default, Clone)]
pub struct KeyDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run whenever a dispatched event of `kind`
    /// carries one of `keys` (exact match on the key name).
    ///
    /// The callback receives the event and the registered key list. The
    /// returned [`Subscription`] deregisters the listener when dropped.
    pub fn on_key<I, K, F>(&self, keys: I, kind: KeyEventKind, callback: F) -> Subscription
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
        F: FnMut(&KeyEvent, &[String]) + 'static,
    {
        let keys: Keys = keys.into_iter().map(Into::into).collect();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(
            id,
            Listener {
                kind,
                keys,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Convenience for the common single-key, key-up shortcut.
    pub fn on_key_up<F>(&self, key: impl Into<String>, callback: F) -> Subscription
    where
        F: FnMut(&KeyEvent, &[String]) + 'static,
    {
        self.on_key([key.into()], KeyEventKind::KeyUp, callback)
    }

    /// Synchronously invoke every listener matching `event`.
    pub fn dispatch(&self, event: &KeyEvent) {
        // Snapshot the matches first so callbacks are free to mutate the
        // registry while the borrow is released.
        let matches: Vec<(KeyCallback, Keys)> = self
            .registry
            .borrow()
            .listeners
            .values()
            .filter(|l| l.kind == event.kind && l.keys.iter().any(|k| k == &event.key))
            .map(|l| (l.callback.clone(), l.keys.clone()))
            .collect();

        trace!(key = %event.key, matched = matches.len(), "dispatch key event");
        for (callback, keys) in matches {
            (*callback.borrow_mut())(event, &keys);
        }
    }
}

/// Keeps a listener registered; dropping it detaches the listener.
#[must_use = "dropping a Subscription immediately detaches the listener"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: usize,
}

impl Subscription {
    /// Leave the listener attached for the dispatcher's lifetime.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}
