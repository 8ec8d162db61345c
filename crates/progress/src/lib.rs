//! Headless progress-bar logic.
//!
//! Maps pointer movement onto a clamped, stepped numeric value. A
//! [`DragMap`] owns one ephemeral session per bar id, so several
//! independent draggable bars can share a single controller; the change
//! callback fires only when the stepped value actually moves.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Numeric range and step size for a bar.
///
/// Callers supply `min <= max` and a positive `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl ProgressOptions {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

/// Horizontal extent of the bar element, for the click-to-value variant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// One active drag: created on pointer-down, updated on pointer-move,
/// discarded on pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragData {
    pub options: ProgressOptions,
    pub initial_value: f64,
    pub value: f64,
    pub start_x: f64,
    pub width: f64,
}

/// Reference width used when the element's width is unknown.
const FALLBACK_WIDTH: f64 = 100.0;

/// Digits of precision kept after snapping, to absorb floating-point
/// drift from the fractional displacement math.
const PRECISION: f64 = 100_000.0;

/// Compute the stepped value for a pointer position.
///
/// The displacement from `start_x` is taken as a fraction of `width`
/// (falling back to 100 when the width is unknown or degenerate), scaled
/// onto the range, and clamped. Snapping rounds at the midpoint of the
/// step interval containing the clamped value: once the value passes
/// `step_below + step/2` it snaps up to the next step.
pub fn stepped_value(
    options: &ProgressOptions,
    initial_value: f64,
    width: f64,
    client_x: f64,
    start_x: f64,
) -> f64 {
    let width = if width.is_finite() && width > 0.0 {
        width
    } else {
        FALLBACK_WIDTH
    };
    let diff = (client_x - start_x) / width;
    let raw = initial_value + (options.max - options.min) * diff;
    let clamped = raw.clamp(options.min, options.max);

    let step_below = (clamped / options.step).floor() * options.step;
    let midpoint = step_below + options.step / 2.0;
    let snapped = if clamped < midpoint {
        step_below
    } else {
        step_below + options.step
    };

    (snapped * PRECISION).round() / PRECISION
}

/// Owns the active drag sessions and the change callback.
///
/// Sessions are keyed by a caller-supplied bar id so multiple independent
/// bars can share one map; at most one session is active per id, and
/// starting a new drag on an id replaces any session already there.
pub struct DragMap {
    sessions: HashMap<String, DragData>,
    on_change: Box<dyn FnMut(f64, &str)>,
}

impl fmt::Debug for DragMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragMap")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

impl DragMap {
    /// Create a map with a change callback receiving `(value, id)`.
    pub fn new(on_change: impl FnMut(f64, &str) + 'static) -> Self {
        Self {
            sessions: HashMap::new(),
            on_change: Box::new(on_change),
        }
    }

    /// Begin a drag at `client_x`, replacing any session active for `id`.
    ///
    /// `width` is the element width at drag start; `None` falls back to
    /// the default reference width.
    pub fn start_drag(
        &mut self,
        id: &str,
        options: ProgressOptions,
        initial_value: f64,
        client_x: f64,
        width: Option<f64>,
    ) -> DragData {
        let width = width.unwrap_or(FALLBACK_WIDTH);
        debug!(id, initial_value, width, "start drag");
        let data = DragData {
            options,
            initial_value,
            value: initial_value,
            start_x: client_x,
            width,
        };
        self.sessions.insert(id.to_string(), data.clone());
        data
    }

    /// Click-to-value variant: derives the pointer's start coordinate
    /// from the bar bounds and the current value, computes the stepped
    /// value directly from the click position, and immediately starts a
    /// session at that value.
    ///
    /// Emits a change notification unconditionally and returns the new
    /// value, or `None` when the bounds are degenerate.
    pub fn click_bar(
        &mut self,
        id: &str,
        options: ProgressOptions,
        initial_value: f64,
        client_x: f64,
        bounds: Bounds,
    ) -> Option<f64> {
        if !(bounds.width > 0.0) {
            return None;
        }
        let range = options.max - options.min;
        let initial_percent = if range > 0.0 {
            (initial_value - options.min) / range
        } else {
            0.0
        };
        let start_x = bounds.left + bounds.width * initial_percent;
        let value = stepped_value(&options, initial_value, bounds.width, client_x, start_x);

        self.start_drag(id, options, value, client_x, Some(bounds.width));
        (self.on_change)(value, id);
        Some(value)
    }

    /// Recompute the stepped value for the active session on `id`.
    ///
    /// The change callback fires only when the stepped value differs from
    /// the session's recorded value, so sub-step pointer jitter stays
    /// silent. Unknown ids are ignored.
    pub fn drag(&mut self, id: &str, client_x: f64) {
        let Some(data) = self.sessions.get_mut(id) else {
            return;
        };
        let value = stepped_value(
            &data.options,
            data.initial_value,
            data.width,
            client_x,
            data.start_x,
        );
        trace!(id, client_x, value, "drag move");
        if value != data.value {
            data.value = value;
            (self.on_change)(value, id);
        }
    }

    /// End the drag for `id`, discarding the session.
    pub fn stop_drag(&mut self, id: &str) {
        if self.sessions.remove(id).is_some() {
            debug!(id, "stop drag");
        }
    }

    /// The active session for `id`, if any.
    pub fn drag_data(&self, id: &str) -> Option<&DragData> {
        self.sessions.get(id)
    }
}
