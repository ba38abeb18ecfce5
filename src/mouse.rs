//! Mouse action surface.
//!
//! A small orthogonal set of primitives — [`position`](Mouse::position),
//! [`move_to`](Mouse::move_to), [`move_by`](Mouse::move_by),
//! [`press`](Mouse::press), [`release`](Mouse::release),
//! [`scroll`](Mouse::scroll) — plus convenience compositions (clicks, drags,
//! multi-point drags) and randomized-offset variants built strictly on top of
//! them. Any operation taking a target accepts `Point` or an `(x, y)` tuple.
//!
//! ## Absolute positioning
//! Absolute moves normalize pixel coordinates into the OS's `0..=65535`
//! range with `(coord + 1) * 65535 / screen_dimension` (truncated integer
//! division). Automation scripts depend on the exact cursor landing position
//! this formula produces, so it is pinned by tests and must not be "fixed".
//! The screen dimensions are queried fresh on every absolute move because the
//! display configuration can change between calls.
//!
//! ## Failure policy
//! Operations return `()`. A failed cursor query degrades silently to the
//! origin, which can make a subsequent relative move land wrong; a rejected
//! injection is logged at `warn` and dropped. Both policies are deliberate —
//! callers needing strict behavior drive the [`Desktop`] trait directly.

use std::thread;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::desktop::Desktop;
use crate::event::{
    InputEvent, MouseEvent, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN,
    MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP,
};
use crate::point::Point;

/// Wheel units per detent.
const WHEEL_DELTA: i32 = 120;

/// A pointer button the surface can press and release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn down_flag(self) -> u32 {
        match self {
            MouseButton::Left => MOUSEEVENTF_LEFTDOWN,
            MouseButton::Right => MOUSEEVENTF_RIGHTDOWN,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEDOWN,
        }
    }

    fn up_flag(self) -> u32 {
        match self {
            MouseButton::Left => MOUSEEVENTF_LEFTUP,
            MouseButton::Right => MOUSEEVENTF_RIGHTUP,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEUP,
        }
    }
}

/// Per-axis upper bound for random offset jitter.
///
/// Offsets drawn under a bound are non-negative and strictly below it; a bound
/// of zero (or less) disables jitter on that axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetBound {
    pub x: i32,
    pub y: i32,
}

impl OffsetBound {
    pub const fn new(x: i32, y: i32) -> Self {
        OffsetBound { x, y }
    }

    /// Same bound on both axes.
    pub const fn uniform(bound: i32) -> Self {
        OffsetBound { x: bound, y: bound }
    }
}

impl Default for OffsetBound {
    fn default() -> Self {
        OffsetBound::uniform(5)
    }
}

/// Per-instance mouse settings. Mutable at any time; affects only subsequent
/// calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MouseConfig {
    /// Delay in milliseconds after every injected mouse event. Compound
    /// operations accumulate one delay per constituent primitive.
    pub action_delay_ms: u64,
    /// Jitter bound used when an offset variant is called with `None`.
    pub offset_bound: OffsetBound,
}

/// Mouse action surface over a [`Desktop`].
pub struct Mouse<D: Desktop> {
    desktop: D,
    rng: ThreadRng,
    pub config: MouseConfig,
}

#[cfg(target_os = "windows")]
impl Mouse<crate::backends::windows::SystemDesktop> {
    /// Mouse surface over the live OS input stream.
    pub fn new() -> Self {
        Mouse::with_desktop(crate::backends::windows::SystemDesktop)
    }
}

#[cfg(target_os = "windows")]
impl Default for Mouse<crate::backends::windows::SystemDesktop> {
    fn default() -> Self {
        Mouse::new()
    }
}

impl<D: Desktop> Mouse<D> {
    /// Mouse surface over an arbitrary [`Desktop`] implementation.
    pub fn with_desktop(desktop: D) -> Self {
        Mouse {
            desktop,
            rng: rand::thread_rng(),
            config: MouseConfig::default(),
        }
    }

    /// The underlying OS seam, for checked injection or inspection.
    pub fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }

    /// Current cursor position; the origin if the query fails.
    pub fn position(&self) -> Point {
        self.desktop.cursor_position().unwrap_or(Point::ORIGIN)
    }

    /// Moves the cursor to an absolute pixel position.
    pub fn move_to(&mut self, target: impl Into<Point>) {
        let target = target.into();
        let (width, height) = match self.desktop.screen_size() {
            Ok(dims) => dims,
            Err(err) => {
                warn!(%err, "absolute move dropped");
                return;
            }
        };
        self.send(MouseEvent::absolute_move(
            normalize(target.x, width),
            normalize(target.y, height),
        ));
    }

    /// Moves the cursor through a chain of absolute positions in order.
    pub fn move_path(&mut self, points: &[Point]) {
        for &point in points {
            self.move_to(point);
        }
    }

    /// Moves the cursor by a relative displacement.
    ///
    /// Implemented as a position query followed by an absolute move, so a
    /// failed query (absorbed as the origin) shifts the landing point.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let here = self.position();
        self.move_to(here.offset(dx, dy));
    }

    /// Presses a button at the current cursor position.
    pub fn press(&mut self, button: MouseButton) {
        self.send(MouseEvent::with_flags(button.down_flag()));
    }

    /// Releases a button at the current cursor position.
    pub fn release(&mut self, button: MouseButton) {
        self.send(MouseEvent::with_flags(button.up_flag()));
    }

    /// Rotates the wheel by `ticks` detents (positive is away from the user).
    pub fn scroll(&mut self, ticks: i32) {
        self.send(MouseEvent::wheel(ticks * WHEEL_DELTA));
    }

    /// Left click: press then release, two events at the current position.
    pub fn click(&mut self) {
        self.press(MouseButton::Left);
        self.release(MouseButton::Left);
    }

    /// Moves to `target`, then left-clicks.
    pub fn click_at(&mut self, target: impl Into<Point>) {
        self.move_to(target);
        self.click();
    }

    /// Right click: press then release at the current position.
    pub fn right_click(&mut self) {
        self.press(MouseButton::Right);
        self.release(MouseButton::Right);
    }

    /// Moves to `target`, then right-clicks.
    pub fn right_click_at(&mut self, target: impl Into<Point>) {
        self.move_to(target);
        self.right_click();
    }

    /// Drags with `button` held from the current position to `target`:
    /// press, move, release.
    pub fn drag_to(&mut self, button: MouseButton, target: impl Into<Point>) {
        self.press(button);
        self.move_to(target);
        self.release(button);
    }

    /// Drags with `button` held from `from` to `to`: move, press, move,
    /// release.
    pub fn drag(&mut self, button: MouseButton, from: impl Into<Point>, to: impl Into<Point>) {
        self.move_to(from);
        self.drag_to(button, to);
    }

    /// Drags with `button` held through a chain of points: move to the first
    /// point, press, move through the remaining points in order, release.
    ///
    /// An empty slice is a no-op — no press or release occurs either.
    pub fn drag_path(&mut self, button: MouseButton, points: &[Point]) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first);
        self.press(button);
        for &point in rest {
            self.move_to(point);
        }
        self.release(button);
    }

    /// [`move_to`](Self::move_to) with independent random jitter added to
    /// each axis.
    ///
    /// The jitter is non-negative, strictly below the bound, and drawn fresh
    /// on every call from an unseeded generator. `None` uses the configured
    /// default bound.
    pub fn move_to_with_offset(&mut self, target: impl Into<Point>, bound: Option<OffsetBound>) {
        let target = self.jittered(target.into(), bound);
        self.move_to(target);
    }

    /// [`click_at`](Self::click_at) with random jitter on the target.
    pub fn click_with_offset(&mut self, target: impl Into<Point>, bound: Option<OffsetBound>) {
        self.move_to_with_offset(target, bound);
        self.click();
    }

    /// [`drag_to`](Self::drag_to) with random jitter on the target.
    pub fn drag_to_with_offset(
        &mut self,
        button: MouseButton,
        target: impl Into<Point>,
        bound: Option<OffsetBound>,
    ) {
        self.press(button);
        self.move_to_with_offset(target, bound);
        self.release(button);
    }

    /// [`drag`](Self::drag) with independent random jitter on both endpoints.
    pub fn drag_with_offset(
        &mut self,
        button: MouseButton,
        from: impl Into<Point>,
        to: impl Into<Point>,
        bound: Option<OffsetBound>,
    ) {
        self.move_to_with_offset(from, bound);
        self.drag_to_with_offset(button, to, bound);
    }

    fn jittered(&mut self, target: Point, bound: Option<OffsetBound>) -> Point {
        let bound = bound.unwrap_or(self.config.offset_bound);
        let dx = self.jitter(bound.x);
        let dy = self.jitter(bound.y);
        target.offset(dx, dy)
    }

    fn jitter(&mut self, bound: i32) -> i32 {
        if bound > 0 {
            self.rng.gen_range(0..bound)
        } else {
            0
        }
    }

    fn send(&mut self, event: MouseEvent) {
        let event = InputEvent::Mouse(event);
        trace!(?event, "injecting mouse event");
        if self.desktop.inject(&event) == 0 {
            warn!(?event, "mouse event rejected by the OS");
        }
        if self.config.action_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.action_delay_ms));
        }
    }
}

/// Pixel coordinate to the OS's normalized `0..=65535` absolute space.
///
/// The exact `(coord + 1) * 65535 / dimension` truncation is a compatibility
/// contract: scripts written against it depend on the precise landing pixel.
#[inline]
fn normalize(coord: i32, dimension: i32) -> i32 {
    if dimension > 0 {
        (coord + 1) * 65535 / dimension
    } else {
        coord
    }
}
