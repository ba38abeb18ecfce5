//! The OS seam both action surfaces depend on.
//!
//! [`Desktop`] abstracts the three OS facilities this crate touches: the
//! input-injection entry point, the cursor-position query, and the
//! primary-display metrics query. The Windows implementation is
//! [`SystemDesktop`](crate::backends::windows::SystemDesktop); tests drive
//! the surfaces through in-memory implementations instead of the real input
//! stream.

use crate::error::{InputError, InputResult};
use crate::event::InputEvent;
use crate::point::Point;

/// Access to the OS input facilities.
pub trait Desktop {
    /// Submit one synthetic event to the OS input stream.
    ///
    /// Returns the number of events the OS accepted (0 or 1). Zero is a
    /// non-fatal condition; implementations must not retry or panic. No
    /// validation is performed beyond what the OS itself does — malformed
    /// flag combinations pass through and the OS behavior governs the
    /// outcome.
    fn inject(&mut self, event: &InputEvent) -> u32;

    /// Current cursor position in pixels.
    fn cursor_position(&self) -> InputResult<Point>;

    /// Primary-display width and height in pixels.
    ///
    /// Queried fresh on every call — never cached — so absolute-coordinate
    /// normalization tracks live display reconfiguration. `Ok` implies both
    /// dimensions are positive.
    fn screen_size(&self) -> InputResult<(i32, i32)>;
}

/// Inject one event, turning a zero-accept into [`InputError::Rejected`].
///
/// The surfaces ignore rejection by design; this helper is for callers that
/// need to observe it.
pub fn inject_checked<D: Desktop>(desktop: &mut D, event: &InputEvent) -> InputResult<()> {
    if desktop.inject(event) == 0 {
        Err(InputError::Rejected)
    } else {
        Ok(())
    }
}
