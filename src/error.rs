//! Error taxonomy for the OS seam.
//!
//! The public keyboard/mouse surfaces deliberately swallow these conditions
//! and keep going (see the crate docs on silent degradation); the typed
//! variants exist for callers that drive the [`Desktop`](crate::Desktop)
//! trait directly and want to distinguish a locked desktop or a missing
//! injection privilege from success.

use thiserror::Error;

/// Errors that can occur at the OS input boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The OS accepted zero of the requested events. Typical causes are a
    /// locked desktop, UIPI blocking injection into a higher-integrity
    /// process, or a missing UI Access privilege.
    #[error("the OS rejected the synthetic input event")]
    Rejected,

    /// The cursor-position query failed.
    #[error("cursor position query failed")]
    CursorQuery,

    /// The primary-display metrics query reported no usable dimensions.
    #[error("screen metrics query failed")]
    ScreenMetrics,
}

pub type InputResult<T> = Result<T, InputError>;
