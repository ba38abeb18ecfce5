#![cfg(target_os = "windows")]

//! Windows backend.
//!
//! [`SystemDesktop`] is the live implementation of
//! [`Desktop`](crate::desktop::Desktop): events are packed into the
//! `SendInput` union record at the call boundary, and position/metrics
//! queries go through `GetCursorPos` and `GetSystemMetrics`.

pub mod desktop;

pub use desktop::SystemDesktop;
