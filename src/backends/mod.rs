//! Platform backends.
//!
//! Implementations of [`Desktop`](crate::desktop::Desktop) over the real OS
//! input facilities. Only Windows is supported; the rest of the crate (event
//! model, classifiers, surfaces) builds everywhere so tests and downstream
//! tooling can run off-platform against a custom `Desktop`.

#[cfg(target_os = "windows")]
#[cfg_attr(docsrs, doc(cfg(target_os = "windows")))]
pub mod windows;
