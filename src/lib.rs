//! Marionette — synthetic keyboard and mouse input for Windows automation.
//!
//! Translates high-level actions (type a string, click a point, drag through
//! a path) into low-level synthetic events delivered through the OS
//! input-injection facility, as if generated by physical hardware.
//!
//! ```ignore
//! // Windows:
//! use marionette::{Keyboard, Mouse, MouseButton, vk};
//!
//! let mut mouse = Mouse::new();
//! let mut keyboard = Keyboard::new();
//!
//! mouse.click_at((640, 360));
//! keyboard.string_input("hello");
//! keyboard.key_typing(vk::RETURN);
//! mouse.drag(MouseButton::Left, (100, 100), (400, 300));
//! ```
//!
//! ## Silent degradation
//! The surfaces deliberately do not report failure: an injection the OS
//! rejects (locked desktop, missing privilege) is logged and dropped, and a
//! failed cursor query reads as the origin. Automation callers that need to
//! detect these conditions use [`desktop::inject_checked`] or drive the
//! [`Desktop`] trait directly.
//!
//! ## Scope
//! No window-focus management, no verification that a click landed, no
//! cross-platform injection. The event model and surfaces build on any
//! platform (useful for testing against a custom [`Desktop`]); only
//! [`backends::windows`] talks to a real input stream.

pub mod backends;
pub mod desktop;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod mouse;
pub mod point;
pub mod vk;

pub use desktop::{inject_checked, Desktop};
pub use error::{InputError, InputResult};
pub use event::{HardwareEvent, InputEvent, KeyboardEvent, MouseEvent};
pub use keyboard::{is_extended_key, is_extended_scan, Keyboard, KeyboardConfig};
pub use mouse::{Mouse, MouseButton, MouseConfig, OffsetBound};
pub use point::Point;
