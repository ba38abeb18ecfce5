//! Keyboard action surface.
//!
//! Translates key-level and character-level actions into injected keyboard
//! events. Two injection modes exist, with two different extended-key
//! classifiers:
//!
//! - **Virtual-key mode** ([`key_down`](Keyboard::key_down) /
//!   [`key_up`](Keyboard::key_up) / [`key_typing`](Keyboard::key_typing)):
//!   the event names a key by `VK_*` code. [`is_extended_key`] decides
//!   whether [`KEYEVENTF_EXTENDEDKEY`] accompanies it, which the OS needs to
//!   disambiguate physically distinct keys sharing a base code (right ALT vs.
//!   left ALT, numpad ENTER vs. main ENTER, and so on).
//! - **Unicode mode** ([`character_input`](Keyboard::character_input) /
//!   [`string_input`](Keyboard::string_input)): the event carries a UTF-16
//!   code unit in the scan field with [`KEYEVENTF_UNICODE`], independent of
//!   keyboard layout. Here extendedness is a property of the scan value
//!   itself: [`is_extended_scan`] checks for the `0xE0` prefix byte.
//!
//! ## Failure policy
//! All operations return `()`. A rejected injection (locked desktop, missing
//! privilege) is logged at `warn` and otherwise ignored; use
//! [`inject_checked`](crate::desktop::inject_checked) against the underlying
//! [`Desktop`] when you need to observe it.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::desktop::Desktop;
use crate::event::{InputEvent, KeyboardEvent, KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP};
use crate::vk;

/// Per-instance keyboard settings. Mutable at any time; affects only
/// subsequent calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Delay in milliseconds after every injected keyboard event.
    pub action_delay_ms: u64,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        KeyboardConfig { action_delay_ms: 0 }
    }
}

/// Keyboard action surface over a [`Desktop`].
pub struct Keyboard<D: Desktop> {
    desktop: D,
    pub config: KeyboardConfig,
}

#[cfg(target_os = "windows")]
impl Keyboard<crate::backends::windows::SystemDesktop> {
    /// Keyboard surface over the live OS input stream.
    pub fn new() -> Self {
        Keyboard::with_desktop(crate::backends::windows::SystemDesktop)
    }
}

#[cfg(target_os = "windows")]
impl Default for Keyboard<crate::backends::windows::SystemDesktop> {
    fn default() -> Self {
        Keyboard::new()
    }
}

impl<D: Desktop> Keyboard<D> {
    /// Keyboard surface over an arbitrary [`Desktop`] implementation.
    pub fn with_desktop(desktop: D) -> Self {
        Keyboard {
            desktop,
            config: KeyboardConfig::default(),
        }
    }

    /// The underlying OS seam, for checked injection or inspection.
    pub fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }

    /// Presses a key identified by virtual-key code.
    pub fn key_down(&mut self, key: u16) {
        let flags = if is_extended_key(key) {
            KEYEVENTF_EXTENDEDKEY
        } else {
            0
        };
        self.send(KeyboardEvent::virtual_key(key, flags));
    }

    /// Releases a key identified by virtual-key code.
    pub fn key_up(&mut self, key: u16) {
        let flags = if is_extended_key(key) {
            KEYEVENTF_KEYUP | KEYEVENTF_EXTENDEDKEY
        } else {
            KEYEVENTF_KEYUP
        };
        self.send(KeyboardEvent::virtual_key(key, flags));
    }

    /// Types a key: press immediately followed by release, as two injected
    /// events (with one configured delay after each).
    pub fn key_typing(&mut self, key: u16) {
        self.key_down(key);
        self.key_up(key);
    }

    /// Types a single Unicode character, pressed then released.
    ///
    /// The character is injected by value via the scan field, independent of
    /// the active keyboard layout. Characters outside the Basic Multilingual
    /// Plane are sent as their surrogate pair, one press/release per UTF-16
    /// unit.
    pub fn character_input(&mut self, character: char) {
        let mut units = [0u16; 2];
        for &unit in character.encode_utf16(&mut units).iter() {
            self.character_down(unit);
            self.character_up(unit);
        }
    }

    /// Types a text, one [`character_input`](Self::character_input) per
    /// character in order.
    pub fn string_input(&mut self, text: &str) {
        for character in text.chars() {
            self.character_input(character);
        }
    }

    fn character_down(&mut self, unit: u16) {
        let flags = if is_extended_scan(unit) {
            KEYEVENTF_EXTENDEDKEY
        } else {
            0
        };
        self.send(KeyboardEvent::unicode(unit, flags));
    }

    fn character_up(&mut self, unit: u16) {
        let flags = if is_extended_scan(unit) {
            KEYEVENTF_KEYUP | KEYEVENTF_EXTENDEDKEY
        } else {
            KEYEVENTF_KEYUP
        };
        self.send(KeyboardEvent::unicode(unit, flags));
    }

    fn send(&mut self, event: KeyboardEvent) {
        let event = InputEvent::Keyboard(event);
        trace!(?event, "injecting keyboard event");
        if self.desktop.inject(&event) == 0 {
            warn!(?event, "keyboard event rejected by the OS");
        }
        if self.config.action_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.action_delay_ms));
        }
    }
}

/// Whether a virtual-key code identifies an extended key.
///
/// Extended keys are the ALT and CTRL keys on the right-hand side of the
/// keyboard; INS, DEL, HOME, END, PAGE UP, PAGE DOWN and the arrow keys in
/// the clusters to the left of the numeric keypad; NUM LOCK; BREAK
/// (CTRL+PAUSE); PRINT SCRN; and the numeric-keypad divide key. Pure function
/// of the code.
pub fn is_extended_key(key: u16) -> bool {
    matches!(
        key,
        vk::MENU
            | vk::LMENU
            | vk::RMENU
            | vk::CONTROL
            | vk::RCONTROL
            | vk::INSERT
            | vk::DELETE
            | vk::HOME
            | vk::END
            | vk::PRIOR
            | vk::NEXT
            | vk::RIGHT
            | vk::UP
            | vk::LEFT
            | vk::DOWN
            | vk::NUMLOCK
            | vk::CANCEL
            | vk::SNAPSHOT
            | vk::DIVIDE
    )
}

/// Whether a UTF-16 scan value carries the extended-key prefix.
///
/// Distinct from [`is_extended_key`]: here extendedness depends on the high
/// byte of the scan value matching the `0xE0` prefix pattern, not on a key
/// enumeration.
pub fn is_extended_scan(scan: u16) -> bool {
    (scan & 0xFF00) == 0xE000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, InputResult};
    use crate::event::KEYEVENTF_UNICODE;
    use crate::point::Point;

    #[derive(Default)]
    struct Recorder {
        events: Vec<KeyboardEvent>,
    }

    impl Desktop for Recorder {
        fn inject(&mut self, event: &InputEvent) -> u32 {
            match event {
                InputEvent::Keyboard(k) => {
                    self.events.push(*k);
                    1
                }
                _ => 0,
            }
        }
        fn cursor_position(&self) -> InputResult<Point> {
            Err(InputError::CursorQuery)
        }
        fn screen_size(&self) -> InputResult<(i32, i32)> {
            Ok((1920, 1080))
        }
    }

    fn keyboard() -> Keyboard<Recorder> {
        Keyboard::with_desktop(Recorder::default())
    }

    #[test]
    fn extended_vk_classifier_matches_enumeration() {
        for key in [
            vk::MENU,
            vk::LMENU,
            vk::RMENU,
            vk::CONTROL,
            vk::RCONTROL,
            vk::INSERT,
            vk::DELETE,
            vk::HOME,
            vk::END,
            vk::PRIOR,
            vk::NEXT,
            vk::RIGHT,
            vk::UP,
            vk::LEFT,
            vk::DOWN,
            vk::NUMLOCK,
            vk::CANCEL,
            vk::SNAPSHOT,
            vk::DIVIDE,
        ] {
            assert!(is_extended_key(key), "vk {key:#04x} should be extended");
        }
        // Left-hand modifiers and ordinary keys are not extended.
        for key in [vk::LCONTROL, vk::SHIFT, vk::RETURN, vk::SPACE, b'A' as u16] {
            assert!(!is_extended_key(key), "vk {key:#04x} should not be extended");
        }
    }

    #[test]
    fn extended_scan_classifier_checks_prefix_byte() {
        assert!(is_extended_scan(0xE01C));
        assert!(is_extended_scan(0xE000));
        assert!(!is_extended_scan(0xE100));
        assert!(!is_extended_scan(0x001C));
        assert!(!is_extended_scan(b'A' as u16));
    }

    #[test]
    fn key_typing_injects_matched_press_release() {
        let mut kb = keyboard();
        kb.key_typing(vk::RMENU);
        let evs = &kb.desktop_mut().events;
        assert_eq!(evs.len(), 2);
        assert_eq!(evs[0].vk, vk::RMENU);
        assert_eq!(evs[0].flags, KEYEVENTF_EXTENDEDKEY);
        assert_eq!(evs[1].vk, vk::RMENU);
        assert_eq!(evs[1].flags, KEYEVENTF_KEYUP | KEYEVENTF_EXTENDEDKEY);
    }

    #[test]
    fn plain_key_down_carries_no_unicode_flag() {
        let mut kb = keyboard();
        kb.key_down(b'A' as u16);
        let ev = kb.desktop_mut().events[0];
        assert_eq!(ev.vk, b'A' as u16);
        assert_eq!(ev.scan, 0);
        assert_eq!(ev.flags, 0);
    }

    #[test]
    fn string_input_is_unicode_scan_events() {
        let mut kb = keyboard();
        kb.string_input("AB");
        let evs = &kb.desktop_mut().events;
        assert_eq!(evs.len(), 4);
        // down-A, up-A, down-B, up-B; every event uses the scan field, vk zero.
        assert_eq!(evs[0].scan, b'A' as u16);
        assert_eq!(evs[0].flags, KEYEVENTF_UNICODE);
        assert_eq!(evs[1].scan, b'A' as u16);
        assert_eq!(evs[1].flags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
        assert_eq!(evs[2].scan, b'B' as u16);
        assert_eq!(evs[2].flags, KEYEVENTF_UNICODE);
        assert_eq!(evs[3].scan, b'B' as u16);
        assert_eq!(evs[3].flags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
        assert!(evs.iter().all(|e| e.vk == 0));
    }

    #[test]
    fn astral_character_becomes_surrogate_pair() {
        let mut kb = keyboard();
        kb.character_input('🦀');
        let evs = &kb.desktop_mut().events;
        // Two UTF-16 units, each pressed and released.
        assert_eq!(evs.len(), 4);
        let mut units = [0u16; 2];
        '🦀'.encode_utf16(&mut units);
        assert_eq!(evs[0].scan, units[0]);
        assert_eq!(evs[2].scan, units[1]);
    }
}
