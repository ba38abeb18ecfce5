//! Synthetic input events.
//!
//! [`InputEvent`] is the primary in-memory representation used throughout the
//! crate: a tagged enum with exactly one populated arm per event. The
//! overlapping-union layout the OS expects is reconstructed from this form at
//! the injection boundary only (see the Windows backend), so nothing outside
//! that boundary deals with untagged memory.
//!
//! ## Flag conventions
//! The `flags` fields carry the raw Win32 bit values. They are defined here
//! as local constants rather than re-exported from `windows-sys` so the event
//! model stays platform-independent and the exact bit-for-bit values are
//! pinned in one place.

/// One synthetic input event, ready for injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Keyboard(KeyboardEvent),
    Hardware(HardwareEvent),
}

/// Pointer event payload.
///
/// `dx`/`dy` are either a relative displacement or, when
/// [`MOUSEEVENTF_ABSOLUTE`] is set, normalized absolute coordinates in the
/// `0..=65535` range. `data` carries the wheel delta for wheel events and is
/// zero otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub dx: i32,
    pub dy: i32,
    pub data: u32,
    pub flags: u32,
    /// Event timestamp in ms; zero lets the OS stamp the current time.
    pub time: u32,
    /// Extra application-defined tag. Unused, kept zero.
    pub extra: usize,
}

impl MouseEvent {
    /// Button or wheel event with no coordinate change.
    pub const fn with_flags(flags: u32) -> Self {
        MouseEvent {
            dx: 0,
            dy: 0,
            data: 0,
            flags,
            time: 0,
            extra: 0,
        }
    }

    /// Absolute move to normalized coordinates.
    pub const fn absolute_move(dx: i32, dy: i32) -> Self {
        MouseEvent {
            dx,
            dy,
            data: 0,
            flags: MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE,
            time: 0,
            extra: 0,
        }
    }

    /// Vertical wheel rotation; `delta` is in raw wheel units (±120 per notch).
    pub const fn wheel(delta: i32) -> Self {
        MouseEvent {
            dx: 0,
            dy: 0,
            data: delta as u32,
            flags: MOUSEEVENTF_WHEEL,
            time: 0,
            extra: 0,
        }
    }
}

/// Keyboard event payload.
///
/// `vk` and `scan` are mutually exclusive depending on `flags`: a plain
/// virtual-key event identifies the key by `vk`, while a
/// [`KEYEVENTF_UNICODE`] event carries a UTF-16 code unit in `scan` with `vk`
/// zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub vk: u16,
    pub scan: u16,
    pub flags: u32,
    pub time: u32,
    pub extra: usize,
}

impl KeyboardEvent {
    /// Event identified by virtual-key code.
    pub const fn virtual_key(vk: u16, flags: u32) -> Self {
        KeyboardEvent {
            vk,
            scan: 0,
            flags,
            time: 0,
            extra: 0,
        }
    }

    /// Unicode character event; `scan` is a UTF-16 code unit.
    pub const fn unicode(scan: u16, flags: u32) -> Self {
        KeyboardEvent {
            vk: 0,
            scan,
            flags: flags | KEYEVENTF_UNICODE,
            time: 0,
            extra: 0,
        }
    }
}

/// Hardware event payload (legacy; carried for ABI completeness, never
/// produced by the surfaces).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HardwareEvent {
    pub msg: u32,
    pub param_l: u16,
    pub param_h: u16,
}

// Mouse event flags (MOUSEEVENTF_*).

/// Movement occurred.
pub const MOUSEEVENTF_MOVE: u32 = 0x0001;
/// The left button was pressed.
pub const MOUSEEVENTF_LEFTDOWN: u32 = 0x0002;
/// The left button was released.
pub const MOUSEEVENTF_LEFTUP: u32 = 0x0004;
/// The right button was pressed.
pub const MOUSEEVENTF_RIGHTDOWN: u32 = 0x0008;
/// The right button was released.
pub const MOUSEEVENTF_RIGHTUP: u32 = 0x0010;
/// The middle button was pressed.
pub const MOUSEEVENTF_MIDDLEDOWN: u32 = 0x0020;
/// The middle button was released.
pub const MOUSEEVENTF_MIDDLEUP: u32 = 0x0040;
/// An X button was pressed; `data` selects XBUTTON1/XBUTTON2.
pub const MOUSEEVENTF_XDOWN: u32 = 0x0080;
/// An X button was released; `data` selects XBUTTON1/XBUTTON2.
pub const MOUSEEVENTF_XUP: u32 = 0x0100;
/// The wheel was rotated; `data` is the signed delta.
pub const MOUSEEVENTF_WHEEL: u32 = 0x0800;
/// The wheel was tilted horizontally; `data` is the signed delta.
pub const MOUSEEVENTF_HWHEEL: u32 = 0x1000;
/// WM_MOUSEMOVE messages will not be coalesced.
pub const MOUSEEVENTF_MOVE_NOCOALESCE: u32 = 0x2000;
/// Map coordinates to the whole virtual desktop; requires ABSOLUTE.
pub const MOUSEEVENTF_VIRTUALDESK: u32 = 0x4000;
/// `dx`/`dy` are normalized absolute coordinates, not relative deltas.
pub const MOUSEEVENTF_ABSOLUTE: u32 = 0x8000;

// Keyboard event flags (KEYEVENTF_*).

/// The scan code is prefixed by 0xE0 (physically distinct extended key).
pub const KEYEVENTF_EXTENDEDKEY: u32 = 0x0001;
/// The key is being released; absent means pressed.
pub const KEYEVENTF_KEYUP: u32 = 0x0002;
/// Synthesize a VK_PACKET keystroke carrying the UTF-16 unit in `scan`.
pub const KEYEVENTF_UNICODE: u32 = 0x0004;
/// `scan` identifies the key and `vk` is ignored.
pub const KEYEVENTF_SCANCODE: u32 = 0x0008;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_constructor_forces_packet_flag() {
        let ev = KeyboardEvent::unicode(0x0041, KEYEVENTF_KEYUP);
        assert_eq!(ev.vk, 0);
        assert_eq!(ev.scan, 0x0041);
        assert_eq!(ev.flags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
    }

    #[test]
    fn wheel_delta_survives_sign_cast() {
        let ev = MouseEvent::wheel(-120);
        assert_eq!(ev.data as i32, -120);
        assert_eq!(ev.flags, MOUSEEVENTF_WHEEL);
    }

    #[test]
    fn absolute_move_sets_both_flags() {
        let ev = MouseEvent::absolute_move(100, 200);
        assert_eq!(ev.flags, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE);
        assert_eq!((ev.dx, ev.dy), (100, 200));
        assert_eq!(ev.data, 0);
    }
}
