//! Virtual-key codes.
//!
//! A subset of the Win32 `VK_*` table covering the keys automation scripts
//! reach for most: modifiers, the navigation cluster, editing keys, locks,
//! the numeric keypad, and function keys.
//!
//! Letters and digits have no named constants; their virtual-key code equals
//! the ASCII value of the uppercase character, so `b'A' as u16` and
//! `b'7' as u16` are the idiomatic spellings.

pub const CANCEL: u16 = 0x03;
pub const BACK: u16 = 0x08;
pub const TAB: u16 = 0x09;
pub const RETURN: u16 = 0x0D;
pub const SHIFT: u16 = 0x10;
pub const CONTROL: u16 = 0x11;
/// ALT.
pub const MENU: u16 = 0x12;
pub const PAUSE: u16 = 0x13;
/// CAPS LOCK.
pub const CAPITAL: u16 = 0x14;
pub const ESCAPE: u16 = 0x1B;
pub const SPACE: u16 = 0x20;
/// PAGE UP.
pub const PRIOR: u16 = 0x21;
/// PAGE DOWN.
pub const NEXT: u16 = 0x22;
pub const END: u16 = 0x23;
pub const HOME: u16 = 0x24;
pub const LEFT: u16 = 0x25;
pub const UP: u16 = 0x26;
pub const RIGHT: u16 = 0x27;
pub const DOWN: u16 = 0x28;
/// PRINT SCREEN.
pub const SNAPSHOT: u16 = 0x2C;
pub const INSERT: u16 = 0x2D;
pub const DELETE: u16 = 0x2E;
pub const LWIN: u16 = 0x5B;
pub const RWIN: u16 = 0x5C;
pub const NUMPAD0: u16 = 0x60;
pub const NUMPAD1: u16 = 0x61;
pub const NUMPAD2: u16 = 0x62;
pub const NUMPAD3: u16 = 0x63;
pub const NUMPAD4: u16 = 0x64;
pub const NUMPAD5: u16 = 0x65;
pub const NUMPAD6: u16 = 0x66;
pub const NUMPAD7: u16 = 0x67;
pub const NUMPAD8: u16 = 0x68;
pub const NUMPAD9: u16 = 0x69;
pub const MULTIPLY: u16 = 0x6A;
pub const ADD: u16 = 0x6B;
pub const SEPARATOR: u16 = 0x6C;
pub const SUBTRACT: u16 = 0x6D;
pub const DECIMAL: u16 = 0x6E;
/// Numeric-keypad divide.
pub const DIVIDE: u16 = 0x6F;
pub const F1: u16 = 0x70;
pub const F2: u16 = 0x71;
pub const F3: u16 = 0x72;
pub const F4: u16 = 0x73;
pub const F5: u16 = 0x74;
pub const F6: u16 = 0x75;
pub const F7: u16 = 0x76;
pub const F8: u16 = 0x77;
pub const F9: u16 = 0x78;
pub const F10: u16 = 0x79;
pub const F11: u16 = 0x7A;
pub const F12: u16 = 0x7B;
pub const NUMLOCK: u16 = 0x90;
/// SCROLL LOCK.
pub const SCROLL: u16 = 0x91;
pub const LSHIFT: u16 = 0xA0;
pub const RSHIFT: u16 = 0xA1;
pub const LCONTROL: u16 = 0xA2;
pub const RCONTROL: u16 = 0xA3;
/// Left ALT.
pub const LMENU: u16 = 0xA4;
/// Right ALT.
pub const RMENU: u16 = 0xA5;
