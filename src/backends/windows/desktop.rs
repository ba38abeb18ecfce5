#![cfg(target_os = "windows")]

//! `SendInput`-backed [`Desktop`] implementation.
//!
//! The tagged [`InputEvent`] is converted into the OS's `INPUT` record — a
//! 4-byte-aligned discriminant followed by a union of the mouse, keyboard and
//! hardware payloads — only here, immediately before the call. Using the
//! `windows-sys` struct definitions keeps the field sizes, order and
//! alignment bit-for-bit what the ABI expects.

use windows_sys::Win32::Foundation::POINT;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, HARDWAREINPUT, INPUT, INPUT_0, INPUT_HARDWARE, INPUT_KEYBOARD, INPUT_MOUSE,
    KEYBDINPUT, MOUSEINPUT,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::desktop::Desktop;
use crate::error::{InputError, InputResult};
use crate::event::InputEvent;
use crate::point::Point;

/// The live OS input stream.
///
/// Stateless; every instance drives the same process-wide input facilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDesktop;

impl Desktop for SystemDesktop {
    fn inject(&mut self, event: &InputEvent) -> u32 {
        let record = pack(event);
        // SendInput copies the record; the reference does not outlive the call.
        unsafe { SendInput(1, &record, core::mem::size_of::<INPUT>() as i32) }
    }

    fn cursor_position(&self) -> InputResult<Point> {
        let mut pt = POINT { x: 0, y: 0 };
        let ok = unsafe { GetCursorPos(&mut pt) };
        if ok == 0 {
            Err(InputError::CursorQuery)
        } else {
            Ok(Point::new(pt.x, pt.y))
        }
    }

    fn screen_size(&self) -> InputResult<(i32, i32)> {
        // GetSystemMetrics has no failure channel; zero means the query
        // itself failed for these metrics.
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if width <= 0 || height <= 0 {
            Err(InputError::ScreenMetrics)
        } else {
            Ok((width, height))
        }
    }
}

/// Build the union-typed ABI record from the tagged event.
fn pack(event: &InputEvent) -> INPUT {
    match *event {
        InputEvent::Mouse(m) => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: m.dx,
                    dy: m.dy,
                    mouseData: m.data as _,
                    dwFlags: m.flags as _,
                    time: m.time,
                    dwExtraInfo: m.extra,
                },
            },
        },
        InputEvent::Keyboard(k) => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: k.vk,
                    wScan: k.scan,
                    dwFlags: k.flags as _,
                    time: k.time,
                    dwExtraInfo: k.extra,
                },
            },
        },
        InputEvent::Hardware(h) => INPUT {
            r#type: INPUT_HARDWARE,
            Anonymous: INPUT_0 {
                hi: HARDWAREINPUT {
                    uMsg: h.msg,
                    wParamL: h.param_l,
                    wParamH: h.param_h,
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyboardEvent, MouseEvent, KEYEVENTF_KEYUP, MOUSEEVENTF_WHEEL};

    #[test]
    fn packed_discriminant_matches_populated_arm() {
        let m = pack(&InputEvent::Mouse(MouseEvent::wheel(120)));
        assert_eq!(m.r#type, INPUT_MOUSE);
        unsafe {
            assert_eq!(m.Anonymous.mi.mouseData as i32, 120);
            assert_eq!(m.Anonymous.mi.dwFlags as u32, MOUSEEVENTF_WHEEL);
        }

        let k = pack(&InputEvent::Keyboard(KeyboardEvent::virtual_key(
            0x0D,
            KEYEVENTF_KEYUP,
        )));
        assert_eq!(k.r#type, INPUT_KEYBOARD);
        unsafe {
            assert_eq!(k.Anonymous.ki.wVk, 0x0D);
            assert_eq!(k.Anonymous.ki.wScan, 0);
            assert_eq!(k.Anonymous.ki.dwFlags as u32, KEYEVENTF_KEYUP);
        }
    }
}
