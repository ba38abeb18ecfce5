//! End-to-end surface behavior against an in-memory OS double.
//!
//! No test here touches the real input stream; the double records every
//! injected event and emulates the OS cursor the same way the compositor
//! would (normalized absolute coordinates back to pixels).

use marionette::event::{
    KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP,
};
use marionette::{
    inject_checked, vk, Desktop, InputError, InputEvent, InputResult, Keyboard, Mouse, MouseButton,
    Point,
};

/// In-memory stand-in for the OS input facilities.
struct FakeOs {
    screen: (i32, i32),
    cursor: Point,
    events: Vec<InputEvent>,
    /// When set, every injection is rejected (locked-desktop simulation).
    rejecting: bool,
}

impl FakeOs {
    fn new(width: i32, height: i32) -> Self {
        FakeOs {
            screen: (width, height),
            cursor: Point::ORIGIN,
            events: Vec::new(),
            rejecting: false,
        }
    }

    fn mouse_flags(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                InputEvent::Mouse(m) => Some(m.flags),
                _ => None,
            })
            .collect()
    }
}

impl Desktop for FakeOs {
    fn inject(&mut self, event: &InputEvent) -> u32 {
        if self.rejecting {
            return 0;
        }
        if let InputEvent::Mouse(m) = event {
            if m.flags & MOUSEEVENTF_ABSOLUTE != 0 {
                self.cursor = Point::new(
                    (m.dx as i64 * self.screen.0 as i64 / 65536) as i32,
                    (m.dy as i64 * self.screen.1 as i64 / 65536) as i32,
                );
            }
        }
        self.events.push(*event);
        1
    }

    fn cursor_position(&self) -> InputResult<Point> {
        Ok(self.cursor)
    }

    fn screen_size(&self) -> InputResult<(i32, i32)> {
        Ok(self.screen)
    }
}

#[test]
fn absolute_moves_round_trip_across_screen_sizes() {
    for (w, h) in [(1920, 1080), (2560, 1440), (1366, 768), (800, 600)] {
        let mut mouse = Mouse::with_desktop(FakeOs::new(w, h));
        for x in (0..w).step_by(97) {
            for y in (0..h).step_by(89) {
                mouse.move_to((x, y));
                let got = mouse.position();
                assert!(
                    (got.x - x).abs() <= 1 && (got.y - y).abs() <= 1,
                    "{w}x{h}: moved to ({x}, {y}), landed at {got}"
                );
            }
        }
    }
}

#[test]
fn right_drag_through_path_presses_once() {
    let mut mouse = Mouse::with_desktop(FakeOs::new(1920, 1080));
    let path = [
        Point::new(100, 100),
        Point::new(200, 150),
        Point::new(300, 220),
        Point::new(400, 300),
    ];
    mouse.drag_path(MouseButton::Right, &path);

    let flags = mouse.desktop_mut().mouse_flags();
    let abs_move = MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE;
    assert_eq!(
        flags,
        vec![
            abs_move,
            MOUSEEVENTF_RIGHTDOWN,
            abs_move,
            abs_move,
            abs_move,
            MOUSEEVENTF_RIGHTUP,
        ]
    );
}

#[test]
fn typing_and_clicking_interleave_in_order() {
    let desktop = FakeOs::new(1920, 1080);
    let mut mouse = Mouse::with_desktop(desktop);
    mouse.click_at((640, 360));

    // Hand the same recorded stream to a keyboard surface.
    let mut keyboard = Keyboard::with_desktop(std::mem::replace(
        mouse.desktop_mut(),
        FakeOs::new(1920, 1080),
    ));
    keyboard.string_input("Hi");
    keyboard.key_typing(vk::RETURN);

    let events = &keyboard.desktop_mut().events;
    // click: move + down + up, then 2 chars * 2 events, then return down/up.
    assert_eq!(events.len(), 9);

    let kbd: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            InputEvent::Keyboard(k) => Some(*k),
            _ => None,
        })
        .collect();
    assert_eq!(kbd.len(), 6);
    assert_eq!(kbd[0].scan, b'H' as u16);
    assert_eq!(kbd[0].flags, KEYEVENTF_UNICODE);
    assert_eq!(kbd[1].flags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
    assert_eq!(kbd[2].scan, b'i' as u16);
    assert_eq!(kbd[4].vk, vk::RETURN);
    assert_eq!(kbd[4].flags, 0);
    assert_eq!(kbd[5].flags, KEYEVENTF_KEYUP);
}

#[test]
fn rejected_injection_is_swallowed_by_surfaces() {
    let mut os = FakeOs::new(1920, 1080);
    os.rejecting = true;
    let mut mouse = Mouse::with_desktop(os);
    // Must neither panic nor retry.
    mouse.click_at((10, 10));
    assert!(mouse.desktop_mut().events.is_empty());

    let mut os = FakeOs::new(1920, 1080);
    os.rejecting = true;
    let mut keyboard = Keyboard::with_desktop(os);
    keyboard.string_input("no-op");
    assert!(keyboard.desktop_mut().events.is_empty());
}

#[test]
fn checked_injection_reports_rejection() {
    let mut os = FakeOs::new(1920, 1080);
    os.rejecting = true;
    let press = InputEvent::Mouse(marionette::MouseEvent::with_flags(MOUSEEVENTF_LEFTDOWN));
    assert_eq!(inject_checked(&mut os, &press), Err(InputError::Rejected));

    os.rejecting = false;
    assert_eq!(inject_checked(&mut os, &press), Ok(()));
}

#[test]
fn left_drag_between_points_is_four_events() {
    let mut mouse = Mouse::with_desktop(FakeOs::new(1920, 1080));
    mouse.drag(MouseButton::Left, (50, 60), (500, 600));
    let flags = mouse.desktop_mut().mouse_flags();
    let abs_move = MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE;
    assert_eq!(
        flags,
        vec![abs_move, MOUSEEVENTF_LEFTDOWN, abs_move, MOUSEEVENTF_LEFTUP]
    );
}

#[test]
fn offset_drag_stays_within_bounds() {
    let mut mouse = Mouse::with_desktop(FakeOs::new(1920, 1080));
    mouse.config.offset_bound = marionette::OffsetBound::uniform(10);
    for _ in 0..30 {
        mouse.desktop_mut().events.clear();
        mouse.drag_with_offset(MouseButton::Left, (100, 100), (800, 500), None);
        let flags = mouse.desktop_mut().mouse_flags();
        let abs_move = MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE;
        assert_eq!(
            flags,
            vec![abs_move, MOUSEEVENTF_LEFTDOWN, abs_move, MOUSEEVENTF_LEFTUP]
        );
        let end = mouse.position();
        assert!((800..811).contains(&end.x), "ended at {end}");
        assert!((500..511).contains(&end.y), "ended at {end}");
    }
}
