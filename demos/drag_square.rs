//! Drags the cursor around a square with the left button held.
//!
//! Useful against a paint program: run `cargo run --example drag_square`,
//! focus the canvas within three seconds, and a square gets drawn.

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("this demo injects real input and only runs on Windows");
}

#[cfg(target_os = "windows")]
fn main() {
    use marionette::{Mouse, MouseButton};
    use std::time::Duration;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("focus a canvas; drawing starts in 3 seconds...");
    std::thread::sleep(Duration::from_secs(3));

    let mut mouse = Mouse::new();
    mouse.config.action_delay_ms = 20;

    let center = mouse.position();
    println!("cursor at {center}, drawing around it");

    let half = 150;
    let square = [
        center.offset(-half, -half),
        center.offset(half, -half),
        center.offset(half, half),
        center.offset(-half, half),
        center.offset(-half, -half),
    ];
    mouse.drag_path(MouseButton::Left, &square);

    // And a jittered click back in the middle.
    mouse.click_with_offset(center, None);
    println!("done; cursor now at {}", mouse.position());
}
