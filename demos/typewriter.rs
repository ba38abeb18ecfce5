//! Types a line of text into whatever window has focus.
//!
//! Focus a text editor, run `cargo run --example typewriter`, and switch back
//! within three seconds.

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("this demo injects real input and only runs on Windows");
}

#[cfg(target_os = "windows")]
fn main() {
    use marionette::{vk, Keyboard};
    use std::time::Duration;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("focus a text field; typing starts in 3 seconds...");
    std::thread::sleep(Duration::from_secs(3));

    let mut keyboard = Keyboard::new();
    keyboard.config.action_delay_ms = 30;

    keyboard.string_input("Hello from marionette! Ünïcödé works too: 🦀");
    keyboard.key_typing(vk::RETURN);
}
