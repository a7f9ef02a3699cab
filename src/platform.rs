//! minifb glue shared by the binaries.

use minifb::{Key, Window, WindowOptions};

use crate::sim::InputIntents;

/// Poll the keyboard once and fold it into this tick's intents.
///
/// Up/W forward, Down/S back, Left/A turn left, Right/D turn right, Esc quit.
pub fn intents_from_window(win: &Window) -> InputIntents {
    let down = |keys: &[Key]| keys.iter().any(|&k| win.is_key_down(k));

    let mut intents = InputIntents::empty();
    intents.set(InputIntents::FORWARD, down(&[Key::Up, Key::W]));
    intents.set(InputIntents::BACKWARD, down(&[Key::Down, Key::S]));
    intents.set(InputIntents::TURN_LEFT, down(&[Key::Left, Key::A]));
    intents.set(InputIntents::TURN_RIGHT, down(&[Key::Right, Key::D]));
    intents.set(InputIntents::QUIT, down(&[Key::Escape]) || !win.is_open());
    intents
}

pub fn open_window(title: &str, width: usize, height: usize) -> minifb::Result<Window> {
    Window::new(title, width, height, WindowOptions::default())
}
