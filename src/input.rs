use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Command {
    Quit,
    Jump,
    MoveLeft,
    MoveRight,
}

/// Every key-down event maps to at most one command. Repeats are kept on
/// purpose: holding an arrow key yields movement pulses at the OS repeat
/// rate, there is no held-state handling.
pub fn translate(event: &Event) -> Option<Command> {
    match *event {
        Event::Quit { .. } => Some(Command::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => match key {
            Keycode::Escape => Some(Command::Quit),
            Keycode::Up | Keycode::Space => Some(Command::Jump),
            Keycode::Left => Some(Command::MoveLeft),
            Keycode::Right => Some(Command::MoveRight),
            _ => None,
        },
        _ => None,
    }
}
