//! Input translation
//!
//! Raw keyboard and controller events are reduced to a small set of game
//! commands. Repeat timing for held directions is owned by [`AutoRepeat`],
//! never by the input source, so source-generated key repeats are dropped.

pub mod controller;
pub mod repeat;

use serde::{Deserialize, Serialize};

pub use controller::Controllers;
pub use repeat::{AutoRepeat, RepeatTiming};

/// Abstract game command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Command {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    Start,
    Pause,
    Quit,
    Fast,
    Slow,
}

impl Command {
    /// Commands that auto-repeat while held
    pub const REPEATABLE: [Command; 4] = [Command::Left, Command::Right, Command::Up, Command::Down];

    pub fn is_repeatable(self) -> bool {
        Self::REPEATABLE.contains(&self)
    }
}

/// Keyboard keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    LeftShift,
    LeftCtrl,
    N,
    P,
    F1,
    Q,
    /// Any other key, by platform scancode
    Other(u32),
}

/// Game controller buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Raw events delivered by an input source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown {
        key: Key,
        /// Generated by the source's own key repeat
        #[serde(default)]
        repeat: bool,
    },
    KeyUp {
        key: Key,
    },
    ButtonDown {
        controller: i32,
        button: Button,
    },
    ButtonUp {
        controller: i32,
        button: Button,
    },
    ControllerAdded {
        controller: i32,
        name: String,
        /// Has a known button mapping
        #[serde(default = "default_supported")]
        supported: bool,
    },
    ControllerRemoved {
        controller: i32,
    },
    /// Window closed
    Quit,
}

fn default_supported() -> bool {
    true
}

/// Map a key to its command; source-generated repeats map to `None`
pub fn translate_key(key: Key, repeat: bool) -> Command {
    if repeat {
        return Command::None;
    }
    let command = match key {
        Key::Left => Command::Left,
        Key::Right => Command::Right,
        Key::Up => Command::Up,
        Key::Down => Command::Down,
        Key::LeftShift => Command::Fast,
        Key::LeftCtrl => Command::Slow,
        Key::N => Command::Start,
        Key::P | Key::F1 => Command::Pause,
        Key::Q => Command::Quit,
        Key::Other(_) => Command::None,
    };
    if command.is_repeatable() {
        log::debug!("key {key:?} -> {command:?}");
    }
    command
}

/// Map a controller button to its command
pub fn translate_button(button: Button) -> Command {
    let command = match button {
        Button::A | Button::RightShoulder => Command::Fast,
        Button::B | Button::LeftShoulder => Command::Slow,
        Button::Back => Command::Pause,
        Button::Start => Command::Start,
        Button::DPadUp => Command::Up,
        Button::DPadDown => Command::Down,
        Button::DPadLeft => Command::Left,
        Button::DPadRight => Command::Right,
        Button::X | Button::Y | Button::Guide | Button::LeftStick | Button::RightStick => {
            Command::None
        }
    };
    if command.is_repeatable() {
        log::debug!("button {button:?} -> {command:?}");
    }
    command
}
