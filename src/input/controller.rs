//! Game controller hot-plug bookkeeping
//!
//! Only one controller drives the game. The first supported controller to
//! appear is attached; buttons from any other device are ignored.

use super::{Button, Command, translate_button};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attached {
    index: i32,
    name: String,
}

/// The single attached controller, if any
#[derive(Debug, Clone, Default)]
pub struct Controllers {
    attached: Option<Attached>,
}

impl Controllers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the attached controller
    pub fn attached(&self) -> Option<i32> {
        self.attached.as_ref().map(|a| a.index)
    }

    pub fn attached_name(&self) -> Option<&str> {
        self.attached.as_ref().map(|a| a.name.as_str())
    }

    /// Handle a newly connected device. Returns true if it was attached.
    pub fn attach(&mut self, index: i32, name: &str, supported: bool) -> bool {
        if self.attached.is_some() {
            return false;
        }
        if !supported {
            log::warn!("{name} (device {index}) - not found in controller database");
            return false;
        }
        log::info!("Game controller attached: {name}");
        self.attached = Some(Attached {
            index,
            name: name.to_string(),
        });
        true
    }

    /// Handle a disconnected device. Returns true if it was the attached one.
    pub fn detach(&mut self, index: i32) -> bool {
        match self.attached.take() {
            Some(a) if a.index == index => {
                log::info!("Game controller detached: {}", a.name);
                true
            }
            other => {
                self.attached = other;
                false
            }
        }
    }

    /// Translate a button from `controller`; foreign controllers yield `None`
    pub fn translate(&self, controller: i32, button: Button) -> Command {
        if self.attached() != Some(controller) {
            return Command::None;
        }
        translate_button(button)
    }
}
