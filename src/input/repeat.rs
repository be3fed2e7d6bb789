//! DAS (digital auto-shift) scheduler for held directional commands
//!
//! A fresh press fires once on its own. After `initial_delay_ms` of holding
//! the command fires again, then every `subsequent_delay_ms` until released.

use serde::{Deserialize, Serialize};

use super::Command;
use crate::consts::{AUTO_REPEAT_INITIAL_DELAY_MS, AUTO_REPEAT_SUBSEQUENT_DELAY_MS};

/// Auto-repeat delays (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatTiming {
    pub initial_delay_ms: u64,
    pub subsequent_delay_ms: u64,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: AUTO_REPEAT_INITIAL_DELAY_MS,
            subsequent_delay_ms: AUTO_REPEAT_SUBSEQUENT_DELAY_MS,
        }
    }
}

/// Repeat state threaded through the game loop
#[derive(Debug, Clone)]
pub struct AutoRepeat {
    timing: RepeatTiming,
    /// Held repeatable command, `None` when idle
    active: Command,
    repeat_count: u32,
    last_fire_ms: u64,
    threshold_ms: u64,
}

impl AutoRepeat {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            active: Command::None,
            repeat_count: 0,
            last_fire_ms: 0,
            threshold_ms: timing.initial_delay_ms,
        }
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// Held command, `Command::None` when idle
    pub fn active(&self) -> Command {
        self.active
    }

    pub fn is_holding(&self) -> bool {
        self.active != Command::None
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    /// Register a freshly pressed command at `now_ms`.
    ///
    /// Repeatable commands start a new hold, discarding any previous one. Any
    /// other command ends the hold. The caller performs the press action
    /// itself; this only arms the repeat timer.
    pub fn press(&mut self, command: Command, now_ms: u64) {
        if !command.is_repeatable() {
            self.clear();
            return;
        }
        self.active = command;
        self.repeat_count = 0;
        self.last_fire_ms = now_ms;
        self.threshold_ms = self.timing.initial_delay_ms;
    }

    /// Release `command`; ignored unless it is the held one
    pub fn release(&mut self, command: Command) {
        if command != Command::None && command == self.active {
            self.clear();
        }
    }

    /// Drop back to idle
    pub fn clear(&mut self) {
        self.active = Command::None;
        self.repeat_count = 0;
        self.threshold_ms = self.timing.initial_delay_ms;
    }

    /// The command to fire again at `now_ms`, if its delay has elapsed
    pub fn poll(&mut self, now_ms: u64) -> Option<Command> {
        if !self.active.is_repeatable() {
            return None;
        }
        if now_ms.saturating_sub(self.last_fire_ms) < self.threshold_ms {
            return None;
        }
        self.repeat_count += 1;
        self.threshold_ms = self.timing.subsequent_delay_ms;
        self.last_fire_ms = now_ms;
        Some(self.active)
    }
}

impl Default for AutoRepeat {
    fn default() -> Self {
        Self::new(RepeatTiming::default())
    }
}
