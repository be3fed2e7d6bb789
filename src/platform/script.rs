//! Input sources

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::InputEvent;

/// Non-blocking event queue drained once per loop iteration
pub trait InputSource {
    /// Next pending event at `now_ms`, or `None` when drained
    fn poll_event(&mut self, now_ms: u64) -> Option<InputEvent>;
}

/// An event due at a point on the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

/// Replays a timed list of events, each once its time has come
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<ScriptedEvent>,
}

impl ScriptedInput {
    /// Events are delivered in time order; ties keep their listed order
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by_key(|e| e.at_ms);
        Self {
            pending: events.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<ScriptedEvent> =
            serde_json::from_str(json).context("Failed to parse input script")?;
        Ok(Self::new(events))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Builder-style append
    pub fn at(mut self, at_ms: u64, event: InputEvent) -> Self {
        let index = self.pending.partition_point(|e| e.at_ms <= at_ms);
        self.pending.insert(index, ScriptedEvent { at_ms, event });
        self
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self, now_ms: u64) -> Option<InputEvent> {
        if self.pending.front()?.at_ms > now_ms {
            return None;
        }
        self.pending.pop_front().map(|e| e.event)
    }
}
