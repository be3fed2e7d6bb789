//! Game settings
//!
//! Read from an optional JSON file. Missing fields keep their defaults.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_MILLIS, HEIGHT, WIDTH};
use crate::input::RepeatTiming;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Logical canvas width
    pub width: u32,
    /// Logical canvas height
    pub height: u32,

    // === Input ===
    /// DAS delays for held directions
    pub repeat: RepeatTiming,

    // === Simulation ===
    /// Frame length used by the simulated clock
    pub frame_millis: u64,
    /// Spawn the Qix when the playfield is created
    pub spawn_qix: bool,
    /// Anchor of the first Qix line
    pub qix_origin: (f64, f64),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,

            repeat: RepeatTiming::default(),

            frame_millis: FRAME_MILLIS,
            spawn_qix: true,
            qix_origin: (200.0, 200.0),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings =
            Self::from_json(&json).with_context(|| format!("Invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "canvas size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.repeat.subsequent_delay_ms > 0, "subsequent repeat delay must be non-zero");
        ensure!(self.frame_millis > 0, "frame length must be non-zero");
        Ok(())
    }
}
