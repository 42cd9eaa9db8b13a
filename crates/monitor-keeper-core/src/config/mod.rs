mod loader;
pub mod template;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::record::{DEFAULT_MAX_MONITORS, MIN_MONITORS, MonitorRange};

pub use loader::{config_dir, config_path, load, try_load};

/// Upper bound accepted for `monitors.max_monitors`.
const MAX_MONITORS_LIMIT: usize = 16;

/// Accepted range for both debounce delays, in milliseconds.
const DELAY_RANGE_MS: (u64, u64) = (10, 10_000);

/// Top-level configuration for Monitor Keeper.
///
/// Loaded from `~/.config/monitor-keeper/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which monitor counts get a saved layout.
    pub monitors: MonitorsConfig,
    /// Debounce delays.
    pub timing: TimingConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Monitor-count settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorsConfig {
    /// Largest monitor count a layout is saved for. Each extra count
    /// costs one placement slot per tracked window.
    pub max_monitors: usize,
}

impl Default for MonitorsConfig {
    fn default() -> Self {
        Self {
            max_monitors: DEFAULT_MAX_MONITORS,
        }
    }
}

impl MonitorsConfig {
    /// The monitor counts placements are recorded and restored for.
    pub fn range(&self) -> MonitorRange {
        MonitorRange::up_to(self.max_monitors)
    }
}

/// Debounce delays in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet time after the last window move before positions are saved.
    pub capture_delay_ms: u64,
    /// Quiet time after the last display change before the monitor
    /// count is reassessed.
    pub transition_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            capture_delay_ms: 200,
            transition_delay_ms: 500,
        }
    }
}

impl TimingConfig {
    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.monitors.max_monitors = self
            .monitors
            .max_monitors
            .clamp(MIN_MONITORS, MAX_MONITORS_LIMIT);
        let (lo, hi) = DELAY_RANGE_MS;
        self.timing.capture_delay_ms = self.timing.capture_delay_ms.clamp(lo, hi);
        self.timing.transition_delay_ms = self.timing.transition_delay_ms.clamp(lo, hi);
    }
}
