//! Runtime settings shared by every engine instance
//!
//! [`Settings`] is built once at startup (from command-line flags in the
//! binary, or [`Settings::default`] in tests) and copied into each engine.
//! Only the speed factor changes afterwards, per structure.

use super::constants::{
    BASE_HIGHLIGHT_MS, BASE_RESULT_PAUSE_MS, DEFAULT_LOG_CAPACITY, DEFAULT_SPEED, MAX_SPEED,
    MIN_SPEED, SPEED_STEP,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Animation speed factor, always within `[MIN_SPEED, MAX_SPEED]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    /// Clamp `factor` into range; NaN falls back to the default speed
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            return Speed(DEFAULT_SPEED);
        }
        Speed(factor.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn factor(self) -> f64 {
        self.0
    }

    /// Divide a base duration by the speed factor
    pub fn scale(self, base: Duration) -> Duration {
        base.div_f64(self.0)
    }

    /// One slider step up, rounded to a tenth
    pub fn faster(self) -> Self {
        Speed::new(round_tenth(self.0 + SPEED_STEP))
    }

    /// One slider step down, rounded to a tenth
    pub fn slower(self) -> Self {
        Speed::new(round_tenth(self.0 - SPEED_STEP))
    }
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

/// What happens to a pending two-phase commit when a new request arrives
/// before its timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Discard the pending commit
    #[default]
    Cancel,
    /// Apply the pending commit immediately, then handle the new request
    Settle,
}

impl FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cancel" => Ok(OverlapPolicy::Cancel),
            "settle" => Ok(OverlapPolicy::Settle),
            other => Err(format!(
                "Unknown overlap policy '{}' (expected cancel or settle)",
                other
            )),
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapPolicy::Cancel => write!(f, "cancel"),
            OverlapPolicy::Settle => write!(f, "settle"),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Initial speed of every structure
    pub speed: Speed,
    /// Highlight duration at speed 1.0
    pub highlight: Duration,
    /// How long a search result stays up at speed 1.0
    pub result_pause: Duration,
    pub overlap: OverlapPolicy,
    /// Entries kept by the activity log
    pub log_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            speed: Speed::default(),
            highlight: Duration::from_millis(BASE_HIGHLIGHT_MS),
            result_pause: Duration::from_millis(BASE_RESULT_PAUSE_MS),
            overlap: OverlapPolicy::default(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}
