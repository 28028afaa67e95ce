//! Tilt input
//!
//! The accelerometer listener and the simulation tick run on different
//! execution contexts. They share exactly one value: the latest normalized
//! tilt reading, held in a cell with one writer half and one reader half.
//! Readings are whole `Vec3`s, so the reader never sees a partial update.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use glam::Vec3;

use crate::consts::TILT_SAMPLE_INTERVAL_MS;

/// How the device reports its axes relative to the game's convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// Already matches (iOS and most desktop sensors)
    #[default]
    Native,
    /// x and y reported with flipped sign (Android)
    InvertedXY,
}

impl AxisConvention {
    pub fn normalize(&self, raw: Vec3) -> Vec3 {
        match self {
            AxisConvention::Native => raw,
            AxisConvention::InvertedXY => Vec3::new(-raw.x, -raw.y, raw.z),
        }
    }
}

type SharedSample = Arc<Mutex<Option<Vec3>>>;

/// Create a connected writer/reader pair
pub fn tilt_channel(convention: AxisConvention) -> (TiltWriter, TiltReader) {
    let shared: SharedSample = Arc::new(Mutex::new(None));
    (
        TiltWriter {
            shared: Arc::clone(&shared),
            convention,
            min_interval: Duration::from_millis(TILT_SAMPLE_INTERVAL_MS),
            last_accepted: None,
        },
        TiltReader { shared },
    )
}

/// Sensor-side half: normalizes, throttles, and publishes readings
#[derive(Debug)]
pub struct TiltWriter {
    shared: SharedSample,
    convention: AxisConvention,
    min_interval: Duration,
    last_accepted: Option<Duration>,
}

impl TiltWriter {
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Offer a raw sensor reading taken at `at` (monotonic time since the
    /// sensor started). Returns whether it was published.
    pub fn push(&mut self, raw: Vec3, at: Duration) -> bool {
        if !raw.is_finite() {
            return false;
        }
        if let Some(last) = self.last_accepted {
            if at.saturating_sub(last) < self.min_interval {
                return false;
            }
        }

        let sample = self.convention.normalize(raw);
        *self.shared.lock().unwrap_or_else(PoisonError::into_inner) = Some(sample);
        self.last_accepted = Some(at);
        true
    }
}

/// Simulation-side half
#[derive(Debug)]
pub struct TiltReader {
    shared: SharedSample,
}

impl TiltReader {
    /// Most recent published reading; `None` before the first one arrives
    pub fn latest(&self) -> Option<Vec3> {
        match self.shared.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => {
                log::warn!("Tilt cell poisoned by a panicking writer; using last value");
                *poisoned.into_inner()
            }
        }
    }

    /// Forget the current reading (stage reload)
    pub fn clear(&self) {
        *self.shared.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Zero point for tilt: the first reading of the session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltBaseline {
    zero: Option<Vec3>,
}

impl TiltBaseline {
    /// Tilt relative to the baseline. Missing or malformed samples count as
    /// no tilt; the first valid sample becomes the baseline.
    pub fn relative(&mut self, sample: Option<Vec3>) -> Vec3 {
        match sample {
            Some(s) if s.is_finite() => s - *self.zero.get_or_insert(s),
            _ => Vec3::ZERO,
        }
    }

    pub fn get(&self) -> Option<Vec3> {
        self.zero
    }

    pub fn reset(&mut self) {
        self.zero = None;
    }
}
