//! Precision state and per-call math context.
//!
//! The server owns one [`PrecisionSetting`] and hands clones of it to every
//! tool route. A call reads it exactly once, through
//! [`PrecisionSetting::context`], and threads the resulting [`MathContext`]
//! through its computation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::info;

use super::error::CalcError;

/// Significant digits used when nothing else is configured.
pub const DEFAULT_PRECISION: u32 = 20;

/// Upper bound for the precision when nothing else is configured.
pub const DEFAULT_MAX_PRECISION: u32 = 10_000;

/// Immutable snapshot of the precision used by a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u32,
}

impl MathContext {
    /// Create a context with the given number of significant digits.
    pub fn new(precision: u32) -> Result<Self, CalcError> {
        if precision == 0 {
            return Err(CalcError::invalid_argument(
                "Precision must be a positive integer",
            ));
        }
        Ok(Self { precision })
    }

    /// Number of significant digits retained by arithmetic.
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Shared, process-wide precision handle.
///
/// Cloning shares the underlying value. Writers replace it atomically and
/// readers see whatever value is current when they take their snapshot.
#[derive(Debug, Clone)]
pub struct PrecisionSetting {
    current: Arc<AtomicU32>,
    max: u32,
}

impl PrecisionSetting {
    /// Create a setting starting at `initial`, bounded by `max`.
    ///
    /// `initial` is clamped into `1..=max`.
    pub fn new(initial: u32, max: u32) -> Self {
        let max = max.max(1);
        Self {
            current: Arc::new(AtomicU32::new(initial.clamp(1, max))),
            max,
        }
    }

    /// Current number of significant digits.
    pub fn get(&self) -> u32 {
        self.current.load(Ordering::SeqCst)
    }

    /// Largest precision accepted by [`set`](Self::set).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Replace the precision for all subsequent computations.
    pub fn set(&self, precision: u32) -> Result<(), CalcError> {
        if precision == 0 || precision > self.max {
            return Err(CalcError::invalid_argument(format!(
                "Precision must be between 1 and {}",
                self.max
            )));
        }
        let previous = self.current.swap(precision, Ordering::SeqCst);
        info!("Precision changed from {} to {}", previous, precision);
        Ok(())
    }

    /// Snapshot the current precision for one computation.
    pub fn context(&self) -> MathContext {
        MathContext {
            precision: self.get(),
        }
    }
}

impl Default for PrecisionSetting {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, DEFAULT_MAX_PRECISION)
    }
}
