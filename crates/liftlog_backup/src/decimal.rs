//! Fixed-point decimal conversion for weight values.

use crate::dao::DecimalValue;

/// Nanos per whole unit (10^9).
pub const NANO_FACTOR: i64 = 1_000_000_000;

impl DecimalValue {
    /// Decompose a real value into whole units plus base-10^9 nanos.
    ///
    /// `units` is the floor of the value, so `nanos` stays non-negative
    /// even for values just below zero. Rounding that reaches a full unit
    /// carries into `units`; `nanos` stays in `[0, NANO_FACTOR)`.
    pub fn from_f64(value: f64) -> Self {
        let floor = value.floor();
        let mut units = floor as i64;
        let mut nanos = ((value - floor) * NANO_FACTOR as f64).round() as i64;
        if nanos >= NANO_FACTOR {
            units += 1;
            nanos = 0;
        }
        Self {
            units,
            nanos: nanos as i32,
        }
    }

    /// Recompose the represented value.
    pub fn to_f64(self) -> f64 {
        self.units as f64 + self.nanos as f64 / NANO_FACTOR as f64
    }
}
