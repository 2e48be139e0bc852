//! Periodic series evaluation for the VSOP87-derived Earth tables.
//!
//! A series is a list of term groups, one per power of time. Every group is
//! summed as `Σ A cos(B + C t)` and the partial sums are then folded together
//! as a polynomial in `t`. Longitude, latitude and radius differ only in the
//! table they feed in.

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Highest power of time (plus one) any Earth series uses.
pub const MAX_SERIES_POWERS: usize = 6;

/// Tables store amplitudes multiplied by 10^8.
const SERIES_SCALE: f64 = 1.0e8;

/// One `A cos(B + C t)` term.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeriodicTerm {
    /// `A`, scaled by 10^8
    pub amplitude: f64,
    /// `B`, radians
    pub phase: f64,
    /// `C`, radians per Julian millennium
    pub frequency: f64,
}

impl PeriodicTerm {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    fn at(&self, t: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * t).cos()
    }
}

/// Sums every term group of `series` at time `t`.
///
/// Index `k` of the output holds the partial sum for `t^k`. Groups the series
/// does not define (latitude only has two) are zero, and groups past
/// [`MAX_SERIES_POWERS`] are ignored.
pub fn evaluate(series: &[&[PeriodicTerm]], t: f64) -> [f64; MAX_SERIES_POWERS] {
    let mut partial_sums = [0.0; MAX_SERIES_POWERS];
    for (sum, group) in partial_sums.iter_mut().zip(series) {
        *sum = group.iter().map(|term| term.at(t)).sum();
    }
    partial_sums
}

/// Folds partial sums into `(g0 + t (g1 + t (g2 + ...))) / 10^8`.
pub fn combine(partial_sums: &[f64; MAX_SERIES_POWERS], t: f64) -> f64 {
    partial_sums.iter().rev().fold(0.0, |acc, &sum| acc * t + sum) / SERIES_SCALE
}

/// [`evaluate`] followed by [`combine`].
pub fn evaluate_series(series: &[&[PeriodicTerm]], t: f64) -> f64 {
    combine(&evaluate(series, t), t)
}
