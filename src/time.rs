//! Civil time to Julian day conversion, ΔT and leap seconds.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::warn;

use crate::{
    tables::{
        DELTA_T_BASE_MONTH, DELTA_T_BASE_YEAR, DELTA_T_TABLE, LEAP_SECONDS_BASE_YEAR, LEAP_SECOND_ADJUSTMENTS,
    },
    CalculationError,
};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT)
pub const J2000: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
/// First Julian day number of the Gregorian calendar (1582-10-15)
const GREGORIAN_REFORM_JDN: i64 = 2_299_161;
/// TAI − UTC when leap seconds were introduced in 1972
const BASE_LEAP_SECONDS: i32 = 10;
/// TT − TAI in seconds
const TT_MINUS_TAI: f64 = 32.184;
/// Largest |ΔT| accepted from callers, in seconds
const MAX_DELTA_T: f64 = 8000.0;

/// A moment on the Julian day axis, held as two additive parts.
///
/// `day` is a half-integer (the midnight that starts the civil day) and
/// `fraction` carries the time of day together with any offsets. Keeping them
/// apart preserves sub-millisecond resolution that a single `f64` near
/// 2.45 million days would round away.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Instant {
    day: f64,
    fraction: f64,
}

impl Instant {
    pub const fn new(day: f64, fraction: f64) -> Self {
        Self { day, fraction }
    }

    /// Converts a zoned date/time, shifting it forward by `delta_t`.
    ///
    /// The zone offset is read from `date`; the calendar fields are taken as
    /// local time.
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, delta_t: DeltaT) -> Self {
        let local = date.naive_local();
        let seconds = delta_t.resolve(local.year(), local.month());
        Self::from_naive(&local, date.offset().fix(), seconds)
    }

    /// Converts local calendar fields at `utc_offset`, adding `delta_t_seconds`.
    pub fn from_naive(local: &NaiveDateTime, utc_offset: FixedOffset, delta_t_seconds: f64) -> Self {
        let jdn = julian_day_number(local.year(), local.month(), local.day());
        let offset_hours = f64::from(utc_offset.local_minus_utc()) / 3600.0;
        // nanosecond() exceeds 1e9 during a leap second, which lands on :60 as it should
        let seconds = f64::from(local.second()) + f64::from(local.nanosecond()) / 1.0e9;
        let civil_fraction =
            (f64::from(local.hour()) - offset_hours + (f64::from(local.minute()) + seconds / 60.0) / 60.0) / 24.0;

        Self {
            day: jdn as f64 - 0.5,
            fraction: civil_fraction + delta_t_seconds / SECONDS_PER_DAY,
        }
    }

    /// The half-integer day component.
    pub fn day(&self) -> f64 {
        self.day
    }

    /// The day-fraction component, which may fall outside [0, 1).
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Julian day as a single value.
    pub fn julian_day(&self) -> f64 {
        self.day + self.fraction
    }

    /// Days since J2000.0, with the large day counts cancelled before the fraction is added.
    pub fn days_since_j2000(&self) -> f64 {
        (self.day - J2000) + self.fraction
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        (self.julian_day() - J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0.
    pub fn millennia(&self) -> f64 {
        self.centuries() / 10.0
    }

    /// The same instant moved by `seconds`; only the fraction changes.
    #[must_use]
    pub fn offset_seconds(&self, seconds: f64) -> Self {
        Self {
            day: self.day,
            fraction: self.fraction + seconds / SECONDS_PER_DAY,
        }
    }
}

/// Julian day number of the civil day, after Meeus.
///
/// Dates before 1582-10-15 are read on the Julian calendar.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month) = if month < 3 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let century = year.div_euclid(100);
    let reform = 2 - century + century.div_euclid(4);

    let jdn = i64::from(day)
        + (30.6001 * (month + 1) as f64).floor() as i64
        + reform
        + (365.25 * (year + 4716) as f64).floor() as i64
        - 1524;
    if jdn < GREGORIAN_REFORM_JDN {
        jdn - reform
    } else {
        jdn
    }
}

/// How ΔT (TT − UT1) is obtained for a calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DeltaT {
    /// Use this many seconds verbatim, zero included.
    Seconds(f64),
    /// Read the monthly table, clamped at both ends.
    #[default]
    Lookup,
}

impl DeltaT {
    /// ΔT in seconds for a civil year and month.
    pub fn resolve(self, year: i32, month: u32) -> f64 {
        match self {
            Self::Seconds(seconds) => seconds,
            Self::Lookup => lookup_delta_t(year, month),
        }
    }

    /// Rejects explicit values that are not finite or beyond ±8000 s.
    pub fn validate(self) -> Result<Self, CalculationError> {
        match self {
            Self::Seconds(seconds) if !(-MAX_DELTA_T..=MAX_DELTA_T).contains(&seconds) => {
                Err(CalculationError::DeltaTOutOfRange)
            }
            _ => Ok(self),
        }
    }
}

impl From<f64> for DeltaT {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

/// Observed ΔT for the month, clamped to the first or last table entry outside
/// 1973-02..=2017-01. No interpolation.
pub fn lookup_delta_t(year: i32, month: u32) -> f64 {
    let months_since_base = (i64::from(year) - i64::from(DELTA_T_BASE_YEAR)) * 12 + i64::from(month)
        - i64::from(DELTA_T_BASE_MONTH);
    let last = DELTA_T_TABLE.len() - 1;
    let index = usize::try_from(months_since_base).map_or(0, |index| index.min(last));
    DELTA_T_TABLE[index]
}

/// TAI − UTC in whole seconds at the given civil month.
///
/// A June 30 leap second counts from July of that year; a December 31 one from
/// the following January. Past the end of the table the last known value is
/// returned and a warning is logged.
pub fn leap_seconds(year: i32, month: u32) -> i32 {
    let mut total = BASE_LEAP_SECONDS;
    let mut table_year = LEAP_SECONDS_BASE_YEAR;
    for &(june, december) in LEAP_SECOND_ADJUSTMENTS.iter() {
        if table_year == year {
            if month > 6 {
                total += i32::from(june);
            }
            return total;
        }
        if table_year > year {
            return total;
        }
        total += i32::from(june) + i32::from(december);
        table_year += 1;
    }

    // table_year is now one past the last tabulated year
    if year > table_year || month > 6 {
        warn!(
            "no leap second data after {}; assuming TAI - UTC stays at {} s",
            table_year - 1,
            total
        );
    }
    total
}

/// TT − UTC in seconds, a usable ΔT when UT1 − UTC is negligible.
pub fn tt_minus_utc(year: i32, month: u32) -> f64 {
    f64::from(leap_seconds(year, month)) + TT_MINUS_TAI
}

/// The time axis of one calculation: the terrestrial-time instant plus the ΔT
/// that was folded into it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeScale {
    terrestrial: Instant,
    delta_t: f64,
}

impl TimeScale {
    /// Builds from an instant that already includes `delta_t` seconds.
    pub const fn new(terrestrial: Instant, delta_t: f64) -> Self {
        Self { terrestrial, delta_t }
    }

    /// Resolves `delta_t` once and converts `date`.
    ///
    /// # Errors
    ///
    /// [`CalculationError::DeltaTOutOfRange`] for an explicit ΔT outside ±8000 s.
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, delta_t: DeltaT) -> Result<Self, CalculationError> {
        let local = date.naive_local();
        let delta_t = delta_t.validate()?.resolve(local.year(), local.month());
        Ok(Self {
            terrestrial: Instant::from_naive(&local, date.offset().fix(), delta_t),
            delta_t,
        })
    }

    /// Terrestrial time (UT + ΔT); drives the series and nutation.
    pub fn instant(&self) -> Instant {
        self.terrestrial
    }

    /// Universal time; drives the sidereal angle.
    pub fn universal(&self) -> Instant {
        self.terrestrial.offset_seconds(-self.delta_t)
    }

    /// ΔT in seconds.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian ephemeris centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        self.terrestrial.centuries()
    }

    /// Julian ephemeris millennia since J2000.0.
    pub fn millennia(&self) -> f64 {
        self.terrestrial.millennia()
    }

    /// The same ΔT applied `seconds` later.
    #[must_use]
    pub fn offset_seconds(&self, seconds: f64) -> Self {
        Self {
            terrestrial: self.terrestrial.offset_seconds(seconds),
            delta_t: self.delta_t,
        }
    }
}
