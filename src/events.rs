//! Sunrise and sunset by scanning the geometric elevation over one local day.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use julian_day_converter::julian_day_to_unix_millis;

use crate::{
    geo::{STANDARD_HORIZON_REFRACTION, SUN_RADIUS},
    pipeline::solar_position,
    time::{DeltaT, Instant, TimeScale},
    types::{ObserverLocation, SurfaceOrientation},
    CalculationError,
};

/// Geometric elevation of the Sun's center when its upper limb touches a
/// refracted horizon, degrees.
pub const SUNRISE_ELEVATION: f64 = -(SUN_RADIUS + STANDARD_HORIZON_REFRACTION);

const SECONDS_PER_DAY: f64 = 86_400.0;
/// Coarse scan step
const SCAN_STEP_SECONDS: f64 = 600.0;
const BISECTION_TOLERANCE_SECONDS: f64 = 1.0;
const MAX_BISECTION_ITERATIONS: usize = 32;

/// Outcome of searching a day for one horizon crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolarEventResult {
    /// The crossing happens at this moment.
    Occurs(DateTime<Utc>),
    /// No crossing; the Sun is up at the end of the day (midnight sun).
    AllDay,
    /// No crossing; the Sun is down at the end of the day (polar night).
    AllNight,
}

impl SolarEventResult {
    /// The moment of the event, if it happens.
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        match self {
            SolarEventResult::Occurs(datetime) => Some(datetime),
            _ => None,
        }
    }
}

/// First sunrise and first sunset of a local day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SunriseSunset {
    pub sunrise: SolarEventResult,
    pub sunset: SolarEventResult,
}

/// Finds the first upward and downward horizon crossings in the 24 hours
/// starting at local midnight of `date` in `utc_offset`.
///
/// # Errors
///
/// [`CalculationError::DeltaTOutOfRange`] for a bad explicit ΔT, or
/// [`CalculationError::TimeConversionError`] if a crossing cannot be expressed
/// as a UTC date/time.
pub fn sunrise_sunset(
    date: NaiveDate,
    utc_offset: FixedOffset,
    location: &ObserverLocation,
    delta_t: DeltaT,
) -> Result<SunriseSunset, CalculationError> {
    let delta_t = delta_t.validate()?.resolve(date.year(), date.month());
    let midnight = date.and_time(NaiveTime::MIN);
    let start = TimeScale::new(Instant::from_naive(&midnight, utc_offset, delta_t), delta_t);
    let height = |seconds: f64| {
        solar_position(&start.offset_seconds(seconds), location, &SurfaceOrientation::default())
            .topocentric
            .geometric_elevation
            - SUNRISE_ELEVATION
    };

    let mut sunrise = None;
    let mut sunset = None;
    let mut previous_seconds = 0.0;
    let mut previous = height(previous_seconds);
    while previous_seconds < SECONDS_PER_DAY {
        let seconds = previous_seconds + SCAN_STEP_SECONDS;
        let current = height(seconds);
        if sunrise.is_none() && previous < 0.0 && current >= 0.0 {
            sunrise = Some(bisect_crossing(&height, previous_seconds, seconds));
        }
        if sunset.is_none() && previous >= 0.0 && current < 0.0 {
            sunset = Some(bisect_crossing(&height, previous_seconds, seconds));
        }
        previous_seconds = seconds;
        previous = current;
    }

    let sun_up_at_end = previous >= 0.0;
    let event = |crossing: Option<f64>| match crossing {
        Some(seconds) => universal_to_utc(&start.offset_seconds(seconds)).map(SolarEventResult::Occurs),
        None if sun_up_at_end => Ok(SolarEventResult::AllDay),
        None => Ok(SolarEventResult::AllNight),
    };
    Ok(SunriseSunset {
        sunrise: event(sunrise)?,
        sunset: event(sunset)?,
    })
}

/// Narrows a sign change of `height` between `low` and `high` seconds.
fn bisect_crossing(height: &impl Fn(f64) -> f64, mut low: f64, mut high: f64) -> f64 {
    let low_is_below = height(low) < 0.0;
    let mut iterations = 0;
    while high - low > BISECTION_TOLERANCE_SECONDS && iterations < MAX_BISECTION_ITERATIONS {
        let middle = 0.5 * (low + high);
        if (height(middle) < 0.0) == low_is_below {
            low = middle;
        } else {
            high = middle;
        }
        iterations += 1;
    }
    0.5 * (low + high)
}

/// Civil UTC time of a time scale, through its universal-time Julian day.
fn universal_to_utc(time: &TimeScale) -> Result<DateTime<Utc>, CalculationError> {
    let unix_millis = julian_day_to_unix_millis(time.universal().julian_day());
    Utc.timestamp_millis_opt(unix_millis)
        .single()
        .ok_or(CalculationError::TimeConversionError)
}
