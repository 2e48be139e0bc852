//! # Solar Position
//!
//! Apparent position of the Sun for any civil date, time and place, after the
//! NREL Solar Position Algorithm (Reda & Andreas, 2008).
//!
//! The calculation runs as a fixed chain: Julian day and ΔT, Earth's
//! heliocentric position from the VSOP87 series, nutation and aberration,
//! geocentric right ascension and declination, sidereal time, parallax for the
//! observer's place on the oblate Earth, refraction, and finally azimuth,
//! zenith and the angle of incidence on a tilted surface. Every intermediate
//! value is returned in a [`SolarPositionResult`]. All angles are in degrees.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use solar_position::{DeltaT, ObserverLocation, SolarCalculator, SolarEventResult, SurfaceOrientation};
//!
//! // NREL's reference case: Golden, Colorado, 17 October 2003, 12:30:30 MST
//! let date = FixedOffset::west_opt(7 * 3600)
//!     .and_then(|tz| tz.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).single())
//!     .unwrap();
//!
//! let location = ObserverLocation::with_atmosphere(
//!     39.742476,  // latitude, positive north
//!     -105.1786,  // longitude, positive east
//!     1830.14,    // elevation in meters
//!     82_000.0,   // pressure in pascals
//!     284.15,     // temperature in kelvin
//! )
//! .unwrap();
//!
//! let calc = SolarCalculator::new(&date, DeltaT::Seconds(67.0), location, SurfaceOrientation::new(30.0, -10.0)).unwrap();
//!
//! println!("Zenith: {:.5}°", calc.zenith());
//! println!("Azimuth: {:.5}°", calc.azimuth());
//! println!("Incidence: {:.5}°", calc.incidence_angle());
//!
//! match calc.sunrise_sunset().unwrap().sunrise {
//!     SolarEventResult::Occurs(time) => println!("Sunrise at {time}"),
//!     SolarEventResult::AllDay => println!("Sun never sets (midnight sun)"),
//!     SolarEventResult::AllNight => println!("Sun never rises (polar night)"),
//! }
//! ```
//!
//! ## ΔT
//!
//! The series are evaluated in terrestrial time. Pass [`DeltaT::Seconds`] when
//! TT − UT1 is known; [`DeltaT::Lookup`] reads a monthly table of observed
//! values (1973–2016) and clamps outside it. [`tt_minus_utc`] gives a
//! leap-second based estimate for recent dates.
//!
//! ## Quick estimates
//!
//! [`fast`] gives altitude and azimuth from the day of year alone, to within a
//! degree or two, for callers that do not need the full chain.
#![no_std]

pub mod atmosphere;
pub mod events;
pub mod fast;
pub(crate) mod geo;
pub(crate) mod math;
pub mod nutation;
pub(crate) mod pipeline;
pub mod series;
pub(crate) mod tables;
pub mod time;
pub mod types;

#[cfg(test)]
mod tests;

use core::cell::OnceCell;

use chrono::{DateTime, FixedOffset, TimeZone};
use log::debug;
use thiserror::Error;

pub use crate::atmosphere::{pressure_at_elevation, temperature_at_elevation};
pub use crate::events::{sunrise_sunset, SolarEventResult, SunriseSunset, SUNRISE_ELEVATION};
pub use crate::nutation::{nutation, FundamentalArguments, Nutation};
pub use crate::pipeline::solar_position;
pub use crate::series::{combine, evaluate, evaluate_series, PeriodicTerm};
pub use crate::time::{
    julian_day_number, leap_seconds, lookup_delta_t, tt_minus_utc, DeltaT, Instant, TimeScale, J2000,
};
pub use crate::types::{
    GeocentricPosition, HeliocentricPosition, ObserverLocation, SiderealTime, SolarPositionResult,
    SurfaceOrientation, TopocentricPosition,
};

/// Solar position for one moment and place, computed on first use and cached.
///
/// Rise and set times for the local day of that moment are cached separately.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use solar_position::{DeltaT, ObserverLocation, SolarCalculator, SurfaceOrientation};
///
/// let date = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
/// let london = ObserverLocation::new(51.5, 0.0, 0.0).unwrap();
/// let calc = SolarCalculator::new(&date, DeltaT::Seconds(69.0), london, SurfaceOrientation::default()).unwrap();
///
/// assert!(calc.elevation() > 60.0);
/// assert!(calc.zenith() >= 0.0 && calc.zenith() <= 180.0);
/// ```
pub struct SolarCalculator {
    date: DateTime<FixedOffset>,
    time: TimeScale,
    location: ObserverLocation,
    surface: SurfaceOrientation,
    position: OnceCell<SolarPositionResult>,
    sunrise_sunset: OnceCell<Result<SunriseSunset, CalculationError>>,
}

impl SolarCalculator {
    /// Resolves ΔT for `date` and prepares a calculator.
    ///
    /// # Arguments
    ///
    /// * `date` - Civil date and time in any time zone
    /// * `delta_t` - TT − UT1 policy, see [`DeltaT`]
    /// * `location` - Observer, already range checked
    /// * `surface` - Collector orientation, used only for [`Self::incidence_angle`]
    ///
    /// # Errors
    ///
    /// [`CalculationError::DeltaTOutOfRange`] for an explicit ΔT beyond ±8000 s.
    pub fn new<Tz: TimeZone>(
        date: &DateTime<Tz>,
        delta_t: DeltaT,
        location: ObserverLocation,
        surface: SurfaceOrientation,
    ) -> Result<Self, CalculationError> {
        let time = TimeScale::from_datetime(date, delta_t)?;
        debug!("ΔT for {} resolved to {} s", date.naive_local(), time.delta_t());
        Ok(Self {
            date: date.fixed_offset(),
            time,
            location,
            surface,
            position: OnceCell::new(),
            sunrise_sunset: OnceCell::new(),
        })
    }

    /// A calculator for another moment, keeping place, surface and the resolved ΔT.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<Self, CalculationError> {
        Self::new(date, DeltaT::Seconds(self.time.delta_t()), self.location, self.surface)
    }

    pub fn time(&self) -> &TimeScale {
        &self.time
    }

    pub fn location(&self) -> &ObserverLocation {
        &self.location
    }

    pub fn surface(&self) -> &SurfaceOrientation {
        &self.surface
    }

    /// Every stage output of the calculation.
    pub fn result(&self) -> &SolarPositionResult {
        self.position
            .get_or_init(|| solar_position(&self.time, &self.location, &self.surface))
    }

    /// Refracted topocentric elevation, degrees.
    pub fn elevation(&self) -> f64 {
        self.result().elevation()
    }

    /// Topocentric zenith angle, degrees.
    pub fn zenith(&self) -> f64 {
        self.result().zenith()
    }

    /// Topocentric azimuth, degrees eastward from north.
    pub fn azimuth(&self) -> f64 {
        self.result().azimuth()
    }

    /// Geocentric declination, degrees.
    pub fn declination(&self) -> f64 {
        self.result().declination()
    }

    /// Angle between the Sun and the surface normal, degrees.
    pub fn incidence_angle(&self) -> f64 {
        self.result().incidence_angle
    }

    /// Sunrise and sunset on the local calendar day of the calculator's date.
    ///
    /// # Errors
    ///
    /// [`CalculationError::TimeConversionError`] if an event falls outside the
    /// range of [`DateTime<Utc>`](chrono::DateTime).
    pub fn sunrise_sunset(&self) -> Result<SunriseSunset, CalculationError> {
        *self.sunrise_sunset.get_or_init(|| {
            sunrise_sunset(
                self.date.date_naive(),
                *self.date.offset(),
                &self.location,
                DeltaT::Seconds(self.time.delta_t()),
            )
        })
    }
}

/// Errors raised while validating inputs.
///
/// The calculation itself never fails; out-of-table dates are clamped and
/// degenerate geometry yields NaN.
///
/// # Variants
///
/// - `LatitudeOutOfRange`: latitude must be in [-90, 90] degrees
/// - `LongitudeOutOfRange`: longitude must be in [-180, 180] degrees
/// - `ElevationOutOfRange`: |elevation| must not exceed 6,500,000 m
/// - `PressureOutOfRange`: pressure must be in (0, 500,000] Pa
/// - `TemperatureOutOfRange`: temperature must be in (0, 6000] K
/// - `DeltaTOutOfRange`: an explicit ΔT must be within ±8000 s
/// - `TimeConversionError`: a computed instant has no UTC date/time
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    #[error("Elevation out of range")]
    ElevationOutOfRange,

    #[error("Pressure out of range")]
    PressureOutOfRange,

    #[error("Temperature out of range")]
    TemperatureOutOfRange,

    #[error("ΔT out of range")]
    DeltaTOutOfRange,

    #[error("Time conversion error")]
    TimeConversionError,
}
