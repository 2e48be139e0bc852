//! Day-of-year estimates of the Sun's position.
//!
//! These trade the full series for a sine-wave declination and a three-term
//! equation of time. Altitude is good to about 1.5° and azimuth to about 3°
//! between ±60° latitude, and nothing here depends on ΔT. Use
//! [`solar_position`](crate::solar_position) when that is not enough.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{normalize_degrees_360, polynomial};

/// Tilt of the Earth's axis assumed by [`declination`], degrees
pub const EARTH_AXIS_INCLINATION: f64 = 23.45;

/// Day of year of the March equinox in the sine-wave model
const VERNAL_EQUINOX_DAY: f64 = 81.0;

/// Mean longitude of the Sun, degrees, in Julian centuries (TT)
const MEAN_SOLAR_LONGITUDE_COEFFS: [f64; 6] = [
    280.466_456_7,
    36_000.769_827_79,
    0.000_303_202_8,
    1.0 / 49_931.0,
    -1.0 / 15_299.0,
    -1.0 / 1_988_000.0,
];

/// FK5 frame correction to the VSOP87 longitude, degrees (−0.09033″)
const FK5_LONGITUDE_CORRECTION: f64 = -0.000_025;

/// Solar declination in degrees on `day_of_year` (1 = January 1).
pub fn declination(day_of_year: u32) -> f64 {
    EARTH_AXIS_INCLINATION
        * ((2.0 * core::f64::consts::PI / 365.0) * (f64::from(day_of_year) - VERNAL_EQUINOX_DAY)).sin()
}

/// Minutes to add to mean solar time to get apparent solar time.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let bias = 2.0 * core::f64::consts::PI / 364.0 * (f64::from(day_of_year) - VERNAL_EQUINOX_DAY);
    9.87 * (2.0 * bias).sin() - 7.53 * bias.cos() - 1.5 * bias.sin()
}

/// Apparent solar time in hours at `longitude`, to the nearest minute.
///
/// Seconds of `when` are ignored. The value is not wrapped, so it can fall
/// outside [0, 24) near the date line.
pub fn solar_time<Tz: TimeZone>(when: &DateTime<Tz>, longitude: f64) -> f64 {
    let utc = when.with_timezone(&Utc);
    let minutes = f64::from(utc.hour() * 60 + utc.minute());
    (minutes + 4.0 * longitude + equation_of_time(utc.ordinal())) / 60.0
}

/// Hour angle in degrees, positive west of the meridian (afternoon).
pub fn hour_angle<Tz: TimeZone>(when: &DateTime<Tz>, longitude: f64) -> f64 {
    15.0 * (solar_time(when, longitude) - 12.0)
}

/// Geometric altitude of the Sun in degrees, without refraction.
pub fn altitude<Tz: TimeZone>(when: &DateTime<Tz>, latitude: f64, longitude: f64) -> f64 {
    let phi = latitude.to_radians();
    let delta = declination(when.with_timezone(&Utc).ordinal()).to_radians();
    let hour = hour_angle(when, longitude).to_radians();

    (phi.cos() * delta.cos() * hour.cos() + phi.sin() * delta.sin())
        .asin()
        .to_degrees()
}

/// Azimuth in degrees eastward from north, in [0, 360).
pub fn azimuth<Tz: TimeZone>(when: &DateTime<Tz>, latitude: f64, longitude: f64) -> f64 {
    let phi = latitude.to_radians();
    let delta = declination(when.with_timezone(&Utc).ordinal()).to_radians();
    let hour = hour_angle(when, longitude).to_radians();

    let from_south = hour.sin().atan2(hour.cos() * phi.sin() - delta.tan() * phi.cos());
    normalize_degrees_360(from_south.to_degrees() + 180.0)
}

/// Mean geometric longitude of the Sun in [0, 360) at `julian_century` (TT).
pub fn mean_solar_longitude(julian_century: f64) -> f64 {
    normalize_degrees_360(polynomial(&MEAN_SOLAR_LONGITUDE_COEFFS, julian_century))
}

/// True longitude of the Sun in the FK5 frame, from Earth's heliocentric
/// longitude in degrees.
pub fn true_solar_longitude(heliocentric_longitude: f64) -> f64 {
    normalize_degrees_360(heliocentric_longitude + 180.0 + FK5_LONGITUDE_CORRECTION)
}
