#![allow(clippy::unwrap_used, clippy::panic)]
extern crate std;
use std::format;

mod fast_tests;
mod time_tests;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use crate::{
    geo, series, solar_position, DeltaT, Instant, ObserverLocation, PeriodicTerm, SurfaceOrientation, TimeScale,
};

/// Golden, Colorado: NREL's reference site.
pub(crate) fn golden_location() -> ObserverLocation {
    ObserverLocation::with_atmosphere(39.742476, -105.1786, 1830.14, 82_000.0, 284.15).unwrap()
}

/// 2003-10-17 12:30:30 MST, the NREL reference instant.
pub(crate) fn golden_datetime() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
        .unwrap()
}

pub(crate) fn any_utc_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    // The VSOP87 truncation is good to about ±2000 years; stay well inside it
    (1800i32..=2200i32, 1u32..=12u32, 1u32..=31u32, 0u32..24u32, 0u32..60u32, 0u32..60u32).prop_filter_map(
        "Create valid datetime",
        |(year, month, day, hour, min, sec)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, min, sec))
                .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        },
    )
}

fn any_location() -> impl Strategy<Value = ObserverLocation> {
    (-89.0_f64..=89.0, -180.0_f64..=180.0, -400.0_f64..=5000.0)
        .prop_map(|(latitude, longitude, elevation)| ObserverLocation::new(latitude, longitude, elevation).unwrap())
}

proptest! {
    #[test]
    fn instant_centuries_and_millennia_are_consistent(day in 2_000_000i64..3_000_000i64, fraction in -1.0_f64..2.0) {
        let instant = Instant::new(day as f64 - 0.5, fraction);
        let centuries = (instant.julian_day() - 2_451_545.0) / 36_525.0;
        prop_assert_eq!(instant.centuries(), centuries);
        prop_assert_eq!(instant.millennia(), centuries / 10.0);
    }

    #[test]
    fn geocentric_longitude_is_opposite_the_earth(datetime in any_utc_datetime()) {
        let time = TimeScale::from_datetime(&datetime, DeltaT::Lookup).unwrap();
        let result = solar_position(&time, &golden_location(), &SurfaceOrientation::default());
        let expected = (result.heliocentric.longitude + 180.0) % 360.0;
        prop_assert!((result.geocentric.longitude - expected).abs() < 1e-12);
        prop_assert_eq!(result.geocentric.latitude, -result.heliocentric.latitude);
    }

    #[test]
    fn sidereal_time_is_sidereal_angle_in_hours(datetime in any_utc_datetime(), location in any_location()) {
        let time = TimeScale::from_datetime(&datetime, DeltaT::Lookup).unwrap();
        let sidereal = solar_position(&time, &location, &SurfaceOrientation::default()).sidereal;
        prop_assert_eq!(sidereal.mean_time(), sidereal.mean_angle / 15.0);
        prop_assert_eq!(sidereal.apparent_time(), sidereal.apparent_angle / 15.0);
        prop_assert_eq!(sidereal.local_mean_time(), sidereal.local_mean_angle / 15.0);
        prop_assert_eq!(sidereal.local_apparent_time(), sidereal.local_apparent_angle / 15.0);
        prop_assert!((0.0..360.0).contains(&sidereal.mean_angle));
        prop_assert!((0.0..360.0).contains(&sidereal.local_apparent_angle));
        // Equation of the equinoxes never exceeds about 1.2 s of time
        prop_assert!(sidereal.equation_of_equinoxes.abs() < 0.006);
    }

    #[test]
    fn identical_inputs_give_identical_results(
        datetime in any_utc_datetime(),
        location in any_location(),
        delta_t in -100.0_f64..200.0,
        slope in 0.0_f64..=90.0,
        rotation in -180.0_f64..=180.0,
    ) {
        let surface = SurfaceOrientation::new(slope, rotation);
        let first = solar_position(&TimeScale::from_datetime(&datetime, DeltaT::Seconds(delta_t)).unwrap(), &location, &surface);
        let second = solar_position(&TimeScale::from_datetime(&datetime, DeltaT::Seconds(delta_t)).unwrap(), &location, &surface);
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        prop_assert_eq!(first.zenith().to_bits(), second.zenith().to_bits());
        prop_assert_eq!(first.incidence_angle.to_bits(), second.incidence_angle.to_bits());
    }

    #[test]
    fn solar_position_stays_in_range(datetime in any_utc_datetime(), location in any_location()) {
        let time = TimeScale::from_datetime(&datetime, DeltaT::Lookup).unwrap();
        let result = solar_position(&time, &location, &SurfaceOrientation::default());

        prop_assert!((0.0..360.0).contains(&result.heliocentric.longitude));
        prop_assert!(result.heliocentric.latitude.abs() < 0.01);
        prop_assert!((0.983..1.017).contains(&result.heliocentric.radius));
        prop_assert!((0.0..360.0).contains(&result.geocentric.right_ascension));
        prop_assert!(result.declination().abs() <= 23.5);
        prop_assert!((0.0..360.0).contains(&result.azimuth()));
        prop_assert!((-90.0..=90.0).contains(&result.elevation()));
        prop_assert!(result.topocentric.refraction_correction >= 0.0);
        prop_assert!((result.zenith() + result.elevation() - 90.0).abs() < 1e-9);
        prop_assert!(result.nutation.longitude.abs() < 0.006);
        prop_assert!(result.nutation.obliquity.abs() < 0.003);
    }

    #[test]
    fn single_constant_term_series_ignores_time(t in -10.0_f64..10.0) {
        const TERM: [PeriodicTerm; 1] = [PeriodicTerm::new(1.0, 0.0, 0.0)];
        let partial_sums = series::evaluate(&[&TERM], t);
        prop_assert_eq!(partial_sums, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        prop_assert_eq!(series::combine(&partial_sums, t), 1.0e-8);
    }

    #[test]
    fn refraction_never_lowers_the_sun(
        elevation in -5.0_f64..90.0,
        pressure in 50_000.0_f64..110_000.0,
        temperature in 230.0_f64..320.0,
    ) {
        let correction = geo::refraction_correction(pressure, temperature, elevation);
        if elevation < -(geo::SUN_RADIUS + geo::STANDARD_HORIZON_REFRACTION) {
            prop_assert_eq!(correction, 0.0);
        } else {
            prop_assert!(correction >= 0.0);
            prop_assert!(geo::zenith_angle(elevation, correction) <= 90.0 - elevation);
        }
    }
}

#[test]
fn series_combination_uses_every_power() {
    const GROUP: [PeriodicTerm; 1] = [PeriodicTerm::new(1.0e8, 0.0, 0.0)];
    let series: [&[PeriodicTerm]; 6] = [&GROUP; 6];
    // 1 + 2 + 4 + 8 + 16 + 32
    assert_eq!(series::evaluate_series(&series, 2.0), 63.0);
}

#[test]
fn missing_series_groups_are_zero() {
    const GROUP: [PeriodicTerm; 2] = [PeriodicTerm::new(3.0, 0.0, 0.0), PeriodicTerm::new(2.0, core::f64::consts::PI, 0.0)];
    let partial_sums = series::evaluate(&[&GROUP, &GROUP], 0.5);
    assert!((partial_sums[0] - 1.0).abs() < 1e-15);
    assert!((partial_sums[1] - 1.0).abs() < 1e-15);
    assert_eq!(&partial_sums[2..], &[0.0; 4]);
}

#[test]
fn polar_latitude_degrades_without_panicking() {
    let pole = ObserverLocation::with_atmosphere(90.0, 0.0, 0.0, 101_325.0, 288.15).unwrap();
    let time = TimeScale::from_datetime(&golden_datetime(), DeltaT::Seconds(67.0)).unwrap();
    let result = solar_position(&time, &pole, &SurfaceOrientation::default());
    // At the pole the elevation equals the declination seen from there
    assert!((result.topocentric.geometric_elevation - result.topocentric.declination).abs() < 1e-6);
    assert!(result.azimuth().is_nan() || (0.0..360.0).contains(&result.azimuth()));
}

#[test]
fn observer_location_rejects_out_of_range_values() {
    use crate::CalculationError::*;

    assert_eq!(ObserverLocation::new(90.5, 0.0, 0.0), Err(LatitudeOutOfRange));
    assert_eq!(ObserverLocation::new(f64::NAN, 0.0, 0.0), Err(LatitudeOutOfRange));
    assert_eq!(ObserverLocation::new(0.0, -180.5, 0.0), Err(LongitudeOutOfRange));
    assert_eq!(ObserverLocation::new(0.0, 0.0, 7.0e6), Err(ElevationOutOfRange));
    assert_eq!(
        ObserverLocation::with_atmosphere(0.0, 0.0, 0.0, 0.0, 288.15),
        Err(PressureOutOfRange)
    );
    assert_eq!(
        ObserverLocation::with_atmosphere(0.0, 0.0, 0.0, 101_325.0, -1.0),
        Err(TemperatureOutOfRange)
    );
    assert!(ObserverLocation::new(-90.0, 180.0, -400.0).is_ok());
}

#[test]
fn observer_location_defaults_to_standard_atmosphere() {
    let sea_level = ObserverLocation::new(0.0, 0.0, 0.0).unwrap();
    assert_eq!(sea_level.pressure(), crate::atmosphere::STANDARD_PRESSURE);
    assert_eq!(sea_level.temperature(), crate::atmosphere::STANDARD_TEMPERATURE);
}
