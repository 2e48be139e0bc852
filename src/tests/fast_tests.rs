//! Day-of-year estimates against fixed values and against the full chain.

use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use super::{any_utc_datetime, golden_datetime};
use crate::{fast, solar_position, DeltaT, ObserverLocation, SurfaceOrientation, TimeScale};

#[test]
fn sine_wave_declination_and_equation_of_time() {
    assert_eq!(fast::declination(81), 0.0);
    assert_abs_diff_eq!(fast::declination(172), 23.449_782_846_813_658, epsilon = 1e-12);
    assert_abs_diff_eq!(fast::declination(290), -10.330_165_493_019_093, epsilon = 1e-12);
    assert_eq!(fast::equation_of_time(81), -7.53);
    assert_abs_diff_eq!(fast::equation_of_time(290), 15.325_433_094_657_798, epsilon = 1e-12);
}

#[test]
fn golden_site_estimate() {
    let when = golden_datetime();
    let (latitude, longitude) = (39.742476, -105.1786);

    assert_abs_diff_eq!(fast::solar_time(&when, longitude), 12.743_517_218_244_296, epsilon = 1e-12);
    assert_abs_diff_eq!(fast::hour_angle(&when, longitude), 11.152_758_273_664_443, epsilon = 1e-10);
    assert_abs_diff_eq!(fast::altitude(&when, latitude, longitude), 38.868_129_710_725_92, epsilon = 1e-9);
    assert_abs_diff_eq!(fast::azimuth(&when, latitude, longitude), 194.146_546_918_800_45, epsilon = 1e-9);
}

#[test]
fn boston_winter_afternoon() {
    let (latitude, longitude) = (42.364908, -71.112828);
    let altitude = fast::altitude(&Utc.with_ymd_and_hms(2007, 2, 18, 20, 13, 1).unwrap(), latitude, longitude);
    let azimuth = fast::azimuth(&Utc.with_ymd_and_hms(2007, 2, 18, 20, 18, 0).unwrap(), latitude, longitude);

    assert_abs_diff_eq!(altitude, 19.565_815_206_101_77, epsilon = 1e-9);
    // South-west, about 52° past due south
    assert_abs_diff_eq!(azimuth, 232.030_013_895_970_3, epsilon = 1e-9);
}

#[test]
fn solar_longitudes() {
    assert_abs_diff_eq!(
        fast::mean_solar_longitude(0.037_927_819_922_933_585),
        205.897_172_252_520_48,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(fast::true_solar_longitude(24.018_261_691_679_3), 204.018_236_691_679_3, epsilon = 1e-9);
    assert_abs_diff_eq!(fast::true_solar_longitude(180.00001), 359.999_985, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn estimate_tracks_the_full_calculation(
        datetime in any_utc_datetime(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let time = TimeScale::from_datetime(&datetime, DeltaT::Seconds(69.0)).unwrap();
        let location = ObserverLocation::new(latitude, longitude, 0.0).unwrap();
        let precise = solar_position(&time, &location, &SurfaceOrientation::default()).topocentric;
        // Away from the horizon and the zenith, where azimuth is ill-conditioned
        prop_assume!((5.0..75.0).contains(&precise.geometric_elevation));

        let altitude = fast::altitude(&datetime, latitude, longitude);
        let azimuth = fast::azimuth(&datetime, latitude, longitude);
        let azimuth_error = ((azimuth - precise.azimuth + 540.0) % 360.0 - 180.0).abs();

        prop_assert!((altitude - precise.geometric_elevation).abs() < 2.0, "altitude {} vs {}", altitude, precise.geometric_elevation);
        prop_assert!(azimuth_error < 4.5, "azimuth {} vs {}", azimuth, precise.azimuth);
        prop_assert!((0.0..360.0).contains(&azimuth));
    }
}
