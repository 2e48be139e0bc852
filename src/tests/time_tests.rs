//! Calendar conversion, ΔT lookup, leap seconds and the standard atmosphere.

use approx::assert_abs_diff_eq;
use chrono::{Datelike, FixedOffset, NaiveDate};
use proptest::prelude::*;

use crate::{
    julian_day_number, leap_seconds, lookup_delta_t, pressure_at_elevation, temperature_at_elevation, tt_minus_utc,
    CalculationError, DeltaT, Instant, TimeScale, J2000,
};

#[test]
fn julian_day_numbers() {
    assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    assert_eq!(julian_day_number(2003, 10, 17), 2_452_930);
    assert_eq!(julian_day_number(-4712, 1, 1), 0);
}

#[test]
fn gregorian_reform_has_no_gap_in_day_numbers() {
    // Thursday 4 October (Julian) was followed by Friday 15 October (Gregorian)
    assert_eq!(julian_day_number(1582, 10, 4), 2_299_160);
    assert_eq!(julian_day_number(1582, 10, 15), 2_299_161);
}

#[test]
fn midnight_and_noon_on_the_julian_axis() {
    let utc = FixedOffset::east_opt(0).unwrap();
    let midnight = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let noon = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();

    let start = Instant::from_naive(&midnight, utc, 0.0);
    assert_eq!(start.day(), 2_451_544.5);
    assert_eq!(start.fraction(), 0.0);
    assert_eq!(Instant::from_naive(&noon, utc, 0.0).julian_day(), J2000);
    assert_eq!(Instant::from_naive(&noon, utc, 0.0).centuries(), 0.0);
}

#[test]
fn utc_offset_moves_the_fraction_not_the_day() {
    let local = NaiveDate::from_ymd_opt(2003, 10, 17).unwrap().and_hms_opt(1, 0, 0).unwrap();
    let mst = FixedOffset::west_opt(7 * 3600).unwrap();
    let instant = Instant::from_naive(&local, mst, 0.0);

    assert_eq!(instant.day(), 2_452_929.5);
    assert_abs_diff_eq!(instant.fraction(), 8.0 / 24.0, epsilon = 1e-15);
}

#[test]
fn delta_t_is_folded_into_the_fraction() {
    let local = NaiveDate::from_ymd_opt(2003, 10, 17).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let utc = FixedOffset::east_opt(0).unwrap();
    let instant = Instant::from_naive(&local, utc, 86_400.0);

    assert_eq!(instant.day(), 2_452_929.5);
    assert_eq!(instant.fraction(), 1.0);
    assert_abs_diff_eq!(instant.offset_seconds(-43_200.0).fraction(), 0.5, epsilon = 1e-15);
}

#[test]
fn leap_second_lands_on_the_next_minute() {
    let utc = FixedOffset::east_opt(0).unwrap();
    let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 1_000)
        .unwrap();
    let next_day = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    assert_abs_diff_eq!(
        Instant::from_naive(&leap, utc, 0.0).julian_day(),
        Instant::from_naive(&next_day, utc, 0.0).julian_day(),
        epsilon = 1e-9
    );
}

#[test]
fn delta_t_table_lookup_clamps_at_both_ends() {
    assert_eq!(lookup_delta_t(1960, 5), 43.4724);
    assert_eq!(lookup_delta_t(1973, 1), 43.4724);
    assert_eq!(lookup_delta_t(1973, 2), 43.4724);
    assert_eq!(lookup_delta_t(1973, 3), 43.5648);
    assert_eq!(lookup_delta_t(2003, 10), 64.5415);
    assert_eq!(lookup_delta_t(2016, 12), 68.5537);
    assert_eq!(lookup_delta_t(2017, 1), 68.5928);
    assert_eq!(lookup_delta_t(2030, 6), 68.5928);
}

#[test]
fn delta_t_policies() {
    assert_eq!(DeltaT::default(), DeltaT::Lookup);
    assert_eq!(DeltaT::Lookup.resolve(2003, 10), 64.5415);
    assert_eq!(DeltaT::Seconds(0.0).resolve(2003, 10), 0.0);
    assert_eq!(DeltaT::from(67.0), DeltaT::Seconds(67.0));

    assert_eq!(DeltaT::Seconds(8000.0).validate(), Ok(DeltaT::Seconds(8000.0)));
    assert_eq!(DeltaT::Seconds(-8000.5).validate(), Err(CalculationError::DeltaTOutOfRange));
    assert_eq!(DeltaT::Seconds(f64::INFINITY).validate(), Err(CalculationError::DeltaTOutOfRange));
    assert!(DeltaT::Seconds(f64::NAN).validate().is_err());
    assert_eq!(DeltaT::Lookup.validate(), Ok(DeltaT::Lookup));
}

#[test]
fn time_scale_resolves_lookup_once() {
    let date = NaiveDate::from_ymd_opt(2003, 10, 17)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc();
    let time = TimeScale::from_datetime(&date, DeltaT::Lookup).unwrap();

    assert_eq!(time.delta_t(), 64.5415);
    assert_abs_diff_eq!(
        time.instant().julian_day() - time.universal().julian_day(),
        64.5415 / 86_400.0,
        epsilon = 1e-9
    );
    assert_eq!(
        TimeScale::from_datetime(&date, DeltaT::Seconds(9000.0)),
        Err(CalculationError::DeltaTOutOfRange)
    );
}

#[test]
fn leap_seconds_by_month() {
    assert_eq!(leap_seconds(1971, 12), 10);
    assert_eq!(leap_seconds(1972, 6), 10);
    assert_eq!(leap_seconds(1972, 7), 11);
    assert_eq!(leap_seconds(1973, 1), 12);
    assert_eq!(leap_seconds(2003, 10), 32);
    assert_eq!(leap_seconds(2012, 6), 34);
    assert_eq!(leap_seconds(2012, 7), 35);
    assert_eq!(leap_seconds(2016, 6), 36);
    assert_eq!(leap_seconds(2016, 7), 36);
    assert_eq!(leap_seconds(2016, 12), 36);
    assert_eq!(leap_seconds(2017, 1), 37);
    assert_eq!(leap_seconds(2025, 12), 37);
    assert_eq!(leap_seconds(2040, 3), 37);
}

#[test]
fn tt_minus_utc_adds_the_tai_offset() {
    assert_abs_diff_eq!(tt_minus_utc(2017, 1), 69.184, epsilon = 1e-12);
    assert_abs_diff_eq!(tt_minus_utc(2003, 10), 64.184, epsilon = 1e-12);
}

#[test]
fn standard_atmosphere() {
    assert_eq!(pressure_at_elevation(0.0), 101_325.0);
    assert_eq!(temperature_at_elevation(0.0), 288.15);
    assert_abs_diff_eq!(pressure_at_elevation(1567.7), 83_855.902_276_872_25, epsilon = 1e-6);
    assert_abs_diff_eq!(temperature_at_elevation(1567.7), 277.959_95, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn julian_day_numbers_are_consecutive(days in 0i64..200_000) {
        let date = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap() + chrono::Days::new(days as u64);
        let next = date.succ_opt().unwrap();
        prop_assert_eq!(
            julian_day_number(next.year(), next.month(), next.day()),
            julian_day_number(date.year(), date.month(), date.day()) + 1
        );
    }

    #[test]
    fn pressure_falls_with_height(low in -400.0_f64..10_000.0, rise in 1.0_f64..1000.0) {
        prop_assert!(pressure_at_elevation(low + rise) < pressure_at_elevation(low));
        prop_assert!(temperature_at_elevation(low + rise) < temperature_at_elevation(low));
    }

    #[test]
    fn table_lookup_stays_in_observed_range(year in 1900i32..2100, month in 1u32..=12) {
        let delta_t = lookup_delta_t(year, month);
        prop_assert!((43.4724..=68.5928).contains(&delta_t));
    }
}
