#![allow(missing_docs, clippy::unwrap_used)]
use chrono::TimeZone;
use chrono_tz::America::Denver;
use solar_position::{
    tt_minus_utc, DeltaT, ObserverLocation, SolarCalculator, SolarEventResult, SurfaceOrientation,
};

fn describe(label: &str, event: SolarEventResult) {
    match event {
        SolarEventResult::Occurs(time) => {
            println!("{label}: {}", time.with_timezone(&Denver).format("%H:%M:%S %Z"));
        }
        SolarEventResult::AllDay => println!("{label}: sun never sets (midnight sun)"),
        SolarEventResult::AllNight => println!("{label}: sun never rises (polar night)"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // NREL's Solar Radiation Research Laboratory, Golden, Colorado
    let latitude = 39.742476;
    let longitude: f64 = -105.1786;
    let elevation = 1830.14; // meters above sea level

    let date = Denver
        .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
        .single()
        .ok_or("ambiguous local time")?;

    println!("Solar Position Example - Golden, CO");
    println!("Location: {:.5}°N, {:.5}°W", latitude, longitude.abs());
    println!("Date: {}", date.format("%B %d, %Y %H:%M:%S %Z"));
    println!("Elevation: {:.1} meters", elevation);
    println!("{:=<60}", "");

    let location = ObserverLocation::with_atmosphere(
        latitude,
        longitude,
        elevation,
        82_000.0, // pressure in pascals
        284.15,   // temperature in kelvin
    )?;
    // A collector tilted 30° and turned 10° east of south
    let panel = SurfaceOrientation::new(30.0, -10.0);
    let calc = SolarCalculator::new(&date, DeltaT::Seconds(67.0), location, panel)?;

    let result = calc.result();
    println!("Julian day: {:.6}", calc.time().instant().julian_day());
    println!("Heliocentric longitude: {:.6}°", result.heliocentric.longitude);
    println!("Heliocentric latitude: {:.6}°", result.heliocentric.latitude);
    println!("Earth radius vector: {:.6} AU", result.heliocentric.radius);
    println!("Nutation in longitude: {:.6}°", result.nutation.longitude);
    println!("Nutation in obliquity: {:.6}°", result.nutation.obliquity);
    println!("True obliquity: {:.6}°", result.geocentric.true_obliquity);
    println!("Apparent sidereal time: {:.6} h", result.sidereal.apparent_time());
    println!("Right ascension: {:.6}°", result.geocentric.right_ascension);
    println!("Declination: {:.6}°", result.geocentric.declination);
    println!();

    println!("Topocentric zenith: {:.5}°", calc.zenith());
    println!("Topocentric azimuth: {:.5}°", calc.azimuth());
    println!("Elevation angle: {:.5}°", calc.elevation());
    println!("Incidence on panel: {:.5}°", calc.incidence_angle());
    println!();

    let events = calc.sunrise_sunset()?;
    describe("Sunrise", events.sunrise);
    describe("Sunset", events.sunset);
    println!();

    // Same place and panel through the afternoon, with a leap-second estimate of ΔT
    println!("Afternoon track (ΔT = TT - UTC = {:.3} s):", tt_minus_utc(2003, 10));
    for hour in 13..=17 {
        let moment = Denver.with_ymd_and_hms(2003, 10, 17, hour, 0, 0).single().ok_or("ambiguous local time")?;
        let step = SolarCalculator::new(&moment, DeltaT::Seconds(tt_minus_utc(2003, 10)), location, panel)?;
        println!(
            "  {:02}:00  elevation {:6.2}°  azimuth {:6.2}°  incidence {:6.2}°",
            hour,
            step.elevation(),
            step.azimuth(),
            step.incidence_angle()
        );
    }

    Ok(())
}
