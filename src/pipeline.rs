use crate::{
    geo,
    nutation::nutation,
    time::TimeScale,
    types::{
        GeocentricPosition, HeliocentricPosition, ObserverLocation, SiderealTime, SolarPositionResult,
        SurfaceOrientation, TopocentricPosition,
    },
};

/// Runs the full chain from heliocentric series to incidence angle.
///
/// Series, nutation and obliquity are evaluated in terrestrial time; the
/// sidereal angle follows the Earth's rotation and uses universal time. Nothing
/// here fails: degenerate geometry (the poles, for instance) shows up as NaN
/// or infinity in the affected fields.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use solar_position::{solar_position, DeltaT, ObserverLocation, SurfaceOrientation, TimeScale};
///
/// let date = FixedOffset::west_opt(7 * 3600)
///     .and_then(|tz| tz.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).single())
///     .unwrap();
/// let time = TimeScale::from_datetime(&date, DeltaT::Seconds(67.0)).unwrap();
/// let location = ObserverLocation::with_atmosphere(39.742476, -105.1786, 1830.14, 82_000.0, 284.15).unwrap();
///
/// let result = solar_position(&time, &location, &SurfaceOrientation::new(30.0, -10.0));
/// assert!((result.zenith() - 50.11162).abs() < 1e-4);
/// assert!((result.azimuth() - 194.34024).abs() < 1e-4);
/// ```
pub fn solar_position(
    time: &TimeScale,
    location: &ObserverLocation,
    surface: &SurfaceOrientation,
) -> SolarPositionResult {
    let julian_century = time.centuries();
    let julian_millennium = time.millennia();

    let heliocentric = HeliocentricPosition {
        longitude: geo::heliocentric_longitude(julian_millennium),
        latitude: geo::heliocentric_latitude(julian_millennium),
        radius: geo::heliocentric_radius(julian_millennium),
    };

    let longitude = geo::geocentric_longitude(heliocentric.longitude);
    let latitude = geo::geocentric_latitude(heliocentric.latitude);
    let nutation = nutation(julian_century);
    let mean_obliquity = geo::mean_obliquity(julian_century);
    let true_obliquity = geo::true_obliquity(mean_obliquity, nutation.obliquity);
    let aberration = geo::aberration_correction(heliocentric.radius);
    let apparent_longitude = geo::apparent_longitude(longitude, nutation.longitude, aberration);
    let geocentric = GeocentricPosition {
        longitude,
        latitude,
        mean_obliquity,
        true_obliquity,
        aberration,
        apparent_longitude,
        right_ascension: geo::right_ascension(apparent_longitude, true_obliquity, latitude),
        declination: geo::declination(apparent_longitude, true_obliquity, latitude),
    };

    let universal = time.universal();
    let mean_angle = geo::greenwich_mean_sidereal_angle(universal.days_since_j2000(), universal.centuries());
    let equation_of_equinoxes = geo::equation_of_equinoxes(nutation.longitude, true_obliquity);
    let apparent_angle = geo::greenwich_apparent_sidereal_angle(mean_angle, equation_of_equinoxes);
    let sidereal = SiderealTime {
        mean_angle,
        equation_of_equinoxes,
        apparent_angle,
        local_mean_angle: geo::local_angle(mean_angle, location.longitude()),
        local_apparent_angle: geo::local_angle(apparent_angle, location.longitude()),
    };

    let topocentric = topocentric_position(&geocentric, &sidereal, heliocentric.radius, location);
    let incidence_angle = geo::incidence_angle(
        topocentric.zenith,
        topocentric.azimuth - 180.0,
        surface.slope,
        surface.azimuth_rotation,
    );

    SolarPositionResult {
        heliocentric,
        geocentric,
        nutation,
        sidereal,
        topocentric,
        incidence_angle,
    }
}

fn topocentric_position(
    geocentric: &GeocentricPosition,
    sidereal: &SiderealTime,
    radius: f64,
    location: &ObserverLocation,
) -> TopocentricPosition {
    let greenwich_hour_angle = geo::hour_angle(sidereal.apparent_angle, geocentric.right_ascension);
    let local_hour_angle = geo::local_angle(greenwich_hour_angle, location.longitude());

    let equatorial_horizontal_parallax = geo::equatorial_horizontal_parallax(radius);
    let parallax = geo::parallax_correction(
        location.latitude(),
        location.elevation(),
        equatorial_horizontal_parallax,
        local_hour_angle,
        geocentric.declination,
    );
    let declination = parallax.topocentric_declination;
    let local_hour_angle_topocentric = local_hour_angle - parallax.right_ascension;

    let geometric_elevation = geo::topocentric_elevation(location.latitude(), declination, local_hour_angle_topocentric);
    let refraction_correction =
        geo::refraction_correction(location.pressure(), location.temperature(), geometric_elevation);
    let astronomical_azimuth = geo::astronomical_azimuth(local_hour_angle_topocentric, location.latitude(), declination);

    TopocentricPosition {
        greenwich_hour_angle,
        local_hour_angle,
        equatorial_horizontal_parallax,
        right_ascension_parallax: parallax.right_ascension,
        right_ascension: geocentric.right_ascension + parallax.right_ascension,
        declination,
        local_hour_angle_topocentric,
        geometric_elevation,
        refraction_correction,
        elevation: geometric_elevation + refraction_correction,
        zenith: geo::zenith_angle(geometric_elevation, refraction_correction),
        azimuth: geo::observer_azimuth(astronomical_azimuth),
    }
}
