//! Stage functions of the solar position chain. Angles are in degrees throughout.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::{normalize_degrees_180, normalize_degrees_360, polynomial},
    series::evaluate_series,
    tables::{HELIOCENTRIC_LATITUDE, HELIOCENTRIC_LONGITUDE, HELIOCENTRIC_RADIUS},
};

// ============================================================================
// Constants
// ============================================================================

/// Angular radius of the Sun, degrees
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Refraction at the horizon under standard conditions, degrees
pub(crate) const STANDARD_HORIZON_REFRACTION: f64 = 0.5667;

/// Equatorial radius used for the observer's geocentric position, m
const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_140.0;

/// Polar-to-equatorial radius ratio, 1 − f
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Solar parallax at 1 AU, arc-seconds
const PARALLAX_CONSTANT: f64 = 8.794;

/// Aberration at 1 AU, degrees (20.4898″)
const ABERRATION_CONSTANT: f64 = 0.005_691_611;

/// Mean obliquity of the ecliptic, arc-seconds, in Julian centuries (TT)
const MEAN_OBLIQUITY_COEFFS: [f64; 6] = [
    84_381.406,
    -46.836_769,
    -0.000_183_1,
    0.002_003_40,
    -0.000_000_576,
    -0.000_000_043_4,
];

/// Mean sidereal angle at J2000.0, degrees
const GREENWICH_MEAN_SIDEREAL_ANGLE_BASE: f64 = 280.460_618_37;

/// Rotation of the Earth against the equinox, degrees per day
const SIDEREAL_ROTATION_RATE: f64 = 360.985_647_366_29;

/// Bennett's formula is calibrated for 1010 hPa
const REFRACTION_REFERENCE_PRESSURE_PA: f64 = 101_000.0;

/// Bennett's formula is calibrated for 10 °C
const REFRACTION_REFERENCE_TEMPERATURE_K: f64 = 283.0;

// ============================================================================
// Heliocentric and Geocentric Position
// ============================================================================

/// Earth's heliocentric longitude at `julian_millennium` (TT), in [0, 360).
pub(crate) fn heliocentric_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(evaluate_series(HELIOCENTRIC_LONGITUDE, julian_millennium).to_degrees())
}

/// Earth's heliocentric latitude at `julian_millennium` (TT), in [-180, 180).
///
/// Same angle modulo 360 as a [0, 360) wrap, kept signed so the geocentric
/// latitude is a small angle either side of the ecliptic.
pub(crate) fn heliocentric_latitude(julian_millennium: f64) -> f64 {
    normalize_degrees_180(evaluate_series(HELIOCENTRIC_LATITUDE, julian_millennium).to_degrees())
}

/// Sun–Earth distance in AU at `julian_millennium` (TT).
pub(crate) fn heliocentric_radius(julian_millennium: f64) -> f64 {
    evaluate_series(HELIOCENTRIC_RADIUS, julian_millennium)
}

/// The Sun's geocentric longitude lies opposite the Earth's heliocentric one.
pub(crate) fn geocentric_longitude(heliocentric_longitude: f64) -> f64 {
    normalize_degrees_360(heliocentric_longitude + 180.0)
}

pub(crate) fn geocentric_latitude(heliocentric_latitude: f64) -> f64 {
    -heliocentric_latitude
}

// ============================================================================
// Obliquity, Aberration and Apparent Longitude
// ============================================================================

/// Mean obliquity of the ecliptic in degrees at `julian_century` (TT).
pub(crate) fn mean_obliquity(julian_century: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_COEFFS, julian_century) / 3600.0
}

/// # Arguments
/// * `mean_obliquity` - degrees
/// * `nutation_obliquity` - Δε, degrees
pub(crate) fn true_obliquity(mean_obliquity: f64, nutation_obliquity: f64) -> f64 {
    mean_obliquity + nutation_obliquity
}

/// Annual aberration for a Sun–Earth distance of `radius` AU. Always negative.
pub(crate) fn aberration_correction(radius: f64) -> f64 {
    -ABERRATION_CONSTANT / radius
}

pub(crate) fn apparent_longitude(geocentric_longitude: f64, nutation_longitude: f64, aberration: f64) -> f64 {
    geocentric_longitude + nutation_longitude + aberration
}

// ============================================================================
// Equatorial Coordinates
// ============================================================================

/// Right ascension in [0, 360) from ecliptic coordinates.
///
/// # Arguments
/// * `apparent_longitude` - λ
/// * `true_obliquity` - ε
/// * `geocentric_latitude` - β
pub(crate) fn right_ascension(apparent_longitude: f64, true_obliquity: f64, geocentric_latitude: f64) -> f64 {
    let lambda = apparent_longitude.to_radians();
    let epsilon = true_obliquity.to_radians();
    let beta = geocentric_latitude.to_radians();

    normalize_degrees_360(
        (lambda.sin() * epsilon.cos() - beta.tan() * epsilon.sin())
            .atan2(lambda.cos())
            .to_degrees(),
    )
}

/// Declination from ecliptic coordinates; same arguments as [`right_ascension`].
pub(crate) fn declination(apparent_longitude: f64, true_obliquity: f64, geocentric_latitude: f64) -> f64 {
    let lambda = apparent_longitude.to_radians();
    let epsilon = true_obliquity.to_radians();
    let beta = geocentric_latitude.to_radians();

    (beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * lambda.sin())
        .asin()
        .to_degrees()
}

// ============================================================================
// Sidereal Time and Hour Angle
// ============================================================================

/// Greenwich mean sidereal angle in [0, 360).
///
/// # Arguments
/// * `days_since_j2000` - universal time
/// * `julian_century` - universal time
pub(crate) fn greenwich_mean_sidereal_angle(days_since_j2000: f64, julian_century: f64) -> f64 {
    normalize_degrees_360(
        GREENWICH_MEAN_SIDEREAL_ANGLE_BASE
            + SIDEREAL_ROTATION_RATE * days_since_j2000
            + julian_century * julian_century * (0.000_387_933 - julian_century / 38_710_000.0),
    )
}

/// Δψ cos ε: the gap between apparent and mean sidereal angle.
pub(crate) fn equation_of_equinoxes(nutation_longitude: f64, true_obliquity: f64) -> f64 {
    nutation_longitude * true_obliquity.to_radians().cos()
}

pub(crate) fn greenwich_apparent_sidereal_angle(mean_sidereal_angle: f64, equation_of_equinoxes: f64) -> f64 {
    normalize_degrees_360(mean_sidereal_angle + equation_of_equinoxes)
}

/// Shifts a Greenwich angle to the observer's meridian.
pub(crate) fn local_angle(greenwich_angle: f64, longitude: f64) -> f64 {
    normalize_degrees_360(greenwich_angle + longitude)
}

/// Westward angle from the meridian to the Sun's hour circle, in [0, 360).
pub(crate) fn hour_angle(sidereal_angle: f64, right_ascension: f64) -> f64 {
    normalize_degrees_360(sidereal_angle - right_ascension)
}

// ============================================================================
// Parallax and Topocentric Coordinates
// ============================================================================

/// ξ in degrees: 8.794″ at 1 AU, falling off as 1/R.
pub(crate) fn equatorial_horizontal_parallax(radius: f64) -> f64 {
    PARALLAX_CONSTANT / (3600.0 * radius)
}

/// Topocentric shifts caused by the observer sitting on the surface of an
/// oblate Earth instead of at its center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ParallaxCorrection {
    /// Δα, degrees
    pub(crate) right_ascension: f64,
    /// δ′, degrees
    pub(crate) topocentric_declination: f64,
}

/// # Arguments
/// * `latitude` - observer, degrees
/// * `elevation_meters` - observer height above the ellipsoid
/// * `equatorial_horizontal_parallax` - ξ, degrees
/// * `local_hour_angle` - H, degrees
/// * `declination` - geocentric δ, degrees
pub(crate) fn parallax_correction(
    latitude: f64,
    elevation_meters: f64,
    equatorial_horizontal_parallax: f64,
    local_hour_angle: f64,
    declination: f64,
) -> ParallaxCorrection {
    let phi = latitude.to_radians();
    let xi = equatorial_horizontal_parallax.to_radians();
    let hour = local_hour_angle.to_radians();
    let delta = declination.to_radians();

    let flattened_latitude = (EARTH_FLATTENING_FACTOR * phi.tan()).atan();
    let height = elevation_meters / EARTH_EQUATORIAL_RADIUS_METERS;
    let radial = flattened_latitude.cos() + height * phi.cos();
    let axial = EARTH_FLATTENING_FACTOR * flattened_latitude.sin() + height * phi.sin();

    let denominator = delta.cos() - radial * xi.sin() * hour.cos();
    let delta_alpha = (-radial * xi.sin() * hour.sin()).atan2(denominator);
    let topocentric_declination = ((delta.sin() - axial * xi.sin()) * delta_alpha.cos()).atan2(denominator);

    ParallaxCorrection {
        right_ascension: delta_alpha.to_degrees(),
        topocentric_declination: topocentric_declination.to_degrees(),
    }
}

/// Elevation of the Sun above the horizon, before refraction.
///
/// # Arguments
/// * `latitude` - φ
/// * `declination` - topocentric δ′
/// * `hour_angle` - topocentric H′
pub(crate) fn topocentric_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = latitude.to_radians();
    let delta = declination.to_radians();
    let hour = hour_angle.to_radians();

    (phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour.cos())
        .asin()
        .to_degrees()
}

// ============================================================================
// Atmospheric Refraction
// ============================================================================

/// Bennett's refraction, raising the Sun by the returned amount.
///
/// Zero once the whole disc is more than standard refraction below the horizon.
///
/// # Arguments
/// * `pressure` - Pa
/// * `temperature` - K
/// * `geometric_elevation` - degrees
pub(crate) fn refraction_correction(pressure: f64, temperature: f64, geometric_elevation: f64) -> f64 {
    if geometric_elevation < -(SUN_RADIUS + STANDARD_HORIZON_REFRACTION) {
        return 0.0;
    }
    (pressure / REFRACTION_REFERENCE_PRESSURE_PA) * (REFRACTION_REFERENCE_TEMPERATURE_K / temperature) * 1.02
        / (60.0
            * (geometric_elevation + 10.3 / (geometric_elevation + 5.11))
                .to_radians()
                .tan())
}

pub(crate) fn zenith_angle(geometric_elevation: f64, refraction: f64) -> f64 {
    90.0 - geometric_elevation - refraction
}

// ============================================================================
// Azimuth and Incidence
// ============================================================================

/// Azimuth measured westward from south, the form the incidence angle uses.
pub(crate) fn astronomical_azimuth(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    let hour = hour_angle.to_radians();
    let phi = latitude.to_radians();
    let delta = declination.to_radians();

    hour.sin()
        .atan2(hour.cos() * phi.sin() - delta.tan() * phi.cos())
        .to_degrees()
}

/// Navigational azimuth, eastward from north, in [0, 360).
pub(crate) fn observer_azimuth(astronomical_azimuth: f64) -> f64 {
    normalize_degrees_360(astronomical_azimuth + 180.0)
}

/// Angle between the Sun and the normal of a tilted surface.
///
/// # Arguments
/// * `zenith` - topocentric zenith angle
/// * `astronomical_azimuth` - Sun azimuth from south
/// * `surface_slope` - tilt from horizontal
/// * `surface_azimuth_rotation` - from south, negative east
pub(crate) fn incidence_angle(
    zenith: f64,
    astronomical_azimuth: f64,
    surface_slope: f64,
    surface_azimuth_rotation: f64,
) -> f64 {
    let zenith = zenith.to_radians();
    let slope = surface_slope.to_radians();
    let azimuth_difference = (astronomical_azimuth - surface_azimuth_rotation).to_radians();

    (zenith.cos() * slope.cos() + slope.sin() * zenith.sin() * azimuth_difference.cos())
        .acos()
        .to_degrees()
}
