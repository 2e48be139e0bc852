//! Troposphere of the 1976 U.S. Standard Atmosphere, used to fill in pressure
//! and temperature when only an elevation is known.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::warn;

/// Sea-level pressure, Pa
pub const STANDARD_PRESSURE: f64 = 101_325.0;
/// Sea-level temperature, K
pub const STANDARD_TEMPERATURE: f64 = 288.15;
/// Temperature change with height, K/m
const TEMPERATURE_LAPSE_RATE: f64 = -0.0065;
/// Universal gas constant, J/(mol·K)
const AIR_GAS_CONSTANT: f64 = 8.31432;
/// m/s²
const EARTH_GRAVITY: f64 = 9.80665;
/// kg/mol
const AIR_MOLAR_MASS: f64 = 0.0289644;
/// Top of the layer the lapse-rate model describes, m
const TROPOPAUSE_ELEVATION: f64 = 11_000.0;

/// Air pressure in pascals at `elevation` meters.
pub fn pressure_at_elevation(elevation: f64) -> f64 {
    warn_above_troposphere(elevation);
    let exponent = EARTH_GRAVITY * AIR_MOLAR_MASS / (AIR_GAS_CONSTANT * TEMPERATURE_LAPSE_RATE);
    STANDARD_PRESSURE * (STANDARD_TEMPERATURE / (STANDARD_TEMPERATURE + TEMPERATURE_LAPSE_RATE * elevation)).powf(exponent)
}

/// Air temperature in kelvin at `elevation` meters.
pub fn temperature_at_elevation(elevation: f64) -> f64 {
    warn_above_troposphere(elevation);
    STANDARD_TEMPERATURE + TEMPERATURE_LAPSE_RATE * elevation
}

fn warn_above_troposphere(elevation: f64) {
    if elevation > TROPOPAUSE_ELEVATION {
        warn!(
            "elevation {} m is above the troposphere; standard-atmosphere values are extrapolated",
            elevation
        );
    }
}
