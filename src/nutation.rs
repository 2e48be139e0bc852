//! IAU 1980 nutation in longitude and obliquity.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::polynomial,
    tables::{FUNDAMENTAL_ARGUMENTS, NUTATION_COEFFICIENTS, NUTATION_MULTIPLIERS},
};

/// Table units are 0.0001″; 3600 × 10^4 of them make a degree.
const NUTATION_SCALE_FACTOR: f64 = 36_000_000.0;

/// The five Delaunay-style arguments driving the nutation series, in degrees.
///
/// Values are not wrapped; only their sines and cosines are ever used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FundamentalArguments {
    pub mean_elongation_moon: f64,
    pub mean_anomaly_sun: f64,
    pub mean_anomaly_moon: f64,
    pub argument_of_latitude_moon: f64,
    pub ascending_node_longitude_moon: f64,
}

impl FundamentalArguments {
    /// Evaluates the quartic polynomials at `julian_century` (TT).
    pub fn at(julian_century: f64) -> Self {
        let [d, m, m_prime, f, omega] = FUNDAMENTAL_ARGUMENTS.map(|coeffs| polynomial(&coeffs, julian_century));
        Self {
            mean_elongation_moon: d,
            mean_anomaly_sun: m,
            mean_anomaly_moon: m_prime,
            argument_of_latitude_moon: f,
            ascending_node_longitude_moon: omega,
        }
    }

    /// Arguments in the column order of the multiplier table.
    fn as_array(&self) -> [f64; 5] {
        [
            self.mean_elongation_moon,
            self.mean_anomaly_sun,
            self.mean_anomaly_moon,
            self.argument_of_latitude_moon,
            self.ascending_node_longitude_moon,
        ]
    }
}

/// Nutation of the Earth's axis, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude: f64,
    /// Δε
    pub obliquity: f64,
}

/// Nutation at `julian_century` (TT).
pub fn nutation(julian_century: f64) -> Nutation {
    let arguments = FundamentalArguments::at(julian_century).as_array();

    let mut sum_longitude = 0.0;
    let mut sum_obliquity = 0.0;
    for (multipliers, &[a, b, c, d]) in NUTATION_MULTIPLIERS.iter().zip(NUTATION_COEFFICIENTS.iter()) {
        let argument = multipliers
            .iter()
            .zip(arguments)
            .fold(0.0, |acc, (&multiplier, x)| acc + f64::from(multiplier) * x)
            .to_radians();
        sum_longitude += (a + b * julian_century) * argument.sin();
        sum_obliquity += (c + d * julian_century) * argument.cos();
    }

    Nutation {
        longitude: sum_longitude / NUTATION_SCALE_FACTOR,
        obliquity: sum_obliquity / NUTATION_SCALE_FACTOR,
    }
}
