use crate::{
    atmosphere::{pressure_at_elevation, temperature_at_elevation},
    nutation::Nutation,
    CalculationError,
};

/// Upper bound on |elevation| in meters; roughly one Earth radius.
const MAX_ELEVATION_METERS: f64 = 6_500_000.0;
/// Upper bound on pressure in pascals.
const MAX_PRESSURE_PA: f64 = 500_000.0;
/// Upper bound on temperature in kelvin.
const MAX_TEMPERATURE_K: f64 = 6000.0;

/// Where the Sun is observed from, and the air it is observed through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    pressure: f64,
    temperature: f64,
}

impl ObserverLocation {
    /// Location with pressure and temperature from the standard atmosphere at
    /// `elevation`.
    ///
    /// # Arguments
    /// * `latitude` - degrees, positive north
    /// * `longitude` - degrees, positive east
    /// * `elevation` - meters above sea level
    ///
    /// # Errors
    /// Returns a [`CalculationError`] naming the first value out of range.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self, CalculationError> {
        Self::with_atmosphere(
            latitude,
            longitude,
            elevation,
            pressure_at_elevation(elevation),
            temperature_at_elevation(elevation),
        )
    }

    /// Location with explicit surface pressure (Pa) and temperature (K).
    ///
    /// # Errors
    /// Returns a [`CalculationError`] naming the first value out of range.
    pub fn with_atmosphere(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        pressure: f64,
        temperature: f64,
    ) -> Result<Self, CalculationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        if !(-MAX_ELEVATION_METERS..=MAX_ELEVATION_METERS).contains(&elevation) {
            return Err(CalculationError::ElevationOutOfRange);
        }
        if !(pressure > 0.0 && pressure <= MAX_PRESSURE_PA) {
            return Err(CalculationError::PressureOutOfRange);
        }
        if !(temperature > 0.0 && temperature <= MAX_TEMPERATURE_K) {
            return Err(CalculationError::TemperatureOutOfRange);
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
            pressure,
            temperature,
        })
    }

    /// Degrees, positive north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Degrees, positive east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Meters above sea level.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Pascals.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Orientation of a flat collector, for the incidence angle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceOrientation {
    /// Tilt from horizontal, degrees
    pub slope: f64,
    /// Rotation of the surface normal's projection from south, degrees, negative east
    pub azimuth_rotation: f64,
}

impl SurfaceOrientation {
    pub const fn new(slope: f64, azimuth_rotation: f64) -> Self {
        Self {
            slope,
            azimuth_rotation,
        }
    }
}

impl Default for SurfaceOrientation {
    /// Horizontal, facing south.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Earth's position seen from the Sun.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeliocentricPosition {
    /// Degrees, [0, 360)
    pub longitude: f64,
    /// Degrees, [-180, 180)
    pub latitude: f64,
    /// Sun–Earth distance, AU
    pub radius: f64,
}

/// The Sun seen from the Earth's center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeocentricPosition {
    /// Geometric ecliptic longitude, degrees
    pub longitude: f64,
    /// Ecliptic latitude, degrees
    pub latitude: f64,
    /// Mean obliquity of the ecliptic, degrees
    pub mean_obliquity: f64,
    /// Mean obliquity plus nutation in obliquity, degrees
    pub true_obliquity: f64,
    /// Aberration correction, degrees
    pub aberration: f64,
    /// Longitude with nutation and aberration applied, degrees
    pub apparent_longitude: f64,
    /// Degrees, [0, 360)
    pub right_ascension: f64,
    /// Degrees
    pub declination: f64,
}

/// Greenwich and local sidereal angles in degrees, [0, 360).
///
/// The `*_time` accessors give the same quantities in hours.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SiderealTime {
    pub mean_angle: f64,
    /// Δψ cos ε, degrees
    pub equation_of_equinoxes: f64,
    pub apparent_angle: f64,
    pub local_mean_angle: f64,
    pub local_apparent_angle: f64,
}

impl SiderealTime {
    pub fn mean_time(&self) -> f64 {
        self.mean_angle / 15.0
    }

    pub fn apparent_time(&self) -> f64 {
        self.apparent_angle / 15.0
    }

    pub fn local_mean_time(&self) -> f64 {
        self.local_mean_angle / 15.0
    }

    pub fn local_apparent_time(&self) -> f64 {
        self.local_apparent_angle / 15.0
    }
}

/// The Sun seen from the observer. All angles in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TopocentricPosition {
    /// Apparent sidereal angle minus right ascension
    pub greenwich_hour_angle: f64,
    /// Greenwich hour angle plus observer longitude, [0, 360)
    pub local_hour_angle: f64,
    pub equatorial_horizontal_parallax: f64,
    pub right_ascension_parallax: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub local_hour_angle_topocentric: f64,
    /// Elevation before refraction
    pub geometric_elevation: f64,
    pub refraction_correction: f64,
    /// Geometric elevation plus refraction
    pub elevation: f64,
    pub zenith: f64,
    /// Eastward from north, [0, 360)
    pub azimuth: f64,
}

/// Every stage output of one solar position calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarPositionResult {
    pub heliocentric: HeliocentricPosition,
    pub geocentric: GeocentricPosition,
    pub nutation: Nutation,
    pub sidereal: SiderealTime,
    pub topocentric: TopocentricPosition,
    /// Angle between the Sun and the surface normal, degrees
    pub incidence_angle: f64,
}

impl SolarPositionResult {
    /// Apparent (refracted) topocentric elevation, degrees.
    pub fn elevation(&self) -> f64 {
        self.topocentric.elevation
    }

    /// Topocentric zenith angle, degrees.
    pub fn zenith(&self) -> f64 {
        self.topocentric.zenith
    }

    /// Topocentric azimuth, degrees eastward from north.
    pub fn azimuth(&self) -> f64 {
        self.topocentric.azimuth
    }

    /// Geocentric declination, degrees.
    pub fn declination(&self) -> f64 {
        self.geocentric.declination
    }
}
