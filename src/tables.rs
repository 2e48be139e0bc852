//! Constant tables for the heliocentric series, nutation and time-scale corrections.
//!
//! The Earth series are the VSOP87 terms reduced for the NREL solar position
//! algorithm (Reda & Andreas, 2008, table A4.2). Each term is `A cos(B + C t)`
//! with `t` in Julian ephemeris millennia.

use crate::series::PeriodicTerm;

/// Earth heliocentric longitude, radians ×1e8.
pub(crate) const HELIOCENTRIC_LONGITUDE: &[&[PeriodicTerm]] = &[&L0, &L1, &L2, &L3, &L4, &L5];

/// Earth heliocentric latitude, radians ×1e8.
pub(crate) const HELIOCENTRIC_LATITUDE: &[&[PeriodicTerm]] = &[&B0, &B1];

/// Earth radius vector, AU ×1e8.
pub(crate) const HELIOCENTRIC_RADIUS: &[&[PeriodicTerm]] = &[&R0, &R1, &R2, &R3, &R4];

const L0: [PeriodicTerm; 64] = [
    PeriodicTerm::new(175347046.0, 0.0, 0.0),
    PeriodicTerm::new(3341656.0, 4.6692568, 6283.07585),
    PeriodicTerm::new(34894.0, 4.6261, 12566.1517),
    PeriodicTerm::new(3497.0, 2.7441, 5753.3849),
    PeriodicTerm::new(3418.0, 2.8289, 3.5231),
    PeriodicTerm::new(3136.0, 3.6277, 77713.7715),
    PeriodicTerm::new(2676.0, 4.4181, 7860.4194),
    PeriodicTerm::new(2343.0, 6.1352, 3930.2097),
    PeriodicTerm::new(1324.0, 0.7425, 11506.7698),
    PeriodicTerm::new(1273.0, 2.0371, 529.691),
    PeriodicTerm::new(1199.0, 1.1096, 1577.3435),
    PeriodicTerm::new(990.0, 5.233, 5884.927),
    PeriodicTerm::new(902.0, 2.045, 26.298),
    PeriodicTerm::new(857.0, 3.508, 398.149),
    PeriodicTerm::new(780.0, 1.179, 5223.694),
    PeriodicTerm::new(753.0, 2.533, 5507.553),
    PeriodicTerm::new(505.0, 4.583, 18849.228),
    PeriodicTerm::new(492.0, 4.205, 775.523),
    PeriodicTerm::new(357.0, 2.92, 0.067),
    PeriodicTerm::new(317.0, 5.849, 11790.629),
    PeriodicTerm::new(284.0, 1.899, 796.298),
    PeriodicTerm::new(271.0, 0.315, 10977.079),
    PeriodicTerm::new(243.0, 0.345, 5486.778),
    PeriodicTerm::new(206.0, 4.806, 2544.314),
    PeriodicTerm::new(205.0, 1.869, 5573.143),
    PeriodicTerm::new(202.0, 2.458, 6069.777),
    PeriodicTerm::new(156.0, 0.833, 213.299),
    PeriodicTerm::new(132.0, 3.411, 2942.463),
    PeriodicTerm::new(126.0, 1.083, 20.775),
    PeriodicTerm::new(115.0, 0.645, 0.98),
    PeriodicTerm::new(103.0, 0.636, 4694.003),
    PeriodicTerm::new(102.0, 0.976, 15720.839),
    PeriodicTerm::new(102.0, 4.267, 7.114),
    PeriodicTerm::new(99.0, 6.21, 2146.17),
    PeriodicTerm::new(98.0, 0.68, 155.42),
    PeriodicTerm::new(86.0, 5.98, 161000.69),
    PeriodicTerm::new(85.0, 1.3, 6275.96),
    PeriodicTerm::new(85.0, 3.67, 71430.7),
    PeriodicTerm::new(80.0, 1.81, 17260.15),
    PeriodicTerm::new(79.0, 3.04, 12036.46),
    PeriodicTerm::new(75.0, 1.76, 5088.63),
    PeriodicTerm::new(74.0, 3.5, 3154.69),
    PeriodicTerm::new(74.0, 4.68, 801.82),
    PeriodicTerm::new(70.0, 0.83, 9437.76),
    PeriodicTerm::new(62.0, 3.98, 8827.39),
    PeriodicTerm::new(61.0, 1.82, 7084.9),
    PeriodicTerm::new(57.0, 2.78, 6286.6),
    PeriodicTerm::new(56.0, 4.39, 14143.5),
    PeriodicTerm::new(56.0, 3.47, 6279.55),
    PeriodicTerm::new(52.0, 0.19, 12139.55),
    PeriodicTerm::new(52.0, 1.33, 1748.02),
    PeriodicTerm::new(51.0, 0.28, 5856.48),
    PeriodicTerm::new(49.0, 0.49, 1194.45),
    PeriodicTerm::new(41.0, 5.37, 8429.24),
    PeriodicTerm::new(41.0, 2.4, 19651.05),
    PeriodicTerm::new(39.0, 6.17, 10447.39),
    PeriodicTerm::new(37.0, 6.04, 10213.29),
    PeriodicTerm::new(37.0, 2.57, 1059.38),
    PeriodicTerm::new(36.0, 1.71, 2352.87),
    PeriodicTerm::new(36.0, 1.78, 6812.77),
    PeriodicTerm::new(33.0, 0.59, 17789.85),
    PeriodicTerm::new(30.0, 0.44, 83996.85),
    PeriodicTerm::new(30.0, 2.74, 1349.87),
    PeriodicTerm::new(25.0, 3.16, 4690.48),
];

const L1: [PeriodicTerm; 34] = [
    PeriodicTerm::new(628331966747.0, 0.0, 0.0),
    PeriodicTerm::new(206059.0, 2.678235, 6283.07585),
    PeriodicTerm::new(4303.0, 2.6351, 12566.1517),
    PeriodicTerm::new(425.0, 1.59, 3.523),
    PeriodicTerm::new(119.0, 5.796, 26.298),
    PeriodicTerm::new(109.0, 2.966, 1577.344),
    PeriodicTerm::new(93.0, 2.59, 18849.23),
    PeriodicTerm::new(72.0, 1.14, 529.69),
    PeriodicTerm::new(68.0, 1.87, 398.15),
    PeriodicTerm::new(67.0, 4.41, 5507.55),
    PeriodicTerm::new(59.0, 2.89, 5223.69),
    PeriodicTerm::new(56.0, 2.17, 155.42),
    PeriodicTerm::new(45.0, 0.4, 796.3),
    PeriodicTerm::new(36.0, 0.47, 775.52),
    PeriodicTerm::new(29.0, 2.65, 7.11),
    PeriodicTerm::new(21.0, 5.34, 0.98),
    PeriodicTerm::new(19.0, 1.85, 5486.78),
    PeriodicTerm::new(19.0, 4.97, 213.3),
    PeriodicTerm::new(17.0, 2.99, 6275.96),
    PeriodicTerm::new(16.0, 0.03, 2544.31),
    PeriodicTerm::new(16.0, 1.43, 2146.17),
    PeriodicTerm::new(15.0, 1.21, 10977.08),
    PeriodicTerm::new(12.0, 2.83, 1748.02),
    PeriodicTerm::new(12.0, 3.26, 5088.63),
    PeriodicTerm::new(12.0, 5.27, 1194.45),
    PeriodicTerm::new(12.0, 2.08, 4694.0),
    PeriodicTerm::new(11.0, 0.77, 553.57),
    PeriodicTerm::new(10.0, 1.3, 6286.6),
    PeriodicTerm::new(10.0, 4.24, 1349.87),
    PeriodicTerm::new(9.0, 2.7, 242.73),
    PeriodicTerm::new(9.0, 5.64, 951.72),
    PeriodicTerm::new(8.0, 5.3, 2352.87),
    PeriodicTerm::new(6.0, 2.65, 9437.76),
    PeriodicTerm::new(6.0, 4.67, 4690.48),
];

const L2: [PeriodicTerm; 20] = [
    PeriodicTerm::new(52919.0, 0.0, 0.0),
    PeriodicTerm::new(8720.0, 1.0721, 6283.0758),
    PeriodicTerm::new(309.0, 0.867, 12566.152),
    PeriodicTerm::new(27.0, 0.05, 3.52),
    PeriodicTerm::new(16.0, 5.19, 26.3),
    PeriodicTerm::new(16.0, 3.68, 155.42),
    PeriodicTerm::new(10.0, 0.76, 18849.23),
    PeriodicTerm::new(9.0, 2.06, 77713.77),
    PeriodicTerm::new(7.0, 0.83, 775.52),
    PeriodicTerm::new(5.0, 4.66, 1577.34),
    PeriodicTerm::new(4.0, 1.03, 7.11),
    PeriodicTerm::new(4.0, 3.44, 5573.14),
    PeriodicTerm::new(3.0, 5.14, 796.3),
    PeriodicTerm::new(3.0, 6.05, 5507.55),
    PeriodicTerm::new(3.0, 1.19, 242.73),
    PeriodicTerm::new(3.0, 6.12, 529.69),
    PeriodicTerm::new(3.0, 0.31, 398.15),
    PeriodicTerm::new(3.0, 2.28, 553.57),
    PeriodicTerm::new(2.0, 4.38, 5223.69),
    PeriodicTerm::new(2.0, 3.75, 0.98),
];

const L3: [PeriodicTerm; 7] = [
    PeriodicTerm::new(289.0, 5.844, 6283.076),
    PeriodicTerm::new(35.0, 0.0, 0.0),
    PeriodicTerm::new(17.0, 5.49, 12566.15),
    PeriodicTerm::new(3.0, 5.2, 155.42),
    PeriodicTerm::new(1.0, 4.72, 3.52),
    PeriodicTerm::new(1.0, 5.3, 18849.23),
    PeriodicTerm::new(1.0, 5.97, 242.73),
];

const L4: [PeriodicTerm; 3] = [
    PeriodicTerm::new(114.0, 3.142, 0.0),
    PeriodicTerm::new(8.0, 4.13, 6283.08),
    PeriodicTerm::new(1.0, 3.84, 12566.15),
];

const L5: [PeriodicTerm; 1] = [
    PeriodicTerm::new(1.0, 3.14, 0.0),
];

const B0: [PeriodicTerm; 5] = [
    PeriodicTerm::new(280.0, 3.199, 84334.662),
    PeriodicTerm::new(102.0, 5.422, 5507.553),
    PeriodicTerm::new(80.0, 3.88, 5223.69),
    PeriodicTerm::new(44.0, 3.7, 2352.87),
    PeriodicTerm::new(32.0, 4.0, 1577.34),
];

const B1: [PeriodicTerm; 2] = [
    PeriodicTerm::new(9.0, 3.9, 5507.55),
    PeriodicTerm::new(6.0, 1.73, 5223.69),
];

const R0: [PeriodicTerm; 40] = [
    PeriodicTerm::new(100013989.0, 0.0, 0.0),
    PeriodicTerm::new(1670700.0, 3.0984635, 6283.07585),
    PeriodicTerm::new(13956.0, 3.05525, 12566.1517),
    PeriodicTerm::new(3084.0, 5.1985, 77713.7715),
    PeriodicTerm::new(1628.0, 1.1739, 5753.3849),
    PeriodicTerm::new(1576.0, 2.8469, 7860.4194),
    PeriodicTerm::new(925.0, 5.453, 11506.77),
    PeriodicTerm::new(542.0, 4.564, 3930.21),
    PeriodicTerm::new(472.0, 3.661, 5884.927),
    PeriodicTerm::new(346.0, 0.964, 5507.553),
    PeriodicTerm::new(329.0, 5.9, 5223.694),
    PeriodicTerm::new(307.0, 0.299, 5573.143),
    PeriodicTerm::new(243.0, 4.273, 11790.629),
    PeriodicTerm::new(212.0, 5.847, 1577.344),
    PeriodicTerm::new(186.0, 5.022, 10977.079),
    PeriodicTerm::new(175.0, 3.012, 18849.228),
    PeriodicTerm::new(110.0, 5.055, 5486.778),
    PeriodicTerm::new(98.0, 0.89, 6069.78),
    PeriodicTerm::new(86.0, 5.69, 15720.84),
    PeriodicTerm::new(86.0, 1.27, 161000.69),
    PeriodicTerm::new(65.0, 0.27, 17260.15),
    PeriodicTerm::new(63.0, 0.92, 529.69),
    PeriodicTerm::new(57.0, 2.01, 83996.85),
    PeriodicTerm::new(56.0, 5.24, 71430.7),
    PeriodicTerm::new(49.0, 3.25, 2544.31),
    PeriodicTerm::new(47.0, 2.58, 775.52),
    PeriodicTerm::new(45.0, 5.54, 9437.76),
    PeriodicTerm::new(43.0, 6.01, 6275.96),
    PeriodicTerm::new(39.0, 5.36, 4694.0),
    PeriodicTerm::new(38.0, 2.39, 8827.39),
    PeriodicTerm::new(37.0, 0.83, 19651.05),
    PeriodicTerm::new(37.0, 4.9, 12139.55),
    PeriodicTerm::new(36.0, 1.67, 12036.46),
    PeriodicTerm::new(35.0, 1.84, 2942.46),
    PeriodicTerm::new(33.0, 0.24, 7084.9),
    PeriodicTerm::new(32.0, 0.18, 5088.63),
    PeriodicTerm::new(32.0, 1.78, 398.15),
    PeriodicTerm::new(28.0, 1.21, 6286.6),
    PeriodicTerm::new(28.0, 1.9, 6279.55),
    PeriodicTerm::new(26.0, 4.59, 10447.39),
];

const R1: [PeriodicTerm; 10] = [
    PeriodicTerm::new(103019.0, 1.10749, 6283.07585),
    PeriodicTerm::new(1721.0, 1.0644, 12566.1517),
    PeriodicTerm::new(702.0, 3.142, 0.0),
    PeriodicTerm::new(32.0, 1.02, 18849.23),
    PeriodicTerm::new(31.0, 2.84, 5507.55),
    PeriodicTerm::new(25.0, 1.32, 5223.69),
    PeriodicTerm::new(18.0, 1.42, 1577.34),
    PeriodicTerm::new(10.0, 5.91, 10977.08),
    PeriodicTerm::new(9.0, 1.42, 6275.96),
    PeriodicTerm::new(9.0, 0.27, 5486.78),
];

const R2: [PeriodicTerm; 6] = [
    PeriodicTerm::new(4359.0, 5.7846, 6283.0758),
    PeriodicTerm::new(124.0, 5.579, 12566.152),
    PeriodicTerm::new(12.0, 3.14, 0.0),
    PeriodicTerm::new(9.0, 3.63, 77713.77),
    PeriodicTerm::new(6.0, 1.87, 5573.14),
    PeriodicTerm::new(3.0, 5.47, 18849.23),
];

const R3: [PeriodicTerm; 2] = [
    PeriodicTerm::new(145.0, 4.273, 6283.076),
    PeriodicTerm::new(7.0, 3.92, 12566.15),
];

const R4: [PeriodicTerm; 1] = [
    PeriodicTerm::new(4.0, 2.56, 6283.08),
];

/// Quartic coefficients `[c0, c1, c2, c3, c4]` (degrees, Julian centuries) of the
/// five fundamental arguments, in the column order of [`NUTATION_MULTIPLIERS`].
pub(crate) const FUNDAMENTAL_ARGUMENTS: [[f64; 5]; 5] = [
    // Mean elongation of the Moon from the Sun
    [297.8501955, 445267.1114469445, -0.0017696, 1.831389e-06, 8.802778e-09],
    // Mean anomaly of the Sun
    [357.52911, 35999.05029, -0.0001537, 3.778e-08, -3.191667e-09],
    // Mean anomaly of the Moon
    [134.96340251, 477198.8675605, 0.008855333, 1.43430556e-05, -6.797222e-08],
    // Argument of latitude of the Moon
    [93.272091, 483202.0174577, -0.003542, -2.880555e-07, 1.158333e-09],
    // Longitude of the Moon's ascending node
    [125.044555, -1934.136262, 0.0020756, 2.139444e-06, 1.649722e-08],
];

/// Integer multipliers of the fundamental arguments for each nutation term.
pub(crate) const NUTATION_MULTIPLIERS: [[i8; 5]; 63] = [
    [0, 0, 0, 0, 1],
    [-2, 0, 0, 2, 2],
    [0, 0, 0, 2, 2],
    [0, 0, 0, 0, 2],
    [0, 1, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [-2, 1, 0, 2, 2],
    [0, 0, 0, 2, 1],
    [0, 0, 1, 2, 2],
    [-2, -1, 0, 2, 2],
    [-2, 0, 1, 0, 0],
    [-2, 0, 0, 2, 1],
    [0, 0, -1, 2, 2],
    [2, 0, 0, 0, 0],
    [0, 0, 1, 0, 1],
    [2, 0, -1, 2, 2],
    [0, 0, -1, 0, 1],
    [0, 0, 1, 2, 1],
    [-2, 0, 2, 0, 0],
    [0, 0, -2, 2, 1],
    [2, 0, 0, 2, 2],
    [0, 0, 2, 2, 2],
    [0, 0, 2, 0, 0],
    [-2, 0, 1, 2, 2],
    [0, 0, 0, 2, 0],
    [-2, 0, 0, 2, 0],
    [0, 0, -1, 2, 1],
    [0, 2, 0, 0, 0],
    [2, 0, -1, 0, 1],
    [-2, 2, 0, 2, 2],
    [0, 1, 0, 0, 1],
    [-2, 0, 1, 0, 1],
    [0, -1, 0, 0, 1],
    [0, 0, 2, -2, 0],
    [2, 0, -1, 2, 1],
    [2, 0, 1, 2, 2],
    [0, 1, 0, 2, 2],
    [-2, 1, 1, 0, 0],
    [0, -1, 0, 2, 2],
    [2, 0, 0, 2, 1],
    [2, 0, 1, 0, 0],
    [-2, 0, 2, 2, 2],
    [-2, 0, 1, 2, 1],
    [2, 0, -2, 0, 1],
    [2, 0, 0, 0, 1],
    [0, -1, 1, 0, 0],
    [-2, -1, 0, 2, 1],
    [-2, 0, 0, 0, 1],
    [0, 0, 2, 2, 1],
    [-2, 0, 2, 0, 1],
    [-2, 1, 0, 2, 1],
    [0, 0, 1, -2, 0],
    [-1, 0, 1, 0, 0],
    [-2, 1, 0, 0, 0],
    [1, 0, 0, 0, 0],
    [0, 0, 1, 2, 0],
    [0, 0, -2, 2, 2],
    [-1, -1, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, -1, 1, 2, 2],
    [2, -1, -1, 2, 2],
    [0, 0, 3, 2, 2],
    [2, -1, 0, 2, 2],
];

/// `[a, b, c, d]` per nutation term: `Δψ += (a + b T) sin`, `Δε += (c + d T) cos`,
/// in units of 0.0001 arc-second.
pub(crate) const NUTATION_COEFFICIENTS: [[f64; 4]; 63] = [
    [-171996.0, -174.2, 92025.0, 8.9],
    [-13187.0, -1.6, 5736.0, -3.1],
    [-2274.0, -0.2, 977.0, -0.5],
    [2062.0, 0.2, -895.0, 0.5],
    [1426.0, -3.4, 54.0, -0.1],
    [712.0, 0.1, -7.0, 0.0],
    [-517.0, 1.2, 224.0, -0.6],
    [-386.0, -0.4, 200.0, 0.0],
    [-301.0, 0.0, 129.0, -0.1],
    [217.0, -0.5, -95.0, 0.3],
    [-158.0, 0.0, 0.0, 0.0],
    [129.0, 0.1, -70.0, 0.0],
    [123.0, 0.0, -53.0, 0.0],
    [63.0, 0.0, 0.0, 0.0],
    [63.0, 0.1, -33.0, 0.0],
    [-59.0, 0.0, 26.0, 0.0],
    [-58.0, -0.1, 32.0, 0.0],
    [-51.0, 0.0, 27.0, 0.0],
    [48.0, 0.0, 0.0, 0.0],
    [46.0, 0.0, -24.0, 0.0],
    [-38.0, 0.0, 16.0, 0.0],
    [-31.0, 0.0, 13.0, 0.0],
    [29.0, 0.0, 0.0, 0.0],
    [29.0, 0.0, -12.0, 0.0],
    [26.0, 0.0, 0.0, 0.0],
    [-22.0, 0.0, 0.0, 0.0],
    [21.0, 0.0, -10.0, 0.0],
    [17.0, -0.1, 0.0, 0.0],
    [16.0, 0.0, -8.0, 0.0],
    [-16.0, 0.1, 7.0, 0.0],
    [-15.0, 0.0, 9.0, 0.0],
    [-13.0, 0.0, 7.0, 0.0],
    [-12.0, 0.0, 6.0, 0.0],
    [11.0, 0.0, 0.0, 0.0],
    [-10.0, 0.0, 5.0, 0.0],
    [-8.0, 0.0, 3.0, 0.0],
    [7.0, 0.0, -3.0, 0.0],
    [-7.0, 0.0, 0.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [6.0, 0.0, 0.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [5.0, 0.0, 0.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
];

/// First year covered by [`DELTA_T_TABLE`].
pub(crate) const DELTA_T_BASE_YEAR: i32 = 1973;
/// First month covered by [`DELTA_T_TABLE`].
pub(crate) const DELTA_T_BASE_MONTH: u32 = 2;

/// Observed monthly ΔT (TT − UT1) in seconds, from 1973-02 to 2017-01 (IERS).
pub(crate) const DELTA_T_TABLE: [f64; 528] = [
    // 1973
    43.4724, 43.5648, 43.6737, 43.7782, 43.8763, 43.9562,
    44.0315, 44.1132, 44.1982, 44.2952, 44.3936,
    // 1974
    44.4841, 44.5646, 44.6425, 44.7386, 44.837, 44.9302,
    44.9986, 45.0584, 45.1284, 45.2064, 45.298, 45.3897,
    // 1975
    45.4761, 45.5633, 45.645, 45.7375, 45.8284, 45.9133,
    45.982, 46.0408, 46.1067, 46.1825, 46.2789, 46.3713,
    // 1976
    46.4567, 46.5445, 46.6311, 46.7302, 46.8284, 46.9247,
    46.997, 47.0709, 47.1451, 47.2362, 47.3413, 47.4319,
    // 1977
    47.5214, 47.6049, 47.6837, 47.7781, 47.8771, 47.9687,
    48.0348, 48.0942, 48.1608, 48.246, 48.3439, 48.4355,
    // 1978
    48.5344, 48.6325, 48.7294, 48.8365, 48.9353, 49.0319,
    49.1013, 49.1591, 49.2286, 49.307, 49.4018, 49.4945,
    // 1979
    49.5862, 49.6805, 49.7602, 49.8556, 49.9489, 50.0347,
    50.1019, 50.1622, 50.226, 50.2968, 50.3831, 50.4599,
    // 1980
    50.5387, 50.6161, 50.6866, 50.7658, 50.8454, 50.9187,
    50.9761, 51.0278, 51.0843, 51.1538, 51.2319, 51.3063,
    // 1981
    51.3808, 51.4526, 51.516, 51.5985, 51.6809, 51.7573,
    51.8133, 51.8532, 51.9014, 51.9603, 52.0328, 52.0985,
    // 1982
    52.1668, 52.2316, 52.2938, 52.368, 52.4465, 52.518,
    52.5752, 52.6178, 52.6668, 52.734, 52.8056, 52.8792,
    // 1983
    52.9565, 53.0445, 53.1268, 53.2197, 53.3024, 53.3747,
    53.4335, 53.4778, 53.53, 53.5845, 53.6523, 53.7256,
    // 1984
    53.7882, 53.8367, 53.883, 53.9443, 54.0042, 54.0536,
    54.0856, 54.1084, 54.1463, 54.1914, 54.2452, 54.2958,
    // 1985
    54.3427, 54.3911, 54.432, 54.4898, 54.5456, 54.5977,
    54.6355, 54.6532, 54.6776, 54.7174, 54.7741, 54.8253,
    // 1986
    54.8713, 54.9161, 54.9581, 54.9997, 55.0476, 55.0912,
    55.1132, 55.1328, 55.1532, 55.1898, 55.2416, 55.2838,
    // 1987
    55.3222, 55.3613, 55.4063, 55.4629, 55.5111, 55.5524,
    55.5812, 55.6004, 55.6262, 55.6656, 55.7168, 55.7698,
    // 1988
    55.8197, 55.8615, 55.913, 55.9663, 56.022, 56.07,
    56.0939, 56.1105, 56.1314, 56.1611, 56.2068, 56.2583,
    // 1989
    56.3, 56.3399, 56.379, 56.4283, 56.4804, 56.5352,
    56.5697, 56.5983, 56.6328, 56.6739, 56.7332, 56.7972,
    // 1990
    56.8553, 56.9111, 56.9755, 57.0471, 57.1136, 57.1738,
    57.2226, 57.2597, 57.3073, 57.3643, 57.4334, 57.5016,
    // 1991
    57.5653, 57.6333, 57.6973, 57.7711, 57.8407, 57.9058,
    57.9576, 57.9975, 58.0426, 58.1043, 58.1679, 58.2389,
    // 1992
    58.3092, 58.3833, 58.4537, 58.5401, 58.6228, 58.6917,
    58.741, 58.7836, 58.8406, 58.8986, 58.9714, 59.0438,
    // 1993
    59.1218, 59.2003, 59.2747, 59.3574, 59.4434, 59.5242,
    59.585, 59.6344, 59.6928, 59.7588, 59.8386, 59.9111,
    // 1994
    59.9845, 60.0564, 60.1231, 60.2042, 60.2804, 60.353,
    60.4012, 60.444, 60.49, 60.5578, 60.6324, 60.7059,
    // 1995
    60.7853, 60.8664, 60.9387, 61.0277, 61.1103, 61.187,
    61.2454, 61.2881, 61.3378, 61.4036, 61.476, 61.5525,
    // 1996
    61.6287, 61.6846, 61.7433, 61.8132, 61.8823, 61.9497,
    61.9969, 62.0343, 62.0714, 62.1202, 62.181, 62.2382,
    // 1997
    62.295, 62.3506, 62.3995, 62.4754, 62.5463, 62.6136,
    62.6571, 62.6942, 62.7383, 62.7926, 62.8567, 62.9146,
    // 1998
    62.9659, 63.0217, 63.0807, 63.1462, 63.2053, 63.2599,
    63.2844, 63.2961, 63.3126, 63.3422, 63.3871, 63.4339,
    // 1999
    63.4673, 63.4979, 63.5319, 63.5679, 63.6104, 63.6444,
    63.6642, 63.6739, 63.6926, 63.7147, 63.7518, 63.7927,
    // 2000
    63.8285, 63.8557, 63.8804, 63.9075, 63.9393, 63.9691,
    63.9799, 63.9833, 63.9938, 64.0093, 64.04, 64.067,
    // 2001
    64.0908, 64.1068, 64.1282, 64.1584, 64.1833, 64.2094,
    64.2117, 64.2073, 64.2116, 64.2223, 64.25, 64.2761,
    // 2002
    64.2998, 64.3192, 64.345, 64.3735, 64.3943, 64.4151,
    64.4132, 64.4118, 64.4097, 64.4168, 64.4329, 64.4511,
    // 2003
    64.4734, 64.4893, 64.5053, 64.5269, 64.5471, 64.5597,
    64.5512, 64.5371, 64.5359, 64.5415, 64.5544, 64.5654,
    // 2004
    64.5736, 64.5891, 64.6015, 64.6176, 64.6374, 64.6549,
    64.653, 64.6379, 64.6372, 64.64, 64.6543, 64.6723,
    // 2005
    64.6876, 64.7052, 64.7313, 64.7575, 64.7811, 64.8001,
    64.7995, 64.7876, 64.7831, 64.7921, 64.8096, 64.8311,
    // 2006
    64.8452, 64.8597, 64.885, 64.9175, 64.948, 64.9794,
    64.9895, 65.0028, 65.0138, 65.0371, 65.0773, 65.1122,
    // 2007
    65.1464, 65.1833, 65.2145, 65.2494, 65.2921, 65.3279,
    65.3413, 65.3452, 65.3496, 65.3711, 65.3972, 65.4296,
    // 2008
    65.4573, 65.4868, 65.5152, 65.545, 65.5781, 65.6127,
    65.6288, 65.637, 65.6493, 65.676, 65.7097, 65.7461,
    // 2009
    65.7768, 65.8025, 65.8237, 65.8595, 65.8973, 65.9323,
    65.9509, 65.9534, 65.9628, 65.9839, 66.0147, 66.042,
    // 2010
    66.0699, 66.0961, 66.131, 66.1683, 66.2072, 66.2356,
    66.2409, 66.2335, 66.2349, 66.2441, 66.2751, 66.3054,
    // 2011
    66.3246, 66.3406, 66.3624, 66.3957, 66.4289, 66.4619,
    66.4749, 66.4751, 66.4829, 66.5056, 66.5383, 66.5706,
    // 2012
    66.603, 66.634, 66.6569, 66.6925, 66.7289, 66.7579,
    66.7708, 66.774, 66.7846, 66.8103, 66.84, 66.8779,
    // 2013
    66.9069, 66.9443, 66.9763, 67.0258, 67.0716, 67.11,
    67.1266, 67.1331, 67.1458, 67.1718, 67.2091, 67.246,
    // 2014
    67.281, 67.3136, 67.3457, 67.389, 67.4318, 67.4666,
    67.4858, 67.4989, 67.5111, 67.5353, 67.5711, 67.607,
    // 2015
    67.6439, 67.6765, 67.7117, 67.7591, 67.8012, 67.8402,
    67.8606, 67.8822, 67.912, 67.9546, 68.0055, 68.0514,
    // 2016
    68.1024, 68.1577, 68.2044, 68.2665, 68.3188, 68.3703,
    68.3964, 68.4094, 68.4305, 68.463, 68.5078, 68.5537,
    // 2017
    68.5928,
];

/// First year covered by [`LEAP_SECOND_ADJUSTMENTS`]; TAI − UTC was 10 s at its start.
pub(crate) const LEAP_SECONDS_BASE_YEAR: i32 = 1972;

/// Leap seconds inserted at the end of June 30 and December 31 of each year.
pub(crate) const LEAP_SECOND_ADJUSTMENTS: [(i8, i8); 54] = [
    (1, 1), // 1972
    (0, 1), // 1973
    (0, 1), // 1974
    (0, 1), // 1975
    (0, 1), // 1976
    (0, 1), // 1977
    (0, 1), // 1978
    (0, 1), // 1979
    (0, 0), // 1980
    (1, 0), // 1981
    (1, 0), // 1982
    (1, 0), // 1983
    (0, 0), // 1984
    (1, 0), // 1985
    (0, 0), // 1986
    (0, 1), // 1987
    (0, 0), // 1988
    (0, 1), // 1989
    (0, 1), // 1990
    (0, 0), // 1991
    (1, 0), // 1992
    (1, 0), // 1993
    (1, 0), // 1994
    (0, 1), // 1995
    (0, 0), // 1996
    (1, 0), // 1997
    (0, 1), // 1998
    (0, 0), // 1999
    (0, 0), // 2000
    (0, 0), // 2001
    (0, 0), // 2002
    (0, 0), // 2003
    (0, 0), // 2004
    (0, 1), // 2005
    (0, 0), // 2006
    (0, 0), // 2007
    (0, 1), // 2008
    (0, 0), // 2009
    (0, 0), // 2010
    (0, 0), // 2011
    (1, 0), // 2012
    (0, 0), // 2013
    (0, 0), // 2014
    (1, 0), // 2015
    // Often tabulated as a June leap second; it was inserted on 2016-12-31
    (0, 1), // 2016
    (0, 0), // 2017
    (0, 0), // 2018
    (0, 0), // 2019
    (0, 0), // 2020
    (0, 0), // 2021
    (0, 0), // 2022
    (0, 0), // 2023
    (0, 0), // 2024
    (0, 0), // 2025
];
