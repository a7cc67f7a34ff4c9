/// Floor applied to accumulated weights before dividing.
pub(crate) const WEIGHT_EPSILON: f64 = 1e-8;

/// Homogeneous coordinates with `|w|` at or below this are treated as points at infinity.
pub(crate) const HOMOGENEOUS_EPS: f64 = 1e-12;

/// Largest 8-bit sample value, used to map between `[0, 1]` and `u8`.
pub(crate) const U8_MAX_F64: f64 = 255.0;

/// Scale a unit value to 8 bits, truncating toward zero. `as` saturates out-of-range values.
pub(crate) fn unit_to_u8_trunc(v: f64) -> u8 {
    (v * U8_MAX_F64) as u8
}

/// Round an 8-bit-range value to the nearest integer and clamp into `u8`.
pub(crate) fn round_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, U8_MAX_F64) as u8
}
