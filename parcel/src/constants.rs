/// Equatorial earth radius (WGS84) in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Multiply decimal degrees by this to get radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
