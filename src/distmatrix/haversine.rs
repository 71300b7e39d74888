use std::f64::consts::PI;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in meters (spherical model)
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Calculates great-circle distance between two (lat, lon) points given in degrees
///
/// # Returns
///
/// Distance in meters
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let la1 = lat1 * DEGREE_RAD;
    let lo1 = lon1 * DEGREE_RAD;
    let la2 = lat2 * DEGREE_RAD;
    let lo2 = lon2 * DEGREE_RAD;

    let h = hsin(la2 - la1) + la1.cos() * la2.cos() * hsin(lo2 - lo1);

    // rounding can push h just past 1 for antipodal points
    2.0 * EARTH_RADIUS_M * h.min(1.0).sqrt().asin()
}

/// Distance in whole meters as stored in the matrix, truncated toward zero
pub fn truncated_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i64 {
    haversine(lat1, lon1, lat2, lon2) as i64
}

// haversin(θ)
fn hsin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}
