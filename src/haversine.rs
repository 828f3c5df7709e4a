//! Haversine great-circle distance and the matching matrix provider.
//!
//! Straight-line distance on a spherical Earth. Ignores roads, which is fine
//! for comparing visit orders within one technician's day.

use crate::error::{PlannerError, Result};
use crate::matrix::DistanceMatrix;
use crate::models::Coordinate;
use crate::traits::DistanceMatrixProvider;

/// Earth mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance in miles between two coordinates.
///
/// Fails with [`PlannerError::InvalidCoordinate`] if either point is
/// non-finite or out of range.
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> Result<f64> {
    great_circle(from, to, EARTH_RADIUS_MILES)
}

fn great_circle(from: Coordinate, to: Coordinate, radius: f64) -> Result<f64> {
    from.validate()?;
    to.validate()?;

    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let c = 2.0 * a.min(1.0).sqrt().asin();

    let distance = radius * c;
    if distance.is_finite() {
        Ok(distance)
    } else {
        Err(PlannerError::InvalidCoordinate {
            latitude: to.latitude,
            longitude: to.longitude,
        })
    }
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Sphere radius in miles.
    pub radius_miles: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            radius_miles: EARTH_RADIUS_MILES,
        }
    }
}

impl HaversineMatrix {
    pub fn new(radius_miles: f64) -> Self {
        Self { radius_miles }
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> Result<DistanceMatrix> {
        if !self.radius_miles.is_finite() || self.radius_miles <= 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "sphere radius must be positive and finite, got {}",
                self.radius_miles
            )));
        }
        DistanceMatrix::from_fn(locations.len(), |i, j| {
            great_circle(locations[i], locations[j], self.radius_miles)
        })
    }
}
