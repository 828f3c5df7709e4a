//! Seams between the orchestrator and its distance source.

use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::models::Coordinate;

/// Provides a distance matrix (miles) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> Result<DistanceMatrix>;
}
