//! Dense distance matrix.
//!
//! Locations are addressed by index; index 0 is the depot by convention.

use crate::error::{PlannerError, Result};
use crate::haversine::haversine_miles;
use crate::models::Coordinate;

/// Largest |d(i,j) - d(j,i)| accepted from an explicit grid.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a haversine matrix (miles) from an ordered coordinate list.
    ///
    /// The list must hold at least the depot.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Result<Self> {
        Self::from_fn(coordinates.len(), |i, j| {
            haversine_miles(coordinates[i], coordinates[j])
        })
    }

    /// Builds a symmetric matrix by evaluating `distance` on the upper
    /// triangle and mirroring it.
    pub fn from_fn<F>(size: usize, mut distance: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<f64>,
    {
        if size == 0 {
            return Err(PlannerError::InvalidInput(
                "distance matrix needs at least the depot".into(),
            ));
        }

        let mut matrix = Self {
            data: vec![0.0; size * size],
            size,
        };
        for i in 0..size {
            for j in (i + 1)..size {
                let d = distance(i, j)?;
                matrix.data[i * size + j] = d;
                matrix.data[j * size + i] = d;
            }
        }
        Ok(matrix)
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// The grid must be symmetric with a zero diagonal and finite,
    /// non-negative entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 || data.len() != size * size {
            return Err(PlannerError::InvalidInput(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(PlannerError::InvalidInput(format!(
                "matrix entries must be finite and non-negative, got {bad}"
            )));
        }
        let matrix = Self { data, size };
        if let Some(i) = (0..size).find(|&i| matrix.get(i, i) != 0.0) {
            return Err(PlannerError::InvalidInput(format!(
                "diagonal entry {i} is {}, expected 0",
                matrix.get(i, i)
            )));
        }
        if !matrix.is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(PlannerError::InvalidInput("matrix is not symmetric".into()));
        }
        Ok(matrix)
    }

    /// Distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed tour `start -> order... -> start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or any entry of `order` is out of bounds.
    pub fn tour_length(&self, start: usize, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut current = start;
        for &next in order {
            total += self.get(current, next);
            current = next;
        }
        total + self.get(current, start)
    }
}
