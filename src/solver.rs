//! Nearest-neighbor route solver.
//!
//! Greedy: from the current location always move to the closest unvisited
//! one, then return to the start. O(n²), meant for a single technician's day.

use crate::error::{PlannerError, Result};
use crate::matrix::DistanceMatrix;

/// A closed tour over a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Visitation order, excluding the start location.
    pub order: Vec<usize>,
    /// Total length including the closing leg back to the start.
    pub total_distance: f64,
}

/// Builds a nearest-neighbor tour starting and ending at `start`.
///
/// Ties go to the lowest index. A matrix holding only the start location
/// yields an empty order and zero distance.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = matrix.size();
    if start >= n {
        return Err(PlannerError::InvalidInput(format!(
            "start location {start} outside {n}x{n} matrix"
        )));
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut order = Vec::with_capacity(n - 1);
    let mut current = start;
    let mut total_distance = 0.0;

    while order.len() < n - 1 {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = matrix.get(current, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }

        let Some((next, d)) = best else {
            break;
        };
        visited[next] = true;
        order.push(next);
        total_distance += d;
        current = next;
    }

    total_distance += matrix.get(current, start);

    Ok(Tour {
        order,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_on_line(xs: &[f64]) -> DistanceMatrix {
        DistanceMatrix::from_fn(xs.len(), |i, j| Ok((xs[i] - xs[j]).abs())).unwrap()
    }

    #[test]
    fn test_nn_visits_line_in_order() {
        let dm = points_on_line(&[0.0, 1.0, 2.0, 3.0]);
        let tour = nearest_neighbor(&dm, 0).unwrap();
        assert_eq!(tour.order, vec![1, 2, 3]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3
        assert!((tour.total_distance - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = points_on_line(&[0.0, 10.0, 1.0]);
        let tour = nearest_neighbor(&dm, 0).unwrap();
        assert_eq!(tour.order, vec![2, 1]);
        assert!((tour.total_distance - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let dm = points_on_line(&[0.0, 1.0, -1.0]);
        let tour = nearest_neighbor(&dm, 0).unwrap();
        assert_eq!(tour.order, vec![1, 2]);
    }

    #[test]
    fn test_depot_only_is_empty_tour() {
        let dm = points_on_line(&[0.0]);
        let tour = nearest_neighbor(&dm, 0).unwrap();
        assert!(tour.order.is_empty());
        assert_eq!(tour.total_distance, 0.0);
    }

    #[test]
    fn test_non_zero_start() {
        let dm = points_on_line(&[0.0, 5.0, 6.0]);
        let tour = nearest_neighbor(&dm, 2).unwrap();
        assert_eq!(tour.order, vec![1, 0]);
        assert!((tour.total_distance - dm.tour_length(2, &tour.order)).abs() < 1e-10);
    }

    #[test]
    fn test_start_out_of_range() {
        let dm = points_on_line(&[0.0, 1.0]);
        assert!(matches!(nearest_neighbor(&dm, 2), Err(PlannerError::InvalidInput(_))));
    }
}
