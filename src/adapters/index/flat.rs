//! # Flat Index Adapter
//!
//! Brute force neighbor search.
//! Compares the query against ALL points - O(n) per query.
//!
//! Points are kept in insertion order, so range queries return them in the
//! same order a caller would get from scanning the original sequence.

use crate::core::proximity::{Manhattan, Proximity};
use crate::core::{IndexConfig, Point, PointError, PointResult};
use crate::ports::Near;

/// Brute force index - searches all points
#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    /// Stored points, insertion order
    points: Vec<Point>,

    /// Metric and filtering settings
    config: IndexConfig,
}

impl FlatIndex {
    /// Create an empty index with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        Self {
            points: Vec::new(),
            config,
        }
    }

    /// Create with Chebyshev distance (the default)
    pub fn chebyshev() -> Self {
        Self::new(IndexConfig::default())
    }

    /// Create with Manhattan distance
    pub fn manhattan() -> Self {
        Self::new(IndexConfig::new().with_proximity(Manhattan))
    }

    /// Create an index holding `points`, default configuration
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut index = Self::chebyshev();
        index.points.extend(points);
        index
    }

    /// The active configuration
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// All stored points, insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Neighbors of `center` under the square-radius rule of [`Point::get_neighbors`]
    ///
    /// Independent of the configured metric.
    pub fn neighbors(&self, center: &Point, distance: i64) -> PointResult<Vec<Point>> {
        center.get_neighbors(distance, &self.points)
    }

    /// Number of stored points at exactly `center`
    pub fn count_at(&self, center: &Point) -> usize {
        center.count_points_in_exact_same_location(&self.points)
    }

    /// Collinearity report of stored points relative to `center`
    pub fn collinear_with(&self, center: &Point) -> String {
        center.get_collinear_point_coordinates(&self.points)
    }
}

impl Near for FlatIndex {
    fn near(&self, query: &Point, k: usize) -> Vec<Point> {
        let proximity = &self.config.proximity;

        let mut scored: Vec<(u128, Point)> = self
            .points
            .iter()
            .map(|point| (proximity.proximity(query, point), *point))
            .collect();

        // Stable: equal distances keep insertion order
        scored.sort_by_key(|(distance, _)| *distance);
        scored.truncate(k);

        tracing::trace!(query = %query, k, found = scored.len(), "flat near");

        scored.into_iter().map(|(_, point)| point).collect()
    }

    fn within(&self, query: &Point, threshold: i64) -> PointResult<Vec<Point>> {
        let limit = match u128::try_from(threshold) {
            Ok(limit) if limit > 0 => limit,
            _ => {
                tracing::debug!(threshold, "rejected range threshold");
                return Err(PointError::InvalidArgument {
                    param: "threshold",
                    value: threshold,
                });
            }
        };

        let results: Vec<Point> = self
            .points
            .iter()
            .filter(|point| self.config.include_coincident || !point.equals(query))
            .filter(|point| self.config.proximity.proximity(query, point) <= limit)
            .copied()
            .collect();

        tracing::trace!(query = %query, threshold, found = results.len(), "flat within");

        Ok(results)
    }

    fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::proximity::EuclideanSquared;

    fn setup_index() -> FlatIndex {
        FlatIndex::from_points(
            [(-2, 5), (6, 6), (3, 4), (4, 4), (2, 3), (2, 2), (5, 2), (3, -2), (3, 3), (0, 0)]
                .into_iter()
                .map(|(x, y)| Point::new(x, y)),
        )
    }

    #[test]
    fn test_flat_index_near() {
        let index = setup_index();

        let results = index.near(&Point::new(3, 3), 3);

        assert_eq!(results.len(), 3);
        // The point itself first, then the two Chebyshev-1 points in insertion order
        assert_eq!(results[0], Point::new(3, 3));
        assert_eq!(results[1], Point::new(3, 4));
        assert_eq!(results[2], Point::new(4, 4));
    }

    #[test]
    fn test_flat_index_near_more_than_len() {
        let index = setup_index();
        assert_eq!(index.near(&Point::new(0, 0), 100).len(), index.len());
        assert!(index.near(&Point::new(0, 0), 0).is_empty());
    }

    #[test]
    fn test_flat_index_within_matches_neighbors() {
        let index = setup_index();
        let center = Point::new(3, 3);

        for distance in 1..=4 {
            assert_eq!(
                index.within(&center, distance).unwrap(),
                center.get_neighbors(distance, index.points()).unwrap()
            );
        }
        assert_eq!(
            index.neighbors(&center, 2).unwrap(),
            index.within(&center, 2).unwrap()
        );
    }

    #[test]
    fn test_flat_index_within_coincident() {
        let mut index = FlatIndex::new(IndexConfig::new().with_coincident(true));
        index.add(Point::new(0, 0));
        index.add(Point::new(1, 1));
        index.add(Point::new(5, 5));

        let results = index.within(&Point::new(0, 0), 1).unwrap();
        assert_eq!(results, vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn test_flat_index_manhattan() {
        let mut index = FlatIndex::manhattan();
        index.add(Point::new(1, 1));
        index.add(Point::new(2, 0));
        index.add(Point::new(0, 1));

        let results = index.within(&Point::new(0, 0), 1).unwrap();
        assert_eq!(results, vec![Point::new(0, 1)]);
        assert_eq!(index.config().proximity.name(), "manhattan");
    }

    #[test]
    fn test_flat_index_euclidean_ordering() {
        let mut index = FlatIndex::new(IndexConfig::new().with_proximity(EuclideanSquared));
        index.add(Point::new(3, 0));
        index.add(Point::new(2, 2));
        index.add(Point::new(0, 1));

        let results = index.near(&Point::new(0, 0), 3);
        assert_eq!(results, vec![Point::new(0, 1), Point::new(2, 2), Point::new(3, 0)]);
    }

    #[test]
    fn test_flat_index_rejects_threshold() {
        let index = setup_index();
        for threshold in [0, -5] {
            let err = index.within(&Point::new(0, 0), threshold).unwrap_err();
            assert_eq!(err.param(), Some("threshold"));
        }
        assert!(index.neighbors(&Point::new(0, 0), 0).is_err());
    }

    #[test]
    fn test_flat_index_queries() {
        let mut index = setup_index();
        index.add(Point::new(3, 3));

        assert_eq!(index.count_at(&Point::new(3, 3)), 2);
        assert_eq!(
            index.collinear_with(&Point::new(3, 3)),
            "(3,4,\"X\"),(2,3,\"Y\"),(3,-2,\"X\"),(3,3,\"SAME\"),(3,3,\"SAME\")"
        );
    }

    #[test]
    fn test_flat_index_len() {
        let mut index = FlatIndex::chebyshev();
        assert!(index.is_empty());

        index.add(Point::new(1, 1));
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
    }
}
