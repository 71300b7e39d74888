use std::collections::HashMap;
use std::time::Instant;

use log::{debug, error, info, warn};

use super::error::{Error, Result};
use super::haversine::{haversine, truncated_distance};
use super::matrix::DistanceMatrix;

/// A named geographic coordinate with its insertion rank
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Unique identifier within the collection
    pub id: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Dense 0-based insertion rank, indexes matrix rows and columns
    pub position: usize,
}

/// Insert-only set of named points with a lazily built distance matrix
///
/// The matrix is built on the first query after any insertion and dropped
/// again by the next successful `add`.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    id: String,
    /// Points ordered by position
    points: Vec<Point>,
    positions: HashMap<String, usize>,
    matrix: Option<DistanceMatrix>,
}

impl Collection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Collection id
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Position assigned to `id`, if present
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Iterates over the points in position order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Whether a distance matrix is currently cached
    pub fn is_cached(&self) -> bool {
        self.matrix.is_some()
    }

    /// Adds a point and invalidates the cached matrix
    ///
    /// Fails with `DuplicateIdentifier` if `id` is already present, in which
    /// case nothing changes.
    pub fn add(&mut self, id: impl Into<String>, lat: f64, lon: f64) -> Result<()> {
        let id = id.into();
        if self.positions.contains_key(&id) {
            error!("id: {id} already in points");
            return Err(Error::DuplicateIdentifier(id));
        }

        let position = self.points.len();
        self.positions.insert(id.clone(), position);
        self.points.push(Point {
            id,
            lat,
            lon,
            position,
        });
        self.matrix = None;
        Ok(())
    }

    /// Distance in whole meters between two named points
    ///
    /// An empty id on either side yields `0` without any lookup.
    pub fn distance(&mut self, a: &str, b: &str) -> Result<i64> {
        if a.is_empty() || b.is_empty() {
            return Ok(0);
        }
        let ap = self.strict_position(a)?;
        let bp = self.strict_position(b)?;
        let dist = self.matrix().distance(ap, bp)?;
        debug!("{a} to {b} distance is {dist}");
        Ok(dist)
    }

    /// Floating-point distance in meters, bypassing the integer matrix
    ///
    /// Same empty-id and lookup rules as [`Collection::distance`].
    pub fn exact_distance(&self, a: &str, b: &str) -> Result<f64> {
        if a.is_empty() || b.is_empty() {
            return Ok(0.0);
        }
        let pa = &self.points[self.strict_position(a)?];
        let pb = &self.points[self.strict_position(b)?];
        if pa.position == pb.position {
            return Ok(0.0);
        }
        Ok(haversine(pa.lat, pa.lon, pb.lat, pb.lon))
    }

    /// `(min, max)` non-zero distance over all pairs
    pub fn min_max(&mut self) -> Result<(i64, i64)> {
        let all: Vec<usize> = (0..self.len()).collect();
        self.matrix().min_max(&all)
    }

    /// `(min, max)` non-zero distance over the pairs of a subset
    ///
    /// Unknown ids are dropped.
    pub fn min_max_subset<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(i64, i64)> {
        let subset = self.subset_positions(ids);
        self.matrix().min_max(&subset)
    }

    /// Number of pairs with a non-zero distance below `cutoff`
    pub fn count_below(&mut self, cutoff: i64) -> Result<usize> {
        let all: Vec<usize> = (0..self.len()).collect();
        self.matrix().count_below(&all, cutoff)
    }

    /// Number of pairs of a subset with a non-zero distance below `cutoff`
    ///
    /// Unknown ids are dropped.
    pub fn count_below_subset<S: AsRef<str>>(&mut self, ids: &[S], cutoff: i64) -> Result<usize> {
        let subset = self.subset_positions(ids);
        self.matrix().count_below(&subset, cutoff)
    }

    /// Returns the cached matrix, building it first if needed
    pub fn matrix(&mut self) -> &DistanceMatrix {
        let points = &self.points;
        self.matrix.get_or_insert_with(|| build_matrix(points))
    }

    fn strict_position(&self, id: &str) -> Result<usize> {
        self.position(id).ok_or_else(|| {
            error!("id: {id} not in points");
            Error::UnknownIdentifier(id.to_owned())
        })
    }

    fn subset_positions<S: AsRef<str>>(&self, ids: &[S]) -> Vec<usize> {
        ids.iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let position = self.position(id);
                if position.is_none() {
                    warn!("id: {id} not in points, skipping");
                }
                position
            })
            .collect()
    }
}

/// Computes the triangular distance matrix for points ordered by position
///
/// `points[i].position` must equal `i`.
pub fn build_matrix(points: &[Point]) -> DistanceMatrix {
    let start = Instant::now();
    let count = points.len();
    let mut dm = DistanceMatrix::new(count);

    for (ix, cur) in points.iter().enumerate() {
        debug_assert_eq!(cur.position, ix);
        debug!("Position: {ix}, Point: {cur:?}");

        let row: Vec<i64> = points[ix..]
            .iter()
            .enumerate()
            .map(|(k, other)| {
                if k == 0 {
                    0
                } else {
                    truncated_distance(cur.lat, cur.lon, other.lat, other.lon)
                }
            })
            .collect();
        // ix < count here
        if let Err(err) = dm.set_row(row, ix) {
            error!("Failed to install row {ix}: {err}");
        }
    }

    info!("Building distance matrix for {count} points took {:?}", start.elapsed());
    dm
}
