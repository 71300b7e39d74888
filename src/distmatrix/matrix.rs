//! Triangular storage of pairwise distances
//!
//! Row `i` holds `n - i` entries: entry `k` is the distance from position `i`
//! to position `i + k`, so entry `0` is always the self-distance.

use super::error::{Error, Result};

/// Reported as the minimum when no non-zero pair exists
pub const UNSET_MIN: i64 = -1;

/// Pairwise distances in whole meters over a fixed number of positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<i64>>,
}

impl DistanceMatrix {
    /// Creates an unpopulated matrix for `count` positions
    pub fn new(count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); count],
        }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True once every row has been installed
    pub fn is_built(&self) -> bool {
        self.rows.iter().all(|row| !row.is_empty())
    }

    /// Installs the row for position `ix`
    ///
    /// `values[k]` is the distance from `ix` to `ix + k`. An empty row is ignored.
    pub fn set_row(&mut self, values: Vec<i64>, ix: usize) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let count = self.len();
        let row = self
            .rows
            .get_mut(ix)
            .ok_or(Error::OutOfRange { position: ix, count })?;
        *row = values;
        Ok(())
    }

    /// Returns the installed row for position `ix`, if any
    pub fn row(&self, ix: usize) -> Option<&[i64]> {
        self.rows
            .get(ix)
            .filter(|row| !row.is_empty())
            .map(Vec::as_slice)
    }

    /// Iterates over all rows in position order
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the distance between positions `a` and `b`
    pub fn distance(&self, a: usize, b: usize) -> Result<i64> {
        if a == b {
            return Ok(0);
        }

        let count = self.len();
        for position in [a, b] {
            if position >= count {
                return Err(Error::OutOfRange { position, count });
            }
        }

        let (lower, higher) = if a < b { (a, b) } else { (b, a) };
        self.rows[lower]
            .get(higher - lower)
            .copied()
            .ok_or(Error::RowNotPopulated(lower))
    }

    /// Counts the pairs in `positions` with a non-zero distance strictly below `cutoff`
    ///
    /// Every unordered pair of entries is visited once. Duplicate entries and
    /// coincident points give zero distances and are never counted.
    pub fn count_below(&self, positions: &[usize], cutoff: i64) -> Result<usize> {
        let mut less = 0;
        for (ix, &a) in positions.iter().enumerate() {
            for &b in &positions[ix..] {
                let dist = self.distance(a, b)?;
                if dist == 0 {
                    continue;
                }
                if dist < cutoff {
                    less += 1;
                }
            }
        }
        Ok(less)
    }

    /// Returns `(min, max)` over the non-zero pairwise distances in `positions`
    ///
    /// Without any non-zero pair the result is `(UNSET_MIN, 0)`.
    pub fn min_max(&self, positions: &[usize]) -> Result<(i64, i64)> {
        let mut min = UNSET_MIN;
        let mut max = 0;

        for (ix, &a) in positions.iter().enumerate() {
            for &b in &positions[ix..] {
                let dist = self.distance(a, b)?;
                if dist == 0 {
                    continue;
                }
                if dist > max {
                    max = dist;
                }
                if min == UNSET_MIN || dist < min {
                    min = dist;
                }
            }
        }

        Ok((min, max))
    }
}
