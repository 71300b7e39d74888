//! Pairwise great-circle distances over a named collection of geo points
//!
//! Distances are computed once per point set into a triangular matrix of whole
//! meters and answered from there until the next insertion.
pub mod distmatrix;

pub use distmatrix::{Collection, DistanceMatrix, Error, Point, Result, haversine};
