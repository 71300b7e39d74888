//! Package distmatrix implements a lazily built triangular distance matrix on (lat, lon)
pub mod collection;
pub mod error;
pub mod haversine;
pub mod matrix;


pub use collection::{Collection, Point};
pub use error::{Error, Result};
pub use haversine::{DEGREE_RAD, EARTH_RADIUS_M, haversine, truncated_distance};
pub use matrix::{DistanceMatrix, UNSET_MIN};
