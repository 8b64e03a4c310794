//! Maximum path sum through a triangle of nodes beneath a root.
//!
//! Four interchangeable solvers share one flattened triangle representation:
//! bottom-up dynamic programming (the optimal reference), exhaustive search,
//! exhaustive search partitioned across workers, and a binary genetic
//! algorithm.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use error::{Result, TrianglePathError};
pub use types::{Path, Solution, TriangleData};
