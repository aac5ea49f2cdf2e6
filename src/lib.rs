#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod chaikin;
pub mod session;

pub use crate::bounding_box::BoundingBox;
pub use crate::chaikin::{normalize_ratios, perimeter, subdivide, CutRatios};
pub use crate::session::{CurveSession, IterateError};
