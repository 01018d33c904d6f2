//! Name-keyed set algebra over mod records
//!
//! `algebra` holds the pure list functions. `operation` wraps them into the
//! three operations a caller can pick, and enforces how many presets each
//! one needs.

pub mod algebra;
pub mod operation;

pub use algebra::{difference, intersect, union, unique_by_name};
pub use operation::SetOperation;
