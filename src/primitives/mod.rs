//! Core numeric primitives (Vector, Matrix).
//!
//! These types provide the array foundation the transformers are
//! written against.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
