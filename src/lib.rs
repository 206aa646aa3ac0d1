//! Escalar: rank-derivative feature scaling in pure Rust.
//!
//! Escalar provides a single-purpose preprocessing transformer that
//! rescales numeric columns by the relative ranking of their step-size
//! structure instead of their raw magnitude, making it robust to
//! outliers and arbitrary units.
//!
//! # Quick Start
//!
//! ```
//! use escalar::prelude::*;
//!
//! // One feature with an extreme outlier
//! let data = Matrix::from_vec(4, 1, vec![
//!     1.0,
//!     2.0,
//!     3.0,
//!     1000.0,
//! ]).unwrap();
//!
//! let mut scaler = DerivativeRankScaler::new();
//! let scaled = scaler.fit_transform(&data).unwrap();
//!
//! // Output is bounded: max absolute value is 1
//! assert!(scaled.iter().all(|v| v.abs() <= 1.0 + 1e-6));
//! // Order is preserved
//! assert!(scaled[0] < scaled[1]);
//! assert!(scaled[2] < scaled[3]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`preprocessing`]: The [`DerivativeRankScaler`](preprocessing::DerivativeRankScaler) transformer
//! - [`traits`]: The [`Transformer`](traits::Transformer) fit/transform contract
//! - [`error`]: Error types

pub mod error;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod traits;
