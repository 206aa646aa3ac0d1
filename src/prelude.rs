//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use escalar::prelude::*;
//! ```

pub use crate::error::{EscalarError, Result};
pub use crate::preprocessing::DerivativeRankScaler;
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Transformer;
