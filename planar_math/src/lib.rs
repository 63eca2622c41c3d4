//! Two dimensional vector arithmetic.
//!
//! [`Vector`] methods mutate in place and return `&mut Vector` for chaining.
//! The free functions and the `std::ops` operators never touch their operands
//! and always return a new value.

pub use arith::*;
pub use error::{VectorError, VectorResult};
pub use geometry::*;
pub use operand::{Operand, Point};
pub use vector::{vector, Vector};

mod arith;
mod convert;
mod error;
mod geometry;
mod operand;
mod ops;
mod vector;
