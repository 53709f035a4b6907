//! Core domain types for bitty.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB pixel values
//! - `Expr` - Random expression trees over `x`, `y` and `c`
//! - `GenerationParams` - Per-run settings and their supported ranges

mod colour;
mod expr;
mod params;

pub use colour::Colour;
pub use expr::{Expr, Operand, Operator};
pub use params::{
    Clamped, GenerationParams, OutputFormat, TruncationPolicy, DEPTH_RANGE, DIMENSION_RANGE,
    RANDOMNESS_RANGE, THRESHOLD_RANGE,
};
