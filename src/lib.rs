//! bitty - Random expression image generator
//!
//! Builds a random arithmetic and bitwise expression over the pixel
//! coordinates `x`, `y` and a constant `c`, evaluates it at every pixel,
//! thresholds the result to black and white, and writes the raster as a
//! BMP or XPM file.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{BittyError, Result};
pub use generate::{effective_depth, random_seed, Generation, TreeBuilder};
pub use render::{
    encode_bmp, encode_xpm, write_bmp, write_image, write_meta_json, write_xpm, ImageMeta, Raster,
};
pub use types::{
    Colour, Expr, GenerationParams, Operand, Operator, OutputFormat, TruncationPolicy,
};
