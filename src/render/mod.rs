//! Rendering module for bitty.
//!
//! This module handles evaluating expressions into a raster and encoding
//! the raster as BMP or XPM.

mod bmp;
mod meta;
mod raster;
mod xpm;

use std::path::Path;

pub use bmp::{encode_bmp, file_size, padded_row_size, write_bmp, HEADER_SIZE};
pub use meta::{write_meta_json, ImageMeta, Size};
pub use raster::{threshold_colour, Raster};
pub use xpm::{encode_xpm, write_xpm, ARRAY_NAME};

use crate::error::Result;
use crate::types::{Expr, OutputFormat};

/// Write a raster in the given format.
///
/// XPM output embeds the expression text and constant in a comment.
pub fn write_image(
    raster: &Raster,
    format: OutputFormat,
    expr: &Expr,
    constant: i32,
    path: &Path,
) -> Result<()> {
    match format {
        OutputFormat::Bmp => write_bmp(raster, path),
        OutputFormat::Xpm => write_xpm(raster, &expr.render(), constant, path),
    }
}
