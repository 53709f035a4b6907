//! XPM output for rasters.
//!
//! Writes a two-colour X PixMap as a C string array. Black pixels use the
//! `.` key and every other pixel uses a space. The generating expression
//! and constant are embedded in a comment.

use std::fs;
use std::path::Path;

use crate::error::{BittyError, Result};
use crate::types::Colour;

use super::Raster;

/// Name of the C array in generated files.
pub const ARRAY_NAME: &str = "bitty";

const BLACK_KEY: char = '.';
const WHITE_KEY: char = ' ';

/// Encode a raster as XPM text.
///
/// `expr` is the rendered expression that produced the raster.
pub fn encode_xpm(raster: &Raster, expr: &str, constant: i32) -> String {
    let mut output = String::new();
    output.push_str("/* XPM */\n");
    output.push_str(&format!("/* {}, c = {} */\n", expr, constant));
    output.push_str(&format!("static char *{}[] = {{\n", ARRAY_NAME));
    output.push_str(&format!(
        "\"{} {} 2 1\",\n",
        raster.height(),
        raster.width()
    ));
    output.push_str(&format!("\"{} c {}\",\n", BLACK_KEY, Colour::BLACK));
    output.push_str(&format!("\"{} c {}\"", WHITE_KEY, Colour::WHITE));

    for row in raster.rows() {
        output.push_str(",\n\"");
        for colour in row {
            output.push(if colour.is_black() { BLACK_KEY } else { WHITE_KEY });
        }
        output.push('"');
    }
    output.push_str("\n};\n");

    output
}

/// Write a raster to an XPM file.
pub fn write_xpm(raster: &Raster, expr: &str, constant: i32, path: &Path) -> Result<()> {
    let output = encode_xpm(raster, expr, constant);

    fs::write(path, output).map_err(|e| BittyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write XPM: {}", e),
    })?;

    Ok(())
}
