//! BMP output for rasters.
//!
//! Writes an uncompressed 24-bit bitmap: a 14-byte file header, a 40-byte
//! info header, then bottom-up BGR rows padded to a multiple of 4 bytes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{BittyError, Result};

use super::Raster;

/// Combined size of the file and info headers.
pub const HEADER_SIZE: u32 = 54;

const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Row length in bytes, rounded up to a multiple of 4.
pub fn padded_row_size(width: u32) -> u32 {
    (3 * width + 3) & !3
}

/// Total file size for a bitmap of the given dimensions.
pub fn file_size(width: u32, height: u32) -> u32 {
    HEADER_SIZE + padded_row_size(width) * height
}

/// Write a raster to a BMP file.
///
/// Fails before writing anything if the file cannot be created.
pub fn write_bmp(raster: &Raster, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BittyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create BMP: {}", e),
    })?;

    let mut writer = BufWriter::new(file);
    encode_bmp(raster, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| BittyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write BMP: {}", e),
        })?;

    Ok(())
}

/// Encode a raster as BMP bytes into any writer.
pub fn encode_bmp<W: Write>(raster: &Raster, writer: &mut W) -> io::Result<()> {
    let width = dimension(raster.width())?;
    let height = dimension(raster.height())?;
    let row_size = padded_row_size(width);
    let size = file_size(width, height);

    let mut file_header = [0u8; 14];
    file_header[0..2].copy_from_slice(b"BM");
    file_header[2..6].copy_from_slice(&size.to_le_bytes());
    // bytes 6..10 are two reserved u16 fields, left zero
    file_header[10..14].copy_from_slice(&HEADER_SIZE.to_le_bytes());

    let mut info_header = [0u8; 40];
    info_header[0..4].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    info_header[4..8].copy_from_slice(&width.to_le_bytes());
    info_header[8..12].copy_from_slice(&height.to_le_bytes());
    info_header[12..14].copy_from_slice(&1u16.to_le_bytes());
    info_header[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    // compression, image size, resolution and palette fields stay zero

    writer.write_all(&file_header)?;
    writer.write_all(&info_header)?;

    let padding = [0u8; 3];
    let padding_size = (row_size - 3 * width) as usize;

    for row in raster.rows().rev() {
        for colour in row {
            writer.write_all(&colour.to_bgr())?;
        }
        writer.write_all(&padding[..padding_size])?;
    }

    Ok(())
}

fn dimension(value: usize) -> io::Result<u32> {
    // Keeps 3 * width and the file size inside u32
    const MAX_DIMENSION: usize = 1 << 14;
    if value > MAX_DIMENSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("dimension {} exceeds BMP limit of {}", value, MAX_DIMENSION),
        ));
    }
    Ok(value as u32)
}
