//! Raster buffer - the pixel grid an expression is evaluated into.

use crate::error::{BittyError, Result};
use crate::types::{Colour, Expr};

/// A grid of RGB pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Pixel data (row-major: pixels[y * width + x]).
    pixels: Vec<Colour>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl Raster {
    /// Allocate a black raster.
    ///
    /// Fails with [`BittyError::Alloc`] when the buffer cannot be reserved.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width.checked_mul(height).ok_or_else(|| BittyError::Alloc {
            message: format!("{}x{} raster is too large", width, height),
            help: None,
        })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| BittyError::Alloc {
            message: format!("Failed to allocate {}x{} raster: {}", width, height, e),
            help: Some("Try a smaller width or height".to_string()),
        })?;
        pixels.resize(len, Colour::BLACK);

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = colour;
        }
    }

    /// Get one row of pixels, left to right.
    pub fn row(&self, y: usize) -> &[Colour] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Colour]> {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Evaluate `expr` at every pixel and threshold the result.
    ///
    /// A pixel is white when `value % 256 > threshold`, black otherwise.
    /// The remainder truncates toward zero, so negative values always
    /// come out black for a positive threshold.
    pub fn fill(&mut self, expr: &Expr, constant: i32, threshold: i32) {
        let width = self.width;
        for (y, row) in self.pixels.chunks_exact_mut(width.max(1)).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                let value = expr.eval(x as i32, y as i32, constant);
                *pixel = threshold_colour(value, threshold);
            }
        }
    }
}

/// Map an evaluated value to black or white.
pub fn threshold_colour(value: i32, threshold: i32) -> Colour {
    if value % 256 > threshold {
        Colour::WHITE
    } else {
        Colour::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operand, Operator};

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(3, 2).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert!(raster.rows().flatten().all(|c| c.is_black()));
    }

    #[test]
    fn test_new_overflow_is_alloc_error() {
        let err = Raster::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, BittyError::Alloc { .. }));
    }

    #[test]
    fn test_get_set() {
        let mut raster = Raster::new(2, 2).unwrap();
        raster.set(1, 0, Colour::WHITE);

        assert_eq!(raster.get(1, 0), Some(Colour::WHITE));
        assert_eq!(raster.get(0, 1), Some(Colour::BLACK));
        assert_eq!(raster.get(2, 0), None);
        assert_eq!(raster.row(0), &[Colour::BLACK, Colour::WHITE]);

        // Ignored
        raster.set(5, 5, Colour::WHITE);
    }

    #[test]
    fn test_fill_x_threshold_zero() {
        let mut raster = Raster::new(2, 1).unwrap();
        raster.fill(&Expr::operand(Operand::X), 0, 0);

        assert_eq!(raster.get(0, 0), Some(Colour::BLACK));
        assert_eq!(raster.get(1, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(threshold_colour(100, 100), Colour::BLACK);
        assert_eq!(threshold_colour(101, 100), Colour::WHITE);
        // 356 % 256 == 100
        assert_eq!(threshold_colour(356, 100), Colour::BLACK);
        assert_eq!(threshold_colour(357, 100), Colour::WHITE);
    }

    #[test]
    fn test_negative_values_keep_negative_remainder() {
        // -1 % 256 == -1, never above a positive threshold
        assert_eq!(threshold_colour(-1, 1), Colour::BLACK);
        assert_eq!(threshold_colour(-255, 1), Colour::BLACK);
        assert_eq!(threshold_colour(i32::MIN, 1), Colour::BLACK);
    }

    #[test]
    fn test_fill_uses_coordinates_and_constant() {
        // ((x & y) + c)
        let expr = Expr::binary(
            Operator::Add,
            Expr::binary(
                Operator::BitAnd,
                Expr::operand(Operand::X),
                Expr::operand(Operand::Y),
            ),
            Expr::operand(Operand::C),
        );

        let mut raster = Raster::new(4, 4).unwrap();
        raster.fill(&expr, 10, 11);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x & y) + 10 > 11 {
                    Colour::WHITE
                } else {
                    Colour::BLACK
                };
                assert_eq!(raster.get(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_is_bicolour() {
        let expr = Expr::binary(
            Operator::Mul,
            Expr::operand(Operand::X),
            Expr::operand(Operand::Y),
        );
        let mut raster = Raster::new(16, 16).unwrap();
        raster.fill(&expr, 3, 64);

        assert!(raster
            .rows()
            .flatten()
            .all(|&c| c == Colour::BLACK || c == Colour::WHITE));
    }
}
