//! Expression generation.
//!
//! A [`Generation`] holds everything drawn from the random generator for
//! one run: the effective tree depth, the constant `c` and the tree. All
//! three come from a single `StdRng` seeded once, in that order, so a seed
//! fully determines the image.

mod builder;

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use builder::{effective_depth, TreeBuilder, RAGGED_LEAF_PROBABILITY};

use crate::error::Result;
use crate::render::Raster;
use crate::types::{Expr, GenerationParams};

/// Range the per-run constant is drawn from.
pub const CONSTANT_RANGE: RangeInclusive<i32> = 0..=29;

/// Draw a fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}

/// One generated expression and the values it was generated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    expr: Expr,
    constant: i32,
    depth: u32,
    seed: u64,
}

impl Generation {
    /// Generate an expression for `params` from `seed`.
    pub fn new(params: &GenerationParams, seed: u64) -> Result<Self> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let depth = effective_depth(&mut rng, params.depth, params.randomness);
        let constant = rng.gen_range(CONSTANT_RANGE);
        let expr = TreeBuilder::new(params.policy).build(&mut rng, depth);

        Ok(Self {
            expr,
            constant,
            depth,
            seed,
        })
    }

    /// Wrap an existing expression, e.g. one built by hand.
    pub fn with_expr(expr: Expr, constant: i32) -> Self {
        let depth = expr.depth();
        Self {
            expr,
            constant,
            depth,
            seed: 0,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn constant(&self) -> i32 {
        self.constant
    }

    /// The depth the tree was built with, including the random spread.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Evaluate the expression into a new black and white raster.
    pub fn rasterize(&self, width: usize, height: usize, threshold: i32) -> Result<Raster> {
        let mut raster = Raster::new(width, height)?;
        raster.fill(&self.expr, self.constant, threshold);
        Ok(raster)
    }

    /// The console summary line: `<expr>, c = <int>`.
    pub fn summary(&self) -> String {
        format!("{}, c = {}", self.expr, self.constant)
    }
}
