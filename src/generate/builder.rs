//! Random expression tree construction.

use rand::Rng;

use crate::types::{Expr, TruncationPolicy};

/// Chance that a node under [`TruncationPolicy::Ragged`] becomes a leaf early.
pub const RAGGED_LEAF_PROBABILITY: f64 = 0.25;

/// Builds random expression trees.
///
/// Randomness is supplied per call so a seeded generator reproduces the
/// same tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    policy: TruncationPolicy,
}

impl TreeBuilder {
    pub fn new(policy: TruncationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TruncationPolicy {
        self.policy
    }

    /// Build a tree no deeper than `depth`.
    ///
    /// With [`TruncationPolicy::Perfect`] the result is a perfect binary
    /// tree of exactly `depth` levels. A depth of 0 or 1 yields a leaf.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R, depth: u32) -> Expr {
        if depth <= 1 || self.stops_early(rng) {
            return Expr::operand(rng.gen());
        }

        let op = rng.gen();
        let left = self.build(rng, depth - 1);
        let right = self.build(rng, depth - 1);
        Expr::binary(op, left, right)
    }

    fn stops_early<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match self.policy {
            TruncationPolicy::Perfect => false,
            TruncationPolicy::Ragged => rng.gen_bool(RAGGED_LEAF_PROBABILITY),
        }
    }
}

/// Add the random spread to a base depth.
///
/// The base is raised to 2 if lower; the spread draws from `0..randomness`.
pub fn effective_depth<R: Rng + ?Sized>(rng: &mut R, base: u32, randomness: u32) -> u32 {
    let spread = if randomness > 0 {
        rng.gen_range(0..randomness)
    } else {
        0
    };
    base.max(2) + spread
}
