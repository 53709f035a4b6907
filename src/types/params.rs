//! Generation parameters.
//!
//! Parameters are immutable for a run. The CLI clamps user input into the
//! supported ranges; [`GenerationParams::validate`] guards library callers.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{BittyError, Result};

pub const DIMENSION_RANGE: RangeInclusive<u32> = 16..=8192;
pub const DEPTH_RANGE: RangeInclusive<u32> = 2..=12;
pub const RANDOMNESS_RANGE: RangeInclusive<u32> = 0..=6;
pub const THRESHOLD_RANGE: RangeInclusive<i32> = 1..=255;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 24-bit Windows bitmap
    #[default]
    Bmp,
    /// Two-colour X PixMap
    Xpm,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Xpm => "xpm",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How the tree builder decides where leaves go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Every leaf sits at exactly the requested depth.
    #[default]
    Perfect,
    /// Any node may become a leaf early with probability 1/4.
    Ragged,
}

impl fmt::Display for TruncationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncationPolicy::Perfect => write!(f, "perfect"),
            TruncationPolicy::Ragged => write!(f, "ragged"),
        }
    }
}

/// Parameters for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    pub width: u32,
    pub height: u32,
    /// Base tree depth before the random spread is added.
    pub depth: u32,
    /// Random spread added to the depth, drawn from `0..randomness`.
    pub randomness: u32,
    /// Values strictly above this (mod 256) render white.
    pub threshold: i32,
    pub format: OutputFormat,
    pub policy: TruncationPolicy,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            depth: 6,
            randomness: 0,
            threshold: 127,
            format: OutputFormat::Bmp,
            policy: TruncationPolicy::Perfect,
        }
    }
}

/// A parameter that was moved into its supported range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clamped {
    pub field: &'static str,
    pub requested: i64,
    pub used: i64,
}

impl GenerationParams {
    /// Clamp every field into its supported range.
    ///
    /// Returns the adjustments that were made.
    pub fn clamp(&mut self) -> Vec<Clamped> {
        let mut changes = Vec::new();

        clamp_field(&mut self.width, &DIMENSION_RANGE, "width", &mut changes);
        clamp_field(&mut self.height, &DIMENSION_RANGE, "height", &mut changes);
        clamp_field(&mut self.depth, &DEPTH_RANGE, "depth", &mut changes);
        clamp_field(&mut self.randomness, &RANDOMNESS_RANGE, "randomness", &mut changes);
        clamp_field(&mut self.threshold, &THRESHOLD_RANGE, "threshold", &mut changes);

        changes
    }

    /// Check that every field is within its supported range.
    pub fn validate(&self) -> Result<()> {
        check_field(self.width, &DIMENSION_RANGE, "width")?;
        check_field(self.height, &DIMENSION_RANGE, "height")?;
        check_field(self.depth, &DEPTH_RANGE, "depth")?;
        check_field(self.randomness, &RANDOMNESS_RANGE, "randomness")?;
        check_field(self.threshold, &THRESHOLD_RANGE, "threshold")?;
        Ok(())
    }
}

fn clamp_field<T>(
    value: &mut T,
    range: &RangeInclusive<T>,
    field: &'static str,
    changes: &mut Vec<Clamped>,
) where
    T: Copy + Ord + Into<i64>,
{
    let used = (*value).clamp(*range.start(), *range.end());
    if used != *value {
        changes.push(Clamped {
            field,
            requested: (*value).into(),
            used: used.into(),
        });
        *value = used;
    }
}

fn check_field<T>(value: T, range: &RangeInclusive<T>, field: &str) -> Result<()>
where
    T: Copy + PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(BittyError::Validation {
            message: format!("{} {} is out of range", field, value),
            help: Some(format!(
                "{} must be between {} and {}",
                field,
                range.start(),
                range.end()
            )),
        })
    }
}
