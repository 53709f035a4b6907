//! Preset file (bitty.yaml) parsing.
//!
//! A preset supplies defaults for generation settings. Every key is
//! optional; command-line flags override whatever the preset sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BittyError, Result};
use crate::types::{GenerationParams, OutputFormat, TruncationPolicy};

/// Default preset filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "bitty.yaml";

/// Preset settings loaded from bitty.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub depth: Option<u32>,
    pub randomness: Option<u32>,
    pub threshold: Option<i32>,
    pub format: Option<OutputFormat>,
    pub policy: Option<TruncationPolicy>,

    /// Output path; the extension is replaced to match the format.
    pub output: Option<PathBuf>,

    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,

    /// Write a JSON metadata file next to the image.
    pub meta: Option<bool>,
}

impl Config {
    /// Load a preset from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BittyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a preset from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BittyError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load the explicit preset if given, else `bitty.yaml` in `dir` if present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay the preset onto `params`.
    pub fn apply(&self, params: &mut GenerationParams) {
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(depth) = self.depth {
            params.depth = depth;
        }
        if let Some(randomness) = self.randomness {
            params.randomness = randomness;
        }
        if let Some(threshold) = self.threshold {
            params.threshold = threshold;
        }
        if let Some(format) = self.format {
            params.format = format;
        }
        if let Some(policy) = self.policy {
            params.policy = policy;
        }
    }
}
