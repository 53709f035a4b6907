//! JSON metadata sidecar.
//!
//! Records how an image was generated so it can be regenerated from the
//! seed. The file is written for reference and never read back.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{BittyError, Result};
use crate::generate::Generation;
use crate::types::{GenerationParams, OutputFormat, TruncationPolicy};

/// Generation metadata written next to an image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMeta {
    pub app: String,
    pub version: String,
    pub image: String,
    pub format: OutputFormat,
    pub size: Size,
    pub expression: String,
    pub constant: i32,
    pub seed: u64,
    pub depth: u32,
    pub policy: TruncationPolicy,
    pub threshold: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl ImageMeta {
    pub fn new(
        generation: &Generation,
        params: &GenerationParams,
        image: impl Into<String>,
    ) -> Self {
        Self {
            app: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            image: image.into(),
            format: params.format,
            size: Size {
                w: params.width,
                h: params.height,
            },
            expression: generation.expr().render(),
            constant: generation.constant(),
            seed: generation.seed(),
            depth: generation.depth(),
            policy: params.policy,
            threshold: params.threshold,
        }
    }
}

/// Write metadata as pretty-printed JSON.
pub fn write_meta_json(meta: &ImageMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| BittyError::Build {
        message: format!("Failed to serialize image metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| BittyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image metadata: {}", e),
    })?;
    Ok(())
}
