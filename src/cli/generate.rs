//! Generate command implementation.
//!
//! Builds a random expression, renders it to a BMP or XPM image and
//! prints the expression to stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::generate::Generation;
use crate::output::{display_path, Printer};
use crate::render::{write_image, write_meta_json, ImageMeta};
use crate::types::{Clamped, GenerationParams, OutputFormat};

use super::TreeArgs;

/// Output path used when neither the flag nor the preset gives one.
pub const DEFAULT_OUTPUT: &str = "bitty";

/// Generate an image from a random expression
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Image width in pixels (16-8192)
    #[arg(long, short = 'W')]
    pub width: Option<u32>,

    /// Image height in pixels (16-8192)
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Values above this (mod 256) render white (1-255)
    #[arg(long, short)]
    pub threshold: Option<i32>,

    /// Output format; sets the file extension
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output path (extension is replaced to match the format)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write generation metadata as JSON next to the image
    #[arg(long, short)]
    pub meta: bool,

    #[command(flatten)]
    pub tree: TreeArgs,
}

impl GenerateArgs {
    /// Overlay the flags that were given onto `params`.
    pub fn apply(&self, params: &mut GenerationParams) {
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(threshold) = self.threshold {
            params.threshold = threshold;
        }
        if let Some(format) = self.format {
            params.format = format;
        }
        self.tree.apply(params);
    }

    /// Image path with the extension for `format`.
    pub fn output_path(&self, config: &Config, format: OutputFormat) -> PathBuf {
        self.output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
            .with_extension(format.extension())
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.tree.load_config()?;

    // Defaults < preset < flags
    let mut params = GenerationParams::default();
    config.apply(&mut params);
    args.apply(&mut params);
    report_clamped(&params.clamp(), printer);

    let seed = args.tree.seed(&config);
    let path = args.output_path(&config, params.format);

    let generation = Generation::new(&params, seed)?;
    printer.status(
        "Generating",
        &format!(
            "{}x{} {}, depth {} ({}), seed {}",
            params.width,
            params.height,
            params.format,
            generation.depth(),
            params.policy,
            seed
        ),
    );

    let raster = generation.rasterize(
        params.width as usize,
        params.height as usize,
        params.threshold,
    )?;
    write_image(
        &raster,
        params.format,
        generation.expr(),
        generation.constant(),
        &path,
    )?;
    printer.status("Wrote", &display_path(&path));

    if args.meta || config.meta.unwrap_or(false) {
        let meta_path = path.with_extension("json");
        let meta = ImageMeta::new(&generation, &params, file_name(&path));
        write_meta_json(&meta, &meta_path)?;
        printer.status("Wrote", &display_path(&meta_path));
    }

    println!("{}", generation.summary());

    Ok(())
}

/// Warn about every parameter that was moved into range.
pub(crate) fn report_clamped(changes: &[Clamped], printer: &Printer) {
    for change in changes {
        printer.warning(
            "Clamped",
            &format!("{} {} to {}", change.field, change.requested, change.used),
        );
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    /// Args that read an empty preset so a stray ./bitty.yaml can't leak in.
    fn args_in(dir: &Path) -> GenerateArgs {
        let config = dir.join("empty.yaml");
        fs::write(&config, "").unwrap();

        GenerateArgs {
            width: Some(32),
            height: Some(16),
            output: Some(dir.join("image")),
            tree: TreeArgs {
                depth: Some(4),
                seed: Some(7),
                config: Some(config),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_bmp() {
        let dir = tempdir().unwrap();
        run(args_in(dir.path()), &quiet()).unwrap();

        let bytes = fs::read(dir.path().join("image.bmp")).unwrap();
        // 32 px rows are 96 bytes, already aligned
        assert_eq!(bytes.len(), 54 + 96 * 16);
        assert_eq!(&bytes[0..2], b"BM");
    }

    #[test]
    fn test_generate_xpm_with_meta() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            format: Some(OutputFormat::Xpm),
            meta: true,
            ..args_in(dir.path())
        };
        run(args, &quiet()).unwrap();

        let xpm = fs::read_to_string(dir.path().join("image.xpm")).unwrap();
        assert!(xpm.starts_with("/* XPM */\n"));
        assert!(xpm.contains("\"16 32 2 1\""));

        let json = fs::read_to_string(dir.path().join("image.json")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(meta["image"], "image.xpm");
        assert_eq!(meta["seed"], 7);
        assert_eq!(meta["depth"], 4);
    }

    #[test]
    fn test_output_extension_follows_format() {
        let args = GenerateArgs {
            output: Some(PathBuf::from("out/picture.png")),
            ..Default::default()
        };
        let config = Config::default();

        assert_eq!(
            args.output_path(&config, OutputFormat::Bmp),
            PathBuf::from("out/picture.bmp")
        );
        assert_eq!(
            GenerateArgs::default().output_path(&config, OutputFormat::Xpm),
            PathBuf::from("bitty.xpm")
        );
    }

    #[test]
    fn test_flags_override_preset() {
        let config = Config::parse("width: 100\nthreshold: 50\nformat: xpm").unwrap();
        let args = GenerateArgs {
            width: Some(64),
            ..Default::default()
        };

        let mut params = GenerationParams::default();
        config.apply(&mut params);
        args.apply(&mut params);

        assert_eq!(params.width, 64);
        assert_eq!(params.threshold, 50);
        assert_eq!(params.format, OutputFormat::Xpm);
    }

    #[test]
    fn test_out_of_range_flags_are_clamped() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            width: Some(2),
            threshold: Some(0),
            ..args_in(dir.path())
        };
        run(args, &quiet()).unwrap();

        // Width clamped up to 16: 48-byte rows
        let bytes = fs::read(dir.path().join("image.bmp")).unwrap();
        assert_eq!(bytes.len(), 54 + 48 * 16);
    }

    #[test]
    fn test_same_seed_same_image() {
        let dir = tempdir().unwrap();
        let first = args_in(dir.path());
        let second = GenerateArgs {
            output: Some(dir.path().join("again")),
            ..args_in(dir.path())
        };

        run(first, &quiet()).unwrap();
        run(second, &quiet()).unwrap();

        assert_eq!(
            fs::read(dir.path().join("image.bmp")).unwrap(),
            fs::read(dir.path().join("again.bmp")).unwrap()
        );
    }
}
