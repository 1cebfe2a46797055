//! Batch generation and output helpers for the avatar CLI.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use ugly_avatar::svg::{render_svg, RenderOptions};
use ugly_avatar::AvatarData;

/// Serialization of a generated avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// `AvatarData` as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

/// Seed for avatar `index` (1-based) of a batch of `count`.
///
/// A single avatar keeps the base seed; batches derive `"<seed>-<index>"`
/// so every file is distinct yet reproducible. No base seed means every
/// avatar is drawn from entropy.
pub fn batch_seed(base: Option<&str>, index: usize, count: usize) -> Option<String> {
    match base {
        Some(seed) if count > 1 => Some(format!("{seed}-{index}")),
        Some(seed) => Some(seed.to_string()),
        None => None,
    }
}

/// `<dir>/avatar_<index>.<ext>`
pub fn output_path(dir: &Path, index: usize, format: OutputFormat) -> PathBuf {
    dir.join(format!("avatar_{index}.{}", format.extension()))
}

pub fn encode(avatar: &AvatarData, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(render_svg(avatar, opts)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(avatar).context("Failed to serialize avatar")
        }
    }
}

pub fn decode(json: &str) -> Result<AvatarData> {
    let avatar: AvatarData = serde_json::from_str(json).context("Invalid avatar JSON")?;
    anyhow::ensure!(
        avatar.is_well_formed(),
        "Avatar JSON has non-finite coordinates or point counts that do not match its types"
    );
    Ok(avatar)
}

/// Human-readable summary used by `inspect`.
pub fn describe(avatar: &AvatarData) -> String {
    let mut out = String::new();
    let hair_paint = if avatar.has_rainbow_hair {
        "rainbow".to_string()
    } else {
        avatar.hair_color.to_string()
    };
    let _ = writeln!(
        out,
        "hair:       {:?} ({} strands, {})",
        avatar.hair_type,
        avatar.hair_lines.len(),
        hair_paint
    );
    let _ = writeln!(
        out,
        "mouth:      {:?} ({} points)",
        avatar.mouth_type,
        avatar.mouth_shape.len()
    );
    let _ = writeln!(
        out,
        "nose:       {:?} ({} points)",
        avatar.nose_type,
        avatar.nose_points.len()
    );
    let _ = writeln!(out, "face:       {} points", avatar.face_shape.len());
    let _ = writeln!(out, "background: {}", avatar.background_color);
    if let Some(b) = avatar.bounds() {
        let _ = writeln!(
            out,
            "bounds:     ({:.2}, {:.2}) - ({:.2}, {:.2})",
            b.x1, b.y1, b.x2, b.y2
        );
    }
    out
}
