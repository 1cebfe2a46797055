//! avatar-cli - generate, render and inspect ugly avatars.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use avatar_cli::{batch_seed, decode, describe, encode, output_path, OutputFormat};
use ugly_avatar::svg::RenderOptions;
use ugly_avatar::{color::Rgba8, generate_avatar};

/// Procedural "ugly avatar" generator
#[derive(Parser)]
#[command(name = "avatar-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more avatars
    Generate {
        /// Text seed; the same seed always gives the same avatar
        #[arg(short, long, env = "AVATAR_SEED")]
        seed: Option<String>,

        /// Number of avatars to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Output directory (stdout when omitted and count is 1)
        #[arg(short, long, env = "AVATAR_OUTPUT")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a saved JSON avatar to SVG
    Render {
        /// Avatar JSON produced by `generate --format json`
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Print a summary of one avatar
    Inspect {
        #[arg(short, long, env = "AVATAR_SEED")]
        seed: Option<String>,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Image width and height in pixels
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Skin color as #rgb or #rrggbb
    #[arg(long)]
    skin: Option<Rgba8>,

    /// Disable the rough face outline filter
    #[arg(long)]
    no_filter: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            size: self.size,
            skin: self.skin.unwrap_or(defaults.skin),
            fuzzy_outline: !self.no_filter,
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            seed,
            count,
            output,
            format,
            render,
        } => {
            cmd_generate(seed.as_deref(), count, output.as_deref(), format, &render.options())?;
        }
        Commands::Render {
            input,
            output,
            render,
        } => {
            cmd_render(&input, output.as_deref(), &render.options())?;
        }
        Commands::Inspect { seed } => {
            print!("{}", describe(&generate_avatar(seed.as_deref())));
        }
    }

    Ok(())
}

fn cmd_generate(
    seed: Option<&str>,
    count: usize,
    output: Option<&Path>,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let Some(dir) = output else {
        if count > 1 {
            bail!("--output is required when generating more than one avatar");
        }
        let avatar = generate_avatar(seed);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", encode(&avatar, format, opts)?)?;
        return Ok(());
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    for index in 1..=count {
        let avatar = generate_avatar(batch_seed(seed, index, count).as_deref());
        let path = output_path(dir, index, format);
        fs::write(&path, encode(&avatar, format, opts)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    println!("Generated {} avatar(s) in {}", count, dir.display());
    Ok(())
}

fn cmd_render(input: &Path, output: Option<&Path>, opts: &RenderOptions) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let avatar = decode(&json)?;
    let svg = encode(&avatar, OutputFormat::Svg, opts)?;

    match output {
        Some(path) => fs::write(path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{svg}"),
    }
    Ok(())
}
