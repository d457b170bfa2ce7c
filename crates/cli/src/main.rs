#![deny(unsafe_code)]
//! CLI binary for portfolio-fx.
//!
//! Subcommands:
//! - `render <scene>`: advance a scene N frames, write a PNG snapshot
//! - `replay <seed.json>`: re-render a snapshot from a saved seed
//! - `list`: print available scenes and their parameters

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use portfolio_fx_core::{Seed, Srgb};
use portfolio_fx_scenes::{render_seed, snapshot, SceneKind};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "portfolio-fx", about = "Offline renderer for the portfolio backgrounds")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where and how to write the snapshot.
#[derive(Args)]
struct OutputArgs {
    /// Output file path.
    #[arg(short, long, default_value = "background.png")]
    output: PathBuf,

    /// Page background the frame is composited over.
    #[arg(short, long, default_value = "#1e1e1f")]
    background: String,

    /// Keep the background transparent instead.
    #[arg(long, conflicts_with = "background")]
    transparent: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Advance a scene for N frames and write a PNG snapshot.
    Render {
        /// Scene name (e.g. "neural").
        scene: String,

        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 1280)]
        width: usize,

        /// Viewport height in pixels (full page height, not just the window).
        #[arg(short = 'H', long, default_value_t = 800)]
        height: usize,

        /// Number of animation frames to advance before the snapshot.
        #[arg(short, long, default_value_t = 600)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Scene parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Re-render a snapshot from a seed file written by `render --json`.
    Replay {
        /// Path to the seed JSON.
        seed_file: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// List available scenes and their parameters.
    List,
}

fn background(out: &OutputArgs) -> Result<Option<Srgb>, CliError> {
    if out.transparent {
        return Ok(None);
    }
    Srgb::from_hex(&out.background)
        .map(Some)
        .map_err(|e| CliError::Input(format!("invalid --background: {e}")))
}

fn read_seed(path: &Path) -> Result<Seed, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid seed file {}: {e}", path.display())))
}

fn write_snapshot(seed: &Seed, out: &OutputArgs, json: bool) -> Result<(), CliError> {
    let bg = background(out)?;
    let raster = render_seed(seed)?;
    snapshot::write_png(&raster, bg, &out.output)?;

    if json {
        let info = serde_json::json!({
            "seed": seed,
            "output": out.output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {} steps, seed {}) -> {}",
            seed.scene,
            seed.width,
            seed.height,
            seed.steps,
            seed.seed,
            out.output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let catalog = SceneKind::catalog()?;
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("Scenes:");
                for name in SceneKind::list_scenes() {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            scene,
            width,
            height,
            steps,
            seed,
            params,
            out,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let seed = Seed {
                scene,
                width,
                height,
                params,
                seed,
                steps,
            };
            write_snapshot(&seed, &out, cli.json)?;
        }
        Command::Replay { seed_file, out } => {
            let seed = read_seed(&seed_file)?;
            write_snapshot(&seed, &out, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
