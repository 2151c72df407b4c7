use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use polystat::config::FileConfig;
use polystat::io::{LoadMode, load_polygons};
use polystat::output::Sink;
use polystat::run_session;

/// Answer area and vertex-count queries over a file of polygons
///
/// Polygon file: one polygon per line, `N (x1;y1) ... (xN;yN)`.
///
/// Commands (one per line, read from stdin unless --commands is given):
///   AREA EVEN | ODD | MEAN | <vertex count>
///   MAX AREA | VERTEXES
///   MIN AREA | VERTEXES
///
/// Examples:
///   polystat shapes.txt < queries.txt
///   echo "MAX AREA" | polystat shapes.txt
#[derive(Parser, Debug)]
#[command(name = "polystat")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon file (falls back to `input` in the config file)
    polygons: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polystat.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort on the first malformed polygon line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        Some(FileConfig::from_path(config_path)?)
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    setup_logging(verbose);

    let polygons_path = args
        .polygons
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let commands_path = args
        .commands
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.commands.clone()));
    let mode = if args.strict {
        LoadMode::Strict
    } else {
        file_config
            .as_ref()
            .map(FileConfig::load_mode)
            .unwrap_or_default()
    };

    let Some(polygons_path) = polygons_path else {
        bail!("No polygon file given: pass it as an argument or set `input` in polystat.toml");
    };

    let report = load_polygons(&polygons_path, mode)?;
    info!(
        "Loaded {} polygons from {} ({} lines skipped)",
        report.polygons.len(),
        polygons_path.display(),
        report.skipped
    );

    let input: Box<dyn BufRead> = match commands_path {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open command file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut sink = Sink::new(BufWriter::new(stdout.lock()));
    let summary =
        run_session(&report.polygons, input, &mut sink).context("Failed to write results")?;

    debug!(
        commands = summary.commands,
        unknown = summary.unknown,
        "session finished"
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Failed to install logger: {}", e);
    }
}
