//! Lipbatch - batch lip-sync driver.
//!
//! Pairs video files with audio tracks sharing a basename, optionally
//! centers the audio within the video duration by padding it with
//! silence, and invokes an external lip-sync inference process once per
//! pair.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod output;
pub mod pairing;
pub mod probe;

use clap::{CommandFactory, Parser};
use cli::{Cli, Command, ProcessArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use inference::InferenceRunner;
use pairing::MatchedPair;
use probe::DurationProber;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the lipbatch CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.process.verbose, cli.process.quiet);

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Default: process a folder of pairs
    // Show help if no folder provided
    let Some(folder) = cli.folder else {
        Cli::command().print_help()?;
        return Ok(());
    };

    process_folder(&folder, &cli.process, &config)
}

/// Resolved settings for one batch run, CLI taking precedence over
/// config, config over built-in defaults.
struct BatchSettings {
    pad_audio: bool,
    fail_fast: bool,
    prober: DurationProber,
    runner: InferenceRunner,
}

impl BatchSettings {
    fn resolve(args: &ProcessArgs, config: &Config) -> Self {
        let checkpoint = args
            .checkpoint
            .clone()
            .unwrap_or_else(|| config.defaults.checkpoint.clone());
        let python = args
            .python
            .clone()
            .unwrap_or_else(|| config.inference.python.clone());
        let script = args
            .script
            .clone()
            .unwrap_or_else(|| config.inference.script.clone());
        let ffprobe = args
            .ffprobe
            .clone()
            .unwrap_or_else(|| config.tools.ffprobe.clone());

        Self {
            pad_audio: args.pad_audio.unwrap_or(config.defaults.pad_audio),
            fail_fast: args.fail_fast,
            prober: DurationProber::new(ffprobe),
            runner: InferenceRunner::new(python, script, checkpoint),
        }
    }
}

/// Scan a folder and process every matched pair sequentially.
fn process_folder(folder: &Path, args: &ProcessArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    let scan = pairing::scan_folder(folder)?;
    let skipped = scan.already_done.len();
    for video in &scan.already_done {
        info!("Skipping {} (output exists)", video.display());
    }

    if scan.pairs.is_empty() {
        warn!(
            "No video/audio pairs to process in {} ({} skipped)",
            folder.display(),
            skipped
        );
        return Ok(());
    }

    info!("Found {} pair(s) to process", scan.pairs.len());

    let settings = BatchSettings::resolve(args, config);

    // Create pair progress bar
    let progress_enabled = !args.quiet && !args.no_progress;
    let pair_progress = progress::create_pair_progress(scan.pairs.len(), progress_enabled);

    // Process pairs one at a time; each pair fully completes before the
    // next begins, and a failed pair does not abort the batch unless
    // --fail-fast is set.
    let mut processed = 0;
    let mut errors = 0;

    for pair in &scan.pairs {
        match process_pair(pair, &settings) {
            Ok(output_path) => {
                processed += 1;
                info!("Successfully processed: {}", output_path.display());
            }
            Err(e) => {
                error!(
                    "Failed to process {} with {}: {e}",
                    pair.video.display(),
                    pair.audio.display()
                );
                errors += 1;
                if settings.fail_fast {
                    progress::finish_progress(pair_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(pair_progress.as_ref());
    }

    progress::finish_progress(pair_progress, "Complete");

    // Summary
    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors in {:.2}s",
        processed, skipped, errors, total_duration
    );

    if errors > 0 {
        warn!("{} pair(s) had errors", errors);
    }

    Ok(())
}

/// Process one matched pair: center the audio if enabled, then run
/// inference. Returns the output video path.
fn process_pair(pair: &MatchedPair, settings: &BatchSettings) -> Result<PathBuf> {
    let audio_path = if settings.pad_audio {
        audio::center_audio(&pair.video, &pair.audio, &settings.prober)?
    } else {
        pair.audio.clone()
    };

    let output_path = pairing::output_path_for(&pair.video);
    settings.runner.run(&pair.video, &audio_path, &output_path)?;

    Ok(output_path)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Build filter string based on verbosity level.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction, config: &Config) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
