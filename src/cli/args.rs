//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Batch lip-sync driver for paired video and audio files.
#[derive(Debug, Parser)]
#[command(name = "lipbatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Folder containing video and audio files to pair.
    pub folder: Option<PathBuf>,

    /// Common options for batch processing.
    #[command(flatten)]
    pub process: ProcessArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for batch processing.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProcessArgs {
    /// Path to the lip-sync model checkpoint.
    #[arg(long, env = "LIPBATCH_CHECKPOINT")]
    pub checkpoint: Option<PathBuf>,

    /// Center audio within the video by padding with silence.
    #[arg(long, action = clap::ArgAction::Set, value_name = "BOOL",
          env = "LIPBATCH_PAD_AUDIO")]
    pub pad_audio: Option<bool>,

    /// Interpreter used to run the inference script.
    #[arg(long, env = "LIPBATCH_PYTHON")]
    pub python: Option<String>,

    /// Path to the inference script.
    #[arg(long, env = "LIPBATCH_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Executable used to probe media durations.
    #[arg(long, env = "LIPBATCH_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_folder() {
        let cli = Cli::try_parse_from(["lipbatch", "recordings"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.folder, Some(PathBuf::from("recordings")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "lipbatch",
            "recordings",
            "--checkpoint",
            "models/wav2lip.pth",
            "--pad-audio",
            "false",
            "-q",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(
            cli.process.checkpoint,
            Some(PathBuf::from("models/wav2lip.pth"))
        );
        assert_eq!(cli.process.pad_audio, Some(false));
        assert!(cli.process.quiet);
    }

    #[test]
    fn test_pad_audio_requires_a_value() {
        // A bare --pad-audio would swallow the folder argument; the flag
        // takes an explicit true/false.
        let cli = Cli::try_parse_from(["lipbatch", "--pad-audio", "recordings"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_pad_audio_defaults_to_unset() {
        let cli = Cli::try_parse_from(["lipbatch", "recordings"]).unwrap();
        assert_eq!(cli.process.pad_audio, None);
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["lipbatch", "config", "show"]);
        assert!(cli.is_ok());
        assert!(matches!(
            cli.unwrap().command,
            Some(Command::Config { .. })
        ));
    }

    #[test]
    fn test_cli_parse_fail_fast_and_verbose() {
        let cli = Cli::try_parse_from(["lipbatch", "recordings", "--fail-fast", "-vv"]).unwrap();
        assert!(cli.process.fail_fast);
        assert_eq!(cli.process.verbose, 2);
    }
}
