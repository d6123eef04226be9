//! CLI argument definitions for the Region Shell host.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "regionshell",
    version,
    about = "Region Shell - inspect window settings and replay navigation sessions",
    long_about = "Host for the Region Shell desktop core.\n\n\
                  Inspects and resets the persisted window settings, and replays scripted\n\
                  navigation sessions against a headless main window."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform config folder.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect or reset the persisted window settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Replay a navigation session against a headless main window.
    Session(SessionArgs),
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingsAction {
    /// Print the persisted window settings.
    Show,
    /// Print the settings file location.
    Path,
    /// Overwrite the settings file with defaults.
    Reset,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Destinations to navigate the root region to, in order (default: InitView).
    #[arg(value_name = "DEST")]
    pub destinations: Vec<String>,

    /// Number of GoBack steps after navigating.
    #[arg(long = "back", value_name = "N", default_value_t = 0)]
    pub back: usize,

    /// Number of GoForward steps after going back.
    #[arg(long = "forward", value_name = "N", default_value_t = 0)]
    pub forward: usize,

    /// Maximize the window before navigating.
    #[arg(long = "maximize")]
    pub maximize: bool,

    /// Do not write the settings file on shutdown.
    #[arg(long = "no-persist")]
    pub no_persist: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let cli = Cli::try_parse_from(["regionshell", "session"]).unwrap();
        let Command::Session(args) = cli.command else {
            panic!("expected session command");
        };
        assert!(args.destinations.is_empty());
        assert_eq!(args.back, 0);
        assert_eq!(args.forward, 0);
        assert!(!args.maximize);
        assert!(!args.no_persist);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_session_with_moves_and_global_flags() {
        let cli = Cli::try_parse_from([
            "regionshell",
            "session",
            "InitView",
            "Settings",
            "--back",
            "2",
            "--forward",
            "1",
            "--maximize",
            "--no-persist",
            "--config",
            "/tmp/shell.toml",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/shell.toml")));
        let Command::Session(args) = cli.command else {
            panic!("expected session command");
        };
        assert_eq!(args.destinations, vec!["InitView", "Settings"]);
        assert_eq!((args.back, args.forward), (2, 1));
        assert!(args.maximize && args.no_persist);
    }

    #[test]
    fn test_settings_actions() {
        for (word, expected) in [
            ("show", SettingsAction::Show),
            ("path", SettingsAction::Path),
            ("reset", SettingsAction::Reset),
        ] {
            let cli = Cli::try_parse_from(["regionshell", "settings", word]).unwrap();
            let Command::Settings { action } = cli.command else {
                panic!("expected settings command");
            };
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn test_rejects_negative_steps() {
        assert!(Cli::try_parse_from(["regionshell", "session", "--back", "-1"]).is_err());
    }
}
