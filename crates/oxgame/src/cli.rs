//! Command-line interface for oxgame.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OX game - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "oxgame")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "oxgame.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of commands to a new game and print the result
    Replay {
        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Cell index (0-8) or label (e.g. `center`), `jump=K`, `sort` or `help`
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["oxgame"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("oxgame.toml"));
    }

    #[test]
    fn test_replay_collects_tokens() {
        let cli = Cli::try_parse_from(["oxgame", "replay", "--json", "0", "center", "jump=1"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                json: true,
                tokens: vec!["0".into(), "center".into(), "jump=1".into()],
            })
        );
    }

    #[test]
    fn test_replay_requires_tokens() {
        assert!(Cli::try_parse_from(["oxgame", "replay"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
