//! Command-line interface for towerlog.
//!
//! This module provides the CLI structure and command definitions for the
//! `towerctl` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AirportCommand, BoardCommand, ConfigCommand, FlightCategoryArg, FlightCommand, FlightKindArg,
    RequestCommand, RequestKindArg, RunwayCommand, WeatherArg,
};

/// towerctl - Keep the tower's records straight
///
/// A single-operator record keeper for airports, flights, and pilot
/// requests, persisted to plain-text files after every change.
#[derive(Debug, Parser)]
#[command(name = "towerctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage airport records
    #[command(subcommand)]
    Airport(AirportCommand),

    /// Manage flight records
    #[command(subcommand)]
    Flight(FlightCommand),

    /// Assign, release, and inspect runways
    #[command(subcommand)]
    Runway(RunwayCommand),

    /// Queue and process pilot requests
    #[command(subcommand)]
    Request(RequestCommand),

    /// Show the airport status board
    Board(BoardCommand),

    /// Install the demo records into an empty data directory
    Seed,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "towerctl");
    }

    #[test]
    fn test_verbosity_quiet_wins() {
        let cli = Cli::try_parse_from(["towerctl", "-q", "-v", "board"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["towerctl", "board"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["towerctl", "-v", "board"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["towerctl", "-vv", "board"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_airport_add() {
        let cli = Cli::try_parse_from(["towerctl", "airport", "add", "KHI"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Airport(AirportCommand::Add { .. })
        ));
    }

    #[test]
    fn test_parse_airport_weather() {
        let cli = Cli::try_parse_from(["towerctl", "airport", "weather", "ISB", "fog"]).unwrap();
        let Command::Airport(AirportCommand::Weather { code, weather }) = cli.command else {
            panic!("expected weather command");
        };
        assert_eq!(code, "ISB");
        assert_eq!(weather, WeatherArg::Fog);
    }

    #[test]
    fn test_parse_flight_add() {
        let cli = Cli::try_parse_from([
            "towerctl", "flight", "add", "PK-301", "--from", "KHI", "--to", "LHE", "--kind",
            "departure", "--category", "domestic",
        ])
        .unwrap();
        let Command::Flight(FlightCommand::Add {
            number,
            source,
            destination,
            kind,
            category,
        }) = cli.command
        else {
            panic!("expected flight add command");
        };
        assert_eq!(number, "PK-301");
        assert_eq!(source, "KHI");
        assert_eq!(destination, "LHE");
        assert_eq!(kind, FlightKindArg::Departure);
        assert_eq!(category, FlightCategoryArg::Domestic);
    }

    #[test]
    fn test_parse_request_submit_emergency() {
        let cli = Cli::try_parse_from([
            "towerctl",
            "request",
            "submit",
            "PK-302",
            "landing",
            "--emergency",
        ])
        .unwrap();
        let Command::Request(RequestCommand::Submit {
            flight_number,
            kind,
            emergency,
        }) = cli.command
        else {
            panic!("expected submit command");
        };
        assert_eq!(flight_number, "PK-302");
        assert_eq!(kind, RequestKindArg::Landing);
        assert!(emergency);
    }

    #[test]
    fn test_parse_runway_assign() {
        let cli = Cli::try_parse_from(["towerctl", "runway", "assign", "KHI"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Runway(RunwayCommand::Assign { .. })
        ));
    }

    #[test]
    fn test_parse_board_json() {
        let cli = Cli::try_parse_from(["towerctl", "board", "--json"]).unwrap();
        let Command::Board(board) = cli.command else {
            panic!("expected board command");
        };
        assert!(board.json);
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["towerctl", "seed"]).unwrap();
        assert!(matches!(cli.command, Command::Seed));
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["towerctl", "-c", "/custom/config.toml", "board"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
