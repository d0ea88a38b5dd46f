//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Field-enum
//! arguments get their own `ValueEnum` types so the core record enums stay
//! free of clap.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::record::{FlightCategory, FlightKind, RequestKind, Weather};

/// Airport record commands.
#[derive(Debug, Subcommand)]
pub enum AirportCommand {
    /// Add a new airport
    Add {
        /// Three-letter airport code, e.g. KHI
        code: String,
    },

    /// Remove an airport and every flight that references it
    Remove {
        /// Airport code
        code: String,
    },

    /// Flip an airport between open and closed
    Toggle {
        /// Airport code
        code: String,
    },

    /// Set the weather at an airport
    Weather {
        /// Airport code
        code: String,

        /// New weather
        #[arg(value_enum)]
        weather: WeatherArg,
    },

    /// List tracked airports, most recently added first
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Flight record commands.
#[derive(Debug, Subcommand)]
pub enum FlightCommand {
    /// Add a new flight
    Add {
        /// Flight number, e.g. PK-301
        number: String,

        /// Source airport code
        #[arg(long = "from", value_name = "CODE")]
        source: String,

        /// Destination airport code
        #[arg(long = "to", value_name = "CODE")]
        destination: String,

        /// Arrival or departure
        #[arg(short, long, value_enum)]
        kind: FlightKindArg,

        /// Domestic or international
        #[arg(long, value_enum)]
        category: FlightCategoryArg,
    },

    /// Remove a single flight
    Remove {
        /// Flight number
        number: String,
    },

    /// List tracked flights, most recently added first
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Runway commands.
#[derive(Debug, Subcommand)]
pub enum RunwayCommand {
    /// Assign the runway at an airport
    Assign {
        /// Airport code
        code: String,
    },

    /// Release the runway at an airport
    Release {
        /// Airport code
        code: String,
    },

    /// Show runway availability for all airports
    Status,
}

/// Pilot request commands.
#[derive(Debug, Subcommand)]
pub enum RequestCommand {
    /// Queue a landing or takeoff request
    Submit {
        /// Flight number (not required to match a tracked flight)
        flight_number: String,

        /// Landing or takeoff
        #[arg(value_enum)]
        kind: RequestKindArg,

        /// Declare an emergency
        #[arg(short, long)]
        emergency: bool,
    },

    /// Show the pending request queue in submission order
    Queue,

    /// Process every pending request and clear the queue
    Process,
}

/// Board command arguments.
#[derive(Debug, Args)]
pub struct BoardCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Weather argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeatherArg {
    /// Clear skies
    Clear,
    /// Rain
    Rain,
    /// Fog
    Fog,
}

impl From<WeatherArg> for Weather {
    fn from(arg: WeatherArg) -> Self {
        match arg {
            WeatherArg::Clear => Self::Clear,
            WeatherArg::Rain => Self::Rain,
            WeatherArg::Fog => Self::Fog,
        }
    }
}

/// Flight kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlightKindArg {
    /// Inbound flight
    Arrival,
    /// Outbound flight
    Departure,
}

impl From<FlightKindArg> for FlightKind {
    fn from(arg: FlightKindArg) -> Self {
        match arg {
            FlightKindArg::Arrival => Self::Arrival,
            FlightKindArg::Departure => Self::Departure,
        }
    }
}

/// Flight category argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlightCategoryArg {
    /// Both endpoints inside the country
    Domestic,
    /// At least one endpoint abroad
    International,
}

impl From<FlightCategoryArg> for FlightCategory {
    fn from(arg: FlightCategoryArg) -> Self {
        match arg {
            FlightCategoryArg::Domestic => Self::Domestic,
            FlightCategoryArg::International => Self::International,
        }
    }
}

/// Request kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestKindArg {
    /// Clearance to land
    Landing,
    /// Clearance to take off
    Takeoff,
}

impl From<RequestKindArg> for RequestKind {
    fn from(arg: RequestKindArg) -> Self {
        match arg {
            RequestKindArg::Landing => Self::Landing,
            RequestKindArg::Takeoff => Self::Takeoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_arg_conversion() {
        assert_eq!(Weather::from(WeatherArg::Clear), Weather::Clear);
        assert_eq!(Weather::from(WeatherArg::Rain), Weather::Rain);
        assert_eq!(Weather::from(WeatherArg::Fog), Weather::Fog);
    }

    #[test]
    fn test_flight_kind_arg_conversion() {
        assert_eq!(FlightKind::from(FlightKindArg::Arrival), FlightKind::Arrival);
        assert_eq!(
            FlightKind::from(FlightKindArg::Departure),
            FlightKind::Departure
        );
    }

    #[test]
    fn test_category_arg_conversion() {
        assert_eq!(
            FlightCategory::from(FlightCategoryArg::Domestic),
            FlightCategory::Domestic
        );
        assert_eq!(
            FlightCategory::from(FlightCategoryArg::International),
            FlightCategory::International
        );
    }

    #[test]
    fn test_request_kind_arg_conversion() {
        assert_eq!(
            RequestKind::from(RequestKindArg::Landing),
            RequestKind::Landing
        );
        assert_eq!(
            RequestKind::from(RequestKindArg::Takeoff),
            RequestKind::Takeoff
        );
    }

    #[test]
    fn test_airport_command_debug() {
        let cmd = AirportCommand::Add {
            code: "KHI".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Add"));
        assert!(debug_str.contains("KHI"));
    }

    #[test]
    fn test_board_command_debug() {
        let cmd = BoardCommand { json: true };
        assert!(format!("{cmd:?}").contains("json"));
    }
}
