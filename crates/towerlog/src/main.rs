//! `towerctl` - CLI for towerlog
//!
//! This binary provides the command-line interface for managing the tower's
//! airport, flight, and pilot-request records. All user-facing text lives
//! here; the core never decides how results are displayed.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use towerlog::cli::{
    AirportCommand, BoardCommand, Cli, Command, ConfigCommand, FlightCommand, RequestCommand,
    RunwayCommand,
};
use towerlog::record::Airport;
use towerlog::{init_logging, Config, FileStore, Tower};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        // Config commands never touch the record files
        Command::Config(cmd) => handle_config(&config, cmd),
        command => {
            let store = FileStore::open(config.data_dir())?;
            let mut tower = Tower::open(store, config.queue.max_pending)?;
            match command {
                Command::Airport(cmd) => handle_airport(&mut tower, cmd),
                Command::Flight(cmd) => handle_flight(&mut tower, cmd),
                Command::Runway(cmd) => handle_runway(&mut tower, cmd),
                Command::Request(cmd) => handle_request(&mut tower, cmd),
                Command::Board(cmd) => handle_board(&tower, &cmd),
                Command::Seed => handle_seed(&mut tower),
                Command::Config(_) => unreachable!("handled above"),
            }
        }
    }
}

fn handle_airport(tower: &mut Tower, cmd: AirportCommand) -> Result<()> {
    match cmd {
        AirportCommand::Add { code } => {
            tower.add_airport(&code)?;
            println!("Airport {code} added.");
        }
        AirportCommand::Remove { code } => {
            let removed = tower.remove_airport(&code)?;
            println!("Airport {code} removed along with {removed} associated flight(s).");
        }
        AirportCommand::Toggle { code } => {
            let status = tower.toggle_status(&code)?;
            println!("Airport {code} is now {status}.");
        }
        AirportCommand::Weather { code, weather } => {
            let weather = weather.into();
            tower.set_weather(&code, weather)?;
            println!("Weather at {code} set to {weather}.");
        }
        AirportCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tower.airports())?);
            } else {
                print_airport_table(tower.airports());
            }
        }
    }
    Ok(())
}

fn handle_flight(tower: &mut Tower, cmd: FlightCommand) -> Result<()> {
    match cmd {
        FlightCommand::Add {
            number,
            source,
            destination,
            kind,
            category,
        } => {
            tower.add_flight(&number, &source, &destination, kind.into(), category.into())?;
            println!("Flight {number} added ({source} -> {destination}).");
        }
        FlightCommand::Remove { number } => {
            tower.remove_flight(&number)?;
            println!("Flight {number} removed.");
        }
        FlightCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tower.flights())?);
            } else if tower.flights().is_empty() {
                println!("No flights tracked.");
            } else {
                println!(
                    "{:<8} {:<12} {:<11} {:<14} EMERGENCY",
                    "NUMBER", "ROUTE", "KIND", "CATEGORY"
                );
                for flight in tower.flights() {
                    println!(
                        "{:<8} {:<12} {:<11} {:<14} {}",
                        flight.number,
                        format!("{}->{}", flight.source, flight.destination),
                        flight.kind.to_string(),
                        flight.category.to_string(),
                        if flight.emergency { "Yes" } else { "No" }
                    );
                }
            }
        }
    }
    Ok(())
}

fn handle_runway(tower: &mut Tower, cmd: RunwayCommand) -> Result<()> {
    match cmd {
        RunwayCommand::Assign { code } => {
            tower.assign_runway(&code)?;
            println!("Runway at {code} assigned.");
        }
        RunwayCommand::Release { code } => {
            tower.release_runway(&code)?;
            println!("Runway at {code} released.");
        }
        RunwayCommand::Status => {
            if tower.airports().is_empty() {
                println!("No airports tracked.");
            } else {
                println!("{:<6} RUNWAY", "CODE");
                for airport in tower.airports() {
                    println!("{:<6} {}", airport.code, runway_label(airport));
                }
            }
        }
    }
    Ok(())
}

fn handle_request(tower: &mut Tower, cmd: RequestCommand) -> Result<()> {
    match cmd {
        RequestCommand::Submit {
            flight_number,
            kind,
            emergency,
        } => {
            tower.submit_request(&flight_number, kind.into(), emergency)?;
            println!(
                "Request queued ({} of {}).",
                tower.requests().len(),
                tower.max_pending()
            );
        }
        RequestCommand::Queue => {
            if tower.requests().is_empty() {
                println!("No pending requests.");
            } else {
                println!("{:<8} {:<9} EMERGENCY", "FLIGHT", "KIND");
                for request in tower.requests() {
                    println!(
                        "{:<8} {:<9} {}",
                        request.flight_number,
                        request.kind.to_string(),
                        if request.emergency { "Yes" } else { "No" }
                    );
                }
            }
        }
        RequestCommand::Process => {
            let report = tower.process_requests()?;
            if report.is_empty() {
                println!("No pending requests.");
            } else {
                for entry in &report {
                    println!(
                        "Processing {} | {} | {}",
                        entry.flight_number, entry.kind, entry.classification
                    );
                }
                println!("{} request(s) processed, queue cleared.", report.len());
            }
        }
    }
    Ok(())
}

fn handle_board(tower: &Tower, cmd: &BoardCommand) -> Result<()> {
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(tower.airports())?);
    } else {
        print_airport_table(tower.airports());
    }
    Ok(())
}

fn handle_seed(tower: &mut Tower) -> Result<()> {
    tower.seed_demo()?;
    println!(
        "Seeded {} airports, {} flights, and {} pending requests.",
        tower.airports().len(),
        tower.flights().len(),
        tower.requests().len()
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory: {}", config.data_dir().display());
                println!();
                println!("[Queue]");
                println!("  Max pending:    {}", config.queue.max_pending);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_airport_table(airports: &[Airport]) {
    if airports.is_empty() {
        println!("No airports tracked.");
        return;
    }
    println!("{:<6} {:<8} {:<10} WEATHER", "CODE", "STATUS", "RUNWAY");
    for airport in airports {
        println!(
            "{:<6} {:<8} {:<10} {}",
            airport.code,
            airport.status.to_string(),
            runway_label(airport),
            airport.weather
        );
    }
}

fn runway_label(airport: &Airport) -> &'static str {
    if airport.runway_available {
        "Available"
    } else {
        "Occupied"
    }
}
