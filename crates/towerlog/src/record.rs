//! Core record types for towerlog.
//!
//! This module defines the three record kinds the tower keeps: airports,
//! flights, and pending pilot requests, along with their field enums.
//! Enum `Display`/`FromStr` spellings match the tokens used in the
//! persistence files.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operational status of an airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirportStatus {
    /// The airport is open for operations.
    Open,
    /// The airport is closed.
    Closed,
}

impl AirportStatus {
    /// The opposite status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

impl std::fmt::Display for AirportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for AirportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            other => Err(format!("unknown airport status: {other}")),
        }
    }
}

/// Current weather at an airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Clear skies.
    Clear,
    /// Rain.
    Rain,
    /// Fog.
    Fog,
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "Clear"),
            Self::Rain => write!(f, "Rain"),
            Self::Fog => write!(f, "Fog"),
        }
    }
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clear" => Ok(Self::Clear),
            "Rain" => Ok(Self::Rain),
            "Fog" => Ok(Self::Fog),
            other => Err(format!("unknown weather: {other}")),
        }
    }
}

/// Direction of a flight relative to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightKind {
    /// Inbound flight.
    Arrival,
    /// Outbound flight.
    Departure,
}

impl std::fmt::Display for FlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrival => write!(f, "Arrival"),
            Self::Departure => write!(f, "Departure"),
        }
    }
}

impl FromStr for FlightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Arrival" => Ok(Self::Arrival),
            "Departure" => Ok(Self::Departure),
            other => Err(format!("unknown flight kind: {other}")),
        }
    }
}

/// Route category of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightCategory {
    /// Both endpoints inside the country.
    Domestic,
    /// At least one endpoint abroad.
    International,
}

impl std::fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::International => write!(f, "International"),
        }
    }
}

impl FromStr for FlightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Domestic" => Ok(Self::Domestic),
            "International" => Ok(Self::International),
            other => Err(format!("unknown flight category: {other}")),
        }
    }
}

/// What a pilot is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Clearance to land.
    Landing,
    /// Clearance to take off.
    Takeoff,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landing => write!(f, "Landing"),
            Self::Takeoff => write!(f, "Takeoff"),
        }
    }
}

impl FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Landing" => Ok(Self::Landing),
            "Takeoff" => Ok(Self::Takeoff),
            other => Err(format!("unknown request kind: {other}")),
        }
    }
}

/// A tracked airport.
///
/// Codes are three uppercase ASCII letters and unique within the tower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter airport code.
    pub code: String,
    /// Open or closed.
    pub status: AirportStatus,
    /// Current weather.
    pub weather: Weather,
    /// Whether the runway is free for assignment.
    pub runway_available: bool,
}

impl Airport {
    /// Create a new airport record with the defaults given to fresh entries:
    /// open, clear weather, runway available.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status: AirportStatus::Open,
            weather: Weather::Clear,
            runway_available: true,
        }
    }
}

/// A tracked flight.
///
/// Source and destination are free-text codes; they are deliberately not
/// checked against the airports collection, so a flight may reference a
/// field the tower does not track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number, e.g. `PK-301`.
    pub number: String,
    /// Departure field code.
    pub source: String,
    /// Arrival field code.
    pub destination: String,
    /// Arrival or departure.
    pub kind: FlightKind,
    /// Domestic or international.
    pub category: FlightCategory,
    /// Emergency flag; starts false, may be overwritten by a pilot request
    /// naming the same flight number.
    pub emergency: bool,
}

impl Flight {
    /// Create a new flight record with the emergency flag cleared.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        kind: FlightKind,
        category: FlightCategory,
    ) -> Self {
        Self {
            number: number.into(),
            source: source.into(),
            destination: destination.into(),
            kind,
            category,
            emergency: false,
        }
    }
}

/// A queued pilot request.
///
/// Tied to a flight loosely, by number rather than reference; the number is
/// not required to match any tracked flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotRequest {
    /// Flight number the pilot gave.
    pub flight_number: String,
    /// Landing or takeoff.
    pub kind: RequestKind,
    /// Whether the pilot declared an emergency.
    pub emergency: bool,
}

impl PilotRequest {
    /// Create a new pilot request.
    #[must_use]
    pub fn new(flight_number: impl Into<String>, kind: RequestKind, emergency: bool) -> Self {
        Self {
            flight_number: flight_number.into(),
            kind,
            emergency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggled() {
        assert_eq!(AirportStatus::Open.toggled(), AirportStatus::Closed);
        assert_eq!(AirportStatus::Closed.toggled(), AirportStatus::Open);
    }

    #[test]
    fn test_status_display_roundtrip() {
        for status in [AirportStatus::Open, AirportStatus::Closed] {
            let parsed: AirportStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_weather_display_roundtrip() {
        for weather in [Weather::Clear, Weather::Rain, Weather::Fog] {
            let parsed: Weather = weather.to_string().parse().unwrap();
            assert_eq!(parsed, weather);
        }
    }

    #[test]
    fn test_flight_kind_display_roundtrip() {
        for kind in [FlightKind::Arrival, FlightKind::Departure] {
            let parsed: FlightKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in [FlightCategory::Domestic, FlightCategory::International] {
            let parsed: FlightCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_request_kind_display_roundtrip() {
        for kind in [RequestKind::Landing, RequestKind::Takeoff] {
            let parsed: RequestKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!("open".parse::<AirportStatus>().is_err());
        assert!("Sunny".parse::<Weather>().is_err());
        assert!("arrival".parse::<FlightKind>().is_err());
        assert!("Regional".parse::<FlightCategory>().is_err());
        assert!("landing".parse::<RequestKind>().is_err());
    }

    #[test]
    fn test_airport_new_defaults() {
        let airport = Airport::new("KHI");
        assert_eq!(airport.code, "KHI");
        assert_eq!(airport.status, AirportStatus::Open);
        assert_eq!(airport.weather, Weather::Clear);
        assert!(airport.runway_available);
    }

    #[test]
    fn test_flight_new_defaults() {
        let flight = Flight::new(
            "PK-301",
            "KHI",
            "LHE",
            FlightKind::Departure,
            FlightCategory::Domestic,
        );
        assert_eq!(flight.number, "PK-301");
        assert!(!flight.emergency);
    }

    #[test]
    fn test_pilot_request_new() {
        let request = PilotRequest::new("PK-302", RequestKind::Landing, true);
        assert_eq!(request.flight_number, "PK-302");
        assert_eq!(request.kind, RequestKind::Landing);
        assert!(request.emergency);
    }

    #[test]
    fn test_airport_serialization() {
        let airport = Airport::new("LHE");
        let json = serde_json::to_string(&airport).unwrap();
        let back: Airport = serde_json::from_str(&json).unwrap();
        assert_eq!(airport, back);
        assert!(json.contains("\"Open\""));
    }
}
