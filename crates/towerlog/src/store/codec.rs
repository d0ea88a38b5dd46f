//! Line codec for the persistence files.
//!
//! One record per line, single-space-separated fields in fixed order,
//! booleans encoded as `1`/`0`:
//!
//! - airports: `<code> <status> <weather> <runwayFlag>`
//! - flights:  `<number> <source> <destination> <kind> <category> <emergencyFlag>`
//! - requests: `<flightNumber> <kind> <emergencyFlag>`

use crate::record::{Airport, Flight, PilotRequest};

fn encode_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn parse_flag(token: &str) -> Result<bool, String> {
    match token {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(format!("expected flag '0' or '1', got '{other}'")),
    }
}

/// Encode an airport as a persistence line (no trailing newline).
#[must_use]
pub fn encode_airport(airport: &Airport) -> String {
    format!(
        "{} {} {} {}",
        airport.code,
        airport.status,
        airport.weather,
        encode_flag(airport.runway_available)
    )
}

/// Parse an airport persistence line.
///
/// # Errors
///
/// Returns a description of the problem if the line does not have exactly
/// four fields or a field token is unrecognized.
pub fn parse_airport(line: &str) -> Result<Airport, String> {
    let fields: Vec<&str> = line.split(' ').collect();
    let [code, status, weather, runway] = fields.as_slice() else {
        return Err(format!("expected 4 fields, got {}", fields.len()));
    };
    Ok(Airport {
        code: (*code).to_string(),
        status: status.parse()?,
        weather: weather.parse()?,
        runway_available: parse_flag(runway)?,
    })
}

/// Encode a flight as a persistence line (no trailing newline).
#[must_use]
pub fn encode_flight(flight: &Flight) -> String {
    format!(
        "{} {} {} {} {} {}",
        flight.number,
        flight.source,
        flight.destination,
        flight.kind,
        flight.category,
        encode_flag(flight.emergency)
    )
}

/// Parse a flight persistence line.
///
/// # Errors
///
/// Returns a description of the problem if the line does not have exactly
/// six fields or a field token is unrecognized.
pub fn parse_flight(line: &str) -> Result<Flight, String> {
    let fields: Vec<&str> = line.split(' ').collect();
    let [number, source, destination, kind, category, emergency] = fields.as_slice() else {
        return Err(format!("expected 6 fields, got {}", fields.len()));
    };
    Ok(Flight {
        number: (*number).to_string(),
        source: (*source).to_string(),
        destination: (*destination).to_string(),
        kind: kind.parse()?,
        category: category.parse()?,
        emergency: parse_flag(emergency)?,
    })
}

/// Encode a pilot request as a persistence line (no trailing newline).
#[must_use]
pub fn encode_request(request: &PilotRequest) -> String {
    format!(
        "{} {} {}",
        request.flight_number,
        request.kind,
        encode_flag(request.emergency)
    )
}

/// Parse a pilot request persistence line.
///
/// # Errors
///
/// Returns a description of the problem if the line does not have exactly
/// three fields or a field token is unrecognized.
pub fn parse_request(line: &str) -> Result<PilotRequest, String> {
    let fields: Vec<&str> = line.split(' ').collect();
    let [flight_number, kind, emergency] = fields.as_slice() else {
        return Err(format!("expected 3 fields, got {}", fields.len()));
    };
    Ok(PilotRequest {
        flight_number: (*flight_number).to_string(),
        kind: kind.parse()?,
        emergency: parse_flag(emergency)?,
    })
}
