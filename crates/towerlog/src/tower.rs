//! The tower state container and its operations.
//!
//! A [`Tower`] exclusively owns the three record collections and is the only
//! way to mutate them. Every operation checks its preconditions before
//! touching any state, and every successful mutation rewrites the
//! persistence files before returning. Lookups are linear scans; at the
//! expected scale (tens of records) no index is warranted.
//!
//! New airports and flights are prepended, so the collections read
//! most-recent-first. Pilot requests are appended and drained in FIFO order.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{
    Airport, AirportStatus, Flight, FlightCategory, FlightKind, PilotRequest, RequestKind, Weather,
};
use crate::store::FileStore;
use crate::validate::{airport_code_is_valid, flight_number_is_valid};

/// Default capacity of the pilot request queue.
pub const DEFAULT_MAX_PENDING: usize = 50;

/// How a processed request was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    /// The pilot declared an emergency.
    Emergency,
    /// Routine traffic.
    Normal,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emergency => write!(f, "Emergency"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

/// One entry in the report produced by a queue drain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedRequest {
    /// Flight number from the request.
    pub flight_number: String,
    /// Landing or takeoff.
    pub kind: RequestKind,
    /// Emergency vs normal.
    pub classification: Classification,
}

/// The state container for airports, flights, and pending requests.
///
/// Single-owner, single-threaded: all operations take `&mut self` and run
/// synchronously. When backed by a [`FileStore`], every successful mutation
/// persists the complete state before returning; a write failure is fatal
/// and propagates as-is.
#[derive(Debug)]
pub struct Tower {
    airports: Vec<Airport>,
    flights: Vec<Flight>,
    requests: Vec<PilotRequest>,
    max_pending: usize,
    store: Option<FileStore>,
}

impl Tower {
    /// Create an empty tower with no backing store.
    #[must_use]
    pub fn in_memory(max_pending: usize) -> Self {
        Self {
            airports: Vec::new(),
            flights: Vec::new(),
            requests: Vec::new(),
            max_pending,
            store: None,
        }
    }

    /// Open a tower backed by the given store, loading any existing records.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be read or parsed.
    pub fn open(store: FileStore, max_pending: usize) -> Result<Self> {
        let (airports, flights, requests) = store.load()?;
        Ok(Self {
            airports,
            flights,
            requests,
            max_pending,
            store: Some(store),
        })
    }

    /// Read-only snapshot of the airports, most recently added first.
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Read-only snapshot of the flights, most recently added first.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Read-only snapshot of the pending request queue, in FIFO order.
    #[must_use]
    pub fn requests(&self) -> &[PilotRequest] {
        &self.requests
    }

    /// The configured queue capacity.
    #[must_use]
    pub fn max_pending(&self) -> usize {
        self.max_pending
    }

    /// Find a tracked airport by code.
    #[must_use]
    pub fn find_airport(&self, code: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.code == code)
    }

    /// Find a tracked flight by number.
    #[must_use]
    pub fn find_flight(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.number == number)
    }

    fn find_airport_mut(&mut self, code: &str) -> Option<&mut Airport> {
        self.airports.iter_mut().find(|a| a.code == code)
    }

    fn find_flight_mut(&mut self, number: &str) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.number == number)
    }

    fn persist(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store.save(&self.airports, &self.flights, &self.requests)?;
        }
        Ok(())
    }

    /// Add a new airport, prepended to the collection.
    ///
    /// Fresh airports start open, with clear weather and an available
    /// runway.
    ///
    /// # Errors
    ///
    /// Rejects a malformed code or a duplicate, and propagates persistence
    /// failures.
    pub fn add_airport(&mut self, code: &str) -> Result<()> {
        if !airport_code_is_valid(code) {
            return Err(Error::invalid_airport_code(code));
        }
        if self.find_airport(code).is_some() {
            return Err(Error::AirportExists {
                code: code.to_string(),
            });
        }
        self.airports.insert(0, Airport::new(code));
        self.persist()?;
        debug!("Added airport {code}");
        Ok(())
    }

    /// Remove an airport and every flight that names it as source or
    /// destination. Returns how many flights the cascade removed.
    ///
    /// # Errors
    ///
    /// Rejects an unknown code, and propagates persistence failures.
    pub fn remove_airport(&mut self, code: &str) -> Result<usize> {
        if self.find_airport(code).is_none() {
            return Err(Error::airport_not_found(code));
        }
        let before = self.flights.len();
        self.flights
            .retain(|f| f.source != code && f.destination != code);
        let removed = before - self.flights.len();
        self.airports.retain(|a| a.code != code);
        self.persist()?;
        info!("Removed airport {code} and {removed} associated flight(s)");
        Ok(removed)
    }

    /// Add a new flight, prepended to the collection.
    ///
    /// Source and destination are accepted as given; they are not required
    /// to name tracked airports. The emergency flag starts cleared.
    ///
    /// # Errors
    ///
    /// Rejects a malformed number or a duplicate, and propagates persistence
    /// failures.
    pub fn add_flight(
        &mut self,
        number: &str,
        source: &str,
        destination: &str,
        kind: FlightKind,
        category: FlightCategory,
    ) -> Result<()> {
        if !flight_number_is_valid(number) {
            return Err(Error::invalid_flight_number(number));
        }
        if self.find_flight(number).is_some() {
            return Err(Error::FlightExists {
                number: number.to_string(),
            });
        }
        self.flights
            .insert(0, Flight::new(number, source, destination, kind, category));
        self.persist()?;
        debug!("Added flight {number} ({source} -> {destination})");
        Ok(())
    }

    /// Remove a single flight.
    ///
    /// # Errors
    ///
    /// Rejects an unknown number, and propagates persistence failures.
    pub fn remove_flight(&mut self, number: &str) -> Result<()> {
        let Some(index) = self.flights.iter().position(|f| f.number == number) else {
            return Err(Error::flight_not_found(number));
        };
        self.flights.remove(index);
        self.persist()?;
        debug!("Removed flight {number}");
        Ok(())
    }

    /// Flip an airport between open and closed, returning the new status.
    ///
    /// # Errors
    ///
    /// Rejects an unknown code, and propagates persistence failures.
    pub fn toggle_status(&mut self, code: &str) -> Result<AirportStatus> {
        let airport = self
            .find_airport_mut(code)
            .ok_or_else(|| Error::airport_not_found(code))?;
        airport.status = airport.status.toggled();
        let status = airport.status;
        self.persist()?;
        debug!("Airport {code} is now {status}");
        Ok(status)
    }

    /// Mark an airport's runway as occupied.
    ///
    /// # Errors
    ///
    /// Rejects an unknown code or an already-occupied runway, and propagates
    /// persistence failures.
    pub fn assign_runway(&mut self, code: &str) -> Result<()> {
        let airport = self
            .find_airport_mut(code)
            .ok_or_else(|| Error::airport_not_found(code))?;
        if !airport.runway_available {
            return Err(Error::RunwayOccupied {
                code: code.to_string(),
            });
        }
        airport.runway_available = false;
        self.persist()?;
        debug!("Assigned runway at {code}");
        Ok(())
    }

    /// Mark an airport's runway as available, whether or not it was
    /// occupied.
    ///
    /// # Errors
    ///
    /// Rejects an unknown code, and propagates persistence failures.
    pub fn release_runway(&mut self, code: &str) -> Result<()> {
        let airport = self
            .find_airport_mut(code)
            .ok_or_else(|| Error::airport_not_found(code))?;
        airport.runway_available = true;
        self.persist()?;
        debug!("Released runway at {code}");
        Ok(())
    }

    /// Overwrite an airport's weather.
    ///
    /// # Errors
    ///
    /// Rejects an unknown code, and propagates persistence failures.
    pub fn set_weather(&mut self, code: &str, weather: Weather) -> Result<()> {
        let airport = self
            .find_airport_mut(code)
            .ok_or_else(|| Error::airport_not_found(code))?;
        airport.weather = weather;
        self.persist()?;
        debug!("Weather at {code} set to {weather}");
        Ok(())
    }

    /// Append a pilot request to the queue.
    ///
    /// The flight number is free text and is not validated against the
    /// flights collection, but if a tracked flight carries the same number
    /// its emergency flag is overwritten with the request's flag.
    ///
    /// # Errors
    ///
    /// Rejects a full queue, and propagates persistence failures.
    pub fn submit_request(
        &mut self,
        flight_number: &str,
        kind: RequestKind,
        emergency: bool,
    ) -> Result<()> {
        if self.requests.len() >= self.max_pending {
            return Err(Error::QueueFull {
                capacity: self.max_pending,
            });
        }
        self.requests
            .push(PilotRequest::new(flight_number, kind, emergency));
        if let Some(flight) = self.find_flight_mut(flight_number) {
            flight.emergency = emergency;
        }
        self.persist()?;
        debug!("Queued {kind} request for {flight_number} (emergency: {emergency})");
        Ok(())
    }

    /// Drain the whole request queue in insertion order.
    ///
    /// Each request yields one classification entry; the queue is cleared
    /// unconditionally afterwards. An empty queue yields an empty report and
    /// touches nothing.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn process_requests(&mut self) -> Result<Vec<ProcessedRequest>> {
        if self.requests.is_empty() {
            return Ok(Vec::new());
        }
        let report: Vec<ProcessedRequest> = self
            .requests
            .drain(..)
            .map(|request| {
                let classification = if request.emergency {
                    Classification::Emergency
                } else {
                    Classification::Normal
                };
                info!(
                    "Processing {} | {} | {}",
                    request.flight_number, request.kind, classification
                );
                ProcessedRequest {
                    flight_number: request.flight_number,
                    kind: request.kind,
                    classification,
                }
            })
            .collect();
        self.persist()?;
        info!("Processed {} request(s), queue cleared", report.len());
        Ok(report)
    }

    /// Install the demo records shipped with the original logbook: four
    /// airports, four flights, and two queued requests.
    ///
    /// # Errors
    ///
    /// Rejects a tower that already holds any records, and propagates
    /// persistence failures.
    pub fn seed_demo(&mut self) -> Result<()> {
        if !self.airports.is_empty() || !self.flights.is_empty() || !self.requests.is_empty() {
            return Err(Error::NotEmpty);
        }

        self.airports = vec![
            Airport::new("KHI"),
            Airport {
                code: "LHE".to_string(),
                status: AirportStatus::Open,
                weather: Weather::Rain,
                runway_available: true,
            },
            Airport {
                code: "ISB".to_string(),
                status: AirportStatus::Open,
                weather: Weather::Fog,
                runway_available: false,
            },
            Airport::new("PEW"),
        ];
        self.flights = vec![
            Flight::new(
                "PK-301",
                "KHI",
                "LHE",
                FlightKind::Departure,
                FlightCategory::Domestic,
            ),
            Flight::new(
                "PK-302",
                "LHE",
                "ISB",
                FlightKind::Arrival,
                FlightCategory::Domestic,
            ),
            Flight::new(
                "PK-401",
                "KHI",
                "DXB",
                FlightKind::Departure,
                FlightCategory::International,
            ),
            Flight::new(
                "PK-501",
                "ISB",
                "JED",
                FlightKind::Departure,
                FlightCategory::International,
            ),
        ];
        self.requests = vec![
            PilotRequest::new("PK-301", RequestKind::Takeoff, false),
            PilotRequest::new("PK-302", RequestKind::Landing, true),
        ];
        self.persist()?;
        info!("Seeded demo records");
        Ok(())
    }
}
