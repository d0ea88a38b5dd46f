//! Flat-file persistence for the tower's collections.
//!
//! Each collection lives in its own plain-text file inside a data directory,
//! one record per line in stored order. Every save rewrites all three files
//! in full, so the files always mirror the complete in-memory state. Loading
//! tolerates missing files (an absent file is an empty collection) but not
//! malformed lines.

pub mod codec;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Airport, Flight, PilotRequest};

/// File name for the airports collection.
pub const AIRPORTS_FILE: &str = "airports.txt";

/// File name for the flights collection.
pub const FLIGHTS_FILE: &str = "flights.txt";

/// File name for the pending request queue.
pub const REQUESTS_FILE: &str = "requests.txt";

/// File-backed store for the three collections.
#[derive(Debug)]
pub struct FileStore {
    /// Directory the three files live in.
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the airports file.
    #[must_use]
    pub fn airports_path(&self) -> PathBuf {
        self.dir.join(AIRPORTS_FILE)
    }

    /// Path to the flights file.
    #[must_use]
    pub fn flights_path(&self) -> PathBuf {
        self.dir.join(FLIGHTS_FILE)
    }

    /// Path to the requests file.
    #[must_use]
    pub fn requests_path(&self) -> PathBuf {
        self.dir.join(REQUESTS_FILE)
    }

    /// Rewrite all three files from the given collections.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be written.
    pub fn save(
        &self,
        airports: &[Airport],
        flights: &[Flight],
        requests: &[PilotRequest],
    ) -> Result<()> {
        write_lines(
            &self.airports_path(),
            airports.iter().map(codec::encode_airport),
        )?;
        write_lines(&self.flights_path(), flights.iter().map(codec::encode_flight))?;
        write_lines(
            &self.requests_path(),
            requests.iter().map(codec::encode_request),
        )?;
        debug!(
            airports = airports.len(),
            flights = flights.len(),
            requests = requests.len(),
            "Saved tower state"
        );
        Ok(())
    }

    /// Load all three collections.
    ///
    /// A missing file yields an empty collection; record order in each file
    /// is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or contains a malformed
    /// line.
    pub fn load(&self) -> Result<(Vec<Airport>, Vec<Flight>, Vec<PilotRequest>)> {
        let airports = read_records(&self.airports_path(), codec::parse_airport)?;
        let flights = read_records(&self.flights_path(), codec::parse_flight)?;
        let requests = read_records(&self.requests_path(), codec::parse_request)?;
        info!(
            airports = airports.len(),
            flights = flights.len(),
            requests = requests.len(),
            "Loaded tower state from {}",
            self.dir.display()
        );
        Ok((airports, flights, requests))
    }

    /// Check whether any of the three files already holds records.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn has_records(&self) -> Result<bool> {
        let (airports, flights, requests) = self.load()?;
        Ok(!airports.is_empty() || !flights.is_empty() || !requests.is_empty())
    }
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<()> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(&line);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}

fn read_records<T>(
    path: &Path,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let record = parse(line).map_err(|message| Error::ParseRecord {
            file: path.to_path_buf(),
            line: index + 1,
            message,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FlightCategory, FlightKind, RequestKind};

    fn temp_store(tag: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("towerlog_test_{}_{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileStore::open(&dir).expect("failed to create test store")
    }

    fn cleanup(store: &FileStore) {
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_open_creates_directory() {
        let store = temp_store("open");
        assert!(store.dir().exists());
        cleanup(&store);
    }

    #[test]
    fn test_load_empty_store() {
        let store = temp_store("empty");
        let (airports, flights, requests) = store.load().unwrap();
        assert!(airports.is_empty());
        assert!(flights.is_empty());
        assert!(requests.is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store("roundtrip");

        let airports = vec![Airport::new("LHE"), Airport::new("KHI")];
        let flights = vec![Flight::new(
            "PK-301",
            "KHI",
            "LHE",
            FlightKind::Departure,
            FlightCategory::Domestic,
        )];
        let requests = vec![PilotRequest::new("PK-301", RequestKind::Takeoff, false)];

        store.save(&airports, &flights, &requests).unwrap();
        let (loaded_airports, loaded_flights, loaded_requests) = store.load().unwrap();

        assert_eq!(loaded_airports, airports);
        assert_eq!(loaded_flights, flights);
        assert_eq!(loaded_requests, requests);
        cleanup(&store);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let store = temp_store("overwrite");

        store
            .save(&[Airport::new("KHI"), Airport::new("LHE")], &[], &[])
            .unwrap();
        store.save(&[Airport::new("ISB")], &[], &[]).unwrap();

        let (airports, _, _) = store.load().unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].code, "ISB");
        cleanup(&store);
    }

    #[test]
    fn test_save_preserves_stored_order() {
        let store = temp_store("order");

        let airports = vec![Airport::new("PEW"), Airport::new("ISB"), Airport::new("KHI")];
        store.save(&airports, &[], &[]).unwrap();

        let (loaded, _, _) = store.load().unwrap();
        let codes: Vec<&str> = loaded.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, ["PEW", "ISB", "KHI"]);
        cleanup(&store);
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let store = temp_store("malformed");
        fs::write(store.airports_path(), "KHI Open Clear 1\nBAD LINE\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::ParseRecord { line: 2, .. }));
        cleanup(&store);
    }

    #[test]
    fn test_file_contents_match_documented_format() {
        let store = temp_store("format");

        let mut airport = Airport::new("ISB");
        airport.runway_available = false;
        store.save(&[airport], &[], &[]).unwrap();

        let contents = fs::read_to_string(store.airports_path()).unwrap();
        assert_eq!(contents, "ISB Open Clear 0\n");
        cleanup(&store);
    }

    #[test]
    fn test_has_records() {
        let store = temp_store("has_records");
        assert!(!store.has_records().unwrap());

        store.save(&[Airport::new("KHI")], &[], &[]).unwrap();
        assert!(store.has_records().unwrap());
        cleanup(&store);
    }
}
