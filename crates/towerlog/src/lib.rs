//! `towerlog` - A single-operator airfield operations record keeper
//!
//! This library provides the core record management for a small set of
//! airports, flights, and pilot requests: validated identifiers, cascading
//! airport removal, a capped FIFO request queue with bulk processing, and
//! flat-file persistence after every mutation.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;
pub mod tower;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{Airport, Flight, PilotRequest};
pub use store::FileStore;
pub use tower::{Tower, DEFAULT_MAX_PENDING};
