//! Dynamic DNS updates against the NameSilo API.
//!
//! A run discovers the public address (or takes an explicit value), lists the
//! domain's records, and either updates the record already serving the
//! requested name and type or creates a new one.

pub mod config;
pub mod dns;
pub mod error;
pub mod ip;
pub mod logging;
pub mod updater;

pub use error::{Error, Result, Stage, StageError};
