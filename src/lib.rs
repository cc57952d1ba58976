//! Hangar: random vehicle assembly
//!
//! Loads a plain-text catalog of vehicle parts, sorts the records into
//! category buckets and assembles a vehicle from randomly selected parts.

pub mod cli;
pub mod core;

pub use crate::core::{generate_vehicle, BuildError, Catalog, GeneratorConfig, Vehicle};
