//! Core module - catalog, classification, selection and assembly

pub mod catalog;
pub mod classify;
pub mod config;
pub mod generate;
pub mod select;
pub mod vehicle;

pub use catalog::{Catalog, LoadOutcome, PartRecord, DEFAULT_PARTS_FILE};
pub use classify::{Buckets, Category, MatchPolicy, WingSize};
pub use config::GeneratorConfig;
pub use generate::{assemble, generate_vehicle, BuildError};
pub use select::{Selector, MAX_WEAPONS};
pub use vehicle::{Loadout, Vehicle, VehicleParts};
