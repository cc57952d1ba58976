//! Vehicle generation: classify, select, assemble

use miette::Diagnostic;
use thiserror::Error;

use crate::core::catalog::{Catalog, PartRecord};
use crate::core::classify::{Buckets, Category, WingSize};
use crate::core::config::GeneratorConfig;
use crate::core::select::Selector;
use crate::core::vehicle::{Vehicle, VehicleParts};

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("Cannot find {category} in the parts catalog")]
    #[diagnostic(
        code(hangar::build::category_not_found),
        help("add at least one line starting with '{category}' to the parts file")
    )]
    CategoryNotFound { category: Category },
}

/// Generate a random vehicle from `catalog`
///
/// Fails with [`BuildError::CategoryNotFound`] for the first empty
/// mandatory bucket (engine, fuselage, cabin, armor, in that order).
pub fn generate_vehicle(catalog: &Catalog, config: &GeneratorConfig) -> Result<Vehicle, BuildError> {
    let buckets = Buckets::classify(catalog, config.match_policy);
    let mut selector = Selector::new(config.seed);
    assemble(&buckets, &mut selector)
}

/// Select and assemble parts from already classified buckets
pub fn assemble(buckets: &Buckets<'_>, selector: &mut Selector) -> Result<Vehicle, BuildError> {
    if let Some(category) = buckets.first_missing() {
        return Err(BuildError::CategoryNotFound { category });
    }

    let mut required = |category: Category| -> Result<String, BuildError> {
        selector
            .pick(buckets.bucket(category))
            .map(|record| record.to_string())
            .ok_or(BuildError::CategoryNotFound { category })
    };

    let engine = required(Category::Engine)?;
    let fuselage = required(Category::Fuselage)?;
    let cabin = required(Category::Cabin)?;
    let armor = required(Category::Armor)?;

    let large_wings = selector
        .pick(buckets.wings_of(WingSize::Large))
        .map(|record| record.to_string());
    let small_wings = selector
        .pick(buckets.wings_of(WingSize::Small))
        .map(|record| record.to_string());

    let weapons = selector
        .loadout(buckets.bucket(Category::Weapon))
        .into_iter()
        .map(PartRecord::to_string)
        .collect();

    Ok(Vehicle::assemble(VehicleParts {
        engine,
        fuselage,
        cabin,
        armor,
        large_wings,
        small_wings,
        weapons,
    }))
}
