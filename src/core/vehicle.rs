//! Assembled vehicle and its rendering

use console::style;
use serde::Serialize;
use std::fmt;

use crate::core::select::MAX_WEAPONS;

/// Weapon list capped at [`MAX_WEAPONS`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Loadout(Vec<String>);

impl Loadout {
    /// Build a loadout, keeping at most the first `MAX_WEAPONS` entries
    pub fn new<I, S>(weapons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(weapons.into_iter().take(MAX_WEAPONS).map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A fully assembled vehicle
///
/// Owns copies of every selected part so it outlives the catalog it was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    engine: String,
    fuselage: String,
    cabin: String,
    large_wings: Option<String>,
    small_wings: Option<String>,
    armor: String,
    weapons: Loadout,
}

/// Parts picked for a vehicle, before assembly
#[derive(Debug, Clone, Default)]
pub struct VehicleParts {
    pub engine: String,
    pub fuselage: String,
    pub cabin: String,
    pub armor: String,
    pub large_wings: Option<String>,
    pub small_wings: Option<String>,
    pub weapons: Vec<String>,
}

impl Vehicle {
    pub fn assemble(parts: VehicleParts) -> Self {
        Self {
            engine: parts.engine,
            fuselage: parts.fuselage,
            cabin: parts.cabin,
            large_wings: parts.large_wings,
            small_wings: parts.small_wings,
            armor: parts.armor,
            weapons: Loadout::new(parts.weapons),
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn fuselage(&self) -> &str {
        &self.fuselage
    }

    pub fn cabin(&self) -> &str {
        &self.cabin
    }

    pub fn armor(&self) -> &str {
        &self.armor
    }

    pub fn large_wings(&self) -> Option<&str> {
        self.large_wings.as_deref()
    }

    pub fn small_wings(&self) -> Option<&str> {
        self.small_wings.as_deref()
    }

    pub fn weapons(&self) -> &Loadout {
        &self.weapons
    }

    /// Multi-line, styled summary for terminals
    pub fn render_styled(&self) -> String {
        let wing = |w: Option<&str>| match w {
            Some(name) => style(name.to_string()).cyan(),
            None => style("None".to_string()).dim(),
        };

        let mut out = String::new();
        out.push_str(&format!("{}\n", style("Vehicle").bold().underlined()));
        out.push_str(&format!("  {:<10} {}\n", style("Engine").bold(), self.engine));
        out.push_str(&format!("  {:<10} {}\n", style("Fuselage").bold(), self.fuselage));
        out.push_str(&format!("  {:<10} {}\n", style("Cabin").bold(), self.cabin));
        out.push_str(&format!(
            "  {:<10} Large {}, Small {}\n",
            style("Wings").bold(),
            wing(self.large_wings()),
            wing(self.small_wings())
        ));
        out.push_str(&format!("  {:<10} {}\n", style("Armor").bold(), self.armor));
        if self.weapons.is_empty() {
            out.push_str(&format!("  {:<10} {}\n", style("Weapons").bold(), style("none").dim()));
        } else {
            out.push_str(&format!(
                "  {:<10} {}\n",
                style("Weapons").bold(),
                self.weapons.as_slice().join(", ")
            ));
        }
        out
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Engine: {}, Fuselage: {}, Cabin: {}, Wings: Large {}, Small {}, Armor: {}",
            self.engine,
            self.fuselage,
            self.cabin,
            self.large_wings().unwrap_or("None"),
            self.small_wings().unwrap_or("None"),
            self.armor
        )?;
        for weapon in self.weapons.as_slice() {
            write!(f, ", {}", weapon)?;
        }
        Ok(())
    }
}
