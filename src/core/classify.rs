//! Part classification into category buckets

use clap::ValueEnum;
use std::fmt;

use crate::core::catalog::{Catalog, PartRecord};

/// Part categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Engine,
    Fuselage,
    Cabin,
    Wings,
    Armor,
    Weapon,
}

impl Category {
    /// Keyword that identifies the category in a part record
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Engine => "engine",
            Category::Fuselage => "fuselage",
            Category::Cabin => "cabin",
            Category::Wings => "wings",
            Category::Armor => "armor",
            Category::Weapon => "weapon",
        }
    }

    /// All categories, in classification order
    pub fn all() -> &'static [Category] {
        &[
            Category::Engine,
            Category::Fuselage,
            Category::Cabin,
            Category::Wings,
            Category::Armor,
            Category::Weapon,
        ]
    }

    /// Categories every vehicle needs, in the order they are checked
    pub fn mandatory() -> &'static [Category] {
        &[
            Category::Engine,
            Category::Fuselage,
            Category::Cabin,
            Category::Armor,
        ]
    }

    pub fn is_mandatory(&self) -> bool {
        Self::mandatory().contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How a record is matched against a category keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchPolicy {
    /// Keyword must be the record's first token
    #[default]
    LeadingToken,
    /// Keyword may appear anywhere in the record (a record can land in
    /// several buckets)
    Substring,
}

impl MatchPolicy {
    /// Whether `record` belongs to `category` under this policy
    pub fn matches(&self, record: &PartRecord, category: Category) -> bool {
        match self {
            MatchPolicy::LeadingToken => record.leading_token() == category.as_str(),
            MatchPolicy::Substring => record.as_str().contains(category.as_str()),
        }
    }
}

/// Wing size, taken from the first size marker among a wing record's
/// attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingSize {
    Small,
    Large,
}

impl WingSize {
    pub fn of(record: &PartRecord) -> Option<Self> {
        record.attributes().find_map(|token| match token {
            "small" => Some(WingSize::Small),
            "large" => Some(WingSize::Large),
            _ => None,
        })
    }
}

/// Catalog records partitioned by category
///
/// Buckets borrow from the catalog and keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub engine: Vec<&'a PartRecord>,
    pub fuselage: Vec<&'a PartRecord>,
    pub cabin: Vec<&'a PartRecord>,
    pub wings: Vec<&'a PartRecord>,
    pub armor: Vec<&'a PartRecord>,
    pub weapon: Vec<&'a PartRecord>,
    pub small_wings: Vec<&'a PartRecord>,
    pub large_wings: Vec<&'a PartRecord>,
}

impl<'a> Buckets<'a> {
    /// Partition `catalog` with `policy`. Unmatched records are dropped.
    pub fn classify(catalog: &'a Catalog, policy: MatchPolicy) -> Self {
        let mut buckets = Buckets::default();

        for record in catalog {
            for &category in Category::all() {
                if policy.matches(record, category) {
                    buckets.bucket_mut(category).push(record);
                }
            }
        }

        for &record in &buckets.wings {
            match WingSize::of(record) {
                Some(WingSize::Small) => buckets.small_wings.push(record),
                Some(WingSize::Large) => buckets.large_wings.push(record),
                None => {}
            }
        }

        buckets
    }

    pub fn bucket(&self, category: Category) -> &[&'a PartRecord] {
        match category {
            Category::Engine => &self.engine,
            Category::Fuselage => &self.fuselage,
            Category::Cabin => &self.cabin,
            Category::Wings => &self.wings,
            Category::Armor => &self.armor,
            Category::Weapon => &self.weapon,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<&'a PartRecord> {
        match category {
            Category::Engine => &mut self.engine,
            Category::Fuselage => &mut self.fuselage,
            Category::Cabin => &mut self.cabin,
            Category::Wings => &mut self.wings,
            Category::Armor => &mut self.armor,
            Category::Weapon => &mut self.weapon,
        }
    }

    pub fn wings_of(&self, size: WingSize) -> &[&'a PartRecord] {
        match size {
            WingSize::Small => &self.small_wings,
            WingSize::Large => &self.large_wings,
        }
    }

    /// First mandatory category with an empty bucket, if any
    pub fn first_missing(&self) -> Option<Category> {
        Category::mandatory()
            .iter()
            .copied()
            .find(|&c| self.bucket(c).is_empty())
    }
}
