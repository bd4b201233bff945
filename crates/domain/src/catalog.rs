//! Catalog input types.
//!
//! These are the records the cart and booking paths consume. The catalog
//! itself (stock levels, availability, verification) is maintained by an
//! external collaborator; only the fields pricing needs are carried here.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// An agricultural input product from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Product name.
    pub name: String,

    /// Unit price before any subsidy.
    pub price: Money,

    /// Sale unit, e.g. "kg" or "litre".
    pub unit: String,

    /// Whether a government subsidy applies to this product.
    pub is_subsidized: bool,

    /// Subsidy percentage in [0, 100]; ignored unless `is_subsidized`.
    pub subsidy_percent: u8,
}

/// A tractor available for service bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TractorUnit {
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub hourly_rate: Money,
}

/// A worker available for labor bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub full_name: String,
    pub skill: Skill,
    pub daily_rate: Money,
}

/// Labor skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Harvesting,
    Planting,
    Spraying,
    Weeding,
    Irrigation,
    General,
}

impl Skill {
    /// Returns the skill name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Harvesting => "harvesting",
            Skill::Planting => "planting",
            Skill::Spraying => "spraying",
            Skill::Weeding => "weeding",
            Skill::Irrigation => "irrigation",
            Skill::General => "general",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
