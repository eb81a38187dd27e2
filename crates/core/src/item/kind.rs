//! Item discriminant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which vertical an item belongs to. Doubles as the `type` tag on the wire,
/// keeping the original dataset names (`fipe`/`taco`/`medicamentos`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Vehicle pricing (Tabela FIPE).
    #[serde(rename = "fipe")]
    Vehicle,
    /// Food nutrition (Tabela TACO).
    #[serde(rename = "taco")]
    Food,
    /// Medication pricing (ANVISA).
    #[serde(rename = "medicamentos")]
    Medication,
}

impl ItemKind {
    pub const ALL_VARIANTS_STR: &'static str = "fipe|taco|medicamentos";

    pub const ALL_VARIANTS: &'static [ItemKind] =
        &[ItemKind::Vehicle, ItemKind::Food, ItemKind::Medication];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Vehicle => "fipe",
            Self::Food => "taco",
            Self::Medication => "medicamentos",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fipe" => Ok(Self::Vehicle),
            "taco" => Ok(Self::Food),
            "medicamentos" => Ok(Self::Medication),
            other => Err(CoreError::UnknownItemKind(other.to_owned())),
        }
    }
}
