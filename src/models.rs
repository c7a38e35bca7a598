//! Frontend Models
//!
//! Data structures persisted in the browser's local storage.

use serde::{Deserialize, Serialize};

/// Measurement unit attached to a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "")]
    None,
    Kg,
    Gm,
    Dz,
    Packet,
}

impl Unit {
    /// All units in selector order
    pub const ALL: [Unit; 5] = [Unit::None, Unit::Kg, Unit::Gm, Unit::Dz, Unit::Packet];

    /// Stored code, also shown after the quantity
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Kg => "Kg",
            Unit::Gm => "Gm",
            Unit::Dz => "Dz",
            Unit::Packet => "Packet",
        }
    }

    /// Label for the unit selector
    pub fn label(&self) -> &'static str {
        match self {
            Unit::None => "None",
            Unit::Kg => "Kilograms",
            Unit::Gm => "Grams",
            Unit::Dz => "Dozen",
            Unit::Packet => "Packet",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Kg" => Unit::Kg,
            "Gm" => Unit::Gm,
            "Dz" => Unit::Dz,
            "Packet" => Unit::Packet,
            _ => Unit::None,
        }
    }
}

/// One grocery entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the list for the whole session
    pub id: u64,
    pub description: String,
    /// Free text, only interpreted as a number when sorting
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item
    pub fn new(id: u64, description: String, quantity: String, unit: Unit) -> Self {
        Self {
            id,
            description,
            quantity,
            unit,
            packed: false,
        }
    }

    /// Row label: description plus " - {quantity} {unit}" when a quantity is set
    pub fn label(&self) -> String {
        if self.quantity.is_empty() {
            self.description.clone()
        } else {
            format!("{} - {} {}", self.description, self.quantity, self.unit.as_str())
        }
    }
}
