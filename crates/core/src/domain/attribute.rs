use std::fmt;

use serde::{Deserialize, Serialize};

/// A row of the side-by-side comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Price,
    Processor,
    Ram,
    Storage,
    Display,
    Condition,
    BestFor,
}

impl Attribute {
    /// Display order of the comparison table.
    pub const ROWS: [Attribute; 7] = [
        Attribute::Price,
        Attribute::Processor,
        Attribute::Ram,
        Attribute::Storage,
        Attribute::Display,
        Attribute::Condition,
        Attribute::BestFor,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Processor => "processor",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Display => "display",
            Self::Condition => "condition",
            Self::BestFor => "best_for",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Processor => "Processor",
            Self::Ram => "RAM",
            Self::Storage => "Storage",
            Self::Display => "Display",
            Self::Condition => "Condition",
            Self::BestFor => "Best For",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
