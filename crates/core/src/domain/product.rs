use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::attribute::Attribute;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Refurbished,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Refurbished => "refurbished",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "Brand New",
            Self::Refurbished => "Refurbished",
        }
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "refurbished" => Ok(Self::Refurbished),
            other => {
                Err(DomainError::UnknownOption { kind: "condition", value: other.to_owned() })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    Student,
    Office,
    Design,
    Business,
}

impl UseCase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Office => "office",
            Self::Design => "design",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "office" => Ok(Self::Office),
            "design" => Ok(Self::Design),
            "business" => Ok(Self::Business),
            other => {
                Err(DomainError::UnknownOption { kind: "use case", value: other.to_owned() })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Budget,
    MidRange,
    Premium,
}

/// Merchandising badge shown on a product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Bestseller,
    New,
    Limited,
    StudentPick,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bestseller => "Best Seller",
            Self::New => "New Arrival",
            Self::Limited => "Limited",
            Self::StudentPick => "Student Pick",
        }
    }
}

/// A spec string such as `"16GB DDR4"` normalized at load time.
///
/// `magnitude` is the leading decimal run of `raw`; any unit suffix is kept for
/// display only and never converted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub raw: String,
    pub magnitude: u64,
    pub unit: String,
}

impl Capacity {
    /// Rejects text without a leading number, and magnitudes that are zero or
    /// do not fit in a `u64`.
    pub fn parse(attribute: Attribute, raw: &str) -> Result<Self, DomainError> {
        let digits = leading_digits(raw);
        if digits.is_empty() {
            return Err(DomainError::InvalidAttribute { attribute, value: raw.to_owned() });
        }

        let magnitude = digits
            .parse::<u64>()
            .ok()
            .filter(|magnitude| *magnitude > 0)
            .ok_or_else(|| DomainError::MagnitudeOutOfRange { attribute, value: raw.to_owned() })?;

        let rest = raw.trim_start()[digits.len()..].trim_start();
        let unit = rest.chars().take_while(|ch| ch.is_alphabetic()).collect();

        Ok(Self { raw: raw.to_owned(), magnitude, unit })
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn leading_digits(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let end = trimmed.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(trimmed.len());
    &trimmed[..end]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specs {
    pub processor: String,
    pub ram: Capacity,
    pub storage: Capacity,
    pub screen: String,
    pub graphics: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: u64,
    pub original_price: Option<u64>,
    pub condition: Condition,
    pub specs: Specs,
    pub features: Vec<String>,
    pub in_stock: bool,
    pub use_cases: Vec<UseCase>,
    pub category: Option<Category>,
    pub badge: Option<Badge>,
}

impl Product {
    pub fn serves(&self, use_case: UseCase) -> bool {
        self.use_cases.contains(&use_case)
    }

    /// Amount saved against the pre-discount reference price.
    pub fn savings(&self) -> Option<u64> {
        self.original_price
            .and_then(|original| original.checked_sub(self.price))
            .filter(|saved| *saved > 0)
    }

    /// Use-case tags joined for display, `None` when the product carries none.
    pub fn use_case_summary(&self) -> Option<String> {
        if self.use_cases.is_empty() {
            return None;
        }
        Some(self.use_cases.iter().map(|tag| tag.as_str()).collect::<Vec<_>>().join(", "))
    }
}
