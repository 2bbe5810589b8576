use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::product::{Condition, Product};
use crate::errors::DomainError;

pub const RAM_OPTIONS: [&str; 3] = ["4GB", "8GB", "16GB"];
pub const STORAGE_OPTIONS: [&str; 3] = ["128GB", "256GB", "512GB"];

/// Shop budget filter. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBracket {
    #[serde(rename = "under-500k")]
    Under500K,
    #[serde(rename = "500k-750k")]
    From500KTo750K,
    #[serde(rename = "750k-1m")]
    From750KTo1M,
    #[serde(rename = "above-1m")]
    Above1M,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 4] = [
        PriceBracket::Under500K,
        PriceBracket::From500KTo750K,
        PriceBracket::From750KTo1M,
        PriceBracket::Above1M,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Under500K => "under-500k",
            Self::From500KTo750K => "500k-750k",
            Self::From750KTo1M => "750k-1m",
            Self::Above1M => "above-1m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Under500K => "Under 500K TZS",
            Self::From500KTo750K => "500K - 750K TZS",
            Self::From750KTo1M => "750K - 1M TZS",
            Self::Above1M => "Above 1M TZS",
        }
    }

    /// `(min, max)`; `None` means unbounded above.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::Under500K => (0, Some(500_000)),
            Self::From500KTo750K => (500_000, Some(750_000)),
            Self::From750KTo1M => (750_000, Some(1_000_000)),
            Self::Above1M => (1_000_000, None),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }
}

impl FromStr for PriceBracket {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|bracket| bracket.as_str() == normalized).ok_or_else(|| {
            DomainError::UnknownOption { kind: "price bracket", value: value.trim().to_owned() }
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Newest,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    Name,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "name" => Ok(Self::Name),
            other => {
                Err(DomainError::UnknownOption { kind: "sort order", value: other.to_owned() })
            }
        }
    }
}

/// Shop filter state. Empty criteria never filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub brands: Vec<String>,
    pub bracket: Option<PriceBracket>,
    pub ram: Vec<String>,
    pub storage: Vec<String>,
    pub conditions: Vec<Condition>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product.specs.processor.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if !self.brands.is_empty()
            && !self.brands.iter().any(|brand| brand.eq_ignore_ascii_case(&product.brand))
        {
            return false;
        }

        if let Some(bracket) = self.bracket {
            if !bracket.contains(product.price) {
                return false;
            }
        }

        // Option match is against the raw text, so "8GB / 16GB" satisfies both sizes.
        if !self.ram.is_empty() && !self.ram.iter().any(|ram| product.specs.ram.raw.contains(ram))
        {
            return false;
        }

        if !self.storage.is_empty()
            && !self.storage.iter().any(|storage| product.specs.storage.raw.contains(storage))
        {
            return false;
        }

        if !self.conditions.is_empty() && !self.conditions.contains(&product.condition) {
            return false;
        }

        true
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> =
            products.iter().filter(|product| self.matches(product)).collect();

        match self.sort {
            SortOrder::Newest => {}
            SortOrder::PriceLowToHigh => matched.sort_by_key(|product| product.price),
            SortOrder::PriceHighToLow => {
                matched.sort_by(|left, right| right.price.cmp(&left.price))
            }
            SortOrder::Name => {
                matched.sort_by_cached_key(|product| product.name.to_lowercase())
            }
        }

        matched
    }
}
