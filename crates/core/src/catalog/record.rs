use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    attribute::Attribute,
    package::{PackageId, PackageTier, StudentPackage},
    product::{Badge, Capacity, Category, Condition, Product, ProductId, Specs, UseCase},
};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("catalog contains no products")]
    Empty,
    #[error("duplicate product id `{0}`")]
    DuplicateProduct(ProductId),
    #[error("invalid product `{id}`: {reason}")]
    InvalidProduct { id: String, reason: String },
    #[error("invalid product `{id}`: {source}")]
    InvalidSpec { id: ProductId, source: DomainError },
    #[error("duplicate package id `{0}`")]
    DuplicatePackage(String),
    #[error("invalid package `{id}`: {reason}")]
    InvalidPackage { id: String, reason: String },
    #[error("package `{package}` references unknown product `{product}`")]
    UnknownPackageProduct { package: String, product: ProductId },
}

/// On-disk catalog layout: `[[product]]` and `[[package]]` tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "product")]
    pub products: Vec<ProductRecord>,
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageRecord>,
}

impl CatalogFile {
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;

        toml::from_str(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: u64,
    #[serde(default)]
    pub original_price: Option<u64>,
    pub condition: Condition,
    pub specs: SpecsRecord,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub badge: Option<Badge>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecsRecord {
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub screen: String,
    #[serde(default)]
    pub graphics: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: String,
    pub tier: PackageTier,
    pub title: String,
    pub subtitle: String,
    pub laptops: Vec<String>,
    pub price: u64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRecord {
    pub fn into_product(self) -> Result<Product, CatalogError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(invalid_product(&self.id, "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid_product(&id, "name must not be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(invalid_product(&id, "brand must not be empty"));
        }
        if self.price == 0 {
            return Err(invalid_product(&id, "price must be greater than zero"));
        }
        if let Some(original_price) = self.original_price {
            if original_price < self.price {
                return Err(invalid_product(
                    &id,
                    "original_price must be greater than or equal to price",
                ));
            }
        }

        let id = ProductId(id);
        let ram = Capacity::parse(Attribute::Ram, &self.specs.ram)
            .map_err(|source| CatalogError::InvalidSpec { id: id.clone(), source })?;
        let storage = Capacity::parse(Attribute::Storage, &self.specs.storage)
            .map_err(|source| CatalogError::InvalidSpec { id: id.clone(), source })?;

        let mut use_cases = Vec::with_capacity(self.use_cases.len());
        for tag in self.use_cases {
            if !use_cases.contains(&tag) {
                use_cases.push(tag);
            }
        }

        Ok(Product {
            id,
            name: self.name,
            brand: self.brand,
            price: self.price,
            original_price: self.original_price,
            condition: self.condition,
            specs: Specs {
                processor: self.specs.processor,
                ram,
                storage,
                screen: self.specs.screen,
                graphics: self.specs.graphics,
            },
            features: self.features,
            in_stock: self.in_stock,
            use_cases,
            category: self.category,
            badge: self.badge,
        })
    }
}

impl PackageRecord {
    /// Converts the record, requiring every referenced laptop to be in `products`.
    pub fn into_package(self, products: &[Product]) -> Result<StudentPackage, CatalogError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(CatalogError::InvalidPackage {
                id: self.id,
                reason: "id must not be empty".to_owned(),
            });
        }
        if self.price == 0 {
            return Err(CatalogError::InvalidPackage {
                id,
                reason: "price must be greater than zero".to_owned(),
            });
        }

        let mut laptop_ids = Vec::with_capacity(self.laptops.len());
        for laptop in self.laptops {
            let product_id = ProductId(laptop.trim().to_owned());
            if !products.iter().any(|product| product.id == product_id) {
                return Err(CatalogError::UnknownPackageProduct {
                    package: id,
                    product: product_id,
                });
            }
            laptop_ids.push(product_id);
        }

        Ok(StudentPackage {
            id: PackageId(id),
            tier: self.tier,
            title: self.title,
            subtitle: self.subtitle,
            laptop_ids,
            price: self.price,
            features: self.features,
            badge: self.badge,
        })
    }
}

fn invalid_product(id: &str, reason: &str) -> CatalogError {
    CatalogError::InvalidProduct { id: id.to_owned(), reason: reason.to_owned() }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{CatalogError, CatalogFile, ProductRecord, SpecsRecord};
    use crate::domain::attribute::Attribute;
    use crate::domain::product::{Condition, UseCase};
    use crate::errors::DomainError;

    fn record() -> ProductRecord {
        ProductRecord {
            id: "dell-latitude-5420".to_owned(),
            name: "Dell Latitude 5420".to_owned(),
            brand: "Dell".to_owned(),
            price: 820_000,
            original_price: Some(900_000),
            condition: Condition::Refurbished,
            specs: SpecsRecord {
                processor: "Intel Core i5 11th Gen".to_owned(),
                ram: "16GB DDR4".to_owned(),
                storage: "256GB NVMe SSD".to_owned(),
                screen: "14\" FHD".to_owned(),
                graphics: None,
            },
            features: vec!["Backlit keyboard".to_owned()],
            in_stock: true,
            use_cases: vec![UseCase::Office, UseCase::Business, UseCase::Office],
            category: None,
            badge: None,
        }
    }

    #[test]
    fn record_converts_with_normalized_specs_and_unique_tags() {
        let product = record().into_product().expect("record should convert");

        assert_eq!(product.specs.ram.magnitude, 16);
        assert_eq!(product.specs.storage.magnitude, 256);
        assert_eq!(product.use_cases, vec![UseCase::Office, UseCase::Business]);
        assert_eq!(product.savings(), Some(80_000));
    }

    #[test]
    fn zero_price_is_rejected() {
        let error = ProductRecord { price: 0, ..record() }.into_product();
        assert!(matches!(error, Err(CatalogError::InvalidProduct { ref reason, .. })
            if reason.contains("price")));
    }

    #[test]
    fn original_price_below_price_is_rejected() {
        let error = ProductRecord { original_price: Some(100), ..record() }.into_product();
        assert!(matches!(error, Err(CatalogError::InvalidProduct { ref reason, .. })
            if reason.contains("original_price")));
    }

    #[test]
    fn unparseable_storage_is_rejected_at_load_time() {
        let mut bad = record();
        bad.specs.storage = "SSD".to_owned();

        match bad.into_product() {
            Err(CatalogError::InvalidSpec { source, .. }) => assert_eq!(
                source,
                DomainError::InvalidAttribute {
                    attribute: Attribute::Storage,
                    value: "SSD".to_owned(),
                }
            ),
            other => panic!("expected invalid spec error, got {other:?}"),
        }
    }

    #[test]
    fn catalog_file_reads_product_and_package_tables() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[product]]
id = "lenovo-t480"
name = "Lenovo ThinkPad T480"
brand = "Lenovo"
price = 600000
condition = "refurbished"
use_cases = ["student", "office"]
badge = "student-pick"

[product.specs]
processor = "Intel Core i5 8th Gen"
ram = "8GB DDR4"
storage = "256GB SSD"
screen = "14\" FHD"

[[package]]
id = "starter"
tier = "secondary-starter"
title = "Starter"
subtitle = "For secondary school"
laptops = ["lenovo-t480"]
price = 600000
"#,
        )
        .map_err(|err| err.to_string())?;

        let file = CatalogFile::read(&path).map_err(|err| err.to_string())?;
        assert_eq!(file.products.len(), 1);
        assert_eq!(file.packages.len(), 1);
        assert!(file.products[0].in_stock, "in_stock should default to true");
        Ok(())
    }

    #[test]
    fn malformed_catalog_file_reports_path() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[product]]\nid = ").map_err(|err| err.to_string())?;

        match CatalogFile::read(&path) {
            Err(error @ CatalogError::ParseFile { .. }) => {
                assert!(error.to_string().contains("broken.toml"));
                Ok(())
            }
            other => Err(format!("expected parse failure, got {other:?}")),
        }
    }
}
