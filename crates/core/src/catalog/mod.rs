//! Read-only product catalog.
//!
//! The catalog is built once from the seed set or a catalog file and is never
//! mutated afterwards; every other component borrows products from it.

pub mod query;
pub mod record;
pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use crate::domain::package::StudentPackage;
use crate::domain::product::{Badge, Product, ProductId, UseCase};
use crate::errors::DomainError;

pub use query::{CatalogQuery, PriceBracket, SortOrder, RAM_OPTIONS, STORAGE_OPTIONS};
pub use record::{CatalogError, CatalogFile, PackageRecord, ProductRecord, SpecsRecord};

const FEATURED_LIMIT: usize = 6;
const RELATED_LIMIT: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    packages: Vec<StudentPackage>,
}

impl Catalog {
    pub fn new(
        products: Vec<ProductRecord>,
        packages: Vec<PackageRecord>,
    ) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        let mut converted = Vec::with_capacity(products.len());
        for record in products {
            let product = record.into_product()?;
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            converted.push(product);
        }

        let mut seen_packages = HashSet::with_capacity(packages.len());
        let mut bundles = Vec::with_capacity(packages.len());
        for record in packages {
            let package = record.into_package(&converted)?;
            if !seen_packages.insert(package.id.clone()) {
                return Err(CatalogError::DuplicatePackage(package.id.0));
            }
            bundles.push(package);
        }

        Ok(Self { products: converted, packages: bundles })
    }

    /// The built-in storefront seed set.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::product_records(), seed::package_records())
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = CatalogFile::read(path)?;
        Self::new(file.products, file.packages)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn get_by_id(&self, product_id: &ProductId) -> Result<&Product, DomainError> {
        self.find(product_id).ok_or_else(|| DomainError::NotFound { id: product_id.clone() })
    }

    pub fn filter_by_use_case(&self, use_case: UseCase) -> Vec<&Product> {
        self.products.iter().filter(|product| product.serves(use_case)).collect()
    }

    /// Brand match ignores ASCII case.
    pub fn filter_by_brand(&self, brand: &str) -> Vec<&Product> {
        self.products.iter().filter(|product| product.brand.eq_ignore_ascii_case(brand)).collect()
    }

    pub fn filter_by_price_bracket(&self, bracket: PriceBracket) -> Vec<&Product> {
        self.products.iter().filter(|product| bracket.contains(product.price)).collect()
    }

    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Sorted, de-duplicated brand names.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> =
            self.products.iter().map(|product| product.brand.as_str()).collect();
        brands.sort_unstable();
        brands.dedup();
        brands
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| matches!(product.badge, Some(Badge::Bestseller | Badge::New)))
            .take(FEATURED_LIMIT)
            .collect()
    }

    pub fn student_laptops(&self) -> Vec<&Product> {
        self.filter_by_use_case(UseCase::Student)
    }

    /// Other models from the same brand.
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|candidate| candidate.brand == product.brand && candidate.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }

    pub fn packages(&self) -> &[StudentPackage] {
        &self.packages
    }

    pub fn package(&self, package_id: &str) -> Option<&StudentPackage> {
        self.packages.iter().find(|package| package.id.0 == package_id)
    }

    /// Laptops of a bundle, in catalog order.
    pub fn package_laptops(&self, package: &StudentPackage) -> Vec<&Product> {
        self.products.iter().filter(|product| package.laptop_ids.contains(&product.id)).collect()
    }
}
