pub mod catalog;
pub mod compare;
pub mod config;
pub mod display;
pub mod domain;
pub mod errors;
pub mod recommend;
pub mod runtime;
pub mod scoring;

pub use catalog::{Catalog, CatalogError, CatalogQuery, PriceBracket, SortOrder};
pub use compare::{ComparisonResult, ComparisonRow, Direction, Outcome};
pub use domain::attribute::Attribute;
pub use domain::package::{PackageId, PackageTier, StudentPackage};
pub use domain::product::{Badge, Capacity, Category, Condition, Product, ProductId, UseCase};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommend::{recommend, Recommendation};
pub use runtime::{ComparisonReport, ComparisonRuntime, DeterministicComparisonRuntime, Selection};
pub use scoring::{score, score_breakdown, ScoreBreakdown};
