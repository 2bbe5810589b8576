use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::Catalog,
    compare::{compare_products, ComparisonResult},
    domain::product::ProductId,
    errors::DomainError,
    recommend::{recommend, Recommendation},
    scoring::{score_breakdown, ScoreBreakdown},
};

pub const DEFAULT_CURRENCY: &str = "TZS";

/// The two products a shopper picked, in selection order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub first: ProductId,
    pub second: ProductId,
}

impl Selection {
    pub fn new(first: impl Into<ProductId>, second: impl Into<ProductId>) -> Self {
        Self { first: first.into(), second: second.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonReport<'a> {
    pub selection: Selection,
    pub comparison: ComparisonResult<'a>,
    pub first_score: ScoreBreakdown,
    pub second_score: ScoreBreakdown,
    pub recommendation: Recommendation<'a>,
}

pub trait ComparisonRuntime: Send + Sync {
    fn compare<'a>(
        &self,
        catalog: &'a Catalog,
        selection: &Selection,
    ) -> Result<ComparisonReport<'a>, DomainError>;
}

#[derive(Clone, Debug)]
pub struct DeterministicComparisonRuntime {
    currency: String,
}

impl DeterministicComparisonRuntime {
    pub fn new(currency: impl Into<String>) -> Self {
        Self { currency: currency.into() }
    }
}

impl Default for DeterministicComparisonRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl ComparisonRuntime for DeterministicComparisonRuntime {
    fn compare<'a>(
        &self,
        catalog: &'a Catalog,
        selection: &Selection,
    ) -> Result<ComparisonReport<'a>, DomainError> {
        let first = catalog.get_by_id(&selection.first)?;
        let second = catalog.get_by_id(&selection.second)?;

        let comparison = compare_products(first, second, &self.currency)?;
        let first_score = score_breakdown(first);
        let second_score = score_breakdown(second);
        let recommendation = recommend(first, second);

        debug!(
            event_name = "compare.recommendation",
            first = %first.id,
            second = %second.id,
            first_score = first_score.total,
            second_score = second_score.total,
            winner = %recommendation.winner.id,
            "comparison evaluated"
        );

        Ok(ComparisonReport {
            selection: selection.clone(),
            comparison,
            first_score,
            second_score,
            recommendation,
        })
    }
}
