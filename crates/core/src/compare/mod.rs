//! Side-by-side comparison of two catalog products.

pub mod comparator;

use serde::Serialize;
use tracing::warn;

use crate::display::format_price;
use crate::domain::{attribute::Attribute, product::Product};
use crate::errors::DomainError;

pub use comparator::{
    compare, compare_capacities, compare_condition, policy_for, AttributePolicy, Direction,
    Outcome,
};

const GENERAL_USE: &str = "General use";

/// One displayed attribute. `outcome` is `None` for informational rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub attribute: Attribute,
    pub label: &'static str,
    pub first_value: String,
    pub second_value: String,
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult<'a> {
    pub first: &'a Product,
    pub second: &'a Product,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonResult<'_> {
    pub fn row(&self, attribute: Attribute) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.attribute == attribute)
    }
}

/// Builds every row in display order, outcomes from `first`'s perspective.
pub fn compare_products<'a>(
    first: &'a Product,
    second: &'a Product,
    currency: &str,
) -> Result<ComparisonResult<'a>, DomainError> {
    let rows = Attribute::ROWS
        .into_iter()
        .map(|attribute| compare_row(attribute, first, second, currency))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparisonResult { first, second, rows })
}

fn compare_row(
    attribute: Attribute,
    first: &Product,
    second: &Product,
    currency: &str,
) -> Result<ComparisonRow, DomainError> {
    let outcome = match policy_for(attribute) {
        AttributePolicy::Informational => None,
        AttributePolicy::ConditionRank => {
            Some(compare_condition(first.condition, second.condition))
        }
        AttributePolicy::Directional(direction) => {
            let compared = match attribute {
                Attribute::Price => Ok(compare(&first.price, &second.price, direction)),
                Attribute::Ram => {
                    compare_capacities(attribute, &first.specs.ram, &second.specs.ram, direction)
                }
                Attribute::Storage => compare_capacities(
                    attribute,
                    &first.specs.storage,
                    &second.specs.storage,
                    direction,
                ),
                other => {
                    return Err(DomainError::InvariantViolation(format!(
                        "attribute `{other}` has no directional comparison"
                    )))
                }
            };

            match compared {
                Ok(outcome) => Some(outcome),
                // The row is still shown, without an advantage indicator.
                Err(error @ DomainError::InvalidAttribute { .. }) => {
                    warn!(
                        event_name = "compare.row.unranked",
                        attribute = attribute.key(),
                        first = %first.id,
                        second = %second.id,
                        error = %error,
                        "attribute could not be ranked"
                    );
                    None
                }
                Err(error) => return Err(error),
            }
        }
    };

    Ok(ComparisonRow {
        attribute,
        label: attribute.label(),
        first_value: display_value(attribute, first, currency),
        second_value: display_value(attribute, second, currency),
        outcome,
    })
}

fn display_value(attribute: Attribute, product: &Product, currency: &str) -> String {
    match attribute {
        Attribute::Price => format_price(product.price, currency),
        Attribute::Processor => product.specs.processor.clone(),
        Attribute::Ram => product.specs.ram.raw.clone(),
        Attribute::Storage => product.specs.storage.raw.clone(),
        Attribute::Display => product.specs.screen.clone(),
        Attribute::Condition => product.condition.label().to_owned(),
        Attribute::BestFor => {
            product.use_case_summary().unwrap_or_else(|| GENERAL_USE.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_products, Outcome};
    use crate::catalog::Catalog;
    use crate::domain::attribute::Attribute;
    use crate::domain::product::{Capacity, Condition, ProductId};

    fn catalog() -> Catalog {
        Catalog::seeded().expect("seed catalog should load")
    }

    #[test]
    fn rows_follow_display_order() {
        let catalog = catalog();
        let first = catalog.get_by_id(&ProductId::from("surface-laptop-4")).expect("seeded");
        let second = catalog.get_by_id(&ProductId::from("hp-probook-11e-g5")).expect("seeded");

        let result = compare_products(first, second, "TZS").expect("comparison should succeed");
        let labels: Vec<&str> = result.rows.iter().map(|row| row.label).collect();

        assert_eq!(
            labels,
            vec!["Price", "Processor", "RAM", "Storage", "Display", "Condition", "Best For"]
        );
    }

    #[test]
    fn outcomes_are_from_the_first_products_perspective() {
        let catalog = catalog();
        let first = catalog.get_by_id(&ProductId::from("surface-laptop-4")).expect("seeded");
        let second = catalog.get_by_id(&ProductId::from("hp-probook-11e-g5")).expect("seeded");

        let result = compare_products(first, second, "TZS").expect("comparison should succeed");

        assert_eq!(result.row(Attribute::Price).and_then(|row| row.outcome), Some(Outcome::Worse));
        assert_eq!(result.row(Attribute::Ram).and_then(|row| row.outcome), Some(Outcome::Better));
        assert_eq!(
            result.row(Attribute::Condition).and_then(|row| row.outcome),
            Some(Outcome::Equal)
        );
        assert_eq!(result.row(Attribute::Processor).and_then(|row| row.outcome), None);
    }

    #[test]
    fn price_is_formatted_with_currency() {
        let catalog = catalog();
        let first = catalog.get_by_id(&ProductId::from("hp-elitebook-1040-g8")).expect("seeded");

        let result = compare_products(first, first, "TZS").expect("comparison should succeed");
        let price = result.row(Attribute::Price).expect("price row");

        assert_eq!(price.first_value, "TZS 1,450,000");
        assert_eq!(price.outcome, Some(Outcome::Equal));
    }

    #[test]
    fn condition_row_uses_display_labels() {
        let catalog = catalog();
        let mut upgraded =
            catalog.get_by_id(&ProductId::from("hp-pro-x2")).expect("seeded").clone();
        upgraded.condition = Condition::New;
        let refurbished = catalog.get_by_id(&ProductId::from("hp-pro-x2")).expect("seeded");

        let result =
            compare_products(&upgraded, refurbished, "TZS").expect("comparison should succeed");
        let row = result.row(Attribute::Condition).expect("condition row");

        assert_eq!(row.first_value, "Brand New");
        assert_eq!(row.second_value, "Refurbished");
        assert_eq!(row.outcome, Some(Outcome::Better));
    }

    #[test]
    fn products_without_use_cases_are_for_general_use() {
        let catalog = catalog();
        let mut untagged =
            catalog.get_by_id(&ProductId::from("hp-pro-x2")).expect("seeded").clone();
        untagged.use_cases.clear();

        let result = compare_products(&untagged, &untagged, "TZS").expect("comparison");

        assert_eq!(
            result.row(Attribute::BestFor).map(|row| row.first_value.as_str()),
            Some("General use")
        );
    }

    #[test]
    fn unrankable_capacity_leaves_an_informational_row() {
        let catalog = catalog();
        let good = catalog.get_by_id(&ProductId::from("surface-laptop-4")).expect("seeded");
        let mut bad = good.clone();
        bad.id = ProductId::from("surface-laptop-4-unlisted");
        bad.specs.ram = Capacity { raw: "N/A".to_owned(), magnitude: 0, unit: String::new() };

        let result = compare_products(&bad, good, "TZS").expect("comparison should still succeed");
        let ram = result.row(Attribute::Ram).expect("ram row");

        assert_eq!(result.rows.len(), 7);
        assert_eq!(ram.first_value, "N/A");
        assert_eq!(ram.outcome, None);
        assert_eq!(
            result.row(Attribute::Storage).and_then(|row| row.outcome),
            Some(Outcome::Equal)
        );
    }
}
