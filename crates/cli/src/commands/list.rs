use clap::Args;
use lapwise_core::catalog::{
    CatalogQuery, PriceBracket, SortOrder, RAM_OPTIONS, STORAGE_OPTIONS,
};
use lapwise_core::display::format_price;
use lapwise_core::domain::product::{Condition, Product, UseCase};
use lapwise_core::errors::DomainError;
use serde::Serialize;
use tracing::info;

use crate::commands::{load_session, CommandResult};

const COMMAND: &str = "list";

#[derive(Debug, Default, Clone, Args)]
pub struct ListArgs {
    #[arg(long, help = "Case-insensitive match on name, brand or processor")]
    pub search: Option<String>,
    #[arg(long = "brand", help = "Keep only this brand (repeatable)")]
    pub brands: Vec<String>,
    #[arg(long, help = "Budget bracket: under-500k|500k-750k|750k-1m|above-1m")]
    pub budget: Option<String>,
    #[arg(long, help = "RAM option such as 8GB (repeatable)")]
    pub ram: Vec<String>,
    #[arg(long, help = "Storage option such as 256GB (repeatable)")]
    pub storage: Vec<String>,
    #[arg(long = "condition", help = "new|refurbished (repeatable)")]
    pub conditions: Vec<String>,
    #[arg(long = "use-case", help = "student|office|design|business")]
    pub use_case: Option<String>,
    #[arg(long, help = "Only best sellers and new arrivals")]
    pub featured: bool,
    #[arg(long, help = "Sort order: newest|price-low|price-high|name")]
    pub sort: Option<String>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    count: usize,
    brands: Vec<&'a str>,
    ram_options: &'static [&'static str],
    storage_options: &'static [&'static str],
    products: Vec<&'a Product>,
}

pub fn run(args: &ListArgs) -> CommandResult {
    let session = match load_session(COMMAND) {
        Ok(session) => session,
        Err(failure) => return failure,
    };

    let (query, use_case) = match build_query(args) {
        Ok(parsed) => parsed,
        Err(error) => return CommandResult::application_failure(COMMAND, error),
    };

    let catalog = &session.catalog;
    let mut products = catalog.search(&query);
    if let Some(use_case) = use_case {
        products.retain(|product| product.serves(use_case));
    }
    if args.featured {
        let featured = catalog.featured();
        products.retain(|product| featured.iter().any(|candidate| candidate.id == product.id));
    }

    info!(event_name = "cli.list.completed", matched = products.len(), "catalog listed");

    if args.json {
        let listing = Listing {
            count: products.len(),
            brands: catalog.brands(),
            ram_options: &RAM_OPTIONS,
            storage_options: &STORAGE_OPTIONS,
            products,
        };
        return CommandResult::success_with_data(
            COMMAND,
            format!("{} laptops found", listing.count),
            &listing,
        );
    }

    CommandResult::text(render_human(&products, session.currency()))
}

fn build_query(args: &ListArgs) -> Result<(CatalogQuery, Option<UseCase>), DomainError> {
    let bracket = args.budget.as_deref().map(str::parse::<PriceBracket>).transpose()?;
    let sort =
        args.sort.as_deref().map(str::parse::<SortOrder>).transpose()?.unwrap_or_default();
    let conditions = args
        .conditions
        .iter()
        .map(|value| value.parse::<Condition>())
        .collect::<Result<Vec<_>, _>>()?;
    let use_case = args.use_case.as_deref().map(str::parse::<UseCase>).transpose()?;

    let query = CatalogQuery {
        search: args.search.clone(),
        brands: args.brands.clone(),
        bracket,
        ram: args.ram.clone(),
        storage: args.storage.clone(),
        conditions,
        sort,
    };

    Ok((query, use_case))
}

fn render_human(products: &[&Product], currency: &str) -> String {
    if products.is_empty() {
        return "No laptops match these filters.".to_string();
    }

    let mut lines = vec![format!("{} laptops found", products.len())];
    for product in products {
        let badge =
            product.badge.map(|badge| format!(" [{}]", badge.label())).unwrap_or_default();
        lines.push(format!(
            "- {:<24} {:<34} {:>15}  {} | {}{badge}",
            product.id.as_str(),
            product.name,
            format_price(product.price, currency),
            product.specs.ram,
            product.specs.storage,
        ));
    }
    lines.push(format!(
        "RAM options: {}; storage options: {}",
        RAM_OPTIONS.join(", "),
        STORAGE_OPTIONS.join(", ")
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use lapwise_core::catalog::{PriceBracket, SortOrder};
    use lapwise_core::domain::product::{Condition, UseCase};
    use lapwise_core::errors::DomainError;

    use super::{build_query, ListArgs};

    #[test]
    fn flags_are_parsed_into_a_catalog_query() {
        let args = ListArgs {
            budget: Some("500k-750k".to_string()),
            sort: Some("price-low".to_string()),
            conditions: vec!["Refurbished".to_string()],
            use_case: Some("design".to_string()),
            ..ListArgs::default()
        };

        let (query, use_case) = build_query(&args).expect("flags should parse");

        assert_eq!(query.bracket, Some(PriceBracket::From500KTo750K));
        assert_eq!(query.sort, SortOrder::PriceLowToHigh);
        assert_eq!(query.conditions, vec![Condition::Refurbished]);
        assert_eq!(use_case, Some(UseCase::Design));
    }

    #[test]
    fn unknown_budget_is_reported_as_unknown_option() {
        let args = ListArgs { budget: Some("cheap".to_string()), ..ListArgs::default() };

        assert_eq!(
            build_query(&args).map(|_| ()),
            Err(DomainError::UnknownOption { kind: "price bracket", value: "cheap".to_string() })
        );
    }
}
