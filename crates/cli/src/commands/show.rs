use lapwise_core::display::format_price;
use lapwise_core::domain::product::{Product, ProductId};
use lapwise_core::scoring::{score_breakdown, ScoreBreakdown};
use serde::Serialize;

use crate::commands::{load_session, CommandResult};

const COMMAND: &str = "show";

#[derive(Debug, Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    savings: Option<u64>,
    score: ScoreBreakdown,
    related: Vec<&'a str>,
}

pub fn run(id: &str, json_output: bool) -> CommandResult {
    let session = match load_session(COMMAND) {
        Ok(session) => session,
        Err(failure) => return failure,
    };

    let product = match session.catalog.get_by_id(&ProductId::from(id.trim())) {
        Ok(product) => product,
        Err(error) => return CommandResult::application_failure(COMMAND, error),
    };

    let detail = ProductDetail {
        product,
        savings: product.savings(),
        score: score_breakdown(product),
        related: session
            .catalog
            .related(product)
            .into_iter()
            .map(|related| related.id.as_str())
            .collect(),
    };

    if json_output {
        return CommandResult::success_with_data(COMMAND, product.name.clone(), &detail);
    }

    CommandResult::text(render_human(&detail, session.currency()))
}

fn render_human(detail: &ProductDetail<'_>, currency: &str) -> String {
    let product = detail.product;
    let mut lines = vec![format!("{} ({})", product.name, product.brand)];

    let mut price = format_price(product.price, currency);
    if let (Some(original), Some(saved)) = (product.original_price, detail.savings) {
        price.push_str(&format!(
            " (was {}, save {})",
            format_price(original, currency),
            format_price(saved, currency)
        ));
    }
    lines.push(format!("Price: {price}"));
    lines.push(format!("Condition: {}", product.condition.label()));
    if let Some(badge) = product.badge {
        lines.push(format!("Badge: {}", badge.label()));
    }
    let availability = if product.in_stock { "in stock" } else { "sold out" };
    lines.push(format!("Availability: {availability}"));

    lines.push("Specs:".to_string());
    lines.push(format!("  Processor: {}", product.specs.processor));
    lines.push(format!("  RAM: {}", product.specs.ram));
    lines.push(format!("  Storage: {}", product.specs.storage));
    lines.push(format!("  Display: {}", product.specs.screen));
    if let Some(graphics) = &product.specs.graphics {
        lines.push(format!("  Graphics: {graphics}"));
    }

    if !product.features.is_empty() {
        lines.push("Features:".to_string());
        lines.extend(product.features.iter().map(|feature| format!("  - {feature}")));
    }
    if let Some(use_cases) = product.use_case_summary() {
        lines.push(format!("Best for: {use_cases}"));
    }

    let score = &detail.score;
    lines.push(format!(
        "Score: {:.1} (ram {:.1} + storage {:.1} + condition {:.1} - price {:.1})",
        score.total, score.ram, score.storage, score.condition, score.price_penalty
    ));

    if !detail.related.is_empty() {
        lines.push(format!("Related: {}", detail.related.join(", ")));
    }

    lines.join("\n")
}
