use serde::Serialize;

use crate::domain::product::Product;
use crate::scoring::score;

const AFFORDABLE_CLAUSE: &str = "It's also more affordable, ";
const GENERAL_USE: &str = "general use";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub winner: &'a Product,
    pub runner_up: &'a Product,
    pub winner_score: f64,
    pub runner_up_score: f64,
    pub justification: String,
}

/// Picks the higher-scoring product.
///
/// `first` wins only on a strictly greater score; a tie goes to `second`.
pub fn recommend<'a>(first: &'a Product, second: &'a Product) -> Recommendation<'a> {
    let first_score = score(first);
    let second_score = score(second);

    let (winner, runner_up, winner_score, runner_up_score) = if first_score > second_score {
        (first, second, first_score, second_score)
    } else {
        (second, first, second_score, first_score)
    };

    Recommendation {
        winner,
        runner_up,
        winner_score,
        runner_up_score,
        justification: justification(winner, runner_up),
    }
}

/// One template regardless of which side won. The storefront's older wording
/// for a winning second selection ("superior performance", "While it costs
/// more", "demanding tasks") is intentionally not reproduced.
pub fn justification(winner: &Product, runner_up: &Product) -> String {
    let price_clause = if winner.price < runner_up.price { AFFORDABLE_CLAUSE } else { "" };
    let audience = winner.use_case_summary().unwrap_or_else(|| GENERAL_USE.to_owned());

    format!(
        "{} offers better overall value with {} RAM and {} storage. {}making it a great choice for {}.",
        winner.name, winner.specs.ram, winner.specs.storage, price_clause, audience
    )
}
