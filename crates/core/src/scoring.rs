//! Weighted desirability score of a single product.
//!
//! ```text
//! score = 10 * ram + storage / 10 + (new ? 50 : 30) - price / 10000
//! ```
//!
//! Terms are accumulated in that order in `f64` so results are reproducible
//! to the last bit for the same inputs.

use serde::{Deserialize, Serialize};

use crate::domain::product::{Condition, Product, ProductId};

pub const RAM_WEIGHT: f64 = 10.0;
pub const STORAGE_DIVISOR: f64 = 10.0;
pub const NEW_CONDITION_BONUS: f64 = 50.0;
pub const REFURBISHED_CONDITION_BONUS: f64 = 30.0;
pub const PRICE_DIVISOR: f64 = 10_000.0;

/// Every term of a score, in the style of a pricing trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub product_id: ProductId,
    pub ram: f64,
    pub storage: f64,
    pub condition: f64,
    pub price_penalty: f64,
    pub total: f64,
}

pub fn score(product: &Product) -> f64 {
    score_breakdown(product).total
}

pub fn score_breakdown(product: &Product) -> ScoreBreakdown {
    // u64 -> f64 is exact for any realistic capacity or price.
    let ram = product.specs.ram.magnitude as f64 * RAM_WEIGHT;
    let storage = product.specs.storage.magnitude as f64 / STORAGE_DIVISOR;
    let condition = match product.condition {
        Condition::New => NEW_CONDITION_BONUS,
        Condition::Refurbished => REFURBISHED_CONDITION_BONUS,
    };
    let price_penalty = product.price as f64 / PRICE_DIVISOR;

    let mut total = 0.0;
    total += ram;
    total += storage;
    total += condition;
    total -= price_penalty;

    ScoreBreakdown {
        product_id: product.id.clone(),
        ram,
        storage,
        condition,
        price_penalty,
        total,
    }
}
