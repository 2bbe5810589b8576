use serde::{Deserialize, Serialize};

use crate::domain::{
    attribute::Attribute,
    product::{Capacity, Condition},
};
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Result of a directional comparison, from the first value's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Better,
    Worse,
    Equal,
}

impl Outcome {
    /// The same comparison seen from the other side.
    pub fn invert(self) -> Self {
        match self {
            Self::Better => Self::Worse,
            Self::Worse => Self::Better,
            Self::Equal => Self::Equal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributePolicy {
    Directional(Direction),
    /// `New` ranks above `Refurbished`.
    ConditionRank,
    /// Shown side by side without an indicator.
    Informational,
}

pub fn policy_for(attribute: Attribute) -> AttributePolicy {
    match attribute {
        Attribute::Price => AttributePolicy::Directional(Direction::LowerIsBetter),
        Attribute::Ram | Attribute::Storage => {
            AttributePolicy::Directional(Direction::HigherIsBetter)
        }
        Attribute::Condition => AttributePolicy::ConditionRank,
        Attribute::Processor | Attribute::Display | Attribute::BestFor => {
            AttributePolicy::Informational
        }
    }
}

/// Value equality short-circuits to `Equal` before the direction is consulted.
pub fn compare<T: PartialOrd>(first: &T, second: &T, direction: Direction) -> Outcome {
    if first == second {
        return Outcome::Equal;
    }

    let first_wins = match direction {
        Direction::HigherIsBetter => first > second,
        Direction::LowerIsBetter => first < second,
    };

    if first_wins {
        Outcome::Better
    } else {
        Outcome::Worse
    }
}

/// Compares two normalized capacities by magnitude.
///
/// Identical raw text is `Equal` without looking at magnitudes. A zero
/// magnitude never comes out of `Capacity::parse` and is `InvalidAttribute`.
pub fn compare_capacities(
    attribute: Attribute,
    first: &Capacity,
    second: &Capacity,
    direction: Direction,
) -> Result<Outcome, DomainError> {
    if first.raw == second.raw {
        return Ok(Outcome::Equal);
    }

    let usable = |capacity: &Capacity| {
        if capacity.magnitude > 0 {
            Ok(capacity.magnitude)
        } else {
            Err(DomainError::InvalidAttribute { attribute, value: capacity.raw.clone() })
        }
    };

    Ok(compare(&usable(first)?, &usable(second)?, direction))
}

pub fn compare_condition(first: Condition, second: Condition) -> Outcome {
    match (first, second) {
        (Condition::New, Condition::Refurbished) => Outcome::Better,
        (Condition::Refurbished, Condition::New) => Outcome::Worse,
        _ => Outcome::Equal,
    }
}
