//! Next-delivery-date calculation for recurring leads.
//!
//! This module is pure: callers pass the current local time in and persist
//! whatever date comes out. See [`calculator`] for the two projection
//! policies.

pub mod calculator;
pub mod plan;
pub mod weekday;

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

pub use calculator::{compute, compute_from_labels, next_occurrence, Projection, ProjectionMode, SkipReason};
pub use plan::RecurrencePlan;
pub use weekday::DeliveryDay;

/// A free-text label that does not match the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unrecognized recurrence plan '{0}'")]
    Plan(String),
    #[error("unrecognized delivery day '{0}'")]
    Weekday(String),
}

/// Canonical spelling of a stored label, or the raw text when it is outside
/// the vocabulary.
pub fn canonical_label<T>(raw: &str) -> String
where
    T: FromStr + Display,
{
    raw.parse::<T>().map(|value| value.to_string()).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label() {
        assert_eq!(canonical_label::<RecurrencePlan>("Weekly"), "semanal");
        assert_eq!(canonical_label::<DeliveryDay>("MIÉRCOLES"), "miercoles");
        assert_eq!(canonical_label::<DeliveryDay>("sabado"), "sabado");
        assert_eq!(canonical_label::<RecurrencePlan>("anual"), "anual");
    }
}
