//! Recurrence plans and their cadence lengths.

use std::fmt;
use std::str::FromStr;

use super::LabelError;

/// Cadence governing how far apart successive delivery dates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrencePlan {
    Weekly,
    Biweekly,
    /// Fixed four-week cadence, not calendar-month arithmetic.
    Monthly,
}

impl RecurrencePlan {
    pub const ALL: [RecurrencePlan; 3] = [Self::Weekly, Self::Biweekly, Self::Monthly];

    /// Days added to an existing delivery date on rollover.
    pub fn cadence_days(self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 14,
            Self::Monthly => 28,
        }
    }

    /// Canonical label stored by the CRM.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "semanal",
            Self::Biweekly => "quincenal",
            Self::Monthly => "mensual",
        }
    }
}

impl FromStr for RecurrencePlan {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "semanal" | "weekly" => Ok(Self::Weekly),
            "quincenal" | "biweekly" => Ok(Self::Biweekly),
            "mensual" | "monthly" => Ok(Self::Monthly),
            _ => Err(LabelError::Plan(s.to_string())),
        }
    }
}

impl fmt::Display for RecurrencePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SEMANAL".parse::<RecurrencePlan>(), Ok(RecurrencePlan::Weekly));
        assert_eq!("Quincenal".parse::<RecurrencePlan>(), Ok(RecurrencePlan::Biweekly));
        assert_eq!("monthly".parse::<RecurrencePlan>(), Ok(RecurrencePlan::Monthly));
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert_eq!(
            "quarterly".parse::<RecurrencePlan>(),
            Err(LabelError::Plan("quarterly".to_string()))
        );
        // exact token match, no trimming
        assert!(" semanal".parse::<RecurrencePlan>().is_err());
        assert!("".parse::<RecurrencePlan>().is_err());
    }

    #[test]
    fn test_cadences_are_whole_weeks() {
        for plan in RecurrencePlan::ALL {
            assert_eq!(plan.cadence_days() % 7, 0);
        }
        assert_eq!(RecurrencePlan::Monthly.cadence_days(), 28);
    }

    #[test]
    fn test_label_round_trips() {
        for plan in RecurrencePlan::ALL {
            assert_eq!(plan.label().parse::<RecurrencePlan>(), Ok(plan));
        }
    }
}
