//! Next delivery date projection.
//!
//! Two policies share one entry point:
//!
//! - **Fresh**: forced, or no previous date on the record. The result is the
//!   nearest occurrence of the preferred weekday, whatever the plan.
//! - **Rollover**: not forced and the previous date is today. The result is
//!   the previous date plus one cadence period.
//!
//! A non-forced call whose previous date is not today changes nothing.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use log::{debug, warn};

use super::{DeliveryDay, LabelError, RecurrencePlan};
use crate::constants::NOON_CUTOFF_HOUR;

/// Which policy produced a scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Fresh,
    Rollover,
}

/// Why a projection left the record untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Plan or weekday is not set.
    MissingConfiguration,
    /// Plan or weekday text is outside the known vocabulary.
    UnrecognizedLabel(LabelError),
    /// Automatic run and the current delivery date has not arrived.
    NotDueYet,
}

/// Outcome of a single projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    Scheduled { date: NaiveDate, mode: ProjectionMode },
    Skipped(SkipReason),
}

impl Projection {
    /// The date to persist, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Scheduled { date, .. } => Some(*date),
            Self::Skipped(_) => None,
        }
    }
}

/// Project the next delivery date from typed inputs.
pub fn compute(
    now: NaiveDateTime,
    plan: Option<RecurrencePlan>,
    day: Option<DeliveryDay>,
    existing: Option<NaiveDate>,
    force: bool,
) -> Projection {
    let (Some(plan), Some(day)) = (plan, day) else {
        return Projection::Skipped(SkipReason::MissingConfiguration);
    };

    let today = now.date();
    if !force && existing.is_some_and(|date| date != today) {
        return Projection::Skipped(SkipReason::NotDueYet);
    }

    let base_next = next_occurrence(now, day);

    match existing {
        Some(anchor) if !force => {
            let date = anchor + Duration::days(plan.cadence_days());
            debug!("Rolled {} forward by {} days to {}", anchor, plan.cadence_days(), date);
            Projection::Scheduled {
                date,
                mode: ProjectionMode::Rollover,
            }
        }
        _ => Projection::Scheduled {
            date: base_next,
            mode: ProjectionMode::Fresh,
        },
    }
}

/// Project the next delivery date from the free-text labels on a record.
///
/// Empty labels count as unset.
pub fn compute_from_labels(
    now: NaiveDateTime,
    plan_label: Option<&str>,
    day_label: Option<&str>,
    existing: Option<NaiveDate>,
    force: bool,
) -> Projection {
    let plan_label = plan_label.filter(|s| !s.is_empty());
    let day_label = day_label.filter(|s| !s.is_empty());
    let (Some(plan_label), Some(day_label)) = (plan_label, day_label) else {
        return Projection::Skipped(SkipReason::MissingConfiguration);
    };

    let parsed = plan_label
        .parse::<RecurrencePlan>()
        .and_then(|plan| day_label.parse::<DeliveryDay>().map(|day| (plan, day)));

    match parsed {
        Ok((plan, day)) => compute(now, Some(plan), Some(day), existing, force),
        Err(e) => {
            warn!("⚠️ Skipping delivery date calculation: {}", e);
            Projection::Skipped(SkipReason::UnrecognizedLabel(e))
        }
    }
}

/// Nearest occurrence of `day` on or after today, rolling to next week once
/// today's slot has passed the noon cutoff.
pub fn next_occurrence(now: NaiveDateTime, day: DeliveryDay) -> NaiveDate {
    let today = now.date();
    let current = today.weekday().num_days_from_monday() as i64;
    let target = day.weekday().num_days_from_monday() as i64;

    let mut days_ahead = (target - current).rem_euclid(7);
    if days_ahead == 0 && now.hour() >= NOON_CUTOFF_HOUR {
        days_ahead = 7;
    }
    today + Duration::days(days_ahead)
}
