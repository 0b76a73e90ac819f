//! Lead record service for the delivery schedule.
//!
//! [`DeliveryService`] is the host layer around the calculator. It owns the
//! four points where a next delivery date gets recomputed:
//!
//! - lead creation, when both plan and weekday are set (forced)
//! - lead edits touching plan or weekday (forced)
//! - explicit recalculation of one lead (forced)
//! - the scheduled sweep over every lead (not forced)
//!
//! Every trigger is two-phase: field edits are persisted first, then the
//! calculator runs and only the `next_delivery_date` column is written back.
//! That write never goes through [`DeliveryService::update_lead`], so a
//! recalculation can not trigger another one.

pub mod sweep;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, TransactionTrait};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::entities::lead;
use crate::repositories::LeadRepository;
use crate::schedule::{self, LabelError, Projection, SkipReason};
use crate::storage::LocalStorage;
use crate::utils::datetime;

pub use sweep::{SweepReport, SweepStatus};

/// Errors surfaced by [`DeliveryService`] operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("lead not found: {0}")]
    LeadNotFound(Uuid),
    #[error("invalid schedule: {0}")]
    InvalidLabel(#[from] LabelError),
}

/// Fields for a new lead.
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub name: String,
    pub recurrence_plan: Option<String>,
    pub preferred_weekday: Option<String>,
}

/// Partial edit of a lead. `None` leaves a field as is; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct LeadChanges {
    pub name: Option<String>,
    pub recurrence_plan: Option<Option<String>>,
    pub preferred_weekday: Option<Option<String>>,
}

impl LeadChanges {
    /// Whether the edit touches a field the delivery date depends on.
    pub fn touches_schedule(&self) -> bool {
        self.recurrence_plan.is_some() || self.preferred_weekday.is_some()
    }
}

/// Result of a single-lead trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum RecalcOutcome {
    /// A new delivery date was written.
    Updated(lead::Model),
    /// The calculator ran and left the date untouched.
    Unchanged(lead::Model, SkipReason),
    /// The trigger conditions were not met; the calculator did not run.
    NotTriggered(lead::Model),
}

impl RecalcOutcome {
    pub fn lead(&self) -> &lead::Model {
        match self {
            Self::Updated(model) | Self::Unchanged(model, _) | Self::NotTriggered(model) => model,
        }
    }
}

/// Service managing lead records and their next delivery dates.
#[derive(Clone)]
pub struct DeliveryService {
    storage: Arc<LocalStorage>,
    strict_labels: bool,
    sweep_in_progress: Arc<AtomicBool>,
}

impl DeliveryService {
    pub fn new(storage: Arc<LocalStorage>, strict_labels: bool) -> Self {
        Self {
            storage,
            strict_labels,
            sweep_in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Open storage and build the service from configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let storage = LocalStorage::new(&config.storage.database_path).await?;
        Ok(Self::new(Arc::new(storage), config.scheduling.strict_labels))
    }

    /// Get all leads.
    pub async fn get_leads(&self) -> Result<Vec<lead::Model>> {
        LeadRepository::get_all(&self.storage.conn).await
    }

    /// Get a single lead.
    pub async fn get_lead(&self, uuid: &Uuid) -> Result<lead::Model> {
        LeadRepository::get_by_id(&self.storage.conn, uuid)
            .await?
            .ok_or_else(|| ServiceError::LeadNotFound(*uuid).into())
    }

    /// Create a lead, computing its first delivery date when the schedule is complete.
    pub async fn create_lead(&self, new_lead: NewLead, now: NaiveDateTime) -> Result<RecalcOutcome> {
        let txn = self.storage.conn.begin().await?;

        let model = lead::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(new_lead.name),
            recurrence_plan: ActiveValue::Set(new_lead.recurrence_plan),
            preferred_weekday: ActiveValue::Set(new_lead.preferred_weekday),
            next_delivery_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(datetime::format_timestamp(now)),
        };
        let model = LeadRepository::create(&txn, model).await?;
        info!("➕ Created lead {} ({})", model.name, model.uuid);

        let outcome = if has_schedule(&model) {
            self.recalculate_model(&txn, model, now).await?
        } else {
            RecalcOutcome::NotTriggered(model)
        };

        txn.commit().await?;
        Ok(outcome)
    }

    /// Apply a partial edit, recalculating when plan or weekday changed.
    pub async fn update_lead(&self, uuid: &Uuid, changes: LeadChanges, now: NaiveDateTime) -> Result<RecalcOutcome> {
        let txn = self.storage.conn.begin().await?;

        let existing = LeadRepository::get_by_id(&txn, uuid)
            .await?
            .ok_or(ServiceError::LeadNotFound(*uuid))?;

        let touches_schedule = changes.touches_schedule();
        let mut active_model: lead::ActiveModel = existing.clone().into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(plan) = changes.recurrence_plan {
            active_model.recurrence_plan = ActiveValue::Set(plan);
        }
        if let Some(weekday) = changes.preferred_weekday {
            active_model.preferred_weekday = ActiveValue::Set(weekday);
        }

        let model = if active_model.is_changed() {
            LeadRepository::update(&txn, active_model).await?
        } else {
            existing
        };

        let outcome = if touches_schedule {
            self.recalculate_model(&txn, model, now).await?
        } else {
            RecalcOutcome::NotTriggered(model)
        };

        txn.commit().await?;
        Ok(outcome)
    }

    /// Explicit recalculation of one lead.
    pub async fn recalculate(&self, uuid: &Uuid, now: NaiveDateTime) -> Result<RecalcOutcome> {
        let model = self.get_lead(uuid).await?;
        self.recalculate_model(&self.storage.conn, model, now).await
    }

    /// Forced projection for one lead, persisting the date when one is produced.
    async fn recalculate_model<C>(&self, conn: &C, model: lead::Model, now: NaiveDateTime) -> Result<RecalcOutcome>
    where
        C: ConnectionTrait,
    {
        match project(&model, now, true) {
            Projection::Scheduled { date, .. } => {
                let updated =
                    LeadRepository::set_next_delivery_date(conn, model, Some(datetime::format_ymd(date))).await?;
                info!("📅 Next delivery for {} set to {}", updated.name, date);
                Ok(RecalcOutcome::Updated(updated))
            }
            Projection::Skipped(SkipReason::UnrecognizedLabel(e)) if self.strict_labels => {
                Err(ServiceError::InvalidLabel(e).into())
            }
            Projection::Skipped(reason) => Ok(RecalcOutcome::Unchanged(model, reason)),
        }
    }
}

fn has_schedule(model: &lead::Model) -> bool {
    let is_set = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    is_set(&model.recurrence_plan) && is_set(&model.preferred_weekday)
}

/// Stored delivery date, treating an unparseable value as absent.
fn stored_date(model: &lead::Model) -> Option<NaiveDate> {
    let raw = model.next_delivery_date.as_deref()?;
    match datetime::parse_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("⚠️ Ignoring invalid delivery date '{}' on lead {}: {}", raw, model.uuid, e);
            None
        }
    }
}

fn project(model: &lead::Model, now: NaiveDateTime, force: bool) -> Projection {
    schedule::compute_from_labels(
        now,
        model.recurrence_plan.as_deref(),
        model.preferred_weekday.as_deref(),
        stored_date(model),
        force,
    )
}
