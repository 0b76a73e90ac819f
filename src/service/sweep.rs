use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use chrono::NaiveDateTime;
use log::{debug, error, info};
use sea_orm::TransactionTrait;

use super::{project, DeliveryService};
use crate::constants::LOG_STARTING_SWEEP;
use crate::repositories::LeadRepository;
use crate::schedule::{Projection, SkipReason};
use crate::utils::datetime;

/// Counts from one sweep over the stored leads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Leads examined (both schedule fields set).
    pub examined: usize,
    /// Leads whose delivery date was written.
    pub rescheduled: usize,
    /// Leads whose delivery date has not arrived yet.
    pub not_due: usize,
    /// Leads with an unrecognized or empty plan or weekday label.
    pub misconfigured: usize,
}

/// Result of a sweep request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepStatus {
    /// Another sweep is already running; nothing was done.
    InProgress,
    /// The sweep ran to completion.
    Finished(SweepReport),
}

/// Holds the in-progress flag for one sweep and clears it on drop, including
/// when the sweep future is cancelled.
struct SweepGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SweepGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SweepGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl DeliveryService {
    /// Roll forward every lead whose delivery date is today.
    ///
    /// `now` is captured once by the caller and used for the whole batch so
    /// every lead sees the same day. Leads without a stored date get their
    /// first one.
    pub async fn sweep(&self, now: NaiveDateTime) -> Result<SweepStatus> {
        let Some(_guard) = SweepGuard::acquire(&self.sweep_in_progress) else {
            return Ok(SweepStatus::InProgress);
        };

        match self.perform_sweep(now).await {
            Ok(report) => Ok(SweepStatus::Finished(report)),
            Err(e) => {
                error!("❌ Delivery sweep failed: {}", e);
                Err(e)
            }
        }
    }

    async fn perform_sweep(&self, now: NaiveDateTime) -> Result<SweepReport> {
        info!("{} for {}", LOG_STARTING_SWEEP, now.date());

        let txn = self.storage.conn.begin().await?;
        let leads = LeadRepository::get_scheduled(&txn).await?;
        let mut report = SweepReport {
            examined: leads.len(),
            ..SweepReport::default()
        };

        for model in leads {
            match project(&model, now, false) {
                Projection::Scheduled { date, mode } => {
                    debug!("{:?} projection for {}: {}", mode, model.uuid, date);
                    LeadRepository::set_next_delivery_date(&txn, model, Some(datetime::format_ymd(date))).await?;
                    report.rescheduled += 1;
                }
                Projection::Skipped(SkipReason::NotDueYet) => report.not_due += 1,
                // Empty labels pass the NOT NULL filter
                Projection::Skipped(SkipReason::UnrecognizedLabel(_) | SkipReason::MissingConfiguration) => {
                    report.misconfigured += 1
                }
            }
        }

        txn.commit().await?;
        info!(
            "✅ Sweep done: {} examined, {} rescheduled, {} not due, {} misconfigured",
            report.examined, report.rescheduled, report.not_due, report.misconfigured
        );
        Ok(report)
    }
}
