//! Constants used throughout the application
//!
//! This module centralizes magic strings, user-facing text, and other
//! constant values to improve maintainability and consistency.

// Scheduling
/// Same-day deliveries roll to next week from this hour on.
pub const NOON_CUTOFF_HOUR: u32 = 12;

// File names
pub const APP_DIR_NAME: &str = "delivery-schedule";
pub const LOCAL_CONFIG_FILE: &str = "delivery-schedule.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "delivery-schedule.log";
pub const DATABASE_FILE_NAME: &str = "leads.db";

// Success Messages
pub const SUCCESS_LEAD_CREATED: &str = "✅ Lead created";
pub const SUCCESS_LEAD_UPDATED: &str = "✅ Lead updated";
pub const SUCCESS_DATE_RECALCULATED: &str = "✅ Next delivery date recalculated";
pub const SUCCESS_SWEEP_FINISHED: &str = "✅ Delivery sweep finished";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Info Messages
pub const INFO_DATE_UNCHANGED: &str = "ℹ️ Next delivery date left unchanged";
pub const INFO_NO_LEADS: &str = "ℹ️ No leads stored";
pub const INFO_SWEEP_RUNNING: &str = "ℹ️ A sweep is already running";

// Log Messages
pub const LOG_STARTING_SWEEP: &str = "🔄 Starting delivery sweep";
pub const LOG_STORAGE_READY: &str = "✅ Lead storage initialized";
