//! Delivery Schedule - next delivery dates for recurring sales leads
//!
//! Each lead carries a recurrence plan (weekly, biweekly or monthly) and a
//! preferred weekday. This library projects the lead's next delivery date
//! from those fields and keeps it current as leads are created, edited and
//! swept on a schedule.
//!
//! # Modules
//!
//! * [`schedule`] - The next-delivery-date calculator
//! * [`service`] - Lead record operations and recalculation triggers
//! * [`storage`] - Local SQLite database
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`utils`] - Date helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for the `log` facade
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Next delivery date calculation
pub mod schedule;

/// Lead record service and recalculation triggers
pub mod service;

/// Local storage layer for lead records
pub mod storage;

/// Utility functions for date handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::lead;
