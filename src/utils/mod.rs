//! Utility modules for the delivery schedule application.
//!
//! - [`datetime`] - Date formatting and parsing for stored delivery dates

pub mod datetime;
