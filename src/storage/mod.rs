//! Local storage module for lead persistence
//!
//! Owns the SeaORM connection and creates the schema from the entity
//! definitions on start-up.

pub mod db;

pub use db::LocalStorage;
