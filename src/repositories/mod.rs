//! Repository layer for database operations.
//!
//! Repositories encapsulate database queries following the Data Mapper
//! pattern recommended by SeaORM, keeping entities as pure data models.

pub mod lead;

pub use lead::LeadRepository;
