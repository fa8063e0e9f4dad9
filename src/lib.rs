//! Canonical relational schema for the shop database: users, orders, order
//! positions, products, categories, manufacturers and reviews.
//!
//! The crate owns the entity definitions, the migrations that create their
//! tables (foreign keys with cascading deletes, lookup indexes, the
//! per-user-per-day order uniqueness rule, and CHECK constraints for the
//! closed enumerations), plus the write-time field validation that the
//! database cannot express. The web layer and storage engine both consume
//! it; neither is defined here.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod labels;
pub mod migration;
pub mod validate;

pub use error::{SchemaError, SchemaResult};
