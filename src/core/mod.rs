//! Core business logic module
//!
//! This module contains the report-building components:
//! - `classifier` - Maps a record's direction and payment mode to a bucket
//! - `aggregator` - Folds records into a sorted ledger and bucket totals

pub mod aggregator;
pub mod classifier;

pub use aggregator::aggregate;
pub use classifier::classify;
