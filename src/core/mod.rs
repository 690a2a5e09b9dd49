//! Core data types for reads, features, tabular rows, and merged records.

pub mod merged;
pub mod record;
pub mod row;
pub mod types;
