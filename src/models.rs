//! Board Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Column data structure (matches backend)
///
/// Columns are created at bootstrap (or externally) and never mutated or
/// deleted by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    pub title: String,
    /// Left-to-right order on the board
    #[serde(default)]
    pub position: i32,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    /// Column the task currently belongs to (exactly one at a time)
    pub column_id: u32,
    /// Top-to-bottom order within the column
    #[serde(default)]
    pub position: i32,
}
