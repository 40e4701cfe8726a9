//! Read-only projections of the session for each dashboard screen.
//!
//! Every function here is pure: the same state and clock produce the same
//! output, and nothing is cached between calls.

pub mod alerts;
pub mod caretakers;
pub mod dashboard;
pub mod format;
pub mod inventory;
pub mod schedule;

use serde::Serialize;

pub use alerts::{alerts_view, AlertRow};
pub use caretakers::{caretakers_view, CaretakerRow};
pub use dashboard::{dashboard_view, DashboardSummary};
pub use inventory::{inventory_view, InventoryRow};
pub use schedule::{schedule_view, ScheduleRow};

/// Placeholder shown instead of an empty table or list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub title: String,
    pub message: Option<String>,
}

impl EmptyState {
    fn new(title: impl Into<String>, message: Option<&str>) -> Self {
        Self {
            title: title.into(),
            message: message.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    pub rows: Vec<T>,
    /// Set exactly when `rows` is empty.
    pub empty: Option<EmptyState>,
}

impl<T> ListView<T> {
    fn new(rows: Vec<T>, empty: impl FnOnce() -> EmptyState) -> Self {
        let empty = if rows.is_empty() { Some(empty()) } else { None };
        Self { rows, empty }
    }
}
