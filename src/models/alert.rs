//! Alert models.
//!
//! Alerts are derived from the medicine list and rebuilt wholesale on every
//! change; nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    Medicine,
    System,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Medicine => "medicine",
            AlertKind::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AlertPriority {
    Urgent,
    Medium,
    Low,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Urgent => "urgent",
            AlertPriority::Medium => "medium",
            AlertPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    pub medicine_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Filter used by the alerts screen: `all`, an alert kind, or a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    Kind(AlertKind),
    Priority(AlertPriority),
}

impl Default for AlertFilter {
    fn default() -> Self {
        AlertFilter::All
    }
}

impl AlertFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(AlertFilter::All),
            "medicine" => Some(AlertFilter::Kind(AlertKind::Medicine)),
            "system" => Some(AlertFilter::Kind(AlertKind::System)),
            "urgent" => Some(AlertFilter::Priority(AlertPriority::Urgent)),
            "medium" => Some(AlertFilter::Priority(AlertPriority::Medium)),
            "low" => Some(AlertFilter::Priority(AlertPriority::Low)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Kind(kind) => kind.as_str(),
            AlertFilter::Priority(priority) => priority.as_str(),
        }
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Kind(kind) => alert.kind == *kind,
            AlertFilter::Priority(priority) => alert.priority == *priority,
        }
    }
}
