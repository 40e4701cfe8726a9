use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{AlertFilter, AlertKind, AlertPriority};
use crate::session::SessionState;

use super::{EmptyState, ListView};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRow {
    pub id: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub icon: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

fn icon_for(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Medicine => "pills",
        AlertKind::System => "cog",
    }
}

pub fn alerts_view(state: &SessionState, filter: AlertFilter) -> ListView<AlertRow> {
    let rows = state
        .alerts()
        .iter()
        .filter(|alert| filter.matches(alert))
        .map(|alert| AlertRow {
            id: alert.id.clone(),
            kind: alert.kind,
            priority: alert.priority,
            icon: icon_for(alert.kind).to_string(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            created_at: alert.created_at,
        })
        .collect();

    ListView::new(rows, || match filter {
        AlertFilter::All => {
            EmptyState::new("No active alerts", Some("All systems are running normally"))
        }
        other => EmptyState::new(
            format!("No {} alerts", other.as_str()),
            Some("No alerts found for this filter"),
        ),
    })
}
