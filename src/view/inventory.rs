use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    derivation::{classify_stock, StockStatus},
    session::SessionState,
};

use super::{format::format_date, EmptyState, ListView};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockBadge {
    pub status: StockStatus,
    pub label: String,
    pub class: String,
    pub severity: u8,
}

impl From<StockStatus> for StockBadge {
    fn from(status: StockStatus) -> Self {
        Self {
            status,
            label: status.label().to_string(),
            class: status.badge_class().to_string(),
            severity: status.severity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: u64,
    pub name: String,
    pub stock: u32,
    pub remaining: u32,
    pub expiry: NaiveDate,
    pub expiry_display: String,
    pub badge: StockBadge,
}

pub fn inventory_view(state: &SessionState, today: NaiveDate) -> ListView<InventoryRow> {
    let rows = if state.current_user().is_some() {
        state
            .medicines()
            .iter()
            .map(|medicine| InventoryRow {
                id: medicine.id,
                name: medicine.name.clone(),
                stock: medicine.stock,
                remaining: medicine.remaining,
                expiry: medicine.expiry,
                expiry_display: format_date(medicine.expiry),
                badge: classify_stock(medicine, today).into(),
            })
            .collect()
    } else {
        Vec::new()
    };

    ListView::new(rows, || {
        EmptyState::new("No inventory data. Please scan RFID to load data.", None)
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::derivation::Never;

    #[test]
    fn card001_is_fully_stocked() {
        let mut state = SessionState::new(Box::new(Never));
        let now = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        state.load_user("CARD001", now);

        let view = inventory_view(&state, now.date_naive());
        let summary: Vec<_> = view
            .rows
            .iter()
            .map(|row| (row.name.as_str(), row.remaining, row.stock, row.badge.label.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Lisinopril", 25, 30, "Good Stock"),
                ("Aspirin", 45, 60, "Good Stock"),
            ]
        );
        assert_eq!(view.rows[0].expiry_display, "Dec 31, 2027");
    }

    #[test]
    fn badges_switch_to_expiring_close_to_expiry() {
        let mut state = SessionState::new(Box::new(Never));
        let now = Local.with_ymd_and_hms(2027, 10, 1, 9, 0, 0).unwrap();
        state.load_user("CARD001", now);

        let view = inventory_view(&state, now.date_naive());
        assert_eq!(view.rows[0].badge.class, "good");
        assert_eq!(view.rows[1].badge.class, "expiring");
        assert!(view.rows[1].badge.severity > view.rows[0].badge.severity);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut state = SessionState::new(Box::new(Never));
        let now = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        state.load_user("CARD002", now);

        assert_eq!(
            inventory_view(&state, now.date_naive()),
            inventory_view(&state, now.date_naive())
        );
    }
}
