use serde::Serialize;

use crate::{models::Frequency, session::SessionState};

use super::{format::format_time, EmptyState, ListView};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub id: u64,
    pub name: String,
    pub dosage: String,
    pub time: String,
    pub time_display: String,
    pub frequency: Frequency,
    pub frequency_label: String,
    pub uses: String,
}

pub fn schedule_view(state: &SessionState) -> ListView<ScheduleRow> {
    let rows = if state.current_user().is_some() {
        state
            .medicines()
            .iter()
            .map(|medicine| ScheduleRow {
                id: medicine.id,
                name: medicine.name.clone(),
                dosage: medicine.dosage.clone(),
                time: medicine.time.format("%H:%M").to_string(),
                time_display: format_time(medicine.time),
                frequency: medicine.frequency,
                frequency_label: medicine.frequency.label().to_string(),
                uses: medicine.uses.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    ListView::new(rows, || {
        EmptyState::new(
            "No medicines scheduled. Please scan RFID to load data.",
            None,
        )
    })
}
