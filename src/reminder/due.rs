use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::{Frequency, Medicine};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoseDue {
    pub medicine_id: u64,
    pub name: String,
    pub dosage: String,
    pub time: String,
    pub volume: u8,
}

/// Remembers which doses already rang so a dose fires once per day.
#[derive(Debug, Default)]
pub struct FiredDoses {
    fired: HashSet<(u64, NaiveDate)>,
}

impl FiredDoses {
    /// Doses scheduled for the minute of `now` that have not rung yet today.
    /// As-needed medicines never ring.
    pub fn take_due(
        &mut self,
        medicines: &[Medicine],
        now: NaiveDateTime,
        volume: u8,
    ) -> Vec<DoseDue> {
        let today = now.date();
        self.fired.retain(|(_, date)| *date == today);

        medicines
            .iter()
            .filter(|medicine| medicine.frequency != Frequency::AsNeeded)
            .filter(|medicine| {
                medicine.time.hour() == now.hour() && medicine.time.minute() == now.minute()
            })
            .filter(|medicine| self.fired.insert((medicine.id, today)))
            .map(|medicine| DoseDue {
                medicine_id: medicine.id,
                name: medicine.name.clone(),
                dosage: medicine.dosage.clone(),
                time: medicine.time.format("%H:%M").to_string(),
                volume,
            })
            .collect()
    }
}
