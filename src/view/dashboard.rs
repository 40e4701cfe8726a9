use chrono::NaiveTime;
use serde::Serialize;

use crate::session::SessionState;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextDose {
    pub medicine_id: u64,
    pub name: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_name: Option<String>,
    pub next_dose: Option<NextDose>,
    pub next_dose_text: String,
    pub total_remaining: u64,
    pub total_remaining_text: String,
    pub alert_count: usize,
    pub alert_count_text: String,
}

/// Summary cards on the home screen. `now` is the local time of day used to
/// pick the next dose; doses at exactly `now` count as already due.
pub fn dashboard_view(state: &SessionState, now: NaiveTime) -> DashboardSummary {
    let user_name = state.current_user().map(|user| user.name.clone());
    let medicines = state.medicines();
    let alert_count = state.alerts().len();

    if user_name.is_none() || medicines.is_empty() {
        return DashboardSummary {
            user_name,
            next_dose: None,
            next_dose_text: "No medicines scheduled".into(),
            total_remaining: 0,
            total_remaining_text: "0 remaining".into(),
            alert_count,
            alert_count_text: format!("{alert_count} notifications"),
        };
    }

    let next_dose = medicines
        .iter()
        .filter(|medicine| medicine.time > now)
        .min_by_key(|medicine| medicine.time)
        .map(|medicine| NextDose {
            medicine_id: medicine.id,
            name: medicine.name.clone(),
            time: medicine.time.format("%H:%M").to_string(),
        });

    let next_dose_text = match &next_dose {
        Some(dose) => format!("{} at {}", dose.name, dose.time),
        None => "No more doses today".into(),
    };

    let total_remaining: u64 = medicines
        .iter()
        .map(|medicine| u64::from(medicine.remaining))
        .sum();

    DashboardSummary {
        user_name,
        next_dose,
        next_dose_text,
        total_remaining,
        total_remaining_text: format!("{total_remaining} remaining"),
        alert_count,
        alert_count_text: format!("{alert_count} notifications"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::derivation::{Always, Never};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn loaded(card: &str) -> SessionState {
        let mut state = SessionState::new(Box::new(Never));
        state.load_user(card, Local.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap());
        state
    }

    #[test]
    fn next_dose_is_the_earliest_one_still_ahead() {
        let state = loaded("CARD001");

        let morning = dashboard_view(&state, at(6, 0));
        assert_eq!(morning.next_dose_text, "Lisinopril at 08:00");

        let exactly_eight = dashboard_view(&state, at(8, 0));
        assert_eq!(exactly_eight.next_dose_text, "Aspirin at 20:00");

        let night = dashboard_view(&state, at(21, 0));
        assert_eq!(night.next_dose, None);
        assert_eq!(night.next_dose_text, "No more doses today");
    }

    #[test]
    fn totals_and_alert_count() {
        let mut state = SessionState::new(Box::new(Always));
        state.load_user("CARD002", Local.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap());

        let summary = dashboard_view(&state, at(6, 0));
        assert_eq!(summary.user_name.as_deref(), Some("Mary Johnson"));
        assert_eq!(summary.total_remaining, 60);
        assert_eq!(summary.total_remaining_text, "60 remaining");
        assert_eq!(summary.alert_count, 1);
        assert_eq!(summary.alert_count_text, "1 notifications");
    }

    #[test]
    fn without_patient_nothing_is_scheduled() {
        let state = SessionState::new(Box::new(Never));
        let summary = dashboard_view(&state, at(6, 0));
        assert_eq!(summary.next_dose_text, "No medicines scheduled");
        assert_eq!(summary.total_remaining, 0);
        assert_eq!(summary.alert_count_text, "0 notifications");
    }
}
