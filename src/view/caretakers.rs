use serde::Serialize;

use crate::{models::Relation, session::SessionState};

use super::{EmptyState, ListView};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaretakerRow {
    pub id: u64,
    pub name: String,
    pub relation: Relation,
    pub relation_label: String,
    pub phone: String,
    pub email: Option<String>,
}

pub fn caretakers_view(state: &SessionState) -> ListView<CaretakerRow> {
    let rows = state
        .caretakers()
        .iter()
        .map(|caretaker| CaretakerRow {
            id: caretaker.id,
            name: caretaker.name.clone(),
            relation: caretaker.relation,
            relation_label: caretaker.relation.label().to_string(),
            phone: caretaker.phone.clone(),
            email: caretaker.email.clone(),
        })
        .collect();

    ListView::new(rows, || {
        EmptyState::new(
            "No caretakers added",
            Some("Add caretakers to receive notifications"),
        )
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::{derivation::Never, models::CaretakerInput};

    #[test]
    fn caretaker_rows_carry_relation_labels() {
        let mut state = SessionState::new(Box::new(Never));
        assert!(caretakers_view(&state).empty.is_some());

        let now = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        state
            .add_caretaker(
                CaretakerInput {
                    name: "Jane Doe".into(),
                    relation: Some(Relation::Family),
                    phone: "+15550100".into(),
                    email: Some("jane@example.com".into()),
                },
                now,
            )
            .unwrap();

        let view = caretakers_view(&state);
        assert!(view.empty.is_none());
        assert_eq!(view.rows[0].relation_label, "Family Member");
        assert_eq!(view.rows[0].email.as_deref(), Some("jane@example.com"));
    }
}
