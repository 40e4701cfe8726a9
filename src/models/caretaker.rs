use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    Family,
    Friend,
    Nurse,
    Doctor,
    Other,
}

impl Relation {
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Family => "Family Member",
            Relation::Friend => "Friend",
            Relation::Nurse => "Nurse",
            Relation::Doctor => "Doctor",
            Relation::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Caretaker {
    pub id: u64,
    pub name: String,
    pub relation: Relation,
    pub phone: String,
    pub email: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Caretaker form payload. `relation` is optional so that an unselected
/// dropdown reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaretakerInput {
    #[serde(default)]
    pub name: String,
    pub relation: Option<Relation>,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
}
