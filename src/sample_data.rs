//! Built-in patients and prescriptions standing in for a card database.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Frequency, Gender, Medicine, UserProfile};

pub const CARD_IDS: [&str; 2] = ["CARD001", "CARD002"];

pub fn find_user(card_id: &str) -> Option<UserProfile> {
    match card_id {
        "CARD001" => Some(UserProfile {
            id: "CARD001".into(),
            name: "John Doe".into(),
            age: 45,
            gender: Gender::Male,
            disease: "Hypertension".into(),
            symptoms: "High blood pressure, occasional headaches".into(),
            doctor: "Dr. Smith".into(),
            contact: "+1234567890".into(),
        }),
        "CARD002" => Some(UserProfile {
            id: "CARD002".into(),
            name: "Mary Johnson".into(),
            age: 62,
            gender: Gender::Female,
            disease: "Diabetes Type 2".into(),
            symptoms: "Elevated blood sugar, fatigue".into(),
            doctor: "Dr. Williams".into(),
            contact: "+1987654321".into(),
        }),
        _ => None,
    }
}

/// Medicines prescribed to a card. Unknown cards have none.
pub fn medicines_for(card_id: &str) -> Vec<Medicine> {
    match card_id {
        "CARD001" => vec![
            medicine(
                1,
                "Lisinopril",
                "10mg",
                (8, 0),
                Frequency::Daily,
                "Blood pressure control",
                30,
                25,
                (2027, 12, 31),
            ),
            medicine(
                2,
                "Aspirin",
                "81mg",
                (20, 0),
                Frequency::Daily,
                "Heart health and blood thinning",
                60,
                45,
                (2027, 10, 15),
            ),
        ],
        "CARD002" => vec![
            medicine(
                3,
                "Metformin",
                "500mg",
                (7, 0),
                Frequency::TwiceDaily,
                "Blood sugar control",
                60,
                40,
                (2027, 11, 20),
            ),
            medicine(
                4,
                "Glipizide",
                "5mg",
                (18, 0),
                Frequency::Daily,
                "Diabetes management",
                30,
                20,
                (2027, 9, 30),
            ),
        ],
        _ => Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: u64,
    name: &str,
    dosage: &str,
    (hour, minute): (u32, u32),
    frequency: Frequency,
    uses: &str,
    stock: u32,
    remaining: u32,
    (year, month, day): (i32, u32, u32),
) -> Medicine {
    Medicine {
        id,
        name: name.into(),
        dosage: dosage.into(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        frequency,
        uses: uses.into(),
        stock,
        remaining,
        expiry: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}
