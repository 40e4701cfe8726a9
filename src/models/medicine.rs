//! Medicine records held by the box.
//!
//! A single list of `Medicine` is the source of truth for both the schedule
//! and the inventory screens.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    ThriceDaily,
    Weekly,
    AsNeeded,
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Daily
    }
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::TwiceDaily => "twice-daily",
            Frequency::ThriceDaily => "thrice-daily",
            Frequency::Weekly => "weekly",
            Frequency::AsNeeded => "as-needed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::TwiceDaily => "2x Daily",
            Frequency::ThriceDaily => "3x Daily",
            Frequency::Weekly => "Weekly",
            Frequency::AsNeeded => "As Needed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: u64,
    pub name: String,
    pub dosage: String,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub frequency: Frequency,
    pub uses: String,
    pub stock: u32,
    /// Always `<= stock`.
    pub remaining: u32,
    pub expiry: NaiveDate,
}

impl Medicine {
    /// Share of the stock still in the box, in `[0, 1]`. An empty stock counts as 0.
    pub fn remaining_ratio(&self) -> f64 {
        if self.stock == 0 {
            return 0.0;
        }
        f64::from(self.remaining) / f64::from(self.stock)
    }

    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_to_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry - today).num_days()
    }
}

/// Form payload for adding or editing a medicine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineInput {
    pub name: String,
    pub dosage: String,
    pub time: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub uses: String,
    pub stock: u32,
    pub expiry: NaiveDate,
}

/// Validated form fields, ready to be written into a `Medicine`.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineFields {
    pub name: String,
    pub dosage: String,
    pub time: NaiveTime,
    pub frequency: Frequency,
    pub uses: String,
    pub stock: u32,
    pub expiry: NaiveDate,
}

pub mod validation {
    use anyhow::{bail, Result};

    use super::{parse_time, MedicineFields, MedicineInput};

    pub fn validate_medicine(input: MedicineInput) -> Result<MedicineFields> {
        let name = input.name.trim();
        let dosage = input.dosage.trim();
        let time = input.time.trim();

        if name.is_empty() {
            bail!("Medicine name is required");
        }
        if dosage.is_empty() {
            bail!("Dosage is required");
        }
        if time.is_empty() {
            bail!("Scheduled time is required");
        }

        let time = parse_time(time)?;

        Ok(MedicineFields {
            name: name.to_string(),
            dosage: dosage.to_string(),
            time,
            frequency: input.frequency,
            uses: input.uses.trim().to_string(),
            stock: input.stock,
            expiry: input.expiry,
        })
    }
}

pub fn parse_time(value: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Invalid time '{value}' (expected HH:MM)"))
}

/// `HH:MM` on the wire, matching the time inputs of the dashboard form.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, time: &str) -> MedicineInput {
        MedicineInput {
            name: name.into(),
            dosage: "10mg".into(),
            time: time.into(),
            frequency: Frequency::Daily,
            uses: "  Blood pressure control ".into(),
            stock: 30,
            expiry: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        }
    }

    #[test]
    fn validation_trims_and_parses_time() {
        let fields = validation::validate_medicine(input(" Lisinopril ", "08:00")).unwrap();
        assert_eq!(fields.name, "Lisinopril");
        assert_eq!(fields.uses, "Blood pressure control");
        assert_eq!(fields.time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn validation_rejects_blank_required_fields() {
        assert!(validation::validate_medicine(input("   ", "08:00")).is_err());
        assert!(validation::validate_medicine(input("Aspirin", "")).is_err());
        assert!(validation::validate_medicine(input("Aspirin", "8 o'clock")).is_err());
    }

    #[test]
    fn medicine_serializes_time_as_hh_mm() {
        let medicine = Medicine {
            id: 1,
            name: "Aspirin".into(),
            dosage: "81mg".into(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            frequency: Frequency::TwiceDaily,
            uses: String::new(),
            stock: 60,
            remaining: 45,
            expiry: NaiveDate::from_ymd_opt(2027, 10, 15).unwrap(),
        };

        let json = serde_json::to_value(&medicine).unwrap();
        assert_eq!(json["time"], "20:00");
        assert_eq!(json["frequency"], "twice-daily");
        assert_eq!(json["expiry"], "2027-10-15");

        let back: Medicine = serde_json::from_value(json).unwrap();
        assert_eq!(back, medicine);
    }

    #[test]
    fn zero_stock_has_zero_ratio() {
        let mut medicine = Medicine {
            id: 1,
            name: "Empty".into(),
            dosage: "1".into(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            frequency: Frequency::Daily,
            uses: String::new(),
            stock: 0,
            remaining: 0,
            expiry: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        };
        assert_eq!(medicine.remaining_ratio(), 0.0);

        medicine.stock = 4;
        medicine.remaining = 1;
        assert_eq!(medicine.remaining_ratio(), 0.25);
    }
}
