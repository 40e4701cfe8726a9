use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Local, Utc};

use crate::{
    derivation::{generate_alerts, RandomTrigger, SystemAlertTrigger, SYSTEM_ALERT_PROBABILITY},
    models::{
        medicine::validation::validate_medicine, Alert, Caretaker, CaretakerInput, Medicine,
        MedicineFields, MedicineInput, ProfileInput, UserProfile,
    },
    sample_data,
};

/// Hands out millisecond-timestamp ids, bumping past collisions.
#[derive(Debug, Default)]
struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    fn next(&mut self, now: DateTime<Utc>) -> u64 {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = candidate.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}

/// Everything the dashboard knows about the box and the patient in front of it.
///
/// `medicines` is the only copy of the prescription list; the schedule and
/// inventory screens are both views over it.
pub struct SessionState {
    user: Option<UserProfile>,
    medicines: Vec<Medicine>,
    caretakers: Vec<Caretaker>,
    alerts: Vec<Alert>,
    medicine_ids: IdGenerator,
    caretaker_ids: IdGenerator,
    trigger: Box<dyn SystemAlertTrigger>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Box::new(RandomTrigger::new(SYSTEM_ALERT_PROBABILITY)))
    }
}

impl SessionState {
    pub fn new(trigger: Box<dyn SystemAlertTrigger>) -> Self {
        Self {
            user: None,
            medicines: Vec::new(),
            caretakers: Vec::new(),
            alerts: Vec::new(),
            medicine_ids: IdGenerator::default(),
            caretaker_ids: IdGenerator::default(),
            trigger,
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn medicine(&self, id: u64) -> Option<&Medicine> {
        self.medicines.iter().find(|medicine| medicine.id == id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn caretakers(&self) -> &[Caretaker] {
        &self.caretakers
    }

    pub fn set_trigger(&mut self, trigger: Box<dyn SystemAlertTrigger>) {
        self.trigger = trigger;
    }

    /// Replace the active patient with the one on `card_id`.
    /// Returns false and leaves everything untouched for unknown cards.
    pub fn load_user(&mut self, card_id: &str, now: DateTime<Local>) -> bool {
        let Some(user) = sample_data::find_user(card_id) else {
            return false;
        };

        self.user = Some(user);
        self.medicines = sample_data::medicines_for(card_id);
        for medicine in &self.medicines {
            self.medicine_ids.observe(medicine.id);
        }
        self.regenerate_alerts(now);
        true
    }

    pub fn regenerate_alerts(&mut self, now: DateTime<Local>) {
        if self.user.is_none() {
            self.alerts.clear();
            return;
        }

        self.alerts = generate_alerts(
            &self.medicines,
            now.date_naive(),
            now.with_timezone(&Utc),
            self.trigger.as_mut(),
        );
    }

    pub fn add_medicine(&mut self, input: MedicineInput, now: DateTime<Local>) -> Result<Medicine> {
        if self.user.is_none() {
            bail!("Please scan RFID card first");
        }

        let fields = validate_medicine(input)?;
        let medicine = Medicine {
            id: self.medicine_ids.next(now.with_timezone(&Utc)),
            name: fields.name,
            dosage: fields.dosage,
            time: fields.time,
            frequency: fields.frequency,
            uses: fields.uses,
            stock: fields.stock,
            remaining: fields.stock,
            expiry: fields.expiry,
        };

        self.medicines.push(medicine.clone());
        self.regenerate_alerts(now);
        Ok(medicine)
    }

    /// Overwrite the editable fields of a medicine, keeping its remaining count.
    /// `Ok(None)` when no medicine has this id.
    pub fn update_medicine(
        &mut self,
        id: u64,
        input: MedicineInput,
        now: DateTime<Local>,
    ) -> Result<Option<Medicine>> {
        let Some(index) = self.medicines.iter().position(|medicine| medicine.id == id) else {
            return Ok(None);
        };

        let fields = validate_medicine(input)?;
        let remaining = self.medicines[index].remaining;
        if fields.stock < remaining {
            bail!("Stock cannot be lower than the {remaining} pills still in the box");
        }

        let medicine = &mut self.medicines[index];
        apply_fields(medicine, fields);
        let updated = medicine.clone();

        self.regenerate_alerts(now);
        Ok(Some(updated))
    }

    pub fn delete_medicine(&mut self, id: u64, now: DateTime<Local>) -> Option<Medicine> {
        let index = self.medicines.iter().position(|medicine| medicine.id == id)?;
        let removed = self.medicines.remove(index);
        self.regenerate_alerts(now);
        Some(removed)
    }

    /// Add `quantity` pills to both the remaining count and the stock.
    /// Non-numeric or non-positive quantities are ignored.
    pub fn restock_medicine(
        &mut self,
        id: u64,
        quantity: &str,
        now: DateTime<Local>,
    ) -> Option<Medicine> {
        let quantity = parse_quantity(quantity)?;
        let medicine = self.medicines.iter_mut().find(|medicine| medicine.id == id)?;

        let stock = medicine.stock.checked_add(quantity)?;
        let remaining = medicine.remaining.checked_add(quantity)?;
        medicine.stock = stock;
        medicine.remaining = remaining;
        let restocked = medicine.clone();

        self.regenerate_alerts(now);
        Some(restocked)
    }

    pub fn save_profile(&mut self, input: ProfileInput) -> Result<UserProfile> {
        let user = self
            .user
            .as_mut()
            .ok_or_else(|| anyhow!("Please scan RFID card first"))?;
        if input.name.trim().is_empty() {
            bail!("Name is required");
        }

        user.apply(input);
        Ok(user.clone())
    }

    pub fn add_caretaker(
        &mut self,
        input: CaretakerInput,
        now: DateTime<Local>,
    ) -> Result<Caretaker> {
        let name = input.name.trim();
        let phone = input.phone.trim();
        let relation = match input.relation {
            Some(relation) if !name.is_empty() && !phone.is_empty() => relation,
            _ => bail!("Please fill in all required fields"),
        };

        let email = input
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());

        let now = now.with_timezone(&Utc);
        let caretaker = Caretaker {
            id: self.caretaker_ids.next(now),
            name: name.to_string(),
            relation,
            phone: phone.to_string(),
            email,
            added_at: now,
        };

        self.caretakers.push(caretaker.clone());
        Ok(caretaker)
    }

    pub fn remove_caretaker(&mut self, id: u64) -> Option<Caretaker> {
        let index = self.caretakers.iter().position(|caretaker| caretaker.id == id)?;
        Some(self.caretakers.remove(index))
    }
}

fn apply_fields(medicine: &mut Medicine, fields: MedicineFields) {
    medicine.name = fields.name;
    medicine.dosage = fields.dosage;
    medicine.time = fields.time;
    medicine.frequency = fields.frequency;
    medicine.uses = fields.uses;
    medicine.stock = fields.stock;
    medicine.expiry = fields.expiry;
}

fn parse_quantity(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(quantity) => Some(quantity),
    }
}
