//! Decides whether a system alert joins the regenerated alert list.

use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::Medicine;

pub trait SystemAlertTrigger: Send {
    fn fire(&mut self, inventory: &[Medicine], today: NaiveDate) -> bool;
}

pub struct Never;

impl SystemAlertTrigger for Never {
    fn fire(&mut self, _inventory: &[Medicine], _today: NaiveDate) -> bool {
        false
    }
}

pub struct Always;

impl SystemAlertTrigger for Always {
    fn fire(&mut self, _inventory: &[Medicine], _today: NaiveDate) -> bool {
        true
    }
}

/// Fires with a fixed probability on each regeneration.
pub struct RandomTrigger {
    rng: StdRng,
    probability: f64,
}

impl RandomTrigger {
    pub fn new(probability: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), probability)
    }

    pub fn seeded(seed: u64, probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), probability)
    }

    fn with_rng(rng: StdRng, probability: f64) -> Self {
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl SystemAlertTrigger for RandomTrigger {
    fn fire(&mut self, _inventory: &[Medicine], _today: NaiveDate) -> bool {
        self.rng.gen_bool(self.probability)
    }
}
