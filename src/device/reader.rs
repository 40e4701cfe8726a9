//! Simulated RFID reader and connection probe.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::sample_data::CARD_IDS;

pub trait CardReader: Send {
    /// Card presented to the reader, if any.
    fn read_card(&mut self) -> Option<String>;
}

/// Presents one of the known sample cards at random.
pub struct RandomCardReader {
    rng: StdRng,
}

impl RandomCardReader {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCardReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CardReader for RandomCardReader {
    fn read_card(&mut self) -> Option<String> {
        CARD_IDS.choose(&mut self.rng).map(|card| card.to_string())
    }
}

/// Always presents the same card.
pub struct FixedCardReader(pub Option<String>);

impl CardReader for FixedCardReader {
    fn read_card(&mut self) -> Option<String> {
        self.0.clone()
    }
}

pub trait ConnectionProbe: Send {
    fn probe(&mut self) -> bool;
}

pub const CONNECTION_SUCCESS_RATE: f64 = 0.8;

pub struct RandomProbe {
    rng: StdRng,
    success_rate: f64,
}

impl RandomProbe {
    pub fn new(success_rate: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomProbe {
    fn default() -> Self {
        Self::new(CONNECTION_SUCCESS_RATE)
    }
}

impl ConnectionProbe for RandomProbe {
    fn probe(&mut self) -> bool {
        self.rng.gen_bool(self.success_rate)
    }
}

pub struct FixedProbe(pub bool);

impl ConnectionProbe for FixedProbe {
    fn probe(&mut self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_reader_only_presents_known_cards() {
        let mut reader = RandomCardReader::seeded(7);
        for _ in 0..20 {
            let card = reader.read_card().unwrap();
            assert!(CARD_IDS.contains(&card.as_str()));
        }
    }
}
