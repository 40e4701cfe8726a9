#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod due;
pub mod loop_worker;

use serde::{Deserialize, Serialize};

pub use controller::ReminderController;
pub use due::DoseDue;

/// Alarm preferences. Kept in memory only; they reset with the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlarmSettings {
    pub enabled: bool,
    /// Percent, 0..=100
    pub volume: u8,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 50,
        }
    }
}

impl AlarmSettings {
    pub fn normalized(self) -> Self {
        Self {
            volume: self.volume.min(100),
            ..self
        }
    }
}
