use std::time::Duration;

/// Timings of the simulated hardware.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Time the RFID reader takes to report a card
    pub scan_delay: Duration,

    /// How long "Card ... detected" stays up before the reader reads "Ready to scan" again
    pub status_reset_delay: Duration,

    pub connection_delay: Duration,
    pub sync_delay: Duration,

    /// Dose reminder check period
    pub reminder_interval: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            scan_delay: Duration::from_secs(2),
            status_reset_delay: Duration::from_secs(3),
            connection_delay: Duration::from_secs(2),
            sync_delay: Duration::from_secs(3),
            reminder_interval: Duration::from_secs(30),
        }
    }
}

impl DeviceConfig {
    /// Defaults, with a faster reminder tick when `MEDBOX_DEBUG` is set.
    pub fn from_env() -> Self {
        let debug_mode = std::env::var("MEDBOX_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut config = Self::default();
        if debug_mode {
            config.reminder_interval = Duration::from_secs(5);
        }
        config
    }

    /// No simulated latency at all.
    pub fn immediate() -> Self {
        Self {
            scan_delay: Duration::ZERO,
            status_reset_delay: Duration::ZERO,
            connection_delay: Duration::ZERO,
            sync_delay: Duration::ZERO,
            reminder_interval: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_speeds_up_reminders() {
        std::env::set_var("MEDBOX_DEBUG", "true");
        assert_eq!(DeviceConfig::from_env().reminder_interval, Duration::from_secs(5));

        std::env::set_var("MEDBOX_DEBUG", "0");
        let config = DeviceConfig::from_env();
        assert_eq!(config.reminder_interval, Duration::from_secs(30));
        assert_eq!(config.scan_delay, Duration::from_secs(2));

        std::env::remove_var("MEDBOX_DEBUG");
    }
}
