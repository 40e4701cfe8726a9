use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use tokio::{sync::Mutex, time};

use crate::{
    events::{self, EventSink, NotificationLevel},
    models::UserProfile,
    session::SessionController,
};

use super::{
    reader::{CardReader, ConnectionProbe, RandomCardReader, RandomProbe},
    DeviceConfig,
};

pub const READY_TO_SCAN: &str = "Ready to scan";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub rfid_status: String,
    pub scanning: bool,
    pub connection_status: String,
    pub connected: Option<bool>,
    pub syncing: bool,
    pub last_sync: Option<DateTime<Utc>>,
    /// Bumped by every scan so a stale reset cannot clear a newer result.
    #[serde(skip)]
    scan_generation: u64,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self {
            rfid_status: READY_TO_SCAN.into(),
            scanning: false,
            connection_status: "Status: Unknown".into(),
            connected: None,
            syncing: false,
            last_sync: None,
            scan_generation: 0,
        }
    }
}

/// Simulated box hardware: RFID reader, link test and data sync.
#[derive(Clone)]
pub struct DeviceController {
    status: Arc<Mutex<DeviceStatus>>,
    session: SessionController,
    reader: Arc<Mutex<Box<dyn CardReader>>>,
    probe: Arc<Mutex<Box<dyn ConnectionProbe>>>,
    events: Arc<dyn EventSink>,
    config: DeviceConfig,
}

impl DeviceController {
    pub fn new(
        session: SessionController,
        events: Arc<dyn EventSink>,
        config: DeviceConfig,
    ) -> Self {
        Self::with_hardware(
            session,
            events,
            config,
            Box::new(RandomCardReader::new()),
            Box::new(RandomProbe::default()),
        )
    }

    pub fn with_hardware(
        session: SessionController,
        events: Arc<dyn EventSink>,
        config: DeviceConfig,
        reader: Box<dyn CardReader>,
        probe: Box<dyn ConnectionProbe>,
    ) -> Self {
        Self {
            status: Arc::new(Mutex::new(DeviceStatus::default())),
            session,
            reader: Arc::new(Mutex::new(reader)),
            probe: Arc::new(Mutex::new(probe)),
            events,
            config,
        }
    }

    pub async fn status(&self) -> DeviceStatus {
        self.status.lock().await.clone()
    }

    /// Wait for a card, load its patient and report the outcome on the reader.
    /// A second scan while one is pending is refused.
    pub async fn scan(&self) -> Result<Option<UserProfile>> {
        let mut generation = 0;
        self.update_status(|status| {
            if status.scanning {
                bail!("scan already in progress");
            }
            status.scan_generation += 1;
            generation = status.scan_generation;
            status.scanning = true;
            status.rfid_status = "Scanning...".into();
            Ok(())
        })
        .await?;

        time::sleep(self.config.scan_delay).await;

        let card = self.reader.lock().await.read_card();
        let user = match &card {
            Some(card_id) => self.session.load_card(card_id).await,
            None => None,
        };

        let message = match (&card, &user) {
            (Some(card_id), Some(_)) => format!("Card {card_id} detected"),
            (Some(card_id), None) => format!("Card {card_id} not recognized"),
            (None, _) => "No card detected".to_string(),
        };
        info!("RFID scan finished: {message}");

        self.update_status(|status| {
            status.scanning = false;
            status.rfid_status = message;
            Ok(())
        })
        .await?;

        self.schedule_reader_reset(generation);
        Ok(user)
    }

    pub async fn test_connection(&self) -> Result<bool> {
        self.update_status(|status| {
            status.connection_status = "Testing connection...".into();
            Ok(())
        })
        .await?;

        time::sleep(self.config.connection_delay).await;

        let connected = self.probe.lock().await.probe();
        self.update_status(|status| {
            status.connected = Some(connected);
            status.connection_status = if connected {
                "Status: Connected".into()
            } else {
                "Status: Connection Failed".into()
            };
            Ok(())
        })
        .await?;

        if connected {
            self.notify(NotificationLevel::Success, "Connection test successful!");
        } else {
            self.notify(NotificationLevel::Error, "Connection test failed!");
        }
        Ok(connected)
    }

    pub async fn sync_data(&self) -> Result<DateTime<Utc>> {
        self.update_status(|status| {
            status.syncing = true;
            Ok(())
        })
        .await?;

        time::sleep(self.config.sync_delay).await;

        let synced_at = Utc::now();
        self.update_status(|status| {
            status.syncing = false;
            status.last_sync = Some(synced_at);
            Ok(())
        })
        .await?;

        self.notify(NotificationLevel::Success, "Data synced successfully!");
        Ok(synced_at)
    }

    fn schedule_reader_reset(&self, generation: u64) {
        let status = self.status.clone();
        let events = self.events.clone();
        let delay = self.config.status_reset_delay;

        tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = status.lock().await;
            // A newer scan owns the reader text now.
            if guard.scan_generation != generation {
                return;
            }
            guard.rfid_status = READY_TO_SCAN.into();
            events::emit(events.as_ref(), events::DEVICE_STATUS_CHANGED, &*guard);
        });
    }

    fn notify(&self, level: NotificationLevel, message: &str) {
        events::notify(self.events.as_ref(), level, message);
    }

    async fn update_status<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut DeviceStatus) -> Result<()>,
    {
        let mut guard = self.status.lock().await;
        change(&mut guard)?;
        events::emit(self.events.as_ref(), events::DEVICE_STATUS_CHANGED, &*guard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        derivation::Never,
        device::reader::{FixedCardReader, FixedProbe},
        events::testing::RecordingSink,
        session::SessionState,
    };

    fn device(
        card: Option<&str>,
        online: bool,
        config: DeviceConfig,
    ) -> (DeviceController, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let session =
            SessionController::with_state(SessionState::new(Box::new(Never)), sink.clone());
        let device = DeviceController::with_hardware(
            session,
            sink.clone(),
            config,
            Box::new(FixedCardReader(card.map(str::to_string))),
            Box::new(FixedProbe(online)),
        );
        (device, sink)
    }

    fn rfid_texts(sink: &RecordingSink) -> Vec<String> {
        sink.named(events::DEVICE_STATUS_CHANGED)
            .iter()
            .map(|status| status["rfidStatus"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[tokio::test]
    async fn scan_loads_the_presented_card() {
        let (device, sink) = device(Some("CARD002"), true, DeviceConfig::immediate());

        let user = device.scan().await.unwrap().unwrap();
        assert_eq!(user.name, "Mary Johnson");

        let texts = rfid_texts(&sink);
        assert_eq!(texts[0], "Scanning...");
        assert_eq!(texts[1], "Card CARD002 detected");
        assert_eq!(sink.named(events::SESSION_UPDATED).len(), 1);
    }

    #[tokio::test]
    async fn unknown_card_leaves_no_patient() {
        let (device, _) = device(Some("CARD777"), true, DeviceConfig::immediate());
        assert!(device.scan().await.unwrap().is_none());
        assert_eq!(device.status().await.rfid_status, "Card CARD777 not recognized");
    }

    #[tokio::test]
    async fn overlapping_scans_are_refused() {
        let config = DeviceConfig {
            scan_delay: Duration::from_millis(200),
            ..DeviceConfig::immediate()
        };
        let (device, _) = device(Some("CARD001"), true, config);

        let first = tokio::spawn({
            let device = device.clone();
            async move { device.scan().await }
        });
        time::sleep(Duration::from_millis(50)).await;

        let err = device.scan().await.unwrap_err();
        assert_eq!(err.to_string(), "scan already in progress");
        assert!(first.await.unwrap().unwrap().is_some());
    }

    #[tokio::test]
    async fn reader_returns_to_ready() {
        let (device, _) = device(Some("CARD001"), true, DeviceConfig::immediate());
        device.scan().await.unwrap();

        time::sleep(Duration::from_millis(50)).await;
        let status = device.status().await;
        assert!(!status.scanning);
        assert_eq!(status.rfid_status, READY_TO_SCAN);
    }

    #[tokio::test]
    async fn stale_reset_keeps_the_newer_scan_result() {
        let config = DeviceConfig {
            scan_delay: Duration::from_millis(100),
            status_reset_delay: Duration::from_millis(300),
            ..DeviceConfig::immediate()
        };
        let (device, _) = device(Some("CARD001"), true, config);

        // First reset is due at ~400ms, the second at ~550ms.
        device.scan().await.unwrap();
        time::sleep(Duration::from_millis(50)).await;
        device.scan().await.unwrap();

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(device.status().await.rfid_status, "Card CARD001 detected");

        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(device.status().await.rfid_status, READY_TO_SCAN);
    }

    #[tokio::test]
    async fn connection_outcome_comes_from_the_probe() {
        let (online, online_sink) = device(None, true, DeviceConfig::immediate());
        assert!(online.test_connection().await.unwrap());
        assert_eq!(online.status().await.connection_status, "Status: Connected");
        assert_eq!(online_sink.messages(), vec!["Connection test successful!"]);

        let (offline, offline_sink) = device(None, false, DeviceConfig::immediate());
        assert!(!offline.test_connection().await.unwrap());
        assert_eq!(offline.status().await.connection_status, "Status: Connection Failed");
        assert_eq!(offline_sink.named(events::NOTIFICATION)[0]["level"], "error");
    }

    #[tokio::test]
    async fn sync_records_the_time() {
        let (device, sink) = device(None, true, DeviceConfig::immediate());
        let synced_at = device.sync_data().await.unwrap();

        let status = device.status().await;
        assert!(!status.syncing);
        assert_eq!(status.last_sync, Some(synced_at));
        assert_eq!(sink.messages(), vec!["Data synced successfully!"]);
    }
}
