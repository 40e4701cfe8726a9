use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::{sync::Mutex, task::JoinHandle, time::Duration};
use tokio_util::sync::CancellationToken;

use crate::{
    events::{self, EventSink, NotificationLevel},
    session::SessionController,
};

use super::{loop_worker::reminder_loop, AlarmSettings};

pub struct ReminderController {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
    alarms: Arc<Mutex<AlarmSettings>>,
    events: Arc<dyn EventSink>,
}

impl ReminderController {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self {
            handle: None,
            cancel_token: None,
            alarms: Arc::new(Mutex::new(AlarmSettings::default())),
            events,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self, session: SessionController, interval: Duration) -> Result<()> {
        if self.handle.is_some() {
            bail!("reminders already running");
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(reminder_loop(
            session,
            self.alarms.clone(),
            self.events.clone(),
            interval,
            cancel_token.clone(),
        ));

        info!("Dose reminders started (every {}s)", interval.as_secs_f32());
        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("reminder loop task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }

    pub async fn alarm_settings(&self) -> AlarmSettings {
        self.alarms.lock().await.clone()
    }

    pub async fn set_alarm_settings(&self, settings: AlarmSettings) -> AlarmSettings {
        let settings = settings.normalized();
        *self.alarms.lock().await = settings.clone();

        info!(
            "Alarms {} with volume {}%",
            if settings.enabled { "enabled" } else { "disabled" },
            settings.volume
        );
        let message = if settings.enabled {
            "Alarms enabled"
        } else {
            "Alarms disabled"
        };
        events::notify(self.events.as_ref(), NotificationLevel::Info, message);
        settings
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::{
        derivation::Never, events::testing::RecordingSink, session::Clock, session::SessionState,
    };

    async fn session_at(h: u32, m: u32, sink: Arc<RecordingSink>) -> SessionController {
        let clock: Clock = Arc::new(move || Local.with_ymd_and_hms(2026, 10, 18, h, m, 0).unwrap());
        let session = SessionController::with_state(SessionState::new(Box::new(Never)), sink)
            .with_clock(clock);
        session.load_card("CARD001").await;
        session
    }

    #[tokio::test]
    async fn due_dose_rings_once() {
        let sink = Arc::new(RecordingSink::default());
        let session = session_at(20, 0, sink.clone()).await;
        let mut reminders = ReminderController::new(sink.clone());

        reminders.start(session, Duration::from_millis(10)).unwrap();
        assert!(reminders.start(
            SessionController::new(sink.clone()),
            Duration::from_millis(10)
        )
        .is_err());

        tokio::time::sleep(Duration::from_millis(60)).await;
        reminders.stop().await.unwrap();
        assert!(!reminders.is_running());

        let doses = sink.named(events::DOSE_DUE);
        assert_eq!(doses.len(), 1);
        assert_eq!(doses[0]["name"], "Aspirin");
        assert_eq!(doses[0]["volume"], 50);
    }

    #[tokio::test]
    async fn muted_alarms_stay_silent() {
        let sink = Arc::new(RecordingSink::default());
        let session = session_at(8, 0, sink.clone()).await;
        let mut reminders = ReminderController::new(sink.clone());
        reminders
            .set_alarm_settings(AlarmSettings {
                enabled: false,
                volume: 250,
            })
            .await;
        assert_eq!(reminders.alarm_settings().await.volume, 100);

        reminders.start(session, Duration::from_millis(10)).unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        reminders.stop().await.unwrap();

        assert!(sink.named(events::DOSE_DUE).is_empty());
        assert_eq!(sink.messages(), vec!["Alarms disabled"]);
    }
}
