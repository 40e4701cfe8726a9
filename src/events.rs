//! Events pushed to the dashboard frontend.

use log::error;
use serde::Serialize;
use serde_json::Value;

pub const SESSION_UPDATED: &str = "session-updated";
pub const ALERTS_UPDATED: &str = "alerts-updated";
pub const DEVICE_STATUS_CHANGED: &str = "device-status-changed";
pub const NOTIFICATION: &str = "notification";
pub const DOSE_DUE: &str = "dose-due";
pub const THEME_CHANGED: &str = "theme-changed";

/// Anything able to deliver a named JSON payload to the frontend.
pub trait EventSink: Send + Sync {
    fn emit_value(&self, event: &str, payload: Value);
}

pub fn emit<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit_value(event, value),
        Err(err) => error!("Failed to serialize {event} payload: {err}"),
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

pub fn notify(sink: &dyn EventSink, level: NotificationLevel, message: impl Into<String>) {
    let payload = Notification {
        level,
        message: message.into(),
    };
    emit(sink, NOTIFICATION, &payload);
}

#[cfg(feature = "desktop")]
impl EventSink for tauri::AppHandle {
    fn emit_value(&self, event: &str, payload: Value) {
        use tauri::Emitter;

        if let Err(err) = self.emit(event, payload) {
            log::warn!("Failed to emit {event}: {err}");
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use serde_json::Value;

    use super::EventSink;

    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<(String, Value)> {
            self.events.lock().unwrap().clone()
        }

        pub fn named(&self, event: &str) -> Vec<Value> {
            self.events()
                .into_iter()
                .filter(|(name, _)| name == event)
                .map(|(_, payload)| payload)
                .collect()
        }

        pub fn messages(&self) -> Vec<String> {
            self.named(super::NOTIFICATION)
                .into_iter()
                .filter_map(|payload| payload["message"].as_str().map(str::to_string))
                .collect()
        }
    }

    impl EventSink for RecordingSink {
        fn emit_value(&self, event: &str, payload: Value) {
            self.events.lock().unwrap().push((event.to_string(), payload));
        }
    }
}
