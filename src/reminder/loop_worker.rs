use std::sync::Arc;

use tokio::{
    sync::Mutex,
    time::{Duration, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::{
    events::{self, EventSink, NotificationLevel},
    session::SessionController,
};

use super::{due::FiredDoses, AlarmSettings};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

pub async fn reminder_loop(
    session: SessionController,
    alarms: Arc<Mutex<AlarmSettings>>,
    events: Arc<dyn EventSink>,
    interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut fired = FiredDoses::default();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                check_doses(&session, &alarms, events.as_ref(), &mut fired).await;
            }
            _ = cancel_token.cancelled() => {
                log_info!("reminder loop shutting down");
                break;
            }
        }
    }
}

async fn check_doses(
    session: &SessionController,
    alarms: &Mutex<AlarmSettings>,
    events: &dyn EventSink,
    fired: &mut FiredDoses,
) {
    let settings = alarms.lock().await.clone();
    let medicines = session.medicines().await;
    let now = session.now().naive_local();

    // Doses still get marked while alarms are off so re-enabling does not ring stale ones.
    let due = fired.take_due(&medicines, now, settings.volume);
    if !settings.enabled {
        return;
    }

    for dose in due {
        log_info!("Dose due: {} {} at {}", dose.name, dose.dosage, dose.time);
        events::emit(events, events::DOSE_DUE, &dose);
        events::notify(
            events,
            NotificationLevel::Warning,
            format!("Time to take {} ({})", dose.name, dose.dosage),
        );
    }
}
