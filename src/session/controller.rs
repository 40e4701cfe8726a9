use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    events::{self, EventSink, NotificationLevel},
    models::{
        Alert, AlertFilter, Caretaker, CaretakerInput, Medicine, MedicineInput, ProfileInput,
        UserProfile,
    },
    view::{
        alerts_view, caretakers_view, dashboard_view, inventory_view, schedule_view, AlertRow,
        CaretakerRow, DashboardSummary, InventoryRow, ListView, ScheduleRow,
    },
};

use super::SessionState;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub medicine_count: usize,
    pub alert_count: usize,
}

/// Owns the session and pushes a refresh event after every mutation.
#[derive(Clone)]
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    events: Arc<dyn EventSink>,
    clock: Clock,
}

impl SessionController {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self::with_state(SessionState::default(), events)
    }

    pub fn with_state(state: SessionState, events: Arc<dyn EventSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            events,
            clock: Arc::new(Local::now),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Local> {
        (self.clock)()
    }

    pub async fn load_card(&self, card_id: &str) -> Option<UserProfile> {
        let now = self.now();
        let mut state = self.state.lock().await;
        if !state.load_user(card_id, now) {
            log_warn!("Ignoring unknown card {}", card_id);
            return None;
        }

        let user = state.current_user().cloned();
        if let Some(user) = &user {
            log_info!("User {} logged in with card {}", user.name, card_id);
        }
        self.publish(&state);
        user
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.lock().await.current_user().cloned()
    }

    pub async fn medicine(&self, id: u64) -> Option<Medicine> {
        self.state.lock().await.medicine(id).cloned()
    }

    pub async fn medicines(&self) -> Vec<Medicine> {
        self.state.lock().await.medicines().to_vec()
    }

    pub async fn dashboard(&self) -> DashboardSummary {
        let now = self.now();
        dashboard_view(&*self.state.lock().await, now.time())
    }

    pub async fn schedule(&self) -> ListView<ScheduleRow> {
        schedule_view(&*self.state.lock().await)
    }

    pub async fn inventory(&self) -> ListView<InventoryRow> {
        let today = self.now().date_naive();
        inventory_view(&*self.state.lock().await, today)
    }

    pub async fn alerts(&self, filter: AlertFilter) -> ListView<AlertRow> {
        alerts_view(&*self.state.lock().await, filter)
    }

    pub async fn caretakers(&self) -> ListView<CaretakerRow> {
        caretakers_view(&*self.state.lock().await)
    }

    pub async fn regenerate_alerts(&self) -> Vec<Alert> {
        let now = self.now();
        let mut state = self.state.lock().await;
        state.regenerate_alerts(now);
        self.publish(&state);
        state.alerts().to_vec()
    }

    pub async fn add_medicine(&self, input: MedicineInput) -> Result<Medicine> {
        let now = self.now();
        let mut state = self.state.lock().await;
        let medicine = state.add_medicine(input, now)?;

        log_info!("Added medicine {} ({})", medicine.name, medicine.id);
        self.publish(&state);
        self.notify(NotificationLevel::Success, "Medicine added successfully!");
        Ok(medicine)
    }

    pub async fn update_medicine(&self, id: u64, input: MedicineInput) -> Result<Option<Medicine>> {
        let now = self.now();
        let mut state = self.state.lock().await;
        let updated = state.update_medicine(id, input, now)?;

        if updated.is_some() {
            self.publish(&state);
            self.notify(NotificationLevel::Success, "Medicine updated successfully!");
        }
        Ok(updated)
    }

    pub async fn delete_medicine(&self, id: u64) -> Option<Medicine> {
        let now = self.now();
        let mut state = self.state.lock().await;
        let removed = state.delete_medicine(id, now)?;

        log_info!("Deleted medicine {} ({})", removed.name, removed.id);
        self.publish(&state);
        self.notify(NotificationLevel::Success, "Medicine deleted successfully!");
        Some(removed)
    }

    pub async fn restock_medicine(&self, id: u64, quantity: &str) -> Option<Medicine> {
        let now = self.now();
        let mut state = self.state.lock().await;
        let before = state.medicine(id).map(|medicine| medicine.stock)?;
        let restocked = state.restock_medicine(id, quantity, now)?;

        self.publish(&state);
        self.notify(
            NotificationLevel::Success,
            format!("Restocked {} units successfully!", restocked.stock - before),
        );
        Some(restocked)
    }

    pub async fn save_profile(&self, input: ProfileInput) -> Result<UserProfile> {
        let mut state = self.state.lock().await;
        let user = state.save_profile(input)?;

        self.publish(&state);
        self.notify(NotificationLevel::Success, "Profile saved successfully!");
        Ok(user)
    }

    pub async fn add_caretaker(&self, input: CaretakerInput) -> Result<Caretaker> {
        let now = self.now();
        let caretaker = self.state.lock().await.add_caretaker(input, now)?;
        self.notify(NotificationLevel::Success, "Caretaker added successfully!");
        Ok(caretaker)
    }

    pub async fn remove_caretaker(&self, id: u64) -> Option<Caretaker> {
        let removed = self.state.lock().await.remove_caretaker(id)?;
        self.notify(NotificationLevel::Success, "Caretaker removed successfully!");
        Some(removed)
    }

    fn publish(&self, state: &SessionState) {
        events::emit(self.events.as_ref(), events::SESSION_UPDATED, &snapshot_of(state));
        events::emit(self.events.as_ref(), events::ALERTS_UPDATED, &state.alerts());
    }

    fn notify(&self, level: NotificationLevel, message: impl Into<String>) {
        events::notify(self.events.as_ref(), level, message);
    }
}

fn snapshot_of(state: &SessionState) -> SessionSnapshot {
    SessionSnapshot {
        user: state.current_user().cloned(),
        medicine_count: state.medicines().len(),
        alert_count: state.alerts().len(),
    }
}
