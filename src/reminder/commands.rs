use tauri::State;

use crate::{reminder::AlarmSettings, AppState};

#[tauri::command]
pub async fn get_alarm_settings(state: State<'_, AppState>) -> Result<AlarmSettings, String> {
    let reminders = state.reminder.lock().await;
    Ok(reminders.alarm_settings().await)
}

#[tauri::command]
pub async fn set_alarm_settings(
    state: State<'_, AppState>,
    settings: AlarmSettings,
) -> Result<AlarmSettings, String> {
    let reminders = state.reminder.lock().await;
    Ok(reminders.set_alarm_settings(settings).await)
}
