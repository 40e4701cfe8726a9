use chrono::{DateTime, Utc};
use tauri::State;

use crate::{
    device::{DeviceController, DeviceStatus},
    models::UserProfile,
};

use crate::AppState;

fn controller_from_state(state: &State<'_, AppState>) -> DeviceController {
    state.device.clone()
}

#[tauri::command]
pub async fn scan_card(state: State<'_, AppState>) -> Result<Option<UserProfile>, String> {
    let controller = controller_from_state(&state);
    controller.scan().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_device_status(state: State<'_, AppState>) -> Result<DeviceStatus, String> {
    let controller = controller_from_state(&state);
    Ok(controller.status().await)
}

#[tauri::command]
pub async fn test_connection(state: State<'_, AppState>) -> Result<bool, String> {
    let controller = controller_from_state(&state);
    controller.test_connection().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn sync_data(state: State<'_, AppState>) -> Result<DateTime<Utc>, String> {
    let controller = controller_from_state(&state);
    controller.sync_data().await.map_err(|e| e.to_string())
}
