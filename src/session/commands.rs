use tauri::State;

use crate::{
    models::{
        Alert, AlertFilter, Caretaker, CaretakerInput, Medicine, MedicineInput, ProfileInput,
        UserProfile,
    },
    session::SessionController,
    view::{AlertRow, CaretakerRow, DashboardSummary, InventoryRow, ListView, ScheduleRow},
};

use crate::AppState;

fn controller_from_state(state: &State<'_, AppState>) -> SessionController {
    state.session.clone()
}

#[tauri::command]
pub async fn load_card(
    state: State<'_, AppState>,
    card_id: String,
) -> Result<Option<UserProfile>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.load_card(card_id.trim()).await)
}

#[tauri::command]
pub async fn get_current_user(state: State<'_, AppState>) -> Result<Option<UserProfile>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.current_user().await)
}

#[tauri::command]
pub async fn get_dashboard(state: State<'_, AppState>) -> Result<DashboardSummary, String> {
    let controller = controller_from_state(&state);
    Ok(controller.dashboard().await)
}

#[tauri::command]
pub async fn get_schedule(state: State<'_, AppState>) -> Result<ListView<ScheduleRow>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.schedule().await)
}

#[tauri::command]
pub async fn get_inventory(state: State<'_, AppState>) -> Result<ListView<InventoryRow>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.inventory().await)
}

#[tauri::command]
pub async fn get_alerts(
    state: State<'_, AppState>,
    filter: Option<String>,
) -> Result<ListView<AlertRow>, String> {
    let filter = match filter.as_deref() {
        None => AlertFilter::All,
        Some(raw) => {
            AlertFilter::parse(raw).ok_or_else(|| format!("unknown alert filter: {raw}"))?
        }
    };
    let controller = controller_from_state(&state);
    Ok(controller.alerts(filter).await)
}

#[tauri::command]
pub async fn regenerate_alerts(state: State<'_, AppState>) -> Result<Vec<Alert>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.regenerate_alerts().await)
}

#[tauri::command]
pub async fn get_medicine(
    state: State<'_, AppState>,
    medicine_id: u64,
) -> Result<Option<Medicine>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.medicine(medicine_id).await)
}

#[tauri::command]
pub async fn add_medicine(
    state: State<'_, AppState>,
    input: MedicineInput,
) -> Result<Medicine, String> {
    let controller = controller_from_state(&state);
    controller.add_medicine(input).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_medicine(
    state: State<'_, AppState>,
    medicine_id: u64,
    input: MedicineInput,
) -> Result<Option<Medicine>, String> {
    let controller = controller_from_state(&state);
    controller
        .update_medicine(medicine_id, input)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_medicine(
    state: State<'_, AppState>,
    medicine_id: u64,
) -> Result<Option<Medicine>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.delete_medicine(medicine_id).await)
}

/// `quantity` is the raw prompt text; anything but a positive integer is ignored.
#[tauri::command]
pub async fn restock_medicine(
    state: State<'_, AppState>,
    medicine_id: u64,
    quantity: String,
) -> Result<Option<Medicine>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.restock_medicine(medicine_id, &quantity).await)
}

#[tauri::command]
pub async fn get_profile(state: State<'_, AppState>) -> Result<Option<UserProfile>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.current_user().await)
}

#[tauri::command]
pub async fn save_profile(
    state: State<'_, AppState>,
    input: ProfileInput,
) -> Result<UserProfile, String> {
    let controller = controller_from_state(&state);
    controller.save_profile(input).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_caretakers(state: State<'_, AppState>) -> Result<ListView<CaretakerRow>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.caretakers().await)
}

#[tauri::command]
pub async fn add_caretaker(
    state: State<'_, AppState>,
    input: CaretakerInput,
) -> Result<Caretaker, String> {
    let controller = controller_from_state(&state);
    controller.add_caretaker(input).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_caretaker(
    state: State<'_, AppState>,
    caretaker_id: u64,
) -> Result<Option<Caretaker>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.remove_caretaker(caretaker_id).await)
}
