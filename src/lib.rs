pub mod derivation;
pub mod device;
pub mod events;
pub mod models;
pub mod reminder;
pub mod sample_data;
pub mod session;
pub mod settings;
pub mod utils;
pub mod view;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Arc;

    use tauri::{Manager, State};
    use tokio::sync::Mutex;

    use crate::{
        device::{
            commands::{get_device_status, scan_card, sync_data, test_connection},
            DeviceConfig, DeviceController,
        },
        events::{self, EventSink, NotificationLevel},
        reminder::{
            commands::{get_alarm_settings, set_alarm_settings},
            ReminderController,
        },
        session::{
            commands::{
                add_caretaker, add_medicine, delete_medicine, get_alerts, get_caretakers,
                get_current_user, get_dashboard, get_inventory, get_medicine, get_profile,
                get_schedule, load_card, regenerate_alerts, remove_caretaker, restock_medicine,
                save_profile, update_medicine,
            },
            SessionController,
        },
        settings::{SettingsStore, Theme},
        utils,
    };

    use crate::AppState;

    #[tauri::command]
    fn get_theme(state: State<AppState>) -> Result<Theme, String> {
        Ok(state.settings.theme())
    }

    #[tauri::command]
    fn set_theme(
        theme: Theme,
        state: State<AppState>,
        app_handle: tauri::AppHandle,
    ) -> Result<Theme, String> {
        state
            .settings
            .update_theme(theme)
            .map_err(|e| e.to_string())?;

        events::emit(&app_handle, events::THEME_CHANGED, &theme);
        events::notify(
            &app_handle,
            NotificationLevel::Success,
            format!("{} theme applied!", theme.label()),
        );
        Ok(theme)
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        utils::logging::init();

        log::info!("Smart Medicine Box starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let settings_path = app_data_dir.join("settings.json");
                    let settings_store = SettingsStore::new(settings_path)?;
                    log::info!("Theme on startup: {}", settings_store.theme().label());

                    let config = DeviceConfig::from_env();
                    let sink: Arc<dyn EventSink> = Arc::new(app.handle().clone());

                    let session = SessionController::new(sink.clone());
                    let device =
                        DeviceController::new(session.clone(), sink.clone(), config.clone());

                    let mut reminder = ReminderController::new(sink);
                    // The loop spawns onto tauri's tokio runtime.
                    tauri::async_runtime::block_on(async {
                        reminder.start(session.clone(), config.reminder_interval)
                    })?;

                    app.manage(AppState {
                        session,
                        device,
                        reminder: Mutex::new(reminder),
                        settings: settings_store,
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                scan_card,
                load_card,
                get_current_user,
                get_dashboard,
                get_schedule,
                get_inventory,
                get_alerts,
                regenerate_alerts,
                get_medicine,
                add_medicine,
                update_medicine,
                delete_medicine,
                restock_medicine,
                get_profile,
                save_profile,
                get_caretakers,
                add_caretaker,
                remove_caretaker,
                get_device_status,
                test_connection,
                sync_data,
                get_theme,
                set_theme,
                get_alarm_settings,
                set_alarm_settings,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(feature = "desktop")]
pub(crate) struct AppState {
    pub(crate) session: session::SessionController,
    pub(crate) device: device::DeviceController,
    pub(crate) reminder: tokio::sync::Mutex<reminder::ReminderController>,
    pub(crate) settings: settings::SettingsStore,
}
