// ============================================================================
// 启动 Command
// ============================================================================

use tauri::{AppHandle, Manager, State};

use crate::services::launcher;
use crate::state::{LaunchAction, LauncherState};

/// 启动游戏；桌面产品则隐藏窗口并退出启动器
#[tauri::command]
pub fn launch_game(
    app: AppHandle,
    state: State<'_, LauncherState>,
    product_id: String,
) -> Result<(), String> {
    match state.launch_action(&product_id)? {
        LaunchAction::ExitToDesktop => {
            log::info!("Exit to desktop requested by {}", product_id);
            if let Some(window) = app.get_webview_window("main") {
                if let Err(err) = window.hide() {
                    log::warn!("Failed to hide main window: {}", err);
                }
            }
            app.exit(0);
        }
        LaunchAction::Spawn(params) => {
            log::info!("Launching {}", product_id);
            launcher::spawn(&params)?;
        }
    }
    Ok(())
}
