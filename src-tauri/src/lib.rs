// ============================================================================
// [总线] 程序的组装车间
// ✅ 只能做：pub mod 暴露子模块、注册 .invoke_handler()、初始化 State
// ⛔ 禁止：直接实现 command 函数
// ============================================================================

#[cfg(feature = "desktop")]
pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// ============================================================================
// 应用入口
// ============================================================================

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    utils::logging::init();

    tauri::Builder::default()
        .manage(state::LauncherState::default())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            // 卡片 commands
            commands::cards::load_cards,
            commands::cards::load_station_details,
            commands::cards::fallback_card,
            // 启动 commands
            commands::launch::launch_game,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
