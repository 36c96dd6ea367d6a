// ============================================================================
// 卡片与站点信息 Commands
// ============================================================================

use tauri::{AppHandle, Emitter, State};

use crate::models::dtos::{Card, StationDetails, StatusPayload};
use crate::services::card_loader::{self, StatusSink};
use crate::services::config::LauncherConfig;
use crate::services::drova_api::DrovaClient;
use crate::services::fallback;
use crate::services::image_cache::ImageCache;
use crate::services::station;
use crate::state::LauncherState;
use crate::utils::error::{AppError, AppResult};

/// 通过 `status` 事件把进度推给前端窗口
struct WindowStatus<'a>(&'a AppHandle);

impl StatusSink for WindowStatus<'_> {
    fn emit_status(&self, status: StatusPayload) {
        if let Err(err) = self.0.emit("status", status) {
            log::warn!("Failed to emit status: {}", err);
        }
    }
}

fn connect(config: &LauncherConfig) -> AppResult<DrovaClient> {
    let station = station::resolve_credentials()?;
    DrovaClient::new(config, station)
}

/// 加载卡片列表
///
/// 成功后替换启动器状态（启动配置、桌面产品）；同一时间只允许一个加载。
/// 失败时前端展示错误并改用 `fallback_card`。
#[tauri::command]
pub async fn load_cards(
    app: AppHandle,
    state: State<'_, LauncherState>,
) -> Result<Vec<Card>, String> {
    let state: &LauncherState = state.inner();
    let app = &app;

    let cards = state
        .exclusive_load(move || async move {
            let sink = WindowStatus(app);
            sink.status("Получаем токен и UUID станции…");

            let config = LauncherConfig::from_env();
            let client = connect(&config)?;
            let images = config
                .image_cache
                .then(|| ImageCache::in_temp_dir(client.http().clone()));

            let loaded = card_loader::load_cards(&client, &sink, images.as_ref()).await?;
            state.replace(&loaded)?;
            Ok::<_, AppError>(loaded.cards)
        })
        .await?;

    log::info!("Loaded {} cards", cards.len());
    Ok(cards)
}

/// 站点名称、描述与硬件信息
#[tauri::command]
pub async fn load_station_details() -> Result<StationDetails, String> {
    let config = LauncherConfig::from_env();
    let client = connect(&config)?;
    Ok(card_loader::load_station_details(&client).await?)
}

/// 主数据不可用时展示的兜底卡片
#[tauri::command]
pub fn fallback_card() -> Card {
    fallback::fallback_card()
}
