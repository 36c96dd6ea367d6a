// ============================================================================
// 启动器共享状态（Tauri managed state）
// 保存上一次成功加载的启动配置与桌面产品集合，并保证同一时间只有一个加载流程
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::models::dtos::{LaunchParameters, ProductDetailRecord};
use crate::services::card_loader::LoadedCatalog;
use crate::services::desktop::FALLBACK_DESKTOP_ID;
use crate::services::launch_params::resolve_launch_parameters;
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct LauncherState {
    launches: Mutex<HashMap<String, ProductDetailRecord>>,
    desktop_ids: Mutex<HashSet<String>>,
    loading: AtomicBool,
}

/// 用户选择某张卡片后应执行的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// 隐藏窗口并退出启动器
    ExitToDesktop,
    Spawn(LaunchParameters),
}

impl LauncherState {
    /// 占用加载标记后执行 `load`，结束时（包括出错）释放标记
    ///
    /// 已有加载在进行时立即返回 `LoadInProgress`。
    pub async fn exclusive_load<F, Fut, T>(&self, load: F) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = AppResult<T>>,
    {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::LoadInProgress);
        }
        let _guard = scopeguard::guard((), |_| {
            self.loading.store(false, Ordering::Release);
        });

        load().await
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// 用新加载的结果整体替换状态
    pub fn replace(&self, loaded: &LoadedCatalog) -> AppResult<()> {
        let mut launches = self.launches.lock().map_err(|_| AppError::StateLocked)?;
        let mut desktop_ids = self.desktop_ids.lock().map_err(|_| AppError::StateLocked)?;
        *launches = loaded.launches.clone();
        *desktop_ids = loaded.desktop_ids.clone();
        Ok(())
    }

    /// 根据产品 ID 决定启动动作
    pub fn launch_action(&self, product_id: &str) -> AppResult<LaunchAction> {
        {
            let desktop_ids = self.desktop_ids.lock().map_err(|_| AppError::StateLocked)?;
            if product_id == FALLBACK_DESKTOP_ID || desktop_ids.contains(product_id) {
                return Ok(LaunchAction::ExitToDesktop);
            }
        }

        let launches = self.launches.lock().map_err(|_| AppError::StateLocked)?;
        let detail = launches.get(product_id).ok_or(AppError::LaunchNotFound)?;
        let params = resolve_launch_parameters(Some(detail));
        if params.exe_path.is_empty() {
            return Err(AppError::EmptyExecutable);
        }
        Ok(LaunchAction::Spawn(params))
    }
}
