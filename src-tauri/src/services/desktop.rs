// ============================================================================
// 桌面产品识别
// “桌面”产品不启动任何进程，选择后直接退出启动器回到 Windows 桌面
// ============================================================================

use std::collections::HashSet;

use crate::models::dtos::{CatalogProductEntry, StationProductEntry};
use crate::services::catalog::ProductCatalogIndex;

/// Drova 目录中“Рабочий стол”产品的固定 ID
pub const DESKTOP_PRODUCT_ID: &str = "9fd0eb43-b2bb-4ce3-93b8-9df63f209098";

/// 前端兜底卡片使用的 ID
pub const FALLBACK_DESKTOP_ID: &str = "desktop";

/// 判断某个站点产品是否代表桌面
///
/// 依据固定 ID、标题 `desktop` 或展示名 `рабочий стол`（均不区分大小写）。
/// `use_default_desktop` 一类的标记不参与判断。
pub fn is_desktop_product(
    entry: &StationProductEntry,
    meta: Option<&CatalogProductEntry>,
) -> bool {
    if entry.product_id == DESKTOP_PRODUCT_ID {
        return true;
    }

    let title = meta
        .and_then(|m| m.title.as_deref())
        .or(entry.title.as_deref())
        .unwrap_or_default()
        .to_lowercase();
    if title == "desktop" {
        return true;
    }

    meta.and_then(|m| m.display_name.as_deref())
        .map(|name| name.to_lowercase() == "рабочий стол")
        .unwrap_or(false)
}

/// 收集本次加载中所有桌面产品的 ID
pub fn desktop_ids(
    entries: &[StationProductEntry],
    index: &ProductCatalogIndex,
) -> HashSet<String> {
    entries
        .iter()
        .filter(|entry| is_desktop_product(entry, index.get(&entry.product_id)))
        .map(|entry| entry.product_id.clone())
        .collect()
}
