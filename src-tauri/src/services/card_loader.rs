// ============================================================================
// 卡片加载流程编排
// 拉取站点产品 → 过滤 → 拉取目录 → 建索引 → 生成卡片（可选图片缓存）
// 通过 StatusSink 上报进度，不直接依赖 tauri::*
// ============================================================================

use std::collections::{HashMap, HashSet};

use crate::models::dtos::{Card, ProductDetailRecord, StationDetails, StatusPayload};
use crate::services::availability::filter_available;
use crate::services::catalog::{build_catalog_index, build_cards};
use crate::services::desktop::desktop_ids;
use crate::services::drova_api::ProductSource;
use crate::services::image_cache::ImageCache;
use crate::utils::error::{AppError, AppResult};

/// 进度事件接收方（前端窗口或测试中的记录器）
pub trait StatusSink {
    fn emit_status(&self, status: StatusPayload);

    fn status(&self, text: &str) {
        self.emit_status(StatusPayload {
            text: text.to_string(),
            current: None,
            total: None,
        });
    }

    fn progress(&self, text: &str, current: u32, total: u32) {
        self.emit_status(StatusPayload {
            text: text.to_string(),
            current: Some(current),
            total: Some(total),
        });
    }
}

/// 一次成功加载的全部结果
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub cards: Vec<Card>,
    /// 产品 ID → 启动配置，启动时按需解析
    pub launches: HashMap<String, ProductDetailRecord>,
    pub desktop_ids: HashSet<String>,
}

pub async fn load_cards<S, E>(
    source: &S,
    sink: &E,
    images: Option<&ImageCache>,
) -> AppResult<LoadedCatalog>
where
    S: ProductSource,
    E: StatusSink,
{
    sink.status("Загружаем список игр…");
    let station_products = source.station_products().await?;
    let enabled = filter_available(&station_products);
    log::info!(
        "Station products: {} total, {} launchable",
        station_products.len(),
        enabled.len()
    );
    if enabled.is_empty() {
        return Err(AppError::EmptyProductList);
    }

    sink.status("Загружаем каталог игр…");
    let catalog = source.catalog_products().await?;
    let index = build_catalog_index(&catalog);

    let launches = enabled
        .iter()
        .map(|entry| (entry.product_id.clone(), entry.detail_record()))
        .collect();
    let desktop_ids = desktop_ids(&enabled, &index);
    let mut cards = build_cards(&enabled, &index);

    sink.status("Загружаем ресурсы…");
    let total = cards.len() as u32;
    for (idx, card) in cards.iter_mut().enumerate() {
        sink.progress("Загружаем ресурсы…", idx as u32 + 1, total);
        if let Some(cache) = images {
            if !card.image_url.is_empty() {
                card.image_url = cache.resolve(&card.image_url).await;
            }
        }
    }

    Ok(LoadedCatalog {
        cards,
        launches,
        desktop_ids,
    })
}

/// 站点详情；硬件信息获取失败时返回空记录
pub async fn load_station_details<S: ProductSource>(source: &S) -> AppResult<StationDetails> {
    let info = source.server_info().await?;
    let hardware = match source.hardware().await {
        Ok(hardware) => hardware,
        Err(err) => {
            log::warn!("Failed to load hardware info: {}", err);
            Default::default()
        }
    };

    Ok(StationDetails {
        name: info.name.unwrap_or_default(),
        description: info.description.unwrap_or_default(),
        hardware,
    })
}
