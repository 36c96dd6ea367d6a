// ============================================================================
// 目录关联：站点产品 × 产品目录 → 卡片视图模型
// 纯函数：保持输入顺序、缺失元数据时退化为默认值、相同输入得到相同输出
// ============================================================================

use std::collections::HashMap;

use crate::models::dtos::{Card, CatalogProductEntry, StationProductEntry};
use crate::services::desktop::is_desktop_product;

/// 卡片描述摘要的最大字符数
pub const ALT_MAX_CHARS: usize = 100;

/// 目录与站点都没有标题时使用的默认标题
pub const DEFAULT_TITLE: &str = "Игра";

/// 产品 ID → 目录元数据 的索引，每次加载重建一次
#[derive(Debug, Clone, Default)]
pub struct ProductCatalogIndex {
    entries: HashMap<String, CatalogProductEntry>,
}

impl ProductCatalogIndex {
    pub fn get(&self, product_id: &str) -> Option<&CatalogProductEntry> {
        self.entries.get(product_id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 构建目录索引
///
/// 没有 ID（缺失或空串）的条目被跳过；重复 ID 以最后一条为准。
pub fn build_catalog_index(entries: &[CatalogProductEntry]) -> ProductCatalogIndex {
    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        if entry.product_id.is_empty() {
            continue;
        }
        map.insert(entry.product_id.clone(), entry.clone());
    }
    ProductCatalogIndex { entries: map }
}

/// 为每条已过滤的站点产品生成一张卡片，顺序与输入一致
pub fn build_cards(filtered: &[StationProductEntry], index: &ProductCatalogIndex) -> Vec<Card> {
    filtered
        .iter()
        .map(|entry| build_card(entry, index.get(&entry.product_id)))
        .collect()
}

fn build_card(entry: &StationProductEntry, meta: Option<&CatalogProductEntry>) -> Card {
    let title = meta
        .and_then(|m| non_empty(m.display_name.as_deref()))
        .or_else(|| meta.and_then(|m| non_empty(m.title.as_deref())))
        .or_else(|| non_empty(entry.title.as_deref()))
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let description = meta
        .and_then(|m| m.description_ru.as_deref())
        .unwrap_or_default();

    Card {
        product_id: entry.product_id.clone(),
        title,
        image_url: meta
            .and_then(|m| m.card_picture.clone())
            .unwrap_or_default(),
        alt: truncate_chars(description, ALT_MAX_CHARS),
        required_account: meta
            .and_then(|m| m.required_account.clone())
            .unwrap_or_default(),
        is_free: meta.and_then(|m| m.no_license_requred) == Some(true),
        is_desktop: is_desktop_product(entry, meta),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// 按字符（而非字节）截断
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
