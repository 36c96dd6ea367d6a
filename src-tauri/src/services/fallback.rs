// ============================================================================
// 兜底卡片：主数据加载失败时展示，保证界面上至少有一个可操作的选项
// ============================================================================

use crate::models::dtos::Card;
use crate::services::desktop::FALLBACK_DESKTOP_ID;

/// 固定的“桌面”卡片
pub fn fallback_card() -> Card {
    Card {
        product_id: FALLBACK_DESKTOP_ID.to_string(),
        title: "Рабочий стол".to_string(),
        image_url: String::new(),
        alt: "Доступ ко всему почти без ограничений.".to_string(),
        required_account: String::new(),
        is_free: true,
        is_desktop: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::ALT_MAX_CHARS;

    #[test]
    fn test_fallback_card_is_free_desktop() {
        let card = fallback_card();
        assert_eq!(card.product_id, "desktop");
        assert!(card.is_free);
        assert!(card.is_desktop);
        assert!(card.image_url.is_empty());
        assert!(card.required_account.is_empty());
        assert!(card.alt.chars().count() <= ALT_MAX_CHARS);
    }

    #[test]
    fn test_fallback_card_is_stable() {
        assert_eq!(fallback_card(), fallback_card());
    }
}
