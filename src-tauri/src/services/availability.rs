// ============================================================================
// 可用性过滤：挑出当前可以启动的站点产品
// 纯函数，无副作用，不会失败
// ============================================================================

use crate::models::dtos::StationProductEntry;

/// 校验状态中表示“就绪”的取值（大小写不敏感）
pub const READY_STATUS: &str = "READY";

/// 过滤出可启动的站点产品，保持原有相对顺序，不去重
pub fn filter_available(entries: &[StationProductEntry]) -> Vec<StationProductEntry> {
    entries
        .iter()
        .filter(|entry| is_launchable(entry))
        .cloned()
        .collect()
}

/// 单条记录是否可启动
///
/// 必须严格 `enabled == true`；可用性按以下顺序判断：
/// 1. `available` 是布尔值时直接采用
/// 2. 否则 `verified` 非空时与 `READY` 做大小写不敏感比较（`false`、`0` 等非字符串值不算就绪）
/// 3. 两者都没有时默认可用
pub fn is_launchable(entry: &StationProductEntry) -> bool {
    if entry.enabled != Some(true) {
        return false;
    }

    if let Some(available) = entry.available {
        return available;
    }

    match entry.verified.as_deref() {
        Some(status) if !status.is_empty() => status.eq_ignore_ascii_case(READY_STATUS),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lenient;
    use proptest::prelude::*;
    use serde_json::json;

    fn entry(product_id: &str) -> StationProductEntry {
        StationProductEntry {
            product_id: product_id.to_string(),
            enabled: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_is_excluded() {
        let mut disabled = entry("p1");
        disabled.enabled = Some(false);
        let mut missing = entry("p2");
        missing.enabled = None;
        assert!(filter_available(&[disabled, missing]).is_empty());
    }

    #[test]
    fn test_available_flag_wins_over_verified() {
        let mut ready_but_unavailable = entry("p1");
        ready_but_unavailable.available = Some(false);
        ready_but_unavailable.verified = Some("READY".to_string());
        assert!(!is_launchable(&ready_but_unavailable));

        let mut available_not_ready = entry("p2");
        available_not_ready.available = Some(true);
        available_not_ready.verified = Some("NOT_READY".to_string());
        assert!(is_launchable(&available_not_ready));
    }

    #[test]
    fn test_verified_is_case_insensitive() {
        let mut lower = entry("p1");
        lower.verified = Some("ready".to_string());
        let mut not_ready = entry("p2");
        not_ready.verified = Some("NOT_READY".to_string());

        let result = filter_available(&[lower, not_ready]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].product_id, "p1");
    }

    #[test]
    fn test_missing_signal_is_permissive() {
        let mut empty_status = entry("p2");
        empty_status.verified = Some(String::new());
        let result = filter_available(&[entry("p1"), empty_status]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_from_raw_json() {
        let entries: Vec<StationProductEntry> = lenient::records(json!([
            { "product_id": "p1", "enabled": true, "verified": "NOT_READY" },
            null,
            { "product_id": "p2", "enabled": true },
            { "product_id": "p3", "enabled": "true" },
            { "product_id": "p4", "enabled": true, "available": "yes", "verified": "READY" }
        ]));
        let result = filter_available(&entries);
        let ids: Vec<&str> = result.iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p4"]);
    }

    #[test]
    fn test_non_string_verified_is_not_ready() {
        let entries: Vec<StationProductEntry> = lenient::records(json!([
            { "product_id": "p1", "enabled": true, "verified": false },
            { "product_id": "p2", "enabled": true, "verified": 0 },
            { "product_id": "p3", "enabled": true, "verified": null },
            { "product_id": "p4", "enabled": true, "verified": true, "available": true }
        ]));
        let result = filter_available(&entries);
        let ids: Vec<&str> = result.iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p4"]);
    }

    #[test]
    fn test_entry_with_both_casings_is_kept() {
        let entries: Vec<StationProductEntry> = lenient::records(json!([
            { "product_id": "p1", "productId": "p1", "enabled": true },
            { "product_id": "p2", "enabled": true, "gamePath": "a", "game_path": "b" }
        ]));
        let result = filter_available(&entries);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].game_path.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_available(&[]).is_empty());
    }

    fn entry_strategy() -> impl Strategy<Value = StationProductEntry> {
        (
            "[a-z0-9]{1,8}",
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(prop_oneof![
                Just("READY".to_string()),
                Just("ready".to_string()),
                Just("NOT_READY".to_string()),
                Just(String::new()),
            ]),
        )
            .prop_map(|(product_id, enabled, available, verified)| StationProductEntry {
                product_id,
                enabled,
                available,
                verified,
                ..Default::default()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// 过滤结果是输入的有序子序列，且每一项都满足可启动条件
        #[test]
        fn prop_filter_is_ordered_subsequence(
            entries in proptest::collection::vec(entry_strategy(), 0..20)
        ) {
            let result = filter_available(&entries);
            let expected: Vec<StationProductEntry> =
                entries.iter().filter(|e| is_launchable(e)).cloned().collect();
            prop_assert_eq!(&result, &expected);
            prop_assert!(result.iter().all(|e| e.enabled == Some(true)));
            prop_assert_eq!(filter_available(&entries), result);
        }
    }
}
