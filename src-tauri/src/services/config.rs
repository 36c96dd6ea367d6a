// ============================================================================
// 启动器配置：从环境变量（以及可选的 .env 文件）读取
// ============================================================================

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://services.drova.io";
pub const DEFAULT_CATALOG_LIMIT: u32 = 2000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Drova 服务根地址，不带末尾斜杠
    pub api_base: String,
    /// 是否把卡片图片缓存到临时目录
    pub image_cache: bool,
    /// 目录接口的 limit 参数
    pub catalog_limit: u32,
    pub http_timeout: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_cache: false,
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl LauncherConfig {
    /// 读取进程环境（先加载 .env，不存在时忽略）
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数构造配置，非法数值回退到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base = lookup("DROVA_API_BASE")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.api_base);

        let image_cache = lookup("DROVA_IMAGE_CACHE")
            .map(|value| is_truthy(&value))
            .unwrap_or(defaults.image_cache);

        let catalog_limit = parse_or("DROVA_CATALOG_LIMIT", &lookup, defaults.catalog_limit);
        let timeout_secs = parse_or(
            "DROVA_HTTP_TIMEOUT_SECS",
            &lookup,
            defaults.http_timeout.as_secs(),
        );

        Self {
            api_base,
            image_cache,
            catalog_limit,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// `1` / `true` / `yes` / `on`（去空白、不区分大小写）
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: std::str::FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} has invalid value '{}', using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> LauncherConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LauncherConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), LauncherConfig::default());
    }

    #[test]
    fn test_truthy_values() {
        for value in ["1", "true", " YES ", "On"] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["0", "false", "", "enabled"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("DROVA_API_BASE", "http://localhost:8080/"),
            ("DROVA_IMAGE_CACHE", "on"),
            ("DROVA_CATALOG_LIMIT", "50"),
            ("DROVA_HTTP_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(config.api_base, "http://localhost:8080");
        assert!(config.image_cache);
        assert_eq!(config.catalog_limit, 50);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("DROVA_CATALOG_LIMIT", "lots"), ("DROVA_API_BASE", " ")]);
        assert_eq!(config.catalog_limit, DEFAULT_CATALOG_LIMIT);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
