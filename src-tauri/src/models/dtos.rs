// ============================================================================
// 数据传输对象（DTO）定义
// 外部服务的原始记录、前端使用的卡片视图模型，以及启动参数
// ⛔ 禁止：包含复杂的业务逻辑方法
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// 站点上的单个产品记录（serverproduct/list 的元素）
///
/// 站点服务返回 snake_case 字段，同时兼容 camelCase 写法。
/// 启动配置字段与产品记录平铺在同一个对象里。
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StationProductEntry {
    #[serde(default, alias = "productId", deserialize_with = "lenient::string")]
    pub product_id: String,
    /// 站点配置中的启用开关，只有严格的 `true` 才算启用
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub enabled: Option<bool>,
    /// 显式的可用标记，优先于 `verified`
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub available: Option<bool>,
    /// 校验状态（`"READY"` 或其他值）；非字符串取值按其文本参与比较
    #[serde(default, deserialize_with = "lenient::opt_status")]
    pub verified: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(default, alias = "gamePath", deserialize_with = "lenient::opt_string")]
    pub game_path: Option<String>,
    #[serde(default, alias = "workPath", deserialize_with = "lenient::opt_string")]
    pub work_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub args: Option<String>,
    #[serde(
        default,
        alias = "defaultGamePath",
        deserialize_with = "lenient::opt_string"
    )]
    pub default_game_path: Option<String>,
    #[serde(
        default,
        alias = "defaultWorkPath",
        deserialize_with = "lenient::opt_string"
    )]
    pub default_work_path: Option<String>,
    #[serde(default, alias = "defaultArgs", deserialize_with = "lenient::opt_string")]
    pub default_args: Option<String>,
}

impl StationProductEntry {
    /// 取出该记录携带的启动配置
    pub fn detail_record(&self) -> ProductDetailRecord {
        ProductDetailRecord {
            game_path: self.game_path.clone(),
            work_path: self.work_path.clone(),
            args: self.args.clone(),
            default_game_path: self.default_game_path.clone(),
            default_work_path: self.default_work_path.clone(),
            default_args: self.default_args.clone(),
        }
    }
}

/// 中央目录中的产品元数据（product/listfull2 的元素）
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProductEntry {
    #[serde(default, alias = "product_id", deserialize_with = "lenient::string")]
    pub product_id: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description_ru: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub card_picture: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub required_account: Option<String>,
    /// 免授权标记，字段名拼写来自外部 API
    #[serde(
        default,
        rename = "noLicenseRequred",
        deserialize_with = "lenient::opt_bool"
    )]
    pub no_license_requred: Option<bool>,
}

/// 单个产品的启动配置：覆盖字段 + 默认字段
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailRecord {
    #[serde(default, alias = "game_path", deserialize_with = "lenient::opt_string")]
    pub game_path: Option<String>,
    #[serde(default, alias = "work_path", deserialize_with = "lenient::opt_string")]
    pub work_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub args: Option<String>,
    #[serde(
        default,
        alias = "default_game_path",
        deserialize_with = "lenient::opt_string"
    )]
    pub default_game_path: Option<String>,
    #[serde(
        default,
        alias = "default_work_path",
        deserialize_with = "lenient::opt_string"
    )]
    pub default_work_path: Option<String>,
    #[serde(default, alias = "default_args", deserialize_with = "lenient::opt_string")]
    pub default_args: Option<String>,
}

/// 解析后的启动参数，交给进程启动器使用
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchParameters {
    pub exe_path: String,
    pub work_dir: String,
    pub args: String,
}

/// 游戏卡片视图模型，由 `load_cards` command 返回给前端
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub product_id: String,
    pub title: String,
    /// 卡片图片地址（远程 URL 或缓存后的 file:// URL），可为空
    pub image_url: String,
    /// 描述摘要，最多 100 个字符
    pub alt: String,
    pub required_account: String,
    pub is_free: bool,
    /// 选择该卡片时退出到桌面而不是启动进程
    pub is_desktop: bool,
}

/// `status` 事件载荷
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusPayload {
    pub text: String,
    pub current: Option<u32>,
    pub total: Option<u32>,
}

impl StatusPayload {
    /// 计数进度的副标题，只有 `total > 0` 时才有
    pub fn progress_label(&self) -> Option<String> {
        match (self.current, self.total) {
            (Some(current), Some(total)) if total > 0 => {
                Some(format!("Получено {}/{}", current, total))
            }
            _ => None,
        }
    }
}

/// server-manager/servers/public 的响应
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ServerInfo {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

/// 站点硬件信息，原样透传给前端
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareInfo {
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub ram_bytes: Option<u64>,
    #[serde(default)]
    pub processor: Option<HardwareProcessor>,
    #[serde(default)]
    pub graphic: Vec<HardwareGraphic>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareProcessor {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub version: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareGraphic {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub ram_bytes: Option<u64>,
}

/// 站点详情，由 `load_station_details` command 返回
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StationDetails {
    pub name: String,
    pub description: String,
    pub hardware: HardwareInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_station_entry_accepts_both_casings() {
        let snake: StationProductEntry = serde_json::from_value(json!({
            "product_id": "p1",
            "enabled": true,
            "game_path": "C:\\Game.exe"
        }))
        .unwrap();
        let camel: StationProductEntry = serde_json::from_value(json!({
            "productId": "p1",
            "enabled": true,
            "gamePath": "C:\\Game.exe"
        }))
        .unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.detail_record().game_path.as_deref(), Some("C:\\Game.exe"));
    }

    #[test]
    fn test_catalog_entry_uses_api_spelling() {
        let entry: CatalogProductEntry = serde_json::from_value(json!({
            "productId": "p1",
            "displayName": "Game Name",
            "noLicenseRequred": true
        }))
        .unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Game Name"));
        assert_eq!(entry.no_license_requred, Some(true));
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let card = Card {
            product_id: "p1".to_string(),
            title: "Игра".to_string(),
            image_url: String::new(),
            alt: String::new(),
            required_account: "Steam".to_string(),
            is_free: false,
            is_desktop: false,
        };
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["productId"], "p1");
        assert_eq!(value["requiredAccount"], "Steam");
        assert_eq!(value["isFree"], false);
        assert_eq!(value["isDesktop"], false);
    }

    #[test]
    fn test_status_progress_label() {
        let counted = StatusPayload {
            text: "Загружаем ресурсы…".to_string(),
            current: Some(3),
            total: Some(10),
        };
        assert_eq!(counted.progress_label().as_deref(), Some("Получено 3/10"));

        let zero_total = StatusPayload {
            total: Some(0),
            ..counted.clone()
        };
        assert_eq!(zero_total.progress_label(), None);

        let plain = StatusPayload {
            text: "Загрузка…".to_string(),
            current: None,
            total: None,
        };
        assert_eq!(plain.progress_label(), None);
    }

    #[test]
    fn test_hardware_round_trips_snake_case() {
        let hardware: HardwareInfo = serde_json::from_value(json!({
            "ram_bytes": 34359738368u64,
            "processor": { "version": "AMD Ryzen 5 1600" },
            "graphic": [{ "name": "RTX 3060", "ram_bytes": 12884901888u64 }]
        }))
        .unwrap();
        let value = serde_json::to_value(&hardware).unwrap();
        assert_eq!(value["processor"]["version"], "AMD Ryzen 5 1600");
        assert_eq!(value["graphic"][0]["ram_bytes"], 12884901888u64);
    }
}
