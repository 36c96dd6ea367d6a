// ============================================================================
// 统一错误类型定义
// 使用 thiserror 派生宏；卡片管线本身不会失败，这里只覆盖宿主层
// ============================================================================

use thiserror::Error;

/// 应用统一错误枚举
///
/// 消息文本直接展示在自助终端界面上，因此使用俄语。
/// 通过 `impl From<AppError> for String` 保持与 Tauri command 的兼容性
/// （Tauri command 要求返回 `Result<T, String>`）。
#[derive(Debug, Error)]
pub enum AppError {
    /// 站点凭据缺失（注册表键或环境变量）
    #[error("{0}")]
    Credentials(String),

    /// HTTP 传输层错误（连接失败、超时）
    #[error("{0}")]
    Http(String),

    /// 服务端返回非 2xx 状态码
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// 响应体无法解析
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    /// 过滤后没有可启动的游戏
    #[error("Список игр пуст")]
    EmptyProductList,

    /// 已有一个加载流程在进行
    #[error("Загрузка уже выполняется")]
    LoadInProgress,

    /// 共享状态的锁被毒化
    #[error("State locked")]
    StateLocked,

    /// 上一次加载中找不到该产品的启动描述
    #[error("Не найдено описание запуска")]
    LaunchNotFound,

    /// 解析后的可执行文件路径为空
    #[error("Пустой путь запуска")]
    EmptyExecutable,

    /// 文件系统 IO 错误
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// 便捷类型别名，统一项目内的 Result 签名
pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// 将 AppError 转换为 String，保持与 Tauri command 返回类型的兼容性
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(String::from(AppError::EmptyProductList), "Список игр пуст");
        assert_eq!(String::from(AppError::HttpStatus(502)), "HTTP 502");
        assert_eq!(
            AppError::Credentials("DROVA_AUTH_TOKEN не задан".to_string()).to_string(),
            "DROVA_AUTH_TOKEN не задан"
        );
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }
}
