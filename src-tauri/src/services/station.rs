// ============================================================================
// 站点凭据：站点 UUID 与鉴权 token
// Windows 上读取 Esme 客户端写入的注册表，其他平台读取环境变量
// ============================================================================

use crate::utils::error::{AppError, AppResult};

pub const ENV_STATION_UUID: &str = "DROVA_STATION_UUID";
pub const ENV_AUTH_TOKEN: &str = "DROVA_AUTH_TOKEN";

#[derive(Clone)]
pub struct StationCredentials {
    pub uuid: String,
    pub token: String,
}

impl std::fmt::Debug for StationCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationCredentials")
            .field("uuid", &self.uuid)
            .field("token_len", &self.token.len())
            .finish()
    }
}

/// 读取当前站点的凭据
#[cfg(target_os = "windows")]
pub fn resolve_credentials() -> AppResult<StationCredentials> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let registry_err = |err: std::io::Error| AppError::Credentials(err.to_string());

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let esme = hklm
        .open_subkey("SOFTWARE\\ITKey\\Esme")
        .map_err(registry_err)?;
    let uuid: String = esme.get_value("last_server").map_err(registry_err)?;
    let server_key = hklm
        .open_subkey(format!("SOFTWARE\\ITKey\\Esme\\servers\\{}", uuid))
        .map_err(registry_err)?;
    let token: String = server_key.get_value("auth_token").map_err(registry_err)?;

    Ok(StationCredentials { uuid, token })
}

/// 读取当前站点的凭据
#[cfg(not(target_os = "windows"))]
pub fn resolve_credentials() -> AppResult<StationCredentials> {
    dotenvy::dotenv().ok();
    let credentials = credentials_from_lookup(|key| std::env::var(key).ok())?;
    log::debug!("Loaded station info from env: {:?}", credentials);
    Ok(credentials)
}

/// 从键值查找函数中取出凭据，缺失或为空时报错
pub fn credentials_from_lookup<F>(lookup: F) -> AppResult<StationCredentials>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::Credentials(format!("{} не задан", key)))
    };

    Ok(StationCredentials {
        uuid: required(ENV_STATION_UUID)?,
        token: required(ENV_AUTH_TOKEN)?,
    })
}
