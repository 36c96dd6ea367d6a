// ============================================================================
// Drova 服务客户端：站点产品、产品目录、站点信息、硬件信息
// ✅ 只能做：HTTP 请求、JSON 解析
// ⛔ 禁止：依赖 tauri::*，在这里做过滤或拼装卡片
// ============================================================================

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::dtos::{CatalogProductEntry, HardwareInfo, ServerInfo, StationProductEntry};
use crate::models::lenient;
use crate::services::config::LauncherConfig;
use crate::services::station::StationCredentials;
use crate::utils::error::{AppError, AppResult};

/// 站点鉴权请求头
const AUTH_HEADER: &str = "X-Auth-Token";

/// 卡片数据来源
///
/// 生产环境只有 [`DrovaClient`] 一个实现；测试中用内存实现替代。
pub trait ProductSource {
    /// 站点上配置的产品列表
    fn station_products(&self) -> impl Future<Output = AppResult<Vec<StationProductEntry>>> + Send;

    /// 完整产品目录
    fn catalog_products(&self) -> impl Future<Output = AppResult<Vec<CatalogProductEntry>>> + Send;

    /// 站点公开信息（名称、描述）
    fn server_info(&self) -> impl Future<Output = AppResult<ServerInfo>> + Send;

    /// 站点硬件信息
    fn hardware(&self) -> impl Future<Output = AppResult<HardwareInfo>> + Send;
}

#[derive(Debug, Clone)]
pub struct DrovaClient {
    http: reqwest::Client,
    api_base: String,
    catalog_limit: u32,
    station: StationCredentials,
}

impl DrovaClient {
    pub fn new(config: &LauncherConfig, station: StationCredentials) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            catalog_limit: config.catalog_limit,
            station,
        })
    }

    /// 共享底层连接池，供图片缓存使用
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn station_products_url(&self) -> String {
        format!(
            "{}/product-manager/serverproduct/list/{}",
            self.api_base, self.station.uuid
        )
    }

    pub fn catalog_url(&self) -> String {
        format!(
            "{}/product-manager/product/listfull2?limit={}",
            self.api_base, self.catalog_limit
        )
    }

    pub fn server_info_url(&self) -> String {
        format!(
            "{}/server-manager/servers/public/{}",
            self.api_base, self.station.uuid
        )
    }

    pub fn hardware_url(&self) -> String {
        format!(
            "{}/server-manager/hardware/list/{}",
            self.api_base, self.station.uuid
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, authorized: bool) -> AppResult<T> {
        log::debug!("HTTP GET {}", url);
        let mut req = self.http.get(&url);
        if authorized {
            req = req.header(AUTH_HEADER, &self.station.token);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("HTTP {} from {}: {}", status, url, body);
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        Ok(resp.json::<T>().await?)
    }
}

impl ProductSource for DrovaClient {
    async fn station_products(&self) -> AppResult<Vec<StationProductEntry>> {
        let raw: Value = self.get_json(self.station_products_url(), true).await?;
        Ok(lenient::records(raw))
    }

    async fn catalog_products(&self) -> AppResult<Vec<CatalogProductEntry>> {
        let raw: Value = self.get_json(self.catalog_url(), false).await?;
        Ok(lenient::records(raw))
    }

    async fn server_info(&self) -> AppResult<ServerInfo> {
        self.get_json(self.server_info_url(), false).await
    }

    async fn hardware(&self) -> AppResult<HardwareInfo> {
        self.get_json(self.hardware_url(), false).await
    }
}
