// ============================================================================
// 卡片图片本地缓存
// 以 URL 的 SHA256 作为文件名，按修改时间判断 24 小时有效期
// 任何失败都不影响加载：调用方回退到原始 URL
// ============================================================================

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::utils::error::{AppError, AppResult};

pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
    ttl: Duration,
    http: reqwest::Client,
}

impl ImageCache {
    pub fn new(dir: PathBuf, ttl: Duration, http: reqwest::Client) -> Self {
        Self { dir, ttl, http }
    }

    /// 系统临时目录下的默认缓存位置
    pub fn in_temp_dir(http: reqwest::Client) -> Self {
        let dir = std::env::temp_dir().join("drova-launcher").join("images");
        Self::new(dir, CACHE_TTL, http)
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(cache_file_name(url))
    }

    /// 返回可供前端使用的图片地址：缓存成功时为 file:// URL，否则原样返回
    pub async fn resolve(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(Some(cached)) => cached,
            Ok(None) => url.to_string(),
            Err(err) => {
                log::warn!("Image cache failed for {}: {}", url, err);
                url.to_string()
            }
        }
    }

    /// 命中未过期缓存时不发请求；下载返回非 2xx 时得到 None
    pub async fn fetch(&self, url: &str) -> AppResult<Option<String>> {
        std::fs::create_dir_all(&self.dir)?;
        let file_path = self.path_for(url);

        if let Some(cached) = self.fresh_entry(&file_path)? {
            return Ok(Some(cached));
        }

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            log::debug!("Image {} returned HTTP {}", url, resp.status());
            return Ok(None);
        }

        let bytes = resp.bytes().await?;
        self.store(&file_path, &bytes)?;
        Ok(Some(file_url(&file_path)?))
    }

    /// 先写入同目录的临时文件再改名，缓存里不会出现写了一半的图片
    fn store(&self, file_path: &Path, bytes: &[u8]) -> AppResult<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(file_path).map_err(|err| err.error)?;
        Ok(())
    }

    fn fresh_entry(&self, file_path: &Path) -> AppResult<Option<String>> {
        let Ok(metadata) = std::fs::metadata(file_path) else {
            return Ok(None);
        };
        match metadata.modified() {
            Ok(modified) if !is_expired(modified, self.ttl) => Ok(Some(file_url(file_path)?)),
            _ => Ok(None),
        }
    }
}

/// `<sha256(url)>.<扩展名>`，扩展名取自 URL 路径的最后一段，没有时用 `img`
pub fn cache_file_name(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let hash = hasher.finalize();

    let ext = path_extension(url).unwrap_or_else(|| "img".to_string());
    format!("{:x}.{}", hash, ext)
}

/// 只看路径部分，主机名里的点（`example.com`）不算扩展名
fn path_extension(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let last = parsed.path_segments()?.rev().find(|s| !s.is_empty())?;
    let ext = Path::new(last).extension()?.to_str()?;
    (!ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())).then(|| ext.to_string())
}

pub fn file_url(path: &Path) -> AppResult<String> {
    reqwest::Url::from_file_path(path)
        .map(|url| url.to_string())
        .map_err(|_| AppError::Io(std::io::Error::other("Не удалось создать file URL")))
}

/// 修改时间无法比较（例如在未来）时按过期处理
pub fn is_expired(modified: SystemTime, ttl: Duration) -> bool {
    SystemTime::now()
        .duration_since(modified)
        .map(|age| age > ttl)
        .unwrap_or(true)
}
