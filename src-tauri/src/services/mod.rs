// ============================================================================
// 业务层：纯 Rust 核心逻辑
// ✅ 特点：不依赖 `tauri::*`，保持纯净，方便写 #[test]
// ⛔ 禁止：直接返回前端专用的错误格式
//
// 卡片管线（availability / catalog / launch_params / fallback）是纯函数，
// 不做网络 IO、不缓存、不持久化；其余模块是宿主侧的数据获取与启动
// ============================================================================

pub mod availability;
pub mod catalog;
pub mod desktop;
pub mod fallback;
pub mod launch_params;

pub mod card_loader;
pub mod config;
pub mod drova_api;
pub mod image_cache;
pub mod launcher;
pub mod station;
