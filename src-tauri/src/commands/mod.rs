// ============================================================================
// 命令层：前端 invoke 的薄接口
// ✅ 只能做：取 State、组装 services 依赖、把 AppError 转成 String
// ⛔ 禁止：包含业务逻辑
// ============================================================================

pub mod cards;
pub mod launch;
