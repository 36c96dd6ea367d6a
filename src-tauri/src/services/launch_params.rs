// ============================================================================
// 启动参数解析：覆盖值优先，其次默认值，最后空串
// 三个字段各自独立判断
// ============================================================================

use crate::models::dtos::{LaunchParameters, ProductDetailRecord};

/// 解析启动参数；缺少记录时得到全空参数，调用方据此判定无法启动
pub fn resolve_launch_parameters(detail: Option<&ProductDetailRecord>) -> LaunchParameters {
    let Some(detail) = detail else {
        return LaunchParameters::default();
    };

    LaunchParameters {
        exe_path: pick(&detail.game_path, &detail.default_game_path),
        work_dir: pick(&detail.work_path, &detail.default_work_path),
        args: pick(&detail.args, &detail.default_args),
    }
}

fn pick(value: &Option<String>, fallback: &Option<String>) -> String {
    [value, fallback]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .cloned()
        .unwrap_or_default()
}
