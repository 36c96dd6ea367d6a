// ============================================================================
// 进程启动：把解析后的启动参数变成可执行的 Command
// ============================================================================

use std::process::Command;

use crate::models::dtos::LaunchParameters;
use crate::utils::error::{AppError, AppResult};

/// 规范化参数串：去空白，空串视为无参数，剥掉一对匹配的外层引号
///
/// 结果作为单个参数传给进程，不做二次拆分。
pub fn normalize_launch_args(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(unwrap_outer_quotes(trimmed).to_string())
}

fn unwrap_outer_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// 构建启动命令；可执行文件路径为空时报错
pub fn build_command(params: &LaunchParameters) -> AppResult<Command> {
    if params.exe_path.is_empty() {
        return Err(AppError::EmptyExecutable);
    }

    let mut command = Command::new(&params.exe_path);
    if !params.work_dir.is_empty() {
        command.current_dir(&params.work_dir);
    }
    if let Some(arg) = normalize_launch_args(&params.args) {
        command.arg(arg);
    }
    Ok(command)
}

/// 启动进程；调试构建只记录命令不真正启动
pub fn spawn(params: &LaunchParameters) -> AppResult<()> {
    let mut command = build_command(params)?;

    if cfg!(debug_assertions) {
        log::info!(
            "Debug launch only: exe='{}' work_dir='{}' raw_args='{}' normalized_args={:?}",
            params.exe_path,
            params.work_dir,
            params.args,
            normalize_launch_args(&params.args)
        );
        return Ok(());
    }

    command.spawn()?;
    log::info!("Launched {}", params.exe_path);
    Ok(())
}
