// ============================================================================
// 日志初始化：log 门面 + env_logger 后端
// 默认 info 级别，可通过 RUST_LOG 覆盖（例如 RUST_LOG=drova_kiosk_launcher_lib=debug）
// ============================================================================

/// 安装全局 logger；重复调用时保持第一次的设置
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
    {
        log::debug!("Logger initialized");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
        log::info!("still logging");
    }
}
