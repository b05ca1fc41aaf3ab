/// 日志工具模块
///
/// 提供日志初始化和运行信息输出的辅助函数
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 info，可以用 `RUST_LOG` 覆盖。重复调用不会报错。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config_path`: 配置文件路径
/// - `quiz_id`: 测验ID
pub fn log_startup(config_path: &Path, quiz_id: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 测验答案推送");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 配置文件: {}", config_path.display());
    info!("📋 测验ID: {}", quiz_id);
    info!("{}", "=".repeat(60));
}

/// 记录题目解析结果
pub fn log_questions_parsed(total: usize) {
    info!("✓ 解析到 {} 道题目", total);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
