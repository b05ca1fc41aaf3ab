use anyhow::Result;
use quiz_answer_notify::utils::logging;
use quiz_answer_notify::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 初始化日志
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ 运行失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 配置文件路径：第一个参数，默认 config.json
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    quiz_answer_notify::run(&config_path).await?;

    Ok(())
}
