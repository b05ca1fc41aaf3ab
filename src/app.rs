use crate::clients::{QuizClient, WebhookClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{format_answers, parse_quiz};
use crate::utils::logging::{log_questions_parsed, log_startup, truncate_text};
use std::path::Path;
use tracing::{debug, info};

/// 加载配置并跑完整条流水线
///
/// # 参数
/// - `config_path`: 配置文件路径
pub async fn run(config_path: &Path) -> AppResult<()> {
    // 加载配置
    let config = Config::load(config_path)?;
    log_startup(config_path, &config.quiz_id);

    // 初始化并运行应用
    App::initialize(config)?.run().await
}

/// 应用主结构
///
/// 流水线：拉取 → 解析 → 排版 → 推送，任何一步失败直接返回
pub struct App {
    config: Config,
    quiz_client: QuizClient,
    webhook_client: WebhookClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let quiz_client = QuizClient::new(&config)?;
        let webhook_client = WebhookClient::new(&config)?;

        Ok(Self {
            config,
            quiz_client,
            webhook_client,
        })
    }

    /// 拉取、解析并排版，返回待推送的消息
    pub async fn build_message(&self) -> AppResult<String> {
        let body = self.quiz_client.fetch_quiz(&self.config.quiz_id).await?;

        let answers = parse_quiz(&body)?;
        log_questions_parsed(answers.len());

        let message = format_answers(answers);
        debug!("消息预览: {}", truncate_text(&message, 200));

        Ok(message)
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<()> {
        let message = self.build_message().await?;

        info!("📤 正在推送答案...");
        self.webhook_client.send(&message).await?;

        Ok(())
    }
}
