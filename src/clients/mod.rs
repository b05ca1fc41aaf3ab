pub mod quiz_client;
pub mod webhook_client;

pub use quiz_client::QuizClient;
pub use webhook_client::WebhookClient;

use crate::error::{AppError, AppResult};
use std::time::Duration;

/// 构建带超时的 HTTP 客户端
pub(crate) fn build_http_client(timeout_secs: u64) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(AppError::HttpClient)
}
