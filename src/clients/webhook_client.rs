/// Webhook 客户端
///
/// 负责把排版好的答案推送到聊天 webhook
use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppResult, NotifyError};
use crate::models::WebhookPayload;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, error, info};

/// Webhook 客户端
pub struct WebhookClient {
    http: reqwest::Client,
    webhook_url: String,
    username: String,
    avatar_url: String,
    embed_color: u32,
}

impl WebhookClient {
    /// 创建新的 webhook 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http: build_http_client(config.request_timeout_secs)?,
            webhook_url: config.webhook_url.clone(),
            username: config.webhook_name.clone(),
            avatar_url: config.profile_url.clone(),
            embed_color: config.embed_color,
        })
    }

    /// 构建消息体
    pub fn build_payload(&self, message: &str) -> WebhookPayload {
        WebhookPayload::quiz_answers(&self.username, &self.avatar_url, message, self.embed_color)
    }

    /// 推送消息
    ///
    /// # 参数
    /// - `message`: 排版好的答案
    ///
    /// # 返回
    /// 只有 200 / 204 视为成功，其余状态码连同响应体一起返回
    pub async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let payload = self.build_payload(message);
        let body = serde_json::to_vec(&payload).map_err(|e| {
            error!("❌ 序列化 payload 失败: {}", e);
            NotifyError::Serialize(e)
        })?;

        debug!("Webhook payload 长度: {} 字节", body.len());

        let response = self
            .http
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ 发送 webhook 请求失败: {}", e);
                NotifyError::Request(e)
            })?;

        let status = response.status();
        if !is_delivered(status) {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Webhook 返回异常状态: {}\n响应体: {}", status, body);
            return Err(NotifyError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!("✓ 答案已推送到 webhook");
        Ok(())
    }
}

/// 判断 webhook 是否已接收消息
fn is_delivered(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NO_CONTENT
}
