/// 测验平台客户端
///
/// 只负责把测验页面的原始响应体拉下来，解析交给 `services::quiz_parser`
use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppResult, FetchError};
use tracing::{debug, info, warn};

/// 测验平台客户端
pub struct QuizClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuizClient {
    /// 创建新的测验平台客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http: build_http_client(config.request_timeout_secs)?,
            base_url: config.quiz_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 测验页面地址
    pub fn quiz_url(&self, quiz_id: &str) -> String {
        format!("{}/quiz/{}", self.base_url, quiz_id)
    }

    /// 拉取测验数据
    ///
    /// # 参数
    /// - `quiz_id`: 测验ID
    ///
    /// # 返回
    /// 返回完整的响应体；状态码异常只记录警告，不在这里判定失败
    pub async fn fetch_quiz(&self, quiz_id: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.quiz_url(quiz_id);
        info!("🌐 正在拉取测验数据: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("⚠️ 测验平台返回状态码 {}，仍尝试解析响应体", status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::ReadBody {
                url: url.clone(),
                source,
            })?;

        debug!("响应体长度: {} 字节", body.len());

        Ok(body.to_vec())
    }
}
