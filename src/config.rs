use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

fn default_quiz_base_url() -> String {
    "https://quizizz.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_embed_color() -> u32 {
    3447003
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// 测验ID
    pub quiz_id: String,
    /// Webhook 地址
    pub webhook_url: String,
    /// 推送时显示的用户名
    pub webhook_name: String,
    /// 推送时显示的头像
    pub profile_url: String,
    // --- 可选项 ---
    /// 测验平台地址
    #[serde(default = "default_quiz_base_url")]
    pub quiz_base_url: String,
    /// 单个请求超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Embed 颜色
    #[serde(default = "default_embed_color")]
    pub embed_color: u32,
}

impl Config {
    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "quiz_id" });
        }
        if self.webhook_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "webhook_url" });
        }
        Ok(())
    }
}
