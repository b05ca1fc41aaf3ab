use serde::Serialize;

/// Embed 固定标题
pub const EMBED_TITLE: &str = "Quiz Answers";

/// 推送到 webhook 的消息体
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
}

impl WebhookPayload {
    /// 用格式化好的答案构建只含一个 embed 的消息
    pub fn quiz_answers(
        username: impl Into<String>,
        avatar_url: impl Into<String>,
        message: impl Into<String>,
        color: u32,
    ) -> Self {
        Self {
            username: username.into(),
            avatar_url: avatar_url.into(),
            embeds: vec![Embed {
                title: EMBED_TITLE.to_string(),
                description: message.into(),
                color,
            }],
        }
    }
}
