use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 每个阶段一个变体，任何一个阶段失败都会中止整条流水线
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 拉取测验数据失败
    #[error("拉取错误: {0}")]
    Fetch(#[from] FetchError),
    /// 解析测验数据失败
    #[error("解析错误: {0}")]
    Decode(#[from] DecodeError),
    /// 推送 webhook 失败
    #[error("推送错误: {0}")]
    Notify(#[from] NotifyError),
    /// HTTP 客户端构建失败
    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件不是合法的 JSON
    #[error("解析配置文件失败 ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// 必填字段为空
    #[error("配置字段 {field} 不能为空")]
    MissingField { field: &'static str },
}

/// 测验拉取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("fetching data failed ({url}): {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 读取响应体失败
    #[error("reading response body failed ({url}): {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 测验数据解析错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON 格式错误或结构不匹配
    #[error("unmarshaling JSON failed: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// 答案索引超出选项范围，说明上游数据不一致
    #[error("题目 {question_id} 的答案索引 {index} 超出范围 (共 {option_count} 个选项)")]
    AnswerIndexOutOfBounds {
        question_id: String,
        index: i64,
        option_count: usize,
    },
}

/// Webhook 推送错误
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 序列化 payload 失败
    #[error("序列化 payload 失败: {0}")]
    Serialize(#[source] serde_json::Error),
    /// 发送请求失败
    #[error("发送 webhook 请求失败: {0}")]
    Request(#[source] reqwest::Error),
    /// 返回了非 200/204 状态码
    #[error("webhook 返回异常状态 {status}: {body}")]
    BadStatus { status: u16, body: String },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
