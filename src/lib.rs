//! # Quiz Answer Notify
//!
//! 拉取测验平台上的题目和答案，整理成文本后推送到聊天 webhook
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只负责收发
//! - `QuizClient` - 拉取测验页面的原始响应体
//! - `WebhookClient` - 推送 embed 消息并检查状态码
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，不做任何 IO
//! - `normalize_html` - 清洗题干和选项中的 HTML
//! - `parse_quiz` - 解析响应体，取出每道题的正确答案
//! - `format_answers` - 按题目ID排序并排版
//!
//! ### ③ 编排层（App）
//! - `App` - 拉取 → 解析 → 排版 → 推送
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{run, App};
pub use clients::{QuizClient, WebhookClient};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use error::{AppError, AppResult, ConfigError, DecodeError, FetchError, NotifyError};
pub use models::{QuestionAnswer, WebhookPayload};
pub use services::{format_answers, normalize_html, parse_quiz};
