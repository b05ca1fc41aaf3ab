//! 测验平台返回的数据结构
//!
//! 每一层嵌套对应一个独立的类型：
//! `data.quiz.info.questions[].structure.{query, answer, options}`

use serde::{Deserialize, Serialize};

/// 顶层响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDocument {
    pub data: QuizData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizData {
    pub quiz: Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub info: QuizInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizInfo {
    pub questions: Vec<RawQuestion>,
}

/// 平台上的单个题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    pub id: String,
    pub structure: QuestionStructure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStructure {
    pub query: QuestionQuery,
    /// 正确选项在 `options` 中的下标
    pub answer: i64,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionQuery {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    #[serde(default)]
    pub id: String,
    pub text: String,
}

/// 清洗后的题目与答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub answer_index: usize,
}
