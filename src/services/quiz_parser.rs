//! 测验解析 - 业务能力层
//!
//! 只负责把原始响应体变成 `QuestionAnswer` 列表，不关心排序和输出

use crate::error::DecodeError;
use crate::models::{QuestionAnswer, QuizDocument, RawQuestion};
use crate::services::text_normalizer::normalize_html;
use tracing::debug;

/// 解析测验响应体
///
/// # 参数
/// - `body`: 测验平台返回的原始字节
///
/// # 返回
/// 按原始顺序返回所有题目；重复的题目ID全部保留
pub fn parse_quiz(body: &[u8]) -> Result<Vec<QuestionAnswer>, DecodeError> {
    let document: QuizDocument = serde_json::from_slice(body)?;
    let questions = document.data.quiz.info.questions;

    debug!("响应中共有 {} 道题目", questions.len());

    questions.iter().map(extract_answer).collect()
}

/// 取出单个题目的正确答案
fn extract_answer(question: &RawQuestion) -> Result<QuestionAnswer, DecodeError> {
    let structure = &question.structure;
    let out_of_bounds = || DecodeError::AnswerIndexOutOfBounds {
        question_id: question.id.clone(),
        index: structure.answer,
        option_count: structure.options.len(),
    };

    let answer_index = usize::try_from(structure.answer).map_err(|_| out_of_bounds())?;
    let option = structure.options.get(answer_index).ok_or_else(out_of_bounds)?;

    Ok(QuestionAnswer {
        id: question.id.clone(),
        question: normalize_html(&structure.query.text),
        answer: normalize_html(&option.text),
        answer_index,
    })
}
