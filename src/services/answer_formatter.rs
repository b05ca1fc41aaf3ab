//! 答案排版 - 业务能力层

use crate::models::QuestionAnswer;

/// 把题目列表排版成一条消息
///
/// 按题目ID字典序升序排列（稳定排序，ID相同的保持原有顺序），
/// 每道题渲染为：
///
/// ```text
/// 1. **题干**
/// **Answer:** `答案`
///
/// ```
///
/// 空列表返回空字符串。
pub fn format_answers(mut answers: Vec<QuestionAnswer>) -> String {
    answers.sort_by(|a, b| a.id.cmp(&b.id));

    let mut result = String::new();
    for (i, qa) in answers.iter().enumerate() {
        result.push_str(&format!(
            "{}. **{}**\n**Answer:** `{}`\n\n",
            i + 1,
            qa.question,
            qa.answer
        ));
    }
    result
}
