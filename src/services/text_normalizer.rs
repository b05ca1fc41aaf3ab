//! 文本清洗 - 业务能力层
//!
//! 把题干/选项里的 HTML 变成可以直接放进聊天消息的纯文本

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("标签正则无效"));

const LINE_BREAK: &str = "<br>";
const NBSP: &str = "&nbsp;";

/// 清洗 HTML 文本
///
/// 1. `<br>` 替换为换行（只认这一种写法，`<br/>`、`<BR>` 按普通标签删除）
/// 2. 删除其余所有 `<...>` 标签
/// 3. 删除 `&nbsp;`（直接删掉，不替换为空格）
///
/// 其他 HTML 实体原样保留。
pub fn normalize_html(text: &str) -> String {
    let text = text.replace(LINE_BREAK, "\n");
    let mut text = TAG.replace_all(&text, "").into_owned();

    // 删掉一次之后可能拼出新的 &nbsp;
    while text.contains(NBSP) {
        text = text.replace(NBSP, "");
    }

    text
}
