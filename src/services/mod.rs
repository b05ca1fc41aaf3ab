pub mod answer_formatter;
pub mod quiz_parser;
pub mod text_normalizer;

pub use answer_formatter::format_answers;
pub use quiz_parser::parse_quiz;
pub use text_normalizer::normalize_html;
