pub mod quiz;
pub mod webhook;

pub use quiz::{
    QuestionAnswer, QuestionOption, QuestionQuery, QuestionStructure, Quiz, QuizData,
    QuizDocument, QuizInfo, RawQuestion,
};
pub use webhook::{Embed, WebhookPayload};
