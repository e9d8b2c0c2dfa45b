pub mod bank;
pub mod config;
pub mod db;
pub mod error;
pub mod handoff;
pub mod logger;
pub mod models;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use bank::{QuestionBank, QUESTION_COUNT};
pub use config::Config;
pub use db::SqliteStore;
pub use error::{BankError, ConfigError, HandoffError, StoreError};
pub use handoff::{clear, consume, consume_or_default, publish, MemoryStore, ResultStore, QUIZ_RESULT_KEY};
pub use models::{Answer, AppState, Choice, Question, QuizResult, Route, Rule};
pub use scoring::score;
pub use session::{
    handle_quit_confirm_input, handle_quiz_input, handle_result_input, handle_splash_input,
    is_exit_chord, Advance, Phase, QuizSession,
};
pub use shuffle::{DisplayOrder, ShufflePlan};
pub use ui::{draw_quit_confirmation, draw_quiz, draw_result, draw_splash};
