use serde::{Deserialize, Serialize};

/// One of the two options of a question. Display order never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

/// `None` until the user picks an option for that question.
pub type Answer = Option<Choice>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
}

impl Question {
    pub fn label(&self, choice: Choice) -> &'static str {
        match choice {
            Choice::A => self.option_a,
            Choice::B => self.option_b,
        }
    }
}

/// Which choice(s) count as unwise for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    A,
    B,
    Both,
}

impl Rule {
    pub fn is_unwise(self, choice: Choice) -> bool {
        match self {
            Rule::Both => true,
            Rule::A => choice == Choice::A,
            Rule::B => choice == Choice::B,
        }
    }
}

/// Final outcome of a session. The serialized field names are the ones the
/// result view has always read, so they keep their legacy spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizResult {
    pub answers: Vec<Answer>,
    #[serde(rename = "yesCount")]
    pub unwise_count: usize,
    #[serde(rename = "noCount")]
    pub wise_count: usize,
    #[serde(rename = "stupidPercent")]
    pub unwise_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Quiz,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Splash,
    Quiz,
    QuizQuitConfirm,
    Result,
    Exit,
}

impl AppState {
    pub fn initial(route: Route) -> Self {
        match route {
            Route::Quiz => AppState::Splash,
            Route::Result => AppState::Result,
        }
    }
}
