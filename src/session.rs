use crate::bank::QuestionBank;
use crate::error::BankError;
use crate::handoff::{self, ResultStore};
use crate::logger;
use crate::models::{Answer, AppState, Choice, Question, QuizResult};
use crate::scoring;
use crate::shuffle::ShufflePlan;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active(usize),
    Complete,
}

/// Outcome of `QuizSession::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Rejected,
    Moved,
    Completed,
}

/// One traversal of the question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    plan: ShufflePlan,
    answers: Vec<Answer>,
    current_index: usize,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Starts a session and fixes its shuffle plan from `rng`.
    pub fn new<R: Rng + ?Sized>(bank: QuestionBank, rng: &mut R) -> Self {
        let plan = ShufflePlan::plan(bank.count(), rng);
        Self::from_parts(bank, plan)
    }

    /// Starts a session with a fixed plan, which must hold one entry per
    /// question.
    pub fn with_plan(bank: QuestionBank, plan: ShufflePlan) -> Result<Self, BankError> {
        if plan.len() != bank.count() {
            return Err(BankError::PlanMismatch {
                questions: bank.count(),
                plan: plan.len(),
            });
        }
        Ok(Self::from_parts(bank, plan))
    }

    fn from_parts(bank: QuestionBank, plan: ShufflePlan) -> Self {
        Self {
            answers: vec![None; bank.count()],
            bank,
            plan,
            current_index: 0,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.current_index < self.bank.count() {
            Phase::Active(self.current_index)
        } else {
            Phase::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.bank.count()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn plan(&self) -> &ShufflePlan {
        &self.plan
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Set once, when the session completes.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            Phase::Active(index) => Some(self.bank.get(index)),
            Phase::Complete => None,
        }
    }

    pub fn current_answer(&self) -> Answer {
        self.answers.get(self.current_index).copied().flatten()
    }

    /// The current question's options in display order.
    pub fn displayed_options(&self) -> Option<[(Choice, &'static str); 2]> {
        let question = self.current_question()?;
        let [left, right] = self.plan.entry(self.current_index).choices();
        Some([(left, question.label(left)), (right, question.label(right))])
    }

    pub fn select(&mut self, choice: Choice) -> bool {
        match self.phase() {
            Phase::Active(index) => {
                self.answers[index] = Some(choice);
                true
            }
            Phase::Complete => false,
        }
    }

    /// Selects whatever option is shown at `slot` (0 = left).
    pub fn select_slot(&mut self, slot: usize) -> bool {
        match self.phase() {
            Phase::Active(index) => {
                let choice = self.plan.entry(index).choice_at(slot);
                self.select(choice)
            }
            Phase::Complete => false,
        }
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.phase(), Phase::Active(_)) && self.current_answer().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.phase(), Phase::Active(_)) && self.current_index > 0
    }

    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Rejected;
        }

        self.current_index += 1;
        if self.is_complete() {
            self.result = Some(scoring::score(&self.answers, self.bank.rules()));
            Advance::Completed
        } else {
            Advance::Moved
        }
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Back to the first question with no answers. The shuffle plan is kept.
    pub fn reset(&mut self) {
        self.answers = vec![None; self.bank.count()];
        self.current_index = 0;
        self.result = None;
    }
}

/// A failed publish is logged and the app still moves to the result view,
/// which then shows the default result.
pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    store: &mut dyn ResultStore,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Left | KeyCode::Char('1') => {
            session.select_slot(0);
        }
        KeyCode::Right | KeyCode::Char('2') => {
            session.select_slot(1);
        }
        KeyCode::Up | KeyCode::Backspace => {
            session.retreat();
        }
        KeyCode::Enter | KeyCode::Down => {
            if session.advance() == Advance::Completed {
                if let Some(result) = session.result() {
                    logger::log(&format!(
                        "Quiz completed with {}% unwise answers",
                        result.unwise_percent
                    ));
                    if let Err(e) = handoff::publish(store, result) {
                        logger::log(&format!("Failed to publish quiz result: {}", e));
                    }
                }
                *app_state = AppState::Result;
            }
        }
        _ => {}
    }
}

pub fn handle_splash_input(key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => *app_state = AppState::Quiz,
        KeyCode::Esc | KeyCode::Char('q') => *app_state = AppState::Exit,
        _ => {}
    }
}

/// `y` drops any published result and replaces `session` with a fresh one
/// (new shuffle plan) before going back to the splash screen.
pub fn handle_quit_confirm_input<R: Rng + ?Sized>(
    key: KeyEvent,
    app_state: &mut AppState,
    session: &mut QuizSession,
    store: &mut dyn ResultStore,
    rng: &mut R,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Err(e) = handoff::clear(store) {
                logger::log(&format!("Failed to clear quiz result: {}", e));
            }
            logger::log("Starting new quiz session");
            *session = QuizSession::new(*session.bank(), rng);
            *app_state = AppState::Splash;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
        }
        _ => {}
    }
}

pub fn handle_result_input(key: KeyEvent, app_state: &mut AppState) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        *app_state = AppState::Exit;
    }
}

pub fn is_exit_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
