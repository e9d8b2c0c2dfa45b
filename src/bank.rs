use crate::error::BankError;
use crate::models::{Question, Rule};

pub const QUESTION_COUNT: usize = 10;

static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        prompt: "මෝඩ තරිඳු බැලුවද?",
        option_a: "නෑ",
        option_b: "ඔව්",
    },
    Question {
        id: 2,
        prompt: "ඔයා බැඳලද?",
        option_a: "නෑ",
        option_b: "ඔව්",
    },
    Question {
        id: 3,
        prompt: "බීලා වාහන පැදලා තියෙනවද?",
        option_a: "නෑ",
        option_b: "ඔව්",
    },
    Question {
        id: 4,
        prompt: "ඔයාගේ partner කියන ඕන දෙයක් කරනවද?",
        option_a: "නෑ",
        option_b: "ඔව්",
    },
    Question {
        id: 5,
        prompt: "ඔයා ඔයාගේ හොඳම යාලුවාව විශ්වාස කරනවද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
    Question {
        id: 6,
        prompt: "ඔයාගෙ partner ට bf or gf කෙනෙක් ඉන්නවද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
    Question {
        id: 7,
        prompt: "බීලා Ex ට කෝල් කරලා තියෙනවද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
    Question {
        id: 8,
        prompt: "ඔයාගෙ partner ව සැක කරනවද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
    Question {
        id: 9,
        prompt: "සාස්තර / දේවාල විශ්වාස කරනවද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
    Question {
        id: 10,
        prompt: "මේ ප්‍රශ්න ඔක්කොටම ඔයා උත්තර දුන්නද?",
        option_a: "ඔව්",
        option_b: "නෑ",
    },
];

// Positionally paired with QUESTIONS.
static RULES: [Rule; QUESTION_COUNT] = [
    Rule::A,
    Rule::B,
    Rule::B,
    Rule::B,
    Rule::Both,
    Rule::B,
    Rule::B,
    Rule::A,
    Rule::A,
    Rule::Both,
];

/// Read-only question list with its parallel rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
    rules: &'static [Rule],
}

impl QuestionBank {
    pub fn new(
        questions: &'static [Question],
        rules: &'static [Rule],
    ) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        if questions.len() != rules.len() {
            return Err(BankError::LengthMismatch {
                questions: questions.len(),
                rules: rules.len(),
            });
        }
        Ok(Self { questions, rules })
    }

    /// The ten compiled-in questions.
    pub fn standard() -> Self {
        Self {
            questions: &QUESTIONS,
            rules: &RULES,
        }
    }

    /// Panics if `index >= count()`, like slice indexing.
    pub fn get(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn rule_for(&self, index: usize) -> Rule {
        self.rules[index]
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        self.questions
    }

    pub fn rules(&self) -> &[Rule] {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bank_shape() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.count(), QUESTION_COUNT);
        assert_eq!(bank.rules().len(), bank.questions().len());
    }

    #[test]
    fn test_ids_are_ordinal() {
        let bank = QuestionBank::standard();
        for (index, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }
    }

    #[test]
    fn test_standard_rule_table() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.rule_for(0), Rule::A);
        assert_eq!(bank.rule_for(4), Rule::Both);
        assert_eq!(bank.rule_for(7), Rule::A);
        assert_eq!(bank.rule_for(9), Rule::Both);
        assert_eq!(
            bank.rules().iter().filter(|r| **r == Rule::Both).count(),
            2
        );
    }

    #[test]
    fn test_labels_are_trimmed() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            assert_eq!(question.option_a, question.option_a.trim());
            assert_eq!(question.option_b, question.option_b.trim());
            assert!(!question.prompt.is_empty());
        }
    }

    #[test]
    fn test_new_rejects_mismatch() {
        static QS: [Question; 1] = [Question {
            id: 1,
            prompt: "Q",
            option_a: "a",
            option_b: "b",
        }];
        static RS: [Rule; 2] = [Rule::A, Rule::B];
        assert_eq!(
            QuestionBank::new(&QS, &RS),
            Err(BankError::LengthMismatch {
                questions: 1,
                rules: 2
            })
        );
        assert_eq!(QuestionBank::new(&[], &[]), Err(BankError::Empty));
        assert!(QuestionBank::new(&QS, &RS[..1]).is_ok());
    }
}
