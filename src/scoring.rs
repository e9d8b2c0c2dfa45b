use crate::models::{Answer, QuizResult, Rule};

/// Counts unwise answers against `rules`. The denominator is always the full
/// question count, answered or not.
///
/// Positions are paired up to the shorter slice: rules with no answer count
/// as unanswered, answers with no rule are never unwise.
pub fn score(answers: &[Answer], rules: &[Rule]) -> QuizResult {
    let total = rules.len();
    let unwise_count = answers
        .iter()
        .zip(rules)
        .filter(|(answer, rule)| match answer {
            Some(choice) => rule.is_unwise(*choice),
            None => false,
        })
        .count();

    QuizResult {
        answers: answers.to_vec(),
        unwise_count,
        wise_count: total - unwise_count,
        unwise_percent: percent(unwise_count, total),
    }
}

/// `part / total * 100` rounded half up.
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (part * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
