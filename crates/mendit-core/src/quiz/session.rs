//! Step-wise quiz answering.

use mendit_types::quiz::{ConflictStyle, QuizAnswer};

use super::questions::{QUESTIONS, QuizQuestion};
use super::resolve::resolve_style;

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// Move on to the question at this index.
    Next(usize),
    /// Last question answered; the resolved style.
    Complete(ConflictStyle),
}

/// Walks a user through [`QUESTIONS`] one at a time.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    answers: Vec<QuizAnswer>,
    result: Option<ConflictStyle>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question being shown (stays on the last one once done).
    pub fn current_index(&self) -> usize {
        self.answers.len().min(QUESTIONS.len() - 1)
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &QUESTIONS[self.current_index()]
    }

    /// Progress through the quiz as a whole percentage, counting the
    /// question on screen.
    pub fn progress_percent(&self) -> u8 {
        let shown = self.current_index() + 1;
        ((shown * 100) as f64 / QUESTIONS.len() as f64).round() as u8
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn result(&self) -> Option<&ConflictStyle> {
        self.result.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Record an answer for the current question.
    ///
    /// Answers after completion are ignored and return the existing result.
    pub fn answer(&mut self, answer: QuizAnswer) -> QuizStep {
        if let Some(style) = &self.result {
            return QuizStep::Complete(style.clone());
        }

        self.answers.push(answer);
        if self.answers.len() < QUESTIONS.len() {
            return QuizStep::Next(self.answers.len());
        }

        match resolve_style(&self.answers) {
            Ok(style) => {
                tracing::debug!(style = %style.style, "Quiz completed");
                self.result = Some(style.clone());
                QuizStep::Complete(style)
            }
            // Unreachable with a full answer set; stay on the last question.
            Err(_) => QuizStep::Next(self.current_index()),
        }
    }

    /// Answer by option position (0-3) on the current question.
    pub fn choose(&mut self, option_index: usize) -> Option<QuizStep> {
        let option = self.current_question().options.get(option_index)?;
        Some(self.answer(option.answer))
    }

    /// Start over.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_through_questions() {
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.current_question().id, 1);
        assert_eq!(quiz.progress_percent(), 20);

        assert_eq!(quiz.answer(QuizAnswer::Harmonizer), QuizStep::Next(1));
        assert_eq!(quiz.current_question().id, 2);
        assert_eq!(quiz.progress_percent(), 40);

        for _ in 0..3 {
            quiz.answer(QuizAnswer::Harmonizer);
        }
        assert_eq!(quiz.progress_percent(), 100);
        assert!(!quiz.is_complete());

        match quiz.answer(QuizAnswer::Direct) {
            QuizStep::Complete(style) => assert_eq!(style.style, "The Harmonizer"),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.answers().len(), 5);
    }

    #[test]
    fn test_answers_after_completion_are_ignored() {
        let mut quiz = QuizSession::new();
        for _ in 0..5 {
            quiz.answer(QuizAnswer::Avoider);
        }
        let again = quiz.answer(QuizAnswer::Direct);
        assert!(matches!(again, QuizStep::Complete(ref s) if s.style == "The Peaceful Mediator"));
        assert_eq!(quiz.answers().len(), 5);
    }

    #[test]
    fn test_choose_by_index() {
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.choose(2), Some(QuizStep::Next(1)));
        assert_eq!(quiz.answers(), &[QuizAnswer::Collaborator]);
        assert_eq!(quiz.choose(9), None);
    }

    #[test]
    fn test_reset() {
        let mut quiz = QuizSession::new();
        for _ in 0..5 {
            quiz.answer(QuizAnswer::Direct);
        }
        quiz.reset();
        assert!(quiz.result().is_none());
        assert_eq!(quiz.current_index(), 0);
    }
}
