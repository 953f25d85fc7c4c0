//! Scoring quiz answers into a conflict style.

use mendit_types::error::QuizError;
use mendit_types::quiz::{ConflictStyle, QuizAnswer};
use mendit_types::tags::Tone;

use super::questions::QUESTIONS;

/// The style profile for a dominant answer.
pub fn style_for(answer: QuizAnswer) -> ConflictStyle {
    let (style, description, tone) = match answer {
        QuizAnswer::Direct => (
            "The Direct Communicator",
            "You value honesty and efficiency in conflict resolution. You prefer straightforward communication and quick resolution.",
            Tone::Direct,
        ),
        QuizAnswer::Harmonizer => (
            "The Harmonizer",
            "You prioritize emotional well-being and relationship preservation. You excel at creating safe spaces for healing.",
            Tone::Compassionate,
        ),
        QuizAnswer::Collaborator => (
            "The Collaborator",
            "You focus on finding win-win solutions and fair outcomes. You're great at balancing different needs and perspectives.",
            Tone::Formal,
        ),
        QuizAnswer::Avoider => (
            "The Peaceful Mediator",
            "You prefer gentle approaches and giving people space. You excel at reducing tension and maintaining calm.",
            Tone::Compassionate,
        ),
    };

    ConflictStyle {
        style: style.to_string(),
        description: description.to_string(),
        recommended_tone: tone.as_str().to_string(),
    }
}

/// Most frequent answer.
///
/// Distinct answers are compared in first-seen order and the leader is only
/// kept when strictly ahead, so a tie goes to the answer seen later.
fn dominant(answers: &[QuizAnswer]) -> Option<QuizAnswer> {
    let mut counts: Vec<(QuizAnswer, usize)> = Vec::new();
    for answer in answers {
        match counts.iter_mut().find(|(seen, _)| seen == answer) {
            Some((_, count)) => *count += 1,
            None => counts.push((*answer, 1)),
        }
    }

    counts
        .into_iter()
        .reduce(|leader, next| if leader.1 > next.1 { leader } else { next })
        .map(|(answer, _)| answer)
}

/// Resolve a full set of answers (one per question) into a conflict style.
pub fn resolve_style(answers: &[QuizAnswer]) -> Result<ConflictStyle, QuizError> {
    if answers.len() < QUESTIONS.len() {
        return Err(QuizError::Incomplete {
            answered: answers.len(),
            expected: QUESTIONS.len(),
        });
    }

    let answer = dominant(answers).ok_or(QuizError::Incomplete {
        answered: 0,
        expected: QUESTIONS.len(),
    })?;
    Ok(style_for(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mendit_types::quiz::QuizAnswer::*;

    #[test]
    fn test_clear_majority() {
        let style = resolve_style(&[Direct, Direct, Collaborator, Direct, Direct]).unwrap();
        assert_eq!(style.style, "The Direct Communicator");
        assert_eq!(style.recommended_tone, "direct");
    }

    #[test]
    fn test_tie_goes_to_later_seen_answer() {
        // harmonizer and avoider both have two; avoider was seen later.
        let style = resolve_style(&[Harmonizer, Avoider, Harmonizer, Avoider, Direct]).unwrap();
        assert_eq!(style.style, "The Peaceful Mediator");

        let style = resolve_style(&[Avoider, Harmonizer, Avoider, Harmonizer, Direct]).unwrap();
        assert_eq!(style.style, "The Harmonizer");
    }

    #[test]
    fn test_leader_survives_later_smaller_counts() {
        let style = resolve_style(&[Collaborator, Collaborator, Collaborator, Direct, Avoider]).unwrap();
        assert_eq!(style.style, "The Collaborator");
        assert_eq!(style.recommended_tone, "formal");
    }

    #[test]
    fn test_incomplete_answers_rejected() {
        assert_eq!(
            resolve_style(&[]),
            Err(QuizError::Incomplete {
                answered: 0,
                expected: 5
            })
        );
        assert!(resolve_style(&[Direct, Direct]).is_err());
    }

    #[test]
    fn test_style_profiles() {
        assert_eq!(style_for(Harmonizer).recommended_tone, "compassionate");
        assert_eq!(style_for(Avoider).recommended_tone, "compassionate");
        assert!(style_for(Collaborator).description.starts_with("You focus on finding win-win"));
    }
}
