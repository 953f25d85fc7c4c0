use mendit_types::quiz::QuizAnswer;

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    pub answer: QuizAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u8,
    pub question: &'static str,
    pub options: [QuizOption; 4],
}

const fn option(text: &'static str, answer: QuizAnswer) -> QuizOption {
    QuizOption { text, answer }
}

/// The fixed five-question quiz. Options are always listed direct,
/// harmonizer, collaborator, avoider.
pub const QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "When conflict arises, I typically...",
        options: [
            option("Address it head-on immediately", QuizAnswer::Direct),
            option("Take time to understand all perspectives", QuizAnswer::Harmonizer),
            option("Try to find a compromise", QuizAnswer::Collaborator),
            option("Avoid confrontation when possible", QuizAnswer::Avoider),
        ],
    },
    QuizQuestion {
        id: 2,
        question: "In heated discussions, I prefer communication that is...",
        options: [
            option("Clear and straightforward", QuizAnswer::Direct),
            option("Gentle and understanding", QuizAnswer::Harmonizer),
            option("Solution-focused", QuizAnswer::Collaborator),
            option("Calm and measured", QuizAnswer::Avoider),
        ],
    },
    QuizQuestion {
        id: 3,
        question: "My main goal in resolving conflict is to...",
        options: [
            option("Get to the truth quickly", QuizAnswer::Direct),
            option("Preserve relationships", QuizAnswer::Harmonizer),
            option("Find the best solution for everyone", QuizAnswer::Collaborator),
            option("Maintain peace and stability", QuizAnswer::Avoider),
        ],
    },
    QuizQuestion {
        id: 4,
        question: "When emotions run high, I...",
        options: [
            option("Push through to resolve things", QuizAnswer::Direct),
            option("Focus on emotional healing first", QuizAnswer::Harmonizer),
            option("Channel emotions into problem-solving", QuizAnswer::Collaborator),
            option("Give everyone space to cool down", QuizAnswer::Avoider),
        ],
    },
    QuizQuestion {
        id: 5,
        question: "I feel most comfortable when mediation is...",
        options: [
            option("Efficient and to the point", QuizAnswer::Direct),
            option("Warm and supportive", QuizAnswer::Harmonizer),
            option("Structured and fair", QuizAnswer::Collaborator),
            option("Gentle and non-confrontational", QuizAnswer::Avoider),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_offers_each_answer_once() {
        for question in &QUESTIONS {
            let answers: Vec<QuizAnswer> = question.options.iter().map(|o| o.answer).collect();
            assert_eq!(answers, QuizAnswer::ALL.to_vec(), "question {}", question.id);
        }
    }
}
