//! Built-in geography question set.

use std::sync::LazyLock;

use super::{ChoiceId, Question};

static GEOGRAPHY: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            "What is the capital of Australia?",
            ["Sydney", "Melbourne", "Canberra", "Perth"],
            ChoiceId::C,
            "Canberra was chosen as a compromise between Sydney and Melbourne.",
        ),
        Question::new(
            "Which river is the longest in the world by length (most cited)?",
            ["Nile", "Amazon", "Yangtze", "Mississippi–Missouri"],
            ChoiceId::A,
            "Nile vs. Amazon is debated, but Nile is most commonly cited in textbooks.",
        ),
        Question::new(
            "Which country has the most natural lakes?",
            ["Canada", "Finland", "Russia", "United States"],
            ChoiceId::A,
            "Canada has more than half of the world’s natural lakes.",
        ),
        Question::new(
            "Mount Kilimanjaro is in which country?",
            ["Kenya", "Tanzania", "Uganda", "Ethiopia"],
            ChoiceId::B,
            "Kilimanjaro is in northern Tanzania, near the Kenyan border.",
        ),
        Question::new(
            "Which desert is the largest hot desert?",
            ["Gobi", "Kalahari", "Sahara", "Arabian"],
            ChoiceId::C,
            "Sahara is the largest hot desert (Antarctica and Arctic are cold deserts).",
        ),
        Question::new(
            "Which sea separates Europe and Africa?",
            ["Baltic Sea", "Mediterranean Sea", "Black Sea", "Red Sea"],
            ChoiceId::B,
            "The Mediterranean lies between southern Europe and northern Africa.",
        ),
        Question::new(
            "Which country does NOT border Germany?",
            ["Denmark", "Netherlands", "Ukraine", "Czechia"],
            ChoiceId::C,
            "Germany borders 9 countries; Ukraine is not one of them.",
        ),
        Question::new(
            "What is the smallest country in the world by area?",
            ["Monaco", "Vatican City", "Nauru", "San Marino"],
            ChoiceId::B,
            "Vatican City is ~0.49 km², the smallest by area and population.",
        ),
        Question::new(
            "Which city is furthest south?",
            ["Cape Town", "Buenos Aires", "Sydney", "Auckland"],
            ChoiceId::D,
            "Auckland (~37°S) is further south than Sydney (~34°S), Cape Town (~34°S), Buenos Aires (~34.6°S).",
        ),
        Question::new(
            "Which country has the largest population?",
            ["United States", "India", "China", "Indonesia"],
            ChoiceId::B,
            "As of mid-2020s, India slightly exceeds China in population.",
        ),
    ]
});

/// The built-in questions, in the order they are asked.
#[must_use]
pub fn geography() -> &'static [Question] {
    &GEOGRAPHY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::logic::{compute_score, is_correct, validate_choice};
    use crate::quiz::validate_questions;

    #[test]
    fn test_bank_is_valid() {
        assert_eq!(geography().len(), 10);
        assert_eq!(validate_questions(geography()), Ok(()));
    }

    #[test]
    fn test_bank_answer_key() {
        use ChoiceId::{A, B, C, D};
        let key: Vec<ChoiceId> = geography().iter().map(|q| q.correct).collect();
        assert_eq!(key, vec![C, A, A, B, C, B, C, B, D, B]);
    }

    #[test]
    fn test_bank_perfect_run_scores_full() {
        let answers: Vec<ChoiceId> = geography().iter().map(|q| q.correct).collect();
        for (q, answer) in geography().iter().zip(&answers) {
            assert!(validate_choice(&answer.to_string()));
            assert!(is_correct(*answer, q));
        }
        assert_eq!(compute_score(&answers, geography()), 10);
    }

    #[test]
    fn test_bank_options_labeled_in_order() {
        for q in geography() {
            let ids: Vec<ChoiceId> = q.options.iter().map(|o| o.id).collect();
            assert_eq!(ids, ChoiceId::ALL);
        }
    }
}
