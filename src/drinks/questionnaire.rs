//! Personality questions and free-text answer matching.

use super::catalog::DrinkStyle::{self, *};

/// One multiple-choice option; picking it tallies both traits.
#[derive(Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: &'static str,
    pub traits: [DrinkStyle; 2],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: [AnswerOption; 4],
}

const fn option(text: &'static str, a: DrinkStyle, b: DrinkStyle) -> AnswerOption {
    AnswerOption {
        text,
        traits: [a, b],
    }
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        text: "How do you usually spend your weekends?",
        options: [
            option("Going out with friends", Social, Adventurous),
            option("Relaxing at home", Relaxed, Sweet),
            option("Trying new activities or places", Adventurous, Bold),
            option("Enjoying cultural events", Sophisticated, Social),
        ],
    },
    Question {
        text: "What kind of music do you enjoy most?",
        options: [
            option("Upbeat and energetic", Bold, Social),
            option("Calm and melodic", Relaxed, Sophisticated),
            option("Eclectic and unique", Adventurous, Sophisticated),
            option("Whatever is popular now", Social, Refreshing),
        ],
    },
    Question {
        text: "How would your friends describe you?",
        options: [
            option("Outgoing and the life of the party", Bold, Social),
            option("Calm and dependable", Relaxed, Sophisticated),
            option("Creative and unique", Adventurous, Sophisticated),
            option("Sweet and caring", Sweet, Social),
        ],
    },
];

/// Find a question by its exact text.
pub fn find_question(text: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.text == text)
}

impl Question {
    /// Rendered as the question followed by one `- option` line per choice.
    pub fn prompt(&self) -> String {
        let mut out = self.text.to_string();
        for o in &self.options {
            out.push_str("\n- ");
            out.push_str(o.text);
        }
        out
    }

    /// Best option for a free-text answer. Never fails: tries exact text,
    /// then containment either way, then trait keywords, then the first
    /// option.
    pub fn match_answer(&self, answer: &str) -> &AnswerOption {
        let answer = answer.to_lowercase();

        if let Some(o) = self
            .options
            .iter()
            .find(|o| o.text.to_lowercase() == answer)
        {
            return o;
        }

        if let Some(o) = self.options.iter().find(|o| {
            let text = o.text.to_lowercase();
            text.contains(&answer) || answer.contains(&text)
        }) {
            return o;
        }

        let mut best: Option<(&AnswerOption, usize)> = None;
        for o in &self.options {
            let score: usize = o
                .traits
                .iter()
                .map(|t| t.keywords().iter().filter(|k| answer.contains(*k)).count())
                .sum();
            if score > 0 && best.is_none_or(|(_, s)| score > s) {
                best = Some((o, score));
            }
        }
        if let Some((o, _)) = best {
            return o;
        }

        tracing::debug!(question = self.text, "no option matched answer, using the first");
        &self.options[0]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn weekends() -> &'static Question {
        find_question("How do you usually spend your weekends?").unwrap()
    }

    #[test]
    fn exact_match_ignores_case() {
        assert_eq!(weekends().match_answer("RELAXING AT HOME").text, "Relaxing at home");
    }

    #[test]
    fn containment_either_way() {
        assert_eq!(
            weekends().match_answer("mostly relaxing at home, honestly").text,
            "Relaxing at home"
        );
        assert_eq!(weekends().match_answer("cultural").text, "Enjoying cultural events");
    }

    #[test]
    fn keyword_overlap_picks_highest() {
        // "explore" counts for options one and three; "bold" only for three.
        let o = weekends().match_answer("I like to explore and be bold");
        assert_eq!(o.text, "Trying new activities or places");
    }

    #[test]
    fn keyword_ties_keep_first_option() {
        // "art" is a sophisticated keyword, shared by options two and three.
        let q = find_question("What kind of music do you enjoy most?").unwrap();
        assert_eq!(q.match_answer("i love art").text, "Calm and melodic");
    }

    #[test]
    fn unmatched_answer_falls_back_to_first_option() {
        assert_eq!(weekends().match_answer("zzz").text, "Going out with friends");
    }

    #[test]
    fn prompt_lists_options() {
        let p = weekends().prompt();
        assert!(p.starts_with("How do you usually spend your weekends?\n- Going out"));
        assert_eq!(p.lines().count(), 5);
    }

    #[test]
    fn unknown_question_is_none() {
        assert!(find_question("What is your favourite colour?").is_none());
    }
}
