//! Cocktail questionnaire.
//!
//! A drink request starts a short questionnaire; each answer tallies
//! personality traits on a [`DrinkProfile`], and once enough questions are
//! answered the profile (plus the current mood) picks a [`Cocktail`].

pub mod catalog;
mod profile;
pub mod questionnaire;
mod recommender;

use std::sync::LazyLock;

use regex::Regex;

pub use catalog::{Cocktail, DrinkStyle};
pub use profile::{DrinkProfile, QUESTIONS_FOR_PROFILE};
pub use questionnaire::{AnswerOption, Question};
pub use recommender::Recommendation;

static DRINK_REQUEST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(recommend|suggest|what|which).*?(drink|alcohol|cocktail|beer|wine|whiskey|vodka)\b",
        r"(?i)\b(what|which).*?(drink|alcohol|cocktail|beer|wine|whiskey|vodka).*?(should|would|could|can).*?(i|we).*?(have|try|drink|get)\b",
        r"(?i)\b(i|we).*?(want|need|would like).*?(a|some|to get).*?(drink|alcohol|cocktail|beer|wine|whiskey|vodka)\b",
        r"(?i)\b(i|we).*?(want|need|would like).*?(something).*?(to drink|to have)\b",
        r"(?i)\b(help me|tell me).*?(choose|pick|select|find).*?(a|some).*?(drink|alcohol|cocktail|beer|wine|whiskey|vodka)\b",
        r"(?i)\bcan you recommend a drink\b",
        r"(?i)\brecommend.*?drink\b",
        r"(?i)\bdrink recommendation\b",
        r"(?i)\bsuggest.*?drink\b",
    ]
    .iter()
    .map(|p| {
        // SAFETY: static literal.
        #[allow(clippy::expect_used)]
        Regex::new(p).expect("valid regex")
    })
    .collect()
});

/// True when the message asks for a drink.
pub fn is_drink_request(message: &str) -> bool {
    let lower = message.to_lowercase();
    DRINK_REQUEST_PATTERNS.iter().any(|re| re.is_match(&lower))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn recognises_drink_requests() {
        for msg in [
            "Can you recommend a drink?",
            "What cocktail should I have tonight?",
            "I would like a beer",
            "I need something to drink",
            "Help me pick a whiskey",
            "drink recommendation please",
        ] {
            assert!(is_drink_request(msg), "{msg}");
        }
    }

    #[test]
    fn ordinary_messages_are_not_drink_requests() {
        for msg in ["I passed my exam!", "How are you?", "The weather is nice"] {
            assert!(!is_drink_request(msg), "{msg}");
        }
    }
}
