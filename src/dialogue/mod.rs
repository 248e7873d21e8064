//! Canned replies chosen from the detected emotion and topic.
//!
//! Greetings win over everything else. Questions get a topic reply,
//! acknowledging the emotion from two turns back when there was one.
//! Statements get a random template from the emotion's bank.

pub mod templates;
mod topic;

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::emotion::EmotionCategory;

pub use templates::{DEFAULT_FALLBACK, fallback_reply};
pub use topic::{Topic, identify_topic};

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            // SAFETY: static literal.
            #[allow(clippy::expect_used)]
            Regex::new(p).expect("valid regex")
        })
        .collect()
}

static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(hi|hello|hey|greetings|howdy)\b",
        r"\b(good) (morning|afternoon|evening|day)\b",
        r"\b(how are you|how's it going|what's up|how do you do)\b",
    ])
});

static QUESTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(what|who|where|when|why|how)\b.+\?",
        r"\b(can|could|would|should|do|does|did|is|are|was|were)\b.+\?",
        r"\?$",
    ])
});

/// True when the lowercased message looks like a greeting.
pub fn is_greeting(message: &str) -> bool {
    let lower = message.to_lowercase();
    GREETING_PATTERNS.iter().any(|re| re.is_match(&lower))
}

/// True when the message reads as a question. Case-sensitive.
pub fn is_question(message: &str) -> bool {
    QUESTION_PATTERNS.iter().any(|re| re.is_match(message))
}

/// Pick a reply for `message`.
///
/// `history` holds the session emotions of earlier turns (oldest first), not
/// including the emotion of this message.
pub fn respond<R: Rng + ?Sized>(
    message: &str,
    emotion: EmotionCategory,
    topic: Topic,
    history: &[EmotionCategory],
    rng: &mut R,
) -> String {
    if is_greeting(message) {
        return pick(templates::GREETINGS, rng)
            .unwrap_or(templates::ELABORATION_PROMPT)
            .to_string();
    }

    if is_question(message) {
        return answer_question(topic, history, rng);
    }

    pick(templates::emotion_bank(emotion), rng)
        .unwrap_or(templates::ELABORATION_PROMPT)
        .to_string()
}

fn answer_question<R: Rng + ?Sized>(
    topic: Topic,
    history: &[EmotionCategory],
    rng: &mut R,
) -> String {
    if history.len() > 1 {
        let earlier = history[history.len() - 2];
        if !earlier.is_neutral()
            && let Some(ack) = pick(templates::emotion_bank(earlier), rng)
        {
            let follow_up = templates::topic_reply(topic).unwrap_or(templates::FOLLOW_UP);
            return format!("{ack} {follow_up}");
        }
    }

    match templates::topic_reply(topic) {
        Some(reply) => {
            format!("{reply} Is there something specific about {topic} you'd like to discuss?")
        }
        None => templates::OPEN_QUESTION.to_string(),
    }
}

fn pick<R: Rng + ?Sized>(options: &'static [&'static str], rng: &mut R) -> Option<&'static str> {
    options.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::emotion::EmotionCategory::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn greeting_beats_everything() {
        let reply = respond("Hey, how are you?", Joy, Topic::General, &[], &mut rng());
        assert!(templates::GREETINGS.contains(&reply.as_str()));
    }

    #[test]
    fn greeting_needs_word_boundary() {
        assert!(!is_greeting("this is a thing"));
        assert!(is_greeting("Good morning"));
    }

    #[test]
    fn question_without_history_uses_topic() {
        let reply = respond("Where should I study?", Neutral, Topic::Education, &[], &mut rng());
        assert!(reply.starts_with("Learning opens so many doors."));
        assert!(reply.ends_with("Is there something specific about education you'd like to discuss?"));
    }

    #[test]
    fn question_acknowledges_earlier_emotion() {
        let history = [Sadness, Neutral];
        let reply = respond("Is it going to rain?", Neutral, Topic::General, &history, &mut rng());
        let ack = templates::emotion_bank(Sadness)
            .iter()
            .find(|t| reply.starts_with(*t))
            .expect("sadness acknowledgement");
        assert_eq!(
            &reply[ack.len() + 1..],
            templates::topic_reply(Topic::General).unwrap()
        );
    }

    #[test]
    fn neutral_earlier_emotion_is_not_acknowledged() {
        let history = [Neutral, Joy];
        let reply = respond("Is it going to rain?", Joy, Topic::General, &history, &mut rng());
        assert!(reply.starts_with("I'm here to help."));
    }

    #[test]
    fn bankless_earlier_emotion_falls_through() {
        let history = [Relief, Joy];
        let reply = respond("Is it going to rain?", Joy, Topic::General, &history, &mut rng());
        assert!(reply.starts_with("I'm here to help."));
    }

    #[test]
    fn drinks_topic_question_is_open() {
        let reply = respond("Why?", Neutral, Topic::Drinks, &[], &mut rng());
        assert_eq!(reply, templates::OPEN_QUESTION);
    }

    #[test]
    fn statement_uses_emotion_bank() {
        let reply = respond("I passed the exam", Achievement, Topic::General, &[], &mut rng());
        assert!(templates::emotion_bank(Achievement).contains(&reply.as_str()));
    }

    #[test]
    fn statement_without_bank_asks_for_more() {
        let reply = respond("It is done", Relief, Topic::General, &[], &mut rng());
        assert_eq!(reply, templates::ELABORATION_PROMPT);
    }

    #[test]
    fn question_detection() {
        assert!(is_question("what time is it?"));
        assert!(is_question("Really?"));
        assert!(!is_question("I wonder what time it is"));
    }
}
