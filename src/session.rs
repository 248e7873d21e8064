//! Per-conversation state.
//!
//! A [`SessionContext`] is owned by the caller and threaded through
//! [`crate::chat::ChatEngine::process`]: each turn consumes the old context
//! and hands back the next one.

use crate::dialogue::Topic;
use crate::drinks::{DrinkProfile, Question};
use crate::emotion::EmotionCategory;

/// Messages and emotions kept per session by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Where the drink questionnaire stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrinkState {
    #[default]
    Idle,
    /// Waiting for the answer to `question`.
    AskingQuestions { question: &'static Question },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub current_emotion: EmotionCategory,
    pub current_topic: Topic,
    messages: Vec<String>,
    emotions: Vec<EmotionCategory>,
    pub drink_state: DrinkState,
    pub drink_profile: DrinkProfile,
    history_limit: usize,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session keeping at most `limit` past messages and emotions
    /// (at least one).
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            current_emotion: EmotionCategory::Neutral,
            current_topic: Topic::General,
            messages: Vec::new(),
            emotions: Vec::new(),
            drink_state: DrinkState::Idle,
            drink_profile: DrinkProfile::new(),
            history_limit: limit.max(1),
        }
    }

    /// Past user messages, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Emotions of past turns, oldest first.
    pub fn emotion_history(&self) -> &[EmotionCategory] {
        &self.emotions
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn in_drink_flow(&self) -> bool {
        matches!(self.drink_state, DrinkState::AskingQuestions { .. })
    }

    /// Record a finished turn and return the updated context.
    pub fn after_turn(mut self, message: &str, emotion: EmotionCategory, topic: Topic) -> Self {
        self.current_emotion = emotion;
        self.current_topic = topic;
        self.messages.push(message.to_string());
        self.emotions.push(emotion);
        trim_front(&mut self.messages, self.history_limit);
        trim_front(&mut self.emotions, self.history_limit);
        self
    }
}

fn trim_front<T>(items: &mut Vec<T>, limit: usize) {
    if items.len() > limit {
        let excess = items.len() - limit;
        items.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use EmotionCategory::*;

    #[test]
    fn starts_neutral_and_idle() {
        let s = SessionContext::new();
        assert_eq!(s.current_emotion, Neutral);
        assert_eq!(s.current_topic, Topic::General);
        assert!(!s.in_drink_flow());
        assert!(s.emotion_history().is_empty());
    }

    #[test]
    fn after_turn_appends_history() {
        let s = SessionContext::new()
            .after_turn("hi", Joy, Topic::General)
            .after_turn("my doctor called", Fear, Topic::Health);
        assert_eq!(s.current_emotion, Fear);
        assert_eq!(s.current_topic, Topic::Health);
        assert_eq!(s.emotion_history(), &[Joy, Fear]);
        assert_eq!(s.messages(), &["hi".to_string(), "my doctor called".to_string()]);
    }

    #[test]
    fn history_is_bounded() {
        let mut s = SessionContext::with_history_limit(2);
        for e in [Joy, Sadness, Anger] {
            s = s.after_turn("x", e, Topic::General);
        }
        assert_eq!(s.emotion_history(), &[Sadness, Anger]);
        assert_eq!(s.messages().len(), 2);
    }

    #[test]
    fn zero_limit_keeps_one() {
        let s = SessionContext::with_history_limit(0).after_turn("x", Joy, Topic::General);
        assert_eq!(s.history_limit(), 1);
        assert_eq!(s.emotion_history(), &[Joy]);
    }
}
