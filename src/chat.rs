//! One chat turn: validation, routing and the reply record.
//!
//! A turn goes to the drink questionnaire when it is already running or the
//! message asks for a drink; otherwise the message is analysed for emotion
//! and answered from the dialogue templates, with a "Detected emotions"
//! breakdown appended.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::assets;
use crate::config::ChatConfig;
use crate::conversation_log::{ConversationEntry, ConversationLog};
use crate::dialogue::{self, Topic};
use crate::drinks::{self, Question};
use crate::emotion::{AnalysisResult, EmotionAnalyzer, EmotionCategory, ScoreVector};
use crate::error::{ChatError, Result};
use crate::session::{DrinkState, SessionContext};

/// Bulgarian toast answered with a fixed reply.
pub const TOAST: &str = "Наздраве!";
const TOAST_REPLY: &str = "Наздраве! Кой не види дъньце, да не види слънце!";

/// Confidence reported on questionnaire turns, which skip analysis.
const DRINK_TURN_CONFIDENCE: f64 = 0.8;

/// What a caller gets back for one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub emotion: EmotionCategory,
    pub confidence: f64,
    pub image: String,
    pub all_emotions: ScoreVector,
    /// Set on questionnaire turns, where the emotion is not freshly detected.
    pub hide_emotion: bool,
}

impl ChatReply {
    /// Log row for this reply.
    pub fn to_entry(&self, user_message: &str) -> ConversationEntry {
        ConversationEntry::new(user_message, self.response.as_str(), self.emotion)
    }
}

/// Stateless turn processor; all conversation state lives in
/// [`SessionContext`].
#[derive(Debug, Clone, Default)]
pub struct ChatEngine {
    analyzer: EmotionAnalyzer,
    config: ChatConfig,
}

impl ChatEngine {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            analyzer: EmotionAnalyzer::new(),
            config,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Fresh session sized by the configured history limit.
    pub fn new_session(&self) -> SessionContext {
        SessionContext::with_history_limit(self.config.session.history_limit)
    }

    /// Reject empty or oversized messages.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidInput`] describing the problem.
    pub fn validate(&self, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            return Err(ChatError::InvalidInput("message is empty".into()));
        }
        let max = self.config.input.max_message_chars;
        let len = message.chars().count();
        if len > max {
            return Err(ChatError::InvalidInput(format!(
                "message is {len} characters, limit is {max}"
            )));
        }
        Ok(())
    }

    /// Validate, then process.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidInput`] when validation fails; the session
    /// is dropped in that case, so callers that want to keep it should call
    /// [`Self::validate`] first.
    pub fn handle<R: Rng + ?Sized>(
        &self,
        session: SessionContext,
        message: &str,
        rng: &mut R,
    ) -> Result<(SessionContext, ChatReply)> {
        self.validate(message)?;
        Ok(self.process(session, message, rng))
    }

    /// Answer one message and return the next session state.
    pub fn process<R: Rng + ?Sized>(
        &self,
        session: SessionContext,
        message: &str,
        rng: &mut R,
    ) -> (SessionContext, ChatReply) {
        if message.trim() == TOAST {
            return (session, toast_reply());
        }

        if session.in_drink_flow() || drinks::is_drink_request(message) {
            self.drink_turn(session, message, rng)
        } else {
            self.emotion_turn(session, message, rng)
        }
    }

    /// Append `entry` to `log`. Failures are logged and dropped.
    pub fn record(&self, log: &dyn ConversationLog, entry: &ConversationEntry) {
        if let Err(e) = log.append(entry) {
            warn!(error = %e, "failed to record conversation turn");
        }
    }

    // ── Turns ───────────────────────────────────────────────────────────────

    fn emotion_turn<R: Rng + ?Sized>(
        &self,
        session: SessionContext,
        message: &str,
        rng: &mut R,
    ) -> (SessionContext, ChatReply) {
        let history = session.emotion_history();
        let (analysis, recovered) = match self.analyzer.try_analyze(message, history) {
            Ok(a) => (a, false),
            Err(e) => {
                warn!(error = %e, "emotion scoring failed, answering from fallback");
                (self.analyzer.recover(message, history), true)
            }
        };
        let topic = dialogue::identify_topic(message);

        let mut response = if recovered {
            dialogue::fallback_reply(analysis.primary).to_string()
        } else {
            dialogue::respond(message, analysis.primary, topic, history, rng)
        };
        if let Some(breakdown) = self.breakdown(&analysis.scores) {
            response.push_str("\n\nDetected emotions: ");
            response.push_str(&breakdown);
        }

        debug!(emotion = %analysis.primary, %topic, recovered, "emotion turn");

        let AnalysisResult {
            primary,
            confidence,
            scores,
            image,
            ..
        } = analysis;
        let reply = ChatReply {
            response,
            emotion: primary,
            confidence,
            image,
            all_emotions: scores,
            hide_emotion: false,
        };
        (session.after_turn(message, primary, topic), reply)
    }

    fn drink_turn<R: Rng + ?Sized>(
        &self,
        mut session: SessionContext,
        message: &str,
        rng: &mut R,
    ) -> (SessionContext, ChatReply) {
        let emotion = session.current_emotion;
        session.drink_profile.set_emotion(emotion);

        let (response, drink_image) = match session.drink_state {
            DrinkState::Idle => start_questionnaire(&mut session, rng),
            DrinkState::AskingQuestions { question } => {
                continue_questionnaire(&mut session, question, message, rng)
            }
        };

        let all_emotions = if emotion.is_neutral() {
            ScoreVector::one_hot(emotion)
        } else {
            ScoreVector::from_pairs(&[(emotion, 0.8), (EmotionCategory::Neutral, 0.2)])
        };
        let reply = ChatReply {
            response,
            emotion,
            confidence: DRINK_TURN_CONFIDENCE,
            image: drink_image.unwrap_or_else(|| assets::emotion_image(emotion)),
            all_emotions,
            hide_emotion: true,
        };
        (session.after_turn(message, emotion, Topic::Drinks), reply)
    }

    /// "label: NN%" for the strongest emotions, or `None` when disabled or
    /// nothing clears the threshold.
    fn breakdown(&self, scores: &ScoreVector) -> Option<String> {
        let cfg = &self.config.replies;
        if !cfg.show_breakdown {
            return None;
        }
        let parts: Vec<String> = scores
            .ranked()
            .into_iter()
            .filter(|(_, s)| *s > cfg.breakdown_min_score)
            .map(|(c, s)| (c, (s * 100.0).round() as u32))
            .filter(|(_, pct)| *pct > 0)
            .take(cfg.breakdown_limit)
            .map(|(c, pct)| format!("{c}: {pct}%"))
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

fn toast_reply() -> ChatReply {
    let emotion = EmotionCategory::Joy;
    ChatReply {
        response: TOAST_REPLY.to_string(),
        emotion,
        confidence: 0.9,
        image: assets::emotion_image(emotion),
        all_emotions: ScoreVector::from_pairs(&[(emotion, 0.9), (EmotionCategory::Excitement, 0.1)]),
        hide_emotion: false,
    }
}

fn start_questionnaire<R: Rng + ?Sized>(
    session: &mut SessionContext,
    rng: &mut R,
) -> (String, Option<String>) {
    match session.drink_profile.next_question(rng) {
        Some(q) => {
            session.drink_state = DrinkState::AskingQuestions { question: q };
            let text = format!(
                "I'd be happy to recommend a drink for you! To help me make a better \
                 recommendation, please answer a few questions.\n\n{}",
                q.prompt()
            );
            (text, None)
        }
        None => {
            let (text, image) = finish_questionnaire(session, rng);
            (format!("Based on your mood, {text}"), image)
        }
    }
}

fn continue_questionnaire<R: Rng + ?Sized>(
    session: &mut SessionContext,
    question: &'static Question,
    answer: &str,
    rng: &mut R,
) -> (String, Option<String>) {
    if !session.drink_profile.process_answer(question.text, answer) {
        let text = format!(
            "I didn't understand your answer. Please choose one of the options for: {}",
            question.text
        );
        return (text, None);
    }

    if session.drink_profile.is_complete() {
        return finish_questionnaire(session, rng);
    }

    match session.drink_profile.next_question(rng) {
        Some(q) => {
            session.drink_state = DrinkState::AskingQuestions { question: q };
            (format!("Thanks! {}", q.prompt()), None)
        }
        None => finish_questionnaire(session, rng),
    }
}

fn finish_questionnaire<R: Rng + ?Sized>(
    session: &mut SessionContext,
    rng: &mut R,
) -> (String, Option<String>) {
    let rec = session.drink_profile.recommend(rng);
    session.drink_profile.reset();
    session.drink_state = DrinkState::Idle;
    (rec.explanation, Some(rec.image))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::conversation_log::{LogError, SqliteConversationLog};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn validate_rejects_empty_and_long() {
        let engine = ChatEngine::default();
        assert!(matches!(engine.validate("   "), Err(ChatError::InvalidInput(_))));
        assert!(engine.validate(&"a".repeat(5000)).is_ok());
        assert!(matches!(
            engine.validate(&"a".repeat(5001)),
            Err(ChatError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        let mut config = ChatConfig::default();
        config.input.max_message_chars = 3;
        let engine = ChatEngine::new(config);
        assert!(engine.validate("ééé").is_ok());
    }

    #[test]
    fn toast_leaves_session_untouched() {
        let engine = ChatEngine::default();
        let session = engine.new_session();
        let (next, reply) = engine.process(session.clone(), "  Наздраве! ", &mut rng());
        assert_eq!(next, session);
        assert_eq!(reply.response, TOAST_REPLY);
        assert_eq!(reply.emotion, EmotionCategory::Joy);
        assert!(!reply.hide_emotion);
    }

    #[test]
    fn emotion_turn_appends_breakdown() {
        let engine = ChatEngine::default();
        let (next, reply) = engine.process(engine.new_session(), "Happy.", &mut rng());
        assert_eq!(reply.emotion, EmotionCategory::Joy);
        assert!(reply.response.contains("\n\nDetected emotions: joy: "));
        assert!(!reply.hide_emotion);
        assert_eq!(next.emotion_history(), &[EmotionCategory::Joy]);
    }

    #[test]
    fn breakdown_can_be_disabled() {
        let mut config = ChatConfig::default();
        config.replies.show_breakdown = false;
        let engine = ChatEngine::new(config);
        let (_, reply) = engine.process(engine.new_session(), "Happy.", &mut rng());
        assert!(!reply.response.contains("Detected emotions"));
    }

    #[test]
    fn breakdown_skips_tiny_scores_and_limits_entries() {
        let engine = ChatEngine::default();
        let scores = ScoreVector::from_pairs(&[
            (EmotionCategory::Joy, 0.5),
            (EmotionCategory::Fear, 0.2),
            (EmotionCategory::Anger, 0.1),
            (EmotionCategory::Love, 0.1),
            (EmotionCategory::Pride, 0.05),
            (EmotionCategory::Relief, 0.045),
            (EmotionCategory::Panic, 0.005),
        ]);
        let text = engine.breakdown(&scores).unwrap();
        assert_eq!(text, "joy: 50%, fear: 20%, anger: 10%, love: 10%, pride: 5%");
    }

    #[test]
    fn drink_request_starts_questionnaire() {
        let engine = ChatEngine::default();
        let (next, reply) =
            engine.process(engine.new_session(), "Can you recommend a drink?", &mut rng());
        assert!(reply.hide_emotion);
        assert!(reply.response.starts_with("I'd be happy to recommend a drink for you!"));
        assert!(next.in_drink_flow());
        assert_eq!(next.current_topic, Topic::Drinks);
        assert_eq!(reply.confidence, DRINK_TURN_CONFIDENCE);
    }

    #[test]
    fn drink_turn_reports_current_emotion() {
        let engine = ChatEngine::default();
        let mut session = engine.new_session();
        session.current_emotion = EmotionCategory::Sadness;
        let (_, reply) = engine.process(session, "recommend me a drink", &mut rng());
        assert_eq!(reply.emotion, EmotionCategory::Sadness);
        assert!((reply.all_emotions.get(EmotionCategory::Sadness) - 0.8).abs() < 1e-12);
        assert!((reply.all_emotions.get(EmotionCategory::Neutral) - 0.2).abs() < 1e-12);
        assert_eq!(reply.image, assets::emotion_image(EmotionCategory::Sadness));
    }

    #[derive(Default)]
    struct FailingLog;

    impl ConversationLog for FailingLog {
        fn append(&self, _entry: &ConversationEntry) -> std::result::Result<(), LogError> {
            Err(LogError::Lock("poisoned".into()))
        }

        fn recent(&self, _limit: usize) -> std::result::Result<Vec<ConversationEntry>, LogError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn record_swallows_log_failures() {
        let engine = ChatEngine::default();
        let entry = ConversationEntry::new("hi", "hello", EmotionCategory::Neutral);
        engine.record(&FailingLog, &entry);
    }

    #[test]
    fn record_appends_reply_entry() {
        let engine = ChatEngine::default();
        let log = SqliteConversationLog::in_memory().expect("open log");
        let (_, reply) = engine.process(engine.new_session(), "Happy.", &mut rng());
        engine.record(&log, &reply.to_entry("Happy."));
        let rows = log.recent(10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].emotion, EmotionCategory::Joy);
        assert_eq!(rows[0].bot_response, reply.response);
    }
}
