#![allow(clippy::unwrap_used, clippy::expect_used)]

use moodbar::chat::TOAST;
use moodbar::dialogue::templates::GREETINGS;
use moodbar::{ChatConfig, ChatEngine, ChatError, EmotionCategory};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn quiet_engine() -> ChatEngine {
    let mut config = ChatConfig::default();
    config.replies.show_breakdown = false;
    ChatEngine::new(config)
}

#[test]
fn greeting_gets_a_greeting() {
    let engine = quiet_engine();
    let mut rng = StdRng::seed_from_u64(1);
    let (_, reply) = engine.process(engine.new_session(), "Hello there", &mut rng);
    assert!(GREETINGS.contains(&reply.response.as_str()), "{}", reply.response);
    assert!(!reply.hide_emotion);
}

#[test]
fn topical_question_on_first_turn_gets_topic_reply() {
    let engine = quiet_engine();
    let mut rng = StdRng::seed_from_u64(2);
    let (session, reply) = engine.process(
        engine.new_session(),
        "Is my computer software up to date?",
        &mut rng,
    );
    assert!(
        reply
            .response
            .ends_with("Is there something specific about technology you'd like to discuss?"),
        "{}",
        reply.response
    );
    assert_eq!(session.current_topic.as_str(), "technology");
}

#[test]
fn breakdown_lists_percentages() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(3);
    let (_, reply) = engine.process(engine.new_session(), "I'm so happy today!", &mut rng);
    let (_, breakdown) = reply
        .response
        .split_once("\n\nDetected emotions: ")
        .expect("breakdown appended");
    let parts: Vec<&str> = breakdown.split(", ").collect();
    assert!(!parts.is_empty() && parts.len() <= 5);
    assert!(parts.iter().all(|p| p.ends_with('%') && p.contains(": ")));
}

#[test]
fn toast_leaves_session_untouched() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(4);
    let session = engine.new_session();
    let (after, reply) = engine.process(session.clone(), TOAST, &mut rng);
    assert_eq!(after, session);
    assert_eq!(reply.emotion, EmotionCategory::Joy);
    assert!(reply.response.starts_with("Наздраве!"));
}

#[test]
fn invalid_input_is_rejected() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(5);
    let long = "x".repeat(5001);
    for msg in ["", "   \n", long.as_str()] {
        let result = engine.handle(engine.new_session(), msg, &mut rng);
        assert!(matches!(result, Err(ChatError::InvalidInput(_))));
    }
}

#[test]
fn session_tracks_turns_up_to_its_limit() {
    let mut config = ChatConfig::default();
    config.session.history_limit = 2;
    let engine = ChatEngine::new(config);
    let mut rng = StdRng::seed_from_u64(6);

    let mut session = engine.new_session();
    for msg in ["I'm sad", "Still sad", "A little better now"] {
        let (next, reply) = engine.handle(session, msg, &mut rng).expect("valid input");
        assert_eq!(next.current_emotion, reply.emotion);
        session = next;
    }
    assert_eq!(session.messages(), ["Still sad", "A little better now"]);
    assert_eq!(session.emotion_history().len(), 2);
}

#[test]
fn reply_serializes_for_clients() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(7);
    let (_, reply) = engine.process(engine.new_session(), "I'm furious!", &mut rng);
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(json["emotion"], reply.emotion.as_str());
    assert!(json["all_emotions"].is_object());
    assert_eq!(json["hide_emotion"], false);
}
