#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use moodbar::drinks::catalog::CLOSING_MARKERS;
use moodbar::drinks::{Cocktail, QUESTIONS_FOR_PROFILE};
use moodbar::session::DrinkState;
use moodbar::{ChatEngine, ChatReply, EmotionCategory, SessionContext};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Answer whatever question is pending with its first option.
fn answer_pending(
    engine: &ChatEngine,
    session: SessionContext,
    rng: &mut StdRng,
) -> (SessionContext, ChatReply) {
    let DrinkState::AskingQuestions { question } = session.drink_state else {
        panic!("no question pending");
    };
    let answer = question.options[0].text;
    engine.process(session, answer, rng)
}

fn run_questionnaire(seed: u64, opening: &str) -> (SessionContext, ChatReply) {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(seed);

    let (mut session, first) = engine.process(engine.new_session(), opening, &mut rng);
    assert!(first.hide_emotion);
    assert!(first.response.contains("answer a few questions"), "{}", first.response);

    let mut last = first;
    for _ in 0..QUESTIONS_FOR_PROFILE {
        let (next, reply) = answer_pending(&engine, session, &mut rng);
        session = next;
        last = reply;
    }
    (session, last)
}

#[test]
fn questionnaire_ends_in_a_recommendation() {
    let (session, reply) = run_questionnaire(11, "Can you recommend a drink?");

    assert_eq!(session.drink_state, DrinkState::Idle);
    assert!(reply.hide_emotion);
    assert!(reply.image.starts_with("/static/alcohol/"), "{}", reply.image);
    assert!(
        Cocktail::ALL.iter().any(|c| reply.response.contains(c.name())),
        "{}",
        reply.response
    );
    assert!(
        CLOSING_MARKERS.iter().any(|m| reply.response.contains(m)),
        "{}",
        reply.response
    );
}

#[test]
fn middle_turn_asks_the_next_question() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(12);
    let (session, _) = engine.process(engine.new_session(), "suggest a drink", &mut rng);
    let (session, reply) = answer_pending(&engine, session, &mut rng);

    assert!(reply.response.starts_with("Thanks! "), "{}", reply.response);
    assert!(session.in_drink_flow());
    assert_eq!(session.drink_profile.questions_asked().len(), 2);
}

#[test]
fn profile_resets_after_recommendation() {
    let (session, _) = run_questionnaire(13, "I need something to drink");
    assert!(!session.drink_profile.has_traits());
    assert!(session.drink_profile.questions_asked().is_empty());
    assert!(!session.in_drink_flow());
}

#[test]
fn second_request_starts_a_fresh_questionnaire() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(14);
    let (session, _) = run_questionnaire(14, "Can you recommend a drink?");
    let (session, reply) = engine.process(session, "recommend another drink", &mut rng);
    assert!(reply.response.contains("answer a few questions"), "{}", reply.response);
    assert!(session.in_drink_flow());
}

#[test]
fn drink_turns_report_the_session_mood() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(15);

    let (session, sad) = engine.process(engine.new_session(), "I feel so sad and lonely", &mut rng);
    let mood = sad.emotion;
    assert_ne!(mood, EmotionCategory::Neutral);

    let (_, reply) = engine.process(session, "Can you recommend a drink?", &mut rng);
    assert_eq!(reply.emotion, mood);
    assert!((reply.confidence - 0.8).abs() < 1e-9);
    assert!((reply.all_emotions.get(mood) - 0.8).abs() < 1e-9);
    assert!((reply.all_emotions.get(EmotionCategory::Neutral) - 0.2).abs() < 1e-9);
}

#[test]
fn every_reply_in_the_flow_hides_emotion() {
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(16);
    let (mut session, reply) =
        engine.process(engine.new_session(), "what cocktail should I have?", &mut rng);
    assert!(reply.hide_emotion);
    while session.in_drink_flow() {
        let (next, reply) = answer_pending(&engine, session, &mut rng);
        assert!(reply.hide_emotion);
        session = next;
    }
}
