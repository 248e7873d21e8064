#![allow(clippy::unwrap_used, clippy::expect_used)]

use moodbar::ChatEngine;
use moodbar::conversation_log::{ConversationLog, SqliteConversationLog};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn engine_turns_are_logged_and_survive_reopen() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let engine = ChatEngine::default();
    let mut rng = StdRng::seed_from_u64(21);

    {
        let log = SqliteConversationLog::new(dir.path()).expect("open log");
        let mut session = engine.new_session();
        for msg in ["Hi!", "I got the promotion!", "Can you recommend a drink?"] {
            let (next, reply) = engine.handle(session, msg, &mut rng).expect("valid input");
            session = next;
            let mut entry = reply.to_entry(msg);
            entry.ip_address = Some("10.0.0.7".into());
            engine.record(&log, &entry);
        }
    }

    let log = SqliteConversationLog::new(dir.path()).expect("reopen log");
    let rows = log.recent(10).expect("recent");
    let messages: Vec<_> = rows.iter().map(|r| r.user_message.as_str()).collect();
    assert_eq!(messages, ["Hi!", "I got the promotion!", "Can you recommend a drink?"]);
    assert!(rows.iter().all(|r| r.ip_address.as_deref() == Some("10.0.0.7")));
    assert!(rows.iter().all(|r| !r.bot_response.is_empty()));
}

#[test]
fn logged_emotion_matches_reply() {
    let engine = ChatEngine::default();
    let log = SqliteConversationLog::in_memory().expect("open log");
    let mut rng = StdRng::seed_from_u64(22);

    let (_, reply) = engine.process(engine.new_session(), "I'm terrified of the dark", &mut rng);
    engine.record(&log, &reply.to_entry("I'm terrified of the dark"));

    let rows = log.recent(1).expect("recent");
    assert_eq!(rows[0].emotion, reply.emotion);
    assert_eq!(rows[0].bot_response, reply.response);
}
