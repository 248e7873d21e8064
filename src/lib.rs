//! moodbar: a rule-based emotion chatbot with a cocktail questionnaire.
//!
//! Each message is scored against 42 emotion categories using regex
//! pattern tables, a small lexicon and recent conversation history. The
//! strongest emotion picks a reply template and an image. Drink requests
//! switch the conversation into a short questionnaire that ends in a
//! cocktail recommendation.
//!
//! # Architecture
//!
//! - **emotion**: scoring pipeline producing an [`AnalysisResult`]
//! - **dialogue**: greeting and question detection, topics, reply templates
//! - **drinks**: questionnaire, trait profile and recommender
//! - **session**: per-conversation state threaded through each turn
//! - **chat**: [`ChatEngine`] tying the above together
//! - **conversation_log**: best-effort SQLite log of answered messages

pub mod assets;
pub mod chat;
pub mod config;
pub mod conversation_log;
pub mod dialogue;
pub mod drinks;
pub mod emotion;
pub mod error;
pub mod session;

pub use chat::{ChatEngine, ChatReply};
pub use config::ChatConfig;
pub use emotion::{AnalysisResult, EmotionAnalyzer, EmotionCategory, ScoreVector};
pub use error::{ChatError, Result};
pub use session::SessionContext;
