//! Rule-based emotion classification.
//!
//! [`EmotionAnalyzer`] scores a message against hand-written regex patterns
//! and word lists and returns an [`AnalysisResult`]: a primary label, a
//! confidence, the full [`ScoreVector`] and an optional mixed emotion.

mod analyzer;
mod category;
pub mod implicit;
pub mod lexicon;
pub mod overrides;
pub mod patterns;
mod scores;

pub use analyzer::{AnalysisResult, CONTINUITY_WINDOW, EmotionAnalyzer};
pub use category::{EmotionCategory, UnknownEmotion};
pub use scores::ScoreVector;
