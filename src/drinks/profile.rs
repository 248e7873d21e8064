//! Trait tally built up while the questionnaire runs.

use rand::Rng;
use rand::seq::SliceRandom;

use super::catalog::DrinkStyle;
use super::questionnaire::{QUESTIONS, Question, find_question};
use super::recommender::{self, Recommendation};
use crate::emotion::EmotionCategory;

/// Answers needed before a recommendation is made.
pub const QUESTIONS_FOR_PROFILE: usize = 2;

/// What we know about the drinker so far.
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkProfile {
    /// Trait counts in first-seen order.
    traits: Vec<(DrinkStyle, u32)>,
    emotion: EmotionCategory,
    asked: Vec<&'static str>,
}

impl Default for DrinkProfile {
    fn default() -> Self {
        Self {
            traits: Vec::new(),
            emotion: EmotionCategory::Neutral,
            asked: Vec::new(),
        }
    }
}

impl DrinkProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn emotion(&self) -> EmotionCategory {
        self.emotion
    }

    pub fn set_emotion(&mut self, emotion: EmotionCategory) {
        self.emotion = emotion;
    }

    /// Texts of the questions handed out so far.
    pub fn questions_asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Random question not yet asked, recorded as asked. `None` once every
    /// question is used.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static Question> {
        let remaining: Vec<&'static Question> = QUESTIONS
            .iter()
            .filter(|q| !self.asked.contains(&q.text))
            .collect();
        let question = *remaining.choose(rng)?;
        self.asked.push(question.text);
        Some(question)
    }

    /// Tally the traits of the option best matching `answer`. Returns
    /// `false` only when `question` is not one of ours.
    pub fn process_answer(&mut self, question: &str, answer: &str) -> bool {
        let Some(q) = find_question(question) else {
            return false;
        };
        let option = q.match_answer(answer);
        for &t in &option.traits {
            self.bump(t);
        }
        tracing::debug!(question, option = option.text, "drink answer matched");
        true
    }

    pub fn is_complete(&self) -> bool {
        self.asked.len() >= QUESTIONS_FOR_PROFILE
    }

    pub fn has_traits(&self) -> bool {
        !self.traits.is_empty()
    }

    /// Up to two most frequent traits; ties keep first-seen order.
    pub fn top_traits(&self) -> Vec<DrinkStyle> {
        let mut sorted = self.traits.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().take(2).map(|(t, _)| t).collect()
    }

    pub fn trait_count(&self, style: DrinkStyle) -> u32 {
        self.traits
            .iter()
            .find(|(t, _)| *t == style)
            .map_or(0, |(_, n)| *n)
    }

    /// Build a recommendation from the current tally and emotion.
    pub fn recommend<R: Rng + ?Sized>(&self, rng: &mut R) -> Recommendation {
        recommender::recommend(self, rng)
    }

    fn bump(&mut self, style: DrinkStyle) {
        match self.traits.iter_mut().find(|(t, _)| *t == style) {
            Some((_, n)) => *n += 1,
            None => self.traits.push((style, 1)),
        }
    }
}
