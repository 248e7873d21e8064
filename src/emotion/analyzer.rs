//! Turns a message (plus recent session emotions) into an [`AnalysisResult`].
//!
//! The pipeline runs in fixed stages:
//!
//! 1. pinned overrides for known-tricky phrasings,
//! 2. per-sentence pattern scoring with later sentences weighted up,
//! 3. lexicon polarity with negation and intensity modifiers,
//! 4. a low-signal pass (implicit cues, punctuation, subtle words, a looser
//!    pattern pass) when nothing stands out,
//! 5. continuity with the last few session emotions,
//! 6. tiered reweighting, neutral demotion and mixed-emotion selection,
//! 7. a confidence estimate.
//!
//! The full pass is fallible; [`EmotionAnalyzer::analyze`] degrades to a plain
//! pattern count and finally to neutral instead of surfacing an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, error, warn};

use super::category::EmotionCategory::{self, *};
use super::overrides::{self, Override};
use super::patterns::{PATTERN_BASE, registry};
use super::scores::ScoreVector;
use super::{implicit, lexicon};
use crate::assets;
use crate::error::{ChatError, Result};

// ── Tuning ──────────────────────────────────────────────────────────────────

/// Extra weight on non-neutral matches in the sentence pass.
const SENTENCE_BOOST: f64 = 1.2;
/// Extra weight on non-neutral matches in the whole-message pass.
const MESSAGE_BOOST: f64 = 1.1;

/// Every score below this counts as "nothing stands out".
const LOW_SIGNAL: f64 = 0.2;
const IMPLICIT_WEIGHT: f64 = 0.5;
/// Messages at or below this many characters skip the punctuation cues.
const STRUCTURAL_MIN_CHARS: usize = 15;
const PUNCTUATION_CUE: f64 = 0.08;
const ELLIPSIS_CUE: f64 = 0.05;
const EMOJI_CUE: f64 = 0.05;
const COMMON_EMOTION_BOOST: f64 = 0.1;
const SUBTLE_CUE: f64 = 0.1;
const LOOSE_MATCH: f64 = 0.2;
const LOOSE_SELF_HARM: f64 = 1.5;
const LOOSE_WEIGHT: f64 = 0.7;
const NEUTRAL_FLOOR_TRIGGER: f64 = 0.08;
const NEUTRAL_FLOOR: f64 = 0.2;

/// How many trailing session emotions feed continuity.
pub const CONTINUITY_WINDOW: usize = 3;
const CONTINUITY_PER_OCCURRENCE: f64 = 0.05;
const CONTINUITY_LAST: f64 = 0.08;
const CONTINUITY_NEUTRAL_DAMPING: f64 = 0.2;
const CONTINUITY_DESPERATION_DAMPING: f64 = 0.05;
const TREND_BONUS: f64 = 0.1;
const STREAK_MAX: f64 = 0.3;
const STREAK_NEUTRAL_DAMPING: f64 = 0.7;

const NEUTRAL_SWAP_RATIO: f64 = 0.7;
const NEUTRAL_SWAP_DEEP_RATIO: f64 = 0.65;
const MIXED_RATIO: f64 = 0.7;
const MIXED_MIN: f64 = 0.15;
const MIXED_ALT_RATIO: f64 = 0.65;
const MIXED_ALT_MIN: f64 = 0.12;
const MIXED_LIGHT_RATIO: f64 = 0.6;

const CONFIDENCE_CAP: f64 = 0.85;
const CONFIDENCE_MAX: f64 = 0.9;
const CONFIDENCE_FLOOR: f64 = 0.4;
const DOMINANCE_RATIO: f64 = 1.5;
const SIMPLE_CONFIDENCE: f64 = 0.3;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: static literal.
    #[allow(clippy::expect_used)]
    Regex::new(r"[.!?]+").expect("valid regex")
});

const CUE_EMOJI: &[char] = &['😊', '😢', '😡', '😲', '😍', '🙄', '😕', '😔'];

const EXCLAMATION_TARGETS: &[EmotionCategory] = &[Excitement, Joy, Anger, Surprise];
const QUESTION_TARGETS: &[EmotionCategory] = &[Curious, Confusion];
const ELLIPSIS_TARGETS: &[EmotionCategory] = &[Sadness, Confusion, Anticipation];
const COMMON_EMOTIONS: &[EmotionCategory] = &[
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Love,
    Disgust,
    Achievement,
    Disappointment,
    Panic,
    Relief,
    Curious,
];

const SUBTLE_INDICATORS: &[(EmotionCategory, &[&str])] = &[
    (Joy, &["good", "nice", "well", "fine", "ok", "okay", "alright", "cool"]),
    (Sadness, &["sigh", "oh well", "whatever", "meh", "not great"]),
    (Anger, &["seriously", "really", "come on", "oh come on"]),
    (Surprise, &["oh", "huh", "wait", "what"]),
    (Confusion, &["um", "hmm", "err", "uh"]),
    (Anticipation, &["hope", "hopefully", "maybe", "perhaps"]),
    (
        Optimism,
        &[
            "believe", "faith", "trust", "confident", "promising", "potential", "opportunity",
            "opportunities", "possibilities", "progress", "growth", "improvement", "better",
            "brighter", "positive", "succeed", "success", "achieve", "accomplish", "overcome",
            "prosper", "thrive",
        ],
    ),
];

// ── Result ──────────────────────────────────────────────────────────────────

/// Outcome of analysing one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub primary: EmotionCategory,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub scores: ScoreVector,
    /// Close runner-up, when there is one.
    pub mixed: Option<EmotionCategory>,
    pub image: String,
}

impl AnalysisResult {
    fn from_override(o: &Override) -> Self {
        Self {
            primary: o.primary,
            confidence: o.confidence,
            scores: ScoreVector::from_pairs(o.scores),
            mixed: o.mixed,
            image: assets::emotion_image(o.primary),
        }
    }

    fn single(primary: EmotionCategory, confidence: f64) -> Self {
        Self {
            primary,
            confidence,
            scores: ScoreVector::one_hot(primary),
            mixed: None,
            image: assets::emotion_image(primary),
        }
    }

    /// Last-resort result when every analysis path failed.
    pub fn neutral_fallback() -> Self {
        Self::single(Neutral, 0.0)
    }
}

// ── Analyzer ────────────────────────────────────────────────────────────────

/// Rule-based emotion scorer. Stateless; session memory is passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionAnalyzer;

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyse `message` given the session's emotion history (oldest first).
    ///
    /// Never fails: scoring errors fall back to a plain pattern count, and
    /// if that fails too the result is neutral with zero confidence.
    pub fn analyze(&self, message: &str, history: &[EmotionCategory]) -> AnalysisResult {
        match self.try_analyze(message, history) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "emotion scoring failed, using simple pattern count");
                self.recover(message, history)
            }
        }
    }

    /// Degraded analysis used after [`Self::try_analyze`] failed: a plain
    /// pattern count, then the latest non-neutral session emotion, then
    /// neutral with zero confidence.
    pub fn recover(&self, message: &str, history: &[EmotionCategory]) -> AnalysisResult {
        simple_analysis(message, history).unwrap_or_else(|e| {
            error!(error = %e, "simple emotion analysis failed, using neutral");
            AnalysisResult::neutral_fallback()
        })
    }

    /// Full scoring pipeline.
    pub fn try_analyze(
        &self,
        message: &str,
        history: &[EmotionCategory],
    ) -> Result<AnalysisResult> {
        let lower = message.to_lowercase();

        if let Some(o) = overrides::find(&lower) {
            debug!(primary = %o.primary, "override matched");
            return Ok(AnalysisResult::from_override(o));
        }

        let mut scores = pattern_scores(&lower);
        lexicon::apply(&lower, &mut scores);

        if scores.iter().all(|(_, s)| s < LOW_SIGNAL) {
            boost_low_signal(message, &lower, &mut scores);
        }

        if !history.is_empty() {
            apply_continuity(&mut scores, history);
        }

        if !scores.is_finite() {
            return Err(ChatError::Scoring("non-finite emotion score".into()));
        }
        if scores.is_zero() {
            return Err(ChatError::Scoring("empty emotion distribution".into()));
        }

        let adjusted = reweighted(&scores);
        let mut ranked = adjusted.ranked();
        demote_neutral(&mut ranked);

        let (primary, primary_score) = ranked[0];
        let mixed = pick_mixed(&ranked);
        let confidence = confidence(primary, primary_score, ranked[1].1);

        debug!(
            %primary,
            confidence,
            mixed = mixed.map(EmotionCategory::as_str),
            "message analysed"
        );

        Ok(AnalysisResult {
            primary,
            confidence,
            scores,
            mixed,
            image: assets::emotion_image(primary),
        })
    }
}

// ── Pattern pass ────────────────────────────────────────────────────────────

fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Raw pattern score of `text`; non-neutral matches are multiplied by `boost`.
fn score_text(text: &str, boost: f64) -> ScoreVector {
    let mut scores = ScoreVector::new();
    for (category, patterns) in registry().iter() {
        let factor = if category.is_neutral() { 1.0 } else { boost };
        for pattern in patterns {
            let n = pattern.count(text);
            if n == 0 {
                continue;
            }
            let strength = PATTERN_BASE * (1.0 + ((n + 1) as f64).log2());
            scores.add(category, strength * pattern.multiplier * factor);
        }
    }
    scores
}

/// Sentence-weighted pattern distribution, or a whole-message pass when no
/// single sentence matched anything.
fn pattern_scores(lower: &str) -> ScoreVector {
    let sentences: Vec<ScoreVector> = split_sentences(lower)
        .into_iter()
        .map(|s| score_text(s, SENTENCE_BOOST))
        .filter(|v| v.sum() > 0.0)
        .map(ScoreVector::normalized)
        .collect();

    if sentences.is_empty() {
        return score_text(lower, MESSAGE_BOOST).normalized();
    }

    let n = sentences.len() as f64;
    let mut combined = ScoreVector::new();
    for (i, v) in sentences.iter().enumerate() {
        combined.add_weighted(v, 0.5 + 0.5 * (i as f64 / n));
    }
    combined.normalized()
}

// ── Low-signal pass ─────────────────────────────────────────────────────────

fn boost_low_signal(message: &str, lower: &str, scores: &mut ScoreVector) {
    let implicit = implicit::detect(lower);
    scores.add_weighted(&implicit, IMPLICIT_WEIGHT);
    scores.normalize();

    if message.chars().count() > STRUCTURAL_MIN_CHARS {
        add_structural_cues(message, scores);
    }

    for (category, words) in SUBTLE_INDICATORS {
        for word in *words {
            if lower.contains(word) {
                scores.add(*category, SUBTLE_CUE);
            }
        }
    }
    scores.normalize();

    let loose = loose_pattern_scores(lower);
    scores.add_weighted(&loose, LOOSE_WEIGHT);
    scores.normalize();

    if scores.max_non_neutral() < NEUTRAL_FLOOR_TRIGGER {
        scores.set(Neutral, NEUTRAL_FLOOR);
        scores.normalize();
    }
}

fn add_structural_cues(message: &str, scores: &mut ScoreVector) {
    let exclaims = message.contains('!');
    if exclaims {
        for &c in EXCLAMATION_TARGETS {
            scores.add(c, PUNCTUATION_CUE);
        }
    }
    if message.contains('?') && !exclaims {
        for &c in QUESTION_TARGETS {
            scores.add(c, PUNCTUATION_CUE);
        }
    }
    if message.contains("...") {
        for &c in ELLIPSIS_TARGETS {
            scores.add(c, ELLIPSIS_CUE);
        }
    }
    if message.chars().any(|ch| CUE_EMOJI.contains(&ch)) {
        for c in EmotionCategory::ALL.into_iter().filter(|c| !c.is_neutral()) {
            scores.add(c, EMOJI_CUE);
        }
    }
    for &c in COMMON_EMOTIONS {
        scores.add(c, COMMON_EMOTION_BOOST);
    }
    scores.normalize();
}

/// Flat credit per matching non-neutral pattern, ignoring match counts.
fn loose_pattern_scores(lower: &str) -> ScoreVector {
    let mut scores = ScoreVector::new();
    for (category, patterns) in registry().iter() {
        if category.is_neutral() {
            continue;
        }
        for pattern in patterns.iter().filter(|p| p.is_match(lower)) {
            let credit = if pattern.self_harm {
                LOOSE_MATCH * LOOSE_SELF_HARM
            } else {
                LOOSE_MATCH
            };
            scores.add(category, credit);
        }
    }
    scores
}

// ── Continuity ──────────────────────────────────────────────────────────────

fn apply_continuity(scores: &mut ScoreVector, history: &[EmotionCategory]) {
    let recent = &history[history.len().saturating_sub(CONTINUITY_WINDOW)..];
    let Some(&last) = recent.last() else {
        return;
    };

    let mut seen: Vec<EmotionCategory> = Vec::with_capacity(recent.len());
    for &emotion in recent {
        if seen.contains(&emotion) {
            continue;
        }
        seen.push(emotion);

        let count = recent.iter().filter(|&&e| e == emotion).count();
        let mut bonus = CONTINUITY_PER_OCCURRENCE * count as f64;
        if emotion == last {
            bonus += CONTINUITY_LAST;
        }
        match emotion {
            Neutral => bonus *= CONTINUITY_NEUTRAL_DAMPING,
            Desperation => bonus *= CONTINUITY_DESPERATION_DAMPING,
            _ => {}
        }
        scores.add(emotion, bonus);
    }

    // Neutral followed by an emotion: lean into the shift.
    if recent.len() >= 2 {
        let before = recent[recent.len() - 2];
        if before.is_neutral() && !last.is_neutral() && last != Desperation {
            scores.add(last, TREND_BONUS);
        }
    }

    if recent.iter().all(|e| !e.is_neutral()) && scores.max() < STREAK_MAX {
        scores.scale(Neutral, STREAK_NEUTRAL_DAMPING);
    }

    scores.normalize();
}

// ── Ranking ─────────────────────────────────────────────────────────────────

fn tier_weight(category: EmotionCategory) -> f64 {
    match category {
        Neutral => 0.8,
        Desperation => 1.3,
        Joy | Sadness | Anger | Fear | Surprise => 1.2,
        Love | Disgust | Curious => 1.1,
        _ => 1.05,
    }
}

/// Ranking-only copy with tiered weights; not renormalized.
fn reweighted(scores: &ScoreVector) -> ScoreVector {
    let mut adjusted = *scores;
    for c in EmotionCategory::ALL {
        adjusted.scale(c, tier_weight(c));
    }
    adjusted
}

/// Move a close non-neutral contender above a neutral leader.
fn demote_neutral(ranked: &mut [(EmotionCategory, f64)]) {
    if ranked.len() < 2 || !ranked[0].0.is_neutral() {
        return;
    }
    let top = ranked[0].1;
    if ranked[1].1 >= NEUTRAL_SWAP_RATIO * top {
        ranked.swap(0, 1);
        return;
    }
    let end = ranked.len().min(5);
    if let Some(i) = (2..end)
        .find(|&i| !ranked[i].0.is_neutral() && ranked[i].1 >= NEUTRAL_SWAP_DEEP_RATIO * top)
    {
        ranked.swap(0, i);
    }
}

fn pick_mixed(ranked: &[(EmotionCategory, f64)]) -> Option<EmotionCategory> {
    let (_, p) = ranked[0];
    let (second, s) = ranked[1];
    if s < MIXED_RATIO * p || s <= MIXED_MIN {
        return None;
    }

    let mut mixed = second;
    if second.is_neutral()
        && let Some(&(alt, a)) = ranked[2..].iter().find(|(c, _)| !c.is_neutral())
        && a >= MIXED_ALT_RATIO * p
        && a > MIXED_ALT_MIN
    {
        mixed = alt;
    }

    // Light-hearted runners-up are worth surfacing even if slightly weaker.
    let window = &ranked[1..ranked.len().min(3)];
    if let Some(&(light, _)) = window.iter().find(|&&(c, score)| {
        matches!(c, Curious | Amusement) && score >= MIXED_LIGHT_RATIO * p && score > MIXED_ALT_MIN
    }) {
        mixed = light;
    }

    Some(mixed)
}

fn confidence(primary: EmotionCategory, score: f64, runner_up: f64) -> f64 {
    let mut c = score.min(CONFIDENCE_CAP);
    if score > runner_up * DOMINANCE_RATIO {
        c = (c * 1.15).min(CONFIDENCE_MAX);
    } else {
        c = (c * 0.9).max(CONFIDENCE_FLOOR);
    }
    if primary.is_basic() {
        c = (c * 1.1).min(CONFIDENCE_MAX);
    }
    c.clamp(0.0, 1.0)
}

// ── Degraded path ───────────────────────────────────────────────────────────

/// Count matching non-neutral patterns; most matches wins.
fn simple_analysis(message: &str, history: &[EmotionCategory]) -> Result<AnalysisResult> {
    let patterns = registry();
    if patterns.is_empty() {
        return Err(ChatError::Scoring("no emotion patterns available".into()));
    }

    let lower = message.to_lowercase();
    let mut best: Option<(EmotionCategory, usize)> = None;
    for (category, set) in patterns.iter() {
        if category.is_neutral() {
            continue;
        }
        let hits = set.iter().filter(|p| p.is_match(&lower)).count();
        if hits > 0 && best.is_none_or(|(_, n)| hits > n) {
            best = Some((category, hits));
        }
    }

    let primary = match best {
        Some((category, _)) => category,
        None => history
            .iter()
            .rev()
            .copied()
            .find(|e| !e.is_neutral())
            .unwrap_or(Neutral),
    };
    Ok(AnalysisResult::single(primary, SIMPLE_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn analyze(message: &str) -> AnalysisResult {
        EmotionAnalyzer::new().analyze(message, &[])
    }

    fn assert_distribution(v: &ScoreVector) {
        assert!((v.sum() - 1.0).abs() < 1e-6, "sum = {}", v.sum());
        assert!(v.iter().all(|(_, s)| s >= 0.0));
    }

    #[test]
    fn single_word_basic_emotions() {
        for (msg, expected) in [
            ("Happy.", Joy),
            ("Sad.", Sadness),
            ("Angry.", Anger),
            ("Afraid.", Fear),
        ] {
            let r = analyze(msg);
            assert_eq!(r.primary, expected, "{msg}");
            assert!(r.confidence > 0.5, "{msg}: confidence {}", r.confidence);
        }
    }

    #[test]
    fn repeated_word_is_confident() {
        let r = analyze("Happy happy happy...");
        assert_eq!(r.primary, Joy);
        assert!(r.confidence >= 0.8, "confidence {}", r.confidence);
    }

    #[test]
    fn override_short_circuits_scoring() {
        let r = analyze("I'm not happy with the results");
        assert_eq!(r.primary, Disappointment);
        assert!((r.confidence - 0.7).abs() < 1e-9);
        assert_eq!(r.image, "/static/images/disappointment.jpeg");
    }

    #[test]
    fn self_harm_phrases_are_desperation() {
        for msg in ["I want to end my life", "I don't see any reason to live anymore"] {
            let r = analyze(msg);
            assert_eq!(r.primary, Desperation, "{msg}");
            assert!(r.confidence >= 0.9);
        }
    }

    #[test]
    fn intensifiers_do_not_lower_confidence() {
        let mild = analyze("I'm a bit annoyed").confidence;
        let very = analyze("I'm very annoyed").confidence;
        let extreme = analyze("I'm extremely annoyed").confidence;
        let furious = analyze("I'm absolutely furious").confidence;
        assert!(mild <= very, "{mild} > {very}");
        assert!(very <= extreme, "{very} > {extreme}");
        assert!(extreme <= furious, "{extreme} > {furious}");
    }

    #[test]
    fn scores_form_a_distribution() {
        for msg in [
            "hello",
            "I'm so excited about the concert!",
            "ok",
            "The meeting is at 3pm. Bring the slides?",
            "sigh... whatever",
        ] {
            let r = analyze(msg);
            assert_distribution(&r.scores);
            assert!((0.0..=1.0).contains(&r.confidence), "{msg}: {}", r.confidence);
            assert_ne!(r.mixed, Some(r.primary));
        }
    }

    #[test]
    fn flat_message_leans_neutral() {
        let r = analyze("xyz");
        assert_eq!(r.primary, Neutral);
    }

    #[test]
    fn continuity_nudges_towards_recent_emotion() {
        let analyzer = EmotionAnalyzer::new();
        let alone = analyzer.analyze("sigh", &[]);
        let with_history = analyzer.analyze("sigh", &[Sadness, Sadness, Sadness]);
        assert!(with_history.scores.get(Sadness) >= alone.scores.get(Sadness));
        assert_distribution(&with_history.scores);
    }

    #[test]
    fn continuity_only_reads_last_three() {
        let mut scores = ScoreVector::one_hot(Joy);
        apply_continuity(&mut scores, &[Anger, Joy, Joy, Joy]);
        assert_eq!(scores.get(Anger), 0.0);
        assert!(scores.get(Joy) > 0.9);
    }

    #[test]
    fn desperation_history_barely_carries_over() {
        let mut scores = ScoreVector::from_pairs(&[(Joy, 0.5), (Neutral, 0.5)]);
        apply_continuity(&mut scores, &[Neutral, Desperation]);
        // 0.05 * (0.05 + 0.08) and no trend bonus.
        let d = scores.get(Desperation);
        assert!(d > 0.0 && d < 0.01, "{d}");
    }

    #[test]
    fn neutral_to_emotion_trend_gets_bonus() {
        let mut with_trend = ScoreVector::from_pairs(&[(Joy, 0.5), (Sadness, 0.5)]);
        apply_continuity(&mut with_trend, &[Neutral, Joy]);
        let mut without = ScoreVector::from_pairs(&[(Joy, 0.5), (Sadness, 0.5)]);
        apply_continuity(&mut without, &[Sadness, Joy]);
        assert!(with_trend.get(Joy) > without.get(Joy));
    }

    #[test]
    fn neutral_leader_swaps_with_close_runner_up() {
        let mut ranked = vec![(Neutral, 0.4), (Joy, 0.3), (Fear, 0.1)];
        demote_neutral(&mut ranked);
        assert_eq!(ranked[0].0, Joy);
    }

    #[test]
    fn neutral_leader_swaps_with_deeper_candidate() {
        let mut ranked = vec![(Neutral, 0.4), (Calm, 0.27), (Fear, 0.265), (Joy, 0.1)];
        demote_neutral(&mut ranked);
        assert_eq!(ranked[0].0, Fear);
        assert_eq!(ranked[2].0, Neutral);
    }

    #[test]
    fn clear_neutral_leader_stays() {
        let mut ranked = vec![(Neutral, 0.8), (Joy, 0.1), (Fear, 0.05)];
        demote_neutral(&mut ranked);
        assert_eq!(ranked[0].0, Neutral);
    }

    #[test]
    fn mixed_needs_a_close_runner_up() {
        assert_eq!(pick_mixed(&[(Joy, 0.5), (Fear, 0.4), (Anger, 0.1)]), Some(Fear));
        assert_eq!(pick_mixed(&[(Joy, 0.5), (Fear, 0.2), (Anger, 0.1)]), None);
        assert_eq!(pick_mixed(&[(Joy, 0.2), (Fear, 0.15), (Anger, 0.1)]), None);
    }

    #[test]
    fn mixed_skips_neutral_runner_up() {
        let ranked = [(Joy, 0.5), (Neutral, 0.45), (Fear, 0.35)];
        assert_eq!(pick_mixed(&ranked), Some(Fear));
    }

    #[test]
    fn mixed_prefers_light_hearted_runner_up() {
        let ranked = [(Joy, 0.5), (Fear, 0.4), (Amusement, 0.35)];
        assert_eq!(pick_mixed(&ranked), Some(Amusement));
    }

    #[test]
    fn confidence_rules() {
        // Dominant basic emotion caps at 0.9.
        assert!((confidence(Joy, 1.2, 0.1) - 0.9).abs() < 1e-9);
        // Contested non-basic emotion is floored at 0.4.
        assert!((confidence(Pride, 0.2, 0.19) - 0.4).abs() < 1e-9);
        // Contested basic emotion: 0.4 * 1.1.
        assert!((confidence(Sadness, 0.13, 0.13) - 0.44).abs() < 1e-9);
    }

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        assert_eq!(
            split_sentences("one. two!! three?  "),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn later_sentences_weigh_more() {
        let r = analyze("I am so sad. I am so happy!");
        assert!(r.scores.get(Joy) > r.scores.get(Sadness));
    }

    #[test]
    fn simple_analysis_counts_patterns() {
        let r = simple_analysis("i am so grateful, thank you so much", &[]).unwrap();
        assert_eq!(r.primary, Gratitude);
        assert!((r.confidence - SIMPLE_CONFIDENCE).abs() < 1e-9);
    }

    #[test]
    fn simple_analysis_falls_back_to_history() {
        let r = simple_analysis("xyz", &[Fear, Neutral]).unwrap();
        assert_eq!(r.primary, Fear);
        let r = simple_analysis("xyz", &[]).unwrap();
        assert_eq!(r.primary, Neutral);
    }

    #[test]
    fn neutral_fallback_has_zero_confidence() {
        let r = AnalysisResult::neutral_fallback();
        assert_eq!(r.primary, Neutral);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.image, assets::neutral_image());
    }
}
