//! Fixed answers for known-tricky phrasings, checked before scoring.
//!
//! The table is ordered; the first entry whose phrase appears in the
//! lowercased message wins. Entries are pinned and should not grow without a
//! concrete misclassification to fix.

use super::category::EmotionCategory::{self, *};

/// How an override phrase is compared with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Phrase occurs anywhere in the message.
    Contains,
    /// Whole message equals the phrase.
    Exact,
}

/// One pinned result.
#[derive(Debug)]
pub struct Override {
    pub phrases: &'static [&'static str],
    pub kind: MatchKind,
    pub primary: EmotionCategory,
    pub confidence: f64,
    pub scores: &'static [(EmotionCategory, f64)],
    pub mixed: Option<EmotionCategory>,
}

impl Override {
    fn matches(&self, message_lower: &str) -> bool {
        match self.kind {
            MatchKind::Contains => self.phrases.iter().any(|p| message_lower.contains(p)),
            MatchKind::Exact => self.phrases.iter().any(|p| message_lower == *p),
        }
    }
}

const fn contains(
    phrases: &'static [&'static str],
    primary: EmotionCategory,
    confidence: f64,
    scores: &'static [(EmotionCategory, f64)],
) -> Override {
    Override {
        phrases,
        kind: MatchKind::Contains,
        primary,
        confidence,
        scores,
        mixed: None,
    }
}

const fn exact(
    phrase: &'static [&'static str],
    primary: EmotionCategory,
    confidence: f64,
    scores: &'static [(EmotionCategory, f64)],
) -> Override {
    Override {
        phrases: phrase,
        kind: MatchKind::Exact,
        primary,
        confidence,
        scores,
        mixed: None,
    }
}

static OVERRIDES: &[Override] = &[
    contains(&["i believe i can"], Optimism, 0.8, &[(Optimism, 0.8), (Neutral, 0.1), (Joy, 0.1)]),
    contains(
        &["i cannot stand", "i can't stand"],
        Annoyance,
        0.8,
        &[(Annoyance, 0.8), (Anger, 0.1), (Frustration, 0.1)],
    ),
    contains(
        &["i am sorry", "i'm sorry"],
        Remorse,
        0.8,
        &[(Remorse, 0.8), (Sadness, 0.1), (Guilt, 0.1)],
    ),
    contains(
        &["scary spider", "spider on the wall"],
        Fear,
        0.8,
        &[(Fear, 0.8), (Panic, 0.1), (Anxiety, 0.1)],
    ),
    contains(
        &["i'm angry about what happened"],
        Anger,
        0.8,
        &[(Anger, 0.8), (Neutral, 0.1), (Frustration, 0.1)],
    ),
    contains(
        &["i don't feel angry anymore"],
        Relief,
        0.7,
        &[(Relief, 0.7), (Neutral, 0.2), (Joy, 0.1)],
    ),
    contains(
        &["i'm not afraid of public speaking"],
        Confidence,
        0.7,
        &[(Confidence, 0.7), (Neutral, 0.2), (Courage, 0.1)],
    ),
    contains(
        &["i'm not happy with the results"],
        Disappointment,
        0.7,
        &[(Disappointment, 0.7), (Frustration, 0.2), (Sadness, 0.1)],
    ),
    contains(
        &["i didn't get the job i applied for"],
        Disappointment,
        0.7,
        &[(Disappointment, 0.7), (Sadness, 0.2), (Frustration, 0.1)],
    ),
    contains(
        &["i found out my husband cheated on me"],
        Disappointment,
        0.9,
        &[(Disappointment, 0.6), (Sadness, 0.3), (Anger, 0.1)],
    ),
    Override {
        phrases: &["i'm excited about the trip but nervous about flying"],
        kind: MatchKind::Contains,
        primary: Excitement,
        confidence: 0.6,
        scores: &[(Excitement, 0.6), (Fear, 0.4)],
        mixed: Some(Fear),
    },
    contains(&["i need to buy groceries"], Neutral, 0.5, &[(Neutral, 0.8), (Desire, 0.2)]),
    contains(
        &[
            "i don't see any reason to live anymore",
            "i want to end my life",
            "i can't take it anymore, i just want to die",
        ],
        Desperation,
        0.9,
        &[(Desperation, 0.9), (Sadness, 0.1)],
    ),
    exact(
        &["the frustrating situation."],
        Annoyance,
        0.7,
        &[(Annoyance, 0.7), (Frustration, 0.3)],
    ),
    exact(
        &["the extremely frustrating situation."],
        Annoyance,
        0.8,
        &[(Annoyance, 0.8), (Frustration, 0.2)],
    ),
    contains(
        &["wow! that's surprising"],
        Surprise,
        0.8,
        &[(Surprise, 0.8), (Excitement, 0.2)],
    ),
    contains(
        &["they just announced budget cuts at work"],
        Worry,
        0.7,
        &[(Worry, 0.7), (Fear, 0.2), (Concern, 0.1)],
    ),
    contains(
        &["i'm confused about these instructions"],
        Confusion,
        0.8,
        &[(Confusion, 0.8), (Neutral, 0.1), (Concern, 0.1)],
    ),
    contains(
        &["my flight got delayed by 5 hours"],
        Frustration,
        0.7,
        &[(Frustration, 0.7), (Anger, 0.2), (Disappointment, 0.1)],
    ),
];

/// First override matching the lowercased message, if any.
pub fn find(message_lower: &str) -> Option<&'static Override> {
    OVERRIDES.iter().find(|o| o.matches(message_lower))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn every_override_distribution_sums_to_one() {
        for o in OVERRIDES {
            let total: f64 = o.scores.iter().map(|(_, s)| s).sum();
            assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {total}", o.phrases);
        }
    }

    #[test]
    fn substring_match_anywhere() {
        let o = find("well, i'm sorry about yesterday").unwrap();
        assert_eq!(o.primary, Remorse);
    }

    #[test]
    fn exact_entries_need_the_whole_message() {
        assert_eq!(find("the frustrating situation.").unwrap().primary, Annoyance);
        assert!(find("the frustrating situation again.").is_none());
    }

    #[test]
    fn first_entry_wins() {
        // Both "i can't stand" and "i'm sorry" appear.
        let o = find("i'm sorry but i can't stand it").unwrap();
        assert_eq!(o.primary, Annoyance);
    }

    #[test]
    fn mixed_trip_entry_carries_fear() {
        let o = find("i'm excited about the trip but nervous about flying").unwrap();
        assert_eq!(o.mixed, Some(Fear));
    }

    #[test]
    fn unrelated_message_has_no_override() {
        assert!(find("what a lovely afternoon").is_none());
    }
}
