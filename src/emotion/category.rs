//! The closed set of emotion labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An emotion label.
///
/// Declaration order matters: it is the tie-break order whenever scores are
/// ranked, so equal scores resolve to the earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Achievement,
    Admiration,
    Amusement,
    Annoyance,
    Anticipation,
    Approval,
    Curious,
    Caring,
    Confusion,
    Desire,
    Joy,
    Desperation,
    Disappointment,
    Disapproval,
    Embarassment,
    Sadness,
    Anger,
    Fear,
    Excitement,
    Gratitude,
    Nervousness,
    Surprise,
    Love,
    Disgust,
    Trust,
    Grief,
    Relief,
    Panic,
    Neutral,
    Nostalgia,
    Optimism,
    Pride,
    Realisation,
    Remorse,
    // Derived labels: no pattern set of their own, only reached through the
    // lexicon pass and the override table.
    Calm,
    Confidence,
    Courage,
    Frustration,
    Worry,
    Guilt,
    Anxiety,
    Concern,
}

impl EmotionCategory {
    /// Number of variants.
    pub const COUNT: usize = 42;

    /// Every variant in declaration order.
    pub const ALL: [EmotionCategory; Self::COUNT] = [
        Self::Achievement,
        Self::Admiration,
        Self::Amusement,
        Self::Annoyance,
        Self::Anticipation,
        Self::Approval,
        Self::Curious,
        Self::Caring,
        Self::Confusion,
        Self::Desire,
        Self::Joy,
        Self::Desperation,
        Self::Disappointment,
        Self::Disapproval,
        Self::Embarassment,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Excitement,
        Self::Gratitude,
        Self::Nervousness,
        Self::Surprise,
        Self::Love,
        Self::Disgust,
        Self::Trust,
        Self::Grief,
        Self::Relief,
        Self::Panic,
        Self::Neutral,
        Self::Nostalgia,
        Self::Optimism,
        Self::Pride,
        Self::Realisation,
        Self::Remorse,
        Self::Calm,
        Self::Confidence,
        Self::Courage,
        Self::Frustration,
        Self::Worry,
        Self::Guilt,
        Self::Anxiety,
        Self::Concern,
    ];

    /// Position in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The snake_case label used in replies and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Achievement => "achievement",
            Self::Admiration => "admiration",
            Self::Amusement => "amusement",
            Self::Annoyance => "annoyance",
            Self::Anticipation => "anticipation",
            Self::Approval => "approval",
            Self::Curious => "curious",
            Self::Caring => "caring",
            Self::Confusion => "confusion",
            Self::Desire => "desire",
            Self::Joy => "joy",
            Self::Desperation => "desperation",
            Self::Disappointment => "disappointment",
            Self::Disapproval => "disapproval",
            Self::Embarassment => "embarassment",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Excitement => "excitement",
            Self::Gratitude => "gratitude",
            Self::Nervousness => "nervousness",
            Self::Surprise => "surprise",
            Self::Love => "love",
            Self::Disgust => "disgust",
            Self::Trust => "trust",
            Self::Grief => "grief",
            Self::Relief => "relief",
            Self::Panic => "panic",
            Self::Neutral => "neutral",
            Self::Nostalgia => "nostalgia",
            Self::Optimism => "optimism",
            Self::Pride => "pride",
            Self::Realisation => "realisation",
            Self::Remorse => "remorse",
            Self::Calm => "calm",
            Self::Confidence => "confidence",
            Self::Courage => "courage",
            Self::Frustration => "frustration",
            Self::Worry => "worry",
            Self::Guilt => "guilt",
            Self::Anxiety => "anxiety",
            Self::Concern => "concern",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }

    /// The six labels that get the extra confidence boost.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            Self::Joy | Self::Sadness | Self::Anger | Self::Fear | Self::Disgust | Self::Surprise
        )
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for EmotionCategory {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or(UnknownEmotion(wanted))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, c) in EmotionCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), i, "{c} out of order");
        }
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for c in EmotionCategory::ALL {
            assert_eq!(c.as_str().parse::<EmotionCategory>().unwrap(), c);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("dread".parse::<EmotionCategory>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_label() {
        let json = serde_json::to_string(&EmotionCategory::Embarassment).unwrap();
        assert_eq!(json, "\"embarassment\"");
    }

    #[test]
    fn basic_set_has_six_members() {
        let n = EmotionCategory::ALL.iter().filter(|c| c.is_basic()).count();
        assert_eq!(n, 6);
    }
}
