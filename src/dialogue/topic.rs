//! Keyword topic guess.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversation topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    #[default]
    General,
    Health,
    Technology,
    Education,
    Entertainment,
    Politics,
    Science,
    Relationships,
    PersonalDevelopment,
    Finance,
    /// Set while the drink questionnaire owns the conversation.
    Drinks,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Health => "health",
            Self::Technology => "technology",
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Politics => "politics",
            Self::Science => "science",
            Self::Relationships => "relationships",
            Self::PersonalDevelopment => "personal_development",
            Self::Finance => "finance",
            Self::Drinks => "drinks",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords per topic; a topic earns one point per keyword found anywhere in
/// the message. Declaration order breaks ties.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Health,
        &["health", "doctor", "sick", "illness", "disease", "medicine", "exercise", "diet", "wellness"],
    ),
    (
        Topic::Technology,
        &[
            "technology", "computer", "phone", "app", "software", "hardware", "internet", "digital",
            "tech",
        ],
    ),
    (
        Topic::Education,
        &[
            "education", "school", "college", "university", "learn", "study", "teacher", "student",
            "class",
        ],
    ),
    (
        Topic::Entertainment,
        &["entertainment", "movie", "music", "game", "play", "fun", "hobby", "leisure", "enjoy"],
    ),
    (
        Topic::Politics,
        &[
            "politics", "government", "election", "vote", "policy", "law", "president", "congress",
            "democracy",
        ],
    ),
    (
        Topic::Science,
        &[
            "science", "research", "experiment", "discovery", "theory", "scientist", "physics",
            "chemistry", "biology",
        ],
    ),
    (
        Topic::Relationships,
        &[
            "relationship", "friend", "family", "love", "partner", "marriage", "divorce", "date",
            "romantic",
        ],
    ),
    (
        Topic::PersonalDevelopment,
        &[
            "goal", "improvement", "growth", "development", "skill", "learn", "progress",
            "achievement", "success",
        ],
    ),
    (
        Topic::Finance,
        &[
            "money", "finance", "budget", "save", "invest", "bank", "loan", "debt", "income",
            "expense",
        ],
    ),
];

/// Best-scoring topic, or [`Topic::General`] when no keyword appears.
pub fn identify_topic(message: &str) -> Topic {
    let lower = message.to_lowercase();
    let mut best = (Topic::General, 0usize);
    for (topic, keywords) in TOPIC_KEYWORDS {
        let hits = keywords.iter().filter(|k| lower.contains(*k)).count();
        if hits > best.1 {
            best = (*topic, hits);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn no_keyword_is_general() {
        assert_eq!(identify_topic("the weather is grey"), Topic::General);
    }

    #[test]
    fn most_keywords_wins() {
        assert_eq!(
            identify_topic("My doctor changed my diet and exercise plan"),
            Topic::Health
        );
    }

    #[test]
    fn tie_keeps_first_declared_topic() {
        // "learn" scores one point for both education and personal development.
        assert_eq!(identify_topic("I want to learn"), Topic::Education);
    }

    #[test]
    fn keywords_match_inside_words() {
        assert_eq!(identify_topic("FRIENDSHIP matters"), Topic::Relationships);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Topic::PersonalDevelopment).unwrap();
        assert_eq!(json, "\"personal_development\"");
    }
}
