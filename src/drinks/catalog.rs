//! The fixed cocktail list, drink styles and the prose attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionCategory;

/// A cocktail we can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cocktail {
    AperolSpritz,
    ClassicMartini,
    LongIslandIcedTea,
    Margarita,
    Martini,
    Mojito,
    Negroni,
    OldFashioned,
    PinaColada,
    WhiskeySour,
}

impl Cocktail {
    /// Every cocktail, ordered by display name.
    pub const ALL: [Cocktail; 10] = [
        Self::AperolSpritz,
        Self::ClassicMartini,
        Self::LongIslandIcedTea,
        Self::Margarita,
        Self::Martini,
        Self::Mojito,
        Self::Negroni,
        Self::OldFashioned,
        Self::PinaColada,
        Self::WhiskeySour,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AperolSpritz => "Aperol Spritz",
            Self::ClassicMartini => "Classic Martini",
            Self::LongIslandIcedTea => "Long Island Iced Tea",
            Self::Margarita => "Margarita",
            Self::Martini => "Martini",
            Self::Mojito => "Mojito",
            Self::Negroni => "Negroni",
            Self::OldFashioned => "Old Fashioned",
            Self::PinaColada => "Piña Colada",
            Self::WhiskeySour => "Whiskey Sour",
        }
    }

    /// File name under the drink image root.
    pub fn image_file(self) -> &'static str {
        match self {
            Self::AperolSpritz => "aperol spritz.png",
            Self::ClassicMartini => "classic martini.png",
            Self::LongIslandIcedTea => "long island ice tea.png",
            Self::Margarita => "margharita.png",
            Self::Martini => "martini.png",
            Self::Mojito => "mojito.png",
            Self::Negroni => "negroni.png",
            Self::OldFashioned => "old fashioned.png",
            Self::PinaColada => "pina colada.png",
            Self::WhiskeySour => "whiskey sour.png",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AperolSpritz => {
                "a vibrant, refreshing Italian cocktail with a perfect balance of bitter and sweet flavors, topped with sparkling prosecco"
            }
            Self::ClassicMartini => {
                "an elegant, timeless cocktail with a clean, crisp taste that embodies sophistication in a glass"
            }
            Self::LongIslandIcedTea => {
                "a potent, complex blend of multiple spirits with a deceptively smooth taste that packs a punch"
            }
            Self::Margarita => {
                "a zesty, tangy cocktail with the perfect balance of tequila, lime, and sweetness, often served with a salt rim"
            }
            Self::Martini => {
                "a sophisticated, strong cocktail that's crisp, clean, and endlessly customizable to your taste preferences"
            }
            Self::Mojito => {
                "a refreshing, minty cocktail with rum and lime that's like a vacation in a glass"
            }
            Self::Negroni => {
                "a perfectly balanced, bittersweet Italian classic with complex herbal notes and a beautiful ruby color"
            }
            Self::OldFashioned => {
                "a rich, smooth whiskey cocktail with subtle sweetness and aromatic bitters that never goes out of style"
            }
            Self::PinaColada => {
                "a creamy, tropical blend of rum, coconut, and pineapple that transports you straight to the beach"
            }
            Self::WhiskeySour => {
                "a perfectly balanced cocktail with the warmth of whiskey complemented by bright citrus and a touch of sweetness"
            }
        }
    }

    /// Look up by display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == wanted)
    }
}

impl fmt::Display for Cocktail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drink style. Questionnaire answers tally these as personality traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkStyle {
    Bold,
    Relaxed,
    Social,
    Sophisticated,
    Adventurous,
    Sweet,
    Refreshing,
}

impl DrinkStyle {
    pub const ALL: [DrinkStyle; 7] = [
        Self::Bold,
        Self::Relaxed,
        Self::Social,
        Self::Sophisticated,
        Self::Adventurous,
        Self::Sweet,
        Self::Refreshing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Relaxed => "relaxed",
            Self::Social => "social",
            Self::Sophisticated => "sophisticated",
            Self::Adventurous => "adventurous",
            Self::Sweet => "sweet",
            Self::Refreshing => "refreshing",
        }
    }

    /// Cocktails in this style, in preference order.
    pub fn cocktails(self) -> &'static [Cocktail] {
        use Cocktail::*;
        match self {
            Self::Bold => &[OldFashioned, WhiskeySour, LongIslandIcedTea, Negroni, Martini],
            Self::Relaxed => &[OldFashioned, WhiskeySour, PinaColada, ClassicMartini, Mojito],
            Self::Social => &[Margarita, Mojito, AperolSpritz, PinaColada, LongIslandIcedTea],
            Self::Sophisticated => &[Martini, ClassicMartini, Negroni, OldFashioned, WhiskeySour],
            Self::Adventurous => &[Negroni, LongIslandIcedTea, Margarita, Mojito, AperolSpritz],
            Self::Sweet => &[PinaColada, Margarita, Mojito, AperolSpritz, ClassicMartini],
            Self::Refreshing => &[Mojito, AperolSpritz, Margarita, PinaColada, ClassicMartini],
        }
    }

    /// Words in a free-text answer that point at this style.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Social => &[
                "friends", "party", "outgoing", "social", "people", "group", "together", "crowd",
            ],
            Self::Relaxed => &["relax", "calm", "chill", "quiet", "peace", "home", "rest", "easy"],
            Self::Adventurous => &[
                "adventure", "new", "exciting", "different", "unique", "try", "explore", "discover",
            ],
            Self::Sophisticated => &[
                "culture", "art", "elegant", "refined", "classic", "intellectual", "sophisticated",
            ],
            Self::Bold => &["strong", "intense", "powerful", "energetic", "bold", "confident", "loud"],
            Self::Sweet => &["sweet", "kind", "caring", "gentle", "nice", "friendly", "warm"],
            Self::Refreshing => &["fresh", "light", "cool", "crisp", "refreshing", "clean", "simple"],
        }
    }

    /// Phrase completing "It's ...".
    pub fn description(self) -> &'static str {
        match self {
            Self::Bold => {
                "bold and strong, perfect for someone who appreciates intensity and character"
            }
            Self::Relaxed => "smooth and easy-going, ideal for unwinding and taking it slow",
            Self::Social => "fun and lively, great for sharing moments with others",
            Self::Sophisticated => "refined and elegant, suited for those with discerning taste",
            Self::Adventurous => "unique and exciting, for those who enjoy exploring new flavors",
            Self::Sweet => {
                "smooth and approachable, with delightful flavors that are easy to enjoy"
            }
            Self::Refreshing => "crisp and revitalizing, perfect for a pick-me-up",
        }
    }
}

impl fmt::Display for DrinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styles suited to an emotion. Empty when the emotion has no mapping.
pub fn emotion_styles(emotion: EmotionCategory) -> &'static [DrinkStyle] {
    use DrinkStyle::*;
    use EmotionCategory as E;
    match emotion {
        E::Joy => &[Social, Refreshing, Sweet],
        E::Achievement => &[Sophisticated, Bold, Social],
        E::Sadness => &[Relaxed, Sweet, Sophisticated],
        E::Anger => &[Bold, Adventurous, Refreshing],
        E::Fear => &[Relaxed, Sweet, Bold],
        E::Surprise => &[Adventurous, Social, Refreshing],
        E::Love => &[Sophisticated, Sweet, Social],
        E::Disgust => &[Bold, Adventurous, Sophisticated],
        E::Neutral => &[Relaxed, Social, Refreshing],
        E::Desperation => &[Relaxed, Sophisticated, Bold],
        E::Trust => &[Relaxed, Sophisticated, Social],
        E::Grief => &[Relaxed, Sweet, Sophisticated],
        E::Relief => &[Refreshing, Social, Relaxed],
        E::Panic => &[Bold, Adventurous, Refreshing],
        E::Optimism => &[Social, Refreshing, Adventurous],
        E::Curious => &[Adventurous, Sophisticated, Refreshing],
        E::Admiration => &[Sophisticated, Social, Sweet],
        E::Excitement => &[Social, Adventurous, Bold],
        _ => &[],
    }
}

/// What the drink should do for someone feeling `emotion`, completing
/// "should ...".
pub fn emotion_phrase(emotion: EmotionCategory) -> Option<&'static str> {
    use EmotionCategory as E;
    let phrase = match emotion {
        E::Joy => "celebrate your positive mood",
        E::Achievement => "toast to your success",
        E::Sadness => "lift your spirits",
        E::Anger => "channel that energy",
        E::Fear => "help you relax and ease your mind",
        E::Surprise => "complement that unexpected feeling",
        E::Love => "match your warm feelings",
        E::Disgust => "reset your palate with something distinctive",
        E::Neutral => "enhance your balanced state",
        E::Desperation => "provide a moment of sophisticated calm",
        E::Trust => "complement your steady disposition",
        E::Grief => "offer some gentle comfort",
        E::Relief => "accentuate that weight being lifted",
        E::Panic => "give you something substantial to focus on",
        _ => return None,
    };
    Some(phrase)
}

pub const FUN_FACTS: &[&str] = &[
    "Did you know that the word 'cocktail' first appeared in print in 1806?",
    "The Prohibition era (1920-1933) actually led to the creation of many classic cocktails we enjoy today!",
    "The world's most expensive cocktail, 'Diamonds Are Forever', costs over $22,000!",
    "The Martini was originally much sweeter than the dry version we know today.",
    "The Mojito was reportedly a favorite of author Ernest Hemingway.",
    "The Margarita was named after a woman, though there are several competing stories about which woman.",
    "The Piña Colada is the national drink of Puerto Rico since 1978!",
];

/// Sign-off templates; `{drink}` is replaced with the cocktail name.
pub const CLOSINGS: &[&str] = &[
    "Enjoy your {drink}! 🍹",
    "Cheers to your {drink}! 🥂",
    "Savor that {drink} responsibly! 🍸",
    "That {drink} is waiting for you! 🥃",
    "Here's to a great experience with your {drink}! 🍷",
    "Наздраве! Your {drink} awaits! 🍸",
    "Bottoms up with your perfect {drink}! 🥂",
    "Raise a glass to your exquisite {drink}! 🍹",
];

/// Every recommendation ends with a sign-off containing one of these.
pub const CLOSING_MARKERS: &[&str] = &["Enjoy", "Cheers", "Savor", "waiting for you", "great experience"];

/// Sign-off used when the drawn one lacks a marker.
pub const DEFAULT_CLOSING: &str = "Enjoy your {drink}! 🍸";

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn all_is_sorted_by_name() {
        let names: Vec<_> = Cocktail::ALL.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Cocktail::from_name("old fashioned"), Some(Cocktail::OldFashioned));
        assert_eq!(Cocktail::from_name("PIÑA COLADA"), Some(Cocktail::PinaColada));
        assert_eq!(Cocktail::from_name("Mai Tai"), None);
    }

    #[test]
    fn every_style_has_cocktails() {
        for style in DrinkStyle::ALL {
            assert!(!style.cocktails().is_empty(), "{style}");
        }
    }

    #[test]
    fn every_cocktail_is_reachable() {
        for c in Cocktail::ALL {
            assert!(
                DrinkStyle::ALL.iter().any(|s| s.cocktails().contains(&c)),
                "{c} unreachable"
            );
        }
    }

    #[test]
    fn unmapped_emotion_has_no_styles() {
        assert!(emotion_styles(EmotionCategory::Remorse).is_empty());
        assert!(emotion_phrase(EmotionCategory::Remorse).is_none());
    }
}
