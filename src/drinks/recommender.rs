//! Picks a cocktail for a profile and writes the recommendation prose.

use rand::Rng;
use rand::seq::{SliceRandom, index};
use serde::Serialize;

use super::catalog::{
    CLOSING_MARKERS, CLOSINGS, Cocktail, DEFAULT_CLOSING, DrinkStyle, FUN_FACTS, emotion_phrase,
    emotion_styles,
};
use super::profile::DrinkProfile;
use crate::assets;
use crate::emotion::EmotionCategory;

const ALTERNATIVES: usize = 3;

/// A finished recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub drink: Cocktail,
    pub style: DrinkStyle,
    /// Full reply text, ending with a sign-off.
    pub explanation: String,
    pub image: String,
}

struct Pick {
    drink: Cocktail,
    style: DrinkStyle,
    reason: String,
}

pub(super) fn recommend<R: Rng + ?Sized>(profile: &DrinkProfile, rng: &mut R) -> Recommendation {
    let pick = if profile.has_traits() {
        pick_from_traits(profile, rng)
    } else {
        pick_from_emotion(profile.emotion(), rng)
    };
    let drink = pick.drink;

    let mut explanation = format!("{} A {drink} is {}.", pick.reason, drink.description());
    explanation.push(' ');
    explanation.push_str(&alternatives(drink, rng));
    if let Some(fact) = FUN_FACTS.choose(rng) {
        explanation.push(' ');
        explanation.push_str(fact);
    }
    explanation.push(' ');
    explanation.push_str(&closing(drink, rng));

    tracing::debug!(drink = drink.name(), style = %pick.style, "drink recommended");

    Recommendation {
        drink,
        style: pick.style,
        explanation,
        image: assets::cocktail_image(drink),
    }
}

fn random_cocktail<R: Rng + ?Sized>(style: DrinkStyle, rng: &mut R) -> Cocktail {
    style
        .cocktails()
        .choose(rng)
        .copied()
        .unwrap_or(Cocktail::Mojito)
}

fn random_style<R: Rng + ?Sized>(styles: &[DrinkStyle], rng: &mut R) -> DrinkStyle {
    styles.choose(rng).copied().unwrap_or(DrinkStyle::Social)
}

/// Top traits first, then the emotion's styles.
fn pick_from_traits<R: Rng + ?Sized>(profile: &DrinkProfile, rng: &mut R) -> Pick {
    let top = profile.top_traits();
    let emotion = profile.emotion();

    let mut ranked = top.clone();
    for &s in emotion_styles(emotion) {
        if !ranked.contains(&s) {
            ranked.push(s);
        }
    }
    let style = match ranked.iter().find(|s| !s.cocktails().is_empty()) {
        Some(&s) => s,
        None => random_style(&DrinkStyle::ALL, rng),
    };
    let drink = random_cocktail(style, rng);

    let names: Vec<&str> = top.iter().map(|t| t.as_str()).collect();
    let personality = format!("your {} personality", names.join(" and "));
    let reason = if emotion.is_neutral() {
        format!(
            "Based on {personality}, I think you'd enjoy a {drink}. \
             It's {}, which perfectly complements your personality traits.",
            style.description()
        )
    } else {
        let phrase = emotion_phrase(emotion).unwrap_or("complement your mood");
        format!(
            "Based on {personality} and your current {emotion} mood, I think you'd enjoy a {drink}. \
             It's {}, which matches your personality, and should {phrase}.",
            style.description()
        )
    };

    Pick {
        drink,
        style,
        reason,
    }
}

/// No answers yet: go by mood alone.
fn pick_from_emotion<R: Rng + ?Sized>(emotion: EmotionCategory, rng: &mut R) -> Pick {
    let styles = emotion_styles(emotion);
    if styles.is_empty() {
        let style = random_style(&DrinkStyle::ALL, rng);
        let drink = random_cocktail(style, rng);
        return Pick {
            drink,
            style,
            reason: format!(
                "I'd recommend a {drink}. It's {} and works well for most occasions.",
                style.description()
            ),
        };
    }

    let style = random_style(styles, rng);
    let drink = random_cocktail(style, rng);
    let phrase = emotion_phrase(emotion).unwrap_or("match your current mood");
    Pick {
        drink,
        style,
        reason: format!(
            "Based on your current {emotion} mood, I'd recommend a {drink}. It's {} and should {phrase}.",
            style.description()
        ),
    }
}

fn alternatives<R: Rng + ?Sized>(drink: Cocktail, rng: &mut R) -> String {
    let others: Vec<Cocktail> = Cocktail::ALL.into_iter().filter(|c| *c != drink).collect();
    let picked: Vec<&str> = index::sample(rng, others.len(), ALTERNATIVES.min(others.len()))
        .into_iter()
        .map(|i| others[i].name())
        .collect();
    match picked.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!(
            "If you're feeling adventurous, you might also enjoy a {}, or a {last}.",
            rest.join(", ")
        ),
        Some((last, _)) => format!("If you're feeling adventurous, you might also enjoy a {last}."),
        None => String::new(),
    }
}

fn closing<R: Rng + ?Sized>(drink: Cocktail, rng: &mut R) -> String {
    let template = CLOSINGS.choose(rng).copied().unwrap_or(DEFAULT_CLOSING);
    let line = template.replace("{drink}", drink.name());
    if CLOSING_MARKERS.iter().any(|m| line.contains(m)) {
        line
    } else {
        DEFAULT_CLOSING.replace("{drink}", drink.name())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use EmotionCategory::*;

    fn answered(emotion: EmotionCategory) -> DrinkProfile {
        let mut p = DrinkProfile::new();
        p.set_emotion(emotion);
        p.process_answer("How do you usually spend your weekends?", "Relaxing at home");
        p.process_answer("What kind of music do you enjoy most?", "Calm and melodic");
        p
    }

    #[test]
    fn top_trait_decides_style() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = answered(Joy).recommend(&mut rng);
            assert_eq!(r.style, DrinkStyle::Relaxed);
            assert!(DrinkStyle::Relaxed.cocktails().contains(&r.drink));
        }
    }

    #[test]
    fn explanation_mentions_traits_and_mood() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = answered(Sadness).recommend(&mut rng);
        assert!(r.explanation.starts_with(
            "Based on your relaxed and sweet personality and your current sadness mood"
        ));
        assert!(r.explanation.contains("should lift your spirits."));
    }

    #[test]
    fn neutral_mood_leaves_emotion_out() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = answered(Neutral).recommend(&mut rng);
        assert!(r.explanation.starts_with("Based on your relaxed and sweet personality, "));
        assert!(r.explanation.contains("perfectly complements your personality traits."));
    }

    #[test]
    fn every_recommendation_has_a_closing_marker() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = answered(Joy).recommend(&mut rng);
            assert!(
                CLOSING_MARKERS.iter().any(|m| r.explanation.contains(m)),
                "{}",
                r.explanation
            );
        }
    }

    #[test]
    fn mood_only_recommendation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = DrinkProfile::new();
        p.set_emotion(Fear);
        let r = p.recommend(&mut rng);
        assert!(r.explanation.starts_with("Based on your current fear mood, I'd recommend a"));
        assert!(emotion_styles(Fear).contains(&r.style));
    }

    #[test]
    fn unmapped_mood_gets_generic_pick() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = DrinkProfile::new();
        p.set_emotion(Remorse);
        let r = p.recommend(&mut rng);
        assert!(r.explanation.starts_with("I'd recommend a"));
        assert!(r.explanation.contains("works well for most occasions."));
    }

    #[test]
    fn alternatives_exclude_the_pick() {
        let mut rng = StdRng::seed_from_u64(9);
        let text = alternatives(Cocktail::Mojito, &mut rng);
        let (prefix, list) = text
            .split_once("enjoy a ")
            .expect("alternatives prefix");
        assert_eq!(prefix, "If you're feeling adventurous, you might also ");
        assert!(!list.contains("Mojito"));
        assert_eq!(list.matches(", ").count(), 2, "{list}");
        assert_eq!(text.matches(", or a ").count(), 1, "{text}");
    }

    #[test]
    fn image_points_at_drink_asset() {
        let mut rng = StdRng::seed_from_u64(2);
        let r = answered(Joy).recommend(&mut rng);
        assert_eq!(r.image, format!("/static/alcohol/{}", r.drink.image_file()));
    }
}
