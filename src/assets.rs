//! Static image paths for emotions and cocktails.

use crate::drinks::catalog::Cocktail;
use crate::emotion::EmotionCategory;

/// URL prefix for emotion illustrations.
pub const EMOTION_IMAGE_ROOT: &str = "/static/images";
/// URL prefix for cocktail photos.
pub const DRINK_IMAGE_ROOT: &str = "/static/alcohol";

const NEUTRAL_IMAGE: &str = "neutral.jpg";

fn emotion_image_file(category: EmotionCategory) -> Option<&'static str> {
    use EmotionCategory::*;
    let file = match category {
        Achievement => "achievement.png",
        Joy => "happy.jpg",
        Sadness => "sad.jpg",
        Anger => "anger.jpeg",
        Fear => "fear.jpg",
        Surprise => "surprise.jpeg",
        Love => "love.jpg",
        Disgust => "disgust.jpg",
        Neutral => "neutral.jpg",
        Desperation => "desperation.jpeg",
        Trust => "trust.jpeg",
        Grief => "grief.jpg",
        Relief => "relief.jpg",
        Panic => "panic.png",
        Admiration => "admiration.jpg",
        Amusement => "amusement.jpg",
        Annoyance => "annoyance.jpg",
        Anticipation => "anticipation.png",
        Approval => "approval.jpg",
        Caring => "caring.jpeg",
        Confusion => "confusion.png",
        Curious => "curious.jpg",
        Desire => "desire.jpg",
        Disappointment => "disappointment.jpeg",
        Disapproval => "disapproval.jpg",
        Embarassment => "embarassment.jpg",
        Excitement => "excitement.png",
        Gratitude => "gratitude.jpeg",
        Nervousness => "nervousness.jpg",
        Nostalgia => "nostalgia.png",
        Optimism => "optimism.jpg",
        Pride => "pride.jpg",
        Realisation => "realisation.jpg",
        Remorse => "remorse.jpg",
        Calm | Confidence | Courage | Frustration | Worry | Guilt | Anxiety | Concern => {
            return None;
        }
    };
    Some(file)
}

/// Path of the neutral placeholder image.
pub fn neutral_image() -> String {
    format!("{EMOTION_IMAGE_ROOT}/{NEUTRAL_IMAGE}")
}

/// Illustration for an emotion, falling back to the neutral placeholder.
pub fn emotion_image(category: EmotionCategory) -> String {
    match emotion_image_file(category) {
        Some(file) => format!("{EMOTION_IMAGE_ROOT}/{file}"),
        None => neutral_image(),
    }
}

/// Photo for a cocktail name, falling back to the neutral placeholder.
pub fn drink_image(name: &str) -> String {
    match Cocktail::from_name(name) {
        Some(cocktail) => cocktail_image(cocktail),
        None => neutral_image(),
    }
}

pub fn cocktail_image(cocktail: Cocktail) -> String {
    format!("{DRINK_IMAGE_ROOT}/{}", cocktail.image_file())
}
