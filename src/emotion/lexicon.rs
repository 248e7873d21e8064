//! Word-list sentiment pass with intensity modifiers and negation.
//!
//! Runs over the whole lowercased message after the pattern pass and adds
//! small increments on top of the pattern scores, then renormalizes.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::category::EmotionCategory::{self, *};
use super::scores::ScoreVector;

/// Increment per modifier token, before the cap.
const MODIFIER_STEP: f64 = 0.15;
const MODIFIER_CAP: f64 = 1.8;
/// Extra local intensity for each modifier within [`CONTEXT_WINDOW`].
const LOCAL_MODIFIER_STEP: f64 = 0.1;
const CONTEXT_WINDOW: usize = 3;
/// Applied to the global multiplier when a negation precedes a negative word.
const NEGATED_NEGATIVE_DAMPING: f64 = 0.8;
/// Applied to the literal category when its explicit word is negated.
const NEGATED_LITERAL_DAMPING: f64 = 0.2;

const WORD_BASE: f64 = 0.15;
const NEGATED_EMOTION_BASE: f64 = 0.25;
const SPECIFIC_WEIGHT: f64 = 1.2;
const DESPERATION_WEIGHT: f64 = 1.3;
const SPREAD_WEIGHT: f64 = 0.8;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "cannot",
    "couldn't",
];

const NEGATABLE_ANGER: &[&str] = &[
    "angry", "anger", "furious", "mad", "outraged", "irate", "incensed", "infuriated",
];
const NEGATABLE_FEAR: &[&str] = &[
    "afraid", "fear", "scared", "frightened", "terrified", "anxious", "fearful", "petrified",
];
const NEGATABLE_JOY: &[&str] = &[
    "happy", "joy", "joyful", "delighted", "pleased", "glad", "cheerful", "content",
];

/// Positive words with a dedicated bucket.
const POSITIVE_BUCKETS: &[(&[&str], EmotionCategory)] = &[
    (&["happy", "joy", "delighted", "pleased"], Joy),
    (&["love", "adore", "cherish", "passionate"], Love),
    (&["excited", "thrilled", "eager", "enthusiastic"], Excitement),
    (&["hopeful", "optimistic", "confident"], Optimism),
    (&["trust", "believe", "faith", "reliable"], Trust),
    (&["relieved", "relaxed", "calm", "peaceful"], Relief),
    (&["proud", "accomplished", "achieved", "successful"], Achievement),
];
const POSITIVE_SPREAD: &[EmotionCategory] =
    &[Joy, Love, Excitement, Optimism, Relief, Achievement];

/// Negative words with a dedicated bucket.
const NEGATIVE_BUCKETS: &[(&[&str], EmotionCategory)] = &[
    (&["sad", "unhappy", "depressed", "miserable"], Sadness),
    (&["angry", "furious", "mad", "outraged"], Anger),
    (&["afraid", "scared", "terrified", "anxious"], Fear),
    (&["disgusted", "revolted", "gross", "nasty"], Disgust),
    (&["disappointed", "disheartened"], Disappointment),
    (&["grief", "mourning", "bereaved", "loss"], Grief),
    (&["desperate", "hopeless", "worthless", "suicidal"], Desperation),
];
const NEGATIVE_SPREAD: &[EmotionCategory] = &[
    Sadness,
    Anger,
    Fear,
    Disgust,
    Disappointment,
    Grief,
    Desperation,
];

const NOT_ANGER_TARGETS: &[EmotionCategory] = &[Relief, Neutral, Calm];
const NOT_FEAR_TARGETS: &[EmotionCategory] = &[Confidence, Courage, Neutral];
const NOT_JOY_TARGETS: &[EmotionCategory] = &[Disappointment, Sadness, Frustration];

/// Word polarity in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// The four static word lists.
#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    neutral: HashSet<&'static str>,
    modifiers: HashSet<&'static str>,
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    positive: POSITIVE_WORDS.iter().copied().collect(),
    negative: NEGATIVE_WORDS.iter().copied().collect(),
    neutral: NEUTRAL_WORDS.iter().copied().collect(),
    modifiers: INTENSITY_MODIFIERS.iter().copied().collect(),
});

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: static literal pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"\b\w+(?:'\w+)?\b").expect("valid regex")
});

pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

impl Lexicon {
    /// Polarity of `word`; positive wins over negative, negative over neutral.
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if self.positive.contains(word) {
            Some(Polarity::Positive)
        } else if self.negative.contains(word) {
            Some(Polarity::Negative)
        } else if self.neutral.contains(word) {
            Some(Polarity::Neutral)
        } else {
            None
        }
    }

    pub fn is_modifier(&self, word: &str) -> bool {
        self.modifiers.contains(word)
    }
}

/// Split lowercased text into word tokens, keeping contractions whole.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Negated {
    Anger,
    Fear,
    Joy,
    Positive,
}

/// Apply the lexicon pass to `scores` and renormalize.
pub fn apply(message_lower: &str, scores: &mut ScoreVector) {
    let lex = lexicon();
    let tokens = tokenize(message_lower);

    let modifier_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, w)| lex.is_modifier(w))
        .map(|(i, _)| i)
        .collect();
    let mut multiplier =
        (1.0 + MODIFIER_STEP * modifier_positions.len() as f64).min(MODIFIER_CAP);

    // Only the first occurrence of each negation word opens a window.
    let mut negated: Vec<Option<Negated>> = vec![None; tokens.len()];
    for neg in NEGATIONS {
        let Some(start) = tokens.iter().position(|w| w == neg) else {
            continue;
        };
        let end = (start + CONTEXT_WINDOW + 1).min(tokens.len());
        for i in start + 1..end {
            if negated[i].is_some() {
                continue;
            }
            let word = tokens[i];
            if NEGATABLE_ANGER.contains(&word) {
                negated[i] = Some(Negated::Anger);
            } else if NEGATABLE_FEAR.contains(&word) {
                negated[i] = Some(Negated::Fear);
            } else if NEGATABLE_JOY.contains(&word) {
                negated[i] = Some(Negated::Joy);
            } else {
                match lex.polarity(word) {
                    Some(Polarity::Positive) => negated[i] = Some(Negated::Positive),
                    Some(Polarity::Negative) => multiplier *= NEGATED_NEGATIVE_DAMPING,
                    _ => {}
                }
            }
        }
    }

    let local_intensity = |i: usize| {
        let nearby = modifier_positions
            .iter()
            .filter(|&&p| p.abs_diff(i) <= CONTEXT_WINDOW)
            .count();
        multiplier + LOCAL_MODIFIER_STEP * nearby as f64
    };

    for (i, word) in tokens.iter().enumerate() {
        let local = local_intensity(i);
        match negated[i] {
            Some(Negated::Anger) => {
                add_all(scores, NOT_ANGER_TARGETS, NEGATED_EMOTION_BASE * local);
                scores.scale(Anger, NEGATED_LITERAL_DAMPING);
            }
            Some(Negated::Fear) => {
                add_all(scores, NOT_FEAR_TARGETS, NEGATED_EMOTION_BASE * local);
                scores.scale(Fear, NEGATED_LITERAL_DAMPING);
            }
            Some(Negated::Joy) => {
                add_all(scores, NOT_JOY_TARGETS, NEGATED_EMOTION_BASE * local);
                scores.scale(Joy, NEGATED_LITERAL_DAMPING);
            }
            Some(Negated::Positive) => {
                add_all(scores, NOT_JOY_TARGETS, WORD_BASE * local);
            }
            None => {
                let base = WORD_BASE * local;
                match lex.polarity(word) {
                    Some(Polarity::Positive) => {
                        match bucket_for(POSITIVE_BUCKETS, word) {
                            Some(c) => scores.add(c, base * SPECIFIC_WEIGHT),
                            None => add_all(scores, POSITIVE_SPREAD, base * SPREAD_WEIGHT),
                        }
                    }
                    Some(Polarity::Negative) => match bucket_for(NEGATIVE_BUCKETS, word) {
                        Some(Desperation) => scores.add(Desperation, base * DESPERATION_WEIGHT),
                        Some(c) => scores.add(c, base * SPECIFIC_WEIGHT),
                        None => add_all(scores, NEGATIVE_SPREAD, base * SPREAD_WEIGHT),
                    },
                    Some(Polarity::Neutral) | None => {}
                }
            }
        }
    }

    scores.normalize();
}

fn bucket_for(table: &[(&[&str], EmotionCategory)], word: &str) -> Option<EmotionCategory> {
    table
        .iter()
        .find(|(words, _)| words.contains(&word))
        .map(|&(_, c)| c)
}

fn add_all(scores: &mut ScoreVector, targets: &[EmotionCategory], delta: f64) {
    for &c in targets {
        scores.add(c, delta);
    }
}

// ── Word lists ──────────────────────────────────────────────────────────

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "love", "excited", "grateful", "glad", "pleased", "delighted", "content",
    "satisfied", "cheerful", "joyful", "thrilled", "elated", "ecstatic", "wonderful", "fantastic",
    "terrific", "great", "good", "nice", "awesome", "amazing", "excellent", "superb", "brilliant",
    "outstanding", "fabulous", "marvelous", "splendid", "enjoy", "enjoying", "enjoyed",
    "appreciate", "appreciating", "appreciated", "like", "liked", "loving", "adore", "adoring",
    "admire", "admiring", "cherish", "cherishing", "hopeful", "optimistic", "positive",
    "confident", "enthusiastic", "eager", "keen", "proud", "triumphant", "victorious",
    "successful", "accomplished", "achieved", "blessed", "fortunate", "lucky", "privileged",
    "honored", "inspired", "motivated", "energized", "refreshed", "renewed", "revitalized",
    "uplifted", "encouraged", "empowered", "fulfilled", "gratified", "contented", "peaceful",
    "serene", "tranquil", "calm", "relaxed", "comfortable", "cozy", "secure", "safe", "protected",
    "supported", "validated", "affirmed", "accepted", "included", "welcomed", "valued",
    "respected", "admired", "praised", "complimented", "congratulated", "celebrated", "recognized",
    "rewarded", "thankful", "appreciative", "moved", "touched",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "fear", "disgust", "disappointed", "upset", "unhappy", "depressed",
    "miserable", "gloomy", "heartbroken", "devastated", "crushed", "hurt", "pained", "suffering",
    "agonizing", "terrible", "horrible", "awful", "dreadful", "bad", "worse", "worst", "furious",
    "enraged", "outraged", "annoyed", "irritated", "frustrated", "exasperated", "mad", "hate",
    "hatred", "despise", "loathe", "detest", "abhor", "scared", "afraid", "frightened",
    "terrified", "anxious", "worried", "concerned", "nervous", "stressed", "distressed",
    "panicked", "horrified", "appalled", "shocked", "disgusted", "revolted", "repulsed",
    "nauseated", "sickened", "offended", "disheartened", "disillusioned", "dismayed", "displeased",
    "regretful", "remorseful", "guilty", "ashamed", "embarrassed", "humiliated", "abandoned",
    "rejected", "betrayed", "deceived", "cheated", "used", "manipulated", "controlled",
    "dominated", "bullied", "harassed", "abused", "victimized", "targeted", "excluded", "isolated",
    "alienated", "ostracized", "ignored", "forgotten", "neglected", "unwanted", "unloved",
    "unappreciated", "disrespected", "disregarded", "dismissed", "belittled", "ridiculed",
    "mocked", "teased", "taunted", "insulted", "criticized", "judged", "condemned", "blamed",
    "shamed", "mortified", "inadequate", "incompetent", "incapable", "helpless", "powerless",
    "weak", "vulnerable", "fragile", "insecure", "uncertain", "doubtful", "skeptical",
    "suspicious", "paranoid", "jealous", "envious", "resentful", "bitter", "vengeful", "spiteful",
    "hostile", "aggressive", "violent", "destructive", "dangerous", "threatening", "menacing",
    "scary", "creepy", "eerie", "unsettling", "disturbing", "troubling", "worrisome", "concerning",
    "alarming", "dreading", "desperate", "hopeless", "despairing", "suicidal", "worthless",
    "useless", "pointless", "meaningless", "empty", "hollow", "numb", "detached", "disconnected",
    "overwhelmed", "burdened", "pressured", "strained", "exhausted", "drained", "depleted",
    "fatigued", "tired", "weary", "sick", "ill", "unwell",
];

const NEUTRAL_WORDS: &[&str] = &[
    "neutral", "calm", "balanced", "okay", "ok", "fine", "alright", "moderate", "average",
    "ordinary", "standard", "normal", "regular", "usual", "common", "typical", "indifferent",
    "unbiased", "impartial", "dispassionate", "detached", "uninvolved", "neither", "nor", "maybe",
    "perhaps", "possibly", "somewhat", "stable", "steady", "consistent", "even", "level",
    "measured", "reasonable", "fair", "objective", "rational", "logical", "sensible", "practical",
    "pragmatic", "realistic", "halfway", "intermediate", "medium", "adequate", "sufficient",
    "acceptable", "satisfactory", "passable", "tolerable", "decent", "meh", "whatever", "anyhow",
    "anyway", "regardless", "nevertheless", "nonetheless", "however", "still", "yet", "though",
    "although", "reserved", "restrained", "controlled", "composed", "collected", "poised",
    "dignified", "formal", "proper", "correct", "appropriate", "suitable", "fitting", "apt",
    "becoming", "equanimous", "equable", "temperate", "mild", "gentle", "soft", "light", "slight",
    "undecided", "uncertain", "unsure", "ambivalent", "conflicted", "torn", "hedging",
    "noncommittal", "uncommitted", "undetermined",
];

const INTENSITY_MODIFIERS: &[&str] = &[
    "very", "really", "extremely", "incredibly", "exceptionally", "absolutely", "completely",
    "totally", "utterly", "thoroughly", "entirely", "fully", "highly", "intensely", "deeply",
    "profoundly", "immensely", "tremendously", "exceedingly", "extraordinarily", "remarkably",
    "particularly", "especially", "notably", "significantly", "substantially", "considerably",
    "greatly", "vastly", "hugely", "enormously", "immeasurably", "unbelievably", "insanely",
    "ridiculously", "crazy", "super", "mega", "ultra", "beyond", "so", "such", "quite", "rather",
    "amazingly", "astonishingly", "astoundingly", "strikingly", "stunningly", "surprisingly",
    "shockingly", "overwhelmingly", "overpoweringly", "intensively", "fiercely", "ferociously",
    "violently", "severely", "seriously", "gravely", "critically", "desperately", "urgently",
    "terribly", "horribly", "awfully", "dreadfully", "frightfully", "fearfully", "appallingly",
    "atrociously", "abominably", "disgustingly", "revoltingly", "repulsively", "sickeningly",
    "nauseatingly", "unbearably", "intolerably", "insufferably", "unendurably", "unspeakably",
    "indescribably", "inconceivably", "unimaginably", "unfathomably", "incomprehensibly",
    "impossibly", "fantastically", "phenomenally", "monumentally", "colossally", "gigantically",
    "astronomically", "exponentially", "infinitely", "eternally", "perpetually", "endlessly",
    "ceaselessly", "relentlessly", "persistently", "consistently", "constantly", "continually",
    "continuously", "incessantly", "unceasingly", "unremittingly", "unrelentingly", "unwaveringly",
    "unfailingly", "undoubtedly", "unquestionably", "undeniably", "indisputably", "irrefutably",
    "incontrovertibly", "incontestably", "unmistakably", "decidedly", "definitely", "certainly",
    "surely", "positively", "categorically", "emphatically", "vehemently", "passionately",
    "ardently", "fervently", "zealously", "fanatically", "obsessively", "compulsively",
    "maniacally", "wildly", "madly", "crazily", "hysterically", "frantically", "frenziedly",
    "deliriously", "ecstatically", "euphorically", "rapturously", "blissfully", "joyfully",
    "gleefully", "merrily", "cheerfully", "happily", "contentedly", "satisfyingly", "pleasingly",
    "gratifyingly", "rewardingly", "fulfillingly", "meaningfully", "importantly", "crucially",
    "vitally", "essentially", "fundamentally", "basically", "primarily",
];
