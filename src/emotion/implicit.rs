//! Higher-recall phrasing heuristics for messages with no explicit emotion
//! words.
//!
//! Only consulted when the pattern and lexicon passes leave every category
//! weak. Scores are raw increments; the caller scales and normalizes.

use std::sync::LazyLock;

use regex::Regex;

use super::category::EmotionCategory::*;
use super::scores::ScoreVector;

fn compile(pattern: &str) -> Regex {
    // SAFETY: static literal patterns; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(pattern).expect("valid regex")
}

struct Rules {
    didnt_know: Regex,
    just_learned: Regex,
    want_to_die: Regex,
    cant_take_it: Regex,
    no_point: Regex,
    whats_the_point: Regex,
    trapped: Regex,
    i_miss: Regex,
    deceased: Regex,
    disgust_words: Regex,
    disgust_phrases: Regex,
    annoyance_words: Regex,
    annoyance_commands: Regex,
    emptiness: Regex,
    just_found_out: Regex,
    narrative: Regex,
    past_tense: Regex,
    future_tense: Regex,
    future_positive: Regex,
    intensifiers: Regex,
    hedging: Regex,
    emphatic: Regex,
    contrast: Regex,
    social: Regex,
    achievement: Regex,
    self_pride: Regex,
    future_belief: Regex,
    outcome_trust: Regex,
    future_excitement: Regex,
    superiority: Regex,
    deserving: Regex,
    challenge: Regex,
    decision: Regex,
    value_positive: Regex,
    future_words: Regex,
    value_negative: Regex,
}

static RULES: LazyLock<Rules> = LazyLock::new(|| Rules {
    didnt_know: compile(r"\bi (didn't|did not) know\b"),
    just_learned: compile(r"\bjust (found out|realized|discovered)\b"),
    want_to_die: compile(r"\bi (want|wish|need) to (die|end it all|disappear|vanish|not exist)\b"),
    cant_take_it: compile(
        r"\bi (can't|cannot) (take|handle|bear|stand|deal with) (it|this|life|living|anything) (anymore|any longer|another day)\b",
    ),
    no_point: compile(r"\b(no (point|use|hope|future|reason to live|way out))\b"),
    whats_the_point: compile(
        r"\b(what's the point|why bother|why try|why live|why continue|why go on|what's the use)\b",
    ),
    trapped: compile(
        r"\b(trapped|stuck|cornered|no way out|at the end of my rope|at my wit's end|out of options|out of time|running out of hope)\b",
    ),
    i_miss: compile(r"\bi miss\b"),
    deceased: compile(r"\b(died|passed away|gone forever|no longer with us|in heaven|late)\b"),
    disgust_words: compile(
        r"\b(revolting|disgusting|gross|nauseating|repulsive|vile|foul|nasty|sickening|stomach-turning|stomach-churning|distasteful|obscene|vulgar|crude|indecent|abhorrent|loathsome)\b",
    ),
    disgust_phrases: compile(
        r"\b(makes me sick|turned my stomach|can't stomach|can't bear|can't stand|can't tolerate|can't handle|turns my stomach)\b",
    ),
    annoyance_words: compile(
        r"\b(annoying|irritating|bothersome|frustrating|aggravating|getting on my nerves|pushing my buttons|testing my patience|making me crazy|driving me nuts)\b",
    ),
    annoyance_commands: compile(
        r"\b(stop it|quit it|knock it off|cut it out|give it a rest|enough already|how many times|for crying out loud|give me a break)\b",
    ),
    emptiness: compile(r"\b(feel empty|emptiness|hollow|void|numb)\b"),
    just_found_out: compile(r"\bjust found out\b"),
    narrative: compile(r"\b(i|we) (had|went|did|saw|heard|felt|experienced)\b"),
    past_tense: compile(r"\b(was|were|had|did|felt|went|came|got|made|said|told|thought)\b"),
    future_tense: compile(r"\b(will|going to|plan to|hope to|expect to|look forward to)\b"),
    future_positive: compile(
        r"\b(better|improve|success|achieve|accomplish|progress|grow|develop|advance|prosper|thrive|possibility|possibilities|opportunity|opportunities|potential|promise)\b",
    ),
    intensifiers: compile(r"\b(really|very|so|extremely|incredibly|absolutely|totally|completely)\b"),
    hedging: compile(
        r"\b(maybe|perhaps|possibly|kind of|sort of|i think|i guess|probably|might|could be)\b",
    ),
    emphatic: compile(r"\b(definitely|certainly|absolutely|surely|clearly|obviously|of course)\b"),
    contrast: compile(
        r"\b(but|however|although|though|despite|even though|nevertheless|yet|still)\b",
    ),
    social: compile(
        r"\b(friend|family|parent|mother|father|brother|sister|partner|relationship|colleague|coworker|boss|team)\b",
    ),
    achievement: compile(
        r"\b(finished|completed|accomplished|achieved|succeeded|won|earned|learned|improved|progress|mastered|conquered|triumphed|prevailed|excelled|aced|nailed|crushed)\b",
    ),
    self_pride: compile(
        r"\b(proud of|pleased with|impressed by|amazed by) (myself|ourselves|my work|our work|what i've|what we've)\b",
    ),
    future_belief: compile(
        r"\b(believe|faith|trust|confidence) (in|about) (the future|tomorrow|what's ahead|what's to come|what lies ahead)\b",
    ),
    outcome_trust: compile(
        r"\b(trust|believe|have faith|confident) (that) (things|it|everything) (will work out|will be okay|will be fine|will be alright)\b",
    ),
    future_excitement: compile(
        r"\b(excited|enthusiastic|eager) (about|for) (potential|possibilities|opportunities|the future|what's next|what's ahead)\b",
    ),
    superiority: compile(
        r"\b(i'm|i am|we're|we are) (the best|number one|top|superior|unbeatable|unstoppable|unmatched|exceptional|outstanding|excellent)\b",
    ),
    deserving: compile(
        r"\b(i|we) (deserve|earned|worked hard for|fought for) (this|that|it|recognition|praise|reward|success)\b",
    ),
    challenge: compile(
        r"\b(difficult|hard|challenging|struggle|problem|issue|obstacle|barrier|hurdle|setback)\b",
    ),
    decision: compile(
        r"\b(decided|chose|picked|selected|determined|resolved|concluded|figured out)\b",
    ),
    value_positive: compile(
        r"\b(good|great|excellent|wonderful|fantastic|amazing|brilliant|outstanding|perfect)\b",
    ),
    future_words: compile(
        r"\b(future|tomorrow|next|upcoming|coming|ahead|prospect|potential|possibility|opportunity|possibilities|opportunities)\b",
    ),
    value_negative: compile(
        r"\b(bad|terrible|awful|horrible|poor|lousy|dreadful|appalling|unacceptable)\b",
    ),
});

/// `min(cap, step * matches)`, or 0 when nothing matched.
fn counted(re: &Regex, text: &str, step: f64, cap: f64) -> f64 {
    let n = re.find_iter(text).count();
    if n == 0 { 0.0 } else { (step * n as f64).min(cap) }
}

/// Raw implicit-emotion increments for a lowercased message.
pub fn detect(message_lower: &str) -> ScoreVector {
    let r = &*RULES;
    let text = message_lower;
    let mut s = ScoreVector::new();

    if r.didnt_know.is_match(text) || r.just_learned.is_match(text) {
        s.add(Realisation, 0.4);
        s.add(Surprise, 0.3);
    }

    // Self-harm phrasing is weighted far above everything else.
    if r.want_to_die.is_match(text) || r.cant_take_it.is_match(text) {
        s.add(Desperation, 2.0);
        s.add(Sadness, 0.5);
    }
    if r.no_point.is_match(text) || r.whats_the_point.is_match(text) {
        s.add(Desperation, 1.5);
        s.add(Sadness, 0.4);
    }
    if r.trapped.is_match(text) {
        s.add(Desperation, 1.2);
        s.add(Fear, 0.3);
    }

    if r.i_miss.is_match(text) {
        s.add(Sadness, 0.4);
        if r.deceased.is_match(text) {
            s.add(Grief, 0.5);
        } else {
            s.add(Nostalgia, 0.4);
        }
    }

    if r.disgust_words.is_match(text) {
        s.add(Disgust, 0.6);
    }
    if r.disgust_phrases.is_match(text) {
        s.add(Disgust, 0.7);
    }
    if r.annoyance_words.is_match(text) {
        s.add(Annoyance, 0.6);
    }
    if r.annoyance_commands.is_match(text) {
        s.add(Annoyance, 0.7);
        s.add(Anger, 0.3);
    }
    if r.emptiness.is_match(text) {
        s.add(Sadness, 0.4);
        s.add(Desperation, 0.3);
    }
    if r.just_found_out.is_match(text) {
        s.add(Surprise, 0.3);
        s.add(Realisation, 0.4);
    }

    // ── Sentence structure and word choice ──────────────────────────────

    if r.narrative.is_match(text) {
        s.add(Joy, 0.1);
        s.add(Sadness, 0.1);
        s.add(Surprise, 0.1);
    }
    if r.past_tense.is_match(text) {
        s.add(Nostalgia, 0.15);
        s.add(Remorse, 0.1);
    }
    if r.future_tense.is_match(text) {
        s.add(Anticipation, 0.2);
        s.add(Optimism, 0.35);
        s.add(Fear, 0.1);
        if r.future_positive.is_match(text) {
            s.add(Optimism, 0.4);
        }
        let anticipation = s.get(Anticipation);
        if anticipation > 0.2 {
            s.add(Optimism, anticipation * 0.5);
        }
    }

    let intensity = counted(&r.intensifiers, text, 0.1, 0.3);
    if intensity > 0.0 {
        s.add(Joy, intensity);
        s.add(Anger, intensity);
        s.add(Surprise, intensity);
    }
    let hedge = counted(&r.hedging, text, 0.08, 0.25);
    if hedge > 0.0 {
        s.add(Nervousness, hedge);
        s.add(Confusion, hedge);
    }
    let emphatic = counted(&r.emphatic, text, 0.08, 0.25);
    if emphatic > 0.0 {
        s.add(Trust, emphatic);
        s.add(Approval, emphatic);
        s.add(Disapproval, emphatic);
    }
    let contrast = counted(&r.contrast, text, 0.07, 0.2);
    if contrast > 0.0 {
        s.add(Disappointment, contrast);
        s.add(Surprise, contrast);
    }
    let social = counted(&r.social, text, 0.08, 0.25);
    if social > 0.0 {
        s.add(Love, social);
        s.add(Caring, social);
        s.add(Trust, social);
    }
    let achieved = counted(&r.achievement, text, 0.12, 0.4);
    if achieved > 0.0 {
        s.add(Achievement, achieved);
        s.add(Pride, achieved);
    }

    if r.self_pride.is_match(text) {
        s.add(Pride, 0.7);
    }
    if r.future_belief.is_match(text) {
        s.add(Optimism, 0.7);
    }
    if r.outcome_trust.is_match(text) {
        s.add(Optimism, 0.7);
    }
    if r.future_excitement.is_match(text) {
        s.add(Optimism, 0.6);
    }
    if r.superiority.is_match(text) {
        s.add(Pride, 0.8);
    }
    if r.deserving.is_match(text) {
        s.add(Pride, 0.6);
        s.add(Achievement, 0.4);
    }

    // Challenges read as determination, which has no label of its own.
    let challenge = counted(&r.challenge, text, 0.08, 0.25);
    if challenge > 0.0 {
        s.add(Disappointment, challenge);
        s.add(Achievement, challenge * 0.7);
        s.add(Optimism, challenge * 0.5);
    }
    let decided = counted(&r.decision, text, 0.07, 0.2);
    if decided > 0.0 {
        s.add(Relief, decided);
        s.add(Trust, decided);
    }

    let positive = counted(&r.value_positive, text, 0.1, 0.3);
    if positive > 0.0 {
        s.add(Approval, positive);
        s.add(Admiration, positive);
        s.add(Joy, positive);
        if r.future_words.is_match(text) {
            s.add(Optimism, positive * 2.0);
            let anticipation = s.get(Anticipation);
            if anticipation > 0.1 {
                s.add(Optimism, anticipation * 0.7);
            }
        }
    }
    let negative = counted(&r.value_negative, text, 0.1, 0.3);
    if negative > 0.0 {
        s.add(Disapproval, negative);
        s.add(Disgust, negative);
        s.add(Anger, negative);
    }

    s
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn didnt_know_reads_as_realisation() {
        let s = detect("i didn't know cats could fly");
        assert!(s.get(Realisation) >= 0.4);
        assert!(s.get(Surprise) >= 0.3);
    }

    #[test]
    fn death_wish_dominates() {
        let s = detect("i want to die");
        assert_eq!(s.top().0, Desperation);
        assert!(s.get(Desperation) >= 2.0);
    }

    #[test]
    fn missing_the_deceased_is_grief() {
        let s = detect("i miss my grandmother who passed away");
        assert!(s.get(Grief) > 0.0);
        assert_eq!(s.get(Nostalgia), 0.0);
    }

    #[test]
    fn missing_the_living_is_nostalgia() {
        let s = detect("i miss my hometown");
        assert!(s.get(Nostalgia) > 0.0);
        assert_eq!(s.get(Grief), 0.0);
    }

    #[test]
    fn future_positive_language_is_optimistic() {
        let s = detect("things will improve");
        assert_eq!(s.top().0, Optimism);
    }

    #[test]
    fn counted_rules_are_capped() {
        let s = detect("really really really really really really");
        assert!((s.get(Joy) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn plain_statement_scores_nothing() {
        assert!(detect("the sky is blue").is_zero());
    }
}
