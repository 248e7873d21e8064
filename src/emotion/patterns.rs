//! Static regex registry, one ordered pattern list per emotion.
//!
//! Patterns are compiled once, case-insensitively, the first time the
//! registry is touched. Each compiled pattern carries a precomputed weight
//! multiplier so the scoring loop does no string inspection.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::category::EmotionCategory;

/// Base increment for a matching pattern before multipliers.
pub const PATTERN_BASE: f64 = 0.3;

/// Pattern text containing any of these gets the feeling-verb multiplier.
const FEELING_VERBS: &[&str] = &["feel", "felt", "feeling", "am", "are", "is", "was", "were"];
const FEELING_VERB_MULTIPLIER: f64 = 1.5;

/// Desperation patterns mentioning any of these are never diluted.
const SELF_HARM_TERMS: &[&str] = &["die", "end my life", "suicidal", "kill myself", "suicide"];
const SELF_HARM_MULTIPLIER: f64 = 2.0;

/// A compiled pattern and its precomputed multiplier.
#[derive(Debug)]
pub struct CompiledPattern {
    pub regex: Regex,
    /// Feeling-verb and self-harm multipliers folded together.
    pub multiplier: f64,
    /// True for desperation patterns carrying self-harm vocabulary.
    pub self_harm: bool,
}

impl CompiledPattern {
    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Read-only registry: category → ordered compiled patterns.
#[derive(Debug)]
pub struct PatternRegistry {
    sets: Vec<(EmotionCategory, Vec<CompiledPattern>)>,
}

static REGISTRY: LazyLock<PatternRegistry> = LazyLock::new(PatternRegistry::build);

/// The process-wide registry.
pub fn registry() -> &'static PatternRegistry {
    &REGISTRY
}

impl PatternRegistry {
    fn build() -> Self {
        let mut sets = Vec::with_capacity(PATTERN_TABLE.len());
        let mut total = 0usize;
        for &(category, sources) in PATTERN_TABLE {
            let mut compiled = Vec::with_capacity(sources.len());
            for &source in sources {
                match RegexBuilder::new(source).case_insensitive(true).build() {
                    Ok(regex) => {
                        let self_harm = category == EmotionCategory::Desperation
                            && SELF_HARM_TERMS.iter().any(|t| source.contains(t));
                        compiled.push(CompiledPattern {
                            regex,
                            multiplier: pattern_multiplier(source, self_harm),
                            self_harm,
                        });
                    }
                    Err(e) => {
                        tracing::warn!(%category, source, error = %e, "skipping invalid emotion pattern");
                    }
                }
            }
            total += compiled.len();
            sets.push((category, compiled));
        }
        tracing::debug!(categories = sets.len(), patterns = total, "emotion pattern registry compiled");
        Self { sets }
    }

    /// `(category, patterns)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, &[CompiledPattern])> {
        self.sets.iter().map(|(c, p)| (*c, p.as_slice()))
    }

    /// Patterns for one category (empty for derived labels).
    pub fn patterns(&self, category: EmotionCategory) -> &[CompiledPattern] {
        self.sets
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| p.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.sets.iter().map(|(_, p)| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn pattern_multiplier(source: &str, self_harm: bool) -> f64 {
    let mut m = 1.0;
    if FEELING_VERBS.iter().any(|v| source.contains(v)) {
        m *= FEELING_VERB_MULTIPLIER;
    }
    if self_harm {
        m *= SELF_HARM_MULTIPLIER;
    }
    m
}

// ── Pattern table ───────────────────────────────────────────────────────

#[rustfmt::skip]
const PATTERN_TABLE: &[(EmotionCategory, &[&str])] = &[
    (
        EmotionCategory::Achievement,
        &[
            r"\b(i|we) (took|passed|completed|finished|aced|won|accomplished|achieved|succeeded in|managed to)\b",
            r"\b(i|we) (found|got|landed|secured|obtained) (a job|a new job|a position|a role|a promotion|an opportunity)\b",
            r"\b(i|we) (lost|shed|dropped|reduced) (weight|pounds|kilos|kg|lb)\b",
            r"\b(i|we) (graduated|earned|received|got) (a degree|a diploma|a certificate|a license)\b",
            r"\b(i|we) (reached|hit|attained|met) (my|our) (goal|target|objective|milestone)\b",
            r"\b(i|we) (finally|successfully|proudly) (did it|made it|completed it|finished it)\b",
            r"\b(i|we) (overcame|conquered|beat|defeated|mastered) (a challenge|an obstacle|a difficulty|a problem|a fear)\b",
            r"\b(achievement|accomplishment|success|victory|milestone|breakthrough|triumph)\b",
            r"\b(proud of|accomplished|achieved|succeeded|won|completed|finished|mastered)\b",
            r"\b(i|we) (earned|deserved|worked for|gained) (this|that|it|recognition|praise|reward)\b",
        ],
    ),
    (
        EmotionCategory::Admiration,
        &[
            r"\b(i|we) (admire|look up to|respect|appreciate|value|esteem|revere|honor|idolize) (you|him|her|them|your|his|her|their)\b",
            r"\b(i|we) (am|are|feel|felt) (admiration|respect|appreciation|awe|reverence|regard) (for|towards)\b",
            r"\b(you|he|she|they) (are|is) (admirable|impressive|inspiring|amazing|remarkable|extraordinary|exceptional|outstanding)\b",
            r"\b(so|very|really|truly|deeply) (admire|respect|appreciate|impressed by|inspired by|in awe of)\b",
            r"\b(admiration|respect|appreciation|awe|reverence|regard|esteem|honor)\b",
            r"\b(role model|hero|inspiration|mentor|idol|example|standard|benchmark)\b",
            r"\b(look up to|inspired by|impressed by|in awe of|blown away by|amazed by) (you|him|her|them|your|his|her|their)\b",
            r"\b(i wish i could|i aspire to|i hope to) (be like|emulate|match|reach|achieve) (you|him|her|them|your|his|her|their)\b",
            r"\b(i|we) (admire|look up to|respect|appreciate|value|esteem|revere|honor|idolize) (my|our) (professor|teacher|mentor|boss|coach|leader|supervisor|manager|friends|friend|family|parents|colleagues|coworkers|teammates|partner|spouse)\b",
            r"\b(i|we) (admire|look up to|respect|appreciate|value|esteem|revere|honor|idolize) (.*?)\b",
            r"\b(that is|that's) (admiration|adminration)\b",
        ],
    ),
    (
        EmotionCategory::Amusement,
        &[
            r"\b(i|we) (am|are|feel|felt) (amused|entertained|tickled|delighted|laughing|giggling|chuckling)\b",
            r"\b(that|this) (is|was) (funny|hilarious|amusing|entertaining|comical|humorous|witty|hysterical)\b",
            r"\b(i|we) (laughed|giggled|chuckled|cracked up|burst out laughing|couldn't stop laughing)\b",
            r"(😂|🤣|😆|😄|😹|🙃|😅)",
            r"\b(so|very|really|extremely|incredibly) (funny|amusing|hilarious|entertaining|comical|humorous)\b",
            r"\b(humor|comedy|joke|pun|meme|laughter|amusement|entertainment)\b",
            r"\b(made me laugh|cracked me up|tickled me|had me in stitches|had me rolling|lol|haha|hehe)\b",
            r"\b(funny|hilarious|amusing|entertaining|comical|humorous|witty|hysterical)\b",
        ],
    ),
    (
        EmotionCategory::Annoyance,
        &[
            r"\b(i|we) (am|are|feel|felt) (annoyed|irritated|bothered|irked|vexed|peeved|displeased|frustrated|aggravated|exasperated|ticked off|miffed)\b",
            r"\b(this|that) (is|was) (annoying|irritating|bothersome|irksome|vexing|frustrating|aggravating|grating|infuriating|exasperating|maddening|tiresome)\b",
            r"\b(it|this|that) (annoys|irritates|bothers|irks|vexes|peeves|frustrates|aggravates|grates on|gets on|drives) (me|us) (crazy|nuts|insane|mad|up the wall)?\b",
            r"\b(getting|becoming|growing) (annoyed|irritated|bothered|frustrated|impatient|fed up|sick and tired|short-tempered)\b",
            r"\b(annoyance|irritation|frustration|vexation|displeasure|impatience|exasperation|aggravation|pet peeve)\b",
            r"\b(stop|quit|cease|cut it out|knock it off|give it a rest) (it|that|this|doing that|bothering me|annoying me|already)\b",
            r"\b(tired of|fed up with|sick of|had enough of|can't stand|can't take|done with|over|through with|at my limit with) (this|that|it|you|them|him|her)\b",
            r"\b(ugh|argh|grr|hmph|sigh|whatever|seriously|really|come on|oh please|for crying out loud|give me a break|enough already|how many times|not again)\b",
            r"\b(on my nerves|getting to me|pushing my buttons|testing my patience|making me crazy|driving me nuts|the last straw)\b",
            r"\b(why (do|would|should) (you|they|people|someone))|(how (hard|difficult) is it)|(what does it take)\b",
        ],
    ),
    (
        EmotionCategory::Anticipation,
        &[
            r"\b(i|we) (am|are|feel|felt) (anticipating|expecting|awaiting|looking forward to|excited about|eager for)\b",
            r"\b(i|we) (can't wait|am waiting|are waiting|have been waiting) (for|to)\b",
            r"\b(i|we) (am|are) (excited|thrilled|eager|keen|impatient|anxious|ready) (about|for|to)\b",
            r"\b(looking forward to|counting down to|excited about|eager for|ready for|prepared for)\b",
            r"\b(anticipation|expectation|excitement|eagerness|readiness|preparation)\b",
            r"\b(soon|coming|approaching|upcoming|imminent|forthcoming|about to)\b",
            r"\b(can't wait|so excited|really looking forward|eagerly awaiting|eagerly anticipating)\b",
            r"\b(countdown|preparing|getting ready|planning|anticipating)\b",
        ],
    ),
    (
        EmotionCategory::Approval,
        &[
            r"\b(i|we) (approve|agree|endorse|support|back|favor|like|accept) (of|with)\b",
            r"\b(i|we) (give|gave|offer|offered) (my|our) (approval|blessing|endorsement|support|backing)\b",
            r"\b(this|that) (has|gets|earns|deserves|receives) (my|our) (approval|blessing|endorsement|support|backing)\b",
            r"\b(i|we) (am|are) (in favor of|supportive of|behind|on board with|pleased with)\b",
            r"\b(i|we) (am|are) satisfied with (the|this|that|it|your|his|her|their|these|those|you|him|them)\b",
            r"\b(approval|agreement|endorsement|support|backing|acceptance|thumbs up|green light)\b",
            r"\b(approved|agreed|endorsed|supported|backed|favored|accepted)\b",
            r"\b(good job|well done|nice work|great work|excellent|perfect|spot on|exactly right)\b",
            r"(👍|✅|✓|👌|💯)",
        ],
    ),
    (
        EmotionCategory::Curious,
        &[
            r"\b(i|we) (am|are|feel|felt) (curious|inquisitive|interested|intrigued|fascinated|captivated|wondering)\b",
            r"\b(i|we) (wonder|wondered|am wondering|are wondering|was wondering|were wondering) (about|if|why|how|what|when|where|who)\b",
            r"\b(that|this) (is|was) (interesting|intriguing|fascinating|captivating|thought-provoking|mind-boggling)\b",
            r"\b(i|we) (want|wanted|would like) to (know|learn|understand|discover|explore|find out|figure out)\b",
            r"\b(tell me|explain|share|elaborate) (about|on|more about|further on)\b",
            r"\b(curiosity|interest|intrigue|fascination|wonder|inquisitiveness)\b",
            r"\b(curious|inquisitive|interested|intrigued|fascinated|captivated|wondering) (about|in|by)\b",
            r"\b(hmm|interesting|fascinating|intriguing|tell me more|i'd like to know more)\b",
        ],
    ),
    (
        EmotionCategory::Caring,
        &[
            r"\b(i|we) (care|care about|care for|look after|take care of|worry about|am concerned about|are concerned about)\b",
            r"\b(i|we) (am|are|feel|felt) (caring|concerned|worried|protective|nurturing|supportive|compassionate|empathetic)\b",
            r"\b(i|we) (want|wanted|would like|wish) (to help|to support|to be there for|to assist|to aid|to comfort)\b",
            r"\b(how are you|are you okay|are you alright|are you well|how are you feeling|how are you doing)\b",
            r"\b(take care|be careful|stay safe|look after yourself|take care of yourself|be well|get well soon)\b",
            r"\b(caring|concern|compassion|empathy|sympathy|kindness|tenderness|warmth|affection)\b",
            r"\b(i'm here for you|i'm here if you need me|i'm here to help|i'm here to support you|i'm here to listen)\b",
            r"(❤️|💕|💗|💓|💞|💖|💝|🤗|🫂)",
        ],
    ),
    (
        EmotionCategory::Confusion,
        &[
            r"\b(i|we) (am|are|feel|felt) (confused|puzzled|perplexed|bewildered|baffled|disoriented|lost|muddled|unclear)\b",
            r"\b(this|that) (is|was) (confusing|puzzling|perplexing|bewildering|baffling|disorienting|unclear|ambiguous|vague)\b",
            r"\b(i|we) (don't|do not|can't|cannot) (understand|comprehend|grasp|follow|make sense of|figure out|get it)\b",
            r"\b(what|how|why|when|where|who) (does this|is this|does that|is that|do you|are you) (mean|saying|talking about|referring to)\b",
            r"\b(i'm|i am) (lost|not following|not getting it|missing something|not understanding)\b",
            r"\b(confusion|perplexity|bewilderment|disorientation|uncertainty|ambiguity|vagueness|doubt)\b",
            r"\b(huh|what|eh|um|hmm|wait|sorry|excuse me|pardon|come again)\b",
            r"(😕|😟|😮|🤔|❓|❔|🙄|😵‍💫)",
        ],
    ),
    (
        EmotionCategory::Desire,
        &[
            r"\b(i|we) (want|desire|wish for|long for|crave|yearn for|hunger for|thirst for|need|would like)\b",
            r"\b(i|we) (am|are|feel|felt) (desire|attraction|lust|passion|yearning|longing|craving|wanting)\b",
            r"\b(i|we) (can't stop|cannot stop) (thinking about|wanting|desiring|craving|yearning for|longing for)\b",
            r"\b(i|we) (would do|would give|would trade|would sacrifice) (anything|everything) (for|to)\b",
            r"\b(i|we) (must|have to|need to|really want to|really need to|desperately want to|desperately need to)\b",
            r"\b(desire|want|need|craving|yearning|longing|hunger|thirst|lust|passion|attraction)\b",
            r"\b(desperately|urgently|badly|strongly|deeply|intensely|passionately) (want|need|desire|crave|yearn for|long for)\b",
            r"(😍|🥰|😘|💋|💘|💝|💖|💗|💓|💞|💕|❤️|🔥|🥵)",
        ],
    ),
    (
        EmotionCategory::Joy,
        &[
            r"\b(i|we) (am|are|feel|felt) (happy|joyful|delighted|cheerful|pleased|content|excited|thrilled|ecstatic|elated|overjoyed)\b",
            r"\b(that|this) (is|was) (wonderful|amazing|fantastic|great|good|perfect|excellent|brilliant|outstanding|superb)\b",
            r"\b(i|we) (feel|felt) (great|good|wonderful|amazing|fantastic|blessed|lucky|on top of the world|over the moon)\b",
            r"(😊|😄|😃|😁|🙂|🥰|😍|🤗|😀|😇)",
            r"\b(so|very|really|extremely|incredibly) (happy|joyful|delighted|excited|pleased|content)\b",
            r"\b(happiness|joy|delight|pleasure|contentment|bliss|euphoria)\b",
            r"\b(made my day|best day|loving this|loving it|enjoying|enjoy)\b",
            r"\b(what a|such a) (wonderful|beautiful|amazing|lovely|great|fantastic|marvelous|perfect) (world|day|life|moment|experience|feeling)\b",
            r"\b(i|we) (am|are) (glad|happy|thankful|grateful) to be alive\b",
        ],
    ),
    // Bare "kill myself" and "suicide" are not listed here; those messages
    // score as desire or joy unless an override phrase catches them.
    (
        EmotionCategory::Desperation,
        &[
            r"\b(i|we) (am|are|feel|felt) (desperate|hopeless|worthless|useless|suicidal|pointless|helpless|lost|trapped|overwhelmed|doomed|defeated|broken|shattered|devastated|destroyed)\b",
            r"\b(i|we) (want|wanted|wish|wished|need|needed) to (give up|end it all|end my life|die|disappear|vanish|not exist|escape|run away|get away|get out)\b",
            r"\b(i|we) (feel|felt) (fat|ugly|unwanted|unloved|unworthy|like a burden|like a failure|abandoned|rejected|alone|isolated|empty|hollow|numb|dead inside)\b",
            r"\b(no point|no use|no hope|no future|no reason to live|no way out|can't go on|can't take it anymore|can't bear it|can't handle it|can't escape|can't see a way forward)\b",
            r"\b(what's the point|why bother|why try|why live|why continue|why go on|what's the use|who cares|nothing matters|it's all meaningless)\b",
            r"\b(life is (pointless|meaningless|worthless|hopeless|too hard|too painful|not worth living|unbearable|torture|hell|misery|suffering|agony))\b",
            r"\b(nobody (cares|loves me|needs me|would miss me|would notice|understands|helps|listens|is there for me))\b",
            r"\b(i hate (myself|my body|my life|everything|living|existing|who i am|what i've become))\b",
            r"\b(i'm|i am) (a failure|a disappointment|a burden|better off dead|not good enough|worthless|useless|hopeless|helpless|pathetic|weak|broken|damaged|ruined)\b",
            r"\b(i|we) (have|has) nothing to (live for|look forward to|hope for|believe in|care about|hold onto)\b",
            r"\b(please (help|save) me|i (need|desperately need) help|i'm (begging|pleading|desperate) for help|i don't know what to do|i'm at the end of my rope|i'm at my wit's end)\b",
            r"\b(i (can't|cannot) (go on|continue|keep going|keep living|face another day|see a future|see any hope|see any way out))\b",
            r"\b(i'm (trapped|stuck|cornered|backed into a wall|at a dead end|out of options|out of time|running out of hope))\b",
            r"\b(i (just want|only want|need) (it to end|it to stop|the pain to stop|relief|peace|to be free|to escape))\b",
        ],
    ),
    (
        EmotionCategory::Disappointment,
        &[
            r"\b(i|we) (am|are|feel|felt) (disappointed|let down|disheartened|disillusioned|disenchanted|dismayed|discouraged)\b",
            r"\b(this|that) (is|was) (disappointing|disheartening|disillusioning|discouraging|a letdown|a disappointment)\b",
            r"\b(i|we) (expected|hoped for|wanted|wished for|anticipated) (better|more|something else|something different)\b",
            r"\b(i|we) (am|are|was|were) (disappointed|let down|disheartened) (by|with|in|about)\b",
            r"\b(disappointment|letdown|disillusionment|disenchantment|dismay|discouragement)\b",
            r"\b(not what|wasn't what|isn't what) (i|we) (expected|hoped for|wanted|wished for|anticipated)\b",
            r"\b(should have been|could have been|would have been) (better|different|more)\b",
            r"\b(i|we) (was|were) expecting more from (you|this|that|it|him|her|them)\b",
            r"(😔|😞|😕|😒|🙁|☹️|😢|💔)",
        ],
    ),
    (
        EmotionCategory::Disapproval,
        &[
            r"\b(i|we) (disapprove|don't approve|do not approve|disagree|object|oppose|reject|condemn|criticize)\b",
            r"\b(i|we) (am|are|feel|felt) (disapproving|critical|judgmental|censorious|reproachful|condemnatory)\b",
            r"\b(this|that) (is|was) (wrong|incorrect|inappropriate|unacceptable|improper|unsuitable|objectionable)\b",
            r"\b(i|we) (don't|do not|can't|cannot) (agree|accept|condone|support|endorse|approve of|tolerate)\b",
            r"\b(disapproval|disagreement|objection|opposition|criticism|censure|condemnation)\b",
            r"\b(shouldn't|should not|ought not to|mustn't|must not|can't|cannot) (do that|be that way|happen|be allowed)\b",
            r"\b(that's|that is|this is) (not okay|not right|not acceptable|not appropriate|not good|bad|wrong)\b",
            r"(👎|🙅‍♀️|🙅‍♂️|❌|⛔|🚫|😠|😒)",
        ],
    ),
    (
        EmotionCategory::Embarassment,
        &[
            r"\b(i|we) (am|are|feel|felt) (embarrassed|mortified|humiliated|ashamed|self-conscious|awkward|uncomfortable)\b",
            r"\b(this|that) (is|was) (embarrassing|mortifying|humiliating|shameful|awkward|uncomfortable|cringeworthy)\b",
            r"\b(i|we) (blushed|cringed|wanted to hide|wanted to disappear|felt awkward|felt uncomfortable)\b",
            r"\b(so|very|really|extremely|incredibly|totally) (embarrassed|mortified|humiliated|ashamed|self-conscious)\b",
            r"\b(embarrassment|mortification|humiliation|shame|self-consciousness|awkwardness|discomfort)\b",
            r"\b(can't believe|cannot believe) (i|we) (did that|said that|acted that way|behaved like that)\b",
            r"\b(wish|hoping) (the ground would swallow me|i could disappear|i was invisible|i wasn't here)\b",
            r"(😳|🙈|😖|😫|😱|🤦‍♀️|🤦‍♂️|😬)",
        ],
    ),
    (
        EmotionCategory::Sadness,
        &[
            r"\b(i|we) (am|are|feel|felt) (sad|unhappy|depressed|down|blue|melancholy|heartbroken|miserable|gloomy|sorrowful|despondent)\b",
            r"\b(this|that) (is|was) (sad|unhappy|depressing|heartbreaking|devastating|tragic|upsetting|distressing|painful)\b",
            r"(😢|😭|😔|😞|🥺|😩|😫|💔|🖤)",
            r"\b(feeling|feels|felt) (sad|down|depressed|unhappy|low|terrible|awful|hopeless|empty)\b",
            r"\b(miss|missing|longing for) (you|him|her|them|it|someone|something)\b",
            r"\b(sadness|sorrow|despair|misery|depression|gloom|heartache|anguish)\b",
            r"\b(crying|cried|tears|weeping|sobbing|upset|hurt|broken heart|broken hearted)\b",
            r"\b(lonely|alone|isolated|abandoned|rejected|unwanted|unloved)\b",
        ],
    ),
    (
        EmotionCategory::Anger,
        &[
            r"\b(i|we) (am|are|feel|felt) (angry|furious|outraged|mad|irritated|enraged|frustrated|livid|irate|incensed|infuriated|annoyed)\b",
            r"\b(this|that) (is|was) (unacceptable|outrageous|ridiculous|infuriating|aggravating|maddening|offensive|insulting|disrespectful)\b",
            r"(😠|😡|🤬|💢|😤|😒|🙄|👿|💥|🔥)",
            r"\b(so|very|really|extremely|incredibly) (angry|mad|furious|irritated|annoyed|frustrated|upset)\b",
            r"\b(anger|rage|fury|outrage|irritation|frustration|annoyance|indignation|wrath)\b",
            r"\b(pissed|pissed off|fed up|had enough|had it|lost my temper|losing my temper)\b",
            r"\b(hate|despise|detest|loathe|resent|abhor)\b",
            r"\b(makes me|making me) (angry|mad|furious|upset|irritated)\b",
        ],
    ),
    (
        EmotionCategory::Fear,
        &[
            r"\b(i|we) (am|are|feel|felt) (afraid|scared|frightened|terrified|worried|anxious|fearful|petrified|horrified|alarmed|panicky|uneasy)\b",
            r"\b(this|that) (is|was) (scary|frightening|terrifying|daunting|intimidating|horrifying|alarming|threatening|disturbing|creepy|spooky)\b",
            r"(😨|😱|😰|😳|😟|😬|😖|🙀|😵)",
            r"\b(feeling|feels|felt) (scared|afraid|terrified|fearful|anxious|worried|nervous|threatened|intimidated|unsafe)\b",
            r"\b(what if|worried about|concerned about|scared of|afraid of|terrified of|fear of|phobia|nightmare)\b",
            r"\b(fear|terror|horror|dread|anxiety|panic|fright|alarm|trepidation|apprehension)\b",
            r"\b(scared to death|scared stiff|scared silly|jumping at shadows|shaking|trembling|shivering|heart racing|heart pounding)\b",
            r"\b(danger|dangerous|threat|threatening|risk|risky|hazard|hazardous|unsafe|perilous)\b",
            r"\b(makes me|making me) (scared|afraid|fearful|anxious|worried|nervous)\b",
        ],
    ),
    (
        EmotionCategory::Excitement,
        &[
            r"\b(i|we) (am|are|feel|felt) (excited|thrilled|exhilarated|enthusiastic|eager|pumped|psyched|stoked|amped|buzzed)\b",
            r"\b(this|that) (is|was) (exciting|thrilling|exhilarating|stimulating|electrifying|invigorating|rousing|stirring)\b",
            r"\b(i|we) (can't wait|am looking forward|are looking forward|am eager|are eager) (for|to)\b",
            r"\b(so|very|really|extremely|incredibly) (excited|thrilled|exhilarated|enthusiastic|eager|pumped|psyched)\b",
            r"\b(excitement|thrill|exhilaration|enthusiasm|eagerness|anticipation|energy|buzz)\b",
            r"\b(can't contain|bursting with|full of|filled with|overflowing with) (excitement|enthusiasm|energy|anticipation)\b",
            r"\b(woo|woohoo|yay|yahoo|yes|awesome|amazing|fantastic|incredible|brilliant|wow)\b",
            r"(😃|😄|😁|🤩|🥳|🙌|👏|✨|🎉|🎊|⚡|💥)",
        ],
    ),
    (
        EmotionCategory::Gratitude,
        &[
            r"\b(i|we) (am|are|feel|felt) (grateful|thankful|appreciative|indebted|obliged|beholden)\b",
            r"\b(i|we) (appreciate|value|cherish|treasure|am grateful for|are grateful for|am thankful for|are thankful for)\b",
            r"\b(thank you|thanks|many thanks|thank you so much|thanks a lot|thanks a bunch|thank you kindly)\b",
            r"\b(i|we) (owe|want to thank|would like to thank|wish to thank|must thank) (you|him|her|them)\b",
            r"\b(gratitude|appreciation|thankfulness|gratefulness|indebtedness|recognition)\b",
            r"\b(so|very|really|extremely|incredibly|deeply|truly|sincerely) (grateful|thankful|appreciative)\b",
            r"\b(means|meant) (a lot|the world|so much|everything) (to me|to us)\b",
            r"(🙏|❤️|💕|😊|🥰|✨|💯|👍)",
        ],
    ),
    (
        EmotionCategory::Nervousness,
        &[
            r"\b(i|we) (am|are|feel|felt) (nervous|anxious|jittery|edgy|tense|uneasy|restless|fidgety|on edge|keyed up)\b",
            r"\b(this|that) (is|was) (nerve-wracking|nerve-racking|stressful|tense|anxiety-inducing|worrying)\b",
            r"\b(i|we) (have|has|had) (butterflies|knots|a knot) (in my stomach|in our stomachs|in my belly|in our bellies)\b",
            r"\b(my|our) (hands are|palms are|heart is) (sweating|sweaty|racing|pounding|beating fast)\b",
            r"\b(nervousness|anxiety|jitters|tension|unease|restlessness|apprehension|stress)\b",
            r"\b(can't|cannot) (relax|calm down|settle down|sit still|focus|concentrate|stop worrying)\b",
            r"\b(so|very|really|extremely|incredibly) (nervous|anxious|jittery|edgy|tense|uneasy|restless|fidgety)\b",
            r"(😰|😥|😨|😟|😬|😖|😣|🤢|😓|🫣)",
        ],
    ),
    (
        EmotionCategory::Surprise,
        &[
            r"\b(i|we) (am|are|was|were|feel|felt) (surprised|amazed|astonished|shocked|stunned|speechless|dumbfounded|flabbergasted|startled|taken aback)\b",
            r"\b(this|that) (is|was) (surprising|amazing|shocking|unexpected|unbelievable|astounding|incredible|extraordinary|mind-blowing|jaw-dropping)\b",
            r"(😲|😮|😯|😱|🤯|😳|😨|😵|😦|😧|🙀)",
            r"\b(no way|cannot believe|did not expect|never expected|never thought|never imagined|never saw this coming)\b",
            r"\b(what|how|why|when|who|where) (!|!!|!!!)\b",
            r"\b(wow|whoa|woah|oh my|oh my god|oh my goodness|oh wow|holy|gosh|goodness|jeez|yikes)\b",
            r"\b(came as a|was a|is a) (surprise|shock|revelation|bombshell|bolt from the blue)\b",
            r"\b(surprise|shock|amazement|astonishment|disbelief|wonder|awe)\b",
            r"\b(surprised|shocked|amazed|astonished|stunned|startled|taken aback) (by|at|to see|to hear|to learn|to find out)\b",
            r"\b(unexpected|unanticipated|unforeseen|out of nowhere|out of the blue|all of a sudden|suddenly)\b",
            r"\b(makes me|making me|left me) (surprised|shocked|amazed|astonished|speechless|stunned)\b",
        ],
    ),
    (
        EmotionCategory::Love,
        &[
            r"\b(i|we) (love|adore|cherish|treasure|worship|idolize|admire|care for|fancy|like) (you|him|her|them|this|that|someone|something)\b",
            r"\b(i|we) (am|are|feel|felt) (in love|loving|passionate|smitten|devoted|enamored|infatuated|head over heels|crazy about|wild about)\b",
            r"(❤️|💕|💗|💘|💝|🥰|😍|💓|💞|💖|💟|💌)",
            r"\b(so|very|really|deeply|truly|madly|completely|utterly|absolutely|totally) (in love|love|adore|cherish|devoted|attached)\b",
            r"\b(can't|cannot) (live|be|imagine life|function|exist) (without|without you|apart from you|if you were gone)\b",
            r"\b(love|affection|adoration|devotion|passion|fondness|attachment|infatuation|crush|romance)\b",
            r"\b(loving|adoring|cherishing|treasuring|worshipping|idolizing|admiring|caring for) (you|him|her|them|someone)\b",
        ],
    ),
    (
        EmotionCategory::Disgust,
        &[
            r"\b(i|we) (am|are|feel|felt) (disgusted|revolted|repulsed|sickened|nauseated|appalled|grossed out|repelled|turned off|horrified|disturbed)\b",
            r"\b(this|that) (is|was) (disgusting|revolting|repulsive|gross|nasty|vile|foul|offensive|repugnant|sickening|nauseating|stomach-turning|stomach-churning|distasteful|obscene|vulgar|crude|indecent|abhorrent|loathsome)\b",
            r"(🤢|🤮|😖|😫|😤|🤧|😷|👎|💩|🙄|😬|😒)",
            r"\b(so|very|really|extremely|incredibly|utterly|absolutely|completely|totally|thoroughly|deeply) (disgusting|gross|revolting|repulsive|nauseating|sickening|disturbing|offensive|vile|foul|nasty)\b",
            r"\b(disgust|revulsion|repulsion|nausea|aversion|distaste|loathing|abhorrence|contempt|disdain|horror|repugnance)\b",
            r"\b(makes me|making me|made me) (sick|nauseous|vomit|gag|disgusted|grossed out|want to throw up|queasy|ill|uncomfortable|cringe|recoil)\b",
            r"\b(gross|ew|eww|ugh|yuck|nasty|sick|vile|foul|filthy|dirty|rotten|putrid|rank|fetid|stinking|repellent|repugnant)\b",
            r"\b(can't stomach|can't bear|can't stand|can't tolerate|can't handle|can't look at|can't even|turns my stomach)\b",
            r"\b(that's|that is|this is) (disgusting|gross|revolting|repulsive|sickening|nauseating|vile|foul|nasty|disturbing|offensive)\b",
            r"\b(i|we) (hate|detest|loathe|despise|abhor|can't stand) (how|the way|when|that|this|it|the fact that)\b",
            r"\b(i almost|i nearly|i just about|i literally) (threw up|vomited|gagged|retched|got sick)\b",
        ],
    ),
    (
        EmotionCategory::Trust,
        &[
            r"\b(i|we) (trust|believe in|have faith in|rely on|depend on|count on) (you|him|her|them|this|that|someone|something)\b",
            r"\b(i|we) (am|are|feel|felt) (trusting|confident|assured|certain|convinced) (in|about|with|of) (you|him|her|them|this|that|someone|something)\b",
            r"\b(you|he|she|they|it) (are|is|have|has been) (reliable|trustworthy|dependable|honest|truthful|faithful|loyal)\b",
            r"\b(trust|faith|confidence|belief|reliance|dependence|assurance|certainty)\b",
            r"\b(trusting|believing|having faith|relying|depending|counting on) (you|him|her|them|someone)\b",
            r"\b(i know|i believe|i'm sure|i'm certain|i'm confident) (you|he|she|they|it) (will|can|could|would)\b",
            r"\b(i|we) (trust|have trust|place trust|put trust) (in|with) (you|him|her|them|your|his|her|their) (judgment|opinion|advice|guidance|wisdom|expertise|knowledge)\b",
        ],
    ),
    (
        EmotionCategory::Grief,
        &[
            r"\b(i|we) (am|are|feel|felt) (grieving|mourning|bereaved|devastated|shattered|broken) (over|about|because of|due to|from) (loss|death|passing)\b",
            r"\b(i|we) (lost|mourn|grieve for) (my|our) (loved one|family member|friend|partner|spouse|husband|wife|child|parent|mother|father|brother|sister)\b",
            r"\b(i|we) (miss) (my|our) (deceased|late|departed|dead) (loved one|family member|friend|partner|spouse|husband|wife|child|parent|mother|father|brother|sister)\b",
            r"\b(the|their|his|her) (death|passing|loss) (is|was) (devastating|heartbreaking|unbearable|painful|difficult|hard|tragic)\b",
            r"\b(grief|mourning|bereavement|loss)\b",
            r"\b(funeral|memorial|service|burial|cremation|grave|cemetery|obituary)\b",
            r"\b(died|passed away|gone|no longer with us|departed|deceased|lost the battle)\b",
            r"\b(i|we) (am|are) (in|experiencing|going through|dealing with|coping with) (grief|mourning|bereavement)\b",
            r"\b(i|we) (have|had) (lost|recently lost|just lost) (someone|a loved one|a family member|a friend|a pet)\b",
        ],
    ),
    (
        EmotionCategory::Relief,
        &[
            r"\b(i|we) (am|are|feel|felt) (relieved|unburdened|eased|relaxed|calmer|better|at ease|at peace) (that|because|now that|since)\b",
            r"\b(that|this) (is|was) (a relief|relieving|comforting|reassuring|calming|soothing)\b",
            r"\b(feeling|feels|felt) (relieved|unburdened|eased|better|lighter|calmer|relaxed) (after|now|since|because)\b",
            r"\b(relief|ease|comfort|reassurance|solace|respite|reprieve|alleviation) (from|of|about)\b",
            r"\b(weight off|burden lifted|pressure off|stress gone|worry gone|anxiety gone)\b",
            r"\b(thank goodness|thank god|finally|at last|phew|whew|glad that's over)\b",
            r"\b(i|we) (can|could) (breathe|relax|rest|sleep) (easier|better|well|peacefully|soundly) (now|again|at last|finally)\b",
            r"\b(i|we) (no longer|don't|do not) (have to|need to) (worry|stress|be concerned|be anxious|be afraid|fear) (about|over)\b",
        ],
    ),
    (
        EmotionCategory::Panic,
        &[
            r"\b(i|we) (am|are|feel|felt) (panicked|panicking|frantic|frenzied|hysterical|overwhelmed|out of control)\b",
            r"\b(this|that) (is|was) (a disaster|catastrophic|an emergency|a crisis|urgent|critical)\b",
            r"\b(panic|frenzy|hysteria|alarm|emergency|crisis|urgency|chaos)\b",
            r"\b(heart racing|hyperventilating|can't breathe|breathing fast|sweating|shaking|trembling)\b",
            r"\b(need help|need assistance|need support|need aid|need backup|need rescue) (now|immediately|right now|quickly|fast|asap|urgently)\b",
            r"\b(what do i do|what should i do|help me|someone help|emergency|mayday|sos)\b",
            r"\b(i|we) (am|are) (having|experiencing) (a panic attack|an anxiety attack|a meltdown|a breakdown)\b",
            r"\b(oh no|oh god|oh my god|omg|help|urgent|emergency|crisis|danger|threat|risk)\b",
            r"\b(i|we) (can't|cannot) (handle|deal with|cope with|manage|control) (this|the situation|what's happening|it) (anymore|any longer|now)\b",
        ],
    ),
    (
        EmotionCategory::Neutral,
        &[
            r"\b(i|we) (am|are|feel|felt) (neutral|okay|fine|alright|so-so|indifferent|balanced|neither good nor bad)\b",
            r"\b(this|that) (is|was) (neutral|okay|fine|alright|so-so|average|mediocre|neither good nor bad)\b",
            r"(😐|😶|😑|😏|🙂|😕)",
            r"\b(feeling|feels|felt) (neutral|okay|fine|alright|so-so|indifferent|balanced)\b",
            r"\b(neutral|indifference|apathy|detachment|dispassion|disinterest)\b",
            r"\b(not sure|not certain|undecided|on the fence|middle ground|no strong feelings|no opinion)\b",
        ],
    ),
    (
        EmotionCategory::Nostalgia,
        &[
            r"\b(i|we) (am|are|feel|felt) (nostalgic|sentimental|reminiscent|wistful|yearning|longing|homesick) (about|for|when thinking about|when remembering)\b",
            r"\b(i|we) (miss|remember|recall|reminisce about|think back to|long for|yearn for) (the old days|those days|that time|my childhood|the past|back then|simpler times|better times)\b",
            r"\b(i|we) (miss) (my|our) (home|hometown|country|family|friend|friends|partner|spouse|husband|wife|child|parent|mother|father|brother|sister|pet|dog|cat)\b",
            r"\b(this|that) (reminds|reminded) (me|us) (of|about) (the past|my childhood|when i was|when we were|old times|earlier times|younger days|growing up)\b",
            r"\b(good old days|back in the day|back then|in those days|when i was young|when i was a kid|in my day|in my time|in my youth|in my childhood)\b",
            r"\b(nostalgia|sentimentality|reminiscence|wistfulness|yearning|longing|homesickness|fond memories|cherished memories)\b",
            r"\b(remember when|those were the days|memories|throwback|flashback|blast from the past|trip down memory lane|walk down memory lane)\b",
            r"\b(wish i could go back|wish i could relive|wish i could experience again|wish i could return to) (those days|that time|my childhood|the past|my youth)\b",
            r"(🕰️|⏳|📷|📸|🎞️|📼|💾|🧸|👵|👴)",
            r"\b(i|we) (fondly|warmly|lovingly|happily|often) (remember|recall|think about|reminisce about) (the past|my childhood|growing up|those times)\b",
        ],
    ),
    (
        EmotionCategory::Optimism,
        &[
            r"\b(i|we) (am|are|feel|felt) (optimistic|hopeful|positive|confident|upbeat|encouraged|buoyant|sanguine)\b",
            r"\b(i|we) (believe|think|feel|am confident|am sure|am certain|have faith|trust) (things will|it will|everything will) (improve|get better|work out|be okay|be fine|be alright)\b",
            r"\b(looking on the bright side|seeing the silver lining|focusing on the positive|keeping a positive outlook|staying positive)\b",
            r"\b(optimism|hope|positivity|confidence|encouragement|faith|trust|belief) (for the future|about tomorrow|about what's ahead|about what's to come)\b",
            r"\b(it'll|it will|things will|everything will) (be okay|be fine|be alright|work out|get better|improve|turn around) (soon|eventually|in time|in the end)\b",
            r"\b(better days ahead|brighter future|light at the end of the tunnel|turn the corner|see the light)\b",
            r"\b(not giving up|keeping hope alive|staying hopeful|remaining positive|keeping faith|believing in better) (days|times|future|outcomes|results)\b",
            r"(😊|🙂|🌞|🌈|✨|🌟|💫|🌻|🌱|🍀)",
            r"\b(i|we) (expect|anticipate|look forward to|am excited about|are excited about) (good|positive|favorable|better) (things|outcomes|results|developments|changes)\b",
            r"\b(tomorrow|the future|what's ahead|what's to come) (is|looks|seems) (bright|promising|hopeful|positive|good|better)\b",
            r"\b(i|we) (believe|have faith|trust|am confident|are confident) (in|about) (the future|tomorrow|what's ahead|what's to come|what lies ahead)\b",
            r"\b(i|we) (see|envision|imagine|picture|dream of) (a better|a brighter|a positive|an improved|a promising) (future|tomorrow|world|life|outcome)\b",
            r"\b(things are looking up|the future is bright|better times are coming|good things are on the horizon|positive change is coming)\b",
            r"\b(i|we) (am|are) (excited|enthusiastic|eager|looking forward) (about|for) (the future|what's next|what's coming|what lies ahead)\b",
            r"\b(i|we) (have|hold|maintain) (hope|optimism|positive expectations|faith|confidence) (for|in|about) (the future|tomorrow|what's ahead)\b",
            r"\b(i|we) (believe|think|know|am sure|are sure) (that|the) (best|better) (is yet to come|days are ahead|times are coming)\b",
            r"\b(i|we) (am|are) (investing|planning|preparing|building|working) (for|towards) (a better|a brighter|a positive) (future|tomorrow)\b",
            r"\b(i|we) (believe|think|know|am confident|are confident) (things|life|situations|circumstances) (will|can|could) (improve|get better|change for the better)\b",
            r"\b(better days|good things|positive changes) (are ahead|are coming|will come|will happen)\b",
            r"\b(i|we) (trust|believe|have faith) (that) (things|it|everything) (will work out|will be okay|will be fine|will be alright)\b",
            r"\b(the future|tomorrow|what's ahead|what's to come) (is full of|has many|offers|holds) (possibilities|opportunities|potential|promise)\b",
            r"\b(i|we) (am|are) (planning|preparing|working|building|investing) (for|towards) (the future|tomorrow|what's ahead|what's to come)\b",
            r"\b(i|we) (have|feel|sense) (hope|faith|optimism|confidence|trust) (for|about|in) (the future|what's ahead|what's to come)\b",
        ],
    ),
    (
        EmotionCategory::Pride,
        &[
            r"\b(i|we) (am|are|feel|felt) (proud|accomplished|successful|fulfilled|satisfied|pleased|gratified|triumphant|victorious|honored|validated|vindicated)\b",
            r"\b(i|we) (take pride in|am proud of|are proud of|feel proud of|feel good about|am pleased with|are pleased with|am honored by|are honored by) (myself|ourselves|my|our)\b",
            r"\b(i|we) (achieved|accomplished|completed|finished|mastered|conquered|overcame|succeeded in|excelled at|triumphed over|prevailed|won|earned|deserved|attained|reached|surpassed)\b",
            r"\b(proud of|pleased with|satisfied with|happy with|delighted with|impressed by|amazed by|thrilled with) (myself|ourselves|my work|our work|my achievement|our achievement|what i've done|what we've done|my performance|our performance)\b",
            r"\b(pride|accomplishment|achievement|success|fulfillment|satisfaction|gratification|triumph|victory|honor|excellence|mastery|prowess|distinction)\b",
            r"\b(look what i|see what i|check out what i|look at what i|look what we|see what we|check what we) (did|made|created|built|achieved|accomplished|finished|completed|won|earned|produced|developed)\b",
            r"\b(i did it|we did it|nailed it|crushed it|aced it|smashed it|killed it|rocked it|owned it|dominated it|mastered it|conquered it|won it|pulled it off|made it happen)\b",
            r"(😌|😎|😏|🏆|🥇|🎖️|🏅|💪|👊|🙌|✅|🔥|👑|🌟|⭐|🥳)",
            r"\b(i'm|i am|we're|we are) (the best|number one|top|superior|unbeatable|unstoppable|unmatched|unparalleled|exceptional|outstanding|excellent)\b",
            r"\b(i|we) (deserve|earned|worked hard for|fought for|strived for|put in the effort for) (this|that|it|recognition|praise|reward|success|achievement|accomplishment|victory)\b",
            r"\b(i|we) (couldn't be|couldn't feel|am|are) (prouder|more proud|more pleased|more satisfied|more fulfilled|more accomplished)\b",
            r"\b(i|we) (proved|showed|demonstrated|established|confirmed|validated) (myself|ourselves|them|everyone|the world|the critics|the doubters|the haters) (wrong|right)\b",
            r"\b(i|we) (stand tall|hold my head high|hold our heads high|can be proud|should be proud|have every right to be proud)\b",
            r"\b(i|we) (am|are) (satisfied|pleased|happy|content|delighted) with (my|our) (language skills|abilities|performance|achievements|accomplishments|work|results|progress|growth|development|improvement)\b",
            r"\b(i|we) (am|are) (satisfied|pleased|happy|content|delighted) with (how|what) (i|we) (speak|talk|communicate|express|write|read|understand|learn|know|do|perform|achieve|accomplish)\b",
        ],
    ),
    (
        EmotionCategory::Realisation,
        &[
            r"\b(i|we) (realized|realised|understood|recognized|recognised|discovered|found out|learned|learnt|came to understand)\b",
            r"\b(it (dawned on|occurred to|became clear to|became apparent to|hit|struck) (me|us))\b",
            r"\b(i|we) (suddenly|just|finally|now|recently) (realized|realised|understood|recognized|recognised|see|get it|understand)\b",
            r"\b(had an epiphany|had a revelation|had a realization|had a moment of clarity|saw the light|connected the dots)\b",
            r"\b(realization|realisation|epiphany|revelation|insight|understanding|awareness|awakening|enlightenment)\b",
            r"\b(now i see|now i understand|now i get it|it all makes sense|everything clicked|the penny dropped)\b",
            r"\b(oh|aha|eureka|wow|oh my|oh my god|oh my goodness|oh wow|i see|i get it)\b",
            r"(😮|😲|🤯|💡|✨|👁️|👀|🧠)",
        ],
    ),
    (
        EmotionCategory::Remorse,
        &[
            r"\b(i|we) (am|are|feel|felt) (remorseful|regretful|sorry|apologetic|contrite|penitent|repentant|guilty)\b",
            r"\b(i|we) (regret|am sorry for|are sorry for|apologize for|apologise for|feel bad about|feel guilty about)\b",
            r"\b(i|we) (shouldn't have|should not have|wish i hadn't|wish i had not|wish we hadn't|wish we had not)\b",
            r"\b(i|we) (made a mistake|did something wrong|messed up|screwed up|erred|was wrong|were wrong)\b",
            r"\b(remorse|regret|guilt|contrition|penitence|repentance|sorrow|apology)\b",
            r"\b(if only i|if only we|i wish i|we wish we|i should have|we should have) (hadn't|had not|could take back|could undo)\b",
            r"\b(i'm sorry|i am sorry|we're sorry|we are sorry|please forgive me|please forgive us|my bad|my fault|my mistake)\b",
            r"(😔|😞|😢|😥|😓|🙇‍♀️|🙇‍♂️|💔|🤦‍♀️|🤦‍♂️)",
        ],
    ),
];
