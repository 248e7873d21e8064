//! Canned reply text.

use crate::emotion::EmotionCategory::{self, *};

use super::topic::Topic;

pub const GREETINGS: &[&str] = &[
    "Hello there! How are you doing today?",
    "Hi! It's good to see you. How can I help?",
    "Hey! How's your day going so far?",
    "Hello! What's on your mind today?",
    "Hi there! I'm here if you want to talk about anything.",
];

/// Reply to a statement whose emotion has no bank.
pub const ELABORATION_PROMPT: &str =
    "I understand. Would you like to tell me more about how you're feeling?";

/// Reply to a question when no topic template applies.
pub const OPEN_QUESTION: &str =
    "That's an interesting question. Could you tell me more about what you're looking for?";

/// Recovery-tier reply when no per-emotion sentence exists.
pub const DEFAULT_FALLBACK: &str =
    "I'm having trouble understanding. Could you try expressing that differently?";

/// Reply templates for an emotion. Empty for labels without a bank.
pub fn emotion_bank(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        Achievement => &[
            "Congratulations! That's a significant accomplishment. You should be proud of what you've achieved.",
            "Well done! Your hard work and dedication have clearly paid off. How does it feel?",
            "That's impressive! It's great to see your efforts being rewarded. What was the most challenging part?",
            "Excellent work! Taking time to celebrate achievements is important. What's your next goal?",
            "That's fantastic! Your persistence has really paid off. What did you learn from this experience?",
        ],
        Admiration => &[
            "It's wonderful to hear you express such admiration. What qualities do you find most inspiring?",
            "That's a beautiful sentiment of admiration. People who inspire us can have such a positive impact.",
            "Your admiration really comes through. How does this person's influence shape your goals?",
            "Admiration often reflects our own values. What aspects do you find most worthy of admiration?",
            "It's great to recognize qualities we admire in others. How does this shape your own goals?",
        ],
        Amusement => &[
            "That does sound funny! It's great to find humor in life's moments.",
            "I can tell that amused you! Laughter is such a wonderful part of the human experience.",
            "That's hilarious! It's always good to have something that makes you laugh.",
            "I'm glad that brought you some amusement. What other things make you laugh?",
            "That's quite entertaining! Humor can really brighten our day, can't it?",
        ],
        Annoyance => &[
            "I can hear that you're feeling annoyed. Sometimes small things can really get under our skin.",
            "That does sound irritating. What do you usually do when you feel this way?",
            "I understand your annoyance. It's natural to feel frustrated when things aren't going as expected.",
            "Being annoyed is a normal reaction. Is there something that might help improve the situation?",
            "I can tell this is bothering you. Sometimes expressing annoyance is the first step to addressing it.",
        ],
        Anticipation => &[
            "I can feel your anticipation! Looking forward to something can be so energizing.",
            "It sounds like you're really looking forward to this. What are you most excited about?",
            "That sense of anticipation can be so powerful. How are you preparing for what's coming?",
            "Looking forward to something brings its own kind of joy. What are your expectations?",
            "I can tell you're eagerly awaiting this. The anticipation is sometimes as enjoyable as the event itself!",
        ],
        Approval => &[
            "I appreciate you sharing your approval. It's good to acknowledge when things meet our standards.",
            "That sounds like a positive endorsement. What aspects do you find most worthy of approval?",
            "I can tell you're pleased with this. It's nice when things align with our expectations, isn't it?",
            "Your approval comes through clearly. What standards or values is this fulfilling for you?",
            "It's good to express when we approve of something. This seems to really resonate with your values.",
        ],
        Curious => &[
            "That's an interesting question! Curiosity often leads to fascinating discoveries.",
            "I can tell you're curious about this. What aspects are you most interested in exploring?",
            "That's a thought-provoking topic to wonder about. What sparked your interest in this?",
            "Your curiosity is evident! Questions like these often lead to the most interesting conversations.",
            "I appreciate your inquisitive nature. What other aspects of this topic intrigue you?",
        ],
        Caring => &[
            "Your caring nature really comes through. It's wonderful to see such compassion.",
            "I can tell you really care deeply. That kind of empathy is so valuable.",
            "Your concern for others is evident. How do you balance caring for others with self-care?",
            "That's a very thoughtful perspective. Caring connections are so important in life.",
            "I appreciate your compassionate approach. What inspired you to be so caring?",
        ],
        Confusion => &[
            "I can understand why that might be confusing. Would it help to break this down into simpler parts?",
            "It's perfectly normal to feel confused sometimes. Which aspect is most unclear?",
            "That does sound puzzling. Sometimes talking through confusion helps clarify our thoughts.",
            "I see why you might be feeling confused. Would looking at this from a different angle help?",
            "Confusion often comes before clarity. What specific questions do you have that might help sort this out?",
        ],
        Desire => &[
            "I can hear how much you want this. What makes it so meaningful to you?",
            "That desire comes through strongly. What steps might bring you closer to what you want?",
            "It's powerful to recognize our desires so clearly. What would fulfilling this desire bring to your life?",
            "I understand that feeling of wanting something deeply. How long have you felt this way?",
            "Your desire is completely valid. Sometimes naming what we want is the first step toward it.",
        ],
        Joy => &[
            "It's wonderful to hear you're feeling happy! Those positive moments are worth savoring.",
            "That's great! Joy is such an energizing emotion. What's bringing you happiness right now?",
            "I'm glad you're feeling good! Positive emotions can really brighten our perspective.",
            "That's lovely to hear! Happiness often comes from the things that matter most to us.",
            "Wonderful! Those moments of joy are so valuable. Is there a way to bring more of this into your daily life?",
        ],
        Desperation => &[
            "I hear that you're feeling overwhelmed right now. Remember that difficult moments do pass with time.",
            "It sounds like you're going through a really tough time. Would talking about specific concerns help?",
            "I understand you're feeling desperate. Sometimes taking one small step can help regain some sense of control.",
            "That sounds incredibly difficult. Remember that reaching out for help shows real strength.",
            "I'm sorry you're feeling this way. Your feelings are valid, and there are resources that can help during these times.",
        ],
        Disappointment => &[
            "I can hear your disappointment. It's hard when reality doesn't match our expectations.",
            "That does sound disappointing. How are you processing this letdown?",
            "I understand that feeling of disappointment. What had you hoped would happen instead?",
            "It's natural to feel disappointed when things don't go as planned. What might help you move forward?",
            "I'm sorry things didn't work out as you'd hoped. Sometimes disappointment can teach us something valuable about our expectations.",
        ],
        Disapproval => &[
            "I understand you don't approve of this. Our values often shape what we find acceptable.",
            "I can hear your disapproval clearly. What specific aspects do you find most problematic?",
            "Your disapproval makes sense given what you've described. What standards or values is this violating for you?",
            "I appreciate you sharing your perspective. Disapproval often stems from our core values being challenged.",
            "I can tell you feel strongly about this. What would a more acceptable alternative look like to you?",
        ],
        Embarassment => &[
            "That does sound embarrassing. Remember that everyone has moments they wish they could redo.",
            "I understand that feeling of embarrassment. How are you handling it?",
            "Embarrassing moments can feel so intense in the moment. Do you think others noticed as much as you felt they did?",
            "That kind of situation would make many people nervous. Is there a way to look at it with some self-compassion?",
            "Embarrassment is such a universal human experience. Sometimes sharing these moments helps take away some of their power.",
        ],
        Sadness => &[
            "I understand you're feeling down. It's okay to experience sadness - it's a natural part of life.",
            "I'm sorry to hear you're feeling sad. Would you like to talk about what's on your mind?",
            "It's okay to feel sad sometimes. Taking care of yourself during these moments is important.",
            "I hear that you're feeling low right now. Sometimes expressing these feelings can help lighten the burden.",
            "Sadness is a natural response to difficult situations. Is there something specific that triggered this feeling?",
        ],
        Anger => &[
            "I can tell you're feeling frustrated. Sometimes anger signals that something important to us has been affected.",
            "It sounds like you're feeling pretty upset. Would it help to talk about what happened?",
            "I understand you're angry. That's a natural response when we feel wronged or when our boundaries aren't respected.",
            "Your frustration comes through clearly. Sometimes anger can help us identify what matters to us.",
            "I hear your anger. Taking some time to process these feelings before acting can sometimes be helpful.",
        ],
        Fear => &[
            "It sounds like you're feeling anxious. Fear is often our mind's way of trying to protect us.",
            "I understand you're feeling scared. Would it help to break down what's causing this fear?",
            "Being afraid is completely natural. Sometimes naming our specific fears can make them feel more manageable.",
            "I hear that you're worried. Sometimes our fears feel bigger when we face them alone.",
            "It's okay to feel afraid. Is there a particular aspect of this situation that concerns you most?",
        ],
        Excitement => &[
            "Your excitement is contagious! What are you most looking forward to about this?",
            "I can feel your enthusiasm! It's wonderful when something energizes us like that.",
            "That sounds really exciting! How are you channeling all that positive energy?",
            "I can tell you're thrilled about this. What aspect has you most excited?",
            "Your excitement really comes through! These moments of anticipation can be so enjoyable.",
        ],
        Gratitude => &[
            "That's a beautiful expression of gratitude. Appreciation can really enrich our experiences.",
            "I can tell you're truly thankful. What impact has this had on you?",
            "Expressing gratitude is so powerful. How has being thankful affected your perspective?",
            "That's wonderful that you're feeling grateful. Recognizing what we appreciate can be so meaningful.",
            "I appreciate you sharing your gratitude. What other things in life are you finding yourself thankful for?",
        ],
        Nervousness => &[
            "I can understand why you'd feel nervous. Those jittery feelings are your body's natural response.",
            "Being nervous before something important is completely normal. How do you usually manage these feelings?",
            "I hear that you're feeling on edge. Sometimes acknowledging our nervousness can help reduce its power.",
            "That kind of situation would make many people nervous. Is there anything that might help you feel more grounded?",
            "It's okay to feel nervous. Sometimes it's just our body's way of preparing for something that matters to us.",
        ],
        Surprise => &[
            "That does sound unexpected! Surprises can really catch us off guard.",
            "I can imagine that was surprising. How are you processing this unexpected development?",
            "Unexpected events can certainly be jarring. How are you adjusting to this surprise?",
            "That's quite a surprise. Sometimes the unexpected gives us a chance to see things differently.",
            "I understand this wasn't what you anticipated. How do you feel about this unexpected turn?",
        ],
        Love => &[
            "That's a beautiful sentiment. Love and connection are such fundamental human needs.",
            "It's wonderful to hear about those feelings of love and attachment. Relationships add so much to our lives.",
            "Those feelings of love sound meaningful. Connections with others often bring the greatest joy.",
            "That's lovely. The people we care about help make life rich and meaningful.",
            "It's wonderful to experience those feelings of connection. What do you value most about this relationship?",
        ],
        Disgust => &[
            "I understand that doesn't sit well with you. Our sense of disgust often connects to our values.",
            "That sounds really off-putting. Sometimes strong negative reactions tell us something important.",
            "I can see why you'd find that disturbing. Would you like to talk more about what specifically bothers you?",
            "That reaction makes sense. Feeling disgusted often relates to things that conflict with our sense of what's right.",
            "I understand your aversion to that. What aspects do you find most troubling?",
        ],
        Neutral => &[
            "Sometimes a balanced perspective helps us see things clearly. What's on your mind today?",
            "That sounds like a measured approach. Is there anything specific you'd like to explore further?",
            "Taking a neutral stance can be valuable. Is there a particular aspect of this you're considering?",
            "I appreciate your balanced view. What factors are you weighing as you think about this?",
            "Sometimes that middle ground is exactly where clarity emerges. What are your thoughts on next steps?",
        ],
        Nostalgia => &[
            "Those nostalgic memories can be so powerful. What do you miss most about that time?",
            "I can hear the nostalgia in your words. How does remembering that time make you feel?",
            "Those memories seem really meaningful to you. What makes that time so special in your recollection?",
            "Nostalgia often connects us with important parts of our history. How has that time shaped who you are now?",
            "Those fond memories of the past can be so comforting. What aspects of that time would you bring into the present if you could?",
        ],
        Optimism => &[
            "I love your positive outlook! What's giving you this sense of optimism?",
            "That hopeful perspective is wonderful to hear. What possibilities are you most excited about?",
            "Your optimism really shines through. How does maintaining this positive outlook help you?",
            "It's great to hear such a hopeful view. What's contributing to your positive expectations?",
            "That optimistic approach can be so powerful. How does it influence the way you approach challenges?",
        ],
        Pride => &[
            "You have every reason to feel proud! What aspect of this achievement means the most to you?",
            "That sense of pride is well-deserved. How did you overcome the challenges along the way?",
            "I can hear how proud you are, and rightfully so! What did you learn about yourself through this process?",
            "Taking pride in your accomplishments is important. How will you celebrate this achievement?",
            "That's definitely something to be proud of. What's the next goal you're setting your sights on?",
        ],
        Realisation => &[
            "That moment of realization can be so powerful. How has this new understanding changed your perspective?",
            "It sounds like something really clicked for you. What led to this insight?",
            "Those 'aha' moments can be transformative. How do you feel now that you've made this connection?",
            "Realizations like that can really shift our understanding. What will you do with this new insight?",
            "I can sense how significant this realization is for you. How does it change things moving forward?",
        ],
        Remorse => &[
            "I can hear your regret. Being able to acknowledge mistakes is actually a sign of strength.",
            "It sounds like you're feeling remorseful. What would you do differently if you could?",
            "Feeling regret can be difficult but also valuable for growth. Have you considered how to make amends?",
            "I understand that feeling of remorse. Sometimes the best response is to learn from the experience and move forward.",
            "It takes courage to acknowledge when we've done something we regret. How might this experience shape your future choices?",
        ],
        _ => &[],
    }
}

/// Follow-up used after an acknowledgement when the topic has no reply.
pub const FOLLOW_UP: &str = "What else would you like to know?";

/// Opening sentence for a topic. `None` for topics without one.
pub fn topic_reply(topic: Topic) -> Option<&'static str> {
    let reply = match topic {
        Topic::General => "I'm here to help. What would you like to talk about today?",
        Topic::Health => {
            "Health is so important. What aspects of your wellbeing are you focusing on right now?"
        }
        Topic::Technology => {
            "Technology can be both fascinating and challenging. What's on your mind in the tech world?"
        }
        Topic::Education => {
            "Learning opens so many doors. What are you curious about or working to understand better?"
        }
        Topic::Entertainment => {
            "Taking time for enjoyment is essential for balance. What kind of entertainment interests you?"
        }
        Topic::Politics => {
            "Staying informed about current events can be valuable. What aspects of this topic are you thinking about?"
        }
        Topic::Science => {
            "Science helps us understand our world in amazing ways. What scientific topics interest you?"
        }
        Topic::Relationships => {
            "Connections with others are a fundamental part of life. How are your relationships going?"
        }
        Topic::PersonalDevelopment => {
            "Growth is a journey, not a destination. What areas of development are you focusing on?"
        }
        Topic::Finance => {
            "Financial wellbeing contributes to peace of mind. What financial matters are you considering?"
        }
        Topic::Drinks => return None,
    };
    Some(reply)
}

/// Short reply used when the full analysis failed and only a coarse label
/// is known.
pub fn fallback_reply(category: EmotionCategory) -> &'static str {
    match category {
        Joy => "I'm glad you're feeling positive! Could you tell me more about what's on your mind?",
        Sadness => "I sense you might be feeling down. Would you like to talk about it?",
        Anger => {
            "I understand you might be frustrated. Would you like to discuss what's bothering you?"
        }
        Fear => "It seems like something might be concerning you. Would you like to talk about it?",
        Surprise => "That sounds surprising! Would you like to tell me more about it?",
        Love => "I appreciate your positive feelings. What else would you like to talk about?",
        Disgust => "I understand that might be unpleasant. Would you like to discuss something else?",
        Trust => "I value your trust. What else would you like to discuss?",
        _ => DEFAULT_FALLBACK,
    }
}
