use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Inflected forms of a verb that does not follow the regular rules.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct IrregularEntry {
    pub lemma: String,
    pub singular: String,
    pub plural: String,
    pub past: String,
    /// Only `be` distinguishes number in the past ("was" / "were").
    pub past_plural: Option<String>,
}

/// Word lists the engine consults. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub irregular_verbs: Vec<IrregularEntry>,
    /// Nouns that look like verbs in headlines ("report", "poll").
    pub never_verbs: Vec<String>,
    /// Function words that never count as verb evidence.
    pub skip_words: Vec<String>,
    /// Surface forms accepted as verbs when no annotator model is available.
    pub common_verbs: Vec<String>,
    pub question_words: Vec<String>,
    pub plural_quantifiers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconError {
    /// The bytes are not a valid lexicon archive.
    Corrupt,
    /// The archive decoded but holds no verb data.
    Empty,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Corrupt => write!(f, "lexicon archive failed validation"),
            LexiconError::Empty => write!(f, "lexicon archive contains no verbs"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}

const LEXICON_VERSION: u32 = 1;

// (lemma, 3sg present, plural present, past, past plural)
const IRREGULAR_VERBS: &[(&str, &str, &str, &str, Option<&str>)] = &[
    ("be", "is", "are", "was", Some("were")),
    ("have", "has", "have", "had", None),
    ("do", "does", "do", "did", None),
    ("go", "goes", "go", "went", None),
    ("say", "says", "say", "said", None),
    ("make", "makes", "make", "made", None),
    ("take", "takes", "take", "took", None),
    ("come", "comes", "come", "came", None),
    ("get", "gets", "get", "got", None),
    ("give", "gives", "give", "gave", None),
    ("find", "finds", "find", "found", None),
    ("tell", "tells", "tell", "told", None),
    ("feel", "feels", "feel", "felt", None),
    ("leave", "leaves", "leave", "left", None),
    ("win", "wins", "win", "won", None),
    ("lose", "loses", "lose", "lost", None),
    ("show", "shows", "show", "showed", None),
    ("break", "breaks", "break", "broke", None),
    ("begin", "begins", "begin", "began", None),
    ("become", "becomes", "become", "became", None),
    ("lead", "leads", "lead", "led", None),
    ("bring", "brings", "bring", "brought", None),
    ("keep", "keeps", "keep", "kept", None),
    ("hold", "holds", "hold", "held", None),
    ("run", "runs", "run", "ran", None),
    ("stand", "stands", "stand", "stood", None),
    ("fall", "falls", "fall", "fell", None),
    ("rise", "rises", "rise", "rose", None),
    ("set", "sets", "set", "set", None),
    ("meet", "meets", "meet", "met", None),
    ("think", "thinks", "think", "thought", None),
    ("know", "knows", "know", "knew", None),
    ("see", "sees", "see", "saw", None),
    ("mean", "means", "mean", "meant", None),
    ("choose", "chooses", "choose", "chose", None),
    ("beat", "beats", "beat", "beat", None),
    ("quit", "quits", "quit", "quit", None),
    ("die", "dies", "die", "died", None),
    ("fight", "fights", "fight", "fought", None),
    ("grow", "grows", "grow", "grew", None),
    ("cut", "cuts", "cut", "cut", None),
    ("build", "builds", "build", "built", None),
    ("send", "sends", "send", "sent", None),
    ("spend", "spends", "spend", "spent", None),
    ("sell", "sells", "sell", "sold", None),
    ("buy", "buys", "buy", "bought", None),
    ("pay", "pays", "pay", "paid", None),
    ("strike", "strikes", "strike", "struck", None),
    ("hit", "hits", "hit", "hit", None),
    ("seek", "seeks", "seek", "sought", None),
    ("will", "will", "will", "would", None),
    ("can", "can", "can", "could", None),
    ("may", "may", "may", "might", None),
    ("must", "must", "must", "must", None),
    ("shall", "shall", "shall", "should", None),
    ("would", "would", "would", "would", None),
    ("could", "could", "could", "could", None),
    ("might", "might", "might", "might", None),
    ("should", "should", "should", "should", None),
];

// Regular verbs whose inflections are accepted as verb evidence.
const REGULAR_VERBS: &[&str] = &[
    "want", "ask", "work", "seem", "try", "call", "announce", "reveal", "face", "reach",
    "plan", "launch", "open", "close", "end", "continue", "remain", "appear", "follow",
    "turn", "start", "stop", "help", "move", "play", "include", "suggest", "consider",
    "report", "claim", "argue", "believe", "look", "sound", "offer", "provide", "serve",
    "use", "need", "require", "expect", "hope", "wish", "decide", "pick", "select", "vote",
    "elect", "defeat", "score", "fail", "pass", "join", "resign", "retire", "kill",
    "save", "protect", "attack", "defend", "struggle", "suffer", "enjoy", "love", "hate",
    "fear", "worry", "care", "matter", "change", "develop", "improve", "increase",
    "decrease", "reduce", "add", "remove", "create", "destroy", "damage", "fix", "repair",
    "replace", "discover", "warn", "urge", "ban", "approve", "reject", "probe", "slam",
    "vow", "seize", "sue", "charge", "arrest", "jail", "push", "block", "back", "hail",
    "mark", "unveil", "confirm", "deny", "admit", "return", "surge", "plunge", "soar",
    "slump", "threaten", "demand", "target", "hike", "lift", "ease", "shift", "sign",
    "delay", "halt", "resume", "clash", "rescue", "escape",
];

// Participles that differ from the simple past, and doubled-consonant forms.
const IRREGULAR_EXTRA_FORMS: &[&str] = &[
    "been", "being", "done", "gone", "taken", "given", "shown", "broken", "begun", "fallen",
    "risen", "known", "seen", "chosen", "beaten", "grown", "planned", "planning", "stopped",
    "stopping", "banned", "slammed", "admitted", "quitting", "winning", "running", "getting",
    "setting", "cutting", "hitting", "beginning", "tied", "tying", "dying", "fled", "flees",
];

const NEVER_VERBS: &[&str] = &[
    "news", "report", "update", "story", "article", "poll", "data", "study", "research",
    "analysis", "review", "survey",
];

const SKIP_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "to", "for", "of", "in", "on", "at",
    "by", "with", "from", "about", "as",
];

const QUESTION_WORDS: &[&str] = &["who", "what", "where", "when", "why", "how", "which", "whose"];

const PLURAL_QUANTIFIERS: &[&str] = &[
    "several", "many", "both", "all", "some", "most", "few", "these", "those",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Naive regular inflections, good enough for a membership list.
fn regular_forms(lemma: &str) -> [String; 4] {
    let stem_y = lemma.len() > 1
        && lemma.ends_with('y')
        && !matches!(lemma.as_bytes()[lemma.len() - 2], b'a' | b'e' | b'i' | b'o' | b'u');
    let sibilant = ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| lemma.ends_with(s));

    let third = if stem_y {
        alloc::format!("{}ies", &lemma[..lemma.len() - 1])
    } else if sibilant {
        alloc::format!("{}es", lemma)
    } else {
        alloc::format!("{}s", lemma)
    };
    let past = if stem_y {
        alloc::format!("{}ied", &lemma[..lemma.len() - 1])
    } else if lemma.ends_with('e') {
        alloc::format!("{}d", lemma)
    } else {
        alloc::format!("{}ed", lemma)
    };
    let gerund = if lemma.ends_with('e') && !lemma.ends_with("ee") && lemma.len() > 2 {
        alloc::format!("{}ing", &lemma[..lemma.len() - 1])
    } else {
        alloc::format!("{}ing", lemma)
    };
    [lemma.to_string(), third, past, gerund]
}

impl Lexicon {
    /// The built-in English headline lexicon.
    pub fn english() -> Self {
        let irregular_verbs: Vec<IrregularEntry> = IRREGULAR_VERBS
            .iter()
            .map(|(lemma, singular, plural, past, past_plural)| IrregularEntry {
                lemma: lemma.to_string(),
                singular: singular.to_string(),
                plural: plural.to_string(),
                past: past.to_string(),
                past_plural: past_plural.map(|p| p.to_string()),
            })
            .collect();

        let mut common_verbs = Vec::new();
        for entry in &irregular_verbs {
            for form in [&entry.lemma, &entry.singular, &entry.plural, &entry.past] {
                if !common_verbs.contains(form) {
                    common_verbs.push(form.clone());
                }
            }
        }
        for lemma in REGULAR_VERBS {
            for form in regular_forms(lemma) {
                if !common_verbs.contains(&form) {
                    common_verbs.push(form);
                }
            }
        }
        for form in IRREGULAR_EXTRA_FORMS {
            if !common_verbs.iter().any(|v| v == form) {
                common_verbs.push(form.to_string());
            }
        }

        Self {
            version: LEXICON_VERSION,
            irregular_verbs,
            never_verbs: owned(NEVER_VERBS),
            skip_words: owned(SKIP_WORDS),
            common_verbs,
            question_words: owned(QUESTION_WORDS),
            plural_quantifiers: owned(PLURAL_QUANTIFIERS),
        }
    }

    /// Loads a lexicon from an archive written by `lexicon-compiler`.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // The archive root must be aligned; file buffers are not guaranteed to be.
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<Lexicon>(&aligned).map_err(|_| LexiconError::Corrupt)?;
        let lexicon: Lexicon = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|_| LexiconError::Corrupt)?;

        if lexicon.irregular_verbs.is_empty() && lexicon.common_verbs.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(lexicon)
    }

    pub fn irregular(&self, lemma: &str) -> Option<&IrregularEntry> {
        self.irregular_verbs.iter().find(|e| e.lemma == lemma)
    }
}
