use std::collections::HashMap;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::genre::Genre;
use crate::model::{Element, ElementAnalysis};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    score_min: i32,
    score_max: i32,
    strong_min: i32,
    adequate_min: i32,
    genre_signal_points: i32,
    protagonist_max_words: usize,
}

static HP: Hyperparameters = Hyperparameters {
    score_min: 0,
    score_max: 95,
    strong_min: 80,
    adequate_min: 60,
    genre_signal_points: 5,
    protagonist_max_words: 8,
};

// ---------------------------------------------------------------------------
// Category tables
// ---------------------------------------------------------------------------

struct ScoringCategory {
    name: &'static str,
    pattern: Regex,
    points: i32,
}

/// Subtracts points when its pattern matches, unless `waived_by` already fired.
struct PenaltyCategory {
    name: &'static str,
    pattern: Regex,
    points: i32,
    waived_by: &'static str,
}

struct ElementRules {
    base: i32,
    categories: Vec<ScoringCategory>,
    penalty: Option<PenaltyCategory>,
}

fn category(name: &'static str, pattern: &str, points: i32) -> ScoringCategory {
    ScoringCategory {
        name,
        pattern: Regex::new(pattern).unwrap(),
        points,
    }
}

fn penalty(name: &'static str, pattern: &str, points: i32, waived_by: &'static str) -> PenaltyCategory {
    PenaltyCategory {
        name,
        pattern: Regex::new(pattern).unwrap(),
        points,
        waived_by,
    }
}

// All patterns run against the lowercased logline.

static PROTAGONIST_RULES: Lazy<ElementRules> = Lazy::new(|| ElementRules {
    base: 50,
    categories: vec![
        category(
            "role",
            r"\b(detective|cop|officer|agent|lawyer|attorney|doctor|surgeon|nurse|soldier|marine|veteran|teacher|professor|scientist|journalist|reporter|pilot|chef|cook|priest|nun|thief|hacker|assassin|spy|farmer|musician|singer|pianist|writer|artist|boxer|athlete|ceo|executive|accountant|auditor|negotiator|paramedic|firefighter|smokejumper|sheriff|mechanic|student|astronaut|engineer|linguist|mercenary|knight|wizard|witch|princess|prince|queen|king|scribe|healer|driver)s?\b",
            15,
        ),
        category(
            "descriptor",
            r"\b(disgraced|grieving|washed-up|reclusive|ambitious|troubled|retired|rookie|former|estranged|widowed|cynical|reluctant|naive|ruthless|struggling|aging|broke|burned-out|obsessive|shy|cowardly|exiled|orphaned|divorced|alcoholic|paranoid|hotshot|ex-[a-z]+)\b",
            10,
        ),
        category(
            "identity_detail",
            r"\b(\d+-year-old|teenage|teen|single (mother|father|mom|dad)|middle-aged|elderly)\b",
            10,
        ),
        category("defining_clause", r"\b(who|whose)\b", 5),
    ],
    penalty: Some(penalty(
        "generic_pronoun",
        r"^\s*(?:(?:a|an|the)\s+)?(?:man|woman|person|guy|girl|boy|someone|somebody|he|she|they|people|hero|character)\b",
        -10,
        "descriptor",
    )),
});

static CONFLICT_RULES: Lazy<ElementRules> = Lazy::new(|| ElementRules {
    base: 55,
    categories: vec![
        category(
            "obligation",
            r"\b(must|forced to|has to|have to|needs to|need to)\b",
            15,
        ),
        category(
            "opposition",
            r"\b(against|versus|battle|battles|fight|fights|confront|confronts|enemy|enemies|rival|rivals|stop|stops|defeat|outwit|hunt|hunts|hunted|pursued|escape|escapes)\b",
            10,
        ),
        category(
            "complication",
            r"\b(but|when|until|while|despite|even as|only to)\b",
            10,
        ),
        category(
            "ticking_clock",
            r"\b(before|within|hours|days|deadline|countdown|midnight|time runs out|clock)\b",
            5,
        ),
    ],
    penalty: Some(penalty(
        "passive_intent",
        r"\b(tries to|wants to|decides to|hopes to)\b",
        -5,
        "obligation",
    )),
});

static STAKES_RULES: Lazy<ElementRules> = Lazy::new(|| ElementRules {
    base: 50,
    categories: vec![
        category(
            "peril",
            r"\b(die|dies|death|dead|kill|kills|killed|destroy|destroys|destroyed|lose|loses|lost|forever|doomed|extinction|collapse|ruin|ruined|perish)\b",
            15,
        ),
        category(
            "personal_loss",
            r"\b(family|daughter|son|wife|husband|child|children|mother|father|home|soul|freedom|sanity|career|life|marriage|reputation|inheritance)\b",
            10,
        ),
        category(
            "scale",
            r"\b(world|city|town|country|humanity|everyone|planet|nation|universe|kingdom|civilization)\b",
            10,
        ),
        category(
            "consequence",
            r"\b(or else|otherwise|before it'?s too late|if (?:he|she|they) fails?|or (?:lose|risk|die|face)|at the cost of)\b",
            10,
        ),
    ],
    penalty: Some(penalty(
        "vague_stakes",
        r"\b(things|stuff|something bad|everything changes)\b",
        -5,
        "peril",
    )),
});

static HOOK_RULES: Lazy<ElementRules> = Lazy::new(|| ElementRules {
    base: 55,
    categories: vec![
        category(
            "irony",
            r"\b(but|only to|discovers|secretly|turns out|unaware|little does|revealed)\b",
            10,
        ),
        category(
            "speculative",
            r"\b(time loop|time travel|ghosts?|robot|android|clone|aliens?|parallel|magic|cursed|curse|immortal|invisible|dreams?|memory|memories|virtual|haunted|dragon|vampire|werewolf|zombie|prophecy|artificial intelligence)\b",
            15,
        ),
        category(
            "contrast",
            r"\b(only|last|first|never|undercover|disguised|impossible|pretend|pretends|identical|secret)\b",
            10,
        ),
        category("specificity", r"\b\d+\b", 5),
    ],
    penalty: Some(penalty(
        "cliche",
        r"\b(save the world|against all odds|journey of self-discovery|race against time|nothing is what it seems)\b",
        -10,
        "speculative",
    )),
});

static EMOTIONAL_CORE_RULES: Lazy<ElementRules> = Lazy::new(|| ElementRules {
    base: 60,
    categories: vec![
        category(
            "emotion",
            r"\b(love|loves|grief|grieving|guilt|fear|fears|hope|redemption|forgiveness|lonely|loneliness|betrayal|betrayed|revenge|shame|regret|jealous|jealousy|heartbroken|trauma)\b",
            15,
        ),
        category(
            "relationship",
            r"\b(daughter|son|mother|father|brother|sister|wife|husband|friend|lover|partner|mentor|family|estranged|child)\b",
            10,
        ),
        category(
            "inner_change",
            r"\b(learn|learns|overcome|overcomes|heal|heals|reconcile|reconciles|accept|accepts|forgive|forgives|confront (?:his|her|their) (?:past|fears?|demons))\b",
            10,
        ),
    ],
    penalty: None,
});

/// Genre vocabulary that earns the hook a small bonus when present.
static GENRE_SIGNALS: Lazy<HashMap<Genre, Regex>> = Lazy::new(|| {
    [
        (Genre::Thriller, r"\b(conspiracy|killer|fbi|cia|assassin|hostage|kidnapped|blackmail|cartel)\b"),
        (Genre::Horror, r"\b(haunted|demon|possessed|curse|cursed|creature|ghost|blood|ritual|monster)\b"),
        (Genre::Drama, r"\b(dying|illness|divorce|grief|addiction|reunion|diagnosis)\b"),
        (Genre::Comedy, r"\b(accidentally|mistaken|hapless|bumbling|wedding|fake|disguise)\b"),
        (Genre::SciFi, r"\b(ai|android|planet|colony|clone|space|alien|genetic|simulation)\b"),
        (Genre::Action, r"\b(heist|explosion|mercenary|rescue|chase|terrorists?|special forces)\b"),
        (Genre::Romance, r"\b(falls? for|wedding|heart|kiss|soulmate|ex-fianc\w*)\b"),
        (Genre::Fantasy, r"\b(magic|kingdom|dragon|prophecy|sorcer\w+|realm|quest|enchanted)\b"),
    ]
    .into_iter()
    .map(|(genre, pattern)| (genre, Regex::new(pattern).unwrap()))
    .collect()
});

fn rules_for(element: Element) -> &'static ElementRules {
    match element {
        Element::Protagonist => &PROTAGONIST_RULES,
        Element::Conflict => &CONFLICT_RULES,
        Element::Stakes => &STAKES_RULES,
        Element::UniqueHook => &HOOK_RULES,
        Element::EmotionalCore => &EMOTIONAL_CORE_RULES,
    }
}

// ---------------------------------------------------------------------------
// Extraction patterns
// ---------------------------------------------------------------------------

static LEADING_CLAUSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:when|after|as|while|once|if|following|with|in a world where|years after)\b[^,]*,\s*")
        .unwrap()
});

static PROTAGONIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*((?:(?:an?|the)\s+)?[^,.;]+?)\s+(?:who|whose|must|is|finds|discovers|learns|tries|has|wants|struggles|sets|races|fights|becomes|returns|falls|gets|goes|needs)\b",
    )
    .unwrap()
});

static CONFLICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:must|forced to|has to|have to|needs to)\s+[^,.;]+").unwrap()
});

static GOAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:must|forced to|has to|have to|needs to)\s+([^,.;]+)").unwrap()
});

static GOAL_STOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:before|or else|or|until|while|but|when|otherwise)\b").unwrap()
});

static STAKES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:before|or else|otherwise|or (?:lose|risk|die|face)|if (?:he|she|they) fails?)\b[^,.;]*",
    )
    .unwrap()
});

static STAKES_SLOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:before|or else|otherwise)\s+([^,.;]+)").unwrap());

static HOOK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:but|only to|unaware that|who secretly|until|discovers)\b[^,.;]*").unwrap()
});

static EMOTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:love|loves|grief|grieving|guilt|fear|hope|redemption|forgiveness|lonely|betrayal|revenge|shame|regret|estranged|heartbroken)\b[^,.;]*",
    )
    .unwrap()
});

// ---------------------------------------------------------------------------
// Assessment copy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Strong,
    Adequate,
    Weak,
}

fn tier_for(score: i32) -> Tier {
    if score >= HP.strong_min {
        Tier::Strong
    } else if score >= HP.adequate_min {
        Tier::Adequate
    } else {
        Tier::Weak
    }
}

struct ElementCopy {
    strong: &'static str,
    adequate: &'static str,
    weak: &'static str,
    weakness: &'static str,
    placeholder: &'static str,
    suggestions: &'static [&'static str],
    affirmation: &'static str,
}

static PROTAGONIST_COPY: ElementCopy = ElementCopy {
    strong: "Strong, specific protagonist with a clear identity",
    adequate: "Protagonist is present but could be more distinctive",
    weak: "Protagonist is generic or unclear",
    weakness: "Your protagonist lacks a defining trait, profession, or flaw that makes them memorable.",
    placeholder: "No clear protagonist identified",
    suggestions: &[
        "Give your protagonist a profession or role that matters to the plot",
        "Add an adjective that reveals a flaw or history (disgraced, grieving, reluctant)",
        "Make the protagonist someone only this story could be about",
    ],
    affirmation: "Protagonist is well defined. Keep this specificity in the full pitch.",
};

static CONFLICT_COPY: ElementCopy = ElementCopy {
    strong: "Clear, compelling central conflict",
    adequate: "Conflict is implied but not sharply defined",
    weak: "Conflict is vague or missing",
    weakness: "The logline doesn't establish what your protagonist must overcome or who stands in their way.",
    placeholder: "No explicit conflict identified",
    suggestions: &[
        "State what the protagonist must do using 'must' or 'is forced to'",
        "Name the opposing force: a rival, a system, or the protagonist's own flaw",
        "Add a complication that makes the goal harder to reach",
    ],
    affirmation: "Conflict is clear and active. The audience knows what stands in the way.",
};

static STAKES_COPY: ElementCopy = ElementCopy {
    strong: "High, tangible stakes",
    adequate: "Stakes exist but feel abstract",
    weak: "Stakes are missing or too low",
    weakness: "It's unclear what happens if your protagonist fails. Without consequences there is no urgency.",
    placeholder: "Stakes not clearly stated",
    suggestions: &[
        "Spell out what is lost if the protagonist fails",
        "Make the stakes personal as well as external",
        "Add a deadline so the consequence feels imminent",
    ],
    affirmation: "Stakes are tangible and urgent. Failure clearly costs something.",
};

static HOOK_COPY: ElementCopy = ElementCopy {
    strong: "Distinctive hook that sets this apart",
    adequate: "Hook is present but familiar",
    weak: "No clear hook differentiating this story",
    weakness: "Nothing in the logline separates this story from others in the genre.",
    placeholder: "Unique angle not explicit",
    suggestions: &[
        "Add an ironic twist that turns the premise on its head",
        "Introduce one unexpected element that only this story has",
        "Replace familiar phrasing with a concrete, surprising detail",
    ],
    affirmation: "The hook is distinctive. This concept stands out in its genre.",
};

static EMOTIONAL_CORE_COPY: ElementCopy = ElementCopy {
    strong: "Resonant emotional core",
    adequate: "Emotional dimension is hinted at",
    weak: "Emotional core is missing",
    weakness: "The logline gives no sense of what your protagonist feels or stands to lose personally.",
    placeholder: "Emotional core not explicit",
    suggestions: &[
        "Tie the plot to a relationship the protagonist cares about",
        "Name the emotion driving the protagonist (guilt, grief, love, fear)",
        "Hint at the inner change the story will force",
    ],
    affirmation: "The emotional core resonates. The audience has a reason to care.",
};

fn copy_for(element: Element) -> &'static ElementCopy {
    match element {
        Element::Protagonist => &PROTAGONIST_COPY,
        Element::Conflict => &CONFLICT_COPY,
        Element::Stakes => &STAKES_COPY,
        Element::UniqueHook => &HOOK_COPY,
        Element::EmotionalCore => &EMOTIONAL_CORE_COPY,
    }
}

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Byte offset where the main clause begins, past any opening
/// "When ..., " style clause.
pub(crate) fn main_clause_start(logline: &str) -> usize {
    LEADING_CLAUSE_RE.find(logline).map_or(0, |m| m.end())
}

/// Byte span of the protagonist phrase within `logline`.
pub(crate) fn protagonist_span(logline: &str) -> Option<(usize, usize)> {
    let start = main_clause_start(logline);
    let phrase = PROTAGONIST_RE.captures(&logline[start..])?.get(1)?;
    Some((start + phrase.start(), start + phrase.end()))
}

/// Leading noun phrase naming the protagonist, skipping an opening
/// subordinate clause ("When ..., a retired agent must ...").
pub(crate) fn extract_protagonist(logline: &str) -> Option<String> {
    let (start, end) = protagonist_span(logline)?;
    let phrase = non_empty(&logline[start..end])?;
    if phrase.split_whitespace().count() > HP.protagonist_max_words {
        return None;
    }
    Some(phrase)
}

/// Verb phrase following "must"/"has to", cut before any stakes connective.
pub(crate) fn extract_goal(logline: &str) -> Option<String> {
    let caps = GOAL_RE.captures(logline)?;
    let clause = caps.get(1)?.as_str();
    let goal = GOAL_STOP_RE.split(clause).next().unwrap_or(clause);
    non_empty(goal)
}

/// Consequence clause following "before"/"or else".
pub(crate) fn extract_stakes(logline: &str) -> Option<String> {
    let caps = STAKES_SLOT_RE.captures(logline)?;
    non_empty(caps.get(1)?.as_str())
}

fn first_match(re: &Regex, logline: &str) -> Option<String> {
    re.find(logline).and_then(|m| non_empty(m.as_str()))
}

fn extract_text(element: Element, logline: &str) -> Option<String> {
    match element {
        Element::Protagonist => extract_protagonist(logline),
        Element::Conflict => first_match(&CONFLICT_RE, logline),
        Element::Stakes => first_match(&STAKES_RE, logline),
        Element::UniqueHook => first_match(&HOOK_RE, logline),
        Element::EmotionalCore => first_match(&EMOTION_RE, logline),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score plus the names of the categories (bonus and penalty) that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub points: i32,
    pub matched: Vec<&'static str>,
}

pub fn score_categories(element: Element, logline: &str, genre: Option<Genre>) -> CategoryScore {
    let text = logline.to_lowercase();
    let rules = rules_for(element);
    let mut points = rules.base;
    let mut matched = Vec::new();

    for cat in &rules.categories {
        if cat.pattern.is_match(&text) {
            trace!("{}: category '{}' +{}", element.label(), cat.name, cat.points);
            points += cat.points;
            matched.push(cat.name);
        }
    }

    if element == Element::UniqueHook {
        if let Some(signal) = genre.and_then(|g| GENRE_SIGNALS.get(&g)) {
            if signal.is_match(&text) {
                points += HP.genre_signal_points;
                matched.push("genre_signal");
            }
        }
    }

    if let Some(pen) = &rules.penalty {
        if !matched.contains(&pen.waived_by) && pen.pattern.is_match(&text) {
            trace!("{}: penalty '{}' {}", element.label(), pen.name, pen.points);
            points += pen.points;
            matched.push(pen.name);
        }
    }

    CategoryScore {
        points: points.clamp(HP.score_min, HP.score_max),
        matched,
    }
}

pub fn score_element(logline: &str, genre: &str, element: Element) -> ElementAnalysis {
    let scored = score_categories(element, logline, Genre::parse(genre));
    let score = scored.points;
    let copy = copy_for(element);
    debug!("{} scored {score} via {:?}", element.label(), scored.matched);

    let tier = tier_for(score);
    let assessment = match tier {
        Tier::Strong => copy.strong,
        Tier::Adequate => copy.adequate,
        Tier::Weak => copy.weak,
    };
    let weakness = if tier == Tier::Weak { copy.weakness } else { "" };
    let suggestions = if tier == Tier::Strong {
        vec![copy.affirmation.to_string()]
    } else {
        copy.suggestions.iter().map(|s| s.to_string()).collect()
    };

    ElementAnalysis {
        element,
        extracted_text: extract_text(element, logline)
            .unwrap_or_else(|| copy.placeholder.to_string()),
        score,
        assessment: assessment.to_string(),
        weakness: weakness.to_string(),
        suggestions,
        matched_categories: scored.matched.iter().map(|s| s.to_string()).collect(),
    }
}

/// All five dimensions in display order.
pub fn score_all(logline: &str, genre: &str) -> Vec<ElementAnalysis> {
    Element::ALL
        .iter()
        .map(|&element| score_element(logline, genre, element))
        .collect()
}
