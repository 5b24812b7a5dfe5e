use log::debug;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::elements::{
    extract_goal, extract_protagonist, extract_stakes, main_clause_start, protagonist_span,
};
use crate::genre::Genre;
use crate::model::{Element, ElementAnalysis, ProjectedElementScores, RewriteCandidate, RewriteType};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    max_candidates: usize,
    target_below: i32,
    score_floor: i32,
}

static HP: Hyperparameters = Hyperparameters {
    max_candidates: 4,
    target_below: 75,
    score_floor: 0,
};

/// Improvement range, score cap and projection ranges for one rewrite type.
/// Projections are ordered like `Element::ALL`.
struct RewriteProfile {
    rewrite_type: RewriteType,
    improvement: (i32, i32),
    cap: i32,
    projections: [(i32, i32); 5],
}

static FULL_PROFILE: RewriteProfile = RewriteProfile {
    rewrite_type: RewriteType::Full,
    improvement: (12, 21),
    cap: 95,
    projections: [(70, 88); 5],
};

static PROTAGONIST_PROFILE: RewriteProfile = RewriteProfile {
    rewrite_type: RewriteType::Protagonist,
    improvement: (6, 13),
    cap: 92,
    projections: [(78, 92), (55, 75), (55, 75), (55, 75), (60, 78)],
};

static CONFLICT_PROFILE: RewriteProfile = RewriteProfile {
    rewrite_type: RewriteType::Conflict,
    improvement: (7, 15),
    cap: 93,
    projections: [(55, 75), (80, 93), (55, 75), (55, 75), (55, 75)],
};

static STAKES_PROFILE: RewriteProfile = RewriteProfile {
    rewrite_type: RewriteType::Stakes,
    improvement: (8, 17),
    cap: 94,
    projections: [(55, 75), (55, 75), (80, 94), (55, 75), (60, 78)],
};

static HOOK_PROFILE: RewriteProfile = RewriteProfile {
    rewrite_type: RewriteType::Hook,
    improvement: (9, 19),
    cap: 95,
    projections: [(55, 75), (55, 75), (55, 75), (82, 95), (55, 75)],
};

fn profile_for(rewrite_type: RewriteType) -> &'static RewriteProfile {
    match rewrite_type {
        RewriteType::Full => &FULL_PROFILE,
        RewriteType::Protagonist => &PROTAGONIST_PROFILE,
        RewriteType::Conflict => &CONFLICT_PROFILE,
        RewriteType::Stakes => &STAKES_PROFILE,
        RewriteType::Hook => &HOOK_PROFILE,
    }
}

// ---------------------------------------------------------------------------
// Genre phrase banks
// ---------------------------------------------------------------------------

/// Phrase bank driving one genre's rewrites. Frames take the slots
/// `{protagonist}`, `{goal}`, `{stakes}` and `{twist}`; conflict, stakes and
/// twist entries are clauses that read correctly after ", while", ", or" and
/// ", but".
struct GenreBank {
    name: &'static str,
    adjectives: &'static [&'static str],
    protagonists: &'static [&'static str],
    goals: &'static [&'static str],
    conflicts: &'static [&'static str],
    stakes: &'static [&'static str],
    twists: &'static [&'static str],
    frames: &'static [&'static str],
    explanation: &'static str,
    changes: [&'static str; 3],
}

static THRILLER_BANK: GenreBank = GenreBank {
    name: "thriller",
    adjectives: &["disgraced", "paranoid", "burned-out", "obsessive"],
    protagonists: &["a disgraced intelligence analyst", "a burned-out homicide detective"],
    goals: &["expose the conspiracy", "track down the killer"],
    conflicts: &[
        "while a mole inside the agency leaks every move to the enemy",
        "as the killer begins leaving messages addressed to the investigator",
    ],
    stakes: &["a dirty bomb levels downtown", "the only witness is silenced for good"],
    twists: &[
        "the person giving the orders is the one they are hunting",
        "every clue was planted to frame them",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "With hours to spare, {protagonist} has to {goal} or {stakes}, only to learn {twist}.",
        "{protagonist} races to {goal} before {stakes}, unaware that {twist}.",
    ],
    explanation: "Restructured as a ticking-clock thriller with a flawed protagonist, a concrete deadline and a betrayal that turns the investigation inward.",
    changes: [
        "Added a hard deadline",
        "Sharpened the protagonist's flaw",
        "Introduced a betrayal twist",
    ],
};

static HORROR_BANK: GenreBank = GenreBank {
    name: "horror",
    adjectives: &["grieving", "isolated", "haunted", "sleep-deprived"],
    protagonists: &["a grieving mother", "a skeptical paranormal debunker"],
    goals: &["escape the house", "break the curse"],
    conflicts: &[
        "as something in the walls learns to mimic familiar voices",
        "while the town insists nothing is wrong",
    ],
    stakes: &[
        "the entity claims the last of the family",
        "the curse passes to the next child",
    ],
    twists: &[
        "the haunting began the night they arrived",
        "the thing hunting them wears a familiar face",
    ],
    frames: &[
        "Trapped and alone, {protagonist} must {goal} before {stakes}, but {twist}.",
        "{protagonist} has one night to {goal} or {stakes}, and soon realizes {twist}.",
    ],
    explanation: "Reframed around isolation and escalating dread, with a personal wound the threat can exploit.",
    changes: [
        "Isolated the protagonist",
        "Escalated the threat",
        "Tied the horror to a personal wound",
    ],
};

static DRAMA_BANK: GenreBank = GenreBank {
    name: "drama",
    adjectives: &["estranged", "grieving", "proud", "aging"],
    protagonists: &["an estranged daughter", "a proud father"],
    goals: &["repair a broken family", "keep the family business alive"],
    conflicts: &[
        "while old resentments threaten to tear the family apart",
        "even as the people closest refuse to forgive",
    ],
    stakes: &[
        "the last chance at reconciliation slips away",
        "the family loses the only home it has known",
    ],
    twists: &[
        "the secret they have kept for years is about to surface",
        "the person they blame is the one who needs them most",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "Forced home after years away, {protagonist} has to {goal} or {stakes}, even though {twist}.",
    ],
    explanation: "Reframed as a character-driven drama where the external goal forces an internal reckoning.",
    changes: [
        "Grounded the conflict in a relationship",
        "Made the stakes personal",
        "Added an emotional secret",
    ],
};

static COMEDY_BANK: GenreBank = GenreBank {
    name: "comedy",
    adjectives: &["hapless", "uptight", "overconfident", "chronically unlucky"],
    protagonists: &["a hapless wedding planner", "an uptight tax auditor"],
    goals: &["keep the lie going", "pull off the wedding of the year"],
    conflicts: &[
        "while a nosy rival does everything possible to expose the scheme",
        "as every attempt to fix things makes them spectacularly worse",
    ],
    stakes: &[
        "the whole town learns the truth",
        "the inheritance goes to an insufferable cousin",
    ],
    twists: &[
        "the only person who can help is the ex they swore never to speak to again",
        "the fake identity turns out to be wanted by the police",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "After one small lie, {protagonist} has to {goal} or {stakes}, and then learns {twist}.",
    ],
    explanation: "Rebuilt around a comic premise that escalates, widening the gap between the protagonist and the situation.",
    changes: [
        "Heightened the comic premise",
        "Added escalating complications",
        "Raised embarrassing stakes",
    ],
};

static SCIFI_BANK: GenreBank = GenreBank {
    name: "sci-fi",
    adjectives: &["rogue", "genetically engineered", "exiled", "obsolete"],
    protagonists: &["a rogue AI engineer", "an exiled colony pilot"],
    goals: &["shut down the system", "decode the alien signal"],
    conflicts: &[
        "while the corporation that built the technology hunts every witness",
        "as the colony's own machines begin to turn against it",
    ],
    stakes: &[
        "humanity loses control of its own memories",
        "the last colony ship goes dark forever",
    ],
    twists: &[
        "the signal is coming from their own future",
        "they are a copy of someone who died years ago",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "{protagonist} has to {goal} or {stakes}, unaware that {twist}.",
        "Years from now, {protagonist} races to {goal} before {stakes}, only to learn {twist}.",
    ],
    explanation: "Restructured around one clear speculative rule with a personal stake and a civilization-scale consequence.",
    changes: [
        "Clarified the speculative premise",
        "Raised the stakes to civilization scale",
        "Added a high-concept twist",
    ],
};

static ACTION_BANK: GenreBank = GenreBank {
    name: "action",
    adjectives: &["battle-scarred", "retired", "outgunned", "reckless"],
    protagonists: &["a retired special forces medic", "a reckless stunt driver"],
    goals: &["fight through a city under siege", "rescue the hostages"],
    conflicts: &[
        "while a private army seals every exit",
        "as the mercenaries who trained them close in",
    ],
    stakes: &[
        "the explosives beneath the stadium detonate",
        "the hostages are executed at dawn",
    ],
    twists: &[
        "the mission was a setup from the start",
        "the mercenary leader is a former partner",
    ],
    frames: &[
        "Outnumbered and out of time, {protagonist} must {goal} before {stakes}, but {twist}.",
        "{protagonist} has to {goal} or {stakes}, and learns too late that {twist}.",
    ],
    explanation: "Rebuilt as a high-octane action pitch with a skilled hero, a relentless enemy and an explosive deadline.",
    changes: [
        "Made the hero outnumbered",
        "Added an explosive deadline",
        "Introduced a personal enemy",
    ],
};

static ROMANCE_BANK: GenreBank = GenreBank {
    name: "romance",
    adjectives: &["cynical", "heartbroken", "commitment-phobic", "hopelessly romantic"],
    protagonists: &["a cynical divorce lawyer", "a heartbroken florist"],
    goals: &["win back the one who got away", "stop the wedding"],
    conflicts: &[
        "while falling for the one person who could ruin everything",
        "as an old flame reappears with an offer too good to refuse",
    ],
    stakes: &[
        "the chance at real love is gone for good",
        "the wedding goes ahead without them",
    ],
    twists: &[
        "the rival is the person they are falling for",
        "their first love is the one planning the wedding",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "Against every instinct, {protagonist} has to {goal} or {stakes}, never suspecting {twist}.",
    ],
    explanation: "Reframed around two opposing hearts and an obstacle that makes the romance feel costly.",
    changes: [
        "Clarified the romantic obstacle",
        "Raised the emotional cost",
        "Added a relationship twist",
    ],
};

static FANTASY_BANK: GenreBank = GenreBank {
    name: "fantasy",
    adjectives: &["cursed", "exiled", "unlikely", "half-trained"],
    protagonists: &["a cowardly scribe", "an exiled sorceress"],
    goals: &["find the lost crown", "break the ancient curse"],
    conflicts: &[
        "while a dark queen sends her hunters across the realm",
        "as every spell cast costs another memory",
    ],
    stakes: &[
        "the kingdom falls into eternal night",
        "the last dragon dies and magic with it",
    ],
    twists: &[
        "the prophecy was written about someone else",
        "the villain is the hero of the last prophecy",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "Chosen by mistake, {protagonist} has to {goal} or {stakes}, only to learn {twist}.",
    ],
    explanation: "Restructured as a quest with a defined magical cost and a twist on the chosen-one promise.",
    changes: [
        "Defined the magic's cost",
        "Raised the stakes to the whole realm",
        "Twisted the prophecy",
    ],
};

static GENERIC_BANK: GenreBank = GenreBank {
    name: "generic",
    adjectives: &["reluctant", "desperate", "unlikely"],
    protagonists: &["a reluctant outsider", "a desperate newcomer"],
    goals: &["set things right", "finish what they started"],
    conflicts: &[
        "while a powerful enemy stands in the way",
        "as the people they trust turn against them",
    ],
    stakes: &[
        "everything they love is lost",
        "the chance to set things right disappears forever",
    ],
    twists: &[
        "the enemy knows their deepest secret",
        "the only ally is the person they wronged",
    ],
    frames: &[
        "{protagonist} must {goal} before {stakes}, but {twist}.",
        "{protagonist} has to {goal} or {stakes}, and soon learns {twist}.",
    ],
    explanation: "Restructured into a clear protagonist, goal and consequence, with a twist to set it apart.",
    changes: [
        "Clarified protagonist and goal",
        "Made the stakes explicit",
        "Added a twist",
    ],
};

fn bank_for(genre: Option<Genre>) -> &'static GenreBank {
    match genre {
        Some(Genre::Thriller) => &THRILLER_BANK,
        Some(Genre::Horror) => &HORROR_BANK,
        Some(Genre::Drama) => &DRAMA_BANK,
        Some(Genre::Comedy) => &COMEDY_BANK,
        Some(Genre::SciFi) => &SCIFI_BANK,
        Some(Genre::Action) => &ACTION_BANK,
        Some(Genre::Romance) => &ROMANCE_BANK,
        Some(Genre::Fantasy) => &FANTASY_BANK,
        None => &GENERIC_BANK,
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

static LEADING_SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*((?:(?:an?|the)\s+)?[^\s,.;:!?]+)").unwrap());

static SUBJECT_ARTICLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(an?|the)\s+").unwrap());

static PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:he|she|they|someone|somebody|we|i)$").unwrap());

static LEADING_ARTICLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(A|An|The)\b").unwrap());

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().unwrap_or("")
}

/// Random adjective from the bank, preferring ones the logline doesn't use.
fn pick_adjective<R: Rng + ?Sized>(bank: &GenreBank, logline: &str, rng: &mut R) -> &'static str {
    let lower = logline.to_lowercase();
    let fresh: Vec<&'static str> = bank
        .adjectives
        .iter()
        .copied()
        .filter(|adj| !lower.contains(*adj))
        .collect();
    if fresh.is_empty() {
        pick(bank.adjectives, rng)
    } else {
        pick(&fresh, rng)
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn article_for(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    }
}

/// "A cop" -> "a cop", so the phrase can sit mid-sentence.
fn lowercase_leading_article(phrase: &str) -> String {
    LEADING_ARTICLE_RE
        .replace(phrase, |caps: &regex::Captures| caps[1].to_lowercase())
        .into_owned()
}

fn tidy(text: &str) -> String {
    let collapsed = MULTI_SPACE_RE.replace_all(text.trim(), " ");
    capitalize_first(&collapsed)
}

fn append_clause(base: &str, joiner: &str, clause: &str) -> String {
    let trimmed = base
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'));
    format!("{trimmed}{joiner}{clause}.")
}

fn splice(text: &str, (start, end): (usize, usize), with: &str) -> String {
    format!("{}{with}{}", &text[..start], &text[end..])
}

/// Byte span of the sentence's subject: the protagonist phrase when one is
/// found, otherwise the first word of the main clause with its article.
fn subject_span(text: &str) -> Option<(usize, usize)> {
    protagonist_span(text).or_else(|| {
        let start = main_clause_start(text);
        let subject = LEADING_SUBJECT_RE.captures(&text[start..])?.get(1)?;
        Some((start + subject.start(), start + subject.end()))
    })
}

/// Span of the subject when it is a bare pronoun ("She must ...").
fn pronoun_subject(text: &str) -> Option<(usize, usize)> {
    subject_span(text).filter(|&(start, end)| PRONOUN_RE.is_match(&text[start..end]))
}

/// Puts `adjective` at the front of the subject phrase, after its article
/// when it has one, fixing a/an agreement. Text past the subject is left
/// alone.
fn insert_descriptor(text: &str, adjective: &str) -> String {
    let Some((start, end)) = subject_span(text) else {
        return format!("{adjective} {}", text.trim());
    };
    let subject = &text[start..end];
    let article = SUBJECT_ARTICLE_RE
        .captures(subject)
        .and_then(|caps| Some((caps.get(0)?.end(), caps.get(1)?.as_str())));

    let strengthened = match article {
        Some((rest, original)) => {
            let article = if original.eq_ignore_ascii_case("the") {
                original.to_string()
            } else if original.starts_with(char::is_uppercase) {
                capitalize_first(article_for(adjective))
            } else {
                article_for(adjective).to_string()
            };
            format!("{article} {adjective} {}", &subject[rest..])
        }
        None => format!("{adjective} {subject}"),
    };
    splice(text, (start, end), &strengthened)
}

/// Logline text the targeted transforms edit. An empty logline is replaced by
/// the bank's stock premise.
fn base_text(logline: &str, bank: &GenreBank) -> String {
    let trimmed = logline.trim();
    if trimmed.is_empty() {
        let protagonist = bank.protagonists.first().copied().unwrap_or_default();
        let goal = bank.goals.first().copied().unwrap_or_default();
        tidy(&format!("{protagonist} must {goal}."))
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Candidate construction
// ---------------------------------------------------------------------------

fn project<R: Rng + ?Sized>(profile: &RewriteProfile, rng: &mut R) -> ProjectedElementScores {
    let mut draw = |(lo, hi): (i32, i32)| rng.gen_range(lo..=hi);
    ProjectedElementScores {
        protagonist: draw(profile.projections[0]),
        conflict: draw(profile.projections[1]),
        stakes: draw(profile.projections[2]),
        unique_hook: draw(profile.projections[3]),
        emotional_core: draw(profile.projections[4]),
    }
}

fn build_candidate<R: Rng + ?Sized>(
    rewrite_type: RewriteType,
    text: String,
    explanation: String,
    changes_highlighted: Vec<String>,
    current_score: i32,
    rng: &mut R,
) -> RewriteCandidate {
    let profile = profile_for(rewrite_type);
    let (lo, hi) = profile.improvement;
    let improvement = rng.gen_range(lo..=hi);
    let predicted_score = current_score
        .saturating_add(improvement)
        .clamp(HP.score_floor, profile.cap);

    RewriteCandidate {
        text,
        predicted_score,
        score_improvement: improvement,
        rewrite_type: profile.rewrite_type,
        explanation,
        changes_highlighted,
        projected_element_scores: project(profile, rng),
    }
}

fn full_rewrite<R: Rng + ?Sized>(
    logline: &str,
    bank: &GenreBank,
    protagonist_is_weak: bool,
    current_score: i32,
    rng: &mut R,
) -> RewriteCandidate {
    let frame = pick(bank.frames, rng);

    let extracted = extract_protagonist(logline).filter(|found| !PRONOUN_RE.is_match(found));
    let protagonist = match extracted {
        Some(found) if protagonist_is_weak => {
            let adjective = pick_adjective(bank, logline, rng);
            lowercase_leading_article(&insert_descriptor(&found, adjective))
        }
        Some(found) => lowercase_leading_article(&found),
        None => pick(bank.protagonists, rng).to_string(),
    };
    let goal = extract_goal(logline).unwrap_or_else(|| pick(bank.goals, rng).to_string());
    let stakes = extract_stakes(logline).unwrap_or_else(|| pick(bank.stakes, rng).to_string());
    let twist = pick(bank.twists, rng);

    let text = frame
        .replace("{protagonist}", &protagonist)
        .replace("{goal}", &goal)
        .replace("{stakes}", &stakes)
        .replace("{twist}", twist);

    build_candidate(
        RewriteType::Full,
        tidy(&text),
        bank.explanation.to_string(),
        bank.changes.iter().map(|c| c.to_string()).collect(),
        current_score,
        rng,
    )
}

/// Rewrites that strengthen a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Targeted {
    Protagonist,
    Conflict,
    Stakes,
    Hook,
}

impl Targeted {
    const ALL: [Targeted; 4] = [
        Targeted::Protagonist,
        Targeted::Conflict,
        Targeted::Stakes,
        Targeted::Hook,
    ];

    fn rewrite_type(self) -> RewriteType {
        match self {
            Targeted::Protagonist => RewriteType::Protagonist,
            Targeted::Conflict => RewriteType::Conflict,
            Targeted::Stakes => RewriteType::Stakes,
            Targeted::Hook => RewriteType::Hook,
        }
    }

    fn element(self) -> Element {
        match self {
            Targeted::Protagonist => Element::Protagonist,
            Targeted::Conflict => Element::Conflict,
            Targeted::Stakes => Element::Stakes,
            Targeted::Hook => Element::UniqueHook,
        }
    }
}

fn protagonist_edit<R: Rng + ?Sized>(
    base: &str,
    bank: &GenreBank,
    rng: &mut R,
) -> (String, String, Vec<String>) {
    if let Some(span) = pronoun_subject(base) {
        let stand_in = pick(bank.protagonists, rng);
        return (
            splice(base, span, stand_in),
            format!(
                "Replaces the pronoun with '{stand_in}' so the story is about a specific person, not a placeholder."
            ),
            vec![
                format!("Named the protagonist as '{stand_in}'"),
                "Protagonist now implies a flaw or backstory".to_string(),
                "Kept the original plot intact".to_string(),
            ],
        );
    }

    let adjective = pick_adjective(bank, base, rng);
    (
        insert_descriptor(base, adjective),
        format!(
            "Adds '{adjective}' so the protagonist reads as a specific person with a history, not a placeholder."
        ),
        vec![
            format!("Added descriptor '{adjective}'"),
            "Protagonist now implies a flaw or backstory".to_string(),
            "Kept the original plot intact".to_string(),
        ],
    )
}

fn targeted_rewrite<R: Rng + ?Sized>(
    targeted: Targeted,
    logline: &str,
    bank: &GenreBank,
    current_score: i32,
    rng: &mut R,
) -> RewriteCandidate {
    let base = base_text(logline, bank);
    let (text, explanation, changes) = match targeted {
        Targeted::Protagonist => protagonist_edit(&base, bank, rng),
        Targeted::Conflict => (
            append_clause(&base, ", ", pick(bank.conflicts, rng)),
            "Adds an opposing force so the protagonist's goal meets real resistance.".to_string(),
            vec![
                "Added an opposing force".to_string(),
                "Raised the difficulty of the goal".to_string(),
                "Kept the original premise".to_string(),
            ],
        ),
        Targeted::Stakes => (
            append_clause(&base, ", or ", pick(bank.stakes, rng)),
            "Spells out what is lost on failure, which turns the goal into an urgent one.".to_string(),
            vec![
                "Made the consequence of failure explicit".to_string(),
                "Added urgency".to_string(),
                "Kept the original premise".to_string(),
            ],
        ),
        Targeted::Hook => (
            append_clause(&base, ", but ", pick(bank.twists, rng)),
            "Adds an ironic turn that separates this concept from others in the genre.".to_string(),
            vec![
                "Added an ironic twist".to_string(),
                "Raised the concept's distinctiveness".to_string(),
                "Kept the original premise".to_string(),
            ],
        ),
    };

    build_candidate(targeted.rewrite_type(), tidy(&text), explanation, changes, current_score, rng)
}

fn score_of(analyses: &[ElementAnalysis], element: Element) -> Option<i32> {
    analyses.iter().find(|a| a.element == element).map(|a| a.score)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Ranked alternatives: always one full rewrite, plus one targeted rewrite
/// per dimension scoring below 75. Sorted by improvement, at most four.
pub fn generate_rewrites<R: Rng + ?Sized>(
    logline: &str,
    genre: &str,
    current_score: i32,
    analyses: &[ElementAnalysis],
    rng: &mut R,
) -> Vec<RewriteCandidate> {
    let parsed = Genre::parse(genre);
    if parsed.is_none() {
        debug!("genre '{genre}' not in catalog, using generic rewrite strategy");
    }
    let bank = bank_for(parsed);

    let protagonist_is_weak = score_of(analyses, Element::Protagonist)
        .map_or(false, |score| score < HP.target_below);

    let mut candidates = vec![full_rewrite(logline, bank, protagonist_is_weak, current_score, rng)];

    for targeted in Targeted::ALL {
        match score_of(analyses, targeted.element()) {
            Some(score) if score < HP.target_below => {
                candidates.push(targeted_rewrite(targeted, logline, bank, current_score, rng));
            }
            _ => {}
        }
    }

    candidates.sort_by(|a, b| b.score_improvement.cmp(&a.score_improvement));
    candidates.truncate(HP.max_candidates);

    debug!(
        "{} rewrite candidates from the {} bank",
        candidates.len(),
        bank.name
    );
    candidates
}
