use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{is_filler_word, is_weak_verb, REDUNDANT_PHRASES};
use crate::model::{LengthStatus, WordEconomyReport};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    ideal_min: usize,
    ideal_max: usize,
    weak_verb_cap: usize,
    weak_verb_tighten_above: usize,
}

static HP: Hyperparameters = Hyperparameters {
    ideal_min: 25,
    ideal_max: 45,
    weak_verb_cap: 5,
    weak_verb_tighten_above: 3,
};

static PUNCT_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\w]+|[^\w]+$").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_token(token: &str) -> String {
    PUNCT_STRIP_RE.replace_all(token, "").to_lowercase()
}

// Priority: length problems first, then prose tightness, then praise.
fn recommendation_for(
    status: LengthStatus,
    word_count: usize,
    bloat_words: &[String],
    weak_verbs: &[String],
) -> String {
    match status {
        LengthStatus::TooShort => format!(
            "At {word_count} words your logline is too thin. Expand it to {}-{} words so the protagonist, conflict, and stakes each have room.",
            HP.ideal_min, HP.ideal_max
        ),
        LengthStatus::TooLong => format!(
            "At {word_count} words your logline runs long. Cut it to {} words or fewer and keep only what the pitch cannot live without.",
            HP.ideal_max
        ),
        LengthStatus::Optimal
            if !bloat_words.is_empty() || weak_verbs.len() > HP.weak_verb_tighten_above =>
        {
            "Length is on target, but the prose can be tighter. Cut filler words and swap weak verbs for active ones.".to_string()
        }
        LengthStatus::Optimal => {
            "Strong word economy. Every word is pulling its weight.".to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn analyze_word_economy(logline: &str) -> WordEconomyReport {
    let tokens: Vec<&str> = logline.split_whitespace().collect();
    let word_count = tokens.len();
    let status = LengthStatus::classify(word_count, HP.ideal_min, HP.ideal_max);

    let mut bloat_words = Vec::new();
    let mut weak_verbs = Vec::new();
    for token in &tokens {
        let word = normalize_token(token);
        if word.is_empty() {
            continue;
        }
        if is_filler_word(&word) {
            bloat_words.push(word.clone());
        }
        if is_weak_verb(&word) && weak_verbs.len() < HP.weak_verb_cap {
            weak_verbs.push(word);
        }
    }

    let lower = logline.to_lowercase();
    let redundant_phrases: Vec<String> = REDUNDANT_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    debug!(
        "word economy: {word_count} words ({}), {} filler, {} weak verbs, {} redundant",
        status.as_str(),
        bloat_words.len(),
        weak_verbs.len(),
        redundant_phrases.len()
    );

    let recommendation = recommendation_for(status, word_count, &bloat_words, &weak_verbs);

    WordEconomyReport {
        word_count,
        ideal_min: HP.ideal_min,
        ideal_max: HP.ideal_max,
        status,
        bloat_words,
        weak_verbs,
        redundant_phrases,
        recommendation,
    }
}
