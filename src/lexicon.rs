use std::collections::HashSet;

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

pub static FILLER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "very",
        "really",
        "just",
        "actually",
        "basically",
        "literally",
        "quite",
        "rather",
        "somewhat",
        "simply",
        "totally",
        "truly",
        "definitely",
        "certainly",
        "extremely",
        "incredibly",
        "completely",
        "absolutely",
        "essentially",
        "seriously",
    ]
    .into_iter()
    .collect()
});

pub static WEAK_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "get", "gets",
        "got", "go", "goes", "went", "do", "does", "did", "make", "makes", "made", "seem",
        "seems", "tries", "try",
    ]
    .into_iter()
    .collect()
});

/// Matched as substrings of the lowercased logline, not per token.
pub static REDUNDANT_PHRASES: &[&str] = &[
    "in order to",
    "at this point in time",
    "each and every",
    "end result",
    "final outcome",
    "past history",
    "true fact",
    "free gift",
    "unexpected surprise",
    "completely destroyed",
    "absolutely essential",
    "join together",
    "plan ahead",
    "close proximity",
    "new innovation",
    "advance warning",
    "basic fundamentals",
    "future plans",
    "still remains",
    "revert back",
];

pub fn is_filler_word(word: &str) -> bool {
    FILLER_WORDS.contains(word.to_lowercase().as_str())
}

pub fn is_weak_verb(word: &str) -> bool {
    WEAK_VERBS.contains(word.to_lowercase().as_str())
}
