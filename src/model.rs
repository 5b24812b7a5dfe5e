use serde::{Deserialize, Serialize};

use crate::genre::Genre;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One diagnosis request. The score is the externally computed greenlight
/// score and is only clamped when rewrite scores are projected from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptInput {
    pub logline: String,
    pub genre: String,
    pub current_score: i32,
}

impl ConceptInput {
    pub fn new(logline: impl Into<String>, genre: impl Into<String>, current_score: i32) -> Self {
        Self {
            logline: logline.into(),
            genre: genre.into(),
            current_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Element analysis
// ---------------------------------------------------------------------------

/// The five narrative dimensions a logline is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Protagonist,
    Conflict,
    Stakes,
    #[serde(rename = "Unique Hook")]
    UniqueHook,
    #[serde(rename = "Emotional Core")]
    EmotionalCore,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Protagonist,
        Element::Conflict,
        Element::Stakes,
        Element::UniqueHook,
        Element::EmotionalCore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Element::Protagonist => "Protagonist",
            Element::Conflict => "Conflict",
            Element::Stakes => "Stakes",
            Element::UniqueHook => "Unique Hook",
            Element::EmotionalCore => "Emotional Core",
        }
    }

    /// Label as it appears mid-sentence ("unique hook").
    pub fn lower_label(self) -> &'static str {
        match self {
            Element::Protagonist => "protagonist",
            Element::Conflict => "conflict",
            Element::Stakes => "stakes",
            Element::UniqueHook => "unique hook",
            Element::EmotionalCore => "emotional core",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementAnalysis {
    pub element: Element,
    pub extracted_text: String,
    pub score: i32,
    pub assessment: String,
    pub weakness: String,
    pub suggestions: Vec<String>,
    pub matched_categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Word economy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthStatus {
    TooShort,
    Optimal,
    TooLong,
}

impl LengthStatus {
    pub fn classify(word_count: usize, ideal_min: usize, ideal_max: usize) -> Self {
        if word_count < ideal_min {
            LengthStatus::TooShort
        } else if word_count > ideal_max {
            LengthStatus::TooLong
        } else {
            LengthStatus::Optimal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthStatus::TooShort => "too_short",
            LengthStatus::Optimal => "optimal",
            LengthStatus::TooLong => "too_long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEconomyReport {
    pub word_count: usize,
    pub ideal_min: usize,
    pub ideal_max: usize,
    pub status: LengthStatus,
    pub bloat_words: Vec<String>,
    pub weak_verbs: Vec<String>,
    pub redundant_phrases: Vec<String>,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// Rewrites
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteType {
    Full,
    Protagonist,
    Conflict,
    Stakes,
    Hook,
}

impl RewriteType {
    pub fn as_str(self) -> &'static str {
        match self {
            RewriteType::Full => "full",
            RewriteType::Protagonist => "protagonist",
            RewriteType::Conflict => "conflict",
            RewriteType::Stakes => "stakes",
            RewriteType::Hook => "hook",
        }
    }

    /// Dimension a targeted rewrite strengthens. `None` for full rewrites.
    pub fn target(self) -> Option<Element> {
        match self {
            RewriteType::Full => None,
            RewriteType::Protagonist => Some(Element::Protagonist),
            RewriteType::Conflict => Some(Element::Conflict),
            RewriteType::Stakes => Some(Element::Stakes),
            RewriteType::Hook => Some(Element::UniqueHook),
        }
    }
}

/// Illustrative per-dimension scores attached to a rewrite. These are sampled
/// from type-specific ranges; they are not a re-analysis of the rewritten text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedElementScores {
    #[serde(rename = "Protagonist")]
    pub protagonist: i32,
    #[serde(rename = "Conflict")]
    pub conflict: i32,
    #[serde(rename = "Stakes")]
    pub stakes: i32,
    #[serde(rename = "Unique Hook")]
    pub unique_hook: i32,
    #[serde(rename = "Emotional Core")]
    pub emotional_core: i32,
}

impl ProjectedElementScores {
    pub fn get(&self, element: Element) -> i32 {
        match element {
            Element::Protagonist => self.protagonist,
            Element::Conflict => self.conflict,
            Element::Stakes => self.stakes,
            Element::UniqueHook => self.unique_hook,
            Element::EmotionalCore => self.emotional_core,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteCandidate {
    pub text: String,
    pub predicted_score: i32,
    pub score_improvement: i32,
    pub rewrite_type: RewriteType,
    pub explanation: String,
    pub changes_highlighted: Vec<String>,
    pub projected_element_scores: ProjectedElementScores,
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTemplate {
    pub genre: Genre,
    pub template_name: &'static str,
    pub structure: &'static str,
    pub example: &'static str,
    pub key_elements: &'static [&'static str],
    pub tip: &'static str,
}

// ---------------------------------------------------------------------------
// Diagnosis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub input: ConceptInput,
    pub current_score: i32,
    pub element_analyses: Vec<ElementAnalysis>,
    pub word_economy: WordEconomyReport,
    pub rewrites: Vec<RewriteCandidate>,
    pub templates: Vec<GenreTemplate>,
    pub overall_assessment: String,
    pub quick_fixes: Vec<String>,
    pub top_recommendation: String,
}

impl Diagnosis {
    /// Lowest-scoring dimension; the earliest dimension wins ties.
    pub fn weakest_element(&self) -> Option<&ElementAnalysis> {
        weakest(&self.element_analyses)
    }

    pub fn analysis(&self, element: Element) -> Option<&ElementAnalysis> {
        self.element_analyses.iter().find(|a| a.element == element)
    }
}

pub(crate) fn weakest(analyses: &[ElementAnalysis]) -> Option<&ElementAnalysis> {
    analyses.iter().reduce(|weakest, a| if a.score < weakest.score { a } else { weakest })
}
