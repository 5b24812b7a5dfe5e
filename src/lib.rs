//! Rule-based diagnosis and rewriting of film loglines.
//!
//! `diagnose` scores a logline on five narrative dimensions, reports on its
//! word economy, proposes ranked rewrites and attaches genre templates. All
//! scoring is keyword and pattern heuristics over the literal text.

pub mod config;
pub mod diagnosis;
pub mod economy;
pub mod elements;
pub mod error;
pub mod genre;
pub mod lexicon;
pub mod model;
pub mod report;
pub mod rewrite;
pub mod templates;

pub use diagnosis::{diagnose, diagnose_seeded, diagnose_with_rng};
pub use economy::analyze_word_economy;
pub use elements::{score_all, score_element};
pub use genre::Genre;
pub use model::{
    ConceptInput, Diagnosis, Element, ElementAnalysis, GenreTemplate, LengthStatus,
    ProjectedElementScores, RewriteCandidate, RewriteType, WordEconomyReport,
};
pub use rewrite::generate_rewrites;
pub use templates::{get_all_templates, get_templates_for_genre, template_catalog};
