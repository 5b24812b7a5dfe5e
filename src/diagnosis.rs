use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::economy::analyze_word_economy;
use crate::elements::score_all;
use crate::model::{weakest, ConceptInput, Diagnosis, ElementAnalysis, LengthStatus, WordEconomyReport};
use crate::rewrite::generate_rewrites;
use crate::templates::get_templates_for_genre;

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    max_quick_fixes: usize,
    weak_verb_fix_above: usize,
    quick_fix_below: i32,
    top_weakness_below: i32,
    excellent_min: i32,
    solid_min: i32,
    promising_min: i32,
}

static HP: Hyperparameters = Hyperparameters {
    max_quick_fixes: 5,
    weak_verb_fix_above: 2,
    quick_fix_below: 70,
    top_weakness_below: 60,
    excellent_min: 85,
    solid_min: 70,
    promising_min: 55,
};

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

fn overall_assessment(current_score: i32, analyses: &[ElementAnalysis]) -> String {
    let weakest_label = weakest(analyses)
        .map(|a| a.element.lower_label())
        .unwrap_or("core concept");

    if current_score >= HP.excellent_min {
        format!(
            "Excellent concept. This logline is close to market-ready; the {weakest_label} is the one dimension left to sharpen."
        )
    } else if current_score >= HP.solid_min {
        format!(
            "Solid concept with real potential. Strengthening the {weakest_label} would push it into top-tier territory."
        )
    } else if current_score >= HP.promising_min {
        format!(
            "Promising foundation that needs work. The {weakest_label} is holding this logline back the most."
        )
    } else {
        format!(
            "This concept needs significant development. Start with the {weakest_label}, currently its weakest dimension."
        )
    }
}

fn unique(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

fn quick_fixes(economy: &WordEconomyReport, analyses: &[ElementAnalysis]) -> Vec<String> {
    let mut fixes = Vec::new();

    if !economy.bloat_words.is_empty() {
        fixes.push(format!(
            "Remove filler words: {}",
            unique(&economy.bloat_words).join(", ")
        ));
    }
    if economy.weak_verbs.len() > HP.weak_verb_fix_above {
        fixes.push(format!(
            "Replace weak verbs ({}) with active, specific ones",
            unique(&economy.weak_verbs).join(", ")
        ));
    }
    if economy.status == LengthStatus::TooLong {
        fixes.push(format!(
            "Trim to {} words or fewer (currently {})",
            economy.ideal_max, economy.word_count
        ));
    }
    for analysis in analyses.iter().filter(|a| a.score < HP.quick_fix_below) {
        if let Some(suggestion) = analysis.suggestions.first() {
            fixes.push(format!("{}: {suggestion}", analysis.element.label()));
        }
    }

    fixes.truncate(HP.max_quick_fixes);
    fixes
}

fn top_recommendation(economy: &WordEconomyReport, analyses: &[ElementAnalysis]) -> String {
    let Some(weakest) = weakest(analyses) else {
        return "Revise the logline so it names a protagonist, a goal, and what is at stake.".to_string();
    };

    if weakest.score < HP.top_weakness_below && !weakest.weakness.is_empty() {
        weakest.weakness.clone()
    } else if economy.status != LengthStatus::Optimal {
        economy.recommendation.clone()
    } else {
        format!(
            "The fundamentals are in place. Polish the {} to lift the concept further.",
            weakest.element.lower_label()
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Runs the full diagnosis with a freshly seeded generator.
pub fn diagnose(input: &ConceptInput) -> Diagnosis {
    let mut rng = StdRng::from_entropy();
    diagnose_with_rng(input, &mut rng)
}

/// Reproducible diagnosis: identical input and seed give identical output.
pub fn diagnose_seeded(input: &ConceptInput, seed: u64) -> Diagnosis {
    let mut rng = StdRng::seed_from_u64(seed);
    diagnose_with_rng(input, &mut rng)
}

pub fn diagnose_with_rng<R: Rng + ?Sized>(input: &ConceptInput, rng: &mut R) -> Diagnosis {
    let analyses = score_all(&input.logline, &input.genre);
    let economy = analyze_word_economy(&input.logline);
    let rewrites = generate_rewrites(
        &input.logline,
        &input.genre,
        input.current_score,
        &analyses,
        rng,
    );
    let templates = get_templates_for_genre(&input.genre)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "diagnosed logline ({} words, score {}): {} rewrites, {} templates",
        economy.word_count,
        input.current_score,
        rewrites.len(),
        templates.len()
    );

    Diagnosis {
        input: input.clone(),
        current_score: input.current_score,
        overall_assessment: overall_assessment(input.current_score, &analyses),
        quick_fixes: quick_fixes(&economy, &analyses),
        top_recommendation: top_recommendation(&economy, &analyses),
        element_analyses: analyses,
        word_economy: economy,
        rewrites,
        templates,
    }
}
