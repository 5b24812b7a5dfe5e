use logline_doctor::{diagnose, diagnose_seeded, ConceptInput, Element, LengthStatus, RewriteType};
use pretty_assertions::assert_eq;

const RESCUE: &str = "When her daughter vanishes in a hurricane, a retired rescue swimmer must brave the storm and a ruthless gang of looters to find her before the floodwaters swallow the town.";

const DETECTIVE: &str = "A disgraced detective must stop a serial killer before he strikes again, but the killer is her own estranged brother.";

const SHORT_STRONG: &str = "A grieving detective must stop the killer who murdered her family before he kills again.";

const PADDED: &str = "A very disgraced detective basically must actually stop a serial killer terrorizing Chicago before the next full moon, but the killer turns out to be her estranged twin brother hiding in plain sight.";

#[test]
fn diagnosis_covers_every_dimension() {
    let input = ConceptInput::new(RESCUE, "Action", 64);
    let result = diagnose_seeded(&input, 7);

    let elements: Vec<Element> = result.element_analyses.iter().map(|a| a.element).collect();
    assert_eq!(elements, Element::ALL.to_vec());
    assert_eq!(result.current_score, 64);
    assert_eq!(result.input, input);
    assert_eq!(result.templates.len(), 2);
    assert!(!result.rewrites.is_empty());
    assert!(result.rewrites.len() <= 4);
}

#[test]
fn seeded_diagnosis_is_reproducible() {
    let input = ConceptInput::new(RESCUE, "Thriller", 58);
    let first = diagnose_seeded(&input, 1234);
    let second = diagnose_seeded(&input, 1234);
    assert_eq!(first, second);
}

#[test]
fn unseeded_diagnosis_keeps_deterministic_parts() {
    let input = ConceptInput::new(DETECTIVE, "Thriller", 72);
    let a = diagnose(&input);
    let b = diagnose(&input);
    assert_eq!(a.element_analyses, b.element_analyses);
    assert_eq!(a.word_economy, b.word_economy);
    assert_eq!(a.overall_assessment, b.overall_assessment);
    assert_eq!(a.top_recommendation, b.top_recommendation);
}

#[test]
fn filler_words_recommend_tightening() {
    let result = diagnose_seeded(&ConceptInput::new(PADDED, "Thriller", 70), 3);
    let economy = &result.word_economy;

    assert_eq!(economy.status, LengthStatus::Optimal);
    for word in ["very", "basically", "actually"] {
        assert!(
            economy.bloat_words.iter().any(|w| w == word),
            "expected '{word}' in {:?}",
            economy.bloat_words
        );
    }
    assert!(economy.recommendation.contains("tighter"));
    assert!(result.quick_fixes[0].starts_with("Remove filler words"));
    assert!(result.quick_fixes[0].contains("basically"));
}

#[test]
fn empty_logline_degrades_gracefully() {
    let result = diagnose_seeded(&ConceptInput::new("", "Horror", 0), 9);

    let scores: Vec<i32> = result.element_analyses.iter().map(|a| a.score).collect();
    assert_eq!(scores, vec![50, 55, 50, 55, 60]);
    assert_eq!(result.word_economy.word_count, 0);
    assert_eq!(result.word_economy.status, LengthStatus::TooShort);
    assert_eq!(result.rewrites.len(), 4);
    assert!(result.rewrites.iter().all(|r| !r.text.is_empty()));
    assert!(result.overall_assessment.contains("protagonist"));
    assert!(!result.top_recommendation.is_empty());
}

#[test]
fn unknown_genre_uses_generic_strategy() {
    let result = diagnose_seeded(&ConceptInput::new(RESCUE, "Western", 60), 11);
    assert!(result.templates.is_empty());
    assert!(result
        .rewrites
        .iter()
        .any(|r| r.rewrite_type == RewriteType::Full));
}

#[test]
fn out_of_range_score_is_absorbed() {
    for score in [-40, 150] {
        let result = diagnose_seeded(&ConceptInput::new(DETECTIVE, "Drama", score), 5);
        assert_eq!(result.current_score, score);
        for rewrite in &result.rewrites {
            assert!((0..=95).contains(&rewrite.predicted_score));
        }
    }
}

#[test]
fn overall_assessment_follows_score_tier() {
    let tiers = [
        (90, "Excellent"),
        (75, "Solid"),
        (60, "Promising"),
        (30, "significant development"),
    ];
    for (score, marker) in tiers {
        let result = diagnose_seeded(&ConceptInput::new(RESCUE, "Action", score), 2);
        assert!(
            result.overall_assessment.contains(marker),
            "score {score}: {}",
            result.overall_assessment
        );
        let weakest = result.weakest_element().unwrap();
        assert!(result
            .overall_assessment
            .contains(weakest.element.lower_label()));
    }
}

#[test]
fn top_recommendation_prefers_weak_dimension() {
    // "A man walks." leaves the protagonist in the weak tier.
    let result = diagnose_seeded(&ConceptInput::new("A man walks.", "Drama", 40), 4);
    let weakest = result.weakest_element().unwrap();
    assert_eq!(weakest.element, Element::Protagonist);
    assert_eq!(result.analysis(Element::Protagonist), Some(weakest));
    assert!(weakest.score < 60);
    assert_eq!(result.analysis(Element::EmotionalCore).map(|a| a.score), Some(60));
    assert_eq!(result.top_recommendation, weakest.weakness);
}

#[test]
fn top_recommendation_falls_back_to_word_economy() {
    let result = diagnose_seeded(&ConceptInput::new(SHORT_STRONG, "Thriller", 70), 4);
    let weakest = result.weakest_element().unwrap();
    assert!(weakest.score >= 60, "weakest was {weakest:?}");
    assert_eq!(result.word_economy.status, LengthStatus::TooShort);
    assert_eq!(result.top_recommendation, result.word_economy.recommendation);
}

#[test]
fn top_recommendation_generic_when_all_adequate() {
    let result = diagnose_seeded(&ConceptInput::new(RESCUE, "Action", 70), 4);
    assert_eq!(result.word_economy.status, LengthStatus::Optimal);
    assert!(result.weakest_element().unwrap().score >= 60);
    assert!(result.top_recommendation.starts_with("The fundamentals are in place"));
}

#[test]
fn quick_fixes_are_capped_at_five() {
    let bloated = "He is very really just actually basically is was were a man who has things";
    let result = diagnose_seeded(&ConceptInput::new(bloated, "Comedy", 20), 8);
    assert!(result.quick_fixes.len() <= 5);
    assert!(result.quick_fixes[0].starts_with("Remove filler words"));
    assert!(result.quick_fixes[1].starts_with("Replace weak verbs"));
}

#[test]
fn json_output_is_valid() {
    let result = diagnose_seeded(&ConceptInput::new(RESCUE, "sci-fi", 61), 21);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "input",
        "current_score",
        "element_analyses",
        "word_economy",
        "rewrites",
        "templates",
        "overall_assessment",
        "quick_fixes",
        "top_recommendation",
    ] {
        assert!(parsed.get(key).is_some(), "missing {key}");
    }
    assert_eq!(parsed["element_analyses"][3]["element"], "Unique Hook");
    assert_eq!(parsed["word_economy"]["status"], "optimal");
    assert_eq!(parsed["templates"][0]["genre"], "Sci-Fi");
    let projected = &parsed["rewrites"][0]["projected_element_scores"];
    assert!(projected.get("Emotional Core").is_some());
}

#[test]
fn concept_input_deserializes_from_json() {
    let raw = r#"{"logline": "A cop must run.", "genre": "Action", "current_score": 55}"#;
    let input: ConceptInput = serde_json::from_str(raw).unwrap();
    assert_eq!(input, ConceptInput::new("A cop must run.", "Action", 55));
}

#[test]
fn text_report_lists_every_section() {
    let result = diagnose_seeded(&ConceptInput::new(PADDED, "Thriller", 66), 12);
    let text = logline_doctor::report::render_text(&result);
    for heading in [
        "Element breakdown",
        "Word economy",
        "Rewrites",
        "Templates",
        "Quick fixes",
        "Top recommendation",
    ] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("Unique Hook"));
    assert!(text.contains(&result.top_recommendation));
}
