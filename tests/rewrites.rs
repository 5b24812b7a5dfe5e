use logline_doctor::{generate_rewrites, score_all, Element, RewriteType};
use rand::rngs::StdRng;
use rand::SeedableRng;

const RESCUE: &str = "When her daughter vanishes in a hurricane, a retired rescue swimmer must brave the storm and a ruthless gang of looters to find her before the floodwaters swallow the town.";

const DETECTIVE: &str = "A disgraced detective must stop a serial killer before he strikes again, but the killer is her own estranged brother.";

fn bounds(rewrite_type: RewriteType) -> (i32, i32, i32) {
    match rewrite_type {
        RewriteType::Full => (12, 21, 95),
        RewriteType::Protagonist => (6, 13, 92),
        RewriteType::Conflict => (7, 15, 93),
        RewriteType::Stakes => (8, 17, 94),
        RewriteType::Hook => (9, 19, 95),
    }
}

#[test]
fn always_includes_a_full_rewrite() {
    let analyses = score_all(DETECTIVE, "Thriller");
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites(DETECTIVE, "Thriller", 70, &analyses, &mut rng);
        assert!(rewrites.iter().any(|r| r.rewrite_type == RewriteType::Full));
    }
}

#[test]
fn strong_protagonist_gets_no_protagonist_rewrite() {
    let analyses = score_all(DETECTIVE, "Thriller");
    let protagonist = analyses
        .iter()
        .find(|a| a.element == Element::Protagonist)
        .unwrap();
    assert!(protagonist.score >= 75);

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites(DETECTIVE, "Thriller", 60, &analyses, &mut rng);
        assert!(rewrites
            .iter()
            .all(|r| r.rewrite_type != RewriteType::Protagonist));
    }
}

#[test]
fn targets_only_dimensions_below_threshold() {
    // Protagonist 60, conflict 85, stakes 70, hook 60.
    let analyses = score_all(RESCUE, "Action");
    let mut rng = StdRng::seed_from_u64(17);
    let rewrites = generate_rewrites(RESCUE, "Action", 60, &analyses, &mut rng);

    let mut types: Vec<RewriteType> = rewrites.iter().map(|r| r.rewrite_type).collect();
    types.sort_by_key(|t| t.as_str());
    assert_eq!(
        types,
        vec![
            RewriteType::Full,
            RewriteType::Hook,
            RewriteType::Protagonist,
            RewriteType::Stakes
        ]
    );
}

#[test]
fn candidates_are_sorted_and_capped() {
    for seed in 0..50 {
        let analyses = score_all("", "Drama");
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites("", "Drama", 40, &analyses, &mut rng);
        assert_eq!(rewrites.len(), 4);
        assert!(rewrites
            .windows(2)
            .all(|w| w[0].score_improvement >= w[1].score_improvement));

        let mut types: Vec<&str> = rewrites.iter().map(|r| r.rewrite_type.as_str()).collect();
        types.sort();
        types.dedup();
        assert_eq!(types.len(), 4, "duplicate rewrite type in {types:?}");
    }
}

#[test]
fn predicted_scores_respect_ranges_and_caps() {
    let analyses = score_all("", "Fantasy");
    for seed in 0..40 {
        for current in [-20, 0, 40, 80, 94, 120] {
            let mut rng = StdRng::seed_from_u64(seed);
            for rewrite in generate_rewrites("", "Fantasy", current, &analyses, &mut rng) {
                let (lo, hi, cap) = bounds(rewrite.rewrite_type);
                assert!((lo..=hi).contains(&rewrite.score_improvement));
                assert_eq!(
                    rewrite.predicted_score,
                    (current + rewrite.score_improvement).clamp(0, cap)
                );
                assert!((0..=95).contains(&rewrite.predicted_score));
                if (0..=cap).contains(&current) {
                    assert!(rewrite.predicted_score >= current);
                }
            }
        }
    }
}

#[test]
fn projected_scores_stay_in_sampling_ranges() {
    let analyses = score_all(RESCUE, "Romance");
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        for rewrite in generate_rewrites(RESCUE, "Romance", 55, &analyses, &mut rng) {
            for element in Element::ALL {
                let value = rewrite.projected_element_scores.get(element);
                assert!((55..=95).contains(&value), "{element:?} projected {value}");
            }
            if let Some(target) = rewrite.rewrite_type.target() {
                assert!(rewrite.projected_element_scores.get(target) >= 78);
            }
        }
    }
}

#[test]
fn protagonist_rewrite_inserts_descriptor_after_opening_clause() {
    let analyses = score_all(RESCUE, "Action");
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites(RESCUE, "Action", 60, &analyses, &mut rng);
        let rewrite = rewrites
            .iter()
            .find(|r| r.rewrite_type == RewriteType::Protagonist)
            .unwrap();
        assert!(rewrite
            .text
            .starts_with("When her daughter vanishes in a hurricane, a"));
        assert!(
            ["battle-scarred", "outgunned", "reckless"]
                .iter()
                .any(|adj| rewrite.text.contains(adj)),
            "{}",
            rewrite.text
        );
        assert!(rewrite.text.contains("retired rescue swimmer"));
        assert_eq!(rewrite.changes_highlighted.len(), 3);
    }
}

#[test]
fn stakes_and_hook_rewrites_append_clauses() {
    let analyses = score_all(RESCUE, "Action");
    let mut rng = StdRng::seed_from_u64(3);
    let rewrites = generate_rewrites(RESCUE, "Action", 60, &analyses, &mut rng);
    let base = RESCUE.trim_end_matches('.');

    let stakes = rewrites
        .iter()
        .find(|r| r.rewrite_type == RewriteType::Stakes)
        .unwrap();
    assert!(stakes.text.starts_with(&format!("{base}, or ")));
    assert!(stakes.text.ends_with('.'));

    let hook = rewrites
        .iter()
        .find(|r| r.rewrite_type == RewriteType::Hook)
        .unwrap();
    assert!(hook.text.starts_with(&format!("{base}, but ")));
}

#[test]
fn full_rewrite_fills_slots_from_logline() {
    let line = "A pilot must land the plane before the fuel runs out.";
    let analyses = score_all(line, "Thriller");
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let full = generate_rewrites(line, "Thriller", 50, &analyses, &mut rng)
            .into_iter()
            .find(|r| r.rewrite_type == RewriteType::Full)
            .unwrap();
        assert!(full.text.contains("pilot"), "{}", full.text);
        assert!(full.text.contains("land the plane"), "{}", full.text);
        assert!(full.text.contains("the fuel runs out"), "{}", full.text);
        assert!(!full.text.contains('{'));
        assert_eq!(full.changes_highlighted.len(), 3);
    }
}

#[test]
fn same_seed_same_rewrites() {
    let analyses = score_all(RESCUE, "Comedy");
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(
        generate_rewrites(RESCUE, "Comedy", 50, &analyses, &mut a),
        generate_rewrites(RESCUE, "Comedy", 50, &analyses, &mut b)
    );
}

#[test]
fn pronoun_subject_is_replaced_not_decorated() {
    let line = "She must find a cure before the plague reaches the capital.";
    let analyses = score_all(line, "Thriller");
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites(line, "Thriller", 50, &analyses, &mut rng);

        let protagonist = rewrites
            .iter()
            .find(|r| r.rewrite_type == RewriteType::Protagonist)
            .unwrap();
        assert!(protagonist.text.starts_with("A "), "{}", protagonist.text);
        assert!(
            protagonist
                .text
                .ends_with(" must find a cure before the plague reaches the capital."),
            "{}",
            protagonist.text
        );

        let full = rewrites
            .iter()
            .find(|r| r.rewrite_type == RewriteType::Full)
            .unwrap();
        assert!(!full.text.contains("She"), "{}", full.text);
        assert!(full.text.contains("find a cure"), "{}", full.text);
    }
}

#[test]
fn named_subject_keeps_object_untouched() {
    let line = "Sarah must stop a killer before he strikes again.";
    let analyses = score_all(line, "Thriller");
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rewrites = generate_rewrites(line, "Thriller", 50, &analyses, &mut rng);

        let protagonist = rewrites
            .iter()
            .find(|r| r.rewrite_type == RewriteType::Protagonist)
            .unwrap();
        assert!(
            protagonist
                .text
                .ends_with(" Sarah must stop a killer before he strikes again."),
            "{}",
            protagonist.text
        );

        let full = rewrites
            .iter()
            .find(|r| r.rewrite_type == RewriteType::Full)
            .unwrap();
        assert!(full.text.contains("stop a killer"), "{}", full.text);
        let before_name = &full.text[..full.text.find("Sarah").unwrap()];
        if let Some((_, after_comma)) = before_name.rsplit_once(", ") {
            let first = after_comma.chars().next().unwrap();
            assert!(first.is_lowercase(), "{}", full.text);
        }
    }
}
