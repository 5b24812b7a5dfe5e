use crate::model::Diagnosis;

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

/// Plain-text rendering of a diagnosis for terminal output.
pub fn render_text(diagnosis: &Diagnosis) -> String {
    let mut lines = vec![
        format!("Logline: {}", diagnosis.input.logline.trim()),
        format!(
            "Genre: {}    Current score: {}",
            diagnosis.input.genre, diagnosis.current_score
        ),
        String::new(),
        diagnosis.overall_assessment.clone(),
    ];

    section(&mut lines, "Element breakdown");
    for analysis in &diagnosis.element_analyses {
        lines.push(format!(
            "{:<15} {:>3}  {}",
            analysis.element.label(),
            analysis.score,
            analysis.assessment
        ));
        lines.push(format!("                     \"{}\"", analysis.extracted_text));
        if !analysis.weakness.is_empty() {
            lines.push(format!("                     {}", analysis.weakness));
        }
    }

    let economy = &diagnosis.word_economy;
    section(&mut lines, "Word economy");
    lines.push(format!(
        "{} words (ideal {}-{}), {}",
        economy.word_count,
        economy.ideal_min,
        economy.ideal_max,
        economy.status.as_str()
    ));
    if !economy.bloat_words.is_empty() {
        lines.push(format!("Filler: {}", economy.bloat_words.join(", ")));
    }
    if !economy.weak_verbs.is_empty() {
        lines.push(format!("Weak verbs: {}", economy.weak_verbs.join(", ")));
    }
    if !economy.redundant_phrases.is_empty() {
        lines.push(format!("Redundant: {}", economy.redundant_phrases.join(", ")));
    }
    lines.push(economy.recommendation.clone());

    section(&mut lines, "Rewrites");
    for (i, rewrite) in diagnosis.rewrites.iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {} (+{} -> {})",
            i + 1,
            rewrite.rewrite_type.as_str(),
            rewrite.text,
            rewrite.score_improvement,
            rewrite.predicted_score
        ));
        lines.push(format!("   {}", rewrite.explanation));
    }

    if !diagnosis.templates.is_empty() {
        section(&mut lines, "Templates");
        for template in &diagnosis.templates {
            lines.push(format!("{}: {}", template.template_name, template.structure));
            lines.push(format!("   e.g. {}", template.example));
        }
    }

    if !diagnosis.quick_fixes.is_empty() {
        section(&mut lines, "Quick fixes");
        for fix in &diagnosis.quick_fixes {
            lines.push(format!("- {fix}"));
        }
    }

    section(&mut lines, "Top recommendation");
    lines.push(diagnosis.top_recommendation.clone());

    lines.join("\n")
}
