use logline_doctor::{get_all_templates, get_templates_for_genre, template_catalog, Genre};
use pretty_assertions::assert_eq;

#[test]
fn catalog_has_two_templates_per_genre() {
    assert_eq!(get_all_templates().len(), 16);
    for genre in Genre::ALL {
        let templates = get_templates_for_genre(genre.label());
        assert_eq!(templates.len(), 2, "{genre}");
        assert!(templates.iter().all(|t| t.genre == genre));
        assert!(templates.iter().all(|t| !t.key_elements.is_empty()));
    }
}

#[test]
fn genre_lookup_is_case_insensitive() {
    assert_eq!(
        get_templates_for_genre("horror"),
        get_templates_for_genre("Horror")
    );
    assert_eq!(
        get_templates_for_genre("  THRILLER "),
        get_templates_for_genre("Thriller")
    );
}

#[test]
fn sci_fi_aliases_resolve() {
    let expected = get_templates_for_genre("Sci-Fi");
    for alias in ["sci-fi", "scifi", "Science Fiction", "sf"] {
        assert_eq!(get_templates_for_genre(alias), expected, "{alias}");
    }
}

#[test]
fn unknown_genre_has_no_templates() {
    assert!(get_templates_for_genre("Western").is_empty());
    assert!(get_templates_for_genre("").is_empty());
}

#[test]
fn template_structures_carry_slots() {
    for template in get_all_templates() {
        assert!(template.structure.contains('['), "{}", template.template_name);
        assert!(!template.example.is_empty());
        assert!(!template.tip.is_empty());
    }
}

#[test]
fn catalog_listing_without_genre_is_complete() {
    assert_eq!(template_catalog("").len(), 16);
    assert_eq!(template_catalog("   ").len(), 16);
}

#[test]
fn catalog_listing_with_genre_is_filtered() {
    let horror = template_catalog("horror");
    assert_eq!(horror.len(), 2);
    assert!(horror.iter().all(|t| t.genre == Genre::Horror));
    assert!(template_catalog("Western").is_empty());
}
