use crate::genre::Genre;
use crate::model::GenreTemplate;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

static TEMPLATES: &[GenreTemplate] = &[
    // Thriller
    GenreTemplate {
        genre: Genre::Thriller,
        template_name: "Ticking Clock",
        structure: "When [INCITING INCIDENT], a [FLAWED PROFESSIONAL] must [URGENT GOAL] before [DEADLINE CONSEQUENCE].",
        example: "When a bomb threat paralyzes the subway, a disgraced negotiator must talk down a bomber she once failed to save before rush hour turns the tunnels into a tomb.",
        key_elements: &["Hard deadline", "Flawed expert protagonist", "Public consequence"],
        tip: "Name the deadline in concrete terms. Hours beat 'soon'.",
    },
    GenreTemplate {
        genre: Genre::Thriller,
        template_name: "Trusted Enemy",
        structure: "A [PROTAGONIST] investigating [CRIME] discovers [SHOCKING TRUTH] and must [ACTION] while [ANTAGONIST] closes in.",
        example: "A forensic accountant investigating her firm's missing millions discovers her mentor is laundering cartel money and must gather proof while his enforcers close in.",
        key_elements: &["Investigation", "Betrayal from within", "Closing net"],
        tip: "The antagonist should be someone the protagonist already trusts.",
    },
    // Horror
    GenreTemplate {
        genre: Genre::Horror,
        template_name: "Isolated Threat",
        structure: "When [GROUP] becomes trapped in [ISOLATED LOCATION], they must [SURVIVAL GOAL] as [ENTITY] [ESCALATING THREAT].",
        example: "When a research crew is snowed into an Antarctic station, they must survive the long night as something wearing their colleagues' faces picks them off one by one.",
        key_elements: &["Isolation", "Unknowable threat", "Escalation"],
        tip: "Cut off every exit early so the audience feels the walls close in.",
    },
    GenreTemplate {
        genre: Genre::Horror,
        template_name: "Personal Haunting",
        structure: "A [VULNERABLE PROTAGONIST] haunted by [PAST TRAUMA] must confront [SUPERNATURAL FORCE] that [PERSONAL CONNECTION].",
        example: "A grieving mother who moves into her late daughter's apartment must confront the presence that has been answering her calls in her daughter's voice.",
        key_elements: &["Psychological wound", "Supernatural mirror", "Personal cost"],
        tip: "The monster works best when it feeds on the protagonist's specific guilt.",
    },
    // Drama
    GenreTemplate {
        genre: Genre::Drama,
        template_name: "Transformation Arc",
        structure: "A [FLAWED PROTAGONIST] must [CONFRONT CHALLENGE] to [ACHIEVE GOAL], but first must overcome [INTERNAL FLAW].",
        example: "A proud jazz pianist losing his hearing must mentor the rival he despises to keep his club alive, but first must admit he can no longer play.",
        key_elements: &["Internal flaw", "External pressure", "Change of heart"],
        tip: "Tie the external goal to the internal flaw so one cannot be solved without the other.",
    },
    GenreTemplate {
        genre: Genre::Drama,
        template_name: "Family Reckoning",
        structure: "When [FAMILY EVENT], an estranged [PROTAGONIST] returns home and must [RELATIONSHIP GOAL] before [EMOTIONAL DEADLINE].",
        example: "When her father's dementia diagnosis arrives, an estranged chef returns to the family diner and must learn his recipes before he forgets her name.",
        key_elements: &["Estrangement", "Forced proximity", "Emotional clock"],
        tip: "Give the reunion a deadline the family cannot argue with.",
    },
    // Comedy
    GenreTemplate {
        genre: Genre::Comedy,
        template_name: "Fish Out of Water",
        structure: "A [MISMATCHED PROTAGONIST] is forced into [UNFAMILIAR WORLD] and must [ABSURD GOAL] or [COMEDIC CONSEQUENCE].",
        example: "A tightly wound tax auditor is forced to run her late aunt's nudist resort for a summer and must turn a profit or lose the inheritance to her insufferable cousin.",
        key_elements: &["Contrast between character and world", "Escalating embarrassment", "Relatable goal"],
        tip: "The wider the gap between protagonist and setting, the bigger the laughs.",
    },
    GenreTemplate {
        genre: Genre::Comedy,
        template_name: "Lie That Snowballs",
        structure: "After [SMALL LIE], a [PROTAGONIST] must [MAINTAIN DECEPTION] while [COMPLICATION] threatens to expose everything.",
        example: "After claiming to be a celebrity chef to impress a date, a line cook must cater her billionaire father's gala while the real chef shows up as a guest.",
        key_elements: &["Simple lie", "Escalating stakes", "Inevitable exposure"],
        tip: "Each scene should make the lie harder to walk back.",
    },
    // Sci-Fi
    GenreTemplate {
        genre: Genre::SciFi,
        template_name: "What If",
        structure: "In a world where [SPECULATIVE PREMISE], a [PROTAGONIST] must [GOAL] before [TECHNOLOGY/SOCIETY CONSEQUENCE].",
        example: "In a world where memories can be sold, a broke memory dealer must recover the one she sold by mistake before its buyer uses it to frame her for murder.",
        key_elements: &["Clear speculative rule", "Personal stake in the rule", "Societal consequence"],
        tip: "State the speculative rule in one clause. If it needs two, simplify it.",
    },
    GenreTemplate {
        genre: Genre::SciFi,
        template_name: "First Contact",
        structure: "When [DISCOVERY], a [SPECIALIST] must [COMMUNICATE/UNDERSTAND] before [HUMANITY-SCALE CONSEQUENCE].",
        example: "When a signal from Europa starts predicting earthquakes, a disgraced linguist must decode its warning before the next prediction names a city of ten million.",
        key_elements: &["Discovery", "Expert outsider", "Global stakes"],
        tip: "Make the specialist the only person who can bridge the gap.",
    },
    // Action
    GenreTemplate {
        genre: Genre::Action,
        template_name: "One Against Many",
        structure: "A [SKILLED PROTAGONIST] must [FIGHT THROUGH OBSTACLE] to [RESCUE/STOP] before [EXPLOSIVE CONSEQUENCE].",
        example: "A retired smokejumper must fight through a wildfire and a crew of arsonists to rescue her son before the blaze reaches the town's fuel depot.",
        key_elements: &["Physical obstacle", "Outnumbered hero", "Explosive clock"],
        tip: "Give the hero a skill the setting makes uniquely valuable.",
    },
    GenreTemplate {
        genre: Genre::Action,
        template_name: "Heist Gone Wrong",
        structure: "When [HEIST/MISSION] goes sideways, [CREW LEADER] must [SALVAGE PLAN] while evading [PURSUER] who [PERSONAL CONNECTION].",
        example: "When a casino heist goes sideways, a getaway driver must deliver the stolen chips across the desert while evading the detective who taught her to drive.",
        key_elements: &["Plan in pieces", "Relentless pursuit", "Personal rivalry"],
        tip: "The pursuer should know the protagonist's moves as well as they do.",
    },
    // Romance
    GenreTemplate {
        genre: Genre::Romance,
        template_name: "Opposites Attract",
        structure: "A [PROTAGONIST] who [CHARACTER TRAIT] falls for [LOVE INTEREST] who [OPPOSITE TRAIT], but [OBSTACLE] threatens to keep them apart.",
        example: "A cynical divorce lawyer who doesn't believe in love falls for the wedding planner organizing her sister's ceremony, but they are on opposite sides of the groom's prenup.",
        key_elements: &["Opposing worldviews", "Forced proximity", "External obstacle"],
        tip: "Their differences should be the reason they need each other.",
    },
    GenreTemplate {
        genre: Genre::Romance,
        template_name: "Second Chance",
        structure: "Years after [BREAKUP], former lovers [NAMES/ROLES] are forced to [SHARED TASK], reigniting feelings neither can afford.",
        example: "Ten years after he left her at the altar, a hotshot architect is hired to restore the lighthouse his ex-fiancee now runs, and the storm season traps them together.",
        key_elements: &["Shared history", "Forced reunion", "Unresolved wound"],
        tip: "Make the original breakup a reason the audience half-sympathizes with both sides.",
    },
    // Fantasy
    GenreTemplate {
        genre: Genre::Fantasy,
        template_name: "Chosen One Subverted",
        structure: "A [UNLIKELY HERO] discovers [MAGICAL TRUTH] and must [QUEST] to [SAVE WORLD], but [TWIST ON PROPHECY].",
        example: "A cowardly scribe discovers he copied the prophecy wrong and must guide the real chosen one across the kingdom before the dark queen realizes the error.",
        key_elements: &["Unlikely hero", "Magical system", "Prophecy twist"],
        tip: "Subvert one expectation of the chosen-one story and keep the rest familiar.",
    },
    GenreTemplate {
        genre: Genre::Fantasy,
        template_name: "Price of Magic",
        structure: "In a realm where [MAGIC RULE], a [PROTAGONIST] must [GOAL] even though every spell costs [PERSONAL PRICE].",
        example: "In a realm where every spell costs a memory, a young healer must cure a plague sweeping the capital even though each cure erases another piece of her mother.",
        key_elements: &["Defined magic cost", "Escalating sacrifice", "Personal loss"],
        tip: "The cost of magic should hurt the protagonist more than anyone else.",
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn get_all_templates() -> &'static [GenreTemplate] {
    TEMPLATES
}

/// Templates for a genre, matched case-insensitively. Unknown genres yield an
/// empty list.
pub fn get_templates_for_genre(genre: &str) -> Vec<&'static GenreTemplate> {
    match Genre::parse(genre) {
        Some(genre) => templates_for(genre),
        None => Vec::new(),
    }
}

pub fn templates_for(genre: Genre) -> Vec<&'static GenreTemplate> {
    TEMPLATES.iter().filter(|t| t.genre == genre).collect()
}

/// Catalog listing for `--templates`: the whole catalog when no genre is
/// given, otherwise that genre's templates.
pub fn template_catalog(genre: &str) -> Vec<&'static GenreTemplate> {
    if genre.trim().is_empty() {
        TEMPLATES.iter().collect()
    } else {
        get_templates_for_genre(genre)
    }
}
