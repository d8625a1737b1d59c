//! German lemma rules
//!
//! Present-tense "-en" forms are identical to the infinitive, so there is
//! no rule for them; they fall through to the unchanged word.

use vocab_types::PartOfSpeech;

use super::rules::RuleSpec;

const VERB: Option<PartOfSpeech> = Some(PartOfSpeech::Verb);
const NOUN: Option<PartOfSpeech> = Some(PartOfSpeech::Noun);

pub const DICTIONARY_EXCLUSIONS: &[&str] = &[];

pub const RULES: &[RuleSpec] = &[
    // Auxiliaries and modals
    (r"^(bin|bist|ist|sind|seid|war|warst|waren)$", "sein", VERB, 0.95),
    (r"^(habe|hast|hat|habt|hatte|hatten)$", "haben", VERB, 0.95),
    (r"^(werde|wirst|wird|werdet|wurde|wurden)$", "werden", VERB, 0.95),
    (r"^(kann|kannst|könnt|konnte|konnten)$", "können", VERB, 0.95),
    (r"^(muss|musst|müsst|musste|mussten)$", "müssen", VERB, 0.95),
    (r"^(will|willst|wollt|wollte|wollten)$", "wollen", VERB, 0.95),
    (r"^(mag|magst|mögt|mochte)$", "mögen", VERB, 0.95),
    (r"^(weiß|weißt|wisst|wusste)$", "wissen", VERB, 0.95),
    // Strong verbs with vowel change
    (r"^(lese|liest|lest|las)$", "lesen", VERB, 0.95),
    (r"^(esse|isst|esst|aß)$", "essen", VERB, 0.95),
    (r"^(spreche|sprichst|spricht|sprecht|sprach)$", "sprechen", VERB, 0.95),
    (r"^(sehe|siehst|sieht|seht|sah)$", "sehen", VERB, 0.95),
    (r"^(fahre|fährst|fährt|fahrt|fuhr)$", "fahren", VERB, 0.95),
    (r"^(gebe|gibst|gibt|gebt|gab)$", "geben", VERB, 0.95),
    (r"^(nehme|nimmst|nimmt|nehmt|nahm)$", "nehmen", VERB, 0.95),
    (r"^(schlafe|schläfst|schläft|schlaft|schlief)$", "schlafen", VERB, 0.95),
    (r"^(laufe|läufst|läuft|lauft|lief)$", "laufen", VERB, 0.95),
    (r"^(gehe|gehst|geht|ging)$", "gehen", VERB, 0.95),
    (r"^(komme|kommst|kommt|kam)$", "kommen", VERB, 0.95),
    // Weak verbs. Stems ending in -d/-t insert an -e- before -st/-t.
    (r"^(.{2,}[dt])est$", "${1}en", VERB, 0.72),
    (r"^(.{2,}[dt])et$", "${1}en", VERB, 0.72),
    (r"^(.{2,})e$", "${1}en", VERB, 0.7),
    (r"^(.{2,})st$", "${1}en", VERB, 0.7),
    (r"^(.{2,})t$", "${1}en", VERB, 0.55),
    // Noun case and plural endings
    (r"^(.{3,})es$", "${1}", NOUN, 0.5),
    (r"^(.{3,})er$", "${1}", NOUN, 0.45),
];

#[cfg(test)]
mod tests {
    use super::super::rules::table_for;
    use vocab_types::Language;

    fn reduce(word: &str) -> Option<String> {
        table_for(Language::German)
            .reduce(word)
            .map(|(_, lemma)| lemma)
    }

    #[test]
    fn test_strong_verbs() {
        assert_eq!(reduce("bin").as_deref(), Some("sein"));
        assert_eq!(reduce("liest").as_deref(), Some("lesen"));
        assert_eq!(reduce("lese").as_deref(), Some("lesen"));
    }

    #[test]
    fn test_weak_verbs() {
        assert_eq!(reduce("schreibst").as_deref(), Some("schreiben"));
        assert_eq!(reduce("lerne").as_deref(), Some("lernen"));
        assert_eq!(reduce("lernt").as_deref(), Some("lernen"));
        assert_eq!(reduce("arbeitet").as_deref(), Some("arbeiten"));
        assert_eq!(reduce("arbeitest").as_deref(), Some("arbeiten"));
    }

    #[test]
    fn test_infinitive_falls_through() {
        assert_eq!(reduce("lesen"), None);
        assert_eq!(reduce("spielen"), None);
    }

    #[test]
    fn test_noun_endings() {
        assert_eq!(reduce("hundes").as_deref(), Some("hund"));
        assert_eq!(reduce("kinder").as_deref(), Some("kind"));
    }
}
