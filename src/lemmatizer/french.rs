//! French lemma rules

use vocab_types::PartOfSpeech;

use super::rules::RuleSpec;

const VERB: Option<PartOfSpeech> = Some(PartOfSpeech::Verb);
const NOUN: Option<PartOfSpeech> = Some(PartOfSpeech::Noun);

pub const DICTIONARY_EXCLUSIONS: &[&str] = &[];

pub const RULES: &[RuleSpec] = &[
    // Irregular verbs
    (r"^(suis|es|est|sommes|êtes|sont|étais|était|étaient|été)$", "être", VERB, 0.95),
    (r"^(ai|as|avons|avez|ont|avais|avait|avaient|eu)$", "avoir", VERB, 0.95),
    (r"^(vais|vas|va|allons|allez|vont|allé|allée)$", "aller", VERB, 0.95),
    (r"^(fais|fait|faisons|faites|font)$", "faire", VERB, 0.95),
    (r"^(peux|peut|pouvons|pouvez|peuvent)$", "pouvoir", VERB, 0.95),
    (r"^(veux|veut|voulons|voulez|veulent|voulu)$", "vouloir", VERB, 0.95),
    (r"^(dois|doit|devons|devez|doivent)$", "devoir", VERB, 0.95),
    (r"^(sais|sait|savons|savez|savent)$", "savoir", VERB, 0.95),
    (r"^(prends|prend|prenons|prenez|prennent|pris)$", "prendre", VERB, 0.95),
    (r"^(viens|vient|venons|venez|viennent|venu)$", "venir", VERB, 0.95),
    (r"^(dis|dit|disons|dites|disent)$", "dire", VERB, 0.95),
    (r"^(vois|voit|voyons|voyez|voient)$", "voir", VERB, 0.95),
    (r"^(mets|met|mettons|mettez|mettent)$", "mettre", VERB, 0.95),
    // Stem-changing -er verbs
    (r"^préf[èé]r(e|es|ent|ons|ez)$", "préférer", VERB, 0.95),
    (r"^achèt(e|es|ent)$", "acheter", VERB, 0.92),
    (r"^appell(e|es|ent)$", "appeler", VERB, 0.92),
    // Second group (-ir with -iss- plural stem)
    (r"^(.{2,})issons$", "${1}ir", VERB, 0.9),
    (r"^(.{2,})issez$", "${1}ir", VERB, 0.9),
    (r"^(.{2,})issent$", "${1}ir", VERB, 0.9),
    // Spelling-preserving -ger / -cer first plural
    (r"^(.{2,})geons$", "${1}ger", VERB, 0.88),
    (r"^(.{2,})çons$", "${1}cer", VERB, 0.88),
    // First group (-er)
    (r"^(.{2,})ons$", "${1}er", VERB, 0.8),
    (r"^(.{2,})ez$", "${1}er", VERB, 0.8),
    (r"^(.{2,})ent$", "${1}er", VERB, 0.75),
    (r"^(.{2,})es$", "${1}er", VERB, 0.65),
    (r"^(.{2,})e$", "${1}er", VERB, 0.6),
    (r"^(.{2,})is$", "${1}ir", VERB, 0.6),
    (r"^(.{2,})it$", "${1}ir", VERB, 0.6),
    (r"^(.{3,})é$", "${1}er", VERB, 0.55),
    // Noun plurals; words already ending in -s in the singular are left alone
    (r"^(.{2,})aux$", "${1}al", NOUN, 0.5),
    (r"^(.{2,}[^s])s$", "${1}", NOUN, 0.45),
    (r"^(.{2,}[aeo]u)x$", "${1}", NOUN, 0.45),
];

#[cfg(test)]
mod tests {
    use super::super::rules::table_for;
    use vocab_types::Language;

    fn reduce(word: &str) -> Option<String> {
        table_for(Language::French)
            .reduce(word)
            .map(|(_, lemma)| lemma)
    }

    #[test]
    fn test_irregular_and_stem_changing() {
        assert_eq!(reduce("suis").as_deref(), Some("être"));
        assert_eq!(reduce("préfère").as_deref(), Some("préférer"));
        assert_eq!(reduce("achète").as_deref(), Some("acheter"));
    }

    #[test]
    fn test_second_group_plural() {
        assert_eq!(reduce("finissent").as_deref(), Some("finir"));
        assert_eq!(reduce("choisissons").as_deref(), Some("choisir"));
        assert_eq!(reduce("choisit").as_deref(), Some("choisir"));
    }

    #[test]
    fn test_first_group() {
        assert_eq!(reduce("mangeons").as_deref(), Some("manger"));
        assert_eq!(reduce("parlons").as_deref(), Some("parler"));
        assert_eq!(reduce("parlent").as_deref(), Some("parler"));
        assert_eq!(reduce("parle").as_deref(), Some("parler"));
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(reduce("journaux").as_deref(), Some("journal"));
        assert_eq!(reduce("chats").as_deref(), Some("chat"));
        // A trailing double "s" is never stripped
        assert_eq!(reduce("stress"), None);
        assert_eq!(reduce("pas"), None);
    }
}
