//! Spanish lemma rules

use vocab_types::PartOfSpeech;

use super::rules::RuleSpec;

const VERB: Option<PartOfSpeech> = Some(PartOfSpeech::Verb);
const NOUN: Option<PartOfSpeech> = Some(PartOfSpeech::Noun);

/// Conjugated forms that also exist as standalone store entries but must
/// still be reduced
pub const DICTIONARY_EXCLUSIONS: &[&str] = &["prefiero", "como", "hablo"];

pub const RULES: &[RuleSpec] = &[
    // Stem-changing verbs. Generic suffix stripping gets these wrong
    // ("prefiero" would become "prefierar").
    (r"^(prefiero|prefieres|prefiere|prefieren|prefirió|prefirieron)$", "preferir", VERB, 0.95),
    (r"^(puedo|puedes|puede|pueden|pude|pudo|pudieron)$", "poder", VERB, 0.95),
    (r"^(pido|pides|pide|piden|pidió|pidieron)$", "pedir", VERB, 0.95),
    (r"^(quiero|quieres|quiere|quieren|quise|quiso)$", "querer", VERB, 0.95),
    (r"^(pienso|piensas|piensa|piensan)$", "pensar", VERB, 0.95),
    (r"^(duermo|duermes|duerme|duermen|durmió)$", "dormir", VERB, 0.95),
    (r"^(juego|juegas|juega|juegan)$", "jugar", VERB, 0.95),
    (r"^(empiezo|empiezas|empieza|empiezan|empecé)$", "empezar", VERB, 0.95),
    (r"^(vengo|vienes|viene|vienen|venimos|venís)$", "venir", VERB, 0.95),
    // Irregular verbs
    (r"^(soy|eres|es|somos|sois|son|era|eras|éramos|eran)$", "ser", VERB, 0.95),
    (r"^(estoy|estás|está|estamos|estáis|están|estuve|estuvo|estuvieron)$", "estar", VERB, 0.95),
    (r"^(tengo|tienes|tiene|tienen|tenemos|tenéis|tuve|tuviste|tuvo|tuvimos|tuvieron)$", "tener", VERB, 0.95),
    (r"^(hago|haces|hace|hacen|hacemos|hacéis|hice|hiciste|hizo|hicimos|hicieron)$", "hacer", VERB, 0.95),
    (r"^(digo|dices|dice|dicen|decimos|dije|dijo|dijeron)$", "decir", VERB, 0.95),
    (r"^(sé|sabes|sabe|saben|sabemos|supe|supo)$", "saber", VERB, 0.95),
    (r"^(he|has|ha|han|hemos|hubo)$", "haber", VERB, 0.95),
    (r"^(veo|ves|vi|vio|vieron)$", "ver", VERB, 0.95),
    (r"^(doy|di|dio|dieron)$", "dar", VERB, 0.95),
    (r"^(salgo)$", "salir", VERB, 0.95),
    (r"^(pongo|puse|puso|pusieron)$", "poner", VERB, 0.95),
    (r"^(conozco)$", "conocer", VERB, 0.95),
    // -er/-ir verbs whose first person would otherwise be read as -ar
    (r"^(como)$", "comer", VERB, 0.95),
    (r"^(bebo)$", "beber", VERB, 0.95),
    (r"^(leo|lees|lee|leen|leemos)$", "leer", VERB, 0.95),
    (r"^(aprendo)$", "aprender", VERB, 0.95),
    (r"^(escribo|escribes|escribe|escriben)$", "escribir", VERB, 0.95),
    (r"^(vivo|vives|vive|viven|viví|viviste|vivió|vivisteis|vivieron)$", "vivir", VERB, 0.95),
    (r"^(abro|abres|abre|abren)$", "abrir", VERB, 0.95),
    // Present tense, plural persons
    (r"^(.{2,})amos$", "${1}ar", VERB, 0.85),
    (r"^(.{2,})emos$", "${1}er", VERB, 0.85),
    (r"^(.{2,})imos$", "${1}ir", VERB, 0.85),
    (r"^(.{2,})áis$", "${1}ar", VERB, 0.85),
    (r"^(.{2,})éis$", "${1}er", VERB, 0.85),
    (r"^(.{2,})ís$", "${1}ir", VERB, 0.85),
    // Gerund and participle
    (r"^(.{2,})ando$", "${1}ar", VERB, 0.8),
    (r"^(.{2,})iendo$", "${1}er", VERB, 0.75),
    (r"^(.{2,})ado$", "${1}ar", VERB, 0.7),
    (r"^(.{2,})ido$", "${1}er", VERB, 0.65),
    // Preterite
    (r"^(.{2,})aron$", "${1}ar", VERB, 0.8),
    (r"^(.{2,})asteis$", "${1}ar", VERB, 0.78),
    (r"^(.{2,})isteis$", "${1}er", VERB, 0.78),
    (r"^(.{2,})ieron$", "${1}er", VERB, 0.75),
    (r"^(.{2,})aste$", "${1}ar", VERB, 0.75),
    (r"^(.{2,})iste$", "${1}er", VERB, 0.75),
    (r"^(.{2,})ió$", "${1}er", VERB, 0.72),
    (r"^(.{2,})ó$", "${1}ar", VERB, 0.7),
    (r"^(.{2,})é$", "${1}ar", VERB, 0.7),
    (r"^(.{2,})í$", "${1}er", VERB, 0.6),
    // Present tense, singular persons and third plural
    (r"^(.{2,})as$", "${1}ar", VERB, 0.65),
    (r"^(.{2,})an$", "${1}ar", VERB, 0.65),
    (r"^(.{2,})es$", "${1}er", VERB, 0.65),
    (r"^(.{2,})en$", "${1}er", VERB, 0.65),
    (r"^(.{2,})o$", "${1}ar", VERB, 0.6),
    (r"^(.{2,})a$", "${1}ar", VERB, 0.5),
    (r"^(.{2,})e$", "${1}er", VERB, 0.5),
    // Noun plurals, kept below every verb rule
    (r"^(.{2,}[aeiouáéó])s$", "${1}", NOUN, 0.45),
    (r"^(.{2,})ces$", "${1}z", NOUN, 0.42),
    (r"^(.{2,}[^aeiou])es$", "${1}", NOUN, 0.4),
];
