//! Static tables mapping language-specific tags to universal POS tags and
//! universal morphological features.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use crate::layers::MorphologicalParse;

static PENN_POS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let groups: &[(&[&str], &str)] = &[
        (&["#", "$", "SYM"], "SYM"),
        (&["\"", ",", "-LRB-", "-RRB-", ".", ":", "``", "HYPH"], "PUNCT"),
        (&["AFX", "JJ", "JJR", "JJS"], "ADJ"),
        (&["CC"], "CCONJ"),
        (&["CD"], "NUM"),
        (&["DT", "PDT", "PRP$", "WDT", "WP$"], "DET"),
        (&["IN", "RP"], "ADP"),
        (&["FW", "LS", "NIL"], "X"),
        (&["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"], "VERB"),
        (
            &["MD", "AUX:VB", "AUX:VBD", "AUX:VBG", "AUX:VBN", "AUX:VBP", "AUX:VBZ"],
            "AUX",
        ),
        (&["NN", "NNS"], "NOUN"),
        (&["NNP", "NNPS"], "PROPN"),
        (&["POS", "TO"], "PART"),
        (&["EX", "PRP", "WP"], "PRON"),
        (&["RB", "RBR", "RBS", "WRB"], "ADV"),
        (&["UH"], "INTJ"),
    ];
    groups
        .iter()
        .flat_map(|(tags, upos)| tags.iter().map(move |tag| (*tag, *upos)))
        .collect()
});

static PENN_FEATURES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let groups: &[(&[&str], &[&str])] = &[
        (&["\""], &["PunctSide=Fin", "PunctType=Quot"]),
        (&[","], &["PunctType=Comm"]),
        (&["-LRB-"], &["PunctSide=Ini", "PunctType=Brck"]),
        (&["-RRB-"], &["PunctSide=Fin", "PunctType=Brck"]),
        (&["."], &["PunctType=Peri"]),
        (&["``"], &["PunctSide=Ini", "PunctType=Quot"]),
        (&["HYPH"], &["PunctType=Dash"]),
        (&["AFX"], &["Hyph=Yes"]),
        (&["JJ", "RB"], &["Degree=Pos"]),
        (&["JJR", "RBR"], &["Degree=Cmp"]),
        (&["JJS", "RBS"], &["Degree=Sup"]),
        (&["CD"], &["NumType=Card"]),
        (&["DT"], &["PronType=Art"]),
        (&["PDT"], &["AdjType=Pdt"]),
        (&["PRP$"], &["Poss=Yes", "PronType=Prs"]),
        (&["WDT", "WP", "WRB"], &["PronType=Int,Rel"]),
        (&["WP$"], &["Poss=Yes", "PronType=Int,Rel"]),
        (&["FW"], &["Foreign=Yes"]),
        (&["LS"], &["NumType=Ord"]),
        (&["VB", "AUX:VB"], &["VerbForm=Inf"]),
        (&["VBD", "AUX:VBD"], &["Mood=Ind", "Tense=Past", "VerbForm=Fin"]),
        (&["VBG", "AUX:VBG"], &["Tense=Pres", "VerbForm=Part"]),
        (&["VBN", "AUX:VBN"], &["Tense=Past", "VerbForm=Part"]),
        (&["VBP", "AUX:VBP"], &["Mood=Ind", "Tense=Pres", "VerbForm=Fin"]),
        (
            &["VBZ", "AUX:VBZ"],
            &["Mood=Ind", "Number=Sing", "Person=3", "Tense=Pres", "VerbForm=Fin"],
        ),
        (&["NN", "NNP"], &["Number=Sing"]),
        (&["NNS", "NNPS"], &["Number=Plur"]),
        (&["EX"], &["PronType=Dem"]),
        (&["PRP"], &["PronType=Prs"]),
    ];
    groups
        .iter()
        .flat_map(|(tags, features)| tags.iter().map(move |tag| (*tag, *features)))
        .collect()
});

// Each morphological tag contributes (feature, value) pairs. A later tag in
// the parse overrides an earlier one for the same feature.
static TURKISH_FEATURES: Lazy<HashMap<&'static str, &'static [(&'static str, &'static str)]>> =
    Lazy::new(|| {
        let table: &[(&str, &[(&str, &str)])] = &[
            ("A1SG", &[("Number", "Sing"), ("Person", "1")]),
            ("A2SG", &[("Number", "Sing"), ("Person", "2")]),
            ("A3SG", &[("Number", "Sing"), ("Person", "3")]),
            ("A1PL", &[("Number", "Plur"), ("Person", "1")]),
            ("A2PL", &[("Number", "Plur"), ("Person", "2")]),
            ("A3PL", &[("Number", "Plur"), ("Person", "3")]),
            ("P1SG", &[("Number[psor]", "Sing"), ("Person[psor]", "1")]),
            ("P2SG", &[("Number[psor]", "Sing"), ("Person[psor]", "2")]),
            ("P3SG", &[("Number[psor]", "Sing"), ("Person[psor]", "3")]),
            ("P1PL", &[("Number[psor]", "Plur"), ("Person[psor]", "1")]),
            ("P2PL", &[("Number[psor]", "Plur"), ("Person[psor]", "2")]),
            ("P3PL", &[("Number[psor]", "Plur"), ("Person[psor]", "3")]),
            ("NOM", &[("Case", "Nom")]),
            ("ACC", &[("Case", "Acc")]),
            ("DAT", &[("Case", "Dat")]),
            ("LOC", &[("Case", "Loc")]),
            ("ABL", &[("Case", "Abl")]),
            ("GEN", &[("Case", "Gen")]),
            ("INS", &[("Case", "Ins")]),
            ("EQU", &[("Case", "Equ")]),
            ("POS", &[("Polarity", "Pos")]),
            ("NEG", &[("Polarity", "Neg")]),
            ("PAST", &[("Tense", "Past"), ("Evident", "Fh")]),
            ("NARR", &[("Tense", "Past"), ("Evident", "Nfh")]),
            ("FUT", &[("Tense", "Fut")]),
            ("AOR", &[("Tense", "Pres"), ("Aspect", "Hab")]),
            ("PROG1", &[("Tense", "Pres"), ("Aspect", "Prog")]),
            ("PROG2", &[("Tense", "Pres"), ("Aspect", "Prog")]),
            ("PRES", &[("Tense", "Pres")]),
            ("CAUS", &[("Voice", "Cau")]),
            ("PASS", &[("Voice", "Pass")]),
            ("RECIP", &[("Voice", "Rcp")]),
            ("REFLEX", &[("Voice", "Rfl")]),
            ("COND", &[("Mood", "Cnd")]),
            ("IMP", &[("Mood", "Imp")]),
            ("OPT", &[("Mood", "Opt")]),
            ("NECES", &[("Mood", "Nec")]),
            ("DESR", &[("Mood", "Des")]),
            ("ABLE", &[("Mood", "Pot")]),
            ("CARD", &[("NumType", "Card")]),
            ("ORD", &[("NumType", "Ord")]),
            ("DISTRIB", &[("NumType", "Dist")]),
            ("PASTPART", &[("VerbForm", "Part"), ("Tense", "Past")]),
            ("FUTPART", &[("VerbForm", "Part"), ("Tense", "Fut")]),
            ("PRESPART", &[("VerbForm", "Part"), ("Tense", "Pres")]),
            ("INF", &[("VerbForm", "Vnoun")]),
            ("INF2", &[("VerbForm", "Vnoun")]),
            ("INF3", &[("VerbForm", "Vnoun")]),
            ("BYDOINGSO", &[("VerbForm", "Conv")]),
            ("SINCEDOINGSO", &[("VerbForm", "Conv")]),
            ("WHEN", &[("VerbForm", "Conv")]),
            ("WHILE", &[("VerbForm", "Conv")]),
            ("AFTERDOINGSO", &[("VerbForm", "Conv")]),
            ("WITHOUTHAVINGDONESO", &[("VerbForm", "Conv")]),
            ("DEMONSP", &[("PronType", "Dem")]),
            ("PERSP", &[("PronType", "Prs")]),
            ("QUESP", &[("PronType", "Int")]),
            ("REFLEXP", &[("PronType", "Prs"), ("Reflex", "Yes")]),
        ];
        table.iter().copied().collect()
    });

/// Universal POS for a Penn Treebank tag.
pub fn penn_pos(tag: &str) -> Option<&'static str> {
    PENN_POS.get(tag).copied()
}

/// Universal features for a Penn Treebank tag, sorted.
pub fn penn_features(tag: &str) -> Vec<String> {
    let mut features: Vec<String> = PENN_FEATURES
        .get(tag)
        .map(|features| features.iter().map(|f| f.to_string()).collect())
        .unwrap_or_default();
    features.sort();
    features
}

/// Universal POS for a Turkish morphological parse. Always yields a tag;
/// unclassifiable parses fall back to `X`.
pub fn turkish_pos(parse: &MorphologicalParse) -> &'static str {
    let lemma = parse.root();
    let pos = parse.pos().unwrap_or("");
    if lemma == "değil" {
        return "AUX";
    }
    if parse.is_proper_noun() {
        return "PROPN";
    }
    match pos {
        "NOUN" => "NOUN",
        "ADJ" => "ADJ",
        "ADV" => "ADV",
        "INTERJ" => "INTJ",
        "VERB" => "VERB",
        "PUNC" => "PUNCT",
        "DET" => "DET",
        "NUM" | "DATE" | "TIME" | "FRACTION" | "PERCENT" => "NUM",
        _ if lemma == "%" => "NUM",
        "PRON" => "PRON",
        "POSTP" => "ADP",
        "QUES" => "AUX",
        "CONJ" => match lemma {
            "ki" | "eğer" | "diye" => "SCONJ",
            _ => "CCONJ",
        },
        _ => "X",
    }
}

/// Whether a Turkish feature belongs on a word tagged `upos`. Inflectional
/// groups below the last derivation still carry their tags, so a derived
/// adjective must not inherit the case and agreement of its noun stem.
fn turkish_feature_applies(name: &str, upos: &str) -> bool {
    match name {
        "Case" => matches!(upos, "NOUN" | "PROPN" | "PRON"),
        "Number" | "Number[psor]" | "Person[psor]" => {
            matches!(upos, "NOUN" | "PROPN" | "PRON" | "VERB" | "AUX")
        }
        // proper nouns take no person
        "Person" => matches!(upos, "NOUN" | "PRON" | "VERB" | "AUX"),
        "NumType" => upos == "NUM",
        "PronType" | "Reflex" => upos == "PRON",
        _ => matches!(upos, "VERB" | "AUX"),
    }
}

/// Universal features for a Turkish morphological parse whose universal POS
/// is `upos`, sorted by feature name.
pub fn turkish_features(parse: &MorphologicalParse, upos: &str) -> Vec<String> {
    let mut features = BTreeMap::new();
    for tag in parse.tags() {
        if let Some(pairs) = TURKISH_FEATURES.get(tag) {
            for (name, value) in pairs.iter() {
                if turkish_feature_applies(name, upos) {
                    features.insert(*name, *value);
                }
            }
        }
    }
    features
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect()
}
