use crate::{
    AnnotatedSentence, AnnotatedWord, AttachmentComparator, Layer, NamedEntityType, ParseScore,
    SentenceDisplay, WordCodec,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("sentences")
        .join(name)
}

/// Load a sentence file from the fixtures directory.
fn load_sentence(name: &str) -> AnnotatedSentence {
    AnnotatedSentence::from_file(&fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

fn rendered(phrases: &[crate::AnnotatedPhrase<'_>]) -> String {
    phrases
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_fixture_dependency_groups() {
    let sentence = load_sentence("0000.dev");
    assert_eq!(sentence.word_count(), 12);
    assert_eq!(sentence.file_name(), Some("0000.dev"));

    let groups = sentence.dependency_groups(11);
    assert_eq!(groups.len(), 3);
    insta::assert_snapshot!(rendered(&groups), @r###"
    ADVCL@0: devasa ölçekli yeni kanunu kullanarak
    OBJ@5: karmaşık ve çetrefilli dilde kavgayı
    PUNCT@11: .
    "###);
}

#[test]
fn test_fixture_shallow_parse_groups() {
    let sentence = load_sentence("0000.dev");

    let groups = sentence.shallow_parse_groups();
    assert_eq!(groups.len(), 4);
    insta::assert_snapshot!(rendered(&groups), @r###"
    ZARF_TÜMLECİ@0: devasa ölçekli yeni kanunu kullanarak
    NESNE@5: karmaşık ve çetrefilli dilde kavgayı
    YÜKLEM@10: bulandırdı
    HİÇBİRİ@11: .
    "###);
}

#[test]
fn test_fixture_stems_and_predicates() {
    let sentence = load_sentence("0000.dev");

    assert_eq!(
        sentence.to_stems(),
        "devasa ölçek yeni kanun kullan karmaşık ve çetrefil dil kavga bulan ."
    );
    assert_eq!(sentence.nearest_predicate(0), Some("bulandırdı"));
    assert_eq!(sentence.nearest_predicate(11), Some("bulandırdı"));
    assert_eq!(sentence.nearest_predicate(12), None);
    assert!(sentence.contains_predicate());
    assert!(!sentence.contains_frame_predicate());

    let framesets: HashSet<String> = ["TUR10-0112340".to_string()].into_iter().collect();
    let candidates = sentence.predicate_candidates(&framesets);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name(), "bulandırdı");

    // kullanarak is derived from a verb but surfaces as an adverb
    let framesets: HashSet<String> = ["TUR10-0518830".to_string()].into_iter().collect();
    assert!(sentence.predicate_candidates(&framesets).is_empty());
    assert!(sentence.predicate_frame_candidates(&HashSet::<String>::new()).is_empty());

    let lexical_units: HashSet<String> = ["TUR10-0112340".to_string()].into_iter().collect();
    let frame_candidates = sentence.predicate_frame_candidates(&lexical_units);
    assert_eq!(frame_candidates.len(), 1);
    assert_eq!(frame_candidates[0].name(), "bulandırdı");
}

#[test]
fn test_fixture_words_round_trip() {
    let content = fs::read_to_string(fixture_path("0000.dev")).unwrap();
    let line = content.lines().next().unwrap();
    let sentence: AnnotatedSentence = line.parse().unwrap();
    assert_eq!(sentence.to_string(), line);

    for (token, word) in line.split(' ').zip(sentence.words()) {
        assert_eq!(&word.to_string(), token);
        let again: AnnotatedWord = word.to_string().parse().unwrap();
        assert_eq!(&again, word);
    }

    let last = sentence.word(11).unwrap();
    assert_eq!(last.semantic(), None);
    assert_eq!(last.named_entity(), Some(NamedEntityType::None));
    assert!(!last.present_layers().contains(&Layer::Semantics));
}

#[test]
fn test_fixture_universal_dependency_format() {
    let sentence = load_sentence("0000.dev");
    let expected = [
        "# sent_id = tr_0000.dev",
        "# text = devasa ölçekli yeni kanunu kullanarak karmaşık ve çetrefilli dilde kavgayı bulandırdı .",
        "1\tdevasa\tdevasa\tADJ\t_\t_\t2\tamod\t_\t_",
        "2\tölçekli\tölçek\tADJ\t_\t_\t5\tobl\t_\t_",
        "3\tyeni\tyeni\tADJ\t_\t_\t4\tamod\t_\t_",
        "4\tkanunu\tkanun\tNOUN\t_\tCase=Acc|Number=Sing|Person=3\t5\tobj\t_\t_",
        "5\tkullanarak\tkullan\tADV\t_\t_\t11\tadvcl\t_\t_",
        "6\tkarmaşık\tkarmaşık\tADJ\t_\t_\t9\tamod\t_\t_",
        "7\tve\tve\tCCONJ\t_\t_\t8\tcc\t_\t_",
        "8\tçetrefilli\tçetrefil\tADJ\t_\t_\t6\tconj\t_\t_",
        "9\tdilde\tdil\tNOUN\t_\tCase=Loc|Number=Sing|Person=3\t10\tnmod\t_\t_",
        "10\tkavgayı\tkavga\tNOUN\t_\tCase=Acc|Number=Sing|Person=3\t11\tobj\t_\t_",
        "11\tbulandırdı\tbulan\tVERB\t_\tEvident=Fh|Number=Sing|Person=3|Polarity=Pos|Tense=Past|Voice=Cau\t0\troot\t_\t_",
        "12\t.\t.\tPUNCT\t_\t_\t11\tpunct\t_\t_",
    ];
    assert_eq!(
        sentence.to_universal_dependency_format(Some("tr_")),
        format!("{}\n\n", expected.join("\n"))
    );
}

#[test]
fn test_english_universal_dependency_format() {
    let sentence = load_sentence("0001.train");
    let expected = [
        "# sent_id = 0001.train",
        "# text = Dogs bark .",
        "1\tDogs\tdog\tNOUN\t_\tNumber=Plur\t2\tnsubj\t_\t_",
        "2\tbark\tbark\tVERB\t_\tMood=Ind|Tense=Pres|VerbForm=Fin\t0\troot\t_\t_",
        "3\t.\t.\tPUNCT\t_\tPunctType=Peri\t2\tpunct\t_\t_",
    ];
    assert_eq!(
        sentence.to_universal_dependency_format(None),
        format!("{}\n\n", expected.join("\n"))
    );
}

#[test]
fn test_remove_word_then_regroup() {
    let mut sentence = load_sentence("0000.dev");

    // drop "ve": "çetrefilli" keeps its head, everything after shifts down
    let removed = sentence.remove_word(6).unwrap();
    assert_eq!(removed.name(), "ve");
    assert_eq!(sentence.word_count(), 11);
    let heads: Vec<_> = sentence
        .words()
        .iter()
        .map(|word| word.universal_dependency().map(|r| r.to()))
        .collect();
    assert_eq!(
        heads,
        vec![
            Some(2),
            Some(5),
            Some(4),
            Some(5),
            Some(10),
            Some(8),
            Some(6),
            Some(9),
            Some(10),
            Some(0),
            Some(10)
        ]
    );

    let groups = sentence.dependency_groups(10);
    insta::assert_snapshot!(rendered(&groups), @r###"
    ADVCL@0: devasa ölçekli yeni kanunu kullanarak
    OBJ@5: karmaşık çetrefilli dilde kavgayı
    PUNCT@10: .
    "###);
}

#[test]
fn test_compare_fixture_against_noisy_parse() {
    let gold = load_sentence("0000.dev");
    assert_eq!(gold.compare_parses(&gold), ParseScore::new(12, 12, 12, 12));

    let mut predicted = gold.clone();
    // wrong head for "devasa", wrong label for "."
    predicted.word_mut(0).unwrap().set_universal_dependency(4, "AMOD");
    predicted.word_mut(11).unwrap().set_universal_dependency(11, "DEP");
    predicted.word_mut(6).unwrap().clear_universal_dependency();

    let score = gold.compare_parses_with(&predicted, &AttachmentComparator);
    assert_eq!(score, ParseScore::new(9, 10, 10, 11));
}

#[test]
fn test_default_language_from_codec() {
    let sentence = AnnotatedSentence::parse_with("dogs bark", &WordCodec::new(crate::Language::English));
    assert_eq!(sentence.to_string(), "{english=dogs} {english=bark}");
}

#[test]
fn test_fixture_display() {
    let sentence = load_sentence("0001.train");
    let display = SentenceDisplay::new(&sentence)
        .with_layer(Layer::PosTag)
        .with_dependencies();

    insta::assert_snapshot!(display, @r###"
    Dogs  bark  .
    ╰──╯NNS
          ╰──╯VBP
                ╰.
    └─NSUBJ─>bark
          └─ROOT
                └─PUNCT─>bark
    "###);
}
