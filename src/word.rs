//! A single word with all of its annotation layers.

use crate::layers::{
    ArgumentList, FrameElementList, Language, Layer, MetamorphicParse, MorphologicalParse,
    NamedEntityType, PolarityType, Slot, UniversalDependencyRelation,
};
use crate::resources::Gazetteer;
use crate::universal;

/// A surface token plus an optional value for every annotation layer.
///
/// Layers are independent: a word built by the codec holds exactly the layers
/// its encoding carried, and every other accessor returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedWord {
    name: String,
    language: Language,
    parse: Option<MorphologicalParse>,
    metamorphic_parse: Option<MetamorphicParse>,
    semantic: Option<String>,
    named_entity: Option<NamedEntityType>,
    argument_list: Option<ArgumentList>,
    shallow_parse: Option<String>,
    universal_dependency: Option<UniversalDependencyRelation>,
    frame_element_list: Option<FrameElementList>,
    slot: Option<Slot>,
    polarity: Option<PolarityType>,
    ccg: Option<String>,
    pos_tag: Option<String>,
}

impl AnnotatedWord {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            language,
            parse: None,
            metamorphic_parse: None,
            semantic: None,
            named_entity: None,
            argument_list: None,
            shallow_parse: None,
            universal_dependency: None,
            frame_element_list: None,
            slot: None,
            polarity: None,
            ccg: None,
            pos_tag: None,
        }
    }

    /// A word produced by the morphological analyzer: the parse is set and the
    /// named-entity layer starts as `NONE`.
    pub fn with_parse(name: impl Into<String>, language: Language, parse: MorphologicalParse) -> Self {
        let mut word = Self::new(name, language);
        word.parse = Some(parse);
        word.named_entity = Some(NamedEntityType::None);
        word
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn parse(&self) -> Option<&MorphologicalParse> {
        self.parse.as_ref()
    }

    pub fn set_parse(&mut self, parse: Option<MorphologicalParse>) {
        self.parse = parse;
    }

    pub fn metamorphic_parse(&self) -> Option<&MetamorphicParse> {
        self.metamorphic_parse.as_ref()
    }

    pub fn set_metamorphic_parse(&mut self, parse: Option<MetamorphicParse>) {
        self.metamorphic_parse = parse;
    }

    /// Sense identifier of the word.
    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }

    pub fn set_semantic(&mut self, semantic: Option<String>) {
        self.semantic = semantic;
    }

    pub fn named_entity(&self) -> Option<NamedEntityType> {
        self.named_entity
    }

    pub fn set_named_entity(&mut self, named_entity: Option<NamedEntityType>) {
        self.named_entity = named_entity;
    }

    pub fn argument_list(&self) -> Option<&ArgumentList> {
        self.argument_list.as_ref()
    }

    pub fn argument_list_mut(&mut self) -> Option<&mut ArgumentList> {
        self.argument_list.as_mut()
    }

    pub fn set_argument_list(&mut self, argument_list: Option<ArgumentList>) {
        self.argument_list = argument_list;
    }

    pub fn shallow_parse(&self) -> Option<&str> {
        self.shallow_parse.as_deref()
    }

    pub fn set_shallow_parse(&mut self, shallow_parse: Option<String>) {
        self.shallow_parse = shallow_parse;
    }

    pub fn universal_dependency(&self) -> Option<&UniversalDependencyRelation> {
        self.universal_dependency.as_ref()
    }

    /// Sets the relation to head `to` with `label`. A negative `to` clears it.
    pub fn set_universal_dependency(&mut self, to: i64, label: &str) {
        self.universal_dependency = usize::try_from(to)
            .ok()
            .map(|to| UniversalDependencyRelation::new(to, label));
    }

    pub fn clear_universal_dependency(&mut self) {
        self.universal_dependency = None;
    }

    pub fn frame_element_list(&self) -> Option<&FrameElementList> {
        self.frame_element_list.as_ref()
    }

    pub fn frame_element_list_mut(&mut self) -> Option<&mut FrameElementList> {
        self.frame_element_list.as_mut()
    }

    pub fn set_frame_element_list(&mut self, frame_element_list: Option<FrameElementList>) {
        self.frame_element_list = frame_element_list;
    }

    pub fn slot(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    pub fn set_slot(&mut self, slot: Option<Slot>) {
        self.slot = slot;
    }

    pub fn polarity(&self) -> Option<PolarityType> {
        self.polarity
    }

    pub fn set_polarity(&mut self, polarity: Option<PolarityType>) {
        self.polarity = polarity;
    }

    pub fn ccg(&self) -> Option<&str> {
        self.ccg.as_deref()
    }

    pub fn set_ccg(&mut self, ccg: Option<String>) {
        self.ccg = ccg;
    }

    pub fn pos_tag(&self) -> Option<&str> {
        self.pos_tag.as_deref()
    }

    pub fn set_pos_tag(&mut self, pos_tag: Option<String>) {
        self.pos_tag = pos_tag;
    }

    /// Morphological root when a parse is present, the surface form otherwise.
    pub fn stem(&self) -> &str {
        self.parse
            .as_ref()
            .map_or(self.name.as_str(), MorphologicalParse::root)
    }

    /// True when both the root and the surface part of speech are `VERB`.
    pub fn is_verb(&self) -> bool {
        self.parse.as_ref().map_or(false, MorphologicalParse::is_root_verb)
    }

    /// Encoded value of `layer`, or `None` when the layer is absent.
    pub fn layer_info(&self, layer: Layer) -> Option<String> {
        match layer {
            Layer::MorphologicalAnalysis => self.parse.as_ref().map(ToString::to_string),
            Layer::MetaMorphemes => self.metamorphic_parse.as_ref().map(ToString::to_string),
            Layer::Semantics => self.semantic.clone(),
            Layer::NamedEntity => self.named_entity.map(|ne| ne.name().to_string()),
            Layer::Propbank => self.argument_list.as_ref().map(ToString::to_string),
            Layer::ShallowParse => self.shallow_parse.clone(),
            Layer::UniversalDependency => self
                .universal_dependency
                .as_ref()
                .map(UniversalDependencyRelation::encode),
            Layer::Framenet => self.frame_element_list.as_ref().map(ToString::to_string),
            Layer::Slot => self.slot.as_ref().map(ToString::to_string),
            Layer::Polarity => self.polarity.map(|p| p.name().to_string()),
            Layer::Ccg => self.ccg.clone(),
            Layer::PosTag => self.pos_tag.clone(),
        }
    }

    /// Decodes `value` into `layer`. Returns `false` and leaves the layer
    /// untouched when the value cannot be read (empty, or a malformed
    /// dependency relation).
    pub fn set_layer(&mut self, layer: Layer, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match layer {
            Layer::MorphologicalAnalysis => self.parse = Some(MorphologicalParse::new(value)),
            Layer::MetaMorphemes => self.metamorphic_parse = Some(MetamorphicParse::new(value)),
            Layer::Semantics => self.semantic = Some(value.to_string()),
            Layer::NamedEntity => self.named_entity = Some(NamedEntityType::from_name(value)),
            Layer::Propbank => self.argument_list = Some(ArgumentList::parse(value)),
            Layer::ShallowParse => self.shallow_parse = Some(value.to_string()),
            Layer::UniversalDependency => match UniversalDependencyRelation::parse(value) {
                Some(relation) => self.universal_dependency = Some(relation),
                None => return false,
            },
            Layer::Framenet => self.frame_element_list = Some(FrameElementList::parse(value)),
            Layer::Slot => self.slot = Some(Slot::parse(value)),
            Layer::Polarity => self.polarity = Some(PolarityType::parse(value)),
            Layer::Ccg => self.ccg = Some(value.to_string()),
            Layer::PosTag => self.pos_tag = Some(value.to_string()),
        }
        true
    }

    /// Layers currently holding a value, in canonical order.
    pub fn present_layers(&self) -> Vec<Layer> {
        Layer::ALL
            .iter()
            .copied()
            .filter(|&layer| self.layer_info(layer).is_some())
            .collect()
    }

    /// Universal POS tag, from the parse for Turkish and from the Penn tag for English.
    pub fn universal_dependency_pos(&self) -> Option<&'static str> {
        match self.language {
            Language::Turkish => self.parse.as_ref().map(universal::turkish_pos),
            Language::English => self.pos_tag.as_deref().and_then(universal::penn_pos),
            Language::Persian => None,
        }
    }

    /// Universal morphological features, already sorted.
    pub fn universal_dependency_features(&self) -> Vec<String> {
        match self.language {
            Language::Turkish => self
                .parse
                .as_ref()
                .map(|parse| universal::turkish_features(parse, universal::turkish_pos(parse)))
                .unwrap_or_default(),
            Language::English => self
                .pos_tag
                .as_deref()
                .map(universal::penn_features)
                .unwrap_or_default(),
            Language::Persian => Vec::new(),
        }
    }

    fn universal_lemma(&self) -> &str {
        match self.language {
            Language::English => self
                .metamorphic_parse
                .as_ref()
                .map_or(self.name.as_str(), MetamorphicParse::root),
            _ => self.stem(),
        }
    }

    /// The nine CoNLL-U columns after the index column.
    ///
    /// Head and relation are written only when the relation points inside a
    /// sentence of `sentence_length` words.
    pub fn universal_dependency_format(&self, sentence_length: usize) -> String {
        let upos = match self.universal_dependency_pos() {
            Some(upos) => upos,
            None => return format!("{0}\t{0}\t_\t_\t_\t_\t_\t_\t_", self.name),
        };
        let features = self.universal_dependency_features();
        let features = if features.is_empty() {
            "_".to_string()
        } else {
            features.join("|")
        };
        let head = match &self.universal_dependency {
            Some(relation) if relation.to() <= sentence_length => {
                format!("{}\t{}", relation.to(), relation.label().to_lowercase())
            }
            _ => "_\t_".to_string(),
        };
        format!(
            "{}\t{}\t{}\t_\t{}\t{}\t_\t_",
            self.name,
            self.universal_lemma(),
            upos,
            features,
            head
        )
    }

    /// Tags the word with the gazetteer's label when its lowercased surface form
    /// (or the part before an apostrophe) is listed and the parse marks a proper noun.
    pub fn check_gazetteer<G: Gazetteer + ?Sized>(&mut self, gazetteer: &G) {
        let is_proper = self
            .parse
            .as_ref()
            .map_or(false, |parse| parse.contains_tag("PROP"));
        if !is_proper {
            return;
        }
        let lowercase = turkish_lowercase(&self.name);
        let listed = gazetteer.contains(&lowercase)
            || lowercase
                .split_once('\'')
                .map_or(false, |(stem, _)| gazetteer.contains(stem));
        if listed {
            self.named_entity = Some(NamedEntityType::from_name(gazetteer.label()));
        }
    }
}

/// Lowercases with the Turkish dotted/dotless i rules.
pub fn turkish_lowercase(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' => vec!['ı'],
            'İ' => vec!['i'],
            _ => c.to_lowercase().collect(),
        })
        .collect()
}
