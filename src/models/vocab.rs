/// A vocabulary card shown on the study tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabCard {
    pub amis: &'static str,
    pub chinese: &'static str,
    pub icon: &'static str,
    pub source: &'static str,
    /// Morphological breakdown, e.g. root plus affix.
    pub morph: &'static str,
}

/// An example sentence shown under the vocabulary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    pub amis: &'static str,
    pub chinese: &'static str,
    pub icon: &'static str,
    pub source: &'static str,
}
