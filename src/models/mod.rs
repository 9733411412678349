mod question;
mod vocab;

pub use question::{QuizItem, SampledQuestion};
pub use vocab::{Sentence, VocabCard};

/// Which tab of the drill is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Vocabulary cards and example sentences.
    #[default]
    Study,
    /// The randomized multiple-choice challenge.
    Quiz,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Study => Tab::Quiz,
            Tab::Quiz => Tab::Study,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Study => 0,
            Tab::Quiz => 1,
        }
    }
}
