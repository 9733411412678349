use serde::Deserialize;

/// A candidate quiz question as supplied by the host.
///
/// `correct_answer` is compared against the options by exact string
/// equality, so it must be spelled exactly like one of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizItem {
    pub prompt: String,
    /// Text handed to the speech service. Empty means the question has no audio.
    #[serde(default)]
    pub audio_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub hint: String,
}

impl QuizItem {
    pub fn new<S: Into<String>>(
        prompt: S,
        audio_text: S,
        options: Vec<String>,
        correct_answer: S,
        hint: S,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            audio_text: audio_text.into(),
            options,
            correct_answer: correct_answer.into(),
            hint: hint.into(),
        }
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_text.trim().is_empty()
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// A pool item drawn into a session, with its option order fixed for the
/// lifetime of that session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledQuestion {
    pub item: QuizItem,
    pub shuffled_options: Vec<String>,
}

impl SampledQuestion {
    pub fn prompt(&self) -> &str {
        &self.item.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.shuffled_options
    }

    pub fn correct_answer(&self) -> &str {
        &self.item.correct_answer
    }

    pub fn hint(&self) -> &str {
        &self.item.hint
    }
}
